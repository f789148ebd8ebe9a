use glam::DVec3;

pub type Vector3 = DVec3;

/// Normalizes `v` in place. `v` must have nonzero length.
pub fn normify(v: &mut Vector3) {
    *v /= v.length();
}
