use std::fmt;

use crate::vector::Vector3;

/// A half-line from `origin` along `direction`, which callers keep at unit length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vector3,
    pub direction: Vector3,
}

impl Ray {
    pub const fn new(origin: Vector3, direction: Vector3) -> Ray {
        Ray { origin, direction }
    }

    pub fn at(&self, t: f64) -> Vector3 {
        self.origin + self.direction * t
    }
}

impl fmt::Display for Ray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (o, d) = (self.origin, self.direction);
        write!(
            f,
            "Origin : <{:.6},{:.6},{:.6}>, Direction : <{:.6},{:.6},{:.6}>",
            o.x, o.y, o.z, d.x, d.y, d.z
        )
    }
}
