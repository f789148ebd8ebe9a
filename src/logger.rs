use log::LevelFilter;

/// Logs go to stderr so a PPM written to stdout stays clean. `RUST_LOG` overrides `level`.
pub fn init_logger(level: LevelFilter) {
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .init();
}
