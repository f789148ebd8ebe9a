use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Reads a scene description from stdin (or `--input`) and writes a PPM image to stdout (or `--output`).
#[derive(Parser, Debug)]
#[command(name = "flatray")]
#[command(about = "A flat-color ray tracer")]
pub struct Args {
    /// Pass `1` to render the built-in demo scene and ignore stdin
    pub mode: Option<String>,

    /// Render the built-in demo scene
    #[arg(long)]
    pub demo: bool,

    /// Scene description file (defaults to stdin)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Output image path; `.png` writes PNG, anything else PPM (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// TOML file with default render settings
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Logging level (defaults to "warn")
    #[arg(long)]
    pub log_level: Option<LogLevel>,

    /// Worker threads for rendering
    #[arg(long)]
    pub threads: Option<usize>,
}

impl Args {
    pub fn wants_demo(&self) -> anyhow::Result<bool> {
        match self.mode.as_deref() {
            None => Ok(self.demo),
            Some("1") => Ok(true),
            Some(other) => anyhow::bail!("unrecognized mode {:?}, only \"1\" (demo scene) is supported", other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modes() {
        let args = Args::parse_from(["flatray"]);
        assert!(!args.wants_demo().unwrap());

        let args = Args::parse_from(["flatray", "1"]);
        assert!(args.wants_demo().unwrap());

        let args = Args::parse_from(["flatray", "--demo", "-o", "out.png"]);
        assert!(args.wants_demo().unwrap());
        assert_eq!(args.output, Some(PathBuf::from("out.png")));

        let args = Args::parse_from(["flatray", "2"]);
        assert!(args.wants_demo().is_err());
    }

    #[test]
    fn test_log_level() {
        let args = Args::parse_from(["flatray", "--log-level", "debug"]);
        assert_eq!(LevelFilter::from(args.log_level.unwrap()), LevelFilter::Debug);
    }
}
