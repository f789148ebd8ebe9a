use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::str::FromStr;

use anyhow::Context;
use clap::Parser;
use log::{error, info, warn, LevelFilter};

use flatray::config::RenderConfig;
use flatray::environment::Environment;
use flatray::output::{save_image, write_ppm};
use flatray::parsing::parse_scene;
use flatray::render::render;

mod cli;
mod logger;

use cli::Args;
use logger::init_logger;

fn load_environment(args: &Args) -> anyhow::Result<Environment> {
    if args.wants_demo()? {
        if args.input.is_some() {
            warn!("demo scene requested, ignoring --input");
        }
        info!("using built-in demo scene");
        return Ok(Environment::demo()?);
    }

    match &args.input {
        Some(path) => {
            let file = File::open(path).with_context(|| format!("couldn't open scene {}", path.display()))?;
            let env = parse_scene(BufReader::new(file))
                .with_context(|| format!("couldn't parse scene {}", path.display()))?;
            Ok(env)
        }
        None => Ok(parse_scene(io::stdin().lock()).context("couldn't parse scene from stdin")?),
    }
}

fn run(args: &Args, config: RenderConfig) -> anyhow::Result<()> {
    if let Some(threads) = args.threads.or(config.threads) {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("couldn't configure render threads")?;
    }

    let env = load_environment(args)?;
    let image = render(&env).context("render failed")?;

    match args.output.clone().or(config.output) {
        Some(path) => {
            save_image(&image, &path).with_context(|| format!("couldn't write {}", path.display()))?;
        }
        None => {
            let stdout = io::stdout();
            let mut w = BufWriter::new(stdout.lock());
            write_ppm(&mut w, &image).context("couldn't write image to stdout")?;
        }
    }
    Ok(())
}

fn main() {
    let args = Args::parse();

    let config = args.config.as_deref().map(RenderConfig::load).transpose();
    let config_level = config
        .as_ref()
        .ok()
        .and_then(|c| c.as_ref())
        .and_then(|c| c.log_level.as_deref());
    let level = args
        .log_level
        .map(LevelFilter::from)
        .or_else(|| config_level.and_then(|l| LevelFilter::from_str(l).ok()))
        .unwrap_or(LevelFilter::Warn);
    init_logger(level);

    if let Some(l) = config_level {
        if LevelFilter::from_str(l).is_err() {
            warn!("ignoring unknown log_level {:?} in config", l);
        }
    }

    let result = config.and_then(|config| run(&args, config.unwrap_or_default()));
    if let Err(e) = result {
        error!("{:#}", e);
        std::process::exit(1);
    }
}
