use clap::Parser;

mod body;
mod components;
mod config;
mod engine;
mod error;
mod input;
mod pointer;
mod renderer;
mod simulation;
mod systems;

use config::{Args, SceneConfig};
use error::Error;

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let config = SceneConfig::from_args(&args).inspect_err(|e| {
        tracing::error!(error = %e, "bad configuration");
    })?;

    tracing::info!(
        bodies = config.body_count,
        trail = config.trail_length,
        seed = config.seed,
        "starting"
    );

    engine::run(&args, config).inspect_err(|e| {
        tracing::error!(error = %e, "engine stopped");
    })
}
