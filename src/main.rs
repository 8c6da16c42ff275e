use std::path::PathBuf;
use std::process::ExitCode;

use bevy::prelude::AppExit;
use clap::Parser;
use lane_raider::common::config::{self, ConfigError};
use lane_raider::common::tunables::Tunables;
use lane_raider::game::{self, LaunchOptions};

/// Dodge and shoot down the enemies flying up your lane
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// RON file overriding gameplay tunables
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for enemy placement (overrides the config file)
    #[arg(long)]
    seed: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn tunables(&self) -> Result<Tunables, ConfigError> {
        let mut tunables = match &self.config {
            Some(path) => config::load_tunables(path)?,
            None => Tunables::default(),
        };
        if self.seed.is_some() {
            tunables.rng_seed = self.seed;
        }
        Ok(tunables)
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    let tunables = match args.tunables() {
        Ok(tunables) => tunables,
        Err(err) => {
            eprintln!("lane-raider: {err}");
            return ExitCode::FAILURE;
        }
    };

    let exit = game::run(LaunchOptions {
        tunables,
        verbose: args.verbose,
    });

    match exit {
        AppExit::Success => ExitCode::SUCCESS,
        AppExit::Error(code) => ExitCode::from(code.get()),
    }
}
