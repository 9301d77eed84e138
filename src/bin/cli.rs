// src/bin/cli.rs
use clap::Parser;
use env_logger::Env;

use netrepo_scrape::cli::{self, Args};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let opts = Args::parse().into_options();
    cli::run(&opts)
}
