// src/bin/cli.rs
use clap::Parser;
use scout_radar::cli;

fn main() {
    let _ = color_eyre::install();
    if let Err(e) = cli::run(cli::Args::parse()) {
        eprintln!("Error: {e:?}");
        std::process::exit(1);
    }
}
