use anyhow::Context;
use clap::Parser;
use nws_climate::cli::{args::Args, commands};
use std::process;

fn main() {
    let args = Args::parse();

    match commands::run(args).context("nws-climate failed") {
        Ok(stats) if stats.is_success() => process::exit(0),
        Ok(_stats) => {
            // Per-file failures have already been reported by the command
            process::exit(1);
        }
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}
