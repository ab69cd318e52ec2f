//! Command-line pathfinding demo.
//!
//! Run: cargo run --bin tilepath -- --size 8 --wall 3,3 --algorithm Djikstra

use std::process::ExitCode;

use clap::Parser;
use tilepath_demos::{Args, DemoConfig, init_logging, run};

fn main() -> ExitCode {
    let outcome = DemoConfig::try_from(Args::parse()).and_then(|config| {
        init_logging(config.log_level)?;
        Ok(run(&config))
    });

    match outcome {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
