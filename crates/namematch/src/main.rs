//! namematch - Main Entry Point
//!
//! Exit status: 0 on a match (or any successful normalize/distance),
//! 1 when the names do not match, 2 on invalid configuration or input.

use clap::Parser;
use namematch::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    namematch::tracing::init_with_filter(&cli.log_level);

    match cli.run() {
        Ok(Some(output)) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Ok(None) => {
            eprintln!("no match");
            ExitCode::from(1)
        }
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::from(2)
        }
    }
}
