//! vtheatre CLI entry point
//!
//! Parses arguments and dispatches via cli::run, printing any error to
//! stderr and exiting non-zero. All logic lives in the CLI module.

use vtheatre::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}: {}", e.code(), e);
        std::process::exit(1);
    }
}
