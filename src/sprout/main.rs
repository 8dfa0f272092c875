//! # Sprout CLI
//!
//! The binary is thin: argument parsing, rendering and the live board live
//! in `cli/`, and this file only invokes `cli::run()` and maps failure to an
//! exit code. See the library docs for the layering below the CLI.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
