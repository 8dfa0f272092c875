//! # CLI Layer
//!
//! One client of the sprout library. It is the only place that reads
//! stdin, writes to the terminal, or decides exit codes.
//!
//! - Running `sprout` with no subcommand lists plants, after the once-per-run
//!   alert sweep (`Water "<name>" now!` for every plant that is due).
//! - Index arguments are positions in the list as shown with the same
//!   `--filter`/`--sort` flags, and accept ranges (`2-4`).
//! - `water` and `delete` ask for confirmation unless given `--yes`.
//! - `watch` keeps a live countdown on screen until `q` or Ctrl-C.
//!
//! ## Module Structure
//!
//! - `commands`: Dispatch and per-command handlers
//! - `render`: Card and message formatting
//! - `setup`: Argument parsing via clap
//! - `watch`: The live countdown board

mod commands;
mod render;
pub mod setup;
mod watch;

pub use commands::run;
