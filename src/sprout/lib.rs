//! # Sprout Architecture
//!
//! Sprout is a **plant-care tracking library** with a terminal client. It keeps
//! a collection of plants, records when each was last watered, and derives a
//! live "water again in" countdown from each plant's watering interval.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prompts, formats output                │
//! │  - Drives the live countdown board (`sprout watch`)         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Normalizes inputs (display indexes → plant ids)          │
//! │  - Owns the clock                                           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Business logic over the store, returns `CmdResult`       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - `PlantStore` over an abstract `StorageBackend`           │
//! │  - FileBackend (production), MemBackend (testing)           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ids and positions
//!
//! Plants carry a stable UUID. What the user sees is a 1-based position in
//! the current projection (filter + sort, see [`index`]). Positions are
//! translated to ids at the API boundary, so sorting or filtering the view
//! can never make a command hit the wrong plant.
//!
//! ## Time
//!
//! Nothing below the API reads the system clock. Commands and the status
//! calculator take "now" as an argument; the countdown board reads a shared
//! [`clock::Clock`]. Tests use [`clock::FixedClock`].
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Plant`, `PlantDraft`)
//! - [`status`]: Watering status and countdown arithmetic
//! - [`index`]: Display indexes, filter and sort projection
//! - [`form`]: Add/edit form model and validation
//! - [`countdown`]: Cancellable per-plant tick schedules
//! - [`clock`]: Time source abstraction
//! - [`config`]: Configuration management
//! - [`init`]: Data directory resolution and context setup
//! - [`error`]: Error types
//! - `cli`: Argument parsing and terminal rendering for the binary (not part of the lib API)

pub mod api;
pub mod clock;
pub mod commands;
pub mod config;
pub mod countdown;
pub mod error;
pub mod form;
pub mod index;
pub mod init;
pub mod model;
pub mod status;
pub mod store;
