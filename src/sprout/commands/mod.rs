//! # Command Layer
//!
//! Business logic for each operation. Commands take the store and plain Rust
//! values (forms, views, display indexes, the current instant) and return a
//! [`CmdResult`]; they never print, prompt or read the clock themselves.

use crate::config::SproutConfig;
use crate::index::DisplayPlant;
use crate::model::Plant;
use crate::status::WateringStatus;

pub mod alerts;
pub mod config;
pub mod create;
pub mod delete;
pub mod edit;
pub mod helpers;
pub mod list;
pub mod view;
pub mod water;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A listed plant together with its watering status at the time of listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlantCard {
    pub entry: DisplayPlant,
    pub status: WateringStatus,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_plants: Vec<Plant>,
    pub cards: Vec<PlantCard>,
    pub config: Option<SproutConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_plants(mut self, plants: Vec<Plant>) -> Self {
        self.affected_plants = plants;
        self
    }

    pub fn with_cards(mut self, cards: Vec<PlantCard>) -> Self {
        self.cards = cards;
        self
    }

    pub fn with_config(mut self, config: SproutConfig) -> Self {
        self.config = Some(config);
        self
    }
}
