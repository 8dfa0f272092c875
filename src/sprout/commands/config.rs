use crate::commands::{CmdMessage, CmdResult};
use crate::config::SproutConfig;
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

/// Reads or changes the settings kept in `dir`. An unknown key or a rejected
/// value is reported as an error message and leaves the file untouched.
pub fn run(dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut config = SproutConfig::load(dir)?;

    let outcome = match action {
        ConfigAction::ShowAll => return Ok(CmdResult::default().with_config(config)),
        ConfigAction::ShowKey(key) => config
            .get(&key)
            .map(CmdMessage::info)
            .unwrap_or_else(|| CmdMessage::error(format!("Unknown config key: {}", key))),
        ConfigAction::Set(key, value) => {
            if let Err(reason) = config.set(&key, &value) {
                let mut rejected = CmdResult::default();
                rejected.add_message(CmdMessage::error(reason));
                return Ok(rejected);
            }
            config.save(dir)?;
            let stored = config.get(&key).unwrap_or(value);
            CmdMessage::success(format!("{} set to {}", key, stored))
        }
    };

    let mut result = CmdResult::default().with_config(config);
    result.add_message(outcome);
    Ok(result)
}
