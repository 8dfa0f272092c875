use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::{DisplayIndex, ListView};
use crate::store::{PlantStore, StorageBackend};
use chrono::{DateTime, Utc};

use super::helpers::resolve_indexes;

pub fn run<B: StorageBackend>(
    store: &mut PlantStore<B>,
    view: &ListView,
    indexes: &[DisplayIndex],
    now: DateTime<Utc>,
) -> Result<CmdResult> {
    let ids: Vec<_> = resolve_indexes(store, view, indexes)?
        .into_iter()
        .map(|(_, id)| id)
        .collect();
    let watered = store.mark_watered_many(&ids, now)?;

    let mut result = CmdResult::default();
    for plant in &watered {
        result.add_message(CmdMessage::success(format!(
            "\"{}\" has been watered!",
            plant.name
        )));
    }
    Ok(result.with_affected_plants(watered))
}
