use crate::commands::{CmdResult, PlantCard};
use crate::error::{Result, SproutError};
use crate::index::{DisplayIndex, DisplayPlant, ListView};
use crate::status::watering_status;
use crate::store::{PlantStore, StorageBackend};
use chrono::{DateTime, Utc};

use super::helpers::resolve_indexes;

pub fn run<B: StorageBackend>(
    store: &PlantStore<B>,
    view: &ListView,
    indexes: &[DisplayIndex],
    now: DateTime<Utc>,
) -> Result<CmdResult> {
    let resolved = resolve_indexes(store, view, indexes)?;
    let mut cards = Vec::with_capacity(resolved.len());

    for (index, id) in resolved {
        let plant = store.get(&id).ok_or(SproutError::PlantNotFound(id))?.clone();
        let status = watering_status(&plant, now);
        cards.push(PlantCard {
            entry: DisplayPlant { plant, index },
            status,
        });
    }

    Ok(CmdResult::default().with_cards(cards))
}
