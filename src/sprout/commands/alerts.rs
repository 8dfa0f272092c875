use crate::commands::{CmdMessage, CmdResult};
use crate::status::watering_status;
use crate::store::{PlantStore, StorageBackend};
use chrono::{DateTime, Utc};

/// One warning per plant that is due at `now`, in collection order.
pub fn run<B: StorageBackend>(store: &PlantStore<B>, now: DateTime<Utc>) -> CmdResult {
    let mut result = CmdResult::default();
    for plant in store.plants() {
        if watering_status(plant, now).needs_water() {
            result.add_message(CmdMessage::warning(format!("Water \"{}\" now!", plant.name)));
            result.affected_plants.push(plant.clone());
        }
    }
    result
}
