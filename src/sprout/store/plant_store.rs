use super::StorageBackend;
use crate::error::{Result, SproutError};
use crate::model::{Plant, PlantDraft, PlantId, MAX_WATERING_FREQUENCY};
use chrono::{DateTime, Utc};
use log::{debug, warn};
use std::collections::HashSet;
use uuid::Uuid;

/// The plant collection plus the backend it is mirrored to.
///
/// Every mutation is write-through: the whole collection is serialized and
/// stored before the change becomes visible. If the write fails the
/// in-memory collection is left as it was.
pub struct PlantStore<B: StorageBackend> {
    backend: B,
    key: String,
    plants: Vec<Plant>,
}

impl<B: StorageBackend> PlantStore<B> {
    /// Opens the store and loads the collection stored under `key`.
    pub fn open(backend: B, key: impl Into<String>) -> Self {
        let key = key.into();
        let plants = load(&backend, &key);
        Self {
            backend,
            key,
            plants,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn plants(&self) -> &[Plant] {
        &self.plants
    }

    pub fn len(&self) -> usize {
        self.plants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plants.is_empty()
    }

    pub fn get(&self, id: &PlantId) -> Option<&Plant> {
        self.plants.iter().find(|p| p.id == *id)
    }

    pub fn position_of(&self, id: &PlantId) -> Option<usize> {
        self.plants.iter().position(|p| p.id == *id)
    }

    /// Discards the in-memory collection and reads it back from the backend.
    pub fn reload(&mut self) {
        self.plants = load(&self.backend, &self.key);
    }

    /// Writes the current collection, replacing whatever the backend held.
    pub fn save(&self) -> Result<()> {
        write(&self.backend, &self.key, &self.plants)
    }

    pub fn create(&mut self, plant: Plant) -> Result<&Plant> {
        let mut next = self.plants.clone();
        next.push(plant);
        self.commit(next)?;
        let created = &self.plants[self.plants.len() - 1];
        debug!("created plant {} ({})", created.id, created.name);
        Ok(created)
    }

    pub fn update(&mut self, id: &PlantId, draft: PlantDraft) -> Result<&Plant> {
        let position = self.require(id)?;
        self.update_at(position, draft)
    }

    pub fn delete(&mut self, id: &PlantId) -> Result<Plant> {
        let position = self.require(id)?;
        self.delete_at(position)
    }

    pub fn mark_watered(&mut self, id: &PlantId, now: DateTime<Utc>) -> Result<&Plant> {
        let position = self.require(id)?;
        self.mark_watered_at(position, now)
    }

    pub fn update_at(&mut self, position: usize, draft: PlantDraft) -> Result<&Plant> {
        self.check_bounds(position)?;
        let mut next = self.plants.clone();
        next[position].apply(draft);
        self.commit(next)?;
        let updated = &self.plants[position];
        debug!("updated plant {} ({})", updated.id, updated.name);
        Ok(updated)
    }

    pub fn delete_at(&mut self, position: usize) -> Result<Plant> {
        self.check_bounds(position)?;
        let mut next = self.plants.clone();
        let removed = next.remove(position);
        self.commit(next)?;
        debug!("deleted plant {} ({})", removed.id, removed.name);
        Ok(removed)
    }

    pub fn mark_watered_at(&mut self, position: usize, now: DateTime<Utc>) -> Result<&Plant> {
        self.check_bounds(position)?;
        let mut next = self.plants.clone();
        next[position].last_watered = Some(now);
        self.commit(next)?;
        let watered = &self.plants[position];
        debug!("watered plant {} at {}", watered.id, now.to_rfc3339());
        Ok(watered)
    }

    /// Deletes every plant in `ids` with a single write. If any id is
    /// unknown or the write fails, nothing is deleted.
    pub fn delete_many(&mut self, ids: &[PlantId]) -> Result<Vec<Plant>> {
        let mut next = self.plants.clone();
        let mut removed = Vec::with_capacity(ids.len());
        for id in ids {
            let position = next
                .iter()
                .position(|p| p.id == *id)
                .ok_or(SproutError::PlantNotFound(*id))?;
            removed.push(next.remove(position));
        }
        self.commit(next)?;
        debug!("deleted {} plants", removed.len());
        Ok(removed)
    }

    /// Marks every plant in `ids` as watered at `now` with a single write.
    /// If any id is unknown or the write fails, nothing changes.
    pub fn mark_watered_many(&mut self, ids: &[PlantId], now: DateTime<Utc>) -> Result<Vec<Plant>> {
        let mut next = self.plants.clone();
        let mut watered = Vec::with_capacity(ids.len());
        for id in ids {
            let plant = next
                .iter_mut()
                .find(|p| p.id == *id)
                .ok_or(SproutError::PlantNotFound(*id))?;
            plant.last_watered = Some(now);
            watered.push(plant.clone());
        }
        self.commit(next)?;
        debug!("watered {} plants at {}", watered.len(), now.to_rfc3339());
        Ok(watered)
    }

    fn require(&self, id: &PlantId) -> Result<usize> {
        self.position_of(id).ok_or(SproutError::PlantNotFound(*id))
    }

    fn check_bounds(&self, position: usize) -> Result<()> {
        if position >= self.plants.len() {
            return Err(SproutError::InvalidPosition {
                position,
                len: self.plants.len(),
            });
        }
        Ok(())
    }

    fn commit(&mut self, next: Vec<Plant>) -> Result<()> {
        write(&self.backend, &self.key, &next)?;
        self.plants = next;
        Ok(())
    }
}

fn write<B: StorageBackend>(backend: &B, key: &str, plants: &[Plant]) -> Result<()> {
    let blob = serde_json::to_string_pretty(plants).map_err(SproutError::Serialization)?;
    backend.write(key, &blob)
}

/// Reads the collection under `key`. Never fails: storage that is missing,
/// unreadable or corrupt yields an empty collection.
pub fn load<B: StorageBackend>(backend: &B, key: &str) -> Vec<Plant> {
    let blob = match backend.read(key) {
        Ok(Some(blob)) => blob,
        Ok(None) => {
            debug!("no stored plants under '{}', starting empty", key);
            return Vec::new();
        }
        Err(e) => {
            warn!("plant storage unavailable, starting empty: {}", e);
            return Vec::new();
        }
    };

    let records: Vec<serde_json::Value> = match serde_json::from_str(&blob) {
        Ok(records) => records,
        Err(e) => {
            warn!("stored plants under '{}' are corrupt, starting empty: {}", key, e);
            return Vec::new();
        }
    };

    // Records are checked one at a time: a bad one is dropped, the rest survive
    let mut seen = HashSet::new();
    let mut plants = Vec::with_capacity(records.len());
    for (position, record) in records.into_iter().enumerate() {
        let mut plant: Plant = match serde_json::from_value(record) {
            Ok(plant) => plant,
            Err(e) => {
                warn!("dropping unreadable stored plant #{}: {}", position + 1, e);
                continue;
            }
        };
        if !(1..=MAX_WATERING_FREQUENCY).contains(&plant.watering_frequency) {
            warn!(
                "dropping stored plant '{}' with watering frequency {}",
                plant.name, plant.watering_frequency
            );
            continue;
        }
        if !seen.insert(plant.id) {
            plant.id = Uuid::new_v4();
            warn!("stored plant '{}' had a duplicate id, assigned {}", plant.name, plant.id);
            seen.insert(plant.id);
        }
        plants.push(plant);
    }
    plants
}
