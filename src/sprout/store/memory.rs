use super::plant_store::PlantStore;
use super::{StorageBackend, DEFAULT_KEY};
use crate::error::{Result, SproutError};
use std::cell::RefCell;
use std::collections::HashMap;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since sprout is single-threaded.
#[derive(Default)]
pub struct MemBackend {
    values: RefCell<HashMap<String, String>>,
    simulate_write_error: RefCell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw value, bypassing serialization (e.g. to plant a corrupt blob).
    pub fn with_raw(self, key: &str, value: &str) -> Self {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }
}

impl StorageBackend for MemBackend {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(SproutError::Store("Simulated write error".to_string()));
        }
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

pub type InMemoryStore = PlantStore<MemBackend>;

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        PlantStore::open(MemBackend::new(), DEFAULT_KEY)
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Plant, PlantDraft};
    use chrono::{DateTime, Utc};

    pub fn draft(name: &str, frequency: u32, sunlight: &str) -> PlantDraft {
        PlantDraft {
            name: name.to_string(),
            species: String::new(),
            watering_frequency: frequency,
            sunlight: sunlight.to_string(),
            notes: String::new(),
            image: None,
        }
    }

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_plant(mut self, name: &str, frequency: u32, sunlight: &str) -> Self {
            self.store
                .create(Plant::new(draft(name, frequency, sunlight)))
                .unwrap();
            self
        }

        pub fn with_watered_plant(
            mut self,
            name: &str,
            frequency: u32,
            last_watered: DateTime<Utc>,
        ) -> Self {
            let mut plant = Plant::new(draft(name, frequency, "Full Sun"));
            plant.last_watered = Some(last_watered);
            self.store.create(plant).unwrap();
            self
        }
    }
}
