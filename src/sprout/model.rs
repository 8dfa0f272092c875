use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

pub type PlantId = Uuid;

pub const SECONDS_PER_DAY: i64 = 86_400;

/// Longest accepted watering interval, in days (about a century).
pub const MAX_WATERING_FREQUENCY: u32 = 36_500;

/// The user-editable part of a plant: everything the form sets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlantDraft {
    pub name: String,
    pub species: String,
    pub watering_frequency: u32,
    pub sunlight: String,
    pub notes: String,
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plant {
    // Blobs written before ids existed get one on load
    #[serde(default = "Uuid::new_v4")]
    pub id: PlantId,
    pub name: String,
    #[serde(default)]
    pub species: String,
    pub watering_frequency: u32,
    #[serde(default)]
    pub sunlight: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub last_watered: Option<DateTime<Utc>>,
}

impl Plant {
    pub fn new(draft: PlantDraft) -> Self {
        let mut plant = Self {
            id: Uuid::new_v4(),
            name: String::new(),
            species: String::new(),
            watering_frequency: draft.watering_frequency,
            sunlight: String::new(),
            notes: String::new(),
            image: None,
            last_watered: None,
        };
        plant.apply(draft);
        plant
    }

    /// Replaces every user field. The watering history is reset, as a
    /// submitted form carries no watering date.
    pub fn apply(&mut self, draft: PlantDraft) {
        self.name = draft.name;
        self.species = draft.species;
        self.watering_frequency = draft.watering_frequency;
        self.sunlight = draft.sunlight;
        self.notes = draft.notes;
        self.image = draft.image.filter(|s| !s.is_empty());
        self.last_watered = None;
    }

    pub fn watering_interval(&self) -> Duration {
        Duration::seconds(i64::from(self.watering_frequency) * SECONDS_PER_DAY)
    }

    /// When the plant is next due, or `None` if it was never watered or the
    /// due date falls outside the representable range.
    pub fn next_water_at(&self) -> Option<DateTime<Utc>> {
        self.last_watered
            .and_then(|last| last.checked_add_signed(self.watering_interval()))
    }
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}
