//! # Plant Form
//!
//! A [`PlantForm`] is the raw text a user typed into the add/edit form.
//! [`FormController`] owns the form's lifecycle: it remembers whether the
//! submitted form should create a new plant or replace an existing one, and
//! it validates input before anything reaches the store.

use crate::error::{Result, SproutError};
use crate::model::{Plant, PlantDraft, PlantId, MAX_WATERING_FREQUENCY};
use crate::store::{PlantStore, StorageBackend};
use log::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlantForm {
    pub name: String,
    pub species: String,
    pub watering_frequency: String,
    pub sunlight: String,
    pub notes: String,
    pub image: String,
}

impl PlantForm {
    pub fn from_plant(plant: &Plant) -> Self {
        Self {
            name: plant.name.clone(),
            species: plant.species.clone(),
            watering_frequency: plant.watering_frequency.to_string(),
            sunlight: plant.sunlight.clone(),
            notes: plant.notes.clone(),
            image: plant.image.clone().unwrap_or_default(),
        }
    }

    /// Checks required fields and converts the form into a draft.
    pub fn validate(&self) -> Result<PlantDraft> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(SproutError::Validation("Name cannot be empty".into()));
        }

        let watering_frequency = match self.watering_frequency.trim().parse::<u32>() {
            Ok(days) if (1..=MAX_WATERING_FREQUENCY).contains(&days) => days,
            _ => {
                return Err(SproutError::Validation(format!(
                    "Watering frequency must be a whole number of days from 1 to {}, got '{}'",
                    MAX_WATERING_FREQUENCY,
                    self.watering_frequency.trim()
                )))
            }
        };

        let image = self.image.trim();
        Ok(PlantDraft {
            name: name.to_string(),
            species: self.species.trim().to_string(),
            watering_frequency,
            sunlight: self.sunlight.trim().to_string(),
            notes: self.notes.clone(),
            image: (!image.is_empty()).then(|| image.to_string()),
        })
    }
}

/// Field overrides applied on top of a populated form, as given on the
/// command line. `None` leaves the field as it was.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormPatch {
    pub name: Option<String>,
    pub species: Option<String>,
    pub watering_frequency: Option<String>,
    pub sunlight: Option<String>,
    pub notes: Option<String>,
    pub image: Option<String>,
}

impl FormPatch {
    pub fn apply_to(&self, form: &mut PlantForm) {
        let fields = [
            (&self.name, &mut form.name),
            (&self.species, &mut form.species),
            (&self.watering_frequency, &mut form.watering_frequency),
            (&self.sunlight, &mut form.sunlight),
            (&self.notes, &mut form.notes),
            (&self.image, &mut form.image),
        ];
        for (patch, field) in fields {
            if let Some(value) = patch {
                *field = value.clone();
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == FormPatch::default()
    }
}

#[derive(Debug, Default)]
pub struct FormController {
    edit_target: Option<PlantId>,
    open: bool,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn edit_target(&self) -> Option<PlantId> {
        self.edit_target
    }

    pub fn begin_create(&mut self) -> PlantForm {
        self.edit_target = None;
        self.open = true;
        PlantForm::default()
    }

    /// Opens the form populated from an existing plant and targets it.
    pub fn begin_edit<B: StorageBackend>(
        &mut self,
        store: &PlantStore<B>,
        id: &PlantId,
    ) -> Result<PlantForm> {
        let plant = store.get(id).ok_or(SproutError::PlantNotFound(*id))?;
        self.edit_target = Some(*id);
        self.open = true;
        Ok(PlantForm::from_plant(plant))
    }

    /// Validates the form and creates or updates a plant. On success the
    /// form is closed and the edit target cleared; on failure nothing changes.
    pub fn submit<B: StorageBackend>(
        &mut self,
        store: &mut PlantStore<B>,
        form: &PlantForm,
    ) -> Result<Plant> {
        let draft = form.validate()?;

        let plant = match self.edit_target {
            Some(id) => store.update(&id, draft)?.clone(),
            None => store.create(Plant::new(draft))?.clone(),
        };

        debug!("form submitted for plant {}", plant.id);
        self.cancel();
        Ok(plant)
    }

    pub fn cancel(&mut self) {
        self.edit_target = None;
        self.open = false;
    }
}
