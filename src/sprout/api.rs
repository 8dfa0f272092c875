//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every UI client.
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs**: display index strings ("2", "1-3") become
//!   [`DisplayIndex`] values, which commands resolve to stable plant ids
//!   against the [`ListView`] the user saw
//! - **Supplies "now"** from its [`Clock`], so commands stay pure
//!
//! It does no printing and no prompting; confirmation is the client's job.
//!
//! `SproutApi<B: StorageBackend>` is generic over the storage backend:
//! - Production: `SproutApi<FileBackend>`
//! - Testing: `SproutApi<MemBackend>`

use crate::clock::Clock;
use crate::commands;
use crate::config::SproutConfig;
use crate::error::{Result, SproutError};
use crate::form::{FormPatch, PlantForm};
use crate::index::{parse_index_or_range, DisplayIndex, ListView};
use crate::store::{PlantStore, StorageBackend};
use std::path::PathBuf;
use std::sync::Arc;

pub struct SproutApi<B: StorageBackend> {
    store: PlantStore<B>,
    clock: Arc<dyn Clock>,
    data_dir: PathBuf,
    config: SproutConfig,
}

impl<B: StorageBackend> SproutApi<B> {
    pub fn new(
        store: PlantStore<B>,
        clock: Arc<dyn Clock>,
        data_dir: PathBuf,
        config: SproutConfig,
    ) -> Self {
        Self {
            store,
            clock,
            data_dir,
            config,
        }
    }

    pub fn create_plant(&mut self, form: &PlantForm) -> Result<commands::CmdResult> {
        commands::create::run(&mut self.store, form)
    }

    pub fn list_plants(&self, view: &ListView) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, view, self.clock.now())
    }

    pub fn view_plants<I: AsRef<str>>(
        &self,
        view: &ListView,
        indexes: &[I],
    ) -> Result<commands::CmdResult> {
        let indexes = parse_indexes(indexes)?;
        commands::view::run(&self.store, view, &indexes, self.clock.now())
    }

    pub fn edit_plant(
        &mut self,
        view: &ListView,
        index: &str,
        patch: &FormPatch,
    ) -> Result<commands::CmdResult> {
        let index: DisplayIndex = index.parse().map_err(SproutError::InvalidIndex)?;
        commands::edit::run(&mut self.store, view, index, patch)
    }

    pub fn delete_plants<I: AsRef<str>>(
        &mut self,
        view: &ListView,
        indexes: &[I],
    ) -> Result<commands::CmdResult> {
        let indexes = parse_indexes(indexes)?;
        commands::delete::run(&mut self.store, view, &indexes)
    }

    pub fn water_plants<I: AsRef<str>>(
        &mut self,
        view: &ListView,
        indexes: &[I],
    ) -> Result<commands::CmdResult> {
        let indexes = parse_indexes(indexes)?;
        commands::water::run(&mut self.store, view, &indexes, self.clock.now())
    }

    pub fn alerts(&self) -> commands::CmdResult {
        commands::alerts::run(&self.store, self.clock.now())
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.data_dir, action)
    }

    pub fn settings(&self) -> &SproutConfig {
        &self.config
    }

    pub fn store(&self) -> &PlantStore<B> {
        &self.store
    }

    pub fn clock(&self) -> Arc<dyn Clock> {
        Arc::clone(&self.clock)
    }
}

fn parse_indexes<I: AsRef<str>>(inputs: &[I]) -> Result<Vec<DisplayIndex>> {
    let mut indexes = Vec::new();
    for input in inputs {
        let parsed = parse_index_or_range(input.as_ref()).map_err(SproutError::InvalidIndex)?;
        indexes.extend(parsed);
    }
    if indexes.is_empty() {
        return Err(SproutError::Api("No plant indexes given".into()));
    }
    Ok(indexes)
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel, PlantCard};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::index::{SortOrder, SunlightFilter};
    use crate::status::WateringStatus;
    use crate::store::memory::MemBackend;
    use crate::store::DEFAULT_KEY;
    use chrono::{Duration, TimeZone, Utc};

    fn api() -> (SproutApi<MemBackend>, Arc<FixedClock>) {
        let clock = Arc::new(FixedClock::new(
            Utc.with_ymd_and_hms(2024, 6, 10, 12, 0, 0).unwrap(),
        ));
        let store = PlantStore::open(MemBackend::new(), DEFAULT_KEY);
        let api = SproutApi::new(
            store,
            clock.clone(),
            PathBuf::from("memory://sprout"),
            SproutConfig::default(),
        );
        (api, clock)
    }

    fn form(name: &str, frequency: &str, sunlight: &str) -> PlantForm {
        PlantForm {
            name: name.into(),
            watering_frequency: frequency.into(),
            sunlight: sunlight.into(),
            ..PlantForm::default()
        }
    }

    #[test]
    fn water_uses_the_api_clock() {
        let (mut api, clock) = api();
        api.create_plant(&form("Fern", "3", "Low Light")).unwrap();

        api.water_plants(&ListView::default(), &["1"]).unwrap();
        assert_eq!(api.store().plants()[0].last_watered, Some(clock.now()));

        clock.advance(Duration::days(2));
        let listed = api.list_plants(&ListView::default()).unwrap();
        match listed.cards[0].status {
            WateringStatus::CountingDown { remaining, .. } => assert_eq!(remaining.days, 1),
            other => panic!("expected countdown, got {:?}", other),
        }

        clock.advance(Duration::days(1));
        assert_eq!(api.alerts().messages.len(), 1);
    }

    #[test]
    fn ranges_expand_before_dispatch() {
        let (mut api, _) = api();
        for name in ["A", "B", "C", "D"] {
            api.create_plant(&form(name, "1", "Full Sun")).unwrap();
        }
        let result = api
            .delete_plants(&ListView::default(), &["2-3"])
            .unwrap();
        assert_eq!(result.affected_plants.len(), 2);
        let names: Vec<_> = api.store().plants().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["A", "D"]);
    }

    #[test]
    fn indexes_follow_the_view() {
        let (mut api, _) = api();
        api.create_plant(&form("Cactus", "14", "Full Sun")).unwrap();
        api.create_plant(&form("Fern", "3", "Low Light")).unwrap();
        let view = ListView::new(SunlightFilter::All, SortOrder::Asc);

        let patch = FormPatch {
            notes: Some("misty".into()),
            ..FormPatch::default()
        };
        api.edit_plant(&view, "1", &patch).unwrap();
        assert_eq!(api.store().plants()[1].notes, "misty");
    }

    #[test]
    fn malformed_indexes_are_rejected() {
        let (mut api, _) = api();
        api.create_plant(&form("Fern", "3", "Low Light")).unwrap();
        assert!(matches!(
            api.water_plants(&ListView::default(), &["fern"]),
            Err(SproutError::InvalidIndex(_))
        ));
        let empty: [&str; 0] = [];
        assert!(api.delete_plants(&ListView::default(), &empty).is_err());
        assert!(api.edit_plant(&ListView::default(), "0", &FormPatch::default()).is_err());
        assert_eq!(api.store().len(), 1);
    }
}
