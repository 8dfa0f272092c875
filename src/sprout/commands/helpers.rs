use super::PlantCard;
use crate::error::{Result, SproutError};
use crate::index::{DisplayIndex, DisplayPlant, ListView};
use crate::model::PlantId;
use crate::status::watering_status;
use crate::store::{PlantStore, StorageBackend};
use chrono::{DateTime, Utc};

/// Maps display indexes to plant ids using the list the user was shown.
/// Repeated indexes resolve once.
pub fn resolve_indexes<B: StorageBackend>(
    store: &PlantStore<B>,
    view: &ListView,
    indexes: &[DisplayIndex],
) -> Result<Vec<(DisplayIndex, PlantId)>> {
    let listed = view.project(store.plants());
    let mut resolved: Vec<(DisplayIndex, PlantId)> = Vec::with_capacity(indexes.len());

    for idx in indexes {
        let dp = listed.iter().find(|dp| dp.index == *idx).ok_or_else(|| {
            SproutError::InvalidIndex(format!("{} not found in current list", idx))
        })?;
        if !resolved.iter().any(|(_, id)| *id == dp.plant.id) {
            resolved.push((*idx, dp.plant.id));
        }
    }

    Ok(resolved)
}

pub fn cards_for(listed: Vec<DisplayPlant>, now: DateTime<Utc>) -> Vec<PlantCard> {
    listed
        .into_iter()
        .map(|entry| {
            let status = watering_status(&entry.plant, now);
            PlantCard { entry, status }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::{SortOrder, SunlightFilter};
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn resolves_against_the_sorted_view() {
        let store = StoreFixture::new()
            .with_plant("Cactus", 14, "Full Sun")
            .with_plant("Fern", 3, "Low Light")
            .store;
        let view = ListView::new(SunlightFilter::All, SortOrder::Asc);

        let resolved = resolve_indexes(&store, &view, &[DisplayIndex(1)]).unwrap();
        assert_eq!(resolved[0].1, store.plants()[1].id);
    }

    #[test]
    fn unknown_index_is_an_error() {
        let store = StoreFixture::new().with_plant("Fern", 3, "Low Light").store;
        let view = ListView::default();
        let err = resolve_indexes(&store, &view, &[DisplayIndex(2)]).unwrap_err();
        assert!(matches!(err, SproutError::InvalidIndex(_)));
    }

    #[test]
    fn repeated_indexes_resolve_once() {
        let store = StoreFixture::new().with_plant("Fern", 3, "Low Light").store;
        let view = ListView::default();
        let resolved =
            resolve_indexes(&store, &view, &[DisplayIndex(1), DisplayIndex(1)]).unwrap();
        assert_eq!(resolved.len(), 1);
    }
}
