use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::ListView;
use crate::store::{PlantStore, StorageBackend};
use chrono::{DateTime, Utc};

use super::helpers::cards_for;

pub fn run<B: StorageBackend>(
    store: &PlantStore<B>,
    view: &ListView,
    now: DateTime<Utc>,
) -> Result<CmdResult> {
    let listed = view.project(store.plants());
    Ok(CmdResult::default().with_cards(cards_for(listed, now)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::{DisplayIndex, SortOrder, SunlightFilter};
    use crate::status::WateringStatus;
    use crate::store::memory::fixtures::StoreFixture;
    use chrono::Duration;

    #[test]
    fn lists_filtered_sorted_cards_with_status() {
        let now = Utc::now();
        let store = StoreFixture::new()
            .with_plant("Fern", 3, "Low Light")
            .with_plant("Cactus", 14, "Full Sun")
            .with_watered_plant("Basil", 2, now - Duration::days(3))
            .store;
        let view = ListView::new(SunlightFilter::Only("Full Sun".into()), SortOrder::Asc);

        let result = run(&store, &view, now).unwrap();
        let names: Vec<_> = result
            .cards
            .iter()
            .map(|c| c.entry.plant.name.as_str())
            .collect();
        assert_eq!(names, ["Basil", "Cactus"]);
        assert_eq!(result.cards[0].entry.index, DisplayIndex(1));
        assert!(result.cards[0].status.needs_water());
        assert_eq!(
            result.cards[1].status,
            WateringStatus::NeverWatered { frequency_days: 14 }
        );
    }

    #[test]
    fn empty_store_lists_nothing() {
        let store = StoreFixture::new().store;
        let result = run(&store, &ListView::default(), Utc::now()).unwrap();
        assert!(result.cards.is_empty());
    }
}
