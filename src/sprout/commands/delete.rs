use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::{DisplayIndex, ListView};
use crate::store::{PlantStore, StorageBackend};

use super::helpers::resolve_indexes;

pub fn run<B: StorageBackend>(
    store: &mut PlantStore<B>,
    view: &ListView,
    indexes: &[DisplayIndex],
) -> Result<CmdResult> {
    let resolved = resolve_indexes(store, view, indexes)?;
    let ids: Vec<_> = resolved.iter().map(|(_, id)| *id).collect();
    let removed = store.delete_many(&ids)?;

    let mut result = CmdResult::default();
    for ((display_index, _), plant) in resolved.iter().zip(&removed) {
        result.add_message(CmdMessage::success(format!(
            "Plant deleted ({}): {}",
            display_index, plant.name
        )));
    }
    Ok(result.with_affected_plants(removed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::{SortOrder, SunlightFilter};
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn deleting_first_of_two_leaves_second_at_front() {
        let mut store = StoreFixture::new()
            .with_plant("A", 1, "Full Sun")
            .with_plant("B", 2, "Full Sun")
            .store;

        run(&mut store, &ListView::default(), &[DisplayIndex(1)]).unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.plants()[0].name, "B");
    }

    #[test]
    fn deletes_several_without_index_drift() {
        let mut store = StoreFixture::new()
            .with_plant("A", 1, "Full Sun")
            .with_plant("B", 2, "Full Sun")
            .with_plant("C", 3, "Full Sun")
            .store;

        let result = run(
            &mut store,
            &ListView::default(),
            &[DisplayIndex(1), DisplayIndex(2)],
        )
        .unwrap();

        assert_eq!(result.affected_plants.len(), 2);
        assert_eq!(store.len(), 1);
        assert_eq!(store.plants()[0].name, "C");
    }

    #[test]
    fn deletes_from_filtered_view() {
        let mut store = StoreFixture::new()
            .with_plant("Fern", 3, "Low Light")
            .with_plant("Cactus", 14, "Full Sun")
            .with_plant("Pothos", 7, "Low Light")
            .store;
        let view = ListView::new(SunlightFilter::Only("Low Light".into()), SortOrder::Desc);

        run(&mut store, &view, &[DisplayIndex(1)]).unwrap();

        let names: Vec<_> = store.plants().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Fern", "Cactus"]);
    }

    #[test]
    fn bad_index_deletes_nothing() {
        let mut store = StoreFixture::new().with_plant("A", 1, "Full Sun").store;
        assert!(run(
            &mut store,
            &ListView::default(),
            &[DisplayIndex(1), DisplayIndex(4)]
        )
        .is_err());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn failed_write_deletes_none_of_the_batch() {
        let mut store = StoreFixture::new()
            .with_plant("A", 1, "Full Sun")
            .with_plant("B", 2, "Full Sun")
            .store;
        store.backend().set_simulate_write_error(true);

        assert!(run(
            &mut store,
            &ListView::default(),
            &[DisplayIndex(1), DisplayIndex(2)]
        )
        .is_err());
        assert_eq!(store.len(), 2);
    }
}
