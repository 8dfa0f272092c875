use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::form::{FormController, FormPatch};
use crate::index::{DisplayIndex, ListView};
use crate::store::{PlantStore, StorageBackend};

use super::helpers::resolve_indexes;

/// Populates the form from the plant at `index`, applies `patch`, and submits
/// it as an update of that plant.
pub fn run<B: StorageBackend>(
    store: &mut PlantStore<B>,
    view: &ListView,
    index: DisplayIndex,
    patch: &FormPatch,
) -> Result<CmdResult> {
    let resolved = resolve_indexes(store, view, &[index])?;
    let (display_index, id) = resolved[0];

    let mut controller = FormController::new();
    let mut form = controller.begin_edit(store, &id)?;
    patch.apply_to(&mut form);
    let plant = controller.submit(store, &form)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Plant updated ({}): {}",
        display_index, plant.name
    )));
    Ok(result.with_affected_plants(vec![plant]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use chrono::Utc;

    #[test]
    fn edits_only_patched_fields() {
        let mut store = StoreFixture::new()
            .with_plant("Fern", 3, "Low Light")
            .with_plant("Cactus", 14, "Full Sun")
            .store;
        let patch = FormPatch {
            notes: Some("repotted".into()),
            ..FormPatch::default()
        };

        run(&mut store, &ListView::default(), DisplayIndex(2), &patch).unwrap();

        let cactus = &store.plants()[1];
        assert_eq!(cactus.name, "Cactus");
        assert_eq!(cactus.watering_frequency, 14);
        assert_eq!(cactus.notes, "repotted");
    }

    #[test]
    fn edit_resets_watering() {
        let mut store = StoreFixture::new()
            .with_watered_plant("Fern", 3, Utc::now())
            .store;
        run(
            &mut store,
            &ListView::default(),
            DisplayIndex(1),
            &FormPatch::default(),
        )
        .unwrap();
        assert_eq!(store.plants()[0].last_watered, None);
    }

    #[test]
    fn invalid_patch_leaves_plant_alone() {
        let mut store = StoreFixture::new().with_plant("Fern", 3, "Low Light").store;
        let patch = FormPatch {
            watering_frequency: Some("0".into()),
            ..FormPatch::default()
        };
        assert!(run(&mut store, &ListView::default(), DisplayIndex(1), &patch).is_err());
        assert_eq!(store.plants()[0].watering_frequency, 3);
    }
}
