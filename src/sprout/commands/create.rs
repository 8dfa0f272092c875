use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::form::{FormController, PlantForm};
use crate::store::{PlantStore, StorageBackend};

pub fn run<B: StorageBackend>(store: &mut PlantStore<B>, form: &PlantForm) -> Result<CmdResult> {
    let mut controller = FormController::new();
    let _blank = controller.begin_create();
    let plant = controller.submit(store, form)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Plant added ({}): waters every {} days",
        plant.name, plant.watering_frequency
    )));
    Ok(result.with_affected_plants(vec![plant]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SproutError;
    use crate::store::memory::InMemoryStore;

    fn form(name: &str, frequency: &str) -> PlantForm {
        PlantForm {
            name: name.into(),
            watering_frequency: frequency.into(),
            sunlight: "Full Sun".into(),
            ..PlantForm::default()
        }
    }

    #[test]
    fn creates_in_insertion_order() {
        let mut store = InMemoryStore::new();
        run(&mut store, &form("A", "1")).unwrap();
        let result = run(&mut store, &form("B", "2")).unwrap();

        assert_eq!(result.affected_plants[0].name, "B");
        assert_eq!(store.plants()[0].name, "A");
        assert_eq!(store.plants()[1].name, "B");
    }

    #[test]
    fn invalid_form_creates_nothing() {
        let mut store = InMemoryStore::new();
        let err = run(&mut store, &form("", "1")).unwrap_err();
        assert!(matches!(err, SproutError::Validation(_)));
        assert!(store.is_empty());
    }
}
