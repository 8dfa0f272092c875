use crate::api::SproutApi;
use crate::clock::SystemClock;
use crate::config::SproutConfig;
use crate::error::{Result, SproutError};
use crate::store::fs::FileBackend;
use crate::store::PlantStore;
use directories::ProjectDirs;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Overrides the data directory. Used by tests and by anyone keeping several
/// independent collections.
pub const DATA_DIR_ENV: &str = "SPROUT_DATA";

pub struct SproutContext {
    pub api: SproutApi<FileBackend>,
    pub config: SproutConfig,
}

/// Resolves the data directory: `SPROUT_DATA` when set and non-empty,
/// otherwise the platform data dir.
pub fn resolve_data_dir() -> Result<PathBuf> {
    data_dir_from(std::env::var_os(DATA_DIR_ENV))
}

fn data_dir_from(env_value: Option<OsString>) -> Result<PathBuf> {
    if let Some(dir) = env_value.filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "sprout", "sprout")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| SproutError::Store("Could not determine data directory".into()))
}

pub fn initialize(data_dir: &Path) -> SproutContext {
    let config = match SproutConfig::load(data_dir) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("ignoring unreadable config in {}: {}", data_dir.display(), e);
            SproutConfig::default()
        }
    };

    let backend = FileBackend::new(data_dir.to_path_buf());
    let store = PlantStore::open(backend, config.storage_key.clone());
    log::debug!(
        "opened {} plants from {}",
        store.len(),
        store.backend().key_path(store.key()).display()
    );

    let api = SproutApi::new(
        store,
        Arc::new(SystemClock),
        data_dir.to_path_buf(),
        config.clone(),
    );
    SproutContext { api, config }
}
