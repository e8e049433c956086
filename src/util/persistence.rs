use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde_json::Error as SerdeError;
use tracing::{debug, warn};

use crate::domain::PersistedState;
use crate::util::version::{current_version, is_compatible};

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "DynamicTintz";
const APP_NAME: &str = "TintQuoteBuilder";
const STATE_FILE: &str = "state.json";

fn data_file() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join(STATE_FILE))
}

pub fn load_persisted_state() -> Option<PersistedState> {
    let path = data_file()?;
    load_from(&path)
}

pub fn save_persisted_state(state: &PersistedState) -> Result<PathBuf, PersistSaveError> {
    let path = data_file().ok_or(PersistSaveError::StorageUnavailable)?;
    save_to(&path, state)?;
    Ok(path)
}

fn load_from(path: &Path) -> Option<PersistedState> {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(err) => {
            debug!(path = %path.display(), %err, "no saved quote state");
            return None;
        }
    };

    let state: PersistedState = match serde_json::from_str(&data) {
        Ok(state) => state,
        Err(err) => {
            warn!(path = %path.display(), %err, "ignoring unreadable quote state");
            return None;
        }
    };

    let current = current_version().ok()?;
    if !is_compatible(&state.app_version, &current) {
        warn!(
            saved = %state.app_version,
            %current,
            "ignoring quote state written by an incompatible version"
        );
        return None;
    }

    Some(state)
}

fn save_to(path: &Path, state: &PersistedState) -> Result<(), PersistSaveError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(state)?;
    fs::write(path, json)?;
    debug!(path = %path.display(), "saved quote state");
    Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum PersistSaveError {
    #[error("storage directory unavailable")]
    StorageUnavailable,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] SerdeError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AppState;
    use crate::util::version::APP_VERSION;

    fn scratch_file(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("tint-quote-{}-{}", name, uuid::Uuid::new_v4()))
            .join(STATE_FILE)
    }

    #[test]
    fn saves_and_loads_state() {
        let path = scratch_file("roundtrip");
        let mut state = AppState::default();
        state.set_travel_miles("64");
        let persisted = state.to_persisted(APP_VERSION, None);

        save_to(&path, &persisted).unwrap();
        let loaded = load_from(&path).unwrap();
        assert_eq!(loaded, persisted);

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn missing_or_corrupt_files_load_as_none() {
        let path = scratch_file("corrupt");
        assert!(load_from(&path).is_none());

        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{ not json").unwrap();
        assert!(load_from(&path).is_none());

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn incompatible_version_is_ignored() {
        let path = scratch_file("version");
        let persisted = AppState::default().to_persisted("999.0.0", None);
        save_to(&path, &persisted).unwrap();
        assert!(load_from(&path).is_none());

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }
}
