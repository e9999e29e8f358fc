//! Language preference persisted in `localStorage`.

use gloo::storage::{LocalStorage, Storage};

use crate::core::options::LANGUAGE_STORAGE_KEY;
use crate::core::preferences::{PreferenceError, PreferenceStore};

/// Stores the code as a raw string so pages without the runtime read the
/// same value.
pub(super) struct LocalStoragePreferences;

impl PreferenceStore for LocalStoragePreferences {
    fn load(&self) -> Option<String> {
        LocalStorage::raw()
            .get_item(LANGUAGE_STORAGE_KEY)
            .ok()
            .flatten()
    }

    fn store(&self, code: &str) -> Result<(), PreferenceError> {
        LocalStorage::raw()
            .set_item(LANGUAGE_STORAGE_KEY, code)
            .map_err(|err| PreferenceError::Rejected {
                detail: format!("{err:?}"),
            })
    }
}
