//! Persisted language preference.

use std::cell::RefCell;
use std::rc::Rc;

use thiserror::Error;

use crate::i18n::{DEFAULT_LANGUAGE, Language};

/// Storage failures when persisting the preference.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PreferenceError {
    /// Storage is not available in this context.
    #[error("local storage unavailable")]
    Unavailable,
    /// Storage refused the write.
    #[error("storage write rejected: {detail}")]
    Rejected {
        /// Error rendered as text.
        detail: String,
    },
}

/// Where the last selected language code lives.
pub trait PreferenceStore {
    /// Stored code, if any.
    fn load(&self) -> Option<String>;

    /// Persist `code`.
    ///
    /// # Errors
    ///
    /// Returns [`PreferenceError`] when the write is refused.
    fn store(&self, code: &str) -> Result<(), PreferenceError>;
}

/// Language to start with: the stored code when supported, else the default.
#[must_use]
pub fn initial_language<P: PreferenceStore + ?Sized>(store: &P) -> Language {
    store
        .load()
        .and_then(|code| Language::from_code(&code))
        .unwrap_or(DEFAULT_LANGUAGE)
}

/// Preference held in memory; clones share the value.
#[derive(Clone, Debug, Default)]
pub struct MemoryPreferences {
    value: Rc<RefCell<Option<String>>>,
    read_only: bool,
}

impl MemoryPreferences {
    /// Store pre-seeded with `code`.
    #[must_use]
    pub fn with_value(code: &str) -> Self {
        Self {
            value: Rc::new(RefCell::new(Some(code.to_string()))),
            read_only: false,
        }
    }

    /// Store that rejects every write.
    #[must_use]
    pub fn read_only() -> Self {
        Self {
            read_only: true,
            ..Self::default()
        }
    }

    /// Currently stored code.
    #[must_use]
    pub fn value(&self) -> Option<String> {
        self.value.borrow().clone()
    }
}

impl PreferenceStore for MemoryPreferences {
    fn load(&self) -> Option<String> {
        self.value()
    }

    fn store(&self, code: &str) -> Result<(), PreferenceError> {
        if self.read_only {
            return Err(PreferenceError::Unavailable);
        }
        *self.value.borrow_mut() = Some(code.to_string());
        Ok(())
    }
}
