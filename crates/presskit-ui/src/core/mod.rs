//! Core, DOM-free primitives and helpers for the site runtime.
pub mod carousel;
pub mod diagnostics;
pub mod options;
pub mod preferences;
