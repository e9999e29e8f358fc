#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::future_not_send)]
//! Press-kit site runtime.
//! Loads the site configuration, renders galleries, videos and media links,
//! and keeps the page in the visitor's chosen language.

pub mod core;
pub mod features;
pub mod i18n;
pub mod services;
pub mod site;
pub mod telemetry;

pub use crate::core::diagnostics::{Diagnostic, DiagnosticSink, Diagnostics, RecordingSink};
pub use crate::core::options::{PageKind, SiteOptions};
pub use crate::i18n::{DEFAULT_LANGUAGE, Language, TranslationLayout};
pub use crate::site::Site;

#[cfg(target_arch = "wasm32")]
mod app;

#[cfg(target_arch = "wasm32")]
pub use app::run_app;
