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

//! Site configuration document for the press-kit pages.
//!
//! Layout: `model.rs` (typed sections and media links over the raw JSON tree),
//! `ids.rs` (derived container ids and translation-key fragments),
//! `validate.rs` (non-fatal findings, including skipped entries), `error.rs`
//! (whole-document parse errors).

pub mod error;
pub mod ids;
pub mod model;
pub mod validate;

pub use error::ConfigError;
pub use model::{
    Configuration, GalleryItem, GallerySection, LIVE_SHOWS_CONTAINER, LIVE_SHOWS_TITLE, MediaLink,
    MediaLinkList, Section, VIDEO_CONTAINER, VideoItem, VideoSection,
};
pub use validate::{ValidationIssue, validate};
