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

//! DOM port used by the press-kit runtime.
//!
//! Layout: `port.rs` (the [`Dom`] trait), `selector.rs` (the small selector
//! subset the runtime queries with), `memory.rs` (in-memory document for
//! native tests and fixtures), `web.rs` (browser implementation, wasm only).

pub mod error;
pub mod memory;
pub mod port;
pub mod selector;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use error::DomError;
pub use memory::{ElementBuilder, MemoryDom, NodeId};
pub use port::Dom;
pub use selector::Selector;

#[cfg(target_arch = "wasm32")]
pub use web::WebDom;
