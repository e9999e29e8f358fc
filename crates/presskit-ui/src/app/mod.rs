//! Browser entry point: boots the page and wires click handlers.

mod listeners;
mod preferences;

use std::cell::RefCell;
use std::rc::Rc;

use presskit_dom::WebDom;
use wasm_bindgen_futures::spawn_local;

use crate::core::diagnostics::Diagnostics;
use crate::core::options::SiteOptions;
use crate::services::HttpSource;
use crate::site::Site;
use crate::telemetry::{DEFAULT_LOG_LEVEL, init_logging};

use preferences::LocalStoragePreferences;

type BrowserSite = Site<WebDom, LocalStoragePreferences>;

/// Entry point invoked by the wasm binary.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Err(err) = init_logging(DEFAULT_LOG_LEVEL) {
        web_sys::console::warn_1(&format!("{err:#}").into());
    }
    spawn_local(start());
}

async fn start() {
    let dom = WebDom::new();
    let diagnostics = Diagnostics::tracing_only();
    let options = SiteOptions::from_dom(&dom, &diagnostics);
    let source = HttpSource::new(options.config_url.clone());
    let site = Site::boot(dom, options, LocalStoragePreferences, &source, diagnostics).await;
    listeners::wire(&Rc::new(RefCell::new(site)));
}
