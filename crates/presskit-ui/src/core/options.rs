//! Page-level runtime options.
//!
//! # Design
//! - Options are authored as `data-*` attributes on `<html>` (or `<body>`),
//!   so the same wasm bundle serves every page.
//! - Missing attributes fall back to per-page defaults; invalid values are
//!   reported and replaced by the default.
//! - The page kind falls back to the location path, matching the markup the
//!   site already ships with (`media.html`).

use std::str::FromStr;

use presskit_dom::Dom;
use thiserror::Error;

use crate::core::diagnostics::{Diagnostic, Diagnostics};
use crate::i18n::TranslationLayout;

/// Local-storage key holding the last selected language code.
pub const LANGUAGE_STORAGE_KEY: &str = "language";
/// Attribute selecting the page kind.
pub const PAGE_ATTR: &str = "data-page";
/// Attribute overriding the configuration URL.
pub const CONFIG_URL_ATTR: &str = "data-config-url";
/// Attribute selecting the translation layout.
pub const LAYOUT_ATTR: &str = "data-i18n-layout";
/// Attribute overriding the media page image prefix.
pub const ASSET_PREFIX_ATTR: &str = "data-asset-prefix";
/// Attribute overriding the language-button label key (`none` disables labels).
pub const LABEL_KEY_ATTR: &str = "data-language-labels";

const MEDIA_PAGE_MARKER: &str = "media.html";

/// Which page the runtime is driving.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageKind {
    /// Landing page: galleries, video strips, live-show carousel.
    Home,
    /// Media page: press photos and per-language media links.
    Media,
}

/// Unrecognised page kind.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown page kind '{value}'")]
pub struct UnknownPage {
    /// Rejected value.
    pub value: String,
}

impl FromStr for PageKind {
    type Err = UnknownPage;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "home" | "index" => Ok(Self::Home),
            "media" => Ok(Self::Media),
            other => Err(UnknownPage {
                value: other.to_string(),
            }),
        }
    }
}

impl PageKind {
    /// Page kind implied by a location path.
    #[must_use]
    pub fn from_path(path: &str) -> Self {
        if path.contains(MEDIA_PAGE_MARKER) {
            Self::Media
        } else {
            Self::Home
        }
    }
}

/// Resolved runtime options for one page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteOptions {
    /// Page being driven.
    pub page: PageKind,
    /// URL of the configuration document.
    pub config_url: String,
    /// Translation layout for `data-i18n` keys.
    pub layout: TranslationLayout,
    /// Prefix prepended to press-photo paths on the media page.
    pub asset_prefix: String,
    /// Key whose children label the language buttons.
    pub button_label_key: Option<String>,
}

impl SiteOptions {
    /// Defaults for `page`.
    #[must_use]
    pub fn for_page(page: PageKind) -> Self {
        match page {
            PageKind::Home => Self {
                page,
                config_url: "../config.json".into(),
                layout: TranslationLayout::Scoped,
                asset_prefix: String::new(),
                button_label_key: Some("pressKit.language".into()),
            },
            PageKind::Media => Self {
                page,
                config_url: "/config.json".into(),
                layout: TranslationLayout::Absolute,
                asset_prefix: "../".into(),
                button_label_key: None,
            },
        }
    }

    /// Read options from root-element attributes, reporting unusable values.
    #[must_use]
    pub fn from_dom<D: Dom>(dom: &D, diagnostics: &Diagnostics) -> Self {
        let page = parse_attr::<D, PageKind>(dom, PAGE_ATTR, diagnostics).unwrap_or_else(|| {
            dom.location_path()
                .map_or(PageKind::Home, |path| PageKind::from_path(&path))
        });
        let mut options = Self::for_page(page);

        if let Some(layout) = parse_attr::<D, TranslationLayout>(dom, LAYOUT_ATTR, diagnostics) {
            options.layout = layout;
        }
        if let Some(url) = non_empty_attr(dom, CONFIG_URL_ATTR) {
            options.config_url = url;
        }
        if let Some(prefix) = dom.root_attribute(ASSET_PREFIX_ATTR) {
            options.asset_prefix = prefix.trim().to_string();
        }
        if let Some(key) = non_empty_attr(dom, LABEL_KEY_ATTR) {
            options.button_label_key = (key != "none").then_some(key);
        }

        tracing::debug!(
            page = ?options.page,
            config_url = %options.config_url,
            layout = options.layout.as_str(),
            "site options resolved"
        );
        options
    }
}

fn non_empty_attr<D: Dom>(dom: &D, name: &str) -> Option<String> {
    dom.root_attribute(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_attr<D: Dom, T: FromStr>(dom: &D, name: &str, diagnostics: &Diagnostics) -> Option<T> {
    let raw = non_empty_attr(dom, name)?;
    match raw.parse::<T>() {
        Ok(value) => Some(value),
        Err(_) => {
            diagnostics.emit(Diagnostic::InvalidOption {
                name: name.to_string(),
                value: raw,
            });
            None
        }
    }
}
