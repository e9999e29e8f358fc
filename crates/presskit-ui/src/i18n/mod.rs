//! Dotted-key translation lookup against the loaded configuration.
//!
//! # Design
//! - The configuration tree is walked in place; nothing is copied per lookup.
//! - A miss never panics: it names the segment where the walk stopped and the
//!   caller decides whether to report it.
//! - Where the per-language subtree lives is a [`TranslationLayout`] choice,
//!   because the home and media pages author their dictionaries differently.

use std::fmt::{self, Display, Formatter};
use std::rc::Rc;
use std::str::FromStr;

use presskit_config::Configuration;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::core::diagnostics::{Diagnostic, Diagnostics};

/// Supported site languages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English.
    En,
    /// Spanish.
    Es,
}

impl Language {
    /// All supported languages in switcher order.
    #[must_use]
    pub const fn all() -> [Self; 2] {
        [Self::En, Self::Es]
    }

    /// Two-letter code used in markup, storage and the configuration.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
        }
    }

    /// Map a stored or authored code (`es`, `ES`, `es-MX`) to a supported language.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        let lowered = code.trim().to_ascii_lowercase();
        let base = lowered.split('-').next().unwrap_or_default();
        Self::all()
            .into_iter()
            .find(|language| language.code() == base)
    }
}

impl Display for Language {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.code())
    }
}

/// Language used when nothing was persisted.
pub const DEFAULT_LANGUAGE: Language = Language::En;

/// Where the per-language dictionary is found in the document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TranslationLayout {
    /// First key segment names a top-level dictionary keyed by language:
    /// `pressKit.title` reads `pressKit.<lang>.title`.
    Scoped,
    /// Top-level dictionaries per language: `title` reads `<lang>.title`.
    LanguageFirst,
    /// Keys are full paths from the document root; the language is not inserted.
    Absolute,
}

impl TranslationLayout {
    /// Attribute spelling of the layout.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Scoped => "scoped",
            Self::LanguageFirst => "language-first",
            Self::Absolute => "absolute",
        }
    }
}

/// Unrecognised layout name.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown translation layout '{value}'")]
pub struct UnknownLayout {
    /// Rejected value.
    pub value: String,
}

impl FromStr for TranslationLayout {
    type Err = UnknownLayout;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "scoped" => Ok(Self::Scoped),
            "language-first" => Ok(Self::LanguageFirst),
            "absolute" => Ok(Self::Absolute),
            other => Err(UnknownLayout {
                value: other.to_string(),
            }),
        }
    }
}

/// Why a lookup stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MissReason {
    /// Segment does not exist.
    Absent,
    /// An intermediate value is not an object or array.
    NotTraversable,
    /// The leaf is null, an object, or an array.
    NotDisplayable,
}

impl Display for MissReason {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(match self {
            Self::Absent => "absent",
            Self::NotTraversable => "not traversable",
            Self::NotDisplayable => "not displayable",
        })
    }
}

/// Failed lookup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Miss {
    /// Path segment where the walk stopped.
    pub segment: String,
    /// Why it stopped.
    pub reason: MissReason,
}

/// Walk `key` through `tree` for `language` under `layout`.
///
/// # Errors
///
/// Returns a [`Miss`] naming the failing segment when any step is absent,
/// an intermediate is not traversable, or the leaf cannot be displayed.
pub fn lookup(
    tree: &Value,
    language: Language,
    key: &str,
    layout: TranslationLayout,
) -> Result<String, Miss> {
    let mut segments = key.split('.');
    let path: Vec<&str> = match layout {
        TranslationLayout::Scoped => {
            let head = segments.next().unwrap_or_default();
            [head, language.code()].into_iter().chain(segments).collect()
        }
        TranslationLayout::LanguageFirst => std::iter::once(language.code())
            .chain(segments)
            .collect(),
        TranslationLayout::Absolute => segments.collect(),
    };

    let last = path.len().saturating_sub(1);
    let mut node = tree;
    for (position, segment) in path.iter().enumerate() {
        let next = step(node, segment).ok_or_else(|| Miss {
            segment: (*segment).to_string(),
            reason: MissReason::Absent,
        })?;
        if position < last && !is_traversable(next) {
            return Err(Miss {
                segment: (*segment).to_string(),
                reason: MissReason::NotTraversable,
            });
        }
        node = next;
    }

    display(node).ok_or_else(|| Miss {
        segment: path.get(last).copied().unwrap_or_default().to_string(),
        reason: MissReason::NotDisplayable,
    })
}

fn step<'a>(node: &'a Value, segment: &str) -> Option<&'a Value> {
    match node {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment
            .parse::<usize>()
            .ok()
            .and_then(|index| items.get(index)),
        _ => None,
    }
}

const fn is_traversable(value: &Value) -> bool {
    matches!(value, Value::Object(_) | Value::Array(_))
}

fn display(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null | Value::Object(_) | Value::Array(_) => None,
    }
}

/// Resolver bound to one loaded configuration.
#[derive(Clone)]
pub struct Translator {
    config: Rc<Configuration>,
    layout: TranslationLayout,
    diagnostics: Diagnostics,
}

impl Translator {
    /// Bind a resolver to `config`.
    #[must_use]
    pub const fn new(
        config: Rc<Configuration>,
        layout: TranslationLayout,
        diagnostics: Diagnostics,
    ) -> Self {
        Self {
            config,
            layout,
            diagnostics,
        }
    }

    /// Resolve `key`, reporting a [`Diagnostic::MissingTranslation`] on a miss.
    #[must_use]
    pub fn resolve(&self, language: Language, key: &str) -> Option<String> {
        match self.lookup(language, key) {
            Ok(text) => Some(text),
            Err(miss) => {
                self.diagnostics.emit(Diagnostic::MissingTranslation {
                    key: key.to_string(),
                    language,
                    segment: miss.segment,
                    reason: miss.reason,
                });
                None
            }
        }
    }

    /// Resolve `key` without reporting misses.
    ///
    /// # Errors
    ///
    /// Returns the [`Miss`] from [`lookup`].
    pub fn lookup(&self, language: Language, key: &str) -> Result<String, Miss> {
        lookup(self.config.tree(), language, key, self.layout)
    }
}
