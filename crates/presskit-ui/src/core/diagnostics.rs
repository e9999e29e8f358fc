//! Structured reporting for non-fatal failures.
//!
//! # Design
//! - Nothing in the runtime surfaces errors to the visitor; every degraded
//!   path produces a [`Diagnostic`] instead.
//! - Each record is logged through `tracing` and then handed to an optional
//!   [`DiagnosticSink`], so tests assert on values instead of log text.

use std::cell::RefCell;
use std::fmt::{self, Display, Formatter};
use std::rc::Rc;

use serde::Serialize;

use crate::i18n::{Language, MissReason};

/// One non-fatal failure.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// Configuration could not be fetched or parsed.
    ConfigUnavailable {
        /// Location that was requested.
        location: String,
        /// Error chain rendered as text.
        detail: String,
    },
    /// Configuration loaded with a consistency finding.
    ConfigIssue {
        /// Finding rendered as text.
        detail: String,
    },
    /// Translation key did not resolve.
    MissingTranslation {
        /// Full dotted key.
        key: String,
        /// Language the lookup ran for.
        language: Language,
        /// Segment where the walk stopped.
        segment: String,
        /// Why the walk stopped.
        reason: MissReason,
    },
    /// Section target element is not on the page.
    MissingContainer {
        /// Element id that was looked up.
        container: String,
        /// Section (or page block) that needed it.
        section: String,
    },
    /// Language code outside the supported set.
    UnsupportedLanguage {
        /// Code as authored.
        code: String,
    },
    /// No media links authored for a language.
    MediaLinksMissing {
        /// Language whose list is missing.
        language: Language,
    },
    /// Language preference could not be persisted.
    StorageFailed {
        /// Error rendered as text.
        detail: String,
    },
    /// A DOM write was rejected.
    DomFailure {
        /// What was being rendered.
        context: String,
        /// Error rendered as text.
        detail: String,
    },
    /// Root-element option carried an unusable value.
    InvalidOption {
        /// Attribute name.
        name: String,
        /// Rejected value.
        value: String,
    },
}

/// How loud a diagnostic is in the log.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    /// Page is left unpopulated.
    Error,
    /// Part of the page degrades.
    Warn,
}

impl Diagnostic {
    /// Stable code for filtering.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::ConfigUnavailable { .. } => "config_unavailable",
            Self::ConfigIssue { .. } => "config_issue",
            Self::MissingTranslation { .. } => "missing_translation",
            Self::MissingContainer { .. } => "missing_container",
            Self::UnsupportedLanguage { .. } => "unsupported_language",
            Self::MediaLinksMissing { .. } => "media_links_missing",
            Self::StorageFailed { .. } => "storage_failed",
            Self::DomFailure { .. } => "dom_failure",
            Self::InvalidOption { .. } => "invalid_option",
        }
    }

    /// Log level for the record.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        match self {
            Self::ConfigUnavailable { .. } | Self::DomFailure { .. } => Severity::Error,
            _ => Severity::Warn,
        }
    }
}

impl Display for Diagnostic {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConfigUnavailable { location, detail } => {
                write!(formatter, "error loading configuration from {location}: {detail}")
            }
            Self::ConfigIssue { detail } => write!(formatter, "configuration issue: {detail}"),
            Self::MissingTranslation {
                key,
                language,
                segment,
                reason,
            } => write!(
                formatter,
                "translation missing for key: {key} in language: {language} ({segment} {reason})"
            ),
            Self::MissingContainer { container, section } => {
                write!(formatter, "container not found: {container} (for {section})")
            }
            Self::UnsupportedLanguage { code } => {
                write!(formatter, "unsupported language code '{code}'")
            }
            Self::MediaLinksMissing { language } => {
                write!(formatter, "no media links found for language: {language}")
            }
            Self::StorageFailed { detail } => {
                write!(formatter, "language preference not saved: {detail}")
            }
            Self::DomFailure { context, detail } => {
                write!(formatter, "DOM update failed while {context}: {detail}")
            }
            Self::InvalidOption { name, value } => {
                write!(formatter, "ignoring invalid value '{value}' for {name}")
            }
        }
    }
}

/// Receiver for diagnostics in addition to the log.
pub trait DiagnosticSink {
    /// Accept one record.
    fn record(&self, diagnostic: &Diagnostic);
}

/// Cheaply cloneable handle every component reports through.
#[derive(Clone, Default)]
pub struct Diagnostics {
    sink: Option<Rc<dyn DiagnosticSink>>,
}

impl Diagnostics {
    /// Log and forward to `sink`.
    #[must_use]
    pub fn new(sink: Rc<dyn DiagnosticSink>) -> Self {
        Self { sink: Some(sink) }
    }

    /// Log only.
    #[must_use]
    pub const fn tracing_only() -> Self {
        Self { sink: None }
    }

    /// Report `diagnostic`.
    pub fn emit(&self, diagnostic: Diagnostic) {
        log(&diagnostic);
        if let Some(sink) = &self.sink {
            sink.record(&diagnostic);
        }
    }
}

fn log(diagnostic: &Diagnostic) {
    let details = serde_json::to_string(diagnostic).unwrap_or_default();
    let code = diagnostic.code();
    match diagnostic.severity() {
        Severity::Error => tracing::error!(code, %details, "{diagnostic}"),
        Severity::Warn => tracing::warn!(code, %details, "{diagnostic}"),
    }
}

/// Sink that keeps every record in memory.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    records: Rc<RefCell<Vec<Diagnostic>>>,
}

impl RecordingSink {
    /// Snapshot of the records so far.
    #[must_use]
    pub fn records(&self) -> Vec<Diagnostic> {
        self.records.borrow().clone()
    }

    /// Number of records with the given [`Diagnostic::code`].
    #[must_use]
    pub fn count(&self, code: &str) -> usize {
        self.records
            .borrow()
            .iter()
            .filter(|diagnostic| diagnostic.code() == code)
            .count()
    }

    /// Drop every record.
    pub fn clear(&self) {
        self.records.borrow_mut().clear();
    }

    /// Handle that forwards into this sink.
    #[must_use]
    pub fn diagnostics(&self) -> Diagnostics {
        Diagnostics::new(Rc::new(self.clone()))
    }
}

impl DiagnosticSink for RecordingSink {
    fn record(&self, diagnostic: &Diagnostic) {
        self.records.borrow_mut().push(diagnostic.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_sink_collects_in_order() {
        let sink = RecordingSink::default();
        let diagnostics = sink.diagnostics();
        diagnostics.emit(Diagnostic::UnsupportedLanguage { code: "fr".into() });
        diagnostics.emit(Diagnostic::MediaLinksMissing {
            language: Language::Es,
        });
        assert_eq!(sink.count("unsupported_language"), 1);
        assert_eq!(sink.records().len(), 2);
        sink.clear();
        assert!(sink.records().is_empty());
    }

    #[test]
    fn tracing_only_handle_accepts_records() {
        Diagnostics::tracing_only().emit(Diagnostic::ConfigIssue {
            detail: "duplicate container".into(),
        });
    }

    #[test]
    fn serializes_with_kind_tag() {
        let diagnostic = Diagnostic::MissingTranslation {
            key: "videos.liveShows.acoustic".into(),
            language: Language::Es,
            segment: "acoustic".into(),
            reason: MissReason::Absent,
        };
        let value = serde_json::to_value(&diagnostic).expect("serialize");
        assert_eq!(value["kind"], "missing_translation");
        assert_eq!(value["language"], "es");
        assert_eq!(value["reason"], "absent");
        assert_eq!(
            diagnostic.to_string(),
            "translation missing for key: videos.liveShows.acoustic in language: es (acoustic absent)"
        );
    }

    #[test]
    fn severities_follow_impact() {
        assert_eq!(
            Diagnostic::ConfigUnavailable {
                location: "/config.json".into(),
                detail: "HTTP 404".into(),
            }
            .severity(),
            Severity::Error
        );
        assert_eq!(
            Diagnostic::StorageFailed {
                detail: "quota".into()
            }
            .severity(),
            Severity::Warn
        );
    }
}
