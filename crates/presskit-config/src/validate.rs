//! Non-fatal consistency checks for configuration documents.
//!
//! # Design
//! - Findings never reject a document; callers report them and keep rendering.
//! - Entries skipped while decoding come first, then the consistency checks
//!   in document order.
//! - Derived ids and key fragments are checked here so collisions surface
//!   before they silently merge two sections into one container.

use std::collections::{BTreeMap, BTreeSet};

use thiserror::Error;

use crate::ids;
use crate::model::{Configuration, Section};

/// A single validation finding.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationIssue {
    /// Entry that does not fit the document model and was left out.
    #[error("{path} was skipped: {detail}")]
    Malformed {
        /// Location of the entry, e.g. `sections[2].items[0]`.
        path: String,
        /// Decoder message.
        detail: String,
    },
    /// Section has an empty title.
    #[error("section #{index} has an empty title")]
    EmptyTitle {
        /// Position of the section among the decoded sections.
        index: usize,
    },
    /// Section type is not rendered by this runtime.
    #[error("section #{index} has an unsupported type")]
    UnsupportedSection {
        /// Position of the section in `sections`.
        index: usize,
    },
    /// Section maps to a container id that cannot be looked up.
    #[error("section '{section}' maps to invalid container id '{container}'")]
    InvalidContainer {
        /// Section title.
        section: String,
        /// Offending container id.
        container: String,
    },
    /// Two sections render into the same container.
    #[error("sections '{first}' and '{second}' both render into '{container}'")]
    DuplicateContainer {
        /// Shared container id.
        container: String,
        /// Title of the earlier section.
        first: String,
        /// Title of the later section.
        second: String,
    },
    /// Gallery entry without an image path.
    #[error("gallery '{section}' item #{index} has no src")]
    EmptySource {
        /// Section title.
        section: String,
        /// Position of the item.
        index: usize,
    },
    /// Video identifier is empty or not URL-safe.
    #[error("video '{section}' item #{index} has invalid id '{id}'")]
    InvalidVideoId {
        /// Section title.
        section: String,
        /// Position of the item.
        index: usize,
        /// Offending identifier.
        id: String,
    },
    /// Item key fragment is empty or contains a dot.
    #[error("'{section}' item #{index} has unusable translation key fragment '{fragment}'")]
    InvalidKeyFragment {
        /// Section title.
        section: String,
        /// Position of the item.
        index: usize,
        /// Offending fragment.
        fragment: String,
    },
    /// Two items of one section share a translation key.
    #[error("'{section}' has more than one item bound to '{key}'")]
    DuplicateKey {
        /// Section title.
        section: String,
        /// Shared key.
        key: String,
    },
    /// Media link without a target URL.
    #[error("media link #{index} for '{language}' has no url")]
    EmptyLinkUrl {
        /// Language code of the list.
        language: String,
        /// Position of the link.
        index: usize,
    },
}

/// Collect every finding for `config`, in document order.
#[must_use]
pub fn validate(config: &Configuration) -> Vec<ValidationIssue> {
    let mut issues = config.decode_findings().to_vec();
    let mut containers: BTreeMap<String, String> = BTreeMap::new();

    for (index, section) in config.sections().iter().enumerate() {
        let (Some(title), Some(container)) = (section.title(), section.container_id()) else {
            continue;
        };
        if title.trim().is_empty() {
            issues.push(ValidationIssue::EmptyTitle { index });
        }
        if !ids::is_valid_dom_id(&container) {
            issues.push(ValidationIssue::InvalidContainer {
                section: title.to_string(),
                container: container.clone(),
            });
        }
        if let Some(first) = containers.get(&container) {
            issues.push(ValidationIssue::DuplicateContainer {
                container: container.clone(),
                first: first.clone(),
                second: title.to_string(),
            });
        } else {
            containers.insert(container, title.to_string());
        }

        match section {
            Section::Gallery(gallery) => {
                let mut keys = BTreeSet::new();
                for (item_index, item) in gallery.items.iter().enumerate() {
                    if item.src.trim().is_empty() {
                        issues.push(ValidationIssue::EmptySource {
                            section: title.to_string(),
                            index: item_index,
                        });
                    }
                    check_key(
                        &mut issues,
                        &mut keys,
                        title,
                        item_index,
                        &item.key_fragment(),
                        item.translation_key(),
                    );
                }
            }
            Section::Videos(videos) => {
                let mut keys = BTreeSet::new();
                for (item_index, item) in videos.items.iter().enumerate() {
                    if !is_valid_video_id(&item.id) {
                        issues.push(ValidationIssue::InvalidVideoId {
                            section: title.to_string(),
                            index: item_index,
                            id: item.id.clone(),
                        });
                    }
                    check_key(
                        &mut issues,
                        &mut keys,
                        title,
                        item_index,
                        &item.key_fragment(),
                        videos.caption_key(item),
                    );
                }
            }
            Section::Unsupported => {}
        }
    }

    for language in config.media_link_languages() {
        let Some(items) = config
            .media_links(language)
            .and_then(|list| list.items.as_ref())
        else {
            continue;
        };
        for (index, link) in items.iter().enumerate() {
            if link.url.trim().is_empty() {
                issues.push(ValidationIssue::EmptyLinkUrl {
                    language: language.to_string(),
                    index,
                });
            }
        }
    }

    issues
}

fn check_key(
    issues: &mut Vec<ValidationIssue>,
    seen: &mut BTreeSet<String>,
    section: &str,
    index: usize,
    fragment: &str,
    key: String,
) {
    if !ids::is_valid_key_fragment(fragment) {
        issues.push(ValidationIssue::InvalidKeyFragment {
            section: section.to_string(),
            index,
            fragment: fragment.to_string(),
        });
    }
    if seen.contains(&key) {
        issues.push(ValidationIssue::DuplicateKey {
            section: section.to_string(),
            key,
        });
    } else {
        seen.insert(key);
    }
}

fn is_valid_video_id(id: &str) -> bool {
    !id.is_empty()
        && id
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || ch == '-' || ch == '_')
}
