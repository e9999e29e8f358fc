//! Typed view over the site configuration document.
//!
//! # Design
//! - The raw JSON tree is retained for translation lookup; translation
//!   dictionaries have no fixed schema.
//! - `sections` and `mediaLinks` are decoded entry by entry. An entry that
//!   does not fit the model is left out and recorded as a
//!   [`ValidationIssue::Malformed`]; its neighbours and the dictionaries are
//!   unaffected.
//! - Unknown section types decode to [`Section::Unsupported`] and are
//!   recorded the same way.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ConfigError;
use crate::ids;
use crate::validate::ValidationIssue;

/// Section title that marks the live-show video listing.
pub const LIVE_SHOWS_TITLE: &str = "Live Shows";
/// Container id the live-show carousel renders into.
pub const LIVE_SHOWS_CONTAINER: &str = "live-shows-gallery";
/// Container id for every other video section.
pub const VIDEO_CONTAINER: &str = "video-container";

const LIVE_SHOWS_SCOPE: &str = "videos.liveShows";
const MUSIC_VIDEOS_SCOPE: &str = "videos.musicVideos";
const GALLERY_SCOPE: &str = "gallery";

/// Parsed configuration document. Immutable once built.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Configuration {
    tree: Value,
    sections: Vec<Section>,
    media_links: BTreeMap<String, MediaLinkList>,
    decode_findings: Vec<ValidationIssue>,
}

impl Configuration {
    /// Parse a configuration document from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::NotAnObject`] when the root is not an object.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let tree: Value =
            serde_json::from_str(raw).map_err(|source| ConfigError::Parse { source })?;
        Self::from_value(tree)
    }

    /// Build a configuration from an already decoded JSON tree.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotAnObject`] when the root is not an object.
    /// Entries of `sections` or `mediaLinks` with the wrong shape are skipped
    /// and listed by [`Configuration::decode_findings`].
    pub fn from_value(tree: Value) -> Result<Self, ConfigError> {
        if !tree.is_object() {
            return Err(ConfigError::NotAnObject {
                found: json_type_name(&tree),
            });
        }
        let mut findings = Vec::new();
        let sections = decode_sections(tree.get("sections"), &mut findings);
        let media_links = decode_media_links(tree.get("mediaLinks"), &mut findings);
        if !findings.is_empty() {
            tracing::debug!(findings = findings.len(), "configuration entries skipped");
        }
        Ok(Self {
            tree,
            sections,
            media_links,
            decode_findings: findings,
        })
    }

    /// Configuration with no content; every lookup against it misses.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether the document carries no data at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match &self.tree {
            Value::Object(map) => map.is_empty(),
            Value::Null => true,
            _ => false,
        }
    }

    /// Raw JSON tree used for translation lookup.
    #[must_use]
    pub const fn tree(&self) -> &Value {
        &self.tree
    }

    /// Content sections in document order, without the skipped ones.
    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Entries left out of the typed view, plus unsupported section types,
    /// in document order.
    #[must_use]
    pub fn decode_findings(&self) -> &[ValidationIssue] {
        &self.decode_findings
    }

    /// First gallery section, used by the media page press-photo strip.
    #[must_use]
    pub fn first_gallery(&self) -> Option<&GallerySection> {
        self.sections.iter().find_map(|section| match section {
            Section::Gallery(gallery) => Some(gallery),
            _ => None,
        })
    }

    /// Media links authored for `language`.
    #[must_use]
    pub fn media_links(&self, language: &str) -> Option<&MediaLinkList> {
        self.media_links.get(language)
    }

    /// Languages with a `mediaLinks` entry.
    pub fn media_link_languages(&self) -> impl Iterator<Item = &str> {
        self.media_links.keys().map(String::as_str)
    }
}

/// One renderable content block.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Section {
    /// Image gallery.
    Gallery(GallerySection),
    /// Embedded video listing.
    Videos(VideoSection),
    /// Section type this runtime does not render.
    #[serde(other)]
    Unsupported,
}

impl Section {
    /// Display title when the section type carries one.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        match self {
            Self::Gallery(gallery) => Some(&gallery.title),
            Self::Videos(videos) => Some(&videos.title),
            Self::Unsupported => None,
        }
    }

    /// Container id the section renders into.
    #[must_use]
    pub fn container_id(&self) -> Option<String> {
        match self {
            Self::Gallery(gallery) => Some(gallery.container_id()),
            Self::Videos(videos) => Some(videos.container_id()),
            Self::Unsupported => None,
        }
    }
}

/// Gallery section.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GallerySection {
    /// Display title; also the source of the derived container id.
    pub title: String,
    /// Explicit container id overriding the derived one.
    pub container: Option<String>,
    /// Gallery entries in display order.
    pub items: Vec<GalleryItem>,
}

impl GallerySection {
    /// Explicit container id, or `<slug(title)>-gallery`.
    #[must_use]
    pub fn container_id(&self) -> String {
        self.container
            .clone()
            .unwrap_or_else(|| ids::gallery_container_id(&self.title))
    }
}

/// Gallery entry.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GalleryItem {
    /// Image path relative to the site root.
    pub src: String,
    /// Caption, used as alt text and as the source of the key fragment.
    pub caption: String,
    /// Media kind; the press-photo strip only shows `image` entries.
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Explicit translation-key fragment.
    pub key: Option<String>,
}

impl GalleryItem {
    /// Whether this entry is a still image.
    #[must_use]
    pub fn is_image(&self) -> bool {
        self.kind.as_deref() == Some("image")
    }

    /// Explicit key fragment, or the compacted caption.
    #[must_use]
    pub fn key_fragment(&self) -> String {
        self.key
            .clone()
            .unwrap_or_else(|| ids::compact_key(&self.caption))
    }

    /// Translation key bound to the caption element.
    #[must_use]
    pub fn translation_key(&self) -> String {
        format!("{GALLERY_SCOPE}.{}", self.key_fragment())
    }
}

/// Video section.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct VideoSection {
    /// Display title; `Live Shows` marks the carousel listing.
    pub title: String,
    /// Explicit container id overriding the derived one.
    pub container: Option<String>,
    /// Explicit carousel flag overriding the title check.
    pub carousel: Option<bool>,
    /// Videos in display order.
    pub items: Vec<VideoItem>,
}

impl VideoSection {
    /// Whether this section is the live-show listing with carousel controls.
    #[must_use]
    pub fn is_live_show(&self) -> bool {
        self.carousel.unwrap_or(self.title == LIVE_SHOWS_TITLE)
    }

    /// Explicit container id, or the fixed live-show / video container.
    #[must_use]
    pub fn container_id(&self) -> String {
        self.container.clone().unwrap_or_else(|| {
            if self.is_live_show() {
                LIVE_SHOWS_CONTAINER.to_string()
            } else {
                VIDEO_CONTAINER.to_string()
            }
        })
    }

    /// Translation key bound to the caption of `item`.
    #[must_use]
    pub fn caption_key(&self, item: &VideoItem) -> String {
        let scope = if self.is_live_show() {
            LIVE_SHOWS_SCOPE
        } else {
            MUSIC_VIDEOS_SCOPE
        };
        format!("{scope}.{}", item.key_fragment())
    }
}

/// Video entry.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct VideoItem {
    /// External (YouTube) video identifier.
    pub id: String,
    /// Caption text.
    pub title: String,
    /// Explicit translation-key fragment.
    pub key: Option<String>,
}

impl VideoItem {
    /// Explicit key fragment, or the compacted title.
    #[must_use]
    pub fn key_fragment(&self) -> String {
        self.key
            .clone()
            .unwrap_or_else(|| ids::compact_key(&self.title))
    }
}

/// Media links authored for one language.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MediaLinkList {
    /// Links in display order; `None` when the entry has no `items` field.
    pub items: Option<Vec<MediaLink>>,
}

/// External press/media link.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MediaLink {
    /// Link text.
    pub title: String,
    /// Target URL.
    pub url: String,
    /// Free-form publication date shown next to the title.
    pub date: String,
}

const fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn malformed(path: impl Into<String>, detail: impl Into<String>) -> ValidationIssue {
    ValidationIssue::Malformed {
        path: path.into(),
        detail: detail.into(),
    }
}

fn expected(kind: &str, found: &Value) -> String {
    format!("expected {kind}, found {}", json_type_name(found))
}

fn decode_sections(value: Option<&Value>, findings: &mut Vec<ValidationIssue>) -> Vec<Section> {
    let entries = match value {
        None | Some(Value::Null) => return Vec::new(),
        Some(Value::Array(entries)) => entries,
        Some(other) => {
            findings.push(malformed("sections", expected("an array", other)));
            return Vec::new();
        }
    };
    entries
        .iter()
        .enumerate()
        .filter_map(|(index, entry)| decode_section(index, entry, findings))
        .collect()
}

fn decode_section(
    index: usize,
    value: &Value,
    findings: &mut Vec<ValidationIssue>,
) -> Option<Section> {
    let path = format!("sections[{index}]");
    let Value::Object(fields) = value else {
        findings.push(malformed(path, expected("an object", value)));
        return None;
    };
    let mut header = fields.clone();
    let items = header.remove("items");
    let mut section = match Section::deserialize(Value::Object(header)) {
        Ok(section) => section,
        Err(err) => {
            findings.push(malformed(path, err.to_string()));
            return None;
        }
    };
    let items = match items {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items,
        Some(other) => {
            findings.push(malformed(format!("{path}.items"), expected("an array", &other)));
            Vec::new()
        }
    };
    match &mut section {
        Section::Gallery(gallery) => gallery.items = decode_items(&path, &items, findings),
        Section::Videos(videos) => videos.items = decode_items(&path, &items, findings),
        Section::Unsupported => findings.push(ValidationIssue::UnsupportedSection { index }),
    }
    Some(section)
}

fn decode_items<T: DeserializeOwned>(
    path: &str,
    items: &[Value],
    findings: &mut Vec<ValidationIssue>,
) -> Vec<T> {
    items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| match T::deserialize(item) {
            Ok(decoded) => Some(decoded),
            Err(err) => {
                findings.push(malformed(format!("{path}.items[{index}]"), err.to_string()));
                None
            }
        })
        .collect()
}

fn decode_media_links(
    value: Option<&Value>,
    findings: &mut Vec<ValidationIssue>,
) -> BTreeMap<String, MediaLinkList> {
    let lists = match value {
        None | Some(Value::Null) => return BTreeMap::new(),
        Some(Value::Object(lists)) => lists,
        Some(other) => {
            findings.push(malformed("mediaLinks", expected("an object", other)));
            return BTreeMap::new();
        }
    };
    let mut decoded = BTreeMap::new();
    for (language, list) in lists {
        let path = format!("mediaLinks.{language}");
        let Value::Object(fields) = list else {
            findings.push(malformed(path, expected("an object", list)));
            continue;
        };
        let items = match fields.get("items") {
            None | Some(Value::Null) => None,
            Some(Value::Array(items)) => Some(decode_items(&path, items, findings)),
            Some(other) => {
                findings.push(malformed(format!("{path}.items"), expected("an array", other)));
                None
            }
        };
        decoded.insert(language.clone(), MediaLinkList { items });
    }
    decoded
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Configuration {
        Configuration::from_value(json!({
            "pressKit": { "en": { "title": "Press" }, "es": { "title": "Prensa" } },
            "sections": [
                {
                    "type": "gallery",
                    "title": "Press Photos",
                    "items": [{ "src": "media/a.jpg", "caption": "On Stage", "type": "image" }]
                },
                {
                    "type": "videos",
                    "title": "Live Shows",
                    "items": [{ "id": "abc123", "title": "Acoustic Set" }]
                },
                {
                    "type": "videos",
                    "title": "Music Videos",
                    "container": "clips",
                    "items": [{ "id": "xyz", "title": "First Single", "key": "single" }]
                },
                { "type": "podcast", "title": "Ignored" }
            ],
            "mediaLinks": {
                "en": { "items": [{ "title": "Review", "url": "https://example.com", "date": "2024" }] },
                "es": {}
            }
        }))
        .expect("sample config parses")
    }

    #[test]
    fn sections_decode_in_order() {
        let config = sample();
        let titles: Vec<_> = config.sections().iter().map(Section::title).collect();
        assert_eq!(
            titles,
            vec![Some("Press Photos"), Some("Live Shows"), Some("Music Videos"), None]
        );
        assert!(matches!(config.sections()[3], Section::Unsupported));
        assert_eq!(
            config.decode_findings(),
            [ValidationIssue::UnsupportedSection { index: 3 }]
        );
    }

    #[test]
    fn derived_and_explicit_containers() {
        let config = sample();
        let ids: Vec<_> = config.sections().iter().map(Section::container_id).collect();
        assert_eq!(
            ids,
            vec![
                Some("press-photos-gallery".to_string()),
                Some(LIVE_SHOWS_CONTAINER.to_string()),
                Some("clips".to_string()),
                None,
            ]
        );
    }

    #[test]
    fn caption_keys_follow_section_scope() {
        let config = sample();
        let Section::Videos(live) = &config.sections()[1] else {
            panic!("expected videos section");
        };
        assert!(live.is_live_show());
        assert_eq!(
            live.caption_key(&live.items[0]),
            "videos.liveShows.acousticset"
        );
        let Section::Videos(clips) = &config.sections()[2] else {
            panic!("expected videos section");
        };
        assert!(!clips.is_live_show());
        assert_eq!(clips.caption_key(&clips.items[0]), "videos.musicVideos.single");
    }

    #[test]
    fn carousel_flag_overrides_title() {
        let section = VideoSection {
            title: "Tour".into(),
            carousel: Some(true),
            ..VideoSection::default()
        };
        assert!(section.is_live_show());
        assert_eq!(section.container_id(), LIVE_SHOWS_CONTAINER);
    }

    #[test]
    fn gallery_items_expose_keys_and_kind() {
        let config = sample();
        let gallery = config.first_gallery().expect("gallery present");
        assert!(gallery.items[0].is_image());
        assert_eq!(gallery.items[0].translation_key(), "gallery.onstage");
    }

    #[test]
    fn media_links_distinguish_missing_items() {
        let config = sample();
        let en = config.media_links("en").expect("en links");
        assert_eq!(en.items.as_ref().map(Vec::len), Some(1));
        assert!(config.media_links("es").expect("es entry").items.is_none());
        assert!(config.media_links("fr").is_none());
        assert_eq!(config.media_link_languages().collect::<Vec<_>>(), vec!["en", "es"]);
    }

    #[test]
    fn rejects_non_object_roots() {
        let err = Configuration::from_json("[1, 2]").unwrap_err();
        assert!(matches!(err, ConfigError::NotAnObject { found: "array" }));
    }

    #[test]
    fn non_array_sections_are_recorded_not_fatal() {
        let config = Configuration::from_json(r#"{"sections": {"type": "gallery"}, "es": {"hi": "hola"}}"#)
            .expect("document parses");
        assert!(config.sections().is_empty());
        assert_eq!(
            config.decode_findings(),
            [ValidationIssue::Malformed {
                path: "sections".into(),
                detail: "expected an array, found object".into(),
            }]
        );
        assert_eq!(config.tree()["es"]["hi"], "hola");
    }

    #[test]
    fn bad_entries_are_skipped_one_at_a_time() {
        let config = Configuration::from_value(json!({
            "sections": [
                { "title": "No Type" },
                {
                    "type": "gallery",
                    "title": "Press Photos",
                    "items": [
                        { "src": "a.jpg", "caption": null },
                        { "src": "b.jpg", "caption": "Kept" }
                    ]
                },
                "stray"
            ],
            "mediaLinks": {
                "en": { "items": [
                    { "title": "Old", "url": "https://example.com/old", "date": 2024 },
                    { "title": "New", "url": "https://example.com/new", "date": "2025" }
                ] },
                "es": "none",
                "fr": { "items": "later" }
            }
        }))
        .expect("document parses");

        assert_eq!(config.sections().len(), 1);
        let gallery = config.first_gallery().expect("gallery kept");
        assert_eq!(gallery.items.len(), 1);
        assert_eq!(gallery.items[0].caption, "Kept");
        let en = config.media_links("en").and_then(|list| list.items.as_ref());
        assert_eq!(en.map(|links| links[0].title.as_str()), Some("New"));
        assert!(config.media_links("es").is_none());
        assert!(config.media_links("fr").expect("fr entry").items.is_none());

        let paths: Vec<_> = config
            .decode_findings()
            .iter()
            .map(|issue| match issue {
                ValidationIssue::Malformed { path, .. } => path.as_str(),
                _ => "",
            })
            .collect();
        assert_eq!(
            paths,
            vec![
                "sections[0]",
                "sections[1].items[0]",
                "sections[2]",
                "mediaLinks.en.items[0]",
                "mediaLinks.es",
                "mediaLinks.fr.items",
            ]
        );
    }

    #[test]
    fn documents_without_sections_are_accepted() {
        let config = Configuration::from_json(r#"{"es": {"hello": "hola"}}"#)
            .expect("translation-only document parses");
        assert!(config.sections().is_empty());
        assert!(!config.is_empty());
        assert!(Configuration::empty().is_empty());
    }
}
