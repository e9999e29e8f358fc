//! Media page content: press-photo strip and per-language link lists.
//!
//! # Design
//! - Both lists are rendered once after the configuration loads; language
//!   changes only toggle the language-scoped blocks that hold them.
//! - Link lists are cleared before filling, so rendering twice yields the
//!   same page.

use presskit_config::{Configuration, MediaLink};
use presskit_dom::{Dom, DomError};

use crate::core::diagnostics::{Diagnostic, Diagnostics};
use crate::i18n::Language;

/// Container for the press-photo strip.
pub const PRESS_PHOTOS_CONTAINER: &str = "press-photos-gallery";
/// Prefix of the per-language link list containers.
pub const MEDIA_LINKS_PREFIX: &str = "media-links-";

/// Counts produced by one media page render.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MediaReport {
    /// Press photos appended.
    pub photos: usize,
    /// Links rendered per language, for languages that rendered.
    pub links: Vec<(Language, usize)>,
}

/// Renders the media page from the loaded configuration.
pub struct MediaPageRenderer<'a, D: Dom> {
    dom: &'a D,
    asset_prefix: &'a str,
    diagnostics: Diagnostics,
}

impl<'a, D: Dom> MediaPageRenderer<'a, D> {
    /// Renderer writing into `dom`; photo paths are prefixed with `asset_prefix`.
    #[must_use]
    pub const fn new(dom: &'a D, asset_prefix: &'a str, diagnostics: Diagnostics) -> Self {
        Self {
            dom,
            asset_prefix,
            diagnostics,
        }
    }

    /// Render press photos and every language's link list.
    #[must_use]
    pub fn render(&self, config: &Configuration) -> MediaReport {
        let photos = self.press_photos(config);
        let links = Language::all()
            .into_iter()
            .filter_map(|language| {
                self.media_links(config, language)
                    .map(|count| (language, count))
            })
            .collect();
        let report = MediaReport { photos, links };
        tracing::info!(photos = report.photos, lists = report.links.len(), "media page rendered");
        report
    }

    /// Append image entries of the first gallery section as press photos.
    #[must_use]
    pub fn press_photos(&self, config: &Configuration) -> usize {
        let Some(container) = self.dom.element_by_id(PRESS_PHOTOS_CONTAINER) else {
            self.diagnostics.emit(Diagnostic::MissingContainer {
                container: PRESS_PHOTOS_CONTAINER.to_string(),
                section: "press photos".to_string(),
            });
            return 0;
        };
        let Some(gallery) = config.first_gallery() else {
            tracing::debug!("no gallery section for press photos");
            return 0;
        };

        let mut count = 0;
        for item in gallery.items.iter().filter(|item| item.is_image()) {
            let appended = self.dom.append_element(&container, "img", None).and_then(|image| {
                self.dom
                    .set_attribute(&image, "src", &format!("{}{}", self.asset_prefix, item.src))?;
                self.dom.set_attribute(&image, "alt", &item.caption)?;
                self.dom.set_attribute(&image, "title", &item.caption)
            });
            if let Err(err) = appended {
                self.failure("rendering press photos", &err);
                break;
            }
            count += 1;
        }
        count
    }

    /// Replace the link list for `language`; `None` when nothing could render.
    #[must_use]
    pub fn media_links(&self, config: &Configuration, language: Language) -> Option<usize> {
        let id = format!("{MEDIA_LINKS_PREFIX}{}", language.code());
        let Some(container) = self.dom.element_by_id(&id) else {
            self.diagnostics.emit(Diagnostic::MissingContainer {
                container: id,
                section: format!("media links ({language})"),
            });
            return None;
        };
        self.dom.clear_children(&container);

        let Some(items) = config
            .media_links(language.code())
            .and_then(|list| list.items.as_ref())
        else {
            self.diagnostics
                .emit(Diagnostic::MediaLinksMissing { language });
            return None;
        };

        for link in items {
            if let Err(err) = self.link(&container, link) {
                self.failure("rendering media links", &err);
                return None;
            }
        }
        Some(items.len())
    }

    fn link(&self, container: &D::Node, link: &MediaLink) -> Result<(), DomError> {
        let anchor = self
            .dom
            .append_element(container, "a", Some("media-link"))?;
        self.dom.set_attribute(&anchor, "href", &link.url)?;
        self.dom.set_attribute(&anchor, "target", "_blank")?;
        self.dom.set_attribute(&anchor, "rel", "noopener noreferrer")?;
        let title = self
            .dom
            .append_element(&anchor, "span", Some("link-title"))?;
        self.dom.set_text(&title, &link.title);
        let date = self
            .dom
            .append_element(&anchor, "span", Some("link-date"))?;
        self.dom.set_text(&date, &link.date);
        Ok(())
    }

    fn failure(&self, context: &str, err: &DomError) {
        self.diagnostics.emit(Diagnostic::DomFailure {
            context: context.to_string(),
            detail: err.to_string(),
        });
    }
}
