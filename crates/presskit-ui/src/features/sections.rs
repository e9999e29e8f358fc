//! Builds gallery and video markup from configuration sections.
//!
//! # Design
//! - Sections are walked once in document order; output is appended to
//!   containers that already exist in the page markup.
//! - Elements are created one by one and configuration strings only ever
//!   reach attributes or text, never markup.
//! - A section whose container is missing is reported and skipped; the
//!   remaining sections still render.

use presskit_config::{GallerySection, Section, VideoSection};
use presskit_dom::{Dom, DomError};

use crate::core::diagnostics::{Diagnostic, Diagnostics};
use crate::features::language::I18N_ATTR;

/// Embed URL prefix for video items.
pub const EMBED_URL: &str = "https://www.youtube.com/embed/";
const EMBED_ALLOW: &str =
    "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture";
const PREV_GLYPH: &str = "\u{276e}";
const NEXT_GLYPH: &str = "\u{276f}";

/// Elements a live-show carousel needs once its section is rendered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CarouselMount<N> {
    /// Title of the section the carousel belongs to.
    pub section: String,
    /// Strip that gets translated (`div.carousel-wrapper`).
    pub strip: N,
    /// Previous button.
    pub prev: N,
    /// Next button.
    pub next: N,
    /// First item, measured for the step width.
    pub first_item: Option<N>,
    /// Number of items in the strip.
    pub item_count: usize,
}

/// What one render pass produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderReport<N> {
    /// Gallery sections rendered.
    pub galleries: usize,
    /// Video sections rendered.
    pub video_sections: usize,
    /// Carousels ready to be attached.
    pub carousels: Vec<CarouselMount<N>>,
    /// Sections skipped (unsupported type, missing container, DOM failure).
    pub skipped: usize,
}

impl<N> Default for RenderReport<N> {
    fn default() -> Self {
        Self {
            galleries: 0,
            video_sections: 0,
            carousels: Vec::new(),
            skipped: 0,
        }
    }
}

/// Renders configuration sections into their page containers.
pub struct SectionRenderer<'a, D: Dom> {
    dom: &'a D,
    diagnostics: Diagnostics,
}

impl<'a, D: Dom> SectionRenderer<'a, D> {
    /// Renderer writing into `dom`.
    #[must_use]
    pub const fn new(dom: &'a D, diagnostics: Diagnostics) -> Self {
        Self { dom, diagnostics }
    }

    /// Render every section in order.
    #[must_use]
    pub fn render(&self, sections: &[Section]) -> RenderReport<D::Node> {
        let mut report = RenderReport::default();
        for section in sections {
            match section {
                Section::Gallery(gallery) => {
                    if self.gallery(gallery) {
                        report.galleries += 1;
                    } else {
                        report.skipped += 1;
                    }
                }
                Section::Videos(videos) => {
                    let Some(container) = self.container(&videos.container_id(), &videos.title)
                    else {
                        report.skipped += 1;
                        continue;
                    };
                    match self.videos(videos, &container) {
                        Ok(mount) => {
                            report.video_sections += 1;
                            report.carousels.extend(mount);
                        }
                        Err(err) => {
                            self.dom_failure(&videos.title, &err);
                            report.skipped += 1;
                        }
                    }
                }
                Section::Unsupported => {
                    tracing::debug!("skipping unsupported section type");
                    report.skipped += 1;
                }
            }
        }
        tracing::info!(
            galleries = report.galleries,
            video_sections = report.video_sections,
            carousels = report.carousels.len(),
            skipped = report.skipped,
            "sections rendered"
        );
        report
    }

    fn container(&self, id: &str, section: &str) -> Option<D::Node> {
        let found = self.dom.element_by_id(id);
        if found.is_none() {
            self.diagnostics.emit(Diagnostic::MissingContainer {
                container: id.to_string(),
                section: section.to_string(),
            });
        }
        found
    }

    fn dom_failure(&self, section: &str, err: &DomError) {
        self.diagnostics.emit(Diagnostic::DomFailure {
            context: format!("rendering section '{section}'"),
            detail: err.to_string(),
        });
    }

    fn gallery(&self, gallery: &GallerySection) -> bool {
        let Some(container) = self.container(&gallery.container_id(), &gallery.title) else {
            return false;
        };
        let built = gallery
            .items
            .iter()
            .try_for_each(|item| {
                let tile = self.dom.append_element(&container, "div", Some("gallery-item"))?;
                let image = self.dom.append_element(&tile, "img", None)?;
                self.dom.set_attribute(&image, "src", &item.src)?;
                self.dom.set_attribute(&image, "alt", &item.caption)?;
                self.caption(&tile, &item.translation_key(), &item.caption)
            });
        match built {
            Ok(()) => true,
            Err(err) => {
                self.dom_failure(&gallery.title, &err);
                false
            }
        }
    }

    fn videos(
        &self,
        videos: &VideoSection,
        container: &D::Node,
    ) -> Result<Option<CarouselMount<D::Node>>, DomError> {
        let live = videos.is_live_show();
        let host = if live {
            self.dom
                .append_element(container, "div", Some("carousel-container"))?
        } else {
            container.clone()
        };
        let strip = self
            .dom
            .append_element(&host, "div", Some("carousel-wrapper"))?;

        let mut first_item = None;
        for item in &videos.items {
            let tile = self.dom.append_element(&strip, "div", Some("video-item"))?;
            let frame_box = self
                .dom
                .append_element(&tile, "div", Some("video-container"))?;
            let frame = self.dom.append_element(&frame_box, "iframe", None)?;
            self.dom
                .set_attribute(&frame, "src", &format!("{EMBED_URL}{}?rel=0", item.id))?;
            self.dom.set_attribute(&frame, "frameborder", "0")?;
            self.dom.set_attribute(&frame, "allow", EMBED_ALLOW)?;
            self.dom.set_attribute(&frame, "allowfullscreen", "")?;
            self.caption(&tile, &videos.caption_key(item), &item.title)?;
            if first_item.is_none() {
                first_item = Some(tile);
            }
        }

        if !live {
            return Ok(None);
        }
        let controls = self
            .dom
            .append_element(&host, "div", Some("carousel-controls"))?;
        let prev = self
            .dom
            .append_element(&controls, "button", Some("carousel-prev"))?;
        self.dom.set_text(&prev, PREV_GLYPH);
        let next = self
            .dom
            .append_element(&controls, "button", Some("carousel-next"))?;
        self.dom.set_text(&next, NEXT_GLYPH);

        Ok(Some(CarouselMount {
            section: videos.title.clone(),
            strip,
            prev,
            next,
            first_item,
            item_count: videos.items.len(),
        }))
    }

    fn caption(&self, parent: &D::Node, key: &str, text: &str) -> Result<(), DomError> {
        let caption = self.dom.append_element(parent, "p", Some("caption"))?;
        self.dom.set_attribute(&caption, I18N_ATTR, key)?;
        self.dom.set_text(&caption, text);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use presskit_config::Configuration;
    use presskit_dom::{MemoryDom, Selector};
    use serde_json::json;

    use super::*;
    use crate::core::diagnostics::RecordingSink;

    fn sections(value: serde_json::Value) -> Configuration {
        Configuration::from_value(json!({ "sections": value })).expect("fixture parses")
    }

    #[test]
    fn gallery_items_become_tiles() {
        let dom = MemoryDom::new();
        let gallery = dom.element(dom.body_id(), "div").id("press-photos-gallery").finish();
        let sink = RecordingSink::default();
        let config = sections(json!([{
            "type": "gallery",
            "title": "Press Photos",
            "items": [{ "src": "img/a.jpg", "caption": "On Stage" }]
        }]));

        let report = SectionRenderer::new(&dom, sink.diagnostics()).render(config.sections());

        assert_eq!(report.galleries, 1);
        let tiles = dom.children(gallery);
        assert_eq!(tiles.len(), 1);
        assert!(dom.has_class(&tiles[0], "gallery-item"));
        let parts = dom.children(tiles[0]);
        assert_eq!(dom.tag_name(&parts[0]), "img");
        assert_eq!(dom.attribute(&parts[0], "src").as_deref(), Some("img/a.jpg"));
        assert_eq!(dom.attribute(&parts[0], "alt").as_deref(), Some("On Stage"));
        assert!(dom.has_class(&parts[1], "caption"));
        assert_eq!(dom.attribute(&parts[1], I18N_ATTR).as_deref(), Some("gallery.onstage"));
        assert_eq!(dom.text(&parts[1]), "On Stage");
        assert!(sink.records().is_empty());
    }

    #[test]
    fn markup_in_configuration_stays_text() {
        let dom = MemoryDom::new();
        let gallery = dom.element(dom.body_id(), "div").id("photos-gallery").finish();
        let config = sections(json!([{
            "type": "gallery",
            "title": "Photos",
            "items": [{ "src": "x.jpg", "caption": "<b>bold</b>" }]
        }]));
        let _report = SectionRenderer::new(&dom, Diagnostics::tracing_only()).render(config.sections());
        assert!(dom.find_within(gallery, &Selector::Tag("b")).is_empty());
        let captions = dom.find_within(gallery, &Selector::Class("caption"));
        assert_eq!(dom.text(&captions[0]), "<b>bold</b>");
    }

    #[test]
    fn live_show_section_gets_a_carousel() {
        let dom = MemoryDom::new();
        let live = dom.element(dom.body_id(), "div").id("live-shows-gallery").finish();
        let config = sections(json!([{
            "type": "videos",
            "title": "Live Shows",
            "items": [
                { "id": "abc123", "title": "Acoustic Set" },
                { "id": "def456", "title": "Festival" }
            ]
        }]));

        let report = SectionRenderer::new(&dom, Diagnostics::tracing_only()).render(config.sections());

        assert_eq!(report.carousels.len(), 1);
        let mount = &report.carousels[0];
        assert_eq!(mount.item_count, 2);
        let hosts = dom.children(live);
        assert_eq!(hosts.len(), 1);
        assert!(dom.has_class(&hosts[0], "carousel-container"));
        let layout = dom.children(hosts[0]);
        assert_eq!(layout, vec![mount.strip, dom.parent(mount.prev).expect("controls")]);
        assert!(dom.has_class(&layout[1], "carousel-controls"));
        assert_eq!(dom.text(&mount.prev), "\u{276e}");
        assert_eq!(dom.text(&mount.next), "\u{276f}");

        let frames = dom.find_within(mount.strip, &Selector::Tag("iframe"));
        assert_eq!(
            dom.attribute(&frames[0], "src").as_deref(),
            Some("https://www.youtube.com/embed/abc123?rel=0")
        );
        let captions = dom.find_within(mount.strip, &Selector::Class("caption"));
        assert_eq!(
            dom.attribute(&captions[0], I18N_ATTR).as_deref(),
            Some("videos.liveShows.acousticset")
        );
        assert_eq!(mount.first_item, dom.children(mount.strip).first().copied());
    }

    #[test]
    fn other_video_sections_render_without_controls() {
        let dom = MemoryDom::new();
        let videos = dom.element(dom.body_id(), "div").id("video-container").finish();
        let config = sections(json!([{
            "type": "videos",
            "title": "Music Videos",
            "items": [{ "id": "xyz", "title": "First Single" }]
        }]));

        let report = SectionRenderer::new(&dom, Diagnostics::tracing_only()).render(config.sections());

        assert_eq!(report.video_sections, 1);
        assert!(report.carousels.is_empty());
        let strip = dom.children(videos);
        assert!(dom.has_class(&strip[0], "carousel-wrapper"));
        assert!(dom.find_within(videos, &Selector::Class("carousel-controls")).is_empty());
        let captions = dom.find_within(videos, &Selector::Class("caption"));
        assert_eq!(
            dom.attribute(&captions[0], I18N_ATTR).as_deref(),
            Some("videos.musicVideos.firstsingle")
        );
    }

    #[test]
    fn missing_containers_are_reported_and_skipped() {
        let dom = MemoryDom::new();
        let _videos = dom.element(dom.body_id(), "div").id("video-container").finish();
        let sink = RecordingSink::default();
        let config = sections(json!([
            { "type": "gallery", "title": "Backstage", "items": [{ "src": "a.jpg", "caption": "A" }] },
            { "type": "podcast", "title": "Episodes" },
            { "type": "videos", "title": "Clips", "items": [{ "id": "q", "title": "Q" }] }
        ]));

        let report = SectionRenderer::new(&dom, sink.diagnostics()).render(config.sections());

        assert_eq!(report.galleries, 0);
        assert_eq!(report.video_sections, 1);
        assert_eq!(report.skipped, 2);
        assert_eq!(
            sink.records(),
            vec![Diagnostic::MissingContainer {
                container: "backstage-gallery".into(),
                section: "Backstage".into(),
            }]
        );
    }

    #[test]
    fn explicit_container_overrides_derived_id() {
        let dom = MemoryDom::new();
        let target = dom.element(dom.body_id(), "section").id("tour").finish();
        let config = sections(json!([{
            "type": "videos",
            "title": "Tour Diary",
            "container": "tour",
            "carousel": true,
            "items": [{ "id": "t1", "title": "Day One", "key": "dayOne" }]
        }]));

        let report = SectionRenderer::new(&dom, Diagnostics::tracing_only()).render(config.sections());

        assert_eq!(report.carousels.len(), 1);
        assert_eq!(dom.children(target).len(), 1);
        let captions = dom.find_within(target, &Selector::Class("caption"));
        assert_eq!(
            dom.attribute(&captions[0], I18N_ATTR).as_deref(),
            Some("videos.liveShows.dayOne")
        );
    }
}
