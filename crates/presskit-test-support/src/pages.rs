//! In-memory pages mirroring the site's static markup.

use presskit_dom::{MemoryDom, NodeId};

/// Handles into a [`home_page`].
#[derive(Clone, Copy, Debug)]
pub struct HomePage {
    /// `h1[data-i18n="pressKit.title"]`.
    pub title: NodeId,
    /// `p[data-i18n="pressKit.tagline"]`.
    pub tagline: NodeId,
    /// `input[data-i18n="pressKit.email"]`.
    pub email: NodeId,
    /// `div.language-content[data-lang="en"]`.
    pub bio_en: NodeId,
    /// `div.language-content[data-lang="es"]`.
    pub bio_es: NodeId,
    /// `#press-photos-gallery`.
    pub photos: NodeId,
    /// `#live-shows-gallery`.
    pub live_shows: NodeId,
    /// `#video-container`.
    pub videos: NodeId,
}

/// Handles into a [`media_page`].
#[derive(Clone, Copy, Debug)]
pub struct MediaPage {
    /// `#press-photos-gallery`.
    pub photos: NodeId,
    /// `#media-links-en`.
    pub links_en: NodeId,
    /// `#media-links-es`.
    pub links_es: NodeId,
    /// `div.language-content[data-lang="en"]`.
    pub block_en: NodeId,
    /// `div.language-content[data-lang="es"]`.
    pub block_es: NodeId,
}

fn language_buttons(dom: &MemoryDom, parent: NodeId) {
    let nav = dom.element(parent, "nav").class("language-selector").finish();
    for code in ["en", "es"] {
        let _button = dom
            .element(nav, "button")
            .class("lang-btn")
            .attr("data-lang", code)
            .text(&code.to_ascii_uppercase())
            .finish();
    }
}

/// Landing page with selector, translatable text, language blocks and
/// section containers.
#[must_use]
pub fn home_page() -> (MemoryDom, HomePage) {
    let dom = MemoryDom::new().with_location("/index.html");
    let body = dom.body_id();
    language_buttons(&dom, body);

    let header = dom.element(body, "header").finish();
    let title = dom
        .element(header, "h1")
        .attr("data-i18n", "pressKit.title")
        .text("Press Kit")
        .finish();
    let tagline = dom
        .element(header, "p")
        .attr("data-i18n", "pressKit.tagline")
        .text("Indie folk from the coast")
        .finish();
    let email = dom
        .element(body, "input")
        .attr("type", "email")
        .attr("data-i18n", "pressKit.email")
        .finish();
    let bio_en = dom
        .element(body, "div")
        .class("language-content")
        .attr("data-lang", "en")
        .text("Biography")
        .finish();
    let bio_es = dom
        .element(body, "div")
        .class("language-content")
        .attr("data-lang", "es")
        .text("Biografía")
        .finish();
    let photos = dom.element(body, "div").id("press-photos-gallery").finish();
    let live_shows = dom.element(body, "div").id("live-shows-gallery").finish();
    let videos = dom.element(body, "div").id("video-container").finish();

    let page = HomePage {
        title,
        tagline,
        email,
        bio_en,
        bio_es,
        photos,
        live_shows,
        videos,
    };
    (dom, page)
}

/// Media page with the press-photo strip and per-language link lists.
#[must_use]
pub fn media_page() -> (MemoryDom, MediaPage) {
    let dom = MemoryDom::new().with_location("/media/media.html");
    let body = dom.body_id();
    language_buttons(&dom, body);

    let photos = dom.element(body, "div").id("press-photos-gallery").finish();
    let block_en = dom
        .element(body, "div")
        .class("language-content")
        .attr("data-lang", "en")
        .finish();
    let _heading_en = dom
        .element(block_en, "h2")
        .attr("data-i18n", "pressKit.en.title")
        .text("Press")
        .finish();
    let links_en = dom.element(block_en, "div").id("media-links-en").finish();
    let block_es = dom
        .element(body, "div")
        .class("language-content")
        .attr("data-lang", "es")
        .finish();
    let _heading_es = dom
        .element(block_es, "h2")
        .attr("data-i18n", "pressKit.es.title")
        .text("Prensa")
        .finish();
    let links_es = dom.element(block_es, "div").id("media-links-es").finish();

    let page = MediaPage {
        photos,
        links_en,
        links_es,
        block_en,
        block_es,
    };
    (dom, page)
}
