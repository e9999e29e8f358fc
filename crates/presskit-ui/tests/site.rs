//! End-to-end boots of the home and media pages against an in-memory DOM.

use anyhow::{Context, Result};
use presskit_dom::{Dom, MemoryDom, Selector};
use presskit_test_support::fixtures::{home_document, home_json, single_photo_json};
use presskit_test_support::pages::{home_page, media_page};
use presskit_ui::core::preferences::MemoryPreferences;
use presskit_ui::services::StaticSource;
use presskit_ui::{Language, PageKind, RecordingSink, Site, SiteOptions};

type MemorySite = Site<MemoryDom, MemoryPreferences>;

async fn boot(
    dom: MemoryDom,
    prefs: MemoryPreferences,
    source: &StaticSource,
    sink: &RecordingSink,
) -> MemorySite {
    let options = SiteOptions::from_dom(&dom, &sink.diagnostics());
    Site::boot(dom, options, prefs, source, sink.diagnostics()).await
}

fn display(dom: &MemoryDom, node: presskit_dom::NodeId) -> Option<String> {
    dom.style(&node, "display")
}

#[tokio::test]
async fn first_visit_shows_english_only() -> Result<()> {
    let (dom, page) = home_page();
    let sink = RecordingSink::default();
    let source = StaticSource::new("../config.json", home_json());
    let site = boot(dom, MemoryPreferences::default(), &source, &sink).await;
    let dom = site.dom();

    assert_eq!(site.active_language(), Language::En);
    assert_eq!(display(dom, page.bio_en).as_deref(), Some("block"));
    assert_eq!(display(dom, page.bio_es).as_deref(), Some("none"));
    assert_eq!(dom.text(&page.title), "Press Kit");
    assert_eq!(
        dom.attribute(&page.email, "placeholder").as_deref(),
        Some("Your email")
    );
    let labels: Vec<_> = site
        .language_buttons()
        .iter()
        .map(|(node, code)| (code.clone(), dom.text(node), dom.has_class(node, "active")))
        .collect();
    assert_eq!(
        labels,
        vec![
            ("en".to_string(), "ENGLISH".to_string(), true),
            ("es".to_string(), "SPANISH".to_string(), false),
        ]
    );
    assert!(sink.records().is_empty(), "unexpected: {:?}", sink.records());
    Ok(())
}

#[tokio::test]
async fn stored_preference_translates_generated_captions() -> Result<()> {
    let (dom, page) = home_page();
    let sink = RecordingSink::default();
    let source = StaticSource::new("../config.json", home_json());
    let site = boot(dom, MemoryPreferences::with_value("es"), &source, &sink).await;
    let dom = site.dom();

    assert_eq!(site.active_language(), Language::Es);
    assert_eq!(dom.text(&page.title), "Kit de Prensa");
    let captions: Vec<_> = dom
        .find_within(page.photos, &Selector::Class("caption"))
        .iter()
        .map(|node| dom.text(node))
        .collect();
    assert_eq!(captions, vec!["En el escenario", "Retrato"]);
    let live: Vec<_> = dom
        .find_within(page.live_shows, &Selector::Class("caption"))
        .iter()
        .map(|node| dom.text(node))
        .collect();
    assert_eq!(live, vec!["Set acústico", "Festival", "Azotea"]);
    Ok(())
}

#[tokio::test]
async fn switching_language_is_idempotent_and_persisted() -> Result<()> {
    let (dom, page) = home_page();
    let sink = RecordingSink::default();
    let prefs = MemoryPreferences::default();
    let source = StaticSource::new("../config.json", home_json());
    let mut site = boot(dom, prefs.clone(), &source, &sink).await;

    let _selected = site.set_language_code("es").context("es is supported")?;
    let once = site.dom().text(&site.dom().body_id());
    let visibility = (
        display(site.dom(), page.bio_en),
        display(site.dom(), page.bio_es),
    );
    site.set_language(Language::Es);

    assert_eq!(site.dom().text(&site.dom().body_id()), once);
    assert_eq!(
        (
            display(site.dom(), page.bio_en),
            display(site.dom(), page.bio_es)
        ),
        visibility
    );
    assert_eq!(prefs.value().as_deref(), Some("es"));
    assert_eq!(
        site.dom()
            .attribute(&page.email, "placeholder")
            .as_deref(),
        Some("Tu correo")
    );
    Ok(())
}

#[tokio::test]
async fn config_failure_leaves_authored_text_alone() -> Result<()> {
    let (dom, page) = home_page();
    let sink = RecordingSink::default();
    let source = StaticSource::failing("../config.json", 503);
    let site = boot(dom, MemoryPreferences::default(), &source, &sink).await;
    let dom = site.dom();

    assert_eq!(site.active_language(), Language::En);
    assert!(site.config().is_empty());
    assert_eq!(dom.text(&page.title), "Press Kit");
    assert_eq!(dom.text(&page.tagline), "Indie folk from the coast");
    assert_eq!(dom.attribute(&page.email, "placeholder"), None);
    let translatable = dom.query_all(&Selector::Attribute("data-i18n"));
    assert_eq!(translatable.len(), 3);
    for node in translatable {
        assert_eq!(dom.mutation_count(node), 0, "{} was written", dom.tag_name(&node));
    }
    assert!(dom.children(page.photos).is_empty());
    assert!(site.carousels().is_empty());
    let buttons: Vec<_> = site
        .language_buttons()
        .iter()
        .map(|(node, _)| dom.text(node))
        .collect();
    assert_eq!(buttons, vec!["EN", "ES"]);
    assert_eq!(sink.count("config_unavailable"), 1);
    assert_eq!(sink.count("missing_translation"), 3);
    Ok(())
}

#[tokio::test]
async fn mistyped_entries_leave_the_rest_of_the_page_working() -> Result<()> {
    let (dom, page) = home_page();
    let sink = RecordingSink::default();
    let mut document = home_document();
    document["mediaLinks"]["en"]["items"][0]["date"] = 2024.into();
    document["sections"][0]["items"][1]["caption"] = serde_json::Value::Null;
    let source = StaticSource::new("../config.json", document.to_string());
    let site = boot(dom, MemoryPreferences::with_value("es"), &source, &sink).await;
    let dom = site.dom();

    assert!(!site.config().is_empty());
    assert_eq!(dom.text(&page.title), "Kit de Prensa");
    let captions: Vec<_> = dom
        .find_within(page.photos, &Selector::Class("caption"))
        .iter()
        .map(|node| dom.text(node))
        .collect();
    assert_eq!(captions, vec!["En el escenario"]);
    assert_eq!(
        dom.find_within(page.live_shows, &Selector::Class("caption")).len(),
        3
    );
    assert_eq!(sink.count("config_unavailable"), 0);
    assert_eq!(sink.count("config_issue"), 2);
    assert_eq!(sink.count("missing_translation"), 0);
    Ok(())
}

#[tokio::test]
async fn single_gallery_item_renders_one_image() -> Result<()> {
    let (dom, page) = home_page();
    let sink = RecordingSink::default();
    let source = StaticSource::new("../config.json", single_photo_json());
    let site = boot(dom, MemoryPreferences::default(), &source, &sink).await;

    let images = site.dom().find_within(page.photos, &Selector::Tag("img"));
    assert_eq!(images.len(), 1);
    let src = site
        .dom()
        .attribute(&images[0], "src")
        .context("image has src")?;
    assert!(src.ends_with("a.jpg"));
    assert_eq!(
        site.dom().attribute(&images[0], "alt").as_deref(),
        Some("One")
    );
    Ok(())
}

#[tokio::test]
async fn live_show_carousel_is_clamped() -> Result<()> {
    let (dom, page) = home_page();
    let sink = RecordingSink::default();
    let source = StaticSource::new("../config.json", home_json());
    let mut site = boot(dom, MemoryPreferences::default(), &source, &sink).await;

    assert_eq!(site.carousel_controls().len(), 1);
    let strip = site
        .dom()
        .find_within(page.live_shows, &Selector::Class("carousel-wrapper"))
        .first()
        .copied()
        .context("live strip")?;
    let first = site
        .dom()
        .children(strip)
        .first()
        .copied()
        .context("first live item")?;
    site.dom().set_width(first, 400.0);
    assert_eq!(
        site.dom().style(&strip, "transform").as_deref(),
        Some("translateX(-0px)")
    );

    site.carousel_prev(0);
    assert_eq!(site.carousels()[0].state().index(), 0);
    for _ in 0..5 {
        site.carousel_next(0);
    }
    assert_eq!(site.carousels()[0].state().index(), 2);
    assert_eq!(
        site.dom().style(&strip, "transform").as_deref(),
        Some("translateX(-800px)")
    );
    site.carousel_next(7);
    assert_eq!(site.carousels()[0].state().index(), 2);
    Ok(())
}

#[tokio::test]
async fn media_page_renders_photos_and_links_once() -> Result<()> {
    let (dom, page) = media_page();
    let sink = RecordingSink::default();
    let source = StaticSource::new("/config.json", home_json());
    let mut site = boot(dom, MemoryPreferences::with_value("es"), &source, &sink).await;

    assert_eq!(site.options().page, PageKind::Media);
    let photos: Vec<_> = site
        .dom()
        .children(page.photos)
        .iter()
        .map(|node| site.dom().attribute(node, "src"))
        .collect();
    assert_eq!(
        photos,
        vec![
            Some("../img/onstage.jpg".to_string()),
            Some("../img/portrait.jpg".to_string())
        ]
    );
    assert_eq!(site.dom().children(page.links_en).len(), 2);
    assert_eq!(site.dom().children(page.links_es).len(), 1);
    assert_eq!(display(site.dom(), page.block_es).as_deref(), Some("block"));
    assert_eq!(display(site.dom(), page.block_en).as_deref(), Some("none"));
    let heading = site
        .dom()
        .find_within(page.block_es, &Selector::Tag("h2"))
        .first()
        .copied()
        .context("spanish heading")?;
    assert_eq!(site.dom().text(&heading), "Kit de Prensa");

    site.set_language(Language::En);
    assert_eq!(site.dom().children(page.links_en).len(), 2);
    assert_eq!(display(site.dom(), page.block_en).as_deref(), Some("block"));
    assert!(sink.records().is_empty(), "unexpected: {:?}", sink.records());
    Ok(())
}

#[tokio::test]
async fn unsupported_button_codes_are_reported() -> Result<()> {
    let (dom, _page) = home_page();
    let _french = dom
        .element(dom.body_id(), "button")
        .class("lang-btn")
        .attr("data-lang", "fr")
        .text("FR")
        .finish();
    let sink = RecordingSink::default();
    let source = StaticSource::new("../config.json", home_json());
    let mut site = boot(dom, MemoryPreferences::default(), &source, &sink).await;
    sink.clear();

    assert_eq!(site.set_language_code("fr"), None);
    assert_eq!(site.active_language(), Language::En);
    assert_eq!(sink.count("unsupported_language"), 1);
    Ok(())
}
