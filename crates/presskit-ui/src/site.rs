//! Page state after boot.
//!
//! # Design
//! - [`Site`] owns everything that outlives the load: the shared
//!   configuration, the language controller and the carousel views.
//! - Boot order is fixed: options, configuration, language preference,
//!   page rendering, then one language pass so generated captions are
//!   translated.
//! - Event glue only holds a `Site` and calls its methods; nothing is
//!   global.

use std::rc::Rc;

use presskit_config::Configuration;
use presskit_dom::Dom;

use crate::core::diagnostics::Diagnostics;
use crate::core::options::{PageKind, SiteOptions};
use crate::core::preferences::PreferenceStore;
use crate::features::carousel::CarouselView;
use crate::features::language::{LanguageController, language_buttons};
use crate::features::media::MediaPageRenderer;
use crate::features::sections::SectionRenderer;
use crate::i18n::{Language, Translator};
use crate::services::{ConfigLoader, ConfigSource};

/// A booted page.
pub struct Site<D: Dom, P> {
    dom: D,
    options: SiteOptions,
    config: Rc<Configuration>,
    languages: LanguageController<P>,
    carousels: Vec<CarouselView<D::Node>>,
}

impl<D: Dom, P: PreferenceStore> Site<D, P> {
    /// Load the configuration from `source`, render the page and apply the
    /// stored language.
    pub async fn boot<S: ConfigSource + ?Sized>(
        dom: D,
        options: SiteOptions,
        preferences: P,
        source: &S,
        diagnostics: Diagnostics,
    ) -> Self {
        tracing::info!(page = ?options.page, location = source.location(), "booting site");
        let config = ConfigLoader::new(source, diagnostics.clone()).load().await;
        let translator = Translator::new(Rc::clone(&config), options.layout, diagnostics.clone());
        let languages = LanguageController::new(
            preferences,
            translator,
            options.button_label_key.clone(),
            diagnostics.clone(),
        );

        let carousels = match options.page {
            PageKind::Home => SectionRenderer::new(&dom, diagnostics.clone())
                .render(config.sections())
                .carousels
                .into_iter()
                .map(|mount| CarouselView::attach(&dom, mount, diagnostics.clone()))
                .collect(),
            PageKind::Media => {
                let _report = MediaPageRenderer::new(&dom, &options.asset_prefix, diagnostics)
                    .render(&config);
                Vec::new()
            }
        };

        languages.apply(&dom);
        Self {
            dom,
            options,
            config,
            languages,
            carousels,
        }
    }

    /// Switch to `language`.
    pub fn set_language(&mut self, language: Language) {
        self.languages.set_language(&self.dom, language);
    }

    /// Switch to the language a selector button names.
    pub fn set_language_code(&mut self, code: &str) -> Option<Language> {
        self.languages.set_language_code(&self.dom, code)
    }

    /// Step carousel `index` back; unknown indices are ignored.
    pub fn carousel_prev(&mut self, index: usize) {
        if let Some(view) = self.carousels.get_mut(index) {
            view.prev(&self.dom);
        }
    }

    /// Step carousel `index` forward; unknown indices are ignored.
    pub fn carousel_next(&mut self, index: usize) {
        if let Some(view) = self.carousels.get_mut(index) {
            view.next(&self.dom);
        }
    }

    /// Language selector buttons with their codes.
    #[must_use]
    pub fn language_buttons(&self) -> Vec<(D::Node, String)> {
        language_buttons(&self.dom)
    }

    /// Previous/next buttons of every carousel, by carousel index.
    #[must_use]
    pub fn carousel_controls(&self) -> Vec<(D::Node, D::Node)> {
        self.carousels.iter().map(CarouselView::controls).collect()
    }

    /// Carousel views in render order.
    #[must_use]
    pub fn carousels(&self) -> &[CarouselView<D::Node>] {
        &self.carousels
    }

    /// Underlying document.
    #[must_use]
    pub const fn dom(&self) -> &D {
        &self.dom
    }

    /// Loaded configuration (empty when loading failed).
    #[must_use]
    pub fn config(&self) -> &Configuration {
        &self.config
    }

    /// Active language.
    #[must_use]
    pub const fn active_language(&self) -> Language {
        self.languages.active()
    }

    /// Options the page booted with.
    #[must_use]
    pub const fn options(&self) -> &SiteOptions {
        &self.options
    }
}
