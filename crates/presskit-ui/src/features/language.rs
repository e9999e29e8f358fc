//! Language switching: selector buttons, translated text, scoped blocks.
//!
//! # Design
//! - One pass (`apply`) brings the whole page in line with the active
//!   language, so repeated calls leave the page unchanged.
//! - Persistence happens before the page pass; a storage failure is reported
//!   and the page is still updated.
//! - Button and block codes go through [`Language::from_code`], so `ES` and
//!   `es-MX` mark Spanish; codes outside the supported set are never active.

use presskit_dom::{Dom, DomError, Selector};

use crate::core::diagnostics::{Diagnostic, Diagnostics};
use crate::core::preferences::{PreferenceStore, initial_language};
use crate::i18n::{Language, Translator};

/// Class carried by language selector buttons.
pub const LANGUAGE_BUTTON_CLASS: &str = "lang-btn";
/// Class marking the selected button.
pub const ACTIVE_CLASS: &str = "active";
/// Attribute naming a translation key.
pub const I18N_ATTR: &str = "data-i18n";
/// Attribute naming the language of a button or block.
pub const LANG_ATTR: &str = "data-lang";
/// Class carried by language-scoped blocks.
pub const LANGUAGE_CONTENT_CLASS: &str = "language-content";

/// Active language plus everything needed to reflect it in the page.
pub struct LanguageController<P> {
    active: Language,
    preferences: P,
    translator: Translator,
    label_key: Option<String>,
    diagnostics: Diagnostics,
}

impl<P: PreferenceStore> LanguageController<P> {
    /// Controller starting from the persisted language (or the default).
    #[must_use]
    pub fn new(
        preferences: P,
        translator: Translator,
        label_key: Option<String>,
        diagnostics: Diagnostics,
    ) -> Self {
        let active = initial_language(&preferences);
        tracing::debug!(language = %active, "language initialised");
        Self {
            active,
            preferences,
            translator,
            label_key,
            diagnostics,
        }
    }

    /// Currently active language.
    #[must_use]
    pub const fn active(&self) -> Language {
        self.active
    }

    /// Persist `language`, make it active and update the page.
    pub fn set_language<D: Dom>(&mut self, dom: &D, language: Language) {
        self.active = language;
        if let Err(err) = self.preferences.store(language.code()) {
            self.diagnostics.emit(Diagnostic::StorageFailed {
                detail: err.to_string(),
            });
        }
        tracing::info!(language = %language, "language selected");
        self.apply(dom);
    }

    /// [`Self::set_language`] for a code read from markup; unsupported codes
    /// are reported and leave the page untouched.
    pub fn set_language_code<D: Dom>(&mut self, dom: &D, code: &str) -> Option<Language> {
        let Some(language) = Language::from_code(code) else {
            self.diagnostics.emit(Diagnostic::UnsupportedLanguage {
                code: code.to_string(),
            });
            return None;
        };
        self.set_language(dom, language);
        Some(language)
    }

    /// Bring buttons, translated elements and scoped blocks in line with
    /// the active language.
    pub fn apply<D: Dom>(&self, dom: &D) {
        let steps: [(&str, fn(&Self, &D) -> Result<(), DomError>); 3] = [
            ("marking the active language button", Self::update_buttons),
            ("translating page text", Self::translate_page),
            ("toggling language blocks", Self::toggle_blocks),
        ];
        for (context, step) in steps {
            if let Err(err) = step(self, dom) {
                self.diagnostics.emit(Diagnostic::DomFailure {
                    context: context.to_string(),
                    detail: err.to_string(),
                });
            }
        }
    }

    fn update_buttons<D: Dom>(&self, dom: &D) -> Result<(), DomError> {
        for (button, code) in language_buttons(dom) {
            let selected = Language::from_code(&code) == Some(self.active);
            dom.set_class(&button, ACTIVE_CLASS, selected)?;
            if let Some(label) = self.button_label(&code) {
                dom.set_text(&button, &label);
            }
        }
        Ok(())
    }

    fn button_label(&self, code: &str) -> Option<String> {
        let base = self.label_key.as_deref()?;
        let code = Language::from_code(code).map_or(code, |language| language.code());
        let key = format!("{base}.{code}");
        match self.translator.lookup(self.active, &key) {
            Ok(label) => Some(label.to_uppercase()),
            Err(miss) => {
                tracing::debug!(key = %key, segment = %miss.segment, "no label for language button");
                None
            }
        }
    }

    fn translate_page<D: Dom>(&self, dom: &D) -> Result<(), DomError> {
        for node in dom.query_all(&Selector::Attribute(I18N_ATTR)) {
            let Some(key) = dom.attribute(&node, I18N_ATTR) else {
                continue;
            };
            let Some(text) = self.translator.resolve(self.active, &key) else {
                continue;
            };
            match dom.tag_name(&node).as_str() {
                "input" | "textarea" => dom.set_attribute(&node, "placeholder", &text)?,
                _ => dom.set_text(&node, &text),
            }
        }
        Ok(())
    }

    fn toggle_blocks<D: Dom>(&self, dom: &D) -> Result<(), DomError> {
        for block in dom.query_all(&Selector::Class(LANGUAGE_CONTENT_CLASS)) {
            let shown = dom
                .attribute(&block, LANG_ATTR)
                .and_then(|code| Language::from_code(&code))
                == Some(self.active);
            dom.set_style(&block, "display", if shown { "block" } else { "none" })?;
        }
        Ok(())
    }
}

/// Selector buttons with the code each one selects.
#[must_use]
pub fn language_buttons<D: Dom>(dom: &D) -> Vec<(D::Node, String)> {
    dom.query_all(&Selector::Class(LANGUAGE_BUTTON_CLASS))
        .into_iter()
        .filter_map(|button| {
            let code = dom.attribute(&button, LANG_ATTR)?;
            Some((button, code))
        })
        .collect()
}
