//! Browser implementation of [`Dom`] over `web-sys`.

use gloo::utils::{document, window};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement};

use crate::error::DomError;
use crate::port::Dom;
use crate::selector::Selector;

/// The live page document.
#[derive(Clone, Debug)]
pub struct WebDom {
    document: Document,
}

impl Default for WebDom {
    fn default() -> Self {
        Self::new()
    }
}

impl WebDom {
    /// Wrap the current window's document.
    #[must_use]
    pub fn new() -> Self {
        Self {
            document: document(),
        }
    }

    fn html(node: &Element) -> Result<&HtmlElement, DomError> {
        node.dyn_ref::<HtmlElement>()
            .ok_or_else(|| DomError::NotStylable {
                tag: node.tag_name().to_ascii_lowercase(),
            })
    }
}

impl Dom for WebDom {
    type Node = Element;

    fn query_all(&self, selector: &Selector<'_>) -> Vec<Element> {
        let Ok(list) = self.document.query_selector_all(&selector.to_css()) else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|index| list.get(index))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn root(&self) -> Option<Element> {
        self.document.document_element()
    }

    fn body(&self) -> Option<Element> {
        self.document.body().map(Into::into)
    }

    fn create_element(&self, tag: &str) -> Result<Element, DomError> {
        self.document
            .create_element(tag)
            .map_err(|err| js_error("create_element", &err))
    }

    fn append_child(&self, parent: &Element, child: &Element) -> Result<(), DomError> {
        parent
            .append_child(child)
            .map(|_| ())
            .map_err(|err| js_error("append_child", &err))
    }

    fn clear_children(&self, node: &Element) {
        node.set_text_content(None);
    }

    fn tag_name(&self, node: &Element) -> String {
        node.tag_name().to_ascii_lowercase()
    }

    fn attribute(&self, node: &Element, name: &str) -> Option<String> {
        node.get_attribute(name)
    }

    fn set_attribute(&self, node: &Element, name: &str, value: &str) -> Result<(), DomError> {
        node.set_attribute(name, value)
            .map_err(|err| js_error("set_attribute", &err))
    }

    fn text(&self, node: &Element) -> String {
        node.text_content().unwrap_or_default()
    }

    fn set_text(&self, node: &Element, text: &str) {
        node.set_text_content(Some(text));
    }

    fn has_class(&self, node: &Element, class: &str) -> bool {
        node.class_list().contains(class)
    }

    fn set_class(&self, node: &Element, class: &str, enabled: bool) -> Result<(), DomError> {
        node.class_list()
            .toggle_with_force(class, enabled)
            .map(|_| ())
            .map_err(|err| js_error("set_class", &err))
    }

    fn style(&self, node: &Element, property: &str) -> Option<String> {
        let html = Self::html(node).ok()?;
        html.style()
            .get_property_value(property)
            .ok()
            .filter(|value| !value.is_empty())
    }

    fn set_style(&self, node: &Element, property: &str, value: &str) -> Result<(), DomError> {
        Self::html(node)?
            .style()
            .set_property(property, value)
            .map_err(|err| js_error("set_style", &err))
    }

    fn offset_width(&self, node: &Element) -> f64 {
        Self::html(node).map_or(0.0, |html| f64::from(html.offset_width()))
    }

    fn location_path(&self) -> Option<String> {
        window().location().pathname().ok()
    }
}

fn js_error(operation: &'static str, err: &JsValue) -> DomError {
    DomError::Js {
        operation,
        detail: format!("{err:?}"),
    }
}
