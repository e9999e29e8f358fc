//! The DOM operations the runtime depends on.
//!
//! # Design
//! - Handles are cheap clones (`web_sys::Element` in the browser, an arena
//!   index in memory); methods take `&self` because both backends use
//!   interior mutability.
//! - Reads never fail: a missing attribute or style is `None`.
//! - Writes that the browser can reject return [`DomError`].

use crate::error::DomError;
use crate::selector::Selector;

/// Minimal document interface.
pub trait Dom {
    /// Element handle.
    type Node: Clone;

    /// All matching elements in document order.
    fn query_all(&self, selector: &Selector<'_>) -> Vec<Self::Node>;

    /// Element with the given `id`.
    fn element_by_id(&self, id: &str) -> Option<Self::Node>;

    /// The document element (`<html>`).
    fn root(&self) -> Option<Self::Node>;

    /// The `<body>` element.
    fn body(&self) -> Option<Self::Node>;

    /// Create a detached element.
    ///
    /// # Errors
    ///
    /// Returns [`DomError::Js`] when the tag name is rejected.
    fn create_element(&self, tag: &str) -> Result<Self::Node, DomError>;

    /// Append `child` as the last child of `parent`.
    ///
    /// # Errors
    ///
    /// Returns [`DomError`] when either handle is invalid or the insertion is rejected.
    fn append_child(&self, parent: &Self::Node, child: &Self::Node) -> Result<(), DomError>;

    /// Remove every child of `node`.
    fn clear_children(&self, node: &Self::Node);

    /// Lowercase tag name.
    fn tag_name(&self, node: &Self::Node) -> String;

    /// Attribute value.
    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;

    /// Set an attribute.
    ///
    /// # Errors
    ///
    /// Returns [`DomError`] when the attribute name is rejected.
    fn set_attribute(&self, node: &Self::Node, name: &str, value: &str) -> Result<(), DomError>;

    /// `textContent` of the node.
    fn text(&self, node: &Self::Node) -> String;

    /// Replace the node's content with `text`.
    fn set_text(&self, node: &Self::Node, text: &str);

    /// Whether the class list contains `class`.
    fn has_class(&self, node: &Self::Node, class: &str) -> bool;

    /// Add or remove `class`.
    ///
    /// # Errors
    ///
    /// Returns [`DomError`] when the class token is rejected.
    fn set_class(&self, node: &Self::Node, class: &str, enabled: bool) -> Result<(), DomError>;

    /// Inline style property value.
    fn style(&self, node: &Self::Node, property: &str) -> Option<String>;

    /// Set an inline style property.
    ///
    /// # Errors
    ///
    /// Returns [`DomError::NotStylable`] for elements without inline style.
    fn set_style(&self, node: &Self::Node, property: &str, value: &str) -> Result<(), DomError>;

    /// Rendered width in CSS pixels.
    fn offset_width(&self, node: &Self::Node) -> f64;

    /// Path component of the page location.
    fn location_path(&self) -> Option<String>;

    /// Create an element carrying `class` and append it to `parent`.
    ///
    /// # Errors
    ///
    /// Propagates creation, class, and insertion failures.
    fn append_element(
        &self,
        parent: &Self::Node,
        tag: &str,
        class: Option<&str>,
    ) -> Result<Self::Node, DomError> {
        let node = self.create_element(tag)?;
        if let Some(class) = class {
            self.set_class(&node, class, true)?;
        }
        self.append_child(parent, &node)?;
        Ok(node)
    }

    /// Option attribute read from `<html>`, then `<body>`.
    fn root_attribute(&self, name: &str) -> Option<String> {
        self.root()
            .and_then(|root| self.attribute(&root, name))
            .or_else(|| self.body().and_then(|body| self.attribute(&body, name)))
    }
}
