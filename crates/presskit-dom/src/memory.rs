//! In-memory document implementing [`Dom`].
//!
//! # Design
//! - Arena of nodes behind a `RefCell`; handles are plain indices.
//! - Only nodes reachable from the root take part in queries, so detached
//!   elements behave as they do in a browser.
//! - Rendered widths are fixtures set by the caller; nothing is laid out.
//! - Every write through [`Dom`] is counted against the node it touched.

use std::cell::RefCell;
use std::collections::BTreeMap;

use crate::error::DomError;
use crate::port::Dom;
use crate::selector::Selector;

/// Handle to a node of a [`MemoryDom`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Clone, Debug, Default)]
struct NodeData {
    tag: String,
    attributes: BTreeMap<String, String>,
    text: String,
    children: Vec<NodeId>,
    parent: Option<NodeId>,
    style: BTreeMap<String, String>,
    width: f64,
    writes: usize,
}

impl NodeData {
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            ..Self::default()
        }
    }

    fn classes(&self) -> impl Iterator<Item = &str> {
        self.attributes
            .get("class")
            .map(String::as_str)
            .unwrap_or_default()
            .split_whitespace()
    }

    fn matches(&self, selector: &Selector<'_>) -> bool {
        match selector {
            Selector::Class(class) => self.classes().any(|candidate| candidate == *class),
            Selector::Attribute(name) => self.attributes.contains_key(*name),
            Selector::Tag(tag) => self.tag.eq_ignore_ascii_case(tag),
        }
    }
}

/// Document held entirely in memory.
#[derive(Debug)]
pub struct MemoryDom {
    nodes: RefCell<Vec<NodeData>>,
    root: NodeId,
    body: NodeId,
    location: Option<String>,
}

impl Default for MemoryDom {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDom {
    /// Empty `<html><body></body></html>` document.
    #[must_use]
    pub fn new() -> Self {
        let root = NodeId(0);
        let body = NodeId(1);
        let mut html = NodeData::new("html");
        html.children.push(body);
        let mut body_data = NodeData::new("body");
        body_data.parent = Some(root);
        Self {
            nodes: RefCell::new(vec![html, body_data]),
            root,
            body,
            location: None,
        }
    }

    /// Same document, reporting `path` as the page location.
    #[must_use]
    pub fn with_location(mut self, path: impl Into<String>) -> Self {
        self.location = Some(path.into());
        self
    }

    /// `<html>` handle.
    #[must_use]
    pub const fn html(&self) -> NodeId {
        self.root
    }

    /// `<body>` handle.
    #[must_use]
    pub const fn body_id(&self) -> NodeId {
        self.body
    }

    /// Start building a new element appended to `parent`.
    ///
    /// Builder writes do not count as mutations.
    pub fn element(&self, parent: NodeId, tag: &str) -> ElementBuilder<'_> {
        let node = self.insert(NodeData::new(tag));
        self.link(parent, node);
        ElementBuilder { dom: self, node }
    }

    /// Children of `node` in order.
    #[must_use]
    pub fn children(&self, node: NodeId) -> Vec<NodeId> {
        self.read(node, |data| data.children.clone())
            .unwrap_or_default()
    }

    /// Parent of `node`.
    #[must_use]
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.read(node, |data| data.parent).flatten()
    }

    /// Descendants of `node` (excluding itself) matching `selector`, in document order.
    #[must_use]
    pub fn find_within(&self, node: NodeId, selector: &Selector<'_>) -> Vec<NodeId> {
        let nodes = self.nodes.borrow();
        let mut found = Vec::new();
        let mut stack: Vec<NodeId> = nodes
            .get(node.0)
            .map(|data| data.children.iter().rev().copied().collect())
            .unwrap_or_default();
        while let Some(current) = stack.pop() {
            let Some(data) = nodes.get(current.0) else {
                continue;
            };
            if data.matches(selector) {
                found.push(current);
            }
            stack.extend(data.children.iter().rev().copied());
        }
        found
    }

    /// Fix the rendered width reported for `node`.
    pub fn set_width(&self, node: NodeId, width: f64) {
        self.write(node, |data| data.width = width);
    }

    /// Writes made to `node` through the [`Dom`] interface; appending a
    /// child counts against the parent.
    #[must_use]
    pub fn mutation_count(&self, node: NodeId) -> usize {
        self.read(node, |data| data.writes).unwrap_or(0)
    }

    fn insert(&self, data: NodeData) -> NodeId {
        let mut nodes = self.nodes.borrow_mut();
        nodes.push(data);
        NodeId(nodes.len() - 1)
    }

    fn link(&self, parent: NodeId, child: NodeId) {
        let mut nodes = self.nodes.borrow_mut();
        if let Some(previous) = nodes.get(child.0).and_then(|data| data.parent) {
            if let Some(old) = nodes.get_mut(previous.0) {
                old.children.retain(|id| *id != child);
            }
        }
        if let Some(data) = nodes.get_mut(child.0) {
            data.parent = Some(parent);
        }
        if let Some(data) = nodes.get_mut(parent.0) {
            data.children.push(child);
        }
    }

    fn read<T>(&self, node: NodeId, read: impl FnOnce(&NodeData) -> T) -> Option<T> {
        self.nodes.borrow().get(node.0).map(read)
    }

    fn write<T>(&self, node: NodeId, write: impl FnOnce(&mut NodeData) -> T) -> Option<T> {
        self.nodes.borrow_mut().get_mut(node.0).map(write)
    }

    fn mutate<T>(
        &self,
        node: NodeId,
        write: impl FnOnce(&mut NodeData) -> T,
    ) -> Result<T, DomError> {
        self.write(node, |data| {
            data.writes += 1;
            write(data)
        })
        .ok_or(DomError::UnknownNode)
    }

    fn collect_text(nodes: &[NodeData], node: NodeId, out: &mut String) {
        let Some(data) = nodes.get(node.0) else {
            return;
        };
        out.push_str(&data.text);
        for child in &data.children {
            Self::collect_text(nodes, *child, out);
        }
    }

    fn detach_children(nodes: &mut [NodeData], node: NodeId) {
        let children = nodes
            .get_mut(node.0)
            .map(|data| std::mem::take(&mut data.children))
            .unwrap_or_default();
        for child in children {
            if let Some(data) = nodes.get_mut(child.0) {
                data.parent = None;
            }
        }
    }
}

impl Dom for MemoryDom {
    type Node = NodeId;

    fn query_all(&self, selector: &Selector<'_>) -> Vec<NodeId> {
        let root_matches = self
            .read(self.root, |data| data.matches(selector))
            .unwrap_or(false);
        let mut found = Vec::new();
        if root_matches {
            found.push(self.root);
        }
        found.extend(self.find_within(self.root, selector));
        found
    }

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.query_all(&Selector::Attribute("id"))
            .into_iter()
            .find(|node| self.attribute(node, "id").as_deref() == Some(id))
    }

    fn root(&self) -> Option<NodeId> {
        Some(self.root)
    }

    fn body(&self) -> Option<NodeId> {
        Some(self.body)
    }

    fn create_element(&self, tag: &str) -> Result<NodeId, DomError> {
        if tag.is_empty() || tag.chars().any(|ch| !ch.is_ascii_alphanumeric()) {
            return Err(DomError::Js {
                operation: "create_element",
                detail: format!("invalid tag name '{tag}'"),
            });
        }
        Ok(self.insert(NodeData::new(tag)))
    }

    fn append_child(&self, parent: &NodeId, child: &NodeId) -> Result<(), DomError> {
        let len = self.nodes.borrow().len();
        if parent.0 >= len || child.0 >= len || parent == child {
            return Err(DomError::UnknownNode);
        }
        self.link(*parent, *child);
        self.write(*parent, |data| data.writes += 1);
        Ok(())
    }

    fn clear_children(&self, node: &NodeId) {
        let mut nodes = self.nodes.borrow_mut();
        Self::detach_children(&mut nodes, *node);
        if let Some(data) = nodes.get_mut(node.0) {
            data.writes += 1;
        }
    }

    fn tag_name(&self, node: &NodeId) -> String {
        self.read(*node, |data| data.tag.clone()).unwrap_or_default()
    }

    fn attribute(&self, node: &NodeId, name: &str) -> Option<String> {
        self.read(*node, |data| data.attributes.get(name).cloned())
            .flatten()
    }

    fn set_attribute(&self, node: &NodeId, name: &str, value: &str) -> Result<(), DomError> {
        self.mutate(*node, |data| {
            data.attributes.insert(name.to_string(), value.to_string());
        })
    }

    fn text(&self, node: &NodeId) -> String {
        let nodes = self.nodes.borrow();
        let mut out = String::new();
        Self::collect_text(&nodes, *node, &mut out);
        out
    }

    fn set_text(&self, node: &NodeId, text: &str) {
        let mut nodes = self.nodes.borrow_mut();
        Self::detach_children(&mut nodes, *node);
        if let Some(data) = nodes.get_mut(node.0) {
            data.text = text.to_string();
            data.writes += 1;
        }
    }

    fn has_class(&self, node: &NodeId, class: &str) -> bool {
        self.read(*node, |data| data.classes().any(|candidate| candidate == class))
            .unwrap_or(false)
    }

    fn set_class(&self, node: &NodeId, class: &str, enabled: bool) -> Result<(), DomError> {
        self.mutate(*node, |data| {
            let mut classes: Vec<String> = data
                .classes()
                .filter(|candidate| *candidate != class)
                .map(ToString::to_string)
                .collect();
            if enabled {
                classes.push(class.to_string());
            }
            if classes.is_empty() {
                data.attributes.remove("class");
            } else {
                data.attributes.insert("class".into(), classes.join(" "));
            }
        })
    }

    fn style(&self, node: &NodeId, property: &str) -> Option<String> {
        self.read(*node, |data| data.style.get(property).cloned())
            .flatten()
    }

    fn set_style(&self, node: &NodeId, property: &str, value: &str) -> Result<(), DomError> {
        self.mutate(*node, |data| {
            data.style.insert(property.to_string(), value.to_string());
        })
    }

    fn offset_width(&self, node: &NodeId) -> f64 {
        self.read(*node, |data| data.width).unwrap_or(0.0)
    }

    fn location_path(&self) -> Option<String> {
        self.location.clone()
    }
}

/// Fluent setup of a fixture element; see [`MemoryDom::element`].
#[derive(Debug)]
pub struct ElementBuilder<'a> {
    dom: &'a MemoryDom,
    node: NodeId,
}

impl ElementBuilder<'_> {
    /// Set the `id` attribute.
    #[must_use]
    pub fn id(self, id: &str) -> Self {
        self.attr("id", id)
    }

    /// Add a class.
    #[must_use]
    pub fn class(self, class: &str) -> Self {
        self.dom.write(self.node, |data| {
            let joined = match data.attributes.get("class") {
                Some(existing) if !existing.is_empty() => format!("{existing} {class}"),
                _ => class.to_string(),
            };
            data.attributes.insert("class".into(), joined);
        });
        self
    }

    /// Set an arbitrary attribute.
    #[must_use]
    pub fn attr(self, name: &str, value: &str) -> Self {
        self.dom.write(self.node, |data| {
            data.attributes.insert(name.to_string(), value.to_string());
        });
        self
    }

    /// Set the text content.
    #[must_use]
    pub fn text(self, text: &str) -> Self {
        self.dom.write(self.node, |data| data.text = text.to_string());
        self
    }

    /// Handle of the built element.
    #[must_use]
    pub const fn finish(self) -> NodeId {
        self.node
    }
}
