//! In-memory document.
//!
//! Nodes live in an arena and are addressed by [`NodeId`]. Detached nodes stay
//! in the arena (a node handle never dangles) but are no longer reachable from
//! the body, so queries stop seeing them.
//!
//! The arena is append-only: slots are never freed or reused, so every refresh
//! grows it by the nodes it renders. A `MemoryDom` is meant to back one page
//! session (a CLI invocation or a test), not a long-lived process.

use super::{Dom, EventKind, Listener, Query};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug, Clone, PartialEq, Eq)]
enum NodeKind {
    Element(String),
    Fragment,
}

#[derive(Debug, Clone)]
struct NodeData {
    kind: NodeKind,
    text: String,
    attributes: Vec<(String, String)>,
    classes: Vec<String>,
    children: Vec<NodeId>,
    parent: Option<NodeId>,
    listeners: Vec<(EventKind, Listener)>,
}

impl NodeData {
    fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            text: String::new(),
            attributes: Vec::new(),
            classes: Vec::new(),
            children: Vec::new(),
            parent: None,
            listeners: Vec::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MemoryDom {
    nodes: Vec<NodeData>,
    body: NodeId,
}

impl Default for MemoryDom {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDom {
    pub fn new() -> Self {
        Self {
            nodes: vec![NodeData::new(NodeKind::Element("body".to_string()))],
            body: NodeId(0),
        }
    }

    fn node(&self, id: NodeId) -> &NodeData {
        &self.nodes[id.0]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut NodeData {
        &mut self.nodes[id.0]
    }

    fn push(&mut self, kind: NodeKind) -> NodeId {
        self.nodes.push(NodeData::new(kind));
        NodeId(self.nodes.len() - 1)
    }

    fn detach(&mut self, child: NodeId) {
        if let Some(parent) = self.node_mut(child).parent.take() {
            self.node_mut(parent).children.retain(|c| *c != child);
        }
    }

    /// Whether `node` is reachable from the body
    pub fn is_connected(&self, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == self.body {
                return true;
            }
            current = self.node(id).parent;
        }
        false
    }

    pub fn is_fragment(&self, node: NodeId) -> bool {
        self.node(node).kind == NodeKind::Fragment
    }

    fn has_ancestor_tag(&self, node: NodeId, tag: &str) -> bool {
        let mut current = self.node(node).parent;
        while let Some(id) = current {
            if self.tag_name(id).as_deref() == Some(tag) {
                return true;
            }
            current = self.node(id).parent;
        }
        false
    }

    fn matches(&self, node: NodeId, query: &Query) -> bool {
        if self.tag_name(node).as_deref() != Some(query.tag_name()) {
            return false;
        }
        if let Some((key, value)) = query.data_constraint()
            && self.data(node, key).as_deref() != Some(value)
        {
            return false;
        }
        match query.ancestor() {
            Some(tag) => self.has_ancestor_tag(node, tag),
            None => true,
        }
    }

    /// Connected nodes in document order, starting at the body
    fn walk(&self) -> Vec<NodeId> {
        let mut order = Vec::new();
        let mut stack = vec![self.body];
        while let Some(id) = stack.pop() {
            order.push(id);
            stack.extend(self.node(id).children.iter().rev().copied());
        }
        order
    }

    /// Number of nodes ever created, detached ones included
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Total listeners held by every node, connected or not
    pub fn listener_count(&self) -> usize {
        self.nodes.iter().map(|n| n.listeners.len()).sum()
    }

    /// Serialize a node and its subtree as HTML
    pub fn html(&self, node: NodeId) -> String {
        let mut out = String::new();
        self.write_html(node, &mut out);
        out
    }

    pub(super) fn write_html(&self, node: NodeId, out: &mut String) {
        let data = self.node(node);
        let tag = match &data.kind {
            NodeKind::Fragment => {
                for child in &data.children {
                    self.write_html(*child, out);
                }
                return;
            }
            NodeKind::Element(tag) => tag,
        };

        out.push('<');
        out.push_str(tag);
        for (name, value) in &data.attributes {
            super::html::push_attribute(out, name, value);
        }
        if !data.classes.is_empty() {
            super::html::push_attribute(out, "class", &data.classes.join(" "));
        }
        out.push('>');
        super::html::push_escaped_text(out, &data.text);
        for child in &data.children {
            self.write_html(*child, out);
        }
        out.push_str("</");
        out.push_str(tag);
        out.push('>');
    }
}

impl Dom for MemoryDom {
    type Node = NodeId;

    fn body(&self) -> NodeId {
        self.body
    }

    fn create_element(&mut self, tag: &str) -> NodeId {
        self.push(NodeKind::Element(tag.to_ascii_lowercase()))
    }

    fn create_fragment(&mut self) -> NodeId {
        self.push(NodeKind::Fragment)
    }

    fn tag_name(&self, node: NodeId) -> Option<String> {
        match &self.node(node).kind {
            NodeKind::Element(tag) => Some(tag.clone()),
            NodeKind::Fragment => None,
        }
    }

    fn text_content(&self, node: NodeId) -> String {
        let data = self.node(node);
        let mut text = data.text.clone();
        for child in &data.children {
            text.push_str(&self.text_content(*child));
        }
        text
    }

    fn set_text_content(&mut self, node: NodeId, text: &str) {
        self.replace_children(node);
        self.node_mut(node).text = text.to_string();
    }

    fn attribute(&self, node: NodeId, name: &str) -> Option<String> {
        let data = self.node(node);
        if name == "class" {
            return (!data.classes.is_empty()).then(|| data.classes.join(" "));
        }
        data.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.clone())
    }

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
        let data = self.node_mut(node);
        if name == "class" {
            data.classes = value.split_whitespace().map(str::to_string).collect();
            return;
        }
        match data.attributes.iter_mut().find(|(n, _)| n == name) {
            Some(entry) => entry.1 = value.to_string(),
            None => data.attributes.push((name.to_string(), value.to_string())),
        }
    }

    fn remove_attribute(&mut self, node: NodeId, name: &str) {
        let data = self.node_mut(node);
        if name == "class" {
            data.classes.clear();
            return;
        }
        data.attributes.retain(|(n, _)| n != name);
    }

    fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.node(node).classes.iter().any(|c| c == class)
    }

    fn add_class(&mut self, node: NodeId, class: &str) {
        if !self.has_class(node, class) {
            self.node_mut(node).classes.push(class.to_string());
        }
    }

    fn toggle_class(&mut self, node: NodeId, class: &str) -> bool {
        if self.has_class(node, class) {
            self.node_mut(node).classes.retain(|c| c != class);
            false
        } else {
            self.node_mut(node).classes.push(class.to_string());
            true
        }
    }

    fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if parent == child {
            return;
        }
        if self.is_fragment(child) {
            let moved = std::mem::take(&mut self.node_mut(child).children);
            for grandchild in moved {
                self.node_mut(grandchild).parent = None;
                self.append_child(parent, grandchild);
            }
            return;
        }
        self.detach(child);
        self.node_mut(child).parent = Some(parent);
        self.node_mut(parent).children.push(child);
    }

    fn replace_children(&mut self, node: NodeId) {
        let children = std::mem::take(&mut self.node_mut(node).children);
        for child in children {
            self.node_mut(child).parent = None;
        }
        self.node_mut(node).text.clear();
    }

    fn children(&self, node: NodeId) -> Vec<NodeId> {
        self.node(node).children.clone()
    }

    fn query_selector_all(&self, query: &Query) -> Vec<NodeId> {
        self.walk()
            .into_iter()
            .filter(|id| self.matches(*id, query))
            .collect()
    }

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.walk()
            .into_iter()
            .find(|node| self.attribute(*node, "id").as_deref() == Some(id))
    }

    fn add_event_listener(&mut self, node: NodeId, kind: EventKind, listener: Listener) {
        self.node_mut(node).listeners.push((kind, listener));
    }

    fn remove_event_listener(&mut self, node: NodeId, kind: EventKind, listener: &Listener) -> bool {
        let listeners = &mut self.node_mut(node).listeners;
        match listeners
            .iter()
            .position(|(k, l)| *k == kind && l == listener)
        {
            Some(index) => {
                listeners.remove(index);
                true
            }
            None => false,
        }
    }

    fn listeners(&self, node: NodeId, kind: EventKind) -> Vec<Listener> {
        self.node(node)
            .listeners
            .iter()
            .filter(|(k, _)| *k == kind)
            .map(|(_, l)| l.clone())
            .collect()
    }
}
