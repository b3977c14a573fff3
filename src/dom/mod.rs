//! Document capability interface.
//!
//! The render pipeline never touches a concrete document. It drives any type
//! implementing [`Dom`]: element creation, attribute and class-list access,
//! child management, selector queries and listener registration.
//! [`MemoryDom`] is the in-process implementation used by the CLI and tests.

mod html;
pub mod memory;

use std::fmt;
use std::hash::Hash;

pub use memory::{MemoryDom, NodeId};

/// Event types the page reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Change,
    Click,
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventKind::Change => write!(f, "change"),
            EventKind::Click => write!(f, "click"),
        }
    }
}

/// What a bound listener does when its event fires.
///
/// Listeners are plain values so that removal matches by equality.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listener {
    /// Re-render the posts of the employee chosen in the dropdown
    SelectEmployee,
    /// Show or hide the comment section of one post
    ToggleComments { post_id: u64 },
}

/// A dispatched event and the element it originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Event<N> {
    pub kind: EventKind,
    pub target: N,
}

impl<N> Event<N> {
    pub fn new(kind: EventKind, target: N) -> Self {
        Self { kind, target }
    }
}

/// A structural selector: a tag, optionally constrained by one `data-*`
/// attribute and by an ancestor tag.
///
/// `Query::tag("button").data("post-id", 7).within("main")` is the equivalent
/// of `main button[data-post-id="7"]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    tag: String,
    data: Option<(String, String)>,
    ancestor: Option<String>,
}

impl Query {
    pub fn tag(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            data: None,
            ancestor: None,
        }
    }

    /// Require `data-{key}` to equal `value`
    pub fn data(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.data = Some((key.into(), value.to_string()));
        self
    }

    /// Require an ancestor element with the given tag
    pub fn within(mut self, ancestor: impl Into<String>) -> Self {
        self.ancestor = Some(ancestor.into());
        self
    }

    pub fn tag_name(&self) -> &str {
        &self.tag
    }

    pub fn data_constraint(&self) -> Option<(&str, &str)> {
        self.data.as_ref().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn ancestor(&self) -> Option<&str> {
        self.ancestor.as_deref()
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ancestor) = &self.ancestor {
            write!(f, "{ancestor} ")?;
        }
        write!(f, "{}", self.tag)?;
        if let Some((key, value)) = &self.data {
            write!(f, "[data-{key}=\"{value}\"]")?;
        }
        Ok(())
    }
}

/// Capabilities the page needs from a document.
///
/// Queries only see nodes connected to the document; detached subtrees and
/// fragments that have not been appended yet are invisible to them.
pub trait Dom {
    type Node: Copy + Eq + Hash + fmt::Debug;

    /// The document body every page element hangs from
    fn body(&self) -> Self::Node;

    fn create_element(&mut self, tag: &str) -> Self::Node;

    /// Create a fragment whose children move into the parent it is appended to
    fn create_fragment(&mut self) -> Self::Node;

    fn tag_name(&self, node: Self::Node) -> Option<String>;

    fn text_content(&self, node: Self::Node) -> String;

    fn set_text_content(&mut self, node: Self::Node, text: &str);

    fn attribute(&self, node: Self::Node, name: &str) -> Option<String>;

    fn set_attribute(&mut self, node: Self::Node, name: &str, value: &str);

    fn remove_attribute(&mut self, node: Self::Node, name: &str);

    fn has_class(&self, node: Self::Node, class: &str) -> bool;

    fn add_class(&mut self, node: Self::Node, class: &str);

    /// Flip a class, returning whether it is present afterwards
    fn toggle_class(&mut self, node: Self::Node, class: &str) -> bool;

    fn append_child(&mut self, parent: Self::Node, child: Self::Node);

    /// Detach every child of `node`
    fn replace_children(&mut self, node: Self::Node);

    fn children(&self, node: Self::Node) -> Vec<Self::Node>;

    fn query_selector(&self, query: &Query) -> Option<Self::Node> {
        self.query_selector_all(query).into_iter().next()
    }

    /// Every connected node matching `query`, in document order
    fn query_selector_all(&self, query: &Query) -> Vec<Self::Node>;

    fn element_by_id(&self, id: &str) -> Option<Self::Node>;

    fn add_event_listener(&mut self, node: Self::Node, kind: EventKind, listener: Listener);

    /// Remove a listener equal to `listener`, returning whether one was bound
    fn remove_event_listener(
        &mut self,
        node: Self::Node,
        kind: EventKind,
        listener: &Listener,
    ) -> bool;

    fn listeners(&self, node: Self::Node, kind: EventKind) -> Vec<Listener>;

    fn data(&self, node: Self::Node, key: &str) -> Option<String> {
        self.attribute(node, &format!("data-{key}"))
    }

    fn set_data(&mut self, node: Self::Node, key: &str, value: &str) {
        self.set_attribute(node, &format!("data-{key}"), value);
    }

    fn is_disabled(&self, node: Self::Node) -> bool {
        self.attribute(node, "disabled").is_some()
    }

    fn set_disabled(&mut self, node: Self::Node, disabled: bool) {
        if disabled {
            self.set_attribute(node, "disabled", "");
        } else {
            self.remove_attribute(node, "disabled");
        }
    }

    fn value(&self, node: Self::Node) -> Option<String> {
        self.attribute(node, "value")
    }

    fn set_value(&mut self, node: Self::Node, value: &str) {
        self.set_attribute(node, "value", value);
    }
}
