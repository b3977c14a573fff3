//! Comment sections and the show/hide toggle pair.
//!
//! A post's button and its comment section carry the same `data-post-id`
//! and are always located and flipped together.

use crate::dom::{Dom, Event, Query};
use crate::remote::Gateway;

use super::elements::build_comments;
use super::{HIDDEN_CLASS, HIDE_COMMENTS, SHOW_COMMENTS};

/// Result of toggling one half of a toggle pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome<N> {
    /// No post id was given; nothing was looked up
    InvalidId,
    /// No connected node carries the post id
    NotFound,
    /// The node was found and flipped
    Toggled(N),
}

impl<N: Copy> ToggleOutcome<N> {
    pub fn node(&self) -> Option<N> {
        match self {
            ToggleOutcome::Toggled(node) => Some(*node),
            _ => None,
        }
    }

    pub fn is_toggled(&self) -> bool {
        matches!(self, ToggleOutcome::Toggled(_))
    }
}

/// Build the hidden comment section for a post, fetching its comments.
///
/// A failed fetch still yields the (empty) section so the toggle pair stays
/// complete.
pub async fn build_comment_section<D: Dom>(
    dom: &mut D,
    gateway: &Gateway,
    post_id: u64,
) -> Option<D::Node> {
    if post_id == 0 {
        return None;
    }

    let section = dom.create_element("section");
    dom.set_data(section, "post-id", &post_id.to_string());
    dom.add_class(section, "comments");
    dom.add_class(section, HIDDEN_CLASS);

    let comments = gateway.fetch_post_comments(post_id).await;
    if let Some(fragment) = build_comments(dom, comments.as_deref()) {
        dom.append_child(section, fragment);
    }

    Some(section)
}

/// Show or hide the comment section of a post
pub fn toggle_comment_section<D: Dom>(dom: &mut D, post_id: u64) -> ToggleOutcome<D::Node> {
    if post_id == 0 {
        return ToggleOutcome::InvalidId;
    }
    match dom.query_selector(&Query::tag("section").data("post-id", post_id)) {
        Some(section) => {
            dom.toggle_class(section, HIDDEN_CLASS);
            ToggleOutcome::Toggled(section)
        }
        None => ToggleOutcome::NotFound,
    }
}

/// Swap a post button's label between "Show Comments" and "Hide Comments"
pub fn toggle_comment_button<D: Dom>(dom: &mut D, post_id: u64) -> ToggleOutcome<D::Node> {
    if post_id == 0 {
        return ToggleOutcome::InvalidId;
    }
    match dom.query_selector(&Query::tag("button").data("post-id", post_id)) {
        Some(button) => {
            let label = if dom.text_content(button) == SHOW_COMMENTS {
                HIDE_COMMENTS
            } else {
                SHOW_COMMENTS
            };
            dom.set_text_content(button, label);
            ToggleOutcome::Toggled(button)
        }
        None => ToggleOutcome::NotFound,
    }
}

/// Flip both halves of a post's toggle pair in response to `event`.
///
/// The event target is flagged with `data-listener="true"` so duplicate
/// bindings show up in the document.
pub fn toggle_comments<D: Dom>(
    dom: &mut D,
    event: Option<&Event<D::Node>>,
    post_id: u64,
) -> Option<(ToggleOutcome<D::Node>, ToggleOutcome<D::Node>)> {
    let event = event?;
    if post_id == 0 {
        return None;
    }

    dom.set_data(event.target, "listener", "true");
    let section = toggle_comment_section(dom, post_id);
    let button = toggle_comment_button(dom, post_id);
    if !section.is_toggled() || !button.is_toggled() {
        tracing::warn!("Incomplete toggle pair for post {post_id}");
    }
    Some((section, button))
}
