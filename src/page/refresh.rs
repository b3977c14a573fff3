//! Teardown-then-rebuild of the posts container.
//!
//! Listener removal always runs before the container is cleared, and
//! re-binding always enumerates the buttons that are live after the new posts
//! are attached. Together these keep exactly one click listener per rendered
//! button across any number of refreshes.

use crate::dom::{Dom, EventKind, Listener, Query};
use crate::remote::Gateway;
use crate::render::{delete_child_elements, display_posts};
use crate::types::Post;

/// What one refresh cycle touched
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshOutcome<N> {
    /// Buttons whose click listeners were removed
    pub unbound: Vec<N>,
    /// The cleared and refilled container
    pub container: N,
    /// The node appended to the container
    pub rendered: N,
    /// Buttons that received a fresh click listener
    pub bound: Vec<N>,
}

fn post_buttons() -> Query {
    Query::tag("button").within("main")
}

fn post_id_of<D: Dom>(dom: &D, button: D::Node) -> Option<u64> {
    dom.data(button, "post-id")?.parse::<u64>().ok().filter(|id| *id != 0)
}

/// Remove the comment toggle listener from every post button in `<main>`
pub fn remove_button_listeners<D: Dom>(dom: &mut D) -> Vec<D::Node> {
    let buttons = dom.query_selector_all(&post_buttons());
    for button in &buttons {
        if let Some(post_id) = post_id_of(dom, *button) {
            dom.remove_event_listener(
                *button,
                EventKind::Click,
                &Listener::ToggleComments { post_id },
            );
        }
    }
    buttons
}

/// Bind a comment toggle listener to every post button currently in `<main>`
pub fn add_button_listeners<D: Dom>(dom: &mut D) -> Vec<D::Node> {
    let buttons = dom.query_selector_all(&post_buttons());
    for button in &buttons {
        if let Some(post_id) = post_id_of(dom, *button) {
            dom.add_event_listener(
                *button,
                EventKind::Click,
                Listener::ToggleComments { post_id },
            );
        }
    }
    buttons
}

/// Replace the displayed posts with `posts`.
///
/// `None` leaves the page untouched. An empty list still clears the container
/// and appends an empty fragment.
pub async fn refresh_posts<D: Dom>(
    dom: &mut D,
    gateway: &Gateway,
    posts: Option<&[Post]>,
) -> Option<RefreshOutcome<D::Node>> {
    let posts = posts?;

    let unbound = remove_button_listeners(dom);
    let main = dom.query_selector(&Query::tag("main"));
    let container = delete_child_elements(dom, main)?;
    tracing::debug!(
        "Cleared posts container, unbound {} button(s)",
        unbound.len()
    );

    let rendered = display_posts(dom, gateway, Some(posts)).await?;
    let bound = add_button_listeners(dom);
    tracing::debug!(
        "Rendered {} post(s), bound {} button(s)",
        posts.len(),
        bound.len()
    );

    Some(RefreshOutcome {
        unbound,
        container,
        rendered,
        bound,
    })
}
