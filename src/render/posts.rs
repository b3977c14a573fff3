//! Post rendering.
//!
//! Posts are rendered one at a time in list order: each post awaits its
//! author and then its comments before the next post starts, so the output
//! order always matches the input order.

use crate::dom::{Dom, Query};
use crate::remote::Gateway;
use crate::types::{Employee, Post};

use super::comments::build_comment_section;
use super::elements::build_element;
use super::{DEFAULT_TEXT, SHOW_COMMENTS};

/// Author name used when a post's author cannot be fetched
pub const UNKNOWN_AUTHOR: &str = "Unknown author";

fn author_line(author: Option<&Employee>) -> String {
    match author {
        Some(author) => format!("Author: {} with {}", author.name, author.company.name),
        None => format!("Author: {UNKNOWN_AUTHOR}"),
    }
}

/// Render a fragment with one `<article>` per post, or `None` without posts
pub async fn render_posts<D: Dom>(
    dom: &mut D,
    gateway: &Gateway,
    posts: Option<&[Post]>,
) -> Option<D::Node> {
    let posts = posts?;
    let fragment = dom.create_fragment();

    for post in posts {
        let article = dom.create_element("article");
        let title = build_element(dom, "h2", &post.title, None);
        let body = build_element(dom, "p", &post.body, None);
        let id = build_element(dom, "p", &format!("Post ID: {}", post.id), None);

        let author = gateway.fetch_employee(post.user_id).await;
        if author.is_none() {
            tracing::warn!(
                "Author {} of post {} unavailable, rendering placeholder",
                post.user_id,
                post.id
            );
        }
        let byline = build_element(dom, "p", &author_line(author.as_ref()), None);
        let phrase = build_element(
            dom,
            "p",
            author
                .as_ref()
                .map(|a| a.company.catch_phrase.as_str())
                .unwrap_or_default(),
            None,
        );

        let button = build_element(dom, "button", SHOW_COMMENTS, None);
        dom.set_data(button, "post-id", &post.id.to_string());
        let section = build_comment_section(dom, gateway, post.id).await;

        for child in [title, body, id, byline, phrase, button] {
            dom.append_child(article, child);
        }
        if let Some(section) = section {
            dom.append_child(article, section);
        }
        dom.append_child(fragment, article);
    }

    Some(fragment)
}

/// Append the rendered posts to `<main>`, or the default text without posts.
///
/// Returns the appended node. The children of a fragment have moved into
/// `<main>` by the time it is returned.
pub async fn display_posts<D: Dom>(
    dom: &mut D,
    gateway: &Gateway,
    posts: Option<&[Post]>,
) -> Option<D::Node> {
    let Some(main) = dom.query_selector(&Query::tag("main")) else {
        tracing::warn!("No <main> container to display posts in");
        return None;
    };

    let node = match posts {
        Some(_) => render_posts(dom, gateway, posts).await?,
        None => build_element(dom, "p", DEFAULT_TEXT, Some("default-text")),
    };
    dom.append_child(main, node);
    Some(node)
}
