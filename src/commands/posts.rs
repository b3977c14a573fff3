use owo_colors::{OwoColorize, Stream};
use serde_json::json;

use super::print_json;
use crate::cli::OutputFormat;
use crate::dom::{Dom, MemoryDom, NodeId};
use crate::error::{PostviewError, Result};
use crate::page::Page;
use crate::remote::Gateway;
use crate::render::HIDDEN_CLASS;

/// Select an employee through the dropdown and print the resulting posts
pub async fn cmd_posts(
    gateway: Gateway,
    employee: &str,
    expand: &[u64],
    format: OutputFormat,
    full_page: bool,
) -> Result<()> {
    let mut page = Page::new(MemoryDom::new(), gateway);
    page.init().await;

    let outcome = page
        .select_employee(employee)
        .await
        .ok_or_else(|| PostviewError::MissingNode("#selectMenu".to_string()))?;

    let mut expanded = Vec::new();
    for post_id in expand {
        match page.click_post_button(*post_id).await {
            Some(_) => expanded.push(*post_id),
            None => tracing::warn!("Post {post_id} is not displayed"),
        }
    }

    let main = page
        .main()
        .ok_or_else(|| PostviewError::MissingNode("main".to_string()))?;
    let dom = page.dom();
    tracing::debug!("Document holds {} node(s)", dom.node_count());

    match format {
        OutputFormat::Html => {
            let root = if full_page { dom.body() } else { main };
            println!("{}", dom.html(root));
        }
        OutputFormat::Json => {
            print_json(&json!({
                "employee_id": outcome.employee_id,
                "posts": outcome.posts,
                "expanded": expanded,
                "html": dom.html(main),
            }))?;
        }
        OutputFormat::Text => {
            print!("{}", format_posts_text(dom, main, true));
        }
    }

    Ok(())
}

fn style_bold(text: &str, styled: bool) -> String {
    if styled {
        text.if_supports_color(Stream::Stdout, |t| t.bold()).to_string()
    } else {
        text.to_string()
    }
}

fn style_dimmed(text: &str, styled: bool) -> String {
    if styled {
        text.if_supports_color(Stream::Stdout, |t| t.dimmed()).to_string()
    } else {
        text.to_string()
    }
}

/// Render the posts container as terminal text.
///
/// Hidden comment sections collapse to a one-line count. With `styled`,
/// headings and counts are colored when stdout supports it.
pub fn format_posts_text(dom: &MemoryDom, main: NodeId, styled: bool) -> String {
    let mut out = String::new();
    let articles = dom.children(main);
    if articles.is_empty() {
        out.push_str(&style_dimmed("No posts.", styled));
        out.push('\n');
        return out;
    }

    for (index, node) in articles.into_iter().enumerate() {
        if dom.tag_name(node).as_deref() != Some("article") {
            out.push_str(&dom.text_content(node));
            out.push('\n');
            continue;
        }
        if index > 0 {
            out.push('\n');
        }

        for child in dom.children(node) {
            match dom.tag_name(child).as_deref() {
                Some("h2") => {
                    out.push_str(&style_bold(&dom.text_content(child), styled));
                    out.push('\n');
                }
                Some("section") => format_comments(dom, child, styled, &mut out),
                Some("button") => {}
                _ => {
                    let text = dom.text_content(child);
                    if !text.is_empty() {
                        out.push_str(&text);
                        out.push('\n');
                    }
                }
            }
        }
    }
    out
}

fn format_comments(dom: &MemoryDom, section: NodeId, styled: bool, out: &mut String) {
    let comments = dom.children(section);
    if dom.has_class(section, HIDDEN_CLASS) {
        let line = format!("  [{} comment(s) hidden]", comments.len());
        out.push_str(&style_dimmed(&line, styled));
        out.push('\n');
        return;
    }

    for comment in comments {
        for part in dom.children(comment) {
            let text = dom.text_content(part);
            if dom.tag_name(part).as_deref() == Some("h3") {
                out.push_str(&format!("  » {}\n", style_bold(&text, styled)));
            } else {
                out.push_str(&format!("    {text}\n"));
            }
        }
    }
}
