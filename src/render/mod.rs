//! Turning API records into document nodes.

pub mod comments;
pub mod elements;
pub mod posts;

pub use comments::{
    ToggleOutcome, build_comment_section, toggle_comment_button, toggle_comment_section,
    toggle_comments,
};
pub use elements::{build_comments, build_element, build_select_options, delete_child_elements};
pub use posts::{display_posts, render_posts};

/// Label of a post button while its comments are hidden
pub const SHOW_COMMENTS: &str = "Show Comments";
/// Label of a post button while its comments are visible
pub const HIDE_COMMENTS: &str = "Hide Comments";
/// Class that hides a comment section
pub const HIDDEN_CLASS: &str = "hide";
/// Placeholder shown in `<main>` before any employee is selected
pub const DEFAULT_TEXT: &str = "Select an Employee to display their posts.";
