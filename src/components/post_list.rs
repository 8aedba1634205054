//! Date-grouped post list components

use maud::{Markup, PreEscaped, html};

use crate::content;
use crate::post::{Post, PostGroup};

/// Empty-state message shown when a view has no posts to display.
pub const NO_POSTS_MESSAGE: &str = "No posts match the selected criteria.";

/// Renders one date bucket: a date header followed by its posts.
///
/// # Arguments
///
/// * `group`: Posts bucketed under one calendar date
/// * `depth`: Directory depth of the current page below the site root
pub fn date_section(group: &PostGroup, depth: usize) -> Markup {
    let root = "../".repeat(depth);

    html! {
        section class="date-group" {
            h2 class="date-header" {
                a href=(format!("{root}date/{}.html", group.date)) { (group.date) }
            }
            hr class="h2-hr";
            ul class="post-list" {
                @for post in &group.posts {
                    (post_item(post, depth))
                }
            }
        }
    }
}

/// Renders a single post entry.
///
/// The post body passes through the inline content renderer here, exactly
/// once, and is injected pre-escaped; everything else in the entry goes
/// through normal attribute/text escaping.
pub fn post_item(post: &Post, depth: usize) -> Markup {
    let root = "../".repeat(depth);

    html! {
        li {
            div id=(format!("post-{}", post.id)) class="post-item" {
                strong { (PreEscaped(content::render(&post.sentence))) }
                a href=(format!("{root}post/{}.html", post.id)) class="post-permalink" {
                    (post.time())
                }
            }
        }
    }
}

/// Renders the shared empty-state paragraph.
pub fn empty_state(message: &str) -> Markup {
    html! {
        p class="empty-state" { (message) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::post::test_support::post;

    #[test]
    fn test_post_item_renders_body_through_content_pipeline() {
        // Arrange: a body with an annotation and an escapable character
        let post = post(5, "a & [docs](http://x)", "2024-03-01T10:00:00Z");

        // Act
        let html = post_item(&post, 0).into_string();

        // Assert
        assert!(html.contains(r#"id="post-5""#));
        assert!(html.contains("a&nbsp;&amp;&nbsp;"));
        assert!(html.contains(r#"<a class="post-inline-link" href="http://x" target="_blank">[docs]</a>"#));
        assert!(html.contains(r#"href="post/5.html""#));
    }

    #[test]
    fn test_date_section_headers_and_items() {
        let group = PostGroup {
            date: "2024-03-01".to_string(),
            posts: vec![
                post(1, "first", "2024-03-01T09:00:00Z"),
                post(2, "second", "2024-03-01T10:00:00Z"),
            ],
        };

        let html = date_section(&group, 0).into_string();

        assert!(html.contains(r#"href="date/2024-03-01.html""#));
        assert!(html.contains("2024-03-01"));
        assert_eq!(html.matches("post-item").count(), 2);
    }

    #[test]
    fn test_empty_state_message() {
        let html = empty_state(NO_POSTS_MESSAGE).into_string();

        assert!(html.contains("No posts match the selected criteria."));
    }
}
