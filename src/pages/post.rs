//! Single post view generation

use maud::{Markup, PreEscaped, html};

use crate::components::layout::page_wrapper;
use crate::components::nav::site_header;
use crate::config::Site;
use crate::content;
use crate::post::Post;

/// Generates the permalink view for one post.
///
/// Post pages live under `post/`, one level below the site root. The body
/// goes through the inline content renderer exactly once; the date links
/// back to the post's date page.
///
/// # Arguments
///
/// * `site`: Site identity for the header
/// * `post`: The post to display
///
/// # Returns
///
/// Complete HTML markup for the post page
pub fn generate(site: &Site, post: &Post) -> Markup {
    page_wrapper(
        &format!("Post #{} - {}", post.id, site.name),
        &["../assets/post.css"],
        html! {
            (site_header(site, 1))
            main {
                article id=(format!("post-{}", post.id)) class="post-item post-single" {
                    strong { (PreEscaped(content::render(&post.sentence))) }
                    div class="post-meta" {
                        a href=(format!("../date/{}.html", post.date())) class="post-date" {
                            (post.date())
                        }
                        span class="post-time" { (post.time()) }
                    }
                }
                a href="../index.html" class="back-link" { "← All posts" }
            }
        },
    )
}
