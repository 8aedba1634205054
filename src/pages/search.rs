//! Search results view generation

use maud::{Markup, html};

use crate::components::layout::page_wrapper;
use crate::components::loading::{self, ViewState};
use crate::components::nav::site_header;
use crate::components::post_list::{NO_POSTS_MESSAGE, empty_state, post_item};
use crate::config::Site;
use crate::post::Post;

/// Empty-state message shown when the search query is blank.
const NO_QUERY_MESSAGE: &str = "No search term provided.";

/// Generates the search results view.
///
/// A blank query and an empty result set each render their own empty
/// state; otherwise the matching posts are listed in feed order under a
/// header naming the query.
///
/// # Arguments
///
/// * `site`: Site identity for the header
/// * `query`: The free-text search term
/// * `posts`: Matching posts in feed order
///
/// # Returns
///
/// Complete HTML markup for the search page
pub fn generate(site: &Site, query: &str, posts: &[Post]) -> Markup {
    let view = ViewState::new();

    page_wrapper(
        &format!("Search - {}", site.name),
        &["assets/search.css"],
        html! {
            (site_header(site, 0))
            main {
                (loading::indicator(&view))
                (loading::container(&view, "posts", html! {
                    @if query.trim().is_empty() {
                        (empty_state(NO_QUERY_MESSAGE))
                    } @else if posts.is_empty() {
                        h2 class="search-header" { "Search results for: " (query) }
                        hr class="h2-hr";
                        (empty_state(NO_POSTS_MESSAGE))
                    } @else {
                        h2 class="search-header" { "Search results for: " (query) }
                        hr class="h2-hr";
                        ul class="post-list" {
                            @for post in posts {
                                (post_item(post, 0))
                            }
                        }
                    }
                }))
            }
        },
    )
}
