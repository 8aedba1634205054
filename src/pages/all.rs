//! Full unpaginated listing page generation

use maud::{Markup, html};

use crate::components::layout::page_wrapper;
use crate::components::loading::{self, ViewState};
use crate::components::nav::site_header;
use crate::components::post_list::{NO_POSTS_MESSAGE, date_section, empty_state};
use crate::config::Site;
use crate::post::PostGroup;

/// Generates the full listing page holding every post grouped by date.
///
/// # Arguments
///
/// * `site`: Site identity for the header
/// * `groups`: The whole feed, bucketed by date, newest date first
///
/// # Returns
///
/// Complete HTML markup for the page
pub fn generate(site: &Site, groups: &[PostGroup]) -> Markup {
    let view = ViewState::new();

    page_wrapper(
        &format!("All posts - {}", site.name),
        &["assets/index.css"],
        html! {
            (site_header(site, 0))
            main {
                h1 { "All posts" }
                (loading::indicator(&view))
                (loading::container(&view, "posts", html! {
                    @if groups.is_empty() {
                        (empty_state(NO_POSTS_MESSAGE))
                    } @else {
                        @for group in groups {
                            (date_section(group, 0))
                        }
                    }
                }))
            }
        },
    )
}
