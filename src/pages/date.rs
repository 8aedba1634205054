//! Single date view generation

use maud::{Markup, html};

use crate::components::layout::page_wrapper;
use crate::components::loading::{self, ViewState};
use crate::components::nav::site_header;
use crate::components::post_list::{NO_POSTS_MESSAGE, date_section, empty_state};
use crate::config::Site;
use crate::post::PostGroup;

/// Generates the view for one calendar date.
///
/// Date pages live under `date/`, one level below the site root. A date
/// with no posts still renders, with the shared empty state.
///
/// # Arguments
///
/// * `site`: Site identity for the header
/// * `date`: Calendar date being viewed (`YYYY-MM-DD`)
/// * `groups`: Zero or one group holding the date's posts
///
/// # Returns
///
/// Complete HTML markup for the date page
pub fn generate(site: &Site, date: &str, groups: &[PostGroup]) -> Markup {
    let view = ViewState::new();

    page_wrapper(
        &format!("{date} - {}", site.name),
        &["../assets/date.css"],
        html! {
            (site_header(site, 1))
            main {
                (loading::indicator(&view))
                (loading::container(&view, "posts", html! {
                    @if groups.is_empty() {
                        h2 class="date-header" { (date) }
                        hr class="h2-hr";
                        (empty_state(NO_POSTS_MESSAGE))
                    } @else {
                        @for group in groups {
                            (date_section(group, 1))
                        }
                    }
                }))
            }
        },
    )
}
