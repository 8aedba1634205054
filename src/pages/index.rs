//! Paginated front page generation

use maud::{Markup, html};

use crate::components::layout::page_wrapper;
use crate::components::loading::{self, ViewState};
use crate::components::nav::{pagination, site_header};
use crate::components::post_list::{NO_POSTS_MESSAGE, date_section, empty_state};
use crate::config::Site;
use crate::pagination::Paginator;
use crate::post::PostGroup;

/// Data container for listing page generation.
pub struct IndexPageData<'a> {
    pub site: &'a Site,
    /// The current page's slice of the feed, bucketed by date.
    pub groups: &'a [PostGroup],
    pub paginator: &'a Paginator,
}

/// Generates one paginated listing page.
///
/// Page 1 is the front page at the site root; later pages live one level
/// down under `page/`, which shifts every relative link.
///
/// # Arguments
///
/// * `data`: Listing page data container
///
/// # Returns
///
/// Complete HTML markup for the listing page
pub fn generate(data: &IndexPageData<'_>) -> Markup {
    let depth = if data.paginator.page() == 1 { 0 } else { 1 };
    let root = "../".repeat(depth);
    let css = format!("{root}assets/index.css");
    let view = ViewState::new();

    let title = if data.paginator.page() == 1 {
        data.site.name.clone()
    } else {
        format!("Page {} - {}", data.paginator.page(), data.site.name)
    };

    page_wrapper(
        &title,
        &[&css],
        html! {
            (site_header(data.site, depth))
            main {
                (loading::indicator(&view))
                (loading::container(&view, "posts", html! {
                    @if data.groups.is_empty() {
                        (empty_state(NO_POSTS_MESSAGE))
                    } @else {
                        @for group in data.groups {
                            (date_section(group, depth))
                        }
                    }
                }))
            }
            (pagination(data.paginator, depth))
        },
    )
}
