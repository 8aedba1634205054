//! Site header and page navigation components

use maud::{Markup, html};

use crate::config::Site;
use crate::pagination::Paginator;

/// Renders the site header shown on every page.
///
/// Displays the site name as a link back to the front page, the author
/// contact when configured, and the search form.
///
/// # Arguments
///
/// * `site`: Site identity (name and optional contact email)
/// * `depth`: Directory depth of the current page below the site root
pub fn site_header(site: &Site, depth: usize) -> Markup {
    let root = "../".repeat(depth);

    html! {
        header class="site-header" {
            div class="site-identity" {
                a href=(format!("{root}index.html")) class="site-title" { (site.name) }
                @if let Some(email) = &site.email {
                    a href=(format!("mailto:{email}")) class="site-email" { (email) }
                }
            }
            form class="search-form" action=(format!("{root}search.html")) method="get" {
                input type="text" name="query" placeholder="Search posts" aria-label="Search posts";
                button type="submit" { "Search" }
            }
        }
    }
}

/// Renders pagination navigation for the listing pages.
///
/// Page 1 lives at the site root as `index.html`; later pages live under
/// `page/`. The previous/next anchors carry `rel` and `accesskey`
/// attributes so browsers expose keyboard navigation between pages.
///
/// # Arguments
///
/// * `paginator`: Current page window
/// * `depth`: Directory depth of the current page below the site root
pub fn pagination(paginator: &Paginator, depth: usize) -> Markup {
    let root = "../".repeat(depth);
    let page_href = |page: usize| {
        if page == 1 {
            format!("{root}index.html")
        } else {
            format!("{root}page/{page}.html")
        }
    };

    html! {
        nav class="pagination" {
            @if let Some(prev) = paginator.prev() {
                a href=(page_href(prev)) rel="prev" accesskey="p" class="page-link" {
                    "← Newer"
                }
            } @else {
                span class="page-link page-link-disabled" { "← Newer" }
            }
            span class="page-indicator" {
                "Page " (paginator.page()) " of " (paginator.total_pages())
            }
            @if let Some(next) = paginator.next() {
                a href=(page_href(next)) rel="next" accesskey="n" class="page-link" {
                    "Older →"
                }
            } @else {
                span class="page-link page-link-disabled" { "Older →" }
            }
        }
    }
}
