//! Page footer component

use maud::{Markup, html};

/// Renders the shared site footer.
pub fn footer() -> Markup {
    html! {
        footer class="site-footer" {
            p { "Generated with daybook" }
        }
    }
}
