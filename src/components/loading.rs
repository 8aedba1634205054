//! Loading indicator and container visibility state
//!
//! Pages carry a loading indicator plus a set of content containers whose
//! inline `display` values come from a [`ViewState`]. Showing the indicator
//! hides a caller-chosen set of containers and hands back a token holding
//! their previous display values; hiding consumes that token and restores
//! them. The token is the only carrier of the saved state; there is no
//! shared slot between callers.

use std::collections::BTreeMap;

use maud::{Markup, html};

/// Element id of the loading indicator itself.
pub const LOADING_ID: &str = "loading";

/// Inline `display` overrides for the elements of one page.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    displays: BTreeMap<String, String>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current inline display override for an element, if any.
    pub fn display(&self, id: &str) -> Option<&str> {
        self.displays.get(id).map(String::as_str)
    }
}

/// Saved display values returned by [`show_loading`] and consumed by
/// [`hide_loading`].
#[derive(Debug)]
#[must_use = "pass the token to hide_loading to restore the hidden elements"]
pub struct LoadingToken {
    saved: Vec<(String, Option<String>)>,
}

/// Shows the loading indicator and hides the named elements.
///
/// Returns a token recording each element's previous display override so
/// the matching [`hide_loading`] call can restore it exactly.
pub fn show_loading(state: &mut ViewState, ids: &[&str]) -> LoadingToken {
    let mut saved = Vec::with_capacity(ids.len());
    for id in ids {
        let previous = state
            .displays
            .insert((*id).to_string(), "none".to_string());
        saved.push(((*id).to_string(), previous));
    }

    state
        .displays
        .insert(LOADING_ID.to_string(), "block".to_string());

    LoadingToken { saved }
}

/// Hides the loading indicator and restores the elements hidden by the
/// [`show_loading`] call that produced the token.
pub fn hide_loading(state: &mut ViewState, token: LoadingToken) {
    state.displays.remove(LOADING_ID);

    for (id, previous) in token.saved {
        match previous {
            Some(display) => {
                state.displays.insert(id, display);
            }
            None => {
                state.displays.remove(&id);
            }
        }
    }
}

/// Renders the loading indicator element. Hidden unless shown through
/// [`show_loading`].
pub fn indicator(state: &ViewState) -> Markup {
    let display = state.display(LOADING_ID).unwrap_or("none");

    html! {
        div id=(LOADING_ID) class="loading" style=(format!("display:{display}")) {
            span class="loading-spinner" {}
            " Loading…"
        }
    }
}

/// Renders a content container whose inline display honors the view state.
pub fn container(state: &ViewState, id: &str, body: Markup) -> Markup {
    html! {
        @if let Some(display) = state.display(id) {
            div id=(id) style=(format!("display:{display}")) { (body) }
        } @else {
            div id=(id) { (body) }
        }
    }
}
