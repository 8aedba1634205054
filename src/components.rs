//! Reusable HTML components for page generation
//!
//! This module provides Maud component functions shared across multiple
//! page types (listing, date, search, post). Components handle specific UI
//! elements with consistent styling and behavior, eliminating duplication
//! across page generators.

pub mod footer;
pub mod layout;
pub mod loading;
pub mod nav;
pub mod post_list;
