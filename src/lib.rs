//! Static site renderer for a daily microblog feed.

mod assets;
pub mod components;
mod config;
mod content;
mod feed;
mod pagination;
pub mod pages;
mod post;

pub use assets::write_css_assets;
pub use config::{Config, Site};
pub use content::render;
pub use feed::{FeedClient, is_remote};
pub use pagination::Paginator;
pub use post::{Post, PostGroup, group_by_date, posts_for_date, search};
