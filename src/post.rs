//! Post data model and feed-order operations.
//!
//! Posts arrive from the collaborator API (or a local feed file) as JSON,
//! newest first. Grouping, date filtering, and search all preserve that feed
//! order inside their results.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;

/// A single microblog post as the feed delivers it.
#[derive(Debug, Clone, Deserialize)]
pub struct Post {
    pub id: i64,
    /// Raw, unescaped body. May contain newlines and markup-like substrings;
    /// it must pass through [`crate::render`] exactly once before display.
    pub sentence: String,
    pub timestamp: DateTime<Utc>,
}

impl Post {
    /// Calendar date of the post (`YYYY-MM-DD`, UTC).
    pub fn date(&self) -> String {
        self.timestamp.format("%Y-%m-%d").to_string()
    }

    /// Time of day of the post (`HH:MM:SS`, UTC).
    pub fn time(&self) -> String {
        self.timestamp.format("%H:%M:%S").to_string()
    }
}

/// Posts bucketed under one calendar date, mirroring the grouped wire shape
/// of the feed API.
#[derive(Debug, Clone, Deserialize)]
pub struct PostGroup {
    pub date: String,
    pub posts: Vec<Post>,
}

/// Buckets posts by calendar date, newest date first.
///
/// Posts inside each bucket keep their feed order. The bucket key is the
/// UTC calendar date formatted as `YYYY-MM-DD`.
pub fn group_by_date(posts: Vec<Post>) -> Vec<PostGroup> {
    let mut grouped: BTreeMap<NaiveDate, Vec<Post>> = BTreeMap::new();
    for post in posts {
        grouped
            .entry(post.timestamp.date_naive())
            .or_default()
            .push(post);
    }

    grouped
        .into_iter()
        .rev()
        .map(|(date, posts)| PostGroup {
            date: date.to_string(),
            posts,
        })
        .collect()
}

/// Returns the posts published on the given calendar date (`YYYY-MM-DD`).
pub fn posts_for_date(posts: &[Post], date: &str) -> Vec<Post> {
    posts
        .iter()
        .filter(|post| post.date() == date.trim())
        .cloned()
        .collect()
}

/// Case-insensitive substring search over post bodies, feed order preserved.
pub fn search(posts: &[Post], query: &str) -> Vec<Post> {
    let needle = query.to_lowercase();
    posts
        .iter()
        .filter(|post| post.sentence.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
