//! Shared test utilities for integration tests.
//!
//! Provides the canonical feed fixture and helpers for writing it into a
//! temporary directory, used across multiple test files.

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Canonical feed fixture: three posts across two days, newest first, with
/// inline annotations and escapable characters in the bodies.
pub const FEED_JSON: &str = r#"[
  {
    "id": 3,
    "sentence": "Shipped the [new site](https://example.com/site) today & it's live",
    "timestamp": "2024-03-02T10:00:00Z"
  },
  {
    "id": 2,
    "sentence": "Follow-up to #1",
    "timestamp": "2024-03-01T18:30:00Z"
  },
  {
    "id": 1,
    "sentence": "Started a daily journal",
    "timestamp": "2024-03-01T09:00:00Z"
  }
]"#;

/// Writes the canonical feed fixture into `dir` and returns its path.
///
/// # Errors
///
/// Returns error if the file cannot be written.
pub fn write_feed(dir: &Path) -> Result<PathBuf> {
    let path = dir.join("feed.json");
    fs::write(&path, FEED_JSON)?;
    Ok(path)
}

/// Site identity used by page-generation tests.
pub fn test_site() -> daybook::Site {
    daybook::Site {
        name: "journal".to_string(),
        email: Some("author@example.com".to_string()),
    }
}
