//! CSS asset bundling

use anyhow::{Context, Result};
use std::{fs, path::Path};

const BASE: &str = include_str!("../assets/base.css");
const LAYOUT: &str = include_str!("../assets/components/layout.css");
const NAV: &str = include_str!("../assets/components/nav.css");
const POST_LIST: &str = include_str!("../assets/components/post-list.css");

const INDEX_PAGE: &str = include_str!("../assets/page-index.css");
const DATE_PAGE: &str = include_str!("../assets/page-date.css");
const SEARCH_PAGE: &str = include_str!("../assets/page-search.css");
const POST_PAGE: &str = include_str!("../assets/page-post.css");

/// Writes all bundled CSS assets to output directory
pub fn write_css_assets(assets_dir: &Path) -> Result<()> {
    write_bundled(
        assets_dir,
        "index.css",
        &[BASE, LAYOUT, NAV, POST_LIST, INDEX_PAGE],
    )?;
    write_bundled(
        assets_dir,
        "date.css",
        &[BASE, LAYOUT, NAV, POST_LIST, DATE_PAGE],
    )?;
    write_bundled(
        assets_dir,
        "search.css",
        &[BASE, LAYOUT, NAV, POST_LIST, SEARCH_PAGE],
    )?;
    write_bundled(
        assets_dir,
        "post.css",
        &[BASE, LAYOUT, NAV, POST_LIST, POST_PAGE],
    )?;
    Ok(())
}

fn write_bundled(dir: &Path, name: &str, parts: &[&str]) -> Result<()> {
    let css = parts.join("\n");
    fs::write(dir.join(name), css)
        .with_context(|| format!("Failed to write CSS asset: {}", name))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_css_assets_creates_bundles() {
        // Arrange
        let dir = tempfile::tempdir().expect("Should create temp directory");

        // Act
        write_css_assets(dir.path()).expect("Should write assets");

        // Assert
        for name in ["index.css", "date.css", "search.css", "post.css"] {
            let bundle = dir.path().join(name);
            assert!(bundle.exists(), "{name} should exist");
            let css = fs::read_to_string(&bundle).expect("Should read bundle");
            assert!(css.contains(".container"), "{name} should carry base styles");
        }
    }
}
