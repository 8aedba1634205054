use anyhow::{Context, Result};
use daybook::pages::index::IndexPageData;
use daybook::{Config, FeedClient, Paginator, group_by_date, pages, write_css_assets};
use std::fs;
use std::path::{Path, PathBuf};

/// Output path for a listing page. Page 1 is the front page at the site
/// root; later pages live under `page/`.
fn listing_page_path(output: &Path, page: usize) -> PathBuf {
    if page == 1 {
        output.join("index.html")
    } else {
        output.join("page").join(format!("{page}.html"))
    }
}

fn main() -> Result<()> {
    let config = Config::parse();
    config.validate().context("Invalid configuration")?;

    let site = config.site();
    let client = FeedClient::new(&config.feed).context("Failed to create feed client")?;

    println!("Loading feed from {}", config.feed);
    let posts = client.fetch_posts().context("Failed to load post feed")?;
    let groups = client.fetch_grouped().context("Failed to load grouped posts")?;

    fs::create_dir_all(&config.output).context("Failed to create output directory")?;

    let assets_dir = config.output.join("assets");
    fs::create_dir_all(&assets_dir).context("Failed to create assets directory")?;
    write_css_assets(&assets_dir)?;

    // Listing pages: page 1 at the root, the rest under page/.
    let total_pages = Paginator::new(1, config.per_page, posts.len()).total_pages();
    if total_pages > 1 {
        fs::create_dir_all(config.output.join("page"))
            .context("Failed to create page directory")?;
    }
    for page in 1..=total_pages {
        let paginator = Paginator::new(page, config.per_page, posts.len());
        let page_groups = group_by_date(paginator.slice(&posts).to_vec());
        let html = pages::index::generate(&IndexPageData {
            site: &site,
            groups: &page_groups,
            paginator: &paginator,
        });
        let path = listing_page_path(&config.output, page);
        fs::write(&path, html.into_string())
            .with_context(|| format!("Failed to write listing page to {}", path.display()))?;
    }

    // Full listing.
    let all_path = config.output.join("all.html");
    fs::write(&all_path, pages::all::generate(&site, &groups).into_string())
        .with_context(|| format!("Failed to write {}", all_path.display()))?;

    // One page per calendar date.
    fs::create_dir_all(config.output.join("date")).context("Failed to create date directory")?;
    for group in &groups {
        let html = pages::date::generate(&site, &group.date, std::slice::from_ref(group));
        let path = config.output.join("date").join(format!("{}.html", group.date));
        fs::write(&path, html.into_string())
            .with_context(|| format!("Failed to write date page to {}", path.display()))?;
    }

    // One page per post.
    fs::create_dir_all(config.output.join("post")).context("Failed to create post directory")?;
    for post in &posts {
        let html = pages::post::generate(&site, post);
        let path = config.output.join("post").join(format!("{}.html", post.id));
        fs::write(&path, html.into_string())
            .with_context(|| format!("Failed to write post page to {}", path.display()))?;
    }

    // Optional search results page for a configured query.
    if let Some(query) = &config.query {
        let results = client.fetch_search(query).unwrap_or_else(|e| {
            eprintln!("Warning: Search failed: {:#}", e);
            Vec::new()
        });
        let path = config.output.join("search.html");
        let html = pages::search::generate(&site, query, &results);
        fs::write(&path, html.into_string())
            .with_context(|| format!("Failed to write search page to {}", path.display()))?;
    }

    println!(
        "Generated {} listing pages, {} date pages, and {} post pages in {}",
        total_pages,
        groups.len(),
        posts.len(),
        config.output.display()
    );

    if config.open {
        let index = config.output.join("index.html");
        if let Err(e) = open::that(&index) {
            eprintln!("Warning: Failed to open {}: {}", index.display(), e);
        }
    }

    Ok(())
}
