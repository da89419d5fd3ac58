//! Export command implementation.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use console::style;
use folio_site::content::POSTS;
use folio_site::render::{self, Figures};
use folio_site::{AppState, SiteConfig};
use folio_topology::Theme;
use tracing::debug;

/// Write one page, creating its parent directories.
fn write_page(path: &Path, html: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(path, html).with_context(|| format!("Failed to write file: {}", path.display()))?;
    debug!(path = %path.display(), bytes = html.len(), "page written");
    Ok(())
}

/// Execute the export command.
///
/// Renders the landing page, every post (figures in their initial state)
/// and the not-found page. Returns the written files in that order.
pub fn execute(out: &Path, theme: Theme, data: Option<&Path>) -> Result<Vec<PathBuf>> {
    let config = SiteConfig {
        data_path: data.map(Path::to_path_buf),
        default_theme: theme,
        ..SiteConfig::default()
    };
    let state = AppState::load(config)?;
    let palette = state.palette(None);

    let mut written = Vec::with_capacity(POSTS.len() + 2);

    let index = out.join("index.html");
    write_page(&index, &render::landing_page(palette))?;
    written.push(index);

    for post in &POSTS {
        let figures = Figures::initial(&state.config);
        let html = render::post_page(&state, post, &figures, palette)?;
        let path = out.join("blog").join(post.slug).join("index.html");
        write_page(&path, &html)?;
        written.push(path);
    }

    let not_found = out.join("404.html");
    write_page(&not_found, &render::not_found_page(palette))?;
    written.push(not_found);

    println!(
        "{} Exported {} pages ({theme} theme) to {}",
        style("✓").green().bold(),
        written.len(),
        style(out.display()).bold()
    );
    for path in &written {
        let shown = path.strip_prefix(out).unwrap_or(path);
        println!("  {}", style(shown.display()).dim());
    }

    Ok(written)
}
