//! Serve command implementation.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Result;
use console::style;
use folio_site::SiteConfig;
use folio_topology::Theme;

/// Execute the serve command. Runs until the server fails.
pub async fn execute(
    bind: SocketAddr,
    data: Option<PathBuf>,
    theme: Theme,
    capacity: usize,
) -> Result<()> {
    let config = SiteConfig {
        bind_address: bind,
        data_path: data,
        default_theme: theme,
        selection_capacity: capacity,
        ..SiteConfig::default()
    };

    println!(
        "{} Serving on {}",
        style("Folio").cyan().bold(),
        style(format!("http://{bind}")).underlined()
    );

    folio_site::serve(config).await
}
