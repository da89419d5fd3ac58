//! Folio site binary entry point.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use folio_site::{SiteConfig, serve};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "folio_site=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config = SiteConfig::default();
    if let Ok(bind) = std::env::var("FOLIO_BIND") {
        config.bind_address = bind
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid FOLIO_BIND address '{bind}': {e}"))?;
    }
    if let Ok(path) = std::env::var("FOLIO_DATA") {
        config.data_path = Some(path.into());
    }
    if let Ok(theme) = std::env::var("FOLIO_THEME") {
        config.default_theme = theme
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid FOLIO_THEME: {e}"))?;
    }

    serve(config).await
}
