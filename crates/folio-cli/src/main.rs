//! Folio command-line entry point.

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use clap::Parser;
use console::style;
use folio_cli::commands::{bench, export, route, serve, topology, version};
use folio_cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(cli.log_filter()))
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::Route { from, to } => route::execute(from, to).map(|_| ()),

        Commands::Topology => {
            topology::execute();
            Ok(())
        }

        Commands::Bench {
            data,
            regime,
            threshold,
        } => bench::execute(data.as_deref(), regime, threshold),

        Commands::Export { out, theme, data } => {
            export::execute(&out, theme, data.as_deref()).map(|_| ())
        }

        Commands::Serve {
            bind,
            data,
            theme,
            capacity,
        } => serve::execute(bind, data, theme, usize::from(capacity)).await,

        Commands::Version => {
            version::execute();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{} {}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}
