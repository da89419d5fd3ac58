//! Command-line argument definitions.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use folio_bench::Regime;
use folio_bench::aggregate::DEFAULT_WIN_THRESHOLD;
use folio_topology::Theme;

/// Folio - routing-aware quantum hardware notes, charts and site tooling
#[derive(Debug, Parser)]
#[command(name = "folio")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Log filter for the verbosity count.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Find the minimum-hop route between two qubits of the sample device
    Route {
        /// Source qubit
        #[arg(short, long)]
        from: u32,

        /// Target qubit
        #[arg(short, long)]
        to: u32,
    },

    /// List the sample device's qubits and couplings
    Topology,

    /// Summarize the routing benchmark dataset
    Bench {
        /// Benchmark JSON file (embedded dataset if omitted)
        #[arg(short, long, env = "FOLIO_DATA")]
        data: Option<PathBuf>,

        /// Restrict to one regime (noisy, good, excellent)
        #[arg(short, long)]
        regime: Option<Regime>,

        /// Gain in percentage points a circuit must exceed to count as a win
        #[arg(short, long, default_value_t = DEFAULT_WIN_THRESHOLD)]
        threshold: f64,
    },

    /// Pre-render the site into a directory of static HTML files
    Export {
        /// Output directory
        #[arg(short, long)]
        out: PathBuf,

        /// Color theme (dark, light)
        #[arg(long, env = "FOLIO_THEME", default_value = "dark")]
        theme: Theme,

        /// Benchmark JSON file (embedded dataset if omitted)
        #[arg(short, long, env = "FOLIO_DATA")]
        data: Option<PathBuf>,
    },

    /// Run the site server
    Serve {
        /// Address to bind
        #[arg(short, long, env = "FOLIO_BIND", default_value = "127.0.0.1:3000")]
        bind: SocketAddr,

        /// Benchmark JSON file (embedded dataset if omitted)
        #[arg(short, long, env = "FOLIO_DATA")]
        data: Option<PathBuf>,

        /// Default color theme (dark, light)
        #[arg(long, env = "FOLIO_THEME", default_value = "dark")]
        theme: Theme,

        /// Maximum qubits selectable in the topology diagram
        #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u8).range(2..=3))]
        capacity: u8,
    },

    /// Show version information
    Version,
}
