//! Folio command-line interface.
//!
//! The `folio` binary queries the sample device topology, summarizes the
//! routing benchmark dataset, exports the site as static HTML and runs the
//! site server. Argument definitions live in [`cli`] and each subcommand has
//! an `execute` function under [`commands`].

pub mod cli;
pub mod commands;

pub use cli::{Cli, Commands};
