//! Version command implementation.

use console::style;

/// Execute the version command.
pub fn execute() {
    let version = env!("CARGO_PKG_VERSION");

    println!(
        "{} {} - routing notes, benchmark charts and site tooling",
        style("Folio").cyan().bold(),
        style(format!("v{version}")).yellow()
    );
    println!();
    println!("Components:");
    println!("  folio-topology  Device graphs, routing and quality colors");
    println!("  folio-bench     Routing benchmark dataset and aggregates");
    println!("  folio-view      Interactive diagrams rendered as SVG");
    println!("  folio-site      Web server for the portfolio and blog");
    println!("  folio-cli       Command-line interface");
    println!();
    println!(
        "Repository: {}",
        style("https://github.com/joelpendleton/folio").underlined()
    );
    println!("License:    {}", style("Apache-2.0").dim());
}
