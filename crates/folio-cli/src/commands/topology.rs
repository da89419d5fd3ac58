//! Topology command implementation.

use console::{StyledObject, style};
use folio_topology::{ColorScale, Topology};

/// Style a quality value by its bucket on the topology color scale.
fn quality(scale: &ColorScale, q: f64) -> StyledObject<String> {
    let text = format!("{:>6.1}%", q * 100.0);
    match scale.bucket(q) {
        0 => style(text).red(),
        1 | 2 => style(text).yellow(),
        _ => style(text).green(),
    }
}

/// Execute the topology command.
pub fn execute() {
    let topology = Topology::sample();
    let scale = ColorScale::topology();

    println!(
        "{} {} ({} qubits, {} couplings)\n",
        style("Folio").cyan().bold(),
        style(topology.name()).bold(),
        topology.num_qubits(),
        topology.edges().len()
    );

    println!("  {:<6} {:>7}", style("Qubit").bold(), style("Quality").bold());
    for node in topology.nodes() {
        println!("  {:<6} {}", format!("Q{}", node.id), quality(&scale, node.quality));
    }
    println!();

    println!("  {:<10} {:>7}", style("Coupling").bold(), style("Gate").bold());
    for edge in topology.edges() {
        println!(
            "  {:<10} {}",
            format!("Q{}↔Q{}", edge.from, edge.to),
            quality(&scale, edge.quality)
        );
    }
}
