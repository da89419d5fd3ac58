//! Route command implementation.

use anyhow::Result;
use console::style;
use folio_topology::fidelity::GATES_PER_SWAP;
use folio_topology::{SwapRoute, Topology};

/// How two qubits relate on the device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteStatus {
    SameQubit,
    Adjacent,
    /// Not coupled; the state must be swapped through `via`.
    NeedsSwaps { swaps: usize, via: Vec<u32> },
}

impl RouteStatus {
    pub fn of(route: &SwapRoute) -> Self {
        match route.path.len() {
            0 | 1 => RouteStatus::SameQubit,
            _ if route.swaps == 0 => RouteStatus::Adjacent,
            _ => RouteStatus::NeedsSwaps {
                swaps: route.swaps,
                via: route.via.clone(),
            },
        }
    }
}

/// Execute the route command against the sample device.
pub fn execute(from: u32, to: u32) -> Result<RouteStatus> {
    let topology = Topology::sample();

    let Some(route) = topology.swap_route(from, to)? else {
        anyhow::bail!("Q{from} and Q{to} are not connected on {}", topology.name());
    };

    let path = route
        .path
        .iter()
        .map(|q| format!("Q{q}"))
        .collect::<Vec<_>>()
        .join(" → ");

    println!(
        "{} Route Q{from} → Q{to} on {}\n",
        style("Folio").cyan().bold(),
        style(topology.name()).bold()
    );
    println!("  Path:     {path}");
    println!("  Hops:     {}", route.path.len().saturating_sub(1));

    let status = RouteStatus::of(&route);
    match &status {
        RouteStatus::SameQubit => {
            println!("  Status:   {}", style("same qubit, nothing to route").green());
        }
        RouteStatus::Adjacent => {
            println!("  Status:   {}", style("adjacent, no SWAPs needed").green());
        }
        RouteStatus::NeedsSwaps { swaps, via } => {
            let via = via
                .iter()
                .map(|q| format!("Q{q}"))
                .collect::<Vec<_>>()
                .join(", ");
            println!("  SWAPs:    {} (via {via})", style(swaps).yellow().bold());
            println!(
                "  Status:   {}",
                style(format!(
                    "not connected, needs {} extra CNOTs",
                    swaps * GATES_PER_SWAP as usize
                ))
                .red()
            );
        }
    }

    Ok(status)
}
