//! Fidelity compounding helpers.
//!
//! Gate errors multiply: a circuit of `n` gates at fidelity `f` succeeds with
//! probability roughly `f^n`. A SWAP is three CNOTs, so it inherits three
//! times the two-qubit gate error.

/// CNOTs in one SWAP decomposition.
pub const GATES_PER_SWAP: i32 = 3;

/// Fidelity of `gate_count` gates applied in sequence.
pub fn compound(gate_fidelity: f64, gate_count: u32) -> f64 {
    gate_fidelity.powi(i32::try_from(gate_count).unwrap_or(i32::MAX))
}

/// Fidelity of one SWAP built from gates of fidelity `gate_fidelity`.
pub fn swap_fidelity(gate_fidelity: f64) -> f64 {
    gate_fidelity.powi(GATES_PER_SWAP)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compound() {
        assert_eq!(compound(0.99, 0), 1.0);
        assert!((compound(0.99, 50) - 0.605_006).abs() < 1e-6);
    }

    #[test]
    fn test_swap_fidelity() {
        assert!((swap_fidelity(0.99) - 0.970_299).abs() < 1e-9);
    }
}
