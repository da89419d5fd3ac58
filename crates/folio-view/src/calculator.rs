//! Compounding fidelity calculator.

use folio_topology::fidelity::compound;
use serde::Serialize;

pub const MIN_GATES: u32 = 10;
pub const MAX_GATES: u32 = 200;
pub const MIN_GATE_FIDELITY: f64 = 0.95;
pub const MAX_GATE_FIDELITY: f64 = 0.999;

/// Per-gate improvement compared against the current setting.
pub const IMPROVEMENT: f64 = 0.005;

/// Slider state: gate count and per-gate fidelity, both clamped to their ranges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FidelityCalculator {
    gate_count: u32,
    gate_fidelity: f64,
}

impl Default for FidelityCalculator {
    fn default() -> Self {
        Self::new(50, 0.99)
    }
}

impl FidelityCalculator {
    pub fn new(gate_count: u32, gate_fidelity: f64) -> Self {
        let mut calc = Self {
            gate_count: MIN_GATES,
            gate_fidelity: MIN_GATE_FIDELITY,
        };
        calc.set_gate_count(gate_count);
        calc.set_gate_fidelity(gate_fidelity);
        calc
    }

    pub fn gate_count(&self) -> u32 {
        self.gate_count
    }

    pub fn gate_fidelity(&self) -> f64 {
        self.gate_fidelity
    }

    pub fn set_gate_count(&mut self, gate_count: u32) {
        self.gate_count = gate_count.clamp(MIN_GATES, MAX_GATES);
    }

    /// NaN is ignored.
    pub fn set_gate_fidelity(&mut self, gate_fidelity: f64) {
        if !gate_fidelity.is_nan() {
            self.gate_fidelity = gate_fidelity.clamp(MIN_GATE_FIDELITY, MAX_GATE_FIDELITY);
        }
    }

    /// Circuit fidelity `f^n`.
    pub fn total(&self) -> f64 {
        compound(self.gate_fidelity, self.gate_count)
    }

    /// Circuit fidelity with every gate improved by [`IMPROVEMENT`].
    pub fn improved(&self) -> f64 {
        compound(self.gate_fidelity + IMPROVEMENT, self.gate_count)
    }

    pub fn gain(&self) -> f64 {
        self.improved() - self.total()
    }

    /// Slider fill positions in percent, `(gates, fidelity)`.
    pub fn slider_fill(&self) -> (f64, f64) {
        let gates = f64::from(self.gate_count - MIN_GATES) / f64::from(MAX_GATES - MIN_GATES);
        let fidelity =
            (self.gate_fidelity - MIN_GATE_FIDELITY) / (MAX_GATE_FIDELITY - MIN_GATE_FIDELITY);
        (gates * 100.0, fidelity * 100.0)
    }

    /// Display strings.
    pub fn readout(&self) -> Readout {
        Readout {
            gate_count: self.gate_count.to_string(),
            gate_fidelity: format!("{:.1}%", self.gate_fidelity * 100.0),
            total: format!("{:.1}%", self.total() * 100.0),
            improved: format!("{:.1}%", self.improved() * 100.0),
            gain: format!("+{:.0}%", self.gain() * 100.0),
        }
    }
}

/// Formatted calculator output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Readout {
    pub gate_count: String,
    pub gate_fidelity: String,
    pub total: String,
    pub improved: String,
    pub gain: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_readout() {
        let readout = FidelityCalculator::default().readout();
        assert_eq!(readout.gate_count, "50");
        assert_eq!(readout.gate_fidelity, "99.0%");
        assert_eq!(readout.total, "60.5%");
        assert_eq!(readout.improved, "77.8%");
        assert_eq!(readout.gain, "+17%");
    }

    #[test]
    fn test_inputs_are_clamped() {
        let calc = FidelityCalculator::new(5, 0.5);
        assert_eq!(calc.gate_count(), MIN_GATES);
        assert_eq!(calc.gate_fidelity(), MIN_GATE_FIDELITY);

        let calc = FidelityCalculator::new(1000, 1.2);
        assert_eq!(calc.gate_count(), MAX_GATES);
        assert_eq!(calc.gate_fidelity(), MAX_GATE_FIDELITY);
        assert_eq!(calc.slider_fill(), (100.0, 100.0));
    }

    #[test]
    fn test_more_gates_lower_fidelity() {
        let short = FidelityCalculator::new(20, 0.99);
        let long = FidelityCalculator::new(120, 0.99);
        assert!(long.total() < short.total());
        assert!(long.gain() > 0.0);
    }
}
