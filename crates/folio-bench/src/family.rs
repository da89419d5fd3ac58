//! Benchmark circuit families and their reference generators.

use serde::Serialize;

/// A family of benchmark circuits, named by the prefix of the circuit name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CircuitFamily {
    Ghz,
    Qft,
    Qaoa,
    Vqe,
    AllToAll,
    Random,
}

impl CircuitFamily {
    /// All families in presentation order.
    pub const ALL: [CircuitFamily; 6] = [
        CircuitFamily::Ghz,
        CircuitFamily::Qft,
        CircuitFamily::Qaoa,
        CircuitFamily::Vqe,
        CircuitFamily::AllToAll,
        CircuitFamily::Random,
    ];

    /// Family of a circuit name such as `QAOA-4`.
    pub fn from_circuit_name(name: &str) -> Option<Self> {
        let prefix = name.split_once('-').map_or(name, |(p, _)| p);
        Self::ALL.into_iter().find(|f| f.label() == prefix)
    }

    /// Prefix used in circuit names.
    pub fn label(self) -> &'static str {
        match self {
            CircuitFamily::Ghz => "GHZ",
            CircuitFamily::Qft => "QFT",
            CircuitFamily::Qaoa => "QAOA",
            CircuitFamily::Vqe => "VQE",
            CircuitFamily::AllToAll => "AllToAll",
            CircuitFamily::Random => "Random",
        }
    }

    /// One-line description.
    pub fn description(self) -> &'static str {
        match self {
            CircuitFamily::Ghz => {
                "GHZ (Greenberger-Horne-Zeilinger) state - maximally entangled state"
            }
            CircuitFamily::Qft => {
                "Quantum Fourier Transform - the quantum analog of the discrete Fourier transform"
            }
            CircuitFamily::Qaoa => {
                "Quantum Approximate Optimization Algorithm - for combinatorial optimization"
            }
            CircuitFamily::Vqe => "Variational Quantum Eigensolver hardware-efficient ansatz",
            CircuitFamily::AllToAll => {
                "All-to-all entanglement - every qubit entangled with every other"
            }
            CircuitFamily::Random => "Random circuit - tests general routing performance",
        }
    }

    /// Language of [`example_code`](Self::example_code).
    pub fn example_language(self) -> &'static str {
        "python"
    }

    /// Reference generator for this family.
    pub fn example_code(self) -> &'static str {
        match self {
            CircuitFamily::Ghz => GHZ_CODE,
            CircuitFamily::Qft => QFT_CODE,
            CircuitFamily::Qaoa => QAOA_CODE,
            CircuitFamily::Vqe => VQE_CODE,
            CircuitFamily::AllToAll => ALL_TO_ALL_CODE,
            CircuitFamily::Random => RANDOM_CODE,
        }
    }
}

const GHZ_CODE: &str = r#"from qiskit import QuantumCircuit

def create_ghz_circuit(n_qubits: int) -> QuantumCircuit:
    """Create GHZ state preparation circuit."""
    qc = QuantumCircuit(n_qubits, name="GHZ")
    qc.h(0)
    for i in range(n_qubits - 1):
        qc.cx(i, i + 1)
    return qc

qc = create_ghz_circuit(5)
print(qc.draw())"#;

const QFT_CODE: &str = r#"from qiskit import QuantumCircuit
from qiskit.synthesis.qft import synth_qft_full

def create_qft_circuit(n_qubits: int) -> QuantumCircuit:
    """Create Quantum Fourier Transform circuit."""
    qft = synth_qft_full(n_qubits, do_swaps=False)
    return qft.decompose()

qc = create_qft_circuit(4)
print(qc.draw())"#;

const QAOA_CODE: &str = r#"from qiskit import QuantumCircuit
import numpy as np

def create_qaoa_circuit(n_qubits: int, p: int = 2, seed: int = 42) -> QuantumCircuit:
    """Create QAOA-style circuit for MaxCut."""
    rng = np.random.default_rng(seed)
    qc = QuantumCircuit(n_qubits, name="QAOA")

    n_edges = min(n_qubits * 2, n_qubits * (n_qubits - 1) // 2)
    all_edges = [(i, j) for i in range(n_qubits)
                 for j in range(i + 1, n_qubits)]
    rng.shuffle(all_edges)
    edges = all_edges[:n_edges]

    for q in range(n_qubits):
        qc.h(q)

    for _ in range(p):
        gamma = rng.uniform(0, np.pi)
        for i, j in edges:
            qc.cx(i, j)
            qc.rz(2 * gamma, j)
            qc.cx(i, j)
        beta = rng.uniform(0, np.pi)
        for q in range(n_qubits):
            qc.rx(2 * beta, q)

    return qc

qc = create_qaoa_circuit(4, p=2)
print(qc.draw())"#;

const VQE_CODE: &str = r#"from qiskit import QuantumCircuit
import numpy as np

def create_vqe_ansatz(n_qubits: int, layers: int = 2, seed: int = 42) -> QuantumCircuit:
    """Create VQE hardware-efficient ansatz."""
    rng = np.random.default_rng(seed)
    qc = QuantumCircuit(n_qubits, name="VQE")

    for layer in range(layers):
        for q in range(n_qubits):
            qc.ry(rng.uniform(0, 2 * np.pi), q)
            qc.rz(rng.uniform(0, 2 * np.pi), q)
        for q in range(n_qubits):
            qc.cx(q, (q + 1) % n_qubits)
        if layer % 2 == 1 and n_qubits >= 4:
            for q in range(0, n_qubits - 2, 2):
                qc.cx(q, q + 2)

    for q in range(n_qubits):
        qc.ry(rng.uniform(0, 2 * np.pi), q)

    return qc

qc = create_vqe_ansatz(4, layers=2)
print(qc.draw())"#;

const ALL_TO_ALL_CODE: &str = r#"from qiskit import QuantumCircuit

def create_all_to_all_circuit(n_qubits: int) -> QuantumCircuit:
    """Create circuit with all-to-all entanglement."""
    qc = QuantumCircuit(n_qubits, name="AllToAll")
    qc.h(0)
    for i in range(n_qubits):
        for j in range(i + 1, n_qubits):
            qc.cx(i, j)
    return qc

qc = create_all_to_all_circuit(5)
print(qc.draw())"#;

const RANDOM_CODE: &str = r#"from qiskit import QuantumCircuit
import numpy as np

def create_random_circuit(n_qubits: int, depth: int = 6, seed: int = 42) -> QuantumCircuit:
    """Create a random circuit."""
    rng = np.random.default_rng(seed)
    qc = QuantumCircuit(n_qubits, name="Random")

    for _ in range(depth):
        for q in range(n_qubits):
            gate = rng.choice(["h", "x", "y", "z", "s", "t"])
            getattr(qc, gate)(q)
        n_2q = rng.integers(1, max(2, n_qubits // 2))
        for _ in range(n_2q):
            q1, q2 = rng.choice(n_qubits, size=2, replace=False)
            qc.cx(int(q1), int(q2))

    return qc

qc = create_random_circuit(5, depth=6)
print(qc.draw())"#;
