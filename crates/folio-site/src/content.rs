//! Static site content: the post registry, landing page rows and the article body.
//!
//! Paragraph and list text is trusted inline markup and is emitted as is.

use chrono::NaiveDate;
use tracing::warn;

/// One entry of a post's table of contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TocEntry {
    /// Anchor id of the heading.
    pub id: &'static str,
    pub title: &'static str,
    /// Heading level, 2 or 3.
    pub level: u8,
}

/// Interactive figure embedded in a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Figure {
    SwapGate,
    Connectivity,
    CostComparison,
    FidelityCalculator,
    ErrorAccumulation,
    Placement,
    Benchmarks,
    RegimeTable,
}

/// A block of article content.
#[derive(Debug, Clone, Copy)]
pub enum Block {
    /// Heading; level and title come from the table of contents entry.
    Heading(&'static str),
    Paragraph(&'static str),
    List(&'static [&'static str]),
    Code {
        language: &'static str,
        code: &'static str,
    },
    /// Two-column table: header then rows.
    Table {
        header: &'static [&'static str],
        rows: &'static [&'static [&'static str]],
    },
    Figure(Figure),
    Callout(&'static str),
}

/// A blog post.
#[derive(Debug)]
pub struct Post {
    pub slug: &'static str,
    pub title: &'static str,
    /// ISO date, `YYYY-MM-DD`.
    pub date: &'static str,
    pub excerpt: &'static str,
    pub toc: &'static [TocEntry],
    pub body: &'static [Block],
}

impl Post {
    /// Table of contents entry for a heading id.
    pub fn heading(&self, id: &str) -> Option<&TocEntry> {
        self.toc.iter().find(|entry| entry.id == id)
    }

    /// Date as shown on the page, e.g. `Jan 30, 2026`.
    pub fn display_date(&self) -> String {
        format_date(self.date)
    }
}

/// Format an ISO date as `Mon D, YYYY`. Unparseable input is returned unchanged.
pub fn format_date(iso: &str) -> String {
    match NaiveDate::parse_from_str(iso, "%Y-%m-%d") {
        Ok(date) => date.format("%b %-d, %Y").to_string(),
        Err(e) => {
            warn!(date = iso, error = %e, "unparseable post date");
            iso.to_string()
        }
    }
}

/// A row of the experience/education table.
#[derive(Debug, Clone, Copy)]
pub struct Role {
    pub organization: &'static str,
    pub title: &'static str,
    pub period: &'static str,
}

pub const AUTHOR: &str = "Joel Pendleton";
pub const ROLE_LINE: &str = "CTO at Conductor Quantum";
pub const ROLE_URL: &str = "https://conductorquantum.com";
pub const TAGLINE: &str = "Building software infrastructure for quantum computers";

pub const EXPERIENCE: &[Role] = &[
    Role {
        organization: "Conductor Quantum",
        title: "Co-Founder & CTO",
        period: "Jun 2024 - Present",
    },
    Role {
        organization: "Feynman",
        title: "Co-Founder & CTO",
        period: "Dec 2022 - May 2024",
    },
    Role {
        organization: "QuantrolOx",
        title: "Applied Researcher",
        period: "Dec 2022 - May 2024",
    },
    Role {
        organization: "Unify",
        title: "ML Engineer Intern",
        period: "Oct 2022 - Nov 2022",
    },
    Role {
        organization: "C12",
        title: "Research Intern",
        period: "Jun 2022 - Sep 2022",
    },
    Role {
        organization: "Quantum Motion",
        title: "Research Intern",
        period: "Jun 2021 - Sep 2021",
    },
    Role {
        organization: "Quantum Motion",
        title: "Research Intern",
        period: "Jun 2020 - Sep 2020",
    },
];

pub const EDUCATION: &[Role] = &[
    Role {
        organization: "Oxford",
        title: "DPhil",
        period: "Oct 2023 - May 2024",
    },
    Role {
        organization: "Y Combinator",
        title: "S24",
        period: "Jul 2024 - Sep 2024",
    },
    Role {
        organization: "UCL",
        title: "MSci",
        period: "Sep 2018 - Jun 2022",
    },
];

/// Footer links as `(label, href)`.
pub const FOOTER_LINKS: &[(&str, &str)] = &[
    ("X", "https://x.com/joelpendleton"),
    ("LinkedIn", "https://www.linkedin.com/in/joelpendleton"),
    ("GitHub", "https://github.com/joelpendleton"),
    ("Email", "mailto:contact@joelpendleton.com"),
];

/// All published posts, newest first.
pub static POSTS: [Post; 1] = [Post {
    slug: "circuit-matching-problem",
    title: "Noise-Aware Circuit Matching: A GPS for Quantum Hardware",
    date: "2026-01-30",
    excerpt: "The quantum computing industry has a hidden infrastructure problem. We explore the \
qubit routing challenge and introduce NACRE, a noise-aware routing engine that optimizes for \
fidelity instead of SWAP count.",
    toc: CIRCUIT_MATCHING_TOC,
    body: CIRCUIT_MATCHING_BODY,
}];

const CIRCUIT_MATCHING_TOC: &[TocEntry] = &[
    TocEntry {
        id: "hidden-infrastructure-problem",
        title: "The Hidden Infrastructure Problem",
        level: 2,
    },
    TocEntry {
        id: "qubit-routing-problem",
        title: "The Qubit Routing Problem",
        level: 2,
    },
    TocEntry {
        id: "state-of-the-art",
        title: "The State of the Art: SABRE and Its Limitations",
        level: 2,
    },
    TocEntry {
        id: "nacre",
        title: "NACRE: Optimizing for What Actually Matters",
        level: 2,
    },
    TocEntry {
        id: "why-fidelity-compounds",
        title: "Why Fidelity Compounds",
        level: 2,
    },
    TocEntry {
        id: "six-component-cost-function",
        title: "The Six-Component Cost Function",
        level: 3,
    },
    TocEntry {
        id: "intelligent-initial-placement",
        title: "Intelligent Initial Placement",
        level: 3,
    },
    TocEntry {
        id: "performance",
        title: "Performance: Fidelity Is the Win",
        level: 2,
    },
    TocEntry {
        id: "fidelity-vs-swap-tradeoff",
        title: "The Fidelity vs SWAP Tradeoff",
        level: 3,
    },
    TocEntry {
        id: "when-nacre-excels",
        title: "When NACRE Excels",
        level: 2,
    },
    TocEntry {
        id: "fidelity-regime-variation",
        title: "How Advantage Varies by Device Quality",
        level: 3,
    },
    TocEntry {
        id: "bigger-picture",
        title: "The Bigger Picture",
        level: 2,
    },
];

const DISTANCE_CODE: &str = "# SABRE approach
distance(q1, q2) = number_of_edges_in_shortest_path
# Implicit goal: minimize total SWAPs

# NACRE approach
edge_weight(q1, q2) = -log(fidelity[q1, q2])
distance(q1, q2) = sum_of_edge_weights_along_optimal_path
# Explicit goal: maximize circuit fidelity";

const CIRCUIT_MATCHING_BODY: &[Block] = &[
    Block::Heading("hidden-infrastructure-problem"),
    Block::Paragraph(
        "Think about what happens when you click &quot;Buy Now&quot; on a website. Your browser \
talks to a web server, which talks to a payment processor, which talks to your bank, and the \
confirmation ripples back in under two seconds. That simple action rests on decades of \
infrastructure: compilers, operating systems and networking protocols.",
    ),
    Block::Paragraph(
        "Now here is an uncomfortable truth: <strong>none of this infrastructure exists for \
quantum computers</strong>.",
    ),
    Block::Paragraph(
        "When you run a program on your laptop, your code is compiled down to machine code that \
must then be <em>routed</em> through billions of transistors. These problems were solved for \
classical computers long ago. For quantum computers? We are still figuring it out.",
    ),
    Block::Heading("qubit-routing-problem"),
    Block::Paragraph(
        "Suppose you have written a quantum algorithm that needs 10 qubits and you submit it to a \
device with 127 physical qubits. The question is deceptively simple: <strong>which 10 physical \
qubits should run your algorithm?</strong> This is hard for three reasons.",
    ),
    Block::Paragraph(
        "<strong>1. Limited Connectivity</strong>: physical qubits can only interact directly with \
their neighbors, typically 2-4 of them on superconducting processors. If two distant qubits must \
interact, the quantum information has to be moved through intermediate qubits with SWAP \
operations, and each SWAP introduces errors.",
    ),
    Block::Figure(Figure::SwapGate),
    Block::Paragraph(
        "<strong>2. Not All Qubits Are Created Equal</strong>: on a real processor coherence \
times, gate fidelities and readout accuracy all vary from qubit to qubit.",
    ),
    Block::List(&[
        "Qubit 3 might stay coherent for 100 microseconds while Qubit 7 only lasts 40",
        "The gate between qubits (2,3) might have 99% fidelity while the gate between (5,6) has \
only 95%",
        "Readout accuracy varies from 92% to 99% across different qubits",
    ]),
    Block::Figure(Figure::Connectivity),
    Block::Paragraph(
        "<strong>3. The Combinatorial Explosion</strong>: for a 10-qubit algorithm on a 127-qubit \
device there are roughly 10<sup>21</sup> possible mappings. Finding the optimal placement is \
computationally intractable.",
    ),
    Block::Heading("state-of-the-art"),
    Block::Paragraph(
        "The current industry standard is SABRE (SWAP-based BidiREctional heuristic search). It \
treats routing as graph traversal: find the shortest path, with the fewest SWAPs, to execute every \
two-qubit gate in the circuit.",
    ),
    Block::Paragraph(
        "SABRE works reasonably well, but it <strong>optimizes for the wrong objective</strong>. \
SWAPs are not inherently bad; <em>errors</em> are. <strong>A single SWAP through a noisy edge can \
be worse than three SWAPs through pristine edges</strong>.",
    ),
    Block::Figure(Figure::CostComparison),
    Block::Heading("nacre"),
    Block::Paragraph(
        "NACRE (Noise-Aware Circuit Routing Engine) optimizes for the metric that decides \
whether a computation succeeds: <strong>fidelity</strong>. Sometimes that means fewer SWAPs. \
Sometimes it means <em>more</em> SWAPs over better hardware.",
    ),
    Block::Paragraph("The key step is to replace hop count with a noise-aware distance:"),
    Block::Code {
        language: "python",
        code: DISTANCE_CODE,
    },
    Block::Paragraph(
        "The negative logarithm turns multiplicative fidelity into additive distance, so standard \
shortest-path algorithms apply. Three 99% gates (-log(0.99³) = 0.030) now rank worse than two \
99.5% gates (-log(0.995²) = 0.010).",
    ),
    Block::Figure(Figure::FidelityCalculator),
    Block::Heading("why-fidelity-compounds"),
    Block::Paragraph(
        "NACRE does not ask how to minimize SWAPs. It asks how to get the quantum state to the \
finish line with the highest probability of being correct.",
    ),
    Block::Figure(Figure::ErrorAccumulation),
    Block::Heading("six-component-cost-function"),
    Block::Paragraph(
        "When NACRE must decide which SWAP to insert, it scores candidates on six factors:",
    ),
    Block::Table {
        header: &["Component", "What It Measures"],
        rows: &[
            &[
                "SWAP Error Cost",
                "Error introduced by the SWAP itself, from the edge's two-qubit gate fidelity",
            ],
            &["Decoherence Cost", "How much the qubits decay while the SWAP executes"],
            &[
                "Immediate Benefit",
                "Reduction of fidelity-weighted distance for gates in the front layer",
            ],
            &["Lookahead Cost", "Fidelity impact on upcoming gates"],
            &["Decay Penalty", "Penalty for recently swapped qubits, to avoid loops"],
            &["Crosstalk Penalty", "Penalty for SWAPs on qubits exposed to crosstalk"],
        ],
    },
    Block::Paragraph(
        "SWAP count does not appear in this cost function. What matters is the final fidelity of \
the quantum state, not how many operations it took to get there.",
    ),
    Block::Heading("intelligent-initial-placement"),
    Block::Paragraph(
        "SABRE starts from a random initial layout and relies on bidirectional search to improve \
it. NACRE uses calibration data to pick a good starting layout with four heuristics:",
    ),
    Block::List(&[
        "<strong>Interaction-Weighted</strong>: logical qubits that interact often are placed on \
adjacent high-fidelity physical qubits",
        "<strong>Lifetime-Aware</strong>: long-lived logical qubits get the physical qubits with \
the longest coherence times",
        "<strong>Measurement-Aware</strong>: measured qubits get the best readout fidelity",
        "<strong>Best-Region Selection</strong>: the whole circuit goes on the highest-quality \
connected region of the device",
    ]),
    Block::Figure(Figure::Placement),
    Block::Heading("performance"),
    Block::Paragraph(
        "We benchmarked NACRE against SABRE, the default router in Qiskit, across three fidelity \
regimes on a simulated device with heterogeneous calibration.",
    ),
    Block::Figure(Figure::Benchmarks),
    Block::Paragraph(
        "<strong>The fidelity improvement is the headline result.</strong> Fidelity is \
multiplicative: for a circuit with 100 two-qubit gates, the difference between 0.99 and 0.995 \
per-gate fidelity is the difference between 37% and 61% total fidelity.",
    ),
    Block::Heading("fidelity-vs-swap-tradeoff"),
    Block::Paragraph(
        "<strong>NACRE sometimes uses slightly more SWAPs than SABRE, yet reaches higher \
fidelity</strong>. If a two-hop path crosses 90% edges and a three-hop path crosses 99% edges:",
    ),
    Block::List(&[
        "<strong>SABRE's 2-hop path</strong>: 0.90 × 0.90 = 81% fidelity",
        "<strong>NACRE's 3-hop path</strong>: 0.99 × 0.99 × 0.99 = 97% fidelity",
    ]),
    Block::Heading("when-nacre-excels"),
    Block::List(&[
        "The device has <strong>high variance in qubit quality</strong>",
        "The device has <strong>sparse connectivity</strong>",
        "Circuits have <strong>many two-qubit gates</strong>",
        "<strong>Coherence times matter</strong> for deep circuits",
    ]),
    Block::Heading("fidelity-regime-variation"),
    Block::Paragraph("The advantage depends on how noisy the hardware is:"),
    Block::Figure(Figure::RegimeTable),
    Block::Paragraph(
        "Gains are largest on noisy devices, but at excellent fidelities the smaller gains keep \
larger circuits inside the useful fidelity range.",
    ),
    Block::Heading("bigger-picture"),
    Block::Paragraph(
        "Traditional routers inherited the classical mindset: operations are reliable, so minimize \
their count. Quantum operations are probabilistic, and every gate and SWAP adds some chance of \
error.",
    ),
    Block::Paragraph(
        "The right objective is to maximize the probability that the computation returns the \
correct answer. <strong>Optimize for fidelity, not for proxy metrics.</strong>",
    ),
    Block::Callout(
        "NACRE is available now in <a href=\"https://coda.conductorquantum.com\">Coda</a>, \
automatically optimizing your quantum circuits for maximum fidelity on the hardware they will \
run on.",
    ),
];
