//! HTML page rendering.
//!
//! Pages are assembled server-side from the folio-view renderers. Each page
//! resolves one [`Palette`] and passes it down to every figure.

use std::fmt::Write;

use folio_bench::aggregate::{RegimeSummary, percent, signed_points, win_tally};
use folio_bench::{BenchmarkRecord, CircuitFamily, Regime};
use folio_topology::{ColorScale, Palette, named};
use folio_view::calculator::{MAX_GATE_FIDELITY, MAX_GATES, MIN_GATE_FIDELITY, MIN_GATES};
use folio_view::charts::SYNTHETIC_CAPTION;
use folio_view::placement::{INPUT_CIRCUIT, PLACEMENTS};
use folio_view::svg::escape;
use folio_view::{
    BenchmarkCharts, CostComparison, ErrorAccumulation, FidelityCalculator, PathChoice, STEPS,
    SwapDiagram, TopologyView, ViewResult, swap,
};

use crate::code_block;
use crate::links::PageLinks;
use crate::content::{
    AUTHOR, Block, EDUCATION, EXPERIENCE, FOOTER_LINKS, Figure, POSTS, Post, ROLE_LINE, ROLE_URL,
    Role, TAGLINE,
};
use crate::state::{AppState, SiteConfig};

/// Interactive figure state baked into a rendered post.
#[derive(Debug, Clone)]
pub struct Figures {
    pub topology: TopologyView,
    pub swap: SwapDiagram,
    pub cost: CostComparison,
    pub calculator: FidelityCalculator,
    pub animation: ErrorAccumulation,
}

impl Figures {
    /// Figures as they appear before any interaction.
    pub fn initial(config: &SiteConfig) -> Self {
        Self {
            topology: TopologyView::sample(config.selection_capacity),
            swap: SwapDiagram::default(),
            cost: CostComparison::default(),
            calculator: FidelityCalculator::default(),
            animation: ErrorAccumulation::default(),
        }
    }
}

/// Two-qubit gate fidelity quoted under the SWAP diagram.
const QUOTED_GATE_FIDELITY: f64 = 0.99;

/// `theme_href` is the URL of the same page in the other theme.
fn layout(title: &str, palette: Palette, theme_href: &str, body: &str) -> String {
    let toggle = palette.theme.toggled();
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>
body {{ margin: 0; background: {bg}; color: {fg}; font-family: system-ui, sans-serif; line-height: 1.6; }}
main {{ max-width: 56rem; margin: 0 auto; padding: 2rem 1rem; }}
a {{ color: inherit; }}
.muted {{ color: {secondary}; }}
.mono {{ font-family: ui-monospace, monospace; }}
.topbar {{ display: flex; justify-content: space-between; margin-bottom: 2rem; }}
.figure {{ margin: 3rem 0; padding: 1rem; border: 1px solid {border}; border-radius: 8px; }}
.figure svg {{ max-width: 100%; height: auto; }}
.caption {{ font-size: 0.8rem; color: {muted}; }}
.cards {{ display: grid; grid-template-columns: repeat(4, 1fr); gap: 0.75rem; }}
.card {{ padding: 0.75rem; border-radius: 6px; }}
.card-label {{ margin: 0; font-size: 0.75rem; }}
.card-value {{ margin: 0; font-size: 1.25rem; font-weight: 600; }}
table {{ width: 100%; border-collapse: collapse; font-size: 0.875rem; }}
th, td {{ text-align: left; padding: 0.5rem; border-bottom: 1px solid {border}; }}
.code-block {{ padding: 1rem; border-radius: 4px; overflow-x: auto; font-size: 0.85rem; }}
.toc a {{ text-decoration: none; }}
.toc .level-3 {{ padding-left: 0.75rem; }}
.step-dot {{ text-decoration: none; margin-right: 0.25rem; }}
.placements {{ display: grid; grid-template-columns: repeat(2, 1fr); gap: 1.5rem; }}
footer {{ margin-top: 4rem; padding-top: 1rem; border-top: 1px solid {border}; font-size: 0.875rem; }}
footer a {{ margin-right: 1rem; }}
</style>
</head>
<body>
<main>
<div class="topbar"><a href="/" aria-label="Back to home">Home</a><a href="{theme_href}" aria-label="Toggle theme">{toggle} mode</a></div>
{body}
{footer}
</main>
</body>
</html>
"#,
        title = escape(title),
        theme_href = escape(theme_href),
        bg = palette.background,
        fg = palette.foreground,
        secondary = palette.text_secondary,
        muted = palette.text_muted,
        border = palette.border,
        footer = footer(),
    )
}

fn footer() -> String {
    let mut html = String::from("<footer>");
    for (label, href) in FOOTER_LINKS {
        let _ = write!(html, r#"<a href="{href}">{label}</a>"#);
    }
    html.push_str("</footer>");
    html
}

fn role_rows(html: &mut String, roles: &[Role]) {
    for role in roles {
        let _ = write!(
            html,
            r#"<tr><td>{}</td><td>{}</td><td class="mono">{}</td></tr>"#,
            escape(role.organization),
            escape(role.title),
            escape(role.period),
        );
    }
}

/// The landing page: header, experience table and writings list.
pub fn landing_page(palette: Palette) -> String {
    let mut body = String::new();
    let _ = write!(
        body,
        r#"<header><h2>{AUTHOR}</h2><h3><a href="{ROLE_URL}">{ROLE_LINE}</a></h3><p class="muted">{TAGLINE}</p></header>"#,
    );

    body.push_str(r#"<table class="experience"><tbody>"#);
    role_rows(&mut body, EXPERIENCE);
    body.push_str(r#"<tr><td colspan="3"></td></tr>"#);
    role_rows(&mut body, EDUCATION);
    body.push_str("</tbody></table>");

    body.push_str(r#"<section class="writings"><h3>Writings</h3>"#);
    for post in &POSTS {
        let _ = write!(
            body,
            r#"<article><a href="/blog/{slug}"><span class="mono muted">{date}</span><h4>{title}</h4><p class="muted">{excerpt}</p></a></article>"#,
            slug = post.slug,
            date = post.display_date(),
            title = escape(post.title),
            excerpt = escape(post.excerpt),
        );
    }
    body.push_str("</section>");

    layout(
        &format!("{AUTHOR} - {ROLE_LINE}"),
        palette,
        &theme_only_href(palette),
        &body,
    )
}

fn theme_only_href(palette: Palette) -> String {
    format!("?theme={}", palette.theme.toggled())
}

/// The not-found page, linking back to `/`.
pub fn not_found_page(palette: Palette) -> String {
    layout(
        "Post not found",
        palette,
        &theme_only_href(palette),
        r#"<div class="not-found"><h1>Post not found</h1><a href="/">Back to home</a></div>"#,
    )
}

/// A full blog post with its interactive figures.
pub fn post_page(
    state: &AppState,
    post: &Post,
    figures: &Figures,
    palette: Palette,
) -> ViewResult<String> {
    let links = PageLinks::new(palette.theme, figures);
    let mut body = String::new();

    body.push_str(r#"<nav class="toc"><p>Contents</p><ul>"#);
    for entry in post.toc {
        let _ = write!(
            body,
            r##"<li class="level-{}"><a href="#{}">{}</a></li>"##,
            entry.level,
            entry.id,
            escape(entry.title),
        );
    }
    body.push_str("</ul></nav>");

    let _ = write!(
        body,
        r#"<article><header><span class="mono muted">{}</span><h1>{}</h1></header>"#,
        post.display_date(),
        escape(post.title),
    );

    for block in post.body {
        match *block {
            Block::Heading(id) => {
                let (level, title) = post
                    .heading(id)
                    .map_or((2, id), |entry| (entry.level, entry.title));
                let _ = write!(body, r#"<h{level} id="{id}">{}</h{level}>"#, escape(title));
            }
            Block::Paragraph(text) => {
                let _ = write!(body, "<p>{text}</p>");
            }
            Block::List(items) => {
                body.push_str("<ul>");
                for item in items {
                    let _ = write!(body, "<li>{item}</li>");
                }
                body.push_str("</ul>");
            }
            Block::Code { language, code } => {
                body.push_str(&code_block::render(code, language, palette));
            }
            Block::Table { header, rows } => table(&mut body, header, rows),
            Block::Figure(figure) => {
                let _ = write!(body, r#"<div class="figure" data-figure="{figure:?}">"#);
                render_figure(&mut body, state, figures, &links, figure, palette)?;
                body.push_str("</div>");
            }
            Block::Callout(text) => {
                let _ = write!(
                    body,
                    r#"<div class="callout" style="border:1px solid {};padding:1.5rem;border-radius:8px"><p>{text}</p></div>"#,
                    named::ACCENT,
                );
            }
        }
    }
    body.push_str("</article>");

    let theme_href = links.with_theme(palette.theme.toggled()).href();
    Ok(layout(post.title, palette, &theme_href, &body))
}

fn table(html: &mut String, header: &[&str], rows: &[&[&str]]) {
    html.push_str("<table><thead><tr>");
    for cell in header {
        let _ = write!(html, "<th>{}</th>", escape(cell));
    }
    html.push_str("</tr></thead><tbody>");
    for row in rows {
        html.push_str("<tr>");
        for cell in *row {
            let _ = write!(html, "<td>{}</td>", escape(cell));
        }
        html.push_str("</tr>");
    }
    html.push_str("</tbody></table>");
}

fn render_figure(
    html: &mut String,
    state: &AppState,
    figures: &Figures,
    links: &PageLinks,
    figure: Figure,
    palette: Palette,
) -> ViewResult<()> {
    match figure {
        Figure::SwapGate => swap_figure(html, &figures.swap, links, palette),
        Figure::Connectivity => connectivity_figure(html, &figures.topology, links, palette),
        Figure::CostComparison => cost_figure(html, &figures.cost, links, palette)?,
        Figure::FidelityCalculator => calculator_figure(html, &figures.calculator, links, palette),
        Figure::ErrorAccumulation => animation_figure(html, &figures.animation, links, palette),
        Figure::Placement => placement_figure(html, state, palette),
        Figure::Benchmarks => benchmarks_figure(html, state, palette),
        Figure::RegimeTable => regime_table(html, state),
    }
    Ok(())
}

fn swap_figure(html: &mut String, diagram: &SwapDiagram, links: &PageLinks, palette: Palette) {
    let _ = write!(
        html,
        r#"<div class="swap">{symbol}<span> = </span>{decomposition}</div><a href="{href}">{label}</a><p class="caption">{caption}</p>"#,
        symbol = diagram.render_symbol(palette),
        decomposition = diagram.render_decomposition(palette),
        href = escape(&links.with_expanded(!diagram.is_expanded()).href()),
        label = diagram.button_label(),
        caption = swap::CAPTION,
    );
    let _ = write!(
        html,
        r#"<p class="caption">At {:.0}% gate fidelity one SWAP keeps {:.1}% of the state.</p>"#,
        QUOTED_GATE_FIDELITY * 100.0,
        SwapDiagram::effective_fidelity(QUOTED_GATE_FIDELITY) * 100.0,
    );
}

fn connectivity_figure(
    html: &mut String,
    view: &TopologyView,
    links: &PageLinks,
    palette: Palette,
) {
    let capacity = view.selection().capacity();
    let scale = ColorScale::topology();
    let tooltip = view.tooltip();
    let tip_color = tooltip.color.map_or_else(|| palette.text_muted.css(), |c| c.css());
    let _ = write!(
        html,
        r#"<p class="muted">Select up to {capacity} qubits</p>{svg}<p class="tooltip" style="color:{tip_color}">{tip}</p><div class="legend"><span style="color:{low}">Low</span> <span style="color:{high}">High</span></div><p class="selection">{label}</p>"#,
        svg = view.render_svg_linked(palette, links),
        tip = escape(&tooltip.text),
        low = scale.color(scale.lo),
        high = scale.color(scale.hi),
        label = escape(&view.selection_label()),
    );
    let connectivity = view.connectivity();
    if let Some(message) = connectivity.message() {
        let _ = write!(
            html,
            r#"<p class="connectivity" style="color:{}">{}</p><a href="{}">Clear</a>"#,
            connectivity.color(),
            escape(&message),
            escape(&links.with_selected(&[]).href()),
        );
    }
}

fn cost_figure(
    html: &mut String,
    cost: &CostComparison,
    links: &PageLinks,
    palette: Palette,
) -> ViewResult<()> {
    html.push_str(&cost.render_svg(palette));
    for choice in [PathChoice::Short, PathChoice::Quality] {
        let summary = cost.summary(choice)?;
        let marker = if choice == cost.choice() { " (shown)" } else { "" };
        let _ = write!(
            html,
            r#"<p><a href="{href}">{title}</a>{marker}: {route} <span class="muted">{detail}</span></p>"#,
            href = escape(&links.with_path(choice).href()),
            title = choice.title(),
            route = summary.route,
            detail = summary.detail(),
        );
    }
    let (readout, color) = cost.readout()?;
    let _ = write!(
        html,
        r#"<p>Total fidelity: <strong style="color:{color}">{readout}</strong></p>"#
    );
    Ok(())
}

fn calculator_figure(
    html: &mut String,
    calculator: &FidelityCalculator,
    links: &PageLinks,
    palette: Palette,
) {
    let readout = calculator.readout();
    let (gates_fill, fidelity_fill) = calculator.slider_fill();

    html.push_str(r#"<form method="get" class="calculator">"#);
    for (key, value) in links.pairs() {
        if key != "gates" && key != "fidelity" {
            let _ = write!(
                html,
                r#"<input type="hidden" name="{key}" value="{}">"#,
                escape(&value)
            );
        }
    }
    let track = |fill: f64| {
        format!(
            "background:linear-gradient(to right, {accent} {fill:.1}%, {rest} {fill:.1}%)",
            accent = named::ACCENT,
            rest = palette.border,
        )
    };
    let _ = write!(
        html,
        r#"<label>Gate count: {gates_label}<input type="range" name="gates" min="{MIN_GATES}" max="{MAX_GATES}" step="1" value="{gates}" style="{gates_track}"></label>"#,
        gates_label = readout.gate_count,
        gates = calculator.gate_count(),
        gates_track = track(gates_fill),
    );
    let _ = write!(
        html,
        r#"<label>Gate fidelity: {fidelity_label}<input type="range" name="fidelity" min="{MIN_GATE_FIDELITY}" max="{MAX_GATE_FIDELITY}" step="0.001" value="{fidelity}" style="{fidelity_track}"></label>"#,
        fidelity_label = readout.gate_fidelity,
        fidelity = calculator.gate_fidelity(),
        fidelity_track = track(fidelity_fill),
    );
    html.push_str(r#"<button type="submit">Update</button></form>"#);

    let _ = write!(
        html,
        r#"<p>{gates} gates at {fidelity} per gate</p><p>Circuit fidelity: <strong style="color:{bad}">{total}</strong></p><p>With +0.5% per gate: <strong style="color:{good}">{improved}</strong> ({gain})</p>"#,
        gates = readout.gate_count,
        fidelity = readout.gate_fidelity,
        total = readout.total,
        improved = readout.improved,
        gain = readout.gain,
        bad = named::BAD,
        good = named::GOOD,
    );
}

fn animation_figure(
    html: &mut String,
    animation: &ErrorAccumulation,
    links: &PageLinks,
    palette: Palette,
) {
    let step = animation.current();
    let _ = write!(
        html,
        r#"{svg}<p>After {label}: <strong style="color:{color}">{readout}</strong></p>"#,
        svg = animation.render_svg(palette),
        label = step.label,
        color = animation.readout_color(),
        readout = animation.readout(),
    );

    html.push_str(r#"<div class="steps">"#);
    for (i, s) in STEPS.iter().enumerate() {
        let color = if i <= animation.step() {
            animation.readout_color()
        } else {
            palette.step_idle
        };
        let _ = write!(
            html,
            r#"<a class="step-dot" href="{href}" data-step="{i}" aria-label="Step {i}: {label}" style="color:{color}">●</a>"#,
            href = escape(&links.jump_to(i)),
            label = s.label,
        );
    }
    let (action, state) = if animation.is_playing() {
        ("Pause", "Playing")
    } else {
        ("Play", "Paused")
    };
    let _ = write!(
        html,
        r#"</div><a class="play" href="{href}">{action}</a><p class="caption">{state}</p>"#,
        href = escape(&links.set_playing(!animation.is_playing())),
    );
}

fn placement_figure(html: &mut String, state: &AppState, palette: Palette) {
    let _ = write!(
        html,
        r#"<p class="caption">Input circuit</p>{}<div class="placements">"#,
        INPUT_CIRCUIT.render_svg(palette),
    );
    for placement in &PLACEMENTS {
        let color = placement.color();
        let _ = write!(
            html,
            r#"<div class="placement" data-placement="{name}"><p style="color:{color}">● {name}</p>{topology}{circuit}<p class="mono"><span class="muted">SWAPs:</span> <span style="color:{color}">{swaps}</span> <span class="muted">Fidelity:</span> <span style="color:{color}">{readout}</span></p></div>"#,
            name = placement.name,
            topology = placement.render_topology(&state.topology, palette),
            circuit = placement.routed.render_svg(palette),
            swaps = placement.swaps,
            readout = placement.readout(),
        );
    }
    html.push_str("</div>");
}

fn benchmarks_figure(html: &mut String, state: &AppState, palette: Palette) {
    let records = state.display_records();
    let charts = BenchmarkCharts::new(records, state.config.win_threshold);
    let metadata = state.dataset.metadata();

    html.push_str(&charts.summary_cards_html(palette));
    html.push_str(&charts.fidelity_chart_svg(palette));
    html.push_str(&charts.gain_chart_svg(palette));
    if charts.has_synthetic_errors() {
        let _ = write!(html, r#"<p class="caption">{SYNTHETIC_CAPTION}</p>"#);
    }
    let _ = write!(
        html,
        r#"<p class="caption">{}-qubit {} topology, {} runs per circuit, averaged</p>"#,
        metadata.device_qubits,
        escape(&metadata.topology),
        metadata.runs_per_circuit,
    );
    html.push_str(&charts.results_table_html(palette));
    key_findings(html, records, state.config.win_threshold, palette);

    for family in CircuitFamily::ALL {
        if !records.iter().any(|r| r.family() == family.label()) {
            continue;
        }
        let _ = write!(
            html,
            r#"<section id="family-{label}"><h4>{label}</h4><p class="muted">{description}</p>{code}</section>"#,
            label = family.label(),
            description = escape(family.description()),
            code = code_block::render(family.example_code(), family.example_language(), palette),
        );
    }
}

fn key_findings(html: &mut String, records: &[BenchmarkRecord], threshold: f64, palette: Palette) {
    let tally = win_tally(records, threshold);
    let avg_gain = if records.is_empty() {
        0.0
    } else {
        records.iter().map(|r| r.fidelity_gain_pct).sum::<f64>() / records.len() as f64
    };
    let _ = write!(
        html,
        r#"<div class="findings"><h4>Key Findings</h4><ul style="color:{}">"#,
        palette.text_secondary,
    );
    let _ = write!(
        html,
        "<li><strong>NACRE wins on {}/{} circuits</strong> ({} win rate) with an average fidelity gain of {}</li>",
        tally.wins,
        tally.total,
        percent(tally.rate, 1),
        signed_points(avg_gain, 1),
    );
    if let Some(best) = records
        .iter()
        .max_by(|a, b| a.fidelity_gain_pct.total_cmp(&b.fidelity_gain_pct))
    {
        let _ = write!(
            html,
            "<li><strong>{} shows maximum gain</strong> ({})</li>",
            escape(&best.circuit),
            signed_points(best.fidelity_gain_pct, 2),
        );
    }
    let baseline_swaps: f64 = records.iter().map(|r| r.baseline.swaps.mean).sum();
    if baseline_swaps > 0.0 {
        let subject_swaps: f64 = records.iter().map(|r| r.subject.swaps.mean).sum();
        let _ = write!(
            html,
            "<li><strong>SWAP count is secondary</strong>: NACRE uses {:.1}x the SWAPs on average</li>",
            subject_swaps / baseline_swaps,
        );
    }
    html.push_str("</ul></div>");
}

fn gate_range(regime: Regime) -> &'static str {
    match regime {
        Regime::Noisy => "90-99%",
        Regime::Good => "95-99%",
        Regime::Excellent => "99-99.9%",
    }
}

fn regime_table(html: &mut String, state: &AppState) {
    html.push_str(
        "<table><thead><tr><th>Fidelity Regime</th><th>Gate Fidelity Range</th><th>NACRE Advantage</th><th>Wins</th></tr></thead><tbody>",
    );
    for regime in Regime::ALL {
        let records = state.dataset.records(regime);
        let Some(summary) = RegimeSummary::compute(regime, records, state.config.win_threshold)
        else {
            continue;
        };
        let tally = win_tally(records, state.config.win_threshold);
        let _ = write!(
            html,
            r#"<tr><td>{regime}</td><td>{range}</td><td style="color:{color}">{gain} avg (σ {std:.2})</td><td>{wins}/{total}</td></tr>"#,
            range = gate_range(regime),
            color = named::SUBJECT,
            gain = signed_points(summary.gain.mean, 1),
            std = summary.gain.std,
            wins = tally.wins,
            total = summary.circuits,
        );
    }
    html.push_str("</tbody></table>");
}
