//! Error accumulation animation.
//!
//! A fixed gate sequence whose running fidelity drops with each operation.
//! While playing, a [`Ticker`] advances the step on a fixed interval; the
//! ticker task is aborted when its handle is dropped.

use std::sync::Arc;
use std::time::Duration;

use folio_topology::{Color, Palette, named};
use serde::Serialize;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};
use tracing::{debug, trace};

use crate::svg::SvgDoc;

/// Default time between steps.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(1500);

/// Fidelity below which the readout is drawn as bad.
pub const BAD_FIDELITY: f64 = 0.95;

/// One operation in the sequence and the fidelity after it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Step {
    pub label: &'static str,
    pub fidelity: f64,
}

/// The animated sequence.
pub const STEPS: [Step; 6] = [
    Step {
        label: "Start",
        fidelity: 1.0,
    },
    Step {
        label: "CNOT",
        fidelity: 0.99,
    },
    Step {
        label: "CNOT",
        fidelity: 0.98,
    },
    Step {
        label: "SWAP",
        fidelity: 0.94,
    },
    Step {
        label: "CNOT",
        fidelity: 0.92,
    },
    Step {
        label: "Measure",
        fidelity: 0.89,
    },
];

/// Step counter and play state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ErrorAccumulation {
    step: usize,
    playing: bool,
}

impl Default for ErrorAccumulation {
    fn default() -> Self {
        Self {
            step: 0,
            playing: true,
        }
    }
}

impl ErrorAccumulation {
    pub fn step(&self) -> usize {
        self.step
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn current(&self) -> Step {
        STEPS[self.step]
    }

    /// Timer tick: advance modulo the step count if playing.
    pub fn tick(&mut self) {
        if self.playing {
            self.step = (self.step + 1) % STEPS.len();
        }
    }

    /// Jump to a step dot and pause. Indices past the end select the last step.
    pub fn jump_to(&mut self, step: usize) {
        self.step = step.min(STEPS.len() - 1);
        self.playing = false;
    }

    /// Play/pause button.
    pub fn toggle_playing(&mut self) {
        self.playing = !self.playing;
    }

    pub fn is_bad(&self) -> bool {
        self.current().fidelity < BAD_FIDELITY
    }

    /// Color of the fidelity readout and the reached step dots.
    pub fn readout_color(&self) -> Color {
        if self.is_bad() {
            named::BAD
        } else {
            named::GOOD
        }
    }

    /// Fidelity readout, e.g. `94%`.
    pub fn readout(&self) -> String {
        format!("{:.0}%", self.current().fidelity * 100.0)
    }

    /// Render the wire with one box per gate after `Start`.
    pub fn render_svg(&self, palette: Palette) -> String {
        let mut doc = SvgDoc::new(480.0, 60.0);
        doc.line((50.0, 30.0), (460.0, 30.0), &palette.stroke_dim, 1.0)
            .text((20.0, 34.0), "|ψ⟩", &palette.stroke, 11, "");

        for (i, gate) in STEPS[1..].iter().enumerate() {
            let x = 100.0 + i as f64 * 70.0;
            let active = i < self.step;
            let current = i + 1 == self.step;
            let fill = if current { named::ACCENT } else { palette.step_idle };
            let border = if active { palette.step_reached } else { palette.stroke_dim };
            let text_fill = if current {
                Color::rgb(0, 0, 0)
            } else {
                palette.foreground
            };
            let weight = if current { "600" } else { "normal" };
            let opacity = if active { 1.0 } else { 0.5 };
            let attrs =
                format!(r#" text-anchor="middle" font-weight="{weight}" opacity="{opacity}""#);
            doc.open_group(&format!(r#" data-step="{}""#, i + 1))
                .rect(x - 27.0, 10.0, 54.0, 40.0, 4.0, &fill, Some(&border))
                .text((x, 35.0), gate.label, &text_fill, 11, &attrs)
                .close_group();
        }
        doc.finish()
    }
}

/// Handle to a running animation timer.
///
/// Dropping the handle aborts the timer task.
#[derive(Debug)]
pub struct Ticker {
    handle: JoinHandle<()>,
}

impl Ticker {
    /// Spawn a task that ticks `state` every `period`.
    ///
    /// The first tick fires one full period after spawning.
    pub fn spawn(state: Arc<Mutex<ErrorAccumulation>>, period: Duration) -> Self {
        let handle = tokio::spawn(async move {
            let mut interval = time::interval_at(time::Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                let mut anim = state.lock().await;
                anim.tick();
                trace!(step = anim.step(), playing = anim.is_playing(), "animation tick");
            }
        });
        debug!(?period, "animation ticker started");
        Self { handle }
    }

    pub fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }

    /// Stop the timer now.
    pub fn stop(self) {
        drop(self);
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.handle.abort();
        debug!("animation ticker stopped");
    }
}
