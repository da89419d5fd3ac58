//! Quality-to-color mapping.
//!
//! A [`ColorScale`] maps a quality scalar (fidelity, score) onto a display
//! [`Color`]. Two strategies are supported:
//!
//! - [`ColorStrategy::Hue`]: continuous interpolation from red (0°) towards
//!   green (142° by default) at fixed saturation and lightness.
//! - [`ColorStrategy::Buckets`]: four equal bins mapped to red, amber, yellow
//!   and green.
//!
//! Values outside `[lo, hi]` saturate to the boundary color. A degenerate
//! range (`hi <= lo`) maps everything to the low end.
//!
//! ```
//! use folio_topology::{Color, ColorScale};
//!
//! let scale = ColorScale::topology();
//! assert_eq!(scale.color(0.85), Color::hsl(0.0, 70.0, 50.0));
//! assert_eq!(scale.color(1.0), Color::hsl(142.0, 70.0, 50.0));
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A display color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Color {
    /// Hue (degrees), saturation and lightness (percent).
    Hsl {
        /// Hue in degrees.
        hue: f64,
        /// Saturation in percent.
        saturation: f64,
        /// Lightness in percent.
        lightness: f64,
    },
    /// Opaque RGB, rendered as `#rrggbb`.
    Rgb {
        /// Red channel.
        r: u8,
        /// Green channel.
        g: u8,
        /// Blue channel.
        b: u8,
    },
    /// RGB with alpha, rendered as `rgba(r,g,b,a)`.
    Rgba {
        /// Red channel.
        r: u8,
        /// Green channel.
        g: u8,
        /// Blue channel.
        b: u8,
        /// Alpha in `[0, 1]`.
        a: f64,
    },
}

impl Color {
    /// Create an HSL color.
    pub const fn hsl(hue: f64, saturation: f64, lightness: f64) -> Self {
        Self::Hsl {
            hue,
            saturation,
            lightness,
        }
    }

    /// Create an opaque RGB color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb { r, g, b }
    }

    /// Create an RGB color with alpha.
    pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self::Rgba { r, g, b, a }
    }

    /// CSS representation of the color.
    pub fn css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Color::Hsl {
                hue,
                saturation,
                lightness,
            } => write!(
                f,
                "hsl({}, {}%, {}%)",
                Trimmed(hue),
                Trimmed(saturation),
                Trimmed(lightness)
            ),
            Color::Rgb { r, g, b } => write!(f, "#{r:02x}{g:02x}{b:02x}"),
            Color::Rgba { r, g, b, a } => write!(f, "rgba({r},{g},{b},{})", Trimmed(a)),
        }
    }
}

/// Formats a float without a trailing `.0` and with at most two decimals.
struct Trimmed(f64);

impl fmt::Display for Trimmed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = (self.0 * 100.0).round() / 100.0;
        if rounded.fract() == 0.0 {
            write!(f, "{}", rounded as i64)
        } else {
            let s = format!("{rounded:.2}");
            f.write_str(s.trim_end_matches('0'))
        }
    }
}

/// Named colors used across the site.
pub mod named {
    use super::Color;

    /// Selection and highlight accent.
    pub const ACCENT: Color = Color::hsl(220.0, 100.0, 70.0);
    /// Positive outcome (connected, improvement).
    pub const GOOD: Color = Color::hsl(142.0, 70.0, 45.0);
    /// Negative outcome (disconnected, regression).
    pub const BAD: Color = Color::hsl(0.0, 70.0, 50.0);

    /// Chart color for the subject router.
    pub const SUBJECT: Color = Color::hsl(142.0, 71.0, 45.0);
    /// Chart color for the baseline router.
    pub const BASELINE: Color = Color::hsl(0.0, 72.0, 51.0);
    /// Chart color for neutral series.
    pub const NEUTRAL: Color = Color::hsl(220.0, 10.0, 50.0);

    /// Bucket colors, lowest quality first.
    pub const BUCKETS: [Color; 4] = [
        Color::hsl(0.0, 72.0, 51.0),
        Color::hsl(25.0, 95.0, 53.0),
        Color::hsl(48.0, 96.0, 53.0),
        Color::hsl(142.0, 71.0, 45.0),
    ];
}

/// How a normalized quality is turned into a color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum ColorStrategy {
    /// Linear hue interpolation from 0° up to `max_hue`.
    Hue {
        /// Hue reached at the top of the range.
        max_hue: f64,
        /// Fixed saturation (percent).
        saturation: f64,
        /// Fixed lightness (percent).
        lightness: f64,
    },
    /// Four equal bins over the normalized range.
    Buckets,
}

impl Default for ColorStrategy {
    fn default() -> Self {
        ColorStrategy::Hue {
            max_hue: 142.0,
            saturation: 70.0,
            lightness: 50.0,
        }
    }
}

/// A normalization range plus a color strategy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorScale {
    /// Quality mapped to the lowest color.
    pub lo: f64,
    /// Quality mapped to the highest color.
    pub hi: f64,
    /// Mapping strategy.
    pub strategy: ColorStrategy,
}

impl Default for ColorScale {
    fn default() -> Self {
        Self::unit()
    }
}

impl ColorScale {
    /// Create a hue-interpolated scale over `[lo, hi]`.
    pub fn new(lo: f64, hi: f64) -> Self {
        Self {
            lo,
            hi,
            strategy: ColorStrategy::default(),
        }
    }

    /// Hue scale over `[0, 1]`.
    pub fn unit() -> Self {
        Self::new(0.0, 1.0)
    }

    /// Scale used by the topology diagrams: `[0.85, 1.0]`.
    pub fn topology() -> Self {
        Self::new(0.85, 1.0)
    }

    /// Use the bucketed strategy instead.
    #[must_use]
    pub fn bucketed(mut self) -> Self {
        self.strategy = ColorStrategy::Buckets;
        self
    }

    /// Clamp `q` into the range and normalize it to `[0, 1]`.
    ///
    /// Returns `0.0` for a degenerate range or a NaN input.
    pub fn normalize(&self, q: f64) -> f64 {
        let span = self.hi - self.lo;
        if span <= 0.0 || !span.is_finite() {
            return 0.0;
        }
        let t = (q - self.lo) / span;
        if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) }
    }

    /// Bucket index in `0..4` for `q`.
    pub fn bucket(&self, q: f64) -> usize {
        let t = self.normalize(q);
        ((t * 4.0).floor() as usize).min(named::BUCKETS.len() - 1)
    }

    /// Map a quality value to its display color.
    pub fn color(&self, q: f64) -> Color {
        match self.strategy {
            ColorStrategy::Hue {
                max_hue,
                saturation,
                lightness,
            } => Color::hsl(self.normalize(q) * max_hue, saturation, lightness),
            ColorStrategy::Buckets => named::BUCKETS[self.bucket(q)],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_hue_boundaries() {
        let scale = ColorScale::topology();
        assert_eq!(scale.color(0.85), Color::hsl(0.0, 70.0, 50.0));
        assert_eq!(scale.color(1.0), Color::hsl(142.0, 70.0, 50.0));
    }

    #[test]
    fn test_out_of_range_saturates() {
        let scale = ColorScale::topology();
        assert_eq!(scale.color(0.2), scale.color(0.85));
        assert_eq!(scale.color(1.7), scale.color(1.0));
    }

    #[test]
    fn test_degenerate_range() {
        let scale = ColorScale::new(0.9, 0.9);
        assert_eq!(scale.normalize(0.95), 0.0);
        assert_eq!(scale.color(0.95), Color::hsl(0.0, 70.0, 50.0));
    }

    #[test]
    fn test_nan_maps_low() {
        let scale = ColorScale::unit();
        assert_eq!(scale.normalize(f64::NAN), 0.0);
    }

    #[test]
    fn test_buckets() {
        let scale = ColorScale::unit().bucketed();
        assert_eq!(scale.color(0.0), named::BUCKETS[0]);
        assert_eq!(scale.color(0.3), named::BUCKETS[1]);
        assert_eq!(scale.color(0.6), named::BUCKETS[2]);
        assert_eq!(scale.color(0.99), named::BUCKETS[3]);
        assert_eq!(scale.color(1.0), named::BUCKETS[3]);
    }

    #[test]
    fn test_css_rendering() {
        assert_eq!(named::ACCENT.css(), "hsl(220, 100%, 70%)");
        assert_eq!(Color::hsl(71.0, 70.0, 50.0).css(), "hsl(71, 70%, 50%)");
        assert_eq!(Color::hsl(28.4, 70.0, 50.0).css(), "hsl(28.4, 70%, 50%)");
        assert_eq!(Color::rgb(0x1a, 0x1a, 0x1a).css(), "#1a1a1a");
        assert_eq!(Color::rgba(255, 255, 255, 0.8).css(), "rgba(255,255,255,0.8)");
    }

    proptest! {
        #[test]
        fn prop_color_is_deterministic(q in -1.0f64..2.0) {
            let scale = ColorScale::topology();
            prop_assert_eq!(scale.color(q), scale.color(q));
        }

        #[test]
        fn prop_normalized_in_unit_interval(q in -10.0f64..10.0, lo in 0.0f64..1.0, span in 0.0f64..1.0) {
            let t = ColorScale::new(lo, lo + span).normalize(q);
            prop_assert!((0.0..=1.0).contains(&t));
        }

        #[test]
        fn prop_hue_is_monotonic(a in 0.85f64..1.0, b in 0.85f64..1.0) {
            let scale = ColorScale::topology();
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(scale.normalize(lo) <= scale.normalize(hi));
        }
    }
}
