//! Light/dark theming.
//!
//! A [`Theme`] is resolved once per render into a concrete [`Palette`] that is
//! passed by value into every drawing routine.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Site color theme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light text on black.
    #[default]
    Dark,
    /// Dark text on white.
    Light,
}

impl Theme {
    /// The other theme.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Resolve the concrete palette for this theme.
    pub fn palette(self) -> Palette {
        match self {
            Theme::Dark => Palette {
                theme: self,
                background: Color::rgb(0, 0, 0),
                foreground: Color::rgb(0xff, 0xff, 0xff),
                stroke: Color::rgba(255, 255, 255, 0.8),
                stroke_dim: Color::rgba(255, 255, 255, 0.4),
                stroke_muted: Color::rgba(255, 255, 255, 0.5),
                surface: Color::rgba(255, 255, 255, 0.05),
                node_idle: Color::rgb(0x55, 0x55, 0x55),
                step_idle: Color::rgb(0x1a, 0x1a, 0x1a),
                step_reached: Color::rgba(255, 255, 255, 0.6),
                text_primary: Color::rgb(0xe5, 0xe5, 0xe5),
                text_secondary: Color::rgb(0xa3, 0xa3, 0xa3),
                text_muted: Color::rgb(0x73, 0x73, 0x73),
                bg_subtle: Color::rgb(0x0d, 0x0d, 0x0d),
                bg_muted: Color::rgb(0x1a, 0x1a, 0x1a),
                border: Color::rgb(0x26, 0x26, 0x26),
                grid_line: Color::rgb(0x33, 0x33, 0x33),
                error_bar: Color::rgb(0xff, 0xff, 0xff),
            },
            Theme::Light => Palette {
                theme: self,
                background: Color::rgb(0xff, 0xff, 0xff),
                foreground: Color::rgb(0, 0, 0),
                stroke: Color::rgba(0, 0, 0, 0.8),
                stroke_dim: Color::rgba(0, 0, 0, 0.4),
                stroke_muted: Color::rgba(0, 0, 0, 0.5),
                surface: Color::rgba(0, 0, 0, 0.05),
                node_idle: Color::rgb(0xaa, 0xaa, 0xaa),
                step_idle: Color::rgb(0xf0, 0xf0, 0xf0),
                step_reached: Color::rgba(0, 0, 0, 0.6),
                text_primary: Color::rgb(0x17, 0x17, 0x17),
                text_secondary: Color::rgb(0x52, 0x52, 0x52),
                text_muted: Color::rgb(0x73, 0x73, 0x73),
                bg_subtle: Color::rgb(0xf5, 0xf5, 0xf5),
                bg_muted: Color::rgb(0xe8, 0xe8, 0xe8),
                border: Color::rgb(0xe5, 0xe5, 0xe5),
                grid_line: Color::rgb(0xe0, 0xe0, 0xe0),
                error_bar: Color::rgb(0x1a, 0x1a, 0x1a),
            },
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Dark => f.write_str("dark"),
            Theme::Light => f.write_str("light"),
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            other => Err(format!("Unknown theme '{other}'. Supported themes: dark, light")),
        }
    }
}

/// Concrete colors for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Palette {
    /// Theme this palette was resolved from.
    pub theme: Theme,
    /// Page background.
    pub background: Color,
    /// Page foreground text.
    pub foreground: Color,
    /// Primary diagram stroke.
    pub stroke: Color,
    /// Secondary diagram stroke.
    pub stroke_dim: Color,
    /// Stroke for unselected topology edges.
    pub stroke_muted: Color,
    /// Card background behind diagrams.
    pub surface: Color,
    /// Fill for inactive nodes.
    pub node_idle: Color,
    /// Fill for inactive animation steps.
    pub step_idle: Color,
    /// Border of animation steps already passed.
    pub step_reached: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub bg_subtle: Color,
    pub bg_muted: Color,
    pub border: Color,
    pub grid_line: Color,
    /// Stroke for chart error bars.
    pub error_bar: Color,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_theme() {
        assert_eq!("dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert_eq!("LIGHT".parse::<Theme>().unwrap(), Theme::Light);
        assert!("sepia".parse::<Theme>().is_err());
    }

    #[test]
    fn test_toggle_round_trips() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }

    #[test]
    fn test_palettes_differ() {
        let dark = Theme::Dark.palette();
        let light = Theme::Light.palette();
        assert_eq!(dark.theme, Theme::Dark);
        assert_ne!(dark.background, light.background);
        assert_eq!(dark.stroke.css(), "rgba(255,255,255,0.8)");
        assert_eq!(light.grid_line.css(), "#e0e0e0");
    }
}
