//! Colour themes selectable with the `theme` command.
//!
//! Each theme carries a small palette of base colours. Front ends decide how
//! to map them (ANSI escapes, CSS, textures); the interpreter only switches
//! the active variant.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// An RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Base colours a renderer needs to paint one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Page background.
    pub background: Color,
    /// Body text and command output.
    pub text: Color,
    /// The `user@host:~$` prompt.
    pub prompt: Color,
    /// Block headings.
    pub heading: Color,
    /// Links, project names.
    pub accent: Color,
    /// Unknown-command errors.
    pub error: Color,
    /// Hints and transient entries.
    pub muted: Color,
}

/// The four selectable themes, in the order `theme` lists them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
    Solarized,
    Dracula,
}

impl Theme {
    /// All themes in listing order.
    pub const ALL: [Theme; 4] = [Theme::Dark, Theme::Light, Theme::Solarized, Theme::Dracula];

    /// Lowercase name as typed at the prompt.
    pub fn name(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
            Theme::Solarized => "solarized",
            Theme::Dracula => "dracula",
        }
    }

    /// Comma-separated list of every theme name.
    pub fn listing() -> String {
        Self::ALL
            .iter()
            .map(|t| t.name())
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn palette(self) -> Palette {
        match self {
            Theme::Dark => Palette {
                background: Color::rgb(17, 24, 39),
                text: Color::rgb(34, 197, 94),
                prompt: Color::rgb(234, 179, 8),
                heading: Color::rgb(250, 204, 21),
                accent: Color::rgb(96, 165, 250),
                error: Color::rgb(248, 113, 113),
                muted: Color::rgb(156, 163, 175),
            },
            Theme::Light => Palette {
                background: Color::rgb(243, 244, 246),
                text: Color::rgb(21, 128, 61),
                prompt: Color::rgb(161, 98, 7),
                heading: Color::rgb(180, 83, 9),
                accent: Color::rgb(29, 78, 216),
                error: Color::rgb(185, 28, 28),
                muted: Color::rgb(75, 85, 99),
            },
            Theme::Solarized => Palette {
                background: Color::rgb(254, 249, 195),
                text: Color::rgb(133, 153, 0),
                prompt: Color::rgb(181, 137, 0),
                heading: Color::rgb(203, 75, 22),
                accent: Color::rgb(38, 139, 210),
                error: Color::rgb(220, 50, 47),
                muted: Color::rgb(88, 110, 117),
            },
            Theme::Dracula => Palette {
                background: Color::rgb(88, 28, 135),
                text: Color::rgb(80, 250, 123),
                prompt: Color::rgb(241, 250, 140),
                heading: Color::rgb(255, 184, 108),
                accent: Color::rgb(139, 233, 253),
                error: Color::rgb(255, 85, 85),
                muted: Color::rgb(98, 114, 164),
            },
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Theme {
    type Err = ();

    /// Exact, case-sensitive match on the theme name.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|t| t.name() == s).ok_or(())
    }
}
