//! Light and dark themes for the screen.
//!
//! Theme is explicit context handed to the render function, not ambient
//! global state: the shell decides which theme applies and passes it down
//! with every render.

use serde::{Deserialize, Serialize};

/// An sRGB colour
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// The two supported appearances
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    /// Light appearance
    #[default]
    Light,
    /// Dark appearance
    Dark,
}

impl Theme {
    /// The colour palette for this theme
    #[must_use]
    pub const fn palette(self) -> Palette {
        match self {
            Theme::Light => Palette::LIGHT,
            Theme::Dark => Palette::DARK,
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
        }
    }
}

/// Colour palette for one theme
///
/// Field names follow the roles on the screen rather than the widgets, so
/// the renderer stays free to lay the screen out however it likes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    /// Screen background
    pub background: Rgb,
    /// Task row background
    pub surface: Rgb,
    /// Primary text
    pub text: Rgb,
    /// Placeholder and struck-through text
    pub muted: Rgb,
    /// Add affordance
    pub accent: Rgb,
    /// Delete and clear affordances
    pub danger: Rgb,
    /// Input border
    pub border: Rgb,
}

impl Palette {
    /// Light palette
    pub const LIGHT: Palette = Palette {
        background: Rgb(0xf5, 0xf5, 0xf5),
        surface: Rgb(0xff, 0xff, 0xff),
        text: Rgb(0x00, 0x00, 0x00),
        muted: Rgb(0x66, 0x66, 0x66),
        accent: Rgb(0x00, 0x7b, 0xff),
        danger: Rgb(0xff, 0x44, 0x44),
        border: Rgb(0xcc, 0xcc, 0xcc),
    };

    /// Dark palette
    pub const DARK: Palette = Palette {
        background: Rgb(0x12, 0x12, 0x12),
        surface: Rgb(0x1e, 0x1e, 0x1e),
        text: Rgb(0xff, 0xff, 0xff),
        muted: Rgb(0xaa, 0xaa, 0xaa),
        accent: Rgb(0x00, 0x7b, 0xff),
        danger: Rgb(0xff, 0x44, 0x44),
        border: Rgb(0x33, 0x33, 0x33),
    };
}
