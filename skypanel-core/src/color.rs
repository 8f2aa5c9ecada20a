//! Colors for pane backgrounds and the debug overlay
//!
//! This module provides the RGB value type used for background overrides
//! and a small deterministic palette the debug overlay draws from. The
//! palette is an explicit, injectable source rather than ambient
//! randomness, so overlay colors are reproducible in tests and across
//! enable cycles.

use std::fmt;

/// An RGB color in 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Creates a color from its three channels.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// White, the default debug label foreground.
    pub const WHITE: Self = Self::new(0xff, 0xff, 0xff);

    /// Black, the default debug label background.
    pub const BLACK: Self = Self::new(0x00, 0x00, 0x00);
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Standard palette for debug overlay backgrounds.
///
/// Chosen to stay distinguishable from one another against both light
/// and dark themes.
///
/// The palette includes:
/// - Blue (0x3584e4)
/// - Green (0x2ec27e)
/// - Orange (0xff7800)
/// - Purple (0x9141ac)
/// - Cyan (0x00b4d8)
/// - Red (0xe01b24)
pub const DEBUG_COLORS: &[Rgb] = &[
    Rgb::new(0x35, 0x84, 0xe4), // Blue
    Rgb::new(0x2e, 0xc2, 0x7e), // Green
    Rgb::new(0xff, 0x78, 0x00), // Orange
    Rgb::new(0x91, 0x41, 0xac), // Purple
    Rgb::new(0x00, 0xb4, 0xd8), // Cyan
    Rgb::new(0xe0, 0x1b, 0x24), // Red
];

/// A cycling source of debug colors.
///
/// Hands out colors from a fixed palette in order, wrapping around when
/// the palette is exhausted. Callers that need other colors, or a single
/// repeated color for screenshots, inject their own palette with
/// [`DebugPalette::with_colors`].
///
/// # Example
///
/// ```
/// use skypanel_core::color::{DebugPalette, DEBUG_COLORS};
///
/// let mut palette = DebugPalette::new();
/// assert_eq!(palette.next_color(), DEBUG_COLORS[0]);
/// assert_eq!(palette.next_color(), DEBUG_COLORS[1]);
/// ```
#[derive(Debug, Clone)]
pub struct DebugPalette {
    colors: Vec<Rgb>,
    cursor: usize,
}

impl DebugPalette {
    /// Creates a palette cycling over [`DEBUG_COLORS`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            colors: DEBUG_COLORS.to_vec(),
            cursor: 0,
        }
    }

    /// Creates a palette cycling over the given colors.
    ///
    /// An empty list falls back to [`DEBUG_COLORS`] so the source can
    /// always produce a color.
    #[must_use]
    pub fn with_colors(colors: Vec<Rgb>) -> Self {
        if colors.is_empty() {
            Self::new()
        } else {
            Self { colors, cursor: 0 }
        }
    }

    /// Returns the next color, wrapping around at the end of the palette.
    pub fn next_color(&mut self) -> Rgb {
        let color = self.colors[self.cursor];
        self.cursor = (self.cursor + 1) % self.colors.len();
        color
    }

    /// Rewinds the cycle to the start of the palette.
    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    /// Returns the number of colors in the palette.
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false; an empty palette falls back to the default colors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl Default for DebugPalette {
    fn default() -> Self {
        Self::new()
    }
}
