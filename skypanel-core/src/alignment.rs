//! Content alignment within a leaf pane
//!
//! A leaf pane anchors its content to zero, one, or two of its edges.
//! The nine [`Alignment`] variants cover the center, the four edges and
//! the four corners. Resolving an alignment together with [`Margins`]
//! yields a [`ContentPlacement`], a renderer-agnostic description of how
//! the content should be anchored and whether it stretches along each
//! axis. The mapping is pure and stateless; the host renderer turns it
//! into pixel geometry.

use std::fmt;

/// Where content is anchored inside a leaf pane.
///
/// Edge variants (`Top`, `Bottom`, `Left`, `Right`) pin the content to a
/// single edge and stretch it along the other axis. Corner variants pin
/// two edges and let the content take its natural size. `Center` floats
/// the content in the middle of the pane at natural size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Alignment {
    /// Centered on both axes at natural size.
    #[default]
    Center,
    /// Pinned to the top edge, stretched across the width.
    Top,
    /// Pinned to the bottom edge, stretched across the width.
    Bottom,
    /// Pinned to the left edge, stretched across the height.
    Left,
    /// Pinned to the right edge, stretched across the height.
    Right,
    /// Pinned to the top-left corner at natural size.
    LeftTop,
    /// Pinned to the bottom-left corner at natural size.
    LeftBottom,
    /// Pinned to the top-right corner at natural size.
    RightTop,
    /// Pinned to the bottom-right corner at natural size.
    RightBottom,
}

impl Alignment {
    /// All nine variants, in declaration order.
    pub const ALL: [Self; 9] = [
        Self::Center,
        Self::Top,
        Self::Bottom,
        Self::Left,
        Self::Right,
        Self::LeftTop,
        Self::LeftBottom,
        Self::RightTop,
        Self::RightBottom,
    ];

    /// Returns the horizontal component of this alignment.
    #[must_use]
    pub const fn horizontal(self) -> HorizontalAlign {
        match self {
            Self::Center => HorizontalAlign::Center,
            Self::Top | Self::Bottom => HorizontalAlign::Stretch,
            Self::Left | Self::LeftTop | Self::LeftBottom => HorizontalAlign::Left,
            Self::Right | Self::RightTop | Self::RightBottom => HorizontalAlign::Right,
        }
    }

    /// Returns the vertical component of this alignment.
    #[must_use]
    pub const fn vertical(self) -> VerticalAlign {
        match self {
            Self::Center => VerticalAlign::Middle,
            Self::Left | Self::Right => VerticalAlign::Stretch,
            Self::Top | Self::LeftTop | Self::RightTop => VerticalAlign::Top,
            Self::Bottom | Self::LeftBottom | Self::RightBottom => VerticalAlign::Bottom,
        }
    }

    /// Resolves this alignment and the given margins into a placement
    /// description for the renderer.
    #[must_use]
    pub const fn resolve(self, margins: Margins) -> ContentPlacement {
        ContentPlacement {
            horizontal: self.horizontal(),
            vertical: self.vertical(),
            margins,
        }
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Center => "Center",
            Self::Top => "Top",
            Self::Bottom => "Bottom",
            Self::Left => "Left",
            Self::Right => "Right",
            Self::LeftTop => "LeftTop",
            Self::LeftBottom => "LeftBottom",
            Self::RightTop => "RightTop",
            Self::RightBottom => "RightBottom",
        };
        write!(f, "{name}")
    }
}

/// Horizontal anchoring of content within a pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HorizontalAlign {
    /// Anchored to the left edge at natural width.
    Left,
    /// Centered at natural width.
    Center,
    /// Anchored to the right edge at natural width.
    Right,
    /// Stretched to fill the pane's width.
    Stretch,
}

/// Vertical anchoring of content within a pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerticalAlign {
    /// Anchored to the top edge at natural height.
    Top,
    /// Centered at natural height.
    Middle,
    /// Anchored to the bottom edge at natural height.
    Bottom,
    /// Stretched to fill the pane's height.
    Stretch,
}

/// Margins between pane edges and content, in host units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Margins {
    /// Gap from the leading (left) edge.
    pub start: i32,
    /// Gap from the top edge.
    pub top: i32,
    /// Gap from the trailing (right) edge.
    pub end: i32,
    /// Gap from the bottom edge.
    pub bottom: i32,
}

impl Margins {
    /// Creates margins with the given gaps.
    #[must_use]
    pub const fn new(start: i32, top: i32, end: i32, bottom: i32) -> Self {
        Self {
            start,
            top,
            end,
            bottom,
        }
    }

    /// Creates margins with the same gap on all four edges.
    #[must_use]
    pub const fn uniform(gap: i32) -> Self {
        Self::new(gap, gap, gap, gap)
    }

    /// Creates margins with one horizontal and one vertical gap.
    #[must_use]
    pub const fn symmetric(horizontal: i32, vertical: i32) -> Self {
        Self::new(horizontal, vertical, horizontal, vertical)
    }
}

/// Renderer-facing description of how leaf content is placed.
///
/// Produced by [`Alignment::resolve`]; the host realizes the actual
/// pixel geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContentPlacement {
    /// Horizontal anchoring.
    pub horizontal: HorizontalAlign,
    /// Vertical anchoring.
    pub vertical: VerticalAlign,
    /// Margins carried through from the attachment.
    pub margins: Margins,
}

impl ContentPlacement {
    /// Returns true if the content stretches across the pane's width.
    #[must_use]
    pub const fn fills_width(&self) -> bool {
        matches!(self.horizontal, HorizontalAlign::Stretch)
    }

    /// Returns true if the content stretches across the pane's height.
    #[must_use]
    pub const fn fills_height(&self) -> bool {
        matches!(self.vertical, VerticalAlign::Stretch)
    }
}
