//! SkyPanel Core Library
//!
//! This crate provides the structural core for SkyPanel, a free-form
//! panel toolkit for drone ground-station interfaces. It owns the
//! recursive pane partition tree, proportional split allocation,
//! content attachment, and the development-time debug overlay, with
//! no dependency on any particular rendering host.
//!
//! # Crate Structure
//!
//! - [`alignment`] - Content alignment, placement resolution, and margins
//! - [`color`] - RGB colors and the debug overlay palette
//! - [`freeform`] - The free-form pane partition tree and its operations

// Enable missing_docs warning for public API documentation
#![warn(missing_docs)]

pub mod alignment;
pub mod color;
pub mod freeform;

// ============================================================================
// Convenience re-exports
// ============================================================================

// Alignment and placement primitives
pub use alignment::{Alignment, ContentPlacement, HorizontalAlign, Margins, VerticalAlign};

// Colors and the debug palette
pub use color::{DEBUG_COLORS, DebugPalette, Rgb};

// Free-form pane tree types and operations
pub use freeform::{
    AttachError, ContentId, DebugLabel, DebugOverlay, MergeError, OverlayOptions, PaneContent,
    PaneId, PaneRecord, PaneSlot, PaneTree, ProportionError, SplitAxis, SplitError,
};
