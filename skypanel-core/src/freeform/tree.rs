//! Pane records stored in the partition tree arena
//!
//! This module provides the record type behind every pane in the tree.
//! Rather than owning child nodes directly, each record stores its
//! relationships as IDs into a single arena map, which keeps an
//! arbitrarily nested structure free of ownership cycles.
//!
//! # Record Structure
//!
//! ```text
//! Pane(1) [split Horizontal]
//! ├── Pane(2) weight 0.4, content
//! └── Pane(3) weight 0.6, empty
//! ```
//!
//! A record is a leaf while `children` is empty; splitting fills in
//! `children` and the split axis, merging clears them again.

use crate::alignment::{Alignment, ContentPlacement, Margins};
use crate::color::Rgb;

use super::types::{ContentId, PaneId, SplitAxis};

/// Content attached to a leaf pane.
///
/// Pairs the host's opaque handle with the placement the host asked for.
/// Disposal of whatever the handle refers to stays with the host; the
/// tree only tracks which leaf holds which handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaneContent {
    /// Host-owned handle for what the pane displays.
    pub content: ContentId,
    /// How the content is anchored within the pane.
    pub alignment: Alignment,
    /// Margins between the pane's edges and the content.
    pub margins: Margins,
}

impl PaneContent {
    /// Creates a content attachment.
    #[must_use]
    pub const fn new(content: ContentId, alignment: Alignment, margins: Margins) -> Self {
        Self {
            content,
            alignment,
            margins,
        }
    }

    /// Resolves the attachment into a renderer-facing placement.
    #[must_use]
    pub const fn placement(&self) -> ContentPlacement {
        self.alignment.resolve(self.margins)
    }
}

/// One pane's record in the arena.
///
/// All relationships (`parent`, `children`, `siblings`) are IDs of other
/// live records in the same tree. `weight` is the fractional share of the
/// parent's space assigned when the pane was created by a split; the root
/// owns the whole region and has weight 1.0.
#[derive(Debug, Clone, PartialEq)]
pub struct PaneRecord {
    /// This pane's ID.
    pub id: PaneId,
    /// Owning pane, or `None` for the root.
    pub parent: Option<PaneId>,
    /// Ordered children; empty unless split.
    pub children: Vec<PaneId>,
    /// Panes created together with this one in the same split call,
    /// excluding this pane itself.
    pub siblings: Vec<PaneId>,
    /// Axis of this pane's split; `Some` iff split.
    pub split_axis: Option<SplitAxis>,
    /// Fractional share of the parent's space.
    pub weight: f64,
    /// Attached content; only a leaf can hold one.
    pub content: Option<PaneContent>,
    /// Explicit background color, independent of structure.
    pub background: Option<Rgb>,
    /// Whether the host should render this pane.
    pub visible: bool,
}

impl PaneRecord {
    /// Creates the root record: a visible empty leaf owning all space.
    #[must_use]
    pub const fn root(id: PaneId) -> Self {
        Self {
            id,
            parent: None,
            children: Vec::new(),
            siblings: Vec::new(),
            split_axis: None,
            weight: 1.0,
            content: None,
            background: None,
            visible: true,
        }
    }

    /// Creates a leaf record spawned by splitting `parent`.
    #[must_use]
    pub const fn child(id: PaneId, parent: PaneId, weight: f64) -> Self {
        Self {
            id,
            parent: Some(parent),
            children: Vec::new(),
            siblings: Vec::new(),
            split_axis: None,
            weight,
            content: None,
            background: None,
            visible: true,
        }
    }

    /// Returns true if this pane is split into children.
    #[must_use]
    pub fn is_split(&self) -> bool {
        !self.children.is_empty()
    }

    /// Returns true if this pane is a leaf.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns true if this pane holds no content.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.content.is_none()
    }

    /// Returns true if this pane holds content.
    #[must_use]
    pub const fn is_occupied(&self) -> bool {
        self.content.is_some()
    }

    /// Returns true if this pane is the root.
    #[must_use]
    pub const fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}
