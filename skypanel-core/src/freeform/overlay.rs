//! Debug overlay for visualizing the pane partition
//!
//! This module provides `DebugOverlay`, an optional visual aid that
//! marks every leaf pane with an ID label and a distinct background
//! color. The overlay sits strictly on top of the tree's public query
//! surface: it reads [`PaneTree::leaves`] and paints through
//! [`PaneTree::set_background_override`], keeping only its own label map
//! and the saved prior overrides as private bookkeeping.
//!
//! # Architecture
//!
//! The overlay maintains:
//! - A private map of `PaneId` to `DebugLabel` for the painted labels
//! - The background override each pane had before it was first painted,
//!   so `disable` can put things back exactly
//! - A [`DebugPalette`] supplying deterministic, injectable colors
//!
//! Enabling is idempotent: a leaf that already has a label keeps it, and
//! a pane's pre-overlay background is saved only the first time it is
//! painted. The overlay does not watch the tree for changes; after
//! splits or merges the host disables and re-enables it to resynchronize
//! with the new leaf set.

use std::collections::HashMap;

use crate::color::{DebugPalette, Rgb};

use super::model::PaneTree;
use super::types::PaneId;

/// What [`DebugOverlay::enable`] should paint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayOptions {
    /// Paint an ID label on every leaf.
    pub labels: bool,
    /// Paint a palette background on every leaf.
    pub backgrounds: bool,
    /// Foreground color for labels.
    pub label_color: Rgb,
    /// Background color for the label box itself.
    pub label_background: Rgb,
}

impl OverlayOptions {
    /// Creates the default options: labels and backgrounds both on,
    /// white label text on a black box.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            labels: true,
            backgrounds: true,
            label_color: Rgb::WHITE,
            label_background: Rgb::BLACK,
        }
    }

    /// Turns label painting on or off.
    #[must_use]
    pub const fn with_labels(mut self, labels: bool) -> Self {
        self.labels = labels;
        self
    }

    /// Turns background painting on or off.
    #[must_use]
    pub const fn with_backgrounds(mut self, backgrounds: bool) -> Self {
        self.backgrounds = backgrounds;
        self
    }

    /// Sets the label foreground and box colors.
    #[must_use]
    pub const fn with_label_colors(mut self, color: Rgb, background: Rgb) -> Self {
        self.label_color = color;
        self.label_background = background;
        self
    }
}

impl Default for OverlayOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// A debug label painted over one pane.
///
/// The host renders these however it likes; the text is the pane's ID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebugLabel {
    /// The pane this label belongs to.
    pub pane: PaneId,
    /// Label text, the pane ID rendered as a string.
    pub text: String,
    /// Label foreground color.
    pub color: Rgb,
    /// Label box color.
    pub background: Rgb,
}

/// Idempotent visual-aid layer over a [`PaneTree`].
///
/// # Example
///
/// ```
/// use skypanel_core::freeform::{DebugOverlay, OverlayOptions, PaneTree, SplitAxis};
///
/// let mut tree = PaneTree::new();
/// tree.split(tree.root(), SplitAxis::Horizontal, &[0.5, 0.5]).unwrap();
///
/// let mut overlay = DebugOverlay::new();
/// overlay.enable(&mut tree, &OverlayOptions::new());
/// assert_eq!(overlay.labels().count(), 2);
///
/// overlay.disable(&mut tree);
/// assert_eq!(overlay.labels().count(), 0);
/// ```
#[derive(Debug)]
pub struct DebugOverlay {
    /// Labels currently painted, keyed by pane.
    labels: HashMap<PaneId, DebugLabel>,
    /// Background override each pane had before its first paint.
    saved_backgrounds: HashMap<PaneId, Option<Rgb>>,
    /// Source of background colors.
    palette: DebugPalette,
    /// Whether the overlay is currently on.
    enabled: bool,
}

impl DebugOverlay {
    /// Creates a disabled overlay with the standard palette.
    #[must_use]
    pub fn new() -> Self {
        Self {
            labels: HashMap::new(),
            saved_backgrounds: HashMap::new(),
            palette: DebugPalette::new(),
            enabled: false,
        }
    }

    /// Creates a disabled overlay drawing from the given colors.
    ///
    /// Injecting a single-color palette makes every painted background
    /// identical, which keeps screenshots and tests deterministic.
    #[must_use]
    pub fn with_palette(colors: Vec<Rgb>) -> Self {
        Self {
            labels: HashMap::new(),
            saved_backgrounds: HashMap::new(),
            palette: DebugPalette::with_colors(colors),
            enabled: false,
        }
    }

    /// Returns true if the overlay is currently enabled.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Returns the currently painted labels, in no particular order.
    pub fn labels(&self) -> impl Iterator<Item = &DebugLabel> {
        self.labels.values()
    }

    /// Returns the label painted on a pane, if any.
    #[must_use]
    pub fn label_for(&self, pane: PaneId) -> Option<&DebugLabel> {
        self.labels.get(&pane)
    }

    /// Paints the overlay over every current leaf of the tree.
    ///
    /// Leaves that already carry a label keep it unchanged, and a pane's
    /// pre-overlay background is saved only on its first paint, so
    /// calling this repeatedly is safe. Leaves created after a call are
    /// not picked up automatically; disable and re-enable to
    /// resynchronize.
    pub fn enable(&mut self, tree: &mut PaneTree, options: &OverlayOptions) {
        let leaves = tree.leaves();
        let mut painted = 0usize;
        for pane in &leaves {
            if options.labels {
                self.labels.entry(*pane).or_insert_with(|| DebugLabel {
                    pane: *pane,
                    text: pane.to_string(),
                    color: options.label_color,
                    background: options.label_background,
                });
            }
            if options.backgrounds {
                if !self.saved_backgrounds.contains_key(pane) {
                    self.saved_backgrounds
                        .insert(*pane, tree.background_override(*pane));
                }
                let color = self.palette.next_color();
                if tree.set_background_override(*pane, color).is_ok() {
                    painted += 1;
                }
            }
        }
        self.enabled = true;
        tracing::debug!(
            leaves = leaves.len(),
            painted,
            labels = options.labels,
            "debug overlay enabled"
        );
    }

    /// Removes every label and restores the backgrounds the overlay
    /// replaced.
    ///
    /// A pane that had an explicit override before its first paint gets
    /// that override back; a pane that had none has its override cleared.
    /// Panes destroyed while the overlay was on are skipped.
    pub fn disable(&mut self, tree: &mut PaneTree) {
        let labels_removed = self.labels.len();
        self.labels.clear();

        let mut skipped_dead = 0usize;
        for (pane, prior) in self.saved_backgrounds.drain() {
            let outcome = match prior {
                Some(color) => tree.set_background_override(pane, color),
                None => tree.clear_background_override(pane),
            };
            if outcome.is_err() {
                skipped_dead += 1;
            }
        }
        self.enabled = false;
        tracing::debug!(labels_removed, skipped_dead, "debug overlay disabled");
    }
}

impl Default for DebugOverlay {
    fn default() -> Self {
        Self::new()
    }
}
