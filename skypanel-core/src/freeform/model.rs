//! Pane tree model for free-form region partitioning
//!
//! This module provides the `PaneTree` struct, the owner of every pane
//! record and the sole authority for creating and destroying pane IDs.
//! A tree starts as a single root leaf; splits subdivide a leaf into two
//! or more children along an axis, merges collapse a subtree back into
//! its root. All preconditions are checked before any mutation, so a
//! failed call never leaves a partial change behind.
//!
//! # Example
//!
//! ```
//! use skypanel_core::freeform::{PaneTree, SplitAxis};
//!
//! let mut tree = PaneTree::new();
//! let root = tree.root();
//!
//! // Subdivide the root into a 40/60 pair
//! let children = tree.split(root, SplitAxis::Horizontal, &[0.4, 0.6]).unwrap();
//! assert_eq!(children.len(), 2);
//! assert!(tree.is_split(root));
//!
//! // Collapse the subdivision again
//! tree.merge_children(root).unwrap();
//! assert_eq!(tree.leaves(), vec![root]);
//! ```

use std::collections::BTreeMap;

use crate::alignment::{Alignment, ContentPlacement, Margins};
use crate::color::Rgb;

use super::error::{AttachError, MergeError, PaneNotFound, SplitError};
use super::proportions::{self, AnchorSpec};
use super::tree::{PaneContent, PaneRecord};
use super::types::{ContentId, PaneId, PaneIdAllocator, SplitAxis};

/// One child slot of a split, resolved against the tree.
///
/// Produced by [`PaneTree::anchor_chain`]; pairs the occupying pane with
/// the weight and anchors the host renderer needs to realize geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaneSlot {
    /// The pane occupying this slot.
    pub pane: PaneId,
    /// Fractional share of the parent's space.
    pub weight: f64,
    /// Edge anchoring for this slot.
    pub anchors: AnchorSpec,
}

/// Owns the pane partition tree for one screen region.
///
/// Panes live in a single arena map keyed by ID; parent, child and
/// sibling relationships are stored as IDs rather than references. The
/// root pane exists for the whole lifetime of the tree and is never
/// removed. IDs are handed out monotonically and never reused, so a
/// destroyed pane's ID stays dead.
///
/// The tree is synchronous and single-owner: every operation runs to
/// completion on the calling thread, and callers needing concurrent
/// access must serialize externally.
#[derive(Debug, Clone, PartialEq)]
pub struct PaneTree {
    /// All live pane records, keyed by ID.
    panes: BTreeMap<PaneId, PaneRecord>,
    /// The root pane's ID.
    root: PaneId,
    /// Source of fresh pane IDs.
    ids: PaneIdAllocator,
}

impl PaneTree {
    /// Creates a tree with a single empty root leaf.
    #[must_use]
    pub fn new() -> Self {
        let mut ids = PaneIdAllocator::new();
        let root = ids.next_id();
        let mut panes = BTreeMap::new();
        panes.insert(root, PaneRecord::root(root));
        Self { panes, root, ids }
    }

    /// Returns the root pane's ID.
    #[must_use]
    pub const fn root(&self) -> PaneId {
        self.root
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Returns true if a live pane has the given ID.
    #[must_use]
    pub fn contains(&self, pane: PaneId) -> bool {
        self.panes.contains_key(&pane)
    }

    /// Returns the record for a pane, if it exists.
    #[must_use]
    pub fn pane(&self, pane: PaneId) -> Option<&PaneRecord> {
        self.panes.get(&pane)
    }

    /// Returns true if the pane exists and is split into children.
    #[must_use]
    pub fn is_split(&self, pane: PaneId) -> bool {
        self.panes.get(&pane).is_some_and(PaneRecord::is_split)
    }

    /// Returns a pane's parent, or `None` for the root and unknown IDs.
    #[must_use]
    pub fn parent_of(&self, pane: PaneId) -> Option<PaneId> {
        self.panes.get(&pane).and_then(|record| record.parent)
    }

    /// Returns a pane's children in order.
    ///
    /// `None` means the ID is unknown; a leaf returns an empty slice.
    #[must_use]
    pub fn children_of(&self, pane: PaneId) -> Option<&[PaneId]> {
        self.panes.get(&pane).map(|record| record.children.as_slice())
    }

    /// Returns the panes created together with this one in the same
    /// split call, excluding the pane itself.
    ///
    /// `None` means the ID is unknown; the root and merged-away history
    /// leave the list empty.
    #[must_use]
    pub fn siblings_of(&self, pane: PaneId) -> Option<&[PaneId]> {
        self.panes.get(&pane).map(|record| record.siblings.as_slice())
    }

    /// Returns every leaf pane, in ascending ID order.
    #[must_use]
    pub fn leaves(&self) -> Vec<PaneId> {
        self.panes
            .values()
            .filter(|record| record.is_leaf())
            .map(|record| record.id)
            .collect()
    }

    /// Returns the content handle a pane holds, if any.
    #[must_use]
    pub fn content_of(&self, pane: PaneId) -> Option<ContentId> {
        self.panes
            .get(&pane)
            .and_then(|record| record.content)
            .map(|content| content.content)
    }

    /// Returns the resolved placement of a pane's content, if any.
    ///
    /// This is the renderer-facing half of the content contract: what to
    /// render comes from [`content_of`](Self::content_of), how to anchor
    /// it comes from here.
    #[must_use]
    pub fn placement_of(&self, pane: PaneId) -> Option<ContentPlacement> {
        self.panes
            .get(&pane)
            .and_then(|record| record.content)
            .map(|content| content.placement())
    }

    /// Finds the pane currently holding the given content handle.
    #[must_use]
    pub fn find_pane_for_content(&self, content: ContentId) -> Option<PaneId> {
        self.panes
            .values()
            .find(|record| {
                record
                    .content
                    .is_some_and(|attached| attached.content == content)
            })
            .map(|record| record.id)
    }

    /// Returns the axis a pane was split along, or `None` for leaves and
    /// unknown IDs.
    #[must_use]
    pub fn split_axis_of(&self, pane: PaneId) -> Option<SplitAxis> {
        self.panes.get(&pane).and_then(|record| record.split_axis)
    }

    /// Returns the fractional share of the parent's space assigned to a
    /// pane when it was created.
    #[must_use]
    pub fn weight_of(&self, pane: PaneId) -> Option<f64> {
        self.panes.get(&pane).map(|record| record.weight)
    }

    /// Resolves a split pane's children into renderable slots.
    ///
    /// Each slot carries the child's ID, its weight and the anchors tying
    /// it to its neighbors and the parent's edges. Returns `None` for
    /// leaves and unknown IDs.
    #[must_use]
    pub fn anchor_chain(&self, pane: PaneId) -> Option<Vec<PaneSlot>> {
        let record = self.panes.get(&pane)?;
        let axis = record.split_axis?;
        let count = record.children.len();
        let slots = record
            .children
            .iter()
            .enumerate()
            .map(|(index, child)| PaneSlot {
                pane: *child,
                weight: self.panes.get(child).map_or(0.0, |r| r.weight),
                anchors: AnchorSpec::for_position(axis, index, count),
            })
            .collect();
        Some(slots)
    }

    /// Returns the total number of live panes, internal nodes included.
    #[must_use]
    pub fn pane_count(&self) -> usize {
        self.panes.len()
    }

    /// Returns the deepest split nesting in the tree.
    ///
    /// A tree with only the root leaf has depth 0; each level of splits
    /// adds 1.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.depth_below(self.root)
    }

    fn depth_below(&self, pane: PaneId) -> usize {
        self.panes.get(&pane).map_or(0, |record| {
            record
                .children
                .iter()
                .map(|child| 1 + self.depth_below(*child))
                .max()
                .unwrap_or(0)
        })
    }

    /// Returns a pane's explicit background color, if one is set.
    #[must_use]
    pub fn background_override(&self, pane: PaneId) -> Option<Rgb> {
        self.panes.get(&pane).and_then(|record| record.background)
    }

    /// Returns true if the pane exists and is visible.
    #[must_use]
    pub fn is_visible(&self, pane: PaneId) -> bool {
        self.panes.get(&pane).is_some_and(|record| record.visible)
    }

    // ========================================================================
    // Structural Mutations
    // ========================================================================

    /// Splits a leaf pane into one child per proportion along an axis.
    ///
    /// Any content on the pane is detached and discarded first; hosts
    /// that need it preserved must detach it themselves before splitting.
    /// Child `i` receives weight `proportions[i]`, except the last child,
    /// which also absorbs any unallocated remainder so the weights sum to
    /// exactly 1.0. The new panes are returned in slot order.
    ///
    /// All preconditions are checked before any mutation; a failed call
    /// leaves the tree exactly as it was.
    ///
    /// # Errors
    ///
    /// Returns [`SplitError::NotFound`] for an unknown pane,
    /// [`SplitError::AlreadySplit`] if the pane has children, and
    /// [`SplitError::InvalidProportions`] for fewer than two proportions
    /// or proportions summing past 1.0.
    pub fn split(
        &mut self,
        pane: PaneId,
        axis: SplitAxis,
        proportions: &[f64],
    ) -> Result<Vec<PaneId>, SplitError> {
        let record = self.record(pane)?;
        if record.is_split() {
            return Err(SplitError::AlreadySplit(pane));
        }
        proportions::validate(proportions)?;

        let weights = proportions::folded_weights(proportions);
        let ids: Vec<PaneId> = weights.iter().map(|_| self.ids.next_id()).collect();

        let mut discarded = None;
        if let Some(parent) = self.panes.get_mut(&pane) {
            discarded = parent.content.take();
            parent.children = ids.clone();
            parent.split_axis = Some(axis);
        }
        for (id, weight) in ids.iter().zip(&weights) {
            let mut child = PaneRecord::child(*id, pane, *weight);
            child.siblings = ids.iter().copied().filter(|s| s != id).collect();
            self.panes.insert(*id, child);
        }

        if let Some(prior) = discarded {
            tracing::debug!(
                pane = %pane,
                content = %prior.content,
                "split discarded attached content"
            );
        }
        tracing::debug!(
            pane = %pane,
            axis = %axis,
            children = ids.len(),
            "split pane"
        );
        Ok(ids)
    }

    /// Splits a leaf pane into `count` equally weighted children.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`split`](Self::split); a `count` below
    /// two is rejected as [`SplitError::InvalidProportions`].
    pub fn split_evenly(
        &mut self,
        pane: PaneId,
        axis: SplitAxis,
        count: usize,
    ) -> Result<Vec<PaneId>, SplitError> {
        let share = 1.0 / count as f64;
        let proportions = vec![share; count];
        self.split(pane, axis, &proportions)
    }

    /// Collapses a pane's whole subtree, making it a leaf again.
    ///
    /// Succeeds as a no-op on a leaf. Otherwise every descendant is
    /// destroyed depth-first: its own children first, then its content is
    /// detached and discarded, then its record is removed. The pane ends
    /// empty and immediately eligible for another split or for content.
    ///
    /// # Errors
    ///
    /// Returns [`MergeError::NotFound`] for an unknown pane.
    pub fn merge_children(&mut self, pane: PaneId) -> Result<(), MergeError> {
        let record = self.record(pane)?;
        if record.is_leaf() {
            return Ok(());
        }

        // Collect the doomed subtree post-order before touching the map
        let mut doomed = Vec::new();
        self.collect_descendants(pane, &mut doomed);

        let mut dropped_content = 0usize;
        for id in &doomed {
            if let Some(child) = self.panes.get_mut(id)
                && child.content.take().is_some()
            {
                dropped_content += 1;
            }
        }
        for id in &doomed {
            self.panes.remove(id);
        }
        if let Some(parent) = self.panes.get_mut(&pane) {
            parent.children.clear();
            parent.split_axis = None;
        }

        tracing::debug!(
            pane = %pane,
            removed = doomed.len(),
            dropped_content,
            "merged children"
        );
        Ok(())
    }

    /// Collapses the split this pane belongs to, by merging its parent.
    ///
    /// The pane itself is destroyed along with all its siblings; the
    /// parent becomes a leaf again.
    ///
    /// # Errors
    ///
    /// Returns [`MergeError::NotFound`] for an unknown pane and
    /// [`MergeError::NoParent`] for the root.
    pub fn merge_siblings(&mut self, pane: PaneId) -> Result<(), MergeError> {
        let record = self.record(pane)?;
        let parent = record.parent.ok_or(MergeError::NoParent(pane))?;
        self.merge_children(parent)
    }

    fn collect_descendants(&self, pane: PaneId, out: &mut Vec<PaneId>) {
        if let Some(record) = self.panes.get(&pane) {
            for child in &record.children {
                self.collect_descendants(*child, out);
                out.push(*child);
            }
        }
    }

    // ========================================================================
    // Content
    // ========================================================================

    /// Attaches content to a leaf pane.
    ///
    /// A pane holds at most one content item; attaching to an occupied
    /// pane replaces the prior handle without error. The tree only drops
    /// the handle from its bookkeeping; disposing of whatever it refers
    /// to is the host's job.
    ///
    /// # Errors
    ///
    /// Returns [`AttachError::NotFound`] for an unknown pane and
    /// [`AttachError::PaneIsSplit`] if the pane has children.
    pub fn attach_content(
        &mut self,
        pane: PaneId,
        content: ContentId,
        alignment: Alignment,
        margins: Margins,
    ) -> Result<(), AttachError> {
        let record = self
            .panes
            .get_mut(&pane)
            .ok_or(AttachError::NotFound(pane))?;
        if record.is_split() {
            return Err(AttachError::PaneIsSplit(pane));
        }
        let replaced = record
            .content
            .replace(PaneContent::new(content, alignment, margins));
        if let Some(prior) = replaced {
            tracing::debug!(
                pane = %pane,
                prior = %prior.content,
                new = %content,
                "replaced pane content"
            );
        }
        Ok(())
    }

    /// Removes and returns a pane's content handle.
    ///
    /// Returns `None` if the pane holds nothing or the ID is unknown.
    pub fn detach_content(&mut self, pane: PaneId) -> Option<ContentId> {
        let record = self.panes.get_mut(&pane)?;
        let detached = record.content.take()?;
        tracing::debug!(pane = %pane, content = %detached.content, "detached content");
        Some(detached.content)
    }

    // ========================================================================
    // Attributes
    // ========================================================================

    /// Sets an explicit background color on a pane.
    ///
    /// Purely presentational; has no structural effect and survives
    /// splits and merges of other panes.
    ///
    /// # Errors
    ///
    /// Returns [`PaneNotFound`] if no live pane has the ID.
    pub fn set_background_override(
        &mut self,
        pane: PaneId,
        color: Rgb,
    ) -> Result<(), PaneNotFound> {
        let record = self.record_mut(pane)?;
        record.background = Some(color);
        Ok(())
    }

    /// Clears a pane's explicit background color.
    ///
    /// # Errors
    ///
    /// Returns [`PaneNotFound`] if no live pane has the ID.
    pub fn clear_background_override(&mut self, pane: PaneId) -> Result<(), PaneNotFound> {
        let record = self.record_mut(pane)?;
        record.background = None;
        Ok(())
    }

    /// Shows or hides a pane.
    ///
    /// # Errors
    ///
    /// Returns [`PaneNotFound`] if no live pane has the ID.
    pub fn set_visible(&mut self, pane: PaneId, visible: bool) -> Result<(), PaneNotFound> {
        let record = self.record_mut(pane)?;
        record.visible = visible;
        Ok(())
    }

    // ========================================================================
    // Internal Helpers
    // ========================================================================

    fn record(&self, pane: PaneId) -> Result<&PaneRecord, PaneNotFound> {
        self.panes.get(&pane).ok_or(PaneNotFound(pane))
    }

    fn record_mut(&mut self, pane: PaneId) -> Result<&mut PaneRecord, PaneNotFound> {
        self.panes.get_mut(&pane).ok_or(PaneNotFound(pane))
    }
}

impl Default for PaneTree {
    fn default() -> Self {
        Self::new()
    }
}
