//! Free-form pane partitioning
//!
//! This module provides the core data model for free-form screen-region
//! panels: a recursive partition tree that subdivides one rectangular
//! region into arbitrarily nested panes, attaches at most one content
//! item per leaf, and collapses subdivisions back into their parent.
//!
//! # Architecture
//!
//! - **Arena-backed tree**: every pane lives in one ID-keyed map, with
//!   parent/child/sibling relationships stored as IDs
//! - **Transactional mutation**: every precondition is checked before
//!   anything changes, so failed calls are guaranteed no-ops
//! - **Proportional splits**: N-way splits with the unallocated
//!   remainder folded into the last child, weights always summing to 1.0
//! - **Idempotent debug overlay**: labels and palette backgrounds
//!   layered purely over the tree's query surface
//!
//! # Module Structure
//!
//! - `types` - Core type definitions (`PaneId`, `PaneIdAllocator`, `ContentId`, `SplitAxis`)
//! - `tree` - Arena records (`PaneRecord`, `PaneContent`)
//! - `model` - The partition tree itself (`PaneTree`)
//! - `proportions` - Pure weight/anchor allocation (`allocate`, `AnchorSpec`)
//! - `overlay` - Debug overlay (`DebugOverlay`, `OverlayOptions`)
//! - `error` - Error types (`SplitError`, `MergeError`, `AttachError`)
//!
//! # Example
//!
//! ```
//! use skypanel_core::alignment::{Alignment, Margins};
//! use skypanel_core::freeform::{ContentId, PaneTree, SplitAxis};
//!
//! let mut tree = PaneTree::new();
//! let root = tree.root();
//!
//! // Carve the region into a 30/70 pair of panes
//! let panes = tree.split(root, SplitAxis::Horizontal, &[0.3, 0.7]).unwrap();
//!
//! // Show a video feed in the wider pane
//! let feed = ContentId::new();
//! tree.attach_content(panes[1], feed, Alignment::Center, Margins::default())
//!     .unwrap();
//! assert_eq!(tree.find_pane_for_content(feed), Some(panes[1]));
//!
//! // Collapse the split; the feed's handle is discarded with it
//! tree.merge_children(root).unwrap();
//! assert_eq!(tree.find_pane_for_content(feed), None);
//! ```

mod error;
mod model;
mod overlay;
mod proportions;
mod tree;
mod types;

pub use error::{AttachError, MergeError, PaneNotFound, ProportionError, SplitError};
pub use model::{PaneSlot, PaneTree};
pub use overlay::{DebugLabel, DebugOverlay, OverlayOptions};
pub use proportions::{
    AnchorSpec, AnchorTarget, MIN_PROPORTIONS, SUM_TOLERANCE, SlotAllocation, allocate,
    folded_weights, validate,
};
pub use tree::{PaneContent, PaneRecord};
pub use types::{ContentId, PaneId, PaneIdAllocator, SplitAxis};
