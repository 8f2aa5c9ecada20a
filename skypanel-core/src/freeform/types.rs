//! Core type definitions for the free-form panel system
//!
//! This module contains the fundamental identifier types and enums used
//! throughout the pane partition tree.

use std::fmt;
use uuid::Uuid;

/// Unique identifier for a pane within a partition tree.
///
/// Each pane has a unique ID that persists throughout its lifetime, even
/// as the tree structure changes. IDs are allocated monotonically by the
/// owning tree and are never reused while the pane is live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PaneId(pub u64);

impl PaneId {
    /// Creates a pane ID from a raw value.
    #[must_use]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw ID value.
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PaneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pane({})", self.0)
    }
}

/// Monotonic allocator for [`PaneId`]s.
///
/// Owned by the tree that hands out the IDs. The first allocated ID is 1;
/// every subsequent call returns a strictly larger value, so an ID is
/// never reused for the lifetime of the allocator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaneIdAllocator {
    next: u64,
}

impl PaneIdAllocator {
    /// Creates an allocator whose first ID will be `Pane(1)`.
    #[must_use]
    pub const fn new() -> Self {
        Self { next: 1 }
    }

    /// Returns the next unique pane ID.
    pub fn next_id(&mut self) -> PaneId {
        let id = PaneId(self.next);
        self.next += 1;
        id
    }
}

impl Default for PaneIdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

/// Opaque handle for content displayed in a leaf pane.
///
/// Content handles are created by the host; the tree only records which
/// leaf currently holds which handle. Disposal of whatever the handle
/// refers to is the host's responsibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContentId(pub Uuid);

impl ContentId {
    /// Creates a new random content handle.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a content handle from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for ContentId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ContentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Content({})", self.0)
    }
}

/// Axis along which a split arranges its children.
///
/// A horizontal split places children side by side (left to right); a
/// vertical split stacks them (top to bottom).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SplitAxis {
    /// Children arranged left to right.
    Horizontal,
    /// Children stacked top to bottom.
    Vertical,
}

impl fmt::Display for SplitAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Horizontal => write!(f, "Horizontal"),
            Self::Vertical => write!(f, "Vertical"),
        }
    }
}
