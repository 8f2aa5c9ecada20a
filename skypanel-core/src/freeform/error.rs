//! Error types for pane tree operations
//!
//! This module defines the error types returned by the structural
//! operations on the partition tree. Every error is local and
//! recoverable; a failed call never leaves a partial mutation behind.

use super::types::PaneId;

/// Errors that can occur when validating split proportions.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum ProportionError {
    /// Fewer than two proportions were supplied.
    #[error("need at least two proportions, got {0}")]
    TooFew(usize),

    /// The proportions sum beyond 1.0 plus tolerance.
    #[error("proportions sum to {0}, which exceeds 1.0")]
    SumExceeds1(f64),
}

/// Errors that can occur when splitting a pane.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum SplitError {
    /// The specified pane was not found.
    #[error("pane not found: {0}")]
    NotFound(PaneId),

    /// The pane is already split into children.
    #[error("pane is already split: {0}")]
    AlreadySplit(PaneId),

    /// The supplied proportions were rejected.
    #[error("invalid proportions: {0}")]
    InvalidProportions(#[from] ProportionError),
}

/// Errors that can occur when merging panes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MergeError {
    /// The specified pane was not found.
    #[error("pane not found: {0}")]
    NotFound(PaneId),

    /// The pane has no parent (it is the root).
    #[error("pane has no parent: {0}")]
    NoParent(PaneId),
}

/// Errors that can occur when attaching content to a pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AttachError {
    /// The specified pane was not found.
    #[error("pane not found: {0}")]
    NotFound(PaneId),

    /// The pane is split and cannot hold content.
    #[error("pane is split and cannot hold content: {0}")]
    PaneIsSplit(PaneId),
}

/// Error returned by attribute setters when no live pane has the ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("pane not found: {0}")]
pub struct PaneNotFound(pub PaneId);

impl From<PaneNotFound> for SplitError {
    fn from(err: PaneNotFound) -> Self {
        Self::NotFound(err.0)
    }
}

impl From<PaneNotFound> for MergeError {
    fn from(err: PaneNotFound) -> Self {
        Self::NotFound(err.0)
    }
}

impl From<PaneNotFound> for AttachError {
    fn from(err: PaneNotFound) -> Self {
        Self::NotFound(err.0)
    }
}
