//! Proportional space allocation for splits
//!
//! Pure functions mapping a split axis and a list of proportions to
//! per-child weights and an ordered anchor chain. The tree calls
//! [`validate`] before mutating anything and [`allocate`] to produce the
//! geometry description the host renderer consumes; nothing in this
//! module knows about the tree itself.
//!
//! Weights always sum to exactly 1.0: any shortfall between the supplied
//! proportions and the whole is folded into the last child.

use super::error::ProportionError;
use super::types::SplitAxis;

/// Minimum number of proportions a split accepts.
pub const MIN_PROPORTIONS: usize = 2;

/// Tolerance applied when checking that proportions do not sum past 1.0.
pub const SUM_TOLERANCE: f64 = 1e-6;

/// What a slot edge is anchored to within its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnchorTarget {
    /// The parent's start edge on the split axis.
    ParentStart,
    /// The parent's end edge on the split axis.
    ParentEnd,
    /// The neighboring slot at this position in the same chain.
    Sibling(usize),
}

/// Edge anchoring for one slot of a split.
///
/// `leading` and `trailing` refer to the split axis: left/right edges for
/// a horizontal split, top/bottom edges for a vertical one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnchorSpec {
    /// Axis the edges refer to.
    pub axis: SplitAxis,
    /// What the slot's leading edge attaches to.
    pub leading: AnchorTarget,
    /// What the slot's trailing edge attaches to.
    pub trailing: AnchorTarget,
}

impl AnchorSpec {
    /// Builds the anchor description for the slot at `index` in a chain
    /// of `count` slots.
    ///
    /// The first slot leads from the parent's start edge and the last
    /// trails to the parent's end edge; interior slots anchor to their
    /// immediate neighbors.
    #[must_use]
    pub const fn for_position(axis: SplitAxis, index: usize, count: usize) -> Self {
        let leading = if index == 0 {
            AnchorTarget::ParentStart
        } else {
            AnchorTarget::Sibling(index - 1)
        };
        let trailing = if index + 1 == count {
            AnchorTarget::ParentEnd
        } else {
            AnchorTarget::Sibling(index + 1)
        };
        Self {
            axis,
            leading,
            trailing,
        }
    }
}

/// One slot of an allocated split: its weight and its anchors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotAllocation {
    /// Fractional share of the parent's space, in `0.0..=1.0`.
    pub weight: f64,
    /// Edge anchoring for this slot.
    pub anchors: AnchorSpec,
}

/// Checks that a proportion list is acceptable for a split.
///
/// # Errors
///
/// Returns [`ProportionError::TooFew`] for fewer than two entries and
/// [`ProportionError::SumExceeds1`] when the entries sum past 1.0 plus
/// [`SUM_TOLERANCE`], or when the sum is NaN.
pub fn validate(proportions: &[f64]) -> Result<(), ProportionError> {
    if proportions.len() < MIN_PROPORTIONS {
        return Err(ProportionError::TooFew(proportions.len()));
    }
    let sum: f64 = proportions.iter().sum();
    if sum.is_nan() || sum > 1.0 + SUM_TOLERANCE {
        return Err(ProportionError::SumExceeds1(sum));
    }
    Ok(())
}

/// Returns the weights actually assigned for the given proportions.
///
/// Every entry is kept as supplied except the last, which absorbs the
/// remainder so the result sums to exactly 1.0.
#[must_use]
pub fn folded_weights(proportions: &[f64]) -> Vec<f64> {
    let sum: f64 = proportions.iter().sum();
    let mut weights = proportions.to_vec();
    if let Some(last) = weights.last_mut() {
        *last += 1.0 - sum;
    }
    weights
}

/// Allocates a split: validates the proportions and produces the ordered
/// weight/anchor chain for its slots.
///
/// Stateless; the caller decides which panes occupy which slots.
///
/// # Errors
///
/// Returns the same errors as [`validate`]; on error no slots are
/// produced.
///
/// # Example
///
/// ```
/// use skypanel_core::freeform::{allocate, AnchorTarget, SplitAxis};
///
/// let slots = allocate(SplitAxis::Horizontal, &[0.3, 0.7]).unwrap();
/// assert_eq!(slots.len(), 2);
/// assert_eq!(slots[0].anchors.leading, AnchorTarget::ParentStart);
/// assert_eq!(slots[1].anchors.trailing, AnchorTarget::ParentEnd);
/// ```
pub fn allocate(
    axis: SplitAxis,
    proportions: &[f64],
) -> Result<Vec<SlotAllocation>, ProportionError> {
    validate(proportions)?;
    let count = proportions.len();
    let slots = folded_weights(proportions)
        .into_iter()
        .enumerate()
        .map(|(index, weight)| SlotAllocation {
            weight,
            anchors: AnchorSpec::for_position(axis, index, count),
        })
        .collect();
    Ok(slots)
}
