//! Window relabelling: the pass that maps pool positions onto absolute
//! indices and relative labels after every build or navigation step.
//!
//! The pool is assumed to already be in window order: the engine rotates the
//! recycled slot to the correct end before calling [`update_window`].

use crate::error::RelabelError;
use crate::label::{Direction, RelativeLabel, Shift};
use crate::slot::Slot;
use log::trace;
use reelrs_support::ViewportSize;

/// Smallest pool the interior regime can lay out.
pub const MIN_INTERIOR_POOL: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowRegime {
    /// Current item is index 0; the window extends forward only.
    LeftBoundary,
    /// Current item is the last index; the window extends backward only.
    RightBoundary,
    Interior,
}

impl WindowRegime {
    pub const fn select(absolute_index: i64, total_count: i64) -> Self {
        if absolute_index == 0 {
            Self::LeftBoundary
        } else if absolute_index == total_count - 1 {
            Self::RightBoundary
        } else {
            Self::Interior
        }
    }
}

/// Inputs of one relabel pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowTarget {
    pub absolute_index: i64,
    pub total_count: i64,
    pub max_pool_size: usize,
    pub direction: Direction,
    pub viewport: ViewportSize,
}

/// Relabels `pool` in place for `target` and returns the absolute index that
/// newly entered the window, if any.
///
/// An error stops the pass at the failing position: slots before it carry the
/// new assignment, slots after it keep whatever the previous pass left.
/// `IndexOverflow` is detected before any slot is touched.
pub fn update_window(pool: &mut [Slot], target: WindowTarget) -> Result<Option<i64>, RelabelError> {
    let regime = WindowRegime::select(target.absolute_index, target.total_count);
    trace!(
        "update_window index={} total={} pool={} direction={:?} regime={regime:?}",
        target.absolute_index,
        target.total_count,
        pool.len(),
        target.direction,
    );
    match regime {
        WindowRegime::LeftBoundary => relabel_from_start(pool, target),
        WindowRegime::RightBoundary => relabel_from_end(pool, target),
        WindowRegime::Interior => relabel_interior(pool, target),
    }
}

fn as_offset(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

fn resolve_label(offset: i64, position: usize) -> Result<RelativeLabel, RelabelError> {
    RelativeLabel::from_offset(offset).ok_or(RelabelError::LabelOutOfRange { offset, position })
}

fn relabel_from_start(
    pool: &mut [Slot],
    target: WindowTarget,
) -> Result<Option<i64>, RelabelError> {
    for (position, slot) in pool.iter_mut().enumerate() {
        let offset = as_offset(position);
        let label = resolve_label(offset, position)?;
        slot.assign(
            target.absolute_index.saturating_add(offset),
            label,
            target.viewport,
        );
        slot.set_shift(Shift::None);
    }
    Ok(None)
}

fn relabel_from_end(pool: &mut [Slot], target: WindowTarget) -> Result<Option<i64>, RelabelError> {
    for (distance, (position, slot)) in pool.iter_mut().enumerate().rev().enumerate() {
        let offset = -as_offset(distance);
        let label = resolve_label(offset, position)?;
        slot.assign(
            target.absolute_index.saturating_add(offset),
            label,
            target.viewport,
        );
        slot.set_shift(Shift::None);
    }
    Ok(None)
}

/// Offset of pool position 0 from the current item in the interior regime.
fn interior_base_offset(absolute_index: i64, total_count: i64, pool_len: usize) -> i64 {
    if absolute_index == 1 {
        -1
    } else if absolute_index == total_count - 2 && pool_len > MIN_INTERIOR_POOL {
        -3
    } else {
        -2
    }
}

fn shift_hint(sliding: bool, direction: Direction, label: RelativeLabel) -> Shift {
    if !sliding {
        return Shift::None;
    }
    match (direction, label) {
        (Direction::Forward, RelativeLabel::TwoBefore) => Shift::EnteringFromStart,
        (Direction::Backward, RelativeLabel::TwoAfter) => Shift::EnteringFromEnd,
        _ => Shift::None,
    }
}

fn relabel_interior(pool: &mut [Slot], target: WindowTarget) -> Result<Option<i64>, RelabelError> {
    if pool.len() < MIN_INTERIOR_POOL {
        return Err(RelabelError::IndexOverflow {
            pool_len: pool.len(),
        });
    }

    let base = interior_base_offset(target.absolute_index, target.total_count, pool.len());
    let sliding = as_offset(pool.len()) < target.total_count;
    for (position, slot) in pool.iter_mut().enumerate() {
        let offset = base + as_offset(position);
        let label = resolve_label(offset, position)?;
        slot.assign(
            target.absolute_index.saturating_add(offset),
            label,
            target.viewport,
        );
        slot.set_shift(shift_hint(sliding, target.direction, label));
    }

    // A pool that covers the whole sequence never reveals anything new.
    if target.total_count <= as_offset(target.max_pool_size) {
        return Ok(None);
    }

    let indices = pool.iter().map(Slot::absolute_index);
    Ok(match target.direction {
        Direction::Forward => indices.max(),
        Direction::Backward => indices.min(),
        Direction::None => None,
    })
}
