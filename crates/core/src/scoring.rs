//! Scoring module - points, combos and the difficulty ramp
//!
//! All functions are pure; the session owns the counters and feeds them in.
//!
//! - A drop is *perfect* when the overlap is within the perfect threshold of
//!   the dropped block's full width. Perfect drops extend the combo and pay
//!   `PERFECT_BASE + COMBO_STEP * combo`.
//! - Any other successful drop resets the combo and pays
//!   `ACCURACY_BASE + floor(ACCURACY_SCALE * overlap / width)`.
//! - Overlaps narrower than `MIN_OVERLAP_RATIO` of the width are misses.

use crate::types::{
    ACCURACY_BASE, ACCURACY_SCALE, COMBO_STEP, MIN_OVERLAP_RATIO, PERFECT_BASE,
    SPEED_RAMP_INTERVAL,
};

/// Score awarded for one successful drop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DropScore {
    pub perfect: bool,
    pub points: u32,
    /// Combo counter after the drop.
    pub combo: u32,
}

/// Whether an overlap is too thin to count as a landing.
pub fn is_miss(overlap_width: f32, original_width: f32) -> bool {
    overlap_width < original_width * MIN_OVERLAP_RATIO
}

pub fn is_perfect(overlap_width: f32, original_width: f32, threshold: f32) -> bool {
    (overlap_width - original_width).abs() < threshold
}

/// Points for a perfect drop at the given (already incremented) combo.
pub fn perfect_points(combo: u32) -> u32 {
    PERFECT_BASE.saturating_add(COMBO_STEP.saturating_mul(combo))
}

/// Points for a partial drop; `accuracy` is `overlap / width` in `[0, 1]`.
pub fn accuracy_points(accuracy: f32) -> u32 {
    // Truncation is the floor here: accuracy is never negative.
    ACCURACY_BASE + (ACCURACY_SCALE * accuracy) as u32
}

/// Score a successful drop, advancing or resetting the combo.
pub fn score_drop(
    overlap_width: f32,
    original_width: f32,
    perfect_threshold: f32,
    combo: u32,
) -> DropScore {
    if is_perfect(overlap_width, original_width, perfect_threshold) {
        let combo = combo.saturating_add(1);
        DropScore {
            perfect: true,
            points: perfect_points(combo),
            combo,
        }
    } else {
        DropScore {
            perfect: false,
            points: accuracy_points(overlap_width / original_width),
            combo: 0,
        }
    }
}

/// Whether reaching `tower_height` (base included) ramps the block speed.
pub fn ramps_speed(tower_height: u32) -> bool {
    tower_height > 0 && tower_height % SPEED_RAMP_INTERVAL == 0
}
