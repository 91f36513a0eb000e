//! Score accumulation and the stepped speed curve
//!
//! Score counts simulated frames, not wall-clock time, so a run's score and
//! speed depend only on how many frames were played.

use crate::tuning::Tuning;

/// Scroll speed for a given score.
///
/// `base + floor(score / every) * amount`, recomputed from scratch each frame.
pub fn compute_speed(score: u64, tuning: &Tuning) -> f32 {
    let steps = score / tuning.speed_increment_every;
    tuning.base_speed + steps as f32 * tuning.speed_increment_amount
}

/// Fold a finished run's score into the best score
#[inline]
pub fn fold_high_score(high_score: u64, score: u64) -> u64 {
    high_score.max(score)
}
