//! Scoring, tier transitions, and the memorization-time budget.

use crate::training_engine::models::DifficultyTier;

/// Promote one tier above this success rate.
const PROMOTE_ABOVE: f32 = 0.75;
/// Demote one tier below this success rate.
const DEMOTE_BELOW: f32 = 0.3;

/// Difficulty-weighted score: `round(rate * 100 * (tier_index + 1))`.
///
/// A perfect HARD round is worth 300, a perfect EASY round 100.
pub fn compute_score(success_rate: f32, tier: DifficultyTier) -> u32 {
    (success_rate * 100.0 * (tier.index() as f32 + 1.0)).round() as u32
}

/// Tier transition for one round's success rate.
///
/// Moves exactly one step and never past the ends; returns `None` when the
/// rate stays inside the neutral band.
pub fn next_tier(tier: DifficultyTier, success_rate: f32) -> Option<DifficultyTier> {
    if success_rate > PROMOTE_ABOVE && tier != DifficultyTier::Hard {
        Some(tier.harder())
    } else if success_rate < DEMOTE_BELOW && tier != DifficultyTier::Easy {
        Some(tier.easier())
    } else {
        None
    }
}

/// Seconds the caller should display the sequence before hiding it.
/// Monotonically decreasing with difficulty: 7 / 6 / 5.
pub fn memorization_seconds(tier: DifficultyTier) -> u64 {
    match tier {
        DifficultyTier::Easy   => 7,
        DifficultyTier::Medium => 6,
        DifficultyTier::Hard   => 5,
    }
}
