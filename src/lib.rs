//! # memory_drill_gen
//!
//! A fully offline memory-training engine: generates a randomized sequence of
//! mixed-type items (numbers, symbols, dictionary words) for a difficulty
//! tier, scores the player's retyped answer with per-type tolerance rules,
//! and derives a difficulty-weighted score plus tier promotion/demotion.
//!
//! ## How it works
//!
//! 1. Create a [`TrainingRequest`] with a tier, a requested length, and an
//!    optional RNG seed — or run a full round through [`TrainingSession`].
//! 2. Call [`generate`] — the engine clamps the length into the tier's
//!    bounds, rolls the composition (homogeneous run or mixed sequence),
//!    and draws each item from the primitive generators.
//! 3. Show the sequence for [`memorization_seconds`], collect one line of
//!    input, split it with [`split_answer_line`], and call [`score_answers`].
//! 4. [`compute_score`] and [`next_tier`] turn the success rate into a score
//!    delta and an optional tier change.
//!
//! ## Key features
//!
//! - **Deterministic**: pass `rng_seed: Some(u64)` to reproduce the exact
//!   same sequence — useful for tests and replaying rounds.
//! - **Total scoring**: malformed tokens, missing answers, and extra answers
//!   are all just "incorrect"; verification never fails.
//! - **Pluggable persistence**: sessions talk to a [`ProgressStore`] trait;
//!   [`MemoryStore`] ships for tests and demos, the real database lives
//!   behind the same seam.
//!
//! ## Quick start
//!
//! ```rust
//! use memory_drill_gen::{
//!     generate, score_answers, split_answer_line, DifficultyTier, ParamsTable,
//!     TrainingRequest,
//! };
//!
//! let table = ParamsTable::default();
//! let request = TrainingRequest {
//!     tier: DifficultyTier::Easy,
//!     requested_length: 4,
//!     rng_seed: Some(42),
//! };
//! let sequence = generate(&table, &request);
//!
//! // Show `sequence` to the player, then score what they typed back:
//! let tokens = split_answer_line("7 q kiwi 3.14");
//! let correct = score_answers(&sequence, &tokens);
//! assert!(correct <= sequence.len());
//! ```

pub mod training_engine;

// Convenience re-exports so callers can use `memory_drill_gen::generate`
// directly without reaching into `training_engine::`.
pub use training_engine::{
    compute_score, generate, generate_sequence, memorization_seconds, next_tier,
    score_answers, split_answer_line, ConfigError, DifficultyParams,
    DifficultyTier, MemoryStore, ParamsTable, ProgressRecord, ProgressStore,
    RoundOutcome, RoundSetup, StoreError, TaskItem, TrainingRequest,
    TrainingSession,
};

#[cfg(test)]
mod tests;
