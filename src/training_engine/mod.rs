//! Core training engine — sequence generation, verification, and scoring.
//!
//! ## Module overview
//!
//! | Module           | Purpose |
//! |------------------|---------|
//! | `models`         | All shared types: items, tiers, params, request/round structs |
//! | `values`         | Primitive generators (bounded ints, floats, symbols, words) |
//! | `generator`      | Difficulty-driven sequence composition via band tables |
//! | `verifier`       | Type-polymorphic scoring of raw answer tokens |
//! | `policy`         | Score weighting, tier transitions, memorization budget |
//! | `store`          | `ProgressStore` collaborator trait + in-memory implementation |
//! | `session`        | Round orchestration: begin, score, persist |
//! | `client_adapter` | JSON payloads for a thin UI client |

pub mod client_adapter;
pub mod generator;
pub mod models;
pub mod policy;
pub mod session;
pub mod store;
pub mod values;
pub mod verifier;

// Re-export the public API surface so callers can use
// `training_engine::generate` without reaching into sub-modules.
pub use generator::{generate, generate_sequence};
pub use models::{
    ConfigError, DifficultyParams, DifficultyTier, ParamsTable, RoundOutcome,
    RoundSetup, TaskItem, TrainingRequest,
};
pub use policy::{compute_score, memorization_seconds, next_tier};
pub use session::TrainingSession;
pub use store::{MemoryStore, ProgressRecord, ProgressStore, StoreError};
pub use verifier::{score_answers, split_answer_line};
