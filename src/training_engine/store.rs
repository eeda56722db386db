//! Progress-store collaborator contract.
//!
//! The real deployment persists users, scores, and round history in an
//! external database; the engine only sees this trait. [`MemoryStore`] is a
//! complete in-process implementation used by tests and the demo.

use std::collections::HashMap;
use std::fmt::Display;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::training_engine::models::DifficultyTier;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),
    #[error("unknown user {0}")]
    UnknownUser(u64),
}

/// One persisted training round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressRecord {
    pub sequence_length: usize,
    pub success_rate: f32,
    /// Unix timestamp of the round, seconds.
    pub recorded_at: u64,
}

/// Persistence seam between the engine and the external user database.
///
/// All writes are fire-and-forget from the session's perspective: failures
/// are logged, never propagated into the round outcome.
pub trait ProgressStore {
    /// The user's current difficulty tier. Callers fall back to EASY on any
    /// failure.
    fn user_tier(&self, user_id: u64) -> Result<DifficultyTier, StoreError>;

    fn save_progress(
        &mut self,
        user_id: u64,
        sequence_length: usize,
        success_rate: f32,
    ) -> Result<(), StoreError>;

    /// Add `delta` to the user's running total score.
    fn add_score(&mut self, user_id: u64, delta: u32) -> Result<(), StoreError>;

    fn set_tier(&mut self, user_id: u64, tier: DifficultyTier) -> Result<(), StoreError>;
}

/// Run `op` up to `attempts` times, logging each failed attempt.
///
/// Mirrors the bounded connect loop the full application runs at startup
/// before giving up on the database.
pub fn with_retry<T, E: Display>(
    attempts: usize,
    mut op: impl FnMut() -> Result<T, E>,
) -> Result<T, E> {
    let mut attempt = 1;
    loop {
        match op() {
            Ok(v) => return Ok(v),
            Err(e) if attempt < attempts => {
                tracing::warn!("store attempt {attempt}/{attempts} failed: {e}");
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}

#[derive(Debug, Clone)]
struct UserRecord {
    name: String,
    tier: DifficultyTier,
    total_score: u64,
    history: Vec<ProgressRecord>,
}

/// In-memory stand-in for the external user database.
#[derive(Debug, Default)]
pub struct MemoryStore {
    users: HashMap<u64, UserRecord>,
    next_id: u64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a user at EASY with zero score; returns the assigned id.
    pub fn register(&mut self, name: &str) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.users.insert(
            id,
            UserRecord {
                name: name.to_string(),
                tier: DifficultyTier::Easy,
                total_score: 0,
                history: Vec::new(),
            },
        );
        id
    }

    /// Top scorers with a positive total, highest first.
    pub fn leaderboard(&self, limit: usize) -> Vec<(String, u64)> {
        let mut rows: Vec<(String, u64)> = self
            .users
            .values()
            .filter(|u| u.total_score > 0)
            .map(|u| (u.name.clone(), u.total_score))
            .collect();
        rows.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        rows.truncate(limit);
        rows
    }

    /// The user's round history, most recent first.
    pub fn history(&self, user_id: u64) -> Result<Vec<ProgressRecord>, StoreError> {
        let user = self
            .users
            .get(&user_id)
            .ok_or(StoreError::UnknownUser(user_id))?;
        let mut records = user.history.clone();
        records.reverse();
        Ok(records)
    }

    pub fn total_score(&self, user_id: u64) -> Result<u64, StoreError> {
        self.users
            .get(&user_id)
            .map(|u| u.total_score)
            .ok_or(StoreError::UnknownUser(user_id))
    }

    fn user_mut(&mut self, user_id: u64) -> Result<&mut UserRecord, StoreError> {
        self.users
            .get_mut(&user_id)
            .ok_or(StoreError::UnknownUser(user_id))
    }
}

fn now_epoch_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

impl ProgressStore for MemoryStore {
    fn user_tier(&self, user_id: u64) -> Result<DifficultyTier, StoreError> {
        self.users
            .get(&user_id)
            .map(|u| u.tier)
            .ok_or(StoreError::UnknownUser(user_id))
    }

    fn save_progress(
        &mut self,
        user_id: u64,
        sequence_length: usize,
        success_rate: f32,
    ) -> Result<(), StoreError> {
        let record = ProgressRecord {
            sequence_length,
            success_rate,
            recorded_at: now_epoch_secs(),
        };
        self.user_mut(user_id)?.history.push(record);
        Ok(())
    }

    fn add_score(&mut self, user_id: u64, delta: u32) -> Result<(), StoreError> {
        let user = self.user_mut(user_id)?;
        user.total_score += u64::from(delta);
        Ok(())
    }

    fn set_tier(&mut self, user_id: u64, tier: DifficultyTier) -> Result<(), StoreError> {
        self.user_mut(user_id)?.tier = tier;
        Ok(())
    }
}
