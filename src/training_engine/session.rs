//! Round orchestration: tier lookup, generation, scoring, persistence.
//!
//! A round has two halves. [`TrainingSession::begin_round`] produces the
//! sequence and the memorization budget for the caller to display;
//! [`TrainingSession::complete_round`] scores the typed-back tokens, applies
//! the score and tier policy, and persists the result. Store failures are
//! logged and swallowed — they never change the outcome the player sees.

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::training_engine::{
    generator, policy,
    models::{DifficultyTier, ParamsTable, RoundOutcome, RoundSetup},
    store::ProgressStore,
    verifier,
};

pub struct TrainingSession<S: ProgressStore> {
    store: S,
    params: ParamsTable,
}

impl<S: ProgressStore> TrainingSession<S> {
    pub fn new(store: S) -> Self {
        Self::with_params(store, ParamsTable::default())
    }

    pub fn with_params(store: S, params: ParamsTable) -> Self {
        TrainingSession { store, params }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Start a round for `user_id`: look up their tier (EASY on any lookup
    /// failure), generate a sequence at the tier's shortest length, and
    /// report the display budget.
    pub fn begin_round(&self, user_id: u64, rng_seed: Option<u64>) -> RoundSetup {
        let tier = match self.store.user_tier(user_id) {
            Ok(tier) => tier,
            Err(e) => {
                tracing::warn!("tier lookup failed for user {user_id}: {e}; defaulting to EASY");
                DifficultyTier::Easy
            }
        };

        let mut rng: StdRng = match rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None       => StdRng::from_entropy(),
        };
        self.setup_with_rng(&mut rng, tier)
    }

    /// Same as [`begin_round`](Self::begin_round) with a caller-owned RNG.
    pub fn setup_with_rng<R: Rng>(&self, rng: &mut R, tier: DifficultyTier) -> RoundSetup {
        let params = self.params.get(tier);
        let sequence = generator::generate_sequence(rng, params, tier, params.min_length);
        tracing::debug!(
            "round setup: tier={tier} len={} memorize={}s",
            sequence.len(),
            policy::memorization_seconds(tier)
        );
        RoundSetup {
            tier,
            sequence,
            memorize_secs: policy::memorization_seconds(tier),
        }
    }

    /// Score the player's tokens, derive score and tier change, persist.
    pub fn complete_round(
        &mut self,
        user_id: u64,
        setup: &RoundSetup,
        answers: &[String],
    ) -> RoundOutcome {
        let total = setup.sequence.len();
        let correct = verifier::score_answers(&setup.sequence, answers);
        let success_rate = if total == 0 {
            0.0
        } else {
            correct as f32 / total as f32
        };
        let score = policy::compute_score(success_rate, setup.tier);
        let tier_change = policy::next_tier(setup.tier, success_rate);

        if let Err(e) = self.store.save_progress(user_id, total, success_rate) {
            tracing::warn!("failed to save progress for user {user_id}: {e}");
        }
        if let Err(e) = self.store.add_score(user_id, score) {
            tracing::warn!("failed to update score for user {user_id}: {e}");
        }
        if let Some(new_tier) = tier_change {
            if let Err(e) = self.store.set_tier(user_id, new_tier) {
                tracing::warn!("failed to update difficulty for user {user_id}: {e}");
            }
        }

        RoundOutcome {
            correct,
            total,
            success_rate,
            score,
            tier_change,
        }
    }
}
