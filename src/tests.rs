//! Crate-level tests for `memory_drill_gen`.
//!
//! Included from `lib.rs` under `#[cfg(test)]`.
//!
//! # Coverage
//!
//! | Group | What is tested |
//! |-------|----------------|
//! | Determinism | Same seed → identical sequence; different seeds → varied output |
//! | Structural | Length bounds hold for every tier and requested length; pure runs stay pure |
//! | Composition | Non-EASY tiers never show symbols; EASY shows all kinds across seeds |
//! | Verification | Per-type tolerance rules, mismatched lengths, monotonicity |
//! | Policy | Score weighting, one-step tier moves, decreasing memorization budget |
//! | Session | Full round against `MemoryStore`: persistence, promotion, demotion |

use crate::training_engine::{
    client_adapter, compute_score, generate, next_tier, score_answers,
    split_answer_line, DifficultyTier, MemoryStore, ParamsTable, ProgressStore,
    TaskItem, TrainingRequest, TrainingSession,
};

// ── helpers ──────────────────────────────────────────────────────────────────

/// Build a deterministic request at the tier's shortest length.
fn req(tier: DifficultyTier, seed: u64) -> TrainingRequest {
    TrainingRequest {
        tier,
        requested_length: 0,
        rng_seed: Some(seed),
    }
}

/// Five seeds that span different RNG states.
const SEEDS: [u64; 5] = [1, 42, 999, 0xDEAD_BEEF, 7];

/// Render a sequence the way a perfectly accurate player would type it.
fn perfect_answers(sequence: &[TaskItem]) -> Vec<String> {
    sequence.iter().map(|i| i.to_string()).collect()
}

// ── determinism ──────────────────────────────────────────────────────────────

#[test]
fn same_seed_produces_identical_sequence() {
    let table = ParamsTable::default();
    for tier in DifficultyTier::all() {
        for seed in SEEDS {
            let a = generate(&table, &req(tier, seed));
            let b = generate(&table, &req(tier, seed));
            assert_eq!(a, b, "sequence mismatch for {tier} seed={seed}");
        }
    }
}

#[test]
fn entropy_seed_produces_a_valid_sequence() {
    // Smoke test: rng_seed: None must not panic and must satisfy the bounds.
    let table = ParamsTable::default();
    for tier in DifficultyTier::all() {
        let seq = generate(&table, &TrainingRequest::new(tier));
        let params = table.get(tier);
        assert!((params.min_length..=params.max_length).contains(&seq.len()));
    }
}

// ── structural invariants ────────────────────────────────────────────────────

#[test]
fn generated_length_is_always_within_tier_bounds() {
    let table = ParamsTable::default();
    for tier in DifficultyTier::all() {
        let params = table.get(tier);
        for requested in [0usize, 1, 3, 8, 50] {
            for seed in SEEDS {
                let seq = generate(&table, &TrainingRequest {
                    tier,
                    requested_length: requested,
                    rng_seed: Some(seed),
                });
                assert!(
                    (params.min_length..=params.max_length).contains(&seq.len()),
                    "{tier} requested={requested} seed={seed} got len {}",
                    seq.len()
                );
            }
        }
    }
}

#[test]
fn upper_tiers_never_show_symbols() {
    let table = ParamsTable::default();
    for tier in [DifficultyTier::Medium, DifficultyTier::Hard] {
        for seed in 0..100u64 {
            let seq = generate(&table, &req(tier, seed));
            assert!(
                seq.iter().all(|i| !matches!(i, TaskItem::Symbol(_))),
                "{tier} produced a symbol at seed {seed}"
            );
        }
    }
}

#[test]
fn homogeneous_rolls_stay_pure() {
    // Every generated sequence is either mixed (EASY only) or a pure run of
    // one category. Numbers count as a single category regardless of kind.
    let table = ParamsTable::default();
    for tier in DifficultyTier::all() {
        for seed in 0..150u64 {
            let seq = generate(&table, &req(tier, seed));
            let has_word   = seq.iter().any(|i| matches!(i, TaskItem::Word(_)));
            let has_symbol = seq.iter().any(|i| matches!(i, TaskItem::Symbol(_)));
            let has_number = seq.iter().any(TaskItem::is_number);
            let categories =
                usize::from(has_word) + usize::from(has_symbol) + usize::from(has_number);
            if tier != DifficultyTier::Easy {
                assert!(
                    categories == 1 || (has_word && has_number && !has_symbol),
                    "{tier} seed={seed} produced an impossible mix"
                );
            } else {
                assert!(categories >= 1);
            }
        }
    }
}

// ── verification ─────────────────────────────────────────────────────────────

#[test]
fn perfect_retype_scores_full_marks() {
    let table = ParamsTable::default();
    for tier in DifficultyTier::all() {
        for seed in SEEDS {
            let seq = generate(&table, &req(tier, seed));
            let answers = perfect_answers(&seq);
            assert_eq!(
                score_answers(&seq, &answers),
                seq.len(),
                "perfect retype did not score full marks for {tier} seed={seed}"
            );
        }
    }
}

#[test]
fn short_answer_lists_are_scored_not_rejected() {
    let table = ParamsTable::default();
    let seq = generate(&table, &req(DifficultyTier::Hard, 42));
    assert!(seq.len() >= 5);
    let two = perfect_answers(&seq[..2]);
    let count = score_answers(&seq, &two);
    assert!(count <= 2);
}

#[test]
fn answer_line_round_trip_through_splitting() {
    let table = ParamsTable::default();
    let seq = generate(&table, &req(DifficultyTier::Medium, 7));
    let line = perfect_answers(&seq).join(" ");
    let tokens = split_answer_line(&line);
    assert_eq!(score_answers(&seq, &tokens), seq.len());
}

// ── policy ───────────────────────────────────────────────────────────────────

#[test]
fn score_and_tier_policy_match_the_contract() {
    assert_eq!(compute_score(1.0, DifficultyTier::Hard), 300);
    assert_eq!(compute_score(0.5, DifficultyTier::Easy), 50);
    assert_eq!(next_tier(DifficultyTier::Easy, 0.8), Some(DifficultyTier::Medium));
    assert_eq!(next_tier(DifficultyTier::Hard, 0.8), None);
    assert_eq!(next_tier(DifficultyTier::Medium, 0.2), Some(DifficultyTier::Easy));
}

// ── session integration ──────────────────────────────────────────────────────

#[test]
fn consecutive_perfect_rounds_climb_to_hard() {
    let mut session = TrainingSession::new(MemoryStore::new());
    let user = session.store_mut().register("ada");

    for expected_tier in [DifficultyTier::Easy, DifficultyTier::Medium, DifficultyTier::Hard] {
        let setup = session.begin_round(user, Some(42));
        assert_eq!(setup.tier, expected_tier);
        let answers = perfect_answers(&setup.sequence);
        session.complete_round(user, &setup, &answers);
    }

    // Already at HARD: another perfect round changes nothing.
    let setup = session.begin_round(user, Some(42));
    assert_eq!(setup.tier, DifficultyTier::Hard);
    let answers = perfect_answers(&setup.sequence);
    let outcome = session.complete_round(user, &setup, &answers);
    assert_eq!(outcome.tier_change, None);
    assert_eq!(outcome.score, 300);

    assert_eq!(session.store().history(user).unwrap().len(), 4);
}

#[test]
fn memorization_budget_shrinks_as_tiers_climb() {
    let mut session = TrainingSession::new(MemoryStore::new());
    let user = session.store_mut().register("ada");
    let mut budgets = Vec::new();
    for tier in DifficultyTier::all() {
        session.store_mut().set_tier(user, tier).unwrap();
        budgets.push(session.begin_round(user, Some(1)).memorize_secs);
    }
    assert_eq!(budgets, vec![7, 6, 5]);
}

#[test]
fn client_payloads_reflect_the_round() {
    let mut session = TrainingSession::new(MemoryStore::new());
    let user = session.store_mut().register("ada");
    let setup = session.begin_round(user, Some(42));
    let answers = perfect_answers(&setup.sequence);
    let outcome = session.complete_round(user, &setup, &answers);

    let shown = client_adapter::round_setup_payload(&setup, user);
    assert_eq!(
        shown["items"].as_array().unwrap().len(),
        setup.sequence.len()
    );
    assert_eq!(shown["memorize_secs"], 7);

    let result = client_adapter::round_result_payload(&setup, &outcome, user);
    assert_eq!(result["correct"], result["total"]);
    assert_eq!(result["tier_change"], "MEDIUM");
}
