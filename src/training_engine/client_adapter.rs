//! JSON payloads for a thin UI client.
//!
//! The terminal (or web) front end only needs rendered tokens and outcome
//! numbers; it never sees `TaskItem` internals. These builders produce the
//! wire shape directly with `serde_json`.

use serde_json::{json, Value};

use crate::training_engine::models::{RoundOutcome, RoundSetup, TaskItem};

fn item_entry(position: usize, item: &TaskItem) -> Value {
    json!({
        "position": position,
        "kind": item.kind(),
        "display": item.to_string(),
    })
}

/// Payload for the memorization phase: what to show and for how long.
pub fn round_setup_payload(setup: &RoundSetup, user_id: u64) -> Value {
    let items: Vec<Value> = setup
        .sequence
        .iter()
        .enumerate()
        .map(|(i, item)| item_entry(i, item))
        .collect();

    json!({
        "payload_type": "RoundSetup",
        "user_id": user_id,
        "tier": setup.tier.to_string(),
        "memorize_secs": setup.memorize_secs,
        "item_count": setup.sequence.len(),
        "items": items,
    })
}

/// Payload for the results screen after scoring.
pub fn round_result_payload(
    setup: &RoundSetup,
    outcome: &RoundOutcome,
    user_id: u64,
) -> Value {
    json!({
        "payload_type": "RoundResult",
        "user_id": user_id,
        "tier": setup.tier.to_string(),
        "correct": outcome.correct,
        "total": outcome.total,
        "success_rate": outcome.success_rate,
        "score": outcome.score,
        "tier_change": outcome.tier_change.map(|t| t.to_string()),
        "expected": setup
            .sequence
            .iter()
            .map(|i| i.to_string())
            .collect::<Vec<_>>(),
    })
}
