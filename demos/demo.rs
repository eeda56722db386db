//! End-to-end demo of the memory-training engine.
//!
//! Run with: `cargo run --example demo`
//!
//! This example shows how `memory_drill_gen` works end to end:
//!
//! 1. **Raw generation** — one sequence per tier with fixed seeds, so the
//!    output is deterministic and reproducible.
//! 2. **A full round** — a registered user plays three rounds through
//!    `TrainingSession` with simulated answers (perfect, partial, blank),
//!    demonstrating scoring, tier promotion, and demotion.
//! 3. **Leaderboard and history** — what the in-memory store accumulates.
//!
//! ## Key concepts demonstrated
//!
//! - `TrainingRequest::new(tier)` — minimal constructor; everything defaults.
//! - `rng_seed: Some(u64)` makes the output fully deterministic.
//! - Verification is total: sloppy input ("Q" for 'q', 3.141 for 3.140) still
//!   counts where the per-type tolerance allows it.

use memory_drill_gen::{
    generate, score_answers, split_answer_line, DifficultyTier, MemoryStore,
    ParamsTable, TrainingRequest, TrainingSession,
};

fn show_sequences() {
    let table = ParamsTable::default();
    println!("══ Generation per tier (seeded) ══");
    for tier in DifficultyTier::all() {
        let seq = generate(&table, &TrainingRequest {
            tier,
            requested_length: 0,
            rng_seed: Some(42),
        });
        let rendered: Vec<String> = seq.iter().map(|i| i.to_string()).collect();
        println!("  {tier:<7} ({} items): {}", seq.len(), rendered.join(" "));
    }
    println!();
}

fn play_round(
    session: &mut TrainingSession<MemoryStore>,
    user: u64,
    seed: u64,
    answer_line: impl Fn(&[String]) -> String,
) {
    let setup = session.begin_round(user, Some(seed));
    let shown: Vec<String> = setup.sequence.iter().map(|i| i.to_string()).collect();
    println!("  Tier {} — remember for {}s: {}", setup.tier, setup.memorize_secs, shown.join(" "));

    let line = answer_line(&shown);
    println!("  Player types: {:?}", line);
    let tokens = split_answer_line(&line);
    let outcome = session.complete_round(user, &setup, &tokens);

    println!(
        "  → {}/{} correct ({:.0}%), score {}{}",
        outcome.correct,
        outcome.total,
        outcome.success_rate * 100.0,
        outcome.score,
        match outcome.tier_change {
            Some(t) => format!(", tier now {t}"),
            None    => String::new(),
        }
    );
    println!();
}

fn main() {
    show_sequences();

    println!("══ A training session ══");
    let mut session = TrainingSession::new(MemoryStore::new());
    let ada = session.store_mut().register("ada");
    let bob = session.store_mut().register("bob");

    // Perfect recall: promoted from EASY.
    play_round(&mut session, ada, 7, |shown| shown.join(" "));
    // Half remembered at MEDIUM: stays put.
    play_round(&mut session, ada, 8, |shown| {
        shown[..shown.len() / 2].join(" ")
    });
    // Blank line: demoted back to EASY.
    play_round(&mut session, ada, 9, |_| String::new());

    // Bob plays once, perfectly.
    play_round(&mut session, bob, 11, |shown| shown.join(" "));

    println!("══ Leaderboard ══");
    for (rank, (name, score)) in session.store().leaderboard(10).iter().enumerate() {
        println!("  {}. {name} — {score}", rank + 1);
    }
    println!();

    println!("══ Ada's history (most recent first) ══");
    for record in session.store().history(ada).expect("ada is registered") {
        println!(
            "  {} items, {:.0}% success",
            record.sequence_length,
            record.success_rate * 100.0
        );
    }

    // Sanity: the verifier is usable standalone too.
    let table = ParamsTable::default();
    let seq = generate(&table, &TrainingRequest::new(DifficultyTier::Easy));
    let correct = score_answers(&seq, &[]);
    assert_eq!(correct, 0);
}
