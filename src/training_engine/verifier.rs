//! Type-polymorphic answer verification.
//!
//! Scoring is position-for-position against the expected sequence. Every
//! matching rule is total: malformed tokens count as incorrect, they never
//! surface as errors.

use crate::training_engine::models::TaskItem;

/// Maximum absolute difference for a float answer to be accepted.
pub const FLOAT_EPSILON: f32 = 0.01;

/// Split one line of raw input into answer tokens on whitespace.
pub fn split_answer_line(line: &str) -> Vec<String> {
    line.split_whitespace().map(str::to_string).collect()
}

/// Count positions where the answer token matches the expected item.
///
/// Missing or extra trailing tokens are simply incorrect; the count is
/// bounded by `min(expected.len(), answers.len())`.
pub fn score_answers(expected: &[TaskItem], answers: &[String]) -> usize {
    expected
        .iter()
        .enumerate()
        .filter(|(i, item)| {
            answers
                .get(*i)
                .is_some_and(|token| !token.is_empty() && matches(item, token))
        })
        .count()
}

/// Per-kind matching rule.
fn matches(item: &TaskItem, token: &str) -> bool {
    match item {
        // Words are exact and case-sensitive.
        TaskItem::Word(w) => w == token,

        // Symbols compare the first character, case-insensitively.
        TaskItem::Symbol(c) => token
            .chars()
            .next()
            .is_some_and(|t| t.to_ascii_lowercase() == c.to_ascii_lowercase()),

        // Integers must parse and match exactly.
        TaskItem::SmallInt(v) => token.parse::<i64>().is_ok_and(|t| t == i64::from(*v)),
        TaskItem::LargeInt(v) => token.parse::<i64>().is_ok_and(|t| t == i64::from(*v)),

        // Floats match exactly or within epsilon.
        TaskItem::Float(v) => token
            .parse::<f32>()
            .is_ok_and(|t| t == *v || (t - v).abs() < FLOAT_EPSILON),
    }
}
