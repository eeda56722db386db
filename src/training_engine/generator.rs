//! Difficulty-driven sequence generation.
//!
//! The composition policy is encoded as explicit ordered band tables of
//! `(upper bound, category)` pairs rather than nested conditionals, so the
//! per-tier probability split can be unit-tested without an RNG.

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::training_engine::{
    models::{DifficultyParams, DifficultyTier, ParamsTable, TaskItem, TrainingRequest},
    values,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Category {
    Number,
    Symbol,
    Word,
}

/// Mixed-mode bands for EASY: 40% number, 30% symbol, 30% word.
/// EASY is the only tier that ever emits symbols in mixed mode.
const MIXED_BANDS_EASY: &[(f32, Category)] = &[
    (0.4, Category::Number),
    (0.7, Category::Symbol),
    (1.0, Category::Word),
];

/// Mixed-mode bands for MEDIUM/HARD: even split between numbers and words.
const MIXED_BANDS_UPPER: &[(f32, Category)] = &[
    (0.5, Category::Number),
    (1.0, Category::Word),
];

fn mixed_bands(tier: DifficultyTier) -> &'static [(f32, Category)] {
    match tier {
        DifficultyTier::Easy => MIXED_BANDS_EASY,
        DifficultyTier::Medium | DifficultyTier::Hard => MIXED_BANDS_UPPER,
    }
}

/// Resolve a uniform [0, 1) roll against an ordered band table.
fn pick_category(bands: &[(f32, Category)], roll: f32) -> Category {
    for &(upper, category) in bands {
        if roll < upper {
            return category;
        }
    }
    // Unreachable for roll < 1.0 with a well-formed table; the last band
    // absorbs any rounding artifact.
    bands[bands.len() - 1].1
}

/// A number position re-rolls its kind uniformly among the three numerics.
fn number_item<R: Rng>(rng: &mut R) -> TaskItem {
    match rng.gen_range(0..3u8) {
        0 => TaskItem::SmallInt(values::small_int(rng)),
        1 => TaskItem::LargeInt(values::large_int(rng)),
        _ => TaskItem::Float(values::float(rng)),
    }
}

fn item_for<R: Rng>(rng: &mut R, category: Category) -> TaskItem {
    match category {
        Category::Number => number_item(rng),
        Category::Symbol => TaskItem::Symbol(values::symbol(rng)),
        Category::Word   => TaskItem::Word(values::word(rng).to_string()),
    }
}

fn number_sequence<R: Rng>(rng: &mut R, length: usize) -> Vec<TaskItem> {
    (0..length).map(|_| number_item(rng)).collect()
}

fn symbol_sequence<R: Rng>(rng: &mut R, length: usize) -> Vec<TaskItem> {
    (0..length)
        .map(|_| TaskItem::Symbol(values::symbol(rng)))
        .collect()
}

fn word_sequence<R: Rng>(rng: &mut R, length: usize) -> Vec<TaskItem> {
    (0..length)
        .map(|_| TaskItem::Word(values::word(rng).to_string()))
        .collect()
}

/// Generate one memorization sequence for `tier` using `params`.
///
/// `requested_length` is clamped into `[min_length, max_length]`; the result
/// always has exactly the clamped length. Generation is total — no error
/// path exists once the params table has been validated.
pub fn generate_sequence<R: Rng>(
    rng: &mut R,
    params: &DifficultyParams,
    tier: DifficultyTier,
    requested_length: usize,
) -> Vec<TaskItem> {
    let length = requested_length.clamp(params.min_length, params.max_length);

    // Mixed composition: one coin flip, then a banded roll per position.
    if params.mixed_types && rng.gen::<f32>() > 0.5 {
        let bands = mixed_bands(tier);
        return (0..length)
            .map(|_| {
                let roll: f32 = rng.gen();
                item_for(rng, pick_category(bands, roll))
            })
            .collect();
    }

    // Homogeneous composition.
    if rng.gen::<f32>() < params.float_probability {
        return number_sequence(rng, length);
    }
    match tier {
        DifficultyTier::Easy => {
            // 60/40 split between a symbol run and a word run.
            if rng.gen::<f32>() < 0.6 {
                symbol_sequence(rng, length)
            } else {
                word_sequence(rng, length)
            }
        }
        DifficultyTier::Medium | DifficultyTier::Hard => word_sequence(rng, length),
    }
}

/// Entry point used by callers that hold a [`TrainingRequest`].
///
/// Builds a `StdRng` from the request's seed (entropy when absent) and
/// delegates to [`generate_sequence`].
pub fn generate(table: &ParamsTable, request: &TrainingRequest) -> Vec<TaskItem> {
    let mut rng: StdRng = match request.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    };
    generate_sequence(
        &mut rng,
        table.get(request.tier),
        request.tier,
        request.requested_length,
    )
}
