//! Primitive value generators: bounded integers, floats, symbols, words.
//!
//! Stateless draws from a caller-supplied RNG. Nothing here can fail — every
//! generator is total over its configured range. Pass a seeded `StdRng` for
//! reproducible output.

use rand::Rng;

/// Integers shown to the player never exceed 5 decimal digits.
const DIGIT_CAP: u32 = 99_999;

/// The 52-letter symbol alphabet, uppercase first.
pub const SYMBOLS: [char; 52] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J',
    'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S', 'T',
    'U', 'V', 'W', 'X', 'Y', 'Z',
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j',
    'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's', 't',
    'u', 'v', 'w', 'x', 'y', 'z',
];

/// Fixed 100-word dictionary: gym equipment, programming terms, fruits,
/// pantry staples. Short, common words that are fair to retype from memory.
pub const WORDS: [&str; 100] = [
    "treadmill", "dumbbell", "barbell", "squat", "deadlift",
    "benchpress", "pullup", "pushup", "plank", "crunch",
    "kettlebell", "rower", "elliptical", "protein", "creatine",
    "gymbag", "headband", "wristwrap", "lift", "rep",
    "set", "cardio", "flex", "pump", "spotter",
    "variable", "function", "loop", "array", "pointer",
    "class", "object", "template", "lambda", "algorithm",
    "compile", "debug", "syntax", "boolean", "integer",
    "string", "vector", "hash", "queue", "stack",
    "binary", "recursion", "iterator", "namespace", "inheritance",
    "apple", "banana", "cherry", "date", "elderberry",
    "fig", "grape", "honeydew", "kiwi", "lemon",
    "mango", "nectarine", "orange", "peach", "quince",
    "raspberry", "strawberry", "tangerine", "ugli", "vanilla",
    "watermelon", "xigua", "yam", "zucchini", "almond",
    "bread", "cheese", "dough", "egg", "flour",
    "garlic", "honey", "ice", "jam", "kale",
    "lentil", "milk", "nut", "olive", "pepper",
    "quinoa", "rice", "salt", "tomato", "vinegar",
    "wheat", "yogurt", "zest", "butter", "cinnamon",
];

/// Uniform u16 in `[0, min(u16::MAX, 99999)]`. The digit cap is a no-op for
/// u16 but kept so both integer generators share the same contract.
pub fn small_int<R: Rng>(rng: &mut R) -> u16 {
    let max = u32::from(u16::MAX).min(DIGIT_CAP) as u16;
    rng.gen_range(0..=max)
}

/// Uniform u32 in `[0, 99999]`.
pub fn large_int<R: Rng>(rng: &mut R) -> u32 {
    rng.gen_range(0..=DIGIT_CAP)
}

/// Uniform f32 in `[0, 10]`, rounded to 3 decimal places.
pub fn float<R: Rng>(rng: &mut R) -> f32 {
    let raw: f32 = rng.gen_range(0.0..=10.0);
    (raw * 1000.0).round() / 1000.0
}

/// Uniform draw from the 52-letter alphabet.
pub fn symbol<R: Rng>(rng: &mut R) -> char {
    SYMBOLS[rng.gen_range(0..SYMBOLS.len())]
}

/// Uniform draw from the dictionary.
pub fn word<R: Rng>(rng: &mut R) -> &'static str {
    WORDS[rng.gen_range(0..WORDS.len())]
}
