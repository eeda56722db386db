use std::fmt;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Sequence item primitives
// ---------------------------------------------------------------------------

/// One position of a memorization sequence.
///
/// A closed variant over the five item kinds the trainer can show. Items are
/// immutable once generated and owned by the sequence that contains them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TaskItem {
    /// Non-negative integer in the u16 range (at most 5 decimal digits).
    SmallInt(u16),
    /// Wider non-negative integer, still capped at 5 decimal digits.
    LargeInt(u32),
    /// Value in [0, 10], rounded to 3 decimal places.
    Float(f32),
    /// Single case-sensitive letter, A-Z or a-z.
    Symbol(char),
    /// One entry from the fixed dictionary.
    Word(String),
}

impl TaskItem {
    /// Kind name used in logs and the client payload.
    pub fn kind(&self) -> &'static str {
        match self {
            TaskItem::SmallInt(_) => "small_int",
            TaskItem::LargeInt(_) => "large_int",
            TaskItem::Float(_)    => "float",
            TaskItem::Symbol(_)   => "symbol",
            TaskItem::Word(_)     => "word",
        }
    }

    pub fn is_number(&self) -> bool {
        matches!(
            self,
            TaskItem::SmallInt(_) | TaskItem::LargeInt(_) | TaskItem::Float(_)
        )
    }
}

impl fmt::Display for TaskItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskItem::SmallInt(v) => write!(f, "{v}"),
            TaskItem::LargeInt(v) => write!(f, "{v}"),
            TaskItem::Float(v)    => write!(f, "{v:.3}"),
            TaskItem::Symbol(c)   => write!(f, "{c}"),
            TaskItem::Word(w)     => write!(f, "{w}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Difficulty
// ---------------------------------------------------------------------------

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum DifficultyTier {
    Easy,
    Medium,
    Hard,
}

impl DifficultyTier {
    /// Zero-based tier index: Easy=0, Medium=1, Hard=2. The scoring weight
    /// and the params table are keyed off this.
    pub fn index(self) -> usize {
        match self {
            DifficultyTier::Easy   => 0,
            DifficultyTier::Medium => 1,
            DifficultyTier::Hard   => 2,
        }
    }

    /// One step up, saturating at Hard.
    pub fn harder(self) -> DifficultyTier {
        match self {
            DifficultyTier::Easy   => DifficultyTier::Medium,
            DifficultyTier::Medium => DifficultyTier::Hard,
            DifficultyTier::Hard   => DifficultyTier::Hard,
        }
    }

    /// One step down, saturating at Easy.
    pub fn easier(self) -> DifficultyTier {
        match self {
            DifficultyTier::Easy   => DifficultyTier::Easy,
            DifficultyTier::Medium => DifficultyTier::Easy,
            DifficultyTier::Hard   => DifficultyTier::Medium,
        }
    }

    pub fn all() -> [DifficultyTier; 3] {
        [
            DifficultyTier::Easy,
            DifficultyTier::Medium,
            DifficultyTier::Hard,
        ]
    }
}

impl fmt::Display for DifficultyTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DifficultyTier::Easy   => write!(f, "EASY"),
            DifficultyTier::Medium => write!(f, "MEDIUM"),
            DifficultyTier::Hard   => write!(f, "HARD"),
        }
    }
}

/// Per-tier generation parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DifficultyParams {
    pub min_length: usize,
    pub max_length: usize,
    /// Chance that a homogeneous roll produces a pure number sequence.
    pub float_probability: f32,
    /// Whether heterogeneous composition is permitted at all.
    pub mixed_types: bool,
}

impl DifficultyParams {
    fn validate(&self, tier: DifficultyTier) -> Result<(), ConfigError> {
        if self.min_length == 0 || self.max_length == 0 {
            return Err(ConfigError::ZeroLength(tier));
        }
        if self.min_length > self.max_length {
            return Err(ConfigError::LengthBounds {
                tier,
                min: self.min_length,
                max: self.max_length,
            });
        }
        if !(0.0..=1.0).contains(&self.float_probability) {
            return Err(ConfigError::Probability {
                tier,
                value: self.float_probability,
            });
        }
        Ok(())
    }
}

/// One `DifficultyParams` per tier, validated at construction.
///
/// Invalid tables are a configuration error and are rejected up front —
/// generation itself never fails.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParamsTable([DifficultyParams; 3]);

impl ParamsTable {
    pub fn new(params: [DifficultyParams; 3]) -> Result<Self, ConfigError> {
        for (tier, p) in DifficultyTier::all().iter().zip(params.iter()) {
            p.validate(*tier)?;
        }
        Ok(ParamsTable(params))
    }

    pub fn get(&self, tier: DifficultyTier) -> &DifficultyParams {
        &self.0[tier.index()]
    }
}

impl Default for ParamsTable {
    fn default() -> Self {
        // Canonical table: only EASY mixes types.
        ParamsTable([
            DifficultyParams { min_length: 3, max_length: 4, float_probability: 0.2, mixed_types: true },
            DifficultyParams { min_length: 5, max_length: 6, float_probability: 0.3, mixed_types: false },
            DifficultyParams { min_length: 6, max_length: 8, float_probability: 0.3, mixed_types: false },
        ])
    }
}

/// Invalid difficulty configuration. Fatal at startup, never mid-round.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{tier}: min_length {min} exceeds max_length {max}")]
    LengthBounds {
        tier: DifficultyTier,
        min: usize,
        max: usize,
    },
    #[error("{0}: sequence length bounds must be positive")]
    ZeroLength(DifficultyTier),
    #[error("{tier}: float_probability {value} is outside [0, 1]")]
    Probability { tier: DifficultyTier, value: f32 },
}

// ---------------------------------------------------------------------------
// Request / round types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingRequest {
    pub tier: DifficultyTier,
    /// Desired sequence length; clamped into the tier's bounds, so 0 means
    /// "shortest the tier allows".
    pub requested_length: usize,
    /// Fixed seed reproduces the exact same sequence. `None` draws entropy.
    pub rng_seed: Option<u64>,
}

impl TrainingRequest {
    /// Minimal constructor: shortest sequence for `tier`, entropy seed.
    pub fn new(tier: DifficultyTier) -> Self {
        TrainingRequest {
            tier,
            requested_length: 0,
            rng_seed: None,
        }
    }
}

/// Everything the caller needs to run the memorization phase of one round.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundSetup {
    pub tier: DifficultyTier,
    pub sequence: Vec<TaskItem>,
    /// Display budget for the memorization countdown, in seconds.
    pub memorize_secs: u64,
}

/// Result of scoring one round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundOutcome {
    pub correct: usize,
    pub total: usize,
    /// `correct / total`, in [0, 1].
    pub success_rate: f32,
    pub score: u32,
    /// Set when the success rate crossed a promotion/demotion threshold.
    pub tier_change: Option<DifficultyTier>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_is_valid() {
        let table = ParamsTable::default();
        for tier in DifficultyTier::all() {
            let p = table.get(tier);
            assert!(p.min_length <= p.max_length);
            assert!((0.0..=1.0).contains(&p.float_probability));
        }
        assert!(table.get(DifficultyTier::Easy).mixed_types);
        assert!(!table.get(DifficultyTier::Hard).mixed_types);
    }

    #[test]
    fn inverted_length_bounds_are_rejected() {
        let mut params = [*ParamsTable::default().get(DifficultyTier::Easy); 3];
        params[1].min_length = 9;
        params[1].max_length = 5;
        let err = ParamsTable::new(params).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::LengthBounds { tier: DifficultyTier::Medium, min: 9, max: 5 }
        ));
    }

    #[test]
    fn zero_length_and_bad_probability_are_rejected() {
        let base = *ParamsTable::default().get(DifficultyTier::Easy);

        let mut params = [base; 3];
        params[0].min_length = 0;
        assert!(matches!(
            ParamsTable::new(params),
            Err(ConfigError::ZeroLength(DifficultyTier::Easy))
        ));

        let mut params = [base; 3];
        params[2].float_probability = 1.5;
        assert!(matches!(
            ParamsTable::new(params),
            Err(ConfigError::Probability { tier: DifficultyTier::Hard, .. })
        ));
    }

    #[test]
    fn tier_steps_saturate_at_the_ends() {
        assert_eq!(DifficultyTier::Hard.harder(), DifficultyTier::Hard);
        assert_eq!(DifficultyTier::Easy.easier(), DifficultyTier::Easy);
        assert_eq!(DifficultyTier::Easy.harder(), DifficultyTier::Medium);
        assert_eq!(DifficultyTier::Hard.easier(), DifficultyTier::Medium);
    }

    #[test]
    fn float_items_display_with_three_decimals() {
        assert_eq!(TaskItem::Float(3.14).to_string(), "3.140");
        assert_eq!(TaskItem::Word("kiwi".into()).to_string(), "kiwi");
        assert_eq!(TaskItem::Symbol('Q').to_string(), "Q");
    }
}
