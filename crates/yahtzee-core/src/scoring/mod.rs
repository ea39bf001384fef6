pub mod bonus;
pub mod defaults;
pub mod rules;
pub mod scoresheet;
pub mod serialization;
pub mod validators;

pub use bonus::{
    BONUS_UPPER_SCORE, BONUS_UPPER_THRESHOLD, BONUS_YAHTZEE_SCORE, BonusKind, BonusRule,
};
pub use defaults::SheetSpec;
pub use rules::{
    RuleKind, SCORE_FULL_HOUSE, SCORE_LARGE_STRAIGHT, SCORE_SMALL_STRAIGHT, SCORE_YAHTZEE,
    ScoreError, ScoreState, ScoringRule,
};
pub use scoresheet::{Scoresheet, SheetError};
pub use serialization::SheetSnapshot;
pub use validators::RuleParameterError;
