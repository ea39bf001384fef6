use crate::model::die::Die;
use crate::model::section::Section;
use crate::scoring::validators;
use crate::scoring::validators::RuleParameterError;
use core::fmt;

pub const SCORE_FULL_HOUSE: u32 = 25;
pub const SCORE_SMALL_STRAIGHT: u32 = 30;
pub const SCORE_LARGE_STRAIGHT: u32 = 40;
pub const SCORE_YAHTZEE: u32 = 50;

/// Once-only scoring lifecycle shared by rules and bonuses.
/// There is no transition out of `Scored`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreState {
    Unscored,
    Scored(u32),
}

impl ScoreState {
    pub const fn value(self) -> Option<u32> {
        match self {
            ScoreState::Unscored => None,
            ScoreState::Scored(value) => Some(value),
        }
    }

    pub const fn is_scored(self) -> bool {
        matches!(self, ScoreState::Scored(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScoreError {
    AlreadyScored { name: String },
}

impl fmt::Display for ScoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreError::AlreadyScored { name } => {
                write!(f, "rule {name} has already been scored")
            }
        }
    }
}

impl std::error::Error for ScoreError {}

/// The closed set of scoring-rule variants. Each pairs a validation
/// predicate with a point computation; the shared score-or-zero control
/// flow lives in [`ScoringRule::score`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    /// Always valid; points are the sum of all showing faces.
    Chance,
    /// Always valid; points are `face_value` times the matching dice.
    Multiples { face_value: u8 },
    /// Valid when at least `n` dice share a face; points are the sum of
    /// all showing faces unless a fixed override is set.
    NofKind { n: usize, override_score: Option<u32> },
    /// Valid when every showing face matches (all-dice n-of-a-kind).
    Yahtzee { score_value: u32 },
    /// Valid per the exact-count full house test.
    FullHouse {
        large_n: usize,
        small_n: usize,
        score_value: u32,
    },
    LargeStraight { score_value: u32 },
    SmallStraight { score_value: u32 },
}

impl RuleKind {
    fn validate(self, dice: &[Die]) -> bool {
        match self {
            RuleKind::Chance | RuleKind::Multiples { .. } => true,
            RuleKind::NofKind { n, .. } => {
                let count = validators::showing_faces(dice).count();
                (n..=count).any(|m| validators::has_exact_nofkind(dice, m))
            }
            // Measured against the whole dice sequence: a blank die can
            // never contribute to the n-of-a-kind, so a blank-padded
            // hand is not a Yahtzee.
            RuleKind::Yahtzee { .. } => {
                !dice.is_empty() && validators::has_exact_nofkind(dice, dice.len())
            }
            // Parameter order is checked at rule construction, so the
            // error arm is unreachable here.
            RuleKind::FullHouse {
                large_n, small_n, ..
            } => validators::is_full_house(dice, large_n, small_n).unwrap_or(false),
            RuleKind::LargeStraight { .. } => validators::is_large_straight(dice),
            RuleKind::SmallStraight { .. } => validators::is_small_straight(dice),
        }
    }

    fn points(self, dice: &[Die]) -> u32 {
        match self {
            RuleKind::Chance => validators::face_sum(dice),
            RuleKind::Multiples { face_value } => {
                let count = validators::matching_faces(dice, face_value).len() as u32;
                u32::from(face_value) * count
            }
            RuleKind::NofKind { override_score, .. } => {
                override_score.unwrap_or_else(|| validators::face_sum(dice))
            }
            RuleKind::Yahtzee { score_value }
            | RuleKind::FullHouse { score_value, .. }
            | RuleKind::LargeStraight { score_value }
            | RuleKind::SmallStraight { score_value } => score_value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoringRule {
    name: String,
    section: Section,
    kind: RuleKind,
    state: ScoreState,
}

impl ScoringRule {
    pub fn new(
        name: impl Into<String>,
        section: Section,
        kind: RuleKind,
    ) -> Result<Self, RuleParameterError> {
        if let RuleKind::FullHouse {
            large_n, small_n, ..
        } = kind
        {
            if small_n >= large_n {
                return Err(RuleParameterError::FullHouseOrder { large_n, small_n });
            }
        }
        Ok(Self {
            name: name.into(),
            section,
            kind,
            state: ScoreState::Unscored,
        })
    }

    pub fn chance(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            section: Section::Lower,
            kind: RuleKind::Chance,
            state: ScoreState::Unscored,
        }
    }

    pub fn multiples(name: impl Into<String>, face_value: u8) -> Self {
        Self {
            name: name.into(),
            section: Section::Upper,
            kind: RuleKind::Multiples { face_value },
            state: ScoreState::Unscored,
        }
    }

    pub fn nofkind(name: impl Into<String>, n: usize) -> Self {
        Self {
            name: name.into(),
            section: Section::Lower,
            kind: RuleKind::NofKind {
                n,
                override_score: None,
            },
            state: ScoreState::Unscored,
        }
    }

    pub fn nofkind_with_override(name: impl Into<String>, n: usize, score_value: u32) -> Self {
        Self {
            name: name.into(),
            section: Section::Lower,
            kind: RuleKind::NofKind {
                n,
                override_score: Some(score_value),
            },
            state: ScoreState::Unscored,
        }
    }

    pub fn yahtzee(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            section: Section::Lower,
            kind: RuleKind::Yahtzee {
                score_value: SCORE_YAHTZEE,
            },
            state: ScoreState::Unscored,
        }
    }

    pub fn full_house(name: impl Into<String>) -> Self {
        // Default 3-over-2 parameters always satisfy the order check.
        Self {
            name: name.into(),
            section: Section::Lower,
            kind: RuleKind::FullHouse {
                large_n: 3,
                small_n: 2,
                score_value: SCORE_FULL_HOUSE,
            },
            state: ScoreState::Unscored,
        }
    }

    pub fn full_house_with(
        name: impl Into<String>,
        large_n: usize,
        small_n: usize,
        score_value: u32,
    ) -> Result<Self, RuleParameterError> {
        Self::new(
            name,
            Section::Lower,
            RuleKind::FullHouse {
                large_n,
                small_n,
                score_value,
            },
        )
    }

    pub fn large_straight(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            section: Section::Lower,
            kind: RuleKind::LargeStraight {
                score_value: SCORE_LARGE_STRAIGHT,
            },
            state: ScoreState::Unscored,
        }
    }

    pub fn small_straight(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            section: Section::Lower,
            kind: RuleKind::SmallStraight {
                score_value: SCORE_SMALL_STRAIGHT,
            },
            state: ScoreState::Unscored,
        }
    }

    pub fn with_section(mut self, section: Section) -> Self {
        self.section = section;
        self
    }

    /// Scores the rule against the given dice, storing and returning the
    /// points: the kind's point value when its pattern validates, zero
    /// otherwise. Fails without mutation when already scored.
    pub fn score(&mut self, dice: &[Die]) -> Result<u32, ScoreError> {
        if self.state.is_scored() {
            return Err(ScoreError::AlreadyScored {
                name: self.name.clone(),
            });
        }
        let points = if self.kind.validate(dice) {
            self.kind.points(dice)
        } else {
            0
        };
        self.state = ScoreState::Scored(points);
        Ok(points)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn section(&self) -> Section {
        self.section
    }

    pub fn kind(&self) -> RuleKind {
        self.kind
    }

    pub fn current_score(&self) -> Option<u32> {
        self.state.value()
    }

    pub fn is_scored(&self) -> bool {
        self.state.is_scored()
    }

    pub(crate) fn restore_score(&mut self, score: Option<u32>) {
        self.state = match score {
            Some(value) => ScoreState::Scored(value),
            None => ScoreState::Unscored,
        };
    }
}
