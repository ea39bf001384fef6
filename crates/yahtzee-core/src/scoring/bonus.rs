use crate::model::section::Section;
use crate::scoring::rules::{ScoreError, ScoreState};

pub const BONUS_UPPER_THRESHOLD: u32 = 63;
pub const BONUS_UPPER_SCORE: u32 = 35;
pub const BONUS_YAHTZEE_SCORE: u32 = 100;

/// Counter-driven bonus variants. Bonuses never see dice: they score
/// purely from the accumulated counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BonusKind {
    /// Flat `bonus_value` once the counter reaches `threshold`.
    Threshold { threshold: u32, bonus_value: u32 },
    /// `counter * bonus_value`.
    Count { bonus_value: u32 },
}

impl BonusKind {
    fn points(self, counter: u32) -> u32 {
        match self {
            BonusKind::Threshold {
                threshold,
                bonus_value,
            } => {
                if counter >= threshold {
                    bonus_value
                } else {
                    0
                }
            }
            BonusKind::Count { bonus_value } => counter * bonus_value,
        }
    }
}

/// A bonus rule with the same once-only lifecycle as a scoring rule.
/// `req_rules` holds the names of the scoring rules whose points feed the
/// counter; the scoresheet resolves them, never object references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BonusRule {
    name: String,
    section: Section,
    kind: BonusKind,
    counter: u32,
    state: ScoreState,
    req_rules: Vec<String>,
    yahtzee_rule: Option<String>,
}

impl BonusRule {
    pub fn new(
        name: impl Into<String>,
        section: Section,
        kind: BonusKind,
        req_rules: Vec<String>,
    ) -> Self {
        Self {
            name: name.into(),
            section,
            kind,
            counter: 0,
            state: ScoreState::Unscored,
            req_rules,
            yahtzee_rule: None,
        }
    }

    /// Upper-section threshold bonus with the classic 63/35 values.
    pub fn threshold(name: impl Into<String>, req_rules: Vec<String>) -> Self {
        Self::new(
            name,
            Section::Upper,
            BonusKind::Threshold {
                threshold: BONUS_UPPER_THRESHOLD,
                bonus_value: BONUS_UPPER_SCORE,
            },
            req_rules,
        )
    }

    /// Lower-section count bonus with the classic 100-point multiplier.
    pub fn count(name: impl Into<String>) -> Self {
        Self::new(
            name,
            Section::Lower,
            BonusKind::Count {
                bonus_value: BONUS_YAHTZEE_SCORE,
            },
            Vec::new(),
        )
    }

    /// Count bonus tracking additional Yahtzees beyond the first. The
    /// linked rule name is informational (display/UX), not an increment
    /// trigger.
    pub fn yahtzee(name: impl Into<String>, yahtzee_rule: impl Into<String>) -> Self {
        let mut bonus = Self::count(name);
        bonus.yahtzee_rule = Some(yahtzee_rule.into());
        bonus
    }

    /// Adds to the counter. Rejected once the bonus has been scored; the
    /// counter never decreases.
    pub fn increment(&mut self, amt: u32) -> Result<(), ScoreError> {
        if self.state.is_scored() {
            return Err(ScoreError::AlreadyScored {
                name: self.name.clone(),
            });
        }
        self.counter += amt;
        Ok(())
    }

    /// Scores the bonus from its counter, storing and returning the
    /// points. Fails without mutation when already scored.
    pub fn score(&mut self) -> Result<u32, ScoreError> {
        if self.state.is_scored() {
            return Err(ScoreError::AlreadyScored {
                name: self.name.clone(),
            });
        }
        let points = self.kind.points(self.counter);
        self.state = ScoreState::Scored(points);
        Ok(points)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn section(&self) -> Section {
        self.section
    }

    pub fn kind(&self) -> BonusKind {
        self.kind
    }

    pub fn counter(&self) -> u32 {
        self.counter
    }

    pub fn current_score(&self) -> Option<u32> {
        self.state.value()
    }

    pub fn is_scored(&self) -> bool {
        self.state.is_scored()
    }

    pub fn req_rules(&self) -> &[String] {
        &self.req_rules
    }

    pub fn depends_on(&self, rule_name: &str) -> bool {
        self.req_rules.iter().any(|name| name == rule_name)
    }

    pub fn yahtzee_rule(&self) -> Option<&str> {
        self.yahtzee_rule.as_deref()
    }

    pub(crate) fn restore_state(&mut self, counter: u32, score: Option<u32>) {
        self.counter = counter;
        self.state = match score {
            Some(value) => ScoreState::Scored(value),
            None => ScoreState::Unscored,
        };
    }
}
