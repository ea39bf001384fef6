use crate::scoring::bonus::BonusRule;
use crate::scoring::rules::ScoringRule;
use crate::scoring::scoresheet::{Scoresheet, SheetError};

pub const NAME_ACES: &str = "Aces (Ones)";
pub const NAME_TWOS: &str = "Twos";
pub const NAME_THREES: &str = "Threes";
pub const NAME_FOURS: &str = "Fours";
pub const NAME_FIVES: &str = "Fives";
pub const NAME_SIXES: &str = "Sixes";
pub const NAME_THREE_OF_A_KIND: &str = "Three of a Kind";
pub const NAME_FOUR_OF_A_KIND: &str = "Four of a Kind";
pub const NAME_FULL_HOUSE: &str = "Full House (Two of a Kind and Three of a Kind)";
pub const NAME_SMALL_STRAIGHT: &str = "Small Straight (Four in a Row)";
pub const NAME_LARGE_STRAIGHT: &str = "Large Straight (Five in a Row)";
pub const NAME_YAHTZEE: &str = "YAHTZEE (Five of a Kind)";
pub const NAME_CHANCE: &str = "Chance (Any Five Dice)";
pub const NAME_UPPER_BONUS: &str = "Upper Section Bonus";
pub const NAME_YAHTZEE_BONUS: &str = "Yahtzee Bonus";

const UPPER_NAMES: [(&str, u8); 6] = [
    (NAME_ACES, 1),
    (NAME_TWOS, 2),
    (NAME_THREES, 3),
    (NAME_FOURS, 4),
    (NAME_FIVES, 5),
    (NAME_SIXES, 6),
];

/// Immutable sheet template. Each [`SheetSpec::build`] call stamps out a
/// fresh, fully owned [`Scoresheet`], so per-player sheets never alias.
#[derive(Debug, Clone)]
pub struct SheetSpec {
    rules: Vec<ScoringRule>,
    bonuses: Vec<BonusRule>,
    yahtzee_bonus: BonusRule,
}

impl SheetSpec {
    pub fn new(
        rules: Vec<ScoringRule>,
        bonuses: Vec<BonusRule>,
        yahtzee_bonus: BonusRule,
    ) -> Self {
        Self {
            rules,
            bonuses,
            yahtzee_bonus,
        }
    }

    /// The classic thirteen-rule Yahtzee sheet: upper multiples for faces
    /// one through six feeding a 63/35 threshold bonus, the lower combo
    /// rules, and a 100-per-extra-Yahtzee count bonus.
    pub fn standard() -> Self {
        let mut rules = Vec::with_capacity(13);
        for (name, face_value) in UPPER_NAMES {
            rules.push(ScoringRule::multiples(name, face_value));
        }
        rules.push(ScoringRule::nofkind(NAME_THREE_OF_A_KIND, 3));
        rules.push(ScoringRule::nofkind(NAME_FOUR_OF_A_KIND, 4));
        rules.push(ScoringRule::full_house(NAME_FULL_HOUSE));
        rules.push(ScoringRule::small_straight(NAME_SMALL_STRAIGHT));
        rules.push(ScoringRule::large_straight(NAME_LARGE_STRAIGHT));
        rules.push(ScoringRule::yahtzee(NAME_YAHTZEE));
        rules.push(ScoringRule::chance(NAME_CHANCE));

        let upper_rule_names = UPPER_NAMES.map(|(name, _)| name.to_string()).to_vec();
        let bonuses = vec![BonusRule::threshold(NAME_UPPER_BONUS, upper_rule_names)];
        let yahtzee_bonus = BonusRule::yahtzee(NAME_YAHTZEE_BONUS, NAME_YAHTZEE);

        Self::new(rules, bonuses, yahtzee_bonus)
    }

    pub fn rules(&self) -> &[ScoringRule] {
        &self.rules
    }

    pub fn bonuses(&self) -> &[BonusRule] {
        &self.bonuses
    }

    pub fn yahtzee_bonus(&self) -> &BonusRule {
        &self.yahtzee_bonus
    }

    /// Stamps a fresh scoresheet from the template. Name validation runs
    /// on every build.
    pub fn build(&self) -> Result<Scoresheet, SheetError> {
        Scoresheet::new(
            self.rules.clone(),
            self.bonuses.clone(),
            self.yahtzee_bonus.clone(),
        )
    }
}

impl Default for SheetSpec {
    fn default() -> Self {
        Self::standard()
    }
}
