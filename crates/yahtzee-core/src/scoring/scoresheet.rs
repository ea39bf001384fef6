use crate::model::die::Die;
use crate::model::section::Section;
use crate::scoring::bonus::BonusRule;
use crate::scoring::rules::{ScoreError, ScoringRule};
use crate::scoring::validators;
use core::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SheetError {
    DuplicateNames(Vec<String>),
    UnknownRule(String),
    UnknownIndex(usize),
    Rule(ScoreError),
}

impl fmt::Display for SheetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SheetError::DuplicateNames(names) => {
                write!(f, "rules cannot share names, duplicates: {}", names.join(", "))
            }
            SheetError::UnknownRule(name) => write!(f, "no rule named {name}"),
            SheetError::UnknownIndex(index) => write!(f, "no rule at index {index}"),
            SheetError::Rule(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for SheetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SheetError::Rule(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ScoreError> for SheetError {
    fn from(err: ScoreError) -> Self {
        SheetError::Rule(err)
    }
}

/// One player's scoresheet: an ordered set of scoring rules, the bonuses
/// they feed, and the designated Yahtzee bonus. Structure is fixed at
/// construction; only score state changes afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Scoresheet {
    rules: Vec<ScoringRule>,
    bonuses: Vec<BonusRule>,
    yahtzee_bonus: BonusRule,
}

impl Scoresheet {
    /// Builds a sheet, rejecting any name collision across the rules,
    /// the bonuses, and the Yahtzee bonus (one shared namespace).
    pub fn new(
        rules: Vec<ScoringRule>,
        bonuses: Vec<BonusRule>,
        yahtzee_bonus: BonusRule,
    ) -> Result<Self, SheetError> {
        let mut names: Vec<&str> = rules.iter().map(ScoringRule::name).collect();
        names.extend(bonuses.iter().map(BonusRule::name));
        names.push(yahtzee_bonus.name());
        let duplicate_names = validators::duplicates(&names);
        if !duplicate_names.is_empty() {
            return Err(SheetError::DuplicateNames(
                duplicate_names.iter().map(|name| name.to_string()).collect(),
            ));
        }
        Ok(Self {
            rules,
            bonuses,
            yahtzee_bonus,
        })
    }

    /// Scores the named rule against the dice, then feeds the resulting
    /// points into every unscored bonus that depends on that rule.
    /// Returns the points just recorded.
    pub fn score_rule(&mut self, name: &str, dice: &[Die]) -> Result<u32, SheetError> {
        let rule = self
            .rules
            .iter_mut()
            .find(|rule| rule.name() == name)
            .ok_or_else(|| SheetError::UnknownRule(name.to_string()))?;
        let points = rule.score(dice)?;
        let rule_name = rule.name().to_string();
        for bonus in &mut self.bonuses {
            if bonus.is_scored() || !bonus.depends_on(&rule_name) {
                continue;
            }
            bonus.increment(points)?;
        }
        Ok(points)
    }

    /// One-based display-index variant of [`Scoresheet::score_rule`].
    pub fn score_rule_at(&mut self, index: usize, dice: &[Die]) -> Result<u32, SheetError> {
        let name = index
            .checked_sub(1)
            .and_then(|idx| self.rules.get(idx))
            .map(|rule| rule.name().to_string())
            .ok_or(SheetError::UnknownIndex(index))?;
        self.score_rule(&name, dice)
    }

    /// Scores a bonus (including the Yahtzee bonus) by name.
    pub fn score_bonus(&mut self, name: &str) -> Result<u32, SheetError> {
        if self.yahtzee_bonus.name() == name {
            return Ok(self.yahtzee_bonus.score()?);
        }
        let bonus = self
            .bonuses
            .iter_mut()
            .find(|bonus| bonus.name() == name)
            .ok_or_else(|| SheetError::UnknownRule(name.to_string()))?;
        Ok(bonus.score()?)
    }

    /// Credits additional Yahtzees to the designated Yahtzee bonus.
    pub fn add_yahtzee_bonus(&mut self, amt: u32) -> Result<(), SheetError> {
        Ok(self.yahtzee_bonus.increment(amt)?)
    }

    /// Sum of scored rule values in the section; unscored rules count as
    /// zero, so partial sheets have running subtotals.
    pub fn section_subtotal(&self, section: Section) -> u32 {
        self.rules
            .iter()
            .filter(|rule| rule.section() == section)
            .filter_map(ScoringRule::current_score)
            .sum()
    }

    /// Section subtotal plus every scored bonus in the section.
    pub fn section_total(&self, section: Section) -> u32 {
        let bonus_points: u32 = self
            .bonuses
            .iter()
            .chain(std::iter::once(&self.yahtzee_bonus))
            .filter(|bonus| bonus.section() == section)
            .filter_map(BonusRule::current_score)
            .sum();
        self.section_subtotal(section) + bonus_points
    }

    pub fn grand_total(&self) -> u32 {
        Section::LOOP
            .iter()
            .map(|&section| self.section_total(section))
            .sum()
    }

    pub fn rule(&self, name: &str) -> Option<&ScoringRule> {
        self.rules.iter().find(|rule| rule.name() == name)
    }

    pub fn rules(&self) -> &[ScoringRule] {
        &self.rules
    }

    pub fn bonuses(&self) -> &[BonusRule] {
        &self.bonuses
    }

    pub fn bonus(&self, name: &str) -> Option<&BonusRule> {
        if self.yahtzee_bonus.name() == name {
            return Some(&self.yahtzee_bonus);
        }
        self.bonuses.iter().find(|bonus| bonus.name() == name)
    }

    pub fn yahtzee_bonus(&self) -> &BonusRule {
        &self.yahtzee_bonus
    }

    pub(crate) fn rules_mut(&mut self) -> &mut [ScoringRule] {
        &mut self.rules
    }

    pub(crate) fn bonuses_mut(&mut self) -> &mut [BonusRule] {
        &mut self.bonuses
    }

    pub(crate) fn yahtzee_bonus_mut(&mut self) -> &mut BonusRule {
        &mut self.yahtzee_bonus
    }

    /// Tabular representation: per section, a title row, a column-header
    /// row, then one row per rule with its one-based display index, name,
    /// and score (blank until scored).
    pub fn rows(&self) -> Vec<Vec<String>> {
        let mut rows = Vec::new();
        for &section in &Section::LOOP {
            rows.push(vec![section.title().to_string()]);
            rows.push(vec![
                "Rule".to_string(),
                "Name".to_string(),
                "Scored".to_string(),
            ]);
            for (idx, rule) in self.rules.iter().enumerate() {
                if rule.section() != section {
                    continue;
                }
                let scored = rule
                    .current_score()
                    .map(|score| score.to_string())
                    .unwrap_or_default();
                rows.push(vec![(idx + 1).to_string(), rule.name().to_string(), scored]);
            }
        }
        rows
    }

    /// Fixed-width rendering of [`Scoresheet::rows`].
    pub fn render(&self) -> String {
        let rows = self.rows();
        let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
        let widths: Vec<usize> = (0..columns)
            .map(|col| {
                rows.iter()
                    .filter_map(|row| row.get(col))
                    .map(String::len)
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let mut out = String::new();
        for row in &rows {
            let mut line = String::new();
            for (col, cell) in row.iter().enumerate() {
                if col > 0 {
                    line.push_str("  ");
                }
                line.push_str(cell);
                if col + 1 < row.len() {
                    line.push_str(&" ".repeat(widths[col].saturating_sub(cell.len())));
                }
            }
            out.push_str(line.trim_end());
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::{Scoresheet, SheetError};
    use crate::model::die::Die;
    use crate::model::hand::Hand;
    use crate::model::section::Section;
    use crate::scoring::bonus::BonusRule;
    use crate::scoring::rules::{ScoreError, ScoringRule};

    fn dice(faces: &[u8]) -> Vec<Die> {
        Hand::from_faces(faces).unwrap().dice().to_vec()
    }

    fn small_sheet() -> Scoresheet {
        Scoresheet::new(
            vec![
                ScoringRule::chance("rule1").with_section(Section::Upper),
                ScoringRule::chance("rule2"),
            ],
            vec![BonusRule::threshold("bonus", vec!["rule1".to_string()])],
            BonusRule::yahtzee("yahtzee bonus", "rule2"),
        )
        .unwrap()
    }

    #[test]
    fn duplicate_names_are_rejected_with_the_offenders() {
        let result = Scoresheet::new(
            vec![ScoringRule::chance("rule"), ScoringRule::chance("rule")],
            Vec::new(),
            BonusRule::yahtzee("yahtzee bonus", "rule"),
        );
        assert_eq!(
            result.unwrap_err(),
            SheetError::DuplicateNames(vec!["rule".to_string()])
        );
    }

    #[test]
    fn bonus_names_share_the_rule_namespace() {
        let result = Scoresheet::new(
            vec![ScoringRule::chance("rule")],
            vec![BonusRule::count("rule")],
            BonusRule::yahtzee("yahtzee bonus", "rule"),
        );
        assert!(matches!(result, Err(SheetError::DuplicateNames(_))));
    }

    #[test]
    fn scoring_updates_one_rule_and_leaves_others_unscored() {
        let mut sheet = small_sheet();
        assert_eq!(sheet.score_rule("rule1", &dice(&[1, 2])), Ok(3));
        assert_eq!(sheet.rule("rule1").unwrap().current_score(), Some(3));
        assert_eq!(sheet.rule("rule2").unwrap().current_score(), None);
    }

    #[test]
    fn score_rule_at_uses_one_based_display_index() {
        let mut sheet = small_sheet();
        assert_eq!(sheet.score_rule_at(2, &dice(&[2, 3])), Ok(5));
        assert_eq!(sheet.rule("rule2").unwrap().current_score(), Some(5));
        assert_eq!(
            sheet.score_rule_at(0, &dice(&[1])),
            Err(SheetError::UnknownIndex(0))
        );
        assert_eq!(
            sheet.score_rule_at(3, &dice(&[1])),
            Err(SheetError::UnknownIndex(3))
        );
    }

    #[test]
    fn unknown_rule_name_is_an_error() {
        let mut sheet = small_sheet();
        assert_eq!(
            sheet.score_rule("nope", &dice(&[1])),
            Err(SheetError::UnknownRule("nope".to_string()))
        );
    }

    #[test]
    fn rescoring_propagates_already_scored() {
        let mut sheet = small_sheet();
        sheet.score_rule("rule1", &dice(&[1, 2])).unwrap();
        assert_eq!(
            sheet.score_rule("rule1", &dice(&[3, 4])),
            Err(SheetError::Rule(ScoreError::AlreadyScored {
                name: "rule1".to_string()
            }))
        );
        assert_eq!(sheet.rule("rule1").unwrap().current_score(), Some(3));
    }

    #[test]
    fn dependent_bonus_counter_tracks_rule_points() {
        let mut sheet = small_sheet();
        sheet.score_rule("rule1", &dice(&[2, 3])).unwrap();
        assert_eq!(sheet.bonus("bonus").unwrap().counter(), 5);
        assert_eq!(sheet.yahtzee_bonus().counter(), 0);
    }

    #[test]
    fn unrelated_rule_leaves_bonus_counter_alone() {
        let mut sheet = small_sheet();
        sheet.score_rule("rule2", &dice(&[6, 6])).unwrap();
        assert_eq!(sheet.bonus("bonus").unwrap().counter(), 0);
    }

    #[test]
    fn scored_bonus_is_skipped_by_propagation() {
        let mut sheet = small_sheet();
        assert_eq!(sheet.score_bonus("bonus"), Ok(0));
        assert_eq!(sheet.score_rule("rule1", &dice(&[4, 4])), Ok(8));
        assert_eq!(sheet.bonus("bonus").unwrap().counter(), 0);
    }

    #[test]
    fn yahtzee_bonus_increments_directly() {
        let mut sheet = small_sheet();
        sheet.add_yahtzee_bonus(1).unwrap();
        sheet.add_yahtzee_bonus(1).unwrap();
        assert_eq!(sheet.yahtzee_bonus().counter(), 2);
        assert_eq!(sheet.score_bonus("yahtzee bonus"), Ok(200));
    }

    #[test]
    fn section_subtotal_treats_unscored_as_zero() {
        let mut sheet = Scoresheet::new(
            vec![
                ScoringRule::chance("u1").with_section(Section::Upper),
                ScoringRule::chance("u2").with_section(Section::Upper),
                ScoringRule::chance("l1"),
                ScoringRule::chance("l2"),
            ],
            Vec::new(),
            BonusRule::yahtzee("yahtzee bonus", "l1"),
        )
        .unwrap();
        sheet.score_rule("u1", &dice(&[2, 3])).unwrap();
        sheet.score_rule("l1", &dice(&[4, 6])).unwrap();
        assert_eq!(sheet.section_subtotal(Section::Upper), 5);
        assert_eq!(sheet.section_subtotal(Section::Lower), 10);
    }

    #[test]
    fn section_total_includes_scored_bonuses() {
        let mut sheet = small_sheet();
        sheet.score_rule("rule1", &dice(&[6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6])).unwrap();
        assert_eq!(sheet.section_subtotal(Section::Upper), 66);
        assert_eq!(sheet.score_bonus("bonus"), Ok(35));
        assert_eq!(sheet.section_total(Section::Upper), 101);

        sheet.add_yahtzee_bonus(1).unwrap();
        sheet.score_bonus("yahtzee bonus").unwrap();
        assert_eq!(sheet.section_total(Section::Lower), 100);
        assert_eq!(sheet.grand_total(), 201);
    }

    #[test]
    fn rows_group_rules_by_section_with_headers() {
        let mut sheet = small_sheet();
        sheet.score_rule("rule1", &dice(&[1, 2])).unwrap();
        let rows = sheet.rows();
        assert_eq!(rows[0], vec!["Upper Section".to_string()]);
        assert_eq!(
            rows[1],
            vec!["Rule".to_string(), "Name".to_string(), "Scored".to_string()]
        );
        assert_eq!(
            rows[2],
            vec!["1".to_string(), "rule1".to_string(), "3".to_string()]
        );
        assert_eq!(rows[3], vec!["Lower Section".to_string()]);
        assert_eq!(
            rows[5],
            vec!["2".to_string(), "rule2".to_string(), String::new()]
        );
    }

    #[test]
    fn render_contains_every_rule_name() {
        let sheet = small_sheet();
        let rendered = sheet.render();
        assert!(rendered.contains("Upper Section"));
        assert!(rendered.contains("Lower Section"));
        assert!(rendered.contains("rule1"));
        assert!(rendered.contains("rule2"));
    }
}
