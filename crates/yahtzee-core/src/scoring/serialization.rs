use crate::scoring::scoresheet::{Scoresheet, SheetError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RuleEntry {
    pub name: String,
    pub score: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BonusEntry {
    pub name: String,
    pub counter: u32,
    pub score: Option<u32>,
}

/// Score state of a sheet, detached from the rule definitions. Restoring
/// applies the captured state onto a sheet freshly built from the same
/// spec, matched by rule name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SheetSnapshot {
    pub rules: Vec<RuleEntry>,
    pub bonuses: Vec<BonusEntry>,
    pub yahtzee_bonus: BonusEntry,
}

impl SheetSnapshot {
    pub fn capture(sheet: &Scoresheet) -> Self {
        SheetSnapshot {
            rules: sheet
                .rules()
                .iter()
                .map(|rule| RuleEntry {
                    name: rule.name().to_string(),
                    score: rule.current_score(),
                })
                .collect(),
            bonuses: sheet.bonuses().iter().map(bonus_entry).collect(),
            yahtzee_bonus: bonus_entry(sheet.yahtzee_bonus()),
        }
    }

    /// Resolves every snapshot name before writing anything, so a failed
    /// restore leaves the target sheet untouched.
    pub fn restore(&self, sheet: &mut Scoresheet) -> Result<(), SheetError> {
        let rule_positions = self
            .rules
            .iter()
            .map(|entry| {
                sheet
                    .rules()
                    .iter()
                    .position(|rule| rule.name() == entry.name)
                    .ok_or_else(|| SheetError::UnknownRule(entry.name.clone()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        let bonus_positions = self
            .bonuses
            .iter()
            .map(|entry| {
                sheet
                    .bonuses()
                    .iter()
                    .position(|bonus| bonus.name() == entry.name)
                    .ok_or_else(|| SheetError::UnknownRule(entry.name.clone()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        if sheet.yahtzee_bonus().name() != self.yahtzee_bonus.name {
            return Err(SheetError::UnknownRule(self.yahtzee_bonus.name.clone()));
        }

        for (entry, position) in self.rules.iter().zip(rule_positions) {
            sheet.rules_mut()[position].restore_score(entry.score);
        }
        for (entry, position) in self.bonuses.iter().zip(bonus_positions) {
            sheet.bonuses_mut()[position].restore_state(entry.counter, entry.score);
        }
        sheet
            .yahtzee_bonus_mut()
            .restore_state(self.yahtzee_bonus.counter, self.yahtzee_bonus.score);
        Ok(())
    }

    pub fn to_json(sheet: &Scoresheet) -> serde_json::Result<String> {
        let snapshot = Self::capture(sheet);
        serde_json::to_string_pretty(&snapshot)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

fn bonus_entry(bonus: &crate::scoring::bonus::BonusRule) -> BonusEntry {
    BonusEntry {
        name: bonus.name().to_string(),
        counter: bonus.counter(),
        score: bonus.current_score(),
    }
}
