use crate::model::hand::Hand;
use crate::scoring::defaults::SheetSpec;
use crate::scoring::scoresheet::{Scoresheet, SheetError};

/// A player exclusively owns one hand of dice and one scoresheet, built
/// fresh from the shared template so no state aliases between players.
#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    hand: Hand,
    sheet: Scoresheet,
}

impl Player {
    pub fn new(name: impl Into<String>, spec: &SheetSpec) -> Result<Self, SheetError> {
        Ok(Self {
            name: name.into(),
            hand: Hand::standard(),
            sheet: spec.build()?,
        })
    }

    pub fn with_hand(
        name: impl Into<String>,
        hand: Hand,
        spec: &SheetSpec,
    ) -> Result<Self, SheetError> {
        Ok(Self {
            name: name.into(),
            hand,
            sheet: spec.build()?,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    pub fn sheet(&self) -> &Scoresheet {
        &self.sheet
    }

    pub fn sheet_mut(&mut self) -> &mut Scoresheet {
        &mut self.sheet
    }

    pub fn total_score(&self) -> u32 {
        self.sheet.grand_total()
    }
}

#[cfg(test)]
mod tests {
    use super::Player;
    use crate::model::hand::Hand;
    use crate::scoring::defaults::{NAME_CHANCE, SheetSpec};

    #[test]
    fn players_built_from_one_spec_do_not_share_state() {
        let spec = SheetSpec::standard();
        let mut alice = Player::new("Alice", &spec).unwrap();
        let bob = Player::new("Bob", &spec).unwrap();

        let dice = Hand::from_faces(&[3, 3, 3, 3, 3]).unwrap().dice().to_vec();
        alice.sheet_mut().score_rule(NAME_CHANCE, &dice).unwrap();

        assert_eq!(alice.total_score(), 15);
        assert_eq!(bob.total_score(), 0);
        assert!(bob.sheet().rule(NAME_CHANCE).unwrap().current_score().is_none());
    }

    #[test]
    fn player_starts_with_five_blank_dice() {
        let player = Player::new("Alice", &SheetSpec::standard()).unwrap();
        assert_eq!(player.hand().len(), 5);
        assert!(player.hand().faces().is_empty());
        assert_eq!(player.name(), "Alice");
    }
}
