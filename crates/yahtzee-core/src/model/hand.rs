use crate::model::die::{Die, DieError};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// A player's set of dice. The scoring core only ever reads showing
/// faces through [`Hand::faces`], which skips blank dice.
#[derive(Debug, Clone)]
pub struct Hand {
    dice: Vec<Die>,
}

impl Hand {
    /// Five standard six-sided dice, all blank.
    pub fn standard() -> Self {
        Self {
            dice: vec![Die::new(6); 5],
        }
    }

    pub fn with_dice(dice: Vec<Die>) -> Self {
        Self { dice }
    }

    /// Six-sided dice showing the given faces, validated against range.
    pub fn from_faces(faces: &[u8]) -> Result<Self, DieError> {
        let dice = faces
            .iter()
            .map(|&face| Die::with_face(6, face))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { dice })
    }

    pub fn rolled_with_seed(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut hand = Self::standard();
        hand.roll_all(&mut rng);
        hand
    }

    pub fn dice(&self) -> &[Die] {
        &self.dice
    }

    /// Showing faces, skipping blank dice.
    pub fn faces(&self) -> Vec<u8> {
        self.dice.iter().filter_map(|die| die.showing_face()).collect()
    }

    pub fn len(&self) -> usize {
        self.dice.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dice.is_empty()
    }

    pub fn roll_all<R: rand::Rng + ?Sized>(&mut self, rng: &mut R) {
        for die in &mut self.dice {
            die.roll(rng);
        }
    }

    /// Rerolls the dice at the given zero-based positions; out-of-range
    /// positions are ignored.
    pub fn reroll<R: rand::Rng + ?Sized>(&mut self, positions: &[usize], rng: &mut R) {
        for &position in positions {
            if let Some(die) = self.dice.get_mut(position) {
                die.roll(rng);
            }
        }
    }
}

impl Default for Hand {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::Hand;
    use crate::model::die::Die;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn standard_hand_has_five_blank_dice() {
        let hand = Hand::standard();
        assert_eq!(hand.len(), 5);
        assert!(hand.dice().iter().all(|die| die.is_blank()));
        assert!(hand.faces().is_empty());
    }

    #[test]
    fn faces_skip_blank_dice() {
        let hand = Hand::with_dice(vec![
            Die::with_face(6, 2).unwrap(),
            Die::new(6),
            Die::with_face(6, 5).unwrap(),
        ]);
        assert_eq!(hand.faces(), vec![2, 5]);
    }

    #[test]
    fn from_faces_rejects_illegal_values() {
        assert!(Hand::from_faces(&[1, 2, 3, 4, 5]).is_ok());
        assert!(Hand::from_faces(&[1, 2, 9]).is_err());
    }

    #[test]
    fn reroll_touches_only_selected_positions() {
        let mut hand = Hand::from_faces(&[1, 1, 1, 1, 1]).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        hand.reroll(&[1, 3, 99], &mut rng);
        let dice = hand.dice();
        assert_eq!(dice[0].showing_face(), Some(1));
        assert_eq!(dice[2].showing_face(), Some(1));
        assert_eq!(dice[4].showing_face(), Some(1));
        assert!(dice[1].showing_face().is_some());
        assert!(dice[3].showing_face().is_some());
    }

    #[test]
    fn rolled_with_seed_is_deterministic() {
        let hand_a = Hand::rolled_with_seed(11);
        let hand_b = Hand::rolled_with_seed(11);
        assert_eq!(hand_a.faces(), hand_b.faces());
        assert_eq!(hand_a.faces().len(), 5);
    }
}
