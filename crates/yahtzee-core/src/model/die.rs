use core::fmt;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// An n-sided die. A die may be blank (no showing face); blanks are
/// skipped by every validator and aggregate, never treated as zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Die {
    sides: u8,
    showing_face: Option<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DieError {
    IllegalFace { face: u8, sides: u8 },
}

impl fmt::Display for DieError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DieError::IllegalFace { face, sides } => {
                write!(f, "face {face} is not in the valid range 1..={sides}")
            }
        }
    }
}

impl std::error::Error for DieError {}

impl Die {
    /// A blank die that has not been rolled yet. `sides` must be at
    /// least one; rolling a zero-sided die panics.
    pub const fn new(sides: u8) -> Self {
        Self {
            sides,
            showing_face: None,
        }
    }

    pub const fn with_face(sides: u8, face: u8) -> Result<Self, DieError> {
        if face == 0 || face > sides {
            return Err(DieError::IllegalFace { face, sides });
        }
        Ok(Self {
            sides,
            showing_face: Some(face),
        })
    }

    pub fn rolled<R: rand::Rng + ?Sized>(sides: u8, rng: &mut R) -> Self {
        let mut die = Self::new(sides);
        die.roll(rng);
        die
    }

    pub fn rolled_with_seed(sides: u8, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::rolled(sides, &mut rng)
    }

    pub fn roll<R: rand::Rng + ?Sized>(&mut self, rng: &mut R) -> u8 {
        let face = rng.gen_range(1..=self.sides);
        self.showing_face = Some(face);
        face
    }

    pub const fn sides(self) -> u8 {
        self.sides
    }

    pub const fn showing_face(self) -> Option<u8> {
        self.showing_face
    }

    pub const fn is_blank(self) -> bool {
        self.showing_face.is_none()
    }

    pub fn clear(&mut self) {
        self.showing_face = None;
    }
}

impl fmt::Display for Die {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.showing_face {
            Some(face) => write!(f, "{face}"),
            None => f.write_str("-"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Die, DieError};

    #[test]
    fn with_face_accepts_valid_range() {
        let die = Die::with_face(6, 4).unwrap();
        assert_eq!(die.showing_face(), Some(4));
        assert_eq!(die.sides(), 6);
    }

    #[test]
    fn with_face_rejects_out_of_range() {
        assert_eq!(
            Die::with_face(6, 7),
            Err(DieError::IllegalFace { face: 7, sides: 6 })
        );
        assert_eq!(
            Die::with_face(6, 0),
            Err(DieError::IllegalFace { face: 0, sides: 6 })
        );
    }

    #[test]
    fn roll_stays_in_face_range() {
        use rand::SeedableRng;
        use rand::rngs::StdRng;

        let mut die = Die::new(6);
        for seed in 0..32 {
            let mut rng = StdRng::seed_from_u64(seed);
            let face = die.roll(&mut rng);
            assert!((1..=6).contains(&face));
            assert_eq!(die.showing_face(), Some(face));
        }
    }

    #[test]
    fn one_sided_die_always_rolls_one() {
        use rand::SeedableRng;
        use rand::rngs::StdRng;

        let mut die = Die::new(1);
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..8 {
            assert_eq!(die.roll(&mut rng), 1);
        }
    }

    #[test]
    fn rolled_with_seed_is_deterministic() {
        let die_a = Die::rolled_with_seed(6, 42);
        let die_b = Die::rolled_with_seed(6, 42);
        assert_eq!(die_a, die_b);
        assert!(!die_a.is_blank());
    }

    #[test]
    fn blank_die_displays_dash() {
        let mut die = Die::with_face(6, 3).unwrap();
        assert_eq!(die.to_string(), "3");
        die.clear();
        assert!(die.is_blank());
        assert_eq!(die.to_string(), "-");
    }
}
