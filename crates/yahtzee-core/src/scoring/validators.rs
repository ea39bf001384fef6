use crate::model::die::Die;
use core::fmt;

/// Invalid rule or validator parameters. A programming error in the rule
/// set, surfaced eagerly rather than folded into a `false` result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleParameterError {
    FullHouseOrder { large_n: usize, small_n: usize },
}

impl fmt::Display for RuleParameterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleParameterError::FullHouseOrder { large_n, small_n } => write!(
                f,
                "a full house requires large_n > small_n, got large_n {large_n} and small_n {small_n}"
            ),
        }
    }
}

impl std::error::Error for RuleParameterError {}

/// Faces showing the given value, skipping blank dice.
pub fn matching_faces(dice: &[Die], face_value: u8) -> Vec<u8> {
    showing_faces(dice)
        .filter(|&face| face == face_value)
        .collect()
}

/// True when some face value occurs in exactly `n` dice. Exact equality:
/// callers wanting "n or more" iterate the larger counts themselves.
pub fn has_exact_nofkind(dice: &[Die], n: usize) -> bool {
    let faces: Vec<u8> = showing_faces(dice).collect();
    faces
        .iter()
        .any(|&face| faces.iter().filter(|&&f| f == face).count() == n)
}

/// True when an exact `large_n`-of-a-kind and an exact `small_n`-of-a-kind
/// are both present.
pub fn is_full_house(
    dice: &[Die],
    large_n: usize,
    small_n: usize,
) -> Result<bool, RuleParameterError> {
    if small_n >= large_n {
        return Err(RuleParameterError::FullHouseOrder { large_n, small_n });
    }
    Ok(has_exact_nofkind(dice, large_n) && has_exact_nofkind(dice, small_n))
}

/// True when the values form a contiguous run with no duplicates.
pub fn is_straight(values: &[u8]) -> bool {
    let (Some(&min), Some(&max)) = (values.iter().min(), values.iter().max()) else {
        return false;
    };
    let span_check = (max - min + 1) as usize == values.len();
    let unique_check = duplicates(values).is_empty();
    span_check && unique_check
}

/// Straight over every showing face (e.g. five dice forming 1-2-3-4-5).
pub fn is_large_straight(dice: &[Die]) -> bool {
    let faces: Vec<u8> = showing_faces(dice).collect();
    is_straight(&faces)
}

/// True when dropping exactly one die leaves a straight. Checks every
/// drop-one combination of the raw face list so duplicate faces are
/// handled correctly (dropping a duplicate can reveal a valid run).
pub fn is_small_straight(dice: &[Die]) -> bool {
    let faces: Vec<u8> = showing_faces(dice).collect();
    if faces.len() < 2 {
        return false;
    }
    (0..faces.len()).any(|skip| {
        let subset: Vec<u8> = faces
            .iter()
            .enumerate()
            .filter(|&(idx, _)| idx != skip)
            .map(|(_, &face)| face)
            .collect();
        is_straight(&subset)
    })
}

/// Values whose frequency exceeds one, in first-seen order.
pub fn duplicates<T: PartialEq + Copy>(values: &[T]) -> Vec<T> {
    let mut seen = Vec::new();
    for (idx, &value) in values.iter().enumerate() {
        let repeated = values.iter().filter(|&&v| v == value).count() > 1;
        let first = values.iter().position(|&v| v == value) == Some(idx);
        if repeated && first {
            seen.push(value);
        }
    }
    seen
}

pub(crate) fn showing_faces(dice: &[Die]) -> impl Iterator<Item = u8> + '_ {
    dice.iter().filter_map(|die| die.showing_face())
}

pub(crate) fn face_sum(dice: &[Die]) -> u32 {
    showing_faces(dice).map(u32::from).sum()
}
