use std::collections::BTreeSet;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConstraintError {
    #[error("position {0} is out of range for this word length")]
    PositionOutOfRange(usize),
    #[error("'{0}' is not a letter")]
    NotALetter(char),
    #[error("position {0} already has a confirmed letter")]
    AlreadyConfirmed(usize),
    #[error("position {0} cannot have both a confirmed letter and misplaced letters")]
    ConflictingSlot(usize),
}

/// What is known about a single letter position.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SlotConstraint {
    #[default]
    Unconstrained,
    /// The letter is known to occupy this position.
    Confirmed(char),
    /// These letters are in the word, but not at this position.
    NotHere(BTreeSet<char>),
}

/// Everything known about the answer: one [`SlotConstraint`] per position
/// plus the letters known to be absent from the whole word. Immutable once
/// built; the builder rejects a slot that encodes both a confirmed letter
/// and misplaced letters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstraintSet {
    slots: Vec<SlotConstraint>,
    absent: BTreeSet<char>,
}

fn normalize_letter(letter: char) -> Result<char, ConstraintError> {
    let lower = letter.to_ascii_lowercase();
    if lower.is_ascii_lowercase() {
        Ok(lower)
    } else {
        Err(ConstraintError::NotALetter(letter))
    }
}

impl ConstraintSet {
    pub fn unconstrained(length: usize) -> Self {
        Self {
            slots: vec![SlotConstraint::Unconstrained; length],
            absent: BTreeSet::new(),
        }
    }

    pub fn slots(&self) -> &[SlotConstraint] {
        &self.slots
    }

    pub fn absent(&self) -> &BTreeSet<char> {
        &self.absent
    }

    pub fn is_empty(&self) -> bool {
        self.absent.is_empty()
            && self
                .slots
                .iter()
                .all(|s| matches!(s, SlotConstraint::Unconstrained))
    }

    /// Record that `letter` occupies `position`.
    pub fn confirm(&mut self, position: usize, letter: char) -> Result<(), ConstraintError> {
        let letter = normalize_letter(letter)?;
        let slot = self.slot_mut(position)?;
        match slot {
            SlotConstraint::Unconstrained => *slot = SlotConstraint::Confirmed(letter),
            SlotConstraint::Confirmed(_) => return Err(ConstraintError::AlreadyConfirmed(position)),
            SlotConstraint::NotHere(_) => return Err(ConstraintError::ConflictingSlot(position)),
        }
        Ok(())
    }

    /// Record that each letter of `letters` is in the word but not at
    /// `position`.
    pub fn forbid_here(
        &mut self,
        position: usize,
        letters: impl IntoIterator<Item = char>,
    ) -> Result<(), ConstraintError> {
        let mut normalized = BTreeSet::new();
        for letter in letters {
            normalized.insert(normalize_letter(letter)?);
        }
        if normalized.is_empty() {
            return Ok(());
        }
        let slot = self.slot_mut(position)?;
        match slot {
            SlotConstraint::Unconstrained => *slot = SlotConstraint::NotHere(normalized),
            SlotConstraint::NotHere(existing) => existing.extend(normalized),
            SlotConstraint::Confirmed(_) => return Err(ConstraintError::ConflictingSlot(position)),
        }
        Ok(())
    }

    /// Record letters known to be absent from the whole word.
    pub fn exclude(&mut self, letters: impl IntoIterator<Item = char>) -> Result<(), ConstraintError> {
        for letter in letters {
            self.absent.insert(normalize_letter(letter)?);
        }
        Ok(())
    }

    fn slot_mut(&mut self, position: usize) -> Result<&mut SlotConstraint, ConstraintError> {
        self.slots
            .get_mut(position)
            .ok_or(ConstraintError::PositionOutOfRange(position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unconstrained_set_is_empty() {
        let set = ConstraintSet::unconstrained(5);
        assert!(set.is_empty());
        assert_eq!(set.slots().len(), 5);
    }

    #[test]
    fn test_confirm_records_lowercased_letter() {
        let mut set = ConstraintSet::unconstrained(5);
        set.confirm(0, 'A').unwrap();
        assert_eq!(set.slots()[0], SlotConstraint::Confirmed('a'));
        assert!(!set.is_empty());
    }

    #[test]
    fn test_forbid_here_accumulates_letters() {
        let mut set = ConstraintSet::unconstrained(5);
        set.forbid_here(3, ['l']).unwrap();
        set.forbid_here(3, ['E']).unwrap();
        let expected: BTreeSet<char> = ['e', 'l'].into_iter().collect();
        assert_eq!(set.slots()[3], SlotConstraint::NotHere(expected));
    }

    #[test]
    fn test_forbid_here_with_no_letters_is_noop() {
        let mut set = ConstraintSet::unconstrained(5);
        set.forbid_here(2, []).unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn test_confirmed_slot_rejects_misplaced_letters() {
        let mut set = ConstraintSet::unconstrained(5);
        set.confirm(1, 'a').unwrap();
        assert_eq!(
            set.forbid_here(1, ['b']),
            Err(ConstraintError::ConflictingSlot(1))
        );
    }

    #[test]
    fn test_misplaced_slot_rejects_confirmation() {
        let mut set = ConstraintSet::unconstrained(5);
        set.forbid_here(1, ['b']).unwrap();
        assert_eq!(set.confirm(1, 'a'), Err(ConstraintError::ConflictingSlot(1)));
    }

    #[test]
    fn test_double_confirmation_rejected() {
        let mut set = ConstraintSet::unconstrained(5);
        set.confirm(0, 'a').unwrap();
        assert_eq!(set.confirm(0, 'b'), Err(ConstraintError::AlreadyConfirmed(0)));
    }

    #[test]
    fn test_position_out_of_range() {
        let mut set = ConstraintSet::unconstrained(5);
        assert_eq!(
            set.confirm(5, 'a'),
            Err(ConstraintError::PositionOutOfRange(5))
        );
    }

    #[test]
    fn test_non_letter_rejected() {
        let mut set = ConstraintSet::unconstrained(5);
        assert_eq!(set.confirm(0, '3'), Err(ConstraintError::NotALetter('3')));
        assert_eq!(set.exclude(['!']), Err(ConstraintError::NotALetter('!')));
    }

    #[test]
    fn test_exclude_collects_absent_letters() {
        let mut set = ConstraintSet::unconstrained(5);
        set.exclude("xYz".chars()).unwrap();
        let expected: BTreeSet<char> = ['x', 'y', 'z'].into_iter().collect();
        assert_eq!(set.absent(), &expected);
    }
}
