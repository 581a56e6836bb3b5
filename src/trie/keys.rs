use super::CHILDREN;
use crate::error::{Error, Reason, Result};
use smallvec::SmallVec;

/// Child slot indices spelling out a word, one per letter.
pub(super) type Slots = SmallVec<[u8; 32]>;

const _: () = assert!(
    (b'z' - b'a' + 1) as usize == CHILDREN,
    "Every lowercase letter must have exactly one child slot"
);

/// Maps a character onto its child slot, folding uppercase letters.
pub(super) fn slot(character: char) -> Option<u8> {
    match character {
        'a'..='z' => Some(character as u8 - b'a'),
        'A'..='Z' => Some(character as u8 - b'A'),
        _ => None,
    }
}

pub(super) fn letter(slot: usize) -> char {
    debug_assert!(slot < CHILDREN, "Slot {slot} is outside the alphabet");
    (b'a' + slot as u8) as char
}

pub(super) trait Key {
    /// Validates the whole key before anything is allowed to touch the trie.
    fn slots(&self) -> Result<Slots>;
}

impl Key for str {
    fn slots(&self) -> Result<Slots> {
        if self.is_empty() {
            return Err(Error::invalid(self, Reason::Empty));
        }
        self.chars()
            .enumerate()
            .map(|(position, character)| {
                slot(character).ok_or_else(|| {
                    Error::invalid(
                        self,
                        Reason::Character {
                            character,
                            position,
                        },
                    )
                })
            })
            .collect()
    }
}
