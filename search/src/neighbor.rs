//! Neighbor candidate generation.
//!
//! Candidates of a word are produced position-ascending, then
//! letter-ascending, skipping the letter already at each position. The order
//! is fixed so that among several shortest ladders the engine always returns
//! the same one.

use ladder_kernel::alphabet::Alphabet;
use ladder_kernel::word::Word;

use crate::node::Substitution;

/// A word one substitution away from its source, not yet checked by the oracle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub word: Word,
    pub substitution: Substitution,
}

/// Iterator over the substitution candidates of one word.
///
/// Yields at most `word.len() * alphabet.len()` items. Letters at a position
/// that are not in the alphabet are still replaced by every alphabet letter.
pub struct Neighbors<'a> {
    word: &'a Word,
    chars: Vec<char>,
    letters: &'a [char],
    position: usize,
    letter_index: usize,
}

impl<'a> Neighbors<'a> {
    #[must_use]
    pub fn new(word: &'a Word, alphabet: &'a Alphabet) -> Self {
        Self {
            word,
            chars: word.chars(),
            letters: alphabet.letters(),
            position: 0,
            letter_index: 0,
        }
    }
}

impl Iterator for Neighbors<'_> {
    type Item = Candidate;

    fn next(&mut self) -> Option<Candidate> {
        while self.position < self.chars.len() {
            let Some(&to) = self.letters.get(self.letter_index) else {
                self.position += 1;
                self.letter_index = 0;
                continue;
            };
            self.letter_index += 1;

            let from = self.chars[self.position];
            if to == from {
                continue;
            }

            let Some(word) = self.word.with_substitution(self.position, to) else {
                continue;
            };
            return Some(Candidate {
                word,
                substitution: Substitution {
                    position: self.position,
                    from,
                    to,
                },
            });
        }
        None
    }
}

/// Collect every candidate of `word` in generation order.
#[must_use]
pub fn candidates(word: &Word, alphabet: &Alphabet) -> Vec<Candidate> {
    Neighbors::new(word, alphabet).collect()
}
