//! `Lexicon`: the dictionary that backs the Word Validity Oracle.
//!
//! # Text format
//!
//! One word per line. Surrounding whitespace is trimmed and words are
//! lowercased. Blank lines and lines starting with `#` are ignored. A line
//! holding more than one word is a hard error (reported with its 1-based
//! line number) rather than being silently split or skipped.
//!
//! The lexicon is loaded once by the caller and injected into the search;
//! the search crate never touches the file system.

use std::collections::BTreeSet;
use std::fmt;
use std::path::Path;

use ladder_kernel::proof::hash::{canonical_hash, ContentHash, HashDomain};
use ladder_kernel::word::{Word, WordError};
use ladder_search::contract::{OracleError, WordOracle};

/// Conventional dictionary file name, resolved against the working directory.
pub const DEFAULT_DICTIONARY_FILE: &str = "dictionary.txt";

/// Oracle identifier recorded in search graph metadata.
pub const LEXICON_ORACLE_ID: &str = "lexicon";

/// Typed failure for lexicon loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexiconError {
    /// The dictionary file could not be read.
    Io { path: String, detail: String },
    /// A line could not be normalized into a word.
    InvalidEntry { line: usize, error: WordError },
}

impl fmt::Display for LexiconError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, detail } => write!(f, "cannot read dictionary {path}: {detail}"),
            Self::InvalidEntry { line, error } => {
                write!(f, "invalid dictionary entry on line {line}: {error}")
            }
        }
    }
}

impl std::error::Error for LexiconError {}

/// An in-memory, sorted set of normalized words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lexicon {
    words: BTreeSet<Word>,
}

impl Lexicon {
    /// Build a lexicon from already-parsed words.
    #[must_use]
    pub fn from_words(words: impl IntoIterator<Item = Word>) -> Self {
        Self {
            words: words.into_iter().collect(),
        }
    }

    /// Parse dictionary text (see the module docs for the format).
    ///
    /// # Errors
    ///
    /// Returns [`LexiconError::InvalidEntry`] for the first line that is not
    /// a single word.
    pub fn parse(text: &str) -> Result<Self, LexiconError> {
        let mut words = BTreeSet::new();
        for (index, raw) in text.lines().enumerate() {
            let trimmed = raw.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            let word = Word::parse(trimmed).map_err(|error| LexiconError::InvalidEntry {
                line: index + 1,
                error,
            })?;
            words.insert(word);
        }
        Ok(Self { words })
    }

    /// Read and parse a dictionary file.
    ///
    /// # Errors
    ///
    /// Returns [`LexiconError::Io`] if the file cannot be read, or
    /// [`LexiconError::InvalidEntry`] if its contents are malformed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LexiconError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| LexiconError::Io {
            path: path.display().to_string(),
            detail: e.to_string(),
        })?;
        let lexicon = Self::parse(&text)?;
        tracing::debug!(
            path = %path.display(),
            words = lexicon.len(),
            "loaded dictionary"
        );
        Ok(lexicon)
    }

    /// Number of distinct words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Membership test on a normalized word.
    #[must_use]
    pub fn contains_word(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    /// Membership test on raw input (normalized first; invalid input is never
    /// a member).
    #[must_use]
    pub fn contains_str(&self, raw: &str) -> bool {
        Word::parse(raw).is_ok_and(|w| self.words.contains(&w))
    }

    /// `canonical_hash(Lexicon, sorted words joined by '\n')`.
    ///
    /// Independent of the source file's order, duplicates, comments and case.
    #[must_use]
    pub fn digest(&self) -> ContentHash {
        let mut data = Vec::new();
        for (i, word) in self.words.iter().enumerate() {
            if i > 0 {
                data.push(b'\n');
            }
            data.extend_from_slice(word.as_str().as_bytes());
        }
        canonical_hash(HashDomain::Lexicon, &data)
    }
}

impl WordOracle for Lexicon {
    fn contains(&self, word: &Word) -> Result<bool, OracleError> {
        Ok(self.contains_word(word))
    }
}
