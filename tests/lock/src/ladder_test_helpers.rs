//! Shared test helpers: the scenario dictionary, instrumented oracles, and an
//! independent shortest-path reference used to check ladder minimality.

use std::cell::Cell;
use std::collections::{BTreeMap, BTreeSet, VecDeque};
use std::fs;
use std::path::{Path, PathBuf};

use ladder_harness::lexicon::Lexicon;
use ladder_kernel::word::Word;
use ladder_search::contract::{OracleError, WordOracle};
use ladder_search::ladder::Ladder;

/// The ten-word dictionary used by the scenario tests.
pub const SCENARIO_DICTIONARY: &str = "cat\nbat\nbad\nbid\nbit\nbot\nboy\ncot\ncog\ndog\n";

/// Query pairs run by the cross-process fixture, in output order.
pub const FIXTURE_QUERIES: &[(&str, &str)] = &[
    ("cat", "bat"),
    ("cat", "cot"),
    ("bit", "dog"),
    ("cot", "cog"),
    ("cat", "dig"),
    ("boy", "bad"),
];

/// Parse the scenario dictionary.
///
/// # Panics
///
/// Panics if the embedded dictionary text is malformed (test-only invariant).
#[must_use]
pub fn scenario_lexicon() -> Lexicon {
    Lexicon::parse(SCENARIO_DICTIONARY).unwrap()
}

/// Parse a word, panicking on invalid test input.
///
/// # Panics
///
/// Panics if `raw` is not a valid word.
#[must_use]
pub fn word(raw: &str) -> Word {
    Word::parse(raw).unwrap()
}

/// The ladder's words as string slices.
#[must_use]
pub fn ladder_strs(ladder: &Ladder) -> Vec<&str> {
    ladder.words().iter().map(Word::as_str).collect()
}

/// One non-comment source line outside any test module.
#[derive(Debug, Clone)]
pub struct SourceLine {
    pub path: PathBuf,
    pub line_no: usize,
    pub text: String,
}

/// The workspace root, two levels above the lock-tests manifest.
///
/// # Panics
///
/// Panics if the lock-tests crate is not nested two levels deep.
#[must_use]
pub fn workspace_root() -> &'static Path {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .and_then(Path::parent)
        .unwrap()
}

/// Production lines of every `.rs` file under `<crate_dir>/src`.
///
/// Comment lines are dropped, and a file is read only up to its first
/// `#[cfg(test)]`, since test modules sit at the end of each file.
///
/// # Panics
///
/// Panics if `<crate_dir>/src` does not exist.
#[must_use]
pub fn production_lines(crate_dir: &str) -> Vec<SourceLine> {
    let src = workspace_root().join(crate_dir).join("src");
    assert!(src.is_dir(), "{} is missing", src.display());
    let mut files = Vec::new();
    collect_rs_files(&src, &mut files);
    files.sort();

    let mut lines = Vec::new();
    for path in files {
        let Ok(content) = fs::read_to_string(&path) else {
            continue;
        };
        for (i, line) in content.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.starts_with("#[cfg(test)]") {
                break;
            }
            if trimmed.starts_with("//") || trimmed.starts_with("/*") || trimmed.starts_with('*') {
                continue;
            }
            lines.push(SourceLine {
                path: path.clone(),
                line_no: i + 1,
                text: trimmed.to_string(),
            });
        }
    }
    lines
}

fn collect_rs_files(dir: &Path, files: &mut Vec<PathBuf>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, files);
        } else if path.extension().is_some_and(|e| e == "rs") {
            files.push(path);
        }
    }
}

/// Shortest step count from `start` to `end` over the explicit graph whose
/// vertices are `dictionary ∪ {start}` and whose edges join words at Hamming
/// distance one. `None` if `end` is unreachable.
///
/// Built independently of the search crate: adjacency is computed pairwise
/// rather than by letter substitution.
#[must_use]
pub fn reference_distance(dictionary: &BTreeSet<String>, start: &str, end: &str) -> Option<usize> {
    if start == end {
        return Some(0);
    }
    let mut vertices: BTreeSet<&str> = dictionary.iter().map(String::as_str).collect();
    vertices.insert(start);

    let mut distance: BTreeMap<&str, usize> = BTreeMap::new();
    let mut queue = VecDeque::new();
    distance.insert(start, 0);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        let d = distance[current];
        for &next in &vertices {
            if distance.contains_key(next) || !differ_by_one(current, next) {
                continue;
            }
            if next == end {
                return Some(d + 1);
            }
            distance.insert(next, d + 1);
            queue.push_back(next);
        }
    }
    None
}

fn differ_by_one(a: &str, b: &str) -> bool {
    a.chars().count() == b.chars().count()
        && a.chars().zip(b.chars()).filter(|(x, y)| x != y).count() == 1
}

/// Deterministic xorshift generator for building small random dictionaries.
#[derive(Debug, Clone)]
pub struct XorShift(u64);

impl XorShift {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self(seed.max(1))
    }

    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
}

/// Every word of length `len` over `letters`, in lexicographic order.
#[must_use]
pub fn all_words(letters: &[char], len: usize) -> Vec<String> {
    let mut words = vec![String::new()];
    for _ in 0..len {
        words = words
            .iter()
            .flat_map(|prefix| {
                letters.iter().map(move |c| {
                    let mut w = prefix.clone();
                    w.push(*c);
                    w
                })
            })
            .collect();
    }
    words
}

/// A pseudo-random subset of `universe` keeping roughly `keep_per_mille`/1000
/// of the words.
#[must_use]
pub fn random_dictionary(rng: &mut XorShift, universe: &[String], keep_per_mille: u64) -> BTreeSet<String> {
    universe
        .iter()
        .filter(|_| rng.next_u64() % 1000 < keep_per_mille)
        .cloned()
        .collect()
}

/// Oracle that delegates to a set and counts every query.
#[derive(Debug, Default)]
pub struct CountingOracle {
    pub words: BTreeSet<String>,
    pub queries: Cell<u64>,
}

impl CountingOracle {
    #[must_use]
    pub fn new(words: &[&str]) -> Self {
        Self {
            words: words.iter().map(|s| (*s).to_string()).collect(),
            queries: Cell::new(0),
        }
    }
}

impl WordOracle for CountingOracle {
    fn contains(&self, word: &Word) -> Result<bool, OracleError> {
        self.queries.set(self.queries.get() + 1);
        Ok(self.words.contains(word.as_str()))
    }
}

/// Oracle backed by a set that fails (or panics) when asked about one word.
#[derive(Debug)]
pub struct TrippingOracle {
    pub words: BTreeSet<String>,
    pub trip_word: String,
    pub panic: bool,
}

impl TrippingOracle {
    #[must_use]
    pub fn failing(words: &[&str], trip_word: &str) -> Self {
        Self {
            words: words.iter().map(|s| (*s).to_string()).collect(),
            trip_word: trip_word.to_string(),
            panic: false,
        }
    }

    #[must_use]
    pub fn panicking(words: &[&str], trip_word: &str) -> Self {
        Self {
            panic: true,
            ..Self::failing(words, trip_word)
        }
    }
}

impl WordOracle for TrippingOracle {
    fn contains(&self, word: &Word) -> Result<bool, OracleError> {
        if word.as_str() == self.trip_word {
            assert!(!self.panic, "dictionary backend crashed on {word}");
            return Err(OracleError::new(format!("lookup of {word} timed out")));
        }
        Ok(self.words.contains(word.as_str()))
    }
}
