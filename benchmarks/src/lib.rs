//! Shared helpers for the word ladder benchmark suites.
//!
//! Each [`Regime`] is a synthetic lexicon plus one query chosen to stress a
//! different part of the search: wide fan-out, long chains, exhaustive
//! dead ends and budget cut-offs.

use ladder_harness::lexicon::Lexicon;
use ladder_harness::runner::lexicon_bindings;
use ladder_kernel::word::Word;
use ladder_search::policy::SearchPolicy;
use ladder_search::search::{search, MetadataBindings, SearchResult};

/// One benchmark workload.
pub struct Regime {
    pub name: &'static str,
    pub lexicon: Lexicon,
    pub start: Word,
    pub end: Word,
    pub policy: SearchPolicy,
    pub bindings: MetadataBindings,
}

impl Regime {
    fn new(name: &'static str, lexicon: Lexicon, start: &str, end: &str, policy: SearchPolicy) -> Self {
        let bindings = lexicon_bindings(&lexicon);
        Self {
            name,
            lexicon,
            start: word(start),
            end: word(end),
            policy,
            bindings,
        }
    }
}

/// Parse a benchmark word.
///
/// # Panics
///
/// Panics if `raw` is not a valid word. Benchmark setup failures are fatal.
#[must_use]
pub fn word(raw: &str) -> Word {
    Word::parse(raw).expect("benchmark word")
}

/// Every word of length `len` over `letters`, in lexicographic order.
#[must_use]
pub fn grid_words(letters: &[char], len: usize) -> Vec<Word> {
    let mut prefixes: Vec<Vec<char>> = vec![Vec::new()];
    for _ in 0..len {
        prefixes = prefixes
            .iter()
            .flat_map(|prefix| {
                letters.iter().map(move |&c| {
                    let mut next = prefix.clone();
                    next.push(c);
                    next
                })
            })
            .collect();
    }
    prefixes
        .iter()
        .filter_map(|chars| word_from_chars(chars))
        .collect()
}

/// A single chain with no shortcuts: starting from `a` repeated `len` times,
/// each sweep rewrites positions left to right with the next letter of
/// `letters`. Consecutive words differ in one position; no other pair does.
#[must_use]
pub fn chain_words(letters: &[char], len: usize) -> Vec<Word> {
    let Some(&first) = letters.first() else {
        return Vec::new();
    };
    let mut current = vec![first; len];
    let mut chain: Vec<Word> = word_from_chars(&current).into_iter().collect();
    for &letter in letters.iter().skip(1) {
        for position in 0..len {
            current[position] = letter;
            chain.extend(word_from_chars(&current));
        }
    }
    chain
}

fn word_from_chars(chars: &[char]) -> Option<Word> {
    Word::parse(&chars.iter().collect::<String>()).ok()
}

const GRID: [char; 8] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'];

/// 512 three-letter words; every word has 21 dictionary neighbors.
#[must_use]
pub fn regime_dense_grid() -> Regime {
    let lexicon = Lexicon::from_words(grid_words(&GRID, 3));
    Regime::new("dense_grid", lexicon, "aaa", "hhh", SearchPolicy::default())
}

/// A 43-word chain of six-letter words: deep search, narrow frontier.
#[must_use]
pub fn regime_long_chain() -> Regime {
    let lexicon = Lexicon::from_words(chain_words(&GRID, 6));
    Regime::new("long_chain", lexicon, "aaaaaa", "hhhhhh", SearchPolicy::default())
}

/// The dense grid with an unreachable end word: every word is expanded.
#[must_use]
pub fn regime_exhaustive_dead_end() -> Regime {
    let lexicon = Lexicon::from_words(grid_words(&GRID, 3));
    Regime::new("exhaustive_dead_end", lexicon, "aaa", "zzz", SearchPolicy::default())
}

/// The dense grid cut off after 50 expansions.
#[must_use]
pub fn regime_budget_limited() -> Regime {
    let lexicon = Lexicon::from_words(grid_words(&GRID, 3));
    let policy = SearchPolicy {
        max_expansions: 50,
        ..SearchPolicy::default()
    };
    Regime::new("budget_limited", lexicon, "aaa", "zzz", policy)
}

/// All regimes, in report order.
#[must_use]
pub fn all_regimes() -> Vec<Regime> {
    vec![
        regime_dense_grid(),
        regime_long_chain(),
        regime_exhaustive_dead_end(),
        regime_budget_limited(),
    ]
}

/// Run `search()` on a regime. Returns the full `SearchResult`.
///
/// # Panics
///
/// Panics if `search()` returns an error. Benchmark runs are expected to succeed.
#[must_use]
pub fn run_search_only(regime: &Regime) -> SearchResult {
    search(
        &regime.start,
        &regime.end,
        &regime.lexicon,
        &regime.policy,
        &regime.bindings,
    )
    .expect("search should succeed in benchmarks")
}
