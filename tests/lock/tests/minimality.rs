//! Shortest-ladder lock tests against an independent reference.
//!
//! Small dictionaries are drawn pseudo-randomly from every three-letter word
//! over a four-letter alphabet. For every ordered pair of dictionary words
//! the engine's answer is compared with a reference breadth-first search over
//! the explicit Hamming-distance-one graph.
//!
//! Proves:
//! 1. The engine finds a ladder exactly when the reference does.
//! 2. Every returned ladder has the reference's step count (minimality).
//! 3. Every returned ladder satisfies the ladder invariants and stays inside
//!    the dictionary.

use std::collections::BTreeSet;

use ladder_search::search::find_ladder;
use lock_tests::ladder_test_helpers::{
    all_words, random_dictionary, reference_distance, word, XorShift,
};

const SEEDS: u64 = 24;

fn check_dictionary(dictionary: &BTreeSet<String>) {
    for start in dictionary {
        for end in dictionary {
            let found = find_ladder(&word(start), &word(end), dictionary).unwrap();
            let expected = reference_distance(dictionary, start, end);
            match (found, expected) {
                (Some(ladder), Some(steps)) => {
                    ladder.verify().unwrap();
                    assert_eq!(
                        ladder.steps(),
                        steps,
                        "{start} -> {end}: ladder {ladder} is not minimal"
                    );
                    assert_eq!(ladder.start().unwrap().as_str(), start);
                    assert_eq!(ladder.end().unwrap().as_str(), end);
                    for w in ladder.words() {
                        assert!(dictionary.contains(w.as_str()), "{w} not in dictionary");
                    }
                }
                (None, None) => {}
                (found, expected) => panic!(
                    "{start} -> {end}: engine found {found:?}, reference distance {expected:?}"
                ),
            }
        }
    }
}

#[test]
fn ladders_are_minimal_on_random_dictionaries() {
    let universe = all_words(&['a', 'b', 'c', 'd'], 3);
    assert_eq!(universe.len(), 64);
    for seed in 1..=SEEDS {
        let mut rng = XorShift::new(seed * 0x9E37_79B9);
        let dictionary = random_dictionary(&mut rng, &universe, 250);
        check_dictionary(&dictionary);
    }
}

#[test]
fn ladders_are_minimal_on_dense_dictionary() {
    let universe = all_words(&['a', 'b', 'c'], 3);
    let mut rng = XorShift::new(7);
    let dictionary = random_dictionary(&mut rng, &universe, 700);
    check_dictionary(&dictionary);
}

#[test]
fn sparse_chain_is_followed_end_to_end() {
    // A single path with no shortcuts: aaaa -> baaa -> bbaa -> bbba -> bbbb.
    let dictionary: BTreeSet<String> = ["aaaa", "baaa", "bbaa", "bbba", "bbbb", "abab"]
        .iter()
        .map(|s| (*s).to_string())
        .collect();
    let ladder = find_ladder(&word("aaaa"), &word("bbbb"), &dictionary)
        .unwrap()
        .unwrap();
    assert_eq!(ladder.steps(), 4);
    assert_eq!(reference_distance(&dictionary, "aaaa", "bbbb"), Some(4));
    assert_eq!(find_ladder(&word("aaaa"), &word("abab"), &dictionary), Ok(None));
}
