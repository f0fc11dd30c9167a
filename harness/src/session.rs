//! Interactive session: the read loop around [`run_query`].
//!
//! The session owns no search logic. It prompts for a source and a
//! destination word, insists that both are dictionary words, and runs one
//! query per pair until the user answers a prompt with an empty line (or
//! input reaches EOF). Input and output are injected so the loop can be
//! driven from tests.

use std::io::{self, BufRead, Write};

use ladder_search::policy::SearchPolicy;

use crate::lexicon::Lexicon;
use crate::runner::run_query;

pub const SOURCE_PROMPT: &str = "Please enter the source word [return to quit]: ";
pub const DESTINATION_PROMPT: &str = "Please enter the destination word [return to quit]: ";
pub const NOT_A_WORD: &str = "Your response needs to be an English word, so please try again.";
pub const LENGTH_MISMATCH: &str =
    "The two endpoints must contain the same number of characters, or else no word ladder can exist.";

/// Counters for one completed session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Word pairs the user submitted.
    pub queries: u64,
    /// Pairs for which a ladder was printed.
    pub ladders_found: u64,
}

/// Drive the interactive loop until the user quits.
///
/// # Errors
///
/// Returns any I/O error from `input` or `output`. Query failures are
/// reported to the user and the loop continues.
pub fn play<R: BufRead, W: Write>(
    lexicon: &Lexicon,
    policy: &SearchPolicy,
    input: &mut R,
    output: &mut W,
) -> io::Result<SessionSummary> {
    let mut summary = SessionSummary::default();
    loop {
        let Some(start) = read_word(lexicon, SOURCE_PROMPT, input, output)? else {
            break;
        };
        let Some(end) = read_word(lexicon, DESTINATION_PROMPT, input, output)? else {
            break;
        };
        summary.queries += 1;
        if generate_ladder(lexicon, policy, &start, &end, output)? {
            summary.ladders_found += 1;
        }
    }
    Ok(summary)
}

/// Prompt until the response is empty or a dictionary word.
///
/// Returns `None` on an empty response or EOF.
fn read_word<R: BufRead, W: Write>(
    lexicon: &Lexicon,
    prompt: &str,
    input: &mut R,
    output: &mut W,
) -> io::Result<Option<String>> {
    loop {
        write!(output, "{prompt}")?;
        output.flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            return Ok(None);
        }
        let response = line.trim().to_lowercase();
        if response.is_empty() {
            return Ok(None);
        }
        if lexicon.contains_str(&response) {
            return Ok(Some(response));
        }
        writeln!(output, "{NOT_A_WORD}")?;
    }
}

fn generate_ladder<W: Write>(
    lexicon: &Lexicon,
    policy: &SearchPolicy,
    start: &str,
    end: &str,
    output: &mut W,
) -> io::Result<bool> {
    writeln!(
        output,
        "Here's where you'll search for a word ladder connecting \"{start}\" to \"{end}\"."
    )?;
    if start.chars().count() != end.chars().count() {
        writeln!(output, "{LENGTH_MISMATCH}")?;
        return Ok(false);
    }

    match run_query(lexicon, start, end, policy) {
        Ok(report) => match &report.ladder {
            Some(ladder) => {
                writeln!(output, "Found ladder: {ladder}")?;
                Ok(true)
            }
            None => {
                writeln!(
                    output,
                    "No word ladder between \"{start}\" and \"{end}\" could be found ({}).",
                    report.termination.tag()
                )?;
                Ok(false)
            }
        },
        Err(err) => {
            tracing::warn!(start, end, error = %err, "ladder query failed");
            writeln!(output, "The search could not be run: {err}")?;
            Ok(false)
        }
    }
}
