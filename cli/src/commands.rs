use std::io::{self, Write};

use anyhow::Context;
use ladder_harness::lexicon::Lexicon;
use ladder_harness::runner::run_query;
use ladder_harness::session;
use ladder_harness::verify::verify_report;
use ladder_kernel::alphabet::Alphabet;
use ladder_search::policy::SearchPolicy;

use crate::cli::{Cli, Command, FindArgs};

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let policy = search_policy(&cli)?;
    let lexicon = Lexicon::load(&cli.dictionary)
        .with_context(|| format!("loading dictionary {}", cli.dictionary.display()))?;
    tracing::debug!(
        dictionary = %cli.dictionary.display(),
        words = lexicon.len(),
        alphabet = %policy.alphabet,
        "dictionary ready"
    );

    match cli.command {
        Command::Play => cmd_play(&lexicon, &policy),
        Command::Find(args) => cmd_find(&lexicon, &policy, &args),
        Command::Digest => cmd_digest(&lexicon),
    }
}

fn search_policy(cli: &Cli) -> anyhow::Result<SearchPolicy> {
    let mut policy = SearchPolicy::default();
    if let Some(letters) = &cli.alphabet {
        policy.alphabet = Alphabet::new(letters.chars()).context("invalid --alphabet")?;
    }
    if let Some(max_expansions) = cli.max_expansions {
        policy.max_expansions = max_expansions;
    }
    if let Some(max_depth) = cli.max_depth {
        policy.max_depth = max_depth;
    }
    policy.validate()?;
    Ok(policy)
}

fn cmd_play(lexicon: &Lexicon, policy: &SearchPolicy) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout().lock();
    writeln!(output, "Welcome to the word ladder application!\n")?;
    let summary = session::play(lexicon, policy, &mut input, &mut output)?;
    writeln!(output, "Thanks for playing!")?;
    tracing::debug!(
        queries = summary.queries,
        ladders_found = summary.ladders_found,
        "session ended"
    );
    Ok(())
}

fn cmd_find(lexicon: &Lexicon, policy: &SearchPolicy, args: &FindArgs) -> anyhow::Result<()> {
    let report = run_query(lexicon, &args.start, &args.end, policy)?;
    verify_report(&report, lexicon).context("report failed self-verification")?;

    let mut out = io::stdout().lock();
    match &report.ladder {
        Some(ladder) => writeln!(out, "{ladder} ({} steps)", ladder.steps())?,
        None => writeln!(
            out,
            "no ladder from {} to {} ({})",
            report.start,
            report.end,
            report.termination.tag()
        )?,
    }
    writeln!(out, "report: {}", report.digest)?;
    writeln!(out, "graph:  {}", report.graph_digest)?;
    if args.audit {
        out.write_all(&report.graph_bytes)?;
        writeln!(out)?;
    }
    Ok(())
}

fn cmd_digest(lexicon: &Lexicon) -> anyhow::Result<()> {
    println!("{} ({} words)", lexicon.digest(), lexicon.len());
    Ok(())
}
