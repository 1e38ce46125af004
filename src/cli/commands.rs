//! Command implementations for the spelltrie CLI.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::time::Instant;

use log::{debug, info};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::Result;
use crate::spelling::checker::SpellChecker;
use crate::text::highlight::highlight;
use crate::text::interactive::InteractiveSession;
use crate::text::replace::apply;

/// Execute a CLI command against the process stdin/stdout/stderr.
pub fn execute_command(args: SpelltrieArgs) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let stderr = io::stderr();
    execute_command_with(args, &mut stdin.lock(), &mut stdout.lock(), &mut stderr.lock())
}

/// Execute a CLI command with explicit streams.
///
/// Results go to `out`. Interactive prompts go to `out` as well in human
/// mode, and to `prompt` in JSON mode so `out` stays parseable.
pub fn execute_command_with(
    args: SpelltrieArgs,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
    prompt: &mut dyn Write,
) -> Result<()> {
    match &args.command {
        Command::Check(check_args) => check_text(check_args, &args, out),
        Command::Suggest(suggest_args) => suggest_words(suggest_args, &args, out),
        Command::Fix(fix_args) => fix_text(fix_args, &args, input, out, prompt),
        Command::Stats(stats_args) => show_stats(stats_args, &args, out),
    }
}

/// Load the dictionary and build a checker with the effective configuration.
fn load_checker(dictionary: &Path, cli_args: &SpelltrieArgs) -> Result<SpellChecker> {
    let config = cli_args.checker_config()?;
    let start_time = Instant::now();
    let checker = SpellChecker::from_file(dictionary, config)?;
    debug!(
        "Dictionary ready in {}ms",
        start_time.elapsed().as_millis()
    );
    Ok(checker)
}

/// Print a text with misspelled words highlighted.
fn check_text(args: &CheckArgs, cli_args: &SpelltrieArgs, out: &mut dyn Write) -> Result<()> {
    let checker = load_checker(&args.dictionary, cli_args)?;
    let text = fs::read(&args.input)?;
    let words = checker.check_text(&text);

    let misspellings = words
        .iter()
        .filter(|w| !w.correct)
        .map(|w| Misspelling {
            word: w.span.text.clone(),
            start_offset: w.span.start_offset,
            end_offset: w.span.end_offset,
        })
        .collect();

    let result = CheckResult {
        path: args.input.to_string_lossy().to_string(),
        total_words: words.len(),
        misspellings,
        highlighted: highlight(&text, &words),
    };

    output_result(out, &result, cli_args)
}

/// Print suggestions for each word given on the command line.
fn suggest_words(args: &SuggestArgs, cli_args: &SpelltrieArgs, out: &mut dyn Write) -> Result<()> {
    let checker = load_checker(&args.dictionary, cli_args)?;
    let results = SuggestResults {
        words: args.words.iter().map(|w| checker.check_word(w)).collect(),
    };
    output_result(out, &results, cli_args)
}

/// Show the text highlighted, ask for replacements, then save the corrected text.
fn fix_text(
    args: &FixArgs,
    cli_args: &SpelltrieArgs,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
    prompt: &mut dyn Write,
) -> Result<()> {
    let checker = load_checker(&args.dictionary, cli_args)?;
    let text = fs::read(&args.input)?;
    let words = checker.check_text(&text);

    let replacements = {
        let session_out: &mut dyn Write = match cli_args.output_format {
            OutputFormat::Human => &mut *out,
            OutputFormat::Json => &mut *prompt,
        };
        if cli_args.verbosity() > 0 {
            writeln!(session_out, "{}", highlight(&text, &words))?;
        }
        InteractiveSession::new(&mut *input, session_out).run(&checker, &words)?
    };
    let corrected = apply(&text, &words, &replacements);

    let output_path = args.output.as_ref().unwrap_or(&args.input);
    fs::write(output_path, corrected)?;
    info!(
        "Wrote {} replacements to {}",
        replacements.len(),
        output_path.display()
    );

    let result = FixResult {
        output_path: output_path.to_string_lossy().to_string(),
        replaced_words: replacements.len(),
    };
    output_result(out, &result, cli_args)
}

/// Show dictionary statistics.
fn show_stats(args: &StatsArgs, cli_args: &SpelltrieArgs, out: &mut dyn Write) -> Result<()> {
    let checker = load_checker(&args.dictionary, cli_args)?;
    let dictionary = checker.dictionary();

    let stats = DictionaryStats {
        path: args.dictionary.to_string_lossy().to_string(),
        words: dictionary.word_count(),
        trie_nodes: dictionary.trie().node_count(),
    };
    output_result(out, &stats, cli_args)
}
