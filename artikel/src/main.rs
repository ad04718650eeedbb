use std::io::{self, BufRead};
use std::path::PathBuf;

use anyhow::{Context, Result};
use artikel_lib::classify::capitalize;
use artikel_lib::{output, syllabify, Classifier, Lexicon, WordReport};
use clap::Parser;
use log::info;

#[derive(Parser)]
#[command(name = "artikel", about = "Infer the grammatical gender of German nouns")]
struct Cli {
    /// Word to classify.
    #[arg(default_value = "Kaninchen")]
    word: String,

    /// Trailing words of the sentence the word appears in.
    #[arg(short, long)]
    context: Option<String>,

    /// Directory with der.txt, die.txt, das.txt, plural-only.txt and
    /// optionally verbs.txt and weak.txt. Defaults to the built-in lists.
    #[arg(long, value_name = "DIR")]
    data: Option<PathBuf>,

    /// Classify one word per line from stdin instead of WORD.
    #[arg(long)]
    stdin: bool,

    /// Output JSON.
    #[arg(long)]
    json: bool,

    /// Pretty-print JSON output.
    #[arg(long)]
    pretty: bool,

    /// Also show the syllabification used by the fallback.
    #[arg(long)]
    syllables: bool,

    /// Increase log verbosity (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let lexicon = match &cli.data {
        Some(dir) => Lexicon::load_dir(dir)
            .with_context(|| format!("failed to load word lists from {}", dir.display()))?,
        None => Lexicon::embedded().context("failed to load built-in word lists")?,
    };
    info!("lexicon ready: {:?}", lexicon.stats());
    let classifier = Classifier::new(&lexicon);

    if cli.stdin {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = line.context("failed to read stdin")?;
            let word = line.trim();
            if !word.is_empty() {
                process_word(word, &classifier, &cli)?;
            }
        }
    } else {
        process_word(&cli.word, &classifier, &cli)?;
    }
    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn process_word(word: &str, classifier: &Classifier<'_>, cli: &Cli) -> Result<()> {
    // Users tend to type nouns lowercase on the command line.
    let word = capitalize(word);
    let tags = classifier.classify(&word, cli.context.as_deref());
    let syllables = cli.syllables.then(|| syllabify(&word));

    if cli.json || cli.pretty {
        let report = WordReport { word, tags, syllables };
        let json = if cli.pretty {
            serde_json::to_string_pretty(&report)
        } else {
            serde_json::to_string(&report)
        };
        println!("{}", json.context("JSON serialization failed")?);
    } else {
        if let Some(syllables) = &syllables {
            println!("{}", output::to_hyphenated(syllables));
        }
        println!("{}", output::to_list_line(&tags));
    }
    Ok(())
}
