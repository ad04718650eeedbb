pub mod types;
pub mod lexicon;
pub mod suffix;
pub mod syllable;
pub mod context;
pub mod classify;
pub mod output;

pub use classify::Classifier;
pub use context::{ContextRefiner, PassThrough, SentenceContext};
pub use lexicon::{Lexicon, LexiconError, LexiconSources};
pub use syllable::syllabify;
pub use types::{GenderClass, GenderTag, Grade, Number, WordReport};

/// Classify `word` against the process-wide lexicon, building it from the
/// embedded word lists on first use.
pub fn classify(word: &str, context: Option<&str>) -> Result<Vec<GenderTag>, LexiconError> {
    let lexicon = lexicon::global()?;
    Ok(Classifier::new(lexicon).classify(word, context))
}
