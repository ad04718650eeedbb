// Tiered gender classification.
//
// Tiers, in order:
//   1. Hardcoded case-inflected exceptions
//   2. Plural-only ending (absolute override)
//   3. Exact word-list membership
//   4. Suffix heuristics, absolute grade then guess grade
//   5. Strip the leading syllable and retry on the remainder
//
// A tier only runs when every earlier tier produced nothing.

use log::{debug, trace};

use crate::context::{should_refine, ContextRefiner, PassThrough, SentenceContext};
use crate::lexicon::Lexicon;
use crate::suffix;
use crate::syllable::syllabify;
use crate::types::{GenderClass, GenderTag, Number};

/// Upper bound on stripped syllables. The syllable count already bounds
/// the loop; this guards against a syllabifier that stops shrinking words.
pub const MAX_STRIP_DEPTH: usize = 32;

const SM_LIST: GenderTag = GenderTag::listed(GenderClass::Masculine, Number::Singular);
const SN_LIST: GenderTag = GenderTag::listed(GenderClass::Neuter, Number::Singular);
const PN_LIST: GenderTag = GenderTag::listed(GenderClass::Neuter, Number::Plural);

/// Irregular oblique forms whose reading is fixed regardless of the lexicon.
const EXCEPTIONS: &[(&str, &[GenderTag])] = &[
    // Dative/accusative of "der Herr"; the plural is "Herren".
    ("herrn", &[SM_LIST]),
    // Genitive and dative of "das Herz".
    ("herzens", &[SN_LIST, PN_LIST]),
    ("herzen", &[SN_LIST, PN_LIST]),
];

// ---------------------------------------------------------------------------
// Classifier
// ---------------------------------------------------------------------------

/// Infers gender tags for capitalized German words against a lexicon.
pub struct Classifier<'a> {
    lexicon: &'a Lexicon,
    refiner: Box<dyn ContextRefiner + 'a>,
}

impl<'a> Classifier<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon, refiner: Box::new(PassThrough) }
    }

    /// Replace the context refiner (a pass-through by default).
    pub fn with_refiner(mut self, refiner: Box<dyn ContextRefiner + 'a>) -> Self {
        self.refiner = refiner;
        self
    }

    /// Classify `word`, optionally with the trailing sentence `context`.
    ///
    /// Returns an empty list both when `word` does not start with an
    /// uppercase letter (not a noun) and when nothing could be inferred.
    pub fn classify(&self, word: &str, context: Option<&str>) -> Vec<GenderTag> {
        let Some(lower) = noun_form(word) else {
            trace!("{word:?}: not capitalized, skipping");
            return Vec::new();
        };

        let tags = self.classify_tiers(&lower);
        if !tags.is_empty() {
            return self.refine(word, context, tags);
        }

        self.strip_and_retry(word, context)
    }

    /// Like [`classify`](Self::classify), rendered as tag codes.
    pub fn classify_codes(&self, word: &str, context: Option<&str>) -> Vec<String> {
        crate::output::to_codes(&self.classify(word, context))
    }

    /// Tiers 1-4 on an already lowercased word.
    fn classify_tiers(&self, word: &str) -> Vec<GenderTag> {
        if let Some((_, fixed)) = EXCEPTIONS.iter().find(|(form, _)| *form == word) {
            debug!("{word}: fixed exception");
            return fixed.to_vec();
        }

        if self.lexicon.ends_with_plural_only(word) {
            debug!("{word}: plural-only ending");
            return vec![GenderTag::plural_only()];
        }

        let tags = self.list_tags(word);
        if !tags.is_empty() {
            debug!("{word}: word list match {tags:?}");
            return tags;
        }

        for rules in [&suffix::ABSOLUTE, &suffix::GUESS] {
            let tags = rules.classify(word);
            if !tags.is_empty() {
                debug!("{word}: {:?} suffix match {tags:?}", rules.grade);
                return tags;
            }
        }

        Vec::new()
    }

    /// Exact membership, in masculine → feminine → neuter order.
    fn list_tags(&self, word: &str) -> Vec<GenderTag> {
        let lex = self.lexicon;
        let mut tags = Vec::new();

        if lex.is_masculine_singular(word) {
            tags.push(SM_LIST);
        }
        if lex.is_feminine_singular(word) {
            tags.push(GenderTag::listed(GenderClass::Feminine, Number::Singular));
        }
        if lex.is_neuter_singular(word) {
            tags.push(SN_LIST);
        }

        if lex.is_masculine_plural(word) {
            tags.push(GenderTag::listed(GenderClass::Masculine, Number::Plural));
            // Weak nouns reuse the plural as an oblique singular.
            if lex.is_weak_masculine(word) {
                tags.push(SM_LIST);
            }
        }
        if lex.is_feminine_plural(word) {
            tags.push(GenderTag::listed(GenderClass::Feminine, Number::Plural));
        }

        if lex.is_infinitive(word) {
            tags.push(GenderTag::infinitive());
        } else {
            if lex.is_neuter_plural(word) {
                tags.push(PN_LIST);
            }
            if lex.is_plural_only(word) {
                tags.push(GenderTag::plural_only());
            }
        }

        tags
    }

    /// Drop the leading syllable and classify the re-capitalized remainder
    /// until something matches or a single syllable is left.
    fn strip_and_retry(&self, word: &str, context: Option<&str>) -> Vec<GenderTag> {
        let mut current = word.to_string();

        for depth in 1..=MAX_STRIP_DEPTH {
            let syllables = syllabify(&current);
            if syllables.len() < 2 {
                trace!("{current:?}: single syllable, giving up");
                return Vec::new();
            }

            current = capitalize(&syllables[1..].concat());
            let Some(lower) = noun_form(&current) else {
                return Vec::new();
            };

            let tags = self.classify_tiers(&lower);
            if !tags.is_empty() {
                debug!("{word}: classified via {current:?} after stripping {depth} syllable(s)");
                return self.refine(word, context, tags);
            }
        }

        debug!("{word}: strip depth limit reached");
        Vec::new()
    }

    fn refine(&self, word: &str, context: Option<&str>, tags: Vec<GenderTag>) -> Vec<GenderTag> {
        match context {
            Some(text) if should_refine(word, text, &tags) => {
                self.refiner.refine(word, &SentenceContext::new(text), tags)
            }
            _ => tags,
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Lowercase `word` if it starts with an uppercase letter, the German noun
/// marker.
fn noun_form(word: &str) -> Option<String> {
    let first = word.chars().next()?;
    (first.is_alphabetic() && first.is_uppercase()).then(|| word.to_lowercase())
}

/// Uppercase the first character of `word`.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
