// Sentence context around a classified word.
//
// Refinement is an extension point: the default refiner returns the tags
// unchanged, so classification results never depend on context unless a
// caller installs its own `ContextRefiner`.

use crate::types::GenderTag;

/// The sentence text that precedes (and may include) the classified word.
#[derive(Debug, Clone, Copy)]
pub struct SentenceContext<'a> {
    pub text: &'a str,
}

impl<'a> SentenceContext<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }

    /// The last `n` words of the context, in sentence order, with
    /// surrounding punctuation removed.
    pub fn trailing_words(&self, n: usize) -> Vec<&'a str> {
        let words: Vec<&str> = self
            .text
            .split_whitespace()
            .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()))
            .filter(|w| !w.is_empty())
            .collect();
        let skip = words.len().saturating_sub(n);
        words[skip..].to_vec()
    }
}

/// Narrows an ambiguous tag list using the surrounding sentence.
///
/// Only consulted when a context is given, the context is at least as long
/// as the word, and there is more than one tag. `word` is always the word
/// the caller asked about, even when the tags came from a stripped
/// remainder of it.
pub trait ContextRefiner: Send + Sync {
    fn refine(
        &self,
        word: &str,
        context: &SentenceContext<'_>,
        tags: Vec<GenderTag>,
    ) -> Vec<GenderTag>;
}

/// Returns the tags unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassThrough;

impl ContextRefiner for PassThrough {
    fn refine(
        &self,
        _word: &str,
        _context: &SentenceContext<'_>,
        tags: Vec<GenderTag>,
    ) -> Vec<GenderTag> {
        tags
    }
}

/// Whether `context` qualifies for refining `tags` of `word`.
pub(crate) fn should_refine(word: &str, context: &str, tags: &[GenderTag]) -> bool {
    tags.len() > 1 && context.chars().count() >= word.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{GenderClass, Number};

    #[test]
    fn test_trailing_words() {
        let ctx = SentenceContext::new("Gestern sah ich im Garten den, Kiefer.");
        assert_eq!(ctx.trailing_words(3), ["Garten", "den", "Kiefer"]);
        assert_eq!(ctx.trailing_words(0), Vec::<&str>::new());
        assert_eq!(ctx.trailing_words(50).len(), 7);
    }

    #[test]
    fn test_trailing_words_skips_punctuation_only() {
        let ctx = SentenceContext::new("mit dem -- Hund !");
        assert_eq!(ctx.trailing_words(2), ["dem", "Hund"]);
    }

    #[test]
    fn test_should_refine() {
        let two = [
            GenderTag::listed(GenderClass::Masculine, Number::Singular),
            GenderTag::listed(GenderClass::Feminine, Number::Singular),
        ];
        assert!(should_refine("Kiefer", "den Kiefer", &two));
        assert!(should_refine("Kiefer", "Kiefer", &two));
        assert!(!should_refine("Kiefer", "den", &two));
        assert!(!should_refine("Kiefer", "den Kiefer", &two[..1]));
    }

    #[test]
    fn test_pass_through() {
        let tags = vec![GenderTag::plural_only(), GenderTag::infinitive()];
        let out = PassThrough.refine("Essen", &SentenceContext::new("beim Essen"), tags.clone());
        assert_eq!(out, tags);
    }
}
