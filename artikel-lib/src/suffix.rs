// Ending-based gender heuristics.
//
// Each grade is a fixed parameter set. Within a grade the singular and the
// plural are judged independently, and for each the first matching list
// wins in masculine → feminine → neuter order.

use crate::types::{GenderClass, GenderTag, Grade, Number};

const DIMINUTIVE: &str = "chen";

/// Ordered suffix lists for one number. Earlier entries take priority.
type SuffixLists = [(GenderClass, &'static [&'static str]); 3];

/// The suffix parameters for one confidence grade.
#[derive(Debug)]
pub struct SuffixRules {
    pub grade: Grade,
    /// Characters that, placed before "-chen", make the word a diminutive.
    pub diminutive_prior: &'static str,
    pub singular: SuffixLists,
    pub plural: SuffixLists,
}

// ---------------------------------------------------------------------------
// Parameter sets
// ---------------------------------------------------------------------------

pub const ABSOLUTE: SuffixRules = SuffixRules {
    grade: Grade::Absolute,
    diminutive_prior: "dfghkmptvwxzß",
    singular: [
        (GenderClass::Masculine, &["ant", "ast", "eich", "ismus", "wert"]),
        (
            GenderClass::Feminine,
            &["enz", "heit", "ie", "schaft", "sion", "tion", "tät", "ung", "macht", "firma"],
        ),
        (GenderClass::Neuter, &["lein", "ing", "ment", "tum", "thema", "schema"]),
    ],
    plural: [
        (GenderClass::Masculine, &["eiche", "ismen", "werte"]),
        (
            GenderClass::Feminine,
            &[
                "enzen", "heiten", "ien", "schaften", "sionen", "tionen", "täten", "ungen",
                "mächte", "firmen",
            ],
        ),
        (GenderClass::Neuter, &["inge", "mente", "tümer", "themen", "schemen"]),
    ],
};

pub const GUESS: SuffixRules = SuffixRules {
    grade: Grade::Guess,
    diminutive_prior: "n",
    singular: [
        (GenderClass::Masculine, &["er", "ich", "ig", "eig", "or"]),
        (GenderClass::Feminine, &["anz", "ur"]),
        (GenderClass::Neuter, &["il", "ma", "nis"]),
    ],
    plural: [
        (GenderClass::Masculine, &["er", "oren"]),
        (GenderClass::Feminine, &["anzen", "uren"]),
        (GenderClass::Neuter, &["nisse"]),
    ],
};

// ---------------------------------------------------------------------------
// Matching
// ---------------------------------------------------------------------------

impl SuffixRules {
    /// Classify a lowercase word by its ending. Returns at most one singular
    /// tag followed by at most one plural tag.
    pub fn classify(&self, word: &str) -> Vec<GenderTag> {
        let mut tags = Vec::with_capacity(2);

        if self.is_diminutive(word) {
            tags.push(GenderTag::new(GenderClass::Neuter, Number::Singular, self.grade));
            tags.push(GenderTag::new(GenderClass::Neuter, Number::Plural, self.grade));
            return tags;
        }

        if let Some(class) = first_match(&self.singular, word) {
            tags.push(GenderTag::new(class, Number::Singular, self.grade));
        }
        if let Some(class) = first_match(&self.plural, word) {
            tags.push(GenderTag::new(class, Number::Plural, self.grade));
        }
        tags
    }

    /// A "-chen" word of at least five characters whose preceding character
    /// is in this grade's prior set.
    fn is_diminutive(&self, word: &str) -> bool {
        let Some(stem) = word.strip_suffix(DIMINUTIVE) else {
            return false;
        };
        stem.chars()
            .next_back()
            .is_some_and(|prior| self.diminutive_prior.contains(prior))
    }
}

fn first_match(lists: &SuffixLists, word: &str) -> Option<GenderClass> {
    lists
        .iter()
        .find(|(_, endings)| endings.iter().any(|end| word.ends_with(end)))
        .map(|(class, _)| *class)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(tags: &[GenderTag]) -> Vec<String> {
        tags.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_absolute_singular_endings() {
        assert_eq!(codes(&ABSOLUTE.classify("hoffnung")), ["sf(A)"]);
        assert_eq!(codes(&ABSOLUTE.classify("reichtum")), ["sn(A)"]);
        assert_eq!(codes(&ABSOLUTE.classify("realismus")), ["sm(A)"]);
    }

    #[test]
    fn test_absolute_plural_endings() {
        assert_eq!(codes(&ABSOLUTE.classify("wohnungen")), ["pf(A)"]);
        assert_eq!(codes(&ABSOLUTE.classify("eigentümer")), ["pn(A)"]);
    }

    #[test]
    fn test_singular_and_plural_are_independent() {
        // "-ie" is a feminine singular ending but "linie" has no "-ien".
        assert_eq!(codes(&ABSOLUTE.classify("linie")), ["sf(A)"]);
        assert_eq!(codes(&GUESS.classify("lehrer")), ["sm(G)", "pm(G)"]);
    }

    #[test]
    fn test_guess_endings() {
        assert_eq!(codes(&GUESS.classify("zweig")), ["sm(G)"]);
        assert_eq!(codes(&GUESS.classify("motoren")), ["pm(G)"]);
        assert_eq!(codes(&GUESS.classify("figur")), ["sf(G)"]);
        assert_eq!(codes(&GUESS.classify("ergebnis")), ["sn(G)"]);
    }

    #[test]
    fn test_diminutive_guess() {
        assert_eq!(codes(&GUESS.classify("kaninchen")), ["sn(G)", "pn(G)"]);
        assert!(ABSOLUTE.classify("kaninchen").is_empty());
    }

    #[test]
    fn test_diminutive_absolute() {
        assert_eq!(codes(&ABSOLUTE.classify("häuschen")), Vec::<String>::new());
        assert_eq!(codes(&ABSOLUTE.classify("mädchen")), ["sn(A)", "pn(A)"]);
        assert_eq!(codes(&ABSOLUTE.classify("stückchen")), ["sn(A)", "pn(A)"]);
    }

    #[test]
    fn test_diminutive_overrides_other_endings() {
        let tags = GUESS.classify("männchen");
        assert!(tags.iter().all(|t| t.class == GenderClass::Neuter));
    }

    #[test]
    fn test_bare_chen_is_not_diminutive() {
        assert!(GUESS.classify("chen").is_empty());
        assert!(ABSOLUTE.classify("chen").is_empty());
    }

    #[test]
    fn test_no_match() {
        assert!(ABSOLUTE.classify("tisch").is_empty());
        assert!(GUESS.classify("tisch").is_empty());
    }
}
