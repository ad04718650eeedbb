use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Grammatical gender class of a noun reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenderClass {
    Masculine,
    Feminine,
    Neuter,
    /// Noun with no singular form in standard use.
    PluralOnly,
    /// Infinitive used as a neuter verb-noun ("das Essen").
    InfinitiveVerb,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Number {
    Singular,
    Plural,
}

/// How the engine arrived at a tag, most reliable first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Grade {
    /// Exact match in a word list.
    List,
    /// Near-unambiguous derivational or inflectional ending.
    Absolute,
    /// Weaker ending, tried only when no absolute ending matched.
    Guess,
}

impl Grade {
    pub fn code(self) -> char {
        match self {
            Grade::List => 'L',
            Grade::Absolute => 'A',
            Grade::Guess => 'G',
        }
    }

    fn from_code(c: char) -> Option<Self> {
        match c {
            'L' => Some(Grade::List),
            'A' => Some(Grade::Absolute),
            'G' => Some(Grade::Guess),
            _ => None,
        }
    }
}

/// One gender/number reading of a word, e.g. `sm(L)`.
///
/// Serialized as its short code both through `Display` and serde.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct GenderTag {
    pub class: GenderClass,
    pub number: Number,
    pub grade: Grade,
}

impl GenderTag {
    pub const fn new(class: GenderClass, number: Number, grade: Grade) -> Self {
        Self { class, number, grade }
    }

    /// List-grade tag for an exact word-list match.
    pub const fn listed(class: GenderClass, number: Number) -> Self {
        Self::new(class, number, Grade::List)
    }

    /// `po(L)`.
    pub const fn plural_only() -> Self {
        Self::listed(GenderClass::PluralOnly, Number::Plural)
    }

    /// `v+(L)`.
    pub const fn infinitive() -> Self {
        Self::listed(GenderClass::InfinitiveVerb, Number::Singular)
    }
}

impl fmt::Display for GenderTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let grade = self.grade.code();
        let class = match self.class {
            GenderClass::Masculine => 'm',
            GenderClass::Feminine => 'f',
            GenderClass::Neuter => 'n',
            GenderClass::PluralOnly => 'o',
            // Verb-nouns carry no number in their code.
            GenderClass::InfinitiveVerb => return write!(f, "v+({grade})"),
        };
        let number = match self.number {
            Number::Singular => 's',
            Number::Plural => 'p',
        };
        write!(f, "{number}{class}({grade})")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid gender tag code '{0}'")]
pub struct TagParseError(pub String);

impl FromStr for GenderTag {
    type Err = TagParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || TagParseError(s.to_string());

        if s == "v+" || s == "v+(L)" {
            return Ok(GenderTag::infinitive());
        }

        let mut chars = s.chars();
        let number = match chars.next() {
            Some('s') => Number::Singular,
            Some('p') => Number::Plural,
            _ => return Err(err()),
        };
        let class = match (chars.next(), number) {
            (Some('m'), _) => GenderClass::Masculine,
            (Some('f'), _) => GenderClass::Feminine,
            (Some('n'), _) => GenderClass::Neuter,
            (Some('o'), Number::Plural) => GenderClass::PluralOnly,
            _ => return Err(err()),
        };
        let grade = match (chars.next(), chars.next(), chars.next(), chars.next()) {
            (Some('('), Some(c), Some(')'), None) => Grade::from_code(c).ok_or_else(err)?,
            _ => return Err(err()),
        };

        Ok(GenderTag::new(class, number, grade))
    }
}

impl From<GenderTag> for String {
    fn from(tag: GenderTag) -> Self {
        tag.to_string()
    }
}

impl TryFrom<String> for GenderTag {
    type Error = TagParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Classification result for a single word, as reported by the CLI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordReport {
    pub word: String,
    pub tags: Vec<GenderTag>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub syllables: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        let sm = GenderTag::listed(GenderClass::Masculine, Number::Singular);
        assert_eq!(sm.to_string(), "sm(L)");
        assert_eq!(GenderTag::plural_only().to_string(), "po(L)");
        assert_eq!(GenderTag::infinitive().to_string(), "v+(L)");
        let pn = GenderTag::new(GenderClass::Neuter, Number::Plural, Grade::Guess);
        assert_eq!(pn.to_string(), "pn(G)");
    }

    #[test]
    fn test_parse_codes() {
        for code in ["sm(L)", "pf(A)", "sn(G)", "po(L)", "v+(L)"] {
            let tag: GenderTag = code.parse().unwrap();
            assert_eq!(tag.to_string(), code);
        }
        assert_eq!("v+".parse::<GenderTag>().unwrap(), GenderTag::infinitive());
    }

    #[test]
    fn test_parse_rejects_bad_codes() {
        for code in ["", "sm", "so(L)", "xm(L)", "sm(X)", "sm(L)x", "sm[L]"] {
            assert!(code.parse::<GenderTag>().is_err(), "{code} should not parse");
        }
    }

    #[test]
    fn test_serde_uses_code() {
        let tags = vec![
            GenderTag::new(GenderClass::Feminine, Number::Singular, Grade::Absolute),
            GenderTag::infinitive(),
        ];
        let json = serde_json::to_string(&tags).unwrap();
        assert_eq!(json, r#"["sf(A)","v+(L)"]"#);
        let back: Vec<GenderTag> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tags);
    }
}
