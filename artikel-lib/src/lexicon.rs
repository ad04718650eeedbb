use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, info};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

const EMBEDDED_JSON: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/lexicon.json"));

/// Marks "no singular" in field 0, or "no further variants" among the plurals.
pub const PLACEHOLDER: &str = "—";

static GLOBAL: OnceCell<Lexicon> = OnceCell::new();

// ---------------------------------------------------------------------------
// Sources and errors
// ---------------------------------------------------------------------------

/// The word lists a lexicon is built from, one per source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Masculine,
    Feminine,
    Neuter,
    PluralOnly,
    Infinitives,
    WeakMasculine,
}

impl ListKind {
    pub fn file_name(self) -> &'static str {
        match self {
            ListKind::Masculine => "der.txt",
            ListKind::Feminine => "die.txt",
            ListKind::Neuter => "das.txt",
            ListKind::PluralOnly => "plural-only.txt",
            ListKind::Infinitives => "verbs.txt",
            ListKind::WeakMasculine => "weak.txt",
        }
    }
}

impl fmt::Display for ListKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    #[error("cannot read word list {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed entry in {list} at line {line}: {reason}")]
    Malformed {
        list: ListKind,
        line: usize,
        reason: &'static str,
    },

    #[error("embedded word lists are invalid: {0}")]
    Embedded(#[from] serde_json::Error),
}

/// Raw text of every word list. The two optional lists select the
/// noun+verb-aware variant of the lexicon; without them those relations
/// are simply empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LexiconSources {
    pub masculine: String,
    pub feminine: String,
    pub neuter: String,
    pub plural_only: String,
    #[serde(default)]
    pub infinitives: Option<String>,
    #[serde(default)]
    pub weak_masculine: Option<String>,
}

// ---------------------------------------------------------------------------
// Lexicon
// ---------------------------------------------------------------------------

/// Immutable word lists keyed by gender and number. All forms are stored
/// lowercase; callers must lowercase their queries.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    masculine_singular: HashSet<String>,
    masculine_plural: HashSet<String>,
    feminine_singular: HashSet<String>,
    feminine_plural: HashSet<String>,
    neuter_singular: HashSet<String>,
    neuter_plural: HashSet<String>,
    plural_only: HashSet<String>,
    infinitives: HashSet<String>,
    weak_masculine: HashSet<String>,
}

/// Relation sizes, for logging and diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LexiconStats {
    pub masculine_singular: usize,
    pub masculine_plural: usize,
    pub feminine_singular: usize,
    pub feminine_plural: usize,
    pub neuter_singular: usize,
    pub neuter_plural: usize,
    pub plural_only: usize,
    pub infinitives: usize,
    pub weak_masculine: usize,
}

impl Lexicon {
    /// Build a lexicon from in-memory word lists.
    pub fn from_sources(sources: &LexiconSources) -> Result<Self, LexiconError> {
        let (masculine_singular, masculine_plural) =
            parse_list(ListKind::Masculine, &sources.masculine)?;
        let (feminine_singular, feminine_plural) =
            parse_list(ListKind::Feminine, &sources.feminine)?;
        let (neuter_singular, neuter_plural) = parse_list(ListKind::Neuter, &sources.neuter)?;

        // Singulars in the plural-only list are discarded.
        let (_, plural_only) = parse_list(ListKind::PluralOnly, &sources.plural_only)?;

        let infinitives = match &sources.infinitives {
            Some(text) => parse_flat_list(ListKind::Infinitives, text)?,
            None => HashSet::new(),
        };
        let weak_masculine = match &sources.weak_masculine {
            Some(text) => parse_flat_list(ListKind::WeakMasculine, text)?,
            None => HashSet::new(),
        };

        let lexicon = Self {
            masculine_singular,
            masculine_plural,
            feminine_singular,
            feminine_plural,
            neuter_singular,
            neuter_plural,
            plural_only,
            infinitives,
            weak_masculine,
        };
        debug!("built lexicon: {:?}", lexicon.stats());
        Ok(lexicon)
    }

    /// Load the word lists bundled into the crate at compile time.
    pub fn embedded() -> Result<Self, LexiconError> {
        let sources: LexiconSources = serde_json::from_slice(EMBEDDED_JSON)?;
        Self::from_sources(&sources)
    }

    /// Load word lists from `dir`. `der.txt`, `die.txt`, `das.txt` and
    /// `plural-only.txt` are required; `verbs.txt` and `weak.txt` are
    /// optional.
    pub fn load_dir(dir: impl AsRef<Path>) -> Result<Self, LexiconError> {
        let dir = dir.as_ref();
        let sources = LexiconSources {
            masculine: read_required(dir, ListKind::Masculine)?,
            feminine: read_required(dir, ListKind::Feminine)?,
            neuter: read_required(dir, ListKind::Neuter)?,
            plural_only: read_required(dir, ListKind::PluralOnly)?,
            infinitives: read_optional(dir, ListKind::Infinitives)?,
            weak_masculine: read_optional(dir, ListKind::WeakMasculine)?,
        };
        info!("loading word lists from {}", dir.display());
        Self::from_sources(&sources)
    }

    pub fn is_masculine_singular(&self, word: &str) -> bool {
        self.masculine_singular.contains(word)
    }

    pub fn is_masculine_plural(&self, word: &str) -> bool {
        self.masculine_plural.contains(word)
    }

    pub fn is_feminine_singular(&self, word: &str) -> bool {
        self.feminine_singular.contains(word)
    }

    pub fn is_feminine_plural(&self, word: &str) -> bool {
        self.feminine_plural.contains(word)
    }

    pub fn is_neuter_singular(&self, word: &str) -> bool {
        self.neuter_singular.contains(word)
    }

    pub fn is_neuter_plural(&self, word: &str) -> bool {
        self.neuter_plural.contains(word)
    }

    pub fn is_plural_only(&self, word: &str) -> bool {
        self.plural_only.contains(word)
    }

    /// True if `word` ends with any plural-only form (including the form
    /// itself), so compounds like "großeltern" are caught.
    pub fn ends_with_plural_only(&self, word: &str) -> bool {
        self.plural_only.iter().any(|p| word.ends_with(p.as_str()))
    }

    pub fn is_infinitive(&self, word: &str) -> bool {
        self.infinitives.contains(word)
    }

    /// True if `word` is a weak masculine plural that also serves as an
    /// oblique singular ("menschen").
    pub fn is_weak_masculine(&self, word: &str) -> bool {
        self.weak_masculine.contains(word)
    }

    pub fn stats(&self) -> LexiconStats {
        LexiconStats {
            masculine_singular: self.masculine_singular.len(),
            masculine_plural: self.masculine_plural.len(),
            feminine_singular: self.feminine_singular.len(),
            feminine_plural: self.feminine_plural.len(),
            neuter_singular: self.neuter_singular.len(),
            neuter_plural: self.neuter_plural.len(),
            plural_only: self.plural_only.len(),
            infinitives: self.infinitives.len(),
            weak_masculine: self.weak_masculine.len(),
        }
    }
}

// ---------------------------------------------------------------------------
// Process-wide instance
// ---------------------------------------------------------------------------

/// The process-wide lexicon, built from the embedded word lists on first use
/// unless [`init_global`] installed another one first.
pub fn global() -> Result<&'static Lexicon, LexiconError> {
    GLOBAL.get_or_try_init(|| {
        info!("initialising embedded lexicon");
        Lexicon::embedded()
    })
}

/// Install `lexicon` as the process-wide instance. Only the first call has
/// any effect; later calls return the lexicon already installed.
pub fn init_global(lexicon: Lexicon) -> &'static Lexicon {
    let mut fresh = Some(lexicon);
    let installed = GLOBAL.get_or_init(|| fresh.take().unwrap_or_default());
    if fresh.is_some() {
        debug!("global lexicon already initialised; ignoring new one");
    }
    installed
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Parse a gendered list: one entry per line, tab-separated, singular first
/// then plural variants. Returns (singulars, plurals).
///
/// A leading UTF-8 BOM is ignored and `\r\n` line endings are accepted.
fn parse_list(
    list: ListKind,
    text: &str,
) -> Result<(HashSet<String>, HashSet<String>), LexiconError> {
    let mut singulars = HashSet::new();
    let mut plurals = HashSet::new();

    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    for (idx, raw) in text.lines().enumerate() {
        // Only trailing whitespace is stripped: a leading tab means the
        // singular field is empty.
        let line = raw.trim_end().to_lowercase();
        if line.trim_start().is_empty() || line.trim_start().starts_with('#') {
            continue;
        }
        let malformed = |reason| LexiconError::Malformed { list, line: idx + 1, reason };

        let mut fields = line.split('\t');
        let head = fields.next().unwrap_or_default().trim();
        if head.is_empty() {
            return Err(malformed("missing singular form"));
        }

        let mut variants = 0;
        for field in fields {
            let field = field.trim();
            if field == PLACEHOLDER {
                break;
            }
            if field.is_empty() {
                return Err(malformed("empty plural variant"));
            }
            plurals.insert(field.to_string());
            variants += 1;
        }

        if head == PLACEHOLDER {
            if variants == 0 {
                return Err(malformed("placeholder singular without a plural"));
            }
        } else {
            singulars.insert(head.to_string());
        }
    }

    Ok((singulars, plurals))
}

/// Parse a single-relation list where every form on every line belongs to
/// the same set.
fn parse_flat_list(list: ListKind, text: &str) -> Result<HashSet<String>, LexiconError> {
    let (mut forms, plurals) = parse_list(list, text)?;
    forms.extend(plurals);
    Ok(forms)
}

fn read_required(dir: &Path, list: ListKind) -> Result<String, LexiconError> {
    let path = dir.join(list.file_name());
    fs::read_to_string(&path).map_err(|source| LexiconError::Io { path, source })
}

fn read_optional(dir: &Path, list: ListKind) -> Result<Option<String>, LexiconError> {
    let path = dir.join(list.file_name());
    match fs::read_to_string(&path) {
        Ok(text) => Ok(Some(text)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!("optional word list {} not found", path.display());
            Ok(None)
        }
        Err(source) => Err(LexiconError::Io { path, source }),
    }
}
