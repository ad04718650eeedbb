// Heuristic German syllabifier.
//
// Only drives the strip-a-syllable fallback in the classifier, so it aims
// for stable, deterministic chunks rather than dictionary hyphenation.

const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u', 'y', 'ä', 'ö', 'ü'];

const DIPHTHONGS: &[&str] = &["ie", "ei", "ai", "au", "äu", "eu", "ey", "oi", "ui", "ou"];

/// Clusters that never straddle a syllable boundary and so stay together
/// as the onset of the following syllable.
const ONSET_CLUSTERS: &[&str] = &[
    "sch", "ch", "ck", "ph", "th", "ng", "qu", "ts", "tz", "sp", "st", "sc", "pf", "tr", "dr",
    "kr", "gr", "pr", "br", "str", "spr", "skr", "kn", "gn",
];

const PLOSIVES: &[char] = &['p', 't', 'k'];
const LIQUIDS: &[char] = &['l', 'r'];

/// A trailing "-zen" is folded into the previous syllable.
const NON_SYLLABIC_TAIL: &str = "zen";

fn is_vowel(c: char) -> bool {
    c.to_lowercase().all(|l| VOWELS.contains(&l))
}

fn lower(chars: &[char]) -> String {
    chars.iter().flat_map(|c| c.to_lowercase()).collect()
}

fn next_vowel(chars: &[char], from: usize) -> Option<usize> {
    chars
        .iter()
        .skip(from)
        .position(|&c| is_vowel(c))
        .map(|offset| from + offset)
}

/// Split `word` into syllable-like chunks, preserving case. The chunks
/// always concatenate back to `word`.
pub fn syllabify(word: &str) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    let mut syllables: Vec<String> = Vec::new();
    let mut start = 0;

    while start < chars.len() {
        let Some(vowel) = next_vowel(&chars, start) else {
            let rest: String = chars[start..].iter().collect();
            match syllables.last_mut() {
                Some(last) => last.push_str(&rest),
                None => syllables.push(rest),
            }
            break;
        };

        let mut nucleus_end = vowel + 1;
        if let Some(pair) = chars.get(vowel..vowel + 2) {
            if DIPHTHONGS.contains(&lower(pair).as_str()) {
                nucleus_end = vowel + 2;
            }
        }

        let Some(next) = next_vowel(&chars, nucleus_end) else {
            syllables.push(chars[start..].iter().collect());
            break;
        };

        let boundary = nucleus_end + coda_length(&lower(&chars[nucleus_end..next]));
        syllables.push(chars[start..boundary].iter().collect());
        start = boundary;
    }

    if syllables.len() > 1
        && syllables.last().is_some_and(|s| s.to_lowercase() == NON_SYLLABIC_TAIL)
    {
        if let Some(tail) = syllables.pop() {
            if let Some(prev) = syllables.last_mut() {
                prev.push_str(&tail);
            }
        }
    }

    syllables
}

/// Number of leading cluster characters that stay in the current syllable's
/// coda. The rest becomes the next syllable's onset.
fn coda_length(cluster: &str) -> usize {
    let chars: Vec<char> = cluster.chars().collect();

    for k in 0..chars.len() {
        let tail = &chars[k..];
        if tail.len() == 1 || ONSET_CLUSTERS.contains(&lower(tail).as_str()) {
            return k;
        }
        if tail.len() == 2 && splits_before_pair(tail[0], tail[1]) {
            return k;
        }
        if tail.len() == 3
            && tail[0] == 's'
            && PLOSIVES.contains(&tail[1])
            && LIQUIDS.contains(&tail[2])
        {
            return k;
        }
    }

    chars.len().saturating_sub(1)
}

/// Two-consonant onsets: consonant + liquid, "s" + plosive, or a stop + "n".
fn splits_before_pair(first: char, second: char) -> bool {
    LIQUIDS.contains(&second)
        || (first == 's' && PLOSIVES.contains(&second))
        || (second == 'n' && matches!(first, 'p' | 't' | 'k' | 'b' | 'd' | 'g'))
}
