// Regression tests against the bundled word lists.

use artikel_lib::{syllabify, Classifier, GenderClass, Grade, Lexicon};

fn lexicon() -> Lexicon {
    Lexicon::embedded().expect("embedded lexicon should load")
}

fn codes(lex: &Lexicon, word: &str) -> Vec<String> {
    Classifier::new(lex).classify_codes(word, None)
}

#[test]
fn kaninchen_is_diminutive() {
    let lex = lexicon();
    let result = codes(&lex, "Kaninchen");
    assert!(
        result.iter().any(|c| c.starts_with("sn")),
        "Kaninchen should carry a neuter singular tag, got {result:?}"
    );
    assert_eq!(result, ["sn(G)", "pn(G)"]);
}

#[test]
fn katze_is_listed_feminine() {
    let lex = lexicon();
    assert!(codes(&lex, "Katze").contains(&"sf(L)".to_string()));
}

#[test]
fn lowercase_word_is_not_a_noun() {
    let lex = lexicon();
    assert!(codes(&lex, "hund").is_empty());
}

#[test]
fn herzens_is_fixed() {
    let lex = lexicon();
    assert_eq!(codes(&lex, "Herzens"), ["sn(L)", "pn(L)"]);
}

#[test]
fn plural_only_words_and_endings() {
    let lex = lexicon();
    for word in ["Leute", "Eltern", "Ferien", "Großeltern", "Fachleute", "Unkosten"] {
        assert_eq!(codes(&lex, word), ["po(L)"], "{word} should be plural-only");
    }
}

#[test]
fn single_relation_words() {
    let lex = lexicon();
    let cases = [
        ("Hund", "sm(L)"),
        ("Katze", "sf(L)"),
        ("Buch", "sn(L)"),
        ("Hunde", "pm(L)"),
        ("Katzen", "pf(L)"),
        ("Bücher", "pn(L)"),
    ];
    for (word, expected) in cases {
        assert_eq!(codes(&lex, word), [expected], "{word}");
    }
}

#[test]
fn words_in_several_relations() {
    let lex = lexicon();
    assert_eq!(codes(&lex, "Kiefer"), ["sm(L)", "sf(L)", "pm(L)"]);
    assert_eq!(codes(&lex, "Mädchen"), ["sn(L)", "pn(L)"]);
    assert_eq!(codes(&lex, "Fenster"), ["sn(L)", "pn(L)"]);
}

#[test]
fn weak_masculine_plural_doubles_as_singular() {
    let lex = lexicon();
    assert_eq!(codes(&lex, "Menschen"), ["pm(L)", "sm(L)"]);
    assert_eq!(codes(&lex, "Studenten"), ["pm(L)", "sm(L)"]);
    assert_eq!(codes(&lex, "Mensch"), ["sm(L)"]);
}

#[test]
fn verb_nouns() {
    let lex = lexicon();
    assert_eq!(codes(&lex, "Schwimmen"), ["v+(L)"]);
    assert_eq!(codes(&lex, "Leben"), ["sn(L)", "v+(L)"]);
}

#[test]
fn absolute_grade_never_falls_through_to_guess() {
    let lex = lexicon();
    let result = Classifier::new(&lex).classify("Eigentümer", None);
    assert!(!result.is_empty());
    assert!(result.iter().all(|t| t.grade == Grade::Absolute), "{result:?}");
}

#[test]
fn guess_grade_when_nothing_else_matches() {
    let lex = lexicon();
    assert_eq!(codes(&lex, "Lehrer"), ["sm(G)", "pm(G)"]);
    assert_eq!(codes(&lex, "Ergebnis"), ["sn(G)"]);
}

#[test]
fn diminutive_is_always_neuter() {
    let lex = lexicon();
    for word in ["Kaninchen", "Männchen", "Stückchen", "Brötchen"] {
        let result = Classifier::new(&lex).classify(word, None);
        assert!(!result.is_empty(), "{word}");
        assert!(result.iter().all(|t| t.class == GenderClass::Neuter), "{word}: {result:?}");
    }
}

#[test]
fn compounds_fall_back_to_their_head() {
    let lex = lexicon();
    assert_eq!(codes(&lex, "Hundehütte"), ["sf(L)"]);
    assert_eq!(codes(&lex, "Kinderbuch"), ["sn(L)"]);
}

#[test]
fn fallback_terminates() {
    let lex = lexicon();
    let c = Classifier::new(&lex);
    let long_word = format!("A{}", "a".repeat(60));
    for word in ["Pst", "Brr", "Hmm", "Quatsch", "Xylophonklang", long_word.as_str()] {
        // Only needs to return.
        let _ = c.classify(word, None);
    }
    assert!(c.classify("Brr", None).is_empty());
    assert!(syllabify(&long_word).len() > artikel_lib::classify::MAX_STRIP_DEPTH);
}

#[test]
fn classification_is_idempotent() {
    let lex = lexicon();
    let c = Classifier::new(&lex);
    for word in ["Kiefer", "Kaninchen", "Hundehütte", "Menschen", "Pst"] {
        assert_eq!(c.classify(word, None), c.classify(word, None), "{word}");
    }
}

#[test]
fn context_does_not_change_default_result() {
    let lex = lexicon();
    let c = Classifier::new(&lex);
    assert_eq!(
        c.classify("Kiefer", Some("Im Wald steht die Kiefer")),
        c.classify("Kiefer", None)
    );
}
