use textnorm::{InputCase, LocaleData, NormalizeError, Normalizer, parse_record};

fn spanish() -> Normalizer {
    let mut normalizer = Normalizer::builder().language("es").build();
    let data = LocaleData::builtin("es").unwrap();
    normalizer.load_grammars("es", &data).unwrap();
    normalizer
}

fn english() -> Normalizer {
    let mut normalizer = Normalizer::builder().language("en").build();
    let data = LocaleData::builtin("en").unwrap();
    normalizer.load_grammars("en", &data).unwrap();
    normalizer
}

#[test]
fn normalizes_spanish_dates() {
    let normalizer = spanish();
    assert_eq!(
        normalizer.normalize("uno de enero").unwrap().as_deref(),
        Some("1 de enero"),
    );
    assert_eq!(
        normalizer.normalize("veintidós de marzo").unwrap().as_deref(),
        Some("22 de marzo"),
    );
}

#[test]
fn normalizes_english_times() {
    let normalizer = english();
    assert_eq!(
        normalizer.normalize("twelve thirty").unwrap().as_deref(),
        Some("12:30"),
    );
    assert_eq!(
        normalizer
            .normalize("meet at nine forty five")
            .unwrap()
            .as_deref(),
        Some("meet at 9:45"),
    );
}

#[test]
fn normalizes_spanish_ordinals() {
    let normalizer = spanish();
    assert_eq!(
        normalizer
            .normalize("llegó en segundo lugar")
            .unwrap()
            .as_deref(),
        Some("llegó en 2º lugar"),
    );
    assert_eq!(
        normalizer.normalize("la tercera vez").unwrap().as_deref(),
        Some("la 3ª vez"),
    );
}

#[test]
fn year_records_verbalize_verbatim() {
    let normalizer = spanish();
    let rendered = normalizer
        .verbalize("tokens { date { year: \"1984\" } }")
        .unwrap();
    assert_eq!(rendered[0].output, "1984");
}

#[test]
fn whitelist_entries_survive_embedded_spaces() {
    let normalizer = spanish();
    assert_eq!(
        normalizer.normalize("por ejemplo").unwrap().as_deref(),
        Some("p. ej."),
    );
}

#[test]
fn unmatched_words_pass_through() {
    let normalizer = spanish();
    assert_eq!(
        normalizer.normalize("hola mundo").unwrap().as_deref(),
        Some("hola mundo"),
    );
}

#[test]
fn uncovered_input_is_not_an_error() {
    let normalizer = spanish();
    assert_eq!(normalizer.normalize("").unwrap(), None);
    // A literal quote cannot appear in any token record.
    assert_eq!(normalizer.normalize("\"").unwrap(), None);
    assert!(normalizer.tag("\"").unwrap().is_empty());
}

#[test]
fn unloaded_language_reports_suggestions() {
    let mut normalizer = spanish();
    normalizer.set_language("ez");
    let err = normalizer.normalize("hola").unwrap_err();
    match &err {
        NormalizeError::LanguageNotLoaded {
            language,
            suggestions,
        } => {
            assert_eq!(language, "ez");
            assert_eq!(suggestions, &["es".to_string()]);
        }
    }
    assert!(err.to_string().contains("did you mean 'es'"));
}

#[test]
fn tagged_records_parse_and_verbalize() {
    let normalizer = spanish();
    let tags = normalizer.tag("uno de enero").unwrap();
    assert_eq!(tags.len(), 1);

    let record = parse_record(&tags[0].output).unwrap();
    assert_eq!(record.name(), "tokens");

    let rendered = normalizer.verbalize(&tags[0].output).unwrap();
    assert_eq!(rendered[0].output, "1 de enero");
}

#[test]
fn nondeterministic_mode_ranks_alternatives() {
    let mut normalizer = Normalizer::builder()
        .language("es")
        .deterministic(false)
        .build();
    let data = LocaleData::builtin("es").unwrap();
    normalizer.load_grammars("es", &data).unwrap();

    let candidates = normalizer.candidates("uno de enero", 5).unwrap();
    assert_eq!(candidates[0].output, "1 de enero");
    // The word-by-word reading survives as a weaker alternative.
    assert!(candidates.iter().any(|c| c.output == "uno de enero"));
    assert!(candidates.windows(2).all(|w| w[0].weight <= w[1].weight));
}

#[test]
fn cased_mode_accepts_sentence_capitalization() {
    let mut normalizer = Normalizer::builder()
        .language("es")
        .input_case(InputCase::Cased)
        .build();
    let data = LocaleData::builtin("es").unwrap();
    normalizer.load_grammars("es", &data).unwrap();
    assert_eq!(
        normalizer.normalize("Uno de enero").unwrap().as_deref(),
        Some("1 de enero"),
    );
}

#[test]
fn pluralizer_follows_the_active_language() {
    let normalizer = english();
    let plural = normalizer.pluralizer().unwrap();
    assert_eq!(plural.pluralize("child"), "children");
    assert_eq!(plural.pluralize("city"), "cities");
    assert_eq!(plural.singularize("feet"), Some("foot".to_string()));
}

#[test]
fn languages_load_independently() {
    let mut normalizer = spanish();
    let en = LocaleData::builtin("en").unwrap();
    normalizer.load_grammars("en", &en).unwrap();
    assert_eq!(normalizer.loaded_languages(), vec!["en", "es"]);

    normalizer.set_language("en");
    assert_eq!(
        normalizer.normalize("twelve thirty").unwrap().as_deref(),
        Some("12:30"),
    );
    normalizer.set_language("es");
    assert_eq!(
        normalizer.normalize("cinco de mayo").unwrap().as_deref(),
        Some("5 de mayo"),
    );
}
