//! English-style pluralization with suppletive exceptions.
//!
//! Rules apply in priority order; the first match wins:
//!   1. suppletive exception table (`child` -> `children`)
//!   2. consonant + `y` -> `ies`
//!   3. sibilant ending (`s`, `sh`, `ch`, `x`, `z`) -> `es`
//!   4. `s`
//!
//! The inverse direction honors the same priorities, so a word round
//! trips through pluralize/singularize whenever its plural is
//! unambiguous.

use std::collections::HashMap;

/// Priority-ordered plural transform.
#[derive(Debug, Clone, Default)]
pub struct Pluralizer {
    exceptions: HashMap<String, String>,
    reverse: HashMap<String, String>,
}

impl Pluralizer {
    /// Regular rules only, no exception table.
    pub fn new() -> Self {
        Pluralizer::default()
    }

    /// Regular rules plus a suppletive (singular, plural) table. The
    /// table wins over every regular rule, in both directions.
    pub fn with_exceptions(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut exceptions = HashMap::new();
        let mut reverse = HashMap::new();
        for (singular, plural) in pairs {
            reverse.insert(plural.clone(), singular.clone());
            exceptions.insert(singular, plural);
        }
        Pluralizer {
            exceptions,
            reverse,
        }
    }

    /// The plural form of `word`.
    pub fn pluralize(&self, word: &str) -> String {
        if let Some(plural) = self.exceptions.get(word) {
            return plural.clone();
        }
        if let Some(stem) = word.strip_suffix('y') {
            if stem.chars().last().is_some_and(is_consonant) {
                return format!("{stem}ies");
            }
        }
        if has_sibilant_ending(word) {
            return format!("{word}es");
        }
        format!("{word}s")
    }

    /// The singular form of `word`, or `None` when `word` does not look
    /// like a plural.
    pub fn singularize(&self, word: &str) -> Option<String> {
        if let Some(singular) = self.reverse.get(word) {
            return Some(singular.clone());
        }
        if let Some(stem) = word.strip_suffix("ies") {
            if stem.chars().last().is_some_and(is_consonant) {
                return Some(format!("{stem}y"));
            }
        }
        if let Some(stem) = word.strip_suffix("es") {
            if has_sibilant_ending(stem) {
                return Some(stem.to_string());
            }
        }
        word.strip_suffix('s')
            .filter(|stem| !stem.is_empty())
            .map(str::to_string)
    }
}

fn is_consonant(c: char) -> bool {
    c.is_ascii_alphabetic() && !matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u')
}

fn has_sibilant_ending(word: &str) -> bool {
    word.ends_with('s')
        || word.ends_with("sh")
        || word.ends_with("ch")
        || word.ends_with('x')
        || word.ends_with('z')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn suppletive() -> Pluralizer {
        Pluralizer::with_exceptions([
            ("child".to_string(), "children".to_string()),
            ("foot".to_string(), "feet".to_string()),
            ("sheep".to_string(), "sheep".to_string()),
        ])
    }

    #[test]
    fn exceptions_win_over_rules() {
        let p = suppletive();
        assert_eq!(p.pluralize("child"), "children");
        assert_eq!(p.pluralize("foot"), "feet");
        assert_eq!(p.pluralize("sheep"), "sheep");
    }

    #[test]
    fn consonant_y_becomes_ies() {
        let p = Pluralizer::new();
        assert_eq!(p.pluralize("lady"), "ladies");
        assert_eq!(p.pluralize("city"), "cities");
        // vowel + y takes the default rule
        assert_eq!(p.pluralize("day"), "days");
    }

    #[test]
    fn sibilant_endings_take_es() {
        let p = Pluralizer::new();
        assert_eq!(p.pluralize("bus"), "buses");
        assert_eq!(p.pluralize("dish"), "dishes");
        assert_eq!(p.pluralize("church"), "churches");
        assert_eq!(p.pluralize("box"), "boxes");
        assert_eq!(p.pluralize("quiz"), "quizes");
    }

    #[test]
    fn default_rule_appends_s() {
        let p = Pluralizer::new();
        assert_eq!(p.pluralize("cat"), "cats");
        assert_eq!(p.pluralize("shoe"), "shoes");
    }

    #[test]
    fn singularize_inverts_each_rule() {
        let p = suppletive();
        assert_eq!(p.singularize("children"), Some("child".to_string()));
        assert_eq!(p.singularize("sheep"), Some("sheep".to_string()));
        assert_eq!(p.singularize("ladies"), Some("lady".to_string()));
        assert_eq!(p.singularize("buses"), Some("bus".to_string()));
        assert_eq!(p.singularize("boxes"), Some("box".to_string()));
        assert_eq!(p.singularize("cats"), Some("cat".to_string()));
        assert_eq!(p.singularize("shoes"), Some("shoe".to_string()));
    }

    #[test]
    fn singularize_rejects_non_plurals() {
        let p = Pluralizer::new();
        assert_eq!(p.singularize("cat"), None);
        assert_eq!(p.singularize("s"), None);
    }

    #[test]
    fn round_trips_through_both_directions() {
        let p = suppletive();
        for word in ["child", "lady", "bus", "box", "cat", "day"] {
            let plural = p.pluralize(word);
            assert_eq!(p.singularize(&plural).as_deref(), Some(word));
        }
    }
}
