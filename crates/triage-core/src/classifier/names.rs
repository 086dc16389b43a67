//! Name extraction - proper-noun heuristic with a denylist.

use regex::Regex;
use smallvec::SmallVec;

use crate::config::NameRules;
use crate::errors::ConfigError;

/// Extracts candidate names as consecutive capitalized token runs, dropping
/// common sentence-initial capitalized words. Order of appearance is
/// preserved; the first entry is the caller's best-guess contact name.
#[derive(Debug)]
pub struct NameExtractor {
    pattern: Regex,
    denylist: Vec<String>,
}

impl NameExtractor {
    pub fn compile(rules: &NameRules) -> Result<Self, ConfigError> {
        let pattern = Regex::new(&rules.pattern).map_err(|e| ConfigError::InvalidPattern {
            pattern: rules.pattern.clone(),
            source: e,
        })?;
        Ok(Self {
            pattern,
            denylist: rules.denylist.clone(),
        })
    }

    pub fn extract(&self, text: &str) -> SmallVec<[String; 4]> {
        self.pattern
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .filter(|candidate| !self.denylist.iter().any(|word| word == candidate))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> NameExtractor {
        NameExtractor::compile(&NameRules::default()).unwrap()
    }

    #[test]
    fn denylisted_words_are_dropped() {
        let names = extractor().extract("Today I need to call Bob");
        assert_eq!(names.as_slice(), ["Bob".to_string()]);
    }

    #[test]
    fn consecutive_capitalized_tokens_form_one_name() {
        let names = extractor().extract("lunch with Alice Johnson at noon");
        assert_eq!(names.as_slice(), ["Alice Johnson".to_string()]);
    }

    #[test]
    fn appearance_order_is_preserved() {
        let names = extractor().extract("Carol introduced Bob to Alice");
        assert_eq!(
            names.as_slice(),
            [
                "Carol".to_string(),
                "Bob".to_string(),
                "Alice".to_string()
            ]
        );
    }

    #[test]
    fn lowercase_text_yields_nothing() {
        assert!(extractor().extract("nothing capitalized here").is_empty());
    }
}
