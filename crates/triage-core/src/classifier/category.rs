//! Category detector - first-match-wins over ordered pattern lists.

use regex::Regex;

use super::types::Category;
use crate::config::CategoryPatterns;
use crate::errors::ConfigError;

/// Compiled category pattern lists, checked in task > stakeholder > note
/// order so a text matching several lists files under the highest one.
#[derive(Debug)]
pub struct CategoryDetector {
    task: Vec<Regex>,
    stakeholder: Vec<Regex>,
    note: Vec<Regex>,
}

impl CategoryDetector {
    pub fn compile(patterns: &CategoryPatterns) -> Result<Self, ConfigError> {
        Ok(Self {
            task: compile_all(&patterns.task)?,
            stakeholder: compile_all(&patterns.stakeholder)?,
            note: compile_all(&patterns.note)?,
        })
    }

    /// Detect the category for non-empty text. Note is the fallback when no
    /// list matches.
    pub fn detect(&self, text: &str) -> Category {
        let ordered = [
            (Category::Task, &self.task),
            (Category::Stakeholder, &self.stakeholder),
            (Category::Note, &self.note),
        ];
        for (category, patterns) in ordered {
            if patterns.iter().any(|re| re.is_match(text)) {
                return category;
            }
        }
        Category::Note
    }
}

fn compile_all(sources: &[String]) -> Result<Vec<Regex>, ConfigError> {
    sources
        .iter()
        .map(|source| {
            Regex::new(source).map_err(|e| ConfigError::InvalidPattern {
                pattern: source.clone(),
                source: e,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detector() -> CategoryDetector {
        CategoryDetector::compile(&CategoryPatterns::default()).unwrap()
    }

    #[test]
    fn action_verbs_are_tasks() {
        let d = detector();
        assert_eq!(d.detect("remind me to finish the report"), Category::Task);
        assert_eq!(d.detect("schedule a meeting"), Category::Task);
        assert_eq!(d.detect("I need to review the budget"), Category::Task);
    }

    #[test]
    fn preposition_and_digit_is_a_task() {
        let d = detector();
        assert_eq!(d.detect("submit the form by 5pm"), Category::Task);
    }

    #[test]
    fn role_nouns_and_name_phrases_are_stakeholders() {
        let d = detector();
        assert_eq!(d.detect("new client from the expo"), Category::Stakeholder);
        assert_eq!(d.detect("Bob mentioned the contract"), Category::Stakeholder);
    }

    #[test]
    fn task_beats_stakeholder_on_tie() {
        // "call" is a task keyword even though "call Alice" also fits the
        // stakeholder verb-phrase pattern.
        let d = detector();
        assert_eq!(d.detect("call Alice"), Category::Task);
    }

    #[test]
    fn unmatched_text_falls_through_to_note() {
        let d = detector();
        assert_eq!(d.detect("xyzzy plugh"), Category::Note);
        assert_eq!(d.detect("Random Capitalized Words"), Category::Note);
    }

    #[test]
    fn invalid_pattern_is_a_config_error() {
        let patterns = CategoryPatterns {
            task: vec!["(unclosed".to_string()],
            ..CategoryPatterns::default()
        };
        let err = CategoryDetector::compile(&patterns).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPattern { .. }));
    }
}
