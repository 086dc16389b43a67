//! Due-date hint extraction - ordered phrase table.

use regex::Regex;

use super::types::DueDateHint;
use crate::config::DueDatePhrase;
use crate::errors::ConfigError;

/// Compiled phrase table. First entry whose pattern matches wins; no match
/// leaves the hint unset. There is deliberately no fallback to "today".
#[derive(Debug)]
pub struct DueDateDetector {
    table: Vec<(DueDateHint, Regex)>,
}

impl DueDateDetector {
    pub fn compile(phrases: &[DueDatePhrase]) -> Result<Self, ConfigError> {
        let table = phrases
            .iter()
            .map(|entry| {
                Regex::new(&entry.pattern)
                    .map(|re| (entry.hint, re))
                    .map_err(|e| ConfigError::InvalidPattern {
                        pattern: entry.pattern.clone(),
                        source: e,
                    })
            })
            .collect::<Result<_, _>>()?;
        Ok(Self { table })
    }

    pub fn detect(&self, text: &str) -> Option<DueDateHint> {
        self.table
            .iter()
            .find(|(_, re)| re.is_match(text))
            .map(|(hint, _)| *hint)
    }
}
