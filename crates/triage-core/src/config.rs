//! Triage configuration - externally supplied pattern tables
//!
//! Every keyword list and regex the classifier uses lives here, so pattern
//! tuning is a config change, not a code change. `TriageConfig::default()`
//! embeds the built-in tables; a TOML file can override any section while
//! inheriting the rest via `#[serde(default)]`.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::classifier::DueDateHint;
use crate::errors::ConfigError;

/// Built-in task patterns: action verbs/nouns, obligation modals, and
/// preposition-plus-digit date shapes ("by 5", "before 12/01").
const DEFAULT_TASK_PATTERNS: &[&str] = &[
    r"(?i)\b(task|todo|remind|schedule|meeting|call|email|deadline|due|complete|finish|work on)\b",
    r"(?i)\b(need to|have to|must|should|will|going to)\b",
    r"(?i)\b(by|before|until|on|at)\s+\d",
];

/// Built-in stakeholder patterns: role nouns, verb phrase followed by a
/// capitalized name, and "Name said/mentioned/..." constructions.
const DEFAULT_STAKEHOLDER_PATTERNS: &[&str] = &[
    r"(?i)\b(person|contact|colleague|client|manager|team|boss|employee|partner)\b",
    r"\b(?i:meet with|talk to|call|email|discuss with)\s+[A-Z][a-z]+",
    r"\b[A-Z][a-z]+\s+(?i:said|mentioned|thinks|wants|needs)\b",
];

/// Built-in note patterns: idea/thought/reminder-to-self vocabulary. Note is
/// also the fallback when nothing matches, so these mostly document intent.
const DEFAULT_NOTE_PATTERNS: &[&str] = &[
    r"(?i)\b(idea|thought|remember|note|insight|observation)\b",
    r"(?i)\b(interesting|important|key point|takeaway)\b",
];

const DEFAULT_URGENT_WORDS: &[&str] = &["urgent", "asap", "critical", "emergency", "immediately"];
const DEFAULT_HIGH_WORDS: &[&str] = &["important", "high priority", "deadline", "soon"];
const DEFAULT_MEDIUM_WORDS: &[&str] = &["medium", "normal", "regular"];

/// Capitalized word sequences (one or more consecutive capitalized tokens).
const DEFAULT_NAME_PATTERN: &str = r"\b[A-Z][a-z]+(?:\s+[A-Z][a-z]+)*\b";

/// Common sentence-initial capitalized words that are not names.
const DEFAULT_NAME_DENYLIST: &[&str] = &["I", "The", "This", "That", "Today", "Tomorrow"];

/// Top-level triage configuration.
///
/// All sections default independently, so a partial TOML file overrides only
/// the tables it names.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TriageConfig {
    /// Category pattern lists, checked in task > stakeholder > note order.
    pub category: CategoryPatterns,
    /// Priority tier vocabularies, checked in descending severity.
    pub priority: PriorityVocabulary,
    /// Ordered due-date phrase table; first matching entry wins.
    pub due_date: Vec<DueDatePhrase>,
    /// Name extraction pattern and denylist.
    pub names: NameRules,
    /// Per-category confidence constants.
    pub confidence: ConfidenceTable,
}

impl Default for TriageConfig {
    fn default() -> Self {
        Self {
            category: CategoryPatterns::default(),
            priority: PriorityVocabulary::default(),
            due_date: default_due_date_table(),
            names: NameRules::default(),
            confidence: ConfidenceTable::default(),
        }
    }
}

/// Regex source lists per category.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryPatterns {
    pub task: Vec<String>,
    pub stakeholder: Vec<String>,
    pub note: Vec<String>,
}

impl Default for CategoryPatterns {
    fn default() -> Self {
        Self {
            task: to_strings(DEFAULT_TASK_PATTERNS),
            stakeholder: to_strings(DEFAULT_STAKEHOLDER_PATTERNS),
            note: to_strings(DEFAULT_NOTE_PATTERNS),
        }
    }
}

/// Urgency vocabulary per tier. Words are matched as case-insensitive
/// substrings; anything not covered by a tier defaults to low priority.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PriorityVocabulary {
    pub urgent: Vec<String>,
    pub high: Vec<String>,
    pub medium: Vec<String>,
}

impl Default for PriorityVocabulary {
    fn default() -> Self {
        Self {
            urgent: to_strings(DEFAULT_URGENT_WORDS),
            high: to_strings(DEFAULT_HIGH_WORDS),
            medium: to_strings(DEFAULT_MEDIUM_WORDS),
        }
    }
}

/// One entry of the ordered due-date phrase table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DueDatePhrase {
    /// Hint emitted when the pattern matches.
    pub hint: DueDateHint,
    /// Regex source for the phrase.
    pub pattern: String,
}

/// Default due-date table. Absence of a match leaves the hint unset; there
/// is deliberately no "today" default.
fn default_due_date_table() -> Vec<DueDatePhrase> {
    let entries = [
        (DueDateHint::Today, r"(?i)\b(today|now|immediately)\b"),
        (DueDateHint::Tomorrow, r"(?i)\b(tomorrow|next day)\b"),
        (DueDateHint::ThisWeek, r"(?i)\b(this week|by friday|end of week)\b"),
        (DueDateHint::NextWeek, r"(?i)\b(next week|following week)\b"),
        (DueDateHint::ThisMonth, r"(?i)\b(this month|end of month)\b"),
    ];
    entries
        .into_iter()
        .map(|(hint, pattern)| DueDatePhrase {
            hint,
            pattern: pattern.to_string(),
        })
        .collect()
}

/// Name extraction rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NameRules {
    /// Proper-noun heuristic pattern.
    pub pattern: String,
    /// Exact-match denylist applied to extracted candidates.
    pub denylist: Vec<String>,
}

impl Default for NameRules {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_NAME_PATTERN.to_string(),
            denylist: to_strings(DEFAULT_NAME_DENYLIST),
        }
    }
}

/// Fixed heuristic confidence per category. Tunable constants, not
/// probabilities; values are clamped to [0, 1] at engine build time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfidenceTable {
    pub task: f32,
    pub stakeholder: f32,
    pub note: f32,
}

impl Default for ConfidenceTable {
    fn default() -> Self {
        Self {
            task: 0.9,
            stakeholder: 0.8,
            note: 0.7,
        }
    }
}

impl TriageConfig {
    /// Parse a config from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Load a config from a TOML file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tables_are_populated() {
        let config = TriageConfig::default();
        assert_eq!(config.category.task.len(), 3);
        assert_eq!(config.category.stakeholder.len(), 3);
        assert_eq!(config.due_date.len(), 5);
        assert_eq!(config.due_date[0].hint, DueDateHint::Today);
        assert!(config.names.denylist.contains(&"Today".to_string()));
    }

    #[test]
    fn partial_toml_overrides_only_named_sections() {
        let config = TriageConfig::from_toml_str(
            r#"
            [priority]
            urgent = ["on fire"]
            "#,
        )
        .unwrap();

        assert_eq!(config.priority.urgent, vec!["on fire".to_string()]);
        // Unnamed sections keep their defaults.
        assert_eq!(config.priority.high.len(), 4);
        assert_eq!(config.category.task.len(), 3);
    }

    #[test]
    fn config_round_trips_through_toml() {
        let config = TriageConfig::default();
        let text = toml::to_string(&config).unwrap();
        let parsed = TriageConfig::from_toml_str(&text).unwrap();
        assert_eq!(parsed.category.task, config.category.task);
        assert_eq!(parsed.due_date.len(), config.due_date.len());
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = TriageConfig::from_toml_str("[priority\nurgent = 3").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
