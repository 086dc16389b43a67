//! Content triage classifier - files free text as task, stakeholder, or note
//!
//! Runs four detection stages over the raw text: category (first-match-wins
//! across ordered pattern lists), priority tiers, due-date phrases, and
//! proper-noun name extraction. Pure and total: identical input always
//! produces an identical result, and no input can fail.

mod category;
mod due_date;
mod names;
mod priority;
mod types;

pub use types::{Category, Classification, DueDateHint, Priority, Suggestions};

use once_cell::sync::Lazy;

use crate::config::{ConfidenceTable, TriageConfig};
use crate::errors::ConfigError;

use category::CategoryDetector;
use due_date::DueDateDetector;
use names::NameExtractor;
use priority::PriorityDetector;

/// Suggestion previews truncate the text to this many characters.
const SUGGESTION_PREVIEW_CHARS: usize = 50;

static DEFAULT_CLASSIFIER: Lazy<ContentClassifier> = Lazy::new(ContentClassifier::new);

/// Classify text with the built-in pattern tables.
///
/// Convenience wrapper around a lazily-built shared [`ContentClassifier`];
/// cheap enough to call on every keystroke of the quick-add box.
pub fn classify(text: &str) -> Classification {
    DEFAULT_CLASSIFIER.classify(text)
}

/// The triage engine: compiled pattern tables for all four detection stages.
#[derive(Debug)]
pub struct ContentClassifier {
    categories: CategoryDetector,
    priorities: PriorityDetector,
    due_dates: DueDateDetector,
    names: NameExtractor,
    confidence: ConfidenceTable,
}

impl ContentClassifier {
    /// Engine with the built-in pattern tables.
    pub fn new() -> Self {
        Self::with_config(TriageConfig::default()).expect("built-in pattern tables are valid")
    }

    /// Engine from an externally supplied config. Pattern compilation errors
    /// surface here, never at classify time.
    pub fn with_config(config: TriageConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            categories: CategoryDetector::compile(&config.category)?,
            priorities: PriorityDetector::compile(&config.priority)?,
            due_dates: DueDateDetector::compile(&config.due_date)?,
            names: NameExtractor::compile(&config.names)?,
            confidence: ConfidenceTable {
                task: config.confidence.task.clamp(0.0, 1.0),
                stakeholder: config.confidence.stakeholder.clamp(0.0, 1.0),
                note: config.confidence.note.clamp(0.0, 1.0),
            },
        })
    }

    /// Classify one piece of quick-add text.
    ///
    /// Empty or whitespace-only input yields the no-classification result:
    /// note category, zero confidence, everything else absent.
    pub fn classify(&self, text: &str) -> Classification {
        if text.trim().is_empty() {
            return Classification::empty();
        }

        let category = self.categories.detect(text);
        let priority = self.priorities.detect(text);
        let due_date_hint = self.due_dates.detect(text);
        let extracted_names = self.names.extract(text);
        let confidence = match category {
            Category::Task => self.confidence.task,
            Category::Stakeholder => self.confidence.stakeholder,
            Category::Note => self.confidence.note,
        };
        let suggestions = build_suggestions(category, text, extracted_names.first());

        tracing::debug!(
            ?category,
            ?priority,
            confidence,
            names = extracted_names.len(),
            "classified quick-add input"
        );

        Classification {
            category,
            priority: Some(priority),
            due_date_hint,
            extracted_names,
            confidence,
            suggestions,
        }
    }
}

impl Default for ContentClassifier {
    fn default() -> Self {
        Self::new()
    }
}

fn build_suggestions(category: Category, text: &str, first_name: Option<&String>) -> Suggestions {
    Suggestions {
        task: if category == Category::Task {
            text.to_string()
        } else {
            format!("Create task: {}", preview(text))
        },
        stakeholder: first_name.map(|name| format!("Add contact: {name}")),
        note: format!("Save as note: {}", preview(text)),
    }
}

/// Character-based truncation, safe on multi-byte input.
fn preview(text: &str) -> String {
    let snippet: String = text.chars().take(SUGGESTION_PREVIEW_CHARS).collect();
    format!("{snippet}...")
}
