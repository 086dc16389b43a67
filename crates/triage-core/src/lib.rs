//! triage-core: Content triage engine for MindFlow quick-add input
//!
//! Classifies free text typed (or dictated) into the quick-add box so the
//! surrounding app can file it without asking the user to pick a category:
//! - Classifier: category detection (task / stakeholder / note), priority
//!   tiers, due-date hints, proper-noun name extraction
//! - Config: externally supplied pattern tables (TOML) so keyword tuning
//!   never touches detection logic
//!
//! Classification is total: every string input, including empty, produces a
//! result. Pattern tables that fail to compile are a config-load error, not
//! a classify-time failure.

pub mod classifier;
pub mod config;
pub mod errors;

// Re-exports for convenience
pub use classifier::{
    classify, Category, Classification, ContentClassifier, DueDateHint, Priority, Suggestions,
};
pub use config::{
    CategoryPatterns, ConfidenceTable, DueDatePhrase, NameRules, PriorityVocabulary, TriageConfig,
};
pub use errors::ConfigError;
