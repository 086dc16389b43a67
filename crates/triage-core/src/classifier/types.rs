//! Classification result types.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Top-level triage label for a piece of quick-add text.
///
/// Mutually exclusive; on ties, detection order makes task beat stakeholder
/// beat note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Task,
    Stakeholder,
    Note,
}

/// Task priority tier. `Ord` follows severity, so the highest tier found in
/// the text wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
    Urgent,
}

/// Coarse due-date hint extracted from the text. Never defaulted: text with
/// no date phrase produces no hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DueDateHint {
    Today,
    Tomorrow,
    ThisWeek,
    NextWeek,
    ThisMonth,
}

/// Per-category save-action labels shown in the quick-add preview.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Suggestions {
    /// Task save label: the text itself when it classified as a task,
    /// otherwise a truncated "Create task" preview.
    pub task: String,
    /// Contact save label, present when a candidate name was extracted.
    pub stakeholder: Option<String>,
    /// Note save label.
    pub note: String,
}

/// Result of classifying one piece of quick-add text.
///
/// Immutable and recomputed fresh on every call; the caller decides whether
/// to turn it into a task, stakeholder, or note creation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    /// Chosen category.
    pub category: Category,
    /// Priority tier. Computed for any non-empty input (the user may re-file
    /// a suggestion as a task), `None` only for empty input.
    pub priority: Option<Priority>,
    /// Due-date hint, if any phrase matched.
    pub due_date_hint: Option<DueDateHint>,
    /// Candidate proper-noun names in order of appearance.
    pub extracted_names: SmallVec<[String; 4]>,
    /// Heuristic score (0.0-1.0); a per-category constant, not a probability.
    pub confidence: f32,
    /// Save-action labels for the preview UI.
    pub suggestions: Suggestions,
}

impl Classification {
    /// The no-classification result for empty or whitespace-only input.
    pub(crate) fn empty() -> Self {
        Self {
            category: Category::Note,
            priority: None,
            due_date_hint: None,
            extracted_names: SmallVec::new(),
            confidence: 0.0,
            suggestions: Suggestions::default(),
        }
    }
}
