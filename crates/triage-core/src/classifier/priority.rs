//! Priority detector - tiered urgency vocabulary scan.

use aho_corasick::AhoCorasick;

use super::types::Priority;
use crate::config::PriorityVocabulary;
use crate::errors::ConfigError;

/// Multi-pattern scanner over all tier vocabularies at once. The highest
/// severity tier found wins, so "urgent" cannot be downgraded by a
/// lower-tier word also present in the text.
#[derive(Debug)]
pub struct PriorityDetector {
    automaton: AhoCorasick,
    tiers: Vec<Priority>,
}

impl PriorityDetector {
    pub fn compile(vocabulary: &PriorityVocabulary) -> Result<Self, ConfigError> {
        let mut words: Vec<&str> = Vec::new();
        let mut tiers = Vec::new();
        for (tier, vocab) in [
            (Priority::Urgent, &vocabulary.urgent),
            (Priority::High, &vocabulary.high),
            (Priority::Medium, &vocabulary.medium),
        ] {
            for word in vocab {
                words.push(word.as_str());
                tiers.push(tier);
            }
        }

        let automaton = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(&words)?;

        Ok(Self { automaton, tiers })
    }

    /// Detect the priority tier for non-empty text. Low when no vocabulary
    /// word is present.
    pub fn detect(&self, text: &str) -> Priority {
        let mut best = Priority::Low;
        for mat in self.automaton.find_overlapping_iter(text) {
            let tier = self.tiers[mat.pattern().as_usize()];
            if tier > best {
                best = tier;
            }
            if best == Priority::Urgent {
                break;
            }
        }
        best
    }
}
