// ============================================================
// Layer 3 — Intent Domain Types
// ============================================================
// Represents the labelled corpus the classifier is trained on.
// An Intent is one category of user message:
//   - tag:      the label the model should predict ("greeting")
//   - patterns: example utterances belonging to that category
//               ("hello there", "hi", "good morning")
//
// The Corpus is the full ordered collection of intents as read
// from the intents.json file. By the time a Corpus exists, the
// JSON has already been parsed and validated — downstream stages
// can rely on every tag being non-empty and every intent having
// at least one pattern.
//
// Reference: Rust Book §5 (Structs and Methods)
//            Rust Book §10 (Derive Macros)

use serde::{Deserialize, Serialize};

use crate::domain::error::PipelineError;

/// One intent category: a tag and its example utterances.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Intent {
    /// The label for this category — unique within the corpus
    pub tag: String,

    /// Example utterances a user might type for this intent
    pub patterns: Vec<String>,
}

/// The full labelled training corpus.
/// Mirrors the on-disk shape: {"intents": [...]}
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Corpus {
    pub intents: Vec<Intent>,
}

impl Corpus {
    /// Check the structural invariants the rest of the pipeline
    /// relies on: no empty tags, no intent without patterns.
    ///
    /// Returns a CorpusFormat error naming the first offending
    /// intent so the user can fix the JSON file directly.
    pub fn validate(&self) -> Result<(), PipelineError> {
        for (i, intent) in self.intents.iter().enumerate() {
            if intent.tag.trim().is_empty() {
                return Err(PipelineError::CorpusFormat(format!(
                    "intent #{i} has an empty tag"
                )));
            }
            if intent.patterns.is_empty() {
                return Err(PipelineError::CorpusFormat(format!(
                    "intent '{}' has no example patterns",
                    intent.tag
                )));
            }
        }
        Ok(())
    }

    /// Total number of (pattern, tag) pairs across all intents.
    /// This is the size of the training set before encoding.
    pub fn pattern_count(&self) -> usize {
        self.intents.iter().map(|i| i.patterns.len()).sum()
    }

    /// Iterate over every (pattern, tag) pair in corpus order.
    pub fn labelled_patterns(&self) -> impl Iterator<Item = (&str, &str)> {
        self.intents.iter().flat_map(|intent| {
            intent
                .patterns
                .iter()
                .map(move |p| (p.as_str(), intent.tag.as_str()))
        })
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn corpus(intents: Vec<Intent>) -> Corpus {
        Corpus { intents }
    }

    #[test]
    fn test_valid_corpus_passes() {
        let c = corpus(vec![Intent {
            tag: "greeting".into(),
            patterns: vec!["hello".into()],
        }]);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_empty_tag_rejected() {
        let c = corpus(vec![Intent {
            tag: "  ".into(),
            patterns: vec!["hello".into()],
        }]);
        assert!(c.validate().is_err());
    }

    #[test]
    fn test_intent_without_patterns_rejected() {
        let c = corpus(vec![Intent {
            tag: "greeting".into(),
            patterns: vec![],
        }]);
        assert!(c.validate().is_err());
    }

    #[test]
    fn test_pattern_count_sums_all_intents() {
        let c = corpus(vec![
            Intent { tag: "a".into(), patterns: vec!["x".into(), "y".into()] },
            Intent { tag: "b".into(), patterns: vec!["z".into()] },
        ]);
        assert_eq!(c.pattern_count(), 3);
    }

    #[test]
    fn test_labelled_patterns_preserve_order() {
        let c = corpus(vec![
            Intent { tag: "a".into(), patterns: vec!["x".into()] },
            Intent { tag: "b".into(), patterns: vec!["y".into()] },
        ]);
        let pairs: Vec<_> = c.labelled_patterns().collect();
        assert_eq!(pairs, vec![("x", "a"), ("y", "b")]);
    }
}
