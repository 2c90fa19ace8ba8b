// ============================================================
// Layer 6 — Lexicon Store / Lemmatizer
// ============================================================
// Loads the lemmatizer's lexical resource and applies it.
//
// The resource is a single JSON file with two parts:
//
//   "exceptions"   — irregular forms that no suffix rule can
//                    handle ("went" → "go", "feet" → "foot")
//   "suffix_rules" — ordered [suffix, replacement] pairs applied
//                    to regular inflections ("ies" → "y",
//                    "running" → "runn"... no: "ing" → "")
//
// Lookup order: exceptions first, then the FIRST matching suffix
// rule, otherwise the word passes through unchanged. The rule
// order in the file is therefore significant and must not be
// re-sorted on load.
//
// Provisioning note: the file ships with the repository under
// resources/lexicon.json. It is loaded explicitly and injected
// into the normalizer — the pipeline itself never downloads
// anything. A missing file is an environment error and fatal.
//
// Reference: Rust Book §9 (Error Handling)
//            WordNet morphy — exception list + detachment rules

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use crate::domain::error::PipelineError;
use crate::domain::traits::Lemmatize;

/// On-disk shape of the lexical resource file.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct LexiconFile {
    /// Irregular word → lemma mappings, consulted first
    exceptions: HashMap<String, String>,

    /// Ordered (suffix, replacement) detachment rules
    suffix_rules: Vec<(String, String)>,
}

/// Lexicon-backed lemmatizer.
/// Immutable once loaded; shared by vocabulary building and
/// feature encoding so both see identical normalization.
#[derive(Debug)]
pub struct Lemmatizer {
    exceptions: HashMap<String, String>,
    suffix_rules: Vec<(String, String)>,
}

impl Lemmatizer {
    /// Load the lexical resource from a JSON file.
    ///
    /// Fails with PipelineError::Resource if the file is missing
    /// or malformed — the fetch/provisioning step must have run
    /// before the pipeline starts.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, PipelineError> {
        let path = path.as_ref();

        let raw = std::fs::read_to_string(path).map_err(|e| {
            PipelineError::Resource(format!(
                "cannot read lexicon '{}': {e}. \
                 The lexical resource must be provisioned before training.",
                path.display()
            ))
        })?;

        let file: LexiconFile = serde_json::from_str(&raw).map_err(|e| {
            PipelineError::Resource(format!(
                "lexicon '{}' is not valid JSON: {e}",
                path.display()
            ))
        })?;

        tracing::debug!(
            "Loaded lexicon: {} exceptions, {} suffix rules",
            file.exceptions.len(),
            file.suffix_rules.len(),
        );

        Ok(Self {
            exceptions: file.exceptions,
            suffix_rules: file.suffix_rules,
        })
    }
}

impl Lemmatize for Lemmatizer {
    fn lemma(&self, word: &str) -> String {
        // Irregular forms win over any suffix rule
        if let Some(base) = self.exceptions.get(word) {
            return base.clone();
        }

        // First matching detachment rule, in file order.
        // Require at least 2 chars of stem so short words like
        // "as" or "is" never collapse to near-nothing.
        for (suffix, replacement) in &self.suffix_rules {
            if let Some(stem) = word.strip_suffix(suffix.as_str()) {
                if stem.chars().count() >= 2 {
                    return format!("{stem}{replacement}");
                }
            }
        }

        word.to_string()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn lemmatizer() -> Lemmatizer {
        Lemmatizer {
            exceptions: HashMap::from([
                ("went".to_string(), "go".to_string()),
                ("feet".to_string(), "foot".to_string()),
            ]),
            suffix_rules: vec![
                ("ies".to_string(), "y".to_string()),
                ("ing".to_string(), String::new()),
                ("s".to_string(), String::new()),
            ],
        }
    }

    #[test]
    fn test_exception_wins() {
        assert_eq!(lemmatizer().lemma("went"), "go");
        assert_eq!(lemmatizer().lemma("feet"), "foot");
    }

    #[test]
    fn test_first_matching_suffix_rule_applies() {
        // "ies" matches before the bare "s" rule
        assert_eq!(lemmatizer().lemma("queries"), "query");
        assert_eq!(lemmatizer().lemma("greeting"), "greet");
        assert_eq!(lemmatizer().lemma("thanks"), "thank");
    }

    #[test]
    fn test_short_stems_are_left_alone() {
        // stripping "s" from "as" would leave a 1-char stem
        assert_eq!(lemmatizer().lemma("as"), "as");
    }

    #[test]
    fn test_unknown_word_passes_through() {
        assert_eq!(lemmatizer().lemma("hello"), "hello");
    }

    #[test]
    fn test_missing_file_is_resource_error() {
        let err = Lemmatizer::from_file("no/such/lexicon.json").unwrap_err();
        assert!(matches!(err, PipelineError::Resource(_)));
    }
}
