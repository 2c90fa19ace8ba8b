// ============================================================
// Layer 4 — Intent Corpus Loader
// ============================================================
// Reads the intents.json file and produces the in-memory Corpus.
//
// Expected file shape:
//   {
//     "intents": [
//       { "tag": "greeting", "patterns": ["hello there", "hi"] },
//       { "tag": "goodbye",  "patterns": ["bye", "see you later"] }
//     ]
//   }
//
// serde does the heavy lifting: the Corpus/Intent structs derive
// Deserialize, so a missing "tag" or "patterns" field surfaces
// as a parse error with line/column information. On top of that
// we run Corpus::validate() for the invariants serde cannot
// express (non-empty tags, at least one pattern per intent).
//
// All failures here are CorpusFormat errors and abort the run —
// there is nothing sensible to train on without a valid corpus.
//
// Reference: serde_json crate documentation
//            Rust Book §9 (Error Handling)

use std::path::{Path, PathBuf};

use crate::domain::error::PipelineError;
use crate::domain::intent::Corpus;
use crate::domain::traits::CorpusSource;

/// Loads the labelled corpus from a single JSON file.
pub struct IntentLoader {
    /// Path to intents.json
    path: PathBuf,
}

impl IntentLoader {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self { path: path.as_ref().to_path_buf() }
    }
}

impl CorpusSource for IntentLoader {
    fn load(&self) -> Result<Corpus, PipelineError> {
        let raw = std::fs::read_to_string(&self.path).map_err(|e| {
            PipelineError::CorpusFormat(format!(
                "cannot read corpus file '{}': {e}",
                self.path.display()
            ))
        })?;

        let corpus: Corpus = serde_json::from_str(&raw).map_err(|e| {
            PipelineError::CorpusFormat(format!(
                "corpus file '{}' does not match the expected shape: {e}",
                self.path.display()
            ))
        })?;

        // Structural invariants serde cannot check
        corpus.validate()?;

        tracing::info!(
            "Loaded corpus: {} intents, {} patterns",
            corpus.intents.len(),
            corpus.pattern_count(),
        );

        Ok(corpus)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_corpus(json: &str) -> tempfile::NamedTempFile {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(json.as_bytes()).unwrap();
        f
    }

    #[test]
    fn test_loads_well_formed_corpus() {
        let f = write_corpus(
            r#"{"intents":[{"tag":"greeting","patterns":["hello there","hi"]},
                           {"tag":"bye","patterns":["goodbye"]}]}"#,
        );
        let corpus = IntentLoader::new(f.path()).load().unwrap();
        assert_eq!(corpus.intents.len(), 2);
        assert_eq!(corpus.pattern_count(), 3);
        assert_eq!(corpus.intents[0].tag, "greeting");
    }

    #[test]
    fn test_missing_field_is_corpus_format_error() {
        // "patterns" key absent
        let f = write_corpus(r#"{"intents":[{"tag":"greeting"}]}"#);
        let err = IntentLoader::new(f.path()).load().unwrap_err();
        assert!(matches!(err, PipelineError::CorpusFormat(_)));
    }

    #[test]
    fn test_invalid_json_is_corpus_format_error() {
        let f = write_corpus("{ not json");
        let err = IntentLoader::new(f.path()).load().unwrap_err();
        assert!(matches!(err, PipelineError::CorpusFormat(_)));
    }

    #[test]
    fn test_missing_file_is_corpus_format_error() {
        let err = IntentLoader::new("no/such/intents.json").load().unwrap_err();
        assert!(matches!(err, PipelineError::CorpusFormat(_)));
    }

    #[test]
    fn test_empty_patterns_rejected() {
        let f = write_corpus(r#"{"intents":[{"tag":"greeting","patterns":[]}]}"#);
        assert!(IntentLoader::new(f.path()).load().is_err());
    }
}
