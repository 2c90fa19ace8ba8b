// ============================================================
// Layer 3 — Pipeline Error Taxonomy
// ============================================================
// Three kinds of failure exist in this pipeline, and they are
// handled differently:
//
//   CorpusFormat — the intents.json file is malformed or breaks
//                  a structural invariant. Fatal: the run aborts
//                  with a descriptive message.
//
//   Resource     — the lemmatizer's lexical resource file is
//                  missing or unreadable. Fatal: provisioning
//                  the lexicon is a setup step that must happen
//                  before training, not something we retry.
//
//   Export       — the web-bundle conversion failed. NON-fatal:
//                  the native checkpoint already represents a
//                  successful training outcome, so the caller
//                  logs this and continues.
//
// There are no retries anywhere — this is a single-shot offline
// job, not a service.
//
// Reference: Rust Book §9 (Error Handling)

use thiserror::Error;

/// Typed errors for the training pipeline.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The corpus file is missing required fields or breaks a
    /// structural invariant (empty tag, intent with no patterns).
    #[error("corpus format error: {0}")]
    CorpusFormat(String),

    /// The lexical resource for the lemmatizer could not be loaded.
    #[error("lexical resource error: {0}")]
    Resource(String),

    /// The web-consumable bundle could not be written.
    /// Callers treat this as a degraded-but-successful run.
    #[error("web bundle export error: {0}")]
    Export(String),
}
