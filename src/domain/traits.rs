// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// By programming against traits instead of concrete types,
// we can swap implementations without changing the code
// that uses them. For example:
//   - IntentLoader implements CorpusSource
//   - A future YamlLoader could also implement CorpusSource
//   - The application layer only sees CorpusSource
//     and works with both without any changes
//
// Lemmatize is the seam that matters most here: the vocabulary
// builder and the feature encoder MUST share one normalization
// path, and making the lemmatizer an injected trait object is
// what lets a test substitute a trivial identity lemmatizer
// while production injects the lexicon-backed one.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)
//            Rust Book §17 (Object Oriented Patterns)

use crate::domain::error::PipelineError;
use crate::domain::intent::Corpus;

// ─── CorpusSource ─────────────────────────────────────────────────────────────
/// Any component that can produce the labelled training corpus.
///
/// Implementations:
///   - IntentLoader → reads intents.json from disk
pub trait CorpusSource {
    /// Load and validate the corpus.
    fn load(&self) -> Result<Corpus, PipelineError>;
}

// ─── Lemmatize ────────────────────────────────────────────────────────────────
/// Reduces an inflected word to its canonical dictionary form.
///
/// Implementations:
///   - Lemmatizer → lexicon-backed (exception table + suffix rules)
///   - tests use identity implementations where lemma == word
pub trait Lemmatize {
    /// Map one lowercase token to its base form.
    fn lemma(&self, word: &str) -> String;
}
