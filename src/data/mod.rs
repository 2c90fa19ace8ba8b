// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// This layer handles everything from the raw intents.json file
// all the way to backend-ready tensor batches.
//
// The pipeline flows in this order:
//
//   intents.json
//       │
//       ▼
//   IntentLoader      → reads the file, validates the corpus
//       │
//       ▼
//   Normalizer        → tokenize + lowercase + lemmatize
//       │
//       ▼
//   build_vocabulary  → sorted, deduplicated word + tag axes
//   build_tag_set
//       │
//       ▼
//   FeatureEncoder    → bag-of-words features, one-hot labels
//       │
//       ▼
//   IntentDataset     → implements Burn's Dataset trait
//       │
//       ▼
//   IntentBatcher     → stacks samples into tensor batches
//       │
//       ▼
//   DataLoader        → feeds batches to the training loop
//
// Each module is responsible for exactly one step.
// This makes each step independently testable and replaceable.
//
// Reference: Burn Book §4 (Datasets and Dataloaders)

/// Loads and validates intents.json
pub mod loader;

/// The single shared tokenize/lowercase/lemmatize path
pub mod normalizer;

/// Pure builders for the Vocabulary and TagSet axes
pub mod vocabulary;

/// Bag-of-words feature and one-hot label encoding
pub mod encoder;

/// Implements Burn's Dataset trait for encoded samples
pub mod dataset;

/// Implements Burn's Batcher trait to create tensor batches
pub mod batcher;
