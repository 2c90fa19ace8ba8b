// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Handles all cross-cutting concerns that don't belong in
// any specific business layer:
//
//   checkpoint.rs — Saving the trained model weights.
//                   Uses Burn's CompactRecorder to serialise
//                   model parameters to disk, plus the run
//                   config as JSON.
//
//   exporter.rs   — The web-consumable bundle and the
//                   vocabulary/tag metadata the browser-side
//                   client loads to reproduce the encoder's
//                   axis mapping.
//
//   lexicon.rs    — The lemmatizer's lexical resource: loading
//                   the exception table and suffix rules from
//                   the provisioned JSON file.
//
//   metrics.rs    — Training metrics logging. Writes
//                   epoch-level loss/accuracy to a CSV file
//                   for later analysis and plotting.
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)

/// Model checkpoint and config saving
pub mod checkpoint;

/// Web bundle and metadata export
pub mod exporter;

/// Lexical resource loading and lemmatization
pub mod lexicon;

/// Training metrics CSV logger
pub mod metrics;
