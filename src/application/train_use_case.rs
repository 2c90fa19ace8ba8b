// ============================================================
// Layer 2 — TrainUseCase
// ============================================================
// Orchestrates the full training pipeline in order:
//
//   Step 1: Load lemmatizer lexicon   (Layer 6 - infra)
//   Step 2: Load + validate corpus    (Layer 4 - data)
//   Step 3: Build vocabulary/tag axes (Layer 4 - data)
//   Step 4: Encode training samples   (Layer 4 - data)
//   Step 5: Save config               (Layer 6 - infra)
//   Step 6: Run training loop         (Layer 5 - ml)
//   Step 7: Save native checkpoint    (Layer 6 - infra)
//   Step 8: Export metadata + bundle  (Layer 6 - infra)
//
// Data flows strictly forward: no step reads from a later one.
// Only step 8's bundle write is best-effort — everything before
// it aborts the run on failure.
//
// Reference: Rust Book §13 (Iterators and Closures)
//            Burn Book §5 (Training)

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

use crate::data::{
    dataset::IntentDataset,
    encoder::FeatureEncoder,
    loader::IntentLoader,
    normalizer::Normalizer,
    vocabulary::{build_tag_set, build_vocabulary},
};
use crate::domain::traits::CorpusSource;
use crate::infra::{
    checkpoint::CheckpointManager,
    exporter::{ExportMode, WebBundleExporter},
    lexicon::Lemmatizer,
    metrics::MetricsLogger,
};
use crate::ml::trainer::run_training;

// ─── Training Configuration ──────────────────────────────────────────────────
// All paths and hyperparameters for a training run.
// Serialisable so it can be saved to disk alongside the
// checkpoint and the exact run reconstructed later.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainConfig {
    pub intents_path: String,
    pub lexicon_path: String,
    pub out_dir: String,
    pub epochs: usize,
    pub batch_size: usize,
    pub lr: f64,
    pub hidden1: usize,
    pub hidden2: usize,
    pub seed: u64,
    pub export_mode: ExportMode,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            intents_path: "data/intents.json".to_string(),
            lexicon_path: "resources/lexicon.json".to_string(),
            out_dir: "artifacts".to_string(),
            epochs: 200,
            batch_size: 8,
            lr: 1e-3,
            hidden1: 128,
            hidden2: 64,
            seed: 42,
            export_mode: ExportMode::NativeBundle,
        }
    }
}

// ─── TrainUseCase ─────────────────────────────────────────────────────────────
// Owns the config and runs the full training pipeline.
pub struct TrainUseCase {
    config: TrainConfig,
}

impl TrainUseCase {
    pub fn new(config: TrainConfig) -> Self {
        Self { config }
    }

    /// Execute the full training pipeline end to end
    pub fn execute(&self) -> Result<()> {
        let cfg = &self.config;

        // ── Step 1: Load the lemmatizer's lexical resource ───────────────────
        // An explicit, injected dependency — provisioning the
        // file is a setup concern, not part of the pipeline
        let lemmatizer = Lemmatizer::from_file(&cfg.lexicon_path)?;
        let normalizer = Normalizer::new(&lemmatizer);

        // ── Step 2: Load and validate the corpus ─────────────────────────────
        tracing::info!("Loading intents from '{}'", cfg.intents_path);
        let corpus = IntentLoader::new(&cfg.intents_path).load()?;

        // ── Step 3: Build the vocabulary and tag axes ────────────────────────
        // Both are pure functions of (corpus, normalizer), so
        // re-running on the same corpus always reproduces the
        // same orderings — the exported metadata depends on it
        let vocabulary = build_vocabulary(&corpus, &normalizer);
        let tags = build_tag_set(&corpus);
        tracing::info!(
            "Vocabulary size: {}, number of tags: {}",
            vocabulary.len(),
            tags.len(),
        );

        if vocabulary.is_empty() {
            bail!("corpus produced an empty vocabulary — no trainable words in any pattern");
        }
        if tags.len() < 2 {
            bail!("need at least 2 distinct tags to train a classifier, found {}", tags.len());
        }

        // ── Step 4: Encode the training samples ──────────────────────────────
        // The encoder borrows the SAME normalizer the vocabulary
        // was built with — that is the consistency contract that
        // keeps feature axes honest
        let encoder = FeatureEncoder::new(&normalizer, &vocabulary, &tags);
        let samples = encoder.encode_corpus(&corpus);
        tracing::info!(
            "Training data: {} samples × {} features",
            samples.len(),
            vocabulary.len(),
        );
        let dataset = IntentDataset::new(samples);

        // ── Step 5: Save the run config ──────────────────────────────────────
        let ckpt_manager = CheckpointManager::new(&cfg.out_dir);
        ckpt_manager.save_config(cfg)?;

        // ── Step 6: Run the training loop (Layer 5) ──────────────────────────
        let metrics = MetricsLogger::new(&cfg.out_dir)?;
        let model = run_training(cfg, vocabulary.len(), tags.len(), dataset, &metrics)?;

        // ── Step 7: Native checkpoint ────────────────────────────────────────
        ckpt_manager.save_model(&model)?;

        // ── Step 8: Metadata + web bundle ────────────────────────────────────
        // Metadata is required (the client cannot encode without
        // it); the bundle conversion is best-effort — the native
        // checkpoint already represents a successful run
        let exporter = WebBundleExporter::new(&cfg.out_dir);
        exporter.write_metadata(&vocabulary, &tags, cfg.export_mode)?;

        if let Err(e) = exporter.write_bundle(&model, cfg.export_mode) {
            tracing::error!("Web bundle export failed (run still succeeded): {e}");
        }

        Ok(())
    }
}
