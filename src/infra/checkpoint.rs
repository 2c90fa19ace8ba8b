// ============================================================
// Layer 6 — Checkpoint Manager
// ============================================================
// Saves the trained model using Burn's CompactRecorder.
//
// What gets saved:
//   1. Model weights (model.mpk.gz)  — all learned parameters
//   2. train_config.json             — the full run configuration
//
// Why save the config separately?
//   Anything that later loads the checkpoint needs to know the
//   exact architecture (input width, hidden widths, tag count)
//   to rebuild the model before loading weights into it.
//
// Burn's CompactRecorder:
//   - Serialises model parameters to MessagePack format
//   - Compresses with gzip for smaller file size
//   - Type-safe: loading fails if architecture doesn't match
//
// Reference: Burn Book §5 (Records and Checkpointing)

use anyhow::{Context, Result};
use std::{fs, path::PathBuf};
use burn::{
    prelude::*,
    record::{HalfPrecisionSettings, NamedMpkGzFileRecorder, Recorder},
};

use crate::application::train_use_case::TrainConfig;
use crate::ml::model::IntentClassifier;

/// Manages saving of model checkpoints and the run config.
/// All files are stored in the configured directory.
pub struct CheckpointManager {
    dir: PathBuf,
}

impl CheckpointManager {
    /// Create a new CheckpointManager.
    /// Creates the directory if it doesn't already exist.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        fs::create_dir_all(&dir).ok();
        Self { dir }
    }

    /// Save the trained model weights as model.mpk.gz.
    ///
    /// Uses Burn's CompactRecorder which:
    ///   1. Calls model.into_record() to extract all parameters
    ///   2. Serialises to MessagePack and gzips
    ///   3. Writes to {dir}/model.mpk.gz (the recorder appends
    ///      the extension itself)
    pub fn save_model<B: Backend>(&self, model: &IntentClassifier<B>) -> Result<()> {
        let path = self.dir.join("model");

        NamedMpkGzFileRecorder::<HalfPrecisionSettings>::new()
            .record(model.clone().into_record(), path.clone())
            .with_context(|| {
                format!("Failed to save checkpoint to '{}'", path.display())
            })?;

        tracing::debug!("Saved model checkpoint to '{}'", path.display());
        Ok(())
    }

    /// Save the training configuration to JSON so the exact run
    /// (architecture and hyperparameters) can be reconstructed.
    pub fn save_config(&self, cfg: &TrainConfig) -> Result<()> {
        let path = self.dir.join("train_config.json");

        let json = serde_json::to_string_pretty(cfg)?;
        fs::write(&path, json)
            .with_context(|| format!("Cannot write config to '{}'", path.display()))?;

        tracing::debug!("Saved training config to '{}'", path.display());
        Ok(())
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::ml::model::IntentClassifierConfig;

    type TestBackend = burn::backend::NdArray;

    #[test]
    fn test_save_model_writes_checkpoint_file() {
        let dir = tempfile::tempdir().unwrap();
        let manager = CheckpointManager::new(dir.path());

        let device = Default::default();
        let model: IntentClassifier<TestBackend> =
            IntentClassifierConfig::new(4, 2).init(&device);

        manager.save_model(&model).unwrap();
        assert!(dir.path().join("model.mpk.gz").exists());
    }

    #[test]
    fn test_save_config_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let manager = CheckpointManager::new(dir.path());

        let cfg = TrainConfig::default();
        manager.save_config(&cfg).unwrap();

        let raw = fs::read_to_string(dir.path().join("train_config.json")).unwrap();
        let loaded: TrainConfig = serde_json::from_str(&raw).unwrap();
        assert_eq!(loaded.epochs, cfg.epochs);
        assert_eq!(loaded.hidden1, cfg.hidden1);
    }
}
