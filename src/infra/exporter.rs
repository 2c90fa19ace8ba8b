// ============================================================
// Layer 6 — Web Bundle Exporter & Metadata Writer
// ============================================================
// Produces the artifacts a browser-side inference runtime needs
// to reproduce this model without any Rust involved:
//
//   vocabulary.json        — {"vocabulary": [...], "tags": [...]}
//                            the axis metadata the client uses to
//                            rebuild the exact feature encoding
//   web/model.json         — layers-model topology descriptor +
//                            weights manifest
//   web/group1-shard1of1.bin — little-endian f32 weight shard
//
// Two export modes, one exporter:
//
//   NativeBundle — writes the real trained tensors into the
//                  shard and a populated weights manifest.
//                  Kernel layout is [input, output], which is
//                  how both Burn's Linear and the layers-model
//                  format store dense weights, so no transpose
//                  is needed.
//   Placeholder  — writes the topology with an EMPTY manifest
//                  and an empty shard, and additionally records
//                  "input_shape" in the metadata file.
//
// The bundle write is best-effort from the caller's point of
// view: the native checkpoint already represents a successful
// training outcome, so the use case logs an Export error and
// keeps going instead of failing the run.
//
// Reference: TensorFlow.js layers-model format
//            byteorder crate documentation

use byteorder::{LittleEndian, WriteBytesExt};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use burn::nn::Linear;
use burn::prelude::*;

use crate::data::vocabulary::{TagSet, Vocabulary};
use crate::domain::error::PipelineError;
use crate::ml::model::IntentClassifier;

/// Which flavour of web bundle to write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExportMode {
    /// Real weights in the shard, populated manifest
    NativeBundle,
    /// Empty shard and manifest; metadata gains "input_shape"
    Placeholder,
}

/// The vocabulary/tag metadata file the inference client loads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub vocabulary: Vec<String>,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_shape: Option<usize>,
}

/// Writes the metadata file and the web-consumable model bundle.
pub struct WebBundleExporter {
    out_dir: PathBuf,
}

impl WebBundleExporter {
    pub fn new(out_dir: impl AsRef<Path>) -> Self {
        Self { out_dir: out_dir.as_ref().to_path_buf() }
    }

    /// Write vocabulary.json — the axis metadata. This artifact
    /// is NOT best-effort: without it the client cannot encode
    /// anything, so a failure here is fatal to the run.
    pub fn write_metadata(
        &self,
        vocabulary: &Vocabulary,
        tags: &TagSet,
        mode: ExportMode,
    ) -> anyhow::Result<()> {
        fs::create_dir_all(&self.out_dir)?;

        let metadata = Metadata {
            vocabulary: vocabulary.words().to_vec(),
            tags: tags.tags().to_vec(),
            // Only the placeholder variant persists the input
            // width; the native bundle's manifest carries shapes
            input_shape: match mode {
                ExportMode::Placeholder => Some(vocabulary.len()),
                ExportMode::NativeBundle => None,
            },
        };

        let path = self.out_dir.join("vocabulary.json");
        fs::write(&path, serde_json::to_string(&metadata)?)?;
        tracing::info!(
            "Wrote metadata: {} vocabulary words, {} tags",
            metadata.vocabulary.len(),
            metadata.tags.len(),
        );
        Ok(())
    }

    /// Write web/model.json and web/group1-shard1of1.bin.
    /// Returns PipelineError::Export on any failure so the
    /// caller can degrade gracefully.
    pub fn write_bundle<B: Backend>(
        &self,
        model: &IntentClassifier<B>,
        mode: ExportMode,
    ) -> Result<(), PipelineError> {
        let web_dir = self.out_dir.join("web");
        fs::create_dir_all(&web_dir)
            .map_err(|e| PipelineError::Export(format!("cannot create '{}': {e}", web_dir.display())))?;

        let layers = [
            DenseLayer::from_linear("dense", &model.fc1, "relu"),
            DenseLayer::from_linear("dense_1", &model.fc2, "relu"),
            DenseLayer::from_linear("dense_2", &model.out, "softmax"),
        ];

        // ── model.json: topology + manifest ───────────────────────────────────
        let manifest_weights = match mode {
            ExportMode::NativeBundle => layers
                .iter()
                .flat_map(|l| l.manifest_entries())
                .collect::<Vec<_>>(),
            ExportMode::Placeholder => Vec::new(),
        };

        let generated_by = concat!("intent-trainer v", env!("CARGO_PKG_VERSION"));
        let converted_by = match mode {
            ExportMode::NativeBundle => "intent-trainer native export",
            ExportMode::Placeholder => "manual conversion",
        };
        let model_json = json!({
            "format": "layers-model",
            "generatedBy": generated_by,
            "convertedBy": converted_by,
            "modelTopology": topology_json(&layers),
            "weightsManifest": [{
                "paths": ["group1-shard1of1.bin"],
                "weights": manifest_weights,
            }],
        });

        let json_path = web_dir.join("model.json");
        fs::write(&json_path, serde_json::to_string(&model_json).map_err(export_err)?)
            .map_err(export_err)?;

        // ── weight shard ──────────────────────────────────────────────────────
        let shard_path = web_dir.join("group1-shard1of1.bin");
        let mut shard = fs::File::create(&shard_path).map_err(export_err)?;
        if mode == ExportMode::NativeBundle {
            for layer in &layers {
                // Manifest order: kernel then bias, per layer
                for value in layer.kernel.iter().chain(layer.bias.iter()) {
                    shard.write_f32::<LittleEndian>(*value).map_err(export_err)?;
                }
            }
        }
        shard.flush().map_err(export_err)?;

        tracing::info!("Wrote web bundle to '{}'", web_dir.display());
        Ok(())
    }
}

fn export_err(e: impl std::fmt::Display) -> PipelineError {
    PipelineError::Export(e.to_string())
}

/// One dense layer's extracted parameters plus its declared
/// activation, in export-ready form.
struct DenseLayer {
    name: &'static str,
    activation: &'static str,
    /// [input, output]
    shape: [usize; 2],
    kernel: Vec<f32>,
    bias: Vec<f32>,
}

impl DenseLayer {
    fn from_linear<B: Backend>(
        name: &'static str,
        linear: &Linear<B>,
        activation: &'static str,
    ) -> Self {
        let weight = linear.weight.val();
        let [d_in, d_out] = weight.dims();
        let kernel = weight.into_data().convert::<f32>().value;

        let bias = match &linear.bias {
            Some(bias) => bias.val().into_data().convert::<f32>().value,
            None => vec![0.0; d_out],
        };

        Self { name, activation, shape: [d_in, d_out], kernel, bias }
    }

    fn manifest_entries(&self) -> Vec<serde_json::Value> {
        vec![
            json!({
                "name": format!("{}/kernel", self.name),
                "shape": [self.shape[0], self.shape[1]],
                "dtype": "float32",
            }),
            json!({
                "name": format!("{}/bias", self.name),
                "shape": [self.shape[1]],
                "dtype": "float32",
            }),
        ]
    }
}

/// Keras-style Sequential topology descriptor.
fn topology_json(layers: &[DenseLayer]) -> serde_json::Value {
    let layer_configs: Vec<serde_json::Value> = layers
        .iter()
        .enumerate()
        .map(|(i, layer)| {
            let mut config = json!({
                "name": layer.name,
                "units": layer.shape[1],
                "activation": layer.activation,
                "dtype": "float32",
            });
            // Only the first layer declares the input width
            if i == 0 {
                config["batch_input_shape"] =
                    json!([serde_json::Value::Null, layer.shape[0]]);
            }
            json!({ "class_name": "Dense", "config": config })
        })
        .collect();

    json!({
        "class_name": "Sequential",
        "config": { "name": "sequential", "layers": layer_configs },
    })
}
