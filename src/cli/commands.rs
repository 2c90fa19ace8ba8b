// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the `train` subcommand and all its configurable flags.
//
// clap's derive macros automatically generate:
//   - help text (--help)
//   - error messages for missing args
//   - type conversion (string → usize, f64, etc.)
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand};

use crate::application::train_use_case::TrainConfig;
use crate::infra::exporter::ExportMode;

/// The top-level subcommands available to the user
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Train the intent classifier and export all artifacts
    Train(TrainArgs),
}

/// All arguments for the `train` command.
/// Each field becomes a --flag on the command line.
#[derive(Args, Debug)]
pub struct TrainArgs {
    /// Path to the intents.json corpus file
    #[arg(long, default_value = "data/intents.json")]
    pub intents: String,

    /// Path to the lemmatizer lexicon (provisioned, not fetched)
    #[arg(long, default_value = "resources/lexicon.json")]
    pub lexicon: String,

    /// Directory for all output artifacts: the native checkpoint,
    /// metrics.csv, vocabulary.json and the web/ bundle
    #[arg(long, default_value = "artifacts")]
    pub out_dir: String,

    /// Number of full passes through the training data
    #[arg(long, default_value_t = 200)]
    pub epochs: usize,

    /// Number of samples processed together in one forward pass
    #[arg(long, default_value_t = 8)]
    pub batch_size: usize,

    /// Adam learning rate — too high causes instability,
    /// too low causes slow convergence
    #[arg(long, default_value_t = 1e-3)]
    pub lr: f64,

    /// Width of the first hidden dense layer
    #[arg(long, default_value_t = 128)]
    pub hidden1: usize,

    /// Width of the second hidden dense layer
    #[arg(long, default_value_t = 64)]
    pub hidden2: usize,

    /// Seed for weight initialisation and batch shuffling.
    /// Same corpus + same seed ⇒ same trained weights
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Web bundle flavour: real weights or an empty placeholder
    #[arg(long, value_enum, default_value = "native-bundle")]
    pub export_mode: ExportMode,
}

/// Convert CLI TrainArgs into the application-layer TrainConfig.
/// This is the boundary between Layer 1 and Layer 2 —
/// the application layer never sees clap types.
impl From<TrainArgs> for TrainConfig {
    fn from(a: TrainArgs) -> Self {
        TrainConfig {
            intents_path: a.intents,
            lexicon_path: a.lexicon,
            out_dir: a.out_dir,
            epochs: a.epochs,
            batch_size: a.batch_size,
            lr: a.lr,
            hidden1: a.hidden1,
            hidden2: a.hidden2,
            seed: a.seed,
            export_mode: a.export_mode,
        }
    }
}
