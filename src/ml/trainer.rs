// ============================================================
// Layer 5 — Training Loop
// ============================================================
// Full training loop using Burn's DataLoader and Adam.
//
// Notes on the backend choice:
//   - Training uses Autodiff<NdArray> for gradients — this is a
//     small CPU batch job, a GPU backend buys nothing here
//   - model.valid() returns the model on the inner NdArray
//     backend; that is what gets checkpointed and exported
//   - argmax(1) returns [batch,1] so we flatten before .equal()
//
// There is deliberately no validation split, no early stopping
// and no hyperparameter search: the job runs a fixed number of
// epochs over the whole corpus and stops.
//
// Reference: Burn Book §5, Kingma & Ba (2015) Adam

use anyhow::Result;
use burn::{
    data::dataloader::DataLoaderBuilder,
    module::AutodiffModule,
    optim::{AdamConfig, GradientsParams, Optimizer},
    prelude::*,
};

use crate::application::train_use_case::TrainConfig;
use crate::data::{batcher::IntentBatcher, dataset::IntentDataset};
use crate::infra::metrics::{EpochMetrics, MetricsLogger};
use crate::ml::model::{IntentClassifier, IntentClassifierConfig};

type MyBackend = burn::backend::Autodiff<burn::backend::NdArray>;
type MyInnerBackend = burn::backend::NdArray;

/// Fit the classifier to the encoded dataset and return the
/// trained model on the inner (inference) backend, ready for
/// checkpointing and export.
pub fn run_training(
    cfg: &TrainConfig,
    vocab_size: usize,
    num_classes: usize,
    dataset: IntentDataset,
    metrics: &MetricsLogger,
) -> Result<IntentClassifier<MyInnerBackend>> {
    // Fixed seed so weight initialisation and batch shuffling
    // are reproducible across runs of the same corpus
    MyBackend::seed(cfg.seed);

    let device = burn::backend::ndarray::NdArrayDevice::default();
    tracing::info!("Using NdArray device: {:?}", device);

    // ── Build model ───────────────────────────────────────────────────────────
    let model_cfg = IntentClassifierConfig::new(vocab_size, num_classes)
        .with_hidden1(cfg.hidden1)
        .with_hidden2(cfg.hidden2);
    let mut model: IntentClassifier<MyBackend> = model_cfg.init(&device);
    tracing::info!(
        "Model ready: {} → {} → {} → {}",
        vocab_size, cfg.hidden1, cfg.hidden2, num_classes,
    );

    // ── Adam optimiser ────────────────────────────────────────────────────────
    // m = β1*m + (1-β1)*g        (mean)
    // v = β2*v + (1-β2)*g²       (variance)
    // θ = θ - lr * m / (√v + ε)  (update)
    let optim_cfg = AdamConfig::new().with_epsilon(1e-8);
    let mut optim = optim_cfg.init();

    // ── Data loader ───────────────────────────────────────────────────────────
    let sample_count = dataset.sample_count();
    let batcher = IntentBatcher::<MyBackend>::new(device);
    let loader = DataLoaderBuilder::new(batcher)
        .batch_size(cfg.batch_size)
        .shuffle(cfg.seed)
        .num_workers(1)
        .build(dataset);
    tracing::info!(
        "Training on {} samples, batch_size={}, epochs={}",
        sample_count, cfg.batch_size, cfg.epochs,
    );

    // ── Epoch loop ────────────────────────────────────────────────────────────
    for epoch in 1..=cfg.epochs {
        let mut loss_sum = 0.0f64;
        let mut batches = 0usize;
        let mut correct = 0usize;
        let mut total = 0usize;

        for batch in loader.iter() {
            let targets = batch.targets.clone();
            let (loss, logits) = model.forward_loss(batch.features, batch.targets);

            let loss_val: f64 = loss.clone().into_scalar().elem::<f64>();
            loss_sum += loss_val;
            batches += 1;

            // argmax(1) returns shape [batch, 1] — flatten to
            // [batch] before comparing with targets
            let predicted = logits.argmax(1).flatten::<1>(0, 1);
            total += targets.dims()[0];
            let batch_correct: i64 = predicted
                .equal(targets)
                .int().sum().into_scalar().elem::<i64>();
            correct += batch_correct as usize;

            // Backward pass + Adam update
            let grads = loss.backward();
            let grads = GradientsParams::from_grads(grads, &model);
            model = optim.step(cfg.lr, model, grads);
        }

        let avg_loss = if batches > 0 { loss_sum / batches as f64 } else { f64::NAN };
        let accuracy = if total > 0 { correct as f64 / total as f64 } else { 0.0 };

        println!(
            "Epoch {:>3}/{} | loss={:.4} | acc={:.1}%",
            epoch, cfg.epochs, avg_loss, accuracy * 100.0,
        );

        metrics.log(&EpochMetrics::new(epoch, avg_loss, accuracy))?;
    }

    tracing::info!("Training complete!");

    // model.valid() drops the autodiff wrapper — the returned
    // model is what gets checkpointed and exported
    Ok(model.valid())
}
