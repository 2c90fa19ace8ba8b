// ============================================================
// Layer 5 — ML / Model Layer (Burn)
// ============================================================
// This layer contains ALL Burn framework specific code apart
// from the Dataset/Batcher impls in the data layer.
//
// Why isolate Burn code here?
//   - If Burn's API changes, we only update this layer
//   - The model architecture is clearly separated from
//     data loading and application logic
//
// What's in this layer:
//
//   model.rs   — The three-layer feed-forward classifier:
//                • dense(|V| → 128) + relu
//                • dense(128 → 64)  + relu
//                • dense(64 → |T|)  + softmax
//
//   trainer.rs — The training loop
//                Handles forward pass, categorical cross-entropy
//                loss, backward pass, Adam optimiser step, and
//                per-epoch metrics logging
//
// Reference: Burn Book §3 (Building Blocks)
//            Burn Book §5 (Training)

/// Feed-forward intent classifier architecture
pub mod model;

/// Full training loop with per-epoch metrics
pub mod trainer;
