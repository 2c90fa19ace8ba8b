// ============================================================
// Layer 4 — Intent Batcher
// ============================================================
// Implements Burn's Batcher trait to convert a Vec<IntentSample>
// into backend-ready tensors.
//
// How batching works here:
//   Input:  Vec of N IntentSamples, each with |V| features
//   Output: IntentBatch with a [N, |V|] float tensor and a [N]
//           int tensor of class indices
//
//   We flatten all feature vectors into one long Vec, then
//   reshape: [s1_f1, ..., s1_fV, s2_f1, ..., sN_fV] → [N, V]
//
// Why is this easy here?
//   Every feature vector already has the same fixed length
//   (the vocabulary size), so no padding is ever needed.
//
// Reference: Burn Book §4 (Batcher)
//            Rust Book §8 (Vectors)

use burn::{
    data::dataloader::batcher::Batcher,
    prelude::*,
};

use crate::data::dataset::IntentSample;

// ─── IntentBatch ──────────────────────────────────────────────────────────────
/// A batch of encoded samples ready for the model forward pass.
///
/// B is the Burn Backend (e.g. NdArray, Wgpu) —
/// generic so the same batcher works on any device.
#[derive(Debug, Clone)]
pub struct IntentBatch<B: Backend> {
    /// Bag-of-words features — shape: [batch_size, vocab_size]
    pub features: Tensor<B, 2>,

    /// Ground truth class indices — shape: [batch_size]
    /// One integer per sample: the tag's position in the TagSet
    pub targets: Tensor<B, 1, Int>,
}

// ─── IntentBatcher ────────────────────────────────────────────────────────────
/// The batcher struct — holds the target device so tensors
/// are created in the right place.
#[derive(Clone, Debug)]
pub struct IntentBatcher<B: Backend> {
    pub device: B::Device,
}

impl<B: Backend> IntentBatcher<B> {
    pub fn new(device: B::Device) -> Self {
        Self { device }
    }
}

impl<B: Backend> Batcher<IntentSample, IntentBatch<B>> for IntentBatcher<B> {
    /// Stack a Vec of IntentSamples into one IntentBatch.
    fn batch(&self, items: Vec<IntentSample>) -> IntentBatch<B> {
        let batch_size = items.len();
        // All feature vectors share the vocabulary length
        let vocab_size = items[0].features.len();

        // Flatten Vec<Vec<f32>> → Vec<f32> in sample order
        let features_flat: Vec<f32> = items
            .iter()
            .flat_map(|s| s.features.iter().copied())
            .collect();

        let targets: Vec<i32> = items
            .iter()
            .map(|s| s.label_index as i32)
            .collect();

        let features = Tensor::<B, 1>::from_floats(
            features_flat.as_slice(), &self.device
        ).reshape([batch_size, vocab_size]);

        let targets = Tensor::<B, 1, Int>::from_ints(
            targets.as_slice(), &self.device
        );

        IntentBatch { features, targets }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    type TestBackend = burn::backend::NdArray;

    #[test]
    fn test_batch_shapes() {
        let device = Default::default();
        let batcher = IntentBatcher::<TestBackend>::new(device);

        let items = vec![
            IntentSample { features: vec![1.0, 0.0, 1.0], label_index: 0 },
            IntentSample { features: vec![0.0, 1.0, 0.0], label_index: 2 },
        ];
        let batch = batcher.batch(items);

        assert_eq!(batch.features.dims(), [2, 3]);
        assert_eq!(batch.targets.dims(), [2]);
    }

    #[test]
    fn test_batch_preserves_values() {
        let device = Default::default();
        let batcher = IntentBatcher::<TestBackend>::new(device);

        let items = vec![
            IntentSample { features: vec![1.0, 0.0], label_index: 1 },
        ];
        let batch = batcher.batch(items);

        let features: Vec<f32> = batch.features.into_data().convert::<f32>().value;
        assert_eq!(features, vec![1.0, 0.0]);

        let targets: Vec<i32> = batch.targets.into_data().convert::<i32>().value;
        assert_eq!(targets, vec![1]);
    }
}
