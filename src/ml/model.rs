use burn::{
    nn::{Linear, LinearConfig},
    prelude::*,
    tensor::activation::relu,
    tensor::backend::AutodiffBackend,
};

// NOTE: #[derive(Config)] already generates Clone and Serialize/Deserialize
// internally — do NOT add them again or you get conflicting impls.
#[derive(Config, Debug)]
pub struct IntentClassifierConfig {
    /// Input width — always the vocabulary size
    pub input_dim: usize,
    /// First hidden layer width
    #[config(default = 128)]
    pub hidden1: usize,
    /// Second hidden layer width
    #[config(default = 64)]
    pub hidden2: usize,
    /// Output width — always the number of tags
    pub num_classes: usize,
}

impl IntentClassifierConfig {
    pub fn init<B: Backend>(&self, device: &B::Device) -> IntentClassifier<B> {
        IntentClassifier {
            fc1: LinearConfig::new(self.input_dim, self.hidden1).init(device),
            fc2: LinearConfig::new(self.hidden1, self.hidden2).init(device),
            out: LinearConfig::new(self.hidden2, self.num_classes).init(device),
        }
    }
}

/// The fixed-topology intent classifier:
///   dense(|V| → 128) + relu
///   dense(128 → 64)  + relu
///   dense(64 → |T|)  + softmax (applied inside the loss during
///   training, and declared in the exported topology for the
///   browser-side runtime at inference)
#[derive(Module, Debug)]
pub struct IntentClassifier<B: Backend> {
    pub fc1: Linear<B>,
    pub fc2: Linear<B>,
    pub out: Linear<B>,
}

impl<B: Backend> IntentClassifier<B> {
    /// features: [batch, vocab_size] → logits: [batch, num_classes]
    pub fn forward(&self, features: Tensor<B, 2>) -> Tensor<B, 2> {
        let x = relu(self.fc1.forward(features));
        let x = relu(self.fc2.forward(x));
        self.out.forward(x)
    }

    /// Categorical cross-entropy over the softmaxed logits.
    /// targets holds class indices (the one-hot arg-max slots).
    pub fn forward_loss(
        &self,
        features: Tensor<B, 2>,
        targets: Tensor<B, 1, Int>,
    ) -> (Tensor<B, 1>, Tensor<B, 2>)
    where
        B: AutodiffBackend,
    {
        let logits = self.forward(features);
        let ce = burn::nn::loss::CrossEntropyLossConfig::new()
            .init(&logits.device());
        let loss = ce.forward(logits.clone(), targets);
        (loss, logits)
    }

    /// Input width of the first dense layer — the vocabulary
    /// size this model was built for. Burn stores Linear weights
    /// as [d_input, d_output].
    pub fn input_dim(&self) -> usize {
        self.fc1.weight.val().dims()[0]
    }

    /// Output width of the final dense layer — the tag count.
    pub fn num_classes(&self) -> usize {
        self.out.weight.val().dims()[1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type TestBackend = burn::backend::NdArray;

    #[test]
    fn test_forward_output_shape() {
        let device = Default::default();
        let model: IntentClassifier<TestBackend> =
            IntentClassifierConfig::new(10, 3).init(&device);

        let features = Tensor::<TestBackend, 2>::zeros([4, 10], &device);
        let logits = model.forward(features);
        assert_eq!(logits.dims(), [4, 3]);
    }

    #[test]
    fn test_reported_widths_match_config() {
        let device = Default::default();
        let model: IntentClassifier<TestBackend> =
            IntentClassifierConfig::new(37, 5).init(&device);

        assert_eq!(model.input_dim(), 37);
        assert_eq!(model.num_classes(), 5);
    }

    #[test]
    fn test_hidden_widths_default_to_128_and_64() {
        let cfg = IntentClassifierConfig::new(10, 3);
        assert_eq!(cfg.hidden1, 128);
        assert_eq!(cfg.hidden2, 64);
    }
}
