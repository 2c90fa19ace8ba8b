use burn::data::dataset::Dataset;
use serde::{Deserialize, Serialize};

/// One fully encoded training sample.
/// features is a binary bag-of-words vector of length |Vocabulary|;
/// label_index is the position of the sample's tag in the TagSet
/// (the arg-max slot of its one-hot label vector).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntentSample {
    pub features: Vec<f32>,
    pub label_index: usize,
}

pub struct IntentDataset {
    samples: Vec<IntentSample>,
}

impl IntentDataset {
    pub fn new(samples: Vec<IntentSample>) -> Self {
        Self { samples }
    }

    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }
}

impl Dataset<IntentSample> for IntentDataset {
    fn get(&self, index: usize) -> Option<IntentSample> {
        self.samples.get(index).cloned()
    }

    fn len(&self) -> usize {
        self.samples.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_get_and_len() {
        let ds = IntentDataset::new(vec![
            IntentSample { features: vec![1.0], label_index: 0 },
            IntentSample { features: vec![0.0], label_index: 1 },
        ]);
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.get(1).unwrap().label_index, 1);
        assert!(ds.get(2).is_none());
    }
}
