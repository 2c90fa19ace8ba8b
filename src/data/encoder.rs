// ============================================================
// Layer 4 — Feature Encoder
// ============================================================
// Converts every (pattern, tag) pair into numbers the model can
// train on:
//
//   features — binary bag-of-words over the Vocabulary.
//              features[i] = 1.0 iff vocabulary word i appears
//              among the pattern's NORMALIZED tokens
//   label    — one-hot over the TagSet, plus the plain class
//              index (what cross-entropy actually consumes)
//
// The encoder borrows the SAME Normalizer instance the
// vocabulary was built with. That is the contract that keeps
// the feature space honest: both sides see identical tokens, so
// a vocabulary word is marked present exactly when it genuinely
// occurs in the utterance. Comparing lemmatized vocabulary words
// against raw utterance tokens would under-match silently.
//
// Pure functions of their inputs — no error paths, no I/O.
//
// Reference: Rust Book §13 (Iterators and Closures)

use std::collections::BTreeSet;

use crate::data::dataset::IntentSample;
use crate::data::normalizer::Normalizer;
use crate::data::vocabulary::{TagSet, Vocabulary};
use crate::domain::intent::Corpus;

/// Encodes patterns against a fixed Vocabulary and TagSet.
pub struct FeatureEncoder<'a> {
    normalizer: &'a Normalizer<'a>,
    vocabulary: &'a Vocabulary,
    tags: &'a TagSet,
}

impl<'a> FeatureEncoder<'a> {
    pub fn new(
        normalizer: &'a Normalizer<'a>,
        vocabulary: &'a Vocabulary,
        tags: &'a TagSet,
    ) -> Self {
        Self { normalizer, vocabulary, tags }
    }

    /// Binary bag-of-words vector for one utterance.
    /// Length is always |Vocabulary|.
    pub fn encode_features(&self, pattern: &str) -> Vec<f32> {
        // Deduplicate first — presence is binary, and a BTreeSet
        // makes each membership check O(log n)
        let present: BTreeSet<String> =
            self.normalizer.normalize(pattern).into_iter().collect();

        self.vocabulary
            .words()
            .iter()
            .map(|w| if present.contains(w) { 1.0 } else { 0.0 })
            .collect()
    }

    /// One-hot label vector for a tag. Length is always |Tags|.
    /// Returns None for a tag that is not in the TagSet — this
    /// cannot happen for tags drawn from the same corpus the
    /// TagSet was built from.
    pub fn encode_label(&self, tag: &str) -> Option<Vec<f32>> {
        let index = self.tags.index_of(tag)?;
        let mut label = vec![0.0; self.tags.len()];
        label[index] = 1.0;
        Some(label)
    }

    /// Inverse of encode_label: recover the tag from a one-hot
    /// (or softmax output) vector by taking the arg-max slot.
    pub fn decode_label(&self, label: &[f32]) -> Option<&str> {
        let (index, _) = label
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.total_cmp(b))?;
        self.tags.tag_at(index)
    }

    /// Encode the whole corpus into training samples, in corpus
    /// order. One sample per (pattern, tag) pair.
    pub fn encode_corpus(&self, corpus: &Corpus) -> Vec<IntentSample> {
        corpus
            .labelled_patterns()
            .filter_map(|(pattern, tag)| {
                let features = self.encode_features(pattern);
                let label_index = self.tags.index_of(tag)?;
                Some(IntentSample { features, label_index })
            })
            .collect()
    }
}
