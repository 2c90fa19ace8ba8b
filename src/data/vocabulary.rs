// ============================================================
// Layer 4 — Vocabulary & Tag Set Builders
// ============================================================
// Derives the two ordered axis definitions everything else
// depends on:
//
//   Vocabulary — sorted, deduplicated normalized tokens from
//                every pattern in the corpus. Position i of
//                every feature vector means "vocabulary word i
//                is present".
//   TagSet     — sorted, deduplicated tags. Position j of every
//                label vector means "this sample is tag j".
//
// Both are pure functions of (corpus, normalizer): no global
// accumulation, no mutation after construction. Determinism is
// load-bearing — the browser-side inference client rebuilds the
// same axes from the exported metadata, so an identical corpus
// MUST always produce identical orderings. BTreeSet gives us
// sorted + deduplicated in one structure, and lexicographic
// ordering falls out of String's Ord.
//
// Reference: Rust Book §8 (Collections)
//            std::collections::BTreeSet documentation

use std::collections::BTreeSet;

use crate::data::normalizer::Normalizer;
use crate::domain::intent::Corpus;

/// The fixed, ordered feature axis: one slot per normalized word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    words: Vec<String>,
}

impl Vocabulary {
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Index of a normalized word, if it is in the vocabulary.
    /// Binary search is valid because `words` is sorted.
    pub fn index_of(&self, word: &str) -> Option<usize> {
        self.words.binary_search_by(|w| w.as_str().cmp(word)).ok()
    }
}

/// The fixed, ordered label axis: one slot per tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagSet {
    tags: Vec<String>,
}

impl TagSet {
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn index_of(&self, tag: &str) -> Option<usize> {
        self.tags.binary_search_by(|t| t.as_str().cmp(tag)).ok()
    }

    /// Tag at a given label index — the inverse of index_of.
    pub fn tag_at(&self, index: usize) -> Option<&str> {
        self.tags.get(index).map(|t| t.as_str())
    }
}

/// Build the Vocabulary from every pattern in the corpus.
/// Pure: same corpus + same normalizer ⇒ identical output.
pub fn build_vocabulary(corpus: &Corpus, normalizer: &Normalizer) -> Vocabulary {
    let words: BTreeSet<String> = corpus
        .labelled_patterns()
        .flat_map(|(pattern, _)| normalizer.normalize(pattern))
        .collect();

    Vocabulary { words: words.into_iter().collect() }
}

/// Build the TagSet from every intent tag in the corpus.
pub fn build_tag_set(corpus: &Corpus) -> TagSet {
    let tags: BTreeSet<String> = corpus
        .intents
        .iter()
        .map(|intent| intent.tag.clone())
        .collect();

    TagSet { tags: tags.into_iter().collect() }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::intent::Intent;
    use crate::domain::traits::Lemmatize;

    struct Identity;
    impl Lemmatize for Identity {
        fn lemma(&self, word: &str) -> String {
            word.to_string()
        }
    }

    /// The worked example from the design discussion:
    /// two greeting patterns, one goodbye pattern.
    fn sample_corpus() -> Corpus {
        Corpus {
            intents: vec![
                Intent {
                    tag: "greeting".into(),
                    patterns: vec!["hello there".into(), "hi".into()],
                },
                Intent {
                    tag: "bye".into(),
                    patterns: vec!["goodbye".into()],
                },
            ],
        }
    }

    #[test]
    fn test_vocabulary_is_sorted_and_deduplicated() {
        let corpus = sample_corpus();
        let n = Normalizer::new(&Identity);
        let vocab = build_vocabulary(&corpus, &n);
        assert_eq!(vocab.words(), &["goodbye", "hello", "hi", "there"]);
    }

    #[test]
    fn test_tag_set_is_sorted_and_deduplicated() {
        let tags = build_tag_set(&sample_corpus());
        assert_eq!(tags.tags(), &["bye", "greeting"]);
    }

    #[test]
    fn test_construction_is_deterministic() {
        let corpus = sample_corpus();
        let n = Normalizer::new(&Identity);
        let a = build_vocabulary(&corpus, &n);
        let b = build_vocabulary(&corpus, &n);
        assert_eq!(a, b);
        assert_eq!(build_tag_set(&corpus), build_tag_set(&corpus));
    }

    #[test]
    fn test_repeated_words_collapse() {
        let corpus = Corpus {
            intents: vec![Intent {
                tag: "t".into(),
                patterns: vec!["go go go".into(), "go now".into()],
            }],
        };
        let n = Normalizer::new(&Identity);
        let vocab = build_vocabulary(&corpus, &n);
        assert_eq!(vocab.words(), &["go", "now"]);
    }

    #[test]
    fn test_index_lookups_agree_with_ordering() {
        let corpus = sample_corpus();
        let n = Normalizer::new(&Identity);
        let vocab = build_vocabulary(&corpus, &n);
        let tags = build_tag_set(&corpus);

        assert_eq!(vocab.index_of("hello"), Some(1));
        assert_eq!(vocab.index_of("missing"), None);
        assert_eq!(tags.index_of("greeting"), Some(1));
        assert_eq!(tags.tag_at(0), Some("bye"));
        assert_eq!(tags.tag_at(7), None);
    }
}
