// ============================================================
// Layer 4 — Token Normalizer
// ============================================================
// The ONE normalization path shared by vocabulary building and
// feature encoding.
//
// Steps, applied per utterance:
//   1. Split on Unicode word boundaries (UAX #29) — this handles
//      punctuation and whitespace splitting in one pass, and
//      pure-punctuation segments never survive it
//   2. Lowercase each token
//   3. Lemmatize each token via the injected Lemmatize impl
//
// Why is sharing this path a hard requirement and not a style
// choice? The vocabulary defines the axes of every feature
// vector. If the encoder normalized utterances even slightly
// differently (say, lemmatized vocabulary words but compared
// them against raw utterance tokens), membership checks would
// silently miss and the feature space would be corrupted with
// no error anywhere. One function, used by both stages, makes
// that divergence impossible.
//
// Reference: unicode-segmentation crate (UAX #29)
//            Rust Book §13 (Iterators)

use unicode_segmentation::UnicodeSegmentation;

use crate::domain::traits::Lemmatize;

/// Tokenizes and normalizes raw utterance text.
/// Holds the injected lemmatizer so every call site normalizes
/// identically.
pub struct Normalizer<'a> {
    lemmatizer: &'a dyn Lemmatize,
}

impl<'a> Normalizer<'a> {
    pub fn new(lemmatizer: &'a dyn Lemmatize) -> Self {
        Self { lemmatizer }
    }

    /// Full normalization: tokenize → lowercase → lemmatize.
    /// Duplicates are preserved; order follows the input text.
    pub fn normalize(&self, text: &str) -> Vec<String> {
        // unicode_words() yields only word segments — punctuation
        // and whitespace runs are dropped by the segmenter itself
        text.unicode_words()
            .map(|w| self.lemmatizer.lemma(&w.to_lowercase()))
            .collect()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    /// Identity lemmatizer — isolates tokenization behaviour
    struct Identity;
    impl Lemmatize for Identity {
        fn lemma(&self, word: &str) -> String {
            word.to_string()
        }
    }

    /// Suffix-stripping stand-in — verifies the lemmatizer is
    /// actually applied to every token
    struct StripS;
    impl Lemmatize for StripS {
        fn lemma(&self, word: &str) -> String {
            word.strip_suffix('s').unwrap_or(word).to_string()
        }
    }

    #[test]
    fn test_lowercases_tokens() {
        let n = Normalizer::new(&Identity);
        assert_eq!(n.normalize("Hello THERE"), vec!["hello", "there"]);
    }

    #[test]
    fn test_punctuation_is_discarded() {
        let n = Normalizer::new(&Identity);
        assert_eq!(n.normalize("hi! how are you?"), vec!["hi", "how", "are", "you"]);
        assert!(n.normalize("...!?").is_empty());
    }

    #[test]
    fn test_lemmatizer_is_applied() {
        let n = Normalizer::new(&StripS);
        assert_eq!(n.normalize("Thanks friends"), vec!["thank", "friend"]);
    }

    #[test]
    fn test_empty_input() {
        let n = Normalizer::new(&Identity);
        assert!(n.normalize("").is_empty());
    }

    #[test]
    fn test_duplicates_and_order_preserved() {
        let n = Normalizer::new(&Identity);
        assert_eq!(n.normalize("no no yes"), vec!["no", "no", "yes"]);
    }
}
