use crate::corpus::AlignmentPolicy;
use crate::counter::CooccurrenceCounter;
use crate::errors::{LexalignError, Result};
use crate::token::TaggedToken;
use crate::tokenizer::Tokenizer;
use crate::vocabulary::Vocabulary;

/// Co-occurrence counters of all vocabulary words, in vocabulary order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CooccurrenceTable {
    vocab: Vocabulary,
    counters: Vec<CooccurrenceCounter>,
}

impl CooccurrenceTable {
    /// Creates a table with an empty counter for every word of the vocabulary.
    pub fn new(vocab: &Vocabulary) -> Self {
        Self {
            vocab: vocab.clone(),
            counters: vec![CooccurrenceCounter::new(); vocab.len()],
        }
    }

    /// Gets the counter of a word.
    pub fn get(&self, word: &str) -> Option<&CooccurrenceCounter> {
        self.vocab.id(word).map(|id| &self.counters[id])
    }

    fn get_mut(&mut self, word: &str) -> Option<&mut CooccurrenceCounter> {
        self.vocab.id(word).map(|id| &mut self.counters[id])
    }

    pub fn len(&self) -> usize {
        self.counters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counters.is_empty()
    }

    /// Iterates over words and their counters in vocabulary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CooccurrenceCounter)> {
        self.vocab.iter().zip(&self.counters)
    }
}

/// Accumulates co-occurrence counts over sentence pairs.
///
/// For each aligned pair, every target token is counted once for every occurrence of a vocabulary
/// word in the source sentence. With the part-of-speech filter enabled, a target token is counted
/// only when its tag equals the tag of the source occurrence.
///
/// # Examples
///
/// ```
/// use lexalign::{Learner, Vocabulary, WhitespaceTokenizer};
///
/// let vocab: Vocabulary = ["maison"].into_iter().collect();
/// let mut learner = Learner::new(&vocab);
/// learner
///     .add_corpus(
///         &WhitespaceTokenizer,
///         &WhitespaceTokenizer,
///         &["la maison est grande"],
///         &["the house is big"],
///     )
///     .unwrap();
/// let table = learner.into_table();
///
/// let counter = table.get("maison").unwrap();
/// assert_eq!(1, counter.get("house"));
/// assert_eq!(4, counter.len());
/// ```
pub struct Learner {
    table: CooccurrenceTable,
    pos_filter: bool,
    alignment: AlignmentPolicy,
    n_pairs: usize,
    n_hits: usize,
}

impl Learner {
    /// Creates a new learner without the part-of-speech filter and with strict alignment.
    pub fn new(vocab: &Vocabulary) -> Self {
        Self {
            table: CooccurrenceTable::new(vocab),
            pos_filter: false,
            alignment: AlignmentPolicy::default(),
            n_pairs: 0,
            n_hits: 0,
        }
    }

    /// Enables or disables the part-of-speech filter.
    pub fn pos_filter(mut self, enabled: bool) -> Self {
        self.pos_filter = enabled;
        self
    }

    /// Sets how corpora of different lengths are paired.
    pub fn alignment(mut self, policy: AlignmentPolicy) -> Self {
        self.alignment = policy;
        self
    }

    /// Counts the co-occurrences of one sentence pair.
    ///
    /// # Errors
    ///
    /// With the part-of-speech filter enabled, an error variant is returned if a token of either
    /// sentence has no tag. Nothing is counted in that case.
    pub fn add_pair(&mut self, source: &[TaggedToken], target: &[TaggedToken]) -> Result<()> {
        if self.pos_filter {
            if let Some(token) = source.iter().chain(target).find(|t| t.tag().is_none()) {
                return Err(LexalignError::invalid_format(format!(
                    "token `{}` has no part-of-speech tag",
                    token.surface()
                )));
            }
        }
        for src in source {
            let counter = match self.table.get_mut(src.surface()) {
                Some(counter) => counter,
                None => continue,
            };
            self.n_hits += 1;
            for trg in target {
                if !self.pos_filter || src.tag() == trg.tag() {
                    counter.add(trg.surface());
                }
            }
        }
        self.n_pairs += 1;
        Ok(())
    }

    /// Tokenizes and counts two line-aligned corpora.
    ///
    /// # Arguments
    ///
    /// * `source_tokenizer` - Tokenizer for the language of the vocabulary.
    /// * `target_tokenizer` - Tokenizer for the language of the translations.
    /// * `source` - Source sentences.
    /// * `target` - Target sentences, aligned with `source` line by line.
    ///
    /// # Errors
    ///
    /// Returns an error variant if the corpora are misaligned under the alignment policy, or if a
    /// line cannot be tokenized. Format errors carry the 1-based line number.
    pub fn add_corpus<S, T, U, V>(
        &mut self,
        source_tokenizer: &S,
        target_tokenizer: &T,
        source: &[U],
        target: &[V],
    ) -> Result<()>
    where
        S: Tokenizer + ?Sized,
        T: Tokenizer + ?Sized,
        U: AsRef<str>,
        V: AsRef<str>,
    {
        let n_pairs = self.alignment.n_pairs(source.len(), target.len())?;
        for (i, (src, trg)) in source.iter().zip(target).take(n_pairs).enumerate() {
            let src = source_tokenizer
                .tokenize(src.as_ref())
                .map_err(|e| e.at_line(i + 1))?;
            let trg = target_tokenizer
                .tokenize(trg.as_ref())
                .map_err(|e| e.at_line(i + 1))?;
            self.add_pair(&src, &trg).map_err(|e| e.at_line(i + 1))?;
        }
        Ok(())
    }

    /// Number of sentence pairs counted so far.
    pub fn n_pairs(&self) -> usize {
        self.n_pairs
    }

    /// Number of source tokens found in the vocabulary so far.
    pub fn n_hits(&self) -> usize {
        self.n_hits
    }

    pub fn table(&self) -> &CooccurrenceTable {
        &self.table
    }

    pub fn into_table(self) -> CooccurrenceTable {
        self.table
    }
}

/// Learns co-occurrence counts from two strictly aligned corpora without the part-of-speech filter.
///
/// Both sides are tokenized with the same tokenizer.
pub fn learn<T, U, V>(
    vocab: &Vocabulary,
    tokenizer: &T,
    source: &[U],
    target: &[V],
) -> Result<CooccurrenceTable>
where
    T: Tokenizer + ?Sized,
    U: AsRef<str>,
    V: AsRef<str>,
{
    let mut learner = Learner::new(vocab);
    learner.add_corpus(tokenizer, tokenizer, source, target)?;
    Ok(learner.into_table())
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::tokenizer::{PreTaggedTokenizer, WhitespaceTokenizer};

    fn vocab(words: &[&str]) -> Vocabulary {
        words.iter().copied().collect()
    }

    #[test]
    fn test_learn_single_pair() {
        let vocab = vocab(&["maison"]);
        let table = learn(
            &vocab,
            &WhitespaceTokenizer,
            &["la maison est grande"],
            &["the house is big"],
        )
        .unwrap();

        let counter = table.get("maison").unwrap();
        assert_eq!(
            vec![("the", 1), ("house", 1), ("is", 1), ("big", 1)],
            counter.iter().collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_learn_no_vocabulary_hits() {
        let vocab = vocab(&["chien", "chat"]);
        let table = learn(
            &vocab,
            &WhitespaceTokenizer,
            &["la maison est grande", "il pleut"],
            &["the house is big", "it rains"],
        )
        .unwrap();

        assert_eq!(2, table.len());
        assert!(table.iter().all(|(_, c)| c.is_empty()));
        assert!(table.get("chien").is_some());
        assert!(table.get("maison").is_none());
    }

    #[test]
    fn test_learn_counts_accumulate() {
        let vocab = vocab(&["maison"]);
        let table = learn(
            &vocab,
            &WhitespaceTokenizer,
            &["la maison", "une maison", "le chat"],
            &["the house", "a house", "the cat"],
        )
        .unwrap();

        let counter = table.get("maison").unwrap();
        assert_eq!(2, counter.get("house"));
        assert_eq!(1, counter.get("the"));
        assert_eq!(1, counter.get("a"));
        assert_eq!(0, counter.get("cat"));
    }

    #[test]
    fn test_learn_repeated_source_word() {
        let vocab = vocab(&["très"]);
        let table = learn(&vocab, &WhitespaceTokenizer, &["très très bien"], &["very good"])
            .unwrap();
        assert_eq!(2, table.get("très").unwrap().get("very"));
    }

    #[test]
    fn test_learn_empty_sentences() {
        let vocab = vocab(&["maison"]);
        let table = learn(&vocab, &WhitespaceTokenizer, &["", "maison"], &["house", ""]).unwrap();
        assert!(table.get("maison").unwrap().is_empty());
    }

    #[test]
    fn test_learn_preserves_vocabulary_order() {
        let vocab = vocab(&["b", "a", "c"]);
        let table = learn(&vocab, &WhitespaceTokenizer, &["a"], &["x"]).unwrap();
        assert_eq!(
            vec!["b", "a", "c"],
            table.iter().map(|(w, _)| w).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_learn_strict_misaligned() {
        let vocab = vocab(&["maison"]);
        let e = learn(&vocab, &WhitespaceTokenizer, &["a", "b"], &["c"]).unwrap_err();
        assert!(matches!(e, LexalignError::Misaligned(_)));
    }

    #[test]
    fn test_learner_truncate_misaligned() {
        let vocab = vocab(&["maison"]);
        let mut learner = Learner::new(&vocab).alignment(AlignmentPolicy::Truncate);
        learner
            .add_corpus(
                &WhitespaceTokenizer,
                &WhitespaceTokenizer,
                &["maison", "maison"],
                &["house"],
            )
            .unwrap();
        assert_eq!(1, learner.n_pairs());
        assert_eq!(1, learner.table().get("maison").unwrap().get("house"));
    }

    #[test]
    fn test_learner_pos_filter() {
        let vocab = vocab(&["maison"]);
        let mut learner = Learner::new(&vocab).pos_filter(true);
        learner
            .add_corpus(
                &PreTaggedTokenizer,
                &PreTaggedTokenizer,
                &["la/DET maison/NOUN est/AUX grande/ADJ"],
                &["the/DET house/NOUN is/AUX big/ADJ"],
            )
            .unwrap();
        let table = learner.into_table();
        let counter = table.get("maison").unwrap();
        assert_eq!(vec![("house", 1)], counter.iter().collect::<Vec<_>>());
    }

    #[test]
    fn test_learner_pos_filter_uses_occurrence_tag() {
        let vocab = vocab(&["porte"]);
        let mut learner = Learner::new(&vocab).pos_filter(true);
        learner
            .add_corpus(
                &PreTaggedTokenizer,
                &PreTaggedTokenizer,
                &["il/PRON porte/VERB la/DET porte/NOUN"],
                &["he/PRON carries/VERB the/DET door/NOUN"],
            )
            .unwrap();
        let table = learner.into_table();
        let counter = table.get("porte").unwrap();
        assert_eq!(1, counter.get("carries"));
        assert_eq!(1, counter.get("door"));
        assert_eq!(0, counter.get("he"));
    }

    #[test]
    fn test_learner_pos_filter_rejects_untagged() {
        let vocab = vocab(&["maison"]);
        let mut learner = Learner::new(&vocab).pos_filter(true);
        let e = learner
            .add_corpus(
                &WhitespaceTokenizer,
                &PreTaggedTokenizer,
                &["maison"],
                &["house/NOUN"],
            )
            .unwrap_err();
        assert_eq!(
            "InvalidFormatError: line 1: token `maison` has no part-of-speech tag",
            e.to_string()
        );
    }

    #[test]
    fn test_learner_tokenize_error_reports_line() {
        let vocab = vocab(&["maison"]);
        let mut learner = Learner::new(&vocab).pos_filter(true);
        let e = learner
            .add_corpus(
                &PreTaggedTokenizer,
                &PreTaggedTokenizer,
                &["la/DET", "maison"],
                &["the/DET", "house/NOUN"],
            )
            .unwrap_err();
        assert_eq!(
            "InvalidFormatError: line 2: token `maison` has no tag separator",
            e.to_string()
        );
    }

    #[test]
    fn test_learner_statistics() {
        let vocab = vocab(&["maison", "chat"]);
        let mut learner = Learner::new(&vocab);
        learner
            .add_corpus(
                &WhitespaceTokenizer,
                &WhitespaceTokenizer,
                &["maison chat", "chien"],
                &["house cat", "dog"],
            )
            .unwrap();
        assert_eq!(2, learner.n_pairs());
        assert_eq!(2, learner.n_hits());
    }
}
