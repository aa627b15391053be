use std::io::BufRead;

use hashbrown::HashMap;

use crate::errors::Result;

/// Ordered set of source-language words whose translations are learned.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Vocabulary {
    words: Vec<String>,
    ids: HashMap<String, usize>,
}

impl Vocabulary {
    /// Reads a vocabulary with one word per line.
    ///
    /// Line breaks are stripped, blank lines are ignored and duplicated words keep their first
    /// position.
    ///
    /// # Examples
    ///
    /// ```
    /// use lexalign::Vocabulary;
    ///
    /// let vocab = Vocabulary::read("maison\r\nchat\n\nmaison\n".as_bytes()).unwrap();
    /// assert_eq!(vec!["maison", "chat"], vocab.iter().collect::<Vec<_>>());
    /// ```
    pub fn read<R>(rdr: R) -> Result<Self>
    where
        R: BufRead,
    {
        let mut words = vec![];
        for line in rdr.lines() {
            let line = line?;
            let word = line.trim_end_matches('\r');
            if !word.trim().is_empty() {
                words.push(word.to_string());
            }
        }
        Ok(words.into_iter().collect())
    }

    /// Gets the index of a word, in reading order.
    pub fn id(&self, word: &str) -> Option<usize> {
        self.ids.get(word).copied()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.ids.contains_key(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterates over words in reading order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl<S> FromIterator<S> for Vocabulary
where
    S: Into<String>,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = S>,
    {
        let mut vocab = Self::default();
        for word in iter {
            let word = word.into();
            if !vocab.ids.contains_key(&word) {
                vocab.ids.insert(word.clone(), vocab.words.len());
                vocab.words.push(word);
            }
        }
        vocab
    }
}
