use std::io::{BufRead, Read, Write};

use hashbrown::HashMap;
use serde::Deserialize;

use crate::errors::{LexalignError, Result};
use crate::token::{to_tagged_string, TaggedToken, FALLBACK_TAG};
use crate::tokenizer::Tokenizer;

#[derive(Deserialize)]
struct LexiconRecord {
    word: String,
    tag: String,
}

/// Word to part-of-speech table.
#[derive(Clone, Debug, Default)]
pub struct Lexicon {
    tags: HashMap<String, String>,
}

impl Lexicon {
    /// Creates an empty lexicon.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a lexicon from a tab-separated `word<TAB>TAG` stream without a header.
    ///
    /// When a word appears more than once, the last row wins.
    ///
    /// # Errors
    ///
    /// Rows that do not have exactly two fields, or that have an empty tag, are rejected.
    pub fn read<R>(rdr: R) -> Result<Self>
    where
        R: Read,
    {
        let mut rdr = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(false)
            .quoting(false)
            .from_reader(rdr);
        let mut lexicon = Self::new();
        for record in rdr.records() {
            let record = record?;
            let line = record.position().map_or(0, |p| p.line() as usize);
            let record: LexiconRecord = record.deserialize(None)?;
            if record.tag.is_empty() {
                return Err(LexalignError::invalid_format(format!(
                    "word `{}` has an empty tag",
                    record.word
                ))
                .at_line(line));
            }
            lexicon.insert(record.word, record.tag);
        }
        Ok(lexicon)
    }

    /// Adds or replaces the tag of a word.
    pub fn insert<S, T>(&mut self, word: S, tag: T)
    where
        S: Into<String>,
        T: Into<String>,
    {
        self.tags.insert(word.into(), tag.into());
    }

    /// Gets the tag of a word.
    pub fn get(&self, word: &str) -> Option<&str> {
        self.tags.get(word).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

/// Tagger that looks each token up in a [`Lexicon`].
///
/// Tokens are produced by the inner tokenizer. Tokens missing from the lexicon receive the unknown
/// tag, [`FALLBACK_TAG`] unless overridden. Tokens already tagged by the inner tokenizer keep their
/// tag when the lexicon does not know them.
pub struct LexiconTagger<T> {
    tokenizer: T,
    lexicon: Lexicon,
    unknown_tag: String,
}

impl<T> LexiconTagger<T>
where
    T: Tokenizer,
{
    /// Creates a new tagger.
    ///
    /// # Arguments
    ///
    /// * `tokenizer` - A tokenizer splitting the text.
    /// * `lexicon` - A word to tag table.
    ///
    /// # Examples
    ///
    /// ```
    /// use lexalign::{Lexicon, LexiconTagger, Tokenizer, WhitespaceTokenizer};
    ///
    /// let mut lexicon = Lexicon::new();
    /// lexicon.insert("maison", "NOUN");
    /// let tagger = LexiconTagger::new(WhitespaceTokenizer, lexicon);
    ///
    /// let tokens = tagger.tokenize("la maison").unwrap();
    /// assert_eq!(Some("X"), tokens[0].tag());
    /// assert_eq!(Some("NOUN"), tokens[1].tag());
    /// ```
    pub fn new(tokenizer: T, lexicon: Lexicon) -> Self {
        Self {
            tokenizer,
            lexicon,
            unknown_tag: FALLBACK_TAG.to_string(),
        }
    }

    /// Sets the tag given to words missing from the lexicon.
    pub fn unknown_tag<S>(mut self, tag: S) -> Self
    where
        S: Into<String>,
    {
        self.unknown_tag = tag.into();
        self
    }
}

impl<T> Tokenizer for LexiconTagger<T>
where
    T: Tokenizer,
{
    fn tokenize(&self, text: &str) -> Result<Vec<TaggedToken>> {
        let mut tokens = self.tokenizer.tokenize(text)?;
        for token in &mut tokens {
            if let Some(tag) = self.lexicon.get(token.surface()) {
                token.set_tag(tag);
            } else if token.tag().is_none() {
                token.set_tag(self.unknown_tag.as_str());
            }
        }
        Ok(tokens)
    }
}

/// Tokenizes and tags every line of a stream, writing one tagged line per input line.
///
/// # Arguments
///
/// * `tokenizer` - A tokenizer. Untagged tokens are written with [`FALLBACK_TAG`].
/// * `rdr` - Raw text, one sentence per line.
/// * `wtr` - Destination of the tagged text.
///
/// # Returns
///
/// The number of lines written.
///
/// # Errors
///
/// Tokenization errors are returned with the 1-based number of the failing line.
pub fn tag_lines<T, R, W>(tokenizer: &T, rdr: R, mut wtr: W) -> Result<usize>
where
    T: Tokenizer + ?Sized,
    R: BufRead,
    W: Write,
{
    let mut n_lines = 0;
    for (i, line) in rdr.lines().enumerate() {
        let line = line?;
        let tokens = tokenizer
            .tokenize(line.trim())
            .map_err(|e| e.at_line(i + 1))?;
        writeln!(wtr, "{}", to_tagged_string(&tokens))?;
        n_lines += 1;
    }
    wtr.flush()?;
    Ok(n_lines)
}
