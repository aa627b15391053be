use std::str::FromStr;

use unicode_segmentation::UnicodeSegmentation;

use crate::errors::{LexalignError, Result};
use crate::token::{parse_tagged_line, TaggedToken};

/// Splits text into tokens, optionally attaching part-of-speech tags.
pub trait Tokenizer {
    /// Tokenizes a line of text.
    ///
    /// # Arguments
    ///
    /// * `text` - A single line without the trailing line break.
    ///
    /// # Returns
    ///
    /// Tokens in the order they appear in the text. Empty text yields no tokens.
    ///
    /// # Errors
    ///
    /// Implementations that parse annotated input return an error variant for malformed lines.
    fn tokenize(&self, text: &str) -> Result<Vec<TaggedToken>>;
}

impl<T> Tokenizer for Box<T>
where
    T: Tokenizer + ?Sized,
{
    fn tokenize(&self, text: &str) -> Result<Vec<TaggedToken>> {
        (**self).tokenize(text)
    }
}

impl<T> Tokenizer for &T
where
    T: Tokenizer + ?Sized,
{
    fn tokenize(&self, text: &str) -> Result<Vec<TaggedToken>> {
        (**self).tokenize(text)
    }
}

/// Tokenizer that splits on Unicode whitespaces.
#[derive(Clone, Copy, Debug, Default)]
pub struct WhitespaceTokenizer;

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<TaggedToken>> {
        Ok(text.split_whitespace().map(TaggedToken::new).collect())
    }
}

/// Tokenizer that splits on Unicode word boundaries (UAX #29).
///
/// Punctuation marks become separate tokens and whitespaces are dropped.
#[derive(Clone, Copy, Debug, Default)]
pub struct UnicodeTokenizer;

impl Tokenizer for UnicodeTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<TaggedToken>> {
        Ok(text
            .split_word_bounds()
            .filter(|w| !w.chars().all(char::is_whitespace))
            .map(TaggedToken::new)
            .collect())
    }
}

/// Reader for lines that are already tokenized and tagged as `surface/TAG`.
#[derive(Clone, Copy, Debug, Default)]
pub struct PreTaggedTokenizer;

impl Tokenizer for PreTaggedTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<TaggedToken>> {
        parse_tagged_line(text)
    }
}

/// Tokenizer selected by name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenizerKind {
    Whitespace,
    Unicode,
    Tagged,
}

impl TokenizerKind {
    /// Creates the tokenizer of this kind.
    pub fn build(self) -> Box<dyn Tokenizer> {
        match self {
            Self::Whitespace => Box::new(WhitespaceTokenizer),
            Self::Unicode => Box::new(UnicodeTokenizer),
            Self::Tagged => Box::new(PreTaggedTokenizer),
        }
    }
}

impl FromStr for TokenizerKind {
    type Err = LexalignError;

    fn from_str(kind: &str) -> Result<Self, Self::Err> {
        match kind {
            "whitespace" => Ok(Self::Whitespace),
            "unicode" => Ok(Self::Unicode),
            "tagged" => Ok(Self::Tagged),
            _ => Err(LexalignError::invalid_argument(
                "tokenizer",
                format!("unknown tokenizer `{}`: expected whitespace, unicode or tagged", kind),
            )),
        }
    }
}
