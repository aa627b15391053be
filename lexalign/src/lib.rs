//! # lexalign
//!
//! lexalign builds bilingual dictionaries from line-aligned parallel corpora by counting
//! co-occurrences, and translates sentences word by word with the result.
//!
//! ## Examples
//!
//! ```
//! use lexalign::{learn, serialize, write_dictionary, Dictionary, Translator, Vocabulary,
//!                WhitespaceTokenizer};
//!
//! let vocab: Vocabulary = ["maison", "chat"].into_iter().collect();
//! let table = learn(
//!     &vocab,
//!     &WhitespaceTokenizer,
//!     &["la maison", "une maison", "le chat"],
//!     &["the house", "a house", "the cat"],
//! )
//! .unwrap();
//!
//! let mut tsv = vec![];
//! write_dictionary(&serialize(&table), &mut tsv).unwrap();
//!
//! let dict = Dictionary::read(tsv.as_slice()).unwrap();
//! let translator = Translator::new(dict, WhitespaceTokenizer);
//! assert_eq!("house NULL", translator.translate_line("maison bleue").unwrap());
//! ```
//!
//! File-level entry points live in [`pipeline`].

mod corpus;
mod counter;
mod dictionary;
mod learner;
mod tagger;
mod token;
mod tokenizer;
mod translator;
mod vocabulary;

pub mod errors;
pub mod pipeline;

pub use corpus::{open_text, read_lines, AlignmentPolicy};
pub use counter::CooccurrenceCounter;
pub use dictionary::{
    serialize, write_dictionary, Dictionary, DictionaryRow, NULL_TRANSLATION, N_SLOTS, SENTINEL,
};
pub use learner::{learn, CooccurrenceTable, Learner};
pub use tagger::{tag_lines, Lexicon, LexiconTagger};
pub use token::{parse_tagged_line, to_tagged_string, TaggedToken, FALLBACK_TAG};
pub use tokenizer::{
    PreTaggedTokenizer, Tokenizer, TokenizerKind, UnicodeTokenizer, WhitespaceTokenizer,
};
pub use translator::{translate, Translator};
pub use vocabulary::Vocabulary;
