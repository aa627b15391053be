//! File-level entry points.
//!
//! Every function takes all of its paths as arguments. Files are opened inside the function and
//! closed when it returns, whether it succeeds or not. Output is written to a temporary file next
//! to the destination and renamed over it on success, so a failed call never leaves a partial
//! output behind.

use std::io::{BufRead, BufWriter, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::corpus::{open_text, read_lines, AlignmentPolicy};
use crate::dictionary::{serialize, write_dictionary, Dictionary};
use crate::errors::Result;
use crate::learner::Learner;
use crate::tagger::{tag_lines, Lexicon};
use crate::tokenizer::{PreTaggedTokenizer, Tokenizer};
use crate::translator::Translator;
use crate::vocabulary::Vocabulary;

/// Statistics of a learning pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LearnSummary {
    /// Number of vocabulary words, which is also the number of rows written.
    pub n_words: usize,

    /// Number of sentence pairs counted.
    pub n_pairs: usize,

    /// Number of source tokens found in the vocabulary.
    pub n_hits: usize,
}

/// Loads a vocabulary file with one word per line.
pub fn load_vocabulary<P>(path: P) -> Result<Vocabulary>
where
    P: AsRef<Path>,
{
    Vocabulary::read(open_text(path)?)
}

/// Loads a serialized dictionary for translation.
pub fn load_dictionary<P>(path: P) -> Result<Dictionary>
where
    P: AsRef<Path>,
{
    Dictionary::read(open_text(path)?)
}

/// Loads a `word<TAB>TAG` lexicon.
pub fn load_lexicon<P>(path: P) -> Result<Lexicon>
where
    P: AsRef<Path>,
{
    Lexicon::read(open_text(path)?)
}

/// Runs `write` on a temporary file and moves the file to `output_path` if it succeeds.
///
/// On error, the temporary file is removed and `output_path` is left untouched.
fn write_output<P, F, T>(output_path: P, write: F) -> Result<T>
where
    P: AsRef<Path>,
    F: FnOnce(&mut BufWriter<&mut NamedTempFile>) -> Result<T>,
{
    let output_path = output_path.as_ref();
    let dir = match output_path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    let ret = {
        let mut wtr = BufWriter::new(&mut tmp);
        let ret = write(&mut wtr)?;
        wtr.flush()?;
        ret
    };
    tmp.persist(output_path).map_err(|e| e.error)?;
    Ok(ret)
}

fn run_learner<P>(learner: Learner, vocab_len: usize, output_path: P) -> Result<LearnSummary>
where
    P: AsRef<Path>,
{
    let summary = LearnSummary {
        n_words: vocab_len,
        n_pairs: learner.n_pairs(),
        n_hits: learner.n_hits(),
    };
    log::info!(
        "counted {} sentence pairs, {} vocabulary hits",
        summary.n_pairs,
        summary.n_hits
    );
    let rows = serialize(&learner.into_table());
    write_output(output_path, |wtr| write_dictionary(&rows, wtr))?;
    Ok(summary)
}

/// Learns a dictionary from a raw parallel corpus and writes it as a 7-column TSV file.
///
/// # Arguments
///
/// * `vocab_path` - Words to learn translations for, one per line.
/// * `source_path` - Sentences in the language of the vocabulary.
/// * `target_path` - Sentences in the translation language, aligned with `source_path`.
/// * `output_path` - Destination of the dictionary. Created or replaced when learning succeeds.
/// * `tokenizer` - Tokenizer applied to both corpora.
/// * `alignment` - How to pair corpora of different lengths.
pub fn learn_dictionary<P, Q, R, S, T>(
    vocab_path: P,
    source_path: Q,
    target_path: R,
    output_path: S,
    tokenizer: &T,
    alignment: AlignmentPolicy,
) -> Result<LearnSummary>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
    R: AsRef<Path>,
    S: AsRef<Path>,
    T: Tokenizer + ?Sized,
{
    let vocab = load_vocabulary(vocab_path)?;
    log::info!("loaded {} vocabulary words", vocab.len());
    let source = read_lines(source_path)?;
    let target = read_lines(target_path)?;
    let mut learner = Learner::new(&vocab).alignment(alignment);
    learner.add_corpus(tokenizer, tokenizer, &source, &target)?;
    run_learner(learner, vocab.len(), output_path)
}

/// Learns a dictionary from a tagged parallel corpus, counting only tokens with matching tags.
///
/// Both corpora must be in the `surface/TAG` format written by [`tag_data_file`].
pub fn learn_dictionary_pos<P, Q, R, S>(
    vocab_path: P,
    source_tagged_path: Q,
    target_tagged_path: R,
    output_path: S,
    alignment: AlignmentPolicy,
) -> Result<LearnSummary>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
    R: AsRef<Path>,
    S: AsRef<Path>,
{
    let vocab = load_vocabulary(vocab_path)?;
    log::info!("loaded {} vocabulary words", vocab.len());
    let source = read_lines(source_tagged_path)?;
    let target = read_lines(target_tagged_path)?;
    let mut learner = Learner::new(&vocab).pos_filter(true).alignment(alignment);
    learner.add_corpus(&PreTaggedTokenizer, &PreTaggedTokenizer, &source, &target)?;
    run_learner(learner, vocab.len(), output_path)
}

/// Tags every line of a raw corpus file and writes it in the `surface/TAG` format.
///
/// # Returns
///
/// The number of lines written.
pub fn tag_data_file<T, P, Q>(tokenizer: &T, input_path: P, output_path: Q) -> Result<usize>
where
    T: Tokenizer + ?Sized,
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let rdr = open_text(input_path)?;
    let n_lines = write_output(output_path, |wtr| tag_lines(tokenizer, rdr, wtr))?;
    log::info!("tagged {} lines", n_lines);
    Ok(n_lines)
}

/// Translates every line of a file with a serialized dictionary.
///
/// # Returns
///
/// The number of lines written.
pub fn translate_file<T, P, Q, R>(
    tokenizer: T,
    dictionary_path: P,
    input_path: Q,
    output_path: R,
) -> Result<usize>
where
    T: Tokenizer,
    P: AsRef<Path>,
    Q: AsRef<Path>,
    R: AsRef<Path>,
{
    let translator = Translator::new(load_dictionary(dictionary_path)?, tokenizer);
    let rdr = open_text(input_path)?;
    let n_lines = write_output(output_path, |wtr| translator.translate_lines(rdr, wtr))?;
    log::info!("translated {} lines", n_lines);
    Ok(n_lines)
}

/// Translates a single line read from `rdr`, then returns.
pub fn translate_interactive<T, P, R, W>(
    tokenizer: T,
    dictionary_path: P,
    rdr: R,
    wtr: W,
    prompt: Option<&str>,
) -> Result<String>
where
    T: Tokenizer,
    P: AsRef<Path>,
    R: BufRead,
    W: Write,
{
    let translator = Translator::new(load_dictionary(dictionary_path)?, tokenizer);
    translator.translate_interactive(rdr, wtr, prompt)
}
