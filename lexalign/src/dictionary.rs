use std::io::{Read, Write};

use hashbrown::HashMap;
use serde::Serialize;

use crate::errors::{LexalignError, Result};
use crate::learner::CooccurrenceTable;

/// Placeholder written in unused translation and count columns.
pub const SENTINEL: &str = "x";

/// Output for tokens without a translation.
pub const NULL_TRANSLATION: &str = "NULL";

/// Number of translation slots in a serialized row.
pub const N_SLOTS: usize = 3;

/// One row of a serialized dictionary: a word and its most frequent translations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DictionaryRow {
    word: String,
    translations: Vec<(String, u64)>,
}

impl DictionaryRow {
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Gets up to [`N_SLOTS`] translations with their counts, most frequent first.
    pub fn translations(&self) -> &[(String, u64)] {
        &self.translations
    }

    fn to_record(&self) -> DictionaryRecord {
        let mut slots = self
            .translations
            .iter()
            .map(|(t, n)| (t.clone(), n.to_string()))
            .chain(std::iter::repeat_with(|| {
                (SENTINEL.to_string(), SENTINEL.to_string())
            }));
        let mut next = || slots.next().unwrap_or_default();
        let (translation1, count1) = next();
        let (translation2, count2) = next();
        let (translation3, count3) = next();
        DictionaryRecord {
            word: self.word.clone(),
            translation1,
            count1,
            translation2,
            count2,
            translation3,
            count3,
        }
    }
}

#[derive(Serialize)]
struct DictionaryRecord {
    word: String,
    translation1: String,
    count1: String,
    translation2: String,
    count2: String,
    translation3: String,
    count3: String,
}

/// Selects the top translations of every word in a table.
///
/// The result has one row per vocabulary word, in vocabulary order. Candidates are ordered by
/// count; among equal counts, the candidate that co-occurred first comes first.
pub fn serialize(table: &CooccurrenceTable) -> Vec<DictionaryRow> {
    table
        .iter()
        .map(|(word, counter)| DictionaryRow {
            word: word.to_string(),
            translations: counter
                .most_common(N_SLOTS)
                .into_iter()
                .map(|(t, n)| (t.to_string(), n))
                .collect(),
        })
        .collect()
}

fn check_field(field: &str) -> Result<()> {
    if field.contains(|c| matches!(c, '\t' | '\n' | '\r')) {
        return Err(LexalignError::invalid_argument(
            "table",
            format!("field {:?} contains a tab or a line break", field),
        ));
    }
    Ok(())
}

fn validate_rows(rows: &[DictionaryRow]) -> Result<()> {
    for row in rows {
        check_field(&row.word)?;
        for (t, _) in &row.translations {
            check_field(t)?;
        }
    }
    Ok(())
}

/// Writes rows as tab-separated text.
///
/// Every line has exactly 7 columns: the word followed by three translation and count pairs.
/// Unused pairs are filled with [`SENTINEL`].
///
/// # Errors
///
/// A word or translation containing a tab or a line break is rejected, since it would break the
/// column layout. All rows are checked before the first one is written, so nothing is written on
/// error.
///
/// # Examples
///
/// ```
/// use lexalign::{learn, serialize, write_dictionary, Vocabulary, WhitespaceTokenizer};
///
/// let vocab: Vocabulary = ["maison", "chien"].into_iter().collect();
/// let table = learn(&vocab, &WhitespaceTokenizer, &["la maison"], &["the house"]).unwrap();
///
/// let mut buf = vec![];
/// write_dictionary(&serialize(&table), &mut buf).unwrap();
/// assert_eq!(
///     "maison\tthe\t1\thouse\t1\tx\tx\nchien\tx\tx\tx\tx\tx\tx\n",
///     String::from_utf8(buf).unwrap(),
/// );
/// ```
pub fn write_dictionary<W>(rows: &[DictionaryRow], wtr: W) -> Result<()>
where
    W: Write,
{
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .quote_style(csv::QuoteStyle::Never)
        .from_writer(wtr);
    validate_rows(rows)?;
    for row in rows {
        wtr.serialize(row.to_record())?;
    }
    wtr.flush()?;
    log::info!("wrote {} dictionary rows", rows.len());
    Ok(())
}

/// Word to translation table used for translation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Dictionary {
    entries: HashMap<String, String>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the first translation of every row of a serialized dictionary.
    ///
    /// Only the word and the first translation column are used. A first slot holding
    /// [`SENTINEL`] in both its translation and count columns means the word was never observed,
    /// and no entry is created for it. When a word appears in several rows, the last one wins.
    ///
    /// # Errors
    ///
    /// A row with fewer than two columns is rejected.
    pub fn read<R>(rdr: R) -> Result<Self>
    where
        R: Read,
    {
        let mut rdr = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(false)
            .quoting(false)
            .flexible(true)
            .from_reader(rdr);
        let mut dict = Self::new();
        for record in rdr.records() {
            let record = record?;
            let line = record.position().map_or(0, |p| p.line() as usize);
            let (word, translation) = match (record.get(0), record.get(1)) {
                (Some(word), Some(translation)) => (word, translation),
                _ => {
                    return Err(LexalignError::invalid_format(
                        "dictionary row must have a word and a translation",
                    )
                    .at_line(line));
                }
            };
            let unobserved =
                translation == SENTINEL && record.get(2).map_or(true, |c| c == SENTINEL);
            if unobserved {
                continue;
            }
            dict.insert(word, translation);
        }
        log::info!("loaded {} dictionary entries", dict.len());
        Ok(dict)
    }

    pub fn insert<S, T>(&mut self, word: S, translation: T)
    where
        S: Into<String>,
        T: Into<String>,
    {
        self.entries.insert(word.into(), translation.into());
    }

    /// Gets the translation of a word.
    pub fn get(&self, word: &str) -> Option<&str> {
        self.entries.get(word).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
