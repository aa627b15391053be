use std::io::{BufRead, Write};

use crate::dictionary::{Dictionary, NULL_TRANSLATION};
use crate::errors::Result;
use crate::token::TaggedToken;
use crate::tokenizer::Tokenizer;

/// Translates tokens one by one with a dictionary.
///
/// # Returns
///
/// One output per token: its translation, or `NULL` if the dictionary does not contain it.
pub fn translate<'a>(dictionary: &'a Dictionary, tokens: &[TaggedToken]) -> Vec<&'a str> {
    tokens
        .iter()
        .map(|t| dictionary.get(t.surface()).unwrap_or(NULL_TRANSLATION))
        .collect()
}

/// Word-by-word translator.
pub struct Translator<T> {
    dictionary: Dictionary,
    tokenizer: T,
}

impl<T> Translator<T>
where
    T: Tokenizer,
{
    /// Creates a new translator.
    ///
    /// # Arguments
    ///
    /// * `dictionary` - A word to translation table.
    /// * `tokenizer` - A tokenizer for the input language.
    ///
    /// # Examples
    ///
    /// ```
    /// use lexalign::{Dictionary, Translator, UnicodeTokenizer};
    ///
    /// let mut dict = Dictionary::new();
    /// dict.insert("maison", "house");
    /// dict.insert("la", "the");
    /// let translator = Translator::new(dict, UnicodeTokenizer);
    ///
    /// assert_eq!("the house NULL", translator.translate_line("la maison !").unwrap());
    /// ```
    pub fn new(dictionary: Dictionary, tokenizer: T) -> Self {
        Self {
            dictionary,
            tokenizer,
        }
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Translates a sentence into a space-separated line.
    pub fn translate_line(&self, line: &str) -> Result<String> {
        let tokens = self.tokenizer.tokenize(line.trim())?;
        Ok(translate(&self.dictionary, &tokens).join(" "))
    }

    /// Translates every line of a stream.
    ///
    /// One line is written for every input line, including empty ones.
    ///
    /// # Returns
    ///
    /// The number of lines written.
    ///
    /// # Errors
    ///
    /// Tokenization errors are returned with the 1-based number of the failing line.
    pub fn translate_lines<R, W>(&self, rdr: R, mut wtr: W) -> Result<usize>
    where
        R: BufRead,
        W: Write,
    {
        let mut n_lines = 0;
        for (i, line) in rdr.lines().enumerate() {
            let line = line?;
            let translated = self.translate_line(&line).map_err(|e| e.at_line(i + 1))?;
            writeln!(wtr, "{}", translated)?;
            n_lines += 1;
        }
        wtr.flush()?;
        Ok(n_lines)
    }

    /// Performs a single interactive exchange.
    ///
    /// Writes the prompt if one is given, reads exactly one line, and writes its translation.
    /// Nothing more is read from `rdr`. If the input ends before a line is read, an empty line is
    /// written.
    ///
    /// # Returns
    ///
    /// The translated line.
    pub fn translate_interactive<R, W>(
        &self,
        mut rdr: R,
        mut wtr: W,
        prompt: Option<&str>,
    ) -> Result<String>
    where
        R: BufRead,
        W: Write,
    {
        if let Some(prompt) = prompt {
            write!(wtr, "{}", prompt)?;
            wtr.flush()?;
        }
        let mut line = String::new();
        rdr.read_line(&mut line)?;
        let translated = self.translate_line(&line)?;
        writeln!(wtr, "{}", translated)?;
        wtr.flush()?;
        Ok(translated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Read;

    use crate::tokenizer::{PreTaggedTokenizer, WhitespaceTokenizer};

    fn translator() -> Translator<WhitespaceTokenizer> {
        let mut dict = Dictionary::new();
        dict.insert("maison", "house");
        dict.insert("la", "the");
        dict.insert("est", "is");
        Translator::new(dict, WhitespaceTokenizer)
    }

    #[test]
    fn test_translate_known() {
        let t = translator();
        assert_eq!("house", t.translate_line("maison").unwrap());
    }

    #[test]
    fn test_translate_unknown() {
        let t = translator();
        assert_eq!("NULL", t.translate_line("chien").unwrap());
        assert_eq!("the house is NULL", t.translate_line("la maison est grande").unwrap());
    }

    #[test]
    fn test_translate_tagged_tokens() {
        let t = translator();
        let tokens = vec![
            TaggedToken::with_tag("la", "DET"),
            TaggedToken::with_tag("porte", "NOUN"),
        ];
        assert_eq!(vec!["the", "NULL"], translate(t.dictionary(), &tokens));
        assert!(translate(t.dictionary(), &[]).is_empty());
    }

    #[test]
    fn test_translate_lines() {
        let t = translator();
        let mut out = vec![];
        let n = t
            .translate_lines("la maison\n\nmaison est\n".as_bytes(), &mut out)
            .unwrap();
        assert_eq!(3, n);
        assert_eq!("the house\n\nhouse is\n", String::from_utf8(out).unwrap());
    }

    #[test]
    fn test_translate_lines_reports_line() {
        let t = Translator::new(Dictionary::new(), PreTaggedTokenizer);
        let mut out = vec![];
        let e = t
            .translate_lines("la/DET\nmaison\n".as_bytes(), &mut out)
            .unwrap_err();
        assert_eq!(
            "InvalidFormatError: line 2: token `maison` has no tag separator",
            e.to_string()
        );
    }

    #[test]
    fn test_translate_interactive_single_exchange() {
        let t = translator();
        let mut input = "la maison\nmaison\n".as_bytes();
        let mut out = vec![];
        let translated = t
            .translate_interactive(&mut input, &mut out, Some("> "))
            .unwrap();
        assert_eq!("the house", translated);
        assert_eq!("> the house\n", String::from_utf8(out).unwrap());

        // The second line is left unread.
        let mut rest = String::new();
        input.read_to_string(&mut rest).unwrap();
        assert_eq!("maison\n", rest);
    }

    #[test]
    fn test_translate_interactive_eof() {
        let t = translator();
        let mut out = vec![];
        let translated = t.translate_interactive("".as_bytes(), &mut out, None).unwrap();
        assert_eq!("", translated);
        assert_eq!("\n", String::from_utf8(out).unwrap());
    }
}
