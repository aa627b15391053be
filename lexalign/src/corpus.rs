//! Reading corpora from files.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::errors::{LexalignError, Result};

/// How to pair two corpora that should be line-aligned.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AlignmentPolicy {
    /// Corpora with different numbers of lines are rejected.
    #[default]
    Strict,

    /// Lines are paired up to the end of the shorter corpus. The rest is dropped.
    Truncate,
}

impl AlignmentPolicy {
    /// Computes how many sentence pairs two corpora yield under this policy.
    ///
    /// # Errors
    ///
    /// Under [`AlignmentPolicy::Strict`], an error variant is returned if the lengths differ.
    pub fn n_pairs(self, n_source: usize, n_target: usize) -> Result<usize> {
        if n_source == n_target {
            return Ok(n_source);
        }
        match self {
            Self::Strict => Err(LexalignError::misaligned(n_source, n_target)),
            Self::Truncate => {
                let n = n_source.min(n_target);
                log::warn!(
                    "corpora are misaligned ({} vs {} lines); dropping {} trailing lines",
                    n_source,
                    n_target,
                    n_source.max(n_target) - n
                );
                Ok(n)
            }
        }
    }
}

/// Opens a text file for buffered reading.
///
/// Files whose names end with `.zst` are decompressed on the fly.
pub fn open_text<P>(path: P) -> Result<Box<dyn BufRead>>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let f = File::open(path)?;
    if path.extension().map_or(false, |ext| ext == "zst") {
        log::debug!("reading {} as zstd stream", path.display());
        Ok(Box::new(BufReader::new(zstd::Decoder::new(f)?)))
    } else {
        Ok(Box::new(BufReader::new(f)))
    }
}

/// Reads all lines of a text file, without line breaks.
pub fn read_lines<P>(path: P) -> Result<Vec<String>>
where
    P: AsRef<Path>,
{
    let mut lines = vec![];
    for line in open_text(path)?.lines() {
        let mut line = line?;
        if line.ends_with('\r') {
            line.pop();
        }
        lines.push(line);
    }
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;

    #[test]
    fn test_n_pairs_equal() {
        assert_eq!(3, AlignmentPolicy::Strict.n_pairs(3, 3).unwrap());
        assert_eq!(3, AlignmentPolicy::Truncate.n_pairs(3, 3).unwrap());
    }

    #[test]
    fn test_n_pairs_strict_mismatch() {
        let e = AlignmentPolicy::Strict.n_pairs(3, 2).unwrap_err();
        assert_eq!(
            "MisalignedCorpusError: source has 3 lines but target has 2 lines",
            e.to_string()
        );
    }

    #[test]
    fn test_n_pairs_truncate_mismatch() {
        assert_eq!(2, AlignmentPolicy::Truncate.n_pairs(3, 2).unwrap());
        assert_eq!(1, AlignmentPolicy::Truncate.n_pairs(1, 5).unwrap());
    }

    #[test]
    fn test_read_lines_plain() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("corpus.fr");
        std::fs::write(&path, "la maison\r\nle chat\n").unwrap();
        assert_eq!(vec!["la maison", "le chat"], read_lines(&path).unwrap());
    }

    #[test]
    fn test_read_lines_zstd() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("corpus.fr.zst");
        let mut enc = zstd::Encoder::new(File::create(&path).unwrap(), 3).unwrap();
        enc.write_all(b"la maison\nle chat\n").unwrap();
        enc.finish().unwrap();
        assert_eq!(vec!["la maison", "le chat"], read_lines(&path).unwrap());
    }

    #[test]
    fn test_read_lines_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let e = read_lines(dir.path().join("missing")).unwrap_err();
        assert!(matches!(e, LexalignError::IOError(_)));
    }
}
