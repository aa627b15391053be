//! Definition of errors.

use std::error::Error;
use std::fmt;

pub type Result<T, E = LexalignError> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum LexalignError {
    #[error(transparent)]
    InvalidArgument(InvalidArgumentError),

    #[error(transparent)]
    InvalidFormat(InvalidFormatError),

    #[error(transparent)]
    Misaligned(MisalignedCorpusError),

    #[error(transparent)]
    CsvError(#[from] csv::Error),

    #[error(transparent)]
    IOError(#[from] std::io::Error),
}

impl LexalignError {
    pub(crate) fn invalid_argument<S>(arg: &'static str, msg: S) -> Self
    where
        S: Into<String>,
    {
        Self::InvalidArgument(InvalidArgumentError {
            arg,
            msg: msg.into(),
        })
    }

    pub(crate) fn invalid_format<S>(msg: S) -> Self
    where
        S: Into<String>,
    {
        Self::InvalidFormat(InvalidFormatError {
            line: None,
            msg: msg.into(),
        })
    }

    pub(crate) fn misaligned(n_source: usize, n_target: usize) -> Self {
        Self::Misaligned(MisalignedCorpusError { n_source, n_target })
    }

    /// Attaches a 1-based line number to a format error. Other variants pass through.
    pub(crate) fn at_line(self, line: usize) -> Self {
        match self {
            Self::InvalidFormat(e) => Self::InvalidFormat(InvalidFormatError {
                line: Some(line),
                msg: e.msg,
            }),
            e => e,
        }
    }
}

/// Error used when the argument is invalid.
#[derive(Debug)]
pub struct InvalidArgumentError {
    /// Name of the argument.
    pub(crate) arg: &'static str,

    /// Error message.
    pub(crate) msg: String,
}

impl fmt::Display for InvalidArgumentError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "InvalidArgumentError: {}: {}", self.arg, self.msg)
    }
}

impl Error for InvalidArgumentError {}

/// Error used when an input file is malformed.
#[derive(Debug)]
pub struct InvalidFormatError {
    /// 1-based line number, if known.
    pub(crate) line: Option<usize>,

    /// Error message.
    pub(crate) msg: String,
}

impl fmt::Display for InvalidFormatError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "InvalidFormatError: line {}: {}", line, self.msg),
            None => write!(f, "InvalidFormatError: {}", self.msg),
        }
    }
}

impl Error for InvalidFormatError {}

/// Error used when two corpora that must be line-aligned differ in length.
#[derive(Debug)]
pub struct MisalignedCorpusError {
    pub(crate) n_source: usize,
    pub(crate) n_target: usize,
}

impl fmt::Display for MisalignedCorpusError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "MisalignedCorpusError: source has {} lines but target has {} lines",
            self.n_source, self.n_target
        )
    }
}

impl Error for MisalignedCorpusError {}
