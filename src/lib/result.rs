use std::{error, fmt};

/// An error.
#[derive(Clone, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,
    index: Option<usize>,
    message: String,
}

/// The type of an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// A value is out of range or is not an integer.
    InvalidInput,
    /// A required value is missing.
    IncompleteInput,
    /// Anything else.
    Other,
}

/// A result.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error of the general kind.
    #[inline]
    pub fn new<T: ToString>(message: T) -> Error {
        Error { kind: ErrorKind::Other, index: None, message: message.to_string() }
    }

    /// Create an error about an invalid value.
    #[inline]
    pub fn invalid<T: ToString>(message: T) -> Error {
        Error { kind: ErrorKind::InvalidInput, index: None, message: message.to_string() }
    }

    /// Create an error about a missing value of a process.
    #[inline]
    pub fn incomplete<T: ToString>(index: usize, message: T) -> Error {
        Error { kind: ErrorKind::IncompleteInput, index: Some(index), message: message.to_string() }
    }

    /// Attach the 1-based index of the offending process.
    #[inline]
    pub fn at(mut self, index: usize) -> Error {
        self.index = Some(index);
        self
    }

    getter!(kind: ErrorKind);
    getter!(index: Option<usize>);
    getter!(ref message: String);
}

impl fmt::Debug for Error {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "{:?}({})", self.kind, self)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match self.index {
            Some(index) => write!(formatter, "P[{}]: {}", index, self.message),
            _ => formatter.write_str(&self.message),
        }
    }
}

impl error::Error for Error {
}
