use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("The word: '{word}' is not valid, {reason}")]
    InvalidInput { word: String, reason: Reason },
    #[error("The word: '{0}' is not in the dictionary")]
    NotFound(String),
    #[error("The index: '{index}' is out of range for a list of length: '{len}'")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("Unable to read the word list: {0}")]
    Io(#[from] std::io::Error),
    #[cfg(feature = "dataset")]
    #[error("Unable to parse the word list: {0}")]
    Csv(#[from] csv::Error),
}

/// Why a word was refused at the alphabet boundary.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reason {
    #[error("it is empty")]
    Empty,
    #[error("the character '{character}' at position {position} is not a letter from a to z")]
    Character { character: char, position: usize },
}

impl Error {
    pub(crate) fn invalid(word: &str, reason: Reason) -> Self {
        Error::InvalidInput {
            word: word.to_owned(),
            reason,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
