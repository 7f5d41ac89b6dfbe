use std::fmt::{Display, Formatter};
use std::path::PathBuf;

/// Anything that can abort a conversion.
/// None of these are recoverable; a run either produces the whole output or nothing.
#[derive(Debug)]
pub enum ConvertError {
    /// The input could not be opened, read or downloaded
    InputUnavailable {
        /// A file path or URL
        location: String,
        error: InputError,
    },
    /// A line that looks like a data record doesn't have the
    /// `codepoints ; status # emoji EX.Y name` layout
    MalformedRecord {
        /// 1-based
        line_number: usize,
        line: String,
    },
    /// The output file could not be created, written or moved into place
    OutputUnwritable {
        path: PathBuf,
        error: std::io::Error,
    },
    /// Wrapper for [serde_json::Error]
    Serialization(serde_json::Error),
}

#[derive(Debug)]
/// The reason why an input could not be loaded
pub enum InputError {
    /// Wrapper for [std::io::Error]
    Io(std::io::Error),
    #[cfg(feature = "online")]
    /// Wrapper for [reqwest::Error]
    Reqwest(reqwest::Error),
}

impl From<std::io::Error> for InputError {
    fn from(err: std::io::Error) -> Self {
        InputError::Io(err)
    }
}

#[cfg(feature = "online")]
impl From<reqwest::Error> for InputError {
    fn from(err: reqwest::Error) -> Self {
        InputError::Reqwest(err)
    }
}

impl From<serde_json::Error> for ConvertError {
    fn from(err: serde_json::Error) -> Self {
        ConvertError::Serialization(err)
    }
}

impl Display for InputError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            InputError::Io(error) => error.fmt(f),
            #[cfg(feature = "online")]
            InputError::Reqwest(error) => error.fmt(f),
        }
    }
}

impl Display for ConvertError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConvertError::InputUnavailable { location, error } =>
                write!(f, "Could not read {}: {}", location, error),
            ConvertError::MalformedRecord { line_number, line } =>
                write!(f, "Malformed line {} in emoji-test.txt: {}", line_number, line),
            ConvertError::OutputUnwritable { path, error } =>
                write!(f, "Could not write {}: {}", path.display(), error),
            ConvertError::Serialization(error) =>
                write!(f, "Could not serialize the emoji tables: {}", error),
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InputError::Io(error) => Some(error),
            #[cfg(feature = "online")]
            InputError::Reqwest(error) => Some(error),
        }
    }
}

impl std::error::Error for ConvertError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConvertError::InputUnavailable { error, .. } => Some(error),
            ConvertError::MalformedRecord { .. } => None,
            ConvertError::OutputUnwritable { error, .. } => Some(error),
            ConvertError::Serialization(error) => Some(error),
        }
    }
}
