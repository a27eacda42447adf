//! Definition of errors.

use std::error::Error;
use std::fmt;

pub type Result<T, E = SentimenError> = std::result::Result<T, E>;

#[derive(Debug)]
pub enum SentimenError {
    NotReady(NotReadyError),
    LoadFailure(LoadFailureError),
    InvalidModel(InvalidModelError),
    InvalidArgument(InvalidArgumentError),
    RegexError(regex::Error),
    BincodeError(bincode::Error),
    IOError(std::io::Error),
}

impl SentimenError {
    pub(crate) fn load_failure<S>(source: S, cause: Self) -> Self
    where
        S: Into<String>,
    {
        match cause {
            Self::LoadFailure(_) => cause,
            cause => Self::LoadFailure(LoadFailureError {
                attempts: vec![(source.into(), cause)],
            }),
        }
    }

    pub(crate) fn not_ready(missing: &'static str) -> Self {
        Self::NotReady(NotReadyError { missing })
    }

    pub(crate) fn invalid_model<S>(msg: S) -> Self
    where
        S: Into<String>,
    {
        Self::InvalidModel(InvalidModelError { msg: msg.into() })
    }

    pub(crate) fn invalid_argument<S>(arg: &'static str, msg: S) -> Self
    where
        S: Into<String>,
    {
        Self::InvalidArgument(InvalidArgumentError {
            arg,
            msg: msg.into(),
        })
    }
}

impl fmt::Display for SentimenError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::NotReady(e) => e.fmt(f),
            Self::LoadFailure(e) => e.fmt(f),
            Self::InvalidModel(e) => e.fmt(f),
            Self::InvalidArgument(e) => e.fmt(f),
            Self::RegexError(e) => e.fmt(f),
            Self::BincodeError(e) => e.fmt(f),
            Self::IOError(e) => e.fmt(f),
        }
    }
}

impl Error for SentimenError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::RegexError(e) => Some(e),
            Self::BincodeError(e) => Some(e.as_ref()),
            Self::IOError(e) => Some(e),
            _ => None,
        }
    }
}

/// Error used when a prediction is requested before the classifier and the vocabulary are
/// loaded.
#[derive(Debug)]
pub struct NotReadyError {
    /// What is missing.
    pub(crate) missing: &'static str,
}

impl fmt::Display for NotReadyError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "NotReadyError: {} is not loaded", self.missing)
    }
}

impl Error for NotReadyError {}

/// Error used when every source of a model failed to load.
///
/// Each attempted source is kept together with the reason it failed.
#[derive(Debug)]
pub struct LoadFailureError {
    /// Pairs of a source and its failure cause, in the order they were tried.
    pub(crate) attempts: Vec<(String, SentimenError)>,
}

impl LoadFailureError {
    /// Returns the attempted sources and their failure causes.
    pub fn attempts(&self) -> &[(String, SentimenError)] {
        &self.attempts
    }
}

impl fmt::Display for LoadFailureError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "LoadFailureError: ")?;
        if self.attempts.is_empty() {
            return write!(f, "no source was given");
        }
        for (i, (source, cause)) in self.attempts.iter().enumerate() {
            if i != 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", source, cause)?;
        }
        Ok(())
    }
}

impl Error for LoadFailureError {}

/// Error used when the model is invalid.
#[derive(Debug)]
pub struct InvalidModelError {
    /// Error message.
    pub(crate) msg: String,
}

impl fmt::Display for InvalidModelError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "InvalidModelError: {}", self.msg)
    }
}

impl Error for InvalidModelError {}

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

impl From<regex::Error> for SentimenError {
    fn from(error: regex::Error) -> Self {
        Self::RegexError(error)
    }
}

impl From<bincode::Error> for SentimenError {
    fn from(error: bincode::Error) -> Self {
        Self::BincodeError(error)
    }
}

impl From<std::io::Error> for SentimenError {
    fn from(error: std::io::Error) -> Self {
        Self::IOError(error)
    }
}
