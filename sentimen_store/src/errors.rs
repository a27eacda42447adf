//! Definition of errors.

use std::error::Error;
use std::fmt;

pub type Result<T, E = StoreError> = std::result::Result<T, E>;

#[derive(Debug)]
pub enum StoreError {
    Unavailable(UnavailableError),
    CsvError(csv::Error),
    IOError(std::io::Error),
}

impl StoreError {
    pub(crate) fn unavailable<S>(backend: S) -> Self
    where
        S: Into<String>,
    {
        Self::Unavailable(UnavailableError {
            backend: backend.into(),
        })
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Unavailable(e) => e.fmt(f),
            Self::CsvError(e) => e.fmt(f),
            Self::IOError(e) => e.fmt(f),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Unavailable(_) => None,
            Self::CsvError(e) => Some(e),
            Self::IOError(e) => Some(e),
        }
    }
}

/// Error used when a backend cannot be reached.
#[derive(Debug)]
pub struct UnavailableError {
    pub(crate) backend: String,
}

impl fmt::Display for UnavailableError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "UnavailableError: {} is not available", self.backend)
    }
}

impl Error for UnavailableError {}

impl From<csv::Error> for StoreError {
    fn from(error: csv::Error) -> Self {
        Self::CsvError(error)
    }
}

impl From<std::io::Error> for StoreError {
    fn from(error: std::io::Error) -> Self {
        Self::IOError(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            "UnavailableError: sheets is not available",
            StoreError::unavailable("sheets").to_string()
        );
    }
}
