use std::error::Error;
use std::fmt;

/// Custom Error and Result types for everything that touches the data files.
pub type StatsResult<T> = Result<T, StatsError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatsError {
    // Expected: a week that was never written, or the end of a season.
    NotFound(String),
    Io(String),
    Parse(String),
}

impl StatsError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StatsError::NotFound(_))
    }
}

impl fmt::Display for StatsError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            StatsError::NotFound(s) => write!(f, "Not Found: {}", s),
            StatsError::Io(s) => write!(f, "IO Error: {}", s),
            StatsError::Parse(s) => write!(f, "Parse Error: {}", s),
        }
    }
}

impl Error for StatsError {}

impl From<serde_json::Error> for StatsError {
    fn from(error: serde_json::Error) -> Self {
        StatsError::Parse(error.to_string())
    }
}
