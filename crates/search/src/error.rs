use std::error::Error;
use std::fmt;

/// Returned when a regex-mode query is not a valid pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidPatternError {
    pattern: String,
    message: String,
}

impl InvalidPatternError {
    pub(crate) fn new(pattern: &str, source: &regex::Error) -> Self {
        Self {
            pattern: pattern.to_string(),
            message: source.to_string(),
        }
    }

    /// The pattern that failed to compile.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

impl fmt::Display for InvalidPatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid search pattern {:?}: {}", self.pattern, self.message)
    }
}

impl Error for InvalidPatternError {}
