use std::fmt;

/// A string could not be read as a canonical `YYYY-MM-DD` date.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct ParseDateError {
    input: String,
    reason: &'static str,
}

impl ParseDateError {
    pub(crate) fn new(input: &str, reason: &'static str) -> Self {
        Self { input: input.to_string(), reason }
    }

    /// The rejected input.
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for ParseDateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid date `{}`: {}", self.input, self.reason)
    }
}

impl std::error::Error for ParseDateError {}
