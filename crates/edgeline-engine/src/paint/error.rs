use std::fmt;

/// A color literal that could not be parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseColorError {
    /// The offending input, verbatim.
    pub input: String,
    pub message: String,
}

impl ParseColorError {
    pub(crate) fn new(input: impl Into<String>, msg: impl Into<String>) -> Self {
        Self { input: input.into(), message: msg.into() }
    }
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid color {:?}: {}", self.input, self.message)
    }
}

impl std::error::Error for ParseColorError {}
