//! Shared validation for opaque identifiers used in routes and storage.

use std::fmt;

/// Longest identifier accepted from a route or the database.
pub const MAX_ID_LEN: usize = 64;

/// The kind of problem found in an identifier string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ParseIdErrorKind {
    Empty,
    TooLong,
    InvalidChar(char),
}

/// Error returned when parsing an invalid note or user identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIdError {
    what: &'static str,
    value: String,
    kind: ParseIdErrorKind,
}

impl ParseIdError {
    /// Returns the invalid value that caused this error.
    pub fn invalid_value(&self) -> &str {
        &self.value
    }

    /// Returns which identifier was being parsed ("note id" or "user id").
    pub fn what(&self) -> &'static str {
        self.what
    }
}

impl fmt::Display for ParseIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ParseIdErrorKind::Empty => write!(f, "invalid {}: cannot be empty", self.what),
            ParseIdErrorKind::TooLong => write!(
                f,
                "invalid {} '{}': longer than {} characters",
                self.what, self.value, MAX_ID_LEN
            ),
            ParseIdErrorKind::InvalidChar(c) => write!(
                f,
                "invalid {} '{}': unexpected character {:?}",
                self.what, self.value, c
            ),
        }
    }
}

impl std::error::Error for ParseIdError {}

/// Checks that `s` can be used as an opaque identifier.
///
/// Identifiers travel in URL path segments, so whitespace, control characters
/// and the URL delimiters `/`, `?` and `#` are rejected.
pub(crate) fn validate(what: &'static str, s: &str) -> Result<(), ParseIdError> {
    let fail = |kind| {
        Err(ParseIdError {
            what,
            value: s.to_string(),
            kind,
        })
    };

    if s.is_empty() {
        return fail(ParseIdErrorKind::Empty);
    }
    if s.chars().count() > MAX_ID_LEN {
        return fail(ParseIdErrorKind::TooLong);
    }
    if let Some(c) = s
        .chars()
        .find(|c| c.is_whitespace() || c.is_control() || matches!(c, '/' | '?' | '#'))
    {
        return fail(ParseIdErrorKind::InvalidChar(c));
    }
    Ok(())
}
