use crate::test::Location;
use thiserror::Error;

/// The failure raised by a test case when a checked condition is false.
///
/// The message is always a static string, so raising a failure never allocates.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
#[error("{message} {}:{}", .location.file, .location.line)]
pub struct CheckFailure {
    message: &'static str,
    location: Location,
}

impl CheckFailure {
    /// Create a failure raised by the check at `location`.
    #[inline]
    pub fn new(message: &'static str, location: Location) -> Self {
        Self { message, location }
    }

    /// Return the diagnostic message, without the location.
    #[inline]
    pub fn message(&self) -> &'static str {
        self.message
    }

    /// Return the location of the failing check.
    #[inline]
    pub fn location(&self) -> &Location {
        &self.location
    }
}
