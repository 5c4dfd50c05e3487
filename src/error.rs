//! Error types for ua-classify.
//!
//! Classification itself never fails: unmatched input resolves to
//! `Unknown` tags and absent versions. The only caller-visible failure is
//! feeding something that is not a string at all, reported as [`InvalidInput`].

use std::{error::Error as StdError, fmt};

/// Alias for a type-erased error type.
pub type BoxError = Box<dyn StdError + Send + Sync>;

/// Input could not be used as a user-agent string.
///
/// Returned by [`ParsedUserAgent::try_from_bytes`] for byte input
/// that is not valid UTF-8, and by [`ParsedUserAgent::try_from_option`]
/// when there is no input at all.
///
/// [`ParsedUserAgent::try_from_bytes`]: crate::ParsedUserAgent::try_from_bytes
/// [`ParsedUserAgent::try_from_option`]: crate::ParsedUserAgent::try_from_option
pub struct InvalidInput(BoxError);

impl InvalidInput {
    /// Create an [`InvalidInput`] error from a boxable error.
    pub fn from_std(error: impl Into<BoxError>) -> Self {
        Self(error.into())
    }

    /// Create an [`InvalidInput`] error from a displayable message.
    pub fn from_display(msg: impl fmt::Display + fmt::Debug + Send + Sync + 'static) -> Self {
        Self(Box::new(MessageError(msg)))
    }

    /// Convert the [`InvalidInput`] back into the underlying boxed error.
    #[must_use]
    pub fn into_inner(self) -> BoxError {
        self.0
    }
}

impl fmt::Debug for InvalidInput {
    #[inline(always)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl fmt::Display for InvalidInput {
    #[inline(always)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid user-agent input: {}", self.0)
    }
}

impl StdError for InvalidInput {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(self.0.as_ref())
    }
}

struct MessageError<M>(M);

impl<M: fmt::Debug> fmt::Debug for MessageError<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<M: fmt::Display> fmt::Display for MessageError<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<M: fmt::Display + fmt::Debug> StdError for MessageError<M> {}
