// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::fmt;

/// The reason a [`Uri`](crate::Uri) could not be produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum UriErrorKind {
    /// The input string cannot be decomposed into URI components at all.
    UnparsableInput,

    /// The components are individually well-formed but do not re-serialize into
    /// a valid absolute URI, for example a relative reference or a host containing
    /// characters that are not allowed there.
    Unrepresentable,
}

impl fmt::Display for UriErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnparsableInput => f.write_str("unparsable URI input"),
            Self::Unrepresentable => f.write_str("unrepresentable URI components"),
        }
    }
}

/// Error returned when a URI cannot be parsed or re-serialized.
///
/// The [`kind`](Self::kind) tells the two failure modes apart, the cause carries the
/// human-readable reason.
///
/// ```
/// use ohno::ErrorExt;
/// use uri_builder::{Uri, UriErrorKind};
///
/// let error = Uri::parse_strict("https://www.example test.com/").unwrap_err();
/// assert_eq!(error.kind(), UriErrorKind::UnparsableInput);
/// assert!(error.message().contains("input is not an RFC 3986 URI reference"));
/// ```
#[ohno::error]
#[display("{kind}")]
pub struct UriError {
    kind: UriErrorKind,
}

impl UriError {
    /// Returns what kind of failure this is.
    #[must_use]
    pub fn kind(&self) -> UriErrorKind {
        self.kind
    }

    pub(crate) fn unparsable(reason: impl Into<String>) -> Self {
        Self::rejected(UriErrorKind::UnparsableInput, reason.into())
    }

    pub(crate) fn unrepresentable(reason: impl Into<String>) -> Self {
        Self::rejected(UriErrorKind::Unrepresentable, reason.into())
    }

    fn rejected(kind: UriErrorKind, reason: String) -> Self {
        emit_rejected(kind, &reason);
        Self::caused_by(kind, reason)
    }
}

#[cfg_attr(
    not(any(feature = "logs", test)),
    expect(unused_variables, reason = "unused when logs feature not used")
)]
fn emit_rejected(kind: UriErrorKind, reason: &str) {
    // The URI text itself is never logged, only why it was rejected.
    #[cfg(any(feature = "logs", test))]
    tracing::event!(
        name: "uri_builder.rejected",
        tracing::Level::DEBUG,
        uri.error.kind = %kind,
        uri.error.reason = reason,
    );
}
