// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! The validated, immutable URI value.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::{QueryItem, UriComponents, UriError};

/// An absolute URI that is well-formed according to RFC 3986.
///
/// A `Uri` can only be obtained through validation, so holding one means holding a valid URI.
/// Equality, ordering and hashing use the canonical string form.
///
/// New URIs are derived by editing a [`UriComponents`] copy in a closure; the closure runs
/// exactly once and either the whole edit produces a valid URI or nothing changes.
///
/// ```
/// use uri_builder::Uri;
///
/// let uri = Uri::build("https://example.com", |components| {
///     components.append_path("hello");
///     components.add_query_item("isMutable", None);
///     components.add_query_item("title", Some("example"));
/// })?;
/// assert_eq!(uri.as_str(), "https://example.com/hello?isMutable&title=example");
/// # Ok::<_, uri_builder::UriError>(())
/// ```
#[derive(Clone)]
pub struct Uri {
    serialization: String,
    components: UriComponents,
}

impl Uri {
    /// Parses and validates an absolute URI.
    ///
    /// The string is first decomposed into components, then the components are
    /// re-serialized. Both steps must succeed.
    ///
    /// ```
    /// use uri_builder::{Uri, UriErrorKind};
    ///
    /// let uri = Uri::parse_strict("https://example.com/path?query=1")?;
    /// assert_eq!(uri.host(), Some("example.com"));
    ///
    /// // Not decomposable: a space is not allowed in a host.
    /// let error = Uri::parse_strict("https://www.example test.com/").unwrap_err();
    /// assert_eq!(error.kind(), UriErrorKind::UnparsableInput);
    ///
    /// // Decomposable, but a relative reference is not an absolute URI.
    /// let error = Uri::parse_strict("/path/only").unwrap_err();
    /// assert_eq!(error.kind(), UriErrorKind::Unrepresentable);
    /// # Ok::<_, uri_builder::UriError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an [`UnparsableInput`](crate::UriErrorKind::UnparsableInput) error if the string
    /// cannot be decomposed, or an [`Unrepresentable`](crate::UriErrorKind::Unrepresentable)
    /// error if it is not an absolute URI.
    pub fn parse_strict(input: &str) -> Result<Self, UriError> {
        UriComponents::parse(input)?.into_uri()
    }

    /// Creates a `Uri` from a static string.
    ///
    /// Prefer the `uri!` macro from the `uri_builder_macros` crate, which performs the
    /// validation at compile time and expands to this call.
    ///
    /// # Panics
    ///
    /// Panics if the string is not a valid absolute URI.
    ///
    /// ```
    /// use uri_builder::Uri;
    ///
    /// let uri = Uri::from_static("https://example.com");
    /// assert_eq!(uri.scheme(), "https");
    /// ```
    #[must_use]
    pub fn from_static(uri: &'static str) -> Self {
        Self::parse_strict(uri).expect("static str is not a valid URI")
    }

    /// Parses `initial` as URI components, lets `update` edit them and builds the result.
    ///
    /// `initial` may be a relative or partial reference as long as the edited components
    /// form an absolute URI.
    ///
    /// ```
    /// use uri_builder::Uri;
    ///
    /// let uri = Uri::build("//example.com", |components| {
    ///     components.set_scheme(Some("https"));
    ///     components.append_path("hello");
    /// })?;
    /// assert_eq!(uri.as_str(), "https://example.com/hello");
    /// # Ok::<_, uri_builder::UriError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an [`UnparsableInput`](crate::UriErrorKind::UnparsableInput) error if `initial`
    /// cannot be decomposed, in which case `update` is not called, or an
    /// [`Unrepresentable`](crate::UriErrorKind::Unrepresentable) error if the edited components
    /// are not a valid absolute URI.
    pub fn build(initial: &str, update: impl FnOnce(&mut UriComponents)) -> Result<Self, UriError> {
        let mut components = UriComponents::parse(initial)?;
        update(&mut components);
        components.into_uri()
    }

    /// Lets `update` edit the components of `base` and builds the result.
    ///
    /// # Errors
    ///
    /// Returns an [`Unrepresentable`](crate::UriErrorKind::Unrepresentable) error if the edited
    /// components are not a valid absolute URI.
    pub fn build_from(base: &Self, update: impl FnOnce(&mut UriComponents)) -> Result<Self, UriError> {
        base.modified(update)
    }

    /// Edits this URI in place.
    ///
    /// On failure the URI keeps its previous value.
    ///
    /// ```
    /// use uri_builder::Uri;
    ///
    /// let mut uri = Uri::parse_strict("https://example.com")?;
    /// uri.modify(|components| components.append_path("docs"))?;
    /// assert_eq!(uri.as_str(), "https://example.com/docs");
    ///
    /// assert!(uri.modify(|components| components.set_scheme(None)).is_err());
    /// assert_eq!(uri.as_str(), "https://example.com/docs");
    /// # Ok::<_, uri_builder::UriError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an [`Unrepresentable`](crate::UriErrorKind::Unrepresentable) error if the edited
    /// components are not a valid absolute URI.
    pub fn modify(&mut self, update: impl FnOnce(&mut UriComponents)) -> Result<(), UriError> {
        *self = self.modified(update)?;
        Ok(())
    }

    /// Returns an edited copy of this URI, leaving `self` untouched.
    ///
    /// # Errors
    ///
    /// Returns an [`Unrepresentable`](crate::UriErrorKind::Unrepresentable) error if the edited
    /// components are not a valid absolute URI.
    pub fn modified(&self, update: impl FnOnce(&mut UriComponents)) -> Result<Self, UriError> {
        let mut components = self.components();
        update(&mut components);
        components.into_uri()
    }

    /// Only called with components that passed validation.
    pub(crate) fn from_validated(components: UriComponents) -> Self {
        Self {
            serialization: components.to_string(),
            components,
        }
    }

    /// Returns the canonical string form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.serialization
    }

    /// Returns a copy of the components, ready to be edited.
    #[must_use]
    pub fn components(&self) -> UriComponents {
        self.components.clone()
    }

    /// Converts into the components, ready to be edited.
    #[must_use]
    pub fn into_components(self) -> UriComponents {
        self.components
    }

    /// Returns the scheme, e.g. `https`.
    #[must_use]
    pub fn scheme(&self) -> &str {
        // Validation guarantees the scheme is present.
        self.components.scheme().unwrap_or_default()
    }

    /// Returns the percent-encoded user info.
    #[must_use]
    pub fn user_info(&self) -> Option<&str> {
        self.components.user_info()
    }

    /// Returns the host, `None` for URIs without an authority such as `mailto:`.
    #[must_use]
    pub fn host(&self) -> Option<&str> {
        self.components.host()
    }

    /// Returns the explicit port, if any.
    #[must_use]
    pub fn port(&self) -> Option<u16> {
        self.components.port()
    }

    /// Returns the percent-encoded path, which may be empty.
    #[must_use]
    pub fn path(&self) -> &str {
        self.components.percent_encoded_path()
    }

    /// Returns the percent-encoded query, without the leading `?`.
    #[must_use]
    pub fn query(&self) -> Option<&str> {
        self.components.percent_encoded_query()
    }

    /// Returns the decoded query items in order, `None` if there is no query.
    #[must_use]
    pub fn query_items(&self) -> Option<Vec<QueryItem>> {
        self.components.query_items()
    }

    /// Returns the percent-encoded fragment, without the leading `#`.
    #[must_use]
    pub fn fragment(&self) -> Option<&str> {
        self.components.percent_encoded_fragment()
    }

    /// Converts to an [`http::Uri`].
    ///
    /// The fragment is dropped because [`http::Uri`] does not carry one.
    ///
    /// # Errors
    ///
    /// Returns an [`Unrepresentable`](crate::UriErrorKind::Unrepresentable) error if
    /// [`http::Uri`] rejects the URI, for example because it has no authority.
    pub fn to_http_uri(&self) -> Result<http::Uri, UriError> {
        let without_fragment = self
            .serialization
            .split_once('#')
            .map_or(self.serialization.as_str(), |(head, _fragment)| head);

        http::Uri::try_from(without_fragment).map_err(|e| UriError::unrepresentable(e.to_string()))
    }
}

impl fmt::Debug for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Uri").field(&self.serialization).finish()
    }
}

impl fmt::Display for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialization)
    }
}

impl PartialEq for Uri {
    fn eq(&self, other: &Self) -> bool {
        self.serialization == other.serialization
    }
}

impl Eq for Uri {}

impl PartialOrd for Uri {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Uri {
    fn cmp(&self, other: &Self) -> Ordering {
        self.serialization.cmp(&other.serialization)
    }
}

impl Hash for Uri {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.serialization.hash(state);
    }
}

impl AsRef<str> for Uri {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<Uri> for String {
    fn from(uri: Uri) -> Self {
        uri.serialization
    }
}

impl FromStr for Uri {
    type Err = UriError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_strict(s)
    }
}

impl TryFrom<&str> for Uri {
    type Error = UriError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse_strict(value)
    }
}

impl TryFrom<String> for Uri {
    type Error = UriError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse_strict(&value)
    }
}

impl TryFrom<UriComponents> for Uri {
    type Error = UriError;

    fn try_from(components: UriComponents) -> Result<Self, Self::Error> {
        components.into_uri()
    }
}

impl TryFrom<&http::Uri> for Uri {
    type Error = UriError;

    fn try_from(uri: &http::Uri) -> Result<Self, Self::Error> {
        Self::parse_strict(&uri.to_string())
    }
}

impl TryFrom<http::Uri> for Uri {
    type Error = UriError;

    fn try_from(uri: http::Uri) -> Result<Self, Self::Error> {
        Self::try_from(&uri)
    }
}

impl TryFrom<Uri> for http::Uri {
    type Error = UriError;

    fn try_from(uri: Uri) -> Result<Self, Self::Error> {
        uri.to_http_uri()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Uri {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Uri {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use ohno::ErrorExt;

        let value = String::deserialize(deserializer)?;
        Self::parse_strict(&value).map_err(|e| serde::de::Error::custom(e.message()))
    }
}
