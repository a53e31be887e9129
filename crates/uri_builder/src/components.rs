// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::fmt;
use std::str::FromStr;

use crate::encoding::{decode, encode_fragment, encode_path, encode_query_item};
use iri_string::types::{UriReferenceStr, UriStr};

use crate::{Uri, UriError};

/// A mutable, structured decomposition of a URI reference.
///
/// `UriComponents` is the staging value of every mutation: it is created from a string or
/// a [`Uri`], edited in place and then turned back into a [`Uri`] with [`into_uri`](Self::into_uri).
/// Components may be edited independently of each other. Whether they still form a valid
/// URI together is only checked when converting back, so a failed conversion never leaves
/// anything half-built behind.
///
/// Path, query and fragment are stored percent-encoded. The plain setters
/// ([`set_path`](Self::set_path), [`set_fragment`](Self::set_fragment),
/// [`add_query_item`](Self::add_query_item), ...) treat their input as opaque text and encode
/// it, the `percent_encoded` variants store their input verbatim.
///
/// ```
/// use uri_builder::UriComponents;
///
/// let mut components: UriComponents = "https://example.com".parse()?;
/// components.append_path("hello");
/// components.append_path("world/");
/// components.append_path("test/one/");
/// components.add_query_item("page", Some("2"));
///
/// assert_eq!(components.to_string(), "https://example.com/hello/world/test/one?page=2");
/// # Ok::<_, uri_builder::UriError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct UriComponents {
    scheme: Option<String>,
    user_info: Option<String>,
    host: Option<String>,
    port: Option<u16>,
    path: String,
    query: Option<String>,
    fragment: Option<String>,
}

impl UriComponents {
    /// Parses a URI reference into its components.
    ///
    /// This accepts relative and partial references such as `/path?query` or `//host`, which
    /// [`Uri::parse_strict`] would reject.
    ///
    /// # Errors
    ///
    /// Returns an [`UnparsableInput`](crate::UriErrorKind::UnparsableInput) error if `input`
    /// is not an RFC 3986 URI reference or its port does not fit in a `u16`.
    pub fn parse(input: &str) -> Result<Self, UriError> {
        Self::decompose(input).map_err(UriError::unparsable)
    }

    fn decompose(input: &str) -> Result<Self, String> {
        let reference = UriReferenceStr::new(input).map_err(|e| format!("input is not an RFC 3986 URI reference ({e})"))?;

        let (user_info, host, port) = match reference.authority_components() {
            Some(authority) => (
                authority.userinfo().map(str::to_owned),
                Some(authority.host().to_owned()),
                parse_port(authority.port())?,
            ),
            None => (None, None, None),
        };

        Ok(Self {
            scheme: reference.scheme_str().map(str::to_owned),
            user_info,
            host,
            port,
            path: reference.path_str().to_owned(),
            query: reference.query().map(|query| query.as_str().to_owned()),
            fragment: reference.fragment().map(|fragment| fragment.as_str().to_owned()),
        })
    }

    /// Returns the scheme, e.g. `https`.
    #[must_use]
    pub fn scheme(&self) -> Option<&str> {
        self.scheme.as_deref()
    }

    /// Sets or removes the scheme.
    pub fn set_scheme(&mut self, scheme: Option<&str>) {
        self.scheme = scheme.map(str::to_owned);
    }

    /// Returns the percent-encoded user info, e.g. `user:password`.
    #[must_use]
    pub fn user_info(&self) -> Option<&str> {
        self.user_info.as_deref()
    }

    /// Sets or removes the percent-encoded user info.
    pub fn set_user_info(&mut self, user_info: Option<&str>) {
        self.user_info = user_info.map(str::to_owned);
    }

    /// Returns the host. IP literals keep their brackets, e.g. `[::1]`.
    #[must_use]
    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    /// Sets or removes the host.
    ///
    /// Removing the host also removes the authority, so user info and port must be removed
    /// too before the components can become a [`Uri`] again.
    pub fn set_host(&mut self, host: Option<&str>) {
        self.host = host.map(str::to_owned);
    }

    /// Returns the port.
    #[must_use]
    pub fn port(&self) -> Option<u16> {
        self.port
    }

    /// Sets or removes the port.
    pub fn set_port(&mut self, port: Option<u16>) {
        self.port = port;
    }

    /// Returns the decoded path. Encoded bytes that are not UTF-8 decode to U+FFFD.
    #[must_use]
    pub fn path(&self) -> String {
        decode(&self.path)
    }

    /// Returns the path as it appears in the URI.
    #[must_use]
    pub fn percent_encoded_path(&self) -> &str {
        &self.path
    }

    /// Replaces the path, percent-encoding everything except `/` that is not allowed in a path.
    pub fn set_path(&mut self, path: &str) {
        self.path = encode_path(path);
    }

    /// Replaces the path with already percent-encoded text.
    pub fn set_percent_encoded_path(&mut self, path: impl Into<String>) {
        self.path = path.into();
    }

    /// Appends one or more path segments.
    ///
    /// Leading and trailing slashes of `segment` are trimmed and exactly one slash is
    /// prepended, so `"a"`, `"a/"`, `"/a"` and `"/a/"` all append `/a`. Interior slashes are
    /// kept and separate segments. An empty `segment` leaves the path untouched.
    ///
    /// ```
    /// use uri_builder::UriComponents;
    ///
    /// let mut components = UriComponents::default();
    /// components.append_path("hello");
    /// components.append_path("world/");
    /// components.append_path("test/one/");
    /// assert_eq!(components.percent_encoded_path(), "/hello/world/test/one");
    /// ```
    pub fn append_path(&mut self, segment: &str) {
        if segment.is_empty() {
            return;
        }

        self.path.push('/');
        self.path.push_str(&encode_path(segment.trim_matches('/')));
    }

    /// Returns the query as it appears in the URI, without the leading `?`.
    #[must_use]
    pub fn percent_encoded_query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    /// Sets or removes the query from already percent-encoded text.
    pub fn set_percent_encoded_query(&mut self, query: Option<&str>) {
        self.query = query.map(str::to_owned);
    }

    /// Returns the decoded query items in the order they appear, `None` if there is no query.
    ///
    /// An item without `=` has no value, `name=` has an empty value.
    #[must_use]
    pub fn query_items(&self) -> Option<Vec<QueryItem>> {
        self.query.as_deref().map(parse_query_items)
    }

    /// Replaces the query with the given items, encoded in order.
    pub fn set_query_items(&mut self, items: impl IntoIterator<Item = QueryItem>) {
        let mut query = String::new();
        for item in items {
            push_query_item(&mut query, &item.name, item.value.as_deref());
        }
        self.query = Some(query);
    }

    /// Appends a query item after any existing ones.
    ///
    /// Names may repeat, the query is a sequence rather than a map. An item without a value
    /// is written as a bare name.
    ///
    /// ```
    /// use uri_builder::UriComponents;
    ///
    /// let mut components: UriComponents = "https://example.com".parse()?;
    /// components.add_query_item("isMutable", None);
    /// components.add_query_item("title", Some("example"));
    /// assert_eq!(components.to_string(), "https://example.com?isMutable&title=example");
    /// # Ok::<_, uri_builder::UriError>(())
    /// ```
    pub fn add_query_item(&mut self, name: &str, value: Option<&str>) {
        push_query_item(self.query.get_or_insert_with(String::new), name, value);
    }

    /// Returns the decoded fragment. Encoded bytes that are not UTF-8 decode to U+FFFD.
    #[must_use]
    pub fn fragment(&self) -> Option<String> {
        self.fragment.as_deref().map(decode)
    }

    /// Returns the fragment as it appears in the URI, without the leading `#`.
    #[must_use]
    pub fn percent_encoded_fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    /// Sets or removes the fragment, percent-encoding anything a fragment does not allow.
    pub fn set_fragment(&mut self, fragment: Option<&str>) {
        self.fragment = fragment.map(encode_fragment);
    }

    /// Sets or removes the fragment from already percent-encoded text.
    pub fn set_percent_encoded_fragment(&mut self, fragment: Option<&str>) {
        self.fragment = fragment.map(str::to_owned);
    }

    /// Builds a [`Uri`] from a copy of these components.
    ///
    /// # Errors
    ///
    /// Returns an [`Unrepresentable`](crate::UriErrorKind::Unrepresentable) error if the
    /// components do not form a valid absolute URI.
    pub fn to_uri(&self) -> Result<Uri, UriError> {
        self.clone().into_uri()
    }

    /// Builds a [`Uri`] from these components.
    ///
    /// # Errors
    ///
    /// Returns an [`Unrepresentable`](crate::UriErrorKind::Unrepresentable) error if the
    /// components do not form a valid absolute URI.
    pub fn into_uri(self) -> Result<Uri, UriError> {
        self.validate().map_err(UriError::unrepresentable)?;
        Ok(Uri::from_validated(self))
    }

    fn validate(&self) -> Result<(), String> {
        if self.scheme.is_none() {
            return Err("a relative reference is not an absolute URI".to_owned());
        }

        if self.host.is_some() {
            if !self.path.is_empty() && !self.path.starts_with('/') {
                return Err("path must be empty or start with '/' when a host is present".to_owned());
            }
        } else {
            if self.user_info.is_some() || self.port.is_some() {
                return Err("user info and port require a host".to_owned());
            }
            if self.path.starts_with("//") {
                return Err("path must not start with '//' when no host is present".to_owned());
            }
        }

        let serialized = self.to_string();
        if let Err(e) = UriStr::new(&serialized) {
            return Err(match self.invalid_component() {
                Some(component) => format!("{component} is not valid in a URI ({e})"),
                None => format!("components do not form an RFC 3986 URI ({e})"),
            });
        }

        // Text such as a '?' inside the path is valid on its own but moves to another
        // component once serialized.
        let reparsed = Self::decompose(&serialized)?;
        match self.first_difference(&reparsed) {
            Some(component) => Err(format!("{component} does not survive serialization unchanged")),
            None => Ok(()),
        }
    }

    /// Validates each component on its own, embedded in a minimal URI.
    fn invalid_component(&self) -> Option<&'static str> {
        let is_invalid = |candidate: String| UriStr::new(&candidate).is_err();

        if self.scheme.as_ref().is_some_and(|scheme| is_invalid(format!("{scheme}:"))) {
            return Some("scheme");
        }
        if self.user_info.as_ref().is_some_and(|user_info| is_invalid(format!("s://{user_info}@h"))) {
            return Some("user info");
        }
        if self.host.as_ref().is_some_and(|host| is_invalid(format!("s://{host}"))) {
            return Some("host");
        }
        let path = if self.host.is_some() {
            format!("s://h{}", self.path)
        } else {
            format!("s:{}", self.path)
        };
        if is_invalid(path) {
            return Some("path");
        }
        if self.query.as_ref().is_some_and(|query| is_invalid(format!("s:?{query}"))) {
            return Some("query");
        }
        if self.fragment.as_ref().is_some_and(|fragment| is_invalid(format!("s:#{fragment}"))) {
            return Some("fragment");
        }
        None
    }

    fn first_difference(&self, other: &Self) -> Option<&'static str> {
        if self.scheme != other.scheme {
            Some("scheme")
        } else if self.user_info != other.user_info {
            Some("user info")
        } else if self.host != other.host {
            Some("host")
        } else if self.port != other.port {
            Some("port")
        } else if self.path != other.path {
            Some("path")
        } else if self.query != other.query {
            Some("query")
        } else if self.fragment != other.fragment {
            Some("fragment")
        } else {
            None
        }
    }
}

/// An empty port is allowed by the grammar and means "no port".
fn parse_port(port: Option<&str>) -> Result<Option<u16>, String> {
    match port {
        None | Some("") => Ok(None),
        Some(port) => port
            .parse()
            .map(Some)
            .map_err(|_overflow| format!("port {port} is out of range")),
    }
}

impl FromStr for UriComponents {
    type Err = UriError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Uri> for UriComponents {
    fn from(uri: Uri) -> Self {
        uri.into_components()
    }
}

impl From<&Uri> for UriComponents {
    fn from(uri: &Uri) -> Self {
        uri.components()
    }
}

/// Writes the URI reference these components describe, whether or not it is a valid URI.
impl fmt::Display for UriComponents {
    #[cfg_attr(test, mutants::skip)] // Do not mutate display output.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(scheme) = &self.scheme {
            write!(f, "{scheme}:")?;
        }

        if let Some(host) = &self.host {
            f.write_str("//")?;
            if let Some(user_info) = &self.user_info {
                write!(f, "{user_info}@")?;
            }
            f.write_str(host)?;
            if let Some(port) = self.port {
                write!(f, ":{port}")?;
            }
        }

        f.write_str(&self.path)?;

        if let Some(query) = &self.query {
            write!(f, "?{query}")?;
        }
        if let Some(fragment) = &self.fragment {
            write!(f, "#{fragment}")?;
        }

        Ok(())
    }
}

/// A single `name[=value]` pair of a query, in decoded form.
///
/// Encoded bytes that are not UTF-8 decode to U+FFFD.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryItem {
    name: String,
    value: Option<String>,
}

impl QueryItem {
    /// Creates a query item without a value, written as a bare `name`.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
        }
    }

    /// Sets the value, written as `name=value`.
    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Returns the decoded name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the decoded value, if any.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

fn push_query_item(query: &mut String, name: &str, value: Option<&str>) {
    if !query.is_empty() {
        query.push('&');
    }
    query.push_str(&encode_query_item(name));
    if let Some(value) = value {
        query.push('=');
        query.push_str(&encode_query_item(value));
    }
}

fn parse_query_items(query: &str) -> Vec<QueryItem> {
    if query.is_empty() {
        return Vec::new();
    }

    query
        .split('&')
        .map(|item| match item.split_once('=') {
            Some((name, value)) => QueryItem::new(decode(name)).with_value(decode(value)),
            None => QueryItem::new(decode(item)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use ohno::ErrorExt;

    use super::*;
    use crate::UriErrorKind;

    fn parsed(input: &str) -> UriComponents {
        UriComponents::parse(input).unwrap()
    }

    #[test]
    fn parse_all_components() {
        let all = parsed("https://user:pw@example.com:8443/a%20b/c?x=1&y#top");
        assert_eq!(all.scheme(), Some("https"));
        assert_eq!(all.user_info(), Some("user:pw"));
        assert_eq!(all.host(), Some("example.com"));
        assert_eq!(all.port(), Some(8443));
        assert_eq!(all.percent_encoded_path(), "/a%20b/c");
        assert_eq!(all.path(), "/a b/c");
        assert_eq!(all.percent_encoded_query(), Some("x=1&y"));
        assert_eq!(all.fragment().as_deref(), Some("top"));
    }

    #[test]
    fn parse_accepts_relative_references() {
        let relative = parsed("/relative/path?q");
        assert_eq!(relative.scheme(), None);
        assert_eq!(relative.host(), None);
        assert_eq!(relative.percent_encoded_path(), "/relative/path");
        assert_eq!(relative.to_string(), "/relative/path?q");

        assert_eq!(parsed(""), UriComponents::default());
    }

    #[test]
    fn parse_rejects_invalid_characters() {
        let err = UriComponents::parse("https://www.example test.com/").unwrap_err();
        assert_eq!(err.kind(), UriErrorKind::UnparsableInput);
        assert!(err.message().contains("input is not an RFC 3986 URI reference"), "{}", err.message());

        let err = UriComponents::parse("https://example.com/a b").unwrap_err();
        assert_eq!(err.kind(), UriErrorKind::UnparsableInput);

        let err = UriComponents::parse("1http://example.com").unwrap_err();
        assert!(err.message().contains("input is not an RFC 3986 URI reference"), "{}", err.message());
    }

    #[test]
    fn parse_checks_ip_literal_grammar() {
        for input in ["http://[example]/", "http://[::zz::]/", "http://[v1]/", "http://[1.2.3.4]/"] {
            let err = UriComponents::parse(input).unwrap_err();
            assert_eq!(err.kind(), UriErrorKind::UnparsableInput, "{input}");
        }

        assert_eq!(parsed("http://[2001:db8::7]:443/").host(), Some("[2001:db8::7]"));
        assert_eq!(parsed("http://[v7.fe:80]/").host(), Some("[v7.fe:80]"));
    }

    #[test]
    fn parse_port_range() {
        assert_eq!(parsed("https://example.com:/").port(), None);
        assert_eq!(parsed("https://example.com:0443/").port(), Some(443));

        let err = UriComponents::parse("https://example.com:99999/").unwrap_err();
        assert_eq!(err.kind(), UriErrorKind::UnparsableInput);
        assert!(err.message().contains("port 99999 is out of range"), "{}", err.message());
    }

    #[test]
    fn decoding_replaces_invalid_utf8() {
        let invalid = parsed("https://example.com/%FF?a=%FF#%FF");
        let escaped = parsed("https://example.com/%25FF?a=%25FF#%25FF");

        assert_eq!(invalid.path(), "/\u{fffd}");
        assert_eq!(invalid.fragment().as_deref(), Some("\u{fffd}"));
        assert_eq!(invalid.query_items().unwrap()[0].value(), Some("\u{fffd}"));

        assert_eq!(escaped.path(), "/%FF");
        assert_eq!(escaped.fragment().as_deref(), Some("%FF"));
        assert_eq!(escaped.query_items().unwrap()[0].value(), Some("%FF"));
    }

    #[test]
    fn append_path_builds_separated_segments() {
        let mut components = parsed("https://example.com");
        components.append_path("hello");
        components.append_path("world/");
        components.append_path("test/one/");
        assert_eq!(components.to_string(), "https://example.com/hello/world/test/one");
    }

    #[test]
    fn append_path_trims_outer_slashes_only() {
        for segment in ["a/", "/a", "/a/", "a"] {
            let mut components = UriComponents::default();
            components.append_path(segment);
            assert_eq!(components.percent_encoded_path(), "/a", "segment {segment:?}");
        }

        let mut components = UriComponents::default();
        components.append_path("//a//b//");
        assert_eq!(components.percent_encoded_path(), "/a//b");
    }

    #[test]
    fn append_empty_path_is_noop() {
        for start in ["", "/", "/existing", "/trailing/"] {
            let mut components = UriComponents::default();
            components.set_percent_encoded_path(start);
            components.append_path("");
            assert_eq!(components.percent_encoded_path(), start);
        }
    }

    #[test]
    fn append_path_of_only_slashes_appends_separator() {
        let mut components = parsed("https://example.com");
        components.append_path("/");
        assert_eq!(components.percent_encoded_path(), "/");
    }

    #[test]
    fn append_path_encodes_text() {
        let mut components = parsed("https://example.com");
        components.append_path("a b/c?d#e");
        assert_eq!(components.percent_encoded_path(), "/a%20b/c%3Fd%23e");
        assert_eq!(components.path(), "/a b/c?d#e");
    }

    #[test]
    fn add_query_item_preserves_order_and_duplicates() {
        let mut components = parsed("https://example.com");
        components.add_query_item("isMutable", None);
        components.add_query_item("title", Some("example"));
        components.add_query_item("title", Some("again"));
        assert_eq!(components.to_string(), "https://example.com?isMutable&title=example&title=again");

        let items = components.query_items().unwrap();
        assert_eq!(
            items,
            vec![
                QueryItem::new("isMutable"),
                QueryItem::new("title").with_value("example"),
                QueryItem::new("title").with_value("again"),
            ]
        );
    }

    #[test]
    fn add_query_item_appends_to_existing_query() {
        let mut components = parsed("https://example.com/search?q=rust");
        components.add_query_item("page", Some("2"));
        assert_eq!(components.percent_encoded_query(), Some("q=rust&page=2"));

        let mut components = parsed("https://example.com/search?");
        components.add_query_item("page", Some("2"));
        assert_eq!(components.percent_encoded_query(), Some("page=2"));
    }

    #[test]
    fn add_query_item_encodes_text() {
        let mut components = UriComponents::default();
        components.add_query_item("a&b", Some("1+1=2 ok"));
        assert_eq!(components.percent_encoded_query(), Some("a%26b=1%2B1%3D2%20ok"));

        let items = components.query_items().unwrap();
        assert_eq!(items[0].name(), "a&b");
        assert_eq!(items[0].value(), Some("1+1=2 ok"));
    }

    #[test]
    fn query_items_distinguish_absent_and_empty_values() {
        let components = parsed("https://example.com?bare&empty=&full=1");
        let items = components.query_items().unwrap();
        assert_eq!(items[0].value(), None);
        assert_eq!(items[1].value(), Some(""));
        assert_eq!(items[2].value(), Some("1"));

        assert_eq!(UriComponents::default().query_items(), None);
        assert_eq!(UriComponents::parse("https://example.com?").unwrap().query_items(), Some(Vec::new()));
    }

    #[test]
    fn set_query_items_replaces_query() {
        let mut components = parsed("https://example.com?old=1");
        components.set_query_items([QueryItem::new("new").with_value("2"), QueryItem::new("flag")]);
        assert_eq!(components.percent_encoded_query(), Some("new=2&flag"));

        components.set_percent_encoded_query(None);
        assert_eq!(components.to_string(), "https://example.com");
    }

    #[test]
    fn fragment_is_encoded() {
        let mut components = parsed("https://example.com");
        components.set_fragment(Some("section 1#b"));
        assert_eq!(components.percent_encoded_fragment(), Some("section%201%23b"));
        assert_eq!(components.fragment().as_deref(), Some("section 1#b"));
        assert_eq!(components.to_string(), "https://example.com#section%201%23b");
    }

    #[test]
    fn into_uri_requires_scheme() {
        let err = parsed("/relative").into_uri().unwrap_err();
        assert_eq!(err.kind(), UriErrorKind::Unrepresentable);
        assert!(err.message().contains("relative reference"), "{}", err.message());
    }

    #[test]
    fn into_uri_checks_path_against_authority() {
        let mut with_host = parsed("https://example.com");
        with_host.set_percent_encoded_path("relative");
        assert_eq!(with_host.into_uri().unwrap_err().kind(), UriErrorKind::Unrepresentable);

        let mut without_host = parsed("urn:example");
        without_host.set_percent_encoded_path("//looks/like/authority");
        assert_eq!(without_host.into_uri().unwrap_err().kind(), UriErrorKind::Unrepresentable);
    }

    #[test]
    fn into_uri_requires_host_for_port_and_user_info() {
        let mut components = parsed("https://user@example.com:8080/");
        components.set_host(None);
        let err = components.into_uri().unwrap_err();
        assert!(err.message().contains("require a host"), "{}", err.message());
    }

    #[test]
    fn into_uri_validates_edited_components() {
        let mut components = parsed("https://example.com");
        components.set_host(Some("bad host"));
        assert_eq!(components.to_uri().unwrap_err().kind(), UriErrorKind::Unrepresentable);

        components.set_host(Some("good.example.com"));
        components.set_scheme(Some("not a scheme"));
        assert_eq!(components.to_uri().unwrap_err().kind(), UriErrorKind::Unrepresentable);

        components.set_scheme(Some("http"));
        components.set_percent_encoded_path("/raw space");
        assert_eq!(components.to_uri().unwrap_err().kind(), UriErrorKind::Unrepresentable);
    }

    #[test]
    fn into_uri_names_the_invalid_component() {
        let mut components = parsed("https://example.com");
        components.set_host(Some("[::zz::]"));
        let err = components.to_uri().unwrap_err();
        assert_eq!(err.kind(), UriErrorKind::Unrepresentable);
        assert!(err.message().contains("host is not valid in a URI"), "{}", err.message());

        components.set_host(Some("example.com"));
        components.set_scheme(Some("1x"));
        let err = components.to_uri().unwrap_err();
        assert!(err.message().contains("scheme is not valid in a URI"), "{}", err.message());

        components.set_scheme(Some("https"));
        components.set_percent_encoded_fragment(Some("a b"));
        let err = components.to_uri().unwrap_err();
        assert!(err.message().contains("fragment is not valid in a URI"), "{}", err.message());
    }

    #[test]
    fn into_uri_rejects_components_that_move_when_serialized() {
        let mut components = parsed("https://example.com");
        components.set_percent_encoded_path("/a?b");
        let err = components.into_uri().unwrap_err();
        assert_eq!(err.kind(), UriErrorKind::Unrepresentable);
        assert!(err.message().contains("path does not survive serialization"), "{}", err.message());

        let mut components = parsed("https://example.com");
        components.set_host(Some("example.com:80"));
        let err = components.into_uri().unwrap_err();
        assert!(err.message().contains("host does not survive serialization"), "{}", err.message());

        let mut components = parsed("https://example.com");
        components.set_percent_encoded_query(Some("a#b"));
        let err = components.into_uri().unwrap_err();
        assert!(err.message().contains("query does not survive serialization"), "{}", err.message());
    }

    #[test]
    fn into_uri_without_authority() {
        let uri = parsed("mailto:someone@example.com").into_uri().unwrap();
        assert_eq!(uri.as_str(), "mailto:someone@example.com");
        assert_eq!(uri.host(), None);
    }

    #[test]
    fn display_writes_every_component() {
        let mut components = UriComponents::default();
        components.set_scheme(Some("https"));
        components.set_user_info(Some("me"));
        components.set_host(Some("example.com"));
        components.set_port(Some(8080));
        components.set_path("/docs");
        components.add_query_item("q", Some("x"));
        components.set_fragment(Some("end"));
        assert_eq!(components.to_string(), "https://me@example.com:8080/docs?q=x#end");
    }

    #[test]
    fn components_from_uri() {
        let uri = Uri::parse_strict("https://example.com/a?b").unwrap();
        let borrowed = UriComponents::from(&uri);
        let owned = UriComponents::from(uri);
        assert_eq!(borrowed, owned);
        assert_eq!(owned.percent_encoded_path(), "/a");
    }
}
