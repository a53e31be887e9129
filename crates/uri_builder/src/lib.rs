// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! Ergonomic construction and mutation of RFC 3986 URIs.
//!
//! A [`Uri`] is an immutable, validated absolute URI. New URIs are derived from a string or
//! from an existing [`Uri`] by editing a [`UriComponents`] value inside a closure. The edited
//! components are re-serialized and validated once the closure returns, so every [`Uri`] in
//! existence is well-formed.
//!
//! # Core Types
//!
//! - [`Uri`]: A validated absolute URI.
//! - [`UriComponents`]: Mutable, unvalidated URI components with encoding helpers such as
//!   [`append_path`](UriComponents::append_path) and
//!   [`add_query_item`](UriComponents::add_query_item).
//! - [`QueryItem`]: A decoded `name[=value]` query pair.
//! - [`UriError`]: Why a URI could not be produced, see [`UriErrorKind`].
//!
//! # Quick Start
//!
//! ```
//! use uri_builder::Uri;
//!
//! let base = Uri::parse_strict("https://example.com")?;
//!
//! let search = Uri::build_from(&base, |components| {
//!     components.append_path("search");
//!     components.add_query_item("q", Some("rust & uri"));
//! })?;
//! assert_eq!(search.as_str(), "https://example.com/search?q=rust%20%26%20uri");
//!
//! let mut page = search.clone();
//! page.modify(|components| components.add_query_item("page", Some("2")))?;
//! assert_eq!(page.as_str(), "https://example.com/search?q=rust%20%26%20uri&page=2");
//! # Ok::<_, uri_builder::UriError>(())
//! ```
//!
//! # Compile-time Literals
//!
//! The `uri!` macro from the `uri_builder_macros` crate validates a string literal while
//! compiling and expands to [`Uri::from_static`].
//!
//! # Features
//!
//! - `logs`: Emits a `DEBUG` level `uri_builder.rejected` event through [`tracing`] whenever a
//!   URI is rejected. The event carries `uri.error.kind` and `uri.error.reason`, never the
//!   input itself.
//! - `serde`: Implements `Serialize` and `Deserialize` for [`Uri`] using its string form.
//!
//! [`tracing`]: https://docs.rs/tracing

mod components;
mod encoding;
mod error;
mod uri;

pub use components::{QueryItem, UriComponents};
pub use error::{UriError, UriErrorKind};
pub use uri::Uri;
