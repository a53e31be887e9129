// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! Macros for the [`uri_builder`](https://docs.rs/uri_builder) crate.

use proc_macro::TokenStream;
use uri_builder_macros_impl::uri_impl;

/// Creates a `uri_builder::Uri` from a string literal that is validated at compile time.
///
/// ```
/// use uri_builder_macros::uri;
///
/// let uri = uri!("https://www.example.com/");
/// assert_eq!(uri.host(), Some("www.example.com"));
/// ```
///
/// A literal that is not an absolute URI is a compile error:
///
/// ```compile_fail
/// use uri_builder_macros::uri;
///
/// let uri = uri!("https://www.example test.com/");
/// ```
#[cfg_attr(test, mutants::skip)] // The macro is tested through the `uri_builder_macros_impl` crate and the integration tests.
#[proc_macro]
pub fn uri(input: TokenStream) -> TokenStream {
    uri_impl(input.into()).into()
}
