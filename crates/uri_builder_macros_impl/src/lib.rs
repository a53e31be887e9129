// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc(hidden)]

//! Macros for the [`uri_builder`](https://docs.rs/uri_builder) crate.

use ohno::ErrorExt;
use proc_macro2::TokenStream;
use quote::quote;
use syn::{LitStr, parse2};
use uri_builder::Uri;

/// Validates a URI string literal and expands to `::uri_builder::Uri::from_static`.
///
/// The literal goes through the same strict parser used at runtime, so the expansion never
/// panics.
#[must_use]
pub fn uri_impl(input: TokenStream) -> TokenStream {
    let literal: LitStr = match parse2(input) {
        Ok(literal) => literal,
        Err(err) => return syn::Error::new(err.span(), "uri! requires a static string literal").to_compile_error(),
    };

    let value = literal.value();
    if let Err(err) = Uri::parse_strict(&value) {
        return syn::Error::new_spanned(&literal, format!("the input URI is malformed: {value:?}\n{}", err.message()))
            .to_compile_error();
    }

    quote! {
        ::uri_builder::Uri::from_static(#literal)
    }
}
