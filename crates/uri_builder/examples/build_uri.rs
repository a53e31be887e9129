// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Example demonstrating how to derive request URIs from a base URI.
use uri_builder::{Uri, UriError};

fn main() -> Result<(), UriError> {
    let base = Uri::parse_strict("https://api.example.com/v2")?;

    let user = Uri::build_from(&base, |components| {
        components.append_path("users/");
        components.append_path("Wile E. Coyote");
    })?;
    println!("User: {user}");

    let mut search = Uri::build_from(&base, |components| {
        components.append_path("search");
        components.add_query_item("q", Some("anvil & rocket"));
        components.add_query_item("exact", None);
    })?;
    println!("Search: {search}");

    search.modify(|components| components.add_query_item("page", Some("2")))?;
    println!("Next page: {search}");

    if let Err(error) = search.modify(|components| components.set_scheme(None)) {
        println!("Rejected edit ({}), still: {search}", error.kind());
    }

    let http_uri = search.to_http_uri()?;
    println!("As http::Uri: {http_uri}");

    Ok(())
}
