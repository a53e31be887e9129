// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Percent-encoders for text placed into individual URI components.

use percent_encoding::percent_decode_str;
use pct_str::{Encoder, PctString};

/// Escapes everything outside `pchar` and `/`, so `/` keeps acting as a segment separator.
#[derive(Debug, Clone, Copy)]
struct PathEncoder;

impl Encoder for PathEncoder {
    fn encode(&self, c: char) -> bool {
        !u8::try_from(c).is_ok_and(|b| is_pchar(b) || b == b'/')
    }
}

/// Escapes a query item name or value. On top of what the query grammar requires this
/// escapes the `&` and `=` delimiters as well as `+`, which form decoders read as a space.
#[derive(Debug, Clone, Copy)]
struct QueryItemEncoder;

impl Encoder for QueryItemEncoder {
    fn encode(&self, c: char) -> bool {
        !u8::try_from(c).is_ok_and(|b| (is_pchar(b) || matches!(b, b'/' | b'?')) && !matches!(b, b'&' | b'=' | b'+'))
    }
}

#[derive(Debug, Clone, Copy)]
struct FragmentEncoder;

impl Encoder for FragmentEncoder {
    fn encode(&self, c: char) -> bool {
        !u8::try_from(c).is_ok_and(|b| is_pchar(b) || matches!(b, b'/' | b'?'))
    }
}

pub(crate) fn encode_path(text: &str) -> String {
    PctString::encode(text.chars(), PathEncoder).into_string()
}

pub(crate) fn encode_query_item(text: &str) -> String {
    PctString::encode(text.chars(), QueryItemEncoder).into_string()
}

pub(crate) fn encode_fragment(text: &str) -> String {
    PctString::encode(text.chars(), FragmentEncoder).into_string()
}

/// Decodes percent-encoded text.
///
/// A `%` that does not start a triplet is kept as is. Decoded bytes that are not UTF-8 become
/// U+FFFD, so `%FF` and `%25FF` never decode to the same text.
pub(crate) fn decode(text: &str) -> String {
    percent_decode_str(text).decode_utf8_lossy().into_owned()
}

const fn is_unreserved(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'-' | b'.' | b'_' | b'~')
}

const fn is_sub_delim(b: u8) -> bool {
    matches!(b, b'!' | b'$' | b'&' | b'\'' | b'(' | b')' | b'*' | b'+' | b',' | b';' | b'=')
}

/// `pchar` from RFC 3986, minus the percent-encoded triplets.
const fn is_pchar(b: u8) -> bool {
    is_unreserved(b) || is_sub_delim(b) || matches!(b, b':' | b'@')
}
