use alloc::string::{String, ToString};
use alloc::vec::Vec;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Bytes `encodeURIComponent` escapes: everything but alphanumerics and `-_.!~*'()`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Derives a URL slug from a listing title.
///
/// The title is lower-cased, whitespace runs become single `-`, and the result is encoded as a
/// URI component. The result may be empty.
pub fn create_slug(title: &str) -> String {
    let joined = title
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-");
    utf8_percent_encode(&joined, URI_COMPONENT).to_string()
}
