//! URL helper functions

use percent_encoding::{percent_decode_str, utf8_percent_encode, NON_ALPHANUMERIC};

/// Read a parameter from a URL query string
///
/// Accepts the query with or without its leading `?`. Keys and values are
/// percent-decoded and `+` is read as a space. The first occurrence wins.
///
/// # Examples
/// ```ignore
/// query_param("?slug=hello-world", "slug") // -> Some("hello-world")
/// ```
pub fn query_param(query: &str, name: &str) -> Option<String> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .find_map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            if decode_component(key) == name {
                Some(decode_component(value))
            } else {
                None
            }
        })
}

/// Link to the single-post page for `slug`
///
/// # Examples
/// ```ignore
/// post_url("hello world") // -> "post.html?slug=hello%20world"
/// ```
pub fn post_url(slug: &str) -> String {
    format!("post.html?slug={}", encode_url(slug))
}

/// Join the documents directory and a file name into a fetch path
pub fn document_path(dir: &str, file: &str) -> String {
    let dir = dir.trim_end_matches('/');
    if dir.is_empty() {
        file.to_string()
    } else {
        format!("{}/{}", dir, file)
    }
}

/// Encode a URL component
pub fn encode_url(path: &str) -> String {
    utf8_percent_encode(path, NON_ALPHANUMERIC).to_string()
}

fn decode_component(s: &str) -> String {
    let s = s.replace('+', " ");
    percent_decode_str(&s).decode_utf8_lossy().to_string()
}
