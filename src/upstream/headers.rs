//! Outbound request headers.
//!
//! The upstream host serves the CSV files to browsers; requests are sent with
//! the same header set a desktop Chrome would send for a direct download.

use reqwest::header::{
    HeaderMap, HeaderName, HeaderValue, ACCEPT, ACCEPT_ENCODING, ACCEPT_LANGUAGE, CONNECTION,
    UPGRADE_INSECURE_REQUESTS, USER_AGENT,
};

pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";
pub const BROWSER_ACCEPT: &str = "text/csv,text/plain,*/*";
pub const BROWSER_ACCEPT_LANGUAGE: &str = "zh-TW,zh;q=0.9,en;q=0.8";
pub const BROWSER_ACCEPT_ENCODING: &str = "gzip, deflate, br";

const FIXED: [(HeaderName, &str); 6] = [
    (USER_AGENT, BROWSER_USER_AGENT),
    (ACCEPT, BROWSER_ACCEPT),
    (ACCEPT_LANGUAGE, BROWSER_ACCEPT_LANGUAGE),
    (ACCEPT_ENCODING, BROWSER_ACCEPT_ENCODING),
    (CONNECTION, "keep-alive"),
    (UPGRADE_INSECURE_REQUESTS, "1"),
];

/// Header set attached to every upstream GET.
pub fn browser_headers() -> HeaderMap {
    let mut headers = HeaderMap::with_capacity(FIXED.len());
    for (name, value) in FIXED {
        headers.insert(name, HeaderValue::from_static(value));
    }
    headers
}
