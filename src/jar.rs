//! Cookie jar abstraction and its backends.
//!
//! A **cookie jar** stands in for the host environment's ambient cookie
//! store: the single serialized string a document sees. The store façade
//! passes whole serialized entries to the jar so it can update and expose
//! cookies the way a browser jar would.
//!
//! This module defines the [`CookieJar`] trait and three backends:
//! [`MemoryCookieJar`] (no persistence), [`JsonCookieJar`] (one JSON file)
//! and, behind the `sqlite_jar` feature, [`SqliteCookieJar`].
//!
//! ## Notes & limitations
//! - Entry parsing is intentionally **minimal**: `expires` (RFC-1123) and
//!   `path` are handled; every other attribute is ignored. `Max-Age`,
//!   size limits and eviction policies are not implemented.
//! - Jars hold the cookies of **one document context**; there is no
//!   origin or domain bucketing.
//! - Implementations are **not** internally synchronized. Use them via a
//!   `CookieJarHandle = Arc<RwLock<dyn CookieJar + Send + Sync>>`.

mod json;
mod memory;
#[cfg(feature = "sqlite_jar")]
mod sqlite;

pub use json::JsonCookieJar;
pub use memory::MemoryCookieJar;
#[cfg(feature = "sqlite_jar")]
pub use sqlite::SqliteCookieJar;

use crate::cookie::Cookie;
use crate::errors::CookieError;
use crate::expiry;

/// The ambient-store capability injected into the store façade.
///
/// A jar behaves like a standard browser cookie jar: last-write-wins upsert
/// by name, automatic expiry pruning, and no explicit delete (entries are
/// removed by writing a past-dated expiry).
pub trait CookieJar: Send + Sync {
    /// Returns the serialized view of the store: `name=value` pairs joined
    /// by `"; "`, expired entries pruned.
    ///
    /// Never fails; a jar whose backing storage is unavailable reads empty.
    fn read_all(&self) -> String;

    /// Writes one serialized entry: `name=value` optionally followed by
    /// `;`-separated attributes, of which `expires` and `path` are honored
    /// and all others ignored.
    ///
    /// A write whose expiry is in the past removes the named entry. Entries
    /// without an `expires` attribute are session cookies, kept until
    /// overwritten or expired by a later write.
    fn write(&mut self, entry: &str) -> Result<(), CookieError>;
}

/// Parses one serialized entry into a [`Cookie`].
///
/// `None` when the entry has no `=` at all; such writes are silently
/// dropped, as a browser would drop them.
pub(crate) fn parse_entry(entry: &str) -> Option<Cookie> {
    let (name, rest) = entry.split_once('=')?;

    let mut parts = rest.split(';');
    let mut cookie = Cookie {
        name: name.trim().to_string(),
        value: parts.next().unwrap_or("").trim().to_string(),
        path: None,
        expires: None,
    };

    for part in parts {
        if let Some((k, v)) = part.split_once('=') {
            match k.trim().to_ascii_lowercase().as_str() {
                "path" => cookie.path = Some(v.trim().to_string()),
                "expires" => cookie.expires = expiry::parse_rfc1123(v),
                _ => {}
            }
        }
    }

    Some(cookie)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_with_attributes() {
        let c = parse_entry("session=abc123;expires=Sun, 06 Nov 1994 08:49:37 GMT;path=/").unwrap();
        assert_eq!(c.name, "session");
        assert_eq!(c.value, "abc123");
        assert_eq!(c.path.as_deref(), Some("/"));
        assert!(c.expires.is_some());
    }

    #[test]
    fn bare_pair_is_a_session_cookie() {
        let c = parse_entry("theme=dark").unwrap();
        assert_eq!(c.value, "dark");
        assert!(c.expires.is_none());
        assert!(c.path.is_none());
    }

    #[test]
    fn unknown_attributes_are_ignored() {
        let c = parse_entry("a=1;Secure;HttpOnly;domain=example.com;PATH=/x").unwrap();
        assert_eq!(c.value, "1");
        assert_eq!(c.path.as_deref(), Some("/x"));
    }

    #[test]
    fn entry_without_separator_is_dropped() {
        assert!(parse_entry("garbage").is_none());
    }

    #[test]
    fn empty_value_parses() {
        let c = parse_entry("a=").unwrap();
        assert_eq!(c.value, "");
    }
}
