//! In-memory cookie jar (no persistence).
//!
//! The default host simulation and the test double. Also the in-memory core
//! of the persistent backends, which serialize its entries wholesale.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::cookie::Cookie;
use crate::errors::CookieError;
use crate::jar::{parse_entry, CookieJar};

/// In-memory cookie jar for a single document context.
///
/// Upsert is last-write-wins by name, preserving the entry's original
/// position in the serialized view.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemoryCookieJar {
    pub(crate) entries: Vec<Cookie>,
}

impl MemoryCookieJar {
    /// Creates an empty in-memory cookie jar.
    pub fn new() -> Self {
        Self::default()
    }

    fn prune(&mut self) {
        let now = OffsetDateTime::now_utc();
        self.entries
            .retain(|c| c.expires.map_or(true, |moment| moment > now));
    }
}

impl CookieJar for MemoryCookieJar {
    fn read_all(&self) -> String {
        let now = OffsetDateTime::now_utc();
        self.entries
            .iter()
            .filter(|c| c.expires.map_or(true, |moment| moment > now))
            .map(|c| format!("{}={}", c.name, c.value))
            .collect::<Vec<_>>()
            .join("; ")
    }

    fn write(&mut self, entry: &str) -> Result<(), CookieError> {
        let Some(cookie) = parse_entry(entry) else {
            return Ok(());
        };

        let now = OffsetDateTime::now_utc();
        if cookie.expires.is_some_and(|moment| moment <= now) {
            // Past-dated write: delete-by-expiring.
            self.entries.retain(|c| c.name != cookie.name);
        } else if let Some(existing) = self.entries.iter_mut().find(|c| c.name == cookie.name) {
            *existing = cookie;
        } else {
            self.entries.push(cookie);
        }

        self.prune();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expiry;

    fn future_entry(name: &str, value: &str) -> String {
        format!(
            "{}={};expires={};path=/",
            name,
            value,
            expiry::format_rfc1123(expiry::days_from_now(7))
        )
    }

    #[test]
    fn upsert_replaces_in_place() {
        let mut jar = MemoryCookieJar::new();
        jar.write(&future_entry("a", "1")).unwrap();
        jar.write(&future_entry("b", "2")).unwrap();
        jar.write(&future_entry("a", "3")).unwrap();
        assert_eq!(jar.read_all(), "a=3; b=2");
    }

    #[test]
    fn past_dated_write_removes_the_entry() {
        let mut jar = MemoryCookieJar::new();
        jar.write(&future_entry("a", "1")).unwrap();
        let gone = format!(
            "a=;expires={};path=/",
            expiry::format_rfc1123(expiry::days_from_now(-1))
        );
        jar.write(&gone).unwrap();
        assert_eq!(jar.read_all(), "");
    }

    #[test]
    fn session_cookies_are_never_pruned() {
        let mut jar = MemoryCookieJar::new();
        jar.write("keep=1").unwrap();
        jar.write(&future_entry("a", "2")).unwrap();
        assert_eq!(jar.read_all(), "keep=1; a=2");
    }

    #[test]
    fn expired_entries_are_invisible_on_read() {
        let jar = MemoryCookieJar {
            entries: vec![
                Cookie {
                    name: "stale".into(),
                    value: "x".into(),
                    path: Some("/".into()),
                    expires: Some(expiry::days_from_now(-1)),
                },
                Cookie {
                    name: "fresh".into(),
                    value: "y".into(),
                    path: Some("/".into()),
                    expires: Some(expiry::days_from_now(1)),
                },
            ],
        };
        assert_eq!(jar.read_all(), "fresh=y");
    }

    #[test]
    fn malformed_entry_is_silently_dropped() {
        let mut jar = MemoryCookieJar::new();
        jar.write("garbage").unwrap();
        assert_eq!(jar.read_all(), "");
    }
}
