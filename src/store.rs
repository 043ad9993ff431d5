//! The [`CookieStore`] façade: set, get, get-all, delete, bulk-set and
//! clear-all over an injected cookie jar.
//!
//! All operations are synchronous, take `&self` and lock the jar handle
//! internally: a read lock for queries, a write lock for mutations.

use std::collections::HashMap;

use log::debug;
use time::OffsetDateTime;

use crate::config::{DeleteBehavior, StoreConfig};
use crate::cookie::CookieJarHandle;
use crate::errors::CookieError;
use crate::{escape, expiry};

/// Time unit accepted by [`CookieStore::set_cookie_for`].
///
/// Every variant currently advances whole days; see the method docs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TtlUnit {
    Day,
    Hour,
    Minute,
    Second,
}

/// Cookie manager over an injected jar.
///
/// The jar is the ambient store the host owns; the façade never keeps state
/// of its own between calls. Construction requires a live
/// [`CookieJarHandle`], so there is no operable pre-initialization state.
pub struct CookieStore {
    jar: CookieJarHandle,
    config: StoreConfig,
}

impl CookieStore {
    /// Creates a store over `jar` with the default configuration
    /// (7-day expiry, path `/`, delete expires the named cookie).
    pub fn new(jar: CookieJarHandle) -> Self {
        Self::with_config(jar, StoreConfig::default())
    }

    /// Creates a store over `jar` with an explicit configuration.
    pub fn with_config(jar: CookieJarHandle, config: StoreConfig) -> Self {
        Self { jar, config }
    }

    /// Sets a cookie with the default expiry.
    ///
    /// The value is coerced to its string representation and escaped before
    /// storage. Names are written raw: a name containing `=`, `;` or
    /// leading/trailing whitespace corrupts the serialized form exactly as
    /// it would in a browser.
    pub fn set_cookie(&self, name: &str, value: impl ToString) -> Result<(), CookieError> {
        self.set_cookie_for(name, value, None, None)
    }

    /// Sets a cookie expiring `duration` units from now.
    ///
    /// `duration` defaults to the configured TTL (7 days) when absent.
    /// **The `unit` argument is accepted but not honored: every variant
    /// currently advances whole days.** Callers passing `Hour`, `Minute` or
    /// `Second` get days instead.
    ///
    /// A zero or negative duration is not validated; the arithmetic
    /// produces a past date and the jar treats the write as a delete.
    // TODO: scale the expiry by `unit` (hours/minutes/seconds) instead of always days.
    pub fn set_cookie_for(
        &self,
        name: &str,
        value: impl ToString,
        duration: Option<i64>,
        unit: Option<TtlUnit>,
    ) -> Result<(), CookieError> {
        let days = duration.unwrap_or(self.config.default_ttl_days);
        let _unit = unit.unwrap_or(TtlUnit::Day);

        let escaped = escape::escape(&value.to_string());
        self.write_entry(name, &escaped, expiry::days_from_now(days))
    }

    /// Returns the value of the first pair named `name`, unescaped, or `""`
    /// when no such pair exists.
    ///
    /// An absent cookie and a cookie stored with an empty value are
    /// indistinguishable through this interface; both read as `""`.
    pub fn get_cookie(&self, name: &str) -> String {
        let raw = self.jar.read().unwrap().read_all();
        for pair in raw.split("; ") {
            if let Some((n, v)) = pair.split_once('=') {
                if n == name {
                    return escape::unescape(v);
                }
            }
        }
        String::new()
    }

    /// Returns a mapping of every cookie name to its unescaped value.
    ///
    /// Empty map for an empty store. When the jar reports two pairs with
    /// the same name (which a well-behaved jar never does), only the first
    /// is visible. Iteration order is not part of the contract.
    pub fn get_all_cookies(&self) -> HashMap<String, String> {
        let raw = self.jar.read().unwrap().read_all();
        let mut cookies = HashMap::new();
        for pair in raw.split("; ") {
            if let Some((n, v)) = pair.split_once('=') {
                cookies
                    .entry(n.to_string())
                    .or_insert_with(|| escape::unescape(v));
            }
        }
        cookies
    }

    /// Deletes a cookie by writing an expiry one day in the past.
    ///
    /// Which cookie is expired follows the configured
    /// [`DeleteBehavior`](crate::config::DeleteBehavior): the default
    /// expires exactly `name`; the fixed-target variant expires its
    /// configured name regardless of the argument.
    pub fn delete_cookie(&self, name: &str) -> Result<(), CookieError> {
        let target = match &self.config.delete_behavior {
            DeleteBehavior::Named => name,
            DeleteBehavior::FixedTarget(fixed) => fixed.as_str(),
        };
        self.write_entry(target, "", expiry::days_from_now(-1))
    }

    /// Sets every `(name, value)` pair in slice order with a uniform
    /// duration and unit.
    ///
    /// Not atomic: the first failing write aborts the loop, earlier writes
    /// remain applied, and the first failure is returned.
    pub fn set_many_cookies<N, V>(
        &self,
        cookies: &[(N, V)],
        duration: Option<i64>,
        unit: Option<TtlUnit>,
    ) -> Result<(), CookieError>
    where
        N: AsRef<str>,
        V: ToString,
    {
        for (name, value) in cookies {
            self.set_cookie_for(name.as_ref(), value.to_string(), duration, unit)?;
        }
        Ok(())
    }

    /// Deletes every cookie currently enumerable in the store.
    ///
    /// Under the fixed-target delete variant this degrades exactly as the
    /// quirk dictates: only the fixed target is expired, however many names
    /// are enumerated.
    pub fn clear_cookies(&self) -> Result<(), CookieError> {
        for name in self.get_all_cookies().into_keys() {
            self.delete_cookie(&name)?;
        }
        Ok(())
    }

    /// Diagnostic dump of the serialized store at debug level.
    ///
    /// `true`: one `name=value` line per pair; `false`: the raw serialized
    /// store as a single line. No state change.
    pub fn print_cookies(&self, one_per_line: bool) {
        let raw = self.jar.read().unwrap().read_all();
        if one_per_line {
            for pair in raw.split("; ").filter(|pair| !pair.is_empty()) {
                debug!("{pair}");
            }
        } else {
            debug!("{raw}");
        }
    }

    fn write_entry(
        &self,
        name: &str,
        escaped_value: &str,
        expires: OffsetDateTime,
    ) -> Result<(), CookieError> {
        let entry = format!(
            "{}={};expires={};path={}",
            name,
            escaped_value,
            expiry::format_rfc1123(expires),
            self.config.path
        );
        debug!("cookie write: {entry}");
        self.jar.write().unwrap().write(&entry)
    }
}
