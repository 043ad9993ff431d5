//! Cookie core types.
//!
//! This module defines the **type-erased handle** used throughout the crate
//! and the serializable [`Cookie`] data structure.
//!
//! # Concurrency model
//! - [`CookieJarHandle`] is `Arc<RwLock<dyn CookieJar + Send + Sync>>`.
//!   - Callers take a **read lock** for non-mutating operations and a **write lock**
//!     for mutating operations on the underlying jar.
//!
//! # Typical usage
//! ```ignore
//! // Read the serialized store
//! let raw = {
//!     let guard = jar.read().unwrap();
//!     guard.read_all()
//! };
//!
//! // Write one entry
//! {
//!     let mut guard = jar.write().unwrap();
//!     guard.write("session=abc123;expires=Sun, 06 Nov 2033 08:49:37 GMT;path=/")?;
//! }
//! ```
//!
//! The [`Cookie`] struct is used for persistence/inspection and can be (de)serialized
//! via `serde` to JSON or other formats.

use crate::jar::CookieJar;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, RwLock};
use time::OffsetDateTime;

/// A handle to a cookie jar trait.
///
/// This is a reference-counted, read/write-locked pointer to a type-erased
/// [`CookieJar`]. Obtain a **read lock** for queries and a **write lock** for
/// mutations.
pub type CookieJarHandle = Arc<RwLock<dyn CookieJar + Send + Sync>>;

/// A cookie as stored/serialized by a jar.
///
/// Captures exactly the attributes this crate writes: name, value, `path`,
/// and `expires`. Suitable for persistence (e.g., JSON, SQLite) via `serde`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cookie {
    /// Cookie name (case-sensitive).
    pub name: String,

    /// Cookie value, stored escaped exactly as written to the serialized form.
    pub value: String,

    /// Path scoping (e.g., `"/"`).
    pub path: Option<String>,

    /// Expiration timestamp, if any. Session cookies have `None` and are
    /// never pruned.
    ///
    /// Persisted as RFC 3339 for portability.
    #[serde(with = "time::serde::rfc3339::option")]
    pub expires: Option<OffsetDateTime>,
}
