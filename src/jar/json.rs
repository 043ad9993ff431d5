//! JSON-backed cookie jar.
//!
//! `JsonCookieJar` persists the whole jar in a single JSON file on disk.
//! The file is loaded once at open and rewritten after **every mutating
//! write**, so the on-disk state always matches the in-memory state.
//!
//! ### I/O characteristics & caveats
//! - Each write **rewrites the entire file** (pretty-printed). For large
//!   jars, consider the SQLite backend.
//! - File writes are not atomic.
//! - A file that fails to deserialize reads as an **empty jar**; the next
//!   write replaces it.

use std::fs;
use std::path::PathBuf;

use crate::errors::CookieError;
use crate::jar::{CookieJar, MemoryCookieJar};

/// A JSON-file cookie jar that persists cookies across sessions.
pub struct JsonCookieJar {
    /// Path to the JSON file where cookies are stored.
    path: PathBuf,
    /// The live jar; the file mirrors it after every write.
    inner: MemoryCookieJar,
}

impl JsonCookieJar {
    /// Opens (or creates) a JSON cookie jar at `path`.
    ///
    /// If the file does not exist, an empty jar is written to disk, so an
    /// unusable location (missing directory, no permission) fails here
    /// rather than on the first cookie write.
    pub fn open(path: PathBuf) -> Result<Self, CookieError> {
        let inner = if path.exists() {
            let contents = fs::read_to_string(&path)?;
            serde_json::from_str(&contents).unwrap_or_default()
        } else {
            let jar = MemoryCookieJar::new();
            fs::write(&path, serde_json::to_vec(&jar)?)?;
            jar
        };

        Ok(Self { path, inner })
    }

    fn save(&self) -> Result<(), CookieError> {
        let contents = serde_json::to_string_pretty(&self.inner)?;
        fs::write(&self.path, contents)?;
        Ok(())
    }
}

impl CookieJar for JsonCookieJar {
    fn read_all(&self) -> String {
        self.inner.read_all()
    }

    fn write(&mut self, entry: &str) -> Result<(), CookieError> {
        self.inner.write(entry)?;
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expiry;
    use std::fs;

    fn entry(name: &str, value: &str) -> String {
        format!(
            "{}={};expires={};path=/",
            name,
            value,
            expiry::format_rfc1123(expiry::days_from_now(7))
        )
    }

    #[test]
    fn reopen_sees_previous_cookies() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cookies.json");

        {
            let mut jar = JsonCookieJar::open(path.clone()).unwrap();
            jar.write(&entry("a", "1")).unwrap();
            jar.write(&entry("b", "2")).unwrap();
        }

        let jar = JsonCookieJar::open(path).unwrap();
        assert_eq!(jar.read_all(), "a=1; b=2");
    }

    #[test]
    fn corrupt_file_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cookies.json");
        fs::write(&path, "not json at all").unwrap();

        let jar = JsonCookieJar::open(path).unwrap();
        assert_eq!(jar.read_all(), "");
    }

    #[test]
    fn unusable_location_fails_at_open() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no").join("such").join("cookies.json");

        let result = JsonCookieJar::open(path);
        assert!(matches!(result, Err(CookieError::Io(_))));
    }

    #[test]
    fn delete_by_expiring_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cookies.json");

        {
            let mut jar = JsonCookieJar::open(path.clone()).unwrap();
            jar.write(&entry("a", "1")).unwrap();
            let gone = format!(
                "a=;expires={};path=/",
                expiry::format_rfc1123(expiry::days_from_now(-1))
            );
            jar.write(&gone).unwrap();
        }

        let jar = JsonCookieJar::open(path).unwrap();
        assert_eq!(jar.read_all(), "");
    }
}
