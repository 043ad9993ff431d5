//! SQLite-backed cookie jar.
//!
//! `SqliteCookieJar` persists the jar in a single SQLite database. Rows are
//! loaded once at open; every mutating write snapshots the whole jar back in
//! one transaction (DELETE + INSERT).
//!
//! Database access goes through an `r2d2` pool so a jar handle can be shared
//! across threads behind its `RwLock`.

use std::path::PathBuf;

use r2d2::Pool;
use r2d2_sqlite::rusqlite::params;
use r2d2_sqlite::SqliteConnectionManager;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use crate::cookie::Cookie;
use crate::errors::CookieError;
use crate::jar::{CookieJar, MemoryCookieJar};

fn db_err<E: std::fmt::Display>(err: E) -> CookieError {
    CookieError::StorageUnavailable(err.to_string())
}

/// A SQLite-based cookie jar that persists cookies across sessions.
pub struct SqliteCookieJar {
    pool: Pool<SqliteConnectionManager>,
    /// The live jar; the `cookies` table mirrors it after every write.
    inner: MemoryCookieJar,
}

impl SqliteCookieJar {
    /// Opens (or creates) a SQLite database at `path`, ensures the schema
    /// exists and loads any previously stored cookies.
    pub fn open(path: PathBuf) -> Result<Self, CookieError> {
        let manager = SqliteConnectionManager::file(path);
        let pool = Pool::new(manager).map_err(db_err)?;

        {
            let conn = pool.get().map_err(db_err)?;
            conn.execute_batch(
                "CREATE TABLE IF NOT EXISTS cookies (
                    name TEXT NOT NULL PRIMARY KEY,
                    value TEXT NOT NULL,
                    path TEXT,
                    expires TEXT
                );",
            )
            .map_err(db_err)?;
        }

        let inner = Self::load(&pool)?;
        Ok(Self { pool, inner })
    }

    /// Loads all rows into a fresh in-memory jar, in insertion order.
    fn load(pool: &Pool<SqliteConnectionManager>) -> Result<MemoryCookieJar, CookieError> {
        let conn = pool.get().map_err(db_err)?;

        let mut stmt = conn
            .prepare("SELECT name, value, path, expires FROM cookies ORDER BY rowid")
            .map_err(db_err)?;

        let rows = stmt
            .query_map([], |row| {
                let expires: Option<String> = row.get(3)?;
                Ok(Cookie {
                    name: row.get(0)?,
                    value: row.get(1)?,
                    path: row.get(2)?,
                    expires: expires
                        .and_then(|raw| OffsetDateTime::parse(&raw, &Rfc3339).ok()),
                })
            })
            .map_err(db_err)?;

        let mut jar = MemoryCookieJar::new();
        for row in rows {
            jar.entries.push(row.map_err(db_err)?);
        }
        Ok(jar)
    }

    /// Replaces the table contents with the in-memory jar in a transaction.
    fn save(&self) -> Result<(), CookieError> {
        let mut conn = self.pool.get().map_err(db_err)?;
        let tx = conn.transaction().map_err(db_err)?;

        tx.execute("DELETE FROM cookies", []).map_err(db_err)?;
        {
            let mut stmt = tx
                .prepare("INSERT INTO cookies (name, value, path, expires) VALUES (?1, ?2, ?3, ?4)")
                .map_err(db_err)?;

            for cookie in &self.inner.entries {
                let expires = cookie
                    .expires
                    .map(|moment| moment.format(&Rfc3339))
                    .transpose()
                    .map_err(db_err)?;
                stmt.execute(params![cookie.name, cookie.value, cookie.path, expires])
                    .map_err(db_err)?;
            }
        }
        tx.commit().map_err(db_err)?;
        Ok(())
    }
}

impl CookieJar for SqliteCookieJar {
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
        let path = dir.path().join("cookies.sqlite");

        {
            let mut jar = SqliteCookieJar::open(path.clone()).unwrap();
            jar.write(&entry("a", "1")).unwrap();
            jar.write(&entry("b", "2")).unwrap();
            jar.write(&entry("a", "3")).unwrap();
        }

        let jar = SqliteCookieJar::open(path).unwrap();
        assert_eq!(jar.read_all(), "a=3; b=2");
    }

    #[test]
    fn session_cookies_round_trip_without_expiry() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cookies.sqlite");

        {
            let mut jar = SqliteCookieJar::open(path.clone()).unwrap();
            jar.write("keep=1").unwrap();
        }

        let jar = SqliteCookieJar::open(path).unwrap();
        assert_eq!(jar.read_all(), "keep=1");
    }
}
