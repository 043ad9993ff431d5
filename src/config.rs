/// Expiry applied when a cookie is set without an explicit duration.
pub const DEFAULT_TTL_DAYS: i64 = 7;

/// Path attribute written with every cookie entry.
pub const DEFAULT_PATH: &str = "/";

/// Which cookie a delete operation actually expires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteBehavior {
    /// Expire exactly the cookie named by the caller.
    Named,
    /// Expire one fixed name regardless of the argument. This reproduces a
    /// historic defect where delete wrote through a stale outer binding
    /// instead of its own parameter; kept for compatibility testing against
    /// deployments that relied on it. An empty string mirrors the typical
    /// historical outcome (a no-op delete).
    FixedTarget(String),
}

/// Store configuration. Also carries the delete-target resolution quirk switch.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Days until expiry when no duration is given.
    pub default_ttl_days: i64,
    /// Path attribute written with every entry.
    pub path: String,
    /// Delete-target resolution; see [`DeleteBehavior`].
    pub delete_behavior: DeleteBehavior,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            default_ttl_days: DEFAULT_TTL_DAYS,
            path: DEFAULT_PATH.to_string(),
            delete_behavior: DeleteBehavior::Named,
        }
    }
}
