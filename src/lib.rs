pub mod config;
pub mod cookie;
pub mod errors;
pub mod escape;
pub mod expiry;
pub mod jar;
pub mod store;

pub use config::{DeleteBehavior, StoreConfig};
pub use cookie::{Cookie, CookieJarHandle};
pub use errors::CookieError;
pub use jar::{CookieJar, JsonCookieJar, MemoryCookieJar};
#[cfg(feature = "sqlite_jar")]
pub use jar::SqliteCookieJar;
pub use store::{CookieStore, TtlUnit};
