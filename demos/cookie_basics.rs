use baker::{CookieStore, JsonCookieJar, MemoryCookieJar};
use std::sync::{Arc, RwLock};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // An in-memory jar stands in for the browser's ambient cookie string.
    // The store is a thin façade over whatever jar we hand it.
    let jar = Arc::new(RwLock::new(MemoryCookieJar::new()));
    let store = CookieStore::new(jar);

    // Set a cookie with the default expiry (7 days) and read it back.
    store.set_cookie("theme", "dark")?;
    println!("theme = {}", store.get_cookie("theme"));

    // Values are escaped on write and unescaped on read, so separators
    // survive the round trip.
    store.set_cookie("motd", "hello; world=42")?;
    println!("motd  = {}", store.get_cookie("motd"));

    // Bulk set with a uniform three-day expiry. Note that the unit argument
    // is accepted but currently always interpreted as days.
    store.set_many_cookies(&[("a", 1), ("b", 2)], Some(3), None)?;
    println!("all   = {:?}", store.get_all_cookies());

    // Diagnostic dump, one pair per line. Run with RUST_LOG=debug to see it.
    store.print_cookies(true);

    // Delete writes an expiry one day in the past; the jar prunes the entry.
    store.delete_cookie("a")?;
    println!("after delete: {:?}", store.get_all_cookies());

    // Clear enumerates every cookie and deletes each one.
    store.clear_cookies()?;
    println!("after clear:  {:?}", store.get_all_cookies());

    // A JSON jar persists across openings, like the browser's own store
    // persists across sessions.
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("cookies.json");
    {
        let jar = Arc::new(RwLock::new(JsonCookieJar::open(path.clone())?));
        let store = CookieStore::new(jar);
        store.set_cookie("session", "abc123")?;
    }
    let jar = Arc::new(RwLock::new(JsonCookieJar::open(path)?));
    let store = CookieStore::new(jar);
    println!("persisted session = {}", store.get_cookie("session"));

    Ok(())
}
