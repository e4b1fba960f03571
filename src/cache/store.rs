//! Time-expiring response cache with a background reaper
//!
//! Stores raw response bodies keyed by request URL so that repeated requests
//! within the freshness window never hit the network twice. A single reaper
//! task per cache instance removes stale entries once per interval; there are
//! no per-entry timers.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use log::debug;
use tokio::sync::mpsc;

/// A single cached response body with its insertion timestamp
struct CacheEntry {
    created_at: Instant,
    value: Vec<u8>,
}

/// Thread-safe, time-expiring cache for raw response payloads
///
/// Cloning a `Cache` creates another handle to the same underlying map, so it
/// can be handed to the fetch layer while the reaper keeps its own handle.
/// Expiry is periodic rather than instantaneous: `get` does not check entry
/// age itself, so an entry may be returned up to one interval past its
/// nominal expiry, but no entry survives two full intervals.
///
/// The reaper stops when [`Cache::shutdown`] is called or when every handle
/// (including the caller's) has been dropped, so short-lived caches in tests
/// do not leak background tasks.
#[derive(Clone)]
pub struct Cache {
    entries: Arc<Mutex<HashMap<String, CacheEntry>>>,
    shutdown_tx: mpsc::Sender<()>,
}

impl Cache {
    /// Creates an empty cache and spawns its reaper task
    ///
    /// The interval serves both as the reaper's polling period and as the
    /// staleness threshold: on each tick, entries older than `interval` are
    /// removed.
    pub fn new(interval: Duration) -> Self {
        let entries = Arc::new(Mutex::new(HashMap::new()));
        let (shutdown_tx, shutdown_rx) = mpsc::channel::<()>(1);

        tokio::spawn(reap_loop(Arc::clone(&entries), interval, shutdown_rx));

        Self {
            entries,
            shutdown_tx,
        }
    }

    /// Inserts or overwrites the entry for `key`, timestamped now
    pub fn put(&self, key: &str, value: Vec<u8>) {
        let mut entries = self.entries.lock().unwrap();
        entries.insert(
            key.to_string(),
            CacheEntry {
                created_at: Instant::now(),
                value,
            },
        );
    }

    /// Returns a copy of the stored value for `key`, if present
    ///
    /// Freshness is not checked here; see the reaper notes on the type.
    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        let entries = self.entries.lock().unwrap();
        entries.get(key).map(|entry| entry.value.clone())
    }

    /// Stops the background reaper
    ///
    /// Entries already in the map stay readable afterwards; they simply stop
    /// being swept. Calling this more than once is harmless.
    pub async fn shutdown(&self) {
        let _ = self.shutdown_tx.send(()).await;
    }
}

/// Reaper loop: once per interval, removes every entry older than the interval
///
/// Exits on an explicit shutdown signal or once all cache handles have been
/// dropped (the channel closes when the last sender goes away).
async fn reap_loop(
    entries: Arc<Mutex<HashMap<String, CacheEntry>>>,
    interval: Duration,
    mut shutdown_rx: mpsc::Receiver<()>,
) {
    let mut ticker = tokio::time::interval(interval);
    // The first tick fires immediately; skip it so a sweep never runs before
    // one full interval has elapsed.
    ticker.tick().await;

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let mut entries = entries.lock().unwrap();
                let before = entries.len();
                let now = Instant::now();
                entries.retain(|_, entry| now.duration_since(entry.created_at) <= interval);
                let removed = before - entries.len();
                if removed > 0 {
                    debug!("cache reaper removed {} stale entries", removed);
                }
            }
            _ = shutdown_rx.recv() => {
                debug!("cache reaper shutting down");
                break;
            }
        }
    }
}
