//! The cache proper: entries, reads, and the invalidation protocol.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde_json::Value;
use tokio::sync::watch;
use tracing::{debug, warn};

use crate::key::{Mutation, QueryKey};

/// Produces a fresh snapshot for a key. Implemented over the API client in
/// production; tests inject scripted fetchers.
///
/// Fetches are idempotent reads, so a superseded result is accepted as the
/// latest value for its key (last-write-wins).
pub trait Fetcher: Send + Sync + 'static {
    /// Fetch the current server snapshot for `key`.
    fn fetch(&self, key: QueryKey) -> impl Future<Output = anyhow::Result<Value>> + Send;
}

/// What a reader sees for one key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryState {
    /// Last-known snapshot, possibly stale. `None` until the first
    /// successful fetch.
    pub data: Option<Value>,
    /// A fetch for this key is currently in flight.
    pub is_loading: bool,
    /// The most recent fetch failed. Cleared by the next successful fetch.
    pub is_error: bool,
}

/// One cache slot. At most one entry exists per key.
#[derive(Default)]
struct Entry {
    snapshot: Option<Value>,
    is_error: bool,
    stale: bool,
    /// Receiver for the completion signal of the in-flight fetch, if any.
    /// `Some` is the de-duplication marker: readers attach to it instead of
    /// fetching.
    in_flight: Option<watch::Receiver<()>>,
    subscribers: usize,
}

impl Entry {
    fn state(&self) -> QueryState {
        QueryState {
            data: self.snapshot.clone(),
            is_loading: self.in_flight.is_some(),
            is_error: self.is_error,
        }
    }
}

type Entries = Arc<Mutex<HashMap<QueryKey, Entry>>>;

/// Keyed snapshot cache. Cheap to clone; clones share the same entries and
/// fetcher.
pub struct QueryCache<F: Fetcher> {
    fetcher: Arc<F>,
    entries: Entries,
}

impl<F: Fetcher> Clone for QueryCache<F> {
    fn clone(&self) -> Self {
        Self {
            fetcher: Arc::clone(&self.fetcher),
            entries: Arc::clone(&self.entries),
        }
    }
}

/// Outcome of the locked planning phase of a read.
enum Plan {
    /// Entry is fresh (or already refreshing with visible data): hand the
    /// caller the current state.
    Return(QueryState),
    /// No data yet and a fetch is running: wait for that fetch.
    Attach(watch::Receiver<()>),
    /// No data and nothing running: fetch inline.
    Fetch(watch::Sender<()>),
    /// Stale data and nothing running: return it now, refresh in the
    /// background.
    Refresh(watch::Sender<()>, QueryState),
}

impl<F: Fetcher> QueryCache<F> {
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher: Arc::new(fetcher),
            entries: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Read the entry for `key`.
    ///
    /// - Cached and fresh: returned immediately, no network.
    /// - Cached but stale: returned immediately (stale-but-visible) while a
    ///   single re-fetch runs; `is_loading` is raised.
    /// - Not cached: awaits the fetch. If a fetch for the key is already in
    ///   flight, this read attaches to it — one fetch per key, ever.
    pub async fn read(&self, key: QueryKey) -> QueryState {
        let plan = {
            let mut entries = self.lock();
            let entry = entries.entry(key).or_default();

            if entry.snapshot.is_some() && !entry.stale {
                Plan::Return(entry.state())
            } else if let Some(rx) = &entry.in_flight {
                if entry.snapshot.is_some() {
                    Plan::Return(entry.state())
                } else {
                    Plan::Attach(rx.clone())
                }
            } else {
                let (tx, rx) = watch::channel(());
                entry.in_flight = Some(rx);
                if entry.snapshot.is_some() {
                    Plan::Refresh(tx, entry.state())
                } else {
                    Plan::Fetch(tx)
                }
            }
        };

        match plan {
            Plan::Return(state) => state,
            Plan::Attach(mut rx) => {
                // Resolves on completion; a dropped sender counts too.
                let _ = rx.changed().await;
                self.state(key)
            }
            Plan::Fetch(tx) => {
                self.run_fetch(key, tx).await;
                self.state(key)
            }
            Plan::Refresh(tx, state) => {
                let this = self.clone();
                tokio::spawn(async move { this.run_fetch(key, tx).await });
                state
            }
        }
    }

    /// Current state for `key` without triggering any fetch. A key never
    /// read yields the default (empty) state.
    #[must_use]
    pub fn state(&self, key: QueryKey) -> QueryState {
        self.lock()
            .get(&key)
            .map_or_else(QueryState::default, Entry::state)
    }

    /// Wait until no fetch is in flight for `key`, then return its state.
    pub async fn settled(&self, key: QueryKey) -> QueryState {
        loop {
            let waiting = self.lock().get(&key).and_then(|e| e.in_flight.clone());
            match waiting {
                Some(mut rx) => {
                    let _ = rx.changed().await;
                }
                None => return self.state(key),
            }
        }
    }

    /// Register interest in `key`. While the returned guard lives,
    /// invalidating the key re-fetches immediately instead of deferring to
    /// the next read.
    #[must_use]
    pub fn subscribe(&self, key: QueryKey) -> Subscription {
        self.lock().entry(key).or_default().subscribers += 1;
        Subscription {
            entries: Arc::clone(&self.entries),
            key,
        }
    }

    /// Mark `key` stale.
    ///
    /// - Fetch already in flight: coalesced — its result satisfies this
    ///   invalidation, no duplicate re-fetch is started.
    /// - Active subscribers: an immediate background re-fetch is scheduled.
    /// - Otherwise: deferred; the next read re-fetches.
    ///
    /// A key that was never read has no entry and nothing to invalidate.
    pub fn invalidate(&self, key: QueryKey) {
        let refetch = {
            let mut entries = self.lock();
            let Some(entry) = entries.get_mut(&key) else {
                return;
            };
            entry.stale = true;
            if entry.in_flight.is_some() || entry.subscribers == 0 {
                None
            } else {
                let (tx, rx) = watch::channel(());
                entry.in_flight = Some(rx);
                Some(tx)
            }
        };

        if let Some(tx) = refetch {
            debug!(%key, "invalidated; immediate re-fetch scheduled");
            let this = self.clone();
            tokio::spawn(async move { this.run_fetch(key, tx).await });
        } else {
            debug!(%key, "invalidated");
        }
    }

    /// Apply a successful mutation's declared invalidation set. Failed
    /// mutations must not be reported here — they never touch the cache.
    pub fn on_mutation_success(&self, mutation: Mutation) {
        for key in mutation.invalidates() {
            self.invalidate(key);
        }
    }

    /// Run the single fetch for `key` and publish its outcome. The caller
    /// must have installed the matching `in_flight` receiver under the lock.
    async fn run_fetch(&self, key: QueryKey, tx: watch::Sender<()>) {
        let result = self.fetcher.fetch(key).await;
        {
            let mut entries = self.lock();
            let entry = entries.entry(key).or_default();
            match result {
                Ok(value) => {
                    entry.snapshot = Some(value);
                    entry.is_error = false;
                    entry.stale = false;
                }
                Err(error) => {
                    // Stale-but-visible: the previous snapshot stays.
                    warn!(%key, %error, "fetch failed; keeping last snapshot");
                    entry.is_error = true;
                }
            }
            entry.in_flight = None;
        }
        let _ = tx.send(());
    }

    /// Lock poisoning cannot leave entries half-updated (no panics occur
    /// while the lock is held), so recover the guard.
    fn lock(&self) -> MutexGuard<'_, HashMap<QueryKey, Entry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// RAII subscriber registration; dropping it releases the interest.
pub struct Subscription {
    entries: Entries,
    key: QueryKey,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let mut entries = self
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(entry) = entries.get_mut(&self.key) {
            entry.subscribers = entry.subscribers.saturating_sub(1);
        }
    }
}
