//! # deck-query
//!
//! A keyed cache of server-resource snapshots with two behaviors that keep
//! local views consistent with server mutations:
//!
//! 1. **Request de-duplication** — at most one fetch per key is in flight;
//!    a read issued while a fetch is running attaches to it instead of
//!    starting a second one.
//! 2. **Mutation-driven invalidation** — a successful mutation declares the
//!    keys it invalidates; invalidation marks the entry stale and re-fetches
//!    immediately when someone is watching the key, or defers to the next
//!    read when nobody is.
//!
//! Snapshots are opaque `serde_json::Value` payloads: the cache stores and
//! invalidates server resources, it does not interpret them. A failed fetch
//! leaves the previous snapshot visible (stale-but-visible) and raises the
//! entry's error flag; a failed mutation never reaches the cache at all.

mod cache;
mod key;

pub use cache::{Fetcher, QueryCache, QueryState, Subscription};
pub use key::{Mutation, QueryKey};
