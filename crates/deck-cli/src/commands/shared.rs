//! Helpers shared by view-rendering commands.

use deck_query::QueryState;
use serde::de::DeserializeOwned;

/// Decode a cached snapshot into its typed form.
///
/// # Errors
///
/// Returns an error if the entry has no data at all (first fetch failed) or
/// the snapshot does not match the expected shape.
pub fn decode<T: DeserializeOwned>(state: &QueryState, what: &str) -> anyhow::Result<T> {
    let Some(data) = &state.data else {
        anyhow::bail!("could not load {what}: no cached data and the fetch failed");
    };
    Ok(serde_json::from_value(data.clone())?)
}

/// Stale-but-visible: a failed refresh keeps the last snapshot on screen,
/// flagged so the user knows it may be out of date.
pub fn warn_if_stale(state: &QueryState, what: &str) {
    if state.is_error && state.data.is_some() {
        eprintln!("warning: refreshing {what} failed; showing last known data");
    }
}
