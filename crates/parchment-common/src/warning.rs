//! Deduplicated warnings for recoverable problems.
//!
//! The markup and layout stages tolerate a fair amount of malformed input
//! (stray close tags, unclosed elements, repeated attributes). Each distinct
//! problem is reported once through the `log` facade so a document with the
//! same mistake on every line does not flood the host's log.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

/// Global set of warnings we've already emitted (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Warn about a recoverable problem (logged once per unique message).
///
/// The message is emitted at `warn` level with a `parchment::<component>`
/// log target, so hosts can filter by pipeline stage.
///
/// # Example
/// ```
/// use parchment_common::warning::warn_once;
///
/// warn_once("markup", "ignored stray close tag </p>");
/// ```
pub fn warn_once(component: &str, message: &str) {
    if record(component, message) {
        let target = format!("parchment::{component}");
        log::warn!(target: target.as_str(), "{message}");
    }
}

/// Clear all recorded warnings (call when loading a new document).
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}

/// Remember a warning; `true` if it had not been seen before.
fn record(component: &str, message: &str) -> bool {
    let key = format!("[{component}] {message}");
    WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get_or_insert_with(HashSet::new)
        .insert(key)
}
