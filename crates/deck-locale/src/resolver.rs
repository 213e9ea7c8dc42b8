//! Path resolution and runtime locale switching.

use crate::{DEFAULT, Locale};

/// Outcome of resolving an incoming request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The path is already locale-prefixed or addresses a non-page resource.
    Pass,
    /// The path must be served at the default-locale-prefixed location.
    Redirect(String),
}

/// Outcome of a user-initiated locale switch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Switch {
    /// Already on the requested locale; no navigation.
    Stay,
    /// Navigate to the rewritten path.
    Navigate(String),
}

/// Resolve an incoming path with [`DEFAULT`] as the fallback locale.
///
/// See [`resolve_with`] for the rules.
#[must_use]
pub fn resolve(path: &str) -> Resolution {
    resolve_with(path, DEFAULT)
}

/// Resolve an incoming path against the supported-locale namespace,
/// redirecting unprefixed page paths under `default`.
///
/// Pass-through cases:
/// - first segment is a supported locale (any of them, not just `default`);
/// - API routes (`/api`, `/api/...`);
/// - internal asset routes (`/_assets/...`);
/// - file requests (final segment contains a `.`).
///
/// Everything else redirects to the same path prefixed with `default`.
/// Resolving a redirect target again yields [`Resolution::Pass`].
#[must_use]
pub fn resolve_with(path: &str, default: Locale) -> Resolution {
    let path = normalize(path);

    if is_non_page(&path) {
        return Resolution::Pass;
    }

    if first_segment(&path).parse::<Locale>().is_ok() {
        return Resolution::Pass;
    }

    Resolution::Redirect(format!("/{default}{path}"))
}

/// Rewrite `path` so its locale segment is `new_locale`.
///
/// Replaces the first segment when it already names a locale, inserts the
/// locale otherwise. Switching to the locale the path already carries is a
/// no-op ([`Switch::Stay`]), so applying the same switch twice never
/// navigates twice.
#[must_use]
pub fn switch(path: &str, new_locale: Locale) -> Switch {
    let path = normalize(path);
    let mut segments: Vec<&str> = path.split('/').collect();

    // segments[0] is the empty string before the leading slash.
    match segments.get(1).and_then(|s| s.parse::<Locale>().ok()) {
        Some(current) if current == new_locale => Switch::Stay,
        Some(_) => {
            segments[1] = new_locale.as_str();
            Switch::Navigate(segments.join("/"))
        }
        None => {
            segments.insert(1, new_locale.as_str());
            Switch::Navigate(segments.join("/"))
        }
    }
}

/// Non-page resources bypass locale handling entirely.
fn is_non_page(path: &str) -> bool {
    if path == "/api" || path.starts_with("/api/") {
        return true;
    }
    if path.starts_with("/_assets/") {
        return true;
    }
    // File request: the final segment has an extension.
    path.rsplit('/').next().is_some_and(|last| last.contains('.'))
}

fn first_segment(path: &str) -> &str {
    path.trim_start_matches('/').split('/').next().unwrap_or("")
}

/// Ensure a leading slash; the empty path is the root.
fn normalize(path: &str) -> String {
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    }
}
