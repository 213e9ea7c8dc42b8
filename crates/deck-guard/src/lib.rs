//! # deck-guard
//!
//! The navigation guard: decides whether a route may render given the
//! session store's hydration and authentication state.
//!
//! The guard is hydration-aware by construction. Before the store has
//! hydrated, every decision is [`GuardDecision::Pending`] ("no content yet",
//! never "logged out"), so a protected view can never bounce a returning
//! user to login while their persisted session is still loading.

use deck_locale::Locale;
use deck_session::SessionStore;
use tracing::debug;

/// Auth state derived from a [`SessionStore`] snapshot.
///
/// ```text
/// Hydrating → Unauthenticated   (hydrated, token or user missing)
/// Hydrating → Authenticated     (hydrated, both present)
/// Authenticated → Unauthenticated  (logout)
/// ```
///
/// `Unauthenticated → Authenticated` happens only through the login flow
/// calling `set_auth` and re-deriving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardState {
    Hydrating,
    Unauthenticated,
    Authenticated,
}

impl GuardState {
    /// Derive the current state from the store.
    #[must_use]
    pub fn of(store: &SessionStore) -> Self {
        if !store.has_hydrated() {
            return Self::Hydrating;
        }
        if store.is_authenticated() {
            Self::Authenticated
        } else {
            Self::Unauthenticated
        }
    }
}

/// Whether a route requires authentication.
///
/// `login` and `register` are the public routes; everything else under a
/// locale prefix is protected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteClass {
    Protected,
    Public,
}

impl RouteClass {
    /// Classify the path remainder after the locale segment.
    #[must_use]
    pub fn of(path_after_locale: &str) -> Self {
        match path_after_locale.trim_matches('/') {
            "login" | "register" => Self::Public,
            _ => Self::Protected,
        }
    }
}

/// What the navigator should do with the current route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Hydration incomplete: render nothing, redirect nowhere.
    Pending,
    /// Navigate to the given locale-prefixed path.
    Redirect(String),
    /// The route may render.
    Allow,
}

/// Decide whether a route may render.
///
/// - `Hydrating` → [`GuardDecision::Pending`], unconditionally.
/// - Protected route, unauthenticated → redirect to `/{locale}/login`.
/// - Public route, authenticated → redirect to the dashboard `/{locale}`.
/// - Otherwise → [`GuardDecision::Allow`].
#[must_use]
pub fn decide(store: &SessionStore, locale: Locale, route: RouteClass) -> GuardDecision {
    match (GuardState::of(store), route) {
        (GuardState::Hydrating, _) => GuardDecision::Pending,
        (GuardState::Unauthenticated, RouteClass::Protected) => {
            debug!(%locale, "unauthenticated; redirecting to login");
            GuardDecision::Redirect(format!("/{locale}/login"))
        }
        (GuardState::Authenticated, RouteClass::Public) => {
            GuardDecision::Redirect(format!("/{locale}"))
        }
        _ => GuardDecision::Allow,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deck_core::User;
    use deck_session::{MemoryBackend, PersistedSession, SessionStore};
    use pretty_assertions::assert_eq;

    fn ada() -> User {
        User {
            id: 1,
            name: "Ada".to_string(),
            email: "a@b.com".to_string(),
        }
    }

    fn authenticated_store() -> SessionStore {
        let mut store = SessionStore::new(MemoryBackend::with_record(&PersistedSession {
            token: Some("tok123".to_string()),
            user: Some(ada()),
        }));
        store.hydrate();
        store
    }

    #[test]
    fn unhydrated_store_is_always_pending() {
        let store = SessionStore::new(MemoryBackend::new());
        assert_eq!(GuardState::of(&store), GuardState::Hydrating);
        for route in [RouteClass::Protected, RouteClass::Public] {
            assert_eq!(decide(&store, Locale::En, route), GuardDecision::Pending);
        }
    }

    #[test]
    fn fresh_process_without_session_redirects_to_login() {
        let mut store = SessionStore::new(MemoryBackend::new());
        store.hydrate();

        assert_eq!(GuardState::of(&store), GuardState::Unauthenticated);
        assert_eq!(
            decide(&store, Locale::En, RouteClass::Protected),
            GuardDecision::Redirect("/en/login".to_string())
        );
    }

    #[test]
    fn redirect_target_carries_the_active_locale() {
        let mut store = SessionStore::new(MemoryBackend::new());
        store.hydrate();
        assert_eq!(
            decide(&store, Locale::Tr, RouteClass::Protected),
            GuardDecision::Redirect("/tr/login".to_string())
        );
    }

    #[test]
    fn authenticated_session_allows_protected_routes() {
        let store = authenticated_store();
        assert_eq!(GuardState::of(&store), GuardState::Authenticated);
        assert_eq!(
            decide(&store, Locale::En, RouteClass::Protected),
            GuardDecision::Allow
        );
    }

    #[test]
    fn authenticated_visit_to_public_route_goes_to_dashboard() {
        let store = authenticated_store();
        assert_eq!(
            decide(&store, Locale::En, RouteClass::Public),
            GuardDecision::Redirect("/en".to_string())
        );
    }

    #[test]
    fn unauthenticated_may_view_public_routes() {
        let mut store = SessionStore::new(MemoryBackend::new());
        store.hydrate();
        assert_eq!(
            decide(&store, Locale::En, RouteClass::Public),
            GuardDecision::Allow
        );
    }

    #[test]
    fn logout_transitions_authenticated_to_unauthenticated() {
        let mut store = authenticated_store();
        store.logout().expect("logout");
        assert_eq!(GuardState::of(&store), GuardState::Unauthenticated);
        assert_eq!(
            decide(&store, Locale::En, RouteClass::Protected),
            GuardDecision::Redirect("/en/login".to_string())
        );
    }

    #[test]
    fn route_classification() {
        assert_eq!(RouteClass::of("login"), RouteClass::Public);
        assert_eq!(RouteClass::of("/register/"), RouteClass::Public);
        assert_eq!(RouteClass::of(""), RouteClass::Protected);
        assert_eq!(RouteClass::of("projects/7"), RouteClass::Protected);
    }
}
