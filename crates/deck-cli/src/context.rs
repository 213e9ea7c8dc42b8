//! Application context: config, session store, API client, and cache, wired
//! together in startup order.

use std::path::PathBuf;
use std::time::Duration;

use deck_api::ApiClient;
use deck_config::DeckConfig;
use deck_locale::Locale;
use deck_query::QueryCache;
use deck_session::{FileBackend, SessionStore};

use crate::fetcher::ApiFetcher;

pub struct AppContext {
    pub config: DeckConfig,
    pub session: SessionStore,
    pub api: ApiClient,
    pub cache: QueryCache<ApiFetcher>,
}

impl AppContext {
    /// Build the context and hydrate the session store. After this returns,
    /// `session.has_hydrated()` is `true` and guard decisions are valid.
    ///
    /// # Errors
    ///
    /// Returns an error if the session file path cannot be resolved. A
    /// corrupt session file is NOT an error — hydration normalizes it to
    /// "no session".
    pub fn init(config: DeckConfig) -> anyhow::Result<Self> {
        let backend = if config.general.session_file.is_empty() {
            FileBackend::at_default_path()?
        } else {
            FileBackend::new(PathBuf::from(&config.general.session_file))
        };

        let mut session = SessionStore::new(backend);
        session.hydrate();
        tracing::debug!(
            authenticated = session.is_authenticated(),
            "session hydrated"
        );

        let api = ApiClient::with_timeout(
            &config.api.base_url,
            Duration::from_secs(config.api.timeout_secs),
        )
        .with_token(session.token().map(str::to_string));
        let cache = QueryCache::new(ApiFetcher::new(api.clone()));

        Ok(Self {
            config,
            session,
            api,
            cache,
        })
    }

    /// The configured default locale.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured value names an unsupported locale.
    pub fn locale(&self) -> anyhow::Result<Locale> {
        Ok(self.config.general.locale()?)
    }

    /// Re-attach the session's current token to the API client and cache.
    /// Called after any session mutation (login, register, logout).
    pub fn refresh_api_token(&mut self) {
        self.api = self
            .api
            .clone()
            .with_token(self.session.token().map(str::to_string));
        self.cache = QueryCache::new(ApiFetcher::new(self.api.clone()));
    }

    /// Fail with a login hint unless the session is authenticated.
    ///
    /// # Errors
    ///
    /// Returns an error when no authenticated session exists.
    pub fn require_auth(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.session.is_authenticated(),
            "not logged in - run `tkd auth login`"
        );
        Ok(())
    }
}
