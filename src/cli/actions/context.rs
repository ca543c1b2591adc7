use crate::{
    api::{ApiClient, ApiConfig},
    cli::globals::GlobalArgs,
    features::auth::{
        storage::{DurableStorage, FileStorage},
        Session, SessionStore,
    },
    routes::{navigator::Navigator, Route},
};
use anyhow::{bail, Result};
use std::sync::Arc;
use tracing::debug;

/// Everything an action needs: the API client and the session store, with the
/// navigator sharing that store.
#[derive(Clone)]
pub struct Portal {
    api: ApiClient,
    navigator: Navigator,
}

impl Portal {
    #[must_use]
    pub fn new(api: ApiClient, storage: Arc<dyn DurableStorage>) -> Self {
        Self {
            api,
            navigator: Navigator::new(SessionStore::hydrate(storage)),
        }
    }

    /// # Errors
    /// Returns an error if the API URL is not a usable http(s) URL.
    pub fn from_globals(globals: &GlobalArgs) -> Result<Self> {
        let config = ApiConfig::new(&globals.api_url, globals.timeout)?;
        let api = ApiClient::new(&config)?;
        debug!(session_file = %globals.session_file.display(), "hydrating session");
        Ok(Self::new(
            api,
            Arc::new(FileStorage::new(globals.session_file.clone())),
        ))
    }

    #[must_use]
    pub const fn api(&self) -> &ApiClient {
        &self.api
    }

    #[must_use]
    pub const fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    #[must_use]
    pub const fn sessions(&self) -> &SessionStore {
        self.navigator.sessions()
    }

    /// Opens `route` through the guard and returns the session it renders
    /// with. A redirect means the view does not mount; the `/dashboard` alias
    /// mounts on whichever dashboard it resolves to.
    ///
    /// # Errors
    /// Returns an error naming the redirect target when the view may not
    /// render.
    pub fn mount(&self, route: Route) -> Result<Session> {
        let navigation = self.navigator.navigate(route.path())?;
        let mounted = navigation.route == route
            || (route == Route::Dashboard
                && matches!(
                    navigation.route,
                    Route::PatientDashboard | Route::DoctorDashboard | Route::AdminDashboard
                ));

        match navigation.session.clone() {
            Some(session) if mounted => Ok(session),
            None => bail!("sign in first (redirected to {})", navigation.location()),
            Some(_) => bail!(
                "{} is not available for this account (redirected to {})",
                route.path(),
                navigation.location()
            ),
        }
    }
}
