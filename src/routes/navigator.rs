//! Navigation with the guard in front of every view. A navigation follows
//! guard redirects (and the `/dashboard` alias) until a route renders, using a
//! single session snapshot for the whole chain.

use super::{normalize_path, paths, Route};
use crate::features::auth::{evaluate, resolve_home, GuardDecision, Session, SessionStore};
use thiserror::Error;
use tracing::{debug, instrument};
use url::form_urlencoded;

/// Redirect hops allowed before a navigation is abandoned.
pub const MAX_REDIRECTS: usize = 4;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NavigationError {
    #[error("redirect loop while opening {requested}: {}", chain.join(" -> "))]
    TooManyRedirects { requested: String, chain: Vec<String> },
}

/// Outcome of a navigation: the route that renders and how we got there.
#[derive(Clone, Debug, PartialEq)]
pub struct Navigation {
    pub requested: String,
    pub route: Route,
    /// Paths left because of a redirect, in order.
    pub redirects: Vec<String>,
    /// Path to return to after login, set when the guard sent us to `/login`.
    pub from: Option<String>,
    /// Session the decision was made with; the view mounts with it.
    pub session: Option<Session>,
}

impl Navigation {
    #[must_use]
    pub fn redirected(&self) -> bool {
        !self.redirects.is_empty()
    }

    /// Final location including the `from` query for login redirects. The
    /// not-found view keeps the requested path.
    #[must_use]
    pub fn location(&self) -> String {
        match (&self.route, &self.from) {
            (Route::Login, Some(from)) => {
                let query = form_urlencoded::Serializer::new(String::new())
                    .append_pair("from", from)
                    .finish();
                format!("{}?{query}", paths::LOGIN)
            }
            (Route::NotFound, _) => self.requested.clone(),
            (route, _) => route.path().to_string(),
        }
    }
}

#[derive(Clone)]
pub struct Navigator {
    sessions: SessionStore,
}

impl Navigator {
    #[must_use]
    pub const fn new(sessions: SessionStore) -> Self {
        Self { sessions }
    }

    #[must_use]
    pub const fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    /// Resolves `location` to the route that may render for the current
    /// session.
    ///
    /// # Errors
    /// Returns `NavigationError::TooManyRedirects` if redirects do not settle.
    #[instrument(skip(self))]
    pub fn navigate(&self, location: &str) -> Result<Navigation, NavigationError> {
        let session = self.sessions.current_session();
        let requested = normalize_path(location);

        let mut current = requested.clone();
        let mut redirects = Vec::new();
        let mut from = None;

        loop {
            let route = Route::match_path(&current);
            let next = match evaluate(&route.access(), session.as_ref(), &current) {
                GuardDecision::Render => {
                    let alias = match (route, &session) {
                        (Route::Dashboard, Some(session)) => {
                            Some(resolve_home(&session.user.role).path())
                        }
                        _ => None,
                    };
                    let Some(home) = alias else {
                        debug!(%route, hops = redirects.len(), "render");
                        return Ok(Navigation {
                            requested,
                            route,
                            redirects,
                            from,
                            session,
                        });
                    };
                    home
                }
                GuardDecision::RedirectToLogin { from: origin } => {
                    from.get_or_insert(origin);
                    paths::LOGIN
                }
                GuardDecision::RedirectHome(home) => home.path(),
            };

            debug!(from = %current, to = next, "redirect");
            redirects.push(current);
            if redirects.len() > MAX_REDIRECTS {
                return Err(NavigationError::TooManyRedirects {
                    requested,
                    chain: redirects,
                });
            }
            current = next.to_string();
        }
    }
}
