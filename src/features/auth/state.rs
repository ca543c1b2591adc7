//! Session state shared by every part of the client. The store is constructed
//! explicitly and handed to whoever needs it; there is no global instance.
//!
//! In-memory state lives in a `watch` channel: reads borrow the current value
//! without blocking, and every change is a whole replacement, so observers
//! never see a token without its user record.

use super::{
    storage::{DurableStorage, ROLE_KEY, TOKEN_KEY, USER_KEY},
    token::BearerToken,
    types::{Session, UserRecord},
};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info, instrument, warn};

const SESSION_KEYS: [&str; 3] = [TOKEN_KEY, ROLE_KEY, USER_KEY];

#[derive(Clone)]
pub struct SessionStore {
    storage: Arc<dyn DurableStorage>,
    state: Arc<watch::Sender<Option<Session>>>,
}

impl SessionStore {
    /// Creates an empty store; nothing is read from `storage`.
    #[must_use]
    pub fn new(storage: Arc<dyn DurableStorage>) -> Self {
        let (state, _) = watch::channel(None);
        Self {
            storage,
            state: Arc::new(state),
        }
    }

    /// Creates a store and hydrates it from `storage`. A token without a
    /// readable user record (or the reverse) yields no session.
    #[must_use]
    pub fn hydrate(storage: Arc<dyn DurableStorage>) -> Self {
        let session = read_session(storage.as_ref());
        let (state, _) = watch::channel(session);
        Self {
            storage,
            state: Arc::new(state),
        }
    }

    /// Stores the session in memory and durable storage. Token, role and user
    /// are written in one batch. When that fails the stored session is cleared,
    /// so a restart comes up signed out rather than pairing the new token with
    /// an older user record. The in-memory session takes effect either way.
    #[instrument(skip(self, user, token), fields(user_id = %user.id, role = %user.role))]
    pub fn login(&self, user: UserRecord, token: BearerToken) {
        if let Err(err) = self.persist(&user, &token) {
            warn!("session not persisted: {err}");
            if let Err(err) = self.storage.remove_items(&SESSION_KEYS) {
                warn!("failed to clear stored session: {err}");
            }
        }

        self.state.send_replace(Some(Session { token, user }));
        info!("signed in");
    }

    /// Clears the session from memory and durable storage. Calling it while
    /// signed out is a no-op for observers.
    #[instrument(skip(self))]
    pub fn logout(&self) {
        if let Err(err) = self.storage.remove_items(&SESSION_KEYS) {
            warn!("failed to clear stored session: {err}");
        }

        let changed = self.state.send_if_modified(|state| state.take().is_some());
        if changed {
            info!("signed out");
        } else {
            debug!("logout while signed out");
        }
    }

    /// Current session, if any.
    #[must_use]
    pub fn current_session(&self) -> Option<Session> {
        self.state.borrow().clone()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().is_some()
    }

    /// Observes session changes. The receiver starts at the current value.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Option<Session>> {
        self.state.subscribe()
    }

    fn persist(
        &self,
        user: &UserRecord,
        token: &BearerToken,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let user_json = serde_json::to_string(user)?;
        self.storage.set_items(&[
            (TOKEN_KEY, token.as_str()),
            (ROLE_KEY, user.role.as_str()),
            (USER_KEY, user_json.as_str()),
        ])?;
        Ok(())
    }
}

fn read_session(storage: &dyn DurableStorage) -> Option<Session> {
    let token = match storage.get_item(TOKEN_KEY) {
        Ok(Some(token)) => BearerToken::new(token),
        Ok(None) => return None,
        Err(err) => {
            warn!("stored session unreadable: {err}");
            return None;
        }
    };

    if token.is_blank() {
        debug!("stored token is blank, treating as signed out");
        return None;
    }

    let raw_user = match storage.get_item(USER_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            warn!("stored token without user record, treating as signed out");
            return None;
        }
        Err(err) => {
            warn!("stored user unreadable: {err}");
            return None;
        }
    };

    let user: UserRecord = match serde_json::from_str(&raw_user) {
        Ok(user) => user,
        Err(err) => {
            warn!("stored user record is malformed, treating as signed out: {err}");
            return None;
        }
    };

    if let Ok(Some(role)) = storage.get_item(ROLE_KEY) {
        if role != user.role.as_str() {
            debug!(stored = %role, user = %user.role, "stored role differs from user record");
        }
    }

    Some(Session { token, user })
}
