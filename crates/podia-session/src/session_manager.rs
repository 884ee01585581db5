use crate::{AuthClient, Persistence, Result as AuthErrorResult, TokenCache};

use std::sync::Mutex;

use log::{info, warn};
use podia_core::Identity;
use tokio::sync::watch;

struct ActiveSession {
    id_token: String,
    persistence: Persistence,
}

/// Tracks the current identity and broadcasts every change.
///
/// `subscribe()` hands out a watch receiver: the current identity is readable
/// immediately, and each sign-in/out produces exactly one notification. This
/// is the single source of truth the controller reacts to; nothing polls.
pub struct SessionManager {
    auth: AuthClient,
    cache: TokenCache,
    identity: watch::Sender<Option<Identity>>,
    active: Mutex<Option<ActiveSession>>,
}

impl SessionManager {
    pub fn new(auth: AuthClient, cache: TokenCache) -> Self {
        let (identity, _) = watch::channel(None);
        Self {
            auth,
            cache,
            identity,
            active: Mutex::new(None),
        }
    }

    /// Observe identity changes. The receiver's current value is the identity
    /// right now (or None).
    pub fn subscribe(&self) -> watch::Receiver<Option<Identity>> {
        self.identity.subscribe()
    }

    pub fn current(&self) -> Option<Identity> {
        self.identity.borrow().clone()
    }

    /// Persistence mode the active session was started with.
    pub fn persistence(&self) -> Option<Persistence> {
        self.active
            .lock()
            .expect("session lock poisoned")
            .as_ref()
            .map(|s| s.persistence)
    }

    /// Bearer token of the active session, for the record store client.
    pub fn id_token(&self) -> Option<String> {
        self.active
            .lock()
            .expect("session lock poisoned")
            .as_ref()
            .map(|s| s.id_token.clone())
    }

    pub async fn sign_in(
        &self,
        email: &str,
        password: &str,
        persistence: Persistence,
    ) -> AuthErrorResult<Identity> {
        let session = self.auth.sign_in_with_password(email, password).await?;
        self.begin(session.identity.clone(), session.id_token, persistence)?;
        Ok(session.identity)
    }

    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
        persistence: Persistence,
    ) -> AuthErrorResult<Identity> {
        let session = self.auth.sign_up(email, password).await?;
        self.begin(session.identity.clone(), session.id_token, persistence)?;
        Ok(session.identity)
    }

    /// Guest sessions are never written to the cache file: an anonymous
    /// identity has no durable backing record.
    pub async fn sign_in_as_guest(&self) -> AuthErrorResult<Identity> {
        let session = self.auth.sign_in_anonymously().await?;
        self.begin(
            session.identity.clone(),
            session.id_token,
            Persistence::SessionOnly,
        )?;
        Ok(session.identity)
    }

    /// Idempotent: signing out without a session notifies nobody.
    pub fn sign_out(&self) {
        *self.active.lock().expect("session lock poisoned") = None;
        self.cache.clear();

        self.identity.send_if_modified(|current| {
            if current.is_some() {
                *current = None;
                true
            } else {
                false
            }
        });
    }

    /// Restore a session at startup from a bootstrap token or the cache
    /// file. Failure degrades to signed-out rather than surfacing an error.
    pub async fn restore(&self, bootstrap_token: Option<&str>) -> bool {
        let (token, from_cache) = match bootstrap_token {
            Some(t) => (t.to_string(), false),
            None => match self.cache.load() {
                Some(t) => (t, true),
                None => return false,
            },
        };

        match self.auth.lookup(&token).await {
            Ok(identity) => {
                info!("Session restored for uid {}", identity.uid);
                let persistence = if from_cache {
                    Persistence::Remember
                } else {
                    Persistence::SessionOnly
                };
                // begin() only fails on cache IO, which restore tolerates
                if let Err(e) = self.begin(identity, token, persistence) {
                    warn!("Session restore could not re-cache token: {e}");
                }
                true
            }
            Err(e) => {
                warn!("Session restore failed, continuing signed out: {e}");
                if from_cache {
                    self.cache.clear();
                }
                false
            }
        }
    }

    fn begin(
        &self,
        identity: Identity,
        id_token: String,
        persistence: Persistence,
    ) -> AuthErrorResult<()> {
        if persistence == Persistence::Remember {
            self.cache.save(&id_token)?;
        } else {
            self.cache.clear();
        }

        *self.active.lock().expect("session lock poisoned") = Some(ActiveSession {
            id_token,
            persistence,
        });

        self.identity.send_replace(Some(identity));
        Ok(())
    }
}
