use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use chrono::{DateTime, Duration, Utc};
use tracing::debug;

use crate::error::Error;

use super::{Session, SessionId};

pub const DEFAULT_SESSION_TTL_HOURS: u32 = 24;

/// In-memory sessions keyed by the id in the session cookie. A session
/// lives for `ttl` after it was created; expired sessions load as unknown
/// and are pruned whenever another session is saved.
#[derive(Debug)]
pub struct SessionStore {
    sessions: Mutex<HashMap<SessionId, Session>>,
    ttl: Duration,
}

impl SessionStore {
    pub fn new() -> SessionStore {
        SessionStore::with_ttl(Duration::hours(i64::from(DEFAULT_SESSION_TTL_HOURS)))
    }

    pub fn with_ttl(ttl: Duration) -> SessionStore {
        SessionStore {
            sessions: Mutex::new(HashMap::new()),
            ttl,
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<SessionId, Session>>, Error> {
        self.sessions
            .lock()
            .map_err(|_| Error::ExistentialState("session store lock was poisoned".to_string()))
    }

    #[tracing::instrument(skip(self))]
    pub fn load(&self, session_id: SessionId) -> Result<Option<Session>, Error> {
        let now = Utc::now();
        let mut sessions = self.lock()?;

        let expired = sessions
            .get(&session_id)
            .map(|session| !is_live(session, self.ttl, now));

        match expired {
            Some(true) => {
                sessions.remove(&session_id);
                debug!("session expired");
                Ok(None)
            }
            Some(false) => Ok(sessions.get(&session_id).cloned()),
            None => Ok(None),
        }
    }

    #[tracing::instrument(skip(self))]
    pub fn save(&self, session: Session) -> Result<(), Error> {
        let now = Utc::now();
        let mut sessions = self.lock()?;

        let before = sessions.len();
        sessions.retain(|_, stored| is_live(stored, self.ttl, now));
        if sessions.len() < before {
            debug!(pruned = before - sessions.len(), "pruned expired sessions");
        }

        sessions.insert(session.id, session);

        Ok(())
    }

    #[tracing::instrument(skip(self))]
    pub fn remove(&self, session_id: SessionId) -> Result<Option<Session>, Error> {
        Ok(self.lock()?.remove(&session_id))
    }
}

impl Default for SessionStore {
    fn default() -> SessionStore {
        SessionStore::new()
    }
}

fn is_live(session: &Session, ttl: Duration, now: DateTime<Utc>) -> bool {
    session
        .created_at
        .checked_add_signed(ttl)
        .map_or(true, |expires_at| expires_at > now)
}
