//! Server-side session storage
//!
//! A session is an opaque random token handed to the browser in a cookie.
//! Stores only ever see the SHA-256 digest of the token, so a leaked store
//! dump cannot be replayed as cookies.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use rand::RngCore;
use sha2::{Digest, Sha256};
use tokio::sync::RwLock;

use crate::{error::AppResult, models::user::SessionUser};

/// Generate a fresh 256-bit session token, hex encoded
pub fn generate_token() -> String {
    let mut bytes = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// Storage key derived from a session token
pub fn session_key(token: &str) -> String {
    format!("session:{}", hex::encode(Sha256::digest(token.as_bytes())))
}

/// Backend holding active sessions
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Open a session for the user and return the token identifying it
    async fn create(&self, user: &SessionUser) -> AppResult<String>;

    /// Resolve a token to its user, if the session is still alive
    async fn get(&self, token: &str) -> AppResult<Option<SessionUser>>;

    /// Drop a session; unknown tokens are ignored
    async fn destroy(&self, token: &str) -> AppResult<()>;
}

/// In-process session store for development and tests
pub struct MemorySessionStore {
    ttl: Duration,
    sessions: RwLock<HashMap<String, (SessionUser, Instant)>>,
}

impl MemorySessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            sessions: RwLock::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn create(&self, user: &SessionUser) -> AppResult<String> {
        let token = generate_token();
        let expires_at = Instant::now() + self.ttl;

        let mut sessions = self.sessions.write().await;
        sessions.retain(|_, (_, expiry)| *expiry > Instant::now());
        sessions.insert(session_key(&token), (user.clone(), expires_at));

        Ok(token)
    }

    async fn get(&self, token: &str) -> AppResult<Option<SessionUser>> {
        let sessions = self.sessions.read().await;
        Ok(sessions
            .get(&session_key(token))
            .filter(|(_, expiry)| *expiry > Instant::now())
            .map(|(user, _)| user.clone()))
    }

    async fn destroy(&self, token: &str) -> AppResult<()> {
        self.sessions.write().await.remove(&session_key(token));
        Ok(())
    }
}
