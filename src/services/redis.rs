//! Redis-backed session store

use async_trait::async_trait;
use redis::{AsyncCommands, Client};

use crate::{
    error::{AppError, AppResult},
    models::user::SessionUser,
    services::sessions::{generate_token, session_key, SessionStore},
};

#[derive(Clone)]
pub struct RedisSessionStore {
    client: Client,
    ttl_seconds: u64,
}

impl RedisSessionStore {
    /// Connect to Redis and verify the server answers
    pub async fn new(url: &str, ttl_seconds: u64) -> AppResult<Self> {
        let client = Client::open(url)
            .map_err(|e| AppError::Internal(format!("Failed to create Redis client: {}", e)))?;

        // Test connection
        let mut conn = client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| AppError::Internal(format!("Failed to connect to Redis: {}", e)))?;

        redis::cmd("PING")
            .query_async::<_, String>(&mut conn)
            .await
            .map_err(|e| AppError::Internal(format!("Redis connection test failed: {}", e)))?;

        Ok(Self { client, ttl_seconds })
    }

    async fn connection(&self) -> AppResult<redis::aio::MultiplexedConnection> {
        self.client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| AppError::Internal(format!("Failed to get Redis connection: {}", e)))
    }
}

#[async_trait]
impl SessionStore for RedisSessionStore {
    async fn create(&self, user: &SessionUser) -> AppResult<String> {
        let mut conn = self.connection().await?;

        let token = generate_token();
        let value = serde_json::to_string(user)
            .map_err(|e| AppError::Internal(format!("Failed to serialize session: {}", e)))?;

        conn.set_ex::<_, _, ()>(session_key(&token), value, self.ttl_seconds)
            .await
            .map_err(|e| AppError::Internal(format!("Failed to store session in Redis: {}", e)))?;

        Ok(token)
    }

    async fn get(&self, token: &str) -> AppResult<Option<SessionUser>> {
        let mut conn = self.connection().await?;

        let stored: Option<String> = conn
            .get(session_key(token))
            .await
            .map_err(|e| AppError::Internal(format!("Failed to read session from Redis: {}", e)))?;

        match stored {
            Some(value) => match serde_json::from_str(&value) {
                Ok(user) => Ok(Some(user)),
                Err(e) => {
                    tracing::warn!("Discarding unreadable session record: {}", e);
                    Ok(None)
                }
            },
            None => Ok(None),
        }
    }

    async fn destroy(&self, token: &str) -> AppResult<()> {
        let mut conn = self.connection().await?;

        conn.del::<_, ()>(session_key(token))
            .await
            .map_err(|e| AppError::Internal(format!("Failed to delete session from Redis: {}", e)))?;

        Ok(())
    }
}
