//! Per-session daily quotas.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, TimeDelta, Utc};
use rand::RngCore;
use serde::Serialize;
use thiserror::Error;
use tokio::sync::RwLock;

use crate::config::LimitsSection;

/// Bytes of randomness in a session id before hex encoding.
const SESSION_ID_BYTES: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("Invalid or expired session")]
    Expired,
    #[error("{0}")]
    QuotaExceeded(String),
}

/// Usage consumed by one request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UsageDelta {
    pub rows: u64,
    pub exports: u64,
    pub schema_batches: u64,
}

impl UsageDelta {
    /// A generate request: every row of every schema plus one schema batch.
    pub fn generation(total_rows: usize) -> Self {
        Self {
            rows: total_rows as u64,
            exports: 0,
            schema_batches: 1,
        }
    }

    pub fn export() -> Self {
        Self {
            rows: 0,
            exports: 1,
            schema_batches: 0,
        }
    }
}

/// Quota counters as reported to clients.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionLimits {
    pub rows_generated: u64,
    pub exports_used: u64,
    pub schemas_used: u64,
    pub max_rows: u64,
    pub max_exports: u64,
    pub max_schemas: u64,
}

impl SessionLimits {
    /// Counters of a caller without a live session.
    pub fn empty(limits: &LimitsSection) -> Self {
        Self {
            max_rows: limits.max_rows,
            max_exports: limits.max_exports,
            max_schemas: limits.max_schema_batches,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionRecord {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub last_used: DateTime<Utc>,
    pub rows_generated: u64,
    pub exports_used: u64,
    pub schemas_used: u64,
}

impl SessionRecord {
    fn new(id: String, now: DateTime<Utc>) -> Self {
        Self {
            id,
            created_at: now,
            last_used: now,
            rows_generated: 0,
            exports_used: 0,
            schemas_used: 0,
        }
    }

    pub fn is_expired(&self, ttl: TimeDelta, now: DateTime<Utc>) -> bool {
        self.created_at + ttl <= now
    }

    pub fn limits(&self, limits: &LimitsSection) -> SessionLimits {
        SessionLimits {
            rows_generated: self.rows_generated,
            exports_used: self.exports_used,
            schemas_used: self.schemas_used,
            ..SessionLimits::empty(limits)
        }
    }

    /// Check a pending charge against the quotas without recording it.
    pub fn check(&self, delta: UsageDelta, limits: &LimitsSection) -> Result<(), SessionError> {
        if self.rows_generated + delta.rows > limits.max_rows {
            let remaining = limits.max_rows.saturating_sub(self.rows_generated);
            return Err(SessionError::QuotaExceeded(format!(
                "Daily row limit exceeded. You can generate {remaining} more rows today."
            )));
        }
        if delta.exports > 0 && self.exports_used >= limits.max_exports {
            return Err(SessionError::QuotaExceeded(format!(
                "Daily export limit exceeded. You can export {} schemas per day.",
                limits.max_exports
            )));
        }
        if delta.schema_batches > 0 && self.schemas_used >= limits.max_schema_batches {
            return Err(SessionError::QuotaExceeded(format!(
                "Daily schema limit exceeded. You can use {} schemas per day.",
                limits.max_schema_batches
            )));
        }
        Ok(())
    }

    fn charge(&mut self, delta: UsageDelta, now: DateTime<Utc>) {
        self.rows_generated += delta.rows;
        self.exports_used += delta.exports;
        self.schemas_used += delta.schema_batches;
        self.last_used = now;
    }
}

/// Storage for session quota counters.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn create(&self) -> SessionRecord;

    /// Live session by id; `None` when unknown or expired.
    async fn get(&self, id: &str) -> Option<SessionRecord>;

    async fn validate(&self, id: &str, delta: UsageDelta) -> Result<(), SessionError>;

    /// Record usage and return the updated counters.
    async fn apply(&self, id: &str, delta: UsageDelta) -> Result<SessionLimits, SessionError>;

    /// Drop expired sessions, returning how many were removed.
    async fn purge_expired(&self) -> usize;

    fn limits(&self) -> &LimitsSection;
}

pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<String, SessionRecord>>,
    ttl: TimeDelta,
    limits: LimitsSection,
}

impl InMemorySessionStore {
    pub fn new(ttl: TimeDelta, limits: LimitsSection) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            ttl,
            limits,
        }
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn create(&self) -> SessionRecord {
        let record = SessionRecord::new(new_session_id(), Utc::now());
        self.sessions
            .write()
            .await
            .insert(record.id.clone(), record.clone());
        record
    }

    async fn get(&self, id: &str) -> Option<SessionRecord> {
        let now = Utc::now();
        self.sessions
            .read()
            .await
            .get(id)
            .filter(|record| !record.is_expired(self.ttl, now))
            .cloned()
    }

    async fn validate(&self, id: &str, delta: UsageDelta) -> Result<(), SessionError> {
        let record = self.get(id).await.ok_or(SessionError::Expired)?;
        record.check(delta, &self.limits)
    }

    async fn apply(&self, id: &str, delta: UsageDelta) -> Result<SessionLimits, SessionError> {
        let now = Utc::now();
        let mut sessions = self.sessions.write().await;
        let record = sessions
            .get_mut(id)
            .filter(|record| !record.is_expired(self.ttl, now))
            .ok_or(SessionError::Expired)?;
        record.charge(delta, now);
        Ok(record.limits(&self.limits))
    }

    async fn purge_expired(&self) -> usize {
        let now = Utc::now();
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, record| !record.is_expired(self.ttl, now));
        before - sessions.len()
    }

    fn limits(&self) -> &LimitsSection {
        &self.limits
    }
}

fn new_session_id() -> String {
    let mut bytes = [0_u8; SESSION_ID_BYTES];
    rand::rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}
