//! Two-tier session store: an in-memory cache in front of a durable
//! repository.
//!
//! Reads prefer the cache and fall through to the repository; every
//! mutation is written through while the session lock is held, so the
//! durable copy can never regress behind an acknowledged append. If the
//! repository fails the store latches into memory-only operation for the
//! rest of the process instead of refusing queries.

use chrono::{Duration, Utc};
use pathwise_core::error::{CounselError, Result};
use pathwise_core::session::{ConversationMessage, Session, SessionRepository};
use pathwise_core::specialist::SpecialistId;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, warn};
use uuid::Uuid;

/// Cache-fronted session store with write-through persistence.
pub struct SessionStore {
    cache: RwLock<HashMap<String, Session>>,
    repository: Arc<dyn SessionRepository>,
    degraded: AtomicBool,
}

impl SessionStore {
    /// Creates a store backed by the given repository.
    pub fn new(repository: Arc<dyn SessionRepository>) -> Self {
        Self {
            cache: RwLock::new(HashMap::new()),
            repository,
            degraded: AtomicBool::new(false),
        }
    }

    /// Whether the store has fallen back to memory-only operation after a
    /// persistence failure.
    pub fn is_degraded(&self) -> bool {
        self.degraded.load(Ordering::Relaxed)
    }

    /// Creates a new session with a generated id and persists it.
    pub async fn create(&self, user_id: Option<String>) -> Result<Session> {
        let session = Session::new(Uuid::new_v4().to_string(), user_id);
        let mut cache = self.cache.write().await;
        cache.insert(session.id.clone(), session.clone());
        self.persist(&session).await;
        drop(cache);
        info!(session_id = %session.id, "created session");
        Ok(session)
    }

    /// Resolves a session id to a session, creating one when needed.
    ///
    /// `None` always creates a fresh session. A supplied id that matches
    /// nothing also creates one, preserving the caller's id so their
    /// handle stays valid.
    pub async fn resolve_or_create(
        &self,
        session_id: Option<&str>,
        user_id: Option<String>,
    ) -> Result<Session> {
        let id = match session_id {
            Some(id) => id,
            None => return self.create(user_id).await,
        };

        if let Some(session) = self.get(id).await? {
            return Ok(session);
        }

        let session = Session::new(id, user_id);
        let mut cache = self.cache.write().await;
        cache.insert(session.id.clone(), session.clone());
        self.persist(&session).await;
        drop(cache);
        info!(session_id = %session.id, "created session for supplied id");
        Ok(session)
    }

    /// Looks a session up, consulting the cache first and falling back to
    /// the repository. Repository read failures degrade the store and
    /// report a miss rather than an error; in degraded mode the cache is
    /// the only tier consulted.
    pub async fn get(&self, session_id: &str) -> Result<Option<Session>> {
        if let Some(session) = self.cache.read().await.get(session_id) {
            return Ok(Some(session.clone()));
        }

        if self.is_degraded() {
            return Ok(None);
        }

        match self.repository.find_by_id(session_id).await {
            Ok(Some(session)) => {
                self.cache
                    .write()
                    .await
                    .insert(session_id.to_string(), session.clone());
                Ok(Some(session))
            }
            Ok(None) => Ok(None),
            Err(err) => {
                warn!(session_id, error = %err, "session lookup failed, continuing in memory");
                self.degraded.store(true, Ordering::Relaxed);
                Ok(None)
            }
        }
    }

    /// Appends a message to an existing session and writes it through.
    ///
    /// Returns the updated session; a missing session is `NotFound`.
    pub async fn append_message(
        &self,
        session_id: &str,
        message: ConversationMessage,
    ) -> Result<Session> {
        self.mutate(session_id, |session| session.append(message))
            .await
    }

    /// Records that a specialist has participated in the session.
    pub async fn record_specialist(
        &self,
        session_id: &str,
        specialist: SpecialistId,
    ) -> Result<Session> {
        self.mutate(session_id, |session| session.record_specialist(specialist))
            .await
    }

    /// Returns the most recent `limit` messages (all when `None`). A
    /// missing session yields an empty history.
    pub async fn history(
        &self,
        session_id: &str,
        limit: Option<usize>,
    ) -> Result<Vec<ConversationMessage>> {
        Ok(self
            .get(session_id)
            .await?
            .map(|session| session.recent_history(limit).to_vec())
            .unwrap_or_default())
    }

    /// Lists every known session, newest first. In degraded mode only the
    /// cached sessions are visible.
    pub async fn list(&self) -> Result<Vec<Session>> {
        let mut by_id: HashMap<String, Session> = if self.is_degraded() {
            HashMap::new()
        } else {
            match self.repository.list_all().await {
                Ok(sessions) => sessions
                    .into_iter()
                    .map(|session| (session.id.clone(), session))
                    .collect(),
                Err(err) => {
                    warn!(error = %err, "session listing failed, using cache only");
                    self.degraded.store(true, Ordering::Relaxed);
                    HashMap::new()
                }
            }
        };

        // Cached copies are at least as fresh as stored ones.
        for (id, session) in self.cache.read().await.iter() {
            by_id.insert(id.clone(), session.clone());
        }

        let mut sessions: Vec<Session> = by_id.into_values().collect();
        sessions.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(sessions)
    }

    /// Removes sessions idle for longer than `max_age`, from both tiers.
    /// Returns the number of distinct sessions removed. The cutoff is
    /// taken once, so a session touched mid-cleanup is never removed.
    pub async fn cleanup(&self, max_age: Duration) -> Result<usize> {
        let cutoff = Utc::now() - max_age;
        let mut removed: HashSet<String> = HashSet::new();

        {
            let mut cache = self.cache.write().await;
            let stale: Vec<String> = cache
                .iter()
                .filter(|(_, session)| session.updated_at < cutoff)
                .map(|(id, _)| id.clone())
                .collect();
            for id in stale {
                cache.remove(&id);
                removed.insert(id);
            }
        }

        if !self.is_degraded() {
            match self.repository.list_all().await {
                Ok(sessions) => {
                    for session in sessions {
                        if session.updated_at < cutoff {
                            if let Err(err) = self.repository.delete(&session.id).await {
                                warn!(session_id = %session.id, error = %err, "failed to delete stale session");
                                continue;
                            }
                            removed.insert(session.id);
                        }
                    }
                }
                Err(err) => {
                    warn!(error = %err, "stale-session scan failed, cleaned cache only");
                    self.degraded.store(true, Ordering::Relaxed);
                }
            }
        }

        info!(count = removed.len(), "cleaned up idle sessions");
        Ok(removed.len())
    }

    /// Mutates a session and writes it through while still holding the
    /// write lock, so saves reach the repository in mutation order and
    /// the durable copy never regresses behind an acknowledged append.
    async fn mutate<F>(&self, session_id: &str, apply: F) -> Result<Session>
    where
        F: FnOnce(&mut Session),
    {
        let mut cache = self.cache.write().await;
        if !cache.contains_key(session_id) && !self.is_degraded() {
            // Pull a stored session into the cache before mutating.
            if let Ok(Some(session)) = self.repository.find_by_id(session_id).await {
                cache.insert(session_id.to_string(), session);
            }
        }
        let session = cache
            .get_mut(session_id)
            .ok_or_else(|| CounselError::not_found("Session", session_id))?;
        apply(session);
        let updated = session.clone();
        self.persist(&updated).await;
        Ok(updated)
    }

    /// Write-through save. The first failure latches the store into
    /// memory-only mode for the rest of the process; the in-memory copy
    /// is authoritative from then on and the repository is not touched
    /// again.
    async fn persist(&self, session: &Session) {
        if self.is_degraded() {
            return;
        }
        if let Err(err) = self.repository.save(session).await {
            warn!(session_id = %session.id, error = %err, "session save failed, continuing in memory");
            self.degraded.store(true, Ordering::Relaxed);
        }
    }
}
