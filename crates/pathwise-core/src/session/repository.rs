//! Session repository trait.
//!
//! Defines the interface for session persistence operations.

use super::model::Session;
use crate::error::Result;
use async_trait::async_trait;

/// An abstract repository for managing session persistence.
///
/// This trait defines the contract for persisting and retrieving sessions,
/// decoupling the application's core logic from the specific storage
/// mechanism (e.g., TOML files, a database table, a remote API). The single
/// property implementations must provide is synchronous write
/// acknowledgment: when `save` returns `Ok`, the session is durable.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Finds a session by its ID.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Session))`: Session found
    /// - `Ok(None)`: Session not found
    /// - `Err(_)`: Error occurred during retrieval
    async fn find_by_id(&self, session_id: &str) -> Result<Option<Session>>;

    /// Saves a session to storage, replacing any previous record.
    async fn save(&self, session: &Session) -> Result<()>;

    /// Deletes a session from storage. Deleting a session that does not
    /// exist is not an error.
    async fn delete(&self, session_id: &str) -> Result<()>;

    /// Lists all stored sessions, most recently updated first.
    async fn list_all(&self) -> Result<Vec<Session>>;
}
