//! Application layer: the session store and the query orchestrator.

pub mod counselor_service;
pub mod session_store;

pub use counselor_service::{CounselMetadata, CounselOutcome, CounselStatus, CounselorService};
pub use session_store::SessionStore;
