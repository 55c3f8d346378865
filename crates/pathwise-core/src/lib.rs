//! Domain layer for the Pathwise transfer counseling system.
//!
//! Holds the pieces with no I/O of their own: the shared error type, the
//! configuration model, the session and specialist domain models, the
//! keyword router, and the context assembler. Storage and external
//! collaborators live in the infrastructure and interaction crates.

pub mod config;
pub mod context;
pub mod error;
pub mod routing;
pub mod session;
pub mod specialist;

// Re-export common error type
pub use error::{CounselError, Result};
