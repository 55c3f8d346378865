//! Session domain: conversation threads, messages, and the persistence
//! contract.

pub mod message;
pub mod model;
pub mod repository;

pub use message::{ConversationMessage, MessageRole};
pub use model::Session;
pub use repository::SessionRepository;
