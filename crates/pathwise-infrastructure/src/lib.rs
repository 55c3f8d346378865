//! Infrastructure layer: durable storage and configuration loading.
//!
//! Implements the persistence contracts defined in `pathwise-core`
//! against local TOML files.

pub mod config_service;
pub mod storage;
pub mod toml_session_repository;

pub use toml_session_repository::TomlSessionRepository;
