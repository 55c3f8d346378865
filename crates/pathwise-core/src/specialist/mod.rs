//! Specialist personas: the fixed roles that can answer a student query.

pub mod model;
pub mod preset;

pub use model::{SpecialistId, SpecialistProfile};
pub use preset::{all_profiles, profile_for};
