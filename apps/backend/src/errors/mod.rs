//! Error handling for the rebound backend.

pub mod domain;

pub use domain::DomainError;
