//! Realtime snapshot publication.

pub mod hub;

pub use hub::SnapshotHub;
