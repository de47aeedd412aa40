//! user-dashboard - Storage layer for the user CRUD dashboard
//!
//! This crate owns the "users" collection: a flat mapping from a
//! caller-supplied integer id to a name, persisted in SQLite or
//! PostgreSQL. HTTP concerns live in the companion
//! `user-dashboard-axum` crate.

mod storage;
mod users;

pub use storage::{DataStore, DataStoreConfig, StorageError};
pub use users::{User, UserError, UserStore};
