//! Daybook - personal notes and calendar backend
//!
//! This is the library interface for Daybook: a JWT-authenticated HTTP/JSON
//! API for notes (with tags and pinning) and calendar events, backed by
//! PostgreSQL.

pub mod api;
pub mod auth;
pub mod cli;
pub mod config;
pub mod error;
pub mod store;

pub use config::Config;
pub use error::Error;
pub use store::Store;
