//! HTTP API server

pub mod events;
pub mod notes;
pub mod routes;
pub mod server;

pub use server::*;
