//! Routes
//!
//! Handlers for the host's own endpoints. Everything else is a static file.

pub mod health;
