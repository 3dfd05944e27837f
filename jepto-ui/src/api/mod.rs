//! External Services
//!
//! The only outbound integration is the contact form relay.

pub mod contact;

pub use contact::{ContactCategory, ContactSubmission, FORM_ENDPOINT};
