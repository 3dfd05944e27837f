//! State Management
//!
//! Navbar flags and toast messages.

pub mod global;
pub mod nav;

pub use global::{provide_view_state, use_view_state, ViewState};
