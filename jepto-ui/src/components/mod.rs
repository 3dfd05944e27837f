//! UI Components
//!
//! Reusable Leptos components for the landing page.

pub mod cards;
pub mod icons;
pub mod nav;
pub mod toast;

pub use cards::{ProjectTile, ReasonItem, ServiceCard, TestimonialCard};
pub use icons::{Icon, IconKind};
pub use nav::Nav;
pub use toast::Toast;
