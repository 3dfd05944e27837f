//! Landing Sections
//!
//! Static sections of the page, top to bottom.

pub mod about;
pub mod contact;
pub mod footer;
pub mod hero;
pub mod showcase;

pub use about::About;
pub use contact::Contact;
pub use footer::{Footer, WhatsAppButton};
pub use hero::{CtaStrip, Hero};
pub use showcase::{Portfolio, Services, Testimonials};
