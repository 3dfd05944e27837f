//! Jepto Enterprises
//!
//! Single-page site for a real-estate company, built with Leptos (WASM).
//!
//! # Features
//!
//! - Navbar that turns opaque once the page scrolls past the hero
//! - Mobile menu overlay
//! - Smooth scrolling to in-page sections, clear of the fixed navbar
//! - Contact form posted to an external form relay
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. The bundle is static and can be served by any web server,
//! including the `jepto` host in the parent package.

use leptos::*;

mod api;
mod app;
mod components;
mod content;
mod navigation;
mod pages;
mod sections;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
