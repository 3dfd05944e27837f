//! # Jepto
//!
//! Static host for the Jepto Enterprises single-page site. The site itself
//! lives in `jepto-ui/` (Leptos, compiled to WebAssembly); this crate serves
//! the compiled bundle.
//!
//! ## Features
//!
//! - **Static hosting**: files from the dist directory with SPA fallback
//! - **Health probes**: liveness, readiness (bundle present) and full status
//! - **Layered config**: TOML file, environment overrides, CLI flags
//! - **Structured logging**: pretty or JSON output via `tracing`
//!
//! ## Modules
//!
//! - [`config`]: Configuration loading
//! - [`server`]: Axum router and server loop
//! - [`logging`]: Tracing subscriber setup

pub mod config;
pub mod logging;
pub mod server;

pub use config::{Config, ConfigError, LogFormat, LoggingConfig, ServerConfig, SiteConfig};
pub use server::{build_router, serve, AppState, ServerError, ServerResult};
