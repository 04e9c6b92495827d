//! Kernel utilities shared across the reference apps.
//! Keep this crate lightweight; it re-exports helpers for config loading, responses and the
//! process entry point.
//!
//! ## Config loading
//! ```rust,no_run
//! use slref_kernel::config::load_config;
//! use slref_kernel::domain::config::AppConfig;
//!
//! let cfg: AppConfig = load_config(Some("slref")).unwrap_or_default();
//! assert!(cfg.server_port > 0);
//! ```
pub mod config;
pub mod server;

pub use slref_domain as domain;
