//! Configuration system for the sandtab file-tab core.
//!
//! This crate provides configuration loading, saving, and default values
//! for the tab strip:
//!
//! - Pinned (required) file name, excluded from drag reordering
//! - Minimum visible-file count before reordering is enabled
//! - Drag-handle affordance toggle

pub mod config;
pub mod error;

// Re-export main types for convenience
pub use config::Config;
pub use error::ConfigError;
