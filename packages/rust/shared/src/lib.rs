//! Shared types, error model, and configuration for vstheme.
//!
//! This crate is the foundation depended on by all other vstheme crates.
//! It provides:
//! - [`VsthemeError`], the unified error type
//! - Domain types ([`DocMap`], [`ColorMap`], [`MergedRecord`], [`MergedMap`])
//! - Configuration ([`AppConfig`], [`ExportConfig`], config loading)

pub mod config;
pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::{
    AppConfig, ExportConfig, PathsConfig, PreviewConfig, config_dir, config_file_path,
    init_config, load_config, load_config_from,
};
pub use error::{Result, VsthemeError};
pub use types::{ColorMap, DocMap, MergedMap, MergedRecord};
