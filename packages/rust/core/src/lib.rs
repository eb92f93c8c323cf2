//! Core pipeline and domain logic for vstheme.
//!
//! This crate ties bullet-key extraction, merging, and table projection into
//! the end-to-end export workflow (`pipeline::export_colors_with_meaning`).

pub mod merge;
pub mod pipeline;
pub mod table;
