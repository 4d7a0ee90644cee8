//! Stencil: Project Scaffolding and Tree Visualization
//!
//! Materializes template-driven directory trees onto disk, imports existing
//! directories into an in-memory tree model, and renders colorized visual
//! tree listings.

pub mod config;
pub mod error;
pub mod logging;
pub mod provision;
pub mod render;
pub mod template;
pub mod tooling;
pub mod tree;
