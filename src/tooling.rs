//! CLI tooling
//!
//! Command-line surface for scaffolding and tree rendering.

pub mod cli;
