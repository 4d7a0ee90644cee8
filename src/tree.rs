//! In-memory filesystem tree
//!
//! An ordered tree of named nodes built up programmatically (or imported from
//! a real directory) and realized onto disk in one pass. Create-once,
//! write-once: no permissions, no symlinks, no incremental sync.

pub mod import;
pub mod materialize;
pub mod node;

pub use node::{Directory, File, Node};

/// Child names excluded from import and render traversal.
///
/// The materializer does NOT consult this list: it writes whatever the
/// in-memory tree contains.
pub const IGNORE: [&str; 4] = [".git", "__pycache__", "env", "venv"];

/// Whether a child name belongs to the ignore set.
pub fn is_ignored(name: &str) -> bool {
    IGNORE.contains(&name)
}
