//! Tree renderer
//!
//! Produces a deterministic, prefix-based visual tree with per-kind and
//! per-extension coloring. Two interchangeable entry points share one
//! formatting function: [`tree_lines`] walks the in-memory model and
//! [`tree_from_path`] streams a real directory without materializing it.
//! Plain-text accessors are the colorized lines with ANSI escapes stripped,
//! never a separate code path.

pub mod palette;

use crate::error::FsError;
use crate::tree::{is_ignored, Directory, Node};
use owo_colors::OwoColorize;
use palette::EntryKind;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Connector for a non-last sibling.
pub const BRANCH: &str = "├── ";
/// Connector for the last sibling.
pub const LAST: &str = "└── ";
/// Continuation under a non-last ancestor.
pub const PIPE: &str = "│   ";
/// Continuation under a last ancestor.
pub const SPACE: &str = "    ";

/// Format one entry line. Both render paths funnel through here so the
/// in-memory and streaming outputs cannot diverge.
fn format_entry(prefix: &str, last: bool, name: &str, kind: EntryKind) -> String {
    let connector = if last { LAST } else { BRANCH };
    let label = name.style(palette::style_for(kind, name));
    format!("{prefix}{connector}{label}")
}

fn child_prefix(prefix: &str, last: bool) -> String {
    format!("{prefix}{}", if last { SPACE } else { PIPE })
}

// 7-bit C1 ANSI escapes: ESC + Fe byte, or ESC [ params intermediates final.
const ANSI_PATTERN: &str = r"\x1B(?:[@-Z\\-_]|\[[0-?]*[ -/]*[@-~])";

/// Remove every ANSI escape sequence from a rendered line.
pub fn strip_ansi(line: &str) -> String {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(ANSI_PATTERN).expect("ANSI pattern is valid"));
    re.replace_all(line, "").into_owned()
}

/// Colorized lines for an in-memory tree, lazily, one per non-ignored entry.
///
/// Restartable: call again to re-walk from scratch.
pub fn tree_lines(dir: &Directory) -> TreeLines<'_> {
    TreeLines {
        stack: vec![MemFrame::enter(String::new(), dir)],
    }
}

/// Plain-text lines for an in-memory tree: [`tree_lines`] with escapes
/// stripped.
pub fn plain_lines(dir: &Directory) -> impl Iterator<Item = String> + '_ {
    tree_lines(dir).map(|line| strip_ansi(&line))
}

/// Depth-first line iterator over the in-memory model.
pub struct TreeLines<'a> {
    stack: Vec<MemFrame<'a>>,
}

struct MemFrame<'a> {
    prefix: String,
    entries: Vec<&'a (String, Node)>,
    idx: usize,
}

impl<'a> MemFrame<'a> {
    fn enter(prefix: String, dir: &'a Directory) -> Self {
        // Filter before connector assignment so an ignored final entry can
        // never leave its predecessor with a branch connector.
        let entries = dir
            .entries()
            .iter()
            .filter(|(name, _)| !is_ignored(name))
            .collect();
        MemFrame {
            prefix,
            entries,
            idx: 0,
        }
    }
}

impl<'a> Iterator for TreeLines<'a> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            let frame = self.stack.last_mut()?;
            if frame.idx >= frame.entries.len() {
                self.stack.pop();
                continue;
            }
            let entry: &'a (String, Node) = frame.entries[frame.idx];
            let (name, node) = (&entry.0, &entry.1);
            let last = frame.idx + 1 == frame.entries.len();
            let prefix = frame.prefix.clone();
            frame.idx += 1;

            let line = match node {
                Node::File(_) => format_entry(&prefix, last, name, EntryKind::File),
                Node::Directory(sub) => {
                    let line = format_entry(&prefix, last, name, EntryKind::Directory);
                    self.stack
                        .push(MemFrame::enter(child_prefix(&prefix, last), sub));
                    line
                }
            };
            return Some(line);
        }
    }
}

/// Colorized lines streamed directly from a real directory.
///
/// Nothing is materialized in memory beyond one directory listing per open
/// level. A read error during streaming aborts the render: the failing call
/// yields `Err` and the iterator is exhausted afterwards.
pub fn tree_from_path(dir_path: &Path) -> Result<DiskTreeLines, FsError> {
    let meta = fs::metadata(dir_path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => FsError::NotFound(dir_path.to_path_buf()),
        _ => FsError::io(dir_path, e),
    })?;
    if !meta.is_dir() {
        return Err(FsError::NotADirectory(dir_path.to_path_buf()));
    }
    let root = DiskFrame::enter(String::new(), dir_path)?;
    Ok(DiskTreeLines { stack: vec![root] })
}

/// Plain-text streaming render: [`tree_from_path`] with escapes stripped.
pub fn plain_from_path(
    dir_path: &Path,
) -> Result<impl Iterator<Item = Result<String, FsError>>, FsError> {
    Ok(tree_from_path(dir_path)?.map(|line| line.map(|l| strip_ansi(&l))))
}

/// Depth-first line iterator streamed from disk.
pub struct DiskTreeLines {
    stack: Vec<DiskFrame>,
}

struct DiskFrame {
    prefix: String,
    entries: Vec<(String, PathBuf, bool)>,
    idx: usize,
}

impl DiskFrame {
    fn enter(prefix: String, dir_path: &Path) -> Result<Self, FsError> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(dir_path).map_err(|e| FsError::io(dir_path, e))? {
            let entry = entry.map_err(|e| FsError::io(dir_path, e))?;
            let name = entry.file_name().to_string_lossy().into_owned();
            if is_ignored(&name) {
                continue;
            }
            let path = entry.path();
            let is_dir = path.is_dir();
            entries.push((name, path, is_dir));
        }
        Ok(DiskFrame {
            prefix,
            entries,
            idx: 0,
        })
    }
}

impl Iterator for DiskTreeLines {
    type Item = Result<String, FsError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let frame = self.stack.last_mut()?;
            if frame.idx >= frame.entries.len() {
                self.stack.pop();
                continue;
            }
            let last = frame.idx + 1 == frame.entries.len();
            let (name, path, is_dir) = frame.entries[frame.idx].clone();
            let prefix = frame.prefix.clone();
            frame.idx += 1;

            let kind = if is_dir {
                EntryKind::Directory
            } else {
                EntryKind::File
            };
            let line = format_entry(&prefix, last, &name, kind);
            if is_dir {
                match DiskFrame::enter(child_prefix(&prefix, last), &path) {
                    Ok(sub) => self.stack.push(sub),
                    Err(e) => {
                        self.stack.clear();
                        return Some(Err(e));
                    }
                }
            }
            return Some(Ok(line));
        }
    }
}

/// The plain-text render, for `{}` formatting: exactly the colorized lines
/// with escapes stripped, joined by newlines.
impl std::fmt::Display for Directory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, line) in plain_lines(self).enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            f.write_str(&line)?;
        }
        Ok(())
    }
}
