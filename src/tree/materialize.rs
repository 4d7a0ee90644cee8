//! Materializer: realize an in-memory tree onto the real filesystem
//!
//! All-at-once and non-transactional: a failure partway through leaves a
//! partially created tree on disk. Appropriate for one-shot scaffolding,
//! not a sync engine.

use crate::error::FsError;
use crate::tree::{Directory, File, Node};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

impl File {
    /// Write this file under `dir`, which must already exist.
    ///
    /// Binary content wins over text; with neither, an empty file is written.
    pub fn create(&self, dir: &Path) -> Result<PathBuf, FsError> {
        let path = dir.join(self.name());
        fs::write(&path, self.bytes()).map_err(|e| FsError::io(&path, e))?;
        debug!(path = %path.display(), bytes = self.bytes().len(), "wrote file");
        Ok(path)
    }
}

impl Directory {
    /// Realize this tree at `parent/name`.
    ///
    /// Missing ancestors of `parent` are created; the final segment must not
    /// already exist. Entries are written in insertion order. Returns the
    /// path of the created root directory.
    pub fn create(&self, parent: &Path) -> Result<PathBuf, FsError> {
        let root = parent.join(self.name());

        fs::create_dir_all(parent).map_err(|e| FsError::io(parent, e))?;
        fs::create_dir(&root).map_err(|e| match e.kind() {
            std::io::ErrorKind::AlreadyExists => FsError::AlreadyExists(root.clone()),
            _ => FsError::io(&root, e),
        })?;

        self.write_entries(&root)?;
        debug!(path = %root.display(), "materialized directory tree");
        Ok(root)
    }

    fn write_entries(&self, dir: &Path) -> Result<(), FsError> {
        for (name, node) in self.entries() {
            match node {
                Node::File(file) => {
                    // The mapping key is authoritative; a File whose stored
                    // name drifted from its key is still written as the key.
                    let path = dir.join(name);
                    fs::write(&path, file.bytes()).map_err(|e| FsError::io(&path, e))?;
                }
                Node::Directory(sub) => {
                    let path = dir.join(name);
                    fs::create_dir(&path).map_err(|e| match e.kind() {
                        std::io::ErrorKind::AlreadyExists => {
                            FsError::AlreadyExists(path.clone())
                        }
                        _ => FsError::io(&path, e),
                    })?;
                    sub.write_entries(&path)?;
                }
            }
        }
        Ok(())
    }
}
