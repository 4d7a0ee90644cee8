//! Importer: build an in-memory tree from a real directory
//!
//! Ignore-set names are skipped entirely; every surviving file is read fully
//! into memory as binary content. Errors propagate immediately — a partial
//! import could silently scaffold from incomplete data.

use crate::error::FsError;
use crate::tree::{is_ignored, Directory, File, Node};
use std::fs;
use std::path::Path;
use tracing::debug;

impl Directory {
    /// Import a real directory into a new in-memory tree.
    ///
    /// The returned root is named after `dir_path`'s final path component.
    /// Entry order is whatever the directory-listing API yields; it is not
    /// sorted.
    pub fn from_path(dir_path: &Path) -> Result<Directory, FsError> {
        let meta = fs::metadata(dir_path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound(dir_path.to_path_buf()),
            _ => FsError::io(dir_path, e),
        })?;
        if !meta.is_dir() {
            return Err(FsError::NotADirectory(dir_path.to_path_buf()));
        }

        let name = dir_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let mut directory = Directory::new(name);
        import_entries(&mut directory, dir_path)?;
        debug!(path = %dir_path.display(), entries = directory.len(), "imported directory");
        Ok(directory)
    }
}

fn import_entries(directory: &mut Directory, dir_path: &Path) -> Result<(), FsError> {
    for entry in fs::read_dir(dir_path).map_err(|e| FsError::io(dir_path, e))? {
        let entry = entry.map_err(|e| FsError::io(dir_path, e))?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if is_ignored(&name) {
            continue;
        }

        let path = entry.path();
        if path.is_dir() {
            let mut sub = Directory::new(name.clone());
            import_entries(&mut sub, &path)?;
            directory.insert(&name, Node::Directory(sub));
        } else {
            let bytes = fs::read(&path).map_err(|e| FsError::io(&path, e))?;
            directory.insert(&name, Node::File(File::binary(name.clone(), bytes)));
        }
    }
    Ok(())
}
