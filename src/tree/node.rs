//! Tree node types: File, Directory, and the Node sum type

pub(crate) const UNTITLED_FILE: &str = "untitled_file";
pub(crate) const UNTITLED_DIRECTORY: &str = "untitled_directory";

/// Leaf node: a file with optional text or binary payload.
///
/// If binary content is present it takes precedence over text content when
/// writing; if neither is present the file is realized empty.
#[derive(Debug, Clone, Default)]
pub struct File {
    name: String,
    text: Option<String>,
    binary: Option<Vec<u8>>,
}

impl File {
    /// Create a file node. An empty `name` falls back to `"untitled_file"`.
    pub fn new(
        name: impl Into<String>,
        text: Option<String>,
        binary: Option<Vec<u8>>,
    ) -> Self {
        File {
            name: fallback(name.into(), UNTITLED_FILE),
            text,
            binary,
        }
    }

    /// Create a file node holding only text content.
    pub fn text(name: impl Into<String>, content: impl Into<String>) -> Self {
        File::new(name, Some(content.into()), None)
    }

    /// Create a file node holding only binary content.
    pub fn binary(name: impl Into<String>, content: Vec<u8>) -> Self {
        File::new(name, None, Some(content))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the node. The empty-name fallback applies here too.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = fallback(name.into(), UNTITLED_FILE);
    }

    pub fn text_content(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn binary_content(&self) -> Option<&[u8]> {
        self.binary.as_deref()
    }

    /// The bytes this file will be realized with: binary content wins over
    /// text, and an empty payload stands in for neither.
    pub fn bytes(&self) -> &[u8] {
        if let Some(ref b) = self.binary {
            b
        } else if let Some(ref t) = self.text {
            t.as_bytes()
        } else {
            &[]
        }
    }
}

/// Internal node: a directory owning an ordered name → child mapping.
///
/// Entry keys are unique per directory (last write wins) and insertion order
/// is preserved; it determines both materialization and rendering order.
#[derive(Debug, Clone, Default)]
pub struct Directory {
    name: String,
    entries: Vec<(String, Node)>,
}

impl Directory {
    /// Create an empty directory. An empty `name` falls back to
    /// `"untitled_directory"`.
    pub fn new(name: impl Into<String>) -> Self {
        Directory {
            name: fallback(name.into(), UNTITLED_DIRECTORY),
            entries: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the node. The empty-name fallback applies here too.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = fallback(name.into(), UNTITLED_DIRECTORY);
    }

    /// Insert or replace a File entry named `name`.
    ///
    /// The mapping key is stored verbatim; only the File's own stored name
    /// gets the empty-string fallback. Replacing keeps the entry's position
    /// in the order.
    pub fn add_file(&mut self, name: &str, text: Option<String>, binary: Option<Vec<u8>>) {
        self.insert(name, Node::File(File::new(name, text, binary)));
    }

    /// Insert or replace an empty Directory entry named `name`.
    pub fn add_directory(&mut self, name: &str) {
        self.insert(name, Node::Directory(Directory::new(name)));
    }

    /// Insert or replace an arbitrary node under `name`.
    ///
    /// Used by the importer to attach recursively built subtrees.
    pub fn insert(&mut self, name: &str, node: Node) {
        match self.entries.iter_mut().find(|(key, _)| key == name) {
            Some((_, slot)) => *slot = node,
            None => self.entries.push((name.to_string(), node)),
        }
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[(String, Node)] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Look up a child by name.
    pub fn get(&self, name: &str) -> Option<&Node> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, node)| node)
    }

    /// Mutable access to a child directory, for nested assembly.
    pub fn dir_mut(&mut self, name: &str) -> Option<&mut Directory> {
        self.entries
            .iter_mut()
            .find(|(key, _)| key == name)
            .and_then(|(_, node)| match node {
                Node::Directory(dir) => Some(dir),
                Node::File(_) => None,
            })
    }
}

/// A tree node: either a file leaf or a directory subtree.
///
/// Closed sum type; every consumption site (materialize, render, import)
/// matches exhaustively on it.
#[derive(Debug, Clone)]
pub enum Node {
    File(File),
    Directory(Directory),
}

impl Node {
    pub fn is_dir(&self) -> bool {
        matches!(self, Node::Directory(_))
    }
}

/// Empty-string-only fallback. Any other name, however odd, is kept verbatim.
fn fallback(name: String, sentinel: &str) -> String {
    if name.is_empty() {
        sentinel.to_string()
    } else {
        name
    }
}
