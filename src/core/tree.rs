//! A metadata tree read from a directory on disk.
//!
//! [DirTree] treats a host directory (for example an unpacked metadata snapshot) as the root of
//! the tree `ls` browses. Paths are tree paths: `/`-separated, rooted at that directory, with
//! `.` and `..` folded away. `..` never climbs above the root.

use crate::core::node::{Node, Resolve};

use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Resolver backed by a host directory.
#[derive(Debug, Clone)]
pub struct DirTree {
    root: PathBuf,
    show_hidden: bool,
    sort: bool,
    case_insensitive: bool,
}

impl DirTree {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        DirTree {
            root: root.into(),
            show_hidden: true,
            sort: true,
            case_insensitive: true,
        }
    }

    /// Whether dot-prefixed children are listed.
    pub fn show_hidden(mut self, show_hidden: bool) -> Self {
        self.show_hidden = show_hidden;
        self
    }

    /// Whether children are sorted by name. Unsorted children come in whatever order the
    /// host filesystem returns them.
    pub fn sort(mut self, sort: bool) -> Self {
        self.sort = sort;
        self
    }

    pub fn case_insensitive(mut self, case_insensitive: bool) -> Self {
        self.case_insensitive = case_insensitive;
        self
    }

    #[inline]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Maps a tree path onto the host path below the root.
    pub fn host_path(&self, pattern: &str) -> PathBuf {
        let mut path = self.root.clone();
        for component in normalize(pattern) {
            path.push(component);
        }
        path
    }

    /// Reads the child names of a directory, filtered and ordered per this tree's settings.
    pub fn children(&self, dir: &Path) -> io::Result<Vec<String>> {
        let mut names = Vec::with_capacity(64);
        for entry in fs::read_dir(dir)? {
            let entry = match entry {
                Ok(e) => e,
                Err(_) => continue,
            };
            let name = entry.file_name();
            if !self.show_hidden && is_hidden(&name) {
                continue;
            }
            names.push(name.to_string_lossy().into_owned());
        }
        if self.sort {
            if self.case_insensitive {
                names.sort_by_cached_key(|n| n.to_lowercase());
            } else {
                names.sort();
            }
        }
        Ok(names)
    }
}

impl Resolve for DirTree {
    fn resolve(&self, pattern: &str) -> Option<Node> {
        let path = self.host_path(pattern);
        // Follows symlinks; a broken link still exists as a leaf.
        let is_dir = match fs::metadata(&path) {
            Ok(md) => md.is_dir(),
            Err(_) if fs::symlink_metadata(&path).is_ok() => false,
            Err(e) => {
                tracing::trace!(pattern, error = %e, "no tree node");
                return None;
            }
        };
        if !is_dir {
            return Some(Node::File);
        }
        match self.children(&path) {
            Ok(children) => Some(Node::Directory { children }),
            Err(e) => {
                tracing::debug!(
                    pattern,
                    path = %path.display(),
                    error = %e,
                    "unreadable directory"
                );
                None
            }
        }
    }
}

/// Splits a tree path into components, folding `.` and `..`.
pub fn normalize(pattern: &str) -> Vec<&str> {
    let mut components = Vec::new();
    for part in pattern.split('/') {
        match part {
            "" | "." => {}
            ".." => {
                components.pop();
            }
            name => components.push(name),
        }
    }
    components
}

fn is_hidden(name: &OsStr) -> bool {
    #[cfg(unix)]
    {
        use std::os::unix::ffi::OsStrExt;
        name.as_bytes().first() == Some(&b'.')
    }
    #[cfg(not(unix))]
    {
        name.to_string_lossy().starts_with('.')
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use tempfile::TempDir;

    #[test]
    fn normalize_folds_dots() {
        assert!(normalize(".").is_empty());
        assert!(normalize("").is_empty());
        assert!(normalize("/").is_empty());
        assert_eq!(normalize("/brokers/./0"), vec!["brokers", "0"]);
        assert_eq!(normalize("topics/../brokers//1"), vec!["brokers", "1"]);
        assert!(normalize("../../..").is_empty());
    }

    #[test]
    fn resolve_kinds() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = TempDir::new()?;
        fs::create_dir(tmp.path().join("brokers"))?;
        File::create(tmp.path().join("brokers").join("0"))?;

        let tree = DirTree::new(tmp.path());
        assert_eq!(tree.resolve("brokers"), Some(Node::directory(["0"])));
        assert_eq!(tree.resolve("/brokers/0"), Some(Node::File));
        assert_eq!(tree.resolve("brokers/1"), None);
        Ok(())
    }

    #[test]
    fn dotdot_stays_inside_root() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = TempDir::new()?;
        let root = tmp.path().join("root");
        fs::create_dir(&root)?;
        File::create(tmp.path().join("outside"))?;

        let tree = DirTree::new(&root);
        assert_eq!(tree.resolve("../outside"), None);
        assert_eq!(tree.host_path("../.."), root);
        Ok(())
    }

    #[test]
    fn children_sorting_and_hidden() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = TempDir::new()?;
        for name in ["beta", "Alpha", ".hidden", "gamma"] {
            File::create(tmp.path().join(name))?;
        }

        let tree = DirTree::new(tmp.path());
        assert_eq!(
            tree.children(tmp.path())?,
            vec![".hidden", "Alpha", "beta", "gamma"]
        );

        let tree = tree.show_hidden(false).case_insensitive(false);
        assert_eq!(tree.children(tmp.path())?, vec!["Alpha", "beta", "gamma"]);
        Ok(())
    }

    #[test]
    fn browse_nonexistent() {
        let tree = DirTree::new("/path/does/not/exist");
        assert!(tree.children(Path::new("/path/does/not/exist")).is_err());
        assert_eq!(tree.resolve("."), None);
    }
}
