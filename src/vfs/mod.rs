//! Read-only virtual filesystem.
//!
//! A static, hand-authored tree of directories and files addressed by
//! normalized path strings (`~`, `~/about`, `~/about/whoami.txt`). The tree
//! is built once at interpreter start-up and never mutated; there are no
//! create, delete, or write operations. It stands in for a real filesystem
//! purely for the demo shell experience.

mod portfolio;

use std::collections::BTreeMap;

use crate::error::{Error, Result};

/// The filesystem root path.
pub const ROOT: &str = "~";

/// A node in the virtual filesystem.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NodeKind {
    /// A directory with child entry names in declared order.
    Directory { children: Vec<String> },
    /// A file with literal text content as ordered lines.
    File { lines: Vec<String> },
}

impl NodeKind {
    /// Check if this node is a directory.
    #[must_use]
    pub fn is_directory(&self) -> bool {
        matches!(self, Self::Directory { .. })
    }
}

/// A directory entry as rendered by `ls`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DirEntry {
    /// Entry name (no path components).
    pub name: String,
    /// Whether the entry is a directory.
    pub is_directory: bool,
    /// Synthetic size in bytes (cosmetic, for long listings).
    pub size: u64,
}

/// The static virtual filesystem table.
#[derive(Clone, Debug, Default)]
pub struct VirtualFs {
    nodes: BTreeMap<String, NodeKind>,
}

impl VirtualFs {
    /// Create an empty filesystem containing only the root directory.
    #[must_use]
    pub fn new() -> Self {
        let mut nodes = BTreeMap::new();
        nodes.insert(ROOT.to_string(), NodeKind::Directory { children: Vec::new() });
        Self { nodes }
    }

    /// Add a directory at `path` (builder-style, start-up only).
    ///
    /// `path` must be a normalized absolute path whose parent already exists.
    pub fn with_directory(mut self, path: &str, children: &[&str]) -> Self {
        self.insert(
            path,
            NodeKind::Directory {
                children: children.iter().map(|c| (*c).to_string()).collect(),
            },
        );
        self
    }

    /// Add a file at `path` with the given content lines (start-up only).
    pub fn with_file(mut self, path: &str, lines: &[&str]) -> Self {
        self.insert(
            path,
            NodeKind::File {
                lines: lines.iter().map(|l| (*l).to_string()).collect(),
            },
        );
        self
    }

    fn insert(&mut self, path: &str, node: NodeKind) {
        debug_assert!(
            path == ROOT || self.nodes.contains_key(parent_of(path)),
            "parent of {path} must exist before insertion"
        );
        self.nodes.insert(path.to_string(), node);
    }

    /// Normalize `target` against `cwd` without checking existence.
    ///
    /// Resolution rules:
    /// - `~` or empty input resolves to the root.
    /// - A leading `~/` makes the remainder root-relative.
    /// - `.` leaves the current segment unchanged; `..` moves to the parent,
    ///   failing with `PermissionDenied` at the root.
    /// - Anything else is joined onto `cwd` segment by segment.
    pub fn normalize(target: &str, cwd: &str) -> Result<String> {
        let target = target.trim();
        if target.is_empty() || target == ROOT {
            return Ok(ROOT.to_string());
        }

        let (mut current, rest) = if let Some(rest) = target.strip_prefix("~/") {
            (ROOT.to_string(), rest)
        } else {
            (cwd.to_string(), target)
        };

        for segment in rest.split('/') {
            match segment {
                "" | "." => {}
                ".." => {
                    if current == ROOT {
                        return Err(Error::PermissionDenied);
                    }
                    current = parent_of(&current).to_string();
                }
                name => {
                    current = join(&current, name);
                }
            }
        }
        Ok(current)
    }

    /// Resolve `target` against `cwd` to an existing node's path.
    pub fn resolve(&self, target: &str, cwd: &str) -> Result<String> {
        let path = Self::normalize(target, cwd)?;
        if self.nodes.contains_key(&path) {
            Ok(path)
        } else {
            Err(Error::NoSuchPath(target.trim().to_string()))
        }
    }

    /// Check whether a normalized path exists in the table.
    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        self.nodes.contains_key(path)
    }

    /// Check whether a normalized path exists and is a directory.
    #[must_use]
    pub fn is_directory(&self, path: &str) -> bool {
        self.nodes.get(path).is_some_and(NodeKind::is_directory)
    }

    /// List a directory's entries: directories first, alphabetical within
    /// each group. The ordering is a display contract computed per call,
    /// not stored in the table.
    pub fn list(&self, path: &str) -> Result<Vec<DirEntry>> {
        let node = self
            .nodes
            .get(path)
            .ok_or_else(|| Error::NoSuchPath(path.to_string()))?;
        let NodeKind::Directory { children } = node else {
            return Err(Error::NotADirectory(path.to_string()));
        };

        let mut entries: Vec<DirEntry> = children
            .iter()
            .map(|name| {
                let child_path = join(path, name);
                match self.nodes.get(&child_path) {
                    Some(NodeKind::Directory { .. }) | None => DirEntry {
                        name: name.clone(),
                        // Children absent from the table are live-mounted
                        // directories (the projects subtree).
                        is_directory: true,
                        size: 4096,
                    },
                    Some(NodeKind::File { lines }) => DirEntry {
                        name: name.clone(),
                        is_directory: false,
                        size: synthetic_size(lines),
                    },
                }
            })
            .collect();

        entries.sort_by(|a, b| {
            b.is_directory
                .cmp(&a.is_directory)
                .then_with(|| a.name.cmp(&b.name))
        });
        Ok(entries)
    }

    /// Read a file's content lines.
    pub fn read(&self, path: &str) -> Result<&[String]> {
        match self.nodes.get(path) {
            Some(NodeKind::File { lines }) => Ok(lines),
            Some(NodeKind::Directory { .. }) => Err(Error::NotAFile(path.to_string())),
            None => Err(Error::NoSuchPath(path.to_string())),
        }
    }
}

/// Join a child name onto a normalized directory path.
#[must_use]
pub fn join(dir: &str, name: &str) -> String {
    if dir == ROOT {
        format!("~/{name}")
    } else {
        format!("{dir}/{name}")
    }
}

/// Parent of a normalized non-root path.
#[must_use]
pub fn parent_of(path: &str) -> &str {
    path.rsplit_once('/').map_or(ROOT, |(parent, _)| parent)
}

fn synthetic_size(lines: &[String]) -> u64 {
    lines.iter().map(|l| l.len() as u64 + 1).sum()
}
