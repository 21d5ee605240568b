//! Project-store collaborator for the live-mounted `~/projects` subtree.
//!
//! The static filesystem table lists the project directories by name but
//! does not contain their contents; `ls` and `cat` fetch those through this
//! interface when a resolved path falls under the mount and misses the
//! static table.

use std::collections::BTreeMap;

use crate::error::{Error, Result};

/// Root of the live-mounted subtree, as a normalized absolute path.
pub const PROJECTS_MOUNT: &str = "~/projects";

/// One entry of a live directory listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectEntry {
    /// Entry name (no path components).
    pub name: String,
    /// Whether the entry is a directory.
    pub is_directory: bool,
    /// Size in bytes as reported by the collaborator.
    pub size: u64,
}

/// Directory-listing and file-content lookup under the projects mount.
///
/// Paths are relative to the mount root (`""` is the mount itself,
/// `"config-pusher"` a project, `"config-pusher/README.md"` a file).
pub trait ProjectStore {
    /// List a directory, directories first, alphabetical within each group.
    fn list_dir(&self, relative: &str) -> Result<Vec<ProjectEntry>>;

    /// Read a file's content lines.
    fn read_file(&self, relative: &str) -> Result<Vec<String>>;
}

/// Canned project store used by the demo shell.
#[derive(Clone, Debug, Default)]
pub struct StaticProjectStore {
    dirs: BTreeMap<String, Vec<String>>,
    files: BTreeMap<String, Vec<String>>,
}

impl StaticProjectStore {
    /// The demo project trees: each project holds a README plus a source
    /// stub, enough for `ls`/`cat` exploration.
    #[must_use]
    pub fn portfolio() -> Self {
        let mut store = Self::default();
        store.add_project(
            "config-pusher",
            &[
                "CONFIG PUSHER",
                "=============",
                "",
                "Push reviewed configuration bundles to fleets of network",
                "devices with dry-run diffing and staged rollout.",
                "",
                "Stack: Rust, SSH, Jinja-style templates",
            ],
        );
        store.add_project(
            "topology-mapper",
            &[
                "TOPOLOGY MAPPER",
                "===============",
                "",
                "Discovers L2/L3 topology from LLDP and routing tables and",
                "renders an interactive map.",
                "",
                "Stack: Go, SNMP, D3",
            ],
        );
        store.add_project(
            "latency-atlas",
            &[
                "LATENCY ATLAS",
                "=============",
                "",
                "Continuous mesh latency measurements between sites, with",
                "percentile heatmaps and regression alerts.",
                "",
                "Stack: Rust, PostgreSQL, Grafana",
            ],
        );
        store.add_project(
            "portfolio",
            &[
                "INTERACTIVE PORTFOLIO",
                "=====================",
                "",
                "This terminal! A simulated shell over a read-only virtual",
                "filesystem, with draggable section windows.",
                "",
                "Stack: Rust core, web front end",
            ],
        );
        store
    }

    fn add_project(&mut self, name: &str, readme: &[&str]) {
        self.dirs
            .entry(String::new())
            .or_default()
            .push(name.to_string());
        self.dirs
            .insert(name.to_string(), vec!["README.md".to_string(), "src".to_string()]);
        self.dirs.insert(format!("{name}/src"), vec!["main.rs".to_string()]);
        self.files.insert(
            format!("{name}/README.md"),
            readme.iter().map(|l| (*l).to_string()).collect(),
        );
        self.files.insert(
            format!("{name}/src/main.rs"),
            vec![
                "fn main() {".to_string(),
                "    // See README.md for the real thing.".to_string(),
                "}".to_string(),
            ],
        );
    }
}

impl ProjectStore for StaticProjectStore {
    fn list_dir(&self, relative: &str) -> Result<Vec<ProjectEntry>> {
        let children = self
            .dirs
            .get(relative)
            .ok_or_else(|| Error::NoSuchPath(relative.to_string()))?;

        let mut entries: Vec<ProjectEntry> = children
            .iter()
            .map(|name| {
                let child = if relative.is_empty() {
                    name.clone()
                } else {
                    format!("{relative}/{name}")
                };
                if let Some(lines) = self.files.get(&child) {
                    ProjectEntry {
                        name: name.clone(),
                        is_directory: false,
                        size: lines.iter().map(|l| l.len() as u64 + 1).sum(),
                    }
                } else {
                    ProjectEntry {
                        name: name.clone(),
                        is_directory: true,
                        size: 4096,
                    }
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

    fn read_file(&self, relative: &str) -> Result<Vec<String>> {
        if let Some(lines) = self.files.get(relative) {
            return Ok(lines.clone());
        }
        if self.dirs.contains_key(relative) {
            return Err(Error::NotAFile(relative.to_string()));
        }
        Err(Error::NoSuchPath(relative.to_string()))
    }
}
