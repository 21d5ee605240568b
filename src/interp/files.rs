//! Filesystem verbs: `ls`, `cd`, `cat`.
//!
//! Static paths come from the virtual filesystem table; paths under the
//! `~/projects` mount that miss the table are fetched live through the
//! project-store collaborator.

use crate::collab::{PROJECTS_MOUNT, ProjectStore};
use crate::error::Error;
use crate::session::SessionState;
use crate::vfs::{DirEntry, ROOT, VirtualFs};

use super::builtins::USER;
use super::parse::LsFlags;

/// `cd [path]`: no argument goes to the root.
pub fn cd(session: &mut SessionState, arg: Option<&str>) -> Vec<String> {
    let target = arg.unwrap_or(ROOT);
    match session.change_directory(target) {
        Ok(path) => vec![format!("Changed directory to {path}")],
        Err(Error::NotADirectory(_) | Error::NoSuchPath(_)) => {
            vec![format!("cd: {target}: No such directory")]
        }
        Err(e) => vec![format!("cd: {e}")],
    }
}

/// `ls [-a] [-l] [path]`.
pub fn ls(
    session: &SessionState,
    store: &dyn ProjectStore,
    flags: LsFlags,
    arg: Option<&str>,
) -> Vec<String> {
    let target = arg.unwrap_or(".");
    let path = match VirtualFs::normalize(target, session.cwd()) {
        Ok(path) => path,
        Err(e) => return vec![format!("ls: {e}")],
    };

    let entries = if session.fs().is_directory(&path) {
        match session.fs().list(&path) {
            Ok(entries) => entries,
            Err(e) => return vec![format!("ls: {e}")],
        }
    } else if let Some(relative) = mount_relative(&path) {
        match store.list_dir(relative) {
            Ok(entries) => entries
                .into_iter()
                .map(|e| DirEntry {
                    name: e.name,
                    is_directory: e.is_directory,
                    size: e.size,
                })
                .collect(),
            Err(_) => return vec![format!("ls: {target}: No such file or directory")],
        }
    } else if session.fs().contains(&path) {
        return vec![format!("ls: {target}: Not a directory")];
    } else {
        return vec![format!("ls: {target}: No such file or directory")];
    };

    render_listing(&entries, flags)
}

/// `cat <path>`.
pub fn cat(session: &SessionState, store: &dyn ProjectStore, arg: Option<&str>) -> Vec<String> {
    let Some(target) = arg else {
        return vec!["usage: cat <file>".to_string()];
    };
    let path = match VirtualFs::normalize(target, session.cwd()) {
        Ok(path) => path,
        Err(e) => return vec![format!("cat: {e}")],
    };

    if !session.fs().contains(&path) {
        if let Some(relative) = mount_relative(&path) {
            return match store.read_file(relative) {
                Ok(lines) => lines,
                Err(Error::NotAFile(_)) => vec![format!("cat: {target}: Is a directory")],
                Err(_) => vec![format!("cat: {target}: No such file or directory")],
            };
        }
    }

    match session.fs().read(&path) {
        Ok(lines) => lines.to_vec(),
        Err(Error::NotAFile(_)) => vec![format!("cat: {target}: Is a directory")],
        Err(_) => vec![format!("cat: {target}: No such file or directory")],
    }
}

/// Relative path under the projects mount, if `path` falls inside it.
fn mount_relative(path: &str) -> Option<&str> {
    let rest = path.strip_prefix(PROJECTS_MOUNT)?;
    if rest.is_empty() {
        Some("")
    } else {
        rest.strip_prefix('/')
    }
}

fn render_listing(entries: &[DirEntry], flags: LsFlags) -> Vec<String> {
    let mut rows: Vec<DirEntry> = Vec::new();
    if flags.contains(LsFlags::ALL) {
        // Synthetic pair; no real metadata exists behind it.
        rows.push(DirEntry { name: ".".to_string(), is_directory: true, size: 4096 });
        rows.push(DirEntry { name: "..".to_string(), is_directory: true, size: 4096 });
    }
    rows.extend(entries.iter().cloned());

    if rows.is_empty() {
        return vec!["(empty directory)".to_string()];
    }

    if flags.contains(LsFlags::LONG) {
        let size_width = rows
            .iter()
            .map(|e| e.size.to_string().len())
            .max()
            .unwrap_or(1);
        rows.iter()
            .map(|e| {
                let perms = if e.is_directory { "drwxr-xr-x" } else { "-rw-r--r--" };
                format!(
                    "{perms}  1 {USER} {USER} {size:>size_width$} {name}",
                    size = e.size,
                    name = decorated(e),
                )
            })
            .collect()
    } else {
        rows.iter().map(|e| format!("  {}", decorated(e))).collect()
    }
}

fn decorated(entry: &DirEntry) -> String {
    if entry.is_directory && !entry.name.ends_with('/') && entry.name != "." && entry.name != ".."
    {
        format!("{}/", entry.name)
    } else {
        entry.name.clone()
    }
}
