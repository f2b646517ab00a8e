//! Working path and path resolution against the namespace tree.

use std::fmt;

use crate::config::ROOT_NAME;
use crate::error::PathError;
use crate::namespace::{NamespaceTree, NodeId};

/// Absolute segment sequence starting at the root, e.g. `["~", "projects"]`.
///
/// Never empty: the first segment is always [`ROOT_NAME`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WorkingPath(Vec<String>);

impl WorkingPath {
    /// The root path `["~"]`.
    pub fn root() -> Self {
        Self(vec![ROOT_NAME.to_string()])
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.len() == 1
    }

    /// Last segment (the current directory name).
    pub fn name(&self) -> &str {
        self.0.last().map(String::as_str).unwrap_or(ROOT_NAME)
    }

    fn push(&mut self, segment: &str) {
        self.0.push(segment.to_string());
    }

    /// Drop the last segment, keeping the root.
    fn pop(&mut self) {
        if self.0.len() > 1 {
            self.0.pop();
        }
    }
}

impl Default for WorkingPath {
    fn default() -> Self {
        Self::root()
    }
}

impl fmt::Display for WorkingPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("/"))
    }
}

/// Resolve `input` against `cwd`.
///
/// - empty input or `.` returns `cwd`
/// - exactly `~` returns the root; `~/x` is not special
/// - a leading `/` starts from the root, anything else from `cwd`
/// - empty and `.` segments are skipped, `..` pops but never past the root
/// - any other segment must be a child of the current directory
///
/// On success the path addresses an existing node, file or directory.
pub fn resolve_path(
    fs: &NamespaceTree,
    cwd: &WorkingPath,
    input: &str,
) -> Result<WorkingPath, PathError> {
    if input.is_empty() || input == "." {
        return Ok(cwd.clone());
    }
    if input == ROOT_NAME {
        return Ok(WorkingPath::root());
    }

    let mut resolved = if input.starts_with('/') {
        WorkingPath::root()
    } else {
        cwd.clone()
    };
    let mut node = locate(fs, &resolved).ok_or_else(|| PathError::NotFound(input.to_string()))?;

    for part in input.split('/') {
        match part {
            "" | "." => {}
            ".." => {
                resolved.pop();
                node = locate(fs, &resolved)
                    .ok_or_else(|| PathError::NotFound(input.to_string()))?;
            }
            name => {
                node = fs
                    .child(node, name)
                    .ok_or_else(|| PathError::NotFound(input.to_string()))?;
                resolved.push(name);
            }
        }
    }

    Ok(resolved)
}

/// Node id addressed by a path, walking from the root.
fn locate(fs: &NamespaceTree, path: &WorkingPath) -> Option<NodeId> {
    let mut current = fs.root();
    for part in path.segments().iter().skip(1) {
        current = fs.child(current, part)?;
    }
    Some(current)
}
