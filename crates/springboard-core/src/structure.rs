//! Declarative description of the file layout an install is expected to
//! ship with, plus the walk that checks it against the disk.

use crate::paths::file_exists;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Handle into a [`FileTree`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeId(usize);

#[derive(Debug)]
struct Node {
    name: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// Arena-backed tree of expected files and directories. A node with
/// children is a directory and is never probed itself; a node without
/// children is a file and is probed for existence. The parent link is an
/// arena index, used only to rebuild a node's relative path.
#[derive(Debug)]
pub struct FileTree {
    nodes: Vec<Node>,
}

/// One probe result per leaf, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyReport {
    pub path: PathBuf,
    pub found: bool,
}

impl FileTree {
    pub fn new(root: impl Into<String>) -> Self {
        Self {
            nodes: vec![Node {
                name: root.into(),
                parent: None,
                children: Vec::new(),
            }],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Adds a child under `parent` and returns its handle. Adding a child
    /// permanently turns the parent into a directory.
    pub fn add(&mut self, parent: NodeId, name: impl Into<String>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            name: name.into(),
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Checks every leaf for existence under `base`. Missing files are
    /// reported, never fatal: the walk always visits the whole tree and
    /// the caller decides what a missing file means.
    pub fn verify(&self, base: &Path) -> Vec<VerifyReport> {
        let mut reports = Vec::new();
        self.verify_node(self.root(), base, &mut reports);
        reports
    }

    fn verify_node(&self, id: NodeId, base: &Path, reports: &mut Vec<VerifyReport>) {
        let node = &self.nodes[id.0];
        if node.children.is_empty() {
            let path = base.join(self.relative_path(id));
            let found = file_exists(&path);
            debug!(path = %path.display(), found, "probed core file");
            reports.push(VerifyReport { path, found });
        } else {
            for &child in &node.children {
                self.verify_node(child, base, reports);
            }
        }
    }

    /// Root-to-node path, rebuilt by walking the parent links.
    fn relative_path(&self, id: NodeId) -> PathBuf {
        let mut segments = Vec::new();
        let mut cursor = Some(id);
        while let Some(node_id) = cursor {
            let node = &self.nodes[node_id.0];
            segments.push(node.name.as_str());
            cursor = node.parent;
        }
        segments.reverse();
        segments.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::FileTree;
    use std::path::{Path, PathBuf};
    use std::time::{SystemTime, UNIX_EPOCH};

    fn unique_temp_dir(prefix: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        std::env::temp_dir().join(format!("springboard-structure-{prefix}-{nanos}"))
    }

    fn bin_tree() -> FileTree {
        let mut tree = FileTree::new("bin");
        tree.add(tree.root(), "a.jar");
        tree.add(tree.root(), "b.jar");
        tree
    }

    #[test]
    fn reports_each_leaf_exactly_once() {
        let base = unique_temp_dir("missing-leaf");
        std::fs::create_dir_all(base.join("bin")).expect("create bin dir");
        std::fs::write(base.join("bin").join("b.jar"), b"jar").expect("write b.jar");

        let reports = bin_tree().verify(&base);

        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].path, base.join("bin").join("a.jar"));
        assert!(!reports[0].found);
        assert_eq!(reports[1].path, base.join("bin").join("b.jar"));
        assert!(reports[1].found);
        let _ = std::fs::remove_dir_all(base);
    }

    #[test]
    fn verify_is_idempotent_against_unchanged_disk() {
        let base = unique_temp_dir("idempotent");
        std::fs::create_dir_all(base.join("bin")).expect("create bin dir");
        std::fs::write(base.join("bin").join("a.jar"), b"jar").expect("write a.jar");

        let tree = bin_tree();
        assert_eq!(tree.verify(&base), tree.verify(&base));
        let _ = std::fs::remove_dir_all(base);
    }

    #[test]
    fn directories_are_never_probed_themselves() {
        let mut tree = FileTree::new("bin");
        let config = tree.add(tree.root(), "config");
        tree.add(config, "logging.xml");

        // Base does not exist at all; the only report is for the leaf.
        let reports = tree.verify(Path::new("/nonexistent/install"));
        assert_eq!(reports.len(), 1);
        assert_eq!(
            reports[0].path,
            Path::new("/nonexistent/install")
                .join("bin")
                .join("config")
                .join("logging.xml")
        );
        assert!(!reports[0].found);
    }

    #[test]
    fn a_childless_root_is_treated_as_a_file() {
        let tree = FileTree::new("readme.txt");
        let reports = tree.verify(Path::new("/nonexistent/install"));
        assert_eq!(reports.len(), 1);
        assert_eq!(
            reports[0].path,
            Path::new("/nonexistent/install").join("readme.txt")
        );
    }
}
