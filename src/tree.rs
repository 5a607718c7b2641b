//! Path tree built from archive entry paths
//!
//! Entry paths are merged into a deduplicated tree of slash-separated
//! segments. Nodes live in an arena and refer to each other by index, so
//! parent back-references carry no ownership; the tree owns every node
//! top-down through the child lists. Child order is insertion order,
//! which preserves the archive's enumeration order.

/// Index of a node within its tree's arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug)]
struct Node {
    /// Segment label (logical name, no display decoration)
    label: String,
    /// Back-reference for path reconstruction; None only for the root
    parent: Option<NodeId>,
    /// Children in insertion order, labels unique within one parent
    children: Vec<NodeId>,
}

/// Deduplicated tree of archive entry path segments
#[derive(Debug)]
pub struct PathTree {
    nodes: Vec<Node>,
}

impl PathTree {
    /// Create a tree containing only a root node. The root represents the
    /// archive itself and is excluded from path reconstruction.
    pub fn new(root_label: &str) -> Self {
        Self {
            nodes: vec![Node {
                label: root_label.to_string(),
                parent: None,
                children: Vec::new(),
            }],
        }
    }

    /// The root node
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Total number of nodes, root included
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the tree holds nothing but the root
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    /// Segment label of a node
    pub fn label(&self, id: NodeId) -> &str {
        &self.nodes[id.0].label
    }

    /// Children of a node, in insertion order
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    /// Parent of a node; None for the root
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    /// Insert an entry path, creating missing segments and reusing
    /// existing ones. Returns the node for the last segment, or None if
    /// the path contains no segments at all (for example `"/"`), which is
    /// a no-op.
    pub fn insert(&mut self, path: &str) -> Option<NodeId> {
        let mut current = self.root();
        let mut walked = false;
        for segment in path.split('/').filter(|s| !s.is_empty()) {
            walked = true;
            current = match self.find_child(current, segment) {
                Some(child) => child,
                None => {
                    let id = NodeId(self.nodes.len());
                    self.nodes.push(Node {
                        label: segment.to_string(),
                        parent: Some(current),
                        children: Vec::new(),
                    });
                    self.nodes[current.0].children.push(id);
                    id
                }
            };
        }
        walked.then_some(current)
    }

    /// First child of `parent` with the given label
    fn find_child(&self, parent: NodeId, label: &str) -> Option<NodeId> {
        self.nodes[parent.0]
            .children
            .iter()
            .copied()
            .find(|&child| self.nodes[child.0].label == label)
    }

    /// Navigate to the node for an entry path, if present
    pub fn find(&self, path: &str) -> Option<NodeId> {
        let mut current = self.root();
        for segment in path.split('/').filter(|s| !s.is_empty()) {
            current = self.find_child(current, segment)?;
        }
        (current != self.root()).then_some(current)
    }

    /// Reconstruct the entry path for a node by walking parent references
    /// up to (but excluding) the root, joined root-to-leaf with `/`.
    pub fn full_path(&self, id: NodeId) -> String {
        let mut segments = Vec::new();
        let mut cursor = Some(id);
        while let Some(node) = cursor {
            if node == self.root() {
                break;
            }
            segments.push(self.label(node));
            cursor = self.parent(node);
        }
        segments.reverse();
        segments.join("/")
    }

    /// Strict ancestors of a node, nearest first, excluding the root.
    /// These are the nodes a renderer must expand for `id` to be visible.
    pub fn ancestors(&self, id: NodeId) -> Vec<NodeId> {
        let mut chain = Vec::new();
        let mut cursor = self.parent(id);
        while let Some(node) = cursor {
            if node == self.root() {
                break;
            }
            chain.push(node);
            cursor = self.parent(node);
        }
        chain
    }

    /// All nodes in pre-order (root first, children in insertion order)
    pub fn preorder(&self) -> Vec<NodeId> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut stack = vec![self.root()];
        while let Some(node) = stack.pop() {
            order.push(node);
            stack.extend(self.children(node).iter().rev());
        }
        order
    }

    /// Find all nodes whose label contains `term`, in pre-order. The root
    /// label participates in matching like any other. Both sides are
    /// lowercased when `case_sensitive` is false.
    pub fn search(&self, term: &str, case_sensitive: bool) -> Vec<NodeId> {
        let needle = if case_sensitive {
            term.to_string()
        } else {
            term.to_lowercase()
        };
        self.preorder()
            .into_iter()
            .filter(|&node| {
                let label = self.label(node);
                if case_sensitive {
                    label.contains(&needle)
                } else {
                    label.to_lowercase().contains(&needle)
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(tree: &PathTree, ids: &[NodeId]) -> Vec<String> {
        ids.iter().map(|&id| tree.label(id).to_string()).collect()
    }

    #[test]
    fn test_dedup_and_insertion_order() {
        let mut tree = PathTree::new("archive");
        tree.insert("a/b/c");
        tree.insert("a/b/d");
        tree.insert("a/e");

        let root_children = tree.children(tree.root());
        assert_eq!(labels(&tree, root_children), ["a"]);

        let a = root_children[0];
        assert_eq!(labels(&tree, tree.children(a)), ["b", "e"]);

        let b = tree.children(a)[0];
        assert_eq!(labels(&tree, tree.children(b)), ["c", "d"]);
    }

    #[test]
    fn test_duplicate_insert_is_noop() {
        let mut tree = PathTree::new("archive");
        let first = tree.insert("a/b/c").unwrap();
        let second = tree.insert("a/b/c").unwrap();
        assert_eq!(first, second);
        assert_eq!(tree.len(), 4); // root + a + b + c
    }

    #[test]
    fn test_empty_segments_skipped() {
        let mut tree = PathTree::new("archive");
        let node = tree.insert("/a//b/").unwrap();
        assert_eq!(tree.full_path(node), "a/b");
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn test_all_empty_path_is_noop() {
        let mut tree = PathTree::new("archive");
        assert!(tree.insert("/").is_none());
        assert!(tree.insert("").is_none());
        assert!(tree.insert("///").is_none());
        assert!(tree.is_empty());
    }

    #[test]
    fn test_full_path_excludes_root() {
        let mut tree = PathTree::new("app.jar");
        let node = tree.insert("com/app/Main.class").unwrap();
        assert_eq!(tree.full_path(node), "com/app/Main.class");
        assert_eq!(tree.full_path(tree.root()), "");
    }

    #[test]
    fn test_round_trip() {
        let mut tree = PathTree::new("app.jar");
        tree.insert("com/app/Main.class");
        tree.insert("com/app/util/Helper.class");

        for node in tree.preorder() {
            if node == tree.root() {
                continue;
            }
            let path = tree.full_path(node);
            let mut fresh = PathTree::new("app.jar");
            let replayed = fresh.insert(&path).unwrap();
            assert_eq!(fresh.full_path(replayed), path);
            assert_eq!(tree.find(&path), Some(node));
        }
    }

    #[test]
    fn test_ancestors_exclude_root() {
        let mut tree = PathTree::new("app.jar");
        let node = tree.insert("com/app/util/Helper.class").unwrap();
        let chain = tree.ancestors(node);
        assert_eq!(labels(&tree, &chain), ["util", "app", "com"]);
        assert!(tree.ancestors(tree.root()).is_empty());
    }

    #[test]
    fn test_preorder_search_scenario() {
        let mut tree = PathTree::new("app.jar");
        for entry in [
            "com/app/Main.class",
            "com/app/util/Helper.class",
            "META-INF/MANIFEST.MF",
        ] {
            tree.insert(entry);
        }

        let matches = tree.search("class", false);
        assert_eq!(labels(&tree, &matches), ["Main.class", "Helper.class"]);

        let insensitive = tree.search("manifest", false);
        assert_eq!(labels(&tree, &insensitive), ["MANIFEST.MF"]);
        assert!(tree.search("manifest", true).is_empty());
    }

    #[test]
    fn test_root_label_participates_in_search() {
        let mut tree = PathTree::new("app.jar");
        tree.insert("com/Main.class");
        let matches = tree.search("app.jar", false);
        assert_eq!(matches, vec![tree.root()]);
    }
}
