//! The tree index: one flat, ordered arena per tree instance.
//!
//! A [`Tree`] owns every node of one tree. Structure is not stored as child lists;
//! instead every node is keyed by its position [`Key`] in a single `BTreeMap`, and the
//! key ordering (see [`crate::key`]) makes "direct children of N" a contiguous range of
//! that map. A secondary `NodeId -> Key` index resolves caller-assigned identifiers in
//! O(1).
//!
//! After every public operation the index upholds:
//!
//! 1. every stored key matches the node's actual position (level and parent chain);
//! 2. the identifier index agrees with the node map exactly, entry for entry;
//! 3. every non-root node's parent is present in the map;
//! 4. removal takes a node's whole subtree with it, from both maps.
//!
//! ## Concurrency
//!
//! The tree is single-owner and performs no internal synchronization. Every structural
//! mutation takes `&mut self`, so the borrow checker already serializes writers against
//! readers; callers that share a tree across threads must wrap it in their own lock.
//!
//! ## Sibling ordinals
//!
//! Each node carries a monotonically increasing counter for its children's ordinals.
//! Removing a child does not release its ordinal, so a child appended after a removal
//! can never collide with a surviving sibling's key. Sibling order therefore reflects
//! insertion order, with gaps where removals happened.

use std::collections::{BTreeMap, HashMap};

use crate::Result;
use crate::id::NodeId;
use crate::key::Key;

mod errors;

pub use errors::TreeError;

/// A single owned entry in the arena.
#[derive(Debug, Clone)]
struct Node<D> {
    id: NodeId,
    data: D,
    key: Key,
    /// Ordinal the next appended child will receive. Never decremented.
    next_child_index: u32,
}

/// A borrow of one node, resolvable back into the owning tree.
///
/// `NodeRef` is the read surface of the index: navigation (`parent`, `children`) goes
/// through the shared arena rather than through pointers between nodes, so the handle
/// is plain shared borrows all the way down.
#[derive(Debug)]
pub struct NodeRef<'a, D> {
    tree: &'a Tree<D>,
    node: &'a Node<D>,
}

impl<D> Clone for NodeRef<'_, D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D> Copy for NodeRef<'_, D> {}

impl<'a, D> NodeRef<'a, D> {
    /// The node's immutable position key.
    pub fn key(&self) -> &'a Key {
        &self.node.key
    }

    /// The node's current identifier.
    pub fn id(&self) -> &'a NodeId {
        &self.node.id
    }

    /// The node's payload.
    pub fn data(&self) -> &'a D {
        &self.node.data
    }

    /// The parent node, or `None` for the root.
    pub fn parent(&self) -> Option<NodeRef<'a, D>> {
        self.tree.get(self.node.key.parent()?)
    }

    /// The node's direct children, in sibling order.
    pub fn children(&self) -> impl Iterator<Item = NodeRef<'a, D>> {
        self.tree.child_nodes(&self.node.key)
    }

    /// Number of direct children.
    pub fn child_count(&self) -> usize {
        self.children().count()
    }

    /// Whether this node is the tree's root.
    pub fn is_root(&self) -> bool {
        self.node.key.is_root()
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children().next().is_none()
    }
}

/// The arena owning all nodes of one tree instance.
///
/// Created together with its root node; lives exactly as long as the tree it indexes.
/// The root cannot be removed, so the index is never empty.
///
/// # Examples
///
/// ```
/// use pathdex::Tree;
///
/// let mut tree = Tree::new("root", 0u32);
/// let root = tree.root_key().clone();
/// let branch = tree.append_child(&root, "branch", 1)?;
/// tree.append_child(&branch, "leaf", 2)?;
///
/// assert_eq!(tree.len(), 3);
/// assert_eq!(tree.get_by_id(&"leaf".into()).unwrap().parent().unwrap().id(), "branch");
/// # Ok::<(), pathdex::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Tree<D> {
    /// Every node of the tree, ordered by position key.
    nodes: BTreeMap<Key, Node<D>>,
    /// Secondary index from caller-assigned identifier to position key.
    by_id: HashMap<NodeId, Key>,
    root: Key,
}

impl<D> Tree<D> {
    /// Creates the tree and its root node in one step.
    pub fn new(id: impl Into<NodeId>, data: D) -> Self {
        let id = id.into();
        let root = Key::root();
        let mut nodes = BTreeMap::new();
        let mut by_id = HashMap::new();
        by_id.insert(id.clone(), root.clone());
        nodes.insert(
            root.clone(),
            Node {
                id,
                data,
                key: root.clone(),
                next_child_index: 0,
            },
        );
        Self { nodes, by_id, root }
    }

    /// The root node's key.
    pub fn root_key(&self) -> &Key {
        &self.root
    }

    /// The root node.
    pub fn root(&self) -> NodeRef<'_, D> {
        // The root is inserted at construction and can never be removed.
        self.get(&self.root)
            .unwrap_or_else(|| unreachable!("root node missing from arena"))
    }

    /// Number of nodes in the whole tree. At least 1.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false; the root exists for the lifetime of the tree.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Looks up a node anywhere in the tree by position key.
    pub fn get(&self, key: &Key) -> Option<NodeRef<'_, D>> {
        self.nodes.get(key).map(|node| NodeRef { tree: self, node })
    }

    /// Looks up a node anywhere in the tree by identifier.
    pub fn get_by_id(&self, id: &NodeId) -> Option<NodeRef<'_, D>> {
        self.get(self.by_id.get(id)?)
    }

    /// Resolves an identifier to its position key.
    pub fn find_key(&self, id: &NodeId) -> Option<&Key> {
        self.by_id.get(id)
    }

    /// Whether any node in the tree currently carries the identifier.
    pub fn contains_id(&self, id: &NodeId) -> bool {
        self.by_id.contains_key(id)
    }

    /// All nodes of the tree in position-key order.
    ///
    /// The arena is shared by the whole tree, so this is every node reachable from the
    /// root, not a subtree view.
    pub fn all_nodes(&self) -> impl Iterator<Item = NodeRef<'_, D>> {
        self.nodes.values().map(|node| NodeRef { tree: self, node })
    }

    /// The direct children of `parent`, in sibling order.
    ///
    /// One range scan between the synthetic bounds `parent.child(0)` and
    /// `parent.child(u32::MAX)`; the key ordering guarantees the run contains exactly
    /// the direct children. Empty if `parent` is a leaf or not in the tree.
    pub fn child_nodes(&self, parent: &Key) -> impl Iterator<Item = NodeRef<'_, D>> {
        self.nodes
            .range(parent.child(0)..=parent.child(u32::MAX))
            .map(|(_, node)| NodeRef { tree: self, node })
    }

    /// Looks up `key` only among the direct children of `parent`.
    pub fn child_node(&self, parent: &Key, key: &Key) -> Option<NodeRef<'_, D>> {
        self.get(key).filter(|n| n.key().parent() == Some(parent))
    }

    /// Looks up an identifier only among the direct children of `parent`.
    pub fn child_node_by_id(&self, parent: &Key, id: &NodeId) -> Option<NodeRef<'_, D>> {
        self.child_node(parent, self.by_id.get(id)?)
    }

    /// Appends a new child under `parent` and returns the allocated key.
    ///
    /// The child receives the parent's next sibling ordinal and is registered in both
    /// maps. Fails with [`TreeError::UnknownKey`] if `parent` is not in the tree and
    /// with [`TreeError::DuplicateId`] if `id` is already carried by any live node.
    pub fn append_child(&mut self, parent: &Key, id: impl Into<NodeId>, data: D) -> Result<Key> {
        let id = id.into();
        if self.by_id.contains_key(&id) {
            return Err(TreeError::DuplicateId { id: id.to_string() }.into());
        }
        let parent_node = self
            .nodes
            .get_mut(parent)
            .ok_or_else(|| TreeError::UnknownKey {
                key: parent.to_string(),
            })?;
        let index = parent_node.next_child_index;
        parent_node.next_child_index += 1;
        // Derive from the stored key so the child shares the parent's ancestor chain.
        let key = parent_node.key.child(index);
        tracing::trace!(key = %key, id = %id, "appending child node");
        self.by_id.insert(id.clone(), key.clone());
        self.nodes.insert(
            key.clone(),
            Node {
                id,
                data,
                key: key.clone(),
                next_child_index: 0,
            },
        );
        Ok(key)
    }

    /// Reassigns a node's identifier, updating the identifier index atomically.
    ///
    /// Returns the previous identifier. Reassigning a node its own current id is a
    /// no-op. Fails with [`TreeError::DuplicateId`] if another node already carries
    /// `new_id`; the old mapping is untouched on failure.
    pub fn set_id(&mut self, key: &Key, new_id: impl Into<NodeId>) -> Result<NodeId> {
        let new_id = new_id.into();
        if let Some(owner) = self.by_id.get(&new_id) {
            if owner == key {
                return Ok(new_id);
            }
            return Err(TreeError::DuplicateId {
                id: new_id.to_string(),
            }
            .into());
        }
        let node = self
            .nodes
            .get_mut(key)
            .ok_or_else(|| TreeError::UnknownKey {
                key: key.to_string(),
            })?;
        let old_id = std::mem::replace(&mut node.id, new_id.clone());
        self.by_id.remove(&old_id);
        self.by_id.insert(new_id, key.clone());
        Ok(old_id)
    }

    /// Replaces a node's payload, returning the previous one.
    ///
    /// Payloads do not participate in either index, so no map maintenance happens.
    pub fn set_data(&mut self, key: &Key, data: D) -> Result<D> {
        let node = self
            .nodes
            .get_mut(key)
            .ok_or_else(|| TreeError::UnknownKey {
                key: key.to_string(),
            })?;
        Ok(std::mem::replace(&mut node.data, data))
    }

    /// Removes a direct child of `parent` together with its entire subtree.
    ///
    /// Descendants are removed post-order, then the child itself; both maps are purged
    /// so no orphaned key or identifier survives. Returns the number of nodes removed
    /// (at least 1). Fails with [`TreeError::UnknownKey`] if `child` is not in the
    /// tree, and with [`TreeError::NotAChild`] if it is present but not a direct child
    /// of `parent`.
    pub fn remove_child(&mut self, parent: &Key, child: &Key) -> Result<usize> {
        if !self.nodes.contains_key(child) {
            return Err(TreeError::UnknownKey {
                key: child.to_string(),
            }
            .into());
        }
        if child.parent() != Some(parent) {
            return Err(TreeError::NotAChild {
                parent: parent.to_string(),
                key: child.to_string(),
            }
            .into());
        }
        let mut doomed = Vec::new();
        self.collect_subtree(child, &mut doomed);
        for key in &doomed {
            if let Some(node) = self.nodes.remove(key) {
                self.by_id.remove(&node.id);
            }
        }
        tracing::debug!(subtree = %child, removed = doomed.len(), "removed subtree");
        Ok(doomed.len())
    }

    /// Like [`remove_child`](Self::remove_child), resolving the child by identifier.
    pub fn remove_child_by_id(&mut self, parent: &Key, id: &NodeId) -> Result<usize> {
        let child = self
            .by_id
            .get(id)
            .cloned()
            .ok_or_else(|| TreeError::UnknownKey {
                key: id.to_string(),
            })?;
        self.remove_child(parent, &child)
    }

    /// Collects the keys of `key`'s subtree in post-order, `key` itself last.
    fn collect_subtree(&self, key: &Key, out: &mut Vec<Key>) {
        let children: Vec<Key> = self.child_nodes(key).map(|c| c.key().clone()).collect();
        for child in &children {
            self.collect_subtree(child, out);
        }
        out.push(key.clone());
    }
}
