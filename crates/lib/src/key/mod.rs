//! Position keys: structural addresses for tree nodes.
//!
//! A [`Key`] encodes a node's place in the hierarchy as the chain of its ancestors'
//! keys plus its own sibling ordinal. Keys are immutable, cheap to clone (one shared
//! allocation per ancestor step), and carry a total order designed for range queries:
//!
//! * keys compare by depth first, so an entire level of the tree sorts as one block;
//! * within a level, keys compare by their parent keys, so the children of one parent
//!   form a contiguous run;
//! * within that run, keys compare by sibling ordinal.
//!
//! For any key `k`, every key of a direct child of `k` (and no other key in the whole
//! tree) sorts inside `k.child(0) ..= k.child(u32::MAX)`. Deeper descendants land in a
//! later level block, and same-level cousins sort outside the run because their parent
//! keys differ. The tree index exploits this to answer "children of `k`" with a single
//! ordered-range scan over its flat node map.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;


/// The structural address of a tree node.
///
/// A key is the pair (parent key, sibling ordinal) with the depth and the rendered
/// index path precomputed at construction. Two independently constructed keys are
/// equal iff they describe the same position.
///
/// # Examples
///
/// ```
/// use pathdex::Key;
///
/// let root = Key::root();
/// let second_child = root.child(1);
///
/// assert_eq!(root.path(), "0");
/// assert_eq!(second_child.path(), "0,1");
/// assert_eq!(second_child.parent(), Some(&root));
/// assert!(root < second_child);
/// ```
#[derive(Debug, Clone)]
pub struct Key(Arc<KeyInner>);

#[derive(Debug)]
struct KeyInner {
    parent: Option<Key>,
    level: u32,
    index: u32,
    /// Comma-joined sibling ordinals from the root down to this key.
    /// Computed once at construction; keys never change after creation.
    path: String,
}

impl Key {
    /// The key of a tree's root node: depth 0, ordinal 0, no parent.
    pub fn root() -> Self {
        Self(Arc::new(KeyInner {
            parent: None,
            level: 0,
            index: 0,
            path: "0".to_string(),
        }))
    }

    /// The key one level below `self` with the given sibling ordinal.
    ///
    /// The algebra places no uniqueness constraint on `index`; allocating distinct
    /// ordinals among siblings is the tree index's job.
    pub fn child(&self, index: u32) -> Self {
        Self(Arc::new(KeyInner {
            parent: Some(self.clone()),
            level: self.0.level + 1,
            index,
            path: format!("{},{}", self.0.path, index),
        }))
    }

    /// The parent's key, or `None` for the root key.
    pub fn parent(&self) -> Option<&Key> {
        self.0.parent.as_ref()
    }

    /// Depth of this key; the root is at level 0.
    pub fn level(&self) -> u32 {
        self.0.level
    }

    /// This key's ordinal among its siblings.
    pub fn index(&self) -> u32 {
        self.0.index
    }

    /// The cached index path, e.g. `"0,1,3"`.
    pub fn path(&self) -> &str {
        &self.0.path
    }

    /// Whether this is a root key.
    pub fn is_root(&self) -> bool {
        self.0.parent.is_none()
    }
}

impl PartialEq for Key {
    fn eq(&self, other: &Self) -> bool {
        if Arc::ptr_eq(&self.0, &other.0) {
            return true;
        }
        self.0.level == other.0.level
            && self.0.index == other.0.index
            && self.0.parent == other.0.parent
    }
}

impl Eq for Key {}

impl Hash for Key {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // The path determines (level, parent chain, index) exactly, so hashing it
        // stays consistent with structural equality.
        self.0.path.hash(state);
    }
}

impl Ord for Key {
    fn cmp(&self, other: &Self) -> Ordering {
        if Arc::ptr_eq(&self.0, &other.0) {
            return Ordering::Equal;
        }
        match self.0.level.cmp(&other.0.level) {
            Ordering::Equal => {}
            ord => return ord,
        }
        // Same level: either both are roots or both have parents.
        if let (Some(a), Some(b)) = (self.parent(), other.parent()) {
            match a.cmp(b) {
                Ordering::Equal => {}
                ord => return ord,
            }
        }
        self.0.index.cmp(&other.0.index)
    }
}

impl PartialOrd for Key {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.path)
    }
}
