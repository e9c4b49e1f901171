//! Populating a tree index from an external hierarchical source.
//!
//! A [`TreeSource`] supplies a root identifier, the ordered child identifiers of any
//! node, and the payload for any identifier. [`build_tree`] walks the source pre-order:
//! a node's full sibling set is appended (fixing the sibling ordinals in source order)
//! before any of those children is expanded. The finished [`Tree`] mirrors the source's
//! parent/child relation exactly once per node and has no further dependency on the
//! source.
//!
//! Sources must be cycle-free. The builder does not trust that: an identifier reported
//! twice fails the build with [`BuildError::CycleDetected`], and a parent chain deeper
//! than [`MAX_BUILD_DEPTH`] fails with [`BuildError::DepthExceeded`] instead of
//! recursing without bound.

use crate::Result;
use crate::id::NodeId;
use crate::key::Key;
use crate::tree::Tree;

mod errors;

pub use errors::BuildError;

/// Maximum depth [`build_tree`] will descend before reporting the source as broken.
/// The build recurses once per level, so the limit also bounds stack growth.
pub const MAX_BUILD_DEPTH: usize = 1_000;

/// An external supplier of hierarchical (identifier, payload) data.
///
/// `children_of` must return a finite sequence, be deterministic, and describe a tree:
/// every identifier appears under exactly one parent. It is called once per node
/// during a build, so it does not need to cache.
pub trait TreeSource {
    /// Payload type stored on each built node.
    type Data;

    /// Identifier of the root node.
    fn root_id(&self) -> NodeId;

    /// Identifiers of `id`'s children, in sibling order.
    fn children_of(&self, id: &NodeId) -> Vec<NodeId>;

    /// Payload for the node carrying `id`.
    fn item(&self, id: &NodeId) -> Self::Data;
}

/// Builds a fully populated tree index from `source`.
///
/// # Examples
///
/// ```
/// use pathdex::{NodeId, TreeSource, build_tree};
///
/// struct TwoLevels;
///
/// impl TreeSource for TwoLevels {
///     type Data = String;
///
///     fn root_id(&self) -> NodeId {
///         "fs".into()
///     }
///
///     fn children_of(&self, id: &NodeId) -> Vec<NodeId> {
///         if id == "fs" { vec!["etc".into(), "var".into()] } else { vec![] }
///     }
///
///     fn item(&self, id: &NodeId) -> String {
///         format!("/{id}")
///     }
/// }
///
/// let tree = build_tree(&TwoLevels)?;
/// assert_eq!(tree.len(), 3);
/// assert_eq!(tree.root().data(), "/fs");
/// # Ok::<(), pathdex::Error>(())
/// ```
pub fn build_tree<S: TreeSource>(source: &S) -> Result<Tree<S::Data>> {
    let root_id = source.root_id();
    let root_data = source.item(&root_id);
    let mut tree = Tree::new(root_id.clone(), root_data);
    let root_key = tree.root_key().clone();
    build_children(source, &mut tree, &root_key, &root_id, 1)?;
    tracing::debug!(nodes = tree.len(), "built tree from source");
    Ok(tree)
}

/// Appends all of `id`'s children under `key`, then expands each in order.
fn build_children<S: TreeSource>(
    source: &S,
    tree: &mut Tree<S::Data>,
    key: &Key,
    id: &NodeId,
    depth: usize,
) -> Result<()> {
    if depth > MAX_BUILD_DEPTH {
        return Err(BuildError::DepthExceeded {
            limit: MAX_BUILD_DEPTH,
        }
        .into());
    }
    let child_ids = source.children_of(id);
    let mut appended = Vec::with_capacity(child_ids.len());
    for child_id in child_ids {
        if tree.contains_id(&child_id) {
            // The source already reported this identifier elsewhere in the
            // hierarchy; following it again would never terminate.
            return Err(BuildError::CycleDetected {
                id: child_id.to_string(),
            }
            .into());
        }
        let child_key = tree.append_child(key, child_id.clone(), source.item(&child_id))?;
        appended.push((child_key, child_id));
    }
    for (child_key, child_id) in appended {
        build_children(source, tree, &child_key, &child_id, depth + 1)?;
    }
    Ok(())
}
