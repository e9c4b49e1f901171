//! Shared fixtures for the integration tests.

use std::collections::HashMap;

use pathdex::{NodeId, Tree, TreeSource};

/// A `TreeSource` backed by a literal adjacency table.
pub struct FixtureSource {
    root: String,
    children: HashMap<String, Vec<String>>,
}

impl FixtureSource {
    pub fn new(root: &str, edges: &[(&str, &[&str])]) -> Self {
        let children = edges
            .iter()
            .map(|(parent, kids)| {
                (
                    parent.to_string(),
                    kids.iter().map(|k| k.to_string()).collect(),
                )
            })
            .collect();
        Self {
            root: root.to_string(),
            children,
        }
    }
}

impl TreeSource for FixtureSource {
    type Data = String;

    fn root_id(&self) -> NodeId {
        self.root.as_str().into()
    }

    fn children_of(&self, id: &NodeId) -> Vec<NodeId> {
        self.children
            .get(id.as_str())
            .map(|kids| kids.iter().map(|k| NodeId::from(k.as_str())).collect())
            .unwrap_or_default()
    }

    fn item(&self, id: &NodeId) -> String {
        format!("data:{id}")
    }
}

/// The scenario shape used across several tests:
/// `root` with children `n1` and `n2`, and `n1` with child `leaf`.
pub fn scenario_tree() -> Tree<String> {
    let mut tree = Tree::new("root", "data:root".to_string());
    let root = tree.root_key().clone();
    let n1 = tree.append_child(&root, "n1", "data:n1".to_string()).unwrap();
    tree.append_child(&root, "n2", "data:n2".to_string()).unwrap();
    tree.append_child(&n1, "leaf", "data:leaf".to_string()).unwrap();
    tree
}
