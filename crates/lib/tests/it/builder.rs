//! Source-driven construction through the public API.

use pathdex::{NodeId, build_tree};

use crate::helpers::FixtureSource;

#[test]
fn test_build_fidelity_for_the_reference_shape() {
    // R with children [A, B]; A with child [C].
    let source = FixtureSource::new("R", &[("R", &["A", "B"]), ("A", &["C"])]);
    let tree = build_tree(&source).unwrap();

    assert_eq!(tree.len(), 4);
    assert!(tree.root().is_root());

    let top: Vec<&NodeId> = tree.root().children().map(|n| n.id()).collect();
    assert_eq!(top, ["A", "B"]);

    let a = tree.get_by_id(&"A".into()).unwrap();
    let under_a: Vec<&NodeId> = a.children().map(|n| n.id()).collect();
    assert_eq!(under_a, ["C"]);

    assert!(tree.get_by_id(&"B".into()).unwrap().is_leaf());
}

#[test]
fn test_built_tree_carries_source_payloads() {
    let source = FixtureSource::new("root", &[("root", &["n1", "n2"]), ("n1", &["leaf"])]);
    let tree = build_tree(&source).unwrap();

    assert_eq!(tree.root().data(), "data:root");
    assert_eq!(tree.get_by_id(&"leaf".into()).unwrap().data(), "data:leaf");
    assert_eq!(
        tree.get_by_id(&"leaf".into()).unwrap().parent().unwrap().id(),
        "n1"
    );
}

#[test]
fn test_built_tree_is_independent_of_the_source() {
    // Mutating the tree after the build requires nothing from the source.
    let source = FixtureSource::new("root", &[("root", &["n1", "n2"]), ("n1", &["leaf"])]);
    let mut tree = build_tree(&source).unwrap();
    drop(source);

    let root = tree.root_key().clone();
    tree.remove_child_by_id(&root, &"n1".into()).unwrap();
    assert_eq!(tree.len(), 2);
    assert!(tree.find_key(&"leaf".into()).is_none());

    tree.append_child(&root, "n3", "data:n3".to_string()).unwrap();
    assert_eq!(tree.len(), 3);
}

#[test]
fn test_cyclic_source_fails_the_build() {
    let source = FixtureSource::new("a", &[("a", &["b"]), ("b", &["a"])]);
    let err = build_tree(&source).unwrap_err();
    assert!(err.is_source_error());
    assert_eq!(err.module(), "builder");
}
