//! Position-key algebra exercised through the public API.

use pathdex::Key;

#[test]
fn test_ordering_is_total_over_a_whole_tree_of_keys() {
    // Materialize every key of a small three-level tree plus some synthetic
    // range bounds, and check trichotomy pairwise.
    let root = Key::root();
    let mut keys = vec![root.clone()];
    for i in 0..3 {
        let child = root.child(i);
        for j in 0..3 {
            keys.push(child.child(j));
        }
        keys.push(child);
    }
    keys.push(root.child(0).child(u32::MAX));

    for a in &keys {
        for b in &keys {
            let relations = [a < b, a == b, a > b];
            assert_eq!(
                relations.iter().filter(|r| **r).count(),
                1,
                "trichotomy violated for {a} and {b}"
            );
        }
    }
}

#[test]
fn test_keys_are_stable_map_keys() {
    use std::collections::BTreeMap;

    // Keys built through different clones of the same ancestors address the
    // same map slot.
    let root = Key::root();
    let mut map = BTreeMap::new();
    map.insert(root.child(2).child(1), "x");

    let rebuilt = Key::root().child(2).child(1);
    assert_eq!(map.get(&rebuilt), Some(&"x"));
}

#[test]
fn test_display_matches_cached_path() {
    let key = Key::root().child(0).child(7).child(3);
    assert_eq!(key.to_string(), key.path());
    assert_eq!(format!("{key}"), "0,0,7,3");
}
