use flatseq_core::{deep, display_leaves, is_lazy, json, nested, two_level, Flattener, Leaf, Nested};
use rstest::rstest;

fn rows(value: &Nested<Leaf>) -> Vec<Vec<&Leaf>> {
    value.to_rows().unwrap()
}

fn two_level_agree(value: &Nested<Leaf>) -> String {
    let rows = rows(value);
    let cursor = two_level::cursor(&rows).copied().collect::<Vec<_>>();
    let lazy = two_level::lazy(&rows).copied().collect::<Vec<_>>();
    assert_eq!(cursor, lazy);
    let concatenated = rows.iter().flatten().copied().collect::<Vec<_>>();
    assert_eq!(cursor, concatenated);
    display_leaves(cursor)
}

fn deep_agree(value: &Nested<Leaf>) -> String {
    let precomputed = deep::precomputed(value).collect::<Vec<_>>();
    let depth_first = deep::depth_first(value).collect::<Vec<_>>();
    assert_eq!(precomputed, depth_first);
    let owned = value.clone().into_leaves().collect::<Vec<_>>();
    assert_eq!(precomputed, owned.iter().collect::<Vec<_>>());
    assert_eq!(precomputed.len(), value.leaf_count());
    display_leaves(precomputed)
}

#[test]
fn test_two_level_scenario() {
    let value = nested!([["a", "b", "c"], ["d", "e", "f", "h", false], [1, 2, null]]);
    insta::assert_snapshot!(two_level_agree(&value), @r#"["a", "b", "c", "d", "e", "f", "h", false, 1, 2, null]"#);
}

#[test]
fn test_deep_scenario() {
    let value = nested!([
        [["a"], ["b", "c"]],
        ["d", "e", [["f"], "h"], false],
        [1, 2, null, [[[[["!"]]]]], []]
    ]);
    insta::assert_snapshot!(deep_agree(&value), @r#"["a", "b", "c", "d", "e", "f", "h", false, 1, 2, null, "!"]"#);
}

#[test]
fn test_two_level_empty_outer() {
    let value = nested!([]);
    let rows = rows(&value);
    let mut cursor = two_level::cursor(&rows);
    assert!(!cursor.has_next());
    assert_eq!(cursor.next(), None);
    let mut lazy = two_level::lazy(&rows);
    assert!(!lazy.has_next());
    assert_eq!(lazy.next(), None);
}

#[test]
fn test_deep_only_empty_containers() {
    let value = nested!([[[]], [[[]]]]);
    assert_eq!(deep_agree(&value), "[]");
}

#[rstest]
#[case::falsy(nested!([[false, 0], [null, ""]]), r#"[false, 0, null, ""]"#)]
#[case::empty_rows(nested!([[], [1], [], [], [2], []]), "[1, 2]")]
#[case::single_row(nested!([["only"]]), r#"["only"]"#)]
#[case::floats(nested!([[0.0, 1.5], [(-2.5)]]), "[0.0, 1.5, -2.5]")]
fn test_two_level_cases(#[case] value: Nested<Leaf>, #[case] expected: &str) {
    assert_eq!(two_level_agree(&value), expected);
    // a two-level input is also a valid deep input
    assert_eq!(deep_agree(&value), expected);
}

#[rstest]
#[case::root_leaf(nested!("x"), r#"["x"]"#)]
#[case::root_null(nested!(null), "[null]")]
#[case::empty(nested!([]), "[]")]
#[case::leaf_at_top_level(nested!([1, [2], 3]), "[1, 2, 3]")]
#[case::empty_between_siblings(nested!([[], "a", [[], []], "b", [[[]]]]), r#"["a", "b"]"#)]
#[case::right_deep(nested!([1, [2, [3, [4, [5]]]]]), "[1, 2, 3, 4, 5]")]
#[case::left_deep(nested!([[[[[1], 2], 3], 4], 5]), "[1, 2, 3, 4, 5]")]
fn test_deep_cases(#[case] value: Nested<Leaf>, #[case] expected: &str) {
    assert_eq!(deep_agree(&value), expected);
}

#[rstest]
#[case::root_leaf(nested!(1), "expected a container at [], found a leaf")]
#[case::leaf_row(nested!([[1], 2]), "expected a container at [1], found a leaf")]
#[case::nested_row(nested!([[1, [2]]]), "expected a leaf at [0, 1], found a container")]
#[case::nested_before_leaf_row(nested!([[1], [[2]], 3]), "expected a leaf at [1, 0], found a container")]
fn test_two_level_rejects_malformed(#[case] value: Nested<Leaf>, #[case] message: &str) {
    assert_eq!(value.to_rows().unwrap_err().to_string(), message);
    assert_eq!(value.into_rows().unwrap_err().to_string(), message);
}

#[test]
fn test_has_next_protocol() {
    let value = json::parse(r#"[[], [[null]], [], false]"#).unwrap();
    let mut flatteners: Vec<Box<dyn Iterator<Item = &Leaf>>> = Vec::new();
    let mut precomputed = deep::precomputed(&value);
    let mut depth_first = deep::depth_first(&value);
    assert!(precomputed.has_next());
    assert!(depth_first.has_next());
    flatteners.push(Box::new(precomputed));
    flatteners.push(Box::new(depth_first));
    for flattener in flatteners {
        assert_eq!(display_leaves(flattener), "[null, false]");
    }
}

#[test]
fn test_pull_one_then_rest() {
    let value = nested!([["a", "b"], ["c"]]);
    let rows = rows(&value);
    let mut lazy = two_level::lazy(rows.iter().map(|row| row.iter().copied()));
    assert_eq!(lazy.next(), Some(&Leaf::from("a")));
    assert_eq!(display_leaves(lazy.rest()), r#"["b", "c"]"#);
    assert_eq!(lazy.next(), None);

    let mut cursor = two_level::cursor(&rows);
    assert_eq!(cursor.next(), Some(&&Leaf::from("a")));
    assert_eq!(display_leaves(cursor.rest().into_iter().copied()), r#"["b", "c"]"#);
}

#[test]
fn test_lazy_producers_are_lazy() {
    let value = nested!([["a"]]);
    let rows = rows(&value);
    assert!(is_lazy(&two_level::lazy(&rows)));
    assert!(is_lazy(&deep::depth_first(&value)));
    assert!(is_lazy(&value.clone().into_leaves()));
    assert!(!is_lazy(&two_level::cursor(&rows)));
    assert!(!is_lazy(&deep::precomputed(&value)));
}

#[test]
fn test_repeated_construction_is_stable() {
    let value = json::parse(r#"[[1, [2]], [], [[3, [[]]], 4]]"#).unwrap();
    let first = deep_agree(&value);
    for _ in 0..5 {
        assert_eq!(deep_agree(&value), first);
    }
    assert_eq!(first, "[1, 2, 3, 4]");
}

#[test]
fn test_for_loop_over_nested() {
    let value = nested!([[1, 2], 3]);
    let mut seen = Vec::new();
    for leaf in &value {
        seen.push(leaf.clone());
    }
    for leaf in value {
        seen.push(leaf);
    }
    assert_eq!(display_leaves(&seen), "[1, 2, 3, 1, 2, 3]");
}

#[test]
fn test_serialize_round_shape() {
    let text = r#"[["a",1],[null,false,[2.5]],[]]"#;
    let value = json::parse(text).unwrap();
    assert_eq!(serde_json::to_string(&value).unwrap(), text);
}
