use insertion_order::{Error, OrderedSet, json};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

/// The number of operations to perform in each proptest case.
const TEST_SIZE: usize = 2_000;

/// Generates values from a small range so that operations collide often.
fn value_strategy() -> impl Strategy<Value = i64> {
    -200i64..200i64
}

// ─── Operations enum for driving randomized tests ────────────────────────────

#[derive(Debug, Clone)]
enum SetOp {
    Insert(i64),
    Remove(i64),
    Contains(i64),
    Take(i64),
}

fn set_op_strategy() -> impl Strategy<Value = SetOp> {
    prop_oneof![
        5 => value_strategy().prop_map(SetOp::Insert),
        3 => value_strategy().prop_map(SetOp::Remove),
        2 => value_strategy().prop_map(SetOp::Contains),
        1 => value_strategy().prop_map(SetOp::Take),
    ]
}

// ─── Core operations ─────────────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    /// Replays a random sequence of operations on both OrderedSet and a plain
    /// `Vec` holding the values in insertion order.
    #[test]
    fn set_ops_match_vec(ops in proptest::collection::vec(set_op_strategy(), TEST_SIZE)) {
        let mut set: OrderedSet<i64> = OrderedSet::new();
        let mut model: Vec<i64> = Vec::new();

        for op in &ops {
            match *op {
                SetOp::Insert(v) => {
                    let newly = !model.contains(&v);
                    if newly {
                        model.push(v);
                    }
                    prop_assert_eq!(set.insert(v), newly, "insert({})", v);
                }
                SetOp::Remove(v) => {
                    let position = model.iter().position(|&m| m == v);
                    if let Some(index) = position {
                        model.remove(index);
                    }
                    prop_assert_eq!(set.remove(&v), position.is_some(), "remove({})", v);
                }
                SetOp::Contains(v) => {
                    prop_assert_eq!(set.contains(&v), model.contains(&v), "contains({})", v);
                }
                SetOp::Take(v) => {
                    let position = model.iter().position(|&m| m == v);
                    let expected = position.map(|index| model.remove(index));
                    prop_assert_eq!(set.take(&v), expected, "take({})", v);
                }
            }
            prop_assert_eq!(set.len(), model.len(), "len mismatch after {:?}", op);
        }

        prop_assert_eq!(set.iter().copied().collect::<Vec<_>>(), model.clone());
        prop_assert_eq!(set.into_iter().collect::<Vec<_>>(), model);
    }

    /// Building a set keeps the first occurrence of every value.
    #[test]
    fn from_iter_keeps_first_occurrence(values in proptest::collection::vec(value_strategy(), 0..TEST_SIZE)) {
        let set: OrderedSet<i64> = values.iter().copied().collect();
        let mut expected: Vec<i64> = Vec::new();
        for value in values {
            if !expected.contains(&value) {
                expected.push(value);
            }
        }
        prop_assert_eq!(set.iter().copied().collect::<Vec<_>>(), expected);
    }

    /// Encoding then decoding yields the same values in the same order.
    #[test]
    fn json_round_trip(values in proptest::collection::vec(any::<i64>(), 0..500)) {
        let set: OrderedSet<i64> = values.into_iter().collect();
        let text = json::to_string(&set).unwrap();
        let decoded: OrderedSet<i64> = json::from_str(&text).unwrap();
        prop_assert_eq!(decoded, set);
    }
}

// ─── Ordering scenarios ──────────────────────────────────────────────────────

#[test]
fn removed_value_is_gone_and_later_values_follow() {
    let mut set = OrderedSet::from(["a", "b"]);
    set.insert("d");
    set.insert("c");
    set.remove(&"d");
    assert_eq!(set.iter().copied().collect::<Vec<_>>(), ["a", "b", "c"]);
}

#[test]
fn reinserting_a_removed_value_moves_it_to_the_end() {
    let mut set = OrderedSet::from(["a", "b", "c"]);
    assert_eq!(set.iter().copied().collect::<Vec<_>>(), ["a", "b", "c"]);

    assert!(!set.insert("a"));
    assert!(set.contains(&"a"));

    set.remove(&"c");
    assert_eq!(set.iter().copied().collect::<Vec<_>>(), ["a", "b"]);

    set.insert("c");
    assert_eq!(set.iter().copied().collect::<Vec<_>>(), ["a", "b", "c"]);

    set.remove(&"b");
    assert_eq!(set.iter().copied().collect::<Vec<_>>(), ["a", "c"]);
    set.insert("b");
    assert_eq!(set.iter().copied().collect::<Vec<_>>(), ["a", "c", "b"]);
}

#[test]
fn missing_values_are_not_errors() {
    let mut set: OrderedSet<String> = OrderedSet::new();
    assert!(!set.contains("x"));
    assert!(!set.remove("x"));
    assert_eq!(set.take("x"), None);
    assert_eq!(set.get("x"), None);
}

#[test]
fn first_and_last_follow_insertion_order() {
    let mut set = OrderedSet::from([5, 3, 9]);
    assert_eq!(set.first(), Some(&5));
    assert_eq!(set.last(), Some(&9));
    set.remove(&5);
    set.insert(5);
    assert_eq!(set.first(), Some(&3));
    assert_eq!(set.last(), Some(&5));
}

// ─── Serialization ───────────────────────────────────────────────────────────

#[test]
fn serializes_and_deserializes_in_order() {
    let set = OrderedSet::from(["a", "b", "c"]);
    assert_eq!(json::to_string(&set).unwrap(), r#"["a","b","c"]"#);

    let set: OrderedSet<String> = json::from_str(r#"["d", "c", "a"]"#).unwrap();
    assert_eq!(set.iter().map(String::as_str).collect::<Vec<_>>(), ["d", "c", "a"]);
}

#[test]
fn duplicate_elements_collapse_to_first_occurrence() {
    let set: OrderedSet<i32> = json::from_str("[3, 1, 3, 2, 1]").unwrap();
    assert_eq!(set.into_iter().collect::<Vec<_>>(), [3, 1, 2]);
}

#[test]
fn null_round_trips_as_absent_set() {
    let absent: Option<OrderedSet<String>> = None;
    assert_eq!(json::to_string(&absent).unwrap(), "null");

    let decoded: Option<OrderedSet<String>> = json::from_str("null").unwrap();
    assert!(decoded.is_none());

    let decoded: OrderedSet<String> = json::from_str("null").unwrap();
    assert!(decoded.is_empty());
    assert_eq!(json::to_string(&decoded).unwrap(), "[]");
}

#[test]
fn malformed_text_is_rejected_without_touching_target() {
    let mut set = OrderedSet::from(["a", "b", "c"].map(String::from));

    for text in ["--...{", r#"{"a":1}"#, r#"["a","b""#, "[1, 2]", r#"["a" "b"]"#] {
        let result = json::from_str_in_place(text, &mut set);
        assert!(matches!(result, Err(Error::MalformedInput { .. })), "accepted {text:?}");
    }
    assert_eq!(set.iter().map(String::as_str).collect::<Vec<_>>(), ["a", "b", "c"]);

    json::from_str_in_place(r#"["d", "c", "a"]"#, &mut set).unwrap();
    assert_eq!(set.iter().map(String::as_str).collect::<Vec<_>>(), ["d", "c", "a"]);
}
