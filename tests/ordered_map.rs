use insertion_order::ordered_map::Entry;
use insertion_order::{Error, OrderedMap, json};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use serde::{Deserialize, Serialize};

/// The number of operations to perform in each proptest case.
const TEST_SIZE: usize = 2_000;

/// Generates keys from a small range so that operations collide often.
fn key_strategy() -> impl Strategy<Value = i64> {
    -200i64..200i64
}

fn value_strategy() -> impl Strategy<Value = i64> {
    any::<i64>()
}

// ─── Reference model ─────────────────────────────────────────────────────────

/// A deliberately naive insertion-ordered map: a `Vec` searched linearly.
#[derive(Debug, Default)]
struct VecModel {
    entries: Vec<(i64, i64)>,
}

impl VecModel {
    fn insert(&mut self, key: i64, value: i64) -> Option<i64> {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, v)) => Some(std::mem::replace(v, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    fn remove(&mut self, key: i64) -> Option<i64> {
        let index = self.entries.iter().position(|(k, _)| *k == key)?;
        Some(self.entries.remove(index).1)
    }

    fn get(&self, key: i64) -> Option<&i64> {
        self.entries.iter().find(|(k, _)| *k == key).map(|(_, v)| v)
    }

    fn keys(&self) -> Vec<i64> {
        self.entries.iter().map(|(k, _)| *k).collect()
    }
}

// ─── Operations enum for driving randomized tests ────────────────────────────

#[derive(Debug, Clone)]
enum MapOp {
    Insert(i64, i64),
    Remove(i64),
    Get(i64),
    ContainsKey(i64),
    Clear,
}

fn map_op_strategy() -> impl Strategy<Value = MapOp> {
    prop_oneof![
        6 => (key_strategy(), value_strategy()).prop_map(|(k, v)| MapOp::Insert(k, v)),
        3 => key_strategy().prop_map(MapOp::Remove),
        2 => key_strategy().prop_map(MapOp::Get),
        2 => key_strategy().prop_map(MapOp::ContainsKey),
        1 => Just(MapOp::Clear),
    ]
}

// ─── Core operations ─────────────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    /// Replays a random sequence of operations on both OrderedMap and the Vec
    /// model and asserts identical results and order at every step.
    #[test]
    fn map_ops_match_model(ops in proptest::collection::vec(map_op_strategy(), TEST_SIZE)) {
        let mut map: OrderedMap<i64, i64> = OrderedMap::new();
        let mut model = VecModel::default();

        for op in &ops {
            match *op {
                MapOp::Insert(k, v) => {
                    prop_assert_eq!(map.insert(k, v), model.insert(k, v), "insert({}, {})", k, v);
                }
                MapOp::Remove(k) => {
                    prop_assert_eq!(map.remove(&k), model.remove(k), "remove({})", k);
                }
                MapOp::Get(k) => {
                    prop_assert_eq!(map.get(&k), model.get(k), "get({})", k);
                }
                MapOp::ContainsKey(k) => {
                    prop_assert_eq!(map.contains_key(&k), model.get(k).is_some(), "contains_key({})", k);
                }
                MapOp::Clear => {
                    map.clear();
                    model.entries.clear();
                }
            }
            prop_assert_eq!(map.len(), model.entries.len(), "len mismatch after {:?}", op);
        }

        prop_assert_eq!(map.keys().copied().collect::<Vec<_>>(), model.keys());
        let entries: Vec<_> = map.into_iter().collect();
        prop_assert_eq!(entries, model.entries);
    }

    /// Keys added once each come back in exactly the order they were added.
    #[test]
    fn distinct_keys_keep_insertion_order(keys in proptest::collection::hash_set(any::<i64>(), 0..500)) {
        let keys: Vec<i64> = keys.into_iter().collect();
        let map: OrderedMap<i64, ()> = keys.iter().map(|&k| (k, ())).collect();
        prop_assert_eq!(map.keys().copied().collect::<Vec<_>>(), keys);
    }

    /// Iterators in both directions and all flavors agree with each other.
    #[test]
    fn iterators_agree(entries in proptest::collection::vec((key_strategy(), value_strategy()), 0..TEST_SIZE)) {
        let mut map: OrderedMap<i64, i64> = entries.into_iter().collect();

        let pairs: Vec<(i64, i64)> = map.iter().map(|(&k, &v)| (k, v)).collect();
        let keys: Vec<i64> = map.keys().copied().collect();
        let values: Vec<i64> = map.values().copied().collect();
        prop_assert_eq!(keys.clone(), pairs.iter().map(|&(k, _)| k).collect::<Vec<_>>());
        prop_assert_eq!(values.clone(), pairs.iter().map(|&(_, v)| v).collect::<Vec<_>>());

        let mut reversed: Vec<i64> = map.keys().rev().copied().collect();
        reversed.reverse();
        prop_assert_eq!(&reversed, &keys);
        prop_assert_eq!(map.iter().len(), map.len());

        for value in map.values_mut() {
            *value = value.wrapping_add(1);
        }
        let bumped: Vec<i64> = map.values().copied().collect();
        prop_assert_eq!(bumped, values.iter().map(|v| v.wrapping_add(1)).collect::<Vec<_>>());

        prop_assert_eq!(map.clone().into_keys().collect::<Vec<_>>(), keys);
        prop_assert_eq!(map.first().map(|(&k, _)| k), pairs.first().map(|&(k, _)| k));
        prop_assert_eq!(map.last().map(|(&k, _)| k), pairs.last().map(|&(k, _)| k));
    }

    /// `retain` keeps the survivors in their original relative order.
    #[test]
    fn retain_preserves_order(entries in proptest::collection::vec((key_strategy(), value_strategy()), 0..TEST_SIZE)) {
        let mut map: OrderedMap<i64, i64> = entries.into_iter().collect();
        let expected: Vec<i64> = map.keys().copied().filter(|k| k % 3 != 0).collect();
        map.retain(|k, _| k % 3 != 0);
        prop_assert_eq!(map.keys().copied().collect::<Vec<_>>(), expected);
    }

    /// Encoding then decoding yields the same keys, values and order.
    #[test]
    fn json_round_trip(entries in proptest::collection::vec(("[a-z]{1,6}", value_strategy()), 0..200)) {
        let map: OrderedMap<String, i64> = entries.into_iter().collect();
        let text = json::to_string(&map).unwrap();
        let decoded: OrderedMap<String, i64> = json::from_str(&text).unwrap();
        prop_assert_eq!(decoded, map);
    }
}

// ─── Ordering scenarios ──────────────────────────────────────────────────────

#[test]
fn update_keeps_position_and_delete_drops_key() {
    let mut map = OrderedMap::new();
    map.insert("a", "aa");
    map.insert("b", "bb");
    map.insert("b", "bbb");
    map.insert("c", "c");
    map.remove("c");

    assert_eq!(map.get("b"), Some(&"bbb"));
    assert_eq!(map.keys().copied().collect::<Vec<_>>(), ["a", "b"]);
}

#[test]
fn reinserting_a_removed_key_moves_it_to_the_end() {
    let mut map = OrderedMap::new();
    map.insert("a", "aa");
    map.insert("b", "bb");
    map.insert("c", "cc");
    assert_eq!(map.keys().copied().collect::<Vec<_>>(), ["a", "b", "c"]);

    map.insert("a", "aaa");
    assert_eq!(map.get("a"), Some(&"aaa"));

    map.remove("c");
    assert_eq!(map.keys().copied().collect::<Vec<_>>(), ["a", "b"]);

    map.insert("c", "123");
    assert_eq!(map.keys().copied().collect::<Vec<_>>(), ["a", "b", "c"]);
    assert_eq!(map.get("c"), Some(&"123"));

    map.remove("b");
    assert_eq!(map.keys().copied().collect::<Vec<_>>(), ["a", "c"]);
    map.insert("b", "b");
    assert_eq!(map.keys().copied().collect::<Vec<_>>(), ["a", "c", "b"]);
}

#[test]
fn missing_keys_are_not_errors() {
    let mut map: OrderedMap<&str, i32> = OrderedMap::new();
    assert_eq!(map.get("d"), None);
    assert!(!map.contains_key("d"));
    assert_eq!(map.remove("d"), None);

    map.insert("d", 1);
    map.remove("d");
    assert_eq!(map.get("d"), None);
}

#[test]
fn keys_snapshot_is_independent_of_later_mutation() {
    let mut map = OrderedMap::from([("a".to_string(), 1), ("b".to_string(), 2)]);
    let snapshot: Vec<String> = map.keys().cloned().collect();
    map.remove("a");
    map.insert("c".to_string(), 3);
    assert_eq!(snapshot, ["a", "b"]);
    assert_eq!(map.keys().cloned().collect::<Vec<_>>(), ["b", "c"]);
}

#[test]
fn clear_never_reuses_positions() {
    let mut map = OrderedMap::from([(1, 'a'), (2, 'b')]);
    map.clear();
    map.insert(2, 'b');
    map.insert(1, 'a');
    assert_eq!(map.keys().copied().collect::<Vec<_>>(), [2, 1]);
}

#[test]
fn entry_api_respects_insertion_order() {
    let mut map = OrderedMap::from([("x", 1)]);
    *map.entry("y").or_insert(0) += 5;
    *map.entry("x").or_insert(0) += 5;

    match map.entry("x") {
        Entry::Occupied(o) => assert_eq!(o.remove_entry(), ("x", 6)),
        Entry::Vacant(_) => panic!("x is present"),
    }
    map.entry("x").or_default();
    assert_eq!(map.into_iter().collect::<Vec<_>>(), [("y", 5), ("x", 0)]);
}

#[test]
fn extend_from_references() {
    let source = OrderedMap::from([(3, 30), (1, 10)]);
    let mut map = OrderedMap::from([(1, 0)]);
    map.extend(&source);
    assert_eq!(map.into_iter().collect::<Vec<_>>(), [(1, 10), (3, 30)]);
}

// ─── Serialization ───────────────────────────────────────────────────────────

#[test]
fn serializes_members_in_insertion_order() {
    let mut map = OrderedMap::new();
    map.insert("a", "aa");
    map.insert("b", "bb");
    map.insert("c", "cc");
    assert_eq!(json::to_string(&map).unwrap(), r#"{"a":"aa","b":"bb","c":"cc"}"#);

    let mut map = OrderedMap::new();
    map.insert("key2", "value2");
    map.insert("key1", "value1");
    assert_eq!(serde_json::to_string(&map).unwrap(), r#"{"key2":"value2","key1":"value1"}"#);
}

#[test]
fn deserializes_members_in_text_order() {
    let map: OrderedMap<String, String> = json::from_str(r#"{"c":"cc","b":"bb","a":"aa"}"#).unwrap();
    assert_eq!(map.keys().map(String::as_str).collect::<Vec<_>>(), ["c", "b", "a"]);
    assert_eq!(map.get("b").map(String::as_str), Some("bb"));
}

#[test]
fn repeated_member_keeps_first_position_and_last_value() {
    let map: OrderedMap<String, i32> = json::from_str(r#"{"a":1,"b":2,"a":3}"#).unwrap();
    assert_eq!(map.into_iter().collect::<Vec<_>>(), [("a".to_string(), 3), ("b".to_string(), 2)]);
}

#[test]
fn empty_map_serializes_as_empty_object() {
    let map: OrderedMap<String, i32> = OrderedMap::new();
    assert_eq!(json::to_string(&map).unwrap(), "{}");
    assert!(json::from_str::<OrderedMap<String, i32>>("{}").unwrap().is_empty());
}

#[test]
fn null_round_trips_as_absent_map() {
    let absent: Option<OrderedMap<String, String>> = None;
    assert_eq!(json::to_string(&absent).unwrap(), "null");

    let decoded: Option<OrderedMap<String, String>> = json::from_str("null").unwrap();
    assert!(decoded.is_none());

    let decoded: OrderedMap<String, String> = json::from_str("null").unwrap();
    assert!(decoded.is_empty());
}

#[test]
fn malformed_text_is_rejected_without_touching_target() {
    let mut map = OrderedMap::from([("keep".to_string(), "me".to_string())]);

    for text in ["--...{", "[1,2]", r#"{"a":"aa""#, r#"{"a":1}"#, r#"{"a" "aa"}"#] {
        let result = json::from_str_in_place(text, &mut map);
        assert!(matches!(result, Err(Error::MalformedInput { .. })), "accepted {text:?}");
    }
    assert_eq!(map.into_iter().collect::<Vec<_>>(), [("keep".to_string(), "me".to_string())]);
}

#[test]
fn non_string_keys_cannot_be_serialized() {
    let map = OrderedMap::from([(1, "one"), (2, "two")]);
    let error = json::to_string(&map).unwrap_err();
    assert_eq!(
        error,
        Error::UnsupportedKeyType {
            type_name: "i32".to_string()
        }
    );
    assert!(serde_json::to_string(&map).is_err());
}

#[test]
fn empty_map_with_non_string_keys_has_no_key_to_reject() {
    let mut map = OrderedMap::from([(1, "one")]);
    map.remove(&1);
    assert_eq!(json::to_string(&map).unwrap(), "{}");
}

#[test]
fn non_string_keys_cannot_be_deserialized() {
    let result = json::from_str::<OrderedMap<i32, i32>>(r#"{"1":1}"#);
    assert!(matches!(result, Err(Error::MalformedInput { .. })));
}

#[derive(Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
enum Channel {
    Stable,
    Beta,
    Nightly,
}

#[derive(Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
struct Host(String);

#[test]
fn string_like_keys_round_trip() {
    let mut map = OrderedMap::new();
    map.insert(Channel::Nightly, 3);
    map.insert(Channel::Stable, 1);
    map.insert(Channel::Beta, 2);
    let text = json::to_string(&map).unwrap();
    assert_eq!(text, r#"{"nightly":3,"stable":1,"beta":2}"#);
    assert_eq!(json::from_str::<OrderedMap<Channel, i32>>(&text).unwrap(), map);

    let hosts = OrderedMap::from([(Host("b.example".to_string()), 443), (Host("a.example".to_string()), 80)]);
    let text = json::to_string(&hosts).unwrap();
    assert_eq!(text, r#"{"b.example":443,"a.example":80}"#);
    assert_eq!(json::from_str::<OrderedMap<Host, u16>>(&text).unwrap(), hosts);
}

#[test]
fn borrowed_str_keys_round_trip() {
    let mut map: OrderedMap<&str, &str> = OrderedMap::new();
    map.insert("c", "cc");
    map.insert("b", "bb");
    map.insert("a", "aa");
    let text = json::to_string(&map).unwrap();
    assert_eq!(text, r#"{"c":"cc","b":"bb","a":"aa"}"#);

    let decoded: OrderedMap<&str, &str> = json::from_str(&text).unwrap();
    assert_eq!(decoded.keys().copied().collect::<Vec<_>>(), ["c", "b", "a"]);
    assert_eq!(decoded, map);

    let decoded: OrderedMap<&str, &str> = json::from_str(r#"{"c":"cc","b":"bb","a":"aa"}"#).unwrap();
    assert_eq!(decoded.get("b"), Some(&"bb"));
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Manifest {
    name: String,
    dependencies: OrderedMap<String, String>,
    #[serde(default)]
    overrides: Option<OrderedMap<String, String>>,
}

#[test]
fn nested_maps_keep_their_order() {
    let text = r#"{"name":"app","dependencies":{"zlib":"1.3","openssl":"3.0","abseil":"2024"},"overrides":null}"#;
    let manifest: Manifest = json::from_str(text).unwrap();
    assert_eq!(
        manifest.dependencies.keys().map(String::as_str).collect::<Vec<_>>(),
        ["zlib", "openssl", "abseil"]
    );
    assert_eq!(manifest.overrides, None);
    assert_eq!(json::to_string(&manifest).unwrap(), text);
}
