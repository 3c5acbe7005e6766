use horizon_test_utils::logging::init_test_logging;
use horizon_test_utils::{
    assert_array_contains, assert_collection_contains, assert_error_message_contains,
    assert_iter_contains, assert_list_contains, assert_map_contains,
};
use std::collections::{BTreeMap, HashMap, HashSet};

#[test]
fn test_iter_macro_scenarios() {
    init_test_logging();

    let values = vec![1, 2, 3];
    assert_iter_contains!(values.iter(), 1, 2, 3);
    assert_iter_contains!(values.clone(), 1, 2, 3);
    assert_iter_contains!(Vec::<i32>::new());
}

#[test]
#[should_panic(expected = "the iterator contains more than the 2 expected elements")]
fn test_iter_macro_extra_element() {
    let values = vec![1, 2, 3];
    assert_iter_contains!(values.iter(), 1, 2);
}

#[test]
#[should_panic(expected = "the iterator contains only 3 elements but 4 were expected")]
fn test_iter_macro_exhausted_early() {
    let values = vec![1, 2, 3];
    assert_iter_contains!(values.iter(), 1, 2, 3, 4);
}

#[test]
fn test_list_and_array_macros() {
    let list = vec!["cpu".to_string(), "mem".to_string()];
    assert_list_contains!(list, "cpu".to_string(), "mem".to_string());

    let array = [10u64, 20, 30];
    assert_array_contains!(array, 10, 20, 30);
}

#[test]
#[should_panic(expected = "the size of the list does not match the expected one")]
fn test_list_macro_size_mismatch() {
    let list = vec![1, 2, 3];
    assert_list_contains!(list, 1, 2);
}

#[test]
fn test_collection_macro() {
    let set: HashSet<&str> = ["a", "b"].into_iter().collect();
    assert_collection_contains!(set, "b", "a");
    assert_collection_contains!(&set, "a", "b");
}

#[test]
#[should_panic(expected = "does not contain the element: \"c\"")]
fn test_collection_macro_missing_element() {
    let set: HashSet<&str> = ["a", "b"].into_iter().collect();
    assert_collection_contains!(set, "a", "c");
}

#[test]
fn test_map_macro_entries() {
    let mut one = HashMap::new();
    one.insert("a", 1);
    assert_map_contains!(one, "a" => 1);

    let mut two = BTreeMap::new();
    two.insert("a", 1);
    two.insert("b", 2);
    assert_map_contains!(two, "a" => 1, "b" => 2);

    two.insert("c", 3);
    assert_map_contains!(two, "c" => 3, "b" => 2, "a" => 1);
}

#[test]
#[should_panic(expected = "the value of the key \"a\" does not match: expected 2 but was 1")]
fn test_map_macro_wrong_value() {
    let mut map = HashMap::new();
    map.insert("a", 1);
    assert_map_contains!(map, "a" => 2);
}

#[test]
fn test_error_message_macro() {
    let err = anyhow::anyhow!("series cpu.load does not exist");
    assert_error_message_contains!(err, "does not exist");
}

#[test]
#[should_panic(expected = "Message: series cpu.load does not exist")]
fn test_error_message_macro_mismatch() {
    let err = anyhow::anyhow!("series cpu.load does not exist");
    assert_error_message_contains!(err, "already exists");
}

#[test]
fn test_macros_accept_empty_expectation() {
    let list: Vec<i32> = Vec::new();
    assert_list_contains!(list);

    let set: HashSet<String> = HashSet::new();
    assert_collection_contains!(set);

    let map: HashMap<&str, u32> = HashMap::new();
    assert_map_contains!(map);

    let array: [u8; 0] = [];
    assert_array_contains!(array);
}

#[test]
#[should_panic(expected = "the size of the list does not match the expected one: expected 0 but was 1")]
fn test_list_macro_empty_expectation_with_element() {
    let list = vec![1];
    assert_list_contains!(list);
}

#[test]
#[should_panic(expected = "the size of the map does not match the expected one: expected 0 but was 1")]
fn test_map_macro_empty_expectation_with_entry() {
    let mut map = BTreeMap::new();
    map.insert("a", 1);
    assert_map_contains!(map);
}
