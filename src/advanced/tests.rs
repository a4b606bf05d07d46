// src/advanced/tests.rs

use super::*;

fn create_slice(data: &[i32]) -> AdvancedSlice<i32> {
    AdvancedSlice::new(data.to_vec())
}

// ========================================================================
// 変更系メソッド
// ========================================================================

#[test]
fn test_map_replaces_values() {
    let mut s = create_slice(&[1, 2, 3]);
    s.map(|x, _| x * 2);
    assert_eq!(s.values(), &[2, 4, 6]);

    let mut empty = create_slice(&[]);
    assert_eq!(empty.map(|x, _| x + 1).length(), 0);
}

#[test]
fn test_unique_by_key() {
    let mut s = AdvancedSlice::new(vec!["apple", "banana", "apple", "cherry", "banana"]);
    s.unique(|x| *x);
    assert_eq!(s.values(), &["apple", "banana", "cherry"]);

    let mut same = AdvancedSlice::new(vec!["apple", "apple", "apple"]);
    same.unique(|_| "same");
    assert_eq!(same.values(), &["apple"]);
}

#[test]
fn test_concat_appends_other_wrappers() {
    let mut s = create_slice(&[1, 2, 3]);
    s.concat(&[create_slice(&[4, 5, 6]), create_slice(&[7, 8, 9])]);
    assert_eq!(s.values(), &[1, 2, 3, 4, 5, 6, 7, 8, 9]);

    let mut empty = create_slice(&[]);
    empty.concat(&[]);
    assert!(empty.values().is_empty());
}

#[test]
fn test_copy_within() {
    let mut s = create_slice(&[10, 20, 30]);
    s.copy_within(&[2, 2, 7, 0]);
    assert_eq!(s.values(), &[30, 30, 10]);
}

#[test]
fn test_slice_and_fill() {
    let mut s = create_slice(&[1, 2, 3, 4, 5]);
    s.slice(&[1, 4]);
    assert_eq!(s.values(), &[2, 3, 4]);

    let mut s = create_slice(&[1, 2, 3, 4, 5]);
    s.fill(0, &[1, 4]);
    assert_eq!(s.values(), &[1, 0, 0, 0, 5]);

    let mut s = create_slice(&[1, 2, 3]);
    s.fill(0, &[]);
    assert_eq!(s.values(), &[0, 0, 0]);
}

#[test]
fn test_fill_empty_range_does_not_discard_data() {
    let mut s = create_slice(&[1, 2, 3]);
    s.fill(0, &[2, 1]);
    assert_eq!(s.values(), &[1, 2, 3]);
}

#[test]
fn test_sort_reverse_remove() {
    let mut s = create_slice(&[3, 1, 2]);
    s.sort(|a, b| a < b);
    assert_eq!(s.values(), &[1, 2, 3]);

    s.reverse();
    assert_eq!(s.values(), &[3, 2, 1]);

    let mut s = create_slice(&[1, 2, 3, 4, 5]);
    s.remove(|_, i| i % 2 == 0);
    assert_eq!(s.values(), &[2, 4]);
}

#[test]
fn test_remove_at() {
    let mut s = create_slice(&[1, 2, 3, 4]);
    s.remove_at(2);
    assert_eq!(s.values(), &[1, 2, 4]);

    s.remove_at(5);
    assert_eq!(s.values(), &[1, 2, 4], "out of range leaves the data alone");
}

#[test]
fn test_chaining_returns_same_instance() {
    let mut s = create_slice(&[4, 1, 3, 2, 2]);
    s.unique(|x| *x).sort(|a, b| a < b).push([9]).remove_at(0);
    assert_eq!(s.values(), &[2, 3, 4, 9]);
}

// ========================================================================
// push / pop / shift / unshift
// ========================================================================

#[test]
fn test_push_and_push_slice() {
    let mut s = create_slice(&[1, 2]);
    s.push(vec![3, 4]);
    assert_eq!(s.values(), &[1, 2, 3, 4]);

    let mut s = create_slice(&[1, 2]);
    s.push_slice(&[create_slice(&[3, 4]), create_slice(&[5, 6])]);
    assert_eq!(s.values(), &[1, 2, 3, 4, 5, 6]);
}

#[test]
fn test_pop_and_pop_is() {
    let mut s = create_slice(&[1, 2, 3]);
    assert_eq!(s.pop(), Some(3));
    assert_eq!(s.pop_is(), (2, true));
    assert_eq!(s.values(), &[1]);

    let mut empty = create_slice(&[]);
    assert_eq!(empty.pop(), None);
    assert_eq!(empty.pop_is(), (0, false));
}

#[test]
fn test_pop_is_distinguishes_genuine_zero() {
    let mut s = create_slice(&[0]);
    assert_eq!(s.pop_is(), (0, true));
    assert_eq!(s.pop_is(), (0, false));
}

#[test]
fn test_shift_and_shift_is() {
    let mut s = create_slice(&[1, 2, 3]);
    assert_eq!(s.shift(), Some(1));
    assert_eq!(s.shift_is(), (2, true));
    assert_eq!(s.values(), &[3]);

    let mut empty: AdvancedSlice<String> = AdvancedSlice::default();
    assert_eq!(empty.shift(), None);
    assert_eq!(empty.shift_is(), (String::new(), false));
}

#[test]
fn test_unshift_keeps_block_order() {
    let mut s = create_slice(&[4, 5]);
    s.unshift(vec![1, 2, 3]);
    assert_eq!(s.values(), &[1, 2, 3, 4, 5]);

    let mut empty = create_slice(&[]);
    empty.unshift(vec![1, 2, 3]);
    assert_eq!(empty.values(), &[1, 2, 3]);
}

#[test]
fn test_unshift_slice_prepends_each_in_turn() {
    let mut s = create_slice(&[4, 5]);
    s.unshift_slice(&[create_slice(&[1, 2]), create_slice(&[3])]);
    assert_eq!(s.values(), &[3, 1, 2, 4, 5]);
}

// ========================================================================
// 参照系メソッド
// ========================================================================

#[test]
fn test_read_only_methods_leave_data() {
    let s = create_slice(&[1, 2, 3, 2]);

    assert!(s.every(|x| *x > 0));
    assert_eq!(s.find(|x| *x > 1), Some(&2));
    assert_eq!(s.find_index(|x| *x == 2), 1);
    assert_eq!(s.find_last(|x| *x < 3), Some(&2));
    assert_eq!(s.find_last_index(|x| *x == 2), 3);
    assert_eq!(s.find_index(|x| *x == 7), -1);
    assert_eq!(s.filter(|x, _| x % 2 == 0), vec![2, 2]);
    assert_eq!(s.at(1), Some(&2));
    assert_eq!(s.at(9), None);
    assert_eq!(s.join(Some(",")), "1,2,3,2");
    assert_eq!(s.join(None), "1232");

    assert_eq!(s.values(), &[1, 2, 3, 2]);
}

#[test]
fn test_for_each_receives_index() {
    let s = create_slice(&[7, 8]);
    let mut seen = Vec::new();
    s.for_each(|x, i| seen.push((i, x)));
    assert_eq!(seen, vec![(0, 7), (1, 8)]);
}

#[test]
fn test_display_and_to_json_string() {
    let s = create_slice(&[1, 2, 3]);
    assert_eq!(s.to_string(), "[1,2,3]");
    assert_eq!(s.to_json_string(), "[1,2,3]");
    assert_eq!(create_slice(&[]).to_string(), "[]");
}

#[test]
fn test_constructors() {
    let from_vec: AdvancedSlice<i32> = vec![1, 2].into();
    let collected: AdvancedSlice<i32> = (1..=2).collect();
    assert_eq!(from_vec, collected);
    assert_eq!(collected.into_values(), vec![1, 2]);
}
