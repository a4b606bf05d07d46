// src/sequence/traversal.rs
//
// 1パス走査: MAP, FILTER, REMOVE, UNIQUE, EVERY, FIND系, FOR_EACH
//
// どれも入力を変更せず、新しい列またはスカラーを返す。

use std::collections::HashSet;
use std::hash::Hash;

/// MAP - 各要素を (要素, 位置) から変換した新しい列。長さは変わらない
pub fn map<T, U, F>(s: &[T], mut f: F) -> Vec<U>
where
    F: FnMut(&T, usize) -> U,
{
    let mut mapped = Vec::with_capacity(s.len());
    for (index, item) in s.iter().enumerate() {
        mapped.push(f(item, index));
    }
    mapped
}

/// FILTER - 述語が真の要素だけを順序を保って集める
pub fn filter<T, F>(s: &[T], mut predicate: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, usize) -> bool,
{
    s.iter()
        .enumerate()
        .filter(|&(index, item)| predicate(item, index))
        .map(|(_, item)| item.clone())
        .collect()
}

/// REMOVE - 述語が偽の要素だけを残す（FILTER の補集合）
pub fn remove<T, F>(s: &[T], mut predicate: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, usize) -> bool,
{
    filter(s, |item, index| !predicate(item, index))
}

/// UNIQUE - キーごとに最初に現れた要素だけを残す
pub fn unique<T, K, F>(s: &[T], mut key_of: F) -> Vec<T>
where
    T: Clone,
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    let mut seen = HashSet::with_capacity(s.len());
    let mut kept = Vec::with_capacity(s.len());
    for item in s {
        if seen.insert(key_of(item)) {
            kept.push(item.clone());
        }
    }
    kept
}

/// EVERY - 全要素が述語を満たすか。空列では真
pub fn every<T, F>(s: &[T], predicate: F) -> bool
where
    F: FnMut(&T) -> bool,
{
    s.iter().all(predicate)
}

/// FIND - 先頭から走査して最初に述語を満たす要素
pub fn find<T, F>(s: &[T], mut predicate: F) -> Option<&T>
where
    F: FnMut(&T) -> bool,
{
    s.iter().find(|&item| predicate(item))
}

/// FIND_INDEX - 最初に述語を満たす位置。見つからなければ -1
pub fn find_index<T, F>(s: &[T], predicate: F) -> isize
where
    F: FnMut(&T) -> bool,
{
    s.iter().position(predicate).map_or(-1, |i| i as isize)
}

/// FIND_LAST - 末尾から走査して最初に述語を満たす要素
pub fn find_last<T, F>(s: &[T], mut predicate: F) -> Option<&T>
where
    F: FnMut(&T) -> bool,
{
    s.iter().rev().find(|&item| predicate(item))
}

/// FIND_LAST_INDEX - 最後に述語を満たす位置。見つからなければ -1
pub fn find_last_index<T, F>(s: &[T], predicate: F) -> isize
where
    F: FnMut(&T) -> bool,
{
    s.iter().rposition(predicate).map_or(-1, |i| i as isize)
}

/// FOR_EACH - 列のスナップショットを走査し、各要素と位置を渡す
pub fn for_each<T, F>(s: &[T], mut action: F)
where
    T: Clone,
    F: FnMut(T, usize),
{
    let snapshot = s.to_vec();
    for (index, item) in snapshot.into_iter().enumerate() {
        action(item, index);
    }
}
