// src/sequence/structure.rs
//
// 列構造操作: LENGTH, CONCAT, REVERSE, SORT
//
// REVERSE と SORT は呼び出し元の列をその場で書き換える。
// CONCAT は新しい列を返す。

use std::cmp::Ordering;

pub fn length<T>(s: &[T]) -> usize {
    s.len()
}

/// CONCAT - 与えられた列を順に連結する。入力が無ければ空
pub fn concat<T: Clone>(slices: &[&[T]]) -> Vec<T> {
    let total = slices.iter().map(|s| s.len()).sum();
    let mut joined = Vec::with_capacity(total);
    for s in slices {
        joined.extend_from_slice(s);
    }
    joined
}

/// REVERSE - 両端から内側へ入れ替えて、その場で反転する
pub fn reverse<T>(s: &mut [T]) -> &mut [T] {
    s.reverse();
    s
}

/// SORT - less(a, b) が真なら a を b より前に置く（安定性は保証しない）
pub fn sort<T, F>(s: &mut [T], mut less: F) -> &mut [T]
where
    F: FnMut(&T, &T) -> bool,
{
    s.sort_unstable_by(|a, b| ordering_from_less(&mut less, a, b));
    s
}

/// SORT_STABLE - SORT と同じ順序関係で、等しい要素の相対順を保つ
pub fn sort_stable<T, F>(s: &mut [T], mut less: F) -> &mut [T]
where
    F: FnMut(&T, &T) -> bool,
{
    s.sort_by(|a, b| ordering_from_less(&mut less, a, b));
    s
}

fn ordering_from_less<T, F>(less: &mut F, a: &T, b: &T) -> Ordering
where
    F: FnMut(&T, &T) -> bool,
{
    if less(a, b) {
        Ordering::Less
    } else if less(b, a) {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}
