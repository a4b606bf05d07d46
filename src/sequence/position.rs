// src/sequence/position.rs
//
// 位置指定操作（0オリジン）: SLICE, FILL, AT, REMOVE_AT, COPY_WITHIN
//
// 範囲外の指定はエラーにならず、空の結果・no-op・None に縮退する。

use super::resolver::{resolve_fill, resolve_slice, IndexSpec};
use crate::trace::seq_trace;

/// SLICE - インデックス指定に従って部分列を取り出す（新しい列を返す）
///
/// - `[]` : 全体のコピー
/// - `[b]` : b 以降。b が長さを超えれば空。b<0 は反転して b+1 を再解決
/// - `[b, e]` : `[b, e)`。e は長さで打ち切る。b>e なら空
/// - `[b, e, s]` : b から s 刻みで e 未満。b>=e または s<=0 なら空
///
/// 4個目以降のインデックスは無視する。元の列は変更しない。
///
/// ```
/// use advslice_core::slice;
///
/// assert_eq!(slice(&[1, 2, 3, 4, 5], &[1, 4]), vec![2, 3, 4]);
/// assert_eq!(slice(&[1, 2, 3, 4, 5], &[1, 4, 2]), vec![2, 4]);
/// ```
pub fn slice<T: Clone>(s: &[T], indexes: &[isize]) -> Vec<T> {
    match resolve_slice(IndexSpec::parse(indexes), s.len()) {
        Some(range) => range.extract(s),
        None => Vec::new(),
    }
}

/// FILL - 指定範囲をその場で value に置き換え、同じ列を返す
///
/// - `[]` : 全要素
/// - `[b]` : b 以降。b が長さ以上なら何もしない
/// - `[b, e]` : `[b, e)`。b>=e なら何もしない（元データは保持）
///
/// b<0 の場合は列をその場で反転してから、反転後の向きで充填する。
/// 列は反転したまま残る。3個目以降のインデックスは無視する。
pub fn fill<'a, T: Clone>(s: &'a mut [T], value: T, indexes: &[isize]) -> &'a mut [T] {
    let plan = resolve_fill(IndexSpec::parse(indexes), s.len());
    if plan.is_reversed() {
        s.reverse();
    }
    if let Some((begin, end)) = plan.range() {
        seq_trace!("fill [{}, {}) of {}", begin, end, s.len());
        for slot in &mut s[begin..end] {
            *slot = value.clone();
        }
    }
    s
}

/// AT - 指定位置の要素を返す。範囲外（負数を含む）は None
pub fn at<T>(s: &[T], index: isize) -> Option<&T> {
    if index < 0 {
        return None;
    }
    s.get(index as usize)
}

/// REMOVE_AT - 指定位置の要素を1つ取り除く。範囲外なら列をそのまま返す
pub fn remove_at<T>(mut s: Vec<T>, index: isize) -> Vec<T> {
    if index >= 0 && (index as usize) < s.len() {
        s.remove(index as usize);
    }
    s
}

/// COPY_WITHIN - 指定した位置の要素を、指定順に集めた新しい列を返す
///
/// 範囲外の位置は黙って読み飛ばす。同じ位置を複数回指定してもよい。
pub fn copy_within<T: Clone>(s: &[T], indexes: &[isize]) -> Vec<T> {
    indexes
        .iter()
        .filter_map(|&index| at(s, index).cloned())
        .collect()
}
