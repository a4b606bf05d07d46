// src/sequence/resolver.rs
//
// 【責務】
// 可変長のインデックス指定（0〜3個の整数）を、シーケンス長に対する
// 具体的な抽出範囲・充填範囲へ解決する。SLICE と FILL が共有する。
//
// 負数の開始位置は「反転したシーケンスに対して解決し直す」ことで扱う。
// 反転は概念上のもので、解決結果は reversed フラグとして返す。
//
// | 指定               | SLICE                              | FILL                          |
// |--------------------|------------------------------------|-------------------------------|
// | ()                 | 全体                               | 全体                          |
// | (b)                | b<0: 反転して (b+1) を再解決        | b<0: 反転して (-b-1)          |
// | (b, e)             | b<0: 反転して (b+1, -e-1) を再解決  | b<0: 反転して (-b-1, -e-1)    |
// | (b, e, s)          | b<0: 反転して (-b-1, -e-1, s)       | 第3引数以降は無視             |
// | 4個以上            | 先頭3個のみ使用                    | 先頭2個のみ使用               |

use smallvec::SmallVec;
use std::fmt;

use crate::trace::seq_trace;

/// インデックス指定の引数個数による分類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexSpec {
    /// 引数なし
    All,
    /// (begin)
    From(isize),
    /// (begin, end)
    Range(isize, isize),
    /// (begin, end, step)
    Stepped(isize, isize, isize),
}

impl IndexSpec {
    /// 引数列を個数で分類する。4個目以降は無視する。
    pub fn parse(indexes: &[isize]) -> Self {
        match *indexes {
            [] => IndexSpec::All,
            [begin] => IndexSpec::From(begin),
            [begin, end] => IndexSpec::Range(begin, end),
            [begin, end, step, ..] => IndexSpec::Stepped(begin, end, step),
        }
    }

    pub fn args(&self) -> SmallVec<[isize; 3]> {
        match *self {
            IndexSpec::All => SmallVec::new(),
            IndexSpec::From(b) => smallvec::smallvec![b],
            IndexSpec::Range(b, e) => smallvec::smallvec![b, e],
            IndexSpec::Stepped(b, e, s) => smallvec::smallvec![b, e, s],
        }
    }
}

impl fmt::Display for IndexSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, arg) in self.args().iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", arg)?;
        }
        write!(f, ")")
    }
}

/// SLICE の解決結果
///
/// `is_reversed()` が真のとき、位置は反転したシーケンス上の位置を表す。
/// 抽出位置は `begin, begin+step, ...` で `end` 未満。
/// resolve_slice だけが作るので、`begin <= end <= len` かつ `step >= 1` が成り立つ。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliceRange {
    reversed: bool,
    begin: usize,
    end: usize,
    step: usize,
}

impl SliceRange {
    fn new(reversed: bool, begin: usize, end: usize, step: usize) -> Self {
        SliceRange {
            reversed,
            begin,
            end,
            step,
        }
    }

    pub fn is_reversed(&self) -> bool {
        self.reversed
    }

    pub fn begin(&self) -> usize {
        self.begin
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn positions(&self) -> impl Iterator<Item = usize> {
        (self.begin..self.end).step_by(self.step)
    }

    /// 元のシーケンスを変更せずに要素を取り出す
    ///
    /// 解決時より短い列を渡した場合、はみ出した位置は読み飛ばす。
    pub fn extract<T: Clone>(&self, s: &[T]) -> Vec<T> {
        let len = s.len();
        let reversed = self.reversed;
        self.positions()
            .take_while(|&i| i < len)
            .map(|i| {
                if reversed {
                    s[len - 1 - i].clone()
                } else {
                    s[i].clone()
                }
            })
            .collect()
    }
}

/// FILL の解決結果
///
/// `is_reversed()` が真のとき、充填前にシーケンスをその場で反転する。
/// `range()` が None なら充填は行わない。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FillRange {
    reversed: bool,
    range: Option<(usize, usize)>,
}

impl FillRange {
    fn new(reversed: bool, range: Option<(usize, usize)>) -> Self {
        FillRange { reversed, range }
    }

    pub fn is_reversed(&self) -> bool {
        self.reversed
    }

    /// 充填する `[begin, end)`。`begin < end <= len` が成り立つ
    pub fn range(&self) -> Option<(usize, usize)> {
        self.range
    }
}

/// SLICE 用の解決。None は空の結果を意味する。
pub fn resolve_slice(spec: IndexSpec, len: usize) -> Option<SliceRange> {
    let resolved = match spec {
        IndexSpec::All => Some(SliceRange::new(false, 0, len, 1)),
        IndexSpec::From(begin) => resolve_slice_from(begin, len),
        IndexSpec::Range(begin, end) => resolve_slice_range(begin, end, len),
        IndexSpec::Stepped(begin, end, step) => resolve_slice_stepped(begin, end, step, len),
    };
    seq_trace!("resolve_slice {} len={} -> {:?}", spec, len, resolved);
    resolved
}

/// (b) で b<0 のとき、反転と b+1 を b が 0 になるまで繰り返す。
/// 反転回数は -b 回なので、奇数なら反転済みの全体、偶数なら全体になる。
fn resolve_slice_from(begin: isize, len: usize) -> Option<SliceRange> {
    if begin < 0 {
        let reversed = begin.unsigned_abs() % 2 == 1;
        return Some(SliceRange::new(reversed, 0, len, 1));
    }
    let begin = begin as usize;
    if begin > len {
        return None;
    }
    Some(SliceRange::new(false, begin, len, 1))
}

/// (b, e) で b<0 のとき、1回の再解決で (b+1, -e-1) になる。
/// -e-1 は !e に等しく、2回適用すると e に戻る。
fn resolve_slice_range(begin: isize, end: isize, len: usize) -> Option<SliceRange> {
    let (begin, end, reversed) = if begin < 0 {
        let turns = begin.unsigned_abs();
        let end = if turns % 2 == 1 { !end } else { end };
        (0isize, end, turns % 2 == 1)
    } else {
        (begin, end, false)
    };

    let end = clamp_end(end, len);
    if begin > end {
        return None;
    }
    Some(SliceRange::new(reversed, begin as usize, end as usize, 1))
}

/// (b, e, s) で b<0 のときは (-b-1, -e-1, s) で1回だけ再解決する。
/// -b-1 は必ず 0 以上になる。
fn resolve_slice_stepped(
    begin: isize,
    end: isize,
    step: isize,
    len: usize,
) -> Option<SliceRange> {
    let (begin, end, reversed) = if begin < 0 {
        (!begin, !end, true)
    } else {
        (begin, end, false)
    };

    let end = clamp_end(end, len);
    if begin >= end {
        return None;
    }
    if step <= 0 {
        return None;
    }
    Some(SliceRange::new(
        reversed,
        begin as usize,
        end as usize,
        step as usize,
    ))
}

/// FILL 用の解決。第3引数以降は無視する。
pub fn resolve_fill(spec: IndexSpec, len: usize) -> FillRange {
    let resolved = match spec {
        IndexSpec::All => FillRange::new(false, Some((0, len))),
        IndexSpec::From(begin) => {
            let (begin, reversed) = if begin < 0 {
                (!begin, true)
            } else {
                (begin, false)
            };
            let begin = begin as usize;
            let range = if begin >= len {
                None
            } else {
                Some((begin, len))
            };
            FillRange::new(reversed, range)
        }
        IndexSpec::Range(begin, end) | IndexSpec::Stepped(begin, end, _) => {
            let (begin, end, reversed) = if begin < 0 {
                (!begin, !end, true)
            } else {
                (begin, end, false)
            };
            let end = clamp_end(end, len);
            // begin >= end は no-op（元データは破棄しない）
            let range = if begin >= end {
                None
            } else {
                Some((begin as usize, end as usize))
            };
            FillRange::new(reversed, range)
        }
    };
    seq_trace!("resolve_fill {} len={} -> {:?}", spec, len, resolved);
    resolved
}

fn clamp_end(end: isize, len: usize) -> isize {
    let len = len as isize;
    if end >= len {
        len
    } else {
        end
    }
}
