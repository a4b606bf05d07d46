// src/wasm_api/callback.rs
//
// 【責務】
// 失敗しうるコールバックで sequence の操作を駆動する。
// 最初の失敗を FailureLatch に保持し、以降のコールバックは呼ばない。
// 失敗した場合は新しい列を返さないので、呼び出し元の列はそのまま残る。
// エラー型は任意（JS 側では JsValue）。

use crate::advanced::AdvancedSlice;
use crate::sequence;

/// 最初の失敗だけを保持する
pub(crate) struct FailureLatch<E> {
    failure: Option<E>,
}

impl<E> FailureLatch<E> {
    pub(crate) fn new() -> Self {
        FailureLatch { failure: None }
    }

    pub(crate) fn is_tripped(&self) -> bool {
        self.failure.is_some()
    }

    /// 失敗済みなら f を呼ばずに fallback を返す
    pub(crate) fn run<T, F>(&mut self, fallback: T, f: F) -> T
    where
        F: FnOnce() -> Result<T, E>,
    {
        if self.is_tripped() {
            return fallback;
        }
        match f() {
            Ok(value) => value,
            Err(e) => {
                self.failure = Some(e);
                fallback
            }
        }
    }

    pub(crate) fn finish<T>(self, value: T) -> Result<T, E> {
        match self.failure {
            Some(e) => Err(e),
            None => Ok(value),
        }
    }
}

/// 末尾から visited 番目（1 始まり）の要素の位置
pub(crate) fn reverse_position(len: usize, visited: usize) -> usize {
    len - visited
}

pub(crate) fn try_map<T, U, E, F>(s: &[T], mut f: F) -> Result<Vec<U>, E>
where
    U: Default,
    F: FnMut(&T, usize) -> Result<U, E>,
{
    let mut latch = FailureLatch::new();
    let mapped = sequence::map(s, |item, index| latch.run(U::default(), || f(item, index)));
    latch.finish(mapped)
}

pub(crate) fn try_filter<T, E, F>(s: &[T], mut predicate: F) -> Result<Vec<T>, E>
where
    T: Clone,
    F: FnMut(&T, usize) -> Result<bool, E>,
{
    let mut latch = FailureLatch::new();
    let kept = sequence::filter(s, |item, index| {
        latch.run(false, || predicate(item, index))
    });
    latch.finish(kept)
}

pub(crate) fn try_remove<T, E, F>(s: &[T], mut predicate: F) -> Result<Vec<T>, E>
where
    T: Clone,
    F: FnMut(&T, usize) -> Result<bool, E>,
{
    let mut latch = FailureLatch::new();
    let kept = sequence::remove(s, |item, index| {
        latch.run(false, || predicate(item, index))
    });
    latch.finish(kept)
}

pub(crate) fn try_every<T, E, F>(s: &[T], mut predicate: F) -> Result<bool, E>
where
    F: FnMut(&T, usize) -> Result<bool, E>,
{
    let mut latch = FailureLatch::new();
    let mut index = 0;
    let all = sequence::every(s, |item| {
        let at = index;
        index += 1;
        latch.run(false, || predicate(item, at))
    });
    latch.finish(all)
}

pub(crate) fn try_find_index<T, E, F>(s: &[T], mut predicate: F) -> Result<isize, E>
where
    F: FnMut(&T, usize) -> Result<bool, E>,
{
    let mut latch = FailureLatch::new();
    let mut index = 0;
    let found = sequence::find_index(s, |item| {
        let at = index;
        index += 1;
        latch.run(false, || predicate(item, at))
    });
    latch.finish(found)
}

pub(crate) fn try_find_last_index<T, E, F>(s: &[T], mut predicate: F) -> Result<isize, E>
where
    F: FnMut(&T, usize) -> Result<bool, E>,
{
    let mut latch = FailureLatch::new();
    let len = s.len();
    let mut visited = 0;
    let found = sequence::find_last_index(s, |item| {
        visited += 1;
        let at = reverse_position(len, visited);
        latch.run(false, || predicate(item, at))
    });
    latch.finish(found)
}

/// 並べ替えた複製を返す。入力は変更しない
pub(crate) fn try_sorted<T, E, F>(s: &[T], mut less: F) -> Result<Vec<T>, E>
where
    T: Clone,
    F: FnMut(&T, &T) -> Result<bool, E>,
{
    let mut latch = FailureLatch::new();
    let mut sorted = s.to_vec();
    sequence::sort(&mut sorted, |a, b| latch.run(false, || less(a, b)));
    latch.finish(sorted)
}

/// 成功したときだけ列を置き換える
pub(crate) fn commit<T, E>(
    target: &mut AdvancedSlice<T>,
    next: Result<Vec<T>, E>,
) -> Result<(), E> {
    *target = AdvancedSlice::new(next?);
    Ok(())
}
