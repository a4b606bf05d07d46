// src/advanced/mod.rs
//
// 【責務】
// 1つの列を所有し、sequence の自由関数をメソッドとして連鎖的に
// 呼び出せるようにするラッパー（AdvancedSlice）を提供する。
//
// 変更系メソッド（map/unique/slice/fill/sort/reverse/remove/remove_at/
// concat/copy_within/push系/unshift系）は内部の列を置き換え、
// 同じインスタンスを &mut Self で返す。
// 参照系メソッド（every/find系/at/join/for_each/filter）は列を変更しない。

use serde::Serialize;
use std::fmt;
use std::hash::Hash;

use crate::sequence;
use crate::trace::seq_trace;

#[cfg(test)]
mod tests;

/// ラッパーが提供する操作の一覧
pub trait AdvancedSliceOps<T: Clone> {
    fn length(&self) -> usize;

    fn values(&self) -> &[T];

    fn map<F>(&mut self, f: F) -> &mut Self
    where
        F: FnMut(&T, usize) -> T;

    fn unique<K, F>(&mut self, key_of: F) -> &mut Self
    where
        K: Eq + Hash,
        F: FnMut(&T) -> K;

    fn concat(&mut self, others: &[Self]) -> &mut Self
    where
        Self: Sized;

    fn copy_within(&mut self, indexes: &[isize]) -> &mut Self;

    fn every<F>(&self, predicate: F) -> bool
    where
        F: FnMut(&T) -> bool;

    fn find<F>(&self, predicate: F) -> Option<&T>
    where
        F: FnMut(&T) -> bool;

    fn find_index<F>(&self, predicate: F) -> isize
    where
        F: FnMut(&T) -> bool;

    fn find_last<F>(&self, predicate: F) -> Option<&T>
    where
        F: FnMut(&T) -> bool;

    fn find_last_index<F>(&self, predicate: F) -> isize
    where
        F: FnMut(&T) -> bool;

    fn for_each<F>(&self, action: F)
    where
        F: FnMut(T, usize);

    fn join(&self, separator: Option<&str>) -> String
    where
        T: fmt::Display;

    fn to_json_string(&self) -> String
    where
        T: Serialize;

    fn slice(&mut self, indexes: &[isize]) -> &mut Self;

    fn fill(&mut self, value: T, indexes: &[isize]) -> &mut Self;

    fn at(&self, index: isize) -> Option<&T>;

    fn sort<F>(&mut self, less: F) -> &mut Self
    where
        F: FnMut(&T, &T) -> bool;

    fn filter<F>(&self, predicate: F) -> Vec<T>
    where
        F: FnMut(&T, usize) -> bool;

    fn remove<F>(&mut self, predicate: F) -> &mut Self
    where
        F: FnMut(&T, usize) -> bool;

    fn remove_at(&mut self, index: isize) -> &mut Self;

    fn reverse(&mut self) -> &mut Self;

    fn push<I>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator<Item = T>;

    fn push_slice(&mut self, others: &[Self]) -> &mut Self
    where
        Self: Sized;

    fn pop(&mut self) -> Option<T>;

    /// 末尾を取り出す。空なら (T::default(), false)
    fn pop_is(&mut self) -> (T, bool)
    where
        T: Default;

    fn shift(&mut self) -> Option<T>;

    /// 先頭を取り出す。空なら (T::default(), false)
    fn shift_is(&mut self) -> (T, bool)
    where
        T: Default;

    fn unshift<I>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator<Item = T>;

    fn unshift_slice(&mut self, others: &[Self]) -> &mut Self
    where
        Self: Sized;
}

/// 列を1つ所有する連鎖操作用ラッパー
///
/// ```
/// use advslice_core::{AdvancedSlice, AdvancedSliceOps};
///
/// let mut s = AdvancedSlice::new(vec![5, 3, 1, 4, 2]);
/// s.sort(|a, b| a < b).slice(&[1, 4]).map(|x, _| x * 10);
/// assert_eq!(s.values(), &[20, 30, 40]);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AdvancedSlice<T> {
    data: Vec<T>,
}

impl<T> AdvancedSlice<T> {
    pub fn new(data: Vec<T>) -> Self {
        AdvancedSlice { data }
    }

    pub fn into_values(self) -> Vec<T> {
        self.data
    }
}

impl<T> From<Vec<T>> for AdvancedSlice<T> {
    fn from(data: Vec<T>) -> Self {
        AdvancedSlice::new(data)
    }
}

impl<T> FromIterator<T> for AdvancedSlice<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        AdvancedSlice::new(iter.into_iter().collect())
    }
}

impl<T: Clone> AdvancedSliceOps<T> for AdvancedSlice<T> {
    fn length(&self) -> usize {
        sequence::length(&self.data)
    }

    fn values(&self) -> &[T] {
        &self.data
    }

    fn map<F>(&mut self, f: F) -> &mut Self
    where
        F: FnMut(&T, usize) -> T,
    {
        self.data = sequence::map(&self.data, f);
        self
    }

    fn unique<K, F>(&mut self, key_of: F) -> &mut Self
    where
        K: Eq + Hash,
        F: FnMut(&T) -> K,
    {
        self.data = sequence::unique(&self.data, key_of);
        self
    }

    fn concat(&mut self, others: &[Self]) -> &mut Self {
        let mut parts: Vec<&[T]> = Vec::with_capacity(others.len() + 1);
        parts.push(&self.data);
        parts.extend(others.iter().map(|other| other.data.as_slice()));
        self.data = sequence::concat(&parts);
        self
    }

    fn copy_within(&mut self, indexes: &[isize]) -> &mut Self {
        self.data = sequence::copy_within(&self.data, indexes);
        self
    }

    fn every<F>(&self, predicate: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        sequence::every(&self.data, predicate)
    }

    fn find<F>(&self, predicate: F) -> Option<&T>
    where
        F: FnMut(&T) -> bool,
    {
        sequence::find(&self.data, predicate)
    }

    fn find_index<F>(&self, predicate: F) -> isize
    where
        F: FnMut(&T) -> bool,
    {
        sequence::find_index(&self.data, predicate)
    }

    fn find_last<F>(&self, predicate: F) -> Option<&T>
    where
        F: FnMut(&T) -> bool,
    {
        sequence::find_last(&self.data, predicate)
    }

    fn find_last_index<F>(&self, predicate: F) -> isize
    where
        F: FnMut(&T) -> bool,
    {
        sequence::find_last_index(&self.data, predicate)
    }

    fn for_each<F>(&self, action: F)
    where
        F: FnMut(T, usize),
    {
        sequence::for_each(&self.data, action)
    }

    fn join(&self, separator: Option<&str>) -> String
    where
        T: fmt::Display,
    {
        sequence::join(&self.data, separator)
    }

    fn to_json_string(&self) -> String
    where
        T: Serialize,
    {
        sequence::to_json_string(&self.data)
    }

    fn slice(&mut self, indexes: &[isize]) -> &mut Self {
        self.data = sequence::slice(&self.data, indexes);
        self
    }

    fn fill(&mut self, value: T, indexes: &[isize]) -> &mut Self {
        sequence::fill(&mut self.data, value, indexes);
        self
    }

    fn at(&self, index: isize) -> Option<&T> {
        sequence::at(&self.data, index)
    }

    fn sort<F>(&mut self, less: F) -> &mut Self
    where
        F: FnMut(&T, &T) -> bool,
    {
        sequence::sort(&mut self.data, less);
        self
    }

    fn filter<F>(&self, predicate: F) -> Vec<T>
    where
        F: FnMut(&T, usize) -> bool,
    {
        sequence::filter(&self.data, predicate)
    }

    fn remove<F>(&mut self, predicate: F) -> &mut Self
    where
        F: FnMut(&T, usize) -> bool,
    {
        self.data = sequence::remove(&self.data, predicate);
        self
    }

    fn remove_at(&mut self, index: isize) -> &mut Self {
        let data = std::mem::take(&mut self.data);
        self.data = sequence::remove_at(data, index);
        self
    }

    fn reverse(&mut self) -> &mut Self {
        sequence::reverse(&mut self.data);
        self
    }

    fn push<I>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator<Item = T>,
    {
        self.data.extend(values);
        self
    }

    fn push_slice(&mut self, others: &[Self]) -> &mut Self {
        for other in others {
            self.data.extend_from_slice(&other.data);
        }
        self
    }

    fn pop(&mut self) -> Option<T> {
        self.data.pop()
    }

    fn pop_is(&mut self) -> (T, bool)
    where
        T: Default,
    {
        match self.data.pop() {
            Some(v) => (v, true),
            None => (T::default(), false),
        }
    }

    fn shift(&mut self) -> Option<T> {
        if self.data.is_empty() {
            None
        } else {
            Some(self.data.remove(0))
        }
    }

    fn shift_is(&mut self) -> (T, bool)
    where
        T: Default,
    {
        match self.shift() {
            Some(v) => (v, true),
            None => (T::default(), false),
        }
    }

    fn unshift<I>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator<Item = T>,
    {
        let head: Vec<T> = values.into_iter().collect();
        seq_trace!("unshift {} onto {}", head.len(), self.data.len());
        self.data.splice(0..0, head);
        self
    }

    // 各列を順番に先頭へ挿入するため、後に渡した列ほど前に来る
    fn unshift_slice(&mut self, others: &[Self]) -> &mut Self {
        for other in others {
            self.data.splice(0..0, other.data.iter().cloned());
        }
        self
    }
}

/// STRING と同じ JSON 表現
impl<T: Serialize> fmt::Display for AdvancedSlice<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", sequence::to_json_string(&self.data))
    }
}
