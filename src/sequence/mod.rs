// src/sequence/mod.rs
//
// 【責務】
// 要素型 T の列（Vec<T> / &[T]）に対する自由関数群を提供する。
// インデックス指定の解決（resolver）、位置指定操作（SLICE/FILL/AT/
// REMOVE_AT/COPY_WITHIN）、1パス走査（MAP/FILTER/UNIQUE/FIND系など）、
// 構造操作（CONCAT/REVERSE/SORT）、文字列化（JOIN/STRING）を含む。
//
// 【その場で書き換える操作】
// FILL, REVERSE, SORT は呼び出し元の列を変更する。
// それ以外は入力を変更せず新しい列または値を返す。
// REMOVE_AT は所有権を受け取り、同じ列を返す。

pub mod position;
pub mod resolver;
pub mod structure;
pub mod text;
pub mod traversal;


pub use position::{at, copy_within, fill, remove_at, slice};
pub use resolver::{resolve_fill, resolve_slice, FillRange, IndexSpec, SliceRange};
pub use structure::{concat, length, reverse, sort, sort_stable};
pub use text::{
    from_json_str, join, to_json_string, try_to_json_string, DEFAULT_SEPARATOR, EMPTY_JSON,
};
pub use traversal::{
    every, filter, find, find_index, find_last, find_last_index, for_each, map, remove, unique,
};
