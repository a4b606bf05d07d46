// src/lib.rs
//
// 【責務】
// advslice の公開窓口。
// sequence（自由関数群）、advanced（連鎖操作ラッパー）、
// wasm_api（JavaScript 向けバインディング）を束ねて再公開する。

mod trace;

pub mod advanced;
pub mod error;
pub mod sequence;
pub mod wasm_api;

pub use advanced::{AdvancedSlice, AdvancedSliceOps};
pub use error::{AdvSliceError, Result};
pub use sequence::{
    at, concat, copy_within, every, fill, filter, find, find_index, find_last, find_last_index,
    for_each, from_json_str, join, length, map, remove, remove_at, reverse, slice, sort,
    sort_stable, to_json_string, try_to_json_string, unique, DEFAULT_SEPARATOR, EMPTY_JSON,
};
pub use wasm_api::JsAdvancedSlice;
