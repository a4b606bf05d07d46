// src/wasm_api/mod.rs
//
// 【責務】
// JavaScript から AdvancedSlice を使うための wasm-bindgen 境界。
// 要素は serde_json::Value として保持し、JS 値とは serde-wasm-bindgen で
// 相互変換する。コールバックは js_sys::Function で受け取り、
// 最初の例外で処理を打ち切って Err(JsValue) として返す（callback.rs）。
// 失敗した操作は列を変更しない。

use js_sys::Function;
use serde::Serialize;
use serde_json::Value;
use smallvec::SmallVec;
use wasm_bindgen::prelude::*;

use crate::advanced::{AdvancedSlice, AdvancedSliceOps};
use crate::error::AdvSliceError;
use crate::sequence;

mod callback;


impl From<AdvSliceError> for JsValue {
    fn from(err: AdvSliceError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// オブジェクトは Map ではなく素の JS オブジェクトとして渡す
fn to_js<S: Serialize + ?Sized>(value: &S) -> Result<JsValue, JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| AdvSliceError::js_conversion(e).into())
}

fn from_js(value: JsValue) -> Result<Value, JsValue> {
    serde_wasm_bindgen::from_value(value)
        .map_err(|e| AdvSliceError::js_conversion(e).into())
}

fn to_indexes(raw: &[i32]) -> SmallVec<[isize; 3]> {
    raw.iter().map(|&i| i as isize).collect()
}

/// 文字列はそのまま、それ以外は JSON テキストとして連結用に整形する
fn display_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// コールバックを (要素, 位置) で呼び出す
fn invoke(f: &Function, elem: &Value, index: usize) -> Result<JsValue, JsValue> {
    let elem = to_js(elem)?;
    f.call2(&JsValue::NULL, &elem, &JsValue::from_f64(index as f64))
}

fn invoke_predicate(f: &Function, elem: &Value, index: usize) -> Result<bool, JsValue> {
    invoke(f, elem, index).map(|result| result.is_truthy())
}

/// コールバックの例外を CallbackFailed として呼び出し元へ返す
fn callback_failed(thrown: JsValue) -> JsValue {
    let detail = thrown
        .as_string()
        .unwrap_or_else(|| format!("{:?}", thrown));
    AdvSliceError::CallbackFailed(detail).into()
}

#[wasm_bindgen]
pub struct JsAdvancedSlice {
    inner: AdvancedSlice<Value>,
}

#[wasm_bindgen]
impl JsAdvancedSlice {
    #[wasm_bindgen(constructor)]
    pub fn new(values: JsValue) -> Result<JsAdvancedSlice, JsValue> {
        let data: Vec<Value> = if values.is_undefined() || values.is_null() {
            Vec::new()
        } else {
            serde_wasm_bindgen::from_value(values)
                .map_err(AdvSliceError::js_conversion)?
        };
        Ok(JsAdvancedSlice {
            inner: AdvancedSlice::new(data),
        })
    }

    #[wasm_bindgen(js_name = fromJson)]
    pub fn from_json(text: &str) -> Result<JsAdvancedSlice, JsValue> {
        let data: Vec<Value> = sequence::from_json_str(text)?;
        Ok(JsAdvancedSlice {
            inner: AdvancedSlice::new(data),
        })
    }

    #[wasm_bindgen]
    pub fn values(&self) -> Result<JsValue, JsValue> {
        to_js(self.inner.values())
    }

    #[wasm_bindgen]
    pub fn length(&self) -> usize {
        self.inner.length()
    }

    #[wasm_bindgen]
    pub fn slice(&mut self, indexes: Vec<i32>) {
        self.inner.slice(&to_indexes(&indexes));
    }

    #[wasm_bindgen]
    pub fn fill(&mut self, value: JsValue, indexes: Vec<i32>) -> Result<(), JsValue> {
        let value = from_js(value)?;
        self.inner.fill(value, &to_indexes(&indexes));
        Ok(())
    }

    /// 範囲外は undefined
    #[wasm_bindgen]
    pub fn at(&self, index: i32) -> Result<JsValue, JsValue> {
        match self.inner.at(index as isize) {
            Some(v) => to_js(v),
            None => Ok(JsValue::UNDEFINED),
        }
    }

    #[wasm_bindgen(js_name = removeAt)]
    pub fn remove_at(&mut self, index: i32) {
        self.inner.remove_at(index as isize);
    }

    #[wasm_bindgen(js_name = copyWithIn)]
    pub fn copy_within(&mut self, indexes: Vec<i32>) {
        self.inner.copy_within(&to_indexes(&indexes));
    }

    #[wasm_bindgen]
    pub fn reverse(&mut self) {
        self.inner.reverse();
    }

    #[wasm_bindgen]
    pub fn concat(&mut self, other: &JsAdvancedSlice) {
        self.inner.concat(std::slice::from_ref(&other.inner));
    }

    #[wasm_bindgen]
    pub fn push(&mut self, value: JsValue) -> Result<(), JsValue> {
        let value = from_js(value)?;
        self.inner.push([value]);
        Ok(())
    }

    #[wasm_bindgen]
    pub fn pop(&mut self) -> Result<JsValue, JsValue> {
        match self.inner.pop() {
            Some(v) => to_js(&v),
            None => Ok(JsValue::UNDEFINED),
        }
    }

    #[wasm_bindgen]
    pub fn shift(&mut self) -> Result<JsValue, JsValue> {
        match self.inner.shift() {
            Some(v) => to_js(&v),
            None => Ok(JsValue::UNDEFINED),
        }
    }

    #[wasm_bindgen]
    pub fn unshift(&mut self, value: JsValue) -> Result<(), JsValue> {
        let value = from_js(value)?;
        self.inner.unshift([value]);
        Ok(())
    }

    #[wasm_bindgen]
    pub fn join(&self, separator: Option<String>) -> String {
        let texts = sequence::map(self.inner.values(), |v, _| display_text(v));
        sequence::join(&texts, separator.as_deref())
    }

    #[wasm_bindgen(js_name = toString)]
    pub fn to_json_string(&self) -> String {
        self.inner.to_json_string()
    }

    /// JSON 表現が等しい要素を重複とみなす
    #[wasm_bindgen(js_name = uniqueByJson)]
    pub fn unique_by_json(&mut self) {
        self.inner.unique(|v| v.to_string());
    }

    #[wasm_bindgen]
    pub fn map(&mut self, f: &Function) -> Result<(), JsValue> {
        let mapped = callback::try_map(self.inner.values(), |elem, index| {
            invoke(f, elem, index).and_then(from_js)
        });
        callback::commit(&mut self.inner, mapped).map_err(callback_failed)
    }

    #[wasm_bindgen]
    pub fn filter(&self, f: &Function) -> Result<JsValue, JsValue> {
        let kept = callback::try_filter(self.inner.values(), |elem, index| {
            invoke_predicate(f, elem, index)
        })
        .map_err(callback_failed)?;
        to_js(&kept)
    }

    #[wasm_bindgen]
    pub fn remove(&mut self, f: &Function) -> Result<(), JsValue> {
        let kept = callback::try_remove(self.inner.values(), |elem, index| {
            invoke_predicate(f, elem, index)
        });
        callback::commit(&mut self.inner, kept).map_err(callback_failed)
    }

    #[wasm_bindgen]
    pub fn every(&self, f: &Function) -> Result<bool, JsValue> {
        callback::try_every(self.inner.values(), |elem, index| {
            invoke_predicate(f, elem, index)
        })
        .map_err(callback_failed)
    }

    #[wasm_bindgen(js_name = findIndex)]
    pub fn find_index(&self, f: &Function) -> Result<i32, JsValue> {
        let found = callback::try_find_index(self.inner.values(), |elem, index| {
            invoke_predicate(f, elem, index)
        })
        .map_err(callback_failed)?;
        Ok(found as i32)
    }

    #[wasm_bindgen(js_name = findLastIndex)]
    pub fn find_last_index(&self, f: &Function) -> Result<i32, JsValue> {
        let found = callback::try_find_last_index(self.inner.values(), |elem, index| {
            invoke_predicate(f, elem, index)
        })
        .map_err(callback_failed)?;
        Ok(found as i32)
    }

    /// f(a, b) が truthy なら a を b より前に置く
    #[wasm_bindgen]
    pub fn sort(&mut self, f: &Function) -> Result<(), JsValue> {
        let sorted = callback::try_sorted(self.inner.values(), |a, b| {
            let (a, b) = (to_js(a)?, to_js(b)?);
            f.call2(&JsValue::NULL, &a, &b).map(|result| result.is_truthy())
        });
        callback::commit(&mut self.inner, sorted).map_err(callback_failed)
    }
}
