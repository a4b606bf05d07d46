// src/error.rs
//
// advslice のエラー型定義
//
// シーケンス操作そのものは全域関数であり、エラーを返さない。
// 範囲外インデックスや不正な範囲は空の結果・no-op・既定値に縮退する。
// エラーが生じうるのは外部との境界（JSON の読み書き、JS 値の変換、
// JS コールバックの呼び出し）に限られる。

use std::fmt;

pub type Result<T> = std::result::Result<T, AdvSliceError>;

#[derive(Debug, Clone, PartialEq)]
pub enum AdvSliceError {
    /// 要素列を JSON テキストへ変換できなかった
    Serialization(String),
    /// JSON テキストを要素列として解釈できなかった
    Deserialization(String),
    /// JS 値と Rust 値の相互変換に失敗した
    JsConversion(String),
    /// JS コールバックが例外を投げた
    CallbackFailed(String),
    Custom(String),
}

impl AdvSliceError {
    pub fn js_conversion(detail: impl fmt::Display) -> Self {
        AdvSliceError::JsConversion(detail.to_string())
    }
}

impl fmt::Display for AdvSliceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdvSliceError::Serialization(msg) => write!(f, "Serialization failed: {}", msg),
            AdvSliceError::Deserialization(msg) => write!(f, "Deserialization failed: {}", msg),
            AdvSliceError::JsConversion(msg) => write!(f, "JS value conversion failed: {}", msg),
            AdvSliceError::CallbackFailed(msg) => write!(f, "Callback failed: {}", msg),
            AdvSliceError::Custom(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for AdvSliceError {}

impl From<String> for AdvSliceError {
    fn from(s: String) -> Self {
        AdvSliceError::Custom(s)
    }
}

impl From<&str> for AdvSliceError {
    fn from(s: &str) -> Self {
        AdvSliceError::Custom(s.to_string())
    }
}
