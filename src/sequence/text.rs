// src/sequence/text.rs
//
// 文字列化: JOIN（各要素の Display を連結）と STRING（JSON 表現）

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::{self, Write};

use crate::error::{AdvSliceError, Result};

/// JOIN の既定の区切り文字
pub const DEFAULT_SEPARATOR: &str = "";

/// 空コレクションの正準テキスト。STRING が失敗したときもこれを返す
pub const EMPTY_JSON: &str = "[]";

/// JOIN - 各要素を Display で文字列化し、区切り文字で連結する
pub fn join<T: fmt::Display>(s: &[T], separator: Option<&str>) -> String {
    let separator = separator.unwrap_or(DEFAULT_SEPARATOR);
    let mut out = String::new();
    for (i, item) in s.iter().enumerate() {
        if i > 0 {
            out.push_str(separator);
        }
        // String への書き込みは失敗しない
        let _ = write!(out, "{}", item);
    }
    out
}

/// STRING - JSON 配列として文字列化する。失敗時は "[]"
pub fn to_json_string<T: Serialize>(s: &[T]) -> String {
    try_to_json_string(s).unwrap_or_else(|_| EMPTY_JSON.to_string())
}

pub fn try_to_json_string<T: Serialize>(s: &[T]) -> Result<String> {
    serde_json::to_string(s)
        .map_err(|e| AdvSliceError::Serialization(e.to_string()))
}

/// JSON 配列テキストから列を作る
pub fn from_json_str<T: DeserializeOwned>(text: &str) -> Result<Vec<T>> {
    serde_json::from_str(text)
        .map_err(|e| AdvSliceError::Deserialization(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_join_with_and_without_separator() {
        assert_eq!(join(&[1, 2, 3], Some("-")), "1-2-3");
        assert_eq!(join(&[1, 2, 3], None), "123");
        assert_eq!(join::<i32>(&[], Some("-")), "");
        assert_eq!(join(&["a", "b"], Some(", ")), "a, b");
    }

    #[test]
    fn test_to_json_string_numbers() {
        assert_eq!(to_json_string(&[1, 2, 3]), "[1,2,3]");
        assert_eq!(to_json_string::<i32>(&[]), "[]");
    }

    #[test]
    fn test_to_json_string_mixed_values() {
        let mixed = vec![
            serde_json::json!(1),
            serde_json::json!("two"),
            serde_json::json!(3.5),
        ];
        assert_eq!(to_json_string(&mixed), "[1,\"two\",3.5]");
    }

    #[test]
    fn test_to_json_string_falls_back_on_unserializable() {
        // 配列をキーに持つマップは JSON にできない
        let mut map = BTreeMap::new();
        map.insert(vec![1], "one");
        let data = vec![map];

        assert!(matches!(
            try_to_json_string(&data),
            Err(AdvSliceError::Serialization(_))
        ));
        assert_eq!(to_json_string(&data), EMPTY_JSON);
    }

    #[test]
    fn test_from_json_str() {
        let parsed: Vec<i64> = from_json_str("[4, 5, 6]").unwrap();
        assert_eq!(parsed, vec![4, 5, 6]);

        let err = from_json_str::<i64>("[4, \"five\"]").unwrap_err();
        assert!(matches!(err, AdvSliceError::Deserialization(_)));
    }
}
