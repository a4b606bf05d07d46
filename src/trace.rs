// src/trace.rs
//
// 診断ログ（trace-resolve フィーチャ有効時のみ）
//
// wasm32 ではブラウザコンソールへ、それ以外では log ファサードへ出力する。
// フィーチャ無効時は何も展開しない。

#[cfg(feature = "trace-resolve")]
pub(crate) fn emit(line: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&wasm_bindgen::JsValue::from_str(line));

    #[cfg(not(target_arch = "wasm32"))]
    log::trace!(target: "advslice", "{}", line);
}

#[cfg(feature = "trace-resolve")]
macro_rules! seq_trace {
    ($($arg:tt)*) => {
        $crate::trace::emit(&format!($($arg)*))
    };
}

#[cfg(not(feature = "trace-resolve"))]
macro_rules! seq_trace {
    ($($arg:tt)*) => {
        ()
    };
}

pub(crate) use seq_trace;
