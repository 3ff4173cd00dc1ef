// SPDX-FileCopyrightText: 2021 Softbear, Inc.
// SPDX-License-Identifier: AGPL-3.0-or-later

#![warn(missing_docs)]
#![crate_name = "js_hooks"]

//! # Js Hooks
//!
//! [`js_hooks`][`crate`] is a collection of utilities for a WASM frontend running inside a
//! browser page, such as the chat side panel.

use js_sys::Reflect;
use std::fmt;
use wasm_bindgen::prelude::*;
use web_sys::Window;

/// Gets the window, if running in a browsing context.
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Gets the preferred language of the user, such as `"en-US"`.
pub fn navigator_language() -> Option<String> {
    window()?.navigator().language()
}

/// Returns true if the page is displayed inside another frame (e.g. a browser side panel
/// that hosts the page).
pub fn is_framed() -> bool {
    let Some(window) = window() else {
        return false;
    };
    match window.parent() {
        Ok(Some(parent)) => {
            let parent: &JsValue = parent.as_ref();
            let this: &JsValue = window.as_ref();
            parent != this
        }
        _ => false,
    }
}

/// Extracts an error message from a JavaScript error.
pub fn error_message(error: &JsValue) -> Option<String> {
    Reflect::get(error, &JsValue::from_str("message"))
        .as_ref()
        .ok()
        .and_then(JsValue::as_string)
}

/// Formats a JavaScript error for logging, preferring its message.
pub fn describe_error(error: &JsValue) -> String {
    error_message(error).unwrap_or_else(|| format!("{:?}", error))
}

/// Log an error to JavaScript's console. Use this instead of [`eprintln!`].
#[macro_export]
macro_rules! console_error {
    ($($t:tt)*) => {
        $crate::error_args(&format_args!($($t)*))
    };
}

/// Log to JavaScript's console. Use this instead of [`println!`].
#[macro_export]
macro_rules! console_log {
    ($($t:tt)*) => {
        $crate::log_args(&format_args!($($t)*))
    };
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn error(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

#[cfg(target_arch = "wasm32")]
#[doc(hidden)]
pub fn error_args(args: &fmt::Arguments) {
    error(&args.to_string())
}

#[cfg(target_arch = "wasm32")]
#[doc(hidden)]
pub fn log_args(args: &fmt::Arguments) {
    log(&args.to_string())
}

// Outside the browser (native tests, server rendering) there is no console to write to.
#[cfg(not(target_arch = "wasm32"))]
#[doc(hidden)]
pub fn error_args(args: &fmt::Arguments) {
    eprintln!("{}", args)
}

#[cfg(not(target_arch = "wasm32"))]
#[doc(hidden)]
pub fn log_args(args: &fmt::Arguments) {
    println!("{}", args)
}
