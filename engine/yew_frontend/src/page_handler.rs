// SPDX-FileCopyrightText: 2023 Softbear, Inc.
// SPDX-License-Identifier: AGPL-3.0-or-later

use crate::ptr_eq_rc::PtrEqRc;
use core_protocol::url::Url;
use js_hooks::{console_error, describe_error, window};
use std::rc::Rc;

/// Browser-level actions performed on behalf of the page. Fire and forget; implementations
/// log their own failures.
pub trait PageHandler {
    fn open_url(&self, url: Url);
}

/// Passed to components as a property.
pub type PageHandlerRef = PtrEqRc<dyn PageHandler>;

/// Opens urls in a new tab of the current browser.
#[derive(Default)]
pub struct BrowserPageHandler;

impl PageHandler for BrowserPageHandler {
    fn open_url(&self, url: Url) {
        let Some(window) = window() else {
            console_error!("cannot open {}: no window", url);
            return;
        };
        match window.open_with_url_and_target(url.as_str(), "_blank") {
            Ok(Some(_)) => {}
            Ok(None) => console_error!("cannot open {}: blocked", url),
            Err(e) => console_error!("cannot open {}: {}", url, describe_error(&e)),
        }
    }
}

/// Forwards requests to the frame that embeds the page, which performs them outside of the
/// page's process.
#[cfg(feature = "embedder")]
#[derive(Default)]
pub struct EmbedderPageHandler;

#[cfg(feature = "embedder")]
impl EmbedderPageHandler {
    fn post(&self, request: &core_protocol::rpc::PageHandlerRequest) -> Result<(), String> {
        let json = serde_json::to_string(request).map_err(|e| e.to_string())?;
        let parent = window()
            .ok_or("no window")?
            .parent()
            .map_err(|e| describe_error(&e))?
            .ok_or("no parent")?;
        parent
            .post_message(&wasm_bindgen::JsValue::from_str(&json), "*")
            .map_err(|e| describe_error(&e))
    }
}

#[cfg(feature = "embedder")]
impl PageHandler for EmbedderPageHandler {
    fn open_url(&self, url: Url) {
        let request = core_protocol::rpc::PageHandlerRequest::OpenUrl(url);
        if let Err(e) = self.post(&request) {
            console_error!("cannot send {:?}: {}", request, e);
        }
    }
}

/// Picks the page handler for the current environment.
pub fn page_handler() -> PageHandlerRef {
    #[cfg(feature = "embedder")]
    if js_hooks::is_framed() {
        return PtrEqRc::from(Rc::new(EmbedderPageHandler) as Rc<dyn PageHandler>);
    }
    PtrEqRc::from(Rc::new(BrowserPageHandler) as Rc<dyn PageHandler>)
}
