// SPDX-FileCopyrightText: 2022 Softbear, Inc.
// SPDX-License-Identifier: AGPL-3.0-or-later

use gloo_events::EventListener;
use js_hooks::window;
use std::marker::PhantomData;
use wasm_bindgen::JsCast;

/// Listens to a certain event type on the window, until dropped.
pub struct WindowEventListener<E> {
    _inner: Option<EventListener>,
    _spooky: PhantomData<E>,
}

impl<E: JsCast> WindowEventListener<E> {
    /// Listens to nothing if there is no window.
    pub fn new(name: &'static str, mut callback: impl FnMut(&E) + 'static) -> Self {
        Self {
            _inner: window().map(|window| {
                EventListener::new(&window, name, move |event| {
                    // Browsers sometimes dispatch a plain Event, so don't check the type.
                    callback(event.unchecked_ref::<E>());
                })
            }),
            _spooky: PhantomData,
        }
    }
}
