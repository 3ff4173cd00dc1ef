// SPDX-FileCopyrightText: 2023 Softbear, Inc.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Chat side panel frontend. Until the user acknowledges the privacy notice, the notice is all
//! that is shown.

pub mod component;
pub mod consent;
pub mod dialog;
pub mod format_message;
pub mod page_handler;
pub mod ptr_eq_rc;
pub mod storage;
pub mod translation;
pub mod window;

use crate::consent::ConsentStore;
use crate::dialog::privacy_message::PrivacyMessage;
use crate::page_handler::page_handler;
use core_protocol::id::LanguageId;
use js_hooks::{console_error, console_log, navigator_language};
use stylist::yew::{styled_component, Global};
use yew::prelude::*;

#[styled_component(App)]
pub fn app() -> Html {
    let language_id = use_state(|| {
        navigator_language()
            .map(|tag| LanguageId::from_tag(&tag))
            .unwrap_or_default()
    });
    let page_handler = use_state(page_handler);
    let accepted = use_state(|| ConsentStore::local().accepted());

    let on_agree = {
        let accepted = accepted.clone();
        Callback::from(move |_: ()| {
            match ConsentStore::local().accept() {
                Ok(()) => console_log!("privacy notice accepted"),
                // Still let them in, they'll just be asked again next time.
                Err(e) => console_error!("could not remember privacy consent: {}", e),
            }
            accepted.set(true);
        })
    };

    let global_style = css!(
        r#"
        body {
            margin: 0;
            padding: 0;
        }
    "#
    );

    html! {
        <ContextProvider<LanguageId> context={*language_id}>
            <Global css={global_style}/>
            if *accepted {
                <main id="conversation"></main>
            } else {
                <PrivacyMessage {on_agree} page_handler={(*page_handler).clone()}/>
            }
        </ContextProvider<LanguageId>>
    }
}

/// Mounts [`App`] on the document body.
pub fn entry_point() {
    yew::Renderer::<App>::new().render();
}
