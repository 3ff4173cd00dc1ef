// SPDX-FileCopyrightText: 2023 Softbear, Inc.
// SPDX-License-Identifier: AGPL-3.0-or-later

use crate::component::button::Button;
use crate::component::link::Link;
use crate::dialog::dialog::{Dialog, DialogBehavior, DialogSize};
use crate::format_message::{format_message, MessageFormat};
use crate::page_handler::PageHandlerRef;
use crate::translation::{get_locale, use_translation, LocaleKey, Translation};
use core_protocol::url::Url;
use stylist::yew::styled_component;
use yew::prelude::*;

pub const WIKI_URL: &str = "https://github.com/brave/brave-browser/wiki/Brave-Leo";

/// Accepting is the only way out.
pub const PRIVACY_DIALOG: DialogBehavior = DialogBehavior {
    is_open: true,
    escape_closes: false,
    backdrop_click_closes: false,
};

#[derive(PartialEq, Properties)]
pub struct PrivacyMessageProps {
    /// What accepting means (dismissing, persisting consent) is up to the parent.
    pub on_agree: Callback<()>,
    pub page_handler: PageHandlerRef,
}

/// The two things a user can do with the notice.
#[derive(Clone, PartialEq)]
pub struct PrivacyActions {
    pub on_agree: Callback<()>,
    pub page_handler: PageHandlerRef,
}

impl PrivacyActions {
    pub fn wiki_link_click(&self) {
        self.page_handler.open_url(Url::new(WIKI_URL));
    }

    pub fn accept(&self) {
        self.on_agree.emit(());
    }
}

/// Text of the notice, in the order it is shown.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PrivacyNotice {
    pub title: &'static str,
    /// Template with a `$1` tag around the wiki link.
    pub about_description: &'static str,
    pub about_description_2: &'static str,
    pub about_description_3: &'static str,
    pub accept_button_label: &'static str,
}

impl PrivacyNotice {
    pub fn new(t: &dyn Translation) -> Self {
        Self {
            title: get_locale(t, LocaleKey::PrivacyTitle),
            about_description: get_locale(t, LocaleKey::AboutDescription),
            about_description_2: get_locale(t, LocaleKey::AboutDescription2),
            about_description_3: get_locale(t, LocaleKey::AboutDescription3),
            accept_button_label: get_locale(t, LocaleKey::AcceptButtonLabel),
        }
    }

    pub fn paragraphs(&self) -> [&'static str; 3] {
        [
            self.about_description,
            self.about_description_2,
            self.about_description_3,
        ]
    }
}

#[styled_component(PrivacyMessage)]
pub fn privacy_message(props: &PrivacyMessageProps) -> Html {
    let t = use_translation();
    let notice = PrivacyNotice::new(&*t);
    let actions = PrivacyActions {
        on_agree: props.on_agree.clone(),
        page_handler: props.page_handler.clone(),
    };

    let dialog_style = css!(
        r#"
        font-family: sans-serif;
    "#
    );

    let about_description = {
        let actions = actions.clone();
        let format = MessageFormat::new().tag("$1", move |content| {
            let actions = actions.clone();
            let onclick = Callback::from(move |_: MouseEvent| actions.wiki_link_click());
            html! {
                <Link href={WIKI_URL} new_tab={true} {onclick}>{content}</Link>
            }
        });
        format_message(notice.about_description, &format)
    };

    let onclick_accept = Callback::from(move |_: MouseEvent| actions.accept());

    html! {
        <Dialog
            is_open={PRIVACY_DIALOG.is_open}
            size={DialogSize::Mobile}
            escape_closes={PRIVACY_DIALOG.escape_closes}
            backdrop_click_closes={PRIVACY_DIALOG.backdrop_click_closes}
            class={classes!(dialog_style)}
            subtitle={html! { {notice.title} }}
            actions={html! {
                <Button onclick={onclick_accept}>{notice.accept_button_label}</Button>
            }}
        >
            <p>{about_description}</p>
            <p>{notice.about_description_2}</p>
            <p>{notice.about_description_3}</p>
        </Dialog>
    }
}
