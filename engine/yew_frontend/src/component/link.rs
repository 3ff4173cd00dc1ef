// SPDX-FileCopyrightText: 2021 Softbear, Inc.
// SPDX-License-Identifier: AGPL-3.0-or-later

use stylist::yew::styled_component;
use web_sys::MouseEvent;
use yew::virtual_dom::AttrValue;
use yew::{html, Callback, Children, Html, Properties};

#[derive(PartialEq, Properties)]
pub struct LinkProps {
    #[prop_or_default]
    pub title: Option<AttrValue>,
    #[prop_or("javascript:void(0)".into())]
    pub href: AttrValue,
    /// If set, the browser's own navigation is suppressed and this handles the click instead.
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
    #[prop_or_default]
    pub new_tab: bool,
    pub children: Children,
}

#[styled_component(Link)]
pub fn link(props: &LinkProps) -> Html {
    let class = css!(
        r#"
        color: #4c54d2;
        cursor: pointer;
        text-decoration: underline;
		"#
    );

    let target = props.new_tab.then_some(AttrValue::Static("_blank"));
    let rel = props.new_tab.then_some(AttrValue::Static("noopener noreferrer"));
    let onclick = props.onclick.clone().map(|onclick| {
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            onclick.emit(e);
        })
    });

    html! {
        <a href={props.href.clone()} title={props.title.clone()} {target} {rel} {onclick} {class}>{props.children.clone()}</a>
    }
}
