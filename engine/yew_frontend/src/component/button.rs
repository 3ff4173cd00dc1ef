// SPDX-FileCopyrightText: 2023 Softbear, Inc.
// SPDX-License-Identifier: AGPL-3.0-or-later

use stylist::yew::styled_component;
use yew::prelude::*;

#[derive(PartialEq, Properties)]
pub struct ButtonProps {
    pub onclick: Callback<MouseEvent>,
    pub children: Children,
}

#[styled_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    let class = css!(
        r#"
        background-color: #4c54d2;
        border: none;
        border-radius: 0.75rem;
        color: white;
        cursor: pointer;
        font-size: 1rem;
        font-weight: 600;
        padding: 0.6em 1.2em;
        white-space: nowrap;

        :hover {
            background-color: #3f48cc;
        }
    "#
    );
    html! {
        <button type="button" onclick={props.onclick.clone()} {class}>{props.children.clone()}</button>
    }
}
