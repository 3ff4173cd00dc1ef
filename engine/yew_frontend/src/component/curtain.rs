// SPDX-FileCopyrightText: 2021 Softbear, Inc.
// SPDX-License-Identifier: AGPL-3.0-or-later

use stylist::yew::styled_component;
use yew::prelude::*;

#[derive(PartialEq, Properties)]
pub struct CurtainProps {
    pub children: Children,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
}

/// Dims and blocks everything beneath it, centering its children.
#[styled_component(Curtain)]
pub fn curtain(props: &CurtainProps) -> Html {
    let curtain_style = css!(
        r#"
        align-items: center;
        background-color: #0006;
        bottom: 0;
        display: flex;
        justify-content: center;
        left: 0;
        position: fixed;
        right: 0;
        top: 0;
        z-index: 100;
    "#
    );

    html! {
        <div onclick={props.onclick.clone()} class={curtain_style}>
            {props.children.clone()}
        </div>
    }
}
