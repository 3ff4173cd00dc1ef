// SPDX-FileCopyrightText: 2022 Softbear, Inc.
// SPDX-License-Identifier: AGPL-3.0-or-later

use crate::component::curtain::Curtain;
use crate::window::event_listener::WindowEventListener;
use stylist::yew::styled_component;
use web_sys::KeyboardEvent;
use yew::prelude::*;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum DialogSize {
    /// Narrow, for side panels.
    Mobile,
    #[default]
    Normal,
}

/// Ways a user may try to dismiss a dialog without using its own controls.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DismissTrigger {
    Escape,
    BackdropClick,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DialogBehavior {
    pub is_open: bool,
    pub escape_closes: bool,
    pub backdrop_click_closes: bool,
}

impl DialogBehavior {
    /// Whether `trigger` should close the dialog. Closed dialogs can't be dismissed again.
    pub fn dismisses(self, trigger: DismissTrigger) -> bool {
        self.is_open
            && match trigger {
                DismissTrigger::Escape => self.escape_closes,
                DismissTrigger::BackdropClick => self.backdrop_click_closes,
            }
    }
}

impl Default for DialogBehavior {
    fn default() -> Self {
        Self {
            is_open: true,
            escape_closes: true,
            backdrop_click_closes: true,
        }
    }
}

#[derive(PartialEq, Properties)]
pub struct DialogProps {
    #[prop_or(true)]
    pub is_open: bool,
    #[prop_or_default]
    pub size: DialogSize,
    #[prop_or(true)]
    pub escape_closes: bool,
    #[prop_or(true)]
    pub backdrop_click_closes: bool,
    /// Emitted when dismissed by escape or backdrop click, if those are enabled.
    #[prop_or_default]
    pub on_close: Option<Callback<()>>,
    #[prop_or_default]
    pub subtitle: Html,
    #[prop_or_default]
    pub actions: Html,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

impl DialogProps {
    pub fn behavior(&self) -> DialogBehavior {
        DialogBehavior {
            is_open: self.is_open,
            escape_closes: self.escape_closes,
            backdrop_click_closes: self.backdrop_click_closes,
        }
    }
}

#[styled_component(Dialog)]
pub fn dialog(props: &DialogProps) -> Html {
    let behavior = props.behavior();

    use_effect_with_deps(
        |(behavior, on_close)| {
            let listener = on_close
                .clone()
                .filter(|_| behavior.dismisses(DismissTrigger::Escape))
                .map(|on_close| {
                    WindowEventListener::new("keydown", move |event: &KeyboardEvent| {
                        if event.key() == "Escape" {
                            on_close.emit(());
                        }
                    })
                });
            move || drop(listener)
        },
        (behavior, props.on_close.clone()),
    );

    let modal_style = css!(
        r#"
        background-color: #fff;
        border-radius: 1rem;
        box-shadow: 0 0.5rem 2rem #0004;
        box-sizing: border-box;
        color: #1a1c20;
        display: flex;
        flex-direction: column;
        gap: 1rem;
        max-height: 90%;
        padding: 1.5rem;
        text-align: left;
    "#
    );

    let size_style = match props.size {
        DialogSize::Mobile => css!("width: min(22rem, 90%);"),
        DialogSize::Normal => css!("width: min(40rem, 90%);"),
    };

    let subtitle_style = css!(
        r#"
        font-size: 1.25rem;
        font-weight: 600;
    "#
    );

    let content_style = css!(
        r#"
        line-height: 1.5;
        overflow-y: auto;
    "#
    );

    let actions_style = css!(
        r#"
        display: flex;
        gap: 0.5rem;
        justify-content: flex-end;
    "#
    );

    if !behavior.is_open {
        return html! {};
    }

    let onclick_backdrop = props.on_close.clone().map(|on_close| {
        Callback::from(move |_: MouseEvent| {
            if behavior.dismisses(DismissTrigger::BackdropClick) {
                on_close.emit(());
            }
        })
    });

    html! {
        <Curtain onclick={onclick_backdrop}>
            <div
                role="dialog"
                aria-modal="true"
                class={classes!(modal_style, size_style, props.class.clone())}
                onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}
            >
                <div slot="subtitle" class={subtitle_style}>{props.subtitle.clone()}</div>
                <div class={content_style}>{props.children.clone()}</div>
                <div slot="actions" class={actions_style}>{props.actions.clone()}</div>
            </div>
        </Curtain>
    }
}

#[cfg(test)]
mod tests {
    use crate::dialog::dialog::{DialogBehavior, DismissTrigger};

    #[test]
    fn dismisses() {
        let closable = DialogBehavior::default();
        assert!(closable.dismisses(DismissTrigger::Escape));
        assert!(closable.dismisses(DismissTrigger::BackdropClick));

        let escape_only = DialogBehavior {
            backdrop_click_closes: false,
            ..closable
        };
        assert!(escape_only.dismisses(DismissTrigger::Escape));
        assert!(!escape_only.dismisses(DismissTrigger::BackdropClick));

        let backdrop_only = DialogBehavior {
            escape_closes: false,
            ..closable
        };
        assert!(!backdrop_only.dismisses(DismissTrigger::Escape));
        assert!(backdrop_only.dismisses(DismissTrigger::BackdropClick));

        let closed = DialogBehavior {
            is_open: false,
            ..closable
        };
        assert!(!closed.dismisses(DismissTrigger::Escape));
        assert!(!closed.dismisses(DismissTrigger::BackdropClick));
    }
}
