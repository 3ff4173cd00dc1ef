// SPDX-FileCopyrightText: 2023 Softbear, Inc.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Localized message templates with embedded markup.
//!
//! `{{id}}content{{/id}}` is a tag, rendered by a function of its content (e.g. a link).
//! A `{{id}}` without a matching close is a placeholder, replaced by a value. Tags don't nest.

use js_hooks::console_error;
use std::collections::HashMap;
use std::fmt::{self, Display, Formatter};
use yew::{html, Html};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Segment<'a> {
    Text(&'a str),
    Tag { id: &'a str, content: &'a str },
    Placeholder(&'a str),
}

impl<'a> Segment<'a> {
    pub fn is_tag(&self, tag_id: &str) -> bool {
        matches!(self, Self::Tag { id, .. } if *id == tag_id)
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FormatError {
    /// A `{{` that is never followed by `}}`.
    UnterminatedToken { offset: usize },
    /// A `{{/id}}` that doesn't close anything.
    UnexpectedClose { id: String },
    /// `{{}}` or `{{/}}`.
    EmptyId { offset: usize },
}

impl Display for FormatError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnterminatedToken { offset } => write!(f, "unterminated token at {offset}"),
            Self::UnexpectedClose { id } => write!(f, "unexpected close of {id:?}"),
            Self::EmptyId { offset } => write!(f, "empty id at {offset}"),
        }
    }
}

impl std::error::Error for FormatError {}

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// Splits a template into text, tags, and placeholders, in order.
pub fn parse(template: &str) -> Result<Vec<Segment<'_>>, FormatError> {
    let mut segments = Vec::new();
    let mut rest = template;
    let mut offset = 0;

    while !rest.is_empty() {
        let Some(start) = rest.find(OPEN) else {
            segments.push(Segment::Text(rest));
            break;
        };
        if start > 0 {
            segments.push(Segment::Text(&rest[..start]));
        }

        let after_open = &rest[start + OPEN.len()..];
        let end = after_open
            .find(CLOSE)
            .ok_or(FormatError::UnterminatedToken {
                offset: offset + start,
            })?;
        let id = &after_open[..end];
        let after_token = &after_open[end + CLOSE.len()..];
        let token_len = OPEN.len() + end + CLOSE.len();

        if let Some(closed) = id.strip_prefix('/') {
            // Opening tokens consume their own close, so this one is a stray.
            return Err(if closed.is_empty() {
                FormatError::EmptyId {
                    offset: offset + start,
                }
            } else {
                FormatError::UnexpectedClose {
                    id: closed.to_owned(),
                }
            });
        }
        if id.is_empty() {
            return Err(FormatError::EmptyId {
                offset: offset + start,
            });
        }

        let close = format!("{OPEN}/{id}{CLOSE}");
        let consumed = if let Some(content_len) = after_token.find(&close) {
            segments.push(Segment::Tag {
                id,
                content: &after_token[..content_len],
            });
            start + token_len + content_len + close.len()
        } else {
            segments.push(Segment::Placeholder(id));
            start + token_len
        };

        offset += consumed;
        rest = &rest[consumed..];
    }

    Ok(segments)
}

/// Renders parsed segments with caller supplied functions, so the same template logic can
/// produce [`Html`] or anything else.
///
/// `tag` receives the rendered content and should return it unchanged for unknown ids.
/// Placeholders for which `placeholder` returns [`None`] are rendered as their literal token.
pub fn render_segments<T>(
    segments: &[Segment<'_>],
    mut text: impl FnMut(&str) -> T,
    mut tag: impl FnMut(&str, T) -> T,
    mut placeholder: impl FnMut(&str) -> Option<T>,
) -> Vec<T> {
    segments
        .iter()
        .map(|segment| match *segment {
            Segment::Text(contents) => text(contents),
            Segment::Tag { id, content } => {
                let content = text(content);
                tag(id, content)
            }
            Segment::Placeholder(id) => {
                placeholder(id).unwrap_or_else(|| text(&format!("{OPEN}{id}{CLOSE}")))
            }
        })
        .collect()
}

/// How to render the tags and placeholders of a message.
#[derive(Default)]
pub struct MessageFormat {
    tags: HashMap<String, Box<dyn Fn(Html) -> Html>>,
    placeholders: HashMap<String, Html>,
}

impl MessageFormat {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders `{{id}}content{{/id}}` as `render(content)`.
    pub fn tag(mut self, id: impl Into<String>, render: impl Fn(Html) -> Html + 'static) -> Self {
        self.tags.insert(id.into(), Box::new(render));
        self
    }

    /// Replaces `{{id}}` with `value`.
    pub fn placeholder(mut self, id: impl Into<String>, value: Html) -> Self {
        self.placeholders.insert(id.into(), value);
        self
    }
}

/// Renders a localized template. A malformed template is logged and shown verbatim.
pub fn format_message(template: &str, format: &MessageFormat) -> Html {
    match parse(template) {
        Ok(segments) => {
            let nodes = render_segments(
                &segments,
                |contents| html! { {contents.to_owned()} },
                |id, content| match format.tags.get(id) {
                    Some(render) => render(content),
                    None => content,
                },
                |id| format.placeholders.get(id).cloned(),
            );
            html! { <>{for nodes}</> }
        }
        Err(e) => {
            console_error!("malformed message {:?}: {}", template, e);
            html! { {template.to_owned()} }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::format_message::{
        format_message, parse, render_segments, FormatError, MessageFormat, Segment,
    };
    use futures::executor::block_on;
    use rand::prelude::SliceRandom;
    use rand::{thread_rng, Rng};
    use yew::{function_component, html, Html, LocalServerRenderer, Properties};

    #[derive(PartialEq, Properties)]
    struct MessageProps {
        template: &'static str,
    }

    #[function_component(Message)]
    fn message(props: &MessageProps) -> Html {
        let format = MessageFormat::new()
            .tag("$1", |content| html! { <b>{content}</b> })
            .placeholder("$2", html! { {"42"} });
        format_message(props.template, &format)
    }

    fn render_html(template: &'static str) -> String {
        block_on(
            LocalServerRenderer::<Message>::with_props(MessageProps { template })
                .hydratable(false)
                .render(),
        )
    }

    fn render(template: &str) -> String {
        let segments = parse(template).unwrap();
        render_segments(
            &segments,
            str::to_owned,
            |id, content| match id {
                "$1" => format!("<a>{content}</a>"),
                _ => content,
            },
            |id| (id == "$2").then(|| String::from("42")),
        )
        .concat()
    }

    #[test]
    fn plain_text() {
        assert_eq!(parse("").unwrap(), vec![]);
        assert_eq!(parse("hello").unwrap(), vec![Segment::Text("hello")]);
        assert_eq!(parse("a } { b").unwrap(), vec![Segment::Text("a } { b")]);
    }

    #[test]
    fn tag() {
        assert_eq!(
            parse("See our {{$1}}wiki{{/$1}}").unwrap(),
            vec![
                Segment::Text("See our "),
                Segment::Tag {
                    id: "$1",
                    content: "wiki"
                }
            ]
        );
        assert_eq!(render("See our {{$1}}wiki{{/$1}}."), "See our <a>wiki</a>.");
        assert_eq!(render("{{$1}}{{/$1}}"), "<a></a>");
    }

    #[test]
    fn placeholder() {
        assert_eq!(
            parse("{{$2}} points").unwrap(),
            vec![Segment::Placeholder("$2"), Segment::Text(" points")]
        );
        assert_eq!(render("{{$2}} points"), "42 points");
        assert_eq!(render("{{$1}}x{{/$1}} {{$2}}"), "<a>x</a> 42");
    }

    #[test]
    fn unknown_ids_degrade_to_text() {
        assert_eq!(render("{{$9}}content{{/$9}}"), "content");
        assert_eq!(render("{{$9}} left"), "{{$9}} left");
    }

    #[test]
    fn tags_do_not_nest() {
        assert_eq!(
            parse("{{$1}}a{{$2}}b{{/$1}}").unwrap(),
            vec![Segment::Tag {
                id: "$1",
                content: "a{{$2}}b"
            }]
        );
    }

    #[test]
    fn malformed() {
        assert_eq!(
            parse("ab{{$1"),
            Err(FormatError::UnterminatedToken { offset: 2 })
        );
        assert_eq!(
            parse("ab{{/$1}}"),
            Err(FormatError::UnexpectedClose { id: "$1".into() })
        );
        assert_eq!(parse("{{}}"), Err(FormatError::EmptyId { offset: 0 }));
        assert_eq!(parse("x{{/}}"), Err(FormatError::EmptyId { offset: 1 }));
        assert_eq!(
            parse("{{$1}}a{{/$1}}{{/$1}}"),
            Err(FormatError::UnexpectedClose { id: "$1".into() })
        );
    }

    #[test]
    fn html() {
        assert_eq!(
            render_html("See our {{$1}}wiki{{/$1}}, {{$2}} times"),
            "See our <b>wiki</b>, 42 times"
        );
        assert_eq!(render_html("{{$9}}plain{{/$9}}"), "plain");
    }

    #[test]
    fn html_malformed_is_verbatim() {
        assert_eq!(render_html("ab{{$1"), "ab{{$1");
        assert_eq!(render_html("ab{{/$1}}"), "ab{{/$1}}");
    }

    #[test]
    fn fuzz_parse() {
        fn random_string() -> String {
            std::iter::from_fn(|| ['a', '{', '}', '/', '$', '1', 'π'].choose(&mut thread_rng()))
                .take(thread_rng().gen_range(0..=16))
                .collect()
        }

        for _ in 0..100000 {
            let template = random_string();

            // Must terminate without panicking, and never invent text.
            if let Ok(segments) = parse(&template) {
                let mut total = 0;
                for segment in &segments {
                    total += match segment {
                        Segment::Text(contents) => {
                            assert!(!contents.is_empty());
                            contents.len()
                        }
                        Segment::Tag { id, content } => 2 * id.len() + content.len() + 9,
                        Segment::Placeholder(id) => id.len() + 4,
                    };
                }
                assert_eq!(total, template.len(), "{template:?}");
            }
        }
    }
}
