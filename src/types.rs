use std::borrow::Cow;

/// A construct the dispatcher knows how to open and close.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Construct<'s> {
    /// A footnote definition block (`[^label]: body`).
    FootnoteDefinition,
    /// The label string of a definition, carrying its raw source text.
    DefinitionLabel(Cow<'s, str>),
    /// The label string of a footnote call (`[^label]`), carrying its raw source text.
    CallLabel(Cow<'s, str>),
    Paragraph,
    List { ordered: bool, tight: bool },
    ListItem,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event<'s> {
    Enter(Construct<'s>),
    Exit(Construct<'s>),
    /// Plain text, HTML-encoded on output.
    Text(Cow<'s, str>),
    /// Markup already rendered by the host, passed through untouched.
    Html(Cow<'s, str>),
    /// A line ending from the source.
    LineEnding,
}

impl<'s> Event<'s> {
    pub fn text(text: impl Into<Cow<'s, str>>) -> Self {
        Event::Text(text.into())
    }

    pub fn html(html: impl Into<Cow<'s, str>>) -> Self {
        Event::Html(html.into())
    }

    /// The enter/text/exit triple a tokenizer produces for a footnote call.
    pub fn call(label: &'s str) -> [Self; 3] {
        [
            Event::Enter(Construct::CallLabel(Cow::Borrowed(label))),
            Event::Text(Cow::Borrowed(label)),
            Event::Exit(Construct::CallLabel(Cow::Borrowed(label))),
        ]
    }

    /// The events opening a footnote definition, up to and including its label.
    pub fn definition_start(label: &'s str) -> [Self; 4] {
        [
            Event::Enter(Construct::FootnoteDefinition),
            Event::Enter(Construct::DefinitionLabel(Cow::Borrowed(label))),
            Event::Text(Cow::Borrowed(label)),
            Event::Exit(Construct::DefinitionLabel(Cow::Borrowed(label))),
        ]
    }
}
