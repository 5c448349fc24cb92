//! Drive the compiler from pulldown-cmark.
//!
//! pulldown-cmark tokenizes the markdown and renders everything that is not a footnote; this
//! crate takes over numbering, back-references and the final footnote section.

use std::borrow::Cow;

use pulldown_cmark::{
    Alignment, CowStr, Event as PulldownEvent, Options as PulldownOptions, Parser, Tag, TagEnd,
    html,
};

use crate::compile::compile;
use crate::error::Result;
use crate::options::Options;
use crate::types::{Construct, Event};

#[derive(Debug, Clone)]
pub struct PulldownAdapterOptions {
    /// Parser extensions. `ENABLE_FOOTNOTES` is always added.
    pub pulldown: PulldownOptions,
}

impl Default for PulldownAdapterOptions {
    fn default() -> Self {
        Self {
            pulldown: PulldownOptions::ENABLE_FOOTNOTES
                | PulldownOptions::ENABLE_TABLES
                | PulldownOptions::ENABLE_STRIKETHROUGH
                | PulldownOptions::ENABLE_TASKLISTS,
        }
    }
}

/// Parse `input` and translate it into compiler events.
pub fn events<'a>(input: &'a str, opts: &PulldownAdapterOptions) -> Vec<Event<'a>> {
    let parser = Parser::new_ext(input, opts.pulldown | PulldownOptions::ENABLE_FOOTNOTES);
    translate(parser)
}

/// Translate pulldown-cmark events.
///
/// Footnote definitions and references become footnote constructs. Every run of other events
/// is rendered by pulldown-cmark's HTML writer into a single [`Event::Html`]. Table structure is
/// rendered here, since a call inside a cell splits the table across several writers.
pub fn translate<'a, I>(events: I) -> Vec<Event<'a>>
where
    I: IntoIterator<Item = PulldownEvent<'a>>,
{
    let mut out = Vec::new();
    let mut run = Vec::new();
    let mut table = TableContext::default();
    for event in events {
        match event {
            PulldownEvent::Start(Tag::FootnoteDefinition(label)) => {
                flush(&mut run, &mut out);
                let label = cow(label);
                out.push(Event::Enter(Construct::FootnoteDefinition));
                out.push(Event::Enter(Construct::DefinitionLabel(label.clone())));
                out.push(Event::Exit(Construct::DefinitionLabel(label)));
            }
            PulldownEvent::End(TagEnd::FootnoteDefinition) => {
                flush(&mut run, &mut out);
                out.push(Event::Exit(Construct::FootnoteDefinition));
            }
            PulldownEvent::FootnoteReference(label) => {
                flush(&mut run, &mut out);
                let label = cow(label);
                out.push(Event::Enter(Construct::CallLabel(label.clone())));
                out.push(Event::Exit(Construct::CallLabel(label)));
            }
            other => match table.render(&other) {
                Some(tag) => {
                    flush(&mut run, &mut out);
                    out.push(Event::Html(tag));
                }
                None => run.push(other),
            },
        }
    }
    flush(&mut run, &mut out);
    out
}

/// Render markdown to HTML with footnotes collected at the end.
pub fn to_html(input: &str, adapter: &PulldownAdapterOptions, opts: Options) -> Result<String> {
    compile(events(input, adapter), opts)
}

/// Head/body position and column alignments of the table being rendered.
#[derive(Debug, Default)]
struct TableContext {
    alignments: Vec<Alignment>,
    in_head: bool,
    cell: usize,
}

impl TableContext {
    /// Markup for a table structure event, `None` for anything else.
    fn render(&mut self, event: &PulldownEvent<'_>) -> Option<Cow<'static, str>> {
        let html = match event {
            PulldownEvent::Start(Tag::Table(alignments)) => {
                self.alignments = alignments.clone();
                Cow::Borrowed("<table>")
            }
            PulldownEvent::Start(Tag::TableHead) => {
                self.in_head = true;
                self.cell = 0;
                Cow::Borrowed("<thead><tr>")
            }
            PulldownEvent::Start(Tag::TableRow) => {
                self.cell = 0;
                Cow::Borrowed("<tr>")
            }
            PulldownEvent::Start(Tag::TableCell) => {
                let style = match self.alignments.get(self.cell) {
                    Some(Alignment::Left) => " style=\"text-align: left\"",
                    Some(Alignment::Center) => " style=\"text-align: center\"",
                    Some(Alignment::Right) => " style=\"text-align: right\"",
                    _ => "",
                };
                Cow::Owned(format!("<{}{style}>", self.cell_tag()))
            }
            PulldownEvent::End(TagEnd::TableCell) => {
                let html = format!("</{}>", self.cell_tag());
                self.cell += 1;
                Cow::Owned(html)
            }
            PulldownEvent::End(TagEnd::TableRow) => Cow::Borrowed("</tr>\n"),
            PulldownEvent::End(TagEnd::TableHead) => {
                self.in_head = false;
                Cow::Borrowed("</tr></thead><tbody>\n")
            }
            PulldownEvent::End(TagEnd::Table) => Cow::Borrowed("</tbody></table>\n"),
            _ => return None,
        };
        Some(html)
    }

    fn cell_tag(&self) -> &'static str {
        if self.in_head { "th" } else { "td" }
    }
}

fn flush<'a>(run: &mut Vec<PulldownEvent<'a>>, out: &mut Vec<Event<'a>>) {
    if run.is_empty() {
        return;
    }
    let mut rendered = String::new();
    html::push_html(&mut rendered, run.drain(..));
    out.push(Event::Html(Cow::Owned(rendered)));
}

fn cow(s: CowStr<'_>) -> Cow<'_, str> {
    match s {
        CowStr::Borrowed(b) => Cow::Borrowed(b),
        other => Cow::Owned(other.into_string()),
    }
}
