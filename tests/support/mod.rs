#![allow(dead_code)]

use mdfootnote::{Construct, Event, Options, compile};

pub fn para(parts: Vec<Event<'static>>) -> Vec<Event<'static>> {
    let mut out = vec![Event::Enter(Construct::Paragraph)];
    out.extend(parts);
    out.push(Event::Exit(Construct::Paragraph));
    out
}

pub fn definition(label: &'static str, body: Vec<Event<'static>>) -> Vec<Event<'static>> {
    let mut out = Event::definition_start(label).to_vec();
    out.extend(body);
    out.push(Event::Exit(Construct::FootnoteDefinition));
    out
}

/// Concatenate event groups, separating them with a source line ending.
pub fn blocks(groups: Vec<Vec<Event<'static>>>) -> Vec<Event<'static>> {
    let mut out = Vec::new();
    for group in groups {
        out.extend(group);
        out.push(Event::LineEnding);
    }
    out
}

pub fn render(events: Vec<Event<'static>>) -> String {
    render_with(events, Options::default())
}

pub fn render_with(events: Vec<Event<'static>>, opts: Options) -> String {
    compile(events, opts).unwrap()
}

pub fn inline_ref(id: &str, occurrence: usize, order: usize) -> String {
    let suffix = if occurrence > 1 {
        format!("-{occurrence}")
    } else {
        String::new()
    };
    format!(
        "<sup><a href=\"#user-content-fn-{id}\" id=\"user-content-fnref-{id}{suffix}\" data-footnote-ref aria-describedby=\"footnote-label\">{order}</a></sup>"
    )
}

pub fn back_ref(id: &str, occurrence: usize) -> String {
    let (suffix, marker) = if occurrence > 1 {
        (format!("-{occurrence}"), format!("<sup>{occurrence}</sup>"))
    } else {
        (String::new(), String::new())
    };
    format!(
        "<a href=\"#user-content-fnref-{id}{suffix}\" data-footnote-backref class=\"data-footnote-backref\" aria-label=\"Back to content\">↩{marker}</a>"
    )
}

pub const SECTION_OPEN: &str = "<section data-footnotes class=\"footnotes\"><h2 id=\"footnote-label\" class=\"sr-only\">Footnotes</h2>\n<ol>\n";
pub const SECTION_CLOSE: &str = "</ol>\n</section>";
