use crate::error::Result;
use crate::options::Options;
use crate::state::FootnoteState;
use crate::types::{Construct, Event};
use crate::writer::HtmlWriter;

mod footnotes;
mod section;

/// Compiles an event stream into HTML, collecting footnotes into a section at the end.
///
/// A compiler holds the state of exactly one document. Feed it with [`Compiler::emit`] (or
/// [`Compiler::push_events`]) and call [`Compiler::finish`] once the stream is exhausted.
pub struct Compiler {
    opts: Options,
    writer: HtmlWriter,
    footnotes: Option<FootnoteState>,
}

impl std::fmt::Debug for Compiler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Compiler")
            .field("buffer_depth", &self.writer.depth())
            .field(
                "calls_len",
                &self.footnotes.as_ref().map_or(0, |s| s.calls().len()),
            )
            .field(
                "definitions_len",
                &self.footnotes.as_ref().map_or(0, |s| s.definitions().len()),
            )
            .finish()
    }
}

impl Compiler {
    pub fn new(opts: Options) -> Self {
        let writer = HtmlWriter::new(opts.line_ending);
        Self {
            opts,
            writer,
            footnotes: None,
        }
    }

    /// Footnote state gathered so far, if any footnote event has been seen.
    pub fn footnotes(&self) -> Option<&FootnoteState> {
        self.footnotes.as_ref()
    }

    pub fn emit(&mut self, event: Event<'_>) -> Result<()> {
        match event {
            Event::Enter(construct) => self.enter(construct),
            Event::Exit(construct) => self.exit(construct),
            Event::Text(text) => {
                self.writer.raw_encoded(&text);
                Ok(())
            }
            Event::Html(html) => {
                self.writer.tag(&html);
                Ok(())
            }
            Event::LineEnding => {
                self.writer.source_line_ending();
                Ok(())
            }
        }
    }

    pub fn push_events<'s, I>(&mut self, events: I) -> Result<()>
    where
        I: IntoIterator<Item = Event<'s>>,
    {
        for event in events {
            self.emit(event)?;
        }
        Ok(())
    }

    /// Signal the end of the document: render the footnote section and return the output.
    pub fn finish(mut self) -> Result<String> {
        if let Some(state) = self.footnotes.take() {
            section::render(&mut self.writer, &self.opts, state)?;
        }
        self.writer.into_output()
    }

    fn enter(&mut self, construct: Construct<'_>) -> Result<()> {
        match construct {
            Construct::FootnoteDefinition => self.enter_footnote_definition(),
            Construct::DefinitionLabel(_) | Construct::CallLabel(_) => self.writer.buffer(),
            Construct::Paragraph => {
                if !self.writer.is_tight() {
                    self.writer.line_ending_if_needed();
                    self.writer.tag("<p>");
                }
                self.writer.set_slurp_all_line_endings(false);
            }
            Construct::List { ordered, tight } => {
                self.writer.push_tight(tight);
                self.writer.line_ending_if_needed();
                self.writer.tag(if ordered { "<ol>" } else { "<ul>" });
            }
            Construct::ListItem => {
                self.writer.line_ending_if_needed();
                self.writer.tag("<li>");
                self.writer.clear_last_was_tag();
            }
        }
        Ok(())
    }

    fn exit(&mut self, construct: Construct<'_>) -> Result<()> {
        match construct {
            Construct::FootnoteDefinition => self.exit_footnote_definition()?,
            Construct::DefinitionLabel(raw) => self.exit_definition_label(&raw)?,
            Construct::CallLabel(raw) => self.exit_call_label(&raw)?,
            Construct::Paragraph => {
                if self.writer.is_tight() {
                    self.writer.set_slurp_all_line_endings(true);
                } else {
                    self.writer.tag("</p>");
                }
            }
            Construct::List { ordered, .. } => {
                self.writer.pop_tight();
                self.writer.line_ending_if_needed();
                self.writer.tag(if ordered { "</ol>" } else { "</ul>" });
            }
            Construct::ListItem => {
                if self.writer.last_was_tag() && !self.writer.slurp_all_line_endings() {
                    self.writer.line_ending_if_needed();
                }
                self.writer.tag("</li>");
                self.writer.set_slurp_all_line_endings(false);
            }
        }
        Ok(())
    }
}

/// Compile a complete event stream with `opts`.
pub fn compile<'s, I>(events: I, opts: Options) -> Result<String>
where
    I: IntoIterator<Item = Event<'s>>,
{
    let mut compiler = Compiler::new(opts);
    compiler.push_events(events)?;
    compiler.finish()
}
