use crate::encode::encode_html;
use crate::error::{Error, Result};
use crate::options::LineEnding;

/// Output primitives shared by every construct handler.
///
/// Output goes to the innermost buffer of a stack whose bottom entry is the document itself.
/// Handlers open side buffers to capture text they want to drop (labels) or move (definition
/// bodies); every `buffer` must be matched by a `resume` before the enclosing construct exits.
#[derive(Debug, Clone)]
pub struct HtmlWriter {
    buffers: Vec<String>,
    line_ending: LineEnding,
    last_was_tag: bool,
    slurp_one_line_ending: bool,
    slurp_all_line_endings: bool,
    tight_stack: Vec<bool>,
}

impl HtmlWriter {
    pub fn new(line_ending: LineEnding) -> Self {
        Self {
            buffers: vec![String::new()],
            line_ending,
            last_was_tag: false,
            slurp_one_line_ending: false,
            slurp_all_line_endings: false,
            tight_stack: Vec::new(),
        }
    }

    /// Redirect output into a fresh side buffer.
    pub fn buffer(&mut self) {
        self.buffers.push(String::new());
    }

    /// Close the innermost side buffer and return what was written to it.
    pub fn resume(&mut self) -> Result<String> {
        if self.buffers.len() < 2 {
            return Err(Error::UnbalancedBuffer);
        }
        Ok(self.buffers.pop().unwrap_or_default())
    }

    pub fn depth(&self) -> usize {
        self.buffers.len() - 1
    }

    pub fn tag(&mut self, html: &str) {
        self.last_was_tag = true;
        self.current().push_str(html);
    }

    pub fn raw(&mut self, text: &str) {
        self.last_was_tag = false;
        self.current().push_str(text);
    }

    pub fn raw_encoded(&mut self, text: &str) {
        self.raw(&encode_html(text));
    }

    pub fn line_ending(&mut self) {
        self.raw(self.line_ending.as_str());
    }

    /// Emit a line ending unless the current buffer is empty or already ends with one.
    pub fn line_ending_if_needed(&mut self) {
        let needed = self
            .buffers
            .last()
            .and_then(|b| b.chars().next_back())
            .is_some_and(|c| c != '\n' && c != '\r');
        if needed {
            self.line_ending();
        }
    }

    /// Replay a line ending from the source, honoring the slurp flags.
    pub fn source_line_ending(&mut self) {
        if self.slurp_all_line_endings {
            return;
        }
        if self.slurp_one_line_ending {
            self.slurp_one_line_ending = false;
            return;
        }
        self.line_ending();
    }

    pub fn last_was_tag(&self) -> bool {
        self.last_was_tag
    }

    pub fn clear_last_was_tag(&mut self) {
        self.last_was_tag = false;
    }

    pub fn slurp_one_line_ending(&mut self) {
        self.slurp_one_line_ending = true;
    }

    pub fn slurp_all_line_endings(&self) -> bool {
        self.slurp_all_line_endings
    }

    pub fn set_slurp_all_line_endings(&mut self, slurp: bool) {
        self.slurp_all_line_endings = slurp;
    }

    pub fn push_tight(&mut self, tight: bool) {
        self.tight_stack.push(tight);
    }

    pub fn pop_tight(&mut self) {
        self.tight_stack.pop();
    }

    /// Whether the innermost list (or footnote definition) is tight. Top level is never tight.
    pub fn is_tight(&self) -> bool {
        self.tight_stack.last().copied().unwrap_or(false)
    }

    /// Finish the document. All side buffers must have been resumed.
    pub fn into_output(mut self) -> Result<String> {
        if self.buffers.len() != 1 {
            return Err(Error::UnclosedBuffer(self.buffers.len() - 1));
        }
        Ok(self.buffers.pop().unwrap_or_default())
    }

    fn current(&mut self) -> &mut String {
        // The document buffer is never popped (see `resume`), so the stack is never empty.
        let last = self.buffers.len() - 1;
        &mut self.buffers[last]
    }
}

impl Default for HtmlWriter {
    fn default() -> Self {
        Self::new(LineEnding::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn side_buffers_capture_and_release_output() {
        let mut w = HtmlWriter::default();
        w.tag("<p>");
        w.buffer();
        w.raw("hidden");
        assert_eq!(w.depth(), 1);
        assert_eq!(w.resume().unwrap(), "hidden");
        w.tag("</p>");
        assert_eq!(w.into_output().unwrap(), "<p></p>");
    }

    #[test]
    fn resume_on_document_buffer_is_an_error() {
        let mut w = HtmlWriter::default();
        assert_eq!(w.resume(), Err(Error::UnbalancedBuffer));
    }

    #[test]
    fn unclosed_buffer_is_reported() {
        let mut w = HtmlWriter::default();
        w.buffer();
        w.buffer();
        assert_eq!(w.into_output(), Err(Error::UnclosedBuffer(2)));
    }

    #[test]
    fn line_ending_if_needed_checks_current_buffer() {
        let mut w = HtmlWriter::new(LineEnding::CrLf);
        w.line_ending_if_needed();
        w.tag("<ol>");
        w.line_ending_if_needed();
        w.line_ending_if_needed();
        w.buffer();
        w.line_ending_if_needed();
        assert_eq!(w.resume().unwrap(), "");
        assert_eq!(w.into_output().unwrap(), "<ol>\r\n");
    }

    #[test]
    fn slurp_one_swallows_exactly_one() {
        let mut w = HtmlWriter::default();
        w.raw("a");
        w.slurp_one_line_ending();
        w.source_line_ending();
        w.source_line_ending();
        assert_eq!(w.into_output().unwrap(), "a\n");
    }

    #[test]
    fn tag_and_raw_track_last_was_tag() {
        let mut w = HtmlWriter::default();
        w.tag("<p>");
        assert!(w.last_was_tag());
        w.raw_encoded("<x>");
        assert!(!w.last_was_tag());
        assert_eq!(w.into_output().unwrap(), "<p>&lt;x&gt;");
    }
}
