use super::Compiler;
use crate::encode::encode_html;
use crate::error::{Error, Result};
use crate::label::{NormalizedLabel, SafeId};
use crate::state::FootnoteState;

impl Compiler {
    fn footnote_state(&mut self) -> &mut FootnoteState {
        self.footnotes.get_or_insert_with(FootnoteState::new)
    }

    pub(super) fn enter_footnote_definition(&mut self) {
        self.footnote_state();
        // Paragraphs inside a definition are always wrapped, even inside a tight list.
        self.writer.push_tight(false);
    }

    pub(super) fn exit_definition_label(&mut self, raw: &str) -> Result<()> {
        let label = NormalizedLabel::new(raw);
        self.footnote_state().label_stack.push(label);
        // Drop the label text and capture the body instead.
        self.writer.resume()?;
        self.writer.buffer();
        Ok(())
    }

    pub(super) fn exit_footnote_definition(&mut self) -> Result<()> {
        if self.footnote_state().label_stack.is_empty() {
            return Err(Error::EmptyLabelStack);
        }
        // Resume first so a missing body buffer leaves the label on the stack.
        let body = self.writer.resume()?;
        let label = self
            .footnote_state()
            .label_stack
            .pop()
            .ok_or(Error::EmptyLabelStack)?;
        let state = self.footnote_state();
        if state.definitions.insert_if_absent(label.clone(), body) {
            log::trace!("captured footnote definition `{label}`");
        } else {
            log::debug!("discarding duplicate footnote definition `{label}`");
        }
        self.writer.pop_tight();
        // A definition alone in a list item must not leave a blank line behind.
        self.writer.slurp_one_line_ending();
        self.writer.clear_last_was_tag();
        Ok(())
    }

    pub(super) fn exit_call_label(&mut self, raw: &str) -> Result<()> {
        self.writer.resume()?;
        let label = NormalizedLabel::new(raw);
        let safe_id = SafeId::for_label(&label);
        let site = self.footnote_state().calls.record(label);
        log::trace!(
            "footnote call `{safe_id}` order={} occurrence={}",
            site.order,
            site.occurrence
        );

        let prefix = encode_html(&self.opts.id_prefix);
        let suffix = occurrence_suffix(site.occurrence);
        let html = format!(
            "<sup><a href=\"#{prefix}fn-{safe_id}\" id=\"{prefix}fnref-{safe_id}{suffix}\" data-footnote-ref aria-describedby=\"footnote-label\">{}</a></sup>",
            site.order
        );
        self.writer.tag(&html);
        Ok(())
    }
}

/// Anchor suffix distinguishing repeated calls to one footnote: none for the first call, `-n`
/// for the n-th.
pub(super) fn occurrence_suffix(occurrence: usize) -> String {
    if occurrence > 1 {
        format!("-{occurrence}")
    } else {
        String::new()
    }
}
