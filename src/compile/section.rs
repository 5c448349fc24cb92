use super::footnotes::occurrence_suffix;
use crate::encode::encode_html;
use crate::error::{Error, Result};
use crate::label::SafeId;
use crate::options::Options;
use crate::state::{CallRecord, FootnoteState};
use crate::writer::HtmlWriter;

/// Render the footnote section at the end of the document.
///
/// Nothing is written when no footnote was called, even if definitions exist. Footnotes appear
/// in the order of their first call.
pub(super) fn render(writer: &mut HtmlWriter, opts: &Options, state: FootnoteState) -> Result<()> {
    let unused = state.unused_definitions();
    if !unused.is_empty() {
        log::debug!("{} footnote definition(s) never called", unused.len());
    }
    if state.calls.is_empty() {
        return Ok(());
    }

    writer.line_ending_if_needed();
    writer.tag(&format!(
        "<section data-footnotes class=\"footnotes\"><{} id=\"footnote-label\" class=\"sr-only\">",
        opts.label_tag
    ));
    writer.raw_encoded(&opts.label);
    writer.tag(&format!("</{}>", opts.label_tag));
    writer.line_ending_if_needed();
    writer.tag("<ol>");

    for record in state.calls.iter() {
        let entry = state
            .definitions
            .get(&record.label)
            .ok_or_else(|| Error::MissingDefinition {
                label: record.label.to_string(),
            })?;
        let safe_id = SafeId::for_label(&record.label);
        let back_links = back_references(opts, &safe_id, record);

        writer.line_ending_if_needed();
        writer.tag(&format!(
            "<li id=\"{}fn-{safe_id}\">",
            encode_html(&opts.id_prefix)
        ));
        writer.line_ending_if_needed();
        match entry.paragraph_close {
            Some(at) => {
                let (before, after) = entry.body.split_at(at);
                writer.tag(&format!("{before} {back_links}{after}"));
            }
            None => {
                writer.tag(&entry.body);
                writer.line_ending_if_needed();
                writer.tag(&back_links);
            }
        }
        writer.line_ending_if_needed();
        writer.tag("</li>");
    }

    writer.line_ending_if_needed();
    writer.tag("</ol>");
    writer.line_ending_if_needed();
    writer.tag("</section>");
    log::debug!("rendered {} footnote(s)", state.calls.len());
    Ok(())
}

/// One back-reference per call site, joined by single spaces.
fn back_references(opts: &Options, safe_id: &SafeId, record: &CallRecord) -> String {
    let prefix = encode_html(&opts.id_prefix);
    let back_label = encode_html(&opts.back_label);
    (1..=record.reference_count)
        .map(|n| {
            let marker = if n > 1 {
                format!("<sup>{n}</sup>")
            } else {
                String::new()
            };
            format!(
                "<a href=\"#{prefix}fnref-{safe_id}{}\" data-footnote-backref class=\"data-footnote-backref\" aria-label=\"{back_label}\">↩{marker}</a>",
                occurrence_suffix(n)
            )
        })
        .collect::<Vec<_>>()
        .join(" ")
}
