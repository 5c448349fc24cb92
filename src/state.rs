use std::collections::HashMap;

use crate::label::NormalizedLabel;

/// The captured body of one footnote definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefinitionEntry {
    pub label: NormalizedLabel,
    /// Rendered HTML of the definition body.
    pub body: String,
    /// Byte offset of a trailing `</p>` (optionally followed by one line ending) in `body`.
    pub paragraph_close: Option<usize>,
}

impl DefinitionEntry {
    pub fn new(label: NormalizedLabel, body: String) -> Self {
        let paragraph_close = trailing_paragraph_close(&body);
        Self {
            label,
            body,
            paragraph_close,
        }
    }
}

fn trailing_paragraph_close(body: &str) -> Option<usize> {
    let content = body
        .strip_suffix("\r\n")
        .or_else(|| body.strip_suffix('\n'))
        .or_else(|| body.strip_suffix('\r'))
        .unwrap_or(body);
    content.strip_suffix("</p>").map(str::len)
}

/// Definition bodies keyed by label. The first definition of a label wins.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DefinitionStore {
    entries: HashMap<NormalizedLabel, DefinitionEntry>,
}

impl DefinitionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `body` under `label` unless the label is already defined.
    ///
    /// Returns `false` when the definition was discarded as a duplicate.
    pub fn insert_if_absent(&mut self, label: NormalizedLabel, body: String) -> bool {
        if self.entries.contains_key(&label) {
            return false;
        }
        self.entries
            .insert(label.clone(), DefinitionEntry::new(label, body));
        true
    }

    pub fn get(&self, label: &NormalizedLabel) -> Option<&DefinitionEntry> {
        self.entries.get(label)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Everything known about the calls to one footnote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallRecord {
    pub label: NormalizedLabel,
    /// 1-based position of the first call to this label among all called labels.
    pub first_seen_order: usize,
    /// Number of call sites, always at least 1.
    pub reference_count: usize,
}

/// What a single call site needs to render itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite {
    /// The visible footnote number.
    pub order: usize,
    /// 1-based index of this call site among the calls to the same label.
    pub occurrence: usize,
}

/// Called labels in first-seen order, with per-label reference counts.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CallTracker {
    records: Vec<CallRecord>,
    index: HashMap<NormalizedLabel, usize>,
}

impl CallTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, label: NormalizedLabel) -> CallSite {
        if let Some(&i) = self.index.get(&label) {
            let record = &mut self.records[i];
            record.reference_count += 1;
            return CallSite {
                order: record.first_seen_order,
                occurrence: record.reference_count,
            };
        }
        let order = self.records.len() + 1;
        self.index.insert(label.clone(), self.records.len());
        self.records.push(CallRecord {
            label,
            first_seen_order: order,
            reference_count: 1,
        });
        CallSite {
            order,
            occurrence: 1,
        }
    }

    pub fn get(&self, label: &NormalizedLabel) -> Option<&CallRecord> {
        self.index.get(label).map(|&i| &self.records[i])
    }

    /// Records in appearance order.
    pub fn iter(&self) -> impl Iterator<Item = &CallRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Per-document footnote state, created on the first footnote event and consumed by the final
/// render.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FootnoteState {
    pub(crate) calls: CallTracker,
    pub(crate) definitions: DefinitionStore,
    /// Labels of the definitions currently being captured, innermost last.
    pub(crate) label_stack: Vec<NormalizedLabel>,
}

impl FootnoteState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &CallTracker {
        &self.calls
    }

    pub fn definitions(&self) -> &DefinitionStore {
        &self.definitions
    }

    /// Labels of definitions that were captured but never called.
    pub fn unused_definitions(&self) -> Vec<&NormalizedLabel> {
        let mut unused: Vec<_> = self
            .definitions
            .entries
            .keys()
            .filter(|label| self.calls.get(label).is_none())
            .collect();
        unused.sort();
        unused
    }
}
