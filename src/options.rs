#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
    Cr,
}

impl LineEnding {
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
            LineEnding::Cr => "\r",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Options {
    /// Prefix for every generated `id`/`href`, so user content cannot clobber page globals
    /// (`window.fn-1` and friends).
    pub id_prefix: String,
    /// Text of the (visually hidden) heading above the footnote list.
    pub label: String,
    /// Tag name of that heading.
    pub label_tag: String,
    /// `aria-label` of each back-reference link.
    pub back_label: String,
    /// Line ending used for replayed source line endings and section layout.
    pub line_ending: LineEnding,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            id_prefix: "user-content-".to_string(),
            label: "Footnotes".to_string(),
            label_tag: "h2".to_string(),
            back_label: "Back to content".to_string(),
            line_ending: LineEnding::Lf,
        }
    }
}
