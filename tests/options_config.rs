#![cfg(feature = "serde")]

use mdfootnote::{LineEnding, Options};

#[test]
fn deserializes_partial_config() {
    let opts: Options =
        serde_json::from_str(r#"{"label": "Notes", "line_ending": "crlf"}"#).unwrap();
    assert_eq!(opts.label, "Notes");
    assert_eq!(opts.line_ending, LineEnding::CrLf);
    assert_eq!(opts.id_prefix, "user-content-");
    assert_eq!(opts.back_label, "Back to content");
}

#[test]
fn empty_config_is_default() {
    let opts: Options = serde_json::from_str("{}").unwrap();
    assert_eq!(opts, Options::default());
}
