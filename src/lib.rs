//! Footnote-aware HTML compilation for GFM-style markdown.
//!
//! A tokenizer produces [`Event`]s; a [`Compiler`] turns them into HTML. Footnote calls are
//! numbered in order of first appearance, repeated calls get distinct back-link targets, and
//! all definitions are gathered into one `<section data-footnotes>` at the end of the document.
//!
//! ```
//! use mdfootnote::{Construct, Event, Options, compile};
//!
//! let mut events = vec![Event::Enter(Construct::Paragraph), Event::text("See")];
//! events.extend(Event::call("1"));
//! events.push(Event::Exit(Construct::Paragraph));
//! events.push(Event::LineEnding);
//! events.extend(Event::definition_start("1"));
//! events.push(Event::Enter(Construct::Paragraph));
//! events.push(Event::text("Hello."));
//! events.push(Event::Exit(Construct::Paragraph));
//! events.push(Event::Exit(Construct::FootnoteDefinition));
//!
//! let html = compile(events, Options::default()).unwrap();
//! assert!(html.contains("<li id=\"user-content-fn-1\">"));
//! ```

pub mod compile;
pub mod encode;
pub mod error;
pub mod label;
pub mod options;
pub mod state;
pub mod types;
pub mod writer;

#[cfg(feature = "pulldown")]
pub mod adapters;

pub use compile::*;
pub use error::{Error, Result};
pub use label::*;
pub use options::*;
pub use state::*;
pub use types::*;
pub use writer::HtmlWriter;
