//! Error types for footnote compilation.
//!
//! Every variant is a broken contract between the tokenizer, the host compiler and this crate.
//! Recoverable conditions (duplicate or unused definitions) never surface here.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("resume called without a matching buffer")]
    UnbalancedBuffer,

    #[error("document finished with {0} open buffer(s)")]
    UnclosedBuffer(usize),

    #[error("footnote definition closed without a captured label")]
    EmptyLabelStack,

    #[error("footnote `{label}` is called but never defined")]
    MissingDefinition { label: String },
}

pub type Result<T> = std::result::Result<T, Error>;
