//! Errors produced while walking records, converting values, and running the
//! flag and prompt adapters.
//!
//! Every fallible operation in the crate returns [`BindError`]. Conversion
//! failures keep the slot's [`Kind`], the raw text that was rejected, and the
//! underlying parser error as [`ParseCause`], so a message like
//!
//! ```text
//! invalid i8 value "200": number too large to fit in target type
//! ```
//!
//! can be shown to users as is.

use std::char::ParseCharError;
use std::num::{ParseFloatError, ParseIntError};

use thiserror::Error;

use crate::types::Kind;

#[derive(Debug, Error)]
#[cfg_attr(feature = "rich-errors", derive(miette::Diagnostic))]
pub enum BindError {
    /// An external flag name that does not look like `name`, `name-part` or `name.part`.
    #[error("invalid flag name: {name}")]
    #[cfg_attr(
        feature = "rich-errors",
        diagnostic(
            code(fieldbind::invalid_name),
            help("flag names start with a letter and contain only letters, digits, '-' and '.'")
        )
    )]
    InvalidName { name: String },

    #[error("unsupported type: {kind}")]
    #[cfg_attr(feature = "rich-errors", diagnostic(code(fieldbind::unsupported)))]
    UnsupportedKind { kind: Kind },

    #[error("invalid {kind} value {input:?}: {source}")]
    #[cfg_attr(feature = "rich-errors", diagnostic(code(fieldbind::parse)))]
    Parse {
        kind: Kind,
        input: String,
        #[source]
        source: ParseCause,
    },

    #[error("flag already registered: {name}")]
    #[cfg_attr(feature = "rich-errors", diagnostic(code(fieldbind::duplicate_flag)))]
    DuplicateFlag { name: String },

    #[error("invalid email address entered for {field}: {reason}")]
    #[cfg_attr(feature = "rich-errors", diagnostic(code(fieldbind::invalid_email)))]
    InvalidEmail { field: String, reason: String },

    #[error("invalid value entered for {field}: {source}")]
    #[cfg_attr(feature = "rich-errors", diagnostic(code(fieldbind::invalid_input)))]
    InvalidInput {
        field: String,
        #[source]
        source: Box<BindError>,
    },

    #[error("unknown verbosity level: {input:?}")]
    #[cfg_attr(
        feature = "rich-errors",
        diagnostic(
            code(fieldbind::level),
            help("expected one of trace, debug, info, warn, error, none")
        )
    )]
    InvalidLevel { input: String },

    #[error("failed to render field summary: {0}")]
    #[cfg_attr(feature = "rich-errors", diagnostic(code(fieldbind::json)))]
    Json(#[from] serde_json::Error),

    #[error("failed to read input: {0}")]
    #[cfg_attr(feature = "rich-errors", diagnostic(code(fieldbind::io)))]
    Io(#[from] std::io::Error),

    /// Free-form error returned by a caller-supplied field handler.
    #[error("{0}")]
    #[cfg_attr(feature = "rich-errors", diagnostic(code(fieldbind::handler)))]
    Handler(String),
}

/// The parser failure behind a [`BindError::Parse`].
#[derive(Debug, Error)]
pub enum ParseCause {
    #[error(transparent)]
    Int(#[from] ParseIntError),

    #[error(transparent)]
    Float(#[from] ParseFloatError),

    /// A finite literal that overflows the float width of the slot.
    #[error("value out of range")]
    FloatOutOfRange,

    #[error("expected one of 1, t, T, TRUE, true, True, 0, f, F, FALSE, false, False")]
    Bool,

    #[error(transparent)]
    Char(#[from] ParseCharError),

    #[error(transparent)]
    Duration(#[from] humantime::DurationError),

    #[error(transparent)]
    Url(#[from] url::ParseError),

    #[error(transparent)]
    Regex(#[from] regex::Error),
}

impl BindError {
    /// Build a [`BindError::Handler`] from any displayable value.
    pub fn handler(message: impl std::fmt::Display) -> Self {
        BindError::Handler(message.to_string())
    }
}
