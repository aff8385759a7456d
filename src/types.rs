//! Shared vocabulary: the closed set of bindable [`Kind`]s and the options
//! that steer a walk.
//!
//! A kind is a [`BaseKind`] (the Rust storage type) combined with a [`Shape`]:
//!
//! | Shape      | Field type   | Example           |
//! |------------|--------------|-------------------|
//! | `Value`    | `T`          | `u16`             |
//! | `Pointer`  | `Option<T>`  | `Option<u16>`     |
//! | `Sequence` | `Vec<T>`     | `Vec<u16>`        |
//!
//! `byte` fields are plain `u8`; `rune` fields are `char`. For a rune held as
//! its numeric code point (`"65"` accepted, `"A"` rejected) use `i32`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The storage type behind a field, independent of its shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseKind {
    String,
    Bool,
    Isize,
    I8,
    I16,
    I32,
    I64,
    Usize,
    U8,
    U16,
    U32,
    U64,
    F32,
    F64,
    Char,
    Duration,
    Url,
    Regex,
}

impl BaseKind {
    pub fn name(self) -> &'static str {
        match self {
            BaseKind::String => "String",
            BaseKind::Bool => "bool",
            BaseKind::Isize => "isize",
            BaseKind::I8 => "i8",
            BaseKind::I16 => "i16",
            BaseKind::I32 => "i32",
            BaseKind::I64 => "i64",
            BaseKind::Usize => "usize",
            BaseKind::U8 => "u8",
            BaseKind::U16 => "u16",
            BaseKind::U32 => "u32",
            BaseKind::U64 => "u64",
            BaseKind::F32 => "f32",
            BaseKind::F64 => "f64",
            BaseKind::Char => "char",
            BaseKind::Duration => "Duration",
            BaseKind::Url => "Url",
            BaseKind::Regex => "Regex",
        }
    }
}

impl fmt::Display for BaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How a base type is held by the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// `T`
    Value,
    /// `Option<T>`, allocated on first write.
    Pointer,
    /// `Vec<T>`, filled from a separator-delimited string.
    Sequence,
}

/// The full classification of a field's storage: base type plus shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Kind {
    pub base: BaseKind,
    pub shape: Shape,
}

impl Kind {
    pub const fn new(base: BaseKind, shape: Shape) -> Self {
        Self { base, shape }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.shape {
            Shape::Value => write!(f, "{}", self.base),
            Shape::Pointer => write!(f, "Option<{}>", self.base),
            Shape::Sequence => write!(f, "Vec<{}>", self.base),
        }
    }
}

/// What to do when a field fails validation or its handler returns an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Stop at the first error and return it.
    #[default]
    Abort,
    /// Log the error, leave the field untouched, and move on.
    Continue,
}

/// How external names are derived during a walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Naming {
    /// Flag mode. The tag holds `name[,help]`; nested records contribute
    /// their own tag value as a literal prefix, and the composed name must be
    /// a valid flag name.
    #[default]
    Tagged,
    /// Prompt mode. The tag holds `kind[,description]`; the external name is
    /// the dotted path of declared field names (`Config.Timeout`).
    Declared,
}

/// How the prompt adapter treats a field, orthogonal to its storage [`Kind`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SemanticKind {
    #[default]
    Any,
    /// The value must be a valid mailbox (`user@example.com`, `Name <user@example.com>`).
    Email,
    /// The value is masked when shown and read without echo.
    Secret,
}

impl SemanticKind {
    /// Parse the first segment of an `ask` tag. Unknown words yield `None`.
    pub fn from_tag(s: &str) -> Option<Self> {
        match s.trim() {
            "any" => Some(SemanticKind::Any),
            "email" => Some(SemanticKind::Email),
            "secret" => Some(SemanticKind::Secret),
            _ => None,
        }
    }
}
