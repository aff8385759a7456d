//! Type-directed conversion from strings into field storage.
//!
//! A [`Slot`] is a mutable reference into a record, tagged with the closed
//! set of supported types. Converting is always the same three steps: parse
//! the raw text into a fresh value, compare it with what the slot holds, and
//! write only when it differs. The `bool` returned by [`Slot::set`] reports
//! whether a write happened.
//!
//! Nothing is written on error. Sequences are parsed completely before the
//! slot is touched, so one bad element leaves the whole `Vec` as it was.

use std::time::Duration;

use regex::Regex;
use url::Url;

use crate::error::{BindError, ParseCause};
use crate::types::{BaseKind, Kind, Shape};

/// Separator used when a field does not declare one.
pub const DEFAULT_SEPARATOR: &str = ",";

/// A base type the converter knows how to parse, compare, and render.
pub(crate) trait Scalar: Sized {
    const BASE: BaseKind;

    fn parse(raw: &str) -> Result<Self, ParseCause>;

    fn same(&self, other: &Self) -> bool;

    fn is_zero(&self) -> bool;

    fn render(&self) -> String;
}

macro_rules! int_scalars {
    ($($ty:ty => $base:ident),* $(,)?) => {
        $(
            impl Scalar for $ty {
                const BASE: BaseKind = BaseKind::$base;

                fn parse(raw: &str) -> Result<Self, ParseCause> {
                    Ok(raw.parse::<$ty>()?)
                }

                fn same(&self, other: &Self) -> bool {
                    self == other
                }

                fn is_zero(&self) -> bool {
                    *self == 0
                }

                fn render(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

int_scalars! {
    isize => Isize,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    usize => Usize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
}

macro_rules! float_scalars {
    ($($ty:ty => $base:ident),* $(,)?) => {
        $(
            impl Scalar for $ty {
                const BASE: BaseKind = BaseKind::$base;

                fn parse(raw: &str) -> Result<Self, ParseCause> {
                    let value = raw.parse::<$ty>()?;
                    if value.is_infinite() && !is_infinity_literal(raw) {
                        return Err(ParseCause::FloatOutOfRange);
                    }
                    Ok(value)
                }

                // Bitwise, so a repeated NaN is unchanged.
                fn same(&self, other: &Self) -> bool {
                    self.to_bits() == other.to_bits()
                }

                fn is_zero(&self) -> bool {
                    *self == 0.0
                }

                fn render(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

float_scalars! {
    f32 => F32,
    f64 => F64,
}

/// `inf`, `+Infinity`, `-INF`, ... parse to infinity on purpose.
fn is_infinity_literal(raw: &str) -> bool {
    let unsigned = raw.strip_prefix(['+', '-']).unwrap_or(raw);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

impl Scalar for String {
    const BASE: BaseKind = BaseKind::String;

    fn parse(raw: &str) -> Result<Self, ParseCause> {
        Ok(raw.to_string())
    }

    fn same(&self, other: &Self) -> bool {
        self == other
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }

    fn render(&self) -> String {
        self.clone()
    }
}

impl Scalar for bool {
    const BASE: BaseKind = BaseKind::Bool;

    fn parse(raw: &str) -> Result<Self, ParseCause> {
        parse_bool(raw)
    }

    fn same(&self, other: &Self) -> bool {
        self == other
    }

    fn is_zero(&self) -> bool {
        !*self
    }

    fn render(&self) -> String {
        self.to_string()
    }
}

/// The conventional textual booleans: `1 t T TRUE true True` and their negations.
pub fn parse_bool(raw: &str) -> Result<bool, ParseCause> {
    match raw {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(ParseCause::Bool),
    }
}

impl Scalar for char {
    const BASE: BaseKind = BaseKind::Char;

    fn parse(raw: &str) -> Result<Self, ParseCause> {
        Ok(raw.parse::<char>()?)
    }

    fn same(&self, other: &Self) -> bool {
        self == other
    }

    fn is_zero(&self) -> bool {
        *self == '\0'
    }

    fn render(&self) -> String {
        self.to_string()
    }
}

impl Scalar for Duration {
    const BASE: BaseKind = BaseKind::Duration;

    fn parse(raw: &str) -> Result<Self, ParseCause> {
        Ok(humantime::parse_duration(raw)?)
    }

    fn same(&self, other: &Self) -> bool {
        self == other
    }

    fn is_zero(&self) -> bool {
        *self == Duration::ZERO
    }

    fn render(&self) -> String {
        humantime::format_duration(*self).to_string()
    }
}

impl Scalar for Url {
    const BASE: BaseKind = BaseKind::Url;

    fn parse(raw: &str) -> Result<Self, ParseCause> {
        Ok(Url::parse(raw)?)
    }

    // Url equality covers every component of the serialization.
    fn same(&self, other: &Self) -> bool {
        self == other
    }

    fn is_zero(&self) -> bool {
        false
    }

    fn render(&self) -> String {
        self.as_str().to_string()
    }
}

impl Scalar for Regex {
    const BASE: BaseKind = BaseKind::Regex;

    fn parse(raw: &str) -> Result<Self, ParseCause> {
        Ok(Regex::new(raw)?)
    }

    // Two regexes compiled from the same pattern are the same program.
    fn same(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }

    fn is_zero(&self) -> bool {
        self.as_str().is_empty()
    }

    fn render(&self) -> String {
        self.as_str().to_string()
    }
}

fn parse_as<T: Scalar>(kind: Kind, raw: &str) -> Result<T, BindError> {
    T::parse(raw).map_err(|source| BindError::Parse {
        kind,
        input: raw.to_string(),
        source,
    })
}

/// A reference to field storage of one base type, in one of the three shapes.
pub enum Shaped<'a, T> {
    Value(&'a mut T),
    Pointer(&'a mut Option<T>),
    Sequence(&'a mut Vec<T>),
}

impl<T: Scalar> Shaped<'_, T> {
    pub(crate) fn kind(&self) -> Kind {
        let shape = match self {
            Shaped::Value(_) => Shape::Value,
            Shaped::Pointer(_) => Shape::Pointer,
            Shaped::Sequence(_) => Shape::Sequence,
        };
        Kind::new(T::BASE, shape)
    }

    pub(crate) fn set(&mut self, separator: &str, raw: &str) -> Result<bool, BindError> {
        let kind = self.kind();
        match self {
            Shaped::Value(slot) => {
                let value: T = parse_as(kind, raw)?;
                if slot.same(&value) {
                    return Ok(false);
                }
                **slot = value;
                Ok(true)
            }
            Shaped::Pointer(slot) => {
                let value: T = parse_as(kind, raw)?;
                if let Some(current) = &**slot
                    && current.same(&value)
                {
                    return Ok(false);
                }
                **slot = Some(value);
                Ok(true)
            }
            Shaped::Sequence(_) => {
                let separator = if separator.is_empty() {
                    DEFAULT_SEPARATOR
                } else {
                    separator
                };
                let elements: Vec<&str> = raw.split(separator).collect();
                self.set_many(&elements)
            }
        }
    }

    pub(crate) fn set_many(&mut self, elements: &[&str]) -> Result<bool, BindError> {
        let kind = self.kind();
        let Shaped::Sequence(slot) = self else {
            return Err(BindError::UnsupportedKind { kind });
        };

        let values = elements
            .iter()
            .map(|raw| parse_as::<T>(kind, raw))
            .collect::<Result<Vec<T>, BindError>>()?;

        if slot.len() == values.len() && slot.iter().zip(&values).all(|(a, b)| a.same(b)) {
            return Ok(false);
        }
        **slot = values;
        Ok(true)
    }

    pub(crate) fn is_zero(&self) -> bool {
        match self {
            Shaped::Value(slot) => slot.is_zero(),
            Shaped::Pointer(slot) => slot.is_none(),
            Shaped::Sequence(slot) => slot.is_empty(),
        }
    }

    pub(crate) fn display(&self) -> String {
        match self {
            Shaped::Value(slot) => slot.render(),
            Shaped::Pointer(slot) => match &**slot {
                Some(value) => value.render(),
                None => "<nil>".to_string(),
            },
            Shaped::Sequence(slot) => {
                let items: Vec<String> = slot.iter().map(Scalar::render).collect();
                format!("[{}]", items.join(" "))
            }
        }
    }
}

macro_rules! slots {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        /// Mutable access to one bindable field.
        ///
        /// Built with `From` from `&mut T`, `&mut Option<T>` or `&mut Vec<T>`
        /// for every supported `T`, usually through
        /// [`FieldSet::field`](crate::FieldSet::field).
        pub enum Slot<'a> {
            $( $variant(Shaped<'a, $ty>), )*
        }

        impl Slot<'_> {
            pub fn kind(&self) -> Kind {
                match self {
                    $( Slot::$variant(s) => s.kind(), )*
                }
            }

            /// Parse `raw` into the slot and report whether the stored value changed.
            ///
            /// Sequence slots split `raw` on `separator` first (an empty
            /// separator means `,`).
            pub fn set(&mut self, separator: &str, raw: &str) -> Result<bool, BindError> {
                match self {
                    $( Slot::$variant(s) => s.set(separator, raw), )*
                }
            }

            /// Replace a sequence slot with the parsed `elements`.
            ///
            /// Returns [`BindError::UnsupportedKind`] for value and pointer slots.
            pub fn set_many(&mut self, elements: &[&str]) -> Result<bool, BindError> {
                match self {
                    $( Slot::$variant(s) => s.set_many(elements), )*
                }
            }

            /// `true` for empty strings, zeros, `false`, empty regexes, `None`
            /// and empty sequences.
            pub fn is_zero(&self) -> bool {
                match self {
                    $( Slot::$variant(s) => s.is_zero(), )*
                }
            }

            /// The current value rendered for usage and prompt text.
            pub fn display(&self) -> String {
                match self {
                    $( Slot::$variant(s) => s.display(), )*
                }
            }
        }

        $(
            impl<'a> From<&'a mut $ty> for Slot<'a> {
                fn from(value: &'a mut $ty) -> Self {
                    Slot::$variant(Shaped::Value(value))
                }
            }

            impl<'a> From<&'a mut Option<$ty>> for Slot<'a> {
                fn from(value: &'a mut Option<$ty>) -> Self {
                    Slot::$variant(Shaped::Pointer(value))
                }
            }

            impl<'a> From<&'a mut Vec<$ty>> for Slot<'a> {
                fn from(value: &'a mut Vec<$ty>) -> Self {
                    Slot::$variant(Shaped::Sequence(value))
                }
            }
        )*
    };
}

slots! {
    String(String),
    Bool(bool),
    Isize(isize),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    Usize(usize),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    F32(f32),
    F64(f64),
    Char(char),
    Duration(Duration),
    Url(Url),
    Regex(Regex),
}

impl Slot<'_> {
    /// Boolean values and pointers, which flags accept without an explicit value.
    pub fn is_bool(&self) -> bool {
        let kind = self.kind();
        kind.base == BaseKind::Bool && kind.shape != Shape::Sequence
    }
}
