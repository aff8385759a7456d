//! Field discovery: the [`Record`] trait and the [`Walker`] that traverses it.
//!
//! Records describe themselves instead of being inspected at run time. Each
//! implementation registers its fields, in declaration order, with a mutable
//! reference to the storage and a set of string tags:
//!
//! ```
//! use std::time::Duration;
//! use fieldbind::{FieldSet, Record};
//!
//! struct Server {
//!     port: u16,
//!     timeout: Duration,
//! }
//!
//! impl Record for Server {
//!     fn fields<'a>(&'a mut self, fields: &mut FieldSet<'a>) {
//!         fields.field("Port", &mut self.port).tag("flag", "port,listening port");
//!         fields.field("Timeout", &mut self.timeout).tag("flag", "timeout");
//!     }
//! }
//! ```
//!
//! The walker visits every registered leaf that carries its tag key, builds a
//! [`FieldInfo`] for it, and hands it to a callback. Nested records are always
//! entered, tagged or not; their tag (flag mode) or name (prompt mode) extends
//! the external name of everything below them.

use std::sync::LazyLock;

use log::{debug, warn};
use regex::Regex;

use crate::error::BindError;
use crate::slot::{DEFAULT_SEPARATOR, Slot};
use crate::types::{ErrorPolicy, Naming, SemanticKind};

/// Default tag key for the separator used by sequence fields.
pub const SEPARATOR_TAG: &str = "sep";

static FLAG_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z]([0-9A-Za-z.-]*[0-9A-Za-z])?$").expect("flag name pattern is valid")
});

/// `true` if `name` starts with a letter, holds only letters, digits, `-` and
/// `.`, and does not end with `-` or `.`.
pub fn is_valid_flag_name(name: &str) -> bool {
    FLAG_NAME.is_match(name)
}

/// A type whose fields can be bound by name.
pub trait Record {
    /// Register every bindable field, in declaration order.
    fn fields<'a>(&'a mut self, fields: &mut FieldSet<'a>);
}

/// The fields of one record, collected by [`Record::fields`].
pub struct FieldSet<'a> {
    entries: Vec<Field<'a>>,
}

/// One registered field: its declared name, tags, and storage.
pub struct Field<'a> {
    name: &'static str,
    tags: Vec<(&'static str, &'static str)>,
    target: Target<'a>,
}

enum Target<'a> {
    Leaf(Slot<'a>),
    Nested(&'a mut dyn Record),
}

impl<'a> FieldSet<'a> {
    fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Register a leaf field. Accepts `&mut T`, `&mut Option<T>` and
    /// `&mut Vec<T>` for every supported `T`.
    pub fn field(&mut self, name: &'static str, slot: impl Into<Slot<'a>>) -> &mut Field<'a> {
        self.push(Field {
            name,
            tags: Vec::new(),
            target: Target::Leaf(slot.into()),
        })
    }

    /// Register a nested record. Its fields are walked with an extended name.
    pub fn nested(&mut self, name: &'static str, record: &'a mut dyn Record) -> &mut Field<'a> {
        self.push(Field {
            name,
            tags: Vec::new(),
            target: Target::Nested(record),
        })
    }

    fn push(&mut self, field: Field<'a>) -> &mut Field<'a> {
        let index = self.entries.len();
        self.entries.push(field);
        &mut self.entries[index]
    }
}

impl Field<'_> {
    /// Attach a tag. A later tag with the same key replaces the earlier one.
    pub fn tag(&mut self, key: &'static str, value: &'static str) -> &mut Self {
        self.tags.retain(|(k, _)| *k != key);
        self.tags.push((key, value));
        self
    }

    fn tag_value(&self, key: &str) -> Option<&'static str> {
        self.tags
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| *v)
    }
}

/// Everything a binding adapter needs to know about one leaf field.
pub struct FieldInfo<'a> {
    /// Mutable access to the field's storage.
    pub slot: Slot<'a>,
    /// The name the field was registered with.
    pub name: &'static str,
    /// The flag name (flag mode) or dotted path (prompt mode).
    pub external: String,
    /// Help text (flag mode) or description (prompt mode).
    pub help: Option<&'static str>,
    /// Element separator for sequence fields.
    pub separator: &'static str,
    /// Prompt behaviour; always [`SemanticKind::Any`] in flag mode.
    pub semantic: SemanticKind,
}

/// Walks a [`Record`] and calls a handler for every tagged leaf field.
#[derive(Debug, Clone)]
pub struct Walker {
    tag: String,
    separator_tag: String,
    naming: Naming,
    policy: ErrorPolicy,
    prefix: String,
}

impl Walker {
    /// A walker that binds fields tagged with `tag`.
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            separator_tag: SEPARATOR_TAG.to_string(),
            naming: Naming::default(),
            policy: ErrorPolicy::default(),
            prefix: String::new(),
        }
    }

    /// Override the tag key that holds a sequence separator (default: `sep`).
    pub fn separator_tag(mut self, key: &str) -> Self {
        self.separator_tag = key.to_string();
        self
    }

    pub fn naming(mut self, naming: Naming) -> Self {
        self.naming = naming;
        self
    }

    pub fn policy(mut self, policy: ErrorPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Prepend `prefix` to every external name.
    pub fn prefix(mut self, prefix: &str) -> Self {
        self.prefix = prefix.to_string();
        self
    }

    /// Visit every tagged leaf of `record` in declaration order.
    ///
    /// Under [`ErrorPolicy::Abort`] the first invalid name or handler error
    /// ends the walk and is returned. Under [`ErrorPolicy::Continue`] such
    /// errors are logged and the walk moves on to the next field.
    pub fn walk<F>(&self, record: &mut dyn Record, mut on_field: F) -> Result<(), BindError>
    where
        F: FnMut(FieldInfo<'_>) -> Result<(), BindError>,
    {
        self.walk_record(record, &self.prefix, &mut on_field)
    }

    fn walk_record(
        &self,
        record: &mut dyn Record,
        prefix: &str,
        on_field: &mut dyn FnMut(FieldInfo<'_>) -> Result<(), BindError>,
    ) -> Result<(), BindError> {
        let mut set = FieldSet::new();
        record.fields(&mut set);

        for field in set.entries {
            let name = field.name;
            let tag = field.tag_value(&self.tag);
            let separator = field
                .tag_value(&self.separator_tag)
                .filter(|s| !s.is_empty())
                .unwrap_or(DEFAULT_SEPARATOR);

            match field.target {
                Target::Nested(inner) => {
                    let nested_prefix = match self.naming {
                        Naming::Tagged => format!("{prefix}{}", tag.unwrap_or_default()),
                        Naming::Declared => join_path(prefix, name),
                    };
                    self.walk_record(inner, &nested_prefix, on_field)?;
                }
                Target::Leaf(slot) => {
                    let Some(payload) = tag.filter(|t| !t.is_empty()) else {
                        debug!("skipping field {name}: no `{}` tag", self.tag);
                        continue;
                    };

                    let result = self
                        .describe(slot, name, payload, separator, prefix)
                        .and_then(|info| on_field(info));

                    if let Err(err) = result {
                        match self.policy {
                            ErrorPolicy::Abort => return Err(err),
                            ErrorPolicy::Continue => warn!("skipping field {name}: {err}"),
                        }
                    }
                }
            }
        }

        Ok(())
    }

    fn describe<'a>(
        &self,
        slot: Slot<'a>,
        name: &'static str,
        payload: &'static str,
        separator: &'static str,
        prefix: &str,
    ) -> Result<FieldInfo<'a>, BindError> {
        match self.naming {
            Naming::Tagged => {
                let (flag, help) = match payload.split_once(',') {
                    Some((flag, help)) => (flag, Some(help).filter(|h| !h.is_empty())),
                    None => (payload, None),
                };
                let external = format!("{prefix}{flag}");
                if !is_valid_flag_name(&external) {
                    return Err(BindError::InvalidName { name: external });
                }
                Ok(FieldInfo {
                    slot,
                    name,
                    external,
                    help,
                    separator,
                    semantic: SemanticKind::Any,
                })
            }
            Naming::Declared => {
                let (kind, description) = match payload.split_once(',') {
                    Some((kind, description)) => {
                        (kind, Some(description.trim()).filter(|d| !d.is_empty()))
                    }
                    None => (payload, None),
                };
                Ok(FieldInfo {
                    slot,
                    name,
                    external: join_path(prefix, name),
                    help: description,
                    separator,
                    semantic: SemanticKind::from_tag(kind).unwrap_or_default(),
                })
            }
        }
    }
}

fn join_path(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{prefix}.{name}")
    }
}
