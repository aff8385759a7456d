//! A serializable listing of the fields a record exposes.

use serde::Serialize;

use crate::error::BindError;
use crate::types::{SemanticKind, Shape};
use crate::walk::{Record, Walker};

/// One bindable field, as seen by a [`Walker`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldSummary {
    /// Declared field name.
    pub name: String,
    /// Flag name or dotted path, depending on the walker's naming.
    pub external: String,
    /// Storage type, e.g. `Option<Duration>`.
    pub kind: String,
    /// Current value, rendered the way usage text shows it.
    pub default: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,
    /// Only set for sequence fields.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub separator: Option<String>,
    pub semantic: SemanticKind,
}

impl Walker {
    /// Describe every field this walker would visit, in traversal order.
    pub fn summarize(&self, record: &mut dyn Record) -> Result<Vec<FieldSummary>, BindError> {
        let mut fields = Vec::new();
        self.walk(record, |info| {
            let kind = info.slot.kind();
            fields.push(FieldSummary {
                name: info.name.to_string(),
                external: info.external,
                kind: kind.to_string(),
                default: info.slot.display(),
                help: info.help.map(str::to_string),
                separator: (kind.shape == Shape::Sequence).then(|| info.separator.to_string()),
                semantic: info.semantic,
            });
            Ok(())
        })?;
        Ok(fields)
    }
}

/// Pretty-printed JSON array of `fields`.
pub fn to_json(fields: &[FieldSummary]) -> Result<String, BindError> {
    Ok(serde_json::to_string_pretty(fields)?)
}
