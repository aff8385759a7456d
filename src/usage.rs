//! Usage text for one flag: the help line followed by a small aligned table.
//!
//! ```text
//! the help text
//! data type:      Vec<u16>
//! default value:  [1 2]
//! separator:      |
//! ```

use std::fmt::Write;

use crate::types::Shape;
use crate::walk::FieldInfo;

/// Render the usage string registered for `info`'s flag.
pub fn usage(info: &FieldInfo<'_>) -> String {
    let kind = info.slot.kind();
    let mut text = String::new();

    if let Some(help) = info.help {
        text.push_str(help);
        text.push('\n');
    }

    let _ = write!(
        text,
        "{:<15} {kind}\n{:<15} {}",
        "data type:",
        "default value:",
        info.slot.display(),
    );

    if kind.shape == Shape::Sequence {
        let _ = write!(text, "\n{:<15} {}", "separator:", info.separator);
    }

    text
}
