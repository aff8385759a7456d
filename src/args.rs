//! Bind `flag`-tagged fields straight from an argument list, without a CLI
//! framework.
//!
//! The scanner understands the usual single-token and two-token forms:
//!
//! ```text
//! -name   --name   -name=value   --name=value   -name value   --name value
//! ```
//!
//! A name given without a value resolves to `"true"`, so boolean fields work
//! as switches. A following token is only taken as the value when it does
//! not itself look like a flag (negative numbers do not).
//!
//! ```
//! use fieldbind::{Flags, FieldSet, Record};
//!
//! #[derive(Default)]
//! struct Opts {
//!     verbose: bool,
//!     port: u16,
//! }
//!
//! impl Record for Opts {
//!     fn fields<'a>(&'a mut self, f: &mut FieldSet<'a>) {
//!         f.field("Verbose", &mut self.verbose).tag("flag", "verbose");
//!         f.field("Port", &mut self.port).tag("flag", "port");
//!     }
//! }
//!
//! let mut opts = Opts::default();
//! Flags::new().parse(&mut opts, &["--verbose", "-port", "8080"]).unwrap();
//! assert!(opts.verbose);
//! assert_eq!(opts.port, 8080);
//! ```

use std::sync::LazyLock;

use log::debug;
use regex::Regex;

use crate::error::BindError;
use crate::types::ErrorPolicy;
use crate::walk::{Record, SEPARATOR_TAG, Walker};

/// Default tag key read by the flag adapters.
pub const FLAG_TAG: &str = "flag";

static FLAG_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^-{1,2}[A-Za-z]([0-9A-Za-z.-]*[0-9A-Za-z])?").expect("flag token pattern is valid")
});

/// Flag binding options, shared by [`Flags::parse`] and the clap adapter.
#[derive(Debug, Clone)]
pub struct Flags {
    tag: String,
    separator_tag: String,
    policy: ErrorPolicy,
    prefix: String,
}

impl Default for Flags {
    fn default() -> Self {
        Self::new()
    }
}

impl Flags {
    pub fn new() -> Self {
        Self {
            tag: FLAG_TAG.to_string(),
            separator_tag: SEPARATOR_TAG.to_string(),
            policy: ErrorPolicy::default(),
            prefix: String::new(),
        }
    }

    /// Read flag names from `key` instead of `flag`.
    pub fn tag(mut self, key: &str) -> Self {
        self.tag = key.to_string();
        self
    }

    pub fn separator_tag(mut self, key: &str) -> Self {
        self.separator_tag = key.to_string();
        self
    }

    pub fn policy(mut self, policy: ErrorPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Prepend `prefix` to every flag name.
    pub fn prefix(mut self, prefix: &str) -> Self {
        self.prefix = prefix.to_string();
        self
    }

    pub(crate) fn walker(&self) -> Walker {
        Walker::new(&self.tag)
            .separator_tag(&self.separator_tag)
            .policy(self.policy)
            .prefix(&self.prefix)
    }

    /// Scan `args` for every tagged field of `record` and convert what is found.
    ///
    /// Fields whose flag is absent, or given with an empty value
    /// (`--name=`), keep their current value.
    pub fn parse<S: AsRef<str>>(&self, record: &mut dyn Record, args: &[S]) -> Result<(), BindError> {
        self.walker().walk(record, |mut info| {
            let Some(raw) = flag_value(args, &info.external) else {
                return Ok(());
            };
            if raw.is_empty() {
                return Ok(());
            }
            let changed = info.slot.set(info.separator, &raw)?;
            debug!("--{} = {raw:?} (changed: {changed})", info.external);
            Ok(())
        })
    }
}

/// The value given for flag `name` in `args`, if the flag appears.
///
/// Only the first occurrence counts. A flag without an attached or following
/// value yields `"true"`.
pub fn flag_value<S: AsRef<str>>(args: &[S], name: &str) -> Option<String> {
    for (i, arg) in args.iter().enumerate() {
        let arg = arg.as_ref();
        let Some(body) = arg.strip_prefix("--").or_else(|| arg.strip_prefix('-')) else {
            continue;
        };

        if let Some((flag, value)) = body.split_once('=') {
            if flag == name {
                return Some(value.to_string());
            }
            continue;
        }

        if body != name {
            continue;
        }

        return match args.get(i + 1).map(AsRef::as_ref) {
            Some(next) if !FLAG_TOKEN.is_match(next) => Some(next.to_string()),
            _ => Some("true".to_string()),
        };
    }
    None
}
