//! Bind command-line flags and interactive prompts to the fields of plain
//! Rust structs. Register the fields once, then fill them from wherever the
//! values come from.
//!
//! ```ignore
//! let mut config = ServerConfig::default();
//! Flags::new().parse(&mut config, &args)?;
//! ```
//!
//! That call finds `--port 9090`, `--db-url=postgres://...` or a bare
//! `--verbose` in `args`, converts each value to the field's type, and writes
//! it into `config`. Fields whose flag is absent keep their value.
//!
//! # Why fieldbind
//!
//! Small tools often keep their settings in one struct and then wire every
//! field to a flag by hand, again to a prompt, and again to the help text.
//! Fieldbind replaces that wiring with a single [`Record`] implementation:
//! each field is registered with a mutable reference and a few string tags,
//! and every adapter derives its behaviour from that one registration.
//!
//! ```
//! use std::time::Duration;
//! use fieldbind::{FieldSet, Record};
//!
//! #[derive(Default)]
//! struct Database {
//!     url: Option<url::Url>,
//!     pool: Vec<u16>,
//! }
//!
//! #[derive(Default)]
//! struct ServerConfig {
//!     port: u16,
//!     timeout: Duration,
//!     token: String,
//!     database: Database,
//! }
//!
//! impl Record for Database {
//!     fn fields<'a>(&'a mut self, f: &mut FieldSet<'a>) {
//!         f.field("Url", &mut self.url).tag("flag", "url,connection string");
//!         f.field("Pool", &mut self.pool).tag("flag", "pool").tag("sep", "|");
//!     }
//! }
//!
//! impl Record for ServerConfig {
//!     fn fields<'a>(&'a mut self, f: &mut FieldSet<'a>) {
//!         f.field("Port", &mut self.port)
//!             .tag("flag", "port,listening port")
//!             .tag("ask", "any,listening port");
//!         f.field("Timeout", &mut self.timeout).tag("flag", "timeout");
//!         f.field("Token", &mut self.token).tag("ask", "secret,API token");
//!         f.nested("Database", &mut self.database).tag("flag", "db-");
//!     }
//! }
//! ```
//!
//! # Supported types
//!
//! Every field is one of a closed set of base types, held in one of three
//! shapes:
//!
//! - **Base types**: `String`, `bool`, `isize`, `i8`..`i64`, `usize`,
//!   `u8`..`u64`, `f32`, `f64`, `char`, [`std::time::Duration`]
//!   (`90s`, `1h 30m`), [`url::Url`] and [`regex::Regex`].
//! - **Shapes**: `T`, `Option<T>` (written as `Some` on first assignment)
//!   and `Vec<T>` (split on the field's separator, `,` by default).
//!
//! Anything else does not implement `Into<Slot>` and is rejected at compile
//! time. See [`Slot`] for the conversion rules.
//!
//! # Walking
//!
//! A [`Walker`] visits the tagged leaves of a record in registration order,
//! descending into nested records whether or not they are tagged. Two naming
//! modes exist:
//!
//! - **Tagged** (flags): the tag holds `name[,help]`. A nested record's tag is
//!   prepended literally (`db-` + `url` = `db-url`) and the result must be a
//!   valid flag name.
//! - **Declared** (prompts): the tag holds `kind[,description]` and the name
//!   is the dotted path of registered names (`Database.Url`).
//!
//! The [`ErrorPolicy`] decides what an invalid name or a failed conversion
//! does: [`ErrorPolicy::Abort`] (default) returns it, while
//! [`ErrorPolicy::Continue`] logs it, leaves the field untouched and moves on.
//!
//! # Adapters
//!
//! | Adapter | Source of values | Entry point |
//! |---------|------------------|-------------|
//! | Argument scan | any `&[impl AsRef<str>]` | [`Flags::parse`] |
//! | clap (feature `clap`) | `clap::ArgMatches` | `Flags::register` / `Flags::apply` |
//! | Prompt | an [`Asker`] | [`Prompt::ask`] |
//! | Terminal (feature `terminal`) | stdin via dialoguer | `TerminalAsker` |
//!
//! All of them go through the same converter, so `--timeout=90s` and typing
//! `90s` at a prompt behave identically.
//!
//! # Styled output
//!
//! The [`style`] and [`ui`] modules provide ANSI styling and a small leveled
//! console ([`ui::Console`]) that is safe to share between threads.
//!
//! # Error handling
//!
//! All fallible operations return [`BindError`]. Messages are user-facing:
//! conversion errors name the type and the rejected text, prompt errors name
//! the field. Enable the `rich-errors` feature for `miette` diagnostics.
//!
//! # Logging
//!
//! Fieldbind logs through the [`log`](https://docs.rs/log) facade: skipped
//! fields and bound values at `debug`, errors dropped under
//! [`ErrorPolicy::Continue`] at `warn`. Install any logger to see them.

pub mod error;
pub mod style;
pub mod types;
pub mod ui;

mod args;
mod ask;
#[cfg(feature = "clap")]
mod cli;
mod slot;
mod summary;
mod usage;
mod walk;

#[cfg(test)]
mod fixtures;

pub use args::{FLAG_TAG, Flags, flag_value};
#[cfg(feature = "terminal")]
pub use ask::TerminalAsker;
pub use ask::{ASK_TAG, Asker, Prompt, check_mailbox};
pub use error::{BindError, ParseCause};
pub use slot::{DEFAULT_SEPARATOR, Shaped, Slot, parse_bool};
pub use summary::{FieldSummary, to_json};
pub use types::{BaseKind, ErrorPolicy, Kind, Naming, SemanticKind, Shape};
pub use usage::usage;
pub use walk::{Field, FieldInfo, FieldSet, Record, SEPARATOR_TAG, Walker, is_valid_flag_name};
