//! Clap adapter for fieldbind.
//!
//! This module is the **optional integration layer** between the
//! framework-agnostic walker and the [clap](https://docs.rs/clap) CLI parser.
//! It is compiled only when the `clap` Cargo feature is enabled (on by
//! default).
//!
//! Binding is two calls around clap's own parsing:
//!
//! 1. [`Flags::register`] adds one long option per tagged field, with the
//!    field's current value shown as its default in the help text.
//! 2. [`Flags::apply`] copies every value the user actually passed back into
//!    the record through the converter.
//!
//! ```ignore
//! let flags = Flags::new();
//! let command = flags.register(Command::new("server"), &mut config)?;
//! let matches = command.get_matches();
//! flags.apply(&mut config, &matches)?;
//! ```
//!
//! Boolean fields take an optional value (`--verbose`, `--verbose=false`).
//! Sequence fields may be repeated; the values of every occurrence are
//! split on the field's separator and concatenated.

use clap::builder::ValueParser;
use clap::parser::ValueSource;
use clap::{Arg, ArgAction, ArgMatches, Command};
use log::debug;

use crate::args::Flags;
use crate::error::BindError;
use crate::types::Shape;
use crate::usage::usage;
use crate::walk::{FieldInfo, Record};

impl Flags {
    /// Register a long option on `command` for every tagged field of `record`.
    ///
    /// A name that is already taken, either by an argument of `command` or by
    /// an earlier field, is a [`BindError::DuplicateFlag`]. Under
    /// [`ErrorPolicy::Continue`](crate::ErrorPolicy::Continue) the later field
    /// is left unregistered.
    pub fn register(&self, command: Command, record: &mut dyn Record) -> Result<Command, BindError> {
        let mut taken: Vec<String> = command
            .get_arguments()
            .filter_map(|arg| arg.get_long().map(str::to_string))
            .collect();
        let mut args = Vec::new();

        self.walker().walk(record, |info| {
            if taken.contains(&info.external) {
                return Err(BindError::DuplicateFlag {
                    name: info.external,
                });
            }
            taken.push(info.external.clone());
            args.push(flag_arg(&info));
            Ok(())
        })?;

        Ok(command.args(args))
    }

    /// Copy the values present in `matches` into `record`.
    ///
    /// Only values given on the command line are applied. Fields that were
    /// not registered on the parsed command are ignored.
    pub fn apply(&self, record: &mut dyn Record, matches: &ArgMatches) -> Result<(), BindError> {
        self.walker().walk(record, |mut info| {
            let id = info.external.as_str();
            if !matches.try_contains_id(id).unwrap_or(false)
                || matches.value_source(id) != Some(ValueSource::CommandLine)
            {
                return Ok(());
            }

            let values: Vec<&str> = matches
                .try_get_many::<String>(id)
                .map_err(BindError::handler)?
                .map(|values| values.map(String::as_str).collect())
                .unwrap_or_default();

            let changed = if info.slot.kind().shape == Shape::Sequence {
                let elements: Vec<&str> = values
                    .iter()
                    .flat_map(|value| value.split(info.separator))
                    .collect();
                info.slot.set_many(&elements)?
            } else {
                let Some(raw) = values.last().filter(|raw| !raw.is_empty()) else {
                    return Ok(());
                };
                info.slot.set(info.separator, raw)?
            };
            debug!("--{id} = {values:?} (changed: {changed})");
            Ok(())
        })
    }
}

fn flag_arg(info: &FieldInfo<'_>) -> Arg {
    let arg = Arg::new(info.external.clone())
        .long(info.external.clone())
        .help(usage(info))
        .value_parser(ValueParser::string());

    if info.slot.is_bool() {
        arg.action(ArgAction::Set)
            .num_args(0..=1)
            .require_equals(true)
            .default_missing_value("true")
    } else if info.slot.kind().shape == Shape::Sequence {
        arg.action(ArgAction::Append)
            .allow_negative_numbers(true)
            .value_name("LIST")
    } else {
        arg.action(ArgAction::Set)
            .allow_negative_numbers(true)
            .value_name("VALUE")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::test::{Flags as AllFlags, NestedRoot, Partial, Toggle};
    use crate::types::ErrorPolicy;
    use std::time::Duration;

    fn registered(flags: &Flags, record: &mut dyn Record) -> Command {
        flags.register(Command::new("test"), record).unwrap()
    }

    fn bind(record: &mut dyn Record, argv: &[&str]) -> Result<(), BindError> {
        let flags = Flags::new();
        let command = flags.register(Command::new("test"), record)?;
        let matches = command.try_get_matches_from(argv).unwrap();
        flags.apply(record, &matches)
    }

    #[test]
    fn registers_one_long_option_per_field() {
        let mut root = NestedRoot::default();
        let command = registered(&Flags::new(), &mut root);
        let longs: Vec<&str> = command
            .get_arguments()
            .filter_map(|arg| arg.get_long())
            .collect();
        assert_eq!(longs, vec!["port", "config-timeout"]);
    }

    #[test]
    fn help_holds_usage_text() {
        let mut flags = AllFlags::default();
        let command = registered(&Flags::new(), &mut flags);
        let url = command
            .get_arguments()
            .find(|arg| arg.get_id() == "url")
            .unwrap();
        let help = url.get_help().unwrap().to_string();
        assert!(help.starts_with("the help text\n"));
        assert!(help.contains("data type:      Url"));
        assert!(help.contains("default value:  http://localhost/"));
    }

    #[test]
    fn applies_values_from_command_line() {
        let mut root = NestedRoot::default();
        bind(&mut root, &["test", "--port", "9090", "--config-timeout=1m"]).unwrap();
        assert_eq!(root.options.port, 9090);
        assert_eq!(root.config.timeout, Duration::from_secs(60));
    }

    #[test]
    fn absent_flags_keep_values() {
        let mut root = NestedRoot::default();
        root.options.port = 8080;
        bind(&mut root, &["test"]).unwrap();
        assert_eq!(root.options.port, 8080);
    }

    #[test]
    fn bool_flag_without_value() {
        let mut toggle = Toggle::default();
        bind(&mut toggle, &["test", "--enabled"]).unwrap();
        assert!(toggle.enabled);
    }

    #[test]
    fn bool_flag_with_value() {
        let mut toggle = Toggle {
            enabled: true,
            ..Default::default()
        };
        bind(&mut toggle, &["test", "--enabled=false", "--name", "ada"]).unwrap();
        assert!(!toggle.enabled);
        assert_eq!(toggle.name, "ada");
    }

    #[test]
    fn negative_numbers_in_space_form() {
        let mut flags = AllFlags::default();
        bind(
            &mut flags,
            &["test", "--i8", "-5", "--f64", "-2.5", "--i8-slice", "-3"],
        )
        .unwrap();
        assert_eq!(flags.values.i8, -5);
        assert_eq!(flags.values.f64, -2.5);
        assert_eq!(flags.slices.i8, vec![-3]);
    }

    #[test]
    fn every_shape_through_clap() {
        let mut flags = AllFlags::default();
        bind(
            &mut flags,
            &[
                "test",
                "--char=λ",
                "--duration-pointer=3s",
                "--bool-pointer",
                "--u16-slice=1|2",
                "--u16-slice",
                "3",
                "--url-slice",
                "http://a.example/ http://b.example/",
            ],
        )
        .unwrap();
        assert_eq!(flags.values.char, 'λ');
        assert_eq!(flags.pointers.duration, Some(Duration::from_secs(3)));
        assert_eq!(flags.pointers.boolean, Some(true));
        assert_eq!(flags.slices.u16, vec![1, 2, 3]);
        assert_eq!(flags.slices.url.len(), 2);
    }

    #[test]
    fn conversion_error_is_returned() {
        let mut root = NestedRoot::default();
        let err = bind(&mut root, &["test", "--port=70000"]).unwrap_err();
        match err {
            BindError::Parse { input, .. } => assert_eq!(input, "70000"),
            other => panic!("Expected Parse, got: {other:?}"),
        }
        assert_eq!(root.options.port, 0);
    }

    #[test]
    fn duplicate_flag_aborts() {
        let mut root = NestedRoot::default();
        let command = Command::new("test").arg(Arg::new("port").long("port"));
        let err = Flags::new().register(command, &mut root).unwrap_err();
        match err {
            BindError::DuplicateFlag { name } => assert_eq!(name, "port"),
            other => panic!("Expected DuplicateFlag, got: {other:?}"),
        }
    }

    #[test]
    fn duplicate_flag_skipped_when_continuing() {
        let mut root = NestedRoot::default();
        let command = Command::new("test").arg(Arg::new("port").long("port"));
        let command = Flags::new()
            .policy(ErrorPolicy::Continue)
            .register(command, &mut root)
            .unwrap();
        let longs: Vec<&str> = command
            .get_arguments()
            .filter_map(|arg| arg.get_long())
            .collect();
        assert_eq!(longs, vec!["port", "config-timeout"]);
    }

    #[test]
    fn same_record_twice_is_a_duplicate() {
        let mut first = Toggle::default();
        let mut second = Toggle::default();
        let flags = Flags::new();
        let command = flags.register(Command::new("test"), &mut first).unwrap();
        assert!(flags.register(command, &mut second).is_err());
    }

    #[test]
    fn invalid_name_under_continue() {
        let mut partial = Partial::default();
        let flags = Flags::new()
            .policy(ErrorPolicy::Continue)
            .separator_tag("delim");
        let command = flags.register(Command::new("test"), &mut partial).unwrap();
        let matches = command
            .try_get_matches_from(["test", "--owners", "a@x.io;b@x.io", "--owners=c@x.io"])
            .unwrap();
        flags.apply(&mut partial, &matches).unwrap();
        assert_eq!(partial.owners, vec!["a@x.io", "b@x.io", "c@x.io"]);
        assert_eq!(partial.level, "info");
    }

    #[test]
    fn apply_ignores_unregistered_fields() {
        let mut toggle = Toggle::default();
        let matches = Command::new("test").try_get_matches_from(["test"]).unwrap();
        Flags::new().apply(&mut toggle, &matches).unwrap();
        assert!(!toggle.enabled);
    }
}
