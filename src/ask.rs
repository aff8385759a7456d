//! Fill `ask`-tagged fields by prompting the user, one field at a time.
//!
//! The tag holds a semantic kind and an optional description:
//!
//! ```text
//! ask = "any,listening port"
//! ask = "email"
//! ask = "secret,API token"
//! ```
//!
//! For every field the session is:
//!
//! 1. the field's dotted name in bold,
//! 2. `  • Current value: ...` when the field is not at its zero value
//!    (secrets are shown as `*******`),
//! 3. `  • Would you like to enter a value [Y]?`; an empty answer or one that
//!    starts with `y`/`Y` goes on, anything else leaves the field alone,
//! 4. `  • Enter a new value (description):`, read without echo for secrets.
//!
//! The terminal itself is abstracted behind [`Asker`], so sessions can be
//! scripted in tests.

use std::sync::LazyLock;

use log::debug;
use regex::Regex;

use crate::error::BindError;
use crate::style::Style;
use crate::types::{ErrorPolicy, Naming, SemanticKind, Shape};
use crate::walk::{FieldInfo, Record, SEPARATOR_TAG, Walker};

/// Default tag key read by [`Prompt`].
pub const ASK_TAG: &str = "ask";

const MASK: &str = "*******";

// RFC 5322 mailbox without comments or folding whitespace: an addr-spec,
// or a display name followed by an addr-spec in angle brackets.
static MAILBOX: LazyLock<Regex> = LazyLock::new(|| {
    let atom = r"[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+";
    let quoted = r#""(?:[^"\\]|\\.)*""#;
    let local = format!(r"(?:{atom}(?:\.{atom})*|{quoted})");
    let domain = format!(r"(?:{atom}(?:\.{atom})*|\[[^\[\]\\]*\])");
    let addr = format!("{local}@{domain}");
    let phrase = format!(r"(?:{atom}|{quoted})(?:\s+(?:{atom}|{quoted}))*");
    Regex::new(&format!(r"^(?:{addr}|(?:{phrase}\s*)?<{addr}>)$")).expect("mailbox pattern is valid")
});

/// The input side of a prompt session.
pub trait Asker {
    /// Show a line of text.
    fn output(&mut self, message: &str);

    /// Show `prompt` and read a line.
    fn ask(&mut self, prompt: &str) -> Result<String, BindError>;

    /// Show `prompt` and read a line without echoing it.
    fn ask_secret(&mut self, prompt: &str) -> Result<String, BindError>;
}

impl<A: Asker + ?Sized> Asker for &mut A {
    fn output(&mut self, message: &str) {
        (**self).output(message);
    }

    fn ask(&mut self, prompt: &str) -> Result<String, BindError> {
        (**self).ask(prompt)
    }

    fn ask_secret(&mut self, prompt: &str) -> Result<String, BindError> {
        (**self).ask_secret(prompt)
    }
}

/// Walks a record and asks for a value for every `ask`-tagged field.
pub struct Prompt<A> {
    asker: A,
    tag: String,
    separator_tag: String,
    policy: ErrorPolicy,
}

impl<A: Asker> Prompt<A> {
    pub fn new(asker: A) -> Self {
        Self {
            asker,
            tag: ASK_TAG.to_string(),
            separator_tag: SEPARATOR_TAG.to_string(),
            policy: ErrorPolicy::default(),
        }
    }

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

    pub fn into_asker(self) -> A {
        self.asker
    }

    /// Run a prompt session for every tagged field of `record`, in order.
    ///
    /// Under [`ErrorPolicy::Abort`] a read failure or rejected value ends the
    /// session. Under [`ErrorPolicy::Continue`] the field is left unchanged and
    /// the session moves on.
    pub fn ask(&mut self, record: &mut dyn Record) -> Result<(), BindError> {
        let walker = Walker::new(&self.tag)
            .separator_tag(&self.separator_tag)
            .naming(Naming::Declared)
            .policy(self.policy);
        let asker = &mut self.asker;
        walker.walk(record, |info| ask_field(asker, info))
    }
}

fn ask_field(asker: &mut impl Asker, mut info: FieldInfo<'_>) -> Result<(), BindError> {
    asker.output(&Style::BOLD.paint(&info.external));

    if !info.slot.is_zero() {
        let current = match info.semantic {
            SemanticKind::Secret => MASK.to_string(),
            _ => info.slot.display(),
        };
        asker.output(&format!("  • Current value: {current}"));
    }

    let answer = asker.ask("  • Would you like to enter a value [Y]?")?;
    if !accepts(&answer) {
        debug!("{}: declined", info.external);
        return Ok(());
    }

    let prompt = match info.help {
        Some(description) => format!("  • Enter a new value ({description}):"),
        None => "  Enter a new value:".to_string(),
    };
    let value = match info.semantic {
        SemanticKind::Secret => asker.ask_secret(&prompt)?,
        _ => asker.ask(&prompt)?,
    };

    if info.semantic == SemanticKind::Email {
        check_emails(&info, &value)?;
    }

    let changed = info
        .slot
        .set(info.separator, &value)
        .map_err(|source| BindError::InvalidInput {
            field: info.external.clone(),
            source: Box::new(source),
        })?;
    debug!("{}: changed: {changed}", info.external);
    Ok(())
}

fn accepts(answer: &str) -> bool {
    answer
        .trim()
        .chars()
        .next()
        .is_none_or(|first| first.eq_ignore_ascii_case(&'y'))
}

fn check_emails(info: &FieldInfo<'_>, value: &str) -> Result<(), BindError> {
    let addresses: Vec<&str> = if info.slot.kind().shape == Shape::Sequence {
        value.split(info.separator).collect()
    } else {
        vec![value]
    };

    for address in addresses {
        check_mailbox(address).map_err(|reason| BindError::InvalidEmail {
            field: info.external.clone(),
            reason,
        })?;
    }
    Ok(())
}

/// Validate one mailbox: `user@example.com` or `Name <user@example.com>`.
pub fn check_mailbox(address: &str) -> Result<(), String> {
    let address = address.trim();
    if address.is_empty() {
        return Err("no address".to_string());
    }
    if !address.contains('@') {
        return Err(format!("missing '@' in {address:?}"));
    }
    if !MAILBOX.is_match(address) {
        return Err(format!("{address:?} is not a valid mailbox"));
    }
    Ok(())
}

#[cfg(feature = "terminal")]
pub use terminal::TerminalAsker;

#[cfg(feature = "terminal")]
mod terminal {
    use std::io;

    use dialoguer::{Input, Password};

    use super::Asker;
    use crate::error::BindError;

    /// An [`Asker`] on the controlling terminal.
    #[derive(Debug, Default, Clone, Copy)]
    pub struct TerminalAsker;

    impl TerminalAsker {
        pub fn new() -> Self {
            Self
        }
    }

    fn read_error(err: dialoguer::Error) -> BindError {
        BindError::Io(io::Error::other(err))
    }

    impl Asker for TerminalAsker {
        fn output(&mut self, message: &str) {
            println!("{message}");
        }

        fn ask(&mut self, prompt: &str) -> Result<String, BindError> {
            Input::<String>::new()
                .with_prompt(prompt)
                .allow_empty(true)
                .interact_text()
                .map_err(read_error)
        }

        fn ask_secret(&mut self, prompt: &str) -> Result<String, BindError> {
            Password::new()
                .with_prompt(prompt)
                .allow_empty_password(true)
                .interact()
                .map_err(read_error)
        }
    }
}
