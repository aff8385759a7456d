//! # fieldbind demo application
//!
//! A sample CLI tool that binds one settings struct three different ways.
//! This is **not** a real app; it exists to demonstrate and manually verify
//! fieldbind's adapters.
//!
//! ## Running
//!
//! ```sh
//! cargo run --example fieldbind_demo -- --server-port 9090 --verbose
//! cargo run --example fieldbind_demo -- --register --help
//! cargo run --example fieldbind_demo -- --ask
//! ```
//!
//! ## Features demonstrated
//!
//! | Feature                | How to exercise it                                                        |
//! |------------------------|---------------------------------------------------------------------------|
//! | Argument scan          | `cargo run --example fieldbind_demo -- --server-timeout=2m`               |
//! | Bare boolean flag      | `cargo run --example fieldbind_demo -- --verbose`                         |
//! | Sequence separator     | `cargo run --example fieldbind_demo -- --server-upstreams "http://a http://b"` |
//! | clap registration      | `cargo run --example fieldbind_demo -- --register --color cyan`           |
//! | Generated help         | `cargo run --example fieldbind_demo -- --register --help`                 |
//! | Interactive prompts    | `cargo run --example fieldbind_demo -- --ask`                             |
//! | Best-effort binding    | `cargo run --example fieldbind_demo -- --keep-going --server-port=x`      |
//! | Walk log               | `RUST_LOG=debug cargo run --example fieldbind_demo -- --verbose`          |

mod config;

use clap::{CommandFactory, FromArgMatches, Parser};

use fieldbind::style::Style;
use fieldbind::ui::{Console, Level, Ui};
use fieldbind::{
    BindError, ErrorPolicy, Flags, Prompt, TerminalAsker, Walker, flag_value, parse_bool,
};

use config::DemoConfig;

// ---------------------------------------------------------------------------
// CLI definitions
// ---------------------------------------------------------------------------

/// fieldbind demo: one settings struct, three ways to fill it.
///
/// Every settings flag is generated from `DemoConfig`; only the mode switches
/// below are declared here.
#[derive(Parser, Debug, Default)]
#[command(name = "fieldbind-demo")]
struct Cli {
    /// Bind through clap instead of scanning the arguments directly.
    #[arg(long)]
    register: bool,

    /// Prompt for every field after the flags are applied.
    #[arg(long)]
    ask: bool,

    /// Skip values that fail to convert instead of stopping.
    #[arg(long)]
    keep_going: bool,
}

impl Cli {
    /// Read the mode switches without clap, so unknown settings flags pass.
    fn scan(args: &[String]) -> Self {
        let on = |name: &str| {
            flag_value(args, name).is_some_and(|value| parse_bool(&value).unwrap_or(false))
        };
        Self {
            register: on("register"),
            ask: on("ask"),
            keep_going: on("keep-going"),
        }
    }

    fn policy(&self) -> ErrorPolicy {
        if self.keep_going {
            ErrorPolicy::Continue
        } else {
            ErrorPolicy::Abort
        }
    }
}

/// Bind through clap: register every field, let clap parse, copy back.
fn bind_with_clap(config: &mut DemoConfig, flags: &Flags, args: &[String]) -> Result<Cli, BindError> {
    let command = flags.register(Cli::command(), config)?;
    let matches = command.get_matches_from(args);
    let cli = Cli::from_arg_matches(&matches).map_err(BindError::handler)?;
    flags.apply(config, &matches)?;
    Ok(cli)
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

fn color_style(name: &str) -> Style {
    match name {
        "red" => Style::RED,
        "green" => Style::GREEN,
        "yellow" => Style::YELLOW,
        "blue" => Style::BLUE,
        "magenta" => Style::MAGENTA,
        "cyan" => Style::CYAN,
        "white" => Style::WHITE,
        _ => Style::PLAIN,
    }
}

fn show(config: &mut DemoConfig, ui: &dyn Ui) -> Result<(), BindError> {
    let style = color_style(&config.display.color);
    let fields = Walker::new("flag").summarize(config)?;

    ui.info(&Style::BOLD, &format!("Resolved settings for {:?}", config.name));
    let width = fields.iter().map(|f| f.external.len()).max().unwrap_or(0);
    for field in &fields {
        ui.info(&style, &format!("{:<width$}  {}", field.external, field.default));
    }
    ui.debug(&Style::FAINT, &fieldbind::to_json(&fields)?);
    Ok(())
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn run(args: &[String], ui: &dyn Ui) -> Result<(), BindError> {
    let mut config = DemoConfig::default();
    let mut cli = Cli::scan(args);
    let flags = Flags::new().policy(cli.policy());

    if cli.register {
        cli = bind_with_clap(&mut config, &flags, args)?;
    } else {
        flags.parse(&mut config, args.get(1..).unwrap_or_default())?;
    }

    if cli.ask {
        Prompt::new(TerminalAsker::new())
            .policy(cli.policy())
            .ask(&mut config)?;
    }

    if config.verbose {
        ui.set_level(Level::Debug);
    }
    show(&mut config, ui)
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let ui = Console::new(Level::Info);

    if let Err(err) = run(&args, &ui) {
        ui.error(&Style::RED, &format!("error: {err}"));
        std::process::exit(1);
    }
}
