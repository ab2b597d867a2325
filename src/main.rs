//! Template Builder - expand command scripts into text
//!
//! Scripts hold one command per line with positional argument tokens. The
//! definitions file maps each command to a template and each argument token to
//! the text substituted into that template.

use clap::{Parser, Subcommand};
use std::io::IsTerminal;
use std::path::PathBuf;
use template_builder::cli::{
    CliResult, CommandsArgs, ComposeArgs, ConfigArgs, ConvertArgs, ValidateArgs,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Template Builder - expand command scripts using command definitions
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Definition file (.toml, .json, .json5, .yaml); defaults to Templates/Template.toml next to the executable
    #[arg(long, global = true, value_name = "FILE")]
    definitions: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Expand a command script into output text
    Convert(ConvertArgs),
    /// List available commands and their argument choices
    Commands(CommandsArgs),
    /// Compose a script line from a command and argument choices
    Compose(ComposeArgs),
    /// Check a definition file for conflicts
    Validate(ValidateArgs),
    /// Inspect application configuration
    Config(ConfigArgs),
}

impl Commands {
    fn execute(&self, definitions: Option<&std::path::Path>) -> CliResult<()> {
        match self {
            Self::Convert(args) => args.execute(definitions),
            Self::Commands(args) => args.execute(definitions),
            Self::Compose(args) => args.execute(definitions),
            Self::Validate(args) => args.execute(definitions),
            Self::Config(args) => args.execute(definitions),
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal()),
        )
        .init();

    if let Err(e) = cli.command.execute(cli.definitions.as_deref()) {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code.code());
    }
}
