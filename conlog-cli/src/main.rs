//! Conlog CLI - Command line interface
//!
//! Inspect rule files, manage stored profiles and emit console log lines.

use std::io;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use conlog_config::EnvSource;

mod commands;
mod error;
mod logging;

use crate::commands::{EmitSources, ProfileAction};
use crate::error::CliResult;
use crate::logging::LogFormat;

#[derive(Parser)]
#[command(
    name = "conlog",
    about = "Console logger rules - normalize, expand, resolve and emit",
    version
)]
struct Cli {
    /// Increase diagnostic output (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Diagnostic output format
    #[arg(long, value_enum, default_value_t = LogFormat::Compact, global = true)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the canonical form of a rule file
    Normalize {
        file: PathBuf,
    },
    /// Print a rule file as shown in an editor
    Format {
        file: PathBuf,
    },
    /// Print the expanded logger -> level map
    Rules {
        file: PathBuf,
        /// Emit a JSON object instead of name=level lines
        #[arg(long)]
        json: bool,
        /// Prefix prepended to every logger name
        #[arg(long, default_value = "")]
        prefix: String,
    },
    /// Print the effective level of each logger name
    Resolve {
        file: PathBuf,
        #[arg(required = true)]
        names: Vec<String>,
        /// Level used when no rule matches
        #[arg(long, default_value = "info")]
        default: String,
    },
    /// Manage stored profiles
    Profile {
        /// Profile store file
        #[arg(long, default_value = conlog_config::PROFILE_FILE)]
        store: PathBuf,
        #[command(subcommand)]
        action: ProfileCommand,
    },
    /// Create a logger from the layered configuration and print one message
    Emit {
        name: String,
        level: String,
        message: String,
        /// Profile store file
        #[arg(long)]
        store: Option<PathBuf>,
        /// Properties file (default: ./conlog.properties)
        #[arg(long)]
        properties: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
enum ProfileCommand {
    /// List groups; the selected one is marked with '*'
    List,
    /// Show a group's rule text and options
    Show { group: String },
    /// Create an empty group
    Add { group: String },
    /// Store a rule file under a group
    Save {
        group: String,
        file: PathBuf,
        /// Logger-name column width (0-99)
        #[arg(long)]
        width: Option<String>,
        /// Prefix lines with a timestamp
        #[arg(long)]
        time: bool,
    },
    /// Make a group the active one
    Select { group: String },
    /// Delete a group
    Remove { group: String },
}

impl From<ProfileCommand> for ProfileAction {
    fn from(command: ProfileCommand) -> Self {
        match command {
            ProfileCommand::List => ProfileAction::List,
            ProfileCommand::Show { group } => ProfileAction::Show { group },
            ProfileCommand::Add { group } => ProfileAction::Add { group },
            ProfileCommand::Save {
                group,
                file,
                width,
                time,
            } => ProfileAction::Save {
                group,
                file,
                width,
                time,
            },
            ProfileCommand::Select { group } => ProfileAction::Select { group },
            ProfileCommand::Remove { group } => ProfileAction::Remove { group },
        }
    }
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.log_format);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(command: Command) -> CliResult<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match command {
        Command::Normalize { file } => commands::normalize(&file, &mut out),
        Command::Format { file } => commands::format(&file, &mut out),
        Command::Rules { file, json, prefix } => commands::rules(&file, json, &prefix, &mut out),
        Command::Resolve {
            file,
            names,
            default,
        } => {
            let default_level = commands::parse_level(&default)?;
            commands::resolve(&file, &names, default_level, &mut out)
        }
        Command::Profile { store, action } => commands::profile(&store, action.into(), &mut out),
        Command::Emit {
            name,
            level,
            message,
            store,
            properties,
        } => {
            let level = commands::parse_level(&level)?;
            // The console sink locks stdout itself
            drop(out);
            commands::emit(
                &name,
                level,
                &message,
                EmitSources {
                    store,
                    properties,
                    env: EnvSource::from_process(),
                },
            )
        }
    }
}
