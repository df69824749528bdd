//! Subcommand implementations
//!
//! Every command writes its result to the given writer so it can be tested
//! without capturing the process streams.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use conlog_config::{
    parse_column_width, ConfigLoader, ConsoleConfig, EnvSource, JsonFileProfileStore, Profile,
    ProfileStore, PROPERTIES_FILE,
};
use conlog_log::{BufferSink, LogConfig};
use conlog_rules::{Level, RuleMap, RuleText};

use crate::error::{CliError, CliResult};

/// Operations on the profile book
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileAction {
    List,
    Show { group: String },
    Add { group: String },
    Save {
        group: String,
        file: PathBuf,
        width: Option<String>,
        time: bool,
    },
    Select { group: String },
    Remove { group: String },
}

fn read_rule_text(path: &Path) -> CliResult<RuleText> {
    let raw = std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(RuleText::from_user(&raw))
}

pub fn parse_level(word: &str) -> CliResult<Level> {
    Level::parse_word(word.trim()).ok_or_else(|| CliError::UnknownLevel(word.to_string()))
}

/// Print the canonical form of a rule file
pub fn normalize(path: &Path, out: &mut dyn Write) -> CliResult<()> {
    let text = read_rule_text(path)?;
    out.write_all(text.canonical().as_bytes())?;
    Ok(())
}

/// Print the editor form of a rule file
pub fn format(path: &Path, out: &mut dyn Write) -> CliResult<()> {
    let text = read_rule_text(path)?;
    out.write_all(text.formatted().as_bytes())?;
    Ok(())
}

/// Print the expanded rule map as `name=level` lines or JSON
pub fn rules(path: &Path, json: bool, prefix: &str, out: &mut dyn Write) -> CliResult<()> {
    let rules = read_rule_text(path)?.rules();
    if json {
        let prefixed: RuleMap = rules
            .into_iter()
            .map(|(name, level)| (format!("{prefix}{name}"), level))
            .collect();
        serde_json::to_writer_pretty(&mut *out, &prefixed)?;
        writeln!(out)?;
    } else {
        for (key, value) in rules.to_properties(prefix) {
            writeln!(out, "{key}={value}")?;
        }
    }
    Ok(())
}

/// Print the effective level of each name
pub fn resolve(
    path: &Path,
    names: &[String],
    default_level: Level,
    out: &mut dyn Write,
) -> CliResult<()> {
    let rules = read_rule_text(path)?.rules();
    for name in names {
        writeln!(out, "{name}={}", rules.resolve(name, default_level).word())?;
    }
    Ok(())
}

/// Manage the profile book stored at `store`
pub fn profile(store: &Path, action: ProfileAction, out: &mut dyn Write) -> CliResult<()> {
    let store = JsonFileProfileStore::new(store);
    match action {
        ProfileAction::List => {
            let book = store.load()?;
            for name in book.group_names() {
                let marker = if book.selected.as_deref() == Some(name) {
                    '*'
                } else {
                    ' '
                };
                writeln!(out, "{marker} {name}")?;
            }
        }
        ProfileAction::Show { group } => {
            let book = store.load()?;
            let profile = book
                .profile(&group)
                .ok_or_else(|| conlog_config::ConfigError::UnknownGroup(group.clone()))?;
            writeln!(
                out,
                "# time={} width={}",
                profile.include_time,
                profile.column_width()
            )?;
            out.write_all(profile.formatted().as_bytes())?;
        }
        ProfileAction::Add { group } => {
            store.update(|book| book.add_group(&group))?;
            tracing::info!("Added group {group}");
        }
        ProfileAction::Save {
            group,
            file,
            width,
            time,
        } => {
            let width = match width {
                Some(raw) => parse_column_width(&raw)?,
                None => conlog_config::DEFAULT_COLUMN_WIDTH,
            };
            let text = read_rule_text(&file)?;
            let profile = Profile::from_user(text.canonical(), time, width);
            store.update(|book| book.save_profile(&group, profile))?;
            tracing::info!("Saved group {group} from {}", file.display());
        }
        ProfileAction::Select { group } => {
            store.update(|book| book.select(&group))?;
            tracing::info!("Selected group {group}");
        }
        ProfileAction::Remove { group } => {
            store.update(|book| book.remove_group(&group).map(drop))?;
            tracing::info!("Removed group {group}");
        }
    }
    Ok(())
}

/// Where `emit` reads its configuration from
#[derive(Debug, Clone, Default)]
pub struct EmitSources {
    pub store: Option<PathBuf>,
    pub properties: Option<PathBuf>,
    pub env: EnvSource,
}

/// Build a logger from the layered configuration and print one message
pub fn emit(name: &str, level: Level, message: &str, sources: EmitSources) -> CliResult<()> {
    let config = LogConfig::from_console_config(&load_sources(sources));
    emit_with(config, name, level, message);
    Ok(())
}

fn load_sources(sources: EmitSources) -> ConsoleConfig {
    let store = sources.store.map(JsonFileProfileStore::new);
    let mut loader = ConfigLoader::new()
        .with_properties_file(
            sources
                .properties
                .unwrap_or_else(|| PathBuf::from(PROPERTIES_FILE)),
        )
        .with_env(sources.env);
    if let Some(store) = &store {
        loader = loader.with_store(store);
    }
    loader.load()
}

fn emit_with(
    config: LogConfig,
    name: &str,
    level: Level,
    message: &str,
) -> Option<Arc<BufferSink>> {
    let (factory, buffer) = config.init();
    let logger = factory.logger(name);
    tracing::debug!(name, level = %logger.level(), "Resolved logger");
    logger.log(level, message);
    buffer
}
