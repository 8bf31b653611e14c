//! Config command - inspect and edit the slip settings file.
//!
//! Every subcommand works on the file named by the global `--config` flag,
//! falling back to `<config dir>/boleto/config.json`.

use std::fs;
use std::path::PathBuf;

use clap::{Args, Subcommand};
use console::style;
use serde_json::Value;
use tracing::debug;

use boleto_core::BoletoConfig;

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Print the settings slip commands would use
    Show,

    /// Write the built-in settings to the settings file
    Init {
        /// Replace an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print one setting (e.g. "expiration.overflow")
    Get { key: String },

    /// Change one setting and save the file
    Set {
        key: String,
        /// JSON value; bare words are taken as strings
        value: String,
    },

    /// Print where settings are read from
    Path,
}

/// The settings file a command reads and writes.
struct SettingsFile {
    path: PathBuf,
    /// Named by `--config`, so it must exist when read.
    explicit: bool,
}

impl SettingsFile {
    fn locate(config_path: Option<&str>) -> Self {
        match config_path {
            Some(path) => Self {
                path: PathBuf::from(path),
                explicit: true,
            },
            None => Self {
                path: dirs::config_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join("boleto")
                    .join("config.json"),
                explicit: false,
            },
        }
    }

    fn exists(&self) -> bool {
        self.path.exists()
    }

    /// The file's settings, or the built-in ones when the default file is absent.
    fn load(&self) -> anyhow::Result<BoletoConfig> {
        if self.explicit || self.exists() {
            debug!("Loading config from {}", self.path.display());
            Ok(BoletoConfig::from_file(&self.path)?)
        } else {
            Ok(BoletoConfig::default())
        }
    }

    fn store(&self, config: &BoletoConfig) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        Ok(config.save(&self.path)?)
    }
}

pub fn run(args: ConfigArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let file = SettingsFile::locate(config_path);

    match args.command {
        ConfigCommand::Show => {
            if !file.exists() {
                eprintln!(
                    "{} {} not found, using built-in settings",
                    style("ℹ").blue(),
                    file.path.display()
                );
            }
            println!("{}", serde_json::to_string_pretty(&file.load()?)?);
        }
        ConfigCommand::Init { force } => {
            if file.exists() && !force {
                anyhow::bail!("{} already exists (pass --force to replace it)", file.path.display());
            }
            file.store(&BoletoConfig::default())?;
            println!("{} Wrote {}", style("✓").green(), file.path.display());
        }
        ConfigCommand::Get { key } => {
            let json = serde_json::to_value(file.load()?)?;
            let value = lookup(&json, &key).ok_or_else(|| anyhow::anyhow!("Unknown setting: {}", key))?;
            println!("{}", serde_json::to_string_pretty(value)?);
        }
        ConfigCommand::Set { key, value } => {
            let config = update(file.load()?, &key, &value)?;
            file.store(&config)?;
            println!("{} {} updated in {}", style("✓").green(), key, file.path.display());
        }
        ConfigCommand::Path => {
            let status = if file.exists() {
                style("exists").green()
            } else {
                style("not created").yellow()
            };
            println!("{} ({})", file.path.display(), status);
        }
    }

    Ok(())
}

/// Configuration for slip commands: the `--config` file when given, else
/// the default file when it exists, else built-in defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<BoletoConfig> {
    SettingsFile::locate(config_path).load()
}

/// The value at dotted `key`.
fn lookup<'a>(json: &'a Value, key: &str) -> Option<&'a Value> {
    key.split('.').try_fold(json, |current, part| current.get(part))
}

/// `config` with dotted `key` set to `raw`, re-validated.
fn update(config: BoletoConfig, key: &str, raw: &str) -> anyhow::Result<BoletoConfig> {
    let value = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));

    let mut json = serde_json::to_value(&config)?;
    set_path(&mut json, key, value)?;

    let config: BoletoConfig = serde_json::from_value(json)
        .map_err(|e| anyhow::anyhow!("Invalid value for {}: {}", key, e))?;
    config.check()?;
    Ok(config)
}

/// Replace the value at dotted `key`; every segment but the last must exist.
fn set_path(json: &mut Value, key: &str, value: Value) -> anyhow::Result<()> {
    let (parents, last) = match key.rsplit_once('.') {
        Some((parents, last)) => (Some(parents), last),
        None => (None, key),
    };

    let mut current = json;
    for part in parents.into_iter().flat_map(|p| p.split('.')) {
        current = current
            .get_mut(part)
            .ok_or_else(|| anyhow::anyhow!("Unknown setting: {}", key))?;
    }

    match current.as_object_mut() {
        Some(obj) if obj.contains_key(last) => {
            obj.insert(last.to_string(), value);
            Ok(())
        }
        _ => anyhow::bail!("Unknown setting: {}", key),
    }
}
