//! Config command implementation.
//!
//! View and manage configuration settings.
//! Config file is located at ~/.config/memos-archived/config.toml.

use std::env;
use std::fs;
use std::path::PathBuf;

use directories::BaseDirs;
use memos_view::{DisplayTimePolicy, SortDirection};
use serde::{Deserialize, Serialize};

use super::{CommandContext, CommandError, Result};

/// Current config file version. Increment when making breaking changes to schema.
const CONFIG_VERSION: u32 = 1;

/// Directory name under the config home.
const APP_DIR: &str = "memos-archived";

/// Environment variable overriding the config file path.
pub const CONFIG_ENV: &str = "MEMOS_ARCHIVED_CONFIG";

/// Configuration file structure.
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Config schema version for migrations.
    /// Defaults to current version when not present in file.
    #[serde(default = "default_version")]
    pub version: u32,

    /// Resource name of the current user, e.g. `users/1`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,

    /// List view settings.
    #[serde(default)]
    pub view: ViewConfig,

    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Returns the current config version (used by serde default).
fn default_version() -> u32 {
    CONFIG_VERSION
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            owner: None,
            view: ViewConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Config {
    /// Resolves the sort direction: explicit flag, then config, then newest first.
    pub fn direction(&self, flag: Option<bool>) -> SortDirection {
        flag.or(self.view.order_by_time_asc)
            .map(SortDirection::from_ascending)
            .unwrap_or_default()
    }

    /// Resolves the display time policy: `--strict` wins over config.
    pub fn display_time_policy(&self, strict_flag: bool) -> DisplayTimePolicy {
        if strict_flag || self.view.strict_display_time.unwrap_or(false) {
            DisplayTimePolicy::Reject
        } else {
            DisplayTimePolicy::SortLast
        }
    }
}

/// List view configuration.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ViewConfig {
    /// Order memos oldest first.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_by_time_asc: Option<bool>,

    /// Fail on unreadable display times instead of ordering them last.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strict_display_time: Option<bool>,
}

/// Output configuration.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Enable colors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<bool>,
}

/// Gets the config directory path.
/// Uses XDG-style paths: ~/.config/memos-archived/ on all platforms.
fn get_config_dir() -> Result<PathBuf> {
    if let Ok(xdg_config) = env::var("XDG_CONFIG_HOME") {
        return Ok(PathBuf::from(xdg_config).join(APP_DIR));
    }

    BaseDirs::new()
        .map(|dirs| dirs.home_dir().join(".config").join(APP_DIR))
        .ok_or_else(|| CommandError::Config("Could not determine config directory".to_string()))
}

/// Gets the config file path.
pub fn get_config_path() -> Result<PathBuf> {
    // Check for override env var first
    if let Ok(path) = env::var(CONFIG_ENV) {
        return Ok(PathBuf::from(path));
    }

    let config_dir = get_config_dir()?;
    Ok(config_dir.join("config.toml"))
}

/// Loads the configuration from disk.
pub fn load_config() -> Result<Config> {
    let path = get_config_path()?;

    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(&path)
        .map_err(|e| CommandError::Config(format!("Failed to read config: {}", e)))?;

    let config: Config = toml::from_str(&content)
        .map_err(|e| CommandError::Config(format!("Failed to parse config: {}", e)))?;

    migrate_config(config)
}

/// Migrates config to current version if needed.
fn migrate_config(mut config: Config) -> Result<Config> {
    if config.version > CONFIG_VERSION {
        return Err(CommandError::Config(format!(
            "Config version {} is newer than supported version {}",
            config.version, CONFIG_VERSION
        )));
    }

    config.version = CONFIG_VERSION;
    Ok(config)
}

/// Saves the configuration to disk.
fn save_config(config: &Config) -> Result<()> {
    let path = get_config_path()?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            CommandError::Config(format!("Failed to create config directory: {}", e))
        })?;
    }

    let content = toml::to_string_pretty(config)
        .map_err(|e| CommandError::Config(format!("Failed to serialize config: {}", e)))?;

    fs::write(&path, content)
        .map_err(|e| CommandError::Config(format!("Failed to write config: {}", e)))?;

    tracing::debug!(path = %path.display(), "saved config");
    Ok(())
}

/// Executes the config show command.
pub fn execute_show(ctx: &CommandContext, config: &Config) -> Result<()> {
    let path = get_config_path()?;

    if ctx.json_output {
        let output = serde_json::json!({
            "path": path.display().to_string(),
            "exists": path.exists(),
            "config": config,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if !ctx.quiet {
        use owo_colors::OwoColorize;

        let header = "Configuration";
        if ctx.use_colors {
            println!("{}\n", header.green().bold());
        } else {
            println!("{}\n", header);
        }

        println!("File: {}", path.display());
        println!("Exists: {}\n", path.exists());

        if path.exists() {
            println!("Settings:");
            if let Some(ref owner) = config.owner {
                println!("  owner: {}", owner);
            }

            println!("\n[view]");
            if let Some(asc) = config.view.order_by_time_asc {
                println!("  order_by_time_asc: {}", asc);
            }
            if let Some(strict) = config.view.strict_display_time {
                println!("  strict_display_time: {}", strict);
            }

            println!("\n[output]");
            if let Some(color) = config.output.color {
                println!("  color: {}", color);
            }
        } else {
            println!("(No config file exists. Run 'memos-archived config set owner users/<id>' to create one.)");
        }
    }

    Ok(())
}

/// Options for the config set command.
pub struct ConfigSetOptions {
    /// Configuration key.
    pub key: String,
    /// Configuration value.
    pub value: String,
}

/// Applies a single `key = value` setting to a config.
fn apply_setting(config: &mut Config, key: &str, value: &str) -> Result<()> {
    let (section, field) = match key.split_once('.') {
        Some((section, field)) => (Some(section), field),
        None => (None, key),
    };

    match (section, field) {
        (None, "owner") => {
            if value.trim().is_empty() {
                return Err(CommandError::Config("owner must not be empty".to_string()));
            }
            config.owner = Some(value.to_string());
        }
        (Some("view"), "order_by_time_asc") => {
            config.view.order_by_time_asc = Some(parse_bool(value)?);
        }
        (Some("view"), "strict_display_time") => {
            config.view.strict_display_time = Some(parse_bool(value)?);
        }
        (Some("output"), "color") => {
            config.output.color = Some(parse_bool(value)?);
        }
        _ => {
            return Err(CommandError::Config(format!(
                "Unknown config key '{}'. Valid keys: owner, view.order_by_time_asc, view.strict_display_time, output.color",
                key
            )));
        }
    }

    Ok(())
}

/// Executes the config set command.
///
/// `config` is the configuration already loaded by the caller; when the file
/// on disk could not be parsed it is the default, and saving replaces the
/// broken file.
pub fn execute_set(
    ctx: &CommandContext,
    mut config: Config,
    opts: &ConfigSetOptions,
) -> Result<()> {
    let path = get_config_path()?;

    apply_setting(&mut config, &opts.key, &opts.value)?;
    save_config(&config)?;

    if ctx.json_output {
        let output = serde_json::json!({
            "status": "success",
            "key": opts.key,
            "value": opts.value,
            "path": path.display().to_string(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if !ctx.quiet {
        println!("Set {} = {}", opts.key, opts.value);
    }

    Ok(())
}

/// Executes the config path command.
pub fn execute_path(ctx: &CommandContext) -> Result<()> {
    let path = get_config_path()?;

    if ctx.json_output {
        let output = serde_json::json!({
            "path": path.display().to_string(),
            "exists": path.exists(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", path.display());
    }

    Ok(())
}

/// Parses a boolean value from string.
fn parse_bool(value: &str) -> Result<bool> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "1" | "on" => Ok(true),
        "false" | "no" | "0" | "off" => Ok(false),
        _ => Err(CommandError::Config(format!(
            "Invalid boolean value '{}'. Use true/false, yes/no, 1/0, or on/off",
            value
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    /// Points the config path at a temp file for the duration of a test.
    struct ConfigEnvGuard {
        _dir: TempDir,
        path: PathBuf,
    }

    impl ConfigEnvGuard {
        fn new() -> Self {
            let dir = TempDir::new().unwrap();
            let path = dir.path().join("nested").join("config.toml");
            env::set_var(CONFIG_ENV, &path);
            Self { _dir: dir, path }
        }
    }

    impl Drop for ConfigEnvGuard {
        fn drop(&mut self) {
            env::remove_var(CONFIG_ENV);
        }
    }

    fn quiet_ctx() -> CommandContext {
        CommandContext {
            json_output: false,
            use_colors: false,
            quiet: true,
            verbose: false,
        }
    }

    #[test]
    fn test_parse_bool() {
        assert!(parse_bool("true").unwrap());
        assert!(parse_bool("YES").unwrap());
        assert!(parse_bool("1").unwrap());
        assert!(!parse_bool("off").unwrap());
        assert!(parse_bool("maybe").is_err());
    }

    #[test]
    fn test_direction_resolution() {
        let mut config = Config::default();
        assert_eq!(config.direction(None), SortDirection::Descending);

        config.view.order_by_time_asc = Some(true);
        assert_eq!(config.direction(None), SortDirection::Ascending);
        assert_eq!(config.direction(Some(false)), SortDirection::Descending);
    }

    #[test]
    fn test_display_time_policy_resolution() {
        let mut config = Config::default();
        assert_eq!(config.display_time_policy(false), DisplayTimePolicy::SortLast);
        assert_eq!(config.display_time_policy(true), DisplayTimePolicy::Reject);

        config.view.strict_display_time = Some(true);
        assert_eq!(config.display_time_policy(false), DisplayTimePolicy::Reject);
    }

    #[test]
    fn test_apply_setting_unknown_key() {
        let mut config = Config::default();
        let err = apply_setting(&mut config, "view.colour", "true").unwrap_err();
        assert!(err.to_string().contains("Unknown config key"));
    }

    #[test]
    fn test_apply_setting_rejects_empty_owner() {
        let mut config = Config::default();
        assert!(apply_setting(&mut config, "owner", "  ").is_err());
    }

    #[test]
    fn test_parse_config_file() {
        let config: Config = toml::from_str(
            r#"
owner = "users/1"

[view]
order_by_time_asc = true
"#,
        )
        .unwrap();

        assert_eq!(config.version, CONFIG_VERSION);
        assert_eq!(config.owner.as_deref(), Some("users/1"));
        assert_eq!(config.view.order_by_time_asc, Some(true));
        assert!(config.output.color.is_none());
    }

    #[test]
    fn test_migrate_rejects_future_version() {
        let config = Config {
            version: CONFIG_VERSION + 1,
            ..Config::default()
        };
        assert!(migrate_config(config).is_err());
    }

    #[test]
    #[serial]
    fn test_config_path_env_override() {
        let guard = ConfigEnvGuard::new();
        assert_eq!(get_config_path().unwrap(), guard.path);
    }

    #[test]
    #[serial]
    fn test_load_missing_config_returns_default() {
        let _guard = ConfigEnvGuard::new();
        let config = load_config().unwrap();
        assert!(config.owner.is_none());
        assert_eq!(config.version, CONFIG_VERSION);
    }

    #[test]
    #[serial]
    fn test_set_then_load_roundtrip() {
        let guard = ConfigEnvGuard::new();
        let ctx = quiet_ctx();

        execute_set(
            &ctx,
            load_config().unwrap(),
            &ConfigSetOptions {
                key: "owner".to_string(),
                value: "users/9".to_string(),
            },
        )
        .unwrap();
        execute_set(
            &ctx,
            load_config().unwrap(),
            &ConfigSetOptions {
                key: "view.order_by_time_asc".to_string(),
                value: "yes".to_string(),
            },
        )
        .unwrap();

        assert!(guard.path.exists());
        let config = load_config().unwrap();
        assert_eq!(config.owner.as_deref(), Some("users/9"));
        assert_eq!(config.view.order_by_time_asc, Some(true));
    }

    #[test]
    #[serial]
    fn test_load_invalid_toml_is_config_error() {
        let guard = ConfigEnvGuard::new();
        fs::create_dir_all(guard.path.parent().unwrap()).unwrap();
        fs::write(&guard.path, "owner = [").unwrap();

        assert!(matches!(load_config(), Err(CommandError::Config(_))));
    }

    #[test]
    #[serial]
    fn test_set_over_invalid_toml_replaces_file() {
        let guard = ConfigEnvGuard::new();
        fs::create_dir_all(guard.path.parent().unwrap()).unwrap();
        fs::write(&guard.path, "owner = [").unwrap();

        execute_set(
            &quiet_ctx(),
            Config::default(),
            &ConfigSetOptions {
                key: "owner".to_string(),
                value: "users/1".to_string(),
            },
        )
        .unwrap();

        let config = load_config().unwrap();
        assert_eq!(config.owner.as_deref(), Some("users/1"));
    }
}
