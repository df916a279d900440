use crate::command;
use crate::error::{MarkError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tracing::debug;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub settings: Settings,
    pub cross: CrossTarget,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Base name used by `markbuild build`.
    pub target_name: String,
    pub exe_suffix: String,
    pub output_flag: String,
    pub build_command: Vec<String>,
    pub log_command: Vec<String>,
    pub marker_dir: String,
    pub fingerprint_key: String,
}

/// `GOOS`/`GOARCH` pair forced on cross builds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrossTarget {
    pub goos: String,
    pub goarch: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            settings: Settings {
                target_name: "sqlregret".to_string(),
                exe_suffix: ".exe".to_string(),
                output_flag: "-o".to_string(),
                build_command: vec!["go".to_string(), "build".to_string()],
                log_command: vec!["git".to_string(), "log".to_string()],
                marker_dir: ".git".to_string(),
                fingerprint_key: "icebergRepo".to_string(),
            },
            cross: CrossTarget {
                goos: "linux".to_string(),
                goarch: "amd64".to_string(),
            },
        }
    }
}

fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}

fn get_config_path() -> Result<PathBuf> {
    if let Ok(config_path) = env::var("MARKBUILD_CONFIG_PATH") {
        Ok(expand_tilde(&config_path))
    } else {
        Ok(dirs::home_dir()
            .ok_or(MarkError::NoHomeDir)?
            .join(".config")
            .join("markbuild")
            .join("config.toml"))
    }
}

const EDITOR_VARS: [&str; 3] = ["MARKBUILD_EDITOR", "EDITOR", "VISUAL"];

fn pick_editor(lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
    EDITOR_VARS.iter().find_map(|var| lookup(*var))
}

fn get_editor() -> Option<String> {
    pick_editor(|var| env::var(var).ok())
}

/// Reads the config file, falling back to defaults when it does not exist.
pub fn load_config() -> Result<Config> {
    let config_path = get_config_path()?;

    if !config_path.exists() {
        debug!(path = %config_path.display(), "no config file, using defaults");
        return Ok(Config::default());
    }

    debug!(path = %config_path.display(), "loading config");
    let config_str = fs::read_to_string(&config_path)?;
    let config: Config = toml::from_str(&config_str)?;
    Ok(config)
}

pub fn init_config() -> Result<()> {
    let config_path = get_config_path()?;

    if let Some(parent) = config_path.parent() {
        fs::create_dir_all(parent)?;
    }

    if !config_path.exists() {
        let default_config = Config::default();
        let toml_string = toml::to_string_pretty(&default_config)?;
        fs::write(&config_path, toml_string)?;
        println!("Created new config file at: {}", config_path.display());
    }

    if let Some(editor) = get_editor() {
        println!("Opening config file with {editor}...");
        command::run_inherited(Command::new(&editor).arg(&config_path))?;
    } else {
        println!("No editor found in MARKBUILD_EDITOR, EDITOR, or VISUAL environment variables");
        println!("Config file location: {}", config_path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_expand_tilde_with_home() {
        let result = expand_tilde("~/test/path");

        if let Some(home) = dirs::home_dir() {
            assert_eq!(result, home.join("test/path"));
        }
    }

    #[test]
    fn test_expand_tilde_without_tilde() {
        assert_eq!(
            expand_tilde("/absolute/path"),
            PathBuf::from("/absolute/path")
        );
        assert_eq!(
            expand_tilde("relative/path"),
            PathBuf::from("relative/path")
        );
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.settings.target_name, "sqlregret");
        assert_eq!(config.settings.exe_suffix, ".exe");
        assert_eq!(config.settings.build_command, vec!["go", "build"]);
        assert_eq!(config.settings.log_command, vec!["git", "log"]);
        assert_eq!(config.settings.marker_dir, ".git");
        assert_eq!(config.cross.goos, "linux");
        assert_eq!(config.cross.goarch, "amd64");
    }

    #[test]
    fn test_config_parses_from_toml() {
        let toml_str = r#"
[settings]
target_name = "tool"
exe_suffix = ""
output_flag = "-o"
build_command = ["go", "build", "-trimpath"]
log_command = ["git", "log", "-1"]
marker_dir = ".git"
fingerprint_key = "buildRev"

[cross]
goos = "linux"
goarch = "arm64"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();

        assert_eq!(config.settings.target_name, "tool");
        assert_eq!(config.settings.build_command.len(), 3);
        assert_eq!(config.settings.fingerprint_key, "buildRev");
        assert_eq!(config.cross.goarch, "arm64");
    }

    #[test]
    fn test_default_config_survives_toml_round_trip() {
        let toml_string = toml::to_string_pretty(&Config::default()).unwrap();
        let parsed: Config = toml::from_str(&toml_string).unwrap();
        assert_eq!(parsed.settings.target_name, "sqlregret");
        assert_eq!(parsed.cross, Config::default().cross);
    }

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |var: &str| vars.get(var).cloned()
    }

    #[test]
    fn test_editor_priority() {
        assert_eq!(pick_editor(lookup(&[])), None);
        assert_eq!(
            pick_editor(lookup(&[("VISUAL", "vim")])),
            Some("vim".to_string())
        );
        assert_eq!(
            pick_editor(lookup(&[("VISUAL", "vim"), ("EDITOR", "nano")])),
            Some("nano".to_string())
        );
        assert_eq!(
            pick_editor(lookup(&[
                ("VISUAL", "vim"),
                ("EDITOR", "nano"),
                ("MARKBUILD_EDITOR", "emacs"),
            ])),
            Some("emacs".to_string())
        );
    }
}
