use std::ffi::OsString;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::warn;

use super::Config;

/// Environment variable naming a config file.
pub const CONFIG_ENV_VAR: &str = "TETRIS_CLI_CONFIG";

/// Pick the config file: explicit path, then the environment, then the
/// per-user config directory.
pub fn resolve_config_path(explicit: Option<&Path>, env: Option<OsString>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    if let Some(path) = env.filter(|p| !p.is_empty()) {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir().map(|dir| dir.join("tetris-cli").join("config.toml"))
}

/// [`resolve_config_path`] against the real environment.
pub fn config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    resolve_config_path(explicit, std::env::var_os(CONFIG_ENV_VAR))
}

/// Read a config file. A missing file yields the defaults.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Config::default()),
        Err(err) => return Err(err.into()),
    };
    let config: Config = toml::from_str(&contents)?;
    Ok(config)
}

/// Like [`load_config_from`], but a broken file is logged and replaced by
/// the defaults.
pub fn load_or_default(path: Option<&Path>) -> Config {
    let Some(path) = path else {
        return Config::default();
    };
    match load_config_from(path) {
        Ok(config) => config,
        Err(err) => {
            warn!("ignoring config {}: {}", path.display(), err);
            Config::default()
        }
    }
}

/// Write `config` as TOML, creating parent directories as needed.
pub fn save_config_to(path: &Path, config: &Config) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    let toml_string = toml::to_string_pretty(config)?;
    fs::write(path, toml_string)?;
    Ok(())
}

#[derive(Debug)]
pub enum ConfigError {
    Io(io::Error),
    Parse(toml::de::Error),
    Serialize(toml::ser::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(err) => write!(f, "i/o error: {err}"),
            ConfigError::Parse(err) => write!(f, "invalid TOML: {err}"),
            ConfigError::Serialize(err) => write!(f, "cannot serialize config: {err}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(err) => Some(err),
            ConfigError::Parse(err) => Some(err),
            ConfigError::Serialize(err) => Some(err),
        }
    }
}

impl From<io::Error> for ConfigError {
    fn from(err: io::Error) -> Self {
        ConfigError::Io(err)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse(err)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(err: toml::ser::Error) -> Self {
        ConfigError::Serialize(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_path_wins() {
        let path = resolve_config_path(
            Some(Path::new("a.toml")),
            Some(OsString::from("b.toml")),
        );
        assert_eq!(path, Some(PathBuf::from("a.toml")));
    }

    #[test]
    fn test_env_path_beats_default() {
        let path = resolve_config_path(None, Some(OsString::from("b.toml")));
        assert_eq!(path, Some(PathBuf::from("b.toml")));
    }

    #[test]
    fn test_empty_env_falls_through() {
        let path = resolve_config_path(None, Some(OsString::new()));
        assert_ne!(path, Some(PathBuf::new()));
    }

    #[test]
    fn test_no_path_gives_defaults() {
        assert_eq!(load_or_default(None), Config::default());
    }
}
