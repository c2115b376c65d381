//! Shared configuration for the paddock CLI and TUI.
//!
//! TOML profiles, credential resolution (env + keyring + plaintext),
//! and translation to `paddock_core::SessionConfig`. Both binaries
//! depend on this crate.

use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use paddock_api::TlsMode;
use paddock_core::SessionConfig;

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("no such profile '{profile}'")]
    NoSuchProfile { profile: String },

    #[error("no credentials configured for profile '{profile}'")]
    NoCredentials { profile: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration shared by CLI and TUI.
#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    /// Default profile name.
    pub default_profile: Option<String>,

    /// Global defaults.
    #[serde(default)]
    pub defaults: Defaults,

    /// Named platform profiles.
    #[serde(default)]
    pub profiles: HashMap<String, Profile>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_profile: Some("default".into()),
            defaults: Defaults::default(),
            profiles: HashMap::new(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default = "default_output")]
    pub output: String,

    #[serde(default = "default_color")]
    pub color: String,

    #[serde(default)]
    pub insecure: bool,

    #[serde(default = "default_timeout")]
    pub timeout: u64,

    /// Default page size for list commands and screens.
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
            color: default_color(),
            insecure: false,
            timeout: default_timeout(),
            page_size: default_page_size(),
        }
    }
}

fn default_output() -> String {
    "table".into()
}
fn default_color() -> String {
    "auto".into()
}
fn default_timeout() -> u64 {
    30
}
fn default_page_size() -> u32 {
    25
}

/// A named platform profile.
#[derive(Debug, Deserialize, Serialize)]
pub struct Profile {
    /// Platform base URL (e.g., "https://farm.example.com").
    pub host: String,

    /// Admin account email.
    pub email: Option<String>,

    /// Password (plaintext -- prefer keyring or env var).
    pub password: Option<String>,

    /// Environment variable name containing the password.
    pub password_env: Option<String>,

    /// Path to custom CA certificate.
    pub ca_cert: Option<PathBuf>,

    /// Accept invalid TLS certificates (staging hosts).
    pub insecure: Option<bool>,

    /// Override request timeout in seconds.
    pub timeout: Option<u64>,
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "paddock", "paddock").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("paddock");
    p
}

// ── Config loading / saving ─────────────────────────────────────────

/// Load the full Config from file + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    let path = config_path();

    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(&path))
        .merge(Env::prefixed("PADDOCK_").split("_"));

    let config: Config = figment.extract()?;
    Ok(config)
}

/// Load config, returning a default if the file doesn't exist.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_default()
}

/// Serialize config to TOML and write to the canonical config path.
pub fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    let path = config_path();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(&path, toml_str)?;
    Ok(())
}

/// Pick a profile: the named one, else the configured default, else a
/// profile literally named "default".
pub fn select_profile<'c>(
    config: &'c Config,
    name: Option<&str>,
) -> Result<(&'c str, &'c Profile), ConfigError> {
    let name = name
        .map(str::to_owned)
        .or_else(|| config.default_profile.clone())
        .unwrap_or_else(|| "default".into());
    config
        .profiles
        .get_key_value(name.as_str())
        .map(|(k, v)| (k.as_str(), v))
        .ok_or(ConfigError::NoSuchProfile { profile: name })
}

// ── Credential resolution ───────────────────────────────────────────

/// Resolve the password for a profile: profile-named env var, then
/// `PADDOCK_PASSWORD`, then keyring, then plaintext in the config.
pub fn resolve_password(profile: &Profile, profile_name: &str) -> Result<SecretString, ConfigError> {
    if let Some(ref env_name) = profile.password_env {
        if let Ok(val) = std::env::var(env_name) {
            return Ok(SecretString::from(val));
        }
    }

    if let Ok(val) = std::env::var("PADDOCK_PASSWORD") {
        return Ok(SecretString::from(val));
    }

    if let Ok(entry) = keyring::Entry::new("paddock", &format!("{profile_name}/password")) {
        if let Ok(secret) = entry.get_password() {
            return Ok(SecretString::from(secret));
        }
    }

    if let Some(ref password) = profile.password {
        return Ok(SecretString::from(password.clone()));
    }

    Err(ConfigError::NoCredentials {
        profile: profile_name.into(),
    })
}

/// Store a password in the system keyring for a profile.
pub fn store_password(profile_name: &str, password: &str) -> Result<(), ConfigError> {
    let entry = keyring::Entry::new("paddock", &format!("{profile_name}/password")).map_err(
        |e| ConfigError::Validation {
            field: "keyring".into(),
            reason: e.to_string(),
        },
    )?;
    entry.set_password(password).map_err(|e| ConfigError::Validation {
        field: "keyring".into(),
        reason: e.to_string(),
    })
}

/// The admin email for a profile, env override first.
pub fn resolve_email(profile: &Profile, profile_name: &str) -> Result<String, ConfigError> {
    std::env::var("PADDOCK_EMAIL")
        .ok()
        .or_else(|| profile.email.clone())
        .ok_or_else(|| ConfigError::NoCredentials {
            profile: profile_name.into(),
        })
}

// ── Translation to core config ──────────────────────────────────────

/// Build a `SessionConfig` from a profile.
pub fn profile_to_session_config(profile: &Profile) -> Result<SessionConfig, ConfigError> {
    let _: url::Url = profile.host.parse().map_err(|_| ConfigError::Validation {
        field: "host".into(),
        reason: format!("invalid URL: {}", profile.host),
    })?;

    let tls = if profile.insecure.unwrap_or(false) {
        TlsMode::DangerAcceptInvalid
    } else if let Some(ref ca_path) = profile.ca_cert {
        TlsMode::CustomCa(ca_path.clone())
    } else {
        TlsMode::System
    };

    let mut config = SessionConfig::new(profile.host.clone());
    config.tls = tls;
    config.timeout = Duration::from_secs(profile.timeout.unwrap_or(default_timeout()));
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(host: &str) -> Profile {
        Profile {
            host: host.into(),
            email: Some("admin@example.com".into()),
            password: Some("plaintext".into()),
            password_env: None,
            ca_cert: None,
            insecure: Some(true),
            timeout: Some(5),
        }
    }

    #[test]
    fn profile_translates_to_session_config() {
        let config = profile_to_session_config(&profile("https://farm.example.com"))
            .expect("valid profile");
        assert_eq!(config.base_url, "https://farm.example.com");
        assert!(matches!(config.tls, TlsMode::DangerAcceptInvalid));
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn invalid_host_is_rejected() {
        let result = profile_to_session_config(&profile("not a url"));
        assert!(matches!(result, Err(ConfigError::Validation { .. })));
    }

    #[test]
    fn select_profile_falls_back_to_default_name() {
        let mut config = Config::default();
        config
            .profiles
            .insert("default".into(), profile("https://farm.example.com"));

        let (name, _) = select_profile(&config, None).expect("default profile");
        assert_eq!(name, "default");

        let missing = select_profile(&config, Some("staging"));
        assert!(matches!(missing, Err(ConfigError::NoSuchProfile { .. })));
    }

    #[test]
    fn toml_roundtrip_keeps_profiles() {
        let mut config = Config::default();
        config
            .profiles
            .insert("prod".into(), profile("https://farm.example.com"));

        let text = toml::to_string_pretty(&config).expect("serialize");
        let back: Config = toml::from_str(&text).expect("deserialize");
        assert!(back.profiles.contains_key("prod"));
        assert_eq!(back.defaults.page_size, 25);
    }
}
