//! Runtime configuration
//!
//! Values come from the process environment first (`.env` is loaded into it
//! on desktop), then from the `config.env` bundled into the binary.

use crate::chat::ReplyPolicy;
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

/// Bundled config for builds without a `.env` (web, iOS, Android)
pub const BUNDLED_CONFIG: &str = include_str!("../assets/config.env");

pub const REPLY_POLICY_VAR: &str = "MEDICHAT_REPLY_POLICY";
pub const REPLY_DELAY_VAR: &str = "MEDICHAT_REPLY_DELAY_MS";
pub const REPLY_MIN_VAR: &str = "MEDICHAT_REPLY_MIN_MS";
pub const REPLY_MAX_VAR: &str = "MEDICHAT_REPLY_MAX_MS";
pub const TYPEWRITER_VAR: &str = "MEDICHAT_TYPEWRITER_MS";
pub const DATA_DIR_VAR: &str = "MEDICHAT_DATA_DIR";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var}: unknown reply policy '{value}' (expected fixed, random or typewriter)")]
    UnknownPolicy { var: &'static str, value: String },

    #[error("{var}: '{value}' is not a number of milliseconds")]
    InvalidMillis { var: &'static str, value: String },
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppConfig {
    pub reply_policy: ReplyPolicy,
    pub data_dir: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let bundled = parse_env_file(BUNDLED_CONFIG);
        Self::from_lookup(|key| {
            std::env::var(key)
                .ok()
                .or_else(|| bundled.get(key).cloned())
        })
    }

    /// Builds the config from any key lookup. Invalid values are logged and
    /// replaced by defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let reply_policy = match reply_policy_from(&lookup) {
            Ok(policy) => policy,
            Err(err) => {
                tracing::warn!("{err}; using the default reply policy");
                ReplyPolicy::default()
            }
        };
        let data_dir = lookup(DATA_DIR_VAR)
            .map(|dir| dir.trim().to_string())
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from);

        Self {
            reply_policy,
            data_dir,
        }
    }
}

fn reply_policy_from(
    lookup: &impl Fn(&str) -> Option<String>,
) -> Result<ReplyPolicy, ConfigError> {
    let name = lookup(REPLY_POLICY_VAR)
        .map(|value| value.trim().to_ascii_lowercase())
        .unwrap_or_else(|| "fixed".to_string());

    match name.as_str() {
        "" | "fixed" => Ok(ReplyPolicy::Fixed {
            delay: millis(lookup, REPLY_DELAY_VAR, ReplyPolicy::DEFAULT_DELAY)?,
        }),
        "random" => Ok(ReplyPolicy::Random {
            min: millis(lookup, REPLY_MIN_VAR, ReplyPolicy::DEFAULT_RANDOM_MIN)?,
            max: millis(lookup, REPLY_MAX_VAR, ReplyPolicy::DEFAULT_RANDOM_MAX)?,
        }),
        "typewriter" => Ok(ReplyPolicy::Typewriter {
            per_char: millis(lookup, TYPEWRITER_VAR, ReplyPolicy::DEFAULT_PER_CHAR)?,
        }),
        _ => Err(ConfigError::UnknownPolicy {
            var: REPLY_POLICY_VAR,
            value: name,
        }),
    }
}

fn millis(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: Duration,
) -> Result<Duration, ConfigError> {
    match lookup(var) {
        None => Ok(default),
        Some(raw) if raw.trim().is_empty() => Ok(default),
        Some(raw) => raw
            .trim()
            .parse::<u64>()
            .map(Duration::from_millis)
            .map_err(|_| ConfigError::InvalidMillis { var, value: raw }),
    }
}

/// Parses `KEY=VALUE` lines, skipping blanks and `#` comments.
pub fn parse_env_file(contents: &str) -> HashMap<String, String> {
    let mut values = HashMap::new();
    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            values.insert(key.trim().to_string(), value.trim().to_string());
        }
    }
    values
}
