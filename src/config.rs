use anyhow::{Context, Result};
use serde::Deserialize;
use std::{env, path::Path};

/// Optional settings file, looked up in the working directory
const CONFIG_FILE: &str = "wordscramble.toml";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub game: GameConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GameConfig {
    pub word_list_path: String,
    pub dictionary_path: String,
    pub language: String,
    pub min_word_length: usize,
    pub session_idle_timeout_secs: u64,
    pub reap_interval_secs: u64,
}

/// Environment variable → config key
const ENV_OVERRIDES: &[(&str, &str)] = &[
    ("HOST", "server.host"),
    ("PORT", "server.port"),
    ("WORD_LIST_PATH", "game.word_list_path"),
    ("DICTIONARY_PATH", "game.dictionary_path"),
    ("LEXICON_LANGUAGE", "game.language"),
    ("MIN_WORD_LENGTH", "game.min_word_length"),
    ("SESSION_IDLE_TIMEOUT", "game.session_idle_timeout_secs"),
    ("SESSION_REAP_INTERVAL", "game.reap_interval_secs"),
];

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_sources(Some(Path::new(CONFIG_FILE)), |key| env::var(key).ok())
    }

    /// Defaults overridden only by `lookup`, no settings file
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::from_sources(None, lookup)
    }

    /// Layer defaults, the settings file (skipped if absent), then whatever
    /// `lookup` returns for each known environment variable.
    pub fn from_sources<F>(file: Option<&Path>, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = ::config::Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("game.word_list_path", "./start.txt")?
            .set_default("game.dictionary_path", "./dictionary.txt")?
            .set_default("game.language", "en")?
            .set_default("game.min_word_length", 3)?
            .set_default("game.session_idle_timeout_secs", 1800)?
            .set_default("game.reap_interval_secs", 60)?;

        if let Some(path) = file {
            builder = builder.add_source(::config::File::from(path).required(false));
        }

        for (var, key) in ENV_OVERRIDES {
            builder = builder.set_override_option(*key, lookup(var))?;
        }

        let config: Config = builder
            .build()
            .context("Failed to assemble configuration")?
            .try_deserialize()
            .context("Invalid configuration (PORT and numeric settings must be numbers)")?;

        if config.game.reap_interval_secs == 0 {
            anyhow::bail!("SESSION_REAP_INTERVAL must be greater than zero");
        }

        Ok(config)
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
