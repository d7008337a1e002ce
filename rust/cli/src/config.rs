use serde::{Deserialize, Serialize};
use std::fs;

use warsim_engine::rules::{DEFAULT_MAX_TURNS, FACE_DOWN_CARDS, WarRules};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub seed: Option<u64>,
    pub face_down: usize,
    pub recycle: bool,
    pub max_turns: u32,
    pub first: String,
    pub second: String,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub seed: ValueSource,
    pub face_down: ValueSource,
    pub recycle: ValueSource,
    pub max_turns: ValueSource,
    pub first: ValueSource,
    pub second: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            seed: ValueSource::Default,
            face_down: ValueSource::Default,
            recycle: ValueSource::Default,
            max_turns: ValueSource::Default,
            first: ValueSource::Default,
            second: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            face_down: FACE_DOWN_CARDS,
            recycle: true,
            max_turns: DEFAULT_MAX_TURNS,
            first: "Alice".into(),
            second: "Bob".into(),
        }
    }
}

impl Config {
    /// Rules from this config, with command-line overrides applied.
    pub fn rules(&self, face_down: Option<usize>, no_recycle: bool) -> WarRules {
        WarRules {
            face_down: face_down.unwrap_or(self.face_down),
            recycle_collected: self.recycle && !no_recycle,
            max_turns: self.max_turns,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("WARSIM_CONFIG")
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.face_down {
            cfg.face_down = v;
            sources.face_down = ValueSource::File;
        }
        if let Some(v) = f.recycle {
            cfg.recycle = v;
            sources.recycle = ValueSource::File;
        }
        if let Some(v) = f.max_turns {
            cfg.max_turns = v;
            sources.max_turns = ValueSource::File;
        }
        if let Some(v) = f.first {
            cfg.first = v;
            sources.first = ValueSource::File;
        }
        if let Some(v) = f.second {
            cfg.second = v;
            sources.second = ValueSource::File;
        }
    }

    if let Ok(seed) = std::env::var("WARSIM_SEED")
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Ok(fd) = std::env::var("WARSIM_FACE_DOWN")
        && !fd.is_empty()
    {
        cfg.face_down = fd
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid face_down".into()))?;
        sources.face_down = ValueSource::Env;
    }
    if let Ok(rec) = std::env::var("WARSIM_RECYCLE")
        && !rec.is_empty()
    {
        cfg.recycle =
            parse_bool(&rec).ok_or_else(|| ConfigError::Invalid("Invalid recycle".into()))?;
        sources.recycle = ValueSource::Env;
    }
    if let Ok(turns) = std::env::var("WARSIM_MAX_TURNS")
        && !turns.is_empty()
    {
        cfg.max_turns = turns
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid max_turns".into()))?;
        sources.max_turns = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    face_down: Option<usize>,
    #[serde(default)]
    recycle: Option<bool>,
    #[serde(default)]
    max_turns: Option<u32>,
    #[serde(default)]
    first: Option<String>,
    #[serde(default)]
    second: Option<String>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    cfg.rules(None, false)
        .validate()
        .map_err(|e| ConfigError::Invalid(e.to_string()))?;
    if cfg.first.trim().is_empty() || cfg.second.trim().is_empty() {
        return Err(ConfigError::Invalid(
            "player names must not be empty".into(),
        ));
    }
    Ok(())
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}
