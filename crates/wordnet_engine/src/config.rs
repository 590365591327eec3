// crates/wordnet_engine/src/config.rs
use serde::Deserialize;
use std::path::PathBuf;
use std::str::FromStr;

use wordnet_db::DbOptions;

/// Что делать с запросом, пришедшим до готовности базы.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReadyPolicy {
    /// Ждать `Ready` (или `Failed`)
    #[default]
    Wait,
    /// Сразу `NotReady`
    FailFast,
}

impl FromStr for ReadyPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "wait" => Ok(ReadyPolicy::Wait),
            "fail-fast" | "fail_fast" | "failfast" => Ok(ReadyPolicy::FailFast),
            other => Err(format!("unknown ready policy {other:?} (expected wait|fail-fast)")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EngineConfig {
    #[serde(default = "default_db_dir")]
    pub db_dir: PathBuf,
    /// Сколько указателей читаем одновременно
    #[serde(default = "default_parallelism")]
    pub parallelism: usize,
    #[serde(default)]
    pub ready_policy: ReadyPolicy,
    #[serde(default = "default_read_window")]
    pub read_window: usize,
    #[serde(default = "default_max_record_len")]
    pub max_record_len: usize,
}

fn default_db_dir() -> PathBuf { PathBuf::from("db") }
fn default_parallelism() -> usize { 8 }
fn default_read_window() -> usize { DbOptions::default().read_window }
fn default_max_record_len() -> usize { DbOptions::default().max_record_len }

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            db_dir: default_db_dir(),
            parallelism: default_parallelism(),
            ready_policy: ReadyPolicy::default(),
            read_window: default_read_window(),
            max_record_len: default_max_record_len(),
        }
    }
}

impl EngineConfig {
    pub fn from_env() -> Self {
        Self::from_vars(|k| std::env::var(k).ok())
    }

    /// Как `from_env`, но переменные берутся из `get` (удобно в тестах).
    /// Непарсящиеся значения игнорируются с предупреждением.
    pub fn from_vars(get: impl Fn(&str) -> Option<String>) -> Self {
        let d = Self::default();
        Self {
            db_dir: get("WORDNET_DB").map(PathBuf::from).unwrap_or(d.db_dir),
            parallelism: parsed(&get, "WORDNET_PARALLELISM").unwrap_or(d.parallelism),
            ready_policy: parsed(&get, "WORDNET_READY_POLICY").unwrap_or(d.ready_policy),
            read_window: parsed(&get, "WORDNET_READ_WINDOW").unwrap_or(d.read_window),
            max_record_len: parsed(&get, "WORDNET_MAX_RECORD_LEN").unwrap_or(d.max_record_len),
        }
    }

    pub fn with_db_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.db_dir = dir.into();
        self
    }

    pub fn db_options(&self) -> DbOptions {
        DbOptions {
            read_window: self.read_window,
            max_record_len: self.max_record_len,
        }
    }
}

fn parsed<T>(get: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let raw = get(key)?;
    match raw.parse() {
        Ok(v) => Some(v),
        Err(e) => {
            tracing::warn!(key, value = %raw, error = %e, "ignoring bad config value");
            None
        }
    }
}
