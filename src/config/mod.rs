use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::ConfigError;

// Главная структура конфигурации
#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub parser: ParserConfig,
}

// Настройки приложения
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub rust_log: String,
    pub log_format: LogFormat,
}

// Настройки пакетного разбора
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// Файл с метками, по одной на строку. `None` - читаем stdin.
    pub input_path: Option<PathBuf>,
    /// id первой непустой строки, дальше по порядку
    pub start_id: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" | "" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            _ => Err(ConfigError::InvalidLogFormat(s.to_string())),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Собирает конфиг из произвольного источника переменных (удобно в тестах).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Config {
            app: AppConfig {
                rust_log: lookup("RUST_LOG").unwrap_or_else(|| "seat_parser=info".to_string()),
                log_format: lookup("LOG_FORMAT")
                    .map(|v| v.parse::<LogFormat>())
                    .transpose()?
                    .unwrap_or(LogFormat::Pretty),
            },
            parser: ParserConfig {
                input_path: lookup("INPUT_PATH")
                    .filter(|p| !p.trim().is_empty())
                    .map(PathBuf::from),
                start_id: parse_number("START_ID", lookup("START_ID"), 1)?,
            },
        })
    }
}

fn parse_number<T: FromStr>(
    var: &'static str,
    value: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match value {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidNumber { var, value }),
        None => Ok(default),
    }
}
