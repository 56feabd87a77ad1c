use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("PORT must be a number between 0 and 65535, got '{0}'")]
    InvalidPort(String),
    #[error("DB_POOL_SIZE must be a positive number, got '{0}'")]
    InvalidPoolSize(String),
    #[error("VOCAB_SHEETS must name at least one sheet")]
    NoSheets,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub workbook_path: PathBuf,
    pub sheet_names: Vec<String>,
    pub font_path: Option<PathBuf>,
    pub static_dir: PathBuf,
    pub pool_size: u32,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        AppConfig::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; unset or blank keys take defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let port = match get("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => 5000,
        };
        let pool_size = match get("DB_POOL_SIZE") {
            Some(raw) => match raw.parse::<u32>() {
                Ok(size) if size > 0 => size,
                _ => return Err(ConfigError::InvalidPoolSize(raw)),
            },
            None => 8,
        };
        let sheet_names: Vec<String> = get("VOCAB_SHEETS")
            .unwrap_or_else(|| "EPS 1,EPS 2".into())
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect();
        if sheet_names.is_empty() {
            return Err(ConfigError::NoSheets);
        }

        Ok(AppConfig {
            database_url: get("DATABASE_URL").unwrap_or_else(|| "vocabulary.db".into()),
            host: get("HOST").unwrap_or_else(|| "0.0.0.0".into()),
            port,
            workbook_path: get("VOCAB_WORKBOOK")
                .unwrap_or_else(|| "DAFTAR TYPE.xlsx".into())
                .into(),
            sheet_names,
            font_path: get("FONT_PATH").map(PathBuf::from),
            static_dir: get("STATIC_DIR").unwrap_or_else(|| "static".into()).into(),
            pool_size,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let config = config(&[]).unwrap();
        assert_eq!(config.database_url, "vocabulary.db");
        assert_eq!(config.bind_addr(), "0.0.0.0:5000");
        assert_eq!(config.workbook_path, PathBuf::from("DAFTAR TYPE.xlsx"));
        assert_eq!(config.sheet_names, vec!["EPS 1", "EPS 2"]);
        assert_eq!(config.font_path, None);
        assert_eq!(config.static_dir, PathBuf::from("static"));
        assert_eq!(config.pool_size, 8);
    }

    #[test]
    fn overrides() {
        let config = config(&[
            ("PORT", "8080"),
            ("HOST", "127.0.0.1"),
            ("VOCAB_SHEETS", " Sheet A , ,Sheet B"),
            ("FONT_PATH", "/fonts/NanumGothic.ttf"),
            ("DB_POOL_SIZE", "2"),
        ])
        .unwrap();
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
        assert_eq!(config.sheet_names, vec!["Sheet A", "Sheet B"]);
        assert_eq!(config.font_path, Some(PathBuf::from("/fonts/NanumGothic.ttf")));
        assert_eq!(config.pool_size, 2);
    }

    #[test]
    fn blank_values_take_defaults() {
        let config = config(&[("PORT", "  "), ("DATABASE_URL", "")]).unwrap();
        assert_eq!(config.port, 5000);
        assert_eq!(config.database_url, "vocabulary.db");
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert_eq!(config(&[("PORT", "http")]), Err(ConfigError::InvalidPort("http".into())));
        assert_eq!(config(&[("DB_POOL_SIZE", "0")]), Err(ConfigError::InvalidPoolSize("0".into())));
        assert_eq!(config(&[("VOCAB_SHEETS", " , ")]), Err(ConfigError::NoSheets));
    }
}
