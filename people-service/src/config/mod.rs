use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;
use std::time::Duration;

#[derive(Debug, Clone, Deserialize)]
pub struct PeopleConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub mongodb: MongoConfig,
    /// Budget shared by all storage calls of a single request.
    pub request_timeout: Duration,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MongoConfig {
    pub uri: String,
    pub database: String,
    pub collection: String,
}

impl PeopleConfig {
    pub fn load() -> Result<Self, AppError> {
        // Load common config (handles .env and APP__ prefix)
        let common_config = core_config::Config::load()?;

        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        Ok(PeopleConfig {
            common: common_config,
            mongodb: MongoConfig {
                uri: get_env("MONGODB_URI", Some("mongodb://localhost:27017"), is_prod)?,
                database: get_env("MONGODB_DATABASE", Some("people_db"), false)?,
                collection: get_env("MONGODB_COLLECTION", Some("people"), false)?,
            },
            request_timeout: parse_timeout(&get_env("REQUEST_TIMEOUT_SECS", Some("10"), false)?)?,
        })
    }
}

fn parse_timeout(raw: &str) -> Result<Duration, AppError> {
    let secs: u64 = raw.trim().parse().map_err(|e| {
        AppError::ConfigError(anyhow::anyhow!(
            "REQUEST_TIMEOUT_SECS must be a whole number of seconds, got {:?}: {}",
            raw,
            e
        ))
    })?;

    if secs == 0 {
        return Err(AppError::ConfigError(anyhow::anyhow!(
            "REQUEST_TIMEOUT_SECS must be greater than zero"
        )));
    }

    Ok(Duration::from_secs(secs))
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if is_prod {
                Err(AppError::ConfigError(anyhow::anyhow!(format!(
                    "{} is required in production but not set",
                    key
                ))))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(format!(
                    "{} is required but not set",
                    key
                ))))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_parses_whole_seconds() {
        assert_eq!(parse_timeout("10").unwrap(), Duration::from_secs(10));
        assert_eq!(parse_timeout(" 3 ").unwrap(), Duration::from_secs(3));
    }

    #[test]
    fn timeout_rejects_zero_and_garbage() {
        assert!(matches!(parse_timeout("0"), Err(AppError::ConfigError(_))));
        assert!(matches!(parse_timeout("ten"), Err(AppError::ConfigError(_))));
        assert!(matches!(parse_timeout("-1"), Err(AppError::ConfigError(_))));
    }
}
