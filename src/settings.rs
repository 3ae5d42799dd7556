use config::{Config, Environment};
use serde::Deserialize;
use std::error::Error;

type Result<T> = std::result::Result<T, Box<dyn Error>>;

/// Network knobs for the extraction pass, read from `PREREQ_*` variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub rate_per_second: u32,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Settings {
    pub fn load() -> Result<Self> {
        Self::from_env(Environment::with_prefix("PREREQ").try_parsing(true))
    }

    fn from_env(env: Environment) -> Result<Self> {
        let settings: Settings = Config::builder()
            .set_default("rate_per_second", 2)?
            .set_default("timeout_secs", 10)?
            .set_default("user_agent", concat!("prereq-scrape/", env!("CARGO_PKG_VERSION")))?
            .add_source(env)
            .build()?
            .try_deserialize()?;

        if settings.rate_per_second == 0 {
            Err("rate_per_second must be at least 1")?
        }
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(vars: &[(&str, &str)]) -> Environment {
        let source: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Environment::with_prefix("PREREQ")
            .try_parsing(true)
            .source(Some(source))
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::from_env(env(&[])).unwrap();
        assert_eq!(settings.rate_per_second, 2);
        assert_eq!(settings.timeout_secs, 10);
        assert!(settings.user_agent.starts_with("prereq-scrape/"));
    }

    #[test]
    fn test_environment_overrides() {
        let settings = Settings::from_env(env(&[
            ("PREREQ_RATE_PER_SECOND", "5"),
            ("PREREQ_TIMEOUT_SECS", "30"),
        ]))
        .unwrap();
        assert_eq!(settings.rate_per_second, 5);
        assert_eq!(settings.timeout_secs, 30);
    }

    #[test]
    fn test_zero_rate_is_rejected() {
        assert!(Settings::from_env(env(&[("PREREQ_RATE_PER_SECOND", "0")])).is_err());
    }
}
