use std::str::FromStr;

use chrono::Duration;
use tracing::Level;

use crate::error::Error;
use crate::session::store::DEFAULT_SESSION_TTL_HOURS;

pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8080";
pub const DEFAULT_DATABASE_NAME: &str = "inbazz";

/// Server settings read from `INBAZZ_*` environment variables.
///
/// - `INBAZZ_BIND_ADDRESS`: default `127.0.0.1:8080`
/// - `INBAZZ_MONGODB_URI`: when absent the fixtures are served from memory
/// - `INBAZZ_DATABASE_NAME`: default `inbazz`
/// - `INBAZZ_SEED`: reseed mongodb with the fixtures on start, default `true`
/// - `INBAZZ_CONNECTION_TEXT`: row returned by the in-memory connection check
/// - `INBAZZ_LOG_LEVEL`: default `debug`
/// - `INBAZZ_SESSION_TTL_HOURS`: how long a role selection lasts, default `24`
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub bind_address: String,
    pub mongodb_uri: Option<String>,
    pub database_name: String,
    pub seed: bool,
    pub connection_text: Option<String>,
    pub log_level: Level,
    pub session_ttl: Duration,
}

impl Config {
    pub fn from_env() -> Result<Config, Error> {
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Config, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let seed = match lookup("INBAZZ_SEED") {
            Some(value) => parse_bool("INBAZZ_SEED", &value)?,
            None => true,
        };

        let log_level = match lookup("INBAZZ_LOG_LEVEL") {
            Some(value) => Level::from_str(&value).map_err(|_| Error::InvalidConfiguration {
                key: "INBAZZ_LOG_LEVEL".to_string(),
                value,
            })?,
            None => Level::DEBUG,
        };

        let session_ttl_hours = match lookup("INBAZZ_SESSION_TTL_HOURS") {
            Some(value) => match value.parse::<u32>() {
                Ok(hours) if hours > 0 => hours,
                _ => {
                    return Err(Error::InvalidConfiguration {
                        key: "INBAZZ_SESSION_TTL_HOURS".to_string(),
                        value,
                    })
                }
            },
            None => DEFAULT_SESSION_TTL_HOURS,
        };

        Ok(Config {
            bind_address: lookup("INBAZZ_BIND_ADDRESS")
                .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            mongodb_uri: lookup("INBAZZ_MONGODB_URI").filter(|uri| !uri.is_empty()),
            database_name: lookup("INBAZZ_DATABASE_NAME")
                .unwrap_or_else(|| DEFAULT_DATABASE_NAME.to_string()),
            seed,
            connection_text: lookup("INBAZZ_CONNECTION_TEXT"),
            log_level,
            session_ttl: Duration::hours(i64::from(session_ttl_hours)),
        })
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, Error> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" => Ok(false),
        _ => Err(Error::InvalidConfiguration {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_without_variables() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config.bind_address, "127.0.0.1:8080");
        assert_eq!(config.mongodb_uri, None);
        assert_eq!(config.database_name, "inbazz");
        assert!(config.seed);
        assert_eq!(config.log_level, Level::DEBUG);
        assert_eq!(config.session_ttl, Duration::hours(24));
    }

    #[test]
    fn reads_every_variable() {
        let config = Config::from_lookup(lookup_from(&[
            ("INBAZZ_BIND_ADDRESS", "0.0.0.0:9000"),
            ("INBAZZ_MONGODB_URI", "mongodb://localhost:27017"),
            ("INBAZZ_DATABASE_NAME", "marketplace"),
            ("INBAZZ_SEED", "false"),
            ("INBAZZ_CONNECTION_TEXT", "conectado"),
            ("INBAZZ_LOG_LEVEL", "warn"),
            ("INBAZZ_SESSION_TTL_HOURS", "2"),
        ]))
        .unwrap();

        assert_eq!(config.bind_address, "0.0.0.0:9000");
        assert_eq!(
            config.mongodb_uri.as_deref(),
            Some("mongodb://localhost:27017")
        );
        assert_eq!(config.database_name, "marketplace");
        assert!(!config.seed);
        assert_eq!(config.connection_text.as_deref(), Some("conectado"));
        assert_eq!(config.log_level, Level::WARN);
        assert_eq!(config.session_ttl, Duration::hours(2));
    }

    #[test]
    fn rejects_unparsable_seed_flag() {
        let result = Config::from_lookup(lookup_from(&[("INBAZZ_SEED", "sometimes")]));

        assert_eq!(
            result.unwrap_err(),
            Error::InvalidConfiguration {
                key: "INBAZZ_SEED".to_string(),
                value: "sometimes".to_string(),
            }
        );
    }

    #[test]
    fn rejects_unknown_log_level() {
        let result = Config::from_lookup(lookup_from(&[("INBAZZ_LOG_LEVEL", "loud")]));

        assert!(matches!(
            result,
            Err(Error::InvalidConfiguration { ref key, .. }) if key == "INBAZZ_LOG_LEVEL"
        ));
    }

    #[test]
    fn rejects_zero_session_ttl() {
        let result = Config::from_lookup(lookup_from(&[("INBAZZ_SESSION_TTL_HOURS", "0")]));

        assert!(matches!(
            result,
            Err(Error::InvalidConfiguration { ref key, .. }) if key == "INBAZZ_SESSION_TTL_HOURS"
        ));
    }
}
