// Configuration lue une seule fois au démarrage (variables d'environnement / .env)

use std::env;
use std::str::FromStr;

use thiserror::Error;

const DEFAULT_DATABASE_URL: &str = "sqlite:///tmp/test.db?mode=rwc";
const DEFAULT_JWT_SECRET: &str = "default-insecure-key-change-this";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value:?}")]
    InvalidValue { name: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub jwt_secret: String,
    pub token_ttl_hours: i64,
    /// true: une collection vide renvoie 404 au lieu de 200 + []
    pub empty_list_not_found: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            host: "0.0.0.0".to_string(),
            port: 3000,
            jwt_secret: DEFAULT_JWT_SECRET.to_string(),
            token_ttl_hours: 24,
            empty_list_not_found: true,
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Construit les settings à partir d'une fonction de lecture (testable sans toucher à l'env)
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Settings::default();

        let database_url = lookup("DATABASE_URL")
            .map(|url| normalize_database_url(&url))
            .unwrap_or(defaults.database_url);

        let jwt_secret = match lookup("JWT_SECRET") {
            Some(secret) if !secret.is_empty() => secret,
            _ => {
                tracing::warn!("JWT_SECRET not set, using default (INSECURE)");
                defaults.jwt_secret
            }
        };

        Ok(Settings {
            database_url,
            host: lookup("HOST").unwrap_or(defaults.host),
            port: parse_var(&lookup, "PORT", defaults.port)?,
            jwt_secret,
            token_ttl_hours: parse_ttl(&lookup, defaults.token_ttl_hours)?,
            empty_list_not_found: parse_var(
                &lookup,
                "EMPTY_LIST_NOT_FOUND",
                defaults.empty_list_not_found,
            )?,
        })
    }
}

fn parse_var<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(name) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { name, value }),
        None => Ok(default),
    }
}

// Durée de vie des tokens: > 0 et représentable en secondes (chrono)
const MAX_TOKEN_TTL_HOURS: i64 = 24 * 365 * 100;

fn parse_ttl<F>(lookup: &F, default: i64) -> Result<i64, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let hours = parse_var(lookup, "TOKEN_TTL_HOURS", default)?;
    if hours <= 0 || hours > MAX_TOKEN_TTL_HOURS {
        return Err(ConfigError::InvalidValue {
            name: "TOKEN_TTL_HOURS",
            value: hours.to_string(),
        });
    }
    Ok(hours)
}

// Heroku & co fournissent encore des URLs "postgres://"
fn normalize_database_url(url: &str) -> String {
    match url.strip_prefix("postgres://") {
        Some(rest) => format!("postgresql://{}", rest),
        None => url.to_string(),
    }
}
