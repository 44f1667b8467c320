use anyhow::{bail, Context, Result};

use crate::life::grid::WeekStart;
use crate::life::{DEFAULT_LIFESPAN_YEARS, MAX_LIFESPAN_YEARS};

/// Defaults applied to timeline requests that leave them out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LifeDefaults {
    pub expected_lifespan_years: u32,
    pub week_start: WeekStart,
}

impl Default for LifeDefaults {
    fn default() -> Self {
        Self {
            expected_lifespan_years: DEFAULT_LIFESPAN_YEARS,
            week_start: WeekStart::Sunday,
        }
    }
}

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    /// Unset means the seeded in-memory catalog is served.
    pub database_url: Option<String>,
    pub anthropic_api_key: String,
    pub port: u16,
    pub rust_log: String,
    /// Unset means permissive CORS.
    pub cors_origin: Option<String>,
    pub life: LifeDefaults,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: optional_env("DATABASE_URL"),
            anthropic_api_key: require_env("ANTHROPIC_API_KEY")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            cors_origin: optional_env("CORS_ORIGIN"),
            life: LifeDefaults {
                expected_lifespan_years: parse_lifespan(
                    optional_env("LIFE_EXPECTED_LIFESPAN").as_deref(),
                )?,
                week_start: parse_week_start(optional_env("LIFE_WEEK_START").as_deref())?,
            },
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

/// Treats empty values the same as unset ones.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_lifespan(raw: Option<&str>) -> Result<u32> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_LIFESPAN_YEARS);
    };
    let years = raw
        .trim()
        .parse::<u32>()
        .context("LIFE_EXPECTED_LIFESPAN must be a whole number of years")?;
    if years == 0 || years > MAX_LIFESPAN_YEARS {
        bail!("LIFE_EXPECTED_LIFESPAN must be between 1 and {MAX_LIFESPAN_YEARS}, got {years}");
    }
    Ok(years)
}

fn parse_week_start(raw: Option<&str>) -> Result<WeekStart> {
    match raw {
        None => Ok(WeekStart::default()),
        Some(raw) => raw
            .parse::<WeekStart>()
            .map_err(anyhow::Error::msg)
            .context("LIFE_WEEK_START is invalid"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifespan_defaults_when_unset() {
        assert_eq!(parse_lifespan(None).unwrap(), DEFAULT_LIFESPAN_YEARS);
    }

    #[test]
    fn test_lifespan_parses_and_bounds() {
        assert_eq!(parse_lifespan(Some(" 90 ")).unwrap(), 90);
        assert!(parse_lifespan(Some("0")).is_err());
        assert!(parse_lifespan(Some("151")).is_err());
        assert!(parse_lifespan(Some("eighty")).is_err());
    }

    #[test]
    fn test_week_start_parsing() {
        assert_eq!(parse_week_start(None).unwrap(), WeekStart::Sunday);
        assert_eq!(parse_week_start(Some("monday")).unwrap(), WeekStart::Monday);
        assert!(parse_week_start(Some("tuesday")).is_err());
    }
}
