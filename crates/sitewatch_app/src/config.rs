use std::env;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};

/// Primary environment variable for the gateway credential.
pub const TOKEN_VAR: &str = "SITEWATCH_TOKEN";
/// Fallback credential variable, kept for older deployments.
pub const TOKEN_FALLBACK_VAR: &str = "BOT_TOKEN";
const DATA_FILE_VAR: &str = "SITEWATCH_DATA_FILE";
const INTERVAL_VAR: &str = "SITEWATCH_INTERVAL_MINUTES";

const DEFAULT_DATA_FILE: &str = "sitewatch_data.json";
const DEFAULT_INTERVAL_MINUTES: u32 = 15;

#[derive(Debug, Clone)]
pub struct WatchConfig {
    /// Credential for the messaging gateway. Required; startup fails hard
    /// without it.
    pub token: String,
    pub data_file: PathBuf,
    pub interval_minutes: u32,
}

impl WatchConfig {
    /// Build the configuration from the process environment, after a
    /// best-effort `.env` load.
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv();

        let token = env::var(TOKEN_VAR)
            .or_else(|_| env::var(TOKEN_FALLBACK_VAR))
            .ok()
            .filter(|token| !token.trim().is_empty());
        let Some(token) = token else {
            bail!("set {TOKEN_VAR} or {TOKEN_FALLBACK_VAR} in your environment or .env file");
        };

        let data_file = env::var(DATA_FILE_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_FILE));
        let interval_minutes = parse_interval(env::var(INTERVAL_VAR).ok())?;

        Ok(Self {
            token,
            data_file,
            interval_minutes,
        })
    }
}

fn parse_interval(raw: Option<String>) -> Result<u32> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_INTERVAL_MINUTES);
    };
    let minutes: u32 = raw
        .trim()
        .parse()
        .with_context(|| format!("invalid {INTERVAL_VAR}: {raw:?}"))?;
    if minutes == 0 {
        bail!("{INTERVAL_VAR} must be at least 1");
    }
    Ok(minutes)
}

#[cfg(test)]
mod tests {
    use super::parse_interval;

    #[test]
    fn missing_interval_uses_the_default() {
        assert_eq!(parse_interval(None).unwrap(), 15);
    }

    #[test]
    fn interval_parses_with_surrounding_whitespace() {
        assert_eq!(parse_interval(Some(" 30 ".to_owned())).unwrap(), 30);
    }

    #[test]
    fn zero_and_garbage_intervals_are_rejected() {
        assert!(parse_interval(Some("0".to_owned())).is_err());
        assert!(parse_interval(Some("soon".to_owned())).is_err());
    }
}
