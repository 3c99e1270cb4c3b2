//! Driver configuration, loadable from `TETRIS_*` environment variables

use std::env;
use std::str::FromStr;

use anyhow::{ensure, Context, Result};

pub const SEED_VAR: &str = "TETRIS_SEED";
pub const GRAVITY_MS_VAR: &str = "TETRIS_GRAVITY_MS";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriverConfig {
    /// Seed for piece selection
    pub seed: u32,
    /// Milliseconds between gravity steps at speed 1
    pub gravity_interval_ms: u32,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            gravity_interval_ms: 1000,
        }
    }
}

impl DriverConfig {
    /// Read `TETRIS_SEED` and `TETRIS_GRAVITY_MS`.
    ///
    /// Unset variables keep their defaults; values that do not parse, and a
    /// gravity interval of 0, are errors.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Like [`from_env`](Self::from_env) with a custom variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(seed) = parse_var(&lookup, SEED_VAR)? {
            config.seed = seed;
        }
        if let Some(ms) = parse_var(&lookup, GRAVITY_MS_VAR)? {
            ensure!(ms > 0, "{GRAVITY_MS_VAR} must be greater than 0");
            config.gravity_interval_ms = ms;
        }

        Ok(config)
    }
}

fn parse_var<T, F>(lookup: &F, name: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(name) else {
        return Ok(None);
    };
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse()
        .map(Some)
        .with_context(|| format!("invalid {name}: {raw:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = DriverConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, DriverConfig::default());
        assert_eq!(config.seed, 1);
        assert_eq!(config.gravity_interval_ms, 1000);
    }

    #[test]
    fn test_reads_values() {
        let config =
            DriverConfig::from_lookup(lookup(&[(SEED_VAR, "42"), (GRAVITY_MS_VAR, " 250 ")]))
                .unwrap();
        assert_eq!(config.seed, 42);
        assert_eq!(config.gravity_interval_ms, 250);
    }

    #[test]
    fn test_blank_is_unset() {
        let config = DriverConfig::from_lookup(lookup(&[(SEED_VAR, "  ")])).unwrap();
        assert_eq!(config.seed, 1);
    }

    #[test]
    fn test_unparsable_names_variable() {
        let err = DriverConfig::from_lookup(lookup(&[(SEED_VAR, "abc")])).unwrap_err();
        assert!(err.to_string().contains(SEED_VAR));
    }

    #[test]
    fn test_zero_interval_rejected() {
        let err = DriverConfig::from_lookup(lookup(&[(GRAVITY_MS_VAR, "0")])).unwrap_err();
        assert!(err.to_string().contains(GRAVITY_MS_VAR));
    }
}
