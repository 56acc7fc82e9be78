//! Demo settings, read from the environment.
//!
//! There are no command-line flags. Each setting has a default matching the
//! classic flyweight demo and may be overridden by an environment variable.

use crate::error::PatternError;
use std::str::FromStr;

pub const DOCUMENT_LEN_VAR: &str = "PATTERNS_DOCUMENT_LEN";
pub const POINT_SIZE_VAR: &str = "PATTERNS_POINT_SIZE";
pub const SEED_VAR: &str = "PATTERNS_SEED";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    /// Number of random letters in the generated document.
    pub document_len: usize,
    /// Extrinsic point size before the first glyph; grows by one per glyph.
    pub base_point_size: usize,
    /// Seed for the random document and variant draws. `None` uses entropy.
    pub seed: Option<u64>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        DemoConfig {
            document_len: 1000,
            base_point_size: 10,
            seed: None,
        }
    }
}

impl DemoConfig {
    pub fn from_env() -> Result<Self, PatternError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup. Missing keys keep their default.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, PatternError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = DemoConfig::default();

        if let Some(len) = parse_setting(&lookup, DOCUMENT_LEN_VAR)? {
            config.document_len = len;
        }
        if let Some(size) = parse_setting(&lookup, POINT_SIZE_VAR)? {
            config.base_point_size = size;
        }
        config.seed = parse_setting(&lookup, SEED_VAR)?;

        Ok(config)
    }
}

fn parse_setting<F, T>(lookup: &F, key: &'static str) -> Result<Option<T>, PatternError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| PatternError::InvalidSetting { key, value: raw }),
    }
}
