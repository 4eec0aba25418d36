//! Board configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::env::VarError;
use std::str::FromStr;

use crate::consts::{DEFAULT_JITTER_DEGREES, DEFAULT_UPLOAD_POSITION, MAX_JITTER_DEGREES};
use crate::geometry::Point;

pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct BoardConfig {
    /// Max absolute rotation, in degrees, given to new items.
    pub jitter_degrees: f64,
    /// Fixed seed for the jitter RNG; OS entropy when `None`.
    pub seed: Option<u64>,
    /// Board-local position of uploaded photos.
    pub upload_position: Point,
    /// Max level for `logging::init`.
    pub log_level: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            jitter_degrees: DEFAULT_JITTER_DEGREES,
            seed: None,
            upload_position: Point::new(DEFAULT_UPLOAD_POSITION.0, DEFAULT_UPLOAD_POSITION.1),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl BoardConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `SCRAPBOARD_JITTER_DEGREES`: default 10
    /// - `SCRAPBOARD_SEED`: unseeded when absent
    /// - `SCRAPBOARD_UPLOAD_X` / `SCRAPBOARD_UPLOAD_Y`: default 400 / 200
    /// - `SCRAPBOARD_LOG`: default `info`
    ///
    /// # Errors
    ///
    /// Returns `Invalid` when a variable is set but can't be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| match std::env::var(key) {
            Ok(v) => Some(v),
            Err(VarError::NotPresent) => None,
            Err(VarError::NotUnicode(raw)) => Some(raw.to_string_lossy().into_owned()),
        })
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns `Invalid` when a key is present but can't be parsed, when the
    /// jitter falls outside `0..=180` degrees, or when an upload coordinate
    /// is not finite.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let jitter_degrees = parse_or(&lookup, "SCRAPBOARD_JITTER_DEGREES", defaults.jitter_degrees)?;
        if !(0.0..=MAX_JITTER_DEGREES).contains(&jitter_degrees) {
            return Err(ConfigError::Invalid { var: "SCRAPBOARD_JITTER_DEGREES", value: jitter_degrees.to_string() });
        }
        let seed = match lookup("SCRAPBOARD_SEED") {
            Some(raw) => Some(parse_value("SCRAPBOARD_SEED", &raw)?),
            None => None,
        };
        let upload_position = Point::new(
            finite_or(&lookup, "SCRAPBOARD_UPLOAD_X", defaults.upload_position.x)?,
            finite_or(&lookup, "SCRAPBOARD_UPLOAD_Y", defaults.upload_position.y)?,
        );
        let log_level = lookup("SCRAPBOARD_LOG").unwrap_or(defaults.log_level);

        Ok(Self { jitter_degrees, seed, upload_position, log_level })
    }
}

fn parse_or<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(var) {
        Some(raw) => parse_value(var, &raw),
        None => Ok(default),
    }
}

fn finite_or(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: f64,
) -> Result<f64, ConfigError> {
    let value = parse_or(lookup, var, default)?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ConfigError::Invalid { var, value: value.to_string() })
    }
}

fn parse_value<T: FromStr>(var: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim()
        .parse::<T>()
        .map_err(|_| ConfigError::Invalid { var, value: raw.to_string() })
}
