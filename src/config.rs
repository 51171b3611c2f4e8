use crate::error::{Error, Result};
use chrono::{FixedOffset, Offset, Utc};
use std::env;

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub seed: Option<u64>,
    pub utc_offset_minutes: i32,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let seed = match env::var("INSIGHTS_SEED") {
            Ok(v) => Some(v.trim().parse().map_err(|_| {
                Error::Config(format!("INSIGHTS_SEED must be an unsigned integer, got {:?}", v))
            })?),
            Err(_) => None,
        };

        let utc_offset_minutes = match env::var("INSIGHTS_UTC_OFFSET_MINUTES") {
            Ok(v) => v.trim().parse().map_err(|_| {
                Error::Config(format!(
                    "INSIGHTS_UTC_OFFSET_MINUTES must be an integer, got {:?}",
                    v
                ))
            })?,
            Err(_) => 0,
        };

        let config = Self {
            seed,
            utc_offset_minutes,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        // chrono rejects offsets of a full day or more
        if self.utc_offset_minutes.unsigned_abs() >= 24 * 60 {
            return Err(Error::Config(format!(
                "UTC offset of {} minutes is out of range",
                self.utc_offset_minutes
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub seed: Option<u64>,
    pub utc_offset: FixedOffset,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: None,
            utc_offset: utc(),
        }
    }
}

impl From<&Config> for EngineConfig {
    fn from(config: &Config) -> Self {
        let utc_offset = config
            .utc_offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .unwrap_or_else(|| {
                tracing::warn!(
                    "Ignoring out-of-range UTC offset of {} minutes",
                    config.utc_offset_minutes
                );
                utc()
            });

        Self {
            seed: config.seed,
            utc_offset,
        }
    }
}

fn utc() -> FixedOffset {
    Utc.fix()
}
