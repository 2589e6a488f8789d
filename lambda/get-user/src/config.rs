use std::env;
use std::time::Duration;

use crate::error::LookupError;

const DEFAULT_REGION: &str = "ap-northeast-1";
const DEFAULT_OPERATION_TIMEOUT_SECS: u64 = 3;

/// Startup configuration, resolved from the environment exactly once at cold
/// start and handed to the rest of the process as a plain value.
#[derive(Debug, Clone)]
pub(crate) struct Config {
    /// Name of the user table. Required.
    pub table_name: String,
    /// AWS region the table lives in.
    pub region: String,
    /// Upper bound on a single store round trip.
    pub operation_timeout: Duration,
}

impl Config {
    pub(crate) fn from_env() -> Result<Self, LookupError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    // Takes the variable lookup as a parameter so tests never have to touch
    // the process environment.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, LookupError> {
        let table_name = lookup("TABLE_NAME")
            .filter(|name| !name.is_empty())
            .ok_or_else(|| LookupError::Config("TABLE_NAME not set".to_string()))?;

        let region = lookup("REGION")
            .filter(|region| !region.is_empty())
            .unwrap_or_else(|| DEFAULT_REGION.to_string());

        let operation_timeout = match lookup("OPERATION_TIMEOUT_SECS") {
            Some(raw) => {
                let secs = raw.parse::<u64>().map_err(|_| {
                    LookupError::Config(format!("OPERATION_TIMEOUT_SECS is not a number: {raw}"))
                })?;
                Duration::from_secs(secs)
            }
            None => Duration::from_secs(DEFAULT_OPERATION_TIMEOUT_SECS),
        };

        Ok(Self {
            table_name,
            region,
            operation_timeout,
        })
    }
}
