use std::env;
use std::str::FromStr;
use log::{debug, warn};

/// Reads an environment variable, returning an empty string when it is unset.
pub fn get_env_value(key: &str) -> String {
    match env::var(key) {
        Ok(value) => value,
        Err(e) => {
            warn!("Failed to get environment variable {}: {:?}", key, e);
            String::new()
        }
    }
}

/// Reads and parses an environment variable, falling back to `default`
/// when it is unset or does not parse as `T`.
pub fn get_env_or_default<T>(key: &str, default: T) -> T
where
    T: FromStr,
{
    match env::var(key).ok().and_then(|s| s.parse().ok()) {
        Some(value) => value,
        None => {
            debug!("{} not set or invalid, using default", key);
            default
        }
    }
}
