use anyhow::{anyhow, Result};

/// Reads an optional numeric environment variable, failing when it is set but not a number.
pub fn get_env_usize(key: &str) -> Result<Option<usize>> {
    match std::env::var(key) {
        Ok(value) => value
            .parse::<usize>()
            .map(Some)
            .map_err(|_| anyhow!("{} must be a valid number, found {:?}", key, value)),
        Err(_) => Ok(None),
    }
}
