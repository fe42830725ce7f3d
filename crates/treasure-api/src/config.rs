//! Server configuration read from the environment.

use std::path::PathBuf;

use crate::error::AppError;

/// Settings the server needs at start-up.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
    /// Directory holding `<SceneId>.txt` fragments.
    pub fragment_dir: PathBuf,
    /// Multiplier applied to every simulated step delay.
    pub step_delay_scale: f64,
    /// Seed for reproducible hunts. `None` seeds each hunt from OS entropy.
    pub hunt_seed: Option<u64>,
}

impl ServerConfig {
    /// Reads the configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable is present but invalid.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`, which maps a variable name to
    /// its value.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable is present but invalid.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port: u16 = lookup("PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse()
            .map_err(|e| AppError::Config(format!("PORT must be a valid u16: {e}")))?;
        let fragment_dir = lookup("FRAGMENT_DIR")
            .map_or_else(|| PathBuf::from("fragments"), PathBuf::from);
        let step_delay_scale = match lookup("STEP_DELAY_SCALE") {
            None => 1.0,
            Some(raw) => {
                let scale: f64 = raw.parse().map_err(|e| {
                    AppError::Config(format!("STEP_DELAY_SCALE must be a number: {e}"))
                })?;
                if !scale.is_finite() || scale < 0.0 {
                    return Err(AppError::Config(format!(
                        "STEP_DELAY_SCALE must be a non-negative number, got {scale}"
                    )));
                }
                scale
            }
        };
        let hunt_seed = lookup("HUNT_SEED")
            .map(|raw| raw.parse::<u64>())
            .transpose()
            .map_err(|e| AppError::Config(format!("HUNT_SEED must be a valid u64: {e}")))?;

        Ok(Self {
            host,
            port,
            fragment_dir,
            step_delay_scale,
            hunt_seed,
        })
    }

    /// `host:port` string to bind.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
