use std::time::Duration;
use thiserror::Error;

/// How long the cracking animation keeps the session busy unless configured otherwise.
pub const DEFAULT_CRACKING_DURATION: Duration = Duration::from_secs(3);

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("Invalid value for parameter '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub cracking_duration: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cracking_duration: DEFAULT_CRACKING_DURATION,
        }
    }
}

#[derive(Default)]
pub struct SessionConfigBuilder {
    cracking_duration: Option<Duration>,
}

impl SessionConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cracking_duration(mut self, duration: Duration) -> Self {
        self.cracking_duration = Some(duration);
        self
    }

    pub fn cracking_seconds(mut self, seconds: f64) -> Self {
        self.cracking_duration = Duration::try_from_secs_f64(seconds).ok();
        self
    }

    pub fn build(self) -> Result<SessionConfig, ConfigError> {
        let cracking_duration = self
            .cracking_duration
            .ok_or(ConfigError::MissingParameter("cracking_duration"))?;
        if cracking_duration.is_zero() {
            return Err(ConfigError::InvalidParameter {
                name: "cracking_duration",
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(SessionConfig { cracking_duration })
    }
}
