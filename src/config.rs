//! Environment-based configuration for the coordinator and agent binaries.
//!
//! Values come from the process environment (with `.env` support in the
//! binaries). Lookups are injected so unit tests never mutate the
//! process-global environment.

use std::net::SocketAddr;
use std::time::Duration;

use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),

    #[error("invalid value for {var}: {value}")]
    InvalidVar { var: &'static str, value: String },
}

fn env_lookup(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

fn parse_var<F>(get: &F, var: &'static str, default: u64) -> Result<u64, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match get(var) {
        Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidVar {
            var,
            value: raw.clone(),
        }),
        None => Ok(default),
    }
}

/// Coordinator settings
#[derive(Debug, Clone)]
pub struct CoordinatorConfig {
    pub bind_addr: SocketAddr,
}

impl CoordinatorConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(env_lookup)
    }

    fn from_vars<F>(get: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr = match get("COORDINATOR_BIND") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidVar {
                var: "COORDINATOR_BIND",
                value: raw.clone(),
            })?,
            None => SocketAddr::from(([0, 0, 0, 0], 3000)),
        };

        Ok(Self { bind_addr })
    }
}

/// Agent settings
///
/// `COORDINATOR_URL` is required: there is deliberately no default endpoint
/// to fall back to. The remaining knobs have working defaults.
#[derive(Debug, Clone)]
pub struct AgentConfig {
    pub coordinator_url: String,
    pub agent_id: String,
    pub poll_interval: Duration,
    pub request_timeout: Duration,
    pub fetch_retries: u32,
}

impl AgentConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(env_lookup)
    }

    fn from_vars<F>(get: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let coordinator_url = get("COORDINATOR_URL")
            .ok_or(ConfigError::MissingVar("COORDINATOR_URL"))?
            .trim_end_matches('/')
            .to_string();

        let agent_id = get("AGENT_ID").unwrap_or_else(|| Uuid::new_v4().to_string());

        let poll_interval =
            Duration::from_secs(parse_var(&get, "AGENT_POLL_INTERVAL_SECS", 5)?);
        let request_timeout =
            Duration::from_secs(parse_var(&get, "AGENT_REQUEST_TIMEOUT_SECS", 10)?);
        let fetch_retries = parse_var(&get, "AGENT_FETCH_RETRIES", 3)? as u32;

        Ok(Self {
            coordinator_url,
            agent_id,
            poll_interval,
            request_timeout,
            fetch_retries,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_agent_config_requires_coordinator_url() {
        let result = AgentConfig::from_vars(|_| None);

        assert!(matches!(
            result,
            Err(ConfigError::MissingVar("COORDINATOR_URL"))
        ));
    }

    #[test]
    fn test_agent_config_defaults() {
        let config = AgentConfig::from_vars(|key| match key {
            "COORDINATOR_URL" => Some("http://localhost:3000".to_string()),
            _ => None,
        })
        .unwrap();

        assert_eq!(config.coordinator_url, "http://localhost:3000");
        assert_eq!(config.poll_interval, Duration::from_secs(5));
        assert_eq!(config.request_timeout, Duration::from_secs(10));
        assert_eq!(config.fetch_retries, 3);
        assert!(Uuid::parse_str(&config.agent_id).is_ok());
    }

    #[test]
    fn test_agent_config_trims_trailing_slash() {
        let config = AgentConfig::from_vars(|key| match key {
            "COORDINATOR_URL" => Some("http://localhost:3000/".to_string()),
            _ => None,
        })
        .unwrap();

        assert_eq!(config.coordinator_url, "http://localhost:3000");
    }

    #[test]
    fn test_agent_config_rejects_bad_interval() {
        let result = AgentConfig::from_vars(|key| match key {
            "COORDINATOR_URL" => Some("http://localhost:3000".to_string()),
            "AGENT_POLL_INTERVAL_SECS" => Some("soon".to_string()),
            _ => None,
        });

        assert!(matches!(
            result,
            Err(ConfigError::InvalidVar {
                var: "AGENT_POLL_INTERVAL_SECS",
                ..
            })
        ));
    }

    #[test]
    fn test_agent_config_pins_agent_id() {
        let config = AgentConfig::from_vars(|key| match key {
            "COORDINATOR_URL" => Some("http://localhost:3000".to_string()),
            "AGENT_ID" => Some("pinned-agent".to_string()),
            _ => None,
        })
        .unwrap();

        assert_eq!(config.agent_id, "pinned-agent");
    }

    #[test]
    fn test_coordinator_config_default_bind() {
        let config = CoordinatorConfig::from_vars(|_| None).unwrap();

        assert_eq!(config.bind_addr, SocketAddr::from(([0, 0, 0, 0], 3000)));
    }

    #[test]
    fn test_coordinator_config_rejects_bad_bind() {
        let result = CoordinatorConfig::from_vars(|key| match key {
            "COORDINATOR_BIND" => Some("not-an-addr".to_string()),
            _ => None,
        });

        assert!(matches!(
            result,
            Err(ConfigError::InvalidVar {
                var: "COORDINATOR_BIND",
                ..
            })
        ));
    }
}
