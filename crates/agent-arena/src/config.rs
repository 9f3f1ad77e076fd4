//! Configuration for arena analytics operations

use crate::agent::AgentId;
use crate::error::{ArenaError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Public arena API root
pub const DEFAULT_API_BASE: &str = "https://okbet-web-api.onrender.com/api/public/arena";

/// Starting balance of every agent, in USD
pub const DEFAULT_INITIAL_BALANCE: f64 = 250.0;

/// Competition deadline, reported verbatim in summaries
pub const DEFAULT_COMPETITION_END: &str = "January 31, 2026 23:59:59 UTC";

const DEFAULT_USER_AGENT: &str = "OKBET-Predict-API/1.0";

/// Environment variable overriding the API base URL
pub const ENV_API_BASE: &str = "ARENA_API_BASE";
/// Environment variable overriding the request timeout, in seconds
pub const ENV_REQUEST_TIMEOUT: &str = "ARENA_REQUEST_TIMEOUT_SECS";
/// Environment variable overriding the initial balance
pub const ENV_INITIAL_BALANCE: &str = "ARENA_INITIAL_BALANCE";

/// Configuration for the arena aggregator
///
/// Immutable once built; shared behind an `Arc`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArenaConfig {
    /// Base URL every endpoint path is appended to
    pub base_url: String,

    /// Balance each agent started with
    pub initial_balance: f64,

    /// Competition end, as displayed to users
    pub competition_end_date: String,

    /// Per-request timeout
    pub request_timeout: Duration,

    /// User-Agent header sent with every request
    pub user_agent: String,

    /// Agents taking part, in reporting order
    pub agents: Vec<AgentId>,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE.to_string(),
            initial_balance: DEFAULT_INITIAL_BALANCE,
            competition_end_date: DEFAULT_COMPETITION_END.to_string(),
            request_timeout: Duration::from_secs(30),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            agents: AgentId::ALL.to_vec(),
        }
    }
}

impl ArenaConfig {
    /// Create a new configuration builder
    pub fn builder() -> ArenaConfigBuilder {
        ArenaConfigBuilder::default()
    }

    /// Apply overrides from `ARENA_*` environment variables
    pub fn with_env(mut self) -> Result<Self> {
        if let Ok(base) = std::env::var(ENV_API_BASE) {
            self.base_url = base;
        }

        if let Ok(secs) = std::env::var(ENV_REQUEST_TIMEOUT) {
            let secs: u64 = secs.trim().parse().map_err(|e| {
                ArenaError::ConfigError(format!("{ENV_REQUEST_TIMEOUT}={secs:?}: {e}"))
            })?;
            self.request_timeout = Duration::from_secs(secs);
        }

        if let Ok(balance) = std::env::var(ENV_INITIAL_BALANCE) {
            self.initial_balance = balance.trim().parse().map_err(|e| {
                ArenaError::ConfigError(format!("{ENV_INITIAL_BALANCE}={balance:?}: {e}"))
            })?;
        }

        Ok(self)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        let url = url::Url::parse(&self.base_url)
            .map_err(|e| ArenaError::ConfigError(format!("invalid base_url '{}': {e}", self.base_url)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ArenaError::ConfigError(format!(
                "base_url must be http(s), got '{}'",
                url.scheme()
            )));
        }

        if self.request_timeout.is_zero() {
            return Err(ArenaError::ConfigError(
                "request_timeout must be greater than 0".to_string(),
            ));
        }

        if self.agents.is_empty() {
            return Err(ArenaError::ConfigError(
                "at least one agent must be configured".to_string(),
            ));
        }

        if !self.initial_balance.is_finite() {
            return Err(ArenaError::ConfigError(
                "initial_balance must be a finite number".to_string(),
            ));
        }

        Ok(())
    }

    /// Full URL for a relative endpoint
    pub fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}{endpoint}", self.base_url.trim_end_matches('/'))
    }

    /// Parse a caller-supplied identifier into a configured agent
    pub fn parse_agent(&self, name: &str) -> Result<AgentId> {
        let invalid = || ArenaError::InvalidAgent {
            agent: name.to_string(),
            valid: AgentId::joined(&self.agents),
        };

        let agent: AgentId = name.parse().map_err(|_| invalid())?;
        if self.agents.contains(&agent) {
            Ok(agent)
        } else {
            Err(invalid())
        }
    }
}

/// Builder for ArenaConfig
#[derive(Debug, Default)]
pub struct ArenaConfigBuilder {
    base_url: Option<String>,
    initial_balance: Option<f64>,
    competition_end_date: Option<String>,
    request_timeout: Option<Duration>,
    user_agent: Option<String>,
    agents: Option<Vec<AgentId>>,
}

impl ArenaConfigBuilder {
    /// Set the API base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the initial balance
    pub fn initial_balance(mut self, balance: f64) -> Self {
        self.initial_balance = Some(balance);
        self
    }

    /// Set the displayed competition end date
    pub fn competition_end_date(mut self, date: impl Into<String>) -> Self {
        self.competition_end_date = Some(date.into());
        self
    }

    /// Set request timeout
    pub fn request_timeout(mut self, duration: Duration) -> Self {
        self.request_timeout = Some(duration);
        self
    }

    /// Set the User-Agent header
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Restrict or reorder the participating agents
    pub fn agents(mut self, agents: Vec<AgentId>) -> Self {
        self.agents = Some(agents);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<ArenaConfig> {
        let defaults = ArenaConfig::default();

        let config = ArenaConfig {
            base_url: self.base_url.unwrap_or(defaults.base_url),
            initial_balance: self.initial_balance.unwrap_or(defaults.initial_balance),
            competition_end_date: self
                .competition_end_date
                .unwrap_or(defaults.competition_end_date),
            request_timeout: self.request_timeout.unwrap_or(defaults.request_timeout),
            user_agent: self.user_agent.unwrap_or(defaults.user_agent),
            agents: self.agents.unwrap_or(defaults.agents),
        };

        config.validate()?;
        Ok(config)
    }
}
