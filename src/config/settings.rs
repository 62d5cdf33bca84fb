//! Application settings loaded from environment variables.

use std::env;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// When false, every simulated delay collapses to zero.
    pub latency_enabled: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// `MOCK_LATENCY=off` (or `0` / `false`) disables the simulated network
    /// delays, which is useful when driving the services from a debugger.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let latency_enabled = env::var("MOCK_LATENCY")
            .map(|v| !matches!(v.trim().to_ascii_lowercase().as_str(), "0" | "off" | "false"))
            .unwrap_or(true);

        Self { latency_enabled }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            latency_enabled: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_keeps_latency_on() {
        assert!(Config::default().latency_enabled);
    }
}
