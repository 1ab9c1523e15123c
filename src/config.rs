//! Application configuration loaded from environment variables.

use std::net::{IpAddr, SocketAddr};

use serde::Deserialize;

use crate::error::AppError;

/// Application configuration loaded from `HANDSON_`-prefixed environment
/// variables. With nothing set, the defaults reproduce the service's fixed
/// contract: bind `0.0.0.0:8000`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Bind host (IP address).
    #[serde(default = "default_host")]
    pub host: String,

    /// Bind port.
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> crate::error::Result<Self> {
        dotenvy::dotenv().ok();
        Ok(envy::prefixed("HANDSON_").from_env()?)
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> Result<(), String> {
        if self.host.parse::<IpAddr>().is_err() {
            return Err(format!(
                "HANDSON_HOST is not a valid IP address: {}",
                self.host
            ));
        }

        if self.port == 0 {
            return Err("HANDSON_PORT must be non-zero".to_string());
        }

        Ok(())
    }

    /// The socket address the server binds to.
    pub fn socket_addr(&self) -> crate::error::Result<SocketAddr> {
        let ip: IpAddr = self.host.parse().map_err(|_| AppError::InvalidBindAddress {
            host: self.host.clone(),
        })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values_are_sensible() {
        assert_eq!(default_host(), "0.0.0.0");
        assert_eq!(default_port(), 8000);
    }

    #[test]
    fn default_config_binds_all_interfaces_on_8000() {
        let config = Config::default();

        assert!(config.validate().is_ok());
        assert_eq!(
            config.socket_addr().unwrap(),
            "0.0.0.0:8000".parse::<SocketAddr>().unwrap()
        );
    }

    #[test]
    fn validate_rejects_non_ip_host() {
        let config = Config {
            host: "not-an-ip".to_string(),
            port: 8000,
        };

        assert!(config.validate().is_err());
        assert!(matches!(
            config.socket_addr(),
            Err(AppError::InvalidBindAddress { .. })
        ));
    }

    #[test]
    fn validate_rejects_zero_port() {
        let config = Config {
            host: "0.0.0.0".to_string(),
            port: 0,
        };

        assert!(config.validate().is_err());
    }
}
