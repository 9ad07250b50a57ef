//! Bind address and CORS settings for the GraphQL endpoint

use axum::http::{HeaderValue, Uri};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A configured CORS origin that is not `scheme://host[:port]`
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid CORS origin '{0}': expected scheme://host[:port]")]
pub struct InvalidOrigin(pub String);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HttpServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Browser origins allowed to call the endpoint. Empty allows any.
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    4000
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
        }
    }
}

impl HttpServerConfig {
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Parse every configured origin; the first malformed one is an error
    pub fn origins(&self) -> Result<Vec<HeaderValue>, InvalidOrigin> {
        self.cors_origins.iter().map(|o| parse_origin(o)).collect()
    }
}

fn parse_origin(origin: &str) -> Result<HeaderValue, InvalidOrigin> {
    let invalid = || InvalidOrigin(origin.to_string());
    let uri: Uri = origin.parse().map_err(|_| invalid())?;

    let bare = uri.path_and_query().map_or(true, |p| p.as_str() == "/" || p.as_str().is_empty());
    if uri.scheme().is_none() || uri.authority().is_none() || !bare || origin.ends_with('/') {
        return Err(invalid());
    }
    HeaderValue::from_str(origin).map_err(|_| invalid())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = HttpServerConfig::default();
        assert_eq!(config.socket_addr(), "0.0.0.0:4000");
        assert!(config.origins().unwrap().is_empty());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: HttpServerConfig = serde_json::from_str(r#"{"port": 9000}"#).unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.host, "0.0.0.0");
        assert!(config.cors_origins.is_empty());
    }

    #[test]
    fn test_origins_parse() {
        let config = HttpServerConfig {
            cors_origins: vec![
                "http://localhost:5173".to_string(),
                "https://theatre.example.com".to_string(),
            ],
            ..Default::default()
        };
        assert_eq!(config.origins().unwrap().len(), 2);
    }

    #[test]
    fn test_malformed_origins_rejected() {
        for origin in ["localhost:5173", "not an origin", "https://a.example.com/app", "http://a.example.com/", ""] {
            let config = HttpServerConfig {
                cors_origins: vec![origin.to_string()],
                ..Default::default()
            };
            assert_eq!(
                config.origins().unwrap_err(),
                InvalidOrigin(origin.to_string()),
                "origin {:?}",
                origin
            );
        }
    }
}
