//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::time::Duration;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// MongoDB connection string
    pub mongodb_uri: String,
    /// Database holding the `courses` collection
    pub mongodb_db_name: String,
    /// Redis connection URL
    pub redis_uri: String,
    /// Lifetime of cached courses in seconds
    pub cache_ttl: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `PORT` - HTTP server port (default: 3000)
    /// - `MONGODB_URI` - MongoDB URI (default: mongodb://localhost:27017)
    /// - `MONGODB_DB_NAME` - Database name (default: courses_db)
    /// - `REDIS_URI` - Redis URL (default: redis://localhost:6379)
    /// - `CACHE_TTL_SECS` - Cache entry TTL in seconds (default: 3600)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server_port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.server_port),
            mongodb_uri: env::var("MONGODB_URI").unwrap_or(defaults.mongodb_uri),
            mongodb_db_name: env::var("MONGODB_DB_NAME").unwrap_or(defaults.mongodb_db_name),
            redis_uri: env::var("REDIS_URI").unwrap_or(defaults.redis_uri),
            cache_ttl: env::var("CACHE_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|ttl| *ttl > 0)
                .unwrap_or(defaults.cache_ttl),
        }
    }

    /// Cache entry TTL as a Duration.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            mongodb_uri: "mongodb://localhost:27017".to_string(),
            mongodb_db_name: "courses_db".to_string(),
            redis_uri: "redis://localhost:6379".to_string(),
            cache_ttl: 3600,
        }
    }
}
