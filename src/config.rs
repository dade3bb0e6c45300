//! Application configuration loaded from environment variables.

use std::env;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,
    /// Directory holding the collection documents
    pub data_dir: String,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            port: 3000,
            data_dir: "data".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// A `.env` file is honored if present. Every setting has a default,
    /// so loading never fails.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok(); // Load .env file if present

        Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .unwrap_or(3000),
            data_dir: env::var("DATA_DIR").unwrap_or_else(|_| "data".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // One test: PORT is process-global, parallel tests would race on it.
    #[test]
    fn test_config_from_env() {
        env::set_var("PORT", "4100");
        env::set_var("DATA_DIR", "/tmp/tracker-data");

        let config = Config::from_env();

        assert_eq!(config.port, 4100);
        assert_eq!(config.data_dir, "/tmp/tracker-data");

        env::set_var("PORT", "not-a-port");
        assert_eq!(Config::from_env().port, 3000);

        env::remove_var("PORT");
        env::remove_var("DATA_DIR");
    }
}
