//! Server configuration

/// Server-level configuration, read once at startup
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Bind address
    pub host: String,
    /// Bind port
    pub port: u16,
    /// Deployment environment; anything other than `production` exposes
    /// upstream error details in responses
    pub app_env: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            app_env: "development".to_string(),
        }
    }
}

impl AppConfig {
    /// Read the server configuration from the environment.
    ///
    /// Recognized variables: `HOST`, `PORT`, `APP_ENV`. Blank or unparsable
    /// values fall back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        Self {
            host: non_blank("HOST").unwrap_or(defaults.host),
            port: non_blank("PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.port),
            app_env: non_blank("APP_ENV").unwrap_or(defaults.app_env),
        }
    }

    /// Whether error responses may carry upstream detail
    pub fn expose_error_details(&self) -> bool {
        self.app_env != "production"
    }

    /// Socket address string for the listener
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
