use std::env;

/// AppConfig
///
/// Holds the portal's entire configuration state. The struct is immutable once
/// loaded and is shared with every request through the application state, so a
/// single `load()` at startup decides the behavior of the whole process.
#[derive(Clone)]
pub struct AppConfig {
    // Base URL of the upstream BSSAJ REST API that verifies credentials at login.
    pub upstream_api_url: String,
    // Secret used to sign and validate session credentials (HS256).
    pub session_secret: String,
    // Directory holding the compiled dashboard bundle (index.html + assets).
    pub static_dir: String,
    // Listen address for the HTTP server.
    pub bind_addr: String,
    // Runtime environment marker. Controls log formatting and fail-fast rules.
    pub env: Env,
}

/// Env
///
/// Runtime context marker, used to switch between development conveniences
/// (fallback secret, localhost upstream) and strict production configuration.
#[derive(Clone, PartialEq, Debug)]
pub enum Env {
    Local,
    Production,
}

impl Default for AppConfig {
    /// default
    ///
    /// Provides a safe, non-panicking AppConfig primarily used for test setup,
    /// so tests can build application state without touching the process
    /// environment.
    fn default() -> Self {
        Self {
            upstream_api_url: "http://localhost:8000".to_string(),
            session_secret: "portal-test-session-secret-value".to_string(),
            static_dir: "./dist".to_string(),
            bind_addr: "0.0.0.0:3000".to_string(),
            env: Env::Local,
        }
    }
}

impl AppConfig {
    /// load
    ///
    /// The canonical function for initializing the configuration at startup.
    /// Reads all parameters from environment variables.
    ///
    /// # Panics
    /// Panics when a variable that is mandatory for the current runtime
    /// environment (Production) is missing, so the process never starts with
    /// an incomplete or insecure configuration.
    pub fn load() -> Self {
        let env_str = env::var("APP_ENV").unwrap_or_else(|_| "local".to_string());
        let env = match env_str.as_str() {
            "production" => Env::Production,
            _ => Env::Local,
        };

        // The production signing secret must be explicitly set; a guessable
        // default would let anyone mint a valid session.
        let session_secret = match env {
            Env::Production => env::var("SESSION_JWT_SECRET")
                .expect("FATAL: SESSION_JWT_SECRET must be set in production."),
            _ => env::var("SESSION_JWT_SECRET")
                .unwrap_or_else(|_| "portal-local-session-secret-value".to_string()),
        };

        let upstream_api_url = match env {
            Env::Production => env::var("UPSTREAM_API_URL")
                .expect("FATAL: UPSTREAM_API_URL required in production"),
            _ => env::var("UPSTREAM_API_URL")
                .unwrap_or_else(|_| "http://localhost:8000".to_string()),
        };

        Self {
            env,
            upstream_api_url,
            session_secret,
            static_dir: env::var("STATIC_DIR").unwrap_or_else(|_| "./dist".to_string()),
            bind_addr: env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string()),
        }
    }
}
