//! Server configuration

/// Configuration for the HTTP server
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// Address to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Worker threads, actix default (one per core) when unset
    pub workers: Option<usize>,
    /// Maximum accepted request body in bytes
    pub payload_limit: usize,
    /// Absolute tolerance when comparing a submitted answer
    pub answer_tolerance: f64,
}

impl ServerConfig {
    /// Default port, matching what the practice UI falls back to
    pub const DEFAULT_PORT: u16 = 5000;

    /// Default body limit; a 5x5 matrix is well under 1 KiB
    pub const DEFAULT_PAYLOAD_LIMIT: usize = 64 * 1024;

    /// Default answer comparison tolerance
    pub const DEFAULT_ANSWER_TOLERANCE: f64 = 1e-9;

    /// Create config listening on the given host and port
    pub fn with_address(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Self::default()
        }
    }

    /// Set worker thread count
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = Some(workers);
        self
    }

    /// Set maximum request body size in bytes
    pub fn with_payload_limit(mut self, payload_limit: usize) -> Self {
        self.payload_limit = payload_limit;
        self
    }

    /// Set answer comparison tolerance; non-finite values are ignored
    pub fn with_answer_tolerance(mut self, tolerance: f64) -> Self {
        if tolerance.is_finite() {
            self.answer_tolerance = tolerance.abs();
        }
        self
    }

    /// `host:port` as a display string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: Self::DEFAULT_PORT,
            workers: None,
            payload_limit: Self::DEFAULT_PAYLOAD_LIMIT,
            answer_tolerance: Self::DEFAULT_ANSWER_TOLERANCE,
        }
    }
}
