pub mod backend;
pub mod domain;
pub mod report;
pub mod sim;
pub mod state;

pub mod config {
    use anyhow::Context;

    const DEFAULT_TIMEOUT_SECS: u64 = 30;

    #[derive(Debug, Clone)]
    pub struct Settings {
        pub backend_base_url: Option<String>,
        pub request_timeout_secs: u64,
        pub sentry_dsn: Option<String>,
    }

    impl Settings {
        pub fn from_env() -> anyhow::Result<Self> {
            let request_timeout_secs = std::env::var("FINPULSE_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse::<u64>().ok())
                .unwrap_or(DEFAULT_TIMEOUT_SECS);

            Ok(Self {
                backend_base_url: std::env::var("FINPULSE_API_URL").ok(),
                request_timeout_secs,
                sentry_dsn: std::env::var("SENTRY_DSN").ok(),
            })
        }

        pub fn require_backend_base_url(&self) -> anyhow::Result<&str> {
            self.backend_base_url
                .as_deref()
                .context("FINPULSE_API_URL is required")
        }
    }
}
