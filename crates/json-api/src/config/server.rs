//! Server Config

use clap::Args;

/// Server runtime network settings.
#[derive(Debug, Args)]
pub struct ServerRuntimeConfig {
    /// Server host address
    #[arg(short = 'H', long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Server port
    #[arg(short, long, env = "PORT", default_value = "8080")]
    pub port: u16,

    /// Development mode; raises the default log level to debug
    #[arg(long, env = "DEBUG", default_value_t = false)]
    pub debug: bool,
}

impl ServerRuntimeConfig {
    /// Get the socket address for binding.
    #[must_use]
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Public Swagger UI address advertised by the root banner.
    #[must_use]
    pub fn docs_url(&self) -> String {
        format!("http://{}/docs", self.socket_addr())
    }
}
