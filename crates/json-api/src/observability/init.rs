//! Logging and request-metrics lifecycle.

use crate::config::ServerConfig;

use super::{ObservabilityError, logging, settings};

/// Marker that observability has been installed for this process.
#[derive(Debug)]
pub(crate) struct Observability;

impl Observability {
    /// Apply request thresholds and install the tracing subscriber.
    pub(crate) fn init(config: &ServerConfig) -> Result<Self, ObservabilityError> {
        settings::apply_runtime_config(config);

        logging::init_subscriber(config)?;

        Ok(Self)
    }
}
