//! Solar Landing Core
//!
//! Business logic behind the landing page: the savings estimator, spend
//! input coercion, the lead message formatter and the WhatsApp/email
//! hand-off links. Nothing here touches the DOM, so the same code runs in
//! the SSR server, in the hydrated client and in tests.

pub mod config;
pub mod estimator;
pub mod form;
pub mod handoff;
pub mod input;
pub mod lead;

use thiserror::Error;

pub use config::BusinessConfig;
pub use estimator::{estimate, EstimatorConstants, EstimatorOutput};
pub use form::{FormPhase, LeadSubmission, ACKNOWLEDGMENT};
pub use handoff::HandOff;
pub use input::{parse_spend, SpendRange, DEFAULT_MONTHLY_SPEND, FIELD_MIN_SPEND, SLIDER_RANGE};
pub use lead::{format_lead_message, quick_quote_message, CannedMessage, LeadContact, PropertyType};

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),
}

pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_builds_handoff() {
        let config = BusinessConfig::default();
        assert!(config.validate().is_ok());
        assert!(HandOff::new(&config).is_ok());
    }

    #[test]
    fn test_error_display() {
        let err = CoreError::Config("phone has no digits".to_string());
        assert_eq!(err.to_string(), "Configuration error: phone has no digits");
    }
}
