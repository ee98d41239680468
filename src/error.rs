use thiserror::Error;

/// Errors raised at the boundaries of the trust engine
///
/// Scoring, classification and filtering are total and never fail; only
/// configuration, logging setup, record validation and testimonial review
/// return this type.
#[derive(Debug, Error)]
pub enum HeartlinkError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Logging setup error: {0}")]
    Logging(String),

    #[error("Testimonial not found: {0}")]
    TestimonialNotFound(i64),
}
