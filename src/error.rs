//! Configuration errors

use responsive_gauge_types::ColorParseError;
use thiserror::Error;

/// Errors raised while resolving or validating a gauge configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration override must be a JSON object, got {0}")]
    InvalidOverride(String),

    #[error("invalid configuration: {0}")]
    Deserialize(#[from] serde_json::Error),

    #[error("invalid color '{value}' for {field}: {source}")]
    InvalidColor {
        field: &'static str,
        value: String,
        source: ColorParseError,
    },

    #[error("ring range must be within (0, 360] degrees, got {min_angle}..{max_angle}")]
    InvalidAngleRange { min_angle: f64, max_angle: f64 },

    #[error("ring minAngle must be at least -90 degrees, got {0}")]
    MinAngleTooLow(f64),

    #[error("data.min must be lower than data.max, got {min}..{max}")]
    EmptyDataRange { min: f64, max: f64 },

    #[error("{field} must be at most {max}, got {count}")]
    TooManyElements {
        field: &'static str,
        count: u32,
        max: u32,
    },
}
