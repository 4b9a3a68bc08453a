//! Reference default configuration
//!
//! The documented defaults, serialized once. Every resolve starts from an
//! independent copy; the reference itself is never mutated.

use log::warn;
use once_cell::sync::Lazy;
use responsive_gauge_types::GaugeConfig;
use serde_json::{Map, Value};

/// Serialized defaults, also the reference for unknown-key detection
static DEFAULT_REFERENCE: Lazy<Value> = Lazy::new(|| {
    serde_json::to_value(GaugeConfig::default()).unwrap_or_else(|e| {
        warn!("Failed to serialize built-in defaults: {}", e);
        Value::Object(Map::new())
    })
});

/// Reference defaults as JSON
pub fn reference() -> &'static Value {
    &DEFAULT_REFERENCE
}

/// Fresh copy of the defaults, ready to be merged into
pub fn defaults() -> Value {
    DEFAULT_REFERENCE.clone()
}
