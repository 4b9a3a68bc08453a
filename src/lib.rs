//! ResponsiveGauge: geometry engine for responsive dial gauges
//!
//! This library provides:
//! - Configuration resolution over documented defaults
//! - Layout of the ring, pointer and labels in a size-independent space
//! - The pointer angle calculation applied on every value update
//! - A `Gauge` handle driving any `Renderer`

pub mod config;
pub mod error;
pub mod format;
pub mod gauge;
pub mod layout;

// Re-export commonly used types
pub use config::{resolve, GaugeOptions, ResolvedConfig};
pub use error::ConfigError;
pub use format::{FormatContext, FormatPattern, Formatter};
pub use gauge::Gauge;
pub use layout::{compute_layout, pointer_rotation};
pub use responsive_gauge_core::{BoxedRenderer, Renderer};
pub use responsive_gauge_types::{GaugeConfig, GaugeLayout, PointerFrame};
