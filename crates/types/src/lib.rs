//! responsive-gauge-types: Shared data types for ResponsiveGauge.
//!
//! This crate contains pure data types (configuration groups, colors and the
//! layout result handed to renderers). It has no rendering dependencies,
//! making it suitable as a foundation layer.

pub mod color;
pub mod config;
pub mod layout;

// Re-export commonly used types at the crate root for convenience
pub use color::{Color, ColorParseError, Hsl};
pub use config::{
    DataConfig, GaugeConfig, GradientKind, LabelsConfig, PointerConfig, PointerType, RingColors,
    RingConfig, ValueConfig,
};
pub use layout::{
    ArcGeometry, Easing, GaugeLayout, PointerFrame, PointerGeometry, PointerMotion, SectorArc,
    SweptAxes, TickMark, ValueLabelLayout,
};
