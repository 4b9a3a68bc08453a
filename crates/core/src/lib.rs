//! responsive-gauge-core: Renderer contract and shared constants.
//!
//! This crate contains the `Renderer` trait implemented by drawing backends
//! and the geometric constants every part of the gauge agrees on.

pub mod constants;
mod renderer;

pub use constants::{
    GAUGE_DIAMETER, GAUGE_RADIUS, GRADIENT_ELT_NUMBER, MAX_ELEMENT_COUNT, MAX_FORMAT_DIGITS,
    NEEDLE_RADIUS, PADDING, SEAM_EPSILON_DEG, VALUE_FONT_SCALE, WIDE_LABEL_SCALE,
    WIDE_VALUE_FONT_SCALE,
};
pub use renderer::{BoxedRenderer, Renderer};

// Re-export types used in trait signatures for convenience
pub use responsive_gauge_types::{GaugeLayout, PointerFrame};
