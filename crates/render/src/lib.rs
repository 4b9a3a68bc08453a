//! responsive-gauge-render: Reference renderers for ResponsiveGauge layouts.

pub mod svg;

pub use svg::{arc_path, SvgRenderer};
