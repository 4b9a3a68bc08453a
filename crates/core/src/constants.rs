//! Shared constants for gauge geometry

/// Diameter of the gauge (including ticks and labels), used only as the
/// reference for drawing; the size on screen depends on the container
pub const GAUGE_DIAMETER: f64 = 100.0;

/// Radius of the reference gauge
pub const GAUGE_RADIUS: f64 = GAUGE_DIAMETER / 2.0;

/// Padding around the gauge
pub const PADDING: f64 = 6.0;

/// Radius of the needle hub, also the needle's start offset from the center
pub const NEEDLE_RADIUS: f64 = 2.0;

/// Number of ring slices used to simulate a smooth color gradient
pub const GRADIENT_ELT_NUMBER: usize = 40;

/// Degrees by which every sector but the first starts early, so adjacent
/// sectors overlap instead of leaving an anti-aliasing hairline
pub const SEAM_EPSILON_DEG: f64 = 0.5;

/// Tick label scale on wide gauges (more space = zoom out = bigger font)
pub const WIDE_LABEL_SCALE: f64 = 2.0;

/// Font scale of the value text
pub const VALUE_FONT_SCALE: f64 = 3.0;

/// Font scale of the value text on wide gauges
pub const WIDE_VALUE_FONT_SCALE: f64 = VALUE_FONT_SCALE * 2.0;

/// Upper bound on `labels.number` and `ring.sectorsNumber`
pub const MAX_ELEMENT_COUNT: u32 = 1000;

/// Upper bound on `mantissaMax` and `decimalsMax`; an f64 carries no more
/// significant decimal digits
pub const MAX_FORMAT_DIGITS: u32 = 15;
