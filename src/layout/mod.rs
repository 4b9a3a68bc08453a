//! Layout engine
//!
//! Pure geometry: from a resolved configuration to the `GaugeLayout` handed
//! to renderers, and from a value to the pointer angle.

mod bounds;
mod labels;
mod pointer;
mod sectors;

pub use bounds::{compute_bounds, max_radius, Bounds};
pub use labels::{compute_ticks, tick_marks, value_label_layout};
pub use pointer::{pointer_frame, pointer_geometry, pointer_rotation};
pub use sectors::{border_arc, sector_arcs, sector_count};

use log::debug;
use responsive_gauge_core::GAUGE_RADIUS;
use responsive_gauge_types::{ArcGeometry, GaugeLayout, RingConfig};

use crate::config::ResolvedConfig;

pub fn deg2rad(deg: f64) -> f64 {
    deg * std::f64::consts::PI / 180.0
}

/// Linear mapping from a value domain onto an output range
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
    clamp: bool,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self {
            domain,
            range,
            clamp: false,
        }
    }

    /// Keep outputs within the range for inputs outside the domain
    pub fn clamped(mut self) -> Self {
        self.clamp = true;
        self
    }

    /// Map `value`; NaN for any input when the domain is empty
    pub fn scale(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if d1 == d0 {
            return f64::NAN;
        }
        let mut t = (value - d0) / (d1 - d0);
        if self.clamp {
            // clamp keeps NaN, max/min would swallow it
            t = t.clamp(0.0, 1.0);
        }
        r0 + t * (r1 - r0)
    }
}

/// Ring-shaped arc between two angles
pub fn ring_arc(ring: &RingConfig, start_angle: f64, end_angle: f64) -> ArcGeometry {
    ArcGeometry {
        inner_radius: GAUGE_RADIUS - ring.width - ring.shift,
        outer_radius: GAUGE_RADIUS - ring.shift,
        start_angle,
        end_angle,
    }
}

/// Compute everything that only changes with the configuration
pub fn compute_layout(resolved: &ResolvedConfig) -> GaugeLayout {
    let config = &resolved.config;
    let ring = &config.ring;

    let bounds = compute_bounds(ring.min_angle, ring.max_angle, max_radius(config));
    let sectors = sector_arcs(resolved);
    let ticks = tick_marks(resolved, bounds.wide);

    debug!(
        "Gauge layout: {:.2}x{:.2}, origin ({:.2}, {:.2}), wide={}, {} sectors, {} ticks",
        bounds.width,
        bounds.height,
        bounds.translate_x,
        bounds.translate_y,
        bounds.wide,
        sectors.len(),
        ticks.len()
    );

    GaugeLayout {
        width: bounds.width,
        height: bounds.height,
        translate_x: bounds.translate_x,
        translate_y: bounds.translate_y,
        wide: bounds.wide,
        full_circle: resolved.range >= 360.0,
        swept_axes: bounds.swept,
        sectors,
        border: border_arc(resolved),
        pointer: pointer_geometry(config),
        ticks,
        value_label: value_label_layout(config, bounds.wide),
    }
}
