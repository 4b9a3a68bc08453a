//! Pointer geometry and angle
//!
//! The pointer type is fixed by the configuration. Needles and filaments
//! rotate rigidly through an eased transition; the filler is an arc redrawn
//! at once on every update.

use log::trace;
use responsive_gauge_core::{GAUGE_RADIUS, NEEDLE_RADIUS};
use responsive_gauge_types::{
    Easing, GaugeConfig, PointerFrame, PointerGeometry, PointerMotion, PointerType,
};

use super::LinearScale;
use crate::config::ResolvedConfig;

pub fn pointer_geometry(config: &GaugeConfig) -> PointerGeometry {
    let ring = &config.ring;
    let pointer = &config.pointer;

    match pointer.pointer_type {
        PointerType::Needle => PointerGeometry::Needle {
            from: NEEDLE_RADIUS,
            to: pointer.needle_length / 2.0,
            hub_radius: NEEDLE_RADIUS,
        },
        PointerType::Filament => PointerGeometry::Filament {
            from: GAUGE_RADIUS - ring.shift - ring.width - pointer.filament_length,
            to: GAUGE_RADIUS - ring.shift + pointer.filament_length,
        },
        PointerType::Filler => {
            let width = pointer.filler_width.unwrap_or(ring.width);
            let shift = pointer.filler_shift.unwrap_or(ring.shift);
            PointerGeometry::Filler {
                inner_radius: GAUGE_RADIUS - shift - width,
                outer_radius: GAUGE_RADIUS - shift,
                start_angle: ring.min_angle,
            }
        }
    }
}

/// Angle of the pointer for `value`, clamped to the data domain
///
/// NaN when `data.min == data.max`.
pub fn pointer_rotation(config: &GaugeConfig, value: f64) -> f64 {
    let ratio = LinearScale::new((config.data.min, config.data.max), (0.0, 1.0))
        .clamped()
        .scale(value);
    config.ring.min_angle + ratio * config.ring.range()
}

/// Everything a renderer needs to move the pointer to `value`
pub fn pointer_frame(
    resolved: &ResolvedConfig,
    geometry: &PointerGeometry,
    value: f64,
) -> PointerFrame {
    let config = &resolved.config;
    let angle = pointer_rotation(config, value);
    trace!("Pointer to {} at {} deg", value, angle);

    let motion = match geometry.filler_arc(angle) {
        Some(arc) => PointerMotion::Immediate { arc },
        None => PointerMotion::Eased {
            duration_ms: config.pointer.slowness,
            easing: Easing::Elastic,
        },
    };

    PointerFrame {
        value,
        angle,
        motion,
        text: config.value.show.then(|| resolved.format_value(value)),
    }
}
