//! Bounding box of the ring
//!
//! The box is the smallest one holding every point of the arc at the maximal
//! radius, plus padding. A side the arc sweeps through needs the full radius;
//! any other side only needs the projection of the arc ends.

use log::debug;
use responsive_gauge_core::{GAUGE_RADIUS, PADDING};
use responsive_gauge_types::{GaugeConfig, PointerType, SweptAxes};

use super::deg2rad;

/// Size of the drawing and position of the gauge center inside it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
    pub translate_x: f64,
    pub translate_y: f64,
    /// At least three sides are swept; extra padding has been added
    pub wide: bool,
    pub swept: SweptAxes,
}

/// Radius of the outermost element: ring, labels or filler pointer
pub fn max_radius(config: &GaugeConfig) -> f64 {
    let mut min_shift = config.ring.shift.min(config.labels.shift);
    if config.pointer.pointer_type == PointerType::Filler {
        if let Some(shift) = config.pointer.filler_shift {
            min_shift = min_shift.min(shift);
        }
    }
    GAUGE_RADIUS - min_shift
}

/// Cardinal axes within `[min_angle, max_angle]`, boundaries included
fn swept_axes(min_angle: f64, max_angle: f64) -> SweptAxes {
    let mut swept = SweptAxes::default();
    let first = (min_angle / 90.0).ceil() as i64;
    let last = (max_angle / 90.0).floor() as i64;
    for k in first..=last {
        match k.rem_euclid(4) {
            0 => swept.top = true,
            1 => swept.right = true,
            2 => swept.bottom = true,
            _ => swept.left = true,
        }
        if swept.all() {
            break;
        }
    }
    swept
}

pub fn compute_bounds(min_angle: f64, max_angle: f64, radius: f64) -> Bounds {
    let swept = swept_axes(min_angle, max_angle);
    let full = |on: bool| if on { radius } else { 0.0 };

    let (mut top, mut right, mut bottom, mut left) = (
        full(swept.top),
        full(swept.right),
        full(swept.bottom),
        full(swept.left),
    );

    // horizontal and vertical projections of both arc ends (y grows downwards)
    let h = [
        radius * deg2rad(min_angle).sin(),
        radius * deg2rad(max_angle).sin(),
    ];
    let v = [
        radius * deg2rad(min_angle - 90.0).sin(),
        radius * deg2rad(max_angle - 90.0).sin(),
    ];

    left = (-left).min(h[0]).min(h[1]).abs();
    right = right.max(h[0]).max(h[1]);
    top = (-top).min(v[0]).min(v[1]).abs();
    bottom = bottom.max(v[0]).max(v[1]);

    let mut bounds = Bounds {
        width: left + right + 2.0 * PADDING,
        height: top + bottom + 2.0 * PADDING,
        translate_x: left + PADDING,
        translate_y: top + PADDING,
        wide: false,
        swept,
    };

    if 3.0 * radius + 4.0 * PADDING < bounds.width + bounds.height {
        bounds.wide = true;
        bounds.width += 2.0 * PADDING;
        bounds.height += 2.0 * PADDING;
        bounds.translate_x += PADDING;
        bounds.translate_y += PADDING;
    }

    debug!(
        "Bounds for {}..{} deg at radius {}: {:?}",
        min_angle, max_angle, radius, bounds
    );
    bounds
}
