//! Layout result types handed to renderers
//!
//! Coordinates are in the gauge's reference space (100-unit diameter), with
//! the origin at the gauge center once `translate_x`/`translate_y` have been
//! applied. Angles are degrees, clockwise from the top.

use serde::{Deserialize, Serialize};

use crate::config::PointerType;

/// Annular sector between two angles
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ArcGeometry {
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
}

impl ArcGeometry {
    pub fn start_radians(&self) -> f64 {
        self.start_angle.to_radians()
    }

    pub fn end_radians(&self) -> f64 {
        self.end_angle.to_radians()
    }

    /// Angular extent in degrees
    pub fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }
}

/// One colored slice of the ring
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SectorArc {
    pub arc: ArcGeometry,
    /// `None` leaves the fill to external styling
    pub fill: Option<String>,
}

/// Cardinal axes the arc sweeps through entirely
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct SweptAxes {
    pub top: bool,
    pub right: bool,
    pub bottom: bool,
    pub left: bool,
}

impl SweptAxes {
    pub fn count(&self) -> usize {
        [self.top, self.right, self.bottom, self.left]
            .iter()
            .filter(|swept| **swept)
            .count()
    }

    pub fn all(&self) -> bool {
        self.count() == 4
    }
}

/// Pointer shape, in the pointer's own frame (pointing up, before rotation)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PointerGeometry {
    /// Line from `from` to `to` (distances from the center) plus a hub circle
    Needle { from: f64, to: f64, hub_radius: f64 },
    /// Line from `from` to `to` straddling the ring
    Filament { from: f64, to: f64 },
    /// Arc starting at `start_angle`; its end follows the value
    Filler {
        inner_radius: f64,
        outer_radius: f64,
        start_angle: f64,
    },
}

impl PointerGeometry {
    pub fn pointer_type(&self) -> PointerType {
        match self {
            PointerGeometry::Needle { .. } => PointerType::Needle,
            PointerGeometry::Filament { .. } => PointerType::Filament,
            PointerGeometry::Filler { .. } => PointerType::Filler,
        }
    }

    /// Arc drawn for a filler pointer at `angle`; `None` for rigid pointers
    pub fn filler_arc(&self, angle: f64) -> Option<ArcGeometry> {
        match *self {
            PointerGeometry::Filler {
                inner_radius,
                outer_radius,
                start_angle,
            } => Some(ArcGeometry {
                inner_radius,
                outer_radius,
                start_angle,
                end_angle: angle,
            }),
            _ => None,
        }
    }
}

/// Label tick: `rotate(angle) translate(0, radial_offset) [scale(2)]`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TickMark {
    pub value: f64,
    pub angle: f64,
    pub radial_offset: f64,
    pub text: String,
    /// Wide gauges are zoomed out, so labels are drawn twice as large
    pub scaled: bool,
}

/// Value text placement: `rotate(angle) translate(0, -offset) scale(font_scale) rotate(-angle)`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ValueLabelLayout {
    pub angle: f64,
    pub offset: f64,
    pub font_scale: f64,
    pub unit: String,
}

/// Everything that only changes when the configuration changes
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GaugeLayout {
    pub width: f64,
    pub height: f64,
    pub translate_x: f64,
    pub translate_y: f64,
    pub wide: bool,
    pub full_circle: bool,
    pub swept_axes: SweptAxes,
    pub sectors: Vec<SectorArc>,
    pub border: Option<ArcGeometry>,
    pub pointer: PointerGeometry,
    pub ticks: Vec<TickMark>,
    pub value_label: Option<ValueLabelLayout>,
}

/// Easing applied by the renderer's transition primitive
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Easing {
    Elastic,
}

/// How the renderer moves the pointer to its new angle
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PointerMotion {
    /// Rigid rotation through a timed transition; a newer target replaces it
    Eased { duration_ms: u64, easing: Easing },
    /// Redraw this arc right away
    Immediate { arc: ArcGeometry },
}

/// Per-update output: the only part of the gauge that changes with the value
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PointerFrame {
    /// Value as requested (before clamping)
    pub value: f64,
    pub angle: f64,
    pub motion: PointerMotion,
    /// Formatted value text, when the value is shown
    pub text: Option<String>,
}
