//! Gauge configuration types
//!
//! All sizes are percentages of the 100-unit reference diameter, all angles
//! are degrees measured clockwise from the top of the vertical axis.

use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// Complete gauge configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct GaugeConfig {
    pub ring: RingConfig,
    pub pointer: PointerConfig,
    pub data: DataConfig,
    pub labels: LabelsConfig,
    pub value: ValueConfig,
}

/// Ring (track) configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RingConfig {
    /// Shift of the ring from the container side (%)
    #[serde(default = "default_ring_shift")]
    pub shift: f64,
    /// Width of the ring (%)
    #[serde(default = "default_ring_width")]
    pub width: f64,
    /// Start of the ring; -90 is the minimum supported value
    #[serde(default = "default_min_angle")]
    pub min_angle: f64,
    /// End of the ring, at most one full turn after `min_angle`
    #[serde(default = "default_max_angle")]
    pub max_angle: f64,
    #[serde(default = "default_sectors_number")]
    pub sectors_number: u32,
    /// Draw an outline around the whole ring
    #[serde(default)]
    pub border: bool,
    #[serde(default)]
    pub colors: RingColors,
    /// First gradient color (hex)
    #[serde(default = "default_start_color")]
    pub start_color: String,
    /// Last gradient color (hex)
    #[serde(default = "default_end_color")]
    pub end_color: String,
    /// Overlap adjacent sectors slightly so no hairline shows between them
    #[serde(default = "default_true")]
    pub collapse_seams: bool,
}

fn default_ring_shift() -> f64 {
    3.0
}

fn default_ring_width() -> f64 {
    7.0
}

fn default_min_angle() -> f64 {
    -90.0
}

fn default_max_angle() -> f64 {
    90.0
}

fn default_sectors_number() -> u32 {
    5
}

fn default_start_color() -> String {
    "#ffebee".to_string()
}

fn default_end_color() -> String {
    "#810301".to_string()
}

fn default_true() -> bool {
    true
}

impl RingConfig {
    /// Angular span of the ring in degrees
    pub fn range(&self) -> f64 {
        self.max_angle - self.min_angle
    }
}

impl Default for RingConfig {
    fn default() -> Self {
        Self {
            shift: default_ring_shift(),
            width: default_ring_width(),
            min_angle: default_min_angle(),
            max_angle: default_max_angle(),
            sectors_number: default_sectors_number(),
            border: false,
            colors: RingColors::default(),
            start_color: default_start_color(),
            end_color: default_end_color(),
            collapse_seams: default_true(),
        }
    }
}

/// How a gradient between `start_color` and `end_color` is sliced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradientKind {
    /// Many thin slices approximating a continuous gradient
    Smooth,
    /// One slice per ring sector
    Sectors,
}

/// Ring coloring policy
///
/// In JSON: `false`, `"gradient"` (or `"smooth"`), `"sectors"`, or a list of
/// CSS colors.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RingColors {
    /// No fill; left to external styling
    #[default]
    None,
    Gradient(GradientKind),
    /// One sector per color, in order
    Palette(Vec<String>),
}

impl Serialize for RingColors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            RingColors::None => serializer.serialize_bool(false),
            RingColors::Gradient(GradientKind::Smooth) => serializer.serialize_str("gradient"),
            RingColors::Gradient(GradientKind::Sectors) => serializer.serialize_str("sectors"),
            RingColors::Palette(colors) => colors.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for RingColors {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Flag(bool),
            Mode(String),
            Palette(Vec<String>),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Flag(false) => Ok(RingColors::None),
            Repr::Flag(true) => Ok(RingColors::Gradient(GradientKind::Sectors)),
            Repr::Mode(mode) => match mode.as_str() {
                "gradient" | "smooth" => Ok(RingColors::Gradient(GradientKind::Smooth)),
                "sectors" => Ok(RingColors::Gradient(GradientKind::Sectors)),
                other => Err(de::Error::custom(format!(
                    "unknown ring color mode '{}' (expected 'gradient', 'sectors', false or a list)",
                    other
                ))),
            },
            Repr::Palette(colors) => Ok(RingColors::Palette(colors)),
        }
    }
}

/// Pointer type, fixed for the lifetime of a configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum PointerType {
    #[serde(rename = "needle")]
    #[default]
    Needle, // Line from the hub towards the ring
    #[serde(rename = "filament")]
    Filament, // Short segment straddling the ring
    #[serde(rename = "filler")]
    Filler, // Second arc growing over the ring
}

impl PointerType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PointerType::Needle => "needle",
            PointerType::Filament => "filament",
            PointerType::Filler => "filler",
        }
    }
}

/// Pointer configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PointerConfig {
    #[serde(rename = "type", default)]
    pub pointer_type: PointerType,
    /// Time (ms) for the pointer to settle at a new position
    #[serde(default = "default_slowness")]
    pub slowness: u64,
    /// Length of 'needle' pointers (%)
    #[serde(default = "default_needle_length")]
    pub needle_length: f64,
    /// Overflow of 'filament' pointers over the ring (%)
    #[serde(default = "default_filament_length")]
    pub filament_length: f64,
    /// Width of 'filler' pointers (%); `None` means as wide as the ring
    #[serde(default)]
    pub filler_width: Option<f64>,
    /// Shift of 'filler' pointers (%); `None` means same as the ring
    #[serde(default)]
    pub filler_shift: Option<f64>,
}

fn default_slowness() -> u64 {
    200
}

fn default_needle_length() -> f64 {
    90.0
}

fn default_filament_length() -> f64 {
    2.0
}

impl Default for PointerConfig {
    fn default() -> Self {
        Self {
            pointer_type: PointerType::default(),
            slowness: default_slowness(),
            needle_length: default_needle_length(),
            filament_length: default_filament_length(),
            filler_width: None,
            filler_shift: None,
        }
    }
}

/// Value domain of the gauge
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DataConfig {
    #[serde(default)]
    pub min: f64,
    #[serde(default = "default_data_max")]
    pub max: f64,
    /// Initial value; clamped to [min, max] when drawn
    #[serde(default)]
    pub value: f64,
}

fn default_data_max() -> f64 {
    100.0
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: default_data_max(),
            value: 0.0,
        }
    }
}

/// Tick labels around the ring
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LabelsConfig {
    /// Number of labels; `None` means one per sector
    #[serde(default)]
    pub number: Option<u32>,
    /// Integer digits shown before abbreviating (k, m, b, t)
    #[serde(default = "default_mantissa_max")]
    pub mantissa_max: u32,
    /// Maximum decimal digits
    #[serde(default)]
    pub decimals_max: u32,
    /// Shift of the labels from the container side (%)
    #[serde(default)]
    pub shift: f64,
}

fn default_mantissa_max() -> u32 {
    4
}

impl Default for LabelsConfig {
    fn default() -> Self {
        Self {
            number: None,
            mantissa_max: default_mantissa_max(),
            decimals_max: 0,
            shift: 0.0,
        }
    }
}

/// Value display
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ValueConfig {
    #[serde(default = "default_true")]
    pub show: bool,
    /// Shift of the value from the center of the gauge (%)
    #[serde(default = "default_value_shift")]
    pub shift: f64,
    #[serde(default = "default_mantissa_max")]
    pub mantissa_max: u32,
    #[serde(default)]
    pub decimals_max: u32,
    /// Unit displayed under the value
    #[serde(default)]
    pub unit: String,
}

fn default_value_shift() -> f64 {
    22.0
}

impl Default for ValueConfig {
    fn default() -> Self {
        Self {
            show: default_true(),
            shift: default_value_shift(),
            mantissa_max: default_mantissa_max(),
            decimals_max: 0,
            unit: String::new(),
        }
    }
}
