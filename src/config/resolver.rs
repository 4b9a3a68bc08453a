//! Configuration resolution
//!
//! Merges a partial override over the defaults, then fills in the derived
//! fields so the layout engine only ever sees a complete configuration.

use log::debug;
use responsive_gauge_core::MAX_ELEMENT_COUNT;
use responsive_gauge_types::{Color, GaugeConfig, PointerType, RingColors};
use serde_json::{Map, Value};

use super::defaults;
use super::merge::{merge, UnknownProperty};
use crate::error::ConfigError;
use crate::format::{FormatContext, FormatPattern, Formatter};

/// Partial configuration supplied by the caller
#[derive(Debug, Clone, Default)]
pub struct GaugeOptions {
    /// Any subset of the configuration, same shape as the defaults
    pub overrides: Value,
    pub label_formatter: Option<Formatter>,
    pub value_formatter: Option<Formatter>,
}

impl GaugeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(overrides: Value) -> Self {
        Self {
            overrides,
            ..Self::default()
        }
    }

    pub fn with_label_formatter(mut self, formatter: Formatter) -> Self {
        self.label_formatter = Some(formatter);
        self
    }

    pub fn with_value_formatter(mut self, formatter: Formatter) -> Self {
        self.value_formatter = Some(formatter);
        self
    }
}

impl From<Value> for GaugeOptions {
    fn from(overrides: Value) -> Self {
        Self::from_json(overrides)
    }
}

/// Start and end of the ring gradient
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientColors {
    pub start: Color,
    pub end: Color,
}

/// Fully resolved, internally consistent configuration
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub config: GaugeConfig,
    /// `max_angle - min_angle`
    pub range: f64,
    /// Parsed only when the ring is colored with a gradient
    pub gradient: Option<GradientColors>,
    pub label_format: FormatPattern,
    pub value_format: FormatPattern,
    label_formatter: Formatter,
    value_formatter: Formatter,
    /// Properties applied without a counterpart in the defaults
    pub unknown_properties: Vec<UnknownProperty>,
}

impl ResolvedConfig {
    pub fn format_label(&self, value: f64) -> String {
        let ctx = FormatContext {
            config: &self.config,
            pattern: &self.label_format,
        };
        self.label_formatter.format(value, &ctx)
    }

    pub fn format_value(&self, value: f64) -> String {
        let ctx = FormatContext {
            config: &self.config,
            pattern: &self.value_format,
        };
        self.value_formatter.format(value, &ctx)
    }

    pub fn label_formatter(&self) -> &Formatter {
        &self.label_formatter
    }

    pub fn value_formatter(&self) -> &Formatter {
        &self.value_formatter
    }

    /// Applied extension properties, keyed by dotted path
    pub fn extensions(&self) -> Map<String, Value> {
        self.unknown_properties
            .iter()
            .map(|p| (p.path.clone(), p.value.clone()))
            .collect()
    }

    /// Value of an applied extension property, by dotted path
    pub fn extension(&self, path: &str) -> Option<&Value> {
        self.unknown_properties
            .iter()
            .rev()
            .find(|p| p.path == path)
            .map(|p| &p.value)
    }

    /// Reject configurations outside the supported geometry
    ///
    /// Resolution itself does not call this: out-of-contract ranges resolve
    /// fine and produce NaN or clipped geometry downstream.
    pub fn check_preconditions(&self) -> Result<(), ConfigError> {
        let ring = &self.config.ring;
        if self.range.is_nan() || self.range <= 0.0 || self.range > 360.0 {
            return Err(ConfigError::InvalidAngleRange {
                min_angle: ring.min_angle,
                max_angle: ring.max_angle,
            });
        }
        if ring.min_angle < -90.0 {
            return Err(ConfigError::MinAngleTooLow(ring.min_angle));
        }
        let data = &self.config.data;
        if data.min.is_nan() || data.max.is_nan() || data.min >= data.max {
            return Err(ConfigError::EmptyDataRange {
                min: data.min,
                max: data.max,
            });
        }
        let counts = [
            ("labels.number", self.config.labels.number.unwrap_or(ring.sectors_number)),
            ("ring.sectorsNumber", ring.sectors_number),
        ];
        for (field, count) in counts {
            if count > MAX_ELEMENT_COUNT {
                return Err(ConfigError::TooManyElements {
                    field,
                    count,
                    max: MAX_ELEMENT_COUNT,
                });
            }
        }
        Ok(())
    }
}

/// Resolve `options` over the defaults
///
/// Unknown properties are reported, never fatal. Fails only when the override
/// is not an object, a value has the wrong type, or a gradient color is not
/// a CSS color.
pub fn resolve(options: &GaugeOptions) -> Result<ResolvedConfig, ConfigError> {
    let mut merged = defaults::defaults();
    let unknown_properties = match &options.overrides {
        Value::Null => Vec::new(),
        Value::Object(_) => merge(&mut merged, &options.overrides, defaults::reference()),
        other => return Err(ConfigError::InvalidOverride(json_kind(other).to_string())),
    };

    let mut config: GaugeConfig = serde_json::from_value(merged)?;

    if config.labels.number.is_none() {
        config.labels.number = Some(config.ring.sectors_number);
    }
    if config.pointer.pointer_type == PointerType::Filler {
        // the filler overlays the ring unless told otherwise
        config.pointer.filler_width.get_or_insert(config.ring.width);
        config.pointer.filler_shift.get_or_insert(config.ring.shift);
    }

    let gradient = match config.ring.colors {
        RingColors::Gradient(_) => Some(GradientColors {
            start: parse_color("ring.startColor", &config.ring.start_color)?,
            end: parse_color("ring.endColor", &config.ring.end_color)?,
        }),
        _ => None,
    };

    let label_format = FormatPattern::new(config.labels.mantissa_max, config.labels.decimals_max);
    let value_format = FormatPattern::new(config.value.mantissa_max, config.value.decimals_max);
    let range = config.ring.range();

    debug!(
        "Resolved gauge config: {}..{} deg, {} pointer, {} unknown properties",
        config.ring.min_angle,
        config.ring.max_angle,
        config.pointer.pointer_type.as_str(),
        unknown_properties.len()
    );

    Ok(ResolvedConfig {
        config,
        range,
        gradient,
        label_format,
        value_format,
        label_formatter: options.label_formatter.clone().unwrap_or_default(),
        value_formatter: options.value_formatter.clone().unwrap_or_default(),
        unknown_properties,
    })
}

fn parse_color(field: &'static str, value: &str) -> Result<Color, ConfigError> {
    Color::from_css(value).map_err(|source| ConfigError::InvalidColor {
        field,
        value: value.to_string(),
        source,
    })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
