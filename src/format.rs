//! Number formatting for tick labels and the value display
//!
//! The default formatter keeps at most `mantissa_max` integer digits and
//! abbreviates beyond that (k, m, b, t for thousands, millions, billions and
//! trillions, as numbro's `a` token does), with up to `decimals_max` optional
//! decimals. Both digit counts are capped at `MAX_FORMAT_DIGITS`.

use std::fmt;
use std::sync::Arc;

use responsive_gauge_core::MAX_FORMAT_DIGITS;
use responsive_gauge_types::GaugeConfig;

const ABBREVIATIONS: [&str; 5] = ["", "k", "m", "b", "t"];

/// Format pattern built once per resolved configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatPattern {
    mantissa_max: u32,
    decimals_max: u32,
    pattern: String,
}

impl FormatPattern {
    pub fn new(mantissa_max: u32, decimals_max: u32) -> Self {
        let mantissa_max = mantissa_max.min(MAX_FORMAT_DIGITS);
        let decimals_max = decimals_max.min(MAX_FORMAT_DIGITS);
        let pattern = if decimals_max == 0 {
            format!("{}.a", mantissa_max)
        } else {
            format!("{}.[{}]a", mantissa_max, "0".repeat(decimals_max as usize))
        };

        Self {
            mantissa_max,
            decimals_max,
            pattern,
        }
    }

    /// Textual form, e.g. `4.a` or `4.[00]a`
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn format(&self, value: f64) -> String {
        if !value.is_finite() {
            return value.to_string();
        }

        let limit = 10f64.powi(self.mantissa_max as i32);
        let mut scaled = value;
        let mut suffix = 0;
        let mut rounded = round_to(scaled, self.decimals_max);
        while rounded.abs() >= limit && suffix < ABBREVIATIONS.len() - 1 {
            scaled /= 1000.0;
            suffix += 1;
            rounded = round_to(scaled, self.decimals_max);
        }
        if rounded == 0.0 {
            // no "-0"
            rounded = 0.0;
        }

        let mut text = format!("{:.*}", self.decimals_max as usize, rounded);
        if text.contains('.') {
            let trimmed = text.trim_end_matches('0').trim_end_matches('.').len();
            text.truncate(trimmed);
        }
        text.push_str(ABBREVIATIONS[suffix]);
        text
    }
}

fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}

/// What a formatter can see while formatting: the configuration it belongs to
/// and the pattern resolved for it
pub struct FormatContext<'a> {
    pub config: &'a GaugeConfig,
    pub pattern: &'a FormatPattern,
}

/// Custom formatting function
pub type FormatFn = dyn Fn(f64, &FormatContext<'_>) -> String + Send + Sync;

/// Label or value formatter
///
/// Custom formatters are shared, never cloned deeply.
#[derive(Clone, Default)]
pub enum Formatter {
    /// Abbreviating formatter driven by the resolved pattern
    #[default]
    Default,
    Custom(Arc<FormatFn>),
}

impl Formatter {
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(f64, &FormatContext<'_>) -> String + Send + Sync + 'static,
    {
        Formatter::Custom(Arc::new(f))
    }

    pub fn format(&self, value: f64, ctx: &FormatContext<'_>) -> String {
        match self {
            Formatter::Default => ctx.pattern.format(value),
            Formatter::Custom(f) => f(value, ctx),
        }
    }
}

impl fmt::Debug for Formatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Formatter::Default => write!(f, "Formatter::Default"),
            Formatter::Custom(_) => write!(f, "Formatter::Custom(..)"),
        }
    }
}
