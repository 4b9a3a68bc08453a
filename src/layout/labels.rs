//! Tick labels and value text placement

use log::warn;
use responsive_gauge_core::{
    GAUGE_RADIUS, MAX_ELEMENT_COUNT, VALUE_FONT_SCALE, WIDE_VALUE_FONT_SCALE,
};
use responsive_gauge_types::{GaugeConfig, TickMark, ValueLabelLayout};

use super::pointer_rotation;
use crate::config::ResolvedConfig;

/// `count` evenly spaced values from `min` to `max`, both included
///
/// A single tick sits at `max`. The last tick is `max` exactly.
pub fn compute_ticks(min: f64, max: f64, count: u32) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![max],
        n => {
            let step = (max - min) / (n - 1) as f64;
            let mut ticks: Vec<f64> = (0..n - 1).map(|i| min + i as f64 * step).collect();
            ticks.push(max);
            ticks
        }
    }
}

pub fn tick_marks(resolved: &ResolvedConfig, wide: bool) -> Vec<TickMark> {
    let config = &resolved.config;
    let mut count = config
        .labels
        .number
        .unwrap_or(config.ring.sectors_number);
    if count > MAX_ELEMENT_COUNT {
        warn!("{} labels requested, drawing {}", count, MAX_ELEMENT_COUNT);
        count = MAX_ELEMENT_COUNT;
    }

    compute_ticks(config.data.min, config.data.max, count)
        .into_iter()
        .map(|value| TickMark {
            value,
            angle: pointer_rotation(config, value),
            radial_offset: config.labels.shift - GAUGE_RADIUS,
            text: resolved.format_label(value),
            scaled: wide,
        })
        .collect()
}

/// Placement of the value text, or `None` when the value is hidden
///
/// The text sits on the bisector of the ring; wide gauges center it and
/// draw it twice as large.
pub fn value_label_layout(config: &GaugeConfig, wide: bool) -> Option<ValueLabelLayout> {
    if !config.value.show {
        return None;
    }

    let (angle, offset, font_scale) = if wide {
        (0.0, 0.0, WIDE_VALUE_FONT_SCALE)
    } else {
        (
            config.ring.min_angle + config.ring.range().abs() / 2.0,
            config.value.shift,
            VALUE_FONT_SCALE,
        )
    };

    Some(ValueLabelLayout {
        angle,
        offset,
        font_scale,
        unit: config.value.unit.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{resolve, GaugeOptions};
    use serde_json::json;

    #[test]
    fn test_compute_ticks() {
        assert!(compute_ticks(0.0, 100.0, 0).is_empty());
        assert_eq!(compute_ticks(0.0, 100.0, 1), vec![100.0]);
        assert_eq!(compute_ticks(0.0, 100.0, 2), vec![0.0, 100.0]);
        assert_eq!(
            compute_ticks(0.0, 100.0, 5),
            vec![0.0, 25.0, 50.0, 75.0, 100.0]
        );
    }

    #[test]
    fn test_last_tick_is_exact_max() {
        let ticks = compute_ticks(0.0, 1.0, 11);
        assert_eq!(ticks.len(), 11);
        assert_eq!(*ticks.last().unwrap(), 1.0);
    }

    #[test]
    fn test_tick_marks_follow_pointer_scale() {
        let resolved = resolve(&GaugeOptions::from_json(json!({
            "data": { "min": 0, "max": 10 },
            "labels": { "number": 3, "shift": 4 }
        })))
        .unwrap();
        let ticks = tick_marks(&resolved, false);

        let angles: Vec<_> = ticks.iter().map(|t| t.angle).collect();
        assert_eq!(angles, vec![-90.0, 0.0, 90.0]);
        let texts: Vec<_> = ticks.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["0", "5", "10"]);
        assert!(ticks.iter().all(|t| t.radial_offset == -46.0 && !t.scaled));
    }

    #[test]
    fn test_zero_labels() {
        let resolved = resolve(&GaugeOptions::from_json(json!({ "labels": { "number": 0 } })))
            .unwrap();
        assert!(tick_marks(&resolved, false).is_empty());
    }

    #[test]
    fn test_single_label_marks_the_maximum() {
        let resolved = resolve(&GaugeOptions::from_json(json!({
            "data": { "min": 0, "max": 10 },
            "labels": { "number": 1 }
        })))
        .unwrap();
        let ticks = tick_marks(&resolved, false);
        assert_eq!(ticks.len(), 1);
        assert_eq!(ticks[0].value, 10.0);
        assert_eq!(ticks[0].angle, 90.0);
        assert_eq!(ticks[0].text, "10");
    }

    #[test]
    fn test_label_count_is_capped() {
        let resolved = resolve(&GaugeOptions::from_json(json!({
            "labels": { "number": 4_000_000_000u32 }
        })))
        .unwrap();
        let ticks = tick_marks(&resolved, false);
        assert_eq!(ticks.len(), MAX_ELEMENT_COUNT as usize);
        assert_eq!(ticks.last().unwrap().value, 100.0);
    }

    #[test]
    fn test_labels_use_abbreviations() {
        let resolved = resolve(&GaugeOptions::from_json(json!({
            "data": { "max": 50000 },
            "labels": { "number": 2 }
        })))
        .unwrap();
        let texts: Vec<_> = tick_marks(&resolved, true)
            .into_iter()
            .map(|t| t.text)
            .collect();
        assert_eq!(texts, vec!["0", "50k"]);
    }

    #[test]
    fn test_value_label_on_bisector() {
        let config = GaugeConfig::default();
        let label = value_label_layout(&config, false).unwrap();
        assert_eq!(label.angle, 0.0);
        assert_eq!(label.offset, 22.0);
        assert_eq!(label.font_scale, 3.0);

        let mut config = GaugeConfig::default();
        config.ring.min_angle = 0.0;
        let label = value_label_layout(&config, false).unwrap();
        assert_eq!(label.angle, 45.0);
    }

    #[test]
    fn test_value_label_centered_when_wide() {
        let mut config = GaugeConfig::default();
        config.value.unit = "km/h".to_string();
        let label = value_label_layout(&config, true).unwrap();
        assert_eq!(label.angle, 0.0);
        assert_eq!(label.offset, 0.0);
        assert_eq!(label.font_scale, 6.0);
        assert_eq!(label.unit, "km/h");

        config.value.show = false;
        assert!(value_label_layout(&config, true).is_none());
    }
}
