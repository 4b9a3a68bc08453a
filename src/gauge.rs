//! Gauge handle
//!
//! Owns the resolved configuration, the current layout and the renderer
//! (the drawing surface). Layout is recomputed only when a new configuration
//! is supplied; value updates only produce a pointer frame.

use anyhow::Result;
use log::{debug, info};
use responsive_gauge_core::Renderer;
use responsive_gauge_types::{GaugeConfig, GaugeLayout, PointerFrame};

use crate::config::{resolve, GaugeOptions, ResolvedConfig};
use crate::layout::{compute_layout, pointer_frame, pointer_rotation};

pub struct Gauge<R: Renderer> {
    container: R,
    resolved: ResolvedConfig,
    layout: GaugeLayout,
    last_frame: Option<PointerFrame>,
}

impl<R: Renderer> Gauge<R> {
    /// Resolve `options`, draw the gauge and move the pointer to `data.value`
    pub fn new(container: R, options: GaugeOptions) -> Result<Self> {
        let resolved = resolve(&options)?;
        let layout = compute_layout(&resolved);
        let initial = resolved.config.data.value;

        let mut gauge = Self {
            container,
            resolved,
            layout,
            last_frame: None,
        };
        gauge.container.render(&gauge.layout)?;
        info!(
            "Gauge drawn with renderer {} ({} pointer)",
            gauge.container.name(),
            gauge.resolved.config.pointer.pointer_type.as_str()
        );
        gauge.update(initial, None)?;
        Ok(gauge)
    }

    /// Move the pointer to `value`
    ///
    /// With `new_options`, the gauge is rebuilt from the defaults and those
    /// options alone, then laid out and drawn again. A configuration that
    /// fails to resolve leaves the gauge untouched.
    pub fn update(&mut self, value: f64, new_options: Option<GaugeOptions>) -> Result<()> {
        if let Some(new_options) = new_options {
            self.reconfigure(new_options)?;
        }

        let frame = pointer_frame(&self.resolved, &self.layout.pointer, value);
        self.container.render_pointer(&frame)?;
        self.last_frame = Some(frame);
        Ok(())
    }

    fn reconfigure(&mut self, options: GaugeOptions) -> Result<()> {
        let resolved = resolve(&options)?;
        let layout = compute_layout(&resolved);
        self.container.render(&layout)?;
        debug!("Gauge reconfigured");

        self.resolved = resolved;
        self.layout = layout;
        Ok(())
    }

    /// Snapshot of the resolved configuration
    ///
    /// Changing the copy has no effect on the gauge.
    pub fn config(&self) -> GaugeConfig {
        self.resolved.config.clone()
    }

    pub fn resolved(&self) -> &ResolvedConfig {
        &self.resolved
    }

    pub fn layout(&self) -> &GaugeLayout {
        &self.layout
    }

    pub fn last_frame(&self) -> Option<&PointerFrame> {
        self.last_frame.as_ref()
    }

    /// Angle the pointer would take for `value`
    pub fn pointer_rotation(&self, value: f64) -> f64 {
        pointer_rotation(&self.resolved.config, value)
    }

    /// Underlying drawing surface, for external styling
    pub fn container(&self) -> &R {
        &self.container
    }

    pub fn container_mut(&mut self) -> &mut R {
        &mut self.container
    }

    pub fn into_container(self) -> R {
        self.container
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::Formatter;
    use responsive_gauge_types::PointerMotion;
    use serde_json::{json, Value};
    use std::sync::Arc;

    #[derive(Default)]
    struct RecordingRenderer {
        layouts: Vec<GaugeLayout>,
        frames: Vec<PointerFrame>,
    }

    impl Renderer for RecordingRenderer {
        fn name(&self) -> &str {
            "recording"
        }

        fn render(&mut self, layout: &GaugeLayout) -> Result<()> {
            self.layouts.push(layout.clone());
            Ok(())
        }

        fn render_pointer(&mut self, frame: &PointerFrame) -> Result<()> {
            self.frames.push(frame.clone());
            Ok(())
        }
    }

    fn gauge(overrides: Value) -> Gauge<RecordingRenderer> {
        Gauge::new(
            RecordingRenderer::default(),
            GaugeOptions::from_json(overrides),
        )
        .unwrap()
    }

    #[test]
    fn test_construction_draws_and_applies_initial_value() {
        let gauge = gauge(json!({ "data": { "value": 50 } }));
        let renderer = gauge.container();
        assert_eq!(renderer.layouts.len(), 1);
        assert_eq!(renderer.frames.len(), 1);
        assert_eq!(renderer.frames[0].angle, 0.0);
        assert_eq!(renderer.frames[0].text.as_deref(), Some("50"));
    }

    #[test]
    fn test_semicircle_scenario() {
        let mut gauge = gauge(json!({
            "ring": { "minAngle": -90, "maxAngle": 90 },
            "data": { "min": 0, "max": 10 }
        }));
        gauge.update(5.0, None).unwrap();

        let layout = gauge.layout();
        assert_eq!(layout.width, 112.0);
        assert_eq!(layout.height, 62.0);
        assert_eq!(gauge.last_frame().unwrap().angle, 0.0);
        // value updates never re-layout
        assert_eq!(gauge.container().layouts.len(), 1);
        assert_eq!(gauge.container().frames.len(), 2);
    }

    #[test]
    fn test_full_circle_scenario() {
        let gauge = gauge(json!({ "ring": { "minAngle": 0, "maxAngle": 360 } }));
        let layout = gauge.layout();
        assert!(layout.swept_axes.all());
        assert_eq!(layout.width, layout.height);
        assert!(layout.wide);
        assert!(layout.full_circle);
    }

    #[test]
    fn test_no_labels_scenario() {
        let gauge = gauge(json!({ "labels": { "number": 0 } }));
        assert!(gauge.layout().ticks.is_empty());
    }

    #[test]
    fn test_out_of_range_value_is_clamped() {
        let mut gauge = gauge(json!({ "data": { "min": 0, "max": 10 } }));
        gauge.update(15.0, None).unwrap();
        let frame = gauge.last_frame().unwrap();
        assert_eq!(frame.angle, 90.0);
        assert_eq!(frame.value, 15.0);
    }

    #[test]
    fn test_explicit_label_number_preserved() {
        let gauge = gauge(json!({
            "labels": { "number": 10 },
            "ring": { "sectorsNumber": 5 }
        }));
        assert_eq!(gauge.config().labels.number, Some(10));
        assert_eq!(gauge.layout().ticks.len(), 10);
    }

    #[test]
    fn test_config_snapshot_is_detached() {
        let gauge = gauge(json!({}));
        let mut snapshot = gauge.config();
        snapshot.ring.min_angle = 0.0;
        snapshot.data.max = 1.0;
        assert_eq!(gauge.config().ring.min_angle, -90.0);
        assert_eq!(gauge.pointer_rotation(100.0), 90.0);
    }

    #[test]
    fn test_formatters_are_shared() {
        let formatter = Formatter::custom(|v, _| format!("<{}>", v));
        let options = GaugeOptions::new().with_label_formatter(formatter.clone());
        let gauge = Gauge::new(RecordingRenderer::default(), options).unwrap();

        match (&formatter, gauge.resolved().label_formatter()) {
            (Formatter::Custom(a), Formatter::Custom(b)) => assert!(Arc::ptr_eq(a, b)),
            _ => panic!("expected custom formatters"),
        }
        assert_eq!(gauge.layout().ticks[0].text, "<0>");
    }

    #[test]
    fn test_empty_data_range_gives_nan() {
        let gauge = gauge(json!({ "data": { "min": 5, "max": 5, "value": 5 } }));
        assert!(gauge.last_frame().unwrap().angle.is_nan());
        assert!(gauge.pointer_rotation(5.0).is_nan());
    }

    #[test]
    fn test_update_with_new_configuration_relayouts() {
        let mut gauge = gauge(json!({ "data": { "max": 10 } }));
        gauge
            .update(
                20.0,
                Some(GaugeOptions::from_json(
                    json!({ "pointer": { "type": "filler" } }),
                )),
            )
            .unwrap();

        assert_eq!(gauge.container().layouts.len(), 2);
        // rebuilt from the defaults, earlier overrides are gone
        assert_eq!(gauge.config().data.max, 100.0);
        match gauge.last_frame().unwrap().motion {
            PointerMotion::Immediate { arc } => assert_eq!(arc.end_angle, -54.0),
            other => panic!("expected immediate motion, got {:?}", other),
        }
    }

    #[test]
    fn test_failed_reconfiguration_keeps_state() {
        let mut gauge = gauge(json!({ "data": { "max": 10 } }));
        let result = gauge.update(
            1.0,
            Some(GaugeOptions::from_json(json!({ "ring": { "width": "thick" } }))),
        );
        assert!(result.is_err());
        assert_eq!(gauge.config().ring.width, 7.0);
        assert_eq!(gauge.container().layouts.len(), 1);
    }

    #[test]
    fn test_reconfiguration_restores_derived_fields() {
        let mut gauge = gauge(json!({ "labels": { "number": 10 } }));
        assert_eq!(gauge.layout().ticks.len(), 10);

        gauge
            .update(
                0.0,
                Some(GaugeOptions::from_json(json!({ "ring": { "sectorsNumber": 3 } }))),
            )
            .unwrap();
        assert_eq!(gauge.config().labels.number, Some(3));
        assert_eq!(gauge.layout().ticks.len(), 3);

        gauge
            .update(
                0.0,
                Some(GaugeOptions::from_json(json!({ "labels": { "number": null } }))),
            )
            .unwrap();
        assert_eq!(gauge.config().labels.number, Some(5));
        assert_eq!(gauge.layout().ticks.len(), 5);
    }

    #[test]
    fn test_reconfiguration_drops_previous_formatters() {
        let options = GaugeOptions::new().with_value_formatter(Formatter::custom(|v, _| {
            format!("{} units", v)
        }));
        let mut gauge = Gauge::new(RecordingRenderer::default(), options).unwrap();
        assert_eq!(
            gauge.last_frame().unwrap().text.as_deref(),
            Some("0 units")
        );

        gauge.update(42.0, Some(GaugeOptions::new())).unwrap();
        assert_eq!(gauge.last_frame().unwrap().text.as_deref(), Some("42"));
    }
}
