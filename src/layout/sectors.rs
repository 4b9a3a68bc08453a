//! Ring sectors
//!
//! The ring is split into equal-angle sectors according to the coloring
//! policy. A smooth gradient is approximated by many thin sectors rather
//! than drawn as a true gradient fill.

use log::{debug, warn};
use responsive_gauge_core::{GRADIENT_ELT_NUMBER, MAX_ELEMENT_COUNT, SEAM_EPSILON_DEG};
use responsive_gauge_types::{ArcGeometry, GradientKind, RingColors, SectorArc};

use super::ring_arc;
use crate::config::ResolvedConfig;

/// Number of sectors drawn for a coloring policy
pub fn sector_count(colors: &RingColors, sectors_number: u32) -> usize {
    match colors {
        RingColors::None => 1,
        RingColors::Gradient(GradientKind::Smooth) => GRADIENT_ELT_NUMBER,
        RingColors::Gradient(GradientKind::Sectors) => sectors_number as usize,
        RingColors::Palette(colors) => colors.len(),
    }
}

pub fn sector_arcs(resolved: &ResolvedConfig) -> Vec<SectorArc> {
    let ring = &resolved.config.ring;
    let mut n = sector_count(&ring.colors, ring.sectors_number);
    if n > MAX_ELEMENT_COUNT as usize {
        warn!("{} sectors requested, drawing {}", n, MAX_ELEMENT_COUNT);
        n = MAX_ELEMENT_COUNT as usize;
    }
    let step = resolved.range / n as f64;

    let arcs: Vec<SectorArc> = (0..n)
        .map(|i| {
            let mut start = ring.min_angle + i as f64 * step;
            if i > 0 && ring.collapse_seams {
                start -= SEAM_EPSILON_DEG;
            }
            let end = ring.min_angle + (i + 1) as f64 * step;

            let fill = match &ring.colors {
                RingColors::None => None,
                RingColors::Palette(colors) => colors.get(i).cloned(),
                RingColors::Gradient(_) => resolved.gradient.map(|g| {
                    let t = (i as f64 + 0.5) / n as f64;
                    g.start.interpolate_hsl(&g.end, t).to_hex()
                }),
            };

            SectorArc {
                arc: ring_arc(ring, start, end),
                fill,
            }
        })
        .collect();

    debug!("Ring split into {} sectors", arcs.len());
    arcs
}

/// Outline spanning the whole ring, when enabled
pub fn border_arc(resolved: &ResolvedConfig) -> Option<ArcGeometry> {
    let ring = &resolved.config.ring;
    ring.border.then(|| ring_arc(ring, ring.min_angle, ring.max_angle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{resolve, GaugeOptions};
    use serde_json::{json, Value};

    fn arcs(overrides: Value) -> Vec<SectorArc> {
        sector_arcs(&resolve(&GaugeOptions::from_json(overrides)).unwrap())
    }

    #[test]
    fn test_sector_count_per_policy() {
        assert_eq!(sector_count(&RingColors::None, 5), 1);
        assert_eq!(
            sector_count(&RingColors::Gradient(GradientKind::Smooth), 5),
            40
        );
        assert_eq!(
            sector_count(&RingColors::Gradient(GradientKind::Sectors), 5),
            5
        );
        let palette = RingColors::Palette(vec!["red".into(), "blue".into()]);
        assert_eq!(sector_count(&palette, 5), 2);
    }

    #[test]
    fn test_no_color_is_single_unfilled_sector() {
        let arcs = arcs(json!({}));
        assert_eq!(arcs.len(), 1);
        assert_eq!(arcs[0].fill, None);
        assert_eq!(arcs[0].arc.start_angle, -90.0);
        assert_eq!(arcs[0].arc.end_angle, 90.0);
    }

    #[test]
    fn test_palette_colors_in_order() {
        let arcs = arcs(json!({ "ring": { "colors": ["#00ff00", "#ffff00", "#ff0000"] } }));
        let fills: Vec<_> = arcs.iter().map(|a| a.fill.as_deref()).collect();
        assert_eq!(
            fills,
            vec![Some("#00ff00"), Some("#ffff00"), Some("#ff0000")]
        );
        assert_eq!(arcs[0].arc.end_angle, -30.0);
        assert_eq!(arcs[2].arc.end_angle, 90.0);
    }

    #[test]
    fn test_seam_overlap_on_all_but_first() {
        let arcs = arcs(json!({ "ring": { "colors": "sectors", "sectorsNumber": 4 } }));
        assert_eq!(arcs.len(), 4);
        assert_eq!(arcs[0].arc.start_angle, -90.0);
        assert_eq!(arcs[1].arc.start_angle, -45.5);
        assert_eq!(arcs[2].arc.start_angle, -0.5);
        assert_eq!(arcs[3].arc.start_angle, 44.5);
        assert_eq!(arcs[3].arc.end_angle, 90.0);
    }

    #[test]
    fn test_seam_overlap_can_be_disabled() {
        let arcs = arcs(json!({
            "ring": { "colors": "sectors", "sectorsNumber": 4, "collapseSeams": false }
        }));
        assert_eq!(arcs[1].arc.start_angle, -45.0);
        assert_eq!(arcs[1].arc.end_angle, arcs[2].arc.start_angle);
    }

    #[test]
    fn test_gradient_sectors_are_sampled_at_midpoint() {
        let arcs = arcs(json!({ "ring": { "colors": "sectors", "sectorsNumber": 2 } }));
        let start = responsive_gauge_types::Color::from_hex("#ffebee").unwrap();
        let end = responsive_gauge_types::Color::from_hex("#810301").unwrap();
        assert_eq!(
            arcs[0].fill.as_deref(),
            Some(start.interpolate_hsl(&end, 0.25).to_hex().as_str())
        );
        assert_eq!(
            arcs[1].fill.as_deref(),
            Some(start.interpolate_hsl(&end, 0.75).to_hex().as_str())
        );
        assert_ne!(arcs[0].fill, arcs[1].fill);
    }

    #[test]
    fn test_smooth_gradient_uses_many_slices() {
        let arcs = arcs(json!({ "ring": { "colors": "gradient" } }));
        assert_eq!(arcs.len(), GRADIENT_ELT_NUMBER);
        assert!(arcs.iter().all(|a| a.fill.is_some()));
        let last = arcs.last().unwrap();
        assert!((last.arc.end_angle - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_sector_count_is_capped() {
        let arcs = arcs(json!({
            "ring": { "colors": "sectors", "sectorsNumber": 2_000_000 },
            "labels": { "number": 5 }
        }));
        assert_eq!(arcs.len(), MAX_ELEMENT_COUNT as usize);
        let last = arcs.last().unwrap();
        assert!((last.arc.end_angle - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_border_arc() {
        let resolved = resolve(&GaugeOptions::from_json(json!({
            "ring": { "border": true, "colors": "sectors" }
        })))
        .unwrap();
        let border = border_arc(&resolved).unwrap();
        assert_eq!(border.start_angle, -90.0);
        assert_eq!(border.end_angle, 90.0);
        assert_eq!(border.inner_radius, 40.0);

        let resolved = resolve(&GaugeOptions::new()).unwrap();
        assert!(border_arc(&resolved).is_none());
    }
}
