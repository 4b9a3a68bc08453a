//! SVG rendering of gauge layouts
//!
//! Builds a standalone SVG document from the last layout and pointer frame.
//! Eased pointer transitions are not played; their duration and easing are
//! emitted as `data-*` attributes for the host page to animate.

use std::fmt::Write;

use anyhow::{bail, Result};
use log::debug;
use responsive_gauge_core::{Renderer, WIDE_LABEL_SCALE};
use responsive_gauge_types::{
    ArcGeometry, Easing, GaugeLayout, PointerFrame, PointerGeometry, PointerMotion,
};

/// Renderer producing an SVG document
#[derive(Debug, Default, Clone)]
pub struct SvgRenderer {
    layout: Option<GaugeLayout>,
    frame: Option<PointerFrame>,
}

impl SvgRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn layout(&self) -> Option<&GaugeLayout> {
        self.layout.as_ref()
    }

    pub fn frame(&self) -> Option<&PointerFrame> {
        self.frame.as_ref()
    }

    /// Current drawing as an SVG document
    pub fn document(&self) -> Result<String> {
        let Some(layout) = &self.layout else {
            bail!("Nothing drawn yet");
        };
        let frame = self.frame.as_ref();

        let mut classes = String::from("gauge");
        if layout.wide {
            classes.push_str(" wide-gauge");
        }
        if layout.full_circle {
            classes.push_str(" gauge-360");
        }
        let center = format!(
            "translate({},{})",
            num(layout.translate_x),
            num(layout.translate_y)
        );

        let mut svg = String::new();
        writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" class="{}" viewBox="0 0 {} {}" preserveAspectRatio="xMinYMin meet">"#,
            classes,
            num(layout.width),
            num(layout.height)
        )?;

        // ring
        writeln!(svg, r#"  <g class="gauge-arc" transform="{}">"#, center)?;
        for sector in &layout.sectors {
            match &sector.fill {
                Some(fill) => writeln!(
                    svg,
                    r#"    <path fill="{}" d="{}"/>"#,
                    escape(fill),
                    arc_path(&sector.arc)
                )?,
                None => writeln!(svg, r#"    <path d="{}"/>"#, arc_path(&sector.arc))?,
            }
        }
        if let Some(border) = &layout.border {
            writeln!(
                svg,
                r#"    <path class="gauge-arc-border" fill="none" d="{}"/>"#,
                arc_path(border)
            )?;
        }
        writeln!(svg, "  </g>")?;

        // labels
        writeln!(svg, r#"  <g class="gauge-label" transform="{}">"#, center)?;
        for tick in &layout.ticks {
            let scale = if tick.scaled {
                format!(" scale({})", num(WIDE_LABEL_SCALE))
            } else {
                String::new()
            };
            writeln!(
                svg,
                r#"    <text transform="rotate({}) translate(0,{}){}">{}</text>"#,
                num(tick.angle),
                num(tick.radial_offset),
                scale,
                escape(&tick.text)
            )?;
        }
        writeln!(svg, "  </g>")?;

        write_pointer(&mut svg, layout, frame, &center)?;

        // value
        if let Some(label) = &layout.value_label {
            let text = frame.and_then(|f| f.text.as_deref()).unwrap_or("");
            writeln!(
                svg,
                r#"  <g class="gauge-value" transform="{} rotate({})">"#,
                center,
                num(label.angle)
            )?;
            write!(
                svg,
                r#"    <text transform="translate(0,{}) scale({}) rotate({})">{}"#,
                num(-label.offset),
                num(label.font_scale),
                num(-label.angle),
                escape(text)
            )?;
            if !label.unit.is_empty() {
                write!(
                    svg,
                    r#"<tspan class="unit" x="0" dy="1.2em">{}</tspan>"#,
                    escape(&label.unit)
                )?;
            }
            writeln!(svg, "</text>")?;
            writeln!(svg, "  </g>")?;
        }

        writeln!(svg, "</svg>")?;
        Ok(svg)
    }
}

fn write_pointer(
    svg: &mut String,
    layout: &GaugeLayout,
    frame: Option<&PointerFrame>,
    center: &str,
) -> Result<()> {
    writeln!(
        svg,
        r#"  <g class="gauge-pointer gauge-{}" transform="{}">"#,
        layout.pointer.pointer_type().as_str(),
        center
    )?;

    let transition = match frame.map(|f| &f.motion) {
        Some(PointerMotion::Eased {
            duration_ms,
            easing: Easing::Elastic,
        }) => format!(r#" data-duration="{}" data-easing="elastic""#, duration_ms),
        _ => String::new(),
    };

    match layout.pointer {
        PointerGeometry::Needle {
            from,
            to,
            hub_radius,
        } => {
            let angle = frame.map(|f| f.angle).unwrap_or(0.0);
            writeln!(
                svg,
                r#"    <line x1="0" y1="{}" x2="0" y2="{}" transform="rotate({})"{}/>"#,
                num(-from),
                num(-to),
                num(angle),
                transition
            )?;
            writeln!(svg, r#"    <circle r="{}"/>"#, num(hub_radius))?;
        }
        PointerGeometry::Filament { from, to } => {
            let angle = frame.map(|f| f.angle).unwrap_or(0.0);
            writeln!(
                svg,
                r#"    <line x1="0" y1="{}" x2="0" y2="{}" transform="rotate({})"{}/>"#,
                num(-from),
                num(-to),
                num(angle),
                transition
            )?;
        }
        PointerGeometry::Filler { .. } => {
            if let Some(PointerMotion::Immediate { arc }) = frame.map(|f| &f.motion) {
                writeln!(svg, r#"    <path d="{}"/>"#, arc_path(arc))?;
            }
        }
    }

    writeln!(svg, "  </g>")?;
    Ok(())
}

impl Renderer for SvgRenderer {
    fn name(&self) -> &str {
        "svg"
    }

    fn render(&mut self, layout: &GaugeLayout) -> Result<()> {
        debug!(
            "SVG layout {}x{} with {} sectors",
            num(layout.width),
            num(layout.height),
            layout.sectors.len()
        );
        self.layout = Some(layout.clone());
        self.frame = None;
        Ok(())
    }

    fn render_pointer(&mut self, frame: &PointerFrame) -> Result<()> {
        if self.layout.is_none() {
            bail!("Pointer update before the gauge was drawn");
        }
        self.frame = Some(frame.clone());
        Ok(())
    }
}

/// Point at `angle` degrees clockwise from the top, `radius` from the center
fn polar(radius: f64, angle: f64) -> (f64, f64) {
    let a = angle.to_radians();
    (radius * a.sin(), -radius * a.cos())
}

/// Path data of an annular sector, drawn clockwise from `start_angle`
pub fn arc_path(arc: &ArcGeometry) -> String {
    let r0 = arc.inner_radius.max(0.0);
    let r1 = arc.outer_radius;
    let sweep = arc.sweep();

    if sweep.abs() >= 360.0 {
        let outer = format!(
            "M0,{}A{},{} 0 1,1 0,{}A{},{} 0 1,1 0,{}",
            num(-r1),
            num(r1),
            num(r1),
            num(r1),
            num(r1),
            num(r1),
            num(-r1)
        );
        if r0 > 0.0 {
            return format!(
                "{}M0,{}A{},{} 0 1,0 0,{}A{},{} 0 1,0 0,{}Z",
                outer,
                num(-r0),
                num(r0),
                num(r0),
                num(r0),
                num(r0),
                num(r0),
                num(-r0)
            );
        }
        return format!("{}Z", outer);
    }

    let large = if sweep.abs() > 180.0 { 1 } else { 0 };
    let clockwise = if sweep >= 0.0 { 1 } else { 0 };
    let (x0, y0) = polar(r1, arc.start_angle);
    let (x1, y1) = polar(r1, arc.end_angle);

    let mut path = format!(
        "M{},{}A{},{} 0 {},{} {},{}",
        num(x0),
        num(y0),
        num(r1),
        num(r1),
        large,
        clockwise,
        num(x1),
        num(y1)
    );
    if r0 > 0.0 {
        let (x2, y2) = polar(r0, arc.end_angle);
        let (x3, y3) = polar(r0, arc.start_angle);
        path.push_str(&format!(
            "L{},{}A{},{} 0 {},{} {},{}Z",
            num(x2),
            num(y2),
            num(r0),
            num(r0),
            large,
            1 - clockwise,
            num(x3),
            num(y3)
        ));
    } else {
        path.push_str("L0,0Z");
    }
    path
}

/// Compact number: at most 3 decimals, no trailing zeros, no "-0"
fn num(v: f64) -> String {
    if !v.is_finite() {
        return v.to_string();
    }
    let rounded = (v * 1000.0).round() / 1000.0;
    if rounded == 0.0 {
        return "0".to_string();
    }
    let mut text = format!("{:.3}", rounded);
    let trimmed = text.trim_end_matches('0').trim_end_matches('.').len();
    text.truncate(trimmed);
    text
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}
