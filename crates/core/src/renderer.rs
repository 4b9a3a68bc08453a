//! Renderer trait

use anyhow::Result;
use responsive_gauge_types::{GaugeLayout, PointerFrame};

/// Trait for gauge renderers
///
/// Renderers own the drawing surface. They receive a full layout whenever
/// the configuration changes and a pointer frame on every value update; all
/// element creation, styling and animation happens on their side.
pub trait Renderer: Send {
    /// Human-readable name
    fn name(&self) -> &str;

    /// Draw the static part of the gauge, replacing anything drawn before
    fn render(&mut self, layout: &GaugeLayout) -> Result<()>;

    /// Move the pointer and refresh the value text
    ///
    /// A frame may arrive while a previous transition is still running; the
    /// new target supersedes it.
    fn render_pointer(&mut self, frame: &PointerFrame) -> Result<()>;
}

/// Type-erased renderer for dynamic dispatch
pub type BoxedRenderer = Box<dyn Renderer>;

impl<R: Renderer + ?Sized> Renderer for Box<R> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn render(&mut self, layout: &GaugeLayout) -> Result<()> {
        (**self).render(layout)
    }

    fn render_pointer(&mut self, frame: &PointerFrame) -> Result<()> {
        (**self).render_pointer(frame)
    }
}
