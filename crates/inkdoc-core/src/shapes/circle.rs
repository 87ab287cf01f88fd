//! Circle shape.

use super::{Object, ShapeStyle, Styled};
use crate::render::RenderContext;
use kurbo::Point;
use std::io;

/// A circle, rendered as `<circle>`.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    /// Center point.
    pub center: Point,
    pub radius: f64,
    /// Style properties.
    pub style: ShapeStyle,
}

impl Default for Circle {
    fn default() -> Self {
        Self::new()
    }
}

impl Circle {
    /// Create a unit circle at the origin.
    pub fn new() -> Self {
        Self {
            center: Point::ZERO,
            radius: 1.0,
            style: ShapeStyle::default(),
        }
    }

    pub fn with_center(mut self, center: impl Into<Point>) -> Self {
        self.center = center.into();
        self
    }

    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }
}

impl Styled for Circle {
    fn style_mut(&mut self) -> &mut ShapeStyle {
        &mut self.style
    }
}

impl Object for Circle {
    fn render_object(&self, context: &mut RenderContext<'_>) -> io::Result<()> {
        let out = &mut *context.out;
        write!(
            out,
            "<circle cx=\"{}\" cy=\"{}\" r=\"{}\"",
            self.center.x, self.center.y, self.radius
        )?;
        self.style.render_attrs(out)?;
        write!(out, " />")
    }
}
