//! Polyline shape.

use super::{Object, ShapeStyle, Styled};
use crate::render::RenderContext;
use kurbo::Point;
use std::io;

/// An open sequence of connected points, rendered as `<polyline>`.
///
/// Points are rendered in the order they were added.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polyline {
    points: Vec<Point>,
    /// Style properties.
    pub style: ShapeStyle,
}

impl Polyline {
    /// Create an empty polyline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a polyline from a sequence of points.
    pub fn from_points(points: impl IntoIterator<Item = Point>) -> Self {
        Self {
            points: points.into_iter().collect(),
            style: ShapeStyle::default(),
        }
    }

    /// Append a vertex.
    pub fn with_point(mut self, point: impl Into<Point>) -> Self {
        self.points.push(point.into());
        self
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }
}

impl Styled for Polyline {
    fn style_mut(&mut self) -> &mut ShapeStyle {
        &mut self.style
    }
}

impl Object for Polyline {
    fn render_object(&self, context: &mut RenderContext<'_>) -> io::Result<()> {
        let out = &mut *context.out;
        write!(out, "<polyline points=\"")?;
        for (i, point) in self.points.iter().enumerate() {
            if i > 0 {
                write!(out, " ")?;
            }
            write!(out, "{},{}", point.x, point.y)?;
        }
        write!(out, "\"")?;
        self.style.render_attrs(out)?;
        write!(out, " />")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(polyline: &Polyline) -> String {
        let mut buf = Vec::new();
        polyline
            .render_object(&mut RenderContext::new(&mut buf))
            .unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_empty_polyline() {
        assert_eq!(render(&Polyline::new()), "<polyline points=\"\" />");
    }

    #[test]
    fn test_points_in_insertion_order() {
        let polyline = Polyline::new()
            .with_point((100.0, 20.0))
            .with_point((120.0, 50.0))
            .with_point((80.5, 40.0));
        assert_eq!(polyline.points().len(), 3);
        assert_eq!(
            render(&polyline),
            "<polyline points=\"100,20 120,50 80.5,40\" />"
        );
    }

    #[test]
    fn test_styled_polyline() {
        let polyline = Polyline::from_points([Point::new(0.0, 0.0), Point::new(1.0, 1.0)])
            .with_fill_color("red")
            .with_stroke_color("black");
        assert_eq!(
            render(&polyline),
            "<polyline points=\"0,0 1,1\" fill=\"red\" stroke=\"black\" />"
        );
    }
}
