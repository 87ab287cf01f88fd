//! Shape primitives that can be placed in a document.

mod circle;
mod polyline;
mod text;

pub use circle::Circle;
pub use polyline::Polyline;
pub use text::{Text, escape_text};

use crate::color::Color;
use crate::render::RenderContext;
use std::fmt;
use std::io::{self, Write};

/// Shape used at the end of open subpaths when stroked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrokeLineCap {
    Butt,
    Round,
    Square,
}

impl StrokeLineCap {
    pub fn as_str(&self) -> &'static str {
        match self {
            StrokeLineCap::Butt => "butt",
            StrokeLineCap::Round => "round",
            StrokeLineCap::Square => "square",
        }
    }
}

impl fmt::Display for StrokeLineCap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shape used at the corners of stroked paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrokeLineJoin {
    Arcs,
    Bevel,
    Miter,
    MiterClip,
    Round,
}

impl StrokeLineJoin {
    pub fn as_str(&self) -> &'static str {
        match self {
            StrokeLineJoin::Arcs => "arcs",
            StrokeLineJoin::Bevel => "bevel",
            StrokeLineJoin::Miter => "miter",
            StrokeLineJoin::MiterClip => "miter-clip",
            StrokeLineJoin::Round => "round",
        }
    }
}

impl fmt::Display for StrokeLineJoin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Style properties shared by all shapes.
///
/// Every field is optional and is left out of the output when unset.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ShapeStyle {
    /// Fill color (`Color::None` = attribute omitted).
    pub fill_color: Color,
    /// Stroke color (`Color::None` = attribute omitted).
    pub stroke_color: Color,
    pub stroke_width: Option<f64>,
    pub stroke_line_cap: Option<StrokeLineCap>,
    pub stroke_line_join: Option<StrokeLineJoin>,
}

impl ShapeStyle {
    /// Write the set attributes, each preceded by a space.
    pub fn render_attrs(&self, out: &mut dyn Write) -> io::Result<()> {
        if !self.fill_color.is_none() {
            write!(out, " fill=\"{}\"", self.fill_color)?;
        }
        if !self.stroke_color.is_none() {
            write!(out, " stroke=\"{}\"", self.stroke_color)?;
        }
        if let Some(width) = self.stroke_width {
            write!(out, " stroke-width=\"{}\"", width)?;
        }
        if let Some(cap) = self.stroke_line_cap {
            write!(out, " stroke-linecap=\"{}\"", cap)?;
        }
        if let Some(join) = self.stroke_line_join {
            write!(out, " stroke-linejoin=\"{}\"", join)?;
        }
        Ok(())
    }
}

/// Fluent style setters for any shape that owns a [`ShapeStyle`].
pub trait Styled: Sized {
    fn style_mut(&mut self) -> &mut ShapeStyle;

    fn with_fill_color(mut self, color: impl Into<Color>) -> Self {
        self.style_mut().fill_color = color.into();
        self
    }

    fn with_stroke_color(mut self, color: impl Into<Color>) -> Self {
        self.style_mut().stroke_color = color.into();
        self
    }

    fn with_stroke_width(mut self, width: f64) -> Self {
        self.style_mut().stroke_width = Some(width);
        self
    }

    fn with_stroke_line_cap(mut self, cap: StrokeLineCap) -> Self {
        self.style_mut().stroke_line_cap = Some(cap);
        self
    }

    fn with_stroke_line_join(mut self, join: StrokeLineJoin) -> Self {
        self.style_mut().stroke_line_join = Some(join);
        self
    }
}

/// Anything that can be rendered as one element of a document.
pub trait Object {
    /// Render this object on its own line at the context's indentation.
    fn render(&self, context: &mut RenderContext<'_>) -> io::Result<()> {
        context.render_indent()?;
        self.render_object(context)?;
        writeln!(context.out)
    }

    /// Write the element itself, without indentation or trailing newline.
    fn render_object(&self, context: &mut RenderContext<'_>) -> io::Result<()>;
}

/// Takes ownership of objects for later rendering.
pub trait ObjectContainer {
    fn add_boxed(&mut self, object: Box<dyn Object>);
}

/// Generic `add` for any container, including `dyn ObjectContainer`.
pub trait ObjectContainerExt {
    fn add<T: Object + 'static>(&mut self, object: T);
}

impl<C: ObjectContainer + ?Sized> ObjectContainerExt for C {
    fn add<T: Object + 'static>(&mut self, object: T) {
        self.add_boxed(Box::new(object));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs(style: &ShapeStyle) -> String {
        let mut buf = Vec::new();
        style.render_attrs(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_default_style_renders_nothing() {
        assert_eq!(attrs(&ShapeStyle::default()), "");
    }

    #[test]
    fn test_attr_order() {
        let style = ShapeStyle {
            fill_color: "red".into(),
            stroke_color: "black".into(),
            stroke_width: Some(3.0),
            stroke_line_cap: Some(StrokeLineCap::Round),
            stroke_line_join: Some(StrokeLineJoin::MiterClip),
        };
        assert_eq!(
            attrs(&style),
            " fill=\"red\" stroke=\"black\" stroke-width=\"3\" \
             stroke-linecap=\"round\" stroke-linejoin=\"miter-clip\""
        );
    }

    #[test]
    fn test_each_attr_independent() {
        let style = ShapeStyle {
            stroke_line_join: Some(StrokeLineJoin::Bevel),
            ..Default::default()
        };
        assert_eq!(attrs(&style), " stroke-linejoin=\"bevel\"");
    }

    #[test]
    fn test_enum_names() {
        assert_eq!(StrokeLineCap::Butt.to_string(), "butt");
        assert_eq!(StrokeLineCap::Square.to_string(), "square");
        assert_eq!(StrokeLineJoin::Arcs.to_string(), "arcs");
        assert_eq!(StrokeLineJoin::Miter.to_string(), "miter");
        assert_eq!(StrokeLineJoin::Round.to_string(), "round");
    }

    #[derive(Default)]
    struct Recorder {
        objects: Vec<Box<dyn Object>>,
    }

    impl ObjectContainer for Recorder {
        fn add_boxed(&mut self, object: Box<dyn Object>) {
            self.objects.push(object);
        }
    }

    #[test]
    fn test_add_through_dyn_container() {
        let mut recorder = Recorder::default();
        {
            let container: &mut dyn ObjectContainer = &mut recorder;
            container.add(Circle::new());
            container.add(Polyline::new());
        }
        recorder.add(Text::new());
        assert_eq!(recorder.objects.len(), 3);
    }
}
