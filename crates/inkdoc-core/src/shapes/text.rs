//! Text shape.

use super::{Object, ShapeStyle, Styled};
use crate::render::RenderContext;
use kurbo::Point;
use std::borrow::Cow;
use std::io;

/// A text label, rendered as `<text>`.
///
/// `data` is stored as given and escaped only when rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    /// Anchor point (`x`, `y` attributes).
    pub position: Point,
    /// Offset from the anchor (`dx`, `dy` attributes).
    pub offset: Point,
    pub font_size: u32,
    pub font_family: Option<String>,
    pub font_weight: Option<String>,
    /// The text content.
    pub data: String,
    /// Style properties.
    pub style: ShapeStyle,
}

impl Default for Text {
    fn default() -> Self {
        Self::new()
    }
}

impl Text {
    pub fn new() -> Self {
        Self {
            position: Point::ZERO,
            offset: Point::ZERO,
            font_size: 1,
            font_family: None,
            font_weight: None,
            data: String::new(),
            style: ShapeStyle::default(),
        }
    }

    pub fn with_position(mut self, position: impl Into<Point>) -> Self {
        self.position = position.into();
        self
    }

    pub fn with_offset(mut self, offset: impl Into<Point>) -> Self {
        self.offset = offset.into();
        self
    }

    pub fn with_font_size(mut self, size: u32) -> Self {
        self.font_size = size;
        self
    }

    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = Some(family.into());
        self
    }

    pub fn with_font_weight(mut self, weight: impl Into<String>) -> Self {
        self.font_weight = Some(weight.into());
        self
    }

    pub fn with_data(mut self, data: impl Into<String>) -> Self {
        self.data = data.into();
        self
    }
}

impl Styled for Text {
    fn style_mut(&mut self) -> &mut ShapeStyle {
        &mut self.style
    }
}

impl Object for Text {
    fn render_object(&self, context: &mut RenderContext<'_>) -> io::Result<()> {
        let out = &mut *context.out;
        write!(
            out,
            "<text x=\"{}\" y=\"{}\" dx=\"{}\" dy=\"{}\" font-size=\"{}\"",
            self.position.x, self.position.y, self.offset.x, self.offset.y, self.font_size
        )?;
        if let Some(family) = &self.font_family {
            write!(out, " font-family=\"{}\"", family)?;
        }
        if let Some(weight) = &self.font_weight {
            write!(out, " font-weight=\"{}\"", weight)?;
        }
        self.style.render_attrs(out)?;
        write!(out, ">{}</text>", escape_text(&self.data))
    }
}

/// Escape XML special characters in a single left-to-right pass.
pub fn escape_text(data: &str) -> Cow<'_, str> {
    if !data.contains(['&', '"', '\'', '<', '>']) {
        return Cow::Borrowed(data);
    }
    let mut escaped = String::with_capacity(data.len() + 16);
    for ch in data.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(ch),
        }
    }
    Cow::Owned(escaped)
}
