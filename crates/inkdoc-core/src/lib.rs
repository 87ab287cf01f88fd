//! inkdoc Core Library
//!
//! An in-memory SVG object model: shapes, composite drawables and a document
//! that renders them as SVG 1.1 markup.

pub mod color;
pub mod document;
pub mod drawable;
pub mod render;
pub mod shapes;

pub use color::{Color, Rgb, Rgba};
pub use document::{Document, RenderError};
pub use drawable::{Drawable, draw_picture};
pub use kurbo::Point;
pub use render::{RenderConfig, RenderContext};
pub use shapes::{
    Circle, Object, ObjectContainer, ObjectContainerExt, Polyline, ShapeStyle, StrokeLineCap,
    StrokeLineJoin, Styled, Text,
};
