//! The fixed demo picture.

use crate::figures::{Snowman, Star, Triangle};
use inkdoc_core::{
    Document, Drawable, ObjectContainerExt, Point, StrokeLineCap, StrokeLineJoin, Styled, Text,
    draw_picture,
};

/// Figures drawn before the greeting, back to front.
pub fn figures() -> Vec<Box<dyn Drawable>> {
    vec![
        Box::new(Triangle::new(
            Point::new(100.0, 20.0),
            Point::new(120.0, 50.0),
            Point::new(80.0, 40.0),
        )),
        Box::new(Star::new(Point::new(50.0, 20.0), 10.0, 4.0, 5)),
        Box::new(Snowman::new(Point::new(30.0, 20.0), 10.0)),
    ]
}

/// Build the demo document: figures, then a greeting with a yellow underlay.
pub fn build_picture() -> Document {
    let mut doc = Document::new();
    draw_picture(figures(), &mut doc);

    let base_text = Text::new()
        .with_font_family("Verdana")
        .with_font_size(12)
        .with_position((10.0, 100.0))
        .with_data("Happy New Year!");
    doc.add(
        base_text
            .clone()
            .with_stroke_color("yellow")
            .with_fill_color("yellow")
            .with_stroke_line_join(StrokeLineJoin::Round)
            .with_stroke_line_cap(StrokeLineCap::Round)
            .with_stroke_width(3.0),
    );
    doc.add(base_text.with_fill_color("red"));
    doc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_picture_object_count() {
        // triangle + star + three snowman circles + two texts
        assert_eq!(build_picture().len(), 7);
    }

    #[test]
    fn test_picture_order_and_framing() {
        let output = build_picture().render_to_string().unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "<?xml version=\"1.0\" encoding=\"UTF-8\" ?>");
        assert!(lines[2].starts_with("  <polyline points=\"100,20 120,50 80,40 100,20\""));
        assert!(lines[3].starts_with("  <polyline points=\"50,10 "));
        assert!(lines[4].starts_with("  <circle cx=\"30\" cy=\"70\" r=\"20\""));
        assert!(lines[6].starts_with("  <circle cx=\"30\" cy=\"20\" r=\"10\""));
        assert_eq!(
            lines[7],
            "  <text x=\"10\" y=\"100\" dx=\"0\" dy=\"0\" font-size=\"12\" font-family=\"Verdana\" \
             fill=\"yellow\" stroke=\"yellow\" stroke-width=\"3\" stroke-linecap=\"round\" \
             stroke-linejoin=\"round\">Happy New Year!</text>"
        );
        assert_eq!(
            lines[8],
            "  <text x=\"10\" y=\"100\" dx=\"0\" dy=\"0\" font-size=\"12\" font-family=\"Verdana\" \
             fill=\"red\">Happy New Year!</text>"
        );
        assert_eq!(lines[9], "</svg>");
    }
}
