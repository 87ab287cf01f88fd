//! Composite figures used by the demo picture.

use inkdoc_core::{
    Circle, Color, Drawable, ObjectContainer, ObjectContainerExt, Point, Polyline, Rgb, Styled,
};
use kurbo::Vec2;
use std::f64::consts::PI;

/// Build a star polyline, alternating outer and inner vertices.
///
/// The first vertex points straight up and is repeated at the end to close
/// the outline.
pub fn create_star(center: Point, outer_radius: f64, inner_radius: f64, num_rays: u32) -> Polyline {
    // Unit vector at `angle` clockwise from "up" in SVG coordinates.
    let direction = |angle: f64| Vec2::new(angle.sin(), -angle.cos());

    let mut polyline = Polyline::new();
    if num_rays == 0 {
        return polyline;
    }
    let rays = f64::from(num_rays);
    for i in 0..num_rays {
        let angle = 2.0 * PI * f64::from(i) / rays;
        polyline = polyline
            .with_point(center + direction(angle) * outer_radius)
            .with_point(center + direction(angle + PI / rays) * inner_radius);
    }
    polyline.with_point(center + direction(0.0) * outer_radius)
}

/// A closed triangle drawn as a single polyline.
#[derive(Debug, Clone, Copy)]
pub struct Triangle {
    vertices: [Point; 3],
}

impl Triangle {
    pub fn new(p1: Point, p2: Point, p3: Point) -> Self {
        Self {
            vertices: [p1, p2, p3],
        }
    }
}

impl Drawable for Triangle {
    fn draw(&self, container: &mut dyn ObjectContainer) {
        let [p1, p2, p3] = self.vertices;
        container.add(
            Polyline::new()
                .with_point(p1)
                .with_point(p2)
                .with_point(p3)
                .with_point(p1),
        );
    }
}

/// A star with a red fill and black outline.
#[derive(Debug, Clone)]
pub struct Star {
    pub center: Point,
    pub outer_radius: f64,
    pub inner_radius: f64,
    pub num_rays: u32,
    pub fill_color: Color,
    pub stroke_color: Color,
}

impl Star {
    pub fn new(center: Point, outer_radius: f64, inner_radius: f64, num_rays: u32) -> Self {
        Self {
            center,
            outer_radius,
            inner_radius,
            num_rays,
            fill_color: "red".into(),
            stroke_color: "black".into(),
        }
    }
}

impl Drawable for Star {
    fn draw(&self, container: &mut dyn ObjectContainer) {
        container.add(
            create_star(self.center, self.outer_radius, self.inner_radius, self.num_rays)
                .with_fill_color(self.fill_color.clone())
                .with_stroke_color(self.stroke_color.clone()),
        );
    }
}

/// Three stacked circles, drawn bottom to top so the head ends up on top.
#[derive(Debug, Clone)]
pub struct Snowman {
    /// Center of the head.
    pub head_center: Point,
    /// Radius of the head.
    pub head_radius: f64,
    pub fill_color: Color,
    pub stroke_color: Color,
}

impl Snowman {
    pub fn new(head_center: Point, head_radius: f64) -> Self {
        Self {
            head_center,
            head_radius,
            fill_color: Rgb::new(240, 240, 240).into(),
            stroke_color: "black".into(),
        }
    }
}

impl Drawable for Snowman {
    fn draw(&self, container: &mut dyn ObjectContainer) {
        let r = self.head_radius;
        // (vertical offset of the center, radius), in multiples of the head radius
        for (dy, scale) in [(5.0, 2.0), (2.0, 1.5), (0.0, 1.0)] {
            container.add(
                Circle::new()
                    .with_center(self.head_center + Vec2::new(0.0, dy * r))
                    .with_radius(scale * r)
                    .with_fill_color(self.fill_color.clone())
                    .with_stroke_color(self.stroke_color.clone()),
            );
        }
    }
}
