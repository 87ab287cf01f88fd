//! Composite figures built from shape primitives.

use crate::shapes::ObjectContainer;

/// A figure that renders itself by adding primitives to a container.
///
/// Drawables are never stored in a document; only the objects they emit are.
pub trait Drawable {
    fn draw(&self, container: &mut dyn ObjectContainer);
}

impl<T: Drawable + ?Sized> Drawable for &T {
    fn draw(&self, container: &mut dyn ObjectContainer) {
        (**self).draw(container);
    }
}

impl<T: Drawable + ?Sized> Drawable for Box<T> {
    fn draw(&self, container: &mut dyn ObjectContainer) {
        (**self).draw(container);
    }
}

/// Draw each figure into `target`, in iteration order.
pub fn draw_picture<I>(drawables: I, target: &mut dyn ObjectContainer)
where
    I: IntoIterator,
    I::Item: Drawable,
{
    for drawable in drawables {
        drawable.draw(target);
    }
}
