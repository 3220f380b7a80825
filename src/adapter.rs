// Adapter: give a foreign `display` method the `Drawable` shape.

use std::io::{self, Write};

use crate::Drawable;

// ============================================================================
// Native shapes: already speak `Drawable`
// ============================================================================

#[derive(Debug, Default, Clone, Copy)]
pub struct Rectangle;

impl Drawable for Rectangle {
    fn draw(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Drawing a Rectangle")
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Circle;

impl Drawable for Circle {
    fn draw(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Drawing a Circle")
    }
}

// ============================================================================
// Incompatible shape and its adapter
// ============================================================================

/// Legacy shape with its own method name.
#[derive(Debug, Default, Clone, Copy)]
pub struct Triangle;

impl Triangle {
    pub fn display(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Displaying a Triangle")
    }
}

#[derive(Debug)]
pub struct TriangleAdapter {
    triangle: Triangle,
}

impl TriangleAdapter {
    pub fn new(triangle: Triangle) -> Self {
        Self { triangle }
    }
}

impl Drawable for TriangleAdapter {
    fn draw(&self, out: &mut dyn Write) -> io::Result<()> {
        self.triangle.display(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render_to_string;

    #[test]
    fn test_rectangle() {
        assert_eq!(render_to_string(&Rectangle).unwrap(), "Drawing a Rectangle\n");
    }

    #[test]
    fn test_circle() {
        assert_eq!(render_to_string(&Circle).unwrap(), "Drawing a Circle\n");
    }

    #[test]
    fn test_adapter_matches_native_display() {
        let mut native = Vec::new();
        Triangle.display(&mut native).unwrap();

        let adapter = TriangleAdapter::new(Triangle);
        let adapted = render_to_string(&adapter).unwrap();

        assert_eq!(adapted.as_bytes(), native.as_slice());
        assert_eq!(adapted, "Displaying a Triangle\n");
    }

    #[test]
    fn test_adapter_as_trait_object() {
        let shapes: Vec<Box<dyn Drawable>> = vec![
            Box::new(Rectangle),
            Box::new(Circle),
            Box::new(TriangleAdapter::new(Triangle)),
        ];

        let mut out = Vec::new();
        for shape in &shapes {
            shape.draw(&mut out).unwrap();
        }

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Drawing a Rectangle\nDrawing a Circle\nDisplaying a Triangle\n"
        );
    }
}
