// Decorator: wrap a borrowed `Drawable` and add output around it.
// The wrapped item is not owned, so it stays usable on its own.

use std::io::{self, Write};

use crate::Drawable;

/// Identity decorator. Forwards to the wrapped item unchanged.
#[derive(Clone, Copy)]
pub struct ShapeDecorator<'a> {
    decorated: &'a dyn Drawable,
}

impl<'a> ShapeDecorator<'a> {
    pub fn new(decorated: &'a dyn Drawable) -> Self {
        Self { decorated }
    }

    pub fn decorated(&self) -> &'a dyn Drawable {
        self.decorated
    }
}

impl Drawable for ShapeDecorator<'_> {
    fn draw(&self, out: &mut dyn Write) -> io::Result<()> {
        self.decorated.draw(out)
    }
}

/// Draws the wrapped item, then a red border line.
#[derive(Clone, Copy)]
pub struct RedShapeDecorator<'a> {
    base: ShapeDecorator<'a>,
}

impl<'a> RedShapeDecorator<'a> {
    pub fn new(decorated: &'a dyn Drawable) -> Self {
        Self {
            base: ShapeDecorator::new(decorated),
        }
    }

    pub fn decorated(&self) -> &'a dyn Drawable {
        self.base.decorated()
    }
}

impl Drawable for RedShapeDecorator<'_> {
    fn draw(&self, out: &mut dyn Write) -> io::Result<()> {
        self.base.draw(out)?;
        writeln!(out, "Border Color: Red")
    }
}
