// Bridge: shapes on one side, drawing backends on the other.
// Any shape pairs with any backend without either knowing the other's type.

use std::io::{self, Write};

use crate::Drawable;

// ============================================================================
// Implementation side
// ============================================================================

/// Backend side of the bridge: renders the rest of a shape's line.
pub trait DrawingApi {
    fn draw_shape(&self, out: &mut dyn Write) -> io::Result<()>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct DrawingApi1;

impl DrawingApi for DrawingApi1 {
    fn draw_shape(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Using DrawingAPI1 to draw")
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct DrawingApi2;

impl DrawingApi for DrawingApi2 {
    fn draw_shape(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Using DrawingAPI2 to draw")
    }
}

// ============================================================================
// Abstraction side
// ============================================================================

/// A shape that hands the actual drawing to its backend.
pub trait BridgeShape {
    fn name(&self) -> &str;
    fn api(&self) -> &dyn DrawingApi;

    /// Writes `"<name> "` and lets the backend finish the line.
    fn draw_with_api(&self, out: &mut dyn Write) -> io::Result<()> {
        write!(out, "{} ", self.name())?;
        self.api().draw_shape(out)
    }
}

pub struct CircleShape {
    api: Box<dyn DrawingApi>,
}

impl CircleShape {
    pub fn new(api: impl DrawingApi + 'static) -> Self {
        Self { api: Box::new(api) }
    }
}

impl BridgeShape for CircleShape {
    fn name(&self) -> &str {
        "Circle"
    }

    fn api(&self) -> &dyn DrawingApi {
        self.api.as_ref()
    }
}

impl Drawable for CircleShape {
    fn draw(&self, out: &mut dyn Write) -> io::Result<()> {
        self.draw_with_api(out)
    }
}

pub struct SquareShape {
    api: Box<dyn DrawingApi>,
}

impl SquareShape {
    pub fn new(api: impl DrawingApi + 'static) -> Self {
        Self { api: Box::new(api) }
    }
}

impl BridgeShape for SquareShape {
    fn name(&self) -> &str {
        "Square"
    }

    fn api(&self) -> &dyn DrawingApi {
        self.api.as_ref()
    }
}

impl Drawable for SquareShape {
    fn draw(&self, out: &mut dyn Write) -> io::Result<()> {
        self.draw_with_api(out)
    }
}
