// Structural Patterns: Adapter, Bridge, Composite, Decorator
// Each unit is independent; `demo::run` drives them in a fixed order.

use std::io::{self, Write};

pub mod adapter;
pub mod bridge;
pub mod composite;
pub mod config;
pub mod decorator;
pub mod demo;
pub mod error;

pub use config::{DemoConfig, Pattern};
pub use error::{DemoError, Result};

/// Anything that can draw itself as lines of text into a sink.
pub trait Drawable {
    fn draw(&self, out: &mut dyn Write) -> io::Result<()>;
}

impl<T: Drawable + ?Sized> Drawable for Box<T> {
    fn draw(&self, out: &mut dyn Write) -> io::Result<()> {
        (**self).draw(out)
    }
}

/// Draws into a buffer and returns the text. Non-UTF-8 output is an error.
pub fn render_to_string(item: &dyn Drawable) -> Result<String> {
    let mut buf = Vec::new();
    item.draw(&mut buf)?;
    Ok(String::from_utf8(buf)?)
}
