// Drives the four units in a fixed order.

use colored::Colorize;
use std::io::Write;

use crate::adapter::{Circle, Rectangle, Triangle, TriangleAdapter};
use crate::bridge::{CircleShape, DrawingApi1, DrawingApi2};
use crate::composite::{CompositeGraphic, Ellipse};
use crate::config::{DemoConfig, Pattern};
use crate::decorator::RedShapeDecorator;
use crate::error::Result;
use crate::Drawable;

fn adapter_example(out: &mut dyn Write, circle: &Circle) -> Result<()> {
    let rectangle = Rectangle;
    let triangle = TriangleAdapter::new(Triangle);

    rectangle.draw(out)?;
    circle.draw(out)?;
    triangle.draw(out)?;
    Ok(())
}

fn bridge_example(out: &mut dyn Write) -> Result<()> {
    let circle1 = CircleShape::new(DrawingApi1);
    let circle2 = CircleShape::new(DrawingApi2);

    circle1.draw(out)?;
    circle2.draw(out)?;
    Ok(())
}

fn composite_example(out: &mut dyn Write) -> Result<()> {
    let mut composite = CompositeGraphic::new();
    composite.add(Ellipse);
    composite.add(Ellipse);

    composite.draw(out)?;
    Ok(())
}

fn decorator_example(out: &mut dyn Write, circle: &Circle) -> Result<()> {
    let decorated = RedShapeDecorator::new(circle);
    decorated.draw(out)?;
    Ok(())
}

/// Runs the fixed sequence: every section in order, no headings.
pub fn run_default(out: &mut dyn Write) -> Result<()> {
    run(out, &DemoConfig::default())
}

/// Runs the configured sections, writing every line to `out`.
pub fn run(out: &mut dyn Write, config: &DemoConfig) -> Result<()> {
    // Shared between the adapter and decorator sections.
    let circle = Circle;

    for &pattern in &config.sections {
        if config.headings {
            writeln!(out, "{}", format!("=== {} Pattern ===", pattern).bold())?;
        }

        match pattern {
            Pattern::Adapter => adapter_example(out, &circle)?,
            Pattern::Bridge => bridge_example(out)?,
            Pattern::Composite => composite_example(out)?,
            Pattern::Decorator => decorator_example(out, &circle)?,
        }

        if config.headings {
            writeln!(out)?;
        }
    }

    out.flush()?;
    Ok(())
}
