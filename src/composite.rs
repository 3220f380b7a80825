// Composite: a group draws like a single item.

use std::io::{self, Write};

use crate::Drawable;

#[derive(Debug, Default, Clone, Copy)]
pub struct Ellipse;

impl Drawable for Ellipse {
    fn draw(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Ellipse")
    }
}

/// Owns its children and draws them in insertion order after a header line.
#[derive(Default)]
pub struct CompositeGraphic {
    children: Vec<Box<dyn Drawable>>,
}

impl CompositeGraphic {
    pub fn new() -> Self {
        Self::default()
    }

    // Taking the child by value rules out adding a composite to itself.
    pub fn add(&mut self, graphic: impl Drawable + 'static) {
        self.children.push(Box::new(graphic));
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Children in insertion order.
    pub fn children(&self) -> impl Iterator<Item = &dyn Drawable> {
        self.children.iter().map(|child| child.as_ref() as &dyn Drawable)
    }
}

impl Drawable for CompositeGraphic {
    fn draw(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Composite:")?;
        for child in &self.children {
            child.draw(out)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::{Circle, Rectangle};
    use crate::render_to_string;
    use proptest::prelude::*;

    #[test]
    fn test_empty_composite_draws_header_only() {
        let composite = CompositeGraphic::new();
        assert!(composite.is_empty());
        assert_eq!(render_to_string(&composite).unwrap(), "Composite:\n");
    }

    #[test]
    fn test_two_ellipses() {
        let mut composite = CompositeGraphic::new();
        composite.add(Ellipse);
        composite.add(Ellipse);

        assert_eq!(composite.len(), 2);
        assert_eq!(
            render_to_string(&composite).unwrap(),
            "Composite:\nEllipse\nEllipse\n"
        );
    }

    #[test]
    fn test_nested_composite() {
        let mut inner = CompositeGraphic::new();
        inner.add(Ellipse);

        let mut outer = CompositeGraphic::new();
        outer.add(Rectangle);
        outer.add(inner);
        outer.add(Circle);

        assert_eq!(
            render_to_string(&outer).unwrap(),
            "Composite:\nDrawing a Rectangle\nComposite:\nEllipse\nDrawing a Circle\n"
        );
    }

    #[test]
    fn test_children_in_insertion_order() {
        let mut composite = CompositeGraphic::new();
        composite.add(Circle);
        composite.add(Ellipse);

        let drawn: Vec<String> = composite
            .children()
            .map(|child| render_to_string(child).unwrap())
            .collect();
        assert_eq!(drawn, vec!["Drawing a Circle\n", "Ellipse\n"]);
    }

    // true -> Ellipse, false -> Rectangle
    proptest! {
        #[test]
        fn test_header_then_children_in_order(kinds in prop::collection::vec(any::<bool>(), 0..20)) {
            let mut composite = CompositeGraphic::new();
            let mut expected = String::from("Composite:\n");

            for &is_ellipse in &kinds {
                if is_ellipse {
                    composite.add(Ellipse);
                    expected.push_str(&render_to_string(&Ellipse).unwrap());
                } else {
                    composite.add(Rectangle);
                    expected.push_str(&render_to_string(&Rectangle).unwrap());
                }
            }

            prop_assert_eq!(composite.len(), kinds.len());
            prop_assert_eq!(render_to_string(&composite).unwrap(), expected);
        }
    }
}
