// Which sections the demo runs, and whether it prints headings.
// Built in code only; the binary always uses the default.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    Adapter,
    Bridge,
    Composite,
    Decorator,
}

impl Pattern {
    pub const ALL: [Pattern; 4] = [
        Pattern::Adapter,
        Pattern::Bridge,
        Pattern::Composite,
        Pattern::Decorator,
    ];
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Pattern::Adapter => "Adapter",
            Pattern::Bridge => "Bridge",
            Pattern::Composite => "Composite",
            Pattern::Decorator => "Decorator",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    /// Sections to run, in this order.
    pub sections: Vec<Pattern>,
    /// Print a heading line before each section.
    pub headings: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            sections: Pattern::ALL.to_vec(),
            headings: false,
        }
    }
}

impl DemoConfig {
    pub fn sections(mut self, sections: impl IntoIterator<Item = Pattern>) -> Self {
        self.sections = sections.into_iter().collect();
        self
    }

    pub fn headings(mut self, headings: bool) -> Self {
        self.headings = headings;
        self
    }
}
