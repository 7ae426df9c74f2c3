use std::fmt::{Display, Formatter, Result};

/// Dotted path of field names from the schema root, used in error messages.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldPath(Vec<String>);

impl FieldPath {
    pub fn new(root: impl Into<String>) -> Self {
        Self(vec![root.into()])
    }

    /// Path extended by one segment.
    pub fn child(&self, name: impl Into<String>) -> Self {
        let mut segments = self.0.clone();
        segments.push(name.into());
        Self(segments)
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Number of segments below the root.
    pub fn depth(&self) -> usize {
        self.0.len().saturating_sub(1)
    }
}

impl Display for FieldPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "[{}]", self.0.join("."))
    }
}
