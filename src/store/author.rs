//! Author Record Module

// == Author ==
/// An author record. Posts reference exactly one author.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    /// Server-assigned identifier
    pub id: u64,
    /// Display name
    pub name: String,
}

impl Author {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
