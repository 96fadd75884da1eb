use crate::{geo::*, id::*};

/// A point of interest.
///
/// Places are immutable once they have been fetched.
#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    pub id: Id,
    /// Display name, not unique.
    pub name: String,
    pub pos: MapPoint,
    pub address: Option<String>,
}

impl Place {
    /// The first character of the name, used as marker label.
    pub fn label(&self) -> Option<char> {
        self.name.trim_start().chars().next()
    }
}
