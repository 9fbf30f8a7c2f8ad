//! Size Model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Size name - small fixed vocabulary
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum SizeName {
    Personal,
    Medium,
    Large,
}

impl fmt::Display for SizeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SizeName::Personal => "Personal",
            SizeName::Medium => "Medium",
            SizeName::Large => "Large",
        };
        f.write_str(name)
    }
}

/// Size entity - pizza size with its price component
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Size {
    pub id: Option<String>,
    pub name: SizeName,
    /// Price component in currency unit
    pub price: f64,
}
