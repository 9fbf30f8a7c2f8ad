//! Status Model
//!
//! Statuses are administered as catalog records, but their names form the
//! fixed vocabulary the order status machine reasons over.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Status name - fixed order lifecycle vocabulary
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum StatusName {
    Pending,
    Preparing,
    Done,
    #[serde(rename = "On the way")]
    OnTheWay,
    Delivered,
    Cancelled,
}

impl StatusName {
    /// Display name as stored in status records
    pub const fn as_str(&self) -> &'static str {
        match self {
            StatusName::Pending => "Pending",
            StatusName::Preparing => "Preparing",
            StatusName::Done => "Done",
            StatusName::OnTheWay => "On the way",
            StatusName::Delivered => "Delivered",
            StatusName::Cancelled => "Cancelled",
        }
    }

    /// Parse a status name as stored in status records
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "Pending" => Some(StatusName::Pending),
            "Preparing" => Some(StatusName::Preparing),
            "Done" => Some(StatusName::Done),
            "On the way" => Some(StatusName::OnTheWay),
            "Delivered" => Some(StatusName::Delivered),
            "Cancelled" => Some(StatusName::Cancelled),
            _ => None,
        }
    }

    /// Terminal states accept no further transitions
    pub const fn is_terminal(&self) -> bool {
        matches!(self, StatusName::Delivered | StatusName::Cancelled)
    }
}

impl fmt::Display for StatusName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Status {
    pub id: Option<String>,
    pub name: StatusName,
    pub description: String,
}
