//! Move list ordering.

use serde::{Deserialize, Serialize};

/// Order in which the move list is presented.
///
/// The labels follow the original board UI: `Descending` is the default and
/// lists history as recorded (game start first), `Ascending` reverses it so
/// the latest move comes first.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum DisplayOrder {
    /// Latest move first.
    Ascending,
    /// Game start first.
    #[default]
    Descending,
}

impl DisplayOrder {
    /// The other order.
    pub fn toggled(self) -> Self {
        match self {
            DisplayOrder::Ascending => DisplayOrder::Descending,
            DisplayOrder::Descending => DisplayOrder::Ascending,
        }
    }

    /// Sort button caption.
    pub fn label(self) -> &'static str {
        match self {
            DisplayOrder::Ascending => "Sort by: Ascending",
            DisplayOrder::Descending => "Sort by: Descending",
        }
    }

    /// Arranges items given oldest first.
    pub fn arrange<T>(self, mut items: Vec<T>) -> Vec<T> {
        if self == DisplayOrder::Ascending {
            items.reverse();
        }
        items
    }
}
