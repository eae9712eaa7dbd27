//! Presentation order of the move list.

use serde::{Deserialize, Serialize};

/// Order in which the move list is shown.
///
/// Pure presentation state. It never affects the history itself.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SortOrder {
    /// Game start first.
    #[default]
    Ascending,
    /// Latest move first.
    Descending,
}

impl SortOrder {
    /// Flips between `Ascending` and `Descending`.
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Label for the control that switches to the other order.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Ascending => "Sort descending",
            Self::Descending => "Sort ascending",
        }
    }
}
