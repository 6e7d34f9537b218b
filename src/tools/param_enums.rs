use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display};

/// Axis of a row/column span. Serialized with the backend's enum names.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum, Display, AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "lowercase")]
pub enum Dimension {
    #[value(alias = "row")]
    Rows,
    #[value(alias = "cols", alias = "column", alias = "col")]
    Columns,
}

impl Dimension {
    pub fn is_rows(self) -> bool {
        matches!(self, Self::Rows)
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    ValueEnum,
    Display,
    AsRefStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum MergeType {
    #[default]
    #[serde(rename = "MERGE_ALL")]
    All,
    #[serde(rename = "MERGE_COLUMNS")]
    Columns,
    #[serde(rename = "MERGE_ROWS")]
    Rows,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    ValueEnum,
    Display,
    AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "lowercase")]
pub enum SortOrder {
    #[default]
    #[value(alias = "asc")]
    Ascending,
    #[value(alias = "desc")]
    Descending,
}

impl SortOrder {
    pub fn from_descending(descending: bool) -> Self {
        if descending {
            Self::Descending
        } else {
            Self::Ascending
        }
    }
}

/// Where a find/replace runs. There is deliberately no cell-range variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FindReplaceScope {
    AllSheets,
    Sheet(i64),
}
