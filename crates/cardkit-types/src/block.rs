use serde::{Deserialize, Serialize};

/// A labeled key-value pair rendered inside a fact set. The builder drops
/// empty values before a `Fact` is ever constructed, so `value` is non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fact {
    pub title: String,
    pub value: String,
}

impl Fact {
    pub fn new(title: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
        }
    }
}

/// One renderable unit of a card body, top-to-bottom.
///
/// The set is closed: renderers match exhaustively and map each variant onto
/// whatever wire element their client expects. Styling is a function of the
/// variant (see [`DisplayBlock::size`] and friends), so variants carry only
/// the content that differs per block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DisplayBlock {
    /// Card title, one per card.
    Header { text: String },
    /// Small body text: the summary subtitle or a free-text/error body.
    TextBlock { text: String },
    /// Key-value list; entries survive only with non-empty values.
    FactSet { facts: Vec<Fact> },
    /// One table row. `header` rows carry the column names.
    Row { cells: Vec<String>, header: bool },
    /// Footer metadata line (environment, project, host, timestamp).
    Footer { text: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextSize {
    Small,
    Medium,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextWeight {
    Default,
    Bolder,
}

/// Vertical spacing before a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Spacing {
    Small,
    Default,
    ExtraLarge,
}

impl DisplayBlock {
    pub fn size(&self) -> TextSize {
        match self {
            DisplayBlock::Header { .. } => TextSize::Medium,
            DisplayBlock::TextBlock { .. }
            | DisplayBlock::FactSet { .. }
            | DisplayBlock::Row { .. }
            | DisplayBlock::Footer { .. } => TextSize::Small,
        }
    }

    pub fn weight(&self) -> TextWeight {
        match self {
            DisplayBlock::Header { .. } | DisplayBlock::Row { header: true, .. } => {
                TextWeight::Bolder
            }
            _ => TextWeight::Default,
        }
    }

    pub fn spacing(&self) -> Spacing {
        match self {
            DisplayBlock::Row { header: true, .. } => Spacing::ExtraLarge,
            DisplayBlock::Footer { .. } => Spacing::Small,
            _ => Spacing::Default,
        }
    }

    /// Subtle blocks render dimmed.
    pub fn is_subtle(&self) -> bool {
        matches!(self, DisplayBlock::Footer { .. })
    }
}
