use crate::block::DisplayBlock;
use serde::{Deserialize, Serialize};

/// Adaptive Card schema version every client we target understands.
pub const SCHEMA_VERSION: SchemaVersion = SchemaVersion { major: 1, minor: 2 };

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaVersion {
    pub major: u8,
    pub minor: u8,
}

/// MS Teams vendor extension. Lower-case `width` is the property name Teams
/// expects on the wire; "Full" stretches the card across the channel pane.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsTeamsProps {
    pub width: String,
}

impl Default for MsTeamsProps {
    fn default() -> Self {
        Self {
            width: "Full".to_string(),
        }
    }
}

/// The complete payload for one build call: fixed metadata plus an ordered
/// body of display blocks.
///
/// The body is append-only. Blocks are pushed in visual top-to-bottom order
/// and are never removed or reordered once appended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub schema: SchemaVersion,
    pub msteams: MsTeamsProps,
    pub body: Vec<DisplayBlock>,
}

impl Card {
    pub fn new() -> Self {
        Self {
            schema: SCHEMA_VERSION,
            msteams: MsTeamsProps::default(),
            body: Vec::new(),
        }
    }

    pub fn push(&mut self, block: DisplayBlock) {
        self.body.push(block);
    }

    pub fn blocks(&self) -> &[DisplayBlock] {
        &self.body
    }
}

impl Default for Card {
    fn default() -> Self {
        Self::new()
    }
}
