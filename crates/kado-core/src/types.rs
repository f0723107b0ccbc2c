use serde::{Deserialize, Serialize};

/// A single word-list record. No fixed schema, handlers pick the fields they need.
pub type WordEntry = serde_json::Value;

/// Card dimensions in pixels, stored on disk as `[width, height]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardSize(pub u32, pub u32);

impl CardSize {
    pub fn width(&self) -> u32 {
        self.0
    }

    pub fn height(&self) -> u32 {
        self.1
    }
}

impl Default for CardSize {
    fn default() -> Self {
        Self(432, 540)
    }
}

impl From<(u32, u32)> for CardSize {
    fn from((width, height): (u32, u32)) -> Self {
        Self(width, height)
    }
}
