use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[allow(dead_code)]
pub struct TextBounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl TextBounds {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

#[derive(Debug, Clone)]
#[allow(dead_code)]
pub struct DetectedWord {
    pub content: String,
    pub bounds: TextBounds,
}

impl DetectedWord {
    pub fn new(content: String, x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            content,
            bounds: TextBounds::new(x, y, width, height),
        }
    }
}

/// One region found by a detector. `content` is the recognized text of the
/// whole region; `words` keeps the per-word split when the engine provides it.
#[derive(Debug, Clone)]
#[allow(dead_code)]
pub struct DetectedText {
    pub content: String,
    pub bounds: TextBounds,
    pub confidence: f32,
    pub words: Vec<DetectedWord>,
}

impl DetectedText {
    pub fn new(
        content: String,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        confidence: f32,
        words: Vec<DetectedWord>,
    ) -> Self {
        Self {
            content,
            bounds: TextBounds::new(x, y, width, height),
            confidence,
            words,
        }
    }
}

/// Raw engine output. Region-based engines fill `text_blocks` in detection
/// order; plain-text engines leave it empty and only set `full_text`.
#[derive(Debug, Clone, Default)]
pub struct OcrResult {
    pub text_blocks: Vec<DetectedText>,
    pub full_text: String,
}

impl OcrResult {
    pub fn from_plain_text(full_text: String) -> Self {
        Self {
            text_blocks: vec![],
            full_text,
        }
    }

    pub fn from_text_blocks(text_blocks: Vec<DetectedText>) -> Self {
        let full_text = text_blocks
            .iter()
            .map(|block| block.content.as_str())
            .collect::<Vec<_>>()
            .join("\n");

        Self {
            text_blocks,
            full_text,
        }
    }

    pub fn joined_block_text(&self) -> String {
        self.text_blocks
            .iter()
            .map(|block| block.content.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
