use std::io;

use crate::layout::{Point, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Accent,
    Good,
    Bad,
}

/// Surface the scenes describe each frame on.
pub trait RenderSink {
    fn clear(&mut self) -> io::Result<()>;

    /// Draws `text` horizontally centred on `at`.
    fn text(&mut self, at: Point, text: &str, tone: Tone) -> io::Result<()>;

    /// Draws a clickable element with a label.
    fn region(&mut self, rect: Rect, label: &str) -> io::Result<()>;

    fn present(&mut self) -> io::Result<()>;
}

/// Keeps the text of each presented frame.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pending: Vec<String>,
    frames: Vec<Vec<String>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> &[Vec<String>] {
        &self.frames
    }

    pub fn last_frame(&self) -> Option<&[String]> {
        self.frames.last().map(Vec::as_slice)
    }

    pub fn last_frame_contains(&self, needle: &str) -> bool {
        self.last_frame()
            .is_some_and(|frame| frame.iter().any(|line| line.contains(needle)))
    }
}

impl RenderSink for RecordingSink {
    fn clear(&mut self) -> io::Result<()> {
        self.pending.clear();
        Ok(())
    }

    fn text(&mut self, _at: Point, text: &str, _tone: Tone) -> io::Result<()> {
        self.pending.push(text.to_owned());
        Ok(())
    }

    fn region(&mut self, _rect: Rect, label: &str) -> io::Result<()> {
        self.pending.push(format!("[{label}]"));
        Ok(())
    }

    fn present(&mut self) -> io::Result<()> {
        self.frames.push(std::mem::take(&mut self.pending));
        Ok(())
    }
}
