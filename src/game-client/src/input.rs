use std::{collections::VecDeque, io};

use serde::{Deserialize, Serialize};

use crate::layout::Point;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Space,
    Other,
}

/// Everything the player did during one tick.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct InputBatch {
    /// Pointer releases in the order they happened.
    #[serde(default)]
    pub releases: Vec<Point>,
    /// Keys down during the tick.
    #[serde(default)]
    pub keys: Vec<Key>,
    #[serde(default)]
    pub quit: bool,
}

impl InputBatch {
    pub fn click(at: Point) -> Self {
        InputBatch {
            releases: vec![at],
            ..Default::default()
        }
    }

    pub fn key(key: Key) -> Self {
        InputBatch {
            keys: vec![key],
            ..Default::default()
        }
    }

    pub fn quit() -> Self {
        InputBatch {
            quit: true,
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.releases.is_empty() && self.keys.is_empty() && !self.quit
    }
}

pub trait InputSource {
    /// Collects input since the previous call without blocking.
    fn poll(&mut self) -> io::Result<InputBatch>;
}

/// Hands out prepared batches, then asks to quit once they run out.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    batches: VecDeque<InputBatch>,
    polled: usize,
}

impl ScriptedInput {
    pub fn new(batches: impl IntoIterator<Item = InputBatch>) -> Self {
        ScriptedInput {
            batches: batches.into_iter().collect(),
            polled: 0,
        }
    }

    pub fn polled(&self) -> usize {
        self.polled
    }

    pub fn remaining(&self) -> usize {
        self.batches.len()
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> io::Result<InputBatch> {
        self.polled += 1;
        Ok(self.batches.pop_front().unwrap_or_else(InputBatch::quit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_ends_with_quit() {
        let mut input = ScriptedInput::new([InputBatch::key(Key::Enter), InputBatch::default()]);
        assert_eq!(input.poll().unwrap(), InputBatch::key(Key::Enter));
        assert!(input.poll().unwrap().is_empty());
        assert!(input.poll().unwrap().quit);
        assert!(input.poll().unwrap().quit);
        assert_eq!(input.polled(), 4);
        assert_eq!(input.remaining(), 0);
    }

    #[test]
    fn batches_deserialize_with_defaults() {
        let batch: InputBatch =
            serde_json::from_str(r#"{"releases": [{"x": 3, "y": 4}]}"#).unwrap();
        assert_eq!(batch, InputBatch::click(Point::new(3, 4)));
    }
}
