use serde::{Deserialize, Serialize};

/// Cyclic cursor over a visiting order of a given length.
///
/// Starts unselected. `next` and `prev` wrap around in their respective
/// directions; from the unselected state `next` lands on the first position
/// and `prev` on the last one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cursor {
    pos: Option<usize>,
}

impl Cursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current position, or `None` if unselected or out of `len`.
    pub fn current(&self, len: usize) -> Option<usize> {
        self.pos.filter(|&p| p < len)
    }

    pub fn set(&mut self, pos: usize) {
        self.pos = Some(pos);
    }

    pub fn clear(&mut self) {
        self.pos = None;
    }

    pub fn next(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            self.pos = None;
            return None;
        }
        let next = match self.pos {
            Some(p) if p + 1 < len => p + 1,
            _ => 0,
        };
        self.pos = Some(next);
        Some(next)
    }

    pub fn prev(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            self.pos = None;
            return None;
        }
        let prev = match self.pos {
            Some(p) if p > 0 && p < len => p - 1,
            _ => len - 1,
        };
        self.pos = Some(prev);
        Some(prev)
    }
}
