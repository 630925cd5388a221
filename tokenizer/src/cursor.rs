// SPDX-License-Identifier: Apache-2.0

/// A byte offset into the text being tokenized.
///
/// Cursors are plain values: tokenizer operations take one and hand back a
/// new one, so the caller always owns the current position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Cursor(usize);

impl Cursor {
    /// The beginning of the input.
    pub const fn start() -> Self {
        Cursor(0)
    }

    pub const fn at(pos: usize) -> Self {
        Cursor(pos)
    }

    pub const fn pos(self) -> usize {
        self.0
    }

    /// Returns a cursor `n` bytes further along.
    pub const fn advance(self, n: usize) -> Self {
        Cursor(self.0.saturating_add(n))
    }
}
