// SPDX-License-Identifier: Apache-2.0

use alloc::string::String;
use alloc::vec::Vec;

const SEPARATOR: char = '.';

/// The path segments of the containers currently open, outermost first.
///
/// The dotted prefix is kept alongside the segments so that
/// [`current_path`](Self::current_path) never has to re-join them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HierarchyStack {
    /// Every segment followed by a separator, e.g. `"a.b."`
    prefix: String,
    /// Length of `prefix` before each segment was pushed
    marks: Vec<usize>,
}

impl HierarchyStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a new level named `segment`.
    pub fn push(&mut self, segment: &str) {
        self.marks.push(self.prefix.len());
        self.prefix.push_str(segment);
        self.prefix.push(SEPARATOR);
    }

    /// Closes the innermost level and returns its segment.
    ///
    /// Returns `None` when there is no level left to close, meaning the
    /// walk is back at the document root.
    pub fn pop(&mut self) -> Option<String> {
        let mark = self.marks.pop()?;
        let mut segment = self.prefix.split_off(mark);
        segment.pop();
        Some(segment)
    }

    /// All open segments joined with `.`, with a trailing `.` unless empty.
    pub fn current_path(&self) -> &str {
        &self.prefix
    }

    pub fn depth(&self) -> usize {
        self.marks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Iterates the open segments, outermost first.
    pub fn segments(&self) -> impl Iterator<Item = &str> + '_ {
        self.marks.iter().enumerate().map(move |(i, &start)| {
            let end = self
                .marks
                .get(i + 1)
                .copied()
                .unwrap_or(self.prefix.len());
            &self.prefix[start..end - SEPARATOR.len_utf8()]
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_stack() {
        let mut stack = HierarchyStack::new();
        assert!(stack.is_empty());
        assert_eq!(stack.current_path(), "");
        assert_eq!(stack.pop(), None);
        assert_eq!(stack.depth(), 0);
    }

    #[test]
    fn test_push_pop_lifo() {
        let mut stack = HierarchyStack::new();
        stack.push("a");
        stack.push("bb");
        stack.push("c");
        assert_eq!(stack.depth(), 3);
        assert_eq!(stack.current_path(), "a.bb.c.");

        assert_eq!(stack.pop().as_deref(), Some("c"));
        assert_eq!(stack.current_path(), "a.bb.");
        assert_eq!(stack.pop().as_deref(), Some("bb"));
        assert_eq!(stack.pop().as_deref(), Some("a"));
        assert_eq!(stack.current_path(), "");
        assert_eq!(stack.pop(), None);
    }

    #[test]
    fn test_segments_may_contain_dots() {
        let mut stack = HierarchyStack::new();
        stack.push("x.y");
        stack.push("");
        stack.push("z");
        assert_eq!(stack.current_path(), "x.y..z.");
        assert_eq!(stack.segments().collect::<Vec<_>>(), ["x.y", "", "z"]);
        assert_eq!(stack.pop().as_deref(), Some("z"));
        assert_eq!(stack.pop().as_deref(), Some(""));
        assert_eq!(stack.current_path(), "x.y.");
    }

    #[test]
    fn test_pop_after_empty_is_harmless() {
        let mut stack = HierarchyStack::new();
        assert_eq!(stack.pop(), None);
        stack.push("a");
        assert_eq!(stack.current_path(), "a.");
    }
}
