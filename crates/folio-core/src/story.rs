//! Story chapter navigation.

/// Position within the story's chapters.
///
/// Stepping forward or back wraps around at both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChapterCursor {
    index: usize,
    len: usize,
}

impl ChapterCursor {
    /// Cursor on the first of `len` chapters.
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn next_chapter(&mut self) -> usize {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
        self.index
    }

    pub fn prev_chapter(&mut self) -> usize {
        if self.len > 0 {
            self.index = if self.index == 0 {
                self.len - 1
            } else {
                self.index - 1
            };
        }
        self.index
    }

    /// Jump to a chapter. Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) -> usize {
        if index < self.len {
            self.index = index;
        }
        self.index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_wraps() {
        let mut cursor = ChapterCursor::new(3);
        assert_eq!(cursor.next_chapter(), 1);
        assert_eq!(cursor.next_chapter(), 2);
        assert_eq!(cursor.next_chapter(), 0);
    }

    #[test]
    fn test_prev_wraps() {
        let mut cursor = ChapterCursor::new(3);
        assert_eq!(cursor.prev_chapter(), 2);
        assert_eq!(cursor.prev_chapter(), 1);
    }

    #[test]
    fn test_select() {
        let mut cursor = ChapterCursor::new(4);
        assert_eq!(cursor.select(3), 3);
        assert_eq!(cursor.select(4), 3);
        assert_eq!(cursor.index(), 3);
    }

    #[test]
    fn test_empty_cursor() {
        let mut cursor = ChapterCursor::new(0);
        assert!(cursor.is_empty());
        assert_eq!(cursor.next_chapter(), 0);
        assert_eq!(cursor.prev_chapter(), 0);
        assert_eq!(cursor.select(0), 0);
    }
}
