//! Byte ranges into the source document.

use std::ops::Range;

/// A half-open byte range `start..end` into the XML source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Span {
    start: usize,
    end: usize,
}

impl Span {
    /// Create a new span from a byte range.
    pub fn new(range: Range<usize>) -> Self {
        Self {
            start: range.start,
            end: range.end.max(range.start),
        }
    }

    /// Get the start offset of the span
    pub fn start(&self) -> usize {
        self.start
    }

    /// Get the end offset of the span
    pub fn end(&self) -> usize {
        self.end
    }

    /// Get the length of the span
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if the span is empty
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Span of the character at a 1-based `row`/`col` position, as reported
    /// by the XML reader. Positions past the end clamp to the source length.
    pub fn at_position(source: &str, row: u32, col: u32) -> Self {
        let mut offset = 0;
        for (idx, line) in source.split_inclusive('\n').enumerate() {
            if idx + 1 == row as usize {
                let col_offset = line
                    .char_indices()
                    .nth(col.saturating_sub(1) as usize)
                    .map_or(line.len(), |(byte, _)| byte);
                offset += col_offset;
                let width = line[col_offset..].chars().next().map_or(0, char::len_utf8);
                return Self::new(offset..offset + width);
            }
            offset += line.len();
        }
        Self::new(source.len()..source.len())
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Self::new(range)
    }
}
