//! Source location utilities for converting byte offsets to line/column positions
//!
//! Used to turn the byte spans carried by tokens and parse errors into
//! positions a user can find in an editor. All three SAM line terminators
//! (`\n`, `\r\n`, `\r`) start a new line.

use super::span::Position;

/// Provides fast conversion from byte offsets to line/column positions
pub struct SourceLocation {
    /// Byte offsets where each line starts
    line_starts: Vec<usize>,
}

impl SourceLocation {
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0];
        let bytes = source.as_bytes();

        for (pos, byte) in bytes.iter().enumerate() {
            match byte {
                b'\n' => line_starts.push(pos + 1),
                b'\r' if bytes.get(pos + 1) != Some(&b'\n') => line_starts.push(pos + 1),
                _ => {}
            }
        }

        Self { line_starts }
    }

    /// Convert a byte offset to a line/column position
    pub fn byte_to_position(&self, byte_offset: usize) -> Position {
        let line = self
            .line_starts
            .binary_search(&byte_offset)
            .unwrap_or_else(|i| i - 1);

        let column = byte_offset - self.line_starts[line];

        Position::new(line, column)
    }

    /// Get the total number of lines in the source
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Get the byte offset for the start of a line
    pub fn line_start(&self, line: usize) -> Option<usize> {
        self.line_starts.get(line).copied()
    }
}
