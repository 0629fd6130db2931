//! Source positions and ranges
//!
//! [`SourceLocation`] and [`SourceRange`] are the immutable value types that
//! every token, AST node, and diagnostic carries so that problems can be
//! reported against an exact position in the source buffer.

use std::fmt;

/// A position in a Brook source buffer.
///
/// Lines and columns are 1-based; `offset` is the byte offset of the
/// position in the buffer. A default-constructed location is the invalid
/// sentinel and never refers to real source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    line: u32,
    column: u32,
    offset: usize,
}

impl SourceLocation {
    /// The invalid sentinel used by dummy tokens and default ranges.
    pub const INVALID: SourceLocation = SourceLocation {
        line: 0,
        column: 0,
        offset: usize::MAX,
    };

    pub fn new(line: u32, column: u32, offset: usize) -> Self {
        Self {
            line,
            column,
            offset,
        }
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn column(&self) -> u32 {
        self.column
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Returns `true` if this location refers to a real position in a source
    /// buffer. Lines are 1-based, so a zero line marks the sentinel.
    pub fn is_valid(&self) -> bool {
        self.line != 0
    }

    /// The range from this location up to `end`.
    pub fn to(self, end: SourceLocation) -> SourceRange {
        SourceRange::new(self, end)
    }
}

impl Default for SourceLocation {
    fn default() -> Self {
        Self::INVALID
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A half-open range between two locations in a source buffer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SourceRange {
    start: SourceLocation,
    end: SourceLocation,
}

impl SourceRange {
    pub fn new(start: SourceLocation, end: SourceLocation) -> Self {
        Self { start, end }
    }

    pub fn start(&self) -> SourceLocation {
        self.start
    }

    pub fn end(&self) -> SourceLocation {
        self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_location_is_invalid() {
        let loc = SourceLocation::default();
        assert!(!loc.is_valid());
    }

    #[test]
    fn test_new_location_is_valid() {
        let loc = SourceLocation::new(1, 1, 0);
        assert!(loc.is_valid());
        assert_eq!(loc.line(), 1);
        assert_eq!(loc.column(), 1);
        assert_eq!(loc.offset(), 0);
    }

    #[test]
    fn test_location_display() {
        let loc = SourceLocation::new(3, 14, 42);
        assert_eq!(loc.to_string(), "3:14");
    }

    #[test]
    fn test_location_to_forms_range() {
        let start = SourceLocation::new(1, 1, 0);
        let end = SourceLocation::new(1, 5, 4);
        let range = start.to(end);
        assert_eq!(range.start(), start);
        assert_eq!(range.end(), end);
    }

    #[test]
    fn test_default_range_is_invalid() {
        let range = SourceRange::default();
        assert!(!range.start().is_valid());
        assert!(!range.end().is_valid());
    }
}
