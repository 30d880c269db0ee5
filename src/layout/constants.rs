//! Various constants used for laying out the boxes of a document.

/// The char of a plain space, which is stretchy and a legal breakpoint.
pub const SPACE: char = ' ';

/// The char that forces a line break.
pub const NEWLINE: char = '\n';

/// The invisible mark of a place where a word may be split.
pub const SOFT_HYPHEN: char = '\u{AD}';

/// The glyph drawn at the end of a line that splits a word.
pub const DASH_GLYPH: char = '-';

/// The badness of a row that has nothing to stretch.
pub const NO_STRETCH_BADNESS: f64 = 1000.0;

/// How much worse a row is when its content overflows the page.
pub const NEGATIVE_SLACK_FACTOR: f64 = 2.0;
