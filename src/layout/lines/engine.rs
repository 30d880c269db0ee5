//! The greedy line breaking engine.
//!
//! Boxes are taken one at a time from a queue and put right after the previous one. A line
//! ends either on a newline, or on the first space or soft hyphen that sticks out of the page.
//! The row is then justified and never looked at again: the engine doesn't try to find a
//! better set of breaks for the whole paragraph.

use std::collections::VecDeque;
use std::ops::Range;

use printpdf::Pt;

use crate::document::{BoundingBox, Document};
use crate::layout::constants::{DASH_GLYPH, SOFT_HYPHEN};
use crate::layout::lines::justification::Justifier;
use crate::layout::pages::{Page, Pages};
use crate::layout::Layout;
use crate::Result;

/// The reason why a line ended.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LineEnd {
    /// A newline forced the break. The line isn't justified.
    Forced,

    /// The line broke on a space.
    Space,

    /// The line broke on a soft hyphen, and a dash was added at its end.
    Hyphen,

    /// The text ended. The line isn't justified.
    EndOfText,
}

impl LineEnd {
    /// Returns true if the line was justified when it ended.
    pub fn is_justified(self) -> bool {
        match self {
            LineEnd::Space | LineEnd::Hyphen => true,
            LineEnd::Forced | LineEnd::EndOfText => false,
        }
    }
}

/// A finished line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// The indices of the boxes of the line, among the laid out boxes.
    ///
    /// Trailing spaces that were dropped before justification are not part of the line.
    pub range: Range<usize>,

    /// The index of the page the line is on.
    pub page: usize,

    /// How the line ended.
    pub end: LineEnd,
}

/// The state of a layout in progress.
///
/// The engine is used once: [run](Engine::run) consumes it.
pub struct Engine {
    /// The boxes that still need to be placed.
    pending: VecDeque<BoundingBox>,

    /// The boxes that were placed, including the dashes that were added.
    output: Vec<BoundingBox>,

    /// The indices in `output` of the boxes of the current row.
    row: Vec<usize>,

    /// The index in `output` of the last box that came from the document.
    previous: usize,

    /// The finished lines.
    lines: Vec<Line>,

    /// The pages to fill.
    pages: Pages,

    /// The space between two boxes, and between two rows.
    separation: Pt,

    /// The width of the dash added when a word is split.
    dash_width: Pt,
}

impl Engine {
    /// Prepares the layout of a document.
    pub fn new(document: Document, pages: Pages, separation: Pt, dash_width: Pt) -> Engine {
        let pending = document.into_iter().collect::<VecDeque<_>>();

        Engine {
            output: Vec::with_capacity(pending.len()),
            pending,
            row: Vec::new(),
            previous: 0,
            lines: Vec::new(),
            pages,
            separation,
            dash_width,
        }
    }

    /// Places every box, justifying the rows with `J`.
    pub fn run<J: Justifier>(mut self) -> Result<Layout> {
        let first = match self.pending.pop_front() {
            Some(first) => first,
            None => {
                debug!("nothing to lay out");
                return Ok(Layout {
                    boxes: self.output,
                    pages: self.pages.clear(),
                    lines: self.lines,
                });
            }
        };

        self.place_first(first)?;

        while let Some(item) = self.pending.pop_front() {
            self.place::<J>(item)?;
        }

        if !self.row.is_empty() {
            self.end_line(LineEnd::EndOfText);
        }

        let last_used = self.pages.current_index();
        let pages = self.pages.truncate_to(last_used);

        debug!(
            "laid out {} boxes in {} lines on {} pages",
            self.output.len(),
            self.lines.len(),
            pages.len()
        );

        Ok(Layout {
            boxes: self.output,
            pages,
            lines: self.lines,
        })
    }

    /// Puts the very first box in the top left corner of the first page.
    fn place_first(&mut self, mut item: BoundingBox) -> Result<()> {
        let page = self.pages.current()?;
        item.x = page.x;
        item.y = page.y;

        if item.is_forced_break() {
            item.width = Pt(0.0);
            item.stretchy = false;
        }

        self.push(item, page);
        Ok(())
    }

    /// Puts a box after the previous one, breaking the line before it if needed.
    fn place<J: Justifier>(&mut self, mut item: BoundingBox) -> Result<()> {
        let previous = self.output[self.previous].clone();
        let mut page = self.pages.current()?;

        item.x = previous.right() + self.separation;
        item.y = previous.y;

        let end = if item.is_forced_break() {
            // Newlines never take any room.
            item.width = Pt(0.0);
            item.stretchy = false;
            Some(LineEnd::Forced)
        } else if item.right() > page.right() && item.is_legal_breakpoint() {
            let end = if item.holds(SOFT_HYPHEN) {
                self.add_dash(&previous, item.height);
                LineEnd::Hyphen
            } else {
                LineEnd::Space
            };

            self.justify::<J>(page);
            Some(end)
        } else {
            None
        };

        if let Some(end) = end {
            self.end_line(end);
            item.x = page.x;
            item.y = previous.bottom() + self.separation;
        }

        if item.bottom() > page.bottom() {
            page = self.pages.advance()?;
            debug!("page full, moving on to page {}", self.pages.current_index());
            item.x = page.x;
            item.y = page.y;
        }

        self.push(item, page);
        Ok(())
    }

    /// Appends a placed box to the output and to the current row.
    fn push(&mut self, item: BoundingBox, page: Page) {
        let index = self.output.len();
        self.output.push(item);
        self.row.push(index);
        self.previous = index;

        // Spaces at the beginning of a row would show as a gap in the left margin.
        let output = &self.output;
        if self.row.iter().all(|&i| output[i].is_space()) {
            trace!("collapsing leading space {}", index);
            let item = &mut self.output[index];
            item.width = Pt(0.0);
            item.stretchy = false;
            item.x = page.x;
        }
    }

    /// Adds a visible dash right after the previous box, at the end of the current row.
    fn add_dash(&mut self, previous: &BoundingBox, height: Pt) {
        let dash = BoundingBox {
            x: previous.right() + self.separation,
            y: previous.y,
            width: self.dash_width,
            height,
            stretchy: false,
            glyph: Some(DASH_GLYPH),
        };

        trace!("splitting word with a dash at {:?}", dash.x);
        self.row.push(self.output.len());
        self.output.push(dash);
    }

    /// Drops the trailing spaces of the row and justifies what remains.
    fn justify<J: Justifier>(&mut self, page: Page) {
        while let Some(&last) = self.row.last() {
            if self.output[last].is_space() {
                self.row.pop();
            } else {
                break;
            }
        }

        let range = match row_range(&self.row) {
            Some(range) => range,
            None => return,
        };

        let slack = J::justify(&mut self.output[range], page.right(), self.separation);

        if slack < Pt(0.0) {
            warn!(
                "row overflows page {} by {:?}",
                self.pages.current_index(),
                Pt(0.0) - slack
            );
        }
    }

    /// Records the current row as a finished line and starts a new one.
    fn end_line(&mut self, end: LineEnd) {
        if let Some(range) = row_range(&self.row) {
            debug!("line {} ends ({:?})", self.lines.len(), end);
            self.lines.push(Line {
                range,
                page: self.pages.current_index(),
                end,
            });
        }

        self.row.clear();
    }
}

/// Returns the range of output indices covered by a row.
///
/// Rows only ever grow and shrink at their end, so their indices are contiguous.
fn row_range(row: &[usize]) -> Option<Range<usize>> {
    match (row.first(), row.last()) {
        (Some(&first), Some(&last)) => Some(first..last + 1),
        _ => None,
    }
}
