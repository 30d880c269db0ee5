//! Everything needed to lay out a document: the line breaking engine, the justification
//! policies and the pages.

pub mod constants;
pub mod lines;
pub mod pages;

use std::fmt;

use printpdf::Pt;

use crate::document::{BoundingBox, Document};
use crate::fonts::Shaper;
use crate::layout::constants::DASH_GLYPH;
use crate::layout::lines::linebreak::badness;
use crate::layout::lines::{Engine, Justifier, Line, LineEnd, Stretch};
use crate::layout::pages::{Page, Pages};
use crate::{Error, Result};

/// The outcome of a layout.
#[derive(Debug, Clone)]
pub struct Layout {
    /// The placed boxes, in reading order, including the dashes added at the end of split
    /// words.
    pub boxes: Vec<BoundingBox>,

    /// The pages that received at least one box.
    pub pages: Vec<Page>,

    /// The lines, in reading order.
    pub lines: Vec<Line>,
}

impl Layout {
    /// Returns the boxes of a line.
    pub fn line_boxes(&self, line: &Line) -> &[BoundingBox] {
        &self.boxes[line.range.clone()]
    }

    /// Scores every line with the badness metric.
    pub fn report(&self) -> Report {
        let lines = self
            .lines
            .iter()
            .map(|line| {
                let page_width = self
                    .pages
                    .get(line.page)
                    .map_or(Pt(0.0), |page| page.width);

                LineReport {
                    end: line.end,
                    badness: badness(page_width, self.line_boxes(line)),
                }
            })
            .collect();

        Report { lines }
    }
}

/// The score of a line.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LineReport {
    /// How the line ended.
    pub end: LineEnd,

    /// The badness of the line.
    pub badness: f64,
}

/// The scores of all the lines of a layout.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// One score per line, in reading order.
    pub lines: Vec<LineReport>,
}

impl Report {
    fn justified(&self) -> impl Iterator<Item = f64> + '_ {
        self.lines
            .iter()
            .filter(|line| line.end.is_justified())
            .map(|line| line.badness)
    }

    /// Returns the mean badness of the justified lines, if there is any.
    pub fn mean(&self) -> Option<f64> {
        let (count, sum) = self
            .justified()
            .fold((0, 0.0), |(count, sum), badness| (count + 1, sum + badness));

        if count == 0 {
            None
        } else {
            Some(sum / count as f64)
        }
    }

    /// Returns the worst badness among the justified lines, if there is any.
    pub fn worst(&self) -> Option<f64> {
        self.justified().fold(None, |worst: Option<f64>, badness| {
            Some(worst.map_or(badness, |worst| worst.max(badness)))
        })
    }
}

impl fmt::Display for Report {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        let justified = self.lines.iter().filter(|l| l.end.is_justified()).count();

        write!(fmt, "{} lines, {} justified", self.lines.len(), justified)?;

        if let (Some(mean), Some(worst)) = (self.mean(), self.worst()) {
            write!(fmt, ", badness mean {:.3} worst {:.3}", mean, worst)?;
        }

        Ok(())
    }
}

/// Lays out a document on pages, stretching the spaces to justify the rows.
///
/// The shaper gives the width of the dashes added when words are split.
pub fn layout(
    document: Document,
    pages: Pages,
    separation: Pt,
    shaper: &dyn Shaper,
) -> Result<Layout> {
    layout_with::<Stretch>(document, pages, separation, shaper)
}

/// Lays out a document on pages, justifying the rows with `J`.
pub fn layout_with<J: Justifier>(
    document: Document,
    pages: Pages,
    separation: Pt,
    shaper: &dyn Shaper,
) -> Result<Layout> {
    let dash = shaper.shape(&DASH_GLYPH.to_string())?;

    let dash_width = match dash.as_slice() {
        [width] => *width,
        _ => {
            return Err(Error::ShapingMismatch {
                expected: 1,
                found: dash.len(),
            })
        }
    };

    Engine::new(document, pages, separation, dash_width).run::<J>()
}
