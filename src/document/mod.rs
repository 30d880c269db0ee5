//! The boxes that are laid out, and the document that holds them in reading order.

use std::vec::IntoIter;

use printpdf::Pt;

use crate::fonts::Shaper;
use crate::layout::constants::{NEWLINE, SOFT_HYPHEN, SPACE};
use crate::{Error, Result};

/// The atomic unit of the layout, usually holding one char.
///
/// Its position is meaningless until the box went through the layout, which then moves it and
/// may resize it.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundingBox {
    /// The horizontal position of the top left corner.
    pub x: Pt,

    /// The vertical position of the top left corner, growing downwards.
    pub y: Pt,

    /// The width of the box. Justification may grow it if the box is stretchy.
    pub width: Pt,

    /// The height of the box.
    pub height: Pt,

    /// Whether the box can absorb the slack of its row.
    pub stretchy: bool,

    /// The char held by the box, `None` for a box that represents nothing.
    pub glyph: Option<char>,
}

impl BoundingBox {
    /// Creates a `1 × 1` box that doesn't stretch.
    pub fn new(glyph: Option<char>) -> BoundingBox {
        BoundingBox {
            x: Pt(0.0),
            y: Pt(0.0),
            width: Pt(1.0),
            height: Pt(1.0),
            stretchy: false,
            glyph,
        }
    }

    /// Creates a box holding a char. Spaces are stretchy.
    pub fn from_char(c: char, height: Pt) -> BoundingBox {
        BoundingBox {
            height,
            stretchy: c == SPACE,
            ..BoundingBox::new(Some(c))
        }
    }

    /// Returns the horizontal position of the right edge.
    pub fn right(&self) -> Pt {
        self.x + self.width
    }

    /// Returns the vertical position of the bottom edge.
    pub fn bottom(&self) -> Pt {
        self.y + self.height
    }

    /// Returns true if the box holds the given char.
    pub fn holds(&self, c: char) -> bool {
        self.glyph == Some(c)
    }

    /// Returns true if the box is a plain space.
    pub fn is_space(&self) -> bool {
        self.holds(SPACE)
    }

    /// Returns true if the box ends its line no matter what.
    pub fn is_forced_break(&self) -> bool {
        self.holds(NEWLINE)
    }

    /// Returns true if a line may end at this box.
    pub fn is_legal_breakpoint(&self) -> bool {
        self.is_space() || self.holds(SOFT_HYPHEN)
    }

    /// Returns true if the box has a glyph that should be drawn.
    pub fn is_visible(&self) -> bool {
        match self.glyph {
            Some(c) => !c.is_whitespace() && c != SOFT_HYPHEN,
            None => false,
        }
    }
}

/// The boxes to lay out, in reading order.
#[derive(Debug, Clone, Default)]
pub struct Document {
    boxes: Vec<BoundingBox>,
}

impl Document {
    /// Creates an empty document.
    pub fn new() -> Document {
        Document { boxes: Vec::new() }
    }

    /// Creates a document with one box per char of the text.
    ///
    /// Every box starts `1` wide and `height` high, the shaper is expected to fix the widths.
    pub fn from_text(text: &str, height: Pt) -> Document {
        Document {
            boxes: text.chars().map(|c| BoundingBox::from_char(c, height)).collect(),
        }
    }

    /// Pushes a box at the end of the document.
    pub fn push(&mut self, item: BoundingBox) {
        self.boxes.push(item)
    }

    /// Returns the number of boxes.
    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    /// Returns true if the document holds no box.
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    /// Returns the boxes of the document.
    pub fn boxes(&self) -> &[BoundingBox] {
        &self.boxes
    }

    /// Gives each box the advance width computed by the shaper.
    ///
    /// The shaper sees whole runs of text between two line terminators, since the advance of a
    /// glyph may depend on its neighbours. Line terminators and soft hyphens never take any
    /// room, whatever the shaper says.
    pub fn shape(&mut self, shaper: &dyn Shaper) -> Result<()> {
        let mut start = 0;

        while start < self.boxes.len() {
            let end = self.boxes[start..]
                .iter()
                .position(BoundingBox::is_forced_break)
                .map_or(self.boxes.len(), |offset| start + offset);

            if end > start {
                let run = self.boxes[start..end]
                    .iter()
                    .filter_map(|b| b.glyph)
                    .collect::<String>();

                let expected = run.chars().count();
                let advances = shaper.shape(&run)?;

                if advances.len() != expected {
                    return Err(Error::ShapingMismatch {
                        expected,
                        found: advances.len(),
                    });
                }

                // Glyph-less boxes are not sent to the shaper, they keep their width.
                let slots = self.boxes[start..end]
                    .iter_mut()
                    .filter(|b| b.glyph.is_some());

                for (item, advance) in slots.zip(advances) {
                    // Soft hyphens only mark where a word may be split.
                    item.width = if item.holds(SOFT_HYPHEN) {
                        Pt(0.0)
                    } else {
                        advance
                    };
                }
            }

            if let Some(terminator) = self.boxes.get_mut(end) {
                terminator.width = Pt(0.0);
            }

            start = end + 1;
        }

        Ok(())
    }
}

impl IntoIterator for Document {
    type Item = BoundingBox;
    type IntoIter = IntoIter<BoundingBox>;

    fn into_iter(self) -> Self::IntoIter {
        self.boxes.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use printpdf::Pt;

    use crate::document::{BoundingBox, Document};
    use crate::fonts::{Monospace, Shaper};
    use crate::layout::constants::SOFT_HYPHEN;
    use crate::{Error, Result};

    /// A shaper that forgets the last glyph of every run.
    struct Forgetful;

    impl Shaper for Forgetful {
        fn shape(&self, run: &str) -> Result<Vec<Pt>> {
            Ok(run.chars().skip(1).map(|_| Pt(1.0)).collect())
        }
    }

    #[test]
    fn only_spaces_stretch() {
        let text = format!("a b\n\t{}", SOFT_HYPHEN);
        let document = Document::from_text(&text, Pt(2.0));

        let stretchy = document.boxes().iter().map(|b| b.stretchy).collect::<Vec<_>>();
        assert_eq!(stretchy, vec![false, true, false, false, false, false]);
        assert!(document.boxes().iter().all(|b| b.height == Pt(2.0)));
    }

    #[test]
    fn breakpoints_and_visibility() {
        let boxes = Document::from_text(&format!("a \n{}", SOFT_HYPHEN), Pt(1.0));
        let boxes = boxes.boxes();

        assert!(boxes[0].is_visible() && !boxes[0].is_legal_breakpoint());
        assert!(boxes[1].is_legal_breakpoint() && !boxes[1].is_visible());
        assert!(boxes[2].is_forced_break() && !boxes[2].is_legal_breakpoint());
        assert!(boxes[3].is_legal_breakpoint() && !boxes[3].is_visible());
        assert!(!BoundingBox::new(None).is_visible());
    }

    #[test]
    fn shape_fixes_widths() -> Result<()> {
        let mut document = Document::from_text("ab c\nd", Pt(1.0));
        document.push(BoundingBox::new(None));
        document.shape(&Monospace::new(Pt(0.5)))?;

        let widths = document.boxes().iter().map(|b| b.width).collect::<Vec<_>>();
        assert_eq!(
            widths,
            vec![Pt(0.5), Pt(0.5), Pt(0.5), Pt(0.5), Pt(0.0), Pt(0.5), Pt(1.0)]
        );
        Ok(())
    }

    #[test]
    fn soft_hyphens_take_no_room() -> Result<()> {
        let text = format!("hy{}phen", SOFT_HYPHEN);
        let mut document = Document::from_text(&text, Pt(10.0));
        document.shape(&Monospace::for_size(Pt(10.0)))?;

        let boxes = document.boxes();
        assert_eq!(boxes[2].width, Pt(0.0));
        assert!(boxes.iter().filter(|b| !b.holds(SOFT_HYPHEN)).all(|b| b.width > Pt(0.0)));
        Ok(())
    }

    #[test]
    fn shape_consecutive_newlines() -> Result<()> {
        let mut document = Document::from_text("\n\na", Pt(1.0));
        document.shape(&Monospace::new(Pt(0.5)))?;

        let widths = document.boxes().iter().map(|b| b.width).collect::<Vec<_>>();
        assert_eq!(widths, vec![Pt(0.0), Pt(0.0), Pt(0.5)]);
        Ok(())
    }

    #[test]
    fn shape_mismatch() {
        let mut document = Document::from_text("abc\nde", Pt(1.0));

        match document.shape(&Forgetful) {
            Err(Error::ShapingMismatch { expected, found }) => {
                assert_eq!((expected, found), (3, 2));
            }
            _ => panic!("the shaper should have been caught"),
        }
    }
}
