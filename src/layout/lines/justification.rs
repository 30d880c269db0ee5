//! This module contains the trait and implementations of the policies that spread the slack
//! of a row.

use printpdf::Pt;

use crate::document::BoundingBox;

/// A policy that justifies a finished row.
pub trait Justifier {
    /// Justifies the row against the right edge of its page, and returns the slack that was
    /// spread.
    ///
    /// The row is never empty.
    fn justify(row: &mut [BoundingBox], right_edge: Pt, separation: Pt) -> Pt;
}

/// Returns the room left between the last box of a row and the right edge.
///
/// It is negative when the row overflows.
pub fn slack(row: &[BoundingBox], right_edge: Pt) -> Pt {
    match row.last() {
        Some(last) => right_edge - last.right(),
        None => Pt(0.0),
    }
}

/// Grows the stretchy boxes of the row so that it ends on the right edge.
///
/// Every stretchy box gets the same share of the slack, then the boxes are put back one after
/// the other. A row without any stretchy box is spread like [Spread] does.
pub struct Stretch;

impl Justifier for Stretch {
    fn justify(row: &mut [BoundingBox], right_edge: Pt, separation: Pt) -> Pt {
        let stretchy = row.iter().filter(|b| b.stretchy).count();

        if stretchy == 0 {
            return Spread::justify(row, right_edge, separation);
        }

        let slack = slack(row, right_edge);
        let bump = slack.0 / stretchy as f64;

        for item in row.iter_mut().filter(|b| b.stretchy) {
            // Overflowing rows shrink their spaces, but never below nothing.
            item.width = Pt((item.width.0 + bump).max(0.0));
        }

        for j in 1..row.len() {
            row[j].x = row[j - 1].right() + separation;
        }

        slack
    }
}

/// Moves the boxes of the row to the right without resizing them.
///
/// The first box doesn't move, the second one moves by one share of the slack, the third one
/// by two shares, and so on.
pub struct Spread;

impl Justifier for Spread {
    fn justify(row: &mut [BoundingBox], right_edge: Pt, _separation: Pt) -> Pt {
        let slack = slack(row, right_edge);
        let bump = slack.0 / row.len() as f64;

        for (i, item) in row.iter_mut().enumerate() {
            item.x += Pt(bump * i as f64);
        }

        slack
    }
}

/// Leaves the row as it is, which gives a ragged right margin.
pub struct Ragged;

impl Justifier for Ragged {
    fn justify(row: &mut [BoundingBox], right_edge: Pt, _separation: Pt) -> Pt {
        slack(row, right_edge)
    }
}

#[cfg(test)]
mod tests {
    use printpdf::Pt;

    use crate::document::BoundingBox;
    use crate::layout::lines::justification::{Justifier, Ragged, Spread, Stretch};
    use crate::units::nearly_equal;

    /// Lays out a row of unit boxes from a string, one unit of separation apart.
    fn row(text: &str) -> Vec<BoundingBox> {
        text.chars()
            .enumerate()
            .map(|(i, c)| BoundingBox {
                x: Pt(2.0 * i as f64),
                ..BoundingBox::from_char(c, Pt(1.0))
            })
            .collect()
    }

    fn assert_no_overlap(row: &[BoundingBox]) {
        for pair in row.windows(2) {
            assert!(pair[1].x.0 >= pair[0].right().0 - 1e-9);
        }
    }

    #[test]
    fn stretch_ends_on_the_right_edge() {
        // Spaces at 1 and 3, the row spans 9 units.
        let mut row = row("a b c");
        let slack = Stretch::justify(&mut row, Pt(12.0), Pt(1.0));

        assert!(nearly_equal(slack.0, 3.0));
        assert!(nearly_equal(row[1].width.0, 2.5));
        assert!(nearly_equal(row[3].width.0, 2.5));
        assert!(nearly_equal(row[4].right().0, 12.0));
        assert_eq!(row[0].x, Pt(0.0));
        assert_no_overlap(&row);
    }

    #[test]
    fn stretch_shrinks_overflowing_rows() {
        let mut row = row("ab cd");
        let slack = Stretch::justify(&mut row, Pt(7.0), Pt(1.0));

        assert!(nearly_equal(slack.0, -2.0));
        // The only space can't shrink below nothing.
        assert_eq!(row[2].width, Pt(0.0));
        assert!(row.iter().all(|b| b.width >= Pt(0.0)));
    }

    #[test]
    fn stretch_without_stretchy_box_spreads() {
        let mut stretched = row("abcd");
        let mut spread = row("abcd");
        Stretch::justify(&mut stretched, Pt(10.0), Pt(1.0));
        Spread::justify(&mut spread, Pt(10.0), Pt(1.0));
        assert_eq!(stretched, spread);
    }

    #[test]
    fn spread_keeps_widths() {
        let mut row = row("abcd");
        let slack = Spread::justify(&mut row, Pt(11.0), Pt(1.0));

        assert!(nearly_equal(slack.0, 4.0));
        for (i, item) in row.iter().enumerate() {
            assert_eq!(item.width, Pt(1.0));
            assert!(nearly_equal(item.x.0, 2.0 * i as f64 + i as f64));
        }
        assert_no_overlap(&row);
    }

    #[test]
    fn ragged_changes_nothing() {
        let mut row = row("a b");
        let before = row.clone();
        let slack = Ragged::justify(&mut row, Pt(10.0), Pt(1.0));

        assert_eq!(row, before);
        assert!(nearly_equal(slack.0, 5.0));
    }
}
