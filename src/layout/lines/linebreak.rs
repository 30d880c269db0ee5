//! Measures of the quality of a line break.
//!
//! The engine never looks at these: it keeps the first legal break it finds. They exist to tell
//! how good the chosen breaks turned out to be.

use printpdf::Pt;

use crate::document::BoundingBox;
use crate::layout::constants::{NEGATIVE_SLACK_FACTOR, NO_STRETCH_BADNESS};

/// Returns the horizontal distance from the left edge of the first box of a row to the right
/// edge of its last box.
pub fn row_span(row: &[BoundingBox]) -> Pt {
    match (row.first(), row.last()) {
        (Some(first), Some(last)) => last.right() - first.x,
        _ => Pt(0.0),
    }
}

/// Returns the total width of the stretchy boxes of a row.
pub fn stretchy_width(row: &[BoundingBox]) -> Pt {
    row.iter()
        .filter(|b| b.stretchy)
        .fold(Pt(0.0), |acc, b| acc + b.width)
}

/// Computes how bad a row is for a page of the given width. Bigger is worse.
///
/// Some slack spread over a lot of stretchy room is fine, the same slack spread over a few
/// narrow spaces is not. A row without stretchy room scores a fixed penalty, and overflowing
/// the page doubles the score.
///
/// ```
/// # use printpdf::Pt;
/// # use boxes::document::BoundingBox;
/// # use boxes::layout::lines::linebreak::badness;
/// let mut space = BoundingBox::from_char(' ', Pt(1.0));
/// space.x = Pt(1.0);
/// let row = vec![BoundingBox::from_char('a', Pt(1.0)), space];
/// // The row is 2 wide, so 2 units of slack are spread on 1 unit of stretchy room.
/// assert_eq!(badness(Pt(4.0), &row), 2.0);
/// ```
pub fn badness(page_width: Pt, row: &[BoundingBox]) -> f64 {
    let slack = page_width - row_span(row);
    let stretchy = stretchy_width(row);

    let badness = if row.iter().any(|b| b.stretchy) && stretchy > Pt(0.0) {
        slack.0 / stretchy.0
    } else {
        NO_STRETCH_BADNESS
    };

    if slack < Pt(0.0) {
        badness * NEGATIVE_SLACK_FACTOR
    } else {
        badness
    }
}

#[cfg(test)]
mod tests {
    use printpdf::Pt;
    use test_case::test_case;

    use crate::document::BoundingBox;
    use crate::layout::constants::NO_STRETCH_BADNESS;
    use crate::layout::lines::linebreak::{badness, row_span};
    use crate::units::nearly_equal;

    /// Lays out a row of unit boxes from a string, without any separation.
    fn row(text: &str) -> Vec<BoundingBox> {
        text.chars()
            .enumerate()
            .map(|(i, c)| BoundingBox {
                x: Pt(i as f64),
                ..BoundingBox::from_char(c, Pt(1.0))
            })
            .collect()
    }

    #[test_case("ab cd", 7.0, 2.0 ; "loose row")]
    #[test_case("ab  cd", 6.0, 0.0 ; "exact fit")]
    #[test_case("ab  cd", 5.0, -1.0 ; "overflowing row is doubled")]
    #[test_case("abcd", 10.0, NO_STRETCH_BADNESS ; "nothing to stretch")]
    #[test_case("abcdef", 5.0, 2.0 * NO_STRETCH_BADNESS ; "nothing to stretch and overflowing")]
    fn scores(text: &str, page_width: f64, expected: f64) {
        assert!(nearly_equal(badness(Pt(page_width), &row(text)), expected));
    }

    #[test]
    fn collapsed_stretchy_room() {
        let mut row = row("a b");
        row[1].width = Pt(0.0);
        assert!(nearly_equal(badness(Pt(10.0), &row), NO_STRETCH_BADNESS));
    }

    #[test]
    fn span() {
        assert_eq!(row_span(&row("abc")), Pt(3.0));
        assert_eq!(row_span(&[]), Pt(0.0));
    }
}
