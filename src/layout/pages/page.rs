//! Holds the information about a page region. Rows are stacked in a page from its top until
//! they reach its bottom.

use printpdf::Pt;

/// A page is rectangle with specified width and height, in which the layout places rows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Page {
    /// The horizontal position of the page's top left corner.
    pub x: Pt,

    /// The vertical position of the page's top left corner.
    pub y: Pt,

    /// The width of the page in points. This represents the amount of horizontal space a row
    /// is allowed to spread on.
    pub width: Pt,

    /// The height of the page in points.
    pub height: Pt,
}

impl Page {
    /// Creates a new page from its top left corner, its width and height.
    pub fn new(x: Pt, y: Pt, width: Pt, height: Pt) -> Page {
        Page {
            x,
            y,
            width,
            height,
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

    /// Creates `count` pages of the same size, side by side from left to right.
    ///
    /// The first page starts at `margin`, and `gap` separates two consecutive pages.
    pub fn row_of(count: usize, width: Pt, height: Pt, margin: Pt, gap: Pt) -> Vec<Page> {
        (0..count)
            .map(|i| {
                let x = margin + Pt((width + gap).0 * i as f64);
                Page::new(x, Pt(0.0), width, height)
            })
            .collect()
    }
}

#[allow(unused_macros)]
macro_rules! assert_eq_page {
    ($page1: expr, $page2: expr) => {
        assert!(($page1.x.0 - $page2.x.0).abs() < 0.001);
        assert!(($page1.y.0 - $page2.y.0).abs() < 0.001);
        assert!(($page1.width.0 - $page2.width.0).abs() < 0.001);
        assert!(($page1.height.0 - $page2.height.0).abs() < 0.001);
    };
}

/// Unit tests for the [Page](crate::layout::pages::page::Page) structure.
#[cfg(test)]
mod tests {
    use printpdf::Pt;

    use crate::layout::pages::page::Page;

    #[test]
    fn edges() {
        let page = Page::new(Pt(5.0), Pt(10.0), Pt(30.0), Pt(50.0));
        assert_eq!(page.right(), Pt(35.0));
        assert_eq!(page.bottom(), Pt(60.0));
    }

    #[test]
    fn row_of_pages() {
        let pages = Page::row_of(3, Pt(30.0), Pt(50.0), Pt(5.0), Pt(5.0));

        assert_eq!(pages.len(), 3);
        assert_eq_page!(pages[0], Page::new(Pt(5.0), Pt(0.0), Pt(30.0), Pt(50.0)));
        assert_eq_page!(pages[1], Page::new(Pt(40.0), Pt(0.0), Pt(30.0), Pt(50.0)));
        assert_eq_page!(pages[2], Page::new(Pt(75.0), Pt(0.0), Pt(30.0), Pt(50.0)));
    }
}
