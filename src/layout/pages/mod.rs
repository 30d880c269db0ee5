//! Pages are the regions the rows of a document are spread on. They are consulted one after
//! the other, the layout moves to the next page when the current one is full.

pub mod page;

pub use page::Page;

use crate::{Error, Result};

/// An ordered list of pages, along with the page currently being filled.
#[derive(Debug, Clone)]
pub struct Pages {
    /// The pages, in the order they're filled.
    pages: Vec<Page>,

    /// The index of the current page.
    current_page_index: usize,
}

impl Pages {
    /// Creates the list of pages. The first one is the current one.
    ///
    /// The layout never creates pages, so there should be more pages than what the content
    /// requires.
    pub fn new(pages: Vec<Page>) -> Pages {
        Pages {
            pages,
            current_page_index: 0,
        }
    }

    /// Returns the number of pages, used or not.
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Returns true if there is no page at all.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Returns the index of the current page.
    pub fn current_index(&self) -> usize {
        self.current_page_index
    }

    /// Returns the current page.
    pub fn current(&self) -> Result<Page> {
        self.pages
            .get(self.current_page_index)
            .copied()
            .ok_or(Error::PageExhausted {
                requested: self.current_page_index,
            })
    }

    /// Moves on to the next page and returns it.
    ///
    /// Fails if the current page was the last one.
    pub fn advance(&mut self) -> Result<Page> {
        let next = self.current_page_index + 1;

        match self.pages.get(next) {
            Some(page) => {
                self.current_page_index = next;
                Ok(*page)
            }
            None => Err(Error::PageExhausted { requested: next }),
        }
    }

    /// Drops every page after the one with the given index, and returns the remaining ones.
    pub fn truncate_to(mut self, last_used_index: usize) -> Vec<Page> {
        self.pages.truncate(last_used_index + 1);
        self.pages
    }

    /// Drops every page.
    pub fn clear(mut self) -> Vec<Page> {
        self.pages.clear();
        self.pages
    }
}

/// Unit tests for the pages structure.
#[cfg(test)]
mod tests {
    use printpdf::Pt;

    use crate::layout::pages::{Page, Pages};
    use crate::{Error, Result};

    fn two_pages() -> Pages {
        Pages::new(Page::row_of(2, Pt(400.0), Pt(200.0), Pt(0.0), Pt(10.0)))
    }

    #[test]
    fn test_pages() -> Result<()> {
        let mut pages = two_pages();
        assert_eq!(pages.len(), 2);
        assert_eq!(pages.current()?.x, Pt(0.0));

        let next = pages.advance()?;
        assert_eq!(next.x, Pt(410.0));
        assert_eq!(pages.current_index(), 1);

        match pages.advance() {
            Err(Error::PageExhausted { requested }) => assert_eq!(requested, 2),
            _ => panic!("the third page shouldn't exist"),
        }

        // A failed advance leaves the current page untouched.
        assert_eq!(pages.current_index(), 1);
        Ok(())
    }

    #[test]
    fn truncate() {
        assert_eq!(two_pages().truncate_to(0).len(), 1);
        assert_eq!(two_pages().truncate_to(1).len(), 2);
        assert_eq!(two_pages().clear().len(), 0);
    }

    #[test]
    fn no_page_at_all() {
        let pages = Pages::new(vec![]);
        assert!(pages.is_empty());
        assert!(pages.current().is_err());
    }
}
