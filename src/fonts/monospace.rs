//! A shaper that needs no font file.

use printpdf::Pt;

use crate::fonts::Shaper;
use crate::Result;

/// The fraction of the font size that a glyph of the monospace shaper takes.
pub const DEFAULT_ADVANCE_RATIO: f64 = 0.6;

/// Gives every glyph the same advance.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Monospace {
    /// The advance of every glyph.
    pub advance: Pt,
}

impl Monospace {
    /// Creates a shaper where every glyph is `advance` wide.
    pub fn new(advance: Pt) -> Monospace {
        Monospace { advance }
    }

    /// Creates a shaper that mimics a monospace font of the given size.
    pub fn for_size(size: Pt) -> Monospace {
        Monospace::new(Pt(size.0 * DEFAULT_ADVANCE_RATIO))
    }
}

impl Shaper for Monospace {
    fn shape(&self, run: &str) -> Result<Vec<Pt>> {
        Ok(run.chars().map(|_| self.advance).collect())
    }
}

#[cfg(test)]
mod tests {
    use printpdf::Pt;

    use crate::fonts::{Monospace, Shaper};
    use crate::units::nearly_equal;
    use crate::Result;

    #[test]
    fn one_advance_per_char() -> Result<()> {
        let shaper = Monospace::new(Pt(2.0));
        let advances = shaper.shape("é a")?;
        assert_eq!(advances, vec![Pt(2.0), Pt(2.0), Pt(2.0)]);
        Ok(())
    }

    #[test]
    fn scales_with_size() -> Result<()> {
        let shaper = Monospace::for_size(Pt(10.0));
        let advances = shaper.shape("-")?;
        assert_eq!(advances.len(), 1);
        assert!(nearly_equal(advances[0].0, 6.0));
        Ok(())
    }
}
