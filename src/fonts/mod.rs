//! This module contains everything that helps us measuring text.

pub mod monospace;

pub use monospace::Monospace;

use std::path::{Path, PathBuf};

use freetype::{face, Face, Library};
use printpdf::Pt;

use crate::{Error, Result};

/// Something that gives the advance width of glyphs.
pub trait Shaper {
    /// Returns the advance width of every char of the run, in order.
    ///
    /// The run is a contiguous piece of text, so that an implementation is free to take the
    /// neighbours of a glyph into account.
    fn shape(&self, run: &str) -> Result<Vec<Pt>>;
}

/// A font, loaded with freetype, at a given size.
pub struct Font {
    /// The freetype face.
    freetype: Face,

    /// The freetype library the face was loaded with. It must outlive the face.
    _library: Library,

    /// The size of the font.
    size: Pt,
}

impl Font {
    /// Loads a font from a path to a file.
    pub fn from_file<P: AsRef<Path>>(path: P, size: Pt) -> Result<Font> {
        let path = path.as_ref();

        if !path.is_file() {
            return Err(Error::FontNotFound(PathBuf::from(path)));
        }

        let library = Library::init()?;
        let freetype = library.new_face(path, 0)?;

        debug!(
            "loaded font {} {} from {}",
            freetype.family_name().unwrap_or_default(),
            freetype.style_name().unwrap_or_default(),
            path.display()
        );

        Ok(Font {
            freetype,
            _library: library,
            size,
        })
    }

    /// Computes the advance width of a char.
    pub fn char_width(&self, c: char) -> Result<Pt> {
        self.freetype.load_char(c as usize, face::LoadFlag::NO_SCALE)?;

        let advance = self.freetype.glyph().metrics().horiAdvance as f64;
        let units_per_em = f64::from(self.freetype.em_size());

        Ok(scale(advance, units_per_em, self.size))
    }
}

/// Converts an advance in font units into points.
fn scale(advance: f64, units_per_em: f64, size: Pt) -> Pt {
    if units_per_em <= 0.0 {
        // Bitmap-only faces have no outline units.
        return Pt(0.0);
    }

    Pt(advance * size.0 / units_per_em)
}

impl Shaper for Font {
    fn shape(&self, run: &str) -> Result<Vec<Pt>> {
        run.chars().map(|c| self.char_width(c)).collect()
    }
}

#[cfg(test)]
mod tests {
    use printpdf::Pt;

    use crate::fonts::{scale, Font, Shaper};
    use crate::units::nearly_equal;
    use crate::{Error, Result};

    const MONO: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/assets/fonts/DejaVuSansMono.ttf");

    #[test]
    fn monospace_font_advances() -> Result<()> {
        let font = Font::from_file(MONO, Pt(10.0))?;
        let advances = font.shape("iW-")?;

        assert_eq!(advances.len(), 3);
        assert!(advances.iter().all(|a| nearly_equal(a.0, advances[0].0)));

        // Glyphs of this font are 1233 units wide, on a 2048 units em.
        assert!(nearly_equal(advances[0].0, 10.0 * 1233.0 / 2048.0));
        Ok(())
    }

    #[test]
    fn advances_scale_with_size() -> Result<()> {
        let small = Font::from_file(MONO, Pt(10.0))?.char_width('a')?;
        let large = Font::from_file(MONO, Pt(20.0))?.char_width('a')?;
        assert!(nearly_equal(large.0, 2.0 * small.0));
        Ok(())
    }

    #[test]
    fn faces_without_units() {
        assert_eq!(scale(1233.0, 0.0, Pt(10.0)), Pt(0.0));
        assert_eq!(scale(1233.0, -1.0, Pt(10.0)), Pt(0.0));
        assert_eq!(scale(1000.0, 2000.0, Pt(10.0)), Pt(5.0));
    }

    #[test]
    fn missing_font_file() {
        match Font::from_file("assets/fonts/missing.ttf", Pt(10.0)) {
            Err(Error::FontNotFound(path)) => assert!(path.ends_with("missing.ttf")),
            _ => panic!("the font shouldn't have been found"),
        }
    }
}
