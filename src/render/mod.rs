//! Drawing a layout into a PDF file.
//!
//! Every page of the layout is drawn on one single sheet, side by side, so that the whole
//! layout can be seen at once. Layout coordinates grow downwards from the top left corner of
//! the sheet while PDF coordinates grow upwards from its bottom left corner, so every vertical
//! position gets flipped.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Line, PdfDocument, PdfDocumentReference,
    PdfLayerReference, Point, Pt, Rgb,
};

use crate::document::BoundingBox;
use crate::layout::pages::Page;
use crate::layout::Layout;
use crate::{Error, Result};

/// The color of the pages.
const PAGE_COLOR: (f64, f64, f64) = (0.68, 0.85, 0.9);

/// The color of the boxes that can stretch.
const STRETCHY_COLOR: (f64, f64, f64) = (0.0, 0.5, 0.0);

/// The color of the other boxes.
const RIGID_COLOR: (f64, f64, f64) = (1.0, 0.0, 0.0);

/// The color of the glyphs.
const TEXT_COLOR: (f64, f64, f64) = (0.0, 0.0, 0.0);

/// How a layout is drawn.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// The title of the PDF document.
    pub title: String,

    /// Whether the rectangles of the boxes are left out, only the glyphs being drawn.
    pub hide_boxes: bool,

    /// The font file embedded in the PDF, a builtin font is used if there is none.
    pub font: Option<PathBuf>,
}

impl Default for RenderOptions {
    fn default() -> RenderOptions {
        RenderOptions {
            title: String::from("boxes"),
            hide_boxes: true,
            font: None,
        }
    }
}

/// Returns the size of a sheet that can hold every page, keeping the same margin on the right
/// as on the left of the pages.
///
/// A layout without any page gets a sheet of one point by one point.
pub fn sheet_size(pages: &[Page]) -> (Pt, Pt) {
    let first = match pages.first() {
        Some(first) => first,
        None => return (Pt(1.0), Pt(1.0)),
    };

    let left = pages.iter().map(|p| p.x).fold(first.x, min);
    let right = pages.iter().map(Page::right).fold(first.right(), max);
    let bottom = pages.iter().map(Page::bottom).fold(first.bottom(), max);

    (right + left, bottom)
}

fn min(a: Pt, b: Pt) -> Pt {
    if a < b {
        a
    } else {
        b
    }
}

fn max(a: Pt, b: Pt) -> Pt {
    if a > b {
        a
    } else {
        b
    }
}

/// Converts layout coordinates into PDF coordinates on a sheet of a given height.
pub fn flip(x: Pt, y: Pt, sheet_height: Pt) -> (Pt, Pt) {
    (x, sheet_height - y)
}

/// Draws a layout into a PDF file.
pub fn render<P: AsRef<Path>>(layout: &Layout, options: &RenderOptions, path: P) -> Result<()> {
    let (width, height) = sheet_size(&layout.pages);

    let (document, page, layer) =
        PdfDocument::new(options.title.as_str(), width.into(), height.into(), "boxes");
    let layer = document.get_page(page).get_layer(layer);
    let font = load_font(&document, options)?;

    let mut canvas = Canvas {
        layer,
        font,
        height,
    };

    for page in &layout.pages {
        canvas.rectangle(page.x, page.y, page.width, page.height, PAGE_COLOR);
    }

    let mut glyphs = 0;

    for item in &layout.boxes {
        if !options.hide_boxes {
            let color = if item.stretchy {
                STRETCHY_COLOR
            } else {
                RIGID_COLOR
            };

            canvas.rectangle(item.x, item.y, item.width, item.height, color);
        }

        if canvas.glyph(item) {
            glyphs += 1;
        }
    }

    debug!(
        "drew {} pages and {} glyphs on a {:?} x {:?} sheet",
        layout.pages.len(),
        glyphs,
        width,
        height
    );

    let file = File::create(path.as_ref())?;
    let mut writer = BufWriter::new(file);
    document.save(&mut writer)?;

    info!("wrote {}", path.as_ref().display());
    Ok(())
}

/// Adds the font of the glyphs to the document.
fn load_font(document: &PdfDocumentReference, options: &RenderOptions) -> Result<IndirectFontRef> {
    match &options.font {
        Some(path) => {
            let file = File::open(path).map_err(|_| Error::FontNotFound(path.clone()))?;
            Ok(document.add_external_font(file)?)
        }
        None => Ok(document.add_builtin_font(BuiltinFont::Helvetica)?),
    }
}

/// The layer everything is drawn on.
struct Canvas {
    /// The only layer of the sheet.
    layer: PdfLayerReference,

    /// The font of the glyphs.
    font: IndirectFontRef,

    /// The height of the sheet.
    height: Pt,
}

impl Canvas {
    /// Fills a rectangle given by its top left corner.
    fn rectangle(&mut self, x: Pt, y: Pt, width: Pt, height: Pt, color: (f64, f64, f64)) {
        let (left, top) = flip(x, y, self.height);
        let (right, bottom) = flip(x + width, y + height, self.height);

        let points = vec![
            (Point::new(left.into(), top.into()), false),
            (Point::new(right.into(), top.into()), false),
            (Point::new(right.into(), bottom.into()), false),
            (Point::new(left.into(), bottom.into()), false),
        ];

        self.layer.set_fill_color(rgb(color));
        self.layer.add_shape(Line {
            points,
            is_closed: true,
            has_fill: true,
            has_stroke: false,
            is_clipping_path: false,
        });
    }

    /// Draws the glyph of a box on its baseline, which is the bottom of the box.
    ///
    /// Returns false if the box has nothing to show.
    fn glyph(&mut self, item: &BoundingBox) -> bool {
        let glyph = match item.glyph {
            Some(glyph) if item.is_visible() => glyph,
            _ => return false,
        };

        let (x, y) = flip(item.x, item.bottom(), self.height);

        self.layer.set_fill_color(rgb(TEXT_COLOR));
        self.layer
            .use_text(glyph.to_string(), item.height.0, x.into(), y.into(), &self.font);

        true
    }
}

fn rgb((r, g, b): (f64, f64, f64)) -> Color {
    Color::Rgb(Rgb::new(r, g, b, None))
}

#[cfg(test)]
mod tests {
    use std::env;
    use std::fs;

    use printpdf::Pt;

    use crate::document::Document;
    use crate::fonts::Monospace;
    use crate::layout::layout;
    use crate::layout::pages::{Page, Pages};
    use crate::render::{flip, render, sheet_size, RenderOptions};
    use crate::{Error, Result};

    #[test]
    fn sheet_holds_every_page() {
        let pages = Page::row_of(3, Pt(30.0), Pt(50.0), Pt(5.0), Pt(10.0));
        assert_eq!(sheet_size(&pages), (Pt(120.0), Pt(50.0)));
    }

    #[test]
    fn sheet_without_pages() {
        assert_eq!(sheet_size(&[]), (Pt(1.0), Pt(1.0)));
    }

    #[test]
    fn flip_is_its_own_inverse() {
        let (x, y) = flip(Pt(3.0), Pt(10.0), Pt(50.0));
        assert_eq!((x, y), (Pt(3.0), Pt(40.0)));
        assert_eq!(flip(x, y, Pt(50.0)), (Pt(3.0), Pt(10.0)));
    }

    #[test]
    fn writes_a_pdf() -> Result<()> {
        let shaper = Monospace::for_size(Pt(10.0));
        let mut document = Document::from_text("Hello world", Pt(10.0));
        document.shape(&shaper)?;

        let pages = Pages::new(Page::row_of(2, Pt(100.0), Pt(100.0), Pt(5.0), Pt(5.0)));
        let layout = layout(document, pages, Pt(0.5), &shaper)?;

        let path = env::temp_dir().join(format!("boxes-render-{}.pdf", std::process::id()));
        let options = RenderOptions {
            hide_boxes: false,
            ..RenderOptions::default()
        };

        render(&layout, &options, &path)?;

        let bytes = fs::read(&path)?;
        fs::remove_file(&path)?;
        assert!(bytes.starts_with(b"%PDF"));
        Ok(())
    }

    #[test]
    fn missing_font() {
        let options = RenderOptions {
            font: Some("does/not/exist.ttf".into()),
            ..RenderOptions::default()
        };

        let path = env::temp_dir().join(format!("boxes-font-{}.pdf", std::process::id()));
        let layout = crate::layout::Layout {
            boxes: vec![],
            pages: vec![],
            lines: vec![],
        };

        match render(&layout, &options, &path) {
            Err(Error::FontNotFound(_)) => (),
            _ => panic!("the font shouldn't have been found"),
        }
    }
}
