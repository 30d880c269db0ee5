//! This module defines the configuration of a conversion. The configuration is parsed from a
//! TOML file located at the root of the project, and holds the geometry of the pages, the font
//! and the hyphenation settings. Every field takes a default value that is also provided by this
//! module.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::{fmt, result};

use printpdf::Pt;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::document::Document;
use crate::fonts::{Font, Monospace, Shaper};
use crate::hyphenate::{Dictionary, Hyphenate, Verbatim};
use crate::layout::pages::{Page, Pages};
use crate::layout::{layout, Layout};
use crate::render::{render, RenderOptions};
use crate::{Error, Result};

/// The name of the configuration file of a project.
pub const CONFIG_FILE: &str = "boxes.toml";

/// Serializes a `Pt` structure.
// This is required to use in macro `serialize_with`.
#[allow(clippy::trivially_copy_pass_by_ref)]
pub fn serialize_pt<S: Serializer>(pt: &Pt, serializer: S) -> result::Result<S::Ok, S::Error> {
    serializer.serialize_f64(pt.0)
}

/// Deserializes a `Pt` structure.
pub fn deserialize_pt<'a, D: Deserializer<'a>>(deserializer: D) -> result::Result<Pt, D::Error> {
    deserializer.deserialize_f64(PtVisitor)
}

macro_rules! visit_from {
    ($visit: ident, $ty: ty) => {
        fn $visit<E>(self, value: $ty) -> result::Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Pt(f64::from(value)))
        }
    };
}

macro_rules! visit_as {
    ($visit: ident, $ty: ty) => {
        fn $visit<E>(self, value: $ty) -> result::Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Pt(value as f64))
        }
    };
}

/// Visitor for the `Pt` structure, accepting integers as well as floats.
pub struct PtVisitor;

impl<'a> Visitor<'a> for PtVisitor {
    type Value = Pt;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a length in points")
    }

    visit_from!(visit_u32, u32);
    visit_as!(visit_u64, u64);
    visit_from!(visit_i32, i32);
    visit_as!(visit_i64, i64);
    visit_from!(visit_f64, f64);
}

fn default_page_count() -> usize {
    1000
}

fn default_language() -> String {
    String::from("en-us")
}

fn default_true() -> bool {
    true
}

/// Holds the configuration of a conversion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// The title of the document.
    pub title: String,

    /// The width of every page.
    #[serde(serialize_with = "serialize_pt")]
    #[serde(deserialize_with = "deserialize_pt")]
    pub page_width: Pt,

    /// The height of every page.
    #[serde(serialize_with = "serialize_pt")]
    #[serde(deserialize_with = "deserialize_pt")]
    pub page_height: Pt,

    /// The horizontal position of the first page.
    #[serde(serialize_with = "serialize_pt")]
    #[serde(deserialize_with = "deserialize_pt")]
    pub page_margin: Pt,

    /// The horizontal gap between two pages.
    #[serde(serialize_with = "serialize_pt")]
    #[serde(deserialize_with = "deserialize_pt")]
    pub page_gap: Pt,

    /// The number of pages made available to the layout.
    #[serde(default = "default_page_count")]
    pub page_count: usize,

    /// The space between two boxes, and between two rows.
    #[serde(serialize_with = "serialize_pt")]
    #[serde(deserialize_with = "deserialize_pt")]
    pub separation: Pt,

    /// The size of the font, which is also the height of every box.
    #[serde(serialize_with = "serialize_pt")]
    #[serde(deserialize_with = "deserialize_pt")]
    pub font_size: Pt,

    /// The font used to measure and draw the glyphs. Without it, glyphs are measured as if the
    /// font was monospace and drawn with a builtin font.
    #[serde(default)]
    pub font: Option<PathBuf>,

    /// The language of the hyphenation dictionary.
    #[serde(default = "default_language")]
    pub language: String,

    /// Whether words may be split at the end of a row.
    #[serde(default = "default_true")]
    pub hyphenate: bool,

    /// Whether the rectangles of the boxes are left out of the output.
    #[serde(default = "default_true")]
    pub hide_boxes: bool,

    /// The path to the text to lay out.
    pub input: PathBuf,

    /// The path to the PDF file to write.
    pub output: PathBuf,
}

impl Config {
    /// Creates a default configuration with a title.
    pub fn with_title(title: &str) -> Config {
        Config {
            title: String::from(title),
            page_width: Pt(300.0),
            page_height: Pt(500.0),
            page_margin: Pt(50.0),
            page_gap: Pt(50.0),
            page_count: default_page_count(),
            separation: Pt(0.5),
            font_size: Pt(10.0),
            font: None,
            language: default_language(),
            hyphenate: true,
            hide_boxes: true,
            input: PathBuf::from("main.txt"),
            output: PathBuf::from("output.pdf"),
        }
    }

    /// Reads the configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Config> {
        let content = fs::read_to_string(path.as_ref())?;
        let config = toml::from_str(&content)?;
        debug!("read configuration from {}", path.as_ref().display());
        Ok(config)
    }

    /// Writes the configuration into a TOML file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let toml = toml::to_string(self)?;
        let mut file = File::create(path.as_ref())?;
        file.write_all(toml.as_bytes())?;
        Ok(())
    }

    /// Creates the pages the layout will fill, side by side.
    pub fn pages(&self) -> Pages {
        Pages::new(Page::row_of(
            self.page_count,
            self.page_width,
            self.page_height,
            self.page_margin,
            self.page_gap,
        ))
    }

    /// Creates what inserts the soft hyphens in the text.
    pub fn hyphenator(&self) -> Result<Box<dyn Hyphenate>> {
        if self.hyphenate {
            Ok(Box::new(Dictionary::load(&self.language)?))
        } else {
            Ok(Box::new(Verbatim))
        }
    }

    /// Creates what measures the glyphs, the path of the font being relative to `root`.
    pub fn shaper(&self, root: &Path) -> Result<Box<dyn Shaper>> {
        match &self.font {
            Some(font) => Ok(Box::new(Font::from_file(root.join(font), self.font_size)?)),
            None => Ok(Box::new(Monospace::for_size(self.font_size))),
        }
    }

    /// Runs the whole conversion: reads the input, lays it out and writes the output.
    ///
    /// The paths of the configuration are relative to `root`.
    pub fn build<P: AsRef<Path>>(&self, root: P) -> Result<Layout> {
        let root = root.as_ref();
        let input = root.join(&self.input);

        info!("laying out {}", input.display());
        let text = fs::read_to_string(&input)?;
        let text = self.hyphenator()?.hyphenate(&text)?;

        let shaper = self.shaper(root)?;
        let mut document = Document::from_text(&text, self.font_size);
        document.shape(shaper.as_ref())?;

        let layout = layout(document, self.pages(), self.separation, shaper.as_ref())?;
        info!(
            "{} boxes on {} pages: {}",
            layout.boxes.len(),
            layout.pages.len(),
            layout.report()
        );

        let options = RenderOptions {
            title: self.title.clone(),
            hide_boxes: self.hide_boxes,
            font: self.font.as_ref().map(|font| root.join(font)),
        };

        render(&layout, &options, root.join(&self.output))?;
        Ok(layout)
    }
}

/// Looks for the configuration file in a directory and its ancestors.
pub fn find_config_file<P: AsRef<Path>>(directory: P) -> Result<PathBuf> {
    let mut current = PathBuf::from(directory.as_ref());

    loop {
        current.push(CONFIG_FILE);

        if current.is_file() {
            return Ok(current);
        }

        // Remove the file name, then go to the parent directory.
        current.pop();
        if !current.pop() {
            return Err(Error::NoConfigFile);
        }
    }
}
