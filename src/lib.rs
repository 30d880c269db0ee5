//! This crate lays out a sequence of boxes, typically one per character, into justified,
//! hyphenated text spread over a sequence of fixed-size pages.
//!
//! The pipeline is the following:
//!
//! 1. a [Document](document::Document) is built from some text, after a
//!    [Hyphenate](hyphenate::Hyphenate) implementation inserted soft hyphens in it,
//! 2. a [Shaper](fonts::Shaper) gives every box its advance width,
//! 3. [layout](layout::layout) breaks the boxes into justified rows and spreads the rows over
//!    the [pages](layout::pages::Pages),
//! 4. [render](render::render) draws the result.

#![warn(missing_docs)]

#[macro_use]
extern crate log;

pub mod config;
pub mod document;
pub mod fonts;
pub mod hyphenate;
pub mod layout;
pub mod parser;
pub mod render;
pub mod units;

use std::path::PathBuf;
use std::{error, fmt, io, result};

macro_rules! impl_from_error {
    ($type: ty, $variant: path, $from: ty) => {
        impl From<$from> for $type {
            fn from(e: $from) -> $type {
                $variant(e)
            }
        }
    };
}

/// The error type of the library.
#[derive(Debug)]
pub enum Error {
    /// Cannot read current directory.
    CannotReadCurrentDir,

    /// No boxes.toml was found.
    NoConfigFile,

    /// The layout needed more pages than the ones that were provided.
    PageExhausted {
        /// The index of the page that was requested.
        requested: usize,
    },

    /// A shaper returned a number of advances that doesn't match its input.
    ShapingMismatch {
        /// The number of chars that were sent to the shaper.
        expected: usize,

        /// The number of advances the shaper returned.
        found: usize,
    },

    /// No hyphenation dictionary is known for this language code.
    UnknownLanguage(String),

    /// A page geometry couldn't be understood, holds the rendered diagnostic.
    InvalidGeometry(String),

    /// Error while loading a hyphenation dictionary.
    HyphenationError(spandex_hyphenation::load::Error),

    /// Error while dealing with freetype.
    FreetypeError(freetype::Error),

    /// Error while dealing with printpdf.
    PrintpdfError(printpdf::errors::Error),

    /// The specified font was not found.
    FontNotFound(PathBuf),

    /// The configuration file couldn't be parsed.
    TomlError(toml::de::Error),

    /// The configuration couldn't be serialized.
    TomlSerializeError(toml::ser::Error),

    /// Another io error occured.
    IoError(io::Error),
}

impl_from_error!(Error, Error::HyphenationError, spandex_hyphenation::load::Error);
impl_from_error!(Error, Error::FreetypeError, freetype::Error);
impl_from_error!(Error, Error::PrintpdfError, printpdf::errors::Error);
impl_from_error!(Error, Error::TomlError, toml::de::Error);
impl_from_error!(Error, Error::TomlSerializeError, toml::ser::Error);
impl_from_error!(Error, Error::IoError, io::Error);

impl fmt::Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::CannotReadCurrentDir => write!(fmt, "cannot read current directory"),
            Error::NoConfigFile => write!(fmt, "no boxes.toml was found"),
            Error::PageExhausted { requested } => write!(
                fmt,
                "ran out of pages: page {} was requested, provide more pages",
                requested
            ),
            Error::ShapingMismatch { expected, found } => write!(
                fmt,
                "shaper returned {} advances for {} chars",
                found, expected
            ),
            Error::UnknownLanguage(code) => {
                write!(fmt, "no hyphenation dictionary for language \"{}\"", code)
            }
            Error::InvalidGeometry(diagnostic) => write!(fmt, "invalid geometry\n{}", diagnostic),
            Error::HyphenationError(e) => write!(fmt, "hyphenation error: {}", e),
            Error::FreetypeError(e) => write!(fmt, "freetype error: {}", e),
            Error::PrintpdfError(e) => write!(fmt, "printpdf error: {}", e),
            Error::FontNotFound(path) => write!(fmt, "couldn't find font \"{}\"", path.display()),
            Error::TomlError(e) => write!(fmt, "cannot parse configuration: {}", e),
            Error::TomlSerializeError(e) => write!(fmt, "cannot write configuration: {}", e),
            Error::IoError(e) => write!(fmt, "an io error occured: {}", e),
        }
    }
}

impl error::Error for Error {}

/// The result type of the library.
pub type Result<T> = result::Result<T, Error>;
