//! This module contains everything related to parsing errors.

use std::error::Error;
use std::fmt;

use colored::*;

use crate::parser::Position;

/// The different types errors that can occur while parsing.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorType {
    /// A number was expected.
    ExpectedNumber,

    /// A length is zero or negative.
    NotPositive,

    /// The suffix of a length is not a known unit.
    UnknownUnit,

    /// The width is not followed by a separator.
    ExpectedSeparator,

    /// Something follows the height.
    TrailingCharacters,
}

impl ErrorType {
    /// Returns the title of the error.
    pub fn title(self) -> &'static str {
        match self {
            ErrorType::ExpectedNumber => "expected a number",
            ErrorType::NotPositive => "lengths must be positive",
            ErrorType::UnknownUnit => "unknown unit",
            ErrorType::ExpectedSeparator => "expected a separator",
            ErrorType::TrailingCharacters => "unexpected characters after the height",
        }
    }

    /// Returns the detail of the error.
    pub fn detail(self) -> &'static str {
        match self {
            ErrorType::ExpectedNumber => "a length starts here",
            ErrorType::NotPositive => "this length can't hold anything",
            ErrorType::UnknownUnit => "this unit is unknown",
            ErrorType::ExpectedSeparator => "expected `x` here",
            ErrorType::TrailingCharacters => "the geometry should end here",
        }
    }

    /// Returns an optional note.
    pub fn note(self) -> Option<&'static str> {
        match self {
            ErrorType::UnknownUnit => Some("known units are pt, mm, cm and in"),
            ErrorType::ExpectedSeparator => Some("geometries are written width x height"),
            _ => None,
        }
    }
}

/// An error that occured during the parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyError {
    /// The position of the error.
    pub position: Position,

    /// The type of the error.
    pub ty: ErrorType,
}

/// An error along with the content that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// What the content is, for example the name of a command line option.
    pub name: String,

    /// The content that produced the error.
    pub content: String,

    /// The error that was produced.
    pub error: EmptyError,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        let line = self.error.position.line;
        let column = self.error.position.column;

        let line_number = format!("{} ", line);
        let space = " ".repeat(line_number.len() - 1);
        let margin = " ".repeat(column);

        writeln!(fmt, "{}{}", "error: ".bold().red(), self.error.ty.title().bold())?;
        writeln!(fmt, "{}{} {}:{}", space, "-->".bold().blue(), self.name, column)?;
        writeln!(fmt, "{} {}", space, "|".blue().bold())?;
        writeln!(
            fmt,
            "{} {}",
            &format!("{}|", line_number).blue().bold(),
            self.content
        )?;
        writeln!(
            fmt,
            "{} {}{}{} {}",
            space,
            "|".blue().bold(),
            margin,
            "^".bold().red(),
            self.error.ty.detail().bold().red()
        )?;
        writeln!(fmt, "{} {}", space, "|".blue().bold())?;

        if let Some(note) = self.error.ty.note() {
            writeln!(
                fmt,
                "{} {} {}{}",
                space,
                "=".blue().bold(),
                "note: ".bold(),
                note
            )?;
        }

        Ok(())
    }
}

impl Error for Diagnostic {}

impl From<Diagnostic> for crate::Error {
    fn from(diagnostic: Diagnostic) -> crate::Error {
        crate::Error::InvalidGeometry(diagnostic.to_string())
    }
}
