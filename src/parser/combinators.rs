//! This module contains all the functions needed for parsing geometries.

use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::character::complete::{one_of, space0};
use nom::combinator::{map_opt, map_res, opt};
use nom::number::complete::recognize_float;
use nom::IResult;
use printpdf::Pt;

use crate::parser::error::{Diagnostic, EmptyError, ErrorType};
use crate::parser::{position, Geometry, Span};
use crate::units::Unit;

/// The chars that can separate the width from the height.
pub const SEPARATORS: &str = "xX×";

/// The outcome of one step of the geometry parser.
type Step<'a, T> = Result<(Span<'a>, T), EmptyError>;

/// Creates an error.
fn error(span: Span, ty: ErrorType) -> EmptyError {
    EmptyError {
        position: position(&span),
        ty,
    }
}

/// Drops the spaces and tabs at the beginning of the input.
fn skip_spaces(input: Span) -> Span {
    match space0::<_, nom::error::Error<Span>>(input) {
        Ok((input, _)) => input,
        Err(_) => input,
    }
}

/// Returns true if the input starts with a letter.
fn starts_with_letter(input: Span) -> bool {
    input
        .fragment()
        .chars()
        .next()
        .map_or(false, char::is_alphabetic)
}

/// Parses a number.
/// ```
/// # use boxes::parser::Span;
/// # use boxes::parser::combinators::parse_number;
/// let (rest, number) = parse_number(Span::new("8.5in")).unwrap();
/// assert_eq!(number, 8.5);
/// assert_eq!(*rest.fragment(), "in");
/// ```
pub fn parse_number(input: Span) -> IResult<Span, f64> {
    map_res(recognize_float, |digits: Span| digits.fragment().parse::<f64>())(input)
}

/// Parses an optional unit, no unit meaning points.
/// ```
/// # use boxes::parser::Span;
/// # use boxes::parser::combinators::parse_unit;
/// # use boxes::units::Unit;
/// assert_eq!(parse_unit(Span::new("mm")).unwrap().1, Unit::Millimeter);
/// assert_eq!(parse_unit(Span::new("x12")).unwrap().1, Unit::Point);
/// ```
pub fn parse_unit(input: Span) -> IResult<Span, Unit> {
    let units = alt((tag("pt"), tag("mm"), tag("cm"), tag("in")));
    let (input, unit) = opt(map_opt(units, |s: Span| Unit::from_suffix(s.fragment())))(input)?;
    Ok((input, unit.unwrap_or(Unit::Point)))
}

/// Parses a length, that is a positive number followed by an optional unit.
fn parse_length(input: Span) -> Step<Pt> {
    let input = skip_spaces(input);

    let (rest, value) =
        parse_number(input).map_err(|_| error(input, ErrorType::ExpectedNumber))?;

    if !value.is_finite() || value <= 0.0 {
        return Err(error(input, ErrorType::NotPositive));
    }

    let rest = skip_spaces(rest);
    let (rest, unit) = parse_unit(rest).map_err(|_| error(rest, ErrorType::UnknownUnit))?;

    Ok((rest, unit.to_pt(value)))
}

/// Parses the separator between the width and the height.
fn parse_separator(input: Span) -> Step<char> {
    let input = skip_spaces(input);

    match one_of::<_, _, nom::error::Error<Span>>(SEPARATORS)(input) {
        Ok(parsed) => Ok(parsed),
        Err(_) if starts_with_letter(input) => Err(error(input, ErrorType::UnknownUnit)),
        Err(_) => Err(error(input, ErrorType::ExpectedSeparator)),
    }
}

/// Checks that nothing but spaces is left.
fn parse_end(input: Span) -> Step<()> {
    let input = skip_spaces(input);

    if input.fragment().is_empty() {
        Ok((input, ()))
    } else if starts_with_letter(input) {
        Err(error(input, ErrorType::UnknownUnit))
    } else {
        Err(error(input, ErrorType::TrailingCharacters))
    }
}

/// Parses the width, the separator and the height.
fn parse_lengths(input: Span) -> Step<Geometry> {
    let (input, width) = parse_length(input)?;
    let (input, _) = parse_separator(input)?;
    let (input, height) = parse_length(input)?;
    let (input, ()) = parse_end(input)?;
    Ok((input, Geometry { width, height }))
}

/// Parses a geometry such as `30x50` or `210mm x 297mm`.
///
/// The name describes where the content comes from, it is used in the error messages.
/// ```
/// # use printpdf::Pt;
/// # use boxes::parser::parse_geometry;
/// let geometry = parse_geometry("--page-size", "1in x 72").unwrap();
/// assert_eq!(geometry.width, Pt(72.0));
/// assert_eq!(geometry.height, Pt(72.0));
/// ```
pub fn parse_geometry(name: &str, content: &str) -> Result<Geometry, Diagnostic> {
    match parse_lengths(Span::new(content)) {
        Ok((_, geometry)) => Ok(geometry),
        Err(error) => Err(Diagnostic {
            name: name.to_owned(),
            content: content.to_owned(),
            error,
        }),
    }
}
