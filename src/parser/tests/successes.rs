//! This module contains the geometries that should parse.

use printpdf::{Mm, Pt};
use test_case::test_case;

use crate::parser::{parse_geometry, Geometry};
use crate::units::nearly_equal;

#[test_case("30x50", Pt(30.0), Pt(50.0) ; "bare numbers are points")]
#[test_case("300pt x 500pt", Pt(300.0), Pt(500.0) ; "explicit points")]
#[test_case("210mm x 297mm", Mm(210.0).into(), Mm(297.0).into() ; "millimeters")]
#[test_case(" 1cm X 2cm ", Mm(10.0).into(), Mm(20.0).into() ; "centimeters and spaces")]
#[test_case("8.5in×11in", Pt(612.0), Pt(792.0) ; "inches and cross")]
#[test_case("1e2 x 2E2", Pt(100.0), Pt(200.0) ; "exponents")]
#[test_case("5 in x 7", Pt(360.0), Pt(7.0) ; "mixed units")]
fn parses(content: &str, width: Pt, height: Pt) {
    let Geometry { width: w, height: h } = match parse_geometry("test", content) {
        Ok(geometry) => geometry,
        Err(diagnostic) => panic!("{}", diagnostic),
    };
    assert!(nearly_equal(w.0, width.0));
    assert!(nearly_equal(h.0, height.0));
}
