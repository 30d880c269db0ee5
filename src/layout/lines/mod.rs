//! Breaking a document into justified lines.

pub mod engine;
pub mod justification;
pub mod linebreak;

pub use engine::{Engine, Line, LineEnd};
pub use justification::{Justifier, Ragged, Spread, Stretch};
