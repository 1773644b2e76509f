use std::fmt;

use crate::glyph::Symbol;

/// Errors returned by glyph lookup, path building, and morph construction.
///
/// Out-of-range progress fractions, redundant cancels, and restarting a
/// running driver are expected usage and handled by clamping/replacement,
/// not represented here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MorphError {
    /// The symbol is not one of the ten digits or the blank glyph.
    UnknownSymbol(Symbol),

    /// A control-point sequence violated the odd-length >= 3 invariant.
    MalformedSequence(usize),

    /// Morph requested between sequences of differing point counts.
    /// Positional correspondence breaks, so the request is rejected
    /// rather than partially interpolated.
    LengthMismatch { start: usize, end: usize },
}

impl fmt::Display for MorphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownSymbol(sym) => write!(f, "unknown glyph symbol: {sym:?}"),
            Self::MalformedSequence(len) => {
                write!(f, "malformed control-point sequence: length {len}, need odd >= 3")
            }
            Self::LengthMismatch { start, end } => {
                write!(f, "cannot morph between sequences of {start} and {end} points")
            }
        }
    }
}

impl std::error::Error for MorphError {}
