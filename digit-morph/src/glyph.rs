//! Static glyph table: one control-point sequence per symbol.
//!
//! Every sequence has exactly [`GLYPH_POINTS`] entries: one starting anchor
//! followed by (control, endpoint) pairs for eight quadratic segments.
//! Equal length across all symbols is what makes any two glyphs morphable
//! by positional correspondence.

use kurbo::Point;

use crate::error::MorphError;

/// Points per glyph: 1 anchor + 8 quadratic (control, endpoint) pairs.
pub const GLYPH_POINTS: usize = 17;

/// A glyph identifier: one of the ten digits, or the blank glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    Digit(u8),
    Nothing,
}

impl Symbol {
    /// Digits above 9 are representable but rejected by [`sequence_for`].
    pub fn digit(d: u8) -> Self {
        Self::Digit(d)
    }
}

/// Look up the control-point sequence for a symbol. Pure, no side effects.
pub fn sequence_for(symbol: Symbol) -> Result<&'static [Point], MorphError> {
    match symbol {
        Symbol::Nothing => Ok(&NOTHING),
        Symbol::Digit(0) => Ok(&ZERO),
        Symbol::Digit(1) => Ok(&ONE),
        Symbol::Digit(2) => Ok(&TWO),
        Symbol::Digit(3) => Ok(&THREE),
        Symbol::Digit(4) => Ok(&FOUR),
        Symbol::Digit(5) => Ok(&FIVE),
        Symbol::Digit(6) => Ok(&SIX),
        Symbol::Digit(7) => Ok(&SEVEN),
        Symbol::Digit(8) => Ok(&EIGHT),
        Symbol::Digit(9) => Ok(&NINE),
        _ => Err(MorphError::UnknownSymbol(symbol)),
    }
}

const fn p(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

/// The blank glyph: every point collapsed to the glyph-box center, so a
/// morph to or from it reads as the digit growing from / shrinking to a dot.
const NOTHING: [Point; GLYPH_POINTS] = [p(550.0, 700.0); GLYPH_POINTS];

const ZERO: [Point; GLYPH_POINTS] = [
    p(550.0, 1350.0),
    p(695.0, 1350.0),
    p(797.5, 1159.5),
    p(900.0, 969.0),
    p(900.0, 700.0),
    p(900.0, 431.0),
    p(797.5, 240.5),
    p(695.0, 50.0),
    p(550.0, 50.0),
    p(405.0, 50.0),
    p(302.5, 240.5),
    p(200.0, 431.0),
    p(200.0, 700.0),
    p(200.0, 969.0),
    p(302.5, 1159.5),
    p(405.0, 1350.0),
    p(550.0, 1350.0),
];

const ONE: [Point; GLYPH_POINTS] = [
    p(350.0, 1100.0),
    p(425.0, 1212.0),
    p(500.0, 1325.0),
    p(550.0, 1362.0),
    p(600.0, 1400.0),
    p(600.0, 1287.0),
    p(600.0, 1175.0),
    p(600.0, 1062.0),
    p(600.0, 950.0),
    p(600.0, 837.0),
    p(600.0, 725.0),
    p(600.0, 612.0),
    p(600.0, 500.0),
    p(600.0, 387.0),
    p(600.0, 275.0),
    p(600.0, 162.0),
    p(600.0, 50.0),
];

const TWO: [Point; GLYPH_POINTS] = [
    p(200.0, 1150.0),
    p(230.0, 1320.0),
    p(370.0, 1390.0),
    p(550.0, 1470.0),
    p(730.0, 1390.0),
    p(870.0, 1320.0),
    p(900.0, 1150.0),
    p(900.0, 950.0),
    p(780.0, 760.0),
    p(660.0, 570.0),
    p(480.0, 395.0),
    p(300.0, 220.0),
    p(200.0, 50.0),
    p(375.0, 50.0),
    p(550.0, 50.0),
    p(725.0, 50.0),
    p(900.0, 50.0),
];

const THREE: [Point; GLYPH_POINTS] = [
    p(250.0, 1275.0),
    p(340.0, 1400.0),
    p(550.0, 1425.0),
    p(800.0, 1450.0),
    p(860.0, 1225.0),
    p(900.0, 1040.0),
    p(750.0, 890.0),
    p(660.0, 810.0),
    p(550.0, 750.0),
    p(680.0, 700.0),
    p(790.0, 600.0),
    p(950.0, 440.0),
    p(850.0, 240.0),
    p(760.0, 70.0),
    p(500.0, 60.0),
    p(330.0, 55.0),
    p(225.0, 175.0),
];

const FOUR: [Point; GLYPH_POINTS] = [
    p(700.0, 1400.0),
    p(612.0, 1242.0),
    p(525.0, 1083.0),
    p(437.0, 925.0),
    p(350.0, 767.0),
    p(262.0, 608.0),
    p(175.0, 450.0),
    p(362.0, 450.0),
    p(550.0, 450.0),
    p(737.0, 450.0),
    p(925.0, 450.0),
    p(812.0, 450.0),
    p(700.0, 450.0),
    p(700.0, 350.0),
    p(700.0, 250.0),
    p(700.0, 150.0),
    p(700.0, 50.0),
];

const FIVE: [Point; GLYPH_POINTS] = [
    p(875.0, 1400.0),
    p(725.0, 1400.0),
    p(575.0, 1400.0),
    p(425.0, 1400.0),
    p(275.0, 1400.0),
    p(265.0, 1125.0),
    p(250.0, 850.0),
    p(400.0, 960.0),
    p(575.0, 960.0),
    p(850.0, 960.0),
    p(890.0, 650.0),
    p(920.0, 380.0),
    p(725.0, 175.0),
    p(600.0, 60.0),
    p(450.0, 75.0),
    p(280.0, 95.0),
    p(200.0, 250.0),
];

const SIX: [Point; GLYPH_POINTS] = [
    p(800.0, 1350.0),
    p(600.0, 1420.0),
    p(475.0, 1300.0),
    p(300.0, 1125.0),
    p(240.0, 900.0),
    p(190.0, 690.0),
    p(200.0, 500.0),
    p(215.0, 215.0),
    p(450.0, 140.0),
    p(700.0, 65.0),
    p(830.0, 280.0),
    p(935.0, 480.0),
    p(820.0, 650.0),
    p(710.0, 810.0),
    p(500.0, 790.0),
    p(300.0, 770.0),
    p(215.0, 590.0),
];

const SEVEN: [Point; GLYPH_POINTS] = [
    p(175.0, 1400.0),
    p(300.0, 1400.0),
    p(425.0, 1400.0),
    p(550.0, 1400.0),
    p(675.0, 1400.0),
    p(800.0, 1400.0),
    p(925.0, 1400.0),
    p(875.0, 1265.0),
    p(825.0, 1130.0),
    p(775.0, 995.0),
    p(725.0, 860.0),
    p(675.0, 725.0),
    p(625.0, 590.0),
    p(575.0, 455.0),
    p(525.0, 320.0),
    p(475.0, 185.0),
    p(425.0, 50.0),
];

const EIGHT: [Point; GLYPH_POINTS] = [
    p(550.0, 750.0),
    p(225.0, 750.0),
    p(225.0, 1075.0),
    p(225.0, 1400.0),
    p(550.0, 1400.0),
    p(875.0, 1400.0),
    p(875.0, 1075.0),
    p(875.0, 750.0),
    p(550.0, 750.0),
    p(913.0, 750.0),
    p(913.0, 387.0),
    p(913.0, 24.0),
    p(550.0, 24.0),
    p(187.0, 24.0),
    p(187.0, 387.0),
    p(187.0, 750.0),
    p(550.0, 750.0),
];

const NINE: [Point; GLYPH_POINTS] = [
    p(300.0, 100.0),
    p(500.0, 30.0),
    p(625.0, 150.0),
    p(800.0, 325.0),
    p(860.0, 550.0),
    p(910.0, 760.0),
    p(900.0, 950.0),
    p(885.0, 1235.0),
    p(650.0, 1310.0),
    p(400.0, 1385.0),
    p(270.0, 1170.0),
    p(165.0, 970.0),
    p(280.0, 800.0),
    p(390.0, 640.0),
    p(600.0, 660.0),
    p(800.0, 680.0),
    p(885.0, 860.0),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn all_symbols() -> Vec<Symbol> {
        let mut symbols: Vec<Symbol> = (0..10).map(Symbol::digit).collect();
        symbols.push(Symbol::Nothing);
        symbols
    }

    #[test]
    fn every_entry_has_the_shared_point_count() {
        for sym in all_symbols() {
            let seq = sequence_for(sym).unwrap();
            assert_eq!(seq.len(), GLYPH_POINTS, "wrong point count for {sym:?}");
        }
    }

    #[test]
    fn point_count_is_odd_and_large_enough() {
        assert!(GLYPH_POINTS % 2 == 1);
        assert!(GLYPH_POINTS >= 3);
    }

    #[test]
    fn out_of_range_digit_is_rejected() {
        let err = sequence_for(Symbol::digit(10)).unwrap_err();
        assert_eq!(err, MorphError::UnknownSymbol(Symbol::Digit(10)));
    }

    #[test]
    fn nothing_is_a_single_collapsed_point() {
        let seq = sequence_for(Symbol::Nothing).unwrap();
        assert!(seq.iter().all(|pt| *pt == seq[0]));
    }

    #[test]
    fn lookup_is_stable_across_calls() {
        let a = sequence_for(Symbol::digit(5)).unwrap();
        let b = sequence_for(Symbol::digit(5)).unwrap();
        assert_eq!(a, b);
    }
}
