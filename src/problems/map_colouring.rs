//! Map colouring: adjacent regions must receive different colours.

use crate::{error::Result, solver::csp::Csp};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Colour {
    Red,
    Green,
    Blue,
    Yellow,
}

/// Builds a map-colouring CSP: one variable per region over the palette, and
/// one inequality constraint per border.
pub fn build(
    regions: &[&str],
    borders: &[(&str, &str)],
    palette: &[Colour],
) -> Result<Csp<Colour>> {
    let mut csp = Csp::new();
    for region in regions {
        csp.add_variable(*region, palette.iter().copied())?;
    }
    for &(a, b) in borders {
        csp.add_constraint(a, b, |x, y| x != y)?;
    }
    Ok(csp)
}

/// The seven-region Australia map over a three-colour palette. Tasmania
/// borders nothing and may take any colour.
pub fn australia() -> Csp<Colour> {
    build(
        &["WA", "NT", "SA", "Q", "NSW", "V", "T"],
        &[
            ("SA", "WA"),
            ("SA", "NT"),
            ("SA", "Q"),
            ("SA", "NSW"),
            ("SA", "V"),
            ("NT", "WA"),
            ("NT", "Q"),
            ("NSW", "Q"),
            ("NSW", "V"),
        ],
        &[Colour::Red, Colour::Green, Colour::Blue],
    )
    .expect("the built-in map is well formed")
}
