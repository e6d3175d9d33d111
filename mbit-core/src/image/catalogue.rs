//! Built-in named images.
//!
//! Every entry is a `const`, so callers always receive their own copy and
//! a built-in can never be changed in place.

use super::Image;
use crate::error::{MbitError, MbitResult};

impl Image {
    pub const ANGRY: Image = Image::from_literal("90009:09090:00000:99999:90909");
    pub const ASLEEP: Image = Image::from_literal("00000:99099:00000:09990:00000");
    pub const BUTTERFLY: Image = Image::from_literal("99099:99999:00900:99999:99099");
    pub const CHESSBOARD: Image = Image::from_literal("09090:90909:09090:90909:09090");
    pub const CONFUSED: Image = Image::from_literal("00000:09090:00000:09090:90909");
    pub const COW: Image = Image::from_literal("90009:90009:99999:09990:00900");
    pub const DIAMOND: Image = Image::from_literal("00900:09090:90009:09090:00900");
    pub const DIAMOND_SMALL: Image = Image::from_literal("00000:00900:09090:00900:00000");
    pub const DUCK: Image = Image::from_literal("09900:99900:09999:09990:00000");
    pub const FABULOUS: Image = Image::from_literal("99999:99099:00000:09090:09990");
    pub const GHOST: Image = Image::from_literal("99999:90909:99999:99999:90909");
    pub const GIRAFFE: Image = Image::from_literal("99000:09000:09000:09990:09090");
    pub const HAPPY: Image = Image::from_literal("00000:09090:00000:90009:09990");
    pub const HEART: Image = Image::from_literal("09090:99999:99999:09990:00900");
    pub const HEART_SMALL: Image = Image::from_literal("00000:09090:09990:00900:00000");
    pub const HOUSE: Image = Image::from_literal("00900:09990:99999:09990:09090");
    pub const MEH: Image = Image::from_literal("09090:00000:00090:00900:09000");
    pub const MUSIC_CROTCHET: Image = Image::from_literal("00900:00900:00900:99900:99900");
    pub const MUSIC_QUAVER: Image = Image::from_literal("00900:00990:00909:99900:99900");
    pub const MUSIC_QUAVERS: Image = Image::from_literal("09999:09009:09009:99099:99099");
    pub const NO: Image = Image::from_literal("90009:09090:00900:09090:90009");
    pub const PACMAN: Image = Image::from_literal("09999:99090:99900:99990:09999");
    pub const PITCHFORK: Image = Image::from_literal("90909:90909:99999:00900:00900");
    pub const RABBIT: Image = Image::from_literal("90900:90900:99990:99090:99990");
    pub const ROLLERSKATE: Image = Image::from_literal("00099:00099:99999:99999:09090");
    pub const SAD: Image = Image::from_literal("00000:09090:00000:09990:90009");
    pub const SILLY: Image = Image::from_literal("90009:00000:99999:00909:00999");
    pub const SKULL: Image = Image::from_literal("09990:90909:99999:09990:09990");
    pub const SMILE: Image = Image::from_literal("00000:00000:00000:90009:09990");
    pub const SNAKE: Image = Image::from_literal("99000:99099:09090:09990:00000");
    pub const SQUARE: Image = Image::from_literal("99999:90009:90009:90009:99999");
    pub const SQUARE_SMALL: Image = Image::from_literal("00000:09990:09090:09990:00000");
    pub const STICKFIGURE: Image = Image::from_literal("00900:99999:00900:09090:90009");
    pub const SURPRISED: Image = Image::from_literal("09090:00000:00900:09090:00900");
    pub const SWORD: Image = Image::from_literal("00900:00900:00900:09990:00900");
    pub const TARGET: Image = Image::from_literal("00900:09990:99099:09990:00900");
    pub const TORTOISE: Image = Image::from_literal("00000:09990:99999:09090:00000");
    pub const TRIANGLE: Image = Image::from_literal("00000:00900:09090:99999:00000");
    pub const TRIANGLE_LEFT: Image = Image::from_literal("90000:99000:90900:90090:99999");
    pub const TSHIRT: Image = Image::from_literal("99099:99999:09990:09990:09990");
    pub const UMBRELLA: Image = Image::from_literal("09990:99999:00900:90900:09900");
    pub const XMAS: Image = Image::from_literal("00900:09990:00900:09990:99999");
    pub const YES: Image = Image::from_literal("00000:00009:00090:90900:09000");
    pub const ARROW_N: Image = Image::from_literal("00900:09990:90909:00900:00900");
    pub const ARROW_NE: Image = Image::from_literal("00999:00099:00909:09000:90000");
    pub const ARROW_E: Image = Image::from_literal("00900:00090:99999:00090:00900");
    pub const ARROW_SE: Image = Image::from_literal("90000:09000:00909:00099:00999");
    pub const ARROW_S: Image = Image::from_literal("00900:00900:90909:09990:00900");
    pub const ARROW_SW: Image = Image::from_literal("00009:00090:90900:99000:99900");
    pub const ARROW_W: Image = Image::from_literal("00900:09000:99999:09000:00900");
    pub const ARROW_NW: Image = Image::from_literal("99900:99000:90900:00090:00009");
    pub const CLOCK12: Image = Image::from_literal("00900:00900:00900:00000:00000");
    pub const CLOCK1: Image = Image::from_literal("00090:00090:00900:00000:00000");
    pub const CLOCK2: Image = Image::from_literal("00000:00099:00900:00000:00000");
    pub const CLOCK3: Image = Image::from_literal("00000:00000:00999:00000:00000");
    pub const CLOCK4: Image = Image::from_literal("00000:00000:00900:00099:00000");
    pub const CLOCK5: Image = Image::from_literal("00000:00000:00900:00090:00090");
    pub const CLOCK6: Image = Image::from_literal("00000:00000:00900:00900:00900");
    pub const CLOCK7: Image = Image::from_literal("00000:00000:00900:09000:09000");
    pub const CLOCK8: Image = Image::from_literal("00000:00000:00900:99000:00000");
    pub const CLOCK9: Image = Image::from_literal("00000:00000:99900:00000:00000");
    pub const CLOCK10: Image = Image::from_literal("00000:99000:00900:00000:00000");
    pub const CLOCK11: Image = Image::from_literal("09000:09000:00900:00000:00000");

    /// Arrows in clockwise order starting at north.
    pub const ALL_ARROWS: [Image; 8] = [
        Image::ARROW_N,
        Image::ARROW_NE,
        Image::ARROW_E,
        Image::ARROW_SE,
        Image::ARROW_S,
        Image::ARROW_SW,
        Image::ARROW_W,
        Image::ARROW_NW,
    ];

    /// Clock hands in clockwise order starting at twelve.
    pub const ALL_CLOCKS: [Image; 12] = [
        Image::CLOCK12,
        Image::CLOCK1,
        Image::CLOCK2,
        Image::CLOCK3,
        Image::CLOCK4,
        Image::CLOCK5,
        Image::CLOCK6,
        Image::CLOCK7,
        Image::CLOCK8,
        Image::CLOCK9,
        Image::CLOCK10,
        Image::CLOCK11,
    ];
}

/// Every built-in image, addressable by name.
pub(crate) const CATALOGUE: [(&str, Image); 63] = [
    ("ANGRY", Image::ANGRY),
    ("ASLEEP", Image::ASLEEP),
    ("BUTTERFLY", Image::BUTTERFLY),
    ("CHESSBOARD", Image::CHESSBOARD),
    ("CONFUSED", Image::CONFUSED),
    ("COW", Image::COW),
    ("DIAMOND", Image::DIAMOND),
    ("DIAMOND_SMALL", Image::DIAMOND_SMALL),
    ("DUCK", Image::DUCK),
    ("FABULOUS", Image::FABULOUS),
    ("GHOST", Image::GHOST),
    ("GIRAFFE", Image::GIRAFFE),
    ("HAPPY", Image::HAPPY),
    ("HEART", Image::HEART),
    ("HEART_SMALL", Image::HEART_SMALL),
    ("HOUSE", Image::HOUSE),
    ("MEH", Image::MEH),
    ("MUSIC_CROTCHET", Image::MUSIC_CROTCHET),
    ("MUSIC_QUAVER", Image::MUSIC_QUAVER),
    ("MUSIC_QUAVERS", Image::MUSIC_QUAVERS),
    ("NO", Image::NO),
    ("PACMAN", Image::PACMAN),
    ("PITCHFORK", Image::PITCHFORK),
    ("RABBIT", Image::RABBIT),
    ("ROLLERSKATE", Image::ROLLERSKATE),
    ("SAD", Image::SAD),
    ("SILLY", Image::SILLY),
    ("SKULL", Image::SKULL),
    ("SMILE", Image::SMILE),
    ("SNAKE", Image::SNAKE),
    ("SQUARE", Image::SQUARE),
    ("SQUARE_SMALL", Image::SQUARE_SMALL),
    ("STICKFIGURE", Image::STICKFIGURE),
    ("SURPRISED", Image::SURPRISED),
    ("SWORD", Image::SWORD),
    ("TARGET", Image::TARGET),
    ("TORTOISE", Image::TORTOISE),
    ("TRIANGLE", Image::TRIANGLE),
    ("TRIANGLE_LEFT", Image::TRIANGLE_LEFT),
    ("TSHIRT", Image::TSHIRT),
    ("UMBRELLA", Image::UMBRELLA),
    ("XMAS", Image::XMAS),
    ("YES", Image::YES),
    ("ARROW_N", Image::ARROW_N),
    ("ARROW_NE", Image::ARROW_NE),
    ("ARROW_E", Image::ARROW_E),
    ("ARROW_SE", Image::ARROW_SE),
    ("ARROW_S", Image::ARROW_S),
    ("ARROW_SW", Image::ARROW_SW),
    ("ARROW_W", Image::ARROW_W),
    ("ARROW_NW", Image::ARROW_NW),
    ("CLOCK12", Image::CLOCK12),
    ("CLOCK1", Image::CLOCK1),
    ("CLOCK2", Image::CLOCK2),
    ("CLOCK3", Image::CLOCK3),
    ("CLOCK4", Image::CLOCK4),
    ("CLOCK5", Image::CLOCK5),
    ("CLOCK6", Image::CLOCK6),
    ("CLOCK7", Image::CLOCK7),
    ("CLOCK8", Image::CLOCK8),
    ("CLOCK9", Image::CLOCK9),
    ("CLOCK10", Image::CLOCK10),
    ("CLOCK11", Image::CLOCK11),
];

impl Image {
    /// Returns a fresh copy of the built-in image called `name`.
    ///
    /// Names match the constants, e.g. `"HAPPY"` or `"ARROW_NE"`.
    pub fn from_catalogue(name: &str) -> MbitResult<Image> {
        CATALOGUE
            .iter()
            .find(|(entry, _)| *entry == name)
            .map(|(_, image)| *image)
            .ok_or_else(|| MbitError::UnknownImage(name.to_string()))
    }

    /// Names of all built-in images, in catalogue order.
    pub fn catalogue_names() -> impl Iterator<Item = &'static str> {
        CATALOGUE.iter().map(|(name, _)| *name)
    }
}
