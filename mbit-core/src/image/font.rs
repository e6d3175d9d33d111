//! Character glyphs used by `show` and `scroll`.
//!
//! Covers printable ASCII (`' '` to `'~'`). Anything else renders as the
//! `'?'` glyph, as the device does.

use super::Image;

/// Glyph drawn for characters the font does not cover.
pub const UNKNOWN_GLYPH: Image = Image::from_literal("09990:90009:00990:00000:00900");

const FIRST: u32 = ' ' as u32;

static FONT: [Image; 95] = [
    Image::from_literal("00000:00000:00000:00000:00000"), // ' '
    Image::from_literal("09000:09000:09000:00000:09000"), // '!'
    Image::from_literal("09090:09090:00000:00000:00000"), // '"'
    Image::from_literal("09090:99999:09090:99999:09090"), // '#'
    Image::from_literal("09990:99009:09990:90099:09990"), // '$'
    Image::from_literal("99009:90090:00900:09009:90099"), // '%'
    Image::from_literal("09900:90090:09900:90090:09909"), // '&'
    Image::from_literal("09000:09000:00000:00000:00000"), // '\''
    Image::from_literal("00900:09000:09000:09000:00900"), // '('
    Image::from_literal("09000:00900:00900:00900:09000"), // ')'
    Image::from_literal("00000:09090:00900:09090:00000"), // '*'
    Image::from_literal("00000:00900:09990:00900:00000"), // '+'
    Image::from_literal("00000:00000:00000:00900:09000"), // ','
    Image::from_literal("00000:00000:09990:00000:00000"), // '-'
    Image::from_literal("00000:00000:00000:09000:00000"), // '.'
    Image::from_literal("00009:00090:00900:09000:90000"), // '/'
    Image::from_literal("09900:90090:90090:90090:09900"), // '0'
    Image::from_literal("00900:09900:00900:00900:09990"), // '1'
    Image::from_literal("99900:00090:09900:90000:99990"), // '2'
    Image::from_literal("99990:00090:00900:90090:09900"), // '3'
    Image::from_literal("00990:09090:90090:99999:00090"), // '4'
    Image::from_literal("99999:90000:99990:00009:99990"), // '5'
    Image::from_literal("00090:00900:09990:90009:09990"), // '6'
    Image::from_literal("99999:00090:00900:09000:90000"), // '7'
    Image::from_literal("09990:90009:09990:90009:09990"), // '8'
    Image::from_literal("09990:90009:09990:00900:09000"), // '9'
    Image::from_literal("00000:09000:00000:09000:00000"), // ':'
    Image::from_literal("00000:00900:00000:00900:09000"), // ';'
    Image::from_literal("00090:00900:09000:00900:00090"), // '<'
    Image::from_literal("00000:09990:00000:09990:00000"), // '='
    Image::from_literal("09000:00900:00090:00900:09000"), // '>'
    Image::from_literal("09990:90009:00990:00000:00900"), // '?'
    Image::from_literal("09990:90009:90909:90099:09900"), // '@'
    Image::from_literal("09900:90090:99990:90090:90090"), // 'A'
    Image::from_literal("99900:90090:99900:90090:99900"), // 'B'
    Image::from_literal("09990:90000:90000:90000:09990"), // 'C'
    Image::from_literal("99900:90090:90090:90090:99900"), // 'D'
    Image::from_literal("99990:90000:99900:90000:99990"), // 'E'
    Image::from_literal("99990:90000:99900:90000:90000"), // 'F'
    Image::from_literal("09990:90000:90099:90009:09990"), // 'G'
    Image::from_literal("90090:90090:99990:90090:90090"), // 'H'
    Image::from_literal("99900:09000:09000:09000:99900"), // 'I'
    Image::from_literal("99999:00090:00090:90090:09900"), // 'J'
    Image::from_literal("90090:90900:99000:90900:90090"), // 'K'
    Image::from_literal("90000:90000:90000:90000:99990"), // 'L'
    Image::from_literal("90009:99099:90909:90009:90009"), // 'M'
    Image::from_literal("90009:99009:90909:90099:90009"), // 'N'
    Image::from_literal("09900:90090:90090:90090:09900"), // 'O'
    Image::from_literal("99900:90090:99900:90000:90000"), // 'P'
    Image::from_literal("09900:90090:90090:09900:00990"), // 'Q'
    Image::from_literal("99900:90090:99900:90090:90009"), // 'R'
    Image::from_literal("09990:90000:09900:00090:99900"), // 'S'
    Image::from_literal("99999:00900:00900:00900:00900"), // 'T'
    Image::from_literal("90090:90090:90090:90090:09900"), // 'U'
    Image::from_literal("90009:90009:90009:09090:00900"), // 'V'
    Image::from_literal("90009:90009:90909:99099:90009"), // 'W'
    Image::from_literal("90090:90090:09900:90090:90090"), // 'X'
    Image::from_literal("90009:09090:00900:00900:00900"), // 'Y'
    Image::from_literal("99990:00900:09000:90000:99990"), // 'Z'
    Image::from_literal("09990:09000:09000:09000:09990"), // '['
    Image::from_literal("90000:09000:00900:00090:00009"), // backslash
    Image::from_literal("09990:00090:00090:00090:09990"), // ']'
    Image::from_literal("00900:09090:00000:00000:00000"), // '^'
    Image::from_literal("00000:00000:00000:00000:99999"), // '_'
    Image::from_literal("09000:00900:00000:00000:00000"), // '`'
    Image::from_literal("00000:09990:90090:90090:09999"), // 'a'
    Image::from_literal("90000:90000:99900:90090:99900"), // 'b'
    Image::from_literal("00000:09990:90000:90000:09990"), // 'c'
    Image::from_literal("00090:00090:09990:90090:09990"), // 'd'
    Image::from_literal("09900:90090:99900:90000:09990"), // 'e'
    Image::from_literal("00990:09000:99900:09000:09000"), // 'f'
    Image::from_literal("09990:90090:09990:00090:09900"), // 'g'
    Image::from_literal("90000:90000:99900:90090:90090"), // 'h'
    Image::from_literal("09000:00000:09000:09000:09000"), // 'i'
    Image::from_literal("00090:00000:00090:00090:09900"), // 'j'
    Image::from_literal("90000:90900:99000:90900:90090"), // 'k'
    Image::from_literal("09000:09000:09000:09000:00990"), // 'l'
    Image::from_literal("00000:99099:90909:90009:90009"), // 'm'
    Image::from_literal("00000:99900:90090:90090:90090"), // 'n'
    Image::from_literal("00000:09900:90090:90090:09900"), // 'o'
    Image::from_literal("00000:99900:90090:99900:90000"), // 'p'
    Image::from_literal("00000:09990:90090:09990:00090"), // 'q'
    Image::from_literal("00000:09990:90000:90000:90000"), // 'r'
    Image::from_literal("00000:00990:09000:00900:99000"), // 's'
    Image::from_literal("09000:09000:09990:09000:00999"), // 't'
    Image::from_literal("00000:90090:90090:90090:09999"), // 'u'
    Image::from_literal("00000:90009:90009:09090:00900"), // 'v'
    Image::from_literal("00000:90009:90009:90909:99099"), // 'w'
    Image::from_literal("00000:90090:09900:09900:90090"), // 'x'
    Image::from_literal("00000:90009:09090:00900:99000"), // 'y'
    Image::from_literal("00000:99990:00900:09000:99990"), // 'z'
    Image::from_literal("00990:00900:09900:00900:00990"), // '{'
    Image::from_literal("09000:09000:09000:09000:09000"), // '|'
    Image::from_literal("99000:09000:09900:09000:99000"), // '}'
    Image::from_literal("00000:00000:09900:00099:00000"), // '~'
];

/// Returns the 5x5 glyph for `ch`, or [`UNKNOWN_GLYPH`].
pub fn glyph_for_character(ch: char) -> Image {
    (ch as u32)
        .checked_sub(FIRST)
        .and_then(|idx| FONT.get(idx as usize))
        .copied()
        .unwrap_or(UNKNOWN_GLYPH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_space_is_blank() {
        assert!(glyph_for_character(' ').is_blank());
    }

    #[test]
    fn test_unmapped_characters_use_unknown_glyph() {
        assert_eq!(glyph_for_character('é'), UNKNOWN_GLYPH);
        assert_eq!(glyph_for_character('\n'), UNKNOWN_GLYPH);
        assert_eq!(glyph_for_character('\u{7f}'), UNKNOWN_GLYPH);
    }

    #[test]
    fn test_apostrophe_glyph() {
        assert_eq!(
            glyph_for_character('\''),
            "09000:09000:00000:00000:00000".parse::<Image>().unwrap()
        );
    }

    #[test]
    fn test_question_mark_is_unknown_glyph() {
        assert_eq!(glyph_for_character('?'), UNKNOWN_GLYPH);
    }

    #[test]
    fn test_digit_glyphs() {
        assert_eq!(
            glyph_for_character('1'),
            "00900:09900:00900:00900:09990".parse::<Image>().unwrap()
        );
        assert_eq!(
            glyph_for_character('0'),
            "09900:90090:90090:90090:09900".parse::<Image>().unwrap()
        );
    }

    #[test]
    fn test_case_sensitive() {
        assert_ne!(glyph_for_character('a'), glyph_for_character('A'));
        assert_eq!(
            glyph_for_character('a'),
            "00000:09990:90090:90090:09999".parse::<Image>().unwrap()
        );
    }

    #[test]
    fn test_last_entry_is_tilde() {
        assert_eq!(
            glyph_for_character('~'),
            "00000:00000:09900:00099:00000".parse::<Image>().unwrap()
        );
    }
}
