//! Static AFM width tables for the standard Helvetica faces.
//!
//! Widths are in 1/1000 em (the unit the Adobe AFM files use), so a glyph's
//! advance at size `s` points is `width / 1000 * s`. Tables cover the ASCII
//! printable range 0x20..=0x7E; index = `(char as usize) - 32`. The oblique
//! faces share the upright tables, matching the Adobe metrics.
//!
//! Only a few non-ASCII WinAnsi glyphs matter for the resume template — the
//! bullet separator above all — and those are special-cased; anything else
//! falls back to a conservative average advance.

/// Width of one printable ASCII character table, 0x20 through 0x7E.
pub struct WidthTable {
    widths: [u16; 95],
    /// Advance for U+2022 BULLET, the template's field separator.
    bullet: u16,
    /// Fallback for characters with no entry.
    default_advance: u16,
}

impl WidthTable {
    /// Advance width of `ch` in 1/1000 em.
    pub fn advance(&self, ch: char) -> u16 {
        let code = ch as usize;
        if (0x20..=0x7E).contains(&code) {
            self.widths[code - 0x20]
        } else if ch == '\u{2022}' {
            self.bullet
        } else {
            self.default_advance
        }
    }

    /// Advance width of `ch` in points at the given font size.
    pub fn char_width(&self, ch: char, font_size: f64) -> f64 {
        f64::from(self.advance(ch)) / 1000.0 * font_size
    }

    /// Width of a whole string in points at the given font size.
    pub fn measure_string(&self, text: &str, font_size: f64) -> f64 {
        text.chars().map(|ch| self.char_width(ch, font_size)).sum()
    }
}

/// Helvetica (and Helvetica-Oblique).
pub static HELVETICA: WidthTable = WidthTable {
    #[rustfmt::skip]
    widths: [
        // sp    !     "     #     $     %     &     '     (     )     *     +     ,     -     .     /
         278,  278,  355,  556,  556,  889,  667,  191,  333,  333,  389,  584,  278,  333,  278,  278,
        // 0     1     2     3     4     5     6     7     8     9
         556,  556,  556,  556,  556,  556,  556,  556,  556,  556,
        // :     ;     <     =     >     ?     @
         278,  278,  584,  584,  584,  556, 1015,
        // A     B     C     D     E     F     G     H     I     J     K     L     M
         667,  667,  722,  722,  667,  611,  778,  722,  278,  500,  667,  556,  833,
        // N     O     P     Q     R     S     T     U     V     W     X     Y     Z
         722,  778,  667,  778,  722,  667,  611,  722,  667,  944,  667,  667,  611,
        // [     \     ]     ^     _     `
         278,  278,  278,  469,  556,  333,
        // a     b     c     d     e     f     g     h     i     j     k     l     m
         556,  556,  500,  556,  556,  278,  556,  556,  222,  222,  500,  222,  833,
        // n     o     p     q     r     s     t     u     v     w     x     y     z
         556,  556,  556,  556,  333,  500,  278,  556,  500,  722,  500,  500,  500,
        // {     |     }     ~
         334,  260,  334,  584,
    ],
    bullet: 350,
    default_advance: 556,
};

/// Helvetica-Bold (and Helvetica-BoldOblique).
pub static HELVETICA_BOLD: WidthTable = WidthTable {
    #[rustfmt::skip]
    widths: [
        // sp    !     "     #     $     %     &     '     (     )     *     +     ,     -     .     /
         278,  333,  474,  556,  556,  889,  722,  238,  333,  333,  389,  584,  278,  333,  278,  278,
        // 0     1     2     3     4     5     6     7     8     9
         556,  556,  556,  556,  556,  556,  556,  556,  556,  556,
        // :     ;     <     =     >     ?     @
         333,  333,  584,  584,  584,  611,  975,
        // A     B     C     D     E     F     G     H     I     J     K     L     M
         722,  722,  722,  722,  667,  611,  778,  722,  278,  556,  722,  611,  833,
        // N     O     P     Q     R     S     T     U     V     W     X     Y     Z
         722,  778,  667,  778,  722,  667,  611,  722,  667,  944,  667,  667,  611,
        // [     \     ]     ^     _     `
         333,  278,  333,  584,  556,  333,
        // a     b     c     d     e     f     g     h     i     j     k     l     m
         556,  611,  556,  611,  556,  333,  611,  611,  278,  278,  556,  278,  889,
        // n     o     p     q     r     s     t     u     v     w     x     y     z
         611,  611,  611,  611,  389,  556,  333,  611,  556,  778,  556,  556,  500,
        // {     |     }     ~
         389,  280,  389,  584,
    ],
    bullet: 350,
    default_advance: 556,
};
