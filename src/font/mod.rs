//! # Font Management
//!
//! Resolution and measurement for the standard PDF fonts the resume template
//! uses. The four Helvetica variants cover the whole template (regular body,
//! bold headings, italic company/institution lines), and standard fonts need
//! no embedding — the PDF just names them.

pub mod metrics;

use crate::style::FontFace;
use metrics::{WidthTable, HELVETICA, HELVETICA_BOLD};

/// The standard PDF Type1 fonts the engine can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StandardFont {
    Helvetica,
    HelveticaBold,
    HelveticaOblique,
    HelveticaBoldOblique,
}

impl StandardFont {
    /// The BaseFont name used in the PDF font dictionary.
    pub fn pdf_name(&self) -> &'static str {
        match self {
            Self::Helvetica => "Helvetica",
            Self::HelveticaBold => "Helvetica-Bold",
            Self::HelveticaOblique => "Helvetica-Oblique",
            Self::HelveticaBoldOblique => "Helvetica-BoldOblique",
        }
    }

    /// The width table for this font. Oblique faces share the upright
    /// metrics, as in the Adobe AFM files.
    pub fn metrics(&self) -> &'static WidthTable {
        match self {
            Self::Helvetica | Self::HelveticaOblique => &HELVETICA,
            Self::HelveticaBold | Self::HelveticaBoldOblique => &HELVETICA_BOLD,
        }
    }
}

/// Shared font context used by layout and PDF serialization.
/// Provides text measurement with real glyph metrics.
#[derive(Debug, Default)]
pub struct FontContext;

impl FontContext {
    pub fn new() -> Self {
        Self
    }

    /// Resolve a template face to a concrete standard font.
    pub fn resolve(&self, face: FontFace) -> StandardFont {
        match (face.weight() >= 600, face.is_italic()) {
            (false, false) => StandardFont::Helvetica,
            (true, false) => StandardFont::HelveticaBold,
            (false, true) => StandardFont::HelveticaOblique,
            (true, true) => StandardFont::HelveticaBoldOblique,
        }
    }

    /// Advance width of a single character in points.
    pub fn char_width(&self, ch: char, face: FontFace, font_size: f64) -> f64 {
        self.resolve(face).metrics().char_width(ch, font_size)
    }

    /// Measure the width of a string in points.
    pub fn measure_string(&self, text: &str, face: FontFace, font_size: f64) -> f64 {
        self.resolve(face).metrics().measure_string(text, font_size)
    }
}
