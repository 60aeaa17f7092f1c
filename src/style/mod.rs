//! # Text Style
//!
//! The single-template visual design uses one family (Helvetica) in three
//! faces and a handful of sizes. Every emission call carries its style
//! explicitly — there is no ambient "current font" state to mutate, so each
//! drawn line is fully determined by its arguments.

use serde::{Deserialize, Serialize};

/// Which variant of the template's font family to draw with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FontFace {
    #[default]
    Regular,
    Bold,
    Italic,
}

impl FontFace {
    /// CSS-style weight for font resolution (400 or 700).
    pub fn weight(&self) -> u32 {
        match self {
            FontFace::Bold => 700,
            _ => 400,
        }
    }

    pub fn is_italic(&self) -> bool {
        matches!(self, FontFace::Italic)
    }
}

/// The full style of one emitted text block: face plus size in points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub size_pt: f64,
    pub face: FontFace,
}

impl TextStyle {
    pub fn new(size_pt: f64, face: FontFace) -> Self {
        Self { size_pt, face }
    }

    pub fn regular(size_pt: f64) -> Self {
        Self::new(size_pt, FontFace::Regular)
    }

    pub fn bold(size_pt: f64) -> Self {
        Self::new(size_pt, FontFace::Bold)
    }

    pub fn italic(size_pt: f64) -> Self {
        Self::new(size_pt, FontFace::Italic)
    }
}
