//! # Vitae
//!
//! A single-page resume PDF rendering engine.
//!
//! Structured resume data goes in; the bytes of a finished, fixed-template
//! PDF come out. The layout is a greedy vertical flow onto one A4 page:
//! every block's height is estimated from real font metrics before it is
//! committed, and content that cannot fit is silently truncated rather
//! than flowed onto a second page or turned into an error.
//!
//! Rendering is pure computation — no I/O, no shared state, no error path
//! for structurally valid input. Storing the resulting bytes (and checking
//! them with [`validate`]) is the caller's concern.
//!
//! ## Architecture
//!
//! ```text
//! Input (JSON/API)
//!       ↓
//!   [model]   — resume record: contact block, sections, entries
//!       ↓
//!   [layout]  — single-page greedy flow with truncation
//!       ↓
//!   [pdf]     — serialize to PDF bytes
//! ```

pub mod error;
pub mod font;
pub mod layout;
pub mod model;
pub mod pdf;
pub mod style;
pub mod text;
pub mod validate;

use error::VitaeError;
use font::FontContext;
use layout::LayoutEngine;
use model::ResumeContent;
use pdf::PdfWriter;

/// Render a resume to PDF bytes.
///
/// This is the primary entry point. It always succeeds for well-typed
/// input: required-field presence is the caller's job, and overflow is
/// handled by truncation inside the layout engine. Identical input yields
/// byte-identical output.
pub fn render(resume: &ResumeContent) -> Vec<u8> {
    let fonts = FontContext::new();
    let engine = LayoutEngine::new();
    let page = engine.layout(resume, &fonts);
    let writer = PdfWriter::new();
    writer.write(&page, &fonts)
}

/// Render a resume described as JSON to PDF bytes.
pub fn render_json(json: &str) -> Result<Vec<u8>, VitaeError> {
    let resume: ResumeContent = serde_json::from_str(json)?;
    Ok(render(&resume))
}
