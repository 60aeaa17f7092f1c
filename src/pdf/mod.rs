//! # PDF Serializer
//!
//! Takes the laid-out page from the layout engine and writes a valid PDF
//! file.
//!
//! This is a from-scratch PDF 1.7 writer. We write the raw bytes ourselves
//! because it gives us full control over the output and keeps the engine
//! self-contained. The subset needed for single-page text documents is
//! small: standard Type1 fonts, one Flate-compressed content stream, an
//! xref table, and a trailer.
//!
//! ## PDF Structure (simplified)
//!
//! ```text
//! %PDF-1.7            <- header
//! 1 0 obj ... endobj  <- objects (catalog, pages, fonts, content stream)
//! 2 0 obj ... endobj
//! ...
//! xref                <- cross-reference table (byte offsets of each object)
//! trailer             <- points to the root object
//! %%EOF
//! ```
//!
//! The output is deterministic: no timestamps, no IDs, and font resources
//! are registered in sorted order. Identical layout input yields identical
//! bytes.

use std::fmt::Write as FmtWrite; // for write! on String
use std::io::Write as IoWrite; // for write! on Vec<u8>

use crate::font::{FontContext, StandardFont};
use crate::layout::{LayoutElement, LayoutPage, PT_PER_MM};
use miniz_oxide::deflate::compress_to_vec_zlib;

pub struct PdfWriter;

struct PdfObject {
    data: Vec<u8>,
}

impl Default for PdfWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfWriter {
    pub fn new() -> Self {
        Self
    }

    /// Write a laid-out page to a PDF byte vector.
    pub fn write(&self, page: &LayoutPage, fonts: &FontContext) -> Vec<u8> {
        // Object IDs: 0 = placeholder (PDF objects are 1-indexed),
        // 1 = Catalog, 2 = Pages, then fonts, content stream, page, info.
        let mut objects: Vec<PdfObject> = vec![
            PdfObject { data: vec![] },
            PdfObject { data: b"<< /Type /Catalog /Pages 2 0 R >>".to_vec() },
            PdfObject { data: vec![] },
        ];

        let font_objects = Self::register_fonts(&mut objects, page, fonts);

        let content = self.build_content_stream(page, fonts, &font_objects);
        let compressed = compress_to_vec_zlib(content.as_bytes(), 6);
        let content_obj_id = objects.len();
        let mut content_data: Vec<u8> = Vec::new();
        let _ = write!(
            content_data,
            "<< /Length {} /Filter /FlateDecode >>\nstream\n",
            compressed.len()
        );
        content_data.extend_from_slice(&compressed);
        content_data.extend_from_slice(b"\nendstream");
        objects.push(PdfObject { data: content_data });

        let page_obj_id = objects.len();
        let font_resources: String = font_objects
            .iter()
            .enumerate()
            .map(|(i, (_, obj_id))| format!("/F{} {} 0 R", i, obj_id))
            .collect::<Vec<_>>()
            .join(" ");
        let page_dict = format!(
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {:.2} {:.2}] \
             /Contents {} 0 R /Resources << /Font << {} >> >> >>",
            page.width_mm * PT_PER_MM,
            page.height_mm * PT_PER_MM,
            content_obj_id,
            font_resources
        );
        objects.push(PdfObject { data: page_dict.into_bytes() });

        // Pages tree (object 2)
        objects[2].data = format!(
            "<< /Type /Pages /Kids [{} 0 R] /Count 1 >>",
            page_obj_id
        )
        .into_bytes();

        // Info dictionary. Fixed producer string, no dates: the byte stream
        // must be identical across invocations.
        let info_obj_id = objects.len();
        objects.push(PdfObject {
            data: b"<< /Producer (vitae 0.1) /Creator (vitae) >>".to_vec(),
        });

        self.serialize(&objects, info_obj_id)
    }

    /// Register a Type1 font dictionary for every face the page uses.
    /// Keys are collected in sorted order so output stays deterministic.
    fn register_fonts(
        objects: &mut Vec<PdfObject>,
        page: &LayoutPage,
        fonts: &FontContext,
    ) -> Vec<(StandardFont, usize)> {
        let mut used: Vec<StandardFont> =
            page.elements.iter().map(|e| fonts.resolve(e.style.face)).collect();
        used.sort_by_key(|f| f.pdf_name());
        used.dedup();

        // Always have at least Helvetica
        if used.is_empty() {
            used.push(StandardFont::Helvetica);
        }

        let mut font_objects = Vec::new();
        for font in used {
            let obj_id = objects.len();
            let font_dict = format!(
                "<< /Type /Font /Subtype /Type1 /BaseFont /{} \
                 /Encoding /WinAnsiEncoding >>",
                font.pdf_name()
            );
            objects.push(PdfObject { data: font_dict.into_bytes() });
            font_objects.push((font, obj_id));
        }
        font_objects
    }

    /// Build the content stream: one `BT..ET` text block per element.
    fn build_content_stream(
        &self,
        page: &LayoutPage,
        fonts: &FontContext,
        font_objects: &[(StandardFont, usize)],
    ) -> String {
        let mut stream = String::new();
        for element in &page.elements {
            self.write_element(&mut stream, element, page.height_mm, fonts, font_objects);
        }
        stream
    }

    /// Write a single positioned line as PDF text operators. The element's
    /// y is a baseline from the page top; PDF's origin is bottom-left.
    fn write_element(
        &self,
        stream: &mut String,
        element: &LayoutElement,
        page_height_mm: f64,
        fonts: &FontContext,
        font_objects: &[(StandardFont, usize)],
    ) {
        let font = fonts.resolve(element.style.face);
        let font_index = font_objects
            .iter()
            .position(|(f, _)| *f == font)
            .unwrap_or(0);

        let x_pt = element.x_mm * PT_PER_MM;
        let y_pt = (page_height_mm - element.y_mm) * PT_PER_MM;

        let _ = write!(
            stream,
            "BT\n/F{} {:.1} Tf\n{:.2} {:.2} Td\n({}) Tj\nET\n",
            font_index,
            element.style.size_pt,
            x_pt,
            y_pt,
            Self::encode_winansi(&element.text)
        );
    }

    /// Encode text as a WinAnsi PDF string literal: escape the delimiters,
    /// keep printable ASCII as-is, and write everything else as an octal
    /// escape of its Windows-1252 byte. Unmappable characters degrade to
    /// `?` rather than corrupting the stream.
    fn encode_winansi(text: &str) -> String {
        let mut out = String::new();
        for ch in text.chars() {
            let b = Self::unicode_to_winansi(ch).unwrap_or(b'?');
            match b {
                b'\\' => out.push_str("\\\\"),
                b'(' => out.push_str("\\("),
                b')' => out.push_str("\\)"),
                0x20..=0x7E => out.push(b as char),
                _ => {
                    let _ = write!(out, "\\{:03o}", b);
                }
            }
        }
        out
    }

    /// Map a Unicode codepoint to a WinAnsiEncoding byte value.
    ///
    /// WinAnsiEncoding is based on Windows-1252. Most codepoints in
    /// 0x20..=0x7E and 0xA0..=0xFF map directly. The 0x80..=0x9F range
    /// contains special mappings for smart quotes, bullets, dashes, etc.
    fn unicode_to_winansi(ch: char) -> Option<u8> {
        let cp = ch as u32;
        // ASCII printable range maps directly
        if (0x20..=0x7E).contains(&cp) || (0xA0..=0xFF).contains(&cp) {
            return Some(cp as u8);
        }
        // Windows-1252 special mappings (0x80-0x9F)
        match cp {
            0x20AC => Some(0x80), // Euro sign
            0x201A => Some(0x82), // Single low-9 quotation mark
            0x0192 => Some(0x83), // Latin small letter f with hook
            0x201E => Some(0x84), // Double low-9 quotation mark
            0x2026 => Some(0x85), // Horizontal ellipsis
            0x2020 => Some(0x86), // Dagger
            0x2021 => Some(0x87), // Double dagger
            0x02C6 => Some(0x88), // Modifier letter circumflex accent
            0x2030 => Some(0x89), // Per mille sign
            0x0160 => Some(0x8A), // Latin capital letter S with caron
            0x2039 => Some(0x8B), // Single left-pointing angle quotation
            0x0152 => Some(0x8C), // Latin capital ligature OE
            0x017D => Some(0x8E), // Latin capital letter Z with caron
            0x2018 => Some(0x91), // Left single quotation mark
            0x2019 => Some(0x92), // Right single quotation mark
            0x201C => Some(0x93), // Left double quotation mark
            0x201D => Some(0x94), // Right double quotation mark
            0x2022 => Some(0x95), // Bullet
            0x2013 => Some(0x96), // En dash
            0x2014 => Some(0x97), // Em dash
            0x02DC => Some(0x98), // Small tilde
            0x2122 => Some(0x99), // Trade mark sign
            0x0161 => Some(0x9A), // Latin small letter s with caron
            0x203A => Some(0x9B), // Single right-pointing angle quotation
            0x0153 => Some(0x9C), // Latin small ligature oe
            0x017E => Some(0x9E), // Latin small letter z with caron
            0x0178 => Some(0x9F), // Latin capital letter Y with diaeresis
            _ => None,
        }
    }

    /// Serialize all objects into the final PDF byte stream.
    fn serialize(&self, objects: &[PdfObject], info_obj_id: usize) -> Vec<u8> {
        let mut output: Vec<u8> = Vec::new();
        let mut offsets: Vec<usize> = vec![0; objects.len()];

        // Header: version line plus a high-bit comment so transports treat
        // the file as binary.
        output.extend_from_slice(b"%PDF-1.7\n");
        output.extend_from_slice(b"%\xe2\xe3\xcf\xd3\n");

        for (i, obj) in objects.iter().enumerate().skip(1) {
            offsets[i] = output.len();
            let header = format!("{} 0 obj\n", i);
            output.extend_from_slice(header.as_bytes());
            output.extend_from_slice(&obj.data);
            output.extend_from_slice(b"\nendobj\n\n");
        }

        let xref_offset = output.len();
        let _ = write!(output, "xref\n0 {}\n", objects.len());
        let _ = write!(output, "0000000000 65535 f \n");
        for offset in offsets.iter().skip(1) {
            let _ = write!(output, "{:010} 00000 n \n", offset);
        }

        let _ = write!(
            output,
            "trailer\n<< /Size {} /Root 1 0 R /Info {} 0 R >>\nstartxref\n{}\n%%EOF\n",
            objects.len(),
            info_obj_id,
            xref_offset
        );

        output
    }
}
