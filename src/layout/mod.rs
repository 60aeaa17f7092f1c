//! # Single-Page Resume Layout Engine
//!
//! This is the heart of the crate. It turns a [`ResumeContent`] into
//! positioned text on one fixed-size page.
//!
//! The algorithm is a greedy vertical flow: a single cursor starts at the
//! top margin and only ever moves down. Sections are emitted in a fixed
//! order, and before each block the engine asks "does this fit in the
//! remaining space?" — estimated from wrapped line counts at real font
//! metrics. A block that fits is committed in full; a block that doesn't is
//! dropped in full. Nothing is ever split across the page boundary, and
//! overflowing content is silently truncated rather than flowed onto a
//! second page.
//!
//! Two truncation policies apply:
//! - list sections (education, certifications) skip individual entries once
//!   space runs out, continuing to check nothing further;
//! - work experience stops hard: the first entry whose description cannot
//!   fit ends the whole section, and no later entry is attempted.
//!
//! All geometry is in millimeters, matching the template's design units;
//! the PDF writer converts to points at the end.

use crate::font::FontContext;
use crate::model::{ExperienceEntry, ResumeContent};
use crate::style::{FontFace, TextStyle};
use crate::text::break_into_lines;

/// Points per millimeter (72 pt per inch, 25.4 mm per inch).
pub const PT_PER_MM: f64 = 72.0 / 25.4;

/// Joins contact fields, skills, and languages.
pub const FIELD_SEPARATOR: &str = " \u{2022} ";

// ── Template constants (mm unless noted) ────────────────────────

const LINE_HEIGHT_MM: f64 = 5.0;
const SECTION_SPACING_MM: f64 = 6.0;

const NAME_ADVANCE_MM: f64 = 7.0;
const CONTACT_ADVANCE_MM: f64 = 5.0;
const CONTACT_GAP_MM: f64 = 2.0;
const HEADING_ADVANCE_MM: f64 = 5.0;
const ENTRY_LINE_ADVANCE_MM: f64 = 4.0;
const ENTRY_GAP_MM: f64 = 4.0;
const EDUCATION_ENTRY_GAP_MM: f64 = 2.0;

// Minimum-space heuristics before entering a section or entry. These are
// template constants, not measurements of the upcoming content.
const EXPERIENCE_ENTRY_MIN_MM: f64 = 15.0;
const EDUCATION_SECTION_MIN_MM: f64 = 20.0;
const EDUCATION_ENTRY_MIN_MM: f64 = 10.0;
const TRAILING_SECTION_MIN_MM: f64 = 15.0;
const CERTIFICATION_ENTRY_MIN_MM: f64 = 8.0;

const NAME_STYLE: TextStyle = TextStyle { size_pt: 18.0, face: FontFace::Bold };
const CONTACT_STYLE: TextStyle = TextStyle { size_pt: 9.0, face: FontFace::Regular };
const HEADING_STYLE: TextStyle = TextStyle { size_pt: 11.0, face: FontFace::Bold };
const ENTRY_TITLE_STYLE: TextStyle = TextStyle { size_pt: 10.0, face: FontFace::Bold };
const ENTRY_META_STYLE: TextStyle = TextStyle { size_pt: 9.0, face: FontFace::Italic };
const BODY_STYLE: TextStyle = TextStyle { size_pt: 9.0, face: FontFace::Regular };
const CERT_NAME_STYLE: TextStyle = TextStyle { size_pt: 9.0, face: FontFace::Bold };

// ── Page geometry ───────────────────────────────────────────────

/// Fixed page geometry: size and uniform margin, in millimeters.
#[derive(Debug, Clone, Copy)]
pub struct PageMetrics {
    pub width_mm: f64,
    pub height_mm: f64,
    pub margin_mm: f64,
}

impl Default for PageMetrics {
    /// A4 portrait with 15 mm margins — the single resume template.
    fn default() -> Self {
        Self {
            width_mm: 210.0,
            height_mm: 297.0,
            margin_mm: 15.0,
        }
    }
}

impl PageMetrics {
    /// Usable width between the left and right margins.
    pub fn content_width_mm(&self) -> f64 {
        self.width_mm - 2.0 * self.margin_mm
    }

    /// Lowest cursor position content may still occupy.
    pub fn bottom_mm(&self) -> f64 {
        self.height_mm - self.margin_mm
    }
}

// ── Layout output ───────────────────────────────────────────────

/// One positioned line of text. `y_mm` is the text baseline measured from
/// the top of the page; alignment has already been resolved into `x_mm`.
#[derive(Debug, Clone)]
pub struct LayoutElement {
    pub x_mm: f64,
    pub y_mm: f64,
    pub text: String,
    pub style: TextStyle,
}

/// A fully laid-out page, ready for the PDF writer.
#[derive(Debug, Clone)]
pub struct LayoutPage {
    pub width_mm: f64,
    pub height_mm: f64,
    pub elements: Vec<LayoutElement>,
}

impl LayoutPage {
    /// All element text joined with newlines. Test and debugging aid.
    pub fn plain_text(&self) -> String {
        let texts: Vec<&str> = self.elements.iter().map(|e| e.text.as_str()).collect();
        texts.join("\n")
    }
}

// ── Date formatting ─────────────────────────────────────────────

const MONTH_ABBREV: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun",
    "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Format a `YYYY-MM` string as "Mon YYYY" (e.g. `"2023-07"` → `"Jul 2023"`).
///
/// Empty or malformed input degrades to an empty string — the engine never
/// fails on a date, and never leaks placeholder junk into the document.
pub fn format_date(date: &str) -> String {
    if date.is_empty() {
        return String::new();
    }
    let (year, month) = match date.split_once('-') {
        Some(parts) => parts,
        None => return String::new(),
    };
    let month_idx = match month.parse::<usize>() {
        Ok(m) if (1..=12).contains(&m) => m - 1,
        _ => return String::new(),
    };
    if year.is_empty() {
        return String::new();
    }
    format!("{} {}", MONTH_ABBREV[month_idx], year)
}

/// "Jan 2020 - Jun 2022", or "Jan 2020 - Present" when still employed.
pub fn date_range(entry: &ExperienceEntry) -> String {
    let end = match &entry.end_date {
        Some(date) => format_date(date),
        None => "Present".to_string(),
    };
    format!("{} - {}", format_date(&entry.start_date), end)
}

// ── Engine ──────────────────────────────────────────────────────

/// Lays a resume out onto a single fixed-size page.
#[derive(Debug, Default)]
pub struct LayoutEngine {
    page: PageMetrics,
}

impl LayoutEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(page: PageMetrics) -> Self {
        Self { page }
    }

    /// Lay out the whole resume. Pure and infallible: identical input
    /// produces identical output, and overflow truncates instead of erroring.
    pub fn layout(&self, resume: &ResumeContent, fonts: &FontContext) -> LayoutPage {
        let mut flow = Flow::new(self.page, fonts);

        flow.header(resume);
        flow.summary(resume);
        flow.experience(resume);
        flow.education(resume);
        flow.skills(resume);
        flow.languages(resume);
        flow.certifications(resume);

        LayoutPage {
            width_mm: self.page.width_mm,
            height_mm: self.page.height_mm,
            elements: flow.elements,
        }
    }
}

/// Per-invocation layout state: the cursor and the emitted elements.
/// Created fresh for every render call and discarded with it.
struct Flow<'a> {
    page: PageMetrics,
    fonts: &'a FontContext,
    /// Current vertical write position, from the top of the page.
    /// Monotonically increasing.
    y_mm: f64,
    elements: Vec<LayoutElement>,
}

impl<'a> Flow<'a> {
    fn new(page: PageMetrics, fonts: &'a FontContext) -> Self {
        Self {
            page,
            fonts,
            y_mm: page.margin_mm,
            elements: Vec::new(),
        }
    }

    /// Would a block of this height still end above the bottom margin?
    fn fits(&self, height_mm: f64) -> bool {
        self.y_mm + height_mm <= self.page.bottom_mm()
    }

    fn advance(&mut self, height_mm: f64) {
        self.y_mm += height_mm;
    }

    /// Emit one line at the left margin. The cursor is not advanced here;
    /// each call site pairs emission with its own advance.
    fn emit(&mut self, text: &str, style: TextStyle) {
        self.elements.push(LayoutElement {
            x_mm: self.page.margin_mm,
            y_mm: self.y_mm,
            text: text.to_string(),
            style,
        });
    }

    /// Emit one line flush against the right margin.
    fn emit_right(&mut self, text: &str, style: TextStyle) {
        let width_pt = self.fonts.measure_string(text, style.face, style.size_pt);
        let x_mm = self.page.width_mm - self.page.margin_mm - width_pt / PT_PER_MM;
        self.elements.push(LayoutElement {
            x_mm,
            y_mm: self.y_mm,
            text: text.to_string(),
            style,
        });
    }

    /// Emit a section heading if its own advance still fits.
    /// Returns false when the section should be skipped entirely.
    fn heading(&mut self, title: &str) -> bool {
        if !self.fits(HEADING_ADVANCE_MM) {
            return false;
        }
        self.emit(title, HEADING_STYLE);
        self.advance(HEADING_ADVANCE_MM);
        true
    }

    /// Emit a word-wrapped paragraph, all-or-nothing: if the wrapped block
    /// does not fit in the remaining space, nothing is emitted and the
    /// cursor stays put. Returns whether the block was committed.
    fn try_paragraph(&mut self, text: &str, style: TextStyle) -> bool {
        let max_width_pt = self.page.content_width_mm() * PT_PER_MM;
        let lines = break_into_lines(self.fonts, text, max_width_pt, style.face, style.size_pt);
        let height_mm = lines.len() as f64 * LINE_HEIGHT_MM;
        if !self.fits(height_mm) {
            return false;
        }
        for line in lines {
            self.emit(&line, style);
            self.advance(LINE_HEIGHT_MM);
        }
        true
    }

    // ── Sections, in fixed template order ───────────────────────

    fn header(&mut self, resume: &ResumeContent) {
        self.emit(&resume.full_name, NAME_STYLE);
        self.advance(NAME_ADVANCE_MM);

        let mut fields: Vec<&str> = vec![&resume.email, &resume.phone];
        for optional in [
            &resume.location,
            &resume.website,
            &resume.linkedin,
            &resume.github,
        ] {
            if let Some(value) = optional {
                fields.push(value);
            }
        }
        self.emit(&fields.join(FIELD_SEPARATOR), CONTACT_STYLE);
        self.advance(CONTACT_ADVANCE_MM);
        self.advance(CONTACT_GAP_MM);
    }

    fn summary(&mut self, resume: &ResumeContent) {
        let summary = match resume.trimmed_summary() {
            Some(text) => text,
            None => return,
        };
        if !self.heading("PROFESSIONAL SUMMARY") {
            return;
        }
        // All-or-nothing: an overflowing summary is dropped, heading stays.
        self.try_paragraph(summary, BODY_STYLE);
        self.advance(SECTION_SPACING_MM);
    }

    fn experience(&mut self, resume: &ResumeContent) {
        if !self.heading("WORK EXPERIENCE") {
            return;
        }

        for entry in &resume.experience {
            // Enough room for at least the title and company lines?
            if !self.fits(EXPERIENCE_ENTRY_MIN_MM) {
                break;
            }

            self.emit(&entry.job_title, ENTRY_TITLE_STYLE);
            self.emit_right(&date_range(entry), ENTRY_TITLE_STYLE);
            self.advance(ENTRY_LINE_ADVANCE_MM);

            self.emit(&entry.company_line(), ENTRY_META_STYLE);
            self.advance(ENTRY_LINE_ADVANCE_MM);

            // Hard stop: once one description fails to fit, no later entry
            // is attempted.
            if !self.try_paragraph(&entry.description, BODY_STYLE) {
                break;
            }
            self.advance(ENTRY_GAP_MM);
        }

        self.advance(SECTION_SPACING_MM);
    }

    fn education(&mut self, resume: &ResumeContent) {
        if !self.fits(EDUCATION_SECTION_MIN_MM) {
            return;
        }
        if !self.heading("EDUCATION") {
            return;
        }

        for entry in &resume.education {
            if !self.fits(EDUCATION_ENTRY_MIN_MM) {
                break;
            }

            self.emit(&entry.degree, ENTRY_TITLE_STYLE);
            self.emit_right(&format_date(&entry.graduation_date), ENTRY_TITLE_STYLE);
            self.advance(ENTRY_LINE_ADVANCE_MM);

            self.emit(&entry.institution_line(), ENTRY_META_STYLE);
            self.advance(ENTRY_LINE_ADVANCE_MM);
            self.advance(EDUCATION_ENTRY_GAP_MM);
        }

        self.advance(SECTION_SPACING_MM);
    }

    fn skills(&mut self, resume: &ResumeContent) {
        if resume.skills.is_empty() || !self.fits(TRAILING_SECTION_MIN_MM) {
            return;
        }
        if !self.heading("SKILLS") {
            return;
        }
        self.try_paragraph(&resume.skills.join(FIELD_SEPARATOR), BODY_STYLE);
        self.advance(SECTION_SPACING_MM);
    }

    fn languages(&mut self, resume: &ResumeContent) {
        let languages = match &resume.languages {
            Some(list) if !list.is_empty() => list,
            _ => return,
        };
        if !self.fits(TRAILING_SECTION_MIN_MM) {
            return;
        }
        if !self.heading("LANGUAGES") {
            return;
        }
        let line: Vec<String> = languages
            .iter()
            .map(|l| format!("{} ({})", l.language, l.proficiency))
            .collect();
        self.try_paragraph(&line.join(FIELD_SEPARATOR), BODY_STYLE);
        self.advance(SECTION_SPACING_MM);
    }

    fn certifications(&mut self, resume: &ResumeContent) {
        let certifications = match &resume.certifications {
            Some(list) if !list.is_empty() => list,
            _ => return,
        };
        if !self.fits(TRAILING_SECTION_MIN_MM) {
            return;
        }
        if !self.heading("CERTIFICATIONS") {
            return;
        }
        for cert in certifications {
            if !self.fits(CERTIFICATION_ENTRY_MIN_MM) {
                break;
            }
            self.emit(&cert.name, CERT_NAME_STYLE);
            self.advance(ENTRY_LINE_ADVANCE_MM);
            self.emit(&format!("{} - {}", cert.issuer, cert.date), BODY_STYLE);
            self.advance(ENTRY_LINE_ADVANCE_MM);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CertificationEntry, EducationEntry, LanguageEntry};

    fn engine() -> (LayoutEngine, FontContext) {
        (LayoutEngine::new(), FontContext::new())
    }

    fn minimal_resume() -> ResumeContent {
        ResumeContent::new("Jane Doe", "jane@x.com", "555-0100")
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2023-07"), "Jul 2023");
        assert_eq!(format_date("2020-01"), "Jan 2020");
        assert_eq!(format_date("1999-12"), "Dec 1999");
    }

    #[test]
    fn test_format_date_degrades_to_empty() {
        assert_eq!(format_date(""), "");
        assert_eq!(format_date("2023"), "");
        assert_eq!(format_date("2023-13"), "");
        assert_eq!(format_date("2023-00"), "");
        assert_eq!(format_date("2023-xy"), "");
        assert_eq!(format_date("-07"), "");
    }

    #[test]
    fn test_date_range_present_for_current_role() {
        let entry = ExperienceEntry {
            job_title: "Engineer".to_string(),
            company: "Acme".to_string(),
            start_date: "2020-01".to_string(),
            ..Default::default()
        };
        assert_eq!(date_range(&entry), "Jan 2020 - Present");

        let finished = ExperienceEntry {
            end_date: Some("2022-06".to_string()),
            ..entry
        };
        assert_eq!(date_range(&finished), "Jan 2020 - Jun 2022");
    }

    #[test]
    fn test_minimal_resume_lays_out() {
        let (engine, fonts) = engine();
        let page = engine.layout(&minimal_resume(), &fonts);
        assert!(!page.elements.is_empty());
        let text = page.plain_text();
        assert!(text.contains("Jane Doe"));
        assert!(text.contains("jane@x.com \u{2022} 555-0100"));
    }

    #[test]
    fn test_contact_line_includes_only_present_fields() {
        let mut resume = minimal_resume();
        resume.github = Some("github.com/janedoe".to_string());
        let (engine, fonts) = engine();
        let text = engine.layout(&resume, &fonts).plain_text();
        assert!(text.contains("jane@x.com \u{2022} 555-0100 \u{2022} github.com/janedoe"));
        assert!(!text.contains("linkedin"));
    }

    #[test]
    fn test_empty_summary_omits_heading() {
        let mut resume = minimal_resume();
        resume.summary = Some("   ".to_string());
        let (engine, fonts) = engine();
        let text = engine.layout(&resume, &fonts).plain_text();
        assert!(!text.contains("PROFESSIONAL SUMMARY"));
    }

    #[test]
    fn test_summary_emitted_when_present() {
        let mut resume = minimal_resume();
        resume.summary = Some("Engineer with a decade of storage systems work.".to_string());
        let (engine, fonts) = engine();
        let text = engine.layout(&resume, &fonts).plain_text();
        assert!(text.contains("PROFESSIONAL SUMMARY"));
        assert!(text.contains("storage systems"));
    }

    #[test]
    fn test_skills_preserve_order_and_separator() {
        let mut resume = minimal_resume();
        resume.skills = vec!["Go".to_string(), "Rust".to_string(), "TypeScript".to_string()];
        let (engine, fonts) = engine();
        let text = engine.layout(&resume, &fonts).plain_text();
        assert!(text.contains("Go \u{2022} Rust \u{2022} TypeScript"));
    }

    #[test]
    fn test_languages_render_with_proficiency() {
        let mut resume = minimal_resume();
        resume.languages = Some(vec![
            LanguageEntry {
                language: "German".to_string(),
                proficiency: "Fluent".to_string(),
            },
            LanguageEntry {
                language: "French".to_string(),
                proficiency: "Basic".to_string(),
            },
        ]);
        let (engine, fonts) = engine();
        let text = engine.layout(&resume, &fonts).plain_text();
        assert!(text.contains("LANGUAGES"));
        assert!(text.contains("German (Fluent) \u{2022} French (Basic)"));
    }

    #[test]
    fn test_certifications_render_name_and_issuer() {
        let mut resume = minimal_resume();
        resume.certifications = Some(vec![CertificationEntry {
            name: "CKA".to_string(),
            issuer: "CNCF".to_string(),
            date: "2023".to_string(),
        }]);
        let (engine, fonts) = engine();
        let text = engine.layout(&resume, &fonts).plain_text();
        assert!(text.contains("CERTIFICATIONS"));
        assert!(text.contains("CKA"));
        assert!(text.contains("CNCF - 2023"));
    }

    #[test]
    fn test_absent_optional_sections_omit_headings() {
        let (engine, fonts) = engine();
        let text = engine.layout(&minimal_resume(), &fonts).plain_text();
        assert!(!text.contains("SKILLS"));
        assert!(!text.contains("LANGUAGES"));
        assert!(!text.contains("CERTIFICATIONS"));
    }

    #[test]
    fn test_cursor_monotonic_and_within_page() {
        let mut resume = minimal_resume();
        resume.summary = Some("A paragraph. ".repeat(30));
        for i in 0..4 {
            resume.experience.push(ExperienceEntry {
                job_title: format!("Role {i}"),
                company: "Acme".to_string(),
                start_date: "2020-01".to_string(),
                end_date: Some("2021-01".to_string()),
                description: "Shipped features. ".repeat(20),
                ..Default::default()
            });
        }
        resume.education.push(EducationEntry {
            degree: "BSc".to_string(),
            institution: "State".to_string(),
            graduation_date: "2015-06".to_string(),
            ..Default::default()
        });
        let (engine, fonts) = engine();
        let page = engine.layout(&resume, &fonts);
        let bottom = PageMetrics::default().bottom_mm();
        let mut last_y = 0.0;
        for element in &page.elements {
            assert!(element.y_mm >= last_y - 1e-9, "cursor moved up");
            assert!(element.y_mm <= bottom + 1e-9, "element below bottom margin");
            last_y = element.y_mm;
        }
    }

    #[test]
    fn test_experience_hard_stop_truncates_in_order() {
        let mut resume = minimal_resume();
        for i in 0..12 {
            resume.experience.push(ExperienceEntry {
                job_title: format!("UNIQUE_ROLE_{i}"),
                company: "Acme".to_string(),
                start_date: "2020-01".to_string(),
                end_date: None,
                description: "A very long description of the work performed. ".repeat(12),
                ..Default::default()
            });
        }
        let (engine, fonts) = engine();
        let text = engine.layout(&resume, &fonts).plain_text();

        let kept: Vec<bool> = (0..12)
            .map(|i| text.contains(&format!("UNIQUE_ROLE_{i}")))
            .collect();
        let k = kept.iter().filter(|&&p| p).count();
        assert!(k >= 1, "at least the first entry must fit");
        assert!(k < 12, "test input must overflow the page");
        // Prefix property: exactly the first K entries, in order.
        for (i, &present) in kept.iter().enumerate() {
            assert_eq!(present, i < k, "entry {i} breaks the prefix property");
        }
    }

    #[test]
    fn test_right_aligned_dates_end_at_right_margin() {
        let mut resume = minimal_resume();
        resume.experience.push(ExperienceEntry {
            job_title: "Engineer".to_string(),
            company: "Acme".to_string(),
            start_date: "2020-01".to_string(),
            end_date: Some("2022-06".to_string()),
            description: "Built the platform.".to_string(),
            ..Default::default()
        });
        let (engine, fonts) = engine();
        let page = engine.layout(&resume, &fonts);
        let element = page
            .elements
            .iter()
            .find(|e| e.text == "Jan 2020 - Jun 2022")
            .expect("date range element");
        let width_mm = fonts.measure_string(&element.text, element.style.face, element.style.size_pt)
            / PT_PER_MM;
        let right_edge = element.x_mm + width_mm;
        let margin_edge = 210.0 - 15.0;
        assert!((right_edge - margin_edge).abs() < 1e-6);
    }
}
