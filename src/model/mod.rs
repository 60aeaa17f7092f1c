//! # Resume Model
//!
//! The input representation for the rendering engine. A resume is a flat
//! record: a contact block, an optional summary paragraph, and ordered
//! sections (experience, education, skills, languages, certifications).
//! This is designed to be easily produced by a web form, a database row,
//! or direct JSON construction.
//!
//! The engine never reorders entries. Presentation order is the order the
//! caller supplies — if the user drag-sorted their skills upstream, that
//! order is what gets rendered.

use serde::{Deserialize, Serialize};

/// A complete resume ready for rendering.
///
/// `full_name`, `email`, and `phone` are required and assumed non-empty;
/// validating them is the caller's job. Every list field may be empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeContent {
    pub full_name: String,
    pub email: String,
    pub phone: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,

    /// Free-text paragraph. Whitespace-only counts as absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,

    #[serde(default)]
    pub education: Vec<EducationEntry>,

    #[serde(default)]
    pub skills: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub languages: Option<Vec<LanguageEntry>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certifications: Option<Vec<CertificationEntry>>,
}

/// One position in the work history.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceEntry {
    pub job_title: String,
    pub company: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// `YYYY-MM`.
    pub start_date: String,
    /// `YYYY-MM`. Absent means currently employed, rendered as "Present".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    pub description: String,
}

/// One degree or program.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationEntry {
    pub degree: String,
    pub institution: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// `YYYY-MM`.
    pub graduation_date: String,
}

/// A spoken language and its proficiency level.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageEntry {
    pub language: String,
    pub proficiency: String,
}

/// A professional certification.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificationEntry {
    pub name: String,
    pub issuer: String,
    pub date: String,
}

impl ResumeContent {
    /// Create a resume with just the required contact fields.
    pub fn new(full_name: &str, email: &str, phone: &str) -> Self {
        Self {
            full_name: full_name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            ..Default::default()
        }
    }

    /// The summary, if it contains anything beyond whitespace.
    pub fn trimmed_summary(&self) -> Option<&str> {
        self.summary
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

impl ExperienceEntry {
    /// "Company, Location" — or just the company when no location is set.
    pub fn company_line(&self) -> String {
        match &self.location {
            Some(loc) => format!("{}, {}", self.company, loc),
            None => self.company.clone(),
        }
    }
}

impl EducationEntry {
    /// "Institution, Location" — or just the institution.
    pub fn institution_line(&self) -> String {
        match &self.location {
            Some(loc) => format!("{}, {}", self.institution, loc),
            None => self.institution.clone(),
        }
    }
}
