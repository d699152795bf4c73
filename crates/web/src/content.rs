//! The static site content document.
//!
//! A hand-authored description of the legacy website's copy, serialized
//! once to `website_content.json` for the new site build to consume.
//! Nothing in here is scraped or derived.

use migrate_core::{write_pretty_json, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Everything the new site needs to know about the old one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteContent {
    /// Mission statement shown on the homepage.
    pub mission: Mission,

    /// The long-form about section.
    pub about: About,

    /// Impact bullet points and headline statistics.
    pub impact: Impact,

    /// Board of trustees, in display order.
    pub trustees: Vec<Trustee>,

    /// How-it-works section.
    pub process: ProcessOverview,

    /// Quotes from beneficiaries and donors.
    pub testimonials: Vec<Testimonial>,

    /// Contact details.
    pub contact: Contact,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mission {
    pub tagline: String,
    pub description: String,
    pub statistic: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct About {
    pub title: String,
    pub description: String,
    pub quote: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Impact {
    pub points: Vec<String>,
    pub statistics: ImpactStatistics,
}

/// Headline numbers, kept as display strings (`"500+"`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImpactStatistics {
    pub years: String,
    pub students: String,
    pub villages: String,
    pub donors: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trustee {
    pub name: String,
    pub role: String,
    pub bio: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessOverview {
    pub title: String,
    pub steps: Vec<ProcessStep>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessStep {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Testimonial {
    pub text: String,
    pub author: String,
    pub role: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    pub phone: String,
    pub email: String,
}

/// Serialize the content document to `path` as indented JSON, non-ASCII
/// characters kept literal.
pub fn write_content(content: &SiteContent, path: &Path) -> Result<()> {
    write_pretty_json(path, content)
}
