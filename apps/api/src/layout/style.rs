//! Template styles: one [`StyleDescriptor`] per template, resolved once per render.
//!
//! Section renderers read only the descriptor. Adding a template means adding a
//! [`TemplateId`] variant and its descriptor here; no renderer changes.

use serde::Serialize;

use crate::layout::display::Rgb;
use crate::layout::font_metrics::FontFace;

// ────────────────────────────────────────────────────────────────────────────
// Template identifiers
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateId {
    ClassicAts,
    ModernBlue,
    MinimalSerif,
}

impl TemplateId {
    pub const ALL: [TemplateId; 3] = [
        TemplateId::ClassicAts,
        TemplateId::ModernBlue,
        TemplateId::MinimalSerif,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TemplateId::ClassicAts => "classic-ats",
            TemplateId::ModernBlue => "modern-blue",
            TemplateId::MinimalSerif => "minimal-serif",
        }
    }

    /// Looks up an identifier; unknown or absent values fall back to `classic-ats`.
    pub fn parse_or_default(id: Option<&str>) -> Self {
        let id = id.map(str::trim).unwrap_or_default();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == id)
            .unwrap_or(TemplateId::ClassicAts)
    }

    pub fn display_name(self) -> &'static str {
        match self {
            TemplateId::ClassicAts => "Classic ATS",
            TemplateId::ModernBlue => "Modern Blue",
            TemplateId::MinimalSerif => "Minimal Serif",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            TemplateId::ClassicAts => "Clean, recruiter-friendly layout optimized for ATS parsing.",
            TemplateId::ModernBlue => "Modern section headers with a clean, professional hierarchy.",
            TemplateId::MinimalSerif => "Elegant, minimal look for a polished, premium feel.",
        }
    }
}

impl std::fmt::Display for TemplateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Style descriptor
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingCase {
    Upper,
    AsGiven,
}

impl HeadingCase {
    pub fn apply(self, title: &str) -> String {
        match self {
            HeadingCase::Upper => title.to_uppercase(),
            HeadingCase::AsGiven => title.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameAlignment {
    Left,
    Centered,
}

/// How the address/contact block sits relative to the name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactLayout {
    /// Stacked lines in a column starting at 55% of the content width, beside the name.
    RightColumn,
    /// One centered line under the name.
    CenteredBlock,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StyleDescriptor {
    pub template: TemplateId,

    pub name_face: FontFace,
    pub name_size: f32,
    pub name_color: Rgb,
    pub name_alignment: NameAlignment,

    pub contact_layout: ContactLayout,
    pub contact_face: FontFace,
    pub contact_size: f32,
    pub contact_color: Rgb,

    pub header_rule_color: Rgb,
    pub header_rule_thickness: f32,

    pub heading_face: FontFace,
    pub heading_size: f32,
    pub heading_case: HeadingCase,
    pub heading_color: Rgb,
    pub heading_rule_color: Rgb,
    pub heading_rule_thickness: f32,

    pub body_face: FontFace,
    pub body_bold_face: FontFace,
    pub body_size: f32,
    /// Secondary text (project tech line).
    pub muted_color: Rgb,
    pub link_color: Rgb,
}

/// Resolves the style for a template. Pure; no template carries behavior.
pub fn resolve(template: TemplateId) -> StyleDescriptor {
    match template {
        TemplateId::ClassicAts => StyleDescriptor {
            template,
            name_face: FontFace::TimesBold,
            name_size: 24.0,
            name_color: Rgb::BLACK,
            name_alignment: NameAlignment::Centered,
            contact_layout: ContactLayout::CenteredBlock,
            contact_face: FontFace::TimesRoman,
            contact_size: 10.0,
            contact_color: Rgb::MUTED,
            header_rule_color: Rgb::BLACK,
            header_rule_thickness: 0.8,
            heading_face: FontFace::HelveticaBold,
            heading_size: 12.0,
            heading_case: HeadingCase::Upper,
            heading_color: Rgb::BLACK,
            heading_rule_color: Rgb::RULE_GREY,
            heading_rule_thickness: 0.8,
            body_face: FontFace::Helvetica,
            body_bold_face: FontFace::HelveticaBold,
            body_size: 11.0,
            muted_color: Rgb::MUTED,
            link_color: Rgb::BLUE,
        },
        TemplateId::ModernBlue => StyleDescriptor {
            template,
            name_face: FontFace::HelveticaBold,
            name_size: 24.0,
            name_color: Rgb::BLUE,
            name_alignment: NameAlignment::Left,
            contact_layout: ContactLayout::RightColumn,
            contact_face: FontFace::Helvetica,
            contact_size: 10.0,
            contact_color: Rgb::MUTED,
            header_rule_color: Rgb::BLUE,
            header_rule_thickness: 1.5,
            heading_face: FontFace::HelveticaBold,
            heading_size: 12.0,
            heading_case: HeadingCase::AsGiven,
            heading_color: Rgb::BLUE,
            heading_rule_color: Rgb::BLUE,
            heading_rule_thickness: 1.2,
            body_face: FontFace::Helvetica,
            body_bold_face: FontFace::HelveticaBold,
            body_size: 11.0,
            muted_color: Rgb::MUTED,
            link_color: Rgb::BLUE,
        },
        TemplateId::MinimalSerif => StyleDescriptor {
            template,
            name_face: FontFace::TimesBold,
            name_size: 24.0,
            name_color: Rgb::BLACK,
            name_alignment: NameAlignment::Centered,
            contact_layout: ContactLayout::CenteredBlock,
            contact_face: FontFace::TimesRoman,
            contact_size: 10.0,
            contact_color: Rgb::MUTED,
            header_rule_color: Rgb::RULE_GREY,
            header_rule_thickness: 1.0,
            heading_face: FontFace::TimesBold,
            heading_size: 12.0,
            heading_case: HeadingCase::AsGiven,
            heading_color: Rgb::BLACK,
            heading_rule_color: Rgb::RULE_GREY,
            heading_rule_thickness: 0.8,
            body_face: FontFace::TimesRoman,
            body_bold_face: FontFace::TimesBold,
            body_size: 11.0,
            muted_color: Rgb::MUTED,
            link_color: Rgb::BLUE,
        },
    }
}
