//! Section renderers: one function per resume section.
//!
//! Every renderer is a function of `(data, style, flow)`: it reads the slice of the
//! record it owns, takes typography from the [`StyleDescriptor`], and draws through the
//! [`PageFlow`], reserving space before each draw. None of them know which template is
//! active.

use crate::layout::display::Rgb;
use crate::layout::font_metrics::{width_of, FontFace};
use crate::layout::normalize::{normalize, normalize_opt};
use crate::layout::page_flow::PageFlow;
use crate::layout::style::{ContactLayout, NameAlignment, StyleDescriptor};
use crate::layout::wrap::{wrap, wrap_hard, wrap_parts};
use crate::models::resume::{
    CertificationEntry, EducationEntry, ExperienceEntry, PersonalInfo, ProjectEntry, SkillGroup,
};

pub const DEFAULT_NAME: &str = "Your Name";
pub const CONTACT_SEPARATOR: &str = "  |  ";

const TEXT: Rgb = Rgb::BLACK;

// Vertical rhythm, in points.
const HEADER_RESERVE: f32 = 70.0;
const HEADING_RESERVE: f32 = 26.0;
const EDUCATION_RESERVE: f32 = 36.0;
const EXPERIENCE_RESERVE: f32 = 46.0;
const PROJECT_RESERVE: f32 = 40.0;
const SKILL_RESERVE: f32 = 28.0;
const ENTRY_LINE_STEP: f32 = 14.0;
const COLUMN_LINE_STEP: f32 = 12.0;

const BULLET_GLYPH: &str = "•";
const BULLET_INDENT: f32 = 10.0;
const BULLET_TEXT_INDENT: f32 = 18.0;
const SKILL_LABEL_GAP: f32 = 8.0;
const NAME_COLUMN_GAP: f32 = 12.0;

/// Share of the content width the primary (left) column of an entry may use.
const PRIMARY_COLUMN_RATIO: f32 = 0.7;
/// Where the right-hand contact column starts, as a share of the content width.
const CONTACT_COLUMN_OFFSET: f32 = 0.55;
const CONTACT_COLUMN_RATIO: f32 = 0.45;

// ────────────────────────────────────────────────────────────────────────────
// Header
// ────────────────────────────────────────────────────────────────────────────

/// The present contact fields (phone, email, linkedin, portfolio), normalized, in order.
fn contact_parts(info: &PersonalInfo) -> Vec<String> {
    [&info.phone, &info.email, &info.linkedin, &info.portfolio]
        .into_iter()
        .map(|field| normalize_opt(field.as_deref()))
        .filter(|part| !part.is_empty())
        .collect()
}

/// Joins the present contact fields with [`CONTACT_SEPARATOR`]. Absent or blank fields
/// leave no separator behind.
pub fn contact_line(info: &PersonalInfo) -> String {
    contact_parts(info).join(CONTACT_SEPARATOR)
}

pub fn render_header(info: &PersonalInfo, style: &StyleDescriptor, flow: &mut PageFlow) {
    let name = match normalize_opt(info.name.as_deref()) {
        n if n.is_empty() => DEFAULT_NAME.to_string(),
        n => n,
    };
    let location = normalize_opt(info.address.as_deref());
    let contacts = contact_parts(info);

    flow.ensure_space(HEADER_RESERVE);
    match style.contact_layout {
        ContactLayout::CenteredBlock => {
            let mut parts = vec![location];
            parts.extend(contacts);
            centered_header(&name, &parts, style, flow);
        }
        ContactLayout::RightColumn => column_header(&name, &location, &contacts, style, flow),
    }

    let (left, right) = (flow.margin(), flow.right_edge());
    flow.draw_rule(left, right, style.header_rule_color, style.header_rule_thickness);
    flow.advance(18.0);
}

/// Name over one centered line of `address  |  contact`, both wrapped to the content
/// width and centered line by line.
fn centered_header(name: &str, parts: &[String], style: &StyleDescriptor, flow: &mut PageFlow) {
    let width = flow.content_width();
    for (i, line) in wrap(name, style.name_face, style.name_size, width).iter().enumerate() {
        if i > 0 {
            flow.ensure_space(style.name_size + 6.0);
        }
        let x = aligned_x(line, style.name_face, style.name_size, style.name_alignment, flow);
        flow.draw_text(x, line, style.name_face, style.name_size, style.name_color);
        flow.advance(style.name_size);
    }

    let lines = wrap_parts(parts, CONTACT_SEPARATOR, style.contact_face, style.contact_size, width);
    if lines.is_empty() {
        flow.advance(10.0);
        return;
    }
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            flow.advance(COLUMN_LINE_STEP);
        }
        flow.ensure_space(16.0);
        let x = aligned_x(line, style.contact_face, style.contact_size, style.name_alignment, flow);
        flow.draw_text(x, line, style.contact_face, style.contact_size, style.contact_color);
    }
    flow.advance(16.0);
}

/// Name on the left, address and contact stacked in a column starting at 55% of the
/// content width. Both run on a 12pt grid; name lines take every other row.
fn column_header(
    name: &str,
    location: &str,
    contacts: &[String],
    style: &StyleDescriptor,
    flow: &mut PageFlow,
) {
    let content_width = flow.content_width();
    let name_x = flow.margin();
    let column_x = name_x + content_width * CONTACT_COLUMN_OFFSET;
    let column_width = content_width * CONTACT_COLUMN_RATIO;

    let name_lines = wrap(
        name,
        style.name_face,
        style.name_size,
        content_width * CONTACT_COLUMN_OFFSET - NAME_COLUMN_GAP,
    );
    let (face, size) = (style.contact_face, style.contact_size);
    let mut column = wrap(location, face, size, column_width);
    column.extend(wrap_parts(contacts, CONTACT_SEPARATOR, face, size, column_width));
    // The column ends at the right margin, so a token wider than it is split.
    let column: Vec<String> = column
        .into_iter()
        .flat_map(|line| {
            if width_of(&line, face, size) > column_width {
                wrap_hard(&line, face, size, column_width)
            } else {
                vec![line]
            }
        })
        .collect();

    let rows = column.len().max((2 * name_lines.len()).saturating_sub(1)).max(1);
    // Rule sits at least 22pt under the last row and 34pt under the first.
    let tail = (34.0 - COLUMN_LINE_STEP * (rows - 1) as f32).max(22.0);

    for row in 0..rows {
        let name_line = if row % 2 == 0 { name_lines.get(row / 2) } else { None };
        if row > 0 {
            flow.advance(COLUMN_LINE_STEP);
            let line_height = match name_line {
                Some(_) => style.name_size,
                None => style.contact_size,
            };
            let needed = if row == rows - 1 {
                (line_height + 6.0).max(tail)
            } else {
                line_height + 6.0
            };
            flow.ensure_space(needed);
        }
        if let Some(line) = name_line {
            flow.draw_text(name_x, line, style.name_face, style.name_size, style.name_color);
        }
        if let Some(line) = column.get(row) {
            flow.draw_text(column_x, line, face, size, style.contact_color);
        }
    }
    flow.advance(tail);
}

/// Left edge for `text` under the alignment rule; centered text never starts left of
/// the margin.
fn aligned_x(text: &str, face: FontFace, size: f32, alignment: NameAlignment, flow: &PageFlow) -> f32 {
    match alignment {
        NameAlignment::Left => flow.margin(),
        NameAlignment::Centered => {
            let w = width_of(text, face, size);
            flow.margin().max((flow.page_width() - w) / 2.0)
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Shared building blocks
// ────────────────────────────────────────────────────────────────────────────

/// Section title, case-transformed per style, with a rule across the content width.
/// `keep_with_next` is the space the section's first block reserves; the heading moves
/// to the next page with it rather than being left alone at the bottom.
pub fn heading(title: &str, keep_with_next: f32, style: &StyleDescriptor, flow: &mut PageFlow) {
    flow.ensure_space(HEADING_RESERVE + keep_with_next);
    let x = flow.margin();
    flow.draw_text(
        x,
        &style.heading_case.apply(title),
        style.heading_face,
        style.heading_size,
        style.heading_color,
    );
    flow.advance(14.0);
    let right = flow.right_edge();
    flow.draw_rule(x, right, style.heading_rule_color, style.heading_rule_thickness);
    flow.advance(12.0);
}

/// Wrapped block at the left margin; each line reserves its own space.
fn paragraph(text: &str, face: FontFace, size: f32, color: Rgb, extra_gap: f32, flow: &mut PageFlow) {
    let width = flow.content_width();
    for line in wrap(text, face, size, width) {
        flow.ensure_space(size + 6.0);
        let x = flow.margin();
        flow.draw_text(x, &line, face, size, color);
        flow.advance(size + 4.0);
    }
    flow.advance(extra_gap);
}

/// Lines wrapped to `width` at `x`, advancing `step` per line.
#[allow(clippy::too_many_arguments)]
fn wrapped_lines(
    text: &str,
    face: FontFace,
    size: f32,
    color: Rgb,
    x: f32,
    width: f32,
    step: f32,
    flow: &mut PageFlow,
) -> Vec<String> {
    let lines = wrap(text, face, size, width);
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            flow.ensure_space(size + 6.0);
        }
        flow.draw_text(x, line, face, size, color);
        flow.advance(step);
    }
    lines
}

/// Bullet list: glyph at a fixed indent, text column beside it, continuation lines
/// aligned to the text column without a repeated glyph.
pub fn bullets(items: &[String], style: &StyleDescriptor, flow: &mut PageFlow) {
    let (face, size) = (style.body_face, style.body_size);
    let glyph_x = flow.margin() + BULLET_INDENT;
    let text_x = flow.margin() + BULLET_TEXT_INDENT;
    let width = flow.content_width() - BULLET_TEXT_INDENT;

    for item in items {
        let lines = wrap(item, face, size, width);
        let Some((first, rest)) = lines.split_first() else {
            continue;
        };
        flow.ensure_space(size + 6.0);
        flow.draw_text(glyph_x, BULLET_GLYPH, face, size, TEXT);
        flow.draw_text(text_x, first, face, size, TEXT);
        flow.advance(size + 4.0);
        for line in rest {
            flow.ensure_space(size + 6.0);
            flow.draw_text(text_x, line, face, size, TEXT);
            flow.advance(size + 4.0);
        }
    }
    flow.advance(6.0);
}

/// Bold left label with a bold date range right-anchored on the same baseline.
/// The label wraps within the primary column; its extra lines continue below.
fn primary_line_with_dates(left: &str, dates: &str, style: &StyleDescriptor, flow: &mut PageFlow) {
    let (bold, size) = (style.body_bold_face, style.body_size);
    if !dates.is_empty() {
        let x = flow.right_edge() - width_of(dates, bold, size);
        flow.draw_text(x, dates, bold, size, TEXT);
    }
    let (x, width) = (flow.margin(), flow.content_width() * PRIMARY_COLUMN_RATIO);
    if wrapped_lines(left, bold, size, TEXT, x, width, ENTRY_LINE_STEP, flow).is_empty() {
        flow.advance(ENTRY_LINE_STEP);
    }
}

fn secondary_line(text: &str, style: &StyleDescriptor, flow: &mut PageFlow) {
    let (x, width) = (flow.margin(), flow.content_width());
    wrapped_lines(text, style.body_face, style.body_size, TEXT, x, width, ENTRY_LINE_STEP, flow);
}

fn date_range(start: &str, end: &str) -> String {
    join_present(&[normalize(start), normalize(end)], " - ")
}

fn join_present(parts: &[String], separator: &str) -> String {
    parts
        .iter()
        .filter(|p| !p.is_empty())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(separator)
}

// ────────────────────────────────────────────────────────────────────────────
// Sections
// ────────────────────────────────────────────────────────────────────────────

pub fn render_summary(summary: &str, style: &StyleDescriptor, flow: &mut PageFlow) {
    heading("Summary", style.body_size + 6.0, style, flow);
    paragraph(summary, style.body_face, style.body_size, TEXT, 2.0, flow);
}

pub fn render_education(entries: &[EducationEntry], style: &StyleDescriptor, flow: &mut PageFlow) {
    heading("Education", EDUCATION_RESERVE, style, flow);
    for edu in entries {
        let dates = date_range(
            edu.start_date.as_deref().unwrap_or_default(),
            edu.end_date.as_deref().unwrap_or_default(),
        );
        flow.ensure_space(EDUCATION_RESERVE);
        primary_line_with_dates(&normalize(&edu.institution), &dates, style, flow);

        let field = normalize_opt(edu.field_of_study.as_deref());
        let field = if field.is_empty() { field } else { format!("in {field}") };
        secondary_line(&join_present(&[normalize(&edu.degree), field], " "), style, flow);

        if edu.details.is_empty() {
            flow.advance(6.0);
        } else {
            bullets(&edu.details, style, flow);
        }
    }
}

pub fn render_experience(entries: &[ExperienceEntry], style: &StyleDescriptor, flow: &mut PageFlow) {
    heading("Experience", EXPERIENCE_RESERVE, style, flow);
    for exp in entries {
        let left = join_present(
            &[normalize(&exp.company), normalize_opt(exp.location.as_deref())],
            ", ",
        );
        let dates = date_range(&exp.start_date, &exp.end_date);
        flow.ensure_space(EXPERIENCE_RESERVE);
        primary_line_with_dates(&left, &dates, style, flow);
        secondary_line(&exp.job_title, style, flow);

        if exp.responsibilities.is_empty() {
            flow.advance(8.0);
        } else {
            bullets(&exp.responsibilities, style, flow);
        }
    }
}

pub fn render_projects(entries: &[ProjectEntry], style: &StyleDescriptor, flow: &mut PageFlow) {
    heading("Projects", PROJECT_RESERVE, style, flow);
    let (face, size) = (style.body_face, style.body_size);
    let small = 10.0;

    for proj in entries {
        flow.ensure_space(PROJECT_RESERVE);
        let (x, width) = (flow.margin(), flow.content_width());
        wrapped_lines(&proj.name, style.body_bold_face, size, TEXT, x, width, ENTRY_LINE_STEP, flow);

        let description = normalize(&proj.description);
        if !description.is_empty() {
            paragraph(&description, face, size, TEXT, 2.0, flow);
        }

        let tech = join_present(
            &proj.technologies.iter().map(|t| normalize(t)).collect::<Vec<_>>(),
            ", ",
        );
        if !tech.is_empty() {
            for line in wrap(&format!("Tech: {tech}"), face, small, width) {
                flow.ensure_space(small + 6.0);
                flow.draw_text(x, &line, face, small, style.muted_color);
                flow.advance(ENTRY_LINE_STEP);
            }
        }

        let link = normalize_opt(proj.link.as_deref());
        if link.is_empty() {
            flow.advance(6.0);
            continue;
        }
        let uri = link_target(&link);
        for line in wrap(&link, face, small, width) {
            flow.ensure_space(small + 6.0);
            let y = flow.y();
            flow.draw_text(x, &line, face, small, style.link_color);
            flow.add_link([x, y - 2.0, x + width_of(&line, face, small), y + small], &uri);
            flow.advance(ENTRY_LINE_STEP);
        }
        flow.advance(2.0);
    }
}

/// Link annotations need an absolute URI; bare hosts get `https://`.
fn link_target(link: &str) -> String {
    if link.contains("://") || link.starts_with("mailto:") {
        link.to_string()
    } else {
        format!("https://{link}")
    }
}

pub fn render_skills(groups: &[SkillGroup], style: &StyleDescriptor, flow: &mut PageFlow) {
    heading("Skills", SKILL_RESERVE, style, flow);
    let (face, bold, size) = (style.body_face, style.body_bold_face, style.body_size);

    for group in groups {
        let items: Vec<String> = group
            .items
            .iter()
            .map(|i| normalize(i))
            .filter(|i| !i.is_empty())
            .collect();
        if items.is_empty() {
            continue;
        }
        let category = match normalize_opt(group.category.as_deref()) {
            c if c.is_empty() => "Skills".to_string(),
            c => c,
        };
        let label = format!("{category}:");

        flow.ensure_space(SKILL_RESERVE);
        let margin = flow.margin();
        flow.draw_text(margin, &label, bold, size, TEXT);

        let label_width = width_of(&label, bold, size);
        let x = margin + label_width + SKILL_LABEL_GAP;
        let width = flow.content_width() - label_width - SKILL_LABEL_GAP;
        for (i, line) in wrap(&items.join(", "), face, size, width).iter().enumerate() {
            if i > 0 {
                flow.ensure_space(20.0);
            }
            flow.draw_text(x, line, face, size, TEXT);
            flow.advance(ENTRY_LINE_STEP);
        }
    }
    flow.advance(6.0);
}

/// `"<name> (<org>) <date>"`, leaving out absent parts.
pub fn certification_line(cert: &CertificationEntry) -> String {
    let org = normalize_opt(cert.issuing_organization.as_deref());
    let org = if org.is_empty() { org } else { format!("({org})") };
    let suffix = join_present(&[org, normalize_opt(cert.date_obtained.as_deref())], " ");
    join_present(&[normalize(&cert.name), suffix], " ")
}

pub fn render_certifications(entries: &[CertificationEntry], style: &StyleDescriptor, flow: &mut PageFlow) {
    heading("Certifications", style.body_size + 6.0, style, flow);
    let items: Vec<String> = entries.iter().map(certification_line).collect();
    bullets(&items, style, flow);
}
