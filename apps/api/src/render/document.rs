//! Document assembly: resolve the style, then run the section renderers in fixed order.

use tracing::debug;

use crate::layout::display::{LaidOutDocument, PageSize};
use crate::layout::normalize::normalize_opt;
use crate::layout::page_flow::PageFlow;
use crate::layout::style::{resolve, TemplateId};
use crate::models::resume::ResumeRecord;
use crate::render::pdf_writer::{write_pdf, DocumentMeta, RenderedPdf};
use crate::render::sections;
use crate::render::RenderError;

pub const RESUME_PAGE_SIZE: PageSize = PageSize::A4;
pub const RESUME_MARGIN: f32 = 48.0;

/// Lays out a resume: header, then summary, education, experience, projects, skills and
/// certifications. A section whose source is empty is omitted entirely, heading included.
pub fn layout_resume(template: TemplateId, record: &ResumeRecord) -> LaidOutDocument {
    let style = resolve(template);
    let mut flow = PageFlow::new(RESUME_PAGE_SIZE, RESUME_MARGIN);

    sections::render_header(&record.personal_info, &style, &mut flow);

    let summary = normalize_opt(record.summary.as_deref());
    if !summary.is_empty() {
        sections::render_summary(&summary, &style, &mut flow);
    }
    if !record.education.is_empty() {
        sections::render_education(&record.education, &style, &mut flow);
    }
    if !record.experience.is_empty() {
        sections::render_experience(&record.experience, &style, &mut flow);
    }
    if !record.projects.is_empty() {
        sections::render_projects(&record.projects, &style, &mut flow);
    }
    if !record.skills.is_empty() {
        sections::render_skills(&record.skills, &style, &mut flow);
    }
    if !record.certifications.is_empty() {
        sections::render_certifications(&record.certifications, &style, &mut flow);
    }

    debug!(template = %style.template, pages = flow.page_count(), "resume laid out");
    flow.finish()
}

pub fn render_resume_pdf(
    template: TemplateId,
    record: &ResumeRecord,
    meta: &DocumentMeta,
) -> Result<RenderedPdf, RenderError> {
    write_pdf(&layout_resume(template, record), meta)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::display::DrawOp;
    use crate::layout::font_metrics::width_of;
    use crate::models::resume::{
        CertificationEntry, EducationEntry, ExperienceEntry, PersonalInfo, ProjectEntry, SkillGroup,
    };

    fn sample() -> ResumeRecord {
        ResumeRecord {
            personal_info: PersonalInfo {
                name: Some("Jake Ryan".into()),
                email: Some("jake@su.edu".into()),
                phone: Some("123-456-7890".into()),
                linkedin: Some("linkedin.com/in/jake".into()),
                portfolio: None,
                address: Some("Georgetown, TX".into()),
            },
            summary: Some("Backend engineer who likes\n\ncompilers.".into()),
            education: vec![EducationEntry {
                institution: "Southwestern University".into(),
                degree: "Bachelor of Arts".into(),
                field_of_study: Some("Computer Science".into()),
                start_date: Some("Aug. 2018".into()),
                end_date: Some("May 2021".into()),
                details: vec!["Minor in Business".into()],
            }],
            experience: vec![ExperienceEntry {
                job_title: "Undergraduate Research Assistant".into(),
                company: "Texas A&M University".into(),
                location: Some("College Station, TX".into()),
                start_date: "June 2020".into(),
                end_date: "Present".into(),
                responsibilities: vec![
                    "Developed a REST API using FastAPI and PostgreSQL to store data from learning management systems".into(),
                    "Explored ways to visualize GitHub collaboration in a classroom setting".into(),
                ],
            }],
            skills: vec![SkillGroup {
                category: Some("Languages".into()),
                items: vec!["Java".into(), "Python".into(), "Rust".into()],
            }],
            projects: vec![ProjectEntry {
                name: "Gitlytics".into(),
                description: "Full-stack web application for GitHub analytics".into(),
                technologies: vec!["Python".into(), "Flask".into()],
                link: Some("github.com/jake/gitlytics".into()),
            }],
            certifications: vec![CertificationEntry {
                name: "AWS Certified Developer".into(),
                issuing_organization: Some("Amazon".into()),
                date_obtained: Some("2022".into()),
            }],
            target_job_role: None,
            target_job_description: None,
        }
    }

    fn empty_record() -> ResumeRecord {
        ResumeRecord {
            personal_info: PersonalInfo::default(),
            summary: None,
            education: vec![],
            experience: vec![],
            skills: vec![],
            projects: vec![],
            certifications: vec![],
            target_job_role: None,
            target_job_description: None,
        }
    }

    fn texts(doc: &LaidOutDocument) -> Vec<String> {
        doc.text_runs().map(|r| r.text.clone()).collect()
    }

    #[test]
    fn test_sections_follow_fixed_order() {
        let doc = layout_resume(TemplateId::ClassicAts, &sample());
        let t = texts(&doc);
        let pos = |s: &str| t.iter().position(|x| x == s).unwrap();
        let order = [
            pos("SUMMARY"),
            pos("EDUCATION"),
            pos("EXPERIENCE"),
            pos("PROJECTS"),
            pos("SKILLS"),
            pos("CERTIFICATIONS"),
        ];
        assert!(order.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_empty_record_renders_only_header() {
        let doc = layout_resume(TemplateId::ModernBlue, &empty_record());
        assert_eq!(doc.page_count(), 1);
        assert_eq!(texts(&doc), vec!["Your Name"]);
    }

    #[test]
    fn test_blank_summary_is_omitted() {
        let mut record = empty_record();
        record.summary = Some("   \n ".into());
        let doc = layout_resume(TemplateId::MinimalSerif, &record);
        assert!(!texts(&doc).iter().any(|t| t == "Summary"));
    }

    #[test]
    fn test_layout_is_deterministic() {
        let record = sample();
        for t in TemplateId::ALL {
            assert_eq!(layout_resume(t, &record), layout_resume(t, &record));
        }
    }

    const HEADINGS: [&str; 6] = [
        "summary",
        "education",
        "experience",
        "projects",
        "skills",
        "certifications",
    ];

    fn heading_sequence(doc: &LaidOutDocument) -> Vec<String> {
        doc.text_runs()
            .map(|r| r.text.to_lowercase())
            .filter(|t| HEADINGS.contains(&t.as_str()))
            .collect()
    }

    /// Lowercased words from the first section heading on, in drawing order.
    fn body_words(doc: &LaidOutDocument) -> Vec<String> {
        let runs: Vec<String> = doc.text_runs().map(|r| r.text.to_lowercase()).collect();
        let start = runs
            .iter()
            .position(|t| HEADINGS.contains(&t.as_str()))
            .unwrap_or(runs.len());
        runs[start..]
            .iter()
            .flat_map(|t| t.split_whitespace().map(String::from).collect::<Vec<_>>())
            .collect()
    }

    #[test]
    fn test_every_template_keeps_section_order() {
        let record = sample();
        for t in TemplateId::ALL {
            assert_eq!(heading_sequence(&layout_resume(t, &record)), HEADINGS, "{t}");
        }
    }

    #[test]
    fn test_template_changes_style_not_content() {
        let record = sample();
        let classic = layout_resume(TemplateId::ClassicAts, &record);
        let expected = body_words(&classic);
        assert!(expected.len() > 40);
        for t in [TemplateId::ModernBlue, TemplateId::MinimalSerif] {
            let doc = layout_resume(t, &record);
            assert_eq!(body_words(&doc), expected, "{t}");
            assert_ne!(doc, classic);
        }
    }

    #[test]
    fn test_empty_skills_drop_heading_only() {
        let mut record = sample();
        record.skills = vec![];
        let doc = layout_resume(TemplateId::ClassicAts, &record);
        assert_eq!(
            heading_sequence(&doc),
            vec!["summary", "education", "experience", "projects", "certifications"]
        );
        assert!(!texts(&doc).iter().any(|t| t == "Languages:"));
    }

    #[test]
    fn test_page_count_never_decreases_with_more_entries() {
        let mut record = sample();
        let entry = record.experience[0].clone();
        let mut last = 0;
        for n in 0..45 {
            record.experience = vec![entry.clone(); n];
            let pages = layout_resume(TemplateId::ModernBlue, &record).page_count();
            assert!(pages >= last, "{n} entries gave {pages} pages after {last}");
            last = pages;
        }
        assert!(last > 1);
    }

    #[test]
    fn test_long_resume_paginates_within_margins() {
        let mut record = sample();
        let entry = record.experience[0].clone();
        record.experience = vec![entry; 25];

        let doc = layout_resume(TemplateId::ClassicAts, &record);
        assert!(doc.page_count() > 1);
        for run in doc.text_runs() {
            assert!(run.y >= RESUME_MARGIN - 1e-3, "{} below margin at {}", run.text, run.y);
            assert!(run.y <= RESUME_PAGE_SIZE.height - RESUME_MARGIN + 1e-3);
        }
        // Every entry survives pagination.
        let companies = texts(&doc)
            .iter()
            .filter(|t| t.starts_with("Texas A&M University"))
            .count();
        assert_eq!(companies, 25);
    }

    #[test]
    fn test_baselines_descend_within_each_page() {
        let mut record = sample();
        record.experience = vec![record.experience[0].clone(); 10];
        let doc = layout_resume(TemplateId::MinimalSerif, &record);
        for page in &doc.pages {
            let mut last_y = f32::INFINITY;
            for op in &page.ops {
                // Runs sharing a baseline (dates beside titles, bullet glyphs) have equal y.
                if let DrawOp::Text(run) = op {
                    assert!(run.y <= last_y + 1e-3, "{:?} drawn above previous line", run.text);
                    last_y = run.y;
                }
            }
        }
    }

    #[test]
    fn test_text_fits_content_width() {
        let doc = layout_resume(TemplateId::ClassicAts, &sample());
        let right = RESUME_PAGE_SIZE.width - RESUME_MARGIN;
        for run in doc.text_runs() {
            let end = run.x + width_of(&run.text, run.face, run.size);
            assert!(end <= right + 1e-2, "{:?} overflows to {end}", run.text);
        }
    }

    #[test]
    fn test_render_produces_parseable_pdf() {
        let meta = DocumentMeta::new("Resume - Jake Ryan", "resume-api");
        let pdf = render_resume_pdf(TemplateId::ModernBlue, &sample(), &meta).unwrap();
        let parsed = lopdf::Document::load_mem(&pdf.bytes).unwrap();
        assert_eq!(parsed.get_pages().len(), pdf.page_count);
    }
}
