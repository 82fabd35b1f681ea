use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::layout::normalize::normalize_opt;
use crate::layout::style::TemplateId;
use crate::models::resume::ResumeRecord;
use crate::render::{
    render_plain_text_pdf, render_resume_pdf, DocumentMeta, PlainTextProfile, RenderError,
    RenderedPdf,
};
use crate::state::AppState;

const SLUG_MAX_LEN: usize = 60;
const SLUG_FALLBACK: &str = "cover-letter";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumePdfRequest {
    pub template_id: Option<String>,
    pub input_data: Option<Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedTextPdfRequest {
    #[serde(default)]
    pub generated_text: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverLetterPdfRequest {
    #[serde(default)]
    pub cover_letter_text: String,
    pub company_name: Option<String>,
    pub role_name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TemplateSummary {
    pub id: TemplateId,
    pub name: &'static str,
    pub description: &'static str,
}

/// GET /api/v1/templates
pub async fn handle_list_templates() -> Json<Vec<TemplateSummary>> {
    Json(
        TemplateId::ALL
            .into_iter()
            .map(|id| TemplateSummary {
                id,
                name: id.display_name(),
                description: id.description(),
            })
            .collect(),
    )
}

/// POST /api/v1/resumes/pdf
pub async fn handle_resume_pdf(
    State(state): State<AppState>,
    Json(req): Json<ResumePdfRequest>,
) -> Result<Response, AppError> {
    let input = req
        .input_data
        .ok_or_else(|| AppError::Validation("Missing essential resume input data".to_string()))?;
    let record: ResumeRecord = serde_json::from_value(input)
        .map_err(|e| AppError::Validation(format!("Invalid resume input data: {e}")))?;
    let template = TemplateId::parse_or_default(req.template_id.as_deref());

    let name = normalize_opt(record.personal_info.name.as_deref());
    let title = if name.is_empty() { "Resume".to_string() } else { format!("Resume - {name}") };
    let meta = DocumentMeta::new(title, state.config.pdf_producer.clone());

    let pdf = run_blocking(move || render_resume_pdf(template, &record, &meta)).await?;

    let render_id = Uuid::new_v4();
    info!(%render_id, %template, pages = pdf.page_count, bytes = pdf.bytes.len(), "resume PDF rendered");
    Ok(pdf_attachment(pdf, &format!("resume_{template}_{render_id}.pdf")))
}

/// POST /api/v1/resumes/text-pdf
pub async fn handle_generated_text_pdf(
    State(state): State<AppState>,
    Json(req): Json<GeneratedTextPdfRequest>,
) -> Result<Response, AppError> {
    if req.generated_text.trim().is_empty() {
        return Err(AppError::Validation("Missing generated resume text".to_string()));
    }
    let meta = DocumentMeta::new("Generated Resume", state.config.pdf_producer.clone());
    let text = req.generated_text;

    let pdf = run_blocking(move || {
        render_plain_text_pdf(&text, &PlainTextProfile::GENERATED_RESUME, &meta)
    })
    .await?;

    let render_id = Uuid::new_v4();
    info!(%render_id, pages = pdf.page_count, "generated-text PDF rendered");
    Ok(pdf_attachment(pdf, &format!("generated_resume_{render_id}.pdf")))
}

/// POST /api/v1/cover-letters/pdf
pub async fn handle_cover_letter_pdf(
    State(state): State<AppState>,
    Json(req): Json<CoverLetterPdfRequest>,
) -> Result<Response, AppError> {
    if req.cover_letter_text.trim().is_empty() {
        return Err(AppError::Validation("Missing coverLetterText".to_string()));
    }
    let filename = cover_letter_filename(req.company_name.as_deref(), req.role_name.as_deref());
    let company = normalize_opt(req.company_name.as_deref());
    let title = if company.is_empty() {
        "Cover Letter".to_string()
    } else {
        format!("Cover Letter - {company}")
    };
    let meta = DocumentMeta::new(title, state.config.pdf_producer.clone());
    let text = req.cover_letter_text;

    let pdf = run_blocking(move || {
        render_plain_text_pdf(&text, &PlainTextProfile::COVER_LETTER, &meta)
    })
    .await?;

    info!(%filename, pages = pdf.page_count, "cover letter PDF rendered");
    Ok(pdf_attachment(pdf, &filename))
}

/// Layout and serialization are CPU-bound; keep them off the async executor.
async fn run_blocking<F>(render: F) -> Result<RenderedPdf, AppError>
where
    F: FnOnce() -> Result<RenderedPdf, RenderError> + Send + 'static,
{
    let pdf = tokio::task::spawn_blocking(render)
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in render: {e}")))??;
    Ok(pdf)
}

fn pdf_attachment(pdf: RenderedPdf, filename: &str) -> Response {
    (
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        pdf.bytes,
    )
        .into_response()
}

pub fn cover_letter_filename(company: Option<&str>, role: Option<&str>) -> String {
    format!("cover-letter-{}-{}.pdf", filename_slug(company), filename_slug(role))
}

fn filename_slug(value: Option<&str>) -> String {
    let slug = slug::slugify(value.unwrap_or_default().trim());
    let truncated: String = slug.chars().take(SLUG_MAX_LEN).collect();
    match truncated.trim_matches('-') {
        "" => SLUG_FALLBACK.to_string(),
        s => s.to_string(),
    }
}
