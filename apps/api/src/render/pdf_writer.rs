//! Serializes a [`LaidOutDocument`] to PDF bytes with lopdf.
//!
//! The four standard faces are referenced as non-embedded Type1 fonts with
//! WinAnsiEncoding, so the widths used during layout are the widths the viewer draws.

use chrono::{DateTime, Utc};
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object, ObjectId, Stream, StringFormat};

use crate::layout::display::{DrawOp, LaidOutDocument, LaidOutPage, Rgb, TextRun};
use crate::layout::font_metrics::{encode_win_ansi, FontFace};
use crate::render::RenderError;

/// Document-level metadata written to the Info dictionary.
#[derive(Debug, Clone)]
pub struct DocumentMeta {
    pub title: String,
    pub producer: String,
    pub created_at: DateTime<Utc>,
}

impl DocumentMeta {
    pub fn new(title: impl Into<String>, producer: impl Into<String>) -> Self {
        DocumentMeta {
            title: title.into(),
            producer: producer.into(),
            created_at: Utc::now(),
        }
    }
}

/// Serialized PDF plus the page count of the layout it came from.
#[derive(Debug, Clone)]
pub struct RenderedPdf {
    pub bytes: Vec<u8>,
    pub page_count: usize,
}

pub fn write_pdf(layout: &LaidOutDocument, meta: &DocumentMeta) -> Result<RenderedPdf, RenderError> {
    let mut doc = Document::with_version("1.7");
    let pages_id = doc.new_object_id();

    let mut fonts = Dictionary::new();
    for face in FontFace::ALL {
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => face.postscript_name(),
            "Encoding" => "WinAnsiEncoding",
        });
        fonts.set(face.resource_name(), font_id);
    }
    let resources_id = doc.add_object(dictionary! { "Font" => fonts });

    let (width, height) = (layout.page_size.width, layout.page_size.height);
    let mut kids: Vec<Object> = Vec::with_capacity(layout.pages.len());
    for page in &layout.pages {
        let content = page_content(page);
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));

        let mut page_dict = dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![0.into(), 0.into(), width.into(), height.into()],
            "Contents" => content_id,
            "Resources" => resources_id,
        };
        let annots = link_annotations(&mut doc, page);
        if !annots.is_empty() {
            page_dict.set(
                "Annots",
                annots.into_iter().map(Object::Reference).collect::<Vec<Object>>(),
            );
        }
        kids.push(doc.add_object(page_dict).into());
    }

    let page_count = kids.len();
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => page_count as i64,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    let info_id = doc.add_object(dictionary! {
        "Title" => text_string(&meta.title),
        "Producer" => text_string(&meta.producer),
        "CreationDate" => text_string(&pdf_date(&meta.created_at)),
    });
    doc.trailer.set("Root", catalog_id);
    doc.trailer.set("Info", info_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)?;
    Ok(RenderedPdf { bytes, page_count })
}

fn page_content(page: &LaidOutPage) -> Content {
    let mut operations = Vec::new();
    for op in &page.ops {
        match op {
            DrawOp::Text(run) => push_text(&mut operations, run),
            DrawOp::Rule {
                x1,
                x2,
                y,
                color,
                thickness,
            } => {
                operations.push(Operation::new("q", vec![]));
                operations.push(Operation::new("w", vec![(*thickness).into()]));
                operations.push(Operation::new("RG", color_operands(*color)));
                operations.push(Operation::new("m", vec![(*x1).into(), (*y).into()]));
                operations.push(Operation::new("l", vec![(*x2).into(), (*y).into()]));
                operations.push(Operation::new("S", vec![]));
                operations.push(Operation::new("Q", vec![]));
            }
            // Annotations live on the page dictionary, not in the content stream.
            DrawOp::Link { .. } => {}
        }
    }
    Content { operations }
}

fn push_text(operations: &mut Vec<Operation>, run: &TextRun) {
    operations.push(Operation::new("BT", vec![]));
    operations.push(Operation::new(
        "Tf",
        vec![run.face.resource_name().into(), run.size.into()],
    ));
    operations.push(Operation::new("rg", color_operands(run.color)));
    operations.push(Operation::new("Td", vec![run.x.into(), run.y.into()]));
    operations.push(Operation::new(
        "Tj",
        vec![Object::String(encode_win_ansi(&run.text), StringFormat::Literal)],
    ));
    operations.push(Operation::new("ET", vec![]));
}

fn color_operands(color: Rgb) -> Vec<Object> {
    vec![color.r.into(), color.g.into(), color.b.into()]
}

fn link_annotations(doc: &mut Document, page: &LaidOutPage) -> Vec<ObjectId> {
    page.ops
        .iter()
        .filter_map(|op| match op {
            DrawOp::Link { rect, uri } => Some((rect, uri)),
            _ => None,
        })
        .map(|(rect, uri)| {
            let action = dictionary! {
                "Type" => "Action",
                "S" => "URI",
                "URI" => Object::string_literal(uri.as_bytes().to_vec()),
            };
            doc.add_object(dictionary! {
                "Type" => "Annot",
                "Subtype" => "Link",
                "Rect" => rect.iter().map(|v| Object::from(*v)).collect::<Vec<Object>>(),
                "Border" => vec![0.into(), 0.into(), 0.into()],
                "A" => action,
            })
        })
        .collect()
}

/// PDF text string for the Info dictionary: ASCII as-is, anything else as UTF-16BE
/// with a byte-order mark.
fn text_string(text: &str) -> Object {
    if text.is_ascii() {
        return Object::String(text.as_bytes().to_vec(), StringFormat::Literal);
    }
    let mut bytes = vec![0xFE, 0xFF];
    bytes.extend(text.encode_utf16().flat_map(u16::to_be_bytes));
    Object::String(bytes, StringFormat::Hexadecimal)
}

/// PDF date string, e.g. `D:20240131120000Z`.
fn pdf_date(at: &DateTime<Utc>) -> String {
    at.format("D:%Y%m%d%H%M%SZ").to_string()
}
