//! PDF serialization of laid-out report pages.
//!
//! Builds the document object-by-object with `lopdf`: one Helvetica
//! font resource shared by all pages, one content stream per page, and
//! `/Link` annotations with `/URI` actions for the source captions.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object, Stream, StringFormat};

use crate::error::ReportError;
use crate::layout::{DrawCommand, Page, Rgb, TextAlign, PAGE_HEIGHT, PAGE_WIDTH};
use crate::wrap::text_width_mm;

const MM_TO_PT: f64 = 72.0 / 25.4;

/// Serialize laid-out pages into a complete PDF document.
pub fn render_pdf(pages: &[Page]) -> Result<Vec<u8>, ReportError> {
    let mut doc = Document::with_version("1.7");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => Object::Reference(font_id),
        },
    });

    let mut page_ids = Vec::new();
    for page in pages {
        let content = Content {
            operations: page_operations(page),
        };
        let encoded = content
            .encode()
            .map_err(|e| ReportError::Encode(e.to_string()))?;
        let content_id = doc.add_object(Stream::new(Dictionary::new(), encoded));

        let annotation_ids: Vec<Object> = page
            .links
            .iter()
            .map(|link| Object::Reference(doc.add_object(link_annotation(link))))
            .collect();

        let mut page_dict = dictionary! {
            "Type" => "Page",
            "Parent" => Object::Reference(pages_id),
            "MediaBox" => vec![
                0.into(),
                0.into(),
                real(PAGE_WIDTH * MM_TO_PT),
                real(PAGE_HEIGHT * MM_TO_PT),
            ],
            "Contents" => Object::Reference(content_id),
            "Resources" => Object::Reference(resources_id),
        };
        if !annotation_ids.is_empty() {
            page_dict.set("Annots", Object::Array(annotation_ids));
        }
        page_ids.push(doc.add_object(page_dict));
    }

    let pages_dict = dictionary! {
        "Type" => "Pages",
        "Count" => page_ids.len() as i64,
        "Kids" => page_ids
            .iter()
            .map(|id| Object::Reference(*id))
            .collect::<Vec<_>>(),
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => Object::Reference(pages_id),
    });
    doc.trailer.set("Root", catalog_id);
    doc.compress();

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer)
        .map_err(|e| ReportError::Save(e.to_string()))?;
    Ok(buffer)
}

/// Translate a page's draw commands into content-stream operations.
/// Layout coordinates are top-down millimeters; PDF wants bottom-up
/// points.
fn page_operations(page: &Page) -> Vec<Operation> {
    let mut ops = Vec::new();

    for command in &page.commands {
        match command {
            DrawCommand::Rect {
                x,
                y,
                width,
                height,
                fill,
            } => {
                ops.push(Operation::new("rg", fill_operands(*fill)));
                ops.push(Operation::new(
                    "re",
                    vec![
                        real(x * MM_TO_PT),
                        real((PAGE_HEIGHT - (y + height)) * MM_TO_PT),
                        real(width * MM_TO_PT),
                        real(height * MM_TO_PT),
                    ],
                ));
                ops.push(Operation::new("f", vec![]));
            }
            DrawCommand::Text {
                x,
                y,
                text,
                size,
                color,
                align,
            } => {
                let left = match align {
                    TextAlign::Left => *x,
                    TextAlign::Center => x - text_width_mm(text, *size) / 2.0,
                };
                ops.push(Operation::new("BT", vec![]));
                ops.push(Operation::new(
                    "Tf",
                    vec![Object::Name(b"F1".to_vec()), real(*size)],
                ));
                ops.push(Operation::new("rg", fill_operands(*color)));
                ops.push(Operation::new(
                    "Td",
                    vec![real(left * MM_TO_PT), real((PAGE_HEIGHT - y) * MM_TO_PT)],
                ));
                ops.push(Operation::new(
                    "Tj",
                    vec![Object::String(encode_text(text), StringFormat::Literal)],
                ));
                ops.push(Operation::new("ET", vec![]));
            }
        }
    }

    ops
}

fn link_annotation(link: &crate::layout::LinkAnnotation) -> Dictionary {
    let llx = link.x * MM_TO_PT;
    let lly = (PAGE_HEIGHT - (link.y + link.height)) * MM_TO_PT;
    let urx = (link.x + link.width) * MM_TO_PT;
    let ury = (PAGE_HEIGHT - link.y) * MM_TO_PT;

    dictionary! {
        "Type" => "Annot",
        "Subtype" => "Link",
        "Rect" => vec![real(llx), real(lly), real(urx), real(ury)],
        "Border" => vec![0.into(), 0.into(), 0.into()],
        "A" => dictionary! {
            "Type" => "Action",
            "S" => "URI",
            "URI" => Object::String(encode_text(&link.url), StringFormat::Literal),
        },
    }
}

fn real(value: f64) -> Object {
    Object::Real(value as f32)
}

/// RGB fill operands scaled to the 0..1 range.
fn fill_operands(color: Rgb) -> Vec<Object> {
    vec![
        real(color.r as f64 / 255.0),
        real(color.g as f64 / 255.0),
        real(color.b as f64 / 255.0),
    ]
}

/// Encode text as an escaped PDF literal string. Characters outside
/// Latin-1 are replaced, not errors.
fn encode_text(text: &str) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(text.len());
    for ch in text.chars() {
        let byte = if (ch as u32) < 256 { ch as u8 } else { b'?' };
        match byte {
            b'\\' | b'(' | b')' => {
                bytes.push(b'\\');
                bytes.push(byte);
            }
            _ => bytes.push(byte),
        }
    }
    bytes
}
