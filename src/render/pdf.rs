//! PDF serialization of a [`Layout`] with `lopdf`.
//!
//! Uses the standard 14 Helvetica faces with `WinAnsiEncoding`, so no font
//! data is embedded. Streams are left uncompressed and no timestamps are
//! written, which keeps the output byte-for-byte reproducible.

use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream, StringFormat, dictionary};

use super::RenderError;
use super::layout::{Font, Layout, PAGE_HEIGHT, PAGE_WIDTH, TextRun};

const PDF_VERSION: &str = "1.4";

/// Encode a layout as a complete PDF document.
pub fn encode(layout: &Layout, title: &str) -> Result<Vec<u8>, RenderError> {
    let mut doc = Document::with_version(PDF_VERSION);
    let pages_id = doc.new_object_id();

    let mut fonts = Dictionary::new();
    for font in [Font::Regular, Font::Bold] {
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => font.base_font(),
            "Encoding" => "WinAnsiEncoding",
        });
        fonts.set(font.resource_name(), Object::Reference(font_id));
    }
    let resources_id = doc.add_object(dictionary! {
        "Font" => Object::Dictionary(fonts),
    });

    let mut page_ids: Vec<ObjectId> = Vec::with_capacity(layout.pages.len());
    for page in &layout.pages {
        let operations: Vec<Operation> = page.runs.iter().flat_map(text_operations).collect();
        let content = Content { operations };
        let bytes = content
            .encode()
            .map_err(|e| RenderError::Encode(e.to_string()))?;
        let content_id = doc.add_object(Stream::new(Dictionary::new(), bytes));

        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => Object::Reference(pages_id),
            "MediaBox" => vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Integer(PAGE_WIDTH),
                Object::Integer(PAGE_HEIGHT),
            ],
            "Contents" => Object::Reference(content_id),
            "Resources" => Object::Reference(resources_id),
        });
        page_ids.push(page_id);
    }

    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => page_ids.iter().map(|id| Object::Reference(*id)).collect::<Vec<_>>(),
        "Count" => page_ids.len() as i64,
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => Object::Reference(pages_id),
    });
    let info_id = doc.add_object(dictionary! {
        "Title" => Object::String(win_ansi(title), StringFormat::Literal),
        "Producer" => Object::String(
            crate::constants::APP_NAME.as_bytes().to_vec(),
            StringFormat::Literal,
        ),
    });
    doc.trailer.set("Root", Object::Reference(catalog_id));
    doc.trailer.set("Info", Object::Reference(info_id));

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer)
        .map_err(|e| RenderError::Encode(e.to_string()))?;
    Ok(buffer)
}

/// `BT /Fn size Tf x y Td (text) Tj ET`
fn text_operations(run: &TextRun) -> Vec<Operation> {
    vec![
        Operation::new("BT", vec![]),
        Operation::new(
            "Tf",
            vec![
                Object::Name(run.font.resource_name().as_bytes().to_vec()),
                Object::Integer(run.size),
            ],
        ),
        Operation::new("Td", vec![Object::Integer(run.x), Object::Integer(run.y)]),
        Operation::new(
            "Tj",
            vec![Object::String(win_ansi(&run.text), StringFormat::Literal)],
        ),
        Operation::new("ET", vec![]),
    ]
}

/// Map text to WinAnsi bytes; anything the encoding lacks becomes `?`.
pub fn win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c as u32 {
            0x20..=0x7e | 0xa0..=0xff => c as u32 as u8,
            0x09 => b' ',
            _ => win_ansi_extra(c).unwrap_or(b'?'),
        })
        .collect()
}

/// The 0x80–0x9f block, where WinAnsi departs from Latin-1.
fn win_ansi_extra(c: char) -> Option<u8> {
    let byte = match c {
        '€' => 0x80,
        '‚' => 0x82,
        'ƒ' => 0x83,
        '„' => 0x84,
        '…' => 0x85,
        '†' => 0x86,
        '‡' => 0x87,
        'ˆ' => 0x88,
        '‰' => 0x89,
        'Š' => 0x8a,
        '‹' => 0x8b,
        'Œ' => 0x8c,
        'Ž' => 0x8e,
        '‘' => 0x91,
        '’' => 0x92,
        '“' => 0x93,
        '”' => 0x94,
        '•' => 0x95,
        '–' => 0x96,
        '—' => 0x97,
        '˜' => 0x98,
        '™' => 0x99,
        'š' => 0x9a,
        '›' => 0x9b,
        'œ' => 0x9c,
        'ž' => 0x9e,
        'Ÿ' => 0x9f,
        _ => return None,
    };
    Some(byte)
}
