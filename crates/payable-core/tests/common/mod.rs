//! Shared helpers for PDF integration tests.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

/// Line spacing of generated pages, in points.
const LEADING: i64 = 14;

/// Build an uncompressed PDF with one page per entry, each page showing its
/// lines in Courier.
pub fn build_pdf(pages: &[&[&str]]) -> Vec<u8> {
    let contents = pages
        .iter()
        .map(|lines| {
            let mut operations = text_header();
            for line in lines.iter() {
                operations.push(Operation::new("Tj", vec![Object::string_literal(*line)]));
                operations.push(Operation::new("T*", vec![]));
            }
            operations.push(Operation::new("ET", vec![]));
            operations
        })
        .collect();
    assemble(contents)
}

/// Build a PDF whose lines are made of separately placed pieces of text.
///
/// Each piece is `(x offset from the left margin, text)`, moved into place
/// with `Td`, so columns carry no spaces between them.
pub fn build_positioned_pdf(pages: &[&[&[(i64, &str)]]]) -> Vec<u8> {
    let contents = pages
        .iter()
        .map(|lines| {
            let mut operations = text_header();
            for (n, line) in lines.iter().enumerate() {
                let mut x = 0;
                for (i, (offset, text)) in line.iter().enumerate() {
                    let dy = if i == 0 && n > 0 { -LEADING } else { 0 };
                    operations.push(Operation::new("Td", vec![(offset - x).into(), dy.into()]));
                    operations.push(Operation::new("Tj", vec![Object::string_literal(*text)]));
                    x = *offset;
                }
                // back to the left margin for the next line
                operations.push(Operation::new("Td", vec![(-x).into(), 0.into()]));
            }
            operations.push(Operation::new("ET", vec![]));
            operations
        })
        .collect();
    assemble(contents)
}

fn text_header() -> Vec<Operation> {
    vec![
        Operation::new("BT", vec![]),
        Operation::new("Tf", vec!["F1".into(), 10.into()]),
        Operation::new("TL", vec![LEADING.into()]),
        Operation::new("Td", vec![50.into(), 780.into()]),
    ]
}

fn assemble(pages: Vec<Vec<Operation>>) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });

    let mut kids: Vec<Object> = Vec::new();
    for operations in pages {
        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    let pages_dict = dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => count,
        "Resources" => resources_id,
        "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut buf = Vec::new();
    doc.save_to(&mut buf).unwrap();
    buf
}
