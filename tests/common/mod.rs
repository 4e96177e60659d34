//! Shared fixtures: small resumes written as real PDFs with lopdf.

#![allow(dead_code)]

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

/// One line of text: content, bold flag, font size.
pub type Line = (&'static str, bool, i64);

/// Page one of the sample resume.
pub const PAGE_ONE: &[Line] = &[
    ("Jane Doe", true, 18),
    ("Backend engineer building data systems", false, 11),
    ("jane.doe@gmail.com | github.com/janedoe", false, 10),
    ("SKILLS", true, 14),
    ("Rust, Go, SQL", false, 10),
    ("WORK EXPERIENCE", true, 14),
    ("Senior Engineer", true, 11),
    ("Acme Corp", false, 10),
    ("01/2020 - Present", false, 9),
    ("Built a streaming ingestion pipeline in Rust", false, 9),
];

/// Page two of the sample resume.
pub const PAGE_TWO: &[Line] = &[
    ("EDUCATION", true, 14),
    ("BSc Computer Science, 2015", false, 10),
];

/// The two-page sample resume.
pub fn resume_pdf() -> Vec<u8> {
    build_pdf(&[PAGE_ONE, PAGE_TWO])
}

/// Write pages of lines into a PDF, one `BT`/`ET` block per line.
pub fn build_pdf(pages: &[&[Line]]) -> Vec<u8> {
    let pages = pages
        .iter()
        .map(|lines| {
            let mut operations = Vec::new();
            let mut y = 750;
            for (text, bold, size) in lines.iter() {
                operations.push(Operation::new("BT", vec![]));
                operations.push(select_font(*bold, *size));
                operations.push(Operation::new("Td", vec![72.into(), y.into()]));
                operations.push(Operation::new("Tj", vec![Object::string_literal(*text)]));
                operations.push(Operation::new("ET", vec![]));
                y -= 20;
            }
            operations
        })
        .collect();
    write_pdf(pages)
}

/// Write one page whose lines all sit in a single `BT`/`ET` block,
/// separated by `Td` moves the way most PDF producers lay out paragraphs.
pub fn build_flowing_pdf(lines: &[Line]) -> Vec<u8> {
    let mut operations = vec![
        Operation::new("BT", vec![]),
        Operation::new("Td", vec![72.into(), 750.into()]),
    ];
    for (text, bold, size) in lines {
        operations.push(select_font(*bold, *size));
        operations.push(Operation::new("Tj", vec![Object::string_literal(*text)]));
        operations.push(Operation::new("Td", vec![0.into(), (-20).into()]));
    }
    operations.push(Operation::new("ET", vec![]));
    write_pdf(vec![operations])
}

fn select_font(bold: bool, size: i64) -> Operation {
    let font = if bold { "F2" } else { "F1" };
    Operation::new("Tf", vec![font.into(), size.into()])
}

fn write_pdf(pages: Vec<Vec<Operation>>) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let regular_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let bold_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica-Bold",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => regular_id,
            "F2" => bold_id,
        },
    });

    let mut kids = Vec::new();
    for operations in pages {
        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(
            dictionary! {},
            content.encode().expect("encode content"),
        ));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        });
        kids.push(Object::Reference(page_id));
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut buf = Vec::new();
    doc.save_to(&mut buf).expect("save pdf");
    buf
}
