//! Plain-text → PDF writer.
//!
//! Output is an uncompressed PDF 1.4 file: every page carries the media box
//! and the shared core-font resource, one content stream per page, no dates
//! or IDs. The same text and config always yield the same bytes.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, ObjectId, Stream};

use crate::layout::{default_page_config, paginate, PageConfig, PageLayout, PT_PER_MM};
use crate::render::encoding::encode_win_ansi;
use crate::render::RenderError;

const FONT_RESOURCE: &str = "F1";
const PRODUCER: &str = "Scrivener";

/// Renders `text` with the default page configuration.
pub fn render_pdf(text: &str) -> Result<Vec<u8>, RenderError> {
    render_pdf_with(text, &default_page_config())
}

/// Renders `text` as left-aligned, word-wrapped lines, one block per input
/// line, paginating automatically. Markdown is not interpreted.
///
/// Fails with `UnsupportedCharacter` if any character has no WinAnsi code.
pub fn render_pdf_with(text: &str, config: &PageConfig) -> Result<Vec<u8>, RenderError> {
    check_encodable(text)?;

    let pages = paginate(text, config.font, config);

    let mut doc = Document::with_version("1.4");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => config.font.base_font,
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            FONT_RESOURCE => font_id,
        },
    });

    let mut kids: Vec<Object> = Vec::with_capacity(pages.len());
    for page in &pages {
        let content = page_content(page, config)?;
        let encoded = content
            .encode()
            .map_err(|e| RenderError::Pdf(e.to_string()))?;
        let content_id = doc.add_object(Stream::new(dictionary! {}, encoded));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
            "MediaBox" => media_box(config),
        });
        kids.push(page_id.into());
    }

    let page_count = kids.len() as i64;
    let pages_dict = dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => page_count,
        "Resources" => resources_id,
        "MediaBox" => media_box(config),
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

    let catalog_id: ObjectId = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    let info_id = doc.add_object(dictionary! {
        "Producer" => Object::string_literal(PRODUCER),
    });
    doc.trailer.set("Root", catalog_id);
    doc.trailer.set("Info", info_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)
        .map_err(|e| RenderError::Pdf(e.to_string()))?;
    Ok(bytes)
}

/// Rejects the first character that cannot be encoded, reporting its
/// 1-based line and column in `text`.
fn check_encodable(text: &str) -> Result<(), RenderError> {
    for (line_idx, line) in text.split('\n').enumerate() {
        let line = line.strip_suffix('\r').unwrap_or(line);
        encode_win_ansi(line).map_err(|(col, character)| RenderError::UnsupportedCharacter {
            character,
            line: line_idx + 1,
            column: col + 1,
        })?;
    }
    Ok(())
}

fn page_content(page: &PageLayout, config: &PageConfig) -> Result<Content, RenderError> {
    let mut operations = vec![
        Operation::new("BT", vec![]),
        Operation::new(
            "Tf",
            vec![FONT_RESOURCE.into(), Object::Real(config.font_size_pt.into())],
        ),
        Operation::new("ET", vec![]),
    ];

    let x = pt(config.margin_left_mm + config.cell_padding_mm);
    for line in page.lines.iter().filter(|l| !l.text.is_empty()) {
        // baseline sits at mid-line plus 0.3 of the font size
        let baseline_mm =
            line.top_mm + 0.5 * config.line_height_mm + 0.3 * config.font_size_mm();
        let y = pt(config.page_height_mm - baseline_mm);
        let encoded = encode_win_ansi(&line.text).map_err(|(_, character)| {
            RenderError::Pdf(format!("unencodable {character:?} in laid-out line"))
        })?;

        operations.push(Operation::new("BT", vec![]));
        operations.push(Operation::new(
            "Td",
            vec![Object::Real(x.into()), Object::Real(y.into())],
        ));
        operations.push(Operation::new("Tj", vec![Object::string_literal(encoded)]));
        operations.push(Operation::new("ET", vec![]));
    }

    Ok(Content { operations })
}

fn media_box(config: &PageConfig) -> Vec<Object> {
    vec![
        Object::Integer(0),
        Object::Integer(0),
        Object::Real(pt(config.page_width_mm).into()),
        Object::Real(pt(config.page_height_mm).into()),
    ]
}

/// mm → pt, rounded to 1/100 pt so output does not carry float noise.
fn pt(mm: f32) -> f32 {
    (mm * PT_PER_MM * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_count(bytes: &[u8]) -> usize {
        Document::load_mem(bytes)
            .expect("output should parse as PDF")
            .get_pages()
            .len()
    }

    fn numbered_lines(n: usize) -> String {
        (1..=n)
            .map(|i| format!("Line {i}: shipped reporting work"))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_empty_text_renders_single_blank_page() {
        let bytes = render_pdf("").unwrap();
        assert!(bytes.starts_with(b"%PDF-1.4"));
        assert_eq!(page_count(&bytes), 1);
        assert!(!String::from_utf8_lossy(&bytes).contains(") Tj"));
    }

    #[test]
    fn test_long_text_paginates() {
        assert_eq!(page_count(&render_pdf(&numbered_lines(20)).unwrap()), 1);
        assert_eq!(page_count(&render_pdf(&numbered_lines(28)).unwrap()), 2);
        assert_eq!(page_count(&render_pdf(&numbered_lines(60)).unwrap()), 3);
    }

    #[test]
    fn test_output_grows_with_more_lines() {
        let mut previous = render_pdf("").unwrap().len();
        for n in [1, 2, 5, 10, 27, 28, 40, 80] {
            let len = render_pdf(&numbered_lines(n)).unwrap().len();
            assert!(len >= previous, "{n} lines produced {len} < {previous} bytes");
            previous = len;
        }
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let text = "# Jane Doe\n\n**Email:** jane@example.com\n- Python, SQL";
        assert_eq!(render_pdf(text).unwrap(), render_pdf(text).unwrap());
    }

    #[test]
    fn test_markdown_is_rendered_literally() {
        let bytes = render_pdf("# Jane Doe\n**Skills**").unwrap();
        let raw = String::from_utf8_lossy(&bytes);
        assert!(raw.contains("(# Jane Doe) Tj"));
        assert!(raw.contains("(**Skills**) Tj"));
    }

    #[test]
    fn test_text_is_extractable() {
        let bytes = render_pdf("Jane Doe\nData Analyst at Accenture").unwrap();
        let text = pdf_extract::extract_text_from_mem(&bytes).unwrap();
        assert!(text.contains("Jane Doe"), "extracted: {text:?}");
        assert!(text.contains("Accenture"), "extracted: {text:?}");
    }

    #[test]
    fn test_win_ansi_punctuation_renders() {
        assert!(render_pdf("Résumé — “quoted” • 5€").is_ok());
    }

    #[test]
    fn test_unsupported_character_reports_position() {
        let err = render_pdf("Jane Doe\nOK line\nFailed ❌ here").unwrap_err();
        match err {
            RenderError::UnsupportedCharacter {
                character,
                line,
                column,
            } => {
                assert_eq!(character, '❌');
                assert_eq!(line, 3);
                assert_eq!(column, 8);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_crlf_input_renders() {
        let bytes = render_pdf("first\r\nsecond\r\n").unwrap();
        assert_eq!(page_count(&bytes), 1);
    }
}
