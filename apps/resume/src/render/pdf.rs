//! PDF serialization of a laid-out resume using `lopdf`.
//!
//! Text is drawn in the two base-14 faces of the configured family, so nothing is embedded.
//! Strings are WinAnsi (cp1252) encoded; characters outside that code page become `?`.

use chrono::Utc;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object, ObjectId, Stream, StringFormat};
use tracing::debug;

use crate::compose::Composition;
use crate::errors::AppError;
use crate::layout::{
    analyze_page_fill, layout_composition, Page, PageConfig, PageFillAnalysis, PlacedItem,
};

const REGULAR_FONT: &str = "F1";
const BOLD_FONT: &str = "F2";
const PRODUCER: &str = concat!("resume ", env!("CARGO_PKG_VERSION"));

/// Portion of the font size a link rectangle extends below the baseline.
const LINK_DESCENT: f32 = 0.2;
const LINK_ASCENT: f32 = 0.8;

/// Rendered document plus the fill summary of its layout.
#[derive(Debug, Clone)]
pub struct RenderedPdf {
    pub bytes: Vec<u8>,
    pub fill: PageFillAnalysis,
}

/// Lays out `composition` and writes it as a PDF titled `title`.
pub fn render_pdf(
    composition: &Composition,
    config: &PageConfig,
    title: &str,
) -> Result<RenderedPdf, AppError> {
    let layout = layout_composition(composition, config);
    let fill = analyze_page_fill(&layout, config);

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let regular_id = doc.add_object(font_dictionary(config.font.base_font(false)));
    let bold_id = doc.add_object(font_dictionary(config.font.base_font(true)));
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            REGULAR_FONT => regular_id,
            BOLD_FONT => bold_id,
        },
    });

    let mut kids: Vec<Object> = Vec::with_capacity(layout.pages.len());
    for page in &layout.pages {
        let page_id = write_page(&mut doc, page, config, pages_id)?;
        kids.push(page_id.into());
    }

    let page_count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => page_count,
            "Resources" => resources_id,
            "MediaBox" => vec![
                0.into(),
                0.into(),
                config.page_width_pt.into(),
                config.page_height_pt.into(),
            ],
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    let info_id = doc.add_object(dictionary! {
        "Title" => pdf_string(title),
        "Producer" => pdf_string(PRODUCER),
        "CreationDate" => pdf_string(&Utc::now().format("D:%Y%m%d%H%M%SZ").to_string()),
    });
    doc.trailer.set("Root", catalog_id);
    doc.trailer.set("Info", info_id);
    doc.compress();

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)
        .map_err(|e| AppError::Render(format!("failed to write PDF: {e}")))?;

    debug!(pages = fill.page_count, size = bytes.len(), "PDF written");
    Ok(RenderedPdf { bytes, fill })
}

fn font_dictionary(base_font: &str) -> Dictionary {
    dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => base_font,
        "Encoding" => "WinAnsiEncoding",
    }
}

fn pdf_string(text: &str) -> Object {
    Object::String(encode_win_ansi(text), StringFormat::Literal)
}

fn write_page(
    doc: &mut Document,
    page: &Page,
    config: &PageConfig,
    parent: ObjectId,
) -> Result<ObjectId, AppError> {
    let height = config.page_height_pt;
    let mut operations = Vec::new();
    let mut annotations: Vec<Object> = Vec::new();

    for item in &page.items {
        match item {
            PlacedItem::Line(line) => {
                let baseline = height - line.baseline;
                for run in &line.runs {
                    let x = line.x + run.x;
                    let font = if run.bold { BOLD_FONT } else { REGULAR_FONT };
                    operations.extend([
                        Operation::new("BT", vec![]),
                        Operation::new("Tf", vec![font.into(), line.size_pt.into()]),
                        Operation::new("Td", vec![x.into(), baseline.into()]),
                        Operation::new("Tj", vec![pdf_string(&run.text)]),
                        Operation::new("ET", vec![]),
                    ]);
                    if let Some(url) = &run.link {
                        let rect = [
                            x,
                            baseline - line.size_pt * LINK_DESCENT,
                            x + run.width,
                            baseline + line.size_pt * LINK_ASCENT,
                        ];
                        let annot_id = doc.add_object(link_annotation(rect, url));
                        annotations.push(annot_id.into());
                    }
                }
            }
            PlacedItem::Rule {
                y,
                x_start,
                x_end,
                thickness,
            } => {
                operations.extend([
                    Operation::new(
                        "re",
                        vec![
                            (*x_start).into(),
                            (height - y).into(),
                            (x_end - x_start).into(),
                            (*thickness).into(),
                        ],
                    ),
                    Operation::new("f", vec![]),
                ]);
            }
        }
    }

    let content = Content { operations }
        .encode()
        .map_err(|e| AppError::Render(format!("failed to encode page content: {e}")))?;
    let content_id = doc.add_object(Stream::new(dictionary! {}, content));

    let mut page_dict = dictionary! {
        "Type" => "Page",
        "Parent" => parent,
        "Contents" => content_id,
    };
    if !annotations.is_empty() {
        page_dict.set("Annots", annotations);
    }
    Ok(doc.add_object(page_dict))
}

fn link_annotation(rect: [f32; 4], url: &str) -> Dictionary {
    dictionary! {
        "Type" => "Annot",
        "Subtype" => "Link",
        "Rect" => rect.iter().map(|v| Object::from(*v)).collect::<Vec<Object>>(),
        "Border" => vec![0.into(), 0.into(), 0.into()],
        "A" => dictionary! {
            "Type" => "Action",
            "S" => "URI",
            "URI" => Object::String(url.as_bytes().to_vec(), StringFormat::Literal),
        },
    }
}

/// Maps text to Windows-1252 bytes.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars().map(win_ansi_byte).collect()
}

fn win_ansi_byte(c: char) -> u8 {
    match c {
        '\u{20}'..='\u{7E}' => c as u8,
        '€' => 0x80,
        '‚' => 0x82,
        '„' => 0x84,
        '…' => 0x85,
        '•' => 0x95,
        '–' => 0x96,
        '—' => 0x97,
        '‘' => 0x91,
        '’' => 0x92,
        '“' => 0x93,
        '”' => 0x94,
        '™' => 0x99,
        '\u{A0}'..='\u{FF}' => c as u32 as u8,
        _ => b'?',
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::compose;
    use crate::layout::{default_page_config, FontFamily};
    use crate::models::resume::{ExperienceParams, PersonalInfoParams, ResumeRecord};
    use crate::models::sample::sample_resume;

    fn config() -> PageConfig {
        default_page_config(FontFamily::Times)
    }

    fn page_annotation_count(doc: &Document, page_id: ObjectId) -> usize {
        let page = doc
            .get_object(page_id)
            .and_then(Object::as_dict)
            .expect("page dictionary");
        match page.get(b"Annots") {
            Ok(Object::Array(items)) => items.len(),
            _ => 0,
        }
    }

    #[test]
    fn test_output_is_a_pdf() {
        let record = sample_resume();
        let pdf = render_pdf(&compose(&record), &config(), &record.personal_info.name).unwrap();
        assert!(pdf.bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_page_count_matches_layout() {
        let mut record = sample_resume();
        for i in 0..60 {
            record.add_experience(ExperienceParams {
                job_title: format!("Role {i}"),
                company: "Acme".into(),
                responsibilities: vec!["Kept the lights on".into(); 2],
                ..Default::default()
            });
        }
        let composition = compose(&record);
        let expected = layout_composition(&composition, &config()).page_count();
        let pdf = render_pdf(&composition, &config(), "Test").unwrap();

        let doc = Document::load_mem(&pdf.bytes).expect("readable PDF");
        assert!(expected > 1);
        assert_eq!(doc.get_pages().len(), expected);
        assert_eq!(pdf.fill.page_count, expected);
    }

    #[test]
    fn test_empty_record_renders_one_page() {
        let pdf = render_pdf(&compose(&ResumeRecord::new()), &config(), "").unwrap();
        let doc = Document::load_mem(&pdf.bytes).expect("readable PDF");
        assert_eq!(doc.get_pages().len(), 1);
    }

    #[test]
    fn test_contact_links_become_annotations() {
        let mut record = ResumeRecord::new();
        record.set_personal_info(PersonalInfoParams {
            name: "Max".into(),
            email: "max@example.com".into(),
            phone: "+49 170 123".into(),
            ..Default::default()
        });
        let pdf = render_pdf(&compose(&record), &config(), "Max").unwrap();
        let doc = Document::load_mem(&pdf.bytes).expect("readable PDF");
        let (_, page_id) = doc.get_pages().into_iter().next().expect("one page");
        assert_eq!(page_annotation_count(&doc, page_id), 2);
    }

    #[test]
    fn test_no_links_means_no_annotations() {
        let mut record = ResumeRecord::new();
        record.set_personal_info(PersonalInfoParams {
            name: "Max".into(),
            location: "Berlin".into(),
            ..Default::default()
        });
        let pdf = render_pdf(&compose(&record), &config(), "Max").unwrap();
        let doc = Document::load_mem(&pdf.bytes).expect("readable PDF");
        let (_, page_id) = doc.get_pages().into_iter().next().expect("one page");
        assert_eq!(page_annotation_count(&doc, page_id), 0);
    }

    #[test]
    fn test_helvetica_is_used_when_configured() {
        let config = default_page_config(FontFamily::Helvetica);
        let pdf = render_pdf(&compose(&sample_resume()), &config, "x").unwrap();
        let doc = Document::load_mem(&pdf.bytes).expect("readable PDF");
        let names: Vec<String> = doc
            .objects
            .values()
            .filter_map(|o| o.as_dict().ok())
            .filter_map(|d| d.get(b"BaseFont").ok())
            .filter_map(|o| o.as_name().ok())
            .map(|n| String::from_utf8_lossy(n).into_owned())
            .collect();
        assert!(names.contains(&"Helvetica".to_string()));
        assert!(names.contains(&"Helvetica-Bold".to_string()));
    }

    #[test]
    fn test_win_ansi_encoding() {
        assert_eq!(encode_win_ansi("Abc"), b"Abc".to_vec());
        assert_eq!(encode_win_ansi("Fähigkeiten"), b"F\xe4higkeiten".to_vec());
        assert_eq!(encode_win_ansi("• –"), vec![0x95, b' ', 0x96]);
        assert_eq!(encode_win_ansi("€"), vec![0x80]);
        assert_eq!(encode_win_ansi("漢"), b"?".to_vec());
    }
}
