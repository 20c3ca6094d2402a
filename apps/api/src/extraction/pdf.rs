//! PDF linearisation: every page's text, concatenated in page order.

use lopdf::Document;
use tracing::{debug, warn};

use super::ExtractError;

/// Opens the PDF and returns the text of each page in page-number order.
/// A page whose text cannot be extracted (scanned image, unsupported font)
/// yields an empty string.
pub fn extract_page_texts(bytes: &[u8]) -> Result<Vec<String>, ExtractError> {
    let doc = Document::load_mem(bytes).map_err(|e| ExtractError::DocumentParse(e.to_string()))?;

    // get_pages() is keyed by page number, so iteration is already in document order
    let pages = doc.get_pages();
    debug!("PDF opened with {} pages", pages.len());

    let texts = pages
        .keys()
        .map(|&page_number| match doc.extract_text(&[page_number]) {
            Ok(text) => text,
            Err(e) => {
                warn!("No text extracted from page {page_number}: {e}");
                String::new()
            }
        })
        .collect();

    Ok(texts)
}

/// Full-document text for a PDF upload: the page texts joined with no
/// separator. Each page keeps the line break lopdf emits at the end of every
/// text object, so a page reading "Hello" contributes "Hello\n".
pub fn extract_pdf_text(bytes: &[u8]) -> Result<String, ExtractError> {
    Ok(extract_page_texts(bytes)?.concat())
}

/// Builds an in-memory PDF with one page per entry; an empty entry is a page
/// with no text operators.
#[cfg(test)]
pub(crate) fn test_pdf(pages: &[&str]) -> Vec<u8> {
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Object, Stream};

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
    for text in pages {
        let operations = if text.is_empty() {
            vec![]
        } else {
            vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 24.into()]),
                Operation::new("Td", vec![72.into(), 700.into()]),
                Operation::new("Tj", vec![Object::string_literal(*text)]),
                Operation::new("ET", vec![]),
            ]
        };
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
        "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut out = Vec::new();
    doc.save_to(&mut out).unwrap();
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_page_text() {
        let bytes = test_pdf(&["Hello"]);
        assert_eq!(extract_page_texts(&bytes).unwrap(), vec!["Hello\n".to_string()]);
        assert_eq!(extract_pdf_text(&bytes).unwrap(), "Hello\n");
    }

    #[test]
    fn test_pages_concatenate_in_order() {
        let bytes = test_pdf(&["Alpha", "Bravo", "Charlie"]);
        let pages = extract_page_texts(&bytes).unwrap();
        assert_eq!(pages.len(), 3);

        let text = extract_pdf_text(&bytes).unwrap();
        assert_eq!(text, pages.concat());
        assert_eq!(text, "Alpha\nBravo\nCharlie\n");

        let alpha = text.find("Alpha").unwrap();
        let bravo = text.find("Bravo").unwrap();
        let charlie = text.find("Charlie").unwrap();
        assert!(alpha < bravo && bravo < charlie);
    }

    #[test]
    fn test_blank_page_contributes_nothing() {
        let bytes = test_pdf(&["Alpha", "", "Charlie"]);
        let pages = extract_page_texts(&bytes).unwrap();
        assert_eq!(pages.len(), 3);
        assert!(pages[1].trim().is_empty());

        let text = extract_pdf_text(&bytes).unwrap();
        assert_eq!(text, pages.concat());
        assert!(text.starts_with("Alpha\n"));
        assert!(text.ends_with("Charlie\n"));
    }

    #[test]
    fn test_document_without_text_is_not_an_error() {
        let bytes = test_pdf(&["", ""]);
        let pages = extract_page_texts(&bytes).unwrap();
        assert_eq!(pages.len(), 2);
        // no second pass rewrites the result: it is still the page concatenation
        let text = extract_pdf_text(&bytes).unwrap();
        assert_eq!(text, pages.concat());
        assert!(text.trim().is_empty());
    }

    #[test]
    fn test_non_pdf_bytes_fail_to_open() {
        let err = extract_pdf_text(b"Skilled Python developer").unwrap_err();
        assert!(matches!(err, ExtractError::DocumentParse(_)));
    }
}
