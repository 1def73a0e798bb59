//! Text extraction from supported file formats

use crate::error::{Result, TranscriptRankerError};
use quick_xml::events::Event;
use quick_xml::Reader;
use std::io::Read;
use std::path::Path;
use tokio::fs;

pub trait TextExtractor {
    fn extract(&self, path: &Path) -> impl std::future::Future<Output = Result<String>> + Send;
}

/// Extracts paragraph text from a .docx archive.
///
/// A .docx file is a ZIP container; the document body lives in
/// `word/document.xml`. Text runs are `<w:t>` elements and paragraphs
/// are `<w:p>` elements. Paragraphs are joined with newlines, matching
/// the one-paragraph-per-line text model the extractor expects.
pub struct DocxExtractor;

impl TextExtractor for DocxExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await.map_err(TranscriptRankerError::Io)?;

        let cursor = std::io::Cursor::new(bytes);
        let mut archive = zip::ZipArchive::new(cursor).map_err(|e| {
            TranscriptRankerError::DocxExtraction(format!(
                "Failed to open '{}' as a DOCX archive: {}",
                path.display(),
                e
            ))
        })?;

        let mut xml = String::new();
        archive
            .by_name("word/document.xml")
            .map_err(|e| {
                TranscriptRankerError::DocxExtraction(format!(
                    "No document body in '{}': {}",
                    path.display(),
                    e
                ))
            })?
            .read_to_string(&mut xml)
            .map_err(TranscriptRankerError::Io)?;

        parse_document_xml(&xml)
    }
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let content = fs::read_to_string(path)
            .await
            .map_err(TranscriptRankerError::Io)?;
        Ok(content)
    }
}

fn parse_document_xml(xml: &str) -> Result<String> {
    let mut reader = Reader::from_str(xml);

    let mut paragraphs: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut in_text_run = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) if e.name().as_ref() == b"w:t" => in_text_run = true,
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"w:t" => in_text_run = false,
                b"w:p" => paragraphs.push(std::mem::take(&mut current)),
                _ => {}
            },
            Ok(Event::Text(t)) if in_text_run => {
                let run = t.unescape().map_err(|e| {
                    TranscriptRankerError::DocxExtraction(format!("Malformed text run: {}", e))
                })?;
                current.push_str(&run);
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(TranscriptRankerError::DocxExtraction(format!(
                    "Malformed document XML: {}",
                    e
                )))
            }
            _ => {}
        }
    }

    Ok(paragraphs.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraphs_joined_with_newlines() {
        let xml = r#"<?xml version="1.0"?>
            <w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
              <w:body>
                <w:p><w:r><w:t>Nombre: Ana</w:t></w:r></w:p>
                <w:p><w:r><w:t>Semestre: 6</w:t></w:r></w:p>
              </w:body>
            </w:document>"#;

        let text = parse_document_xml(xml).unwrap();
        assert_eq!(text, "Nombre: Ana\nSemestre: 6");
    }

    #[test]
    fn test_split_text_runs_are_concatenated() {
        let xml = r#"<w:document xmlns:w="w">
            <w:p><w:r><w:t>Nombre: </w:t></w:r><w:r><w:t>Ana</w:t></w:r></w:p>
        </w:document>"#;

        let text = parse_document_xml(xml).unwrap();
        assert_eq!(text, "Nombre: Ana");
    }

    #[test]
    fn test_entities_are_unescaped() {
        let xml = r#"<w:document xmlns:w="w">
            <w:p><w:r><w:t>Dise&#241;o &amp; Arte: 4.2</w:t></w:r></w:p>
        </w:document>"#;

        let text = parse_document_xml(xml).unwrap();
        assert_eq!(text, "Diseño & Arte: 4.2");
    }

    #[test]
    fn test_non_text_markup_is_ignored() {
        let xml = r#"<w:document xmlns:w="w">
            <w:p><w:pPr><w:jc val="left"/></w:pPr><w:r><w:t>Carrera: Ingeniería</w:t></w:r></w:p>
        </w:document>"#;

        let text = parse_document_xml(xml).unwrap();
        assert_eq!(text, "Carrera: Ingeniería");
    }
}
