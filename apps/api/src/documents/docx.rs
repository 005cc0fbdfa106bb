//! DOCX text extraction: reads `word/document.xml` from the zip container and
//! joins its text runs, one line per paragraph. In-paragraph tabs become `\t`
//! and line breaks become `\n`.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;

use super::ExtractionError;

const DOCUMENT_PART: &str = "word/document.xml";
/// Upper bound on the decompressed document part.
const MAX_DOCUMENT_XML_BYTES: u64 = 32 * 1024 * 1024;

fn run_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"<w:t(?:\s[^>]*)?>([^<]*)</w:t>|</w:p>|<w:tab/>|<w:(?:br|cr)(?:\s[^>]*)?/>")
            .expect("static pattern is valid")
    })
}

pub fn extract_text(path: &Path) -> Result<String, ExtractionError> {
    extract_text_bounded(path, MAX_DOCUMENT_XML_BYTES)
}

fn extract_text_bounded(path: &Path, limit: u64) -> Result<String, ExtractionError> {
    let file = File::open(path)?;
    let mut archive = zip::ZipArchive::new(file).map_err(|e| ExtractionError::Docx(e.to_string()))?;
    let part = archive
        .by_name(DOCUMENT_PART)
        .map_err(|e| ExtractionError::Docx(format!("{DOCUMENT_PART}: {e}")))?;
    if part.size() > limit {
        return Err(too_large(limit));
    }

    // The declared size can lie; cap the actual inflated bytes too.
    let mut xml = String::new();
    part.take(limit + 1).read_to_string(&mut xml)?;
    if xml.len() as u64 > limit {
        return Err(too_large(limit));
    }
    Ok(text_from_document_xml(&xml))
}

fn too_large(limit: u64) -> ExtractionError {
    ExtractionError::Docx(format!("{DOCUMENT_PART} exceeds {limit} bytes"))
}

fn text_from_document_xml(xml: &str) -> String {
    let mut text = String::with_capacity(xml.len() / 4);
    for caps in run_pattern().captures_iter(xml) {
        match caps.get(1) {
            Some(run) => text.push_str(&unescape_xml(run.as_str())),
            None if caps[0].starts_with("<w:tab") => text.push('\t'),
            None => text.push('\n'),
        }
    }
    text
}

fn unescape_xml(raw: &str) -> String {
    raw.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}
