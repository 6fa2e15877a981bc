//! `.docx` container writer.
//!
//! A `.docx` file is a ZIP package of XML parts. The writer emits the
//! minimal part set Word requires: content types, package relationships,
//! core properties, the style part carrying the base font, and the document
//! body itself. Part builders are pure functions over the document model;
//! only the container assembly touches the file system.

use std::fs::File;
use std::io::{Seek, Write};
use std::path::Path;

use chrono::{SecondsFormat, Utc};
use quick_xml::Writer as XmlWriter;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use crate::error::Result;
use crate::types::{Alignment, Block, Document, FontConfig, Paragraph, Run};

/// WordprocessingML main namespace.
const W_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
/// OPC package relationships namespace.
const REL_NS: &str = "http://schemas.openxmlformats.org/package/2006/relationships";
/// OPC content-types namespace.
const CONTENT_TYPES_NS: &str = "http://schemas.openxmlformats.org/package/2006/content-types";

const REL_TYPE_DOCUMENT: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";
const REL_TYPE_STYLES: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles";
const REL_TYPE_CORE_PROPS: &str =
    "http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties";

/// Streaming container writer in the shape of a single finalizing call.
pub struct DocxWriter<W: Write + Seek> {
    zip: ZipWriter<W>,
}

impl<W: Write + Seek> DocxWriter<W> {
    /// Create a writer over any seekable sink.
    pub fn new(writer: W) -> Self {
        Self {
            zip: ZipWriter::new(writer),
        }
    }

    /// Write the full package and finalize the container.
    pub fn write_document(mut self, document: &Document) -> Result<()> {
        self.add_part("[Content_Types].xml", &build_content_types()?)?;
        self.add_part("_rels/.rels", &build_package_rels()?)?;
        self.add_part("docProps/core.xml", &build_core_props()?)?;
        self.add_part("word/_rels/document.xml.rels", &build_document_rels()?)?;
        self.add_part("word/styles.xml", &build_styles(&document.font)?)?;
        self.add_part("word/document.xml", &build_document_xml(document)?)?;
        self.zip.finish()?;
        Ok(())
    }

    fn add_part(&mut self, name: &str, bytes: &[u8]) -> Result<()> {
        let options =
            SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
        self.zip.start_file(name, options)?;
        self.zip.write_all(bytes)?;
        Ok(())
    }
}

impl DocxWriter<File> {
    /// Create a writer targeting `path`.
    pub fn create(path: &Path) -> Result<Self> {
        Ok(Self::new(File::create(path)?))
    }
}

/// Write `document` to a `.docx` file at `path`.
pub fn write_docx(path: &Path, document: &Document) -> Result<()> {
    DocxWriter::create(path)?.write_document(document)
}

fn write_decl(writer: &mut XmlWriter<Vec<u8>>) -> Result<()> {
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))?;
    Ok(())
}

fn build_content_types() -> Result<Vec<u8>> {
    let mut writer = XmlWriter::new(Vec::new());
    write_decl(&mut writer)?;
    let mut types = BytesStart::new("Types");
    types.push_attribute(("xmlns", CONTENT_TYPES_NS));
    writer.write_event(Event::Start(types))?;

    for (extension, content_type) in [
        ("rels", "application/vnd.openxmlformats-package.relationships+xml"),
        ("xml", "application/xml"),
    ] {
        let mut default = BytesStart::new("Default");
        default.push_attribute(("Extension", extension));
        default.push_attribute(("ContentType", content_type));
        writer.write_event(Event::Empty(default))?;
    }

    for (part, content_type) in [
        (
            "/word/document.xml",
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml",
        ),
        (
            "/word/styles.xml",
            "application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml",
        ),
        (
            "/docProps/core.xml",
            "application/vnd.openxmlformats-package.core-properties+xml",
        ),
    ] {
        let mut over = BytesStart::new("Override");
        over.push_attribute(("PartName", part));
        over.push_attribute(("ContentType", content_type));
        writer.write_event(Event::Empty(over))?;
    }

    writer.write_event(Event::End(BytesEnd::new("Types")))?;
    Ok(writer.into_inner())
}

fn build_relationships(entries: &[(&str, &str, &str)]) -> Result<Vec<u8>> {
    let mut writer = XmlWriter::new(Vec::new());
    write_decl(&mut writer)?;
    let mut root = BytesStart::new("Relationships");
    root.push_attribute(("xmlns", REL_NS));
    writer.write_event(Event::Start(root))?;
    for (id, rel_type, target) in entries {
        let mut rel = BytesStart::new("Relationship");
        rel.push_attribute(("Id", *id));
        rel.push_attribute(("Type", *rel_type));
        rel.push_attribute(("Target", *target));
        writer.write_event(Event::Empty(rel))?;
    }
    writer.write_event(Event::End(BytesEnd::new("Relationships")))?;
    Ok(writer.into_inner())
}

fn build_package_rels() -> Result<Vec<u8>> {
    build_relationships(&[
        ("rId1", REL_TYPE_DOCUMENT, "word/document.xml"),
        ("rId2", REL_TYPE_CORE_PROPS, "docProps/core.xml"),
    ])
}

fn build_document_rels() -> Result<Vec<u8>> {
    build_relationships(&[("rId1", REL_TYPE_STYLES, "styles.xml")])
}

/// Core properties carry the creation stamp, the only part whose bytes vary
/// between otherwise identical renders.
fn build_core_props() -> Result<Vec<u8>> {
    let stamp = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
    let mut writer = XmlWriter::new(Vec::new());
    write_decl(&mut writer)?;
    let mut root = BytesStart::new("cp:coreProperties");
    root.push_attribute((
        "xmlns:cp",
        "http://schemas.openxmlformats.org/package/2006/metadata/core-properties",
    ));
    root.push_attribute(("xmlns:dcterms", "http://purl.org/dc/terms/"));
    root.push_attribute(("xmlns:xsi", "http://www.w3.org/2001/XMLSchema-instance"));
    writer.write_event(Event::Start(root))?;
    for name in ["dcterms:created", "dcterms:modified"] {
        let mut element = BytesStart::new(name);
        element.push_attribute(("xsi:type", "dcterms:W3CDTF"));
        writer.write_event(Event::Start(element))?;
        writer.write_event(Event::Text(BytesText::new(&stamp)))?;
        writer.write_event(Event::End(BytesEnd::new(name)))?;
    }
    writer.write_event(Event::End(BytesEnd::new("cp:coreProperties")))?;
    Ok(writer.into_inner())
}

/// Style part: a single default paragraph style carrying the base font so
/// individual runs only override what differs.
fn build_styles(font: &FontConfig) -> Result<Vec<u8>> {
    let half_points = u16::from(font.size_pt) * 2;
    let size = half_points.to_string();

    let mut writer = XmlWriter::new(Vec::new());
    write_decl(&mut writer)?;
    let mut root = BytesStart::new("w:styles");
    root.push_attribute(("xmlns:w", W_NS));
    writer.write_event(Event::Start(root))?;

    writer.write_event(Event::Start(BytesStart::new("w:docDefaults")))?;
    writer.write_event(Event::Start(BytesStart::new("w:rPrDefault")))?;
    writer.write_event(Event::Start(BytesStart::new("w:rPr")))?;
    let mut fonts = BytesStart::new("w:rFonts");
    fonts.push_attribute(("w:ascii", font.family.as_str()));
    fonts.push_attribute(("w:hAnsi", font.family.as_str()));
    fonts.push_attribute(("w:eastAsia", font.east_asia.as_str()));
    writer.write_event(Event::Empty(fonts))?;
    for name in ["w:sz", "w:szCs"] {
        let mut element = BytesStart::new(name);
        element.push_attribute(("w:val", size.as_str()));
        writer.write_event(Event::Empty(element))?;
    }
    writer.write_event(Event::End(BytesEnd::new("w:rPr")))?;
    writer.write_event(Event::End(BytesEnd::new("w:rPrDefault")))?;
    writer.write_event(Event::End(BytesEnd::new("w:docDefaults")))?;

    let mut normal = BytesStart::new("w:style");
    normal.push_attribute(("w:type", "paragraph"));
    normal.push_attribute(("w:default", "1"));
    normal.push_attribute(("w:styleId", "Normal"));
    writer.write_event(Event::Start(normal))?;
    let mut name = BytesStart::new("w:name");
    name.push_attribute(("w:val", "Normal"));
    writer.write_event(Event::Empty(name))?;
    writer.write_event(Event::End(BytesEnd::new("w:style")))?;

    writer.write_event(Event::End(BytesEnd::new("w:styles")))?;
    Ok(writer.into_inner())
}

fn build_document_xml(document: &Document) -> Result<Vec<u8>> {
    let mut writer = XmlWriter::new(Vec::new());
    write_decl(&mut writer)?;
    let mut root = BytesStart::new("w:document");
    root.push_attribute(("xmlns:w", W_NS));
    writer.write_event(Event::Start(root))?;
    writer.write_event(Event::Start(BytesStart::new("w:body")))?;

    for block in &document.blocks {
        match block {
            Block::Paragraph(paragraph) => write_paragraph(&mut writer, paragraph)?,
            Block::PageBreak => write_page_break(&mut writer)?,
        }
    }

    write_section_properties(&mut writer, document)?;

    writer.write_event(Event::End(BytesEnd::new("w:body")))?;
    writer.write_event(Event::End(BytesEnd::new("w:document")))?;
    Ok(writer.into_inner())
}

fn write_paragraph(writer: &mut XmlWriter<Vec<u8>>, paragraph: &Paragraph) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new("w:p")))?;
    if let Some(alignment) = paragraph.alignment {
        writer.write_event(Event::Start(BytesStart::new("w:pPr")))?;
        let mut jc = BytesStart::new("w:jc");
        jc.push_attribute((
            "w:val",
            match alignment {
                Alignment::Center => "center",
            },
        ));
        writer.write_event(Event::Empty(jc))?;
        writer.write_event(Event::End(BytesEnd::new("w:pPr")))?;
    }
    for run in &paragraph.runs {
        write_run(writer, run)?;
    }
    writer.write_event(Event::End(BytesEnd::new("w:p")))?;
    Ok(())
}

fn write_run(writer: &mut XmlWriter<Vec<u8>>, run: &Run) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new("w:r")))?;
    if run.bold || run.size_pt.is_some() {
        writer.write_event(Event::Start(BytesStart::new("w:rPr")))?;
        if run.bold {
            writer.write_event(Event::Empty(BytesStart::new("w:b")))?;
        }
        if let Some(points) = run.size_pt {
            let size = (u16::from(points) * 2).to_string();
            for name in ["w:sz", "w:szCs"] {
                let mut element = BytesStart::new(name);
                element.push_attribute(("w:val", size.as_str()));
                writer.write_event(Event::Empty(element))?;
            }
        }
        writer.write_event(Event::End(BytesEnd::new("w:rPr")))?;
    }
    // xml:space keeps the deliberate leading/trailing spaces in list and
    // section runs from being collapsed by consumers.
    let mut text = BytesStart::new("w:t");
    text.push_attribute(("xml:space", "preserve"));
    writer.write_event(Event::Start(text))?;
    writer.write_event(Event::Text(BytesText::new(&run.text)))?;
    writer.write_event(Event::End(BytesEnd::new("w:t")))?;
    writer.write_event(Event::End(BytesEnd::new("w:r")))?;
    Ok(())
}

/// A page break is a paragraph holding a single break run.
fn write_page_break(writer: &mut XmlWriter<Vec<u8>>) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new("w:p")))?;
    writer.write_event(Event::Start(BytesStart::new("w:r")))?;
    let mut br = BytesStart::new("w:br");
    br.push_attribute(("w:type", "page"));
    writer.write_event(Event::Empty(br))?;
    writer.write_event(Event::End(BytesEnd::new("w:r")))?;
    writer.write_event(Event::End(BytesEnd::new("w:p")))?;
    Ok(())
}

fn write_section_properties(writer: &mut XmlWriter<Vec<u8>>, document: &Document) -> Result<()> {
    let page = &document.page;
    writer.write_event(Event::Start(BytesStart::new("w:sectPr")))?;

    let mut size = BytesStart::new("w:pgSz");
    size.push_attribute(("w:w", page.page_width.to_string().as_str()));
    size.push_attribute(("w:h", page.page_height.to_string().as_str()));
    writer.write_event(Event::Empty(size))?;

    let mut margins = BytesStart::new("w:pgMar");
    margins.push_attribute(("w:top", page.margin_top.to_string().as_str()));
    margins.push_attribute(("w:right", page.margin_right.to_string().as_str()));
    margins.push_attribute(("w:bottom", page.margin_bottom.to_string().as_str()));
    margins.push_attribute(("w:left", page.margin_left.to_string().as_str()));
    margins.push_attribute(("w:header", "720"));
    margins.push_attribute(("w:footer", "720"));
    margins.push_attribute(("w:gutter", "0"));
    writer.write_event(Event::Empty(margins))?;

    writer.write_event(Event::End(BytesEnd::new("w:sectPr")))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn as_text(bytes: &[u8]) -> String {
        String::from_utf8(bytes.to_vec()).expect("utf-8 part")
    }

    #[test]
    fn content_types_declare_every_part() {
        let xml = as_text(&build_content_types().expect("build"));
        assert!(xml.contains(r#"PartName="/word/document.xml""#));
        assert!(xml.contains(r#"PartName="/word/styles.xml""#));
        assert!(xml.contains(r#"PartName="/docProps/core.xml""#));
        assert!(xml.contains(r#"Extension="rels""#));
    }

    #[test]
    fn styles_carry_base_font_and_size() {
        let xml = as_text(&build_styles(&FontConfig::default()).expect("build"));
        assert!(xml.contains(r#"w:ascii="MS Mincho""#));
        assert!(xml.contains(r#"w:eastAsia="MS Mincho""#));
        assert!(xml.contains(r#"<w:sz w:val="22"/>"#));
        assert!(xml.contains(r#"w:styleId="Normal""#));
    }

    #[test]
    fn run_text_is_escaped() {
        let mut document = Document::new();
        document.add_paragraph().add_run("a<b&c");
        let xml = as_text(&build_document_xml(&document).expect("build"));
        assert!(xml.contains("a&lt;b&amp;c"));
        assert!(!xml.contains("a<b"));
    }

    #[test]
    fn bold_run_emits_run_properties() {
        let mut document = Document::new();
        document.add_paragraph().add_bold_run("症例番号: 1");
        let xml = as_text(&build_document_xml(&document).expect("build"));
        assert!(xml.contains("<w:rPr><w:b/></w:rPr>"));
    }

    #[test]
    fn page_break_is_a_break_run() {
        let mut document = Document::new();
        document.add_page_break();
        let xml = as_text(&build_document_xml(&document).expect("build"));
        assert!(xml.contains(r#"<w:br w:type="page"/>"#));
    }

    #[test]
    fn centered_paragraph_sets_justification() {
        let mut document = Document::new();
        document.add_paragraph().align_center().add_run("=".repeat(50));
        let xml = as_text(&build_document_xml(&document).expect("build"));
        assert!(xml.contains(r#"<w:jc w:val="center"/>"#));
    }

    #[test]
    fn section_properties_close_the_body() {
        let document = Document::new();
        let xml = as_text(&build_document_xml(&document).expect("build"));
        assert!(xml.contains(r#"<w:pgSz w:w="11906" w:h="16838"/>"#));
        assert!(xml.contains(r#"w:top="1440""#));
        assert!(xml.ends_with("</w:body></w:document>"));
    }

    #[test]
    fn identical_documents_serialize_identically() {
        let build = || {
            let mut document = Document::new();
            document.add_paragraph().add_bold_run("症例番号: 7").add_run(" ○");
            document.add_page_break();
            document
        };
        let first = build_document_xml(&build()).expect("first");
        let second = build_document_xml(&build()).expect("second");
        assert_eq!(first, second);
    }
}
