//! PPTX file parser implementation.
//!
//! A .pptx file is a ZIP archive of XML parts. The parser reads the slide
//! order from the presentation relationships, then builds a shape tree per
//! slide: text shapes, pictures (with their media bytes), and groups.

use migrate_core::{Error, PictureShape, Result, Shape};
use quick_xml::events::Event;
use quick_xml::Reader;
use std::collections::HashMap;
use std::io::{Read, Seek};
use zip::ZipArchive;

/// Parser for PPTX (Office Open XML) files.
pub struct PptxParser;

impl PptxParser {
    /// Create a new PPTX parser.
    pub fn new() -> Self {
        Self
    }

    /// Parse a PPTX file from a reader into per-slide shape trees, in
    /// presentation order.
    pub fn parse<R: Read + Seek>(&self, reader: R) -> Result<Vec<Vec<Shape>>> {
        let mut archive = ZipArchive::new(reader)
            .map_err(|e| Error::ZipError(format!("Failed to open ZIP: {}", e)))?;

        // Get the slide order from presentation.xml.rels
        let slide_order = self.get_slide_order(&mut archive)?;

        let mut slides = Vec::with_capacity(slide_order.len());
        for slide_path in &slide_order {
            slides.push(self.parse_slide(&mut archive, slide_path)?);
        }

        Ok(slides)
    }

    /// Get the ordered list of slide paths from the presentation relationships.
    fn get_slide_order<R: Read + Seek>(&self, archive: &mut ZipArchive<R>) -> Result<Vec<String>> {
        let rels_content =
            self.read_text_from_archive(archive, "ppt/_rels/presentation.xml.rels")?;
        let mut slides: Vec<(String, Option<usize>)> = Vec::new();

        let mut reader = Reader::from_str(&rels_content);
        reader.trim_text(true);

        loop {
            match reader.read_event() {
                Ok(Event::Empty(ref e)) | Ok(Event::Start(ref e))
                    if e.name().as_ref() == b"Relationship" =>
                {
                    let mut rel_type = String::new();
                    let mut target = String::new();
                    let mut id = String::new();

                    for attr in e.attributes().flatten() {
                        match attr.key.as_ref() {
                            b"Type" => {
                                rel_type = String::from_utf8_lossy(&attr.value).to_string();
                            }
                            b"Target" => {
                                target = String::from_utf8_lossy(&attr.value).to_string();
                            }
                            b"Id" => {
                                id = String::from_utf8_lossy(&attr.value).to_string();
                            }
                            _ => {}
                        }
                    }

                    // Slide relationships only, not layouts or masters
                    if rel_type.contains("/slide")
                        && !rel_type.contains("slideLayout")
                        && !rel_type.contains("slideMaster")
                    {
                        // Extract slide number from rId or target for ordering
                        let order_num =
                            extract_part_number(&id).or_else(|| extract_part_number(&target));
                        let full_path = if let Some(absolute) = target.strip_prefix('/') {
                            absolute.to_string()
                        } else {
                            format!("ppt/{}", target)
                        };
                        slides.push((full_path, order_num));
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(Error::XmlError(format!(
                        "Error parsing presentation relationships: {}",
                        e
                    )));
                }
                _ => {}
            }
        }

        // Sort slides by their number
        slides.sort_by(|a, b| match (a.1, b.1) {
            (Some(na), Some(nb)) => na.cmp(&nb),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => a.0.cmp(&b.0),
        });

        Ok(slides.into_iter().map(|(path, _)| path).collect())
    }

    /// Parse a single slide part into its top-level shape list.
    fn parse_slide<R: Read + Seek>(
        &self,
        archive: &mut ZipArchive<R>,
        slide_path: &str,
    ) -> Result<Vec<Shape>> {
        let content = self.read_text_from_archive(archive, slide_path)?;
        let rels = self.slide_relationships(archive, slide_path)?;
        self.build_shape_tree(&content, &rels, slide_path, archive)
    }

    /// Relationship id to resolved archive path, from the slide's own
    /// relationships part. Slides without one get an empty map.
    fn slide_relationships<R: Read + Seek>(
        &self,
        archive: &mut ZipArchive<R>,
        slide_path: &str,
    ) -> Result<HashMap<String, String>> {
        let (dir, file) = match slide_path.rsplit_once('/') {
            Some((dir, file)) => (dir, file),
            None => ("", slide_path),
        };
        let rels_path = format!("{}/_rels/{}.rels", dir, file);

        let mut rels = HashMap::new();
        let content = match self.read_text_from_archive(archive, &rels_path) {
            Ok(content) => content,
            Err(_) => return Ok(rels),
        };

        let mut reader = Reader::from_str(&content);
        reader.trim_text(true);

        loop {
            match reader.read_event() {
                Ok(Event::Empty(ref e)) | Ok(Event::Start(ref e))
                    if e.name().as_ref() == b"Relationship" =>
                {
                    let mut id = String::new();
                    let mut target = String::new();

                    for attr in e.attributes().flatten() {
                        match attr.key.as_ref() {
                            b"Id" => {
                                id = String::from_utf8_lossy(&attr.value).to_string();
                            }
                            b"Target" => {
                                target = String::from_utf8_lossy(&attr.value).to_string();
                            }
                            _ => {}
                        }
                    }

                    if !id.is_empty() && !target.is_empty() {
                        rels.insert(id, resolve_target(dir, &target));
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(Error::XmlError(format!(
                        "Error parsing '{}': {}",
                        rels_path, e
                    )));
                }
                _ => {}
            }
        }

        Ok(rels)
    }

    /// Build the slide's shape tree from its XML.
    ///
    /// Groups nest through a stack; a picture's media bytes are read from
    /// the archive when its shape closes. Tables, connectors and other
    /// unsupported shapes become placeholder entries so positions of the
    /// shapes around them do not shift.
    fn build_shape_tree<R: Read + Seek>(
        &self,
        xml_content: &str,
        rels: &HashMap<String, String>,
        slide_path: &str,
        archive: &mut ZipArchive<R>,
    ) -> Result<Vec<Shape>> {
        let mut top_level: Vec<Shape> = Vec::new();
        let mut group_stack: Vec<PendingGroup> = Vec::new();
        let mut text_shape: Option<PendingText> = None;
        let mut picture: Option<PendingPicture> = None;
        let mut in_text_body = false;
        let mut in_paragraph = false;

        let mut reader = Reader::from_str(xml_content);
        reader.trim_text(true);

        loop {
            match reader.read_event() {
                Ok(Event::Start(ref e)) | Ok(Event::Empty(ref e)) => {
                    let name = e.name();
                    let local_name = local_name(name.as_ref());

                    match local_name {
                        b"sp" => {
                            text_shape = Some(PendingText::default());
                        }
                        b"pic" => {
                            picture = Some(PendingPicture::default());
                        }
                        b"grpSp" => {
                            group_stack.push(PendingGroup::default());
                        }
                        b"cNvPr" => {
                            let shape_name = attribute_value(e, b"name");
                            if let Some(ref mut pic) = picture {
                                if pic.name.is_none() {
                                    pic.name = shape_name;
                                }
                            } else if let Some(ref mut text) = text_shape {
                                if text.name.is_none() {
                                    text.name = shape_name;
                                }
                            } else if let Some(group) = group_stack.last_mut() {
                                if group.name.is_none() {
                                    group.name = shape_name;
                                }
                            }
                        }
                        b"blip" => {
                            if let Some(ref mut pic) = picture {
                                if pic.embed.is_none() {
                                    pic.embed = local_attribute_value(e, b"embed");
                                }
                            }
                        }
                        b"txBody" if text_shape.is_some() => {
                            in_text_body = true;
                        }
                        b"p" if in_text_body => {
                            in_paragraph = true;
                            if let Some(ref mut text) = text_shape {
                                if text.paragraphs > 0 {
                                    text.text.push('\n');
                                }
                                text.paragraphs += 1;
                            }
                        }
                        _ => {}
                    }
                }
                Ok(Event::Text(ref e)) => {
                    if in_paragraph {
                        if let Some(ref mut text) = text_shape {
                            let fragment = e.unescape().unwrap_or_default();
                            text.text.push_str(&fragment);
                        }
                    }
                }
                Ok(Event::End(ref e)) => {
                    let name = e.name();
                    let local_name = local_name(name.as_ref());

                    match local_name {
                        b"sp" => {
                            if let Some(pending) = text_shape.take() {
                                attach(
                                    &mut top_level,
                                    &mut group_stack,
                                    Shape::Text {
                                        name: pending.name,
                                        text: pending.text,
                                    },
                                );
                            }
                            in_text_body = false;
                            in_paragraph = false;
                        }
                        b"pic" => {
                            if let Some(pending) = picture.take() {
                                let shape =
                                    self.finish_picture(pending, rels, slide_path, archive);
                                attach(&mut top_level, &mut group_stack, shape);
                            }
                        }
                        b"grpSp" => {
                            if let Some(pending) = group_stack.pop() {
                                attach(
                                    &mut top_level,
                                    &mut group_stack,
                                    Shape::Group {
                                        name: pending.name,
                                        children: pending.children,
                                    },
                                );
                            }
                        }
                        b"graphicFrame" | b"cxnSp" => {
                            attach(&mut top_level, &mut group_stack, Shape::Other);
                        }
                        b"txBody" => {
                            in_text_body = false;
                        }
                        b"p" => {
                            in_paragraph = false;
                        }
                        _ => {}
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => {
                    log::warn!("XML parsing error in {} (stopping): {}", slide_path, e);
                    break;
                }
                _ => {}
            }
        }

        Ok(top_level)
    }

    /// Resolve a pending picture to its media bytes.
    ///
    /// Pictures with a missing relationship or unreadable media part become
    /// placeholders so the rest of the slide still extracts.
    fn finish_picture<R: Read + Seek>(
        &self,
        pending: PendingPicture,
        rels: &HashMap<String, String>,
        slide_path: &str,
        archive: &mut ZipArchive<R>,
    ) -> Shape {
        let media_path = match pending.embed.as_ref().and_then(|rid| rels.get(rid)) {
            Some(path) => path,
            None => {
                log::warn!(
                    "Skipping picture without an image relationship in {}",
                    slide_path
                );
                return Shape::Other;
            }
        };

        match self.read_bytes_from_archive(archive, media_path) {
            Ok(data) => Shape::Picture(PictureShape {
                name: pending.name,
                data,
                ext: media_extension(media_path),
            }),
            Err(e) => {
                log::warn!("Skipping picture in {}: {}", slide_path, e);
                Shape::Other
            }
        }
    }

    /// Read a UTF-8 text part from the ZIP archive.
    fn read_text_from_archive<R: Read + Seek>(
        &self,
        archive: &mut ZipArchive<R>,
        path: &str,
    ) -> Result<String> {
        let mut file = archive
            .by_name(path)
            .map_err(|e| Error::ZipError(format!("File not found in archive '{}': {}", path, e)))?;

        let mut content = String::new();
        file.read_to_string(&mut content)
            .map_err(|e| Error::ZipError(format!("Failed to read '{}': {}", path, e)))?;

        Ok(content)
    }

    /// Read a binary part from the ZIP archive.
    fn read_bytes_from_archive<R: Read + Seek>(
        &self,
        archive: &mut ZipArchive<R>,
        path: &str,
    ) -> Result<Vec<u8>> {
        let mut file = archive
            .by_name(path)
            .map_err(|e| Error::ZipError(format!("File not found in archive '{}': {}", path, e)))?;

        let mut data = Vec::new();
        file.read_to_end(&mut data)
            .map_err(|e| Error::ZipError(format!("Failed to read '{}': {}", path, e)))?;

        Ok(data)
    }
}

impl Default for PptxParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Text shape being assembled while its element is open.
#[derive(Debug, Default)]
struct PendingText {
    name: Option<String>,
    text: String,
    paragraphs: usize,
}

/// Picture shape being assembled while its element is open.
#[derive(Debug, Default)]
struct PendingPicture {
    name: Option<String>,
    embed: Option<String>,
}

/// Group shape being assembled while its element is open.
#[derive(Debug, Default)]
struct PendingGroup {
    name: Option<String>,
    children: Vec<Shape>,
}

/// Attach a finished shape to the innermost open group, or to the top
/// level when no group is open.
fn attach(top_level: &mut Vec<Shape>, group_stack: &mut Vec<PendingGroup>, shape: Shape) {
    if let Some(group) = group_stack.last_mut() {
        group.children.push(shape);
    } else {
        top_level.push(shape);
    }
}

/// Value of an attribute matched by its full key.
fn attribute_value(e: &quick_xml::events::BytesStart<'_>, key: &[u8]) -> Option<String> {
    e.attributes()
        .flatten()
        .find(|attr| attr.key.as_ref() == key)
        .map(|attr| String::from_utf8_lossy(&attr.value).to_string())
}

/// Value of an attribute matched by its local name, ignoring the
/// namespace prefix (`r:embed` matches `embed`).
fn local_attribute_value(e: &quick_xml::events::BytesStart<'_>, key: &[u8]) -> Option<String> {
    e.attributes()
        .flatten()
        .find(|attr| local_name(attr.key.as_ref()) == key)
        .map(|attr| String::from_utf8_lossy(&attr.value).to_string())
}

/// Resolve a relationship target against the directory of its source part.
fn resolve_target(base_dir: &str, target: &str) -> String {
    if let Some(absolute) = target.strip_prefix('/') {
        return absolute.to_string();
    }

    let mut parts: Vec<&str> = base_dir.split('/').filter(|p| !p.is_empty()).collect();
    for segment in target.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                parts.pop();
            }
            other => parts.push(other),
        }
    }
    parts.join("/")
}

/// Lowercase extension of a media part path; `jpeg` is normalized to
/// `jpg`, extensionless parts fall back to `bin`.
fn media_extension(media_path: &str) -> String {
    let ext = match media_path.rsplit_once('.') {
        Some((_, ext)) if !ext.is_empty() && !ext.contains('/') => ext.to_ascii_lowercase(),
        _ => return "bin".to_string(),
    };

    if ext == "jpeg" {
        "jpg".to_string()
    } else {
        ext
    }
}

/// Extract the local name from a potentially namespaced XML element name.
fn local_name(name: &[u8]) -> &[u8] {
    if let Some(pos) = name.iter().position(|&b| b == b':') {
        &name[pos + 1..]
    } else {
        name
    }
}

/// Extract a part number from a string like "rId2" or "slide3.xml".
fn extract_part_number(s: &str) -> Option<usize> {
    // Remove common extensions first
    let s = s.trim_end_matches(".xml").trim_end_matches(".rels");

    // Try to find digits at the end
    let digits: String = s.chars().rev().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    let digits: String = digits.chars().rev().collect();
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use zip::write::FileOptions;
    use zip::ZipWriter;

    const PRESENTATION_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideMaster" Target="slideMasters/slideMaster1.xml"/>
  <Relationship Id="rId3" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide" Target="slides/slide2.xml"/>
  <Relationship Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide" Target="slides/slide1.xml"/>
</Relationships>"#;

    const SLIDE_ONE: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:sld xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">
  <p:cSld><p:spTree>
    <p:nvGrpSpPr><p:cNvPr id="1" name=""/></p:nvGrpSpPr>
    <p:sp>
      <p:nvSpPr><p:cNvPr id="2" name="Title 1"/></p:nvSpPr>
      <p:txBody><a:p><a:r><a:t>Welcome to Law Park</a:t></a:r></a:p><a:p><a:r><a:t>Second line</a:t></a:r></a:p></p:txBody>
    </p:sp>
    <p:pic>
      <p:nvPicPr><p:cNvPr id="3" name="Picture 2"/></p:nvPicPr>
      <p:blipFill><a:blip r:embed="rId2"/></p:blipFill>
    </p:pic>
  </p:spTree></p:cSld>
</p:sld>"#;

    const SLIDE_ONE_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideLayout" Target="../slideLayouts/slideLayout1.xml"/>
  <Relationship Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/image" Target="../media/image1.png"/>
</Relationships>"#;

    const SLIDE_TWO: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:sld xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">
  <p:cSld><p:spTree>
    <p:nvGrpSpPr><p:cNvPr id="1" name=""/></p:nvGrpSpPr>
    <p:graphicFrame>
      <p:nvGraphicFramePr><p:cNvPr id="7" name="Table 6"/></p:nvGraphicFramePr>
      <a:graphic><a:graphicData><a:tbl><a:tr><a:tc><a:txBody><a:p><a:r><a:t>cell text</a:t></a:r></a:p></a:txBody></a:tc></a:tr></a:tbl></a:graphicData></a:graphic>
    </p:graphicFrame>
    <p:grpSp>
      <p:nvGrpSpPr><p:cNvPr id="4" name="Group 3"/></p:nvGrpSpPr>
      <p:sp>
        <p:nvSpPr><p:cNvPr id="5" name="TextBox 4"/></p:nvSpPr>
        <p:txBody><a:p><a:r><a:t>Inside group</a:t></a:r></a:p></p:txBody>
      </p:sp>
      <p:pic>
        <p:nvPicPr><p:cNvPr id="6" name="Photo 5"/></p:nvPicPr>
        <p:blipFill><a:blip r:embed="rId2"/></p:blipFill>
      </p:pic>
    </p:grpSp>
  </p:spTree></p:cSld>
</p:sld>"#;

    const SLIDE_TWO_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/image" Target="../media/image2.jpeg"/>
</Relationships>"#;

    fn build_archive(parts: &[(&str, &[u8])]) -> Cursor<Vec<u8>> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        for (name, data) in parts {
            writer.start_file(*name, FileOptions::default()).unwrap();
            writer.write_all(data).unwrap();
        }
        writer.finish().unwrap()
    }

    fn sample_pptx() -> Cursor<Vec<u8>> {
        build_archive(&[
            ("ppt/_rels/presentation.xml.rels", PRESENTATION_RELS.as_bytes()),
            ("ppt/slides/slide1.xml", SLIDE_ONE.as_bytes()),
            ("ppt/slides/_rels/slide1.xml.rels", SLIDE_ONE_RELS.as_bytes()),
            ("ppt/slides/slide2.xml", SLIDE_TWO.as_bytes()),
            ("ppt/slides/_rels/slide2.xml.rels", SLIDE_TWO_RELS.as_bytes()),
            ("ppt/media/image1.png", b"png-bytes"),
            ("ppt/media/image2.jpeg", b"jpeg-bytes"),
        ])
    }

    #[test]
    fn test_parse_orders_slides_and_builds_shapes() {
        let parser = PptxParser::new();
        let slides = parser.parse(sample_pptx()).unwrap();
        assert_eq!(slides.len(), 2);

        let first = &slides[0];
        assert_eq!(first.len(), 2);
        assert_eq!(first[0].text(), Some("Welcome to Law Park\nSecond line"));
        assert_eq!(first[0].name(), Some("Title 1"));
        assert_eq!(first[1].image_bytes(), Some(&b"png-bytes"[..]));
    }

    #[test]
    fn test_parse_group_nests_children() {
        let parser = PptxParser::new();
        let slides = parser.parse(sample_pptx()).unwrap();

        let second = &slides[1];
        // Table placeholder first, then the group
        assert_eq!(second.len(), 2);
        assert!(matches!(second[0], Shape::Other));

        let group = &second[1];
        assert!(group.is_group());
        assert_eq!(group.name(), Some("Group 3"));
        assert_eq!(group.children().len(), 2);
        assert_eq!(group.children()[0].text(), Some("Inside group"));

        let nested = &group.children()[1];
        assert!(nested.is_picture());
        assert_eq!(nested.image_bytes(), Some(&b"jpeg-bytes"[..]));
        match nested {
            Shape::Picture(picture) => assert_eq!(picture.ext, "jpg"),
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_table_text_is_not_extracted() {
        let parser = PptxParser::new();
        let slides = parser.parse(sample_pptx()).unwrap();

        let all_text: Vec<&str> = slides[1].iter().filter_map(|s| s.text()).collect();
        assert!(!all_text.iter().any(|t| t.contains("cell text")));
    }

    #[test]
    fn test_picture_with_missing_media_becomes_placeholder() {
        let slide = r#"<p:sld xmlns:p="p" xmlns:a="a" xmlns:r="r"><p:cSld><p:spTree>
            <p:pic><p:nvPicPr><p:cNvPr id="2" name="Broken"/></p:nvPicPr>
            <p:blipFill><a:blip r:embed="rId9"/></p:blipFill></p:pic>
            <p:sp><p:nvSpPr><p:cNvPr id="3" name="After"/></p:nvSpPr>
            <p:txBody><a:p><a:r><a:t>after</a:t></a:r></a:p></p:txBody></p:sp>
        </p:spTree></p:cSld></p:sld>"#;
        let rels = r#"<Relationships><Relationship Id="rId1" Type="t/slide" Target="slides/slide1.xml"/></Relationships>"#;

        let archive = build_archive(&[
            ("ppt/_rels/presentation.xml.rels", rels.as_bytes()),
            ("ppt/slides/slide1.xml", slide.as_bytes()),
        ]);

        let parser = PptxParser::new();
        let slides = parser.parse(archive).unwrap();
        assert_eq!(slides.len(), 1);
        assert!(matches!(slides[0][0], Shape::Other));
        assert_eq!(slides[0][1].text(), Some("after"));
    }

    #[test]
    fn test_resolve_target() {
        assert_eq!(
            resolve_target("ppt/slides", "../media/image1.png"),
            "ppt/media/image1.png"
        );
        assert_eq!(
            resolve_target("ppt/slides", "/ppt/media/image2.png"),
            "ppt/media/image2.png"
        );
        assert_eq!(resolve_target("", "media/image3.png"), "media/image3.png");
    }

    #[test]
    fn test_media_extension() {
        assert_eq!(media_extension("ppt/media/image1.png"), "png");
        assert_eq!(media_extension("ppt/media/image2.JPEG"), "jpg");
        assert_eq!(media_extension("ppt/media/image3.Gif"), "gif");
        assert_eq!(media_extension("ppt/media/raw"), "bin");
        assert_eq!(media_extension("ppt/media.v2/raw"), "bin");
    }

    #[test]
    fn test_empty_paragraph_keeps_blank_line() {
        let slide = r#"<p:sld xmlns:p="p" xmlns:a="a"><p:cSld><p:spTree>
            <p:sp><p:nvSpPr><p:cNvPr id="2" name="Body"/></p:nvSpPr>
            <p:txBody><a:p><a:r><a:t>first</a:t></a:r></a:p><a:p/><a:p><a:r><a:t>third</a:t></a:r></a:p></p:txBody></p:sp>
        </p:spTree></p:cSld></p:sld>"#;
        let rels = r#"<Relationships><Relationship Id="rId1" Type="t/slide" Target="slides/slide1.xml"/></Relationships>"#;

        let archive = build_archive(&[
            ("ppt/_rels/presentation.xml.rels", rels.as_bytes()),
            ("ppt/slides/slide1.xml", slide.as_bytes()),
        ]);

        let parser = PptxParser::new();
        let slides = parser.parse(archive).unwrap();
        assert_eq!(slides[0][0].text(), Some("first\n\nthird"));
    }

    #[test]
    fn test_extract_part_number() {
        assert_eq!(extract_part_number("rId1"), Some(1));
        assert_eq!(extract_part_number("rId12"), Some(12));
        assert_eq!(extract_part_number("slide1.xml"), Some(1));
        assert_eq!(extract_part_number("slide123.xml"), Some(123));
        assert_eq!(extract_part_number("nodigits"), None);
    }

    #[test]
    fn test_local_name() {
        assert_eq!(local_name(b"p:sp"), b"sp");
        assert_eq!(local_name(b"a:t"), b"t");
        assert_eq!(local_name(b"sp"), b"sp");
    }
}
