//! Minimal owned XML tree for registry documents.
//!
//! Registry files are small, so the whole document is read into an
//! [`XmlElement`] tree with `quick-xml` and queried by element name.

use std::path::Path;

use ctnlp_parse::OutcomeBlock;
use quick_xml::Reader;
use quick_xml::escape::resolve_predefined_entity;
use quick_xml::events::{BytesStart, Event};

use crate::error::{IngestError, Result};

/// An element with its attributes, direct text and child elements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlElement {
    name: String,
    attributes: Vec<(String, String)>,
    text: String,
    children: Vec<XmlElement>,
}

impl XmlElement {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Direct text content with entity references resolved. Whitespace is kept.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn children(&self) -> &[XmlElement] {
        &self.children
    }

    pub fn first_child(&self) -> Option<&XmlElement> {
        self.children.first()
    }

    /// First direct child named `name`.
    pub fn child(&self, name: &str) -> Option<&XmlElement> {
        self.children.iter().find(|child| child.name == name)
    }

    /// All direct children named `name`, in document order.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a XmlElement> {
        self.children.iter().filter(move |child| child.name == name)
    }

    /// Follows a `/`-separated path of child names, taking the first match at each step.
    pub fn find(&self, path: &str) -> Option<&XmlElement> {
        path.split('/')
            .try_fold(self, |element, name| element.child(name))
    }

    /// Text of the element at `path`; `None` if it is missing or has no text.
    pub fn find_text(&self, path: &str) -> Option<&str> {
        self.find(path)
            .map(XmlElement::text)
            .filter(|text| !text.is_empty())
    }
}

impl OutcomeBlock for XmlElement {
    fn measure(&self) -> Option<&str> {
        self.find_text("measure")
    }
}

/// Parses a complete document and returns its root element.
pub fn parse_document(xml: &str) -> Result<XmlElement> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(false);

    let mut stack: Vec<XmlElement> = Vec::new();
    let mut root: Option<XmlElement> = None;

    loop {
        let event = reader.read_event().map_err(|e| IngestError::MalformedXml {
            position: reader.error_position() as u64,
            message: e.to_string(),
        })?;
        let malformed = |message: String| IngestError::MalformedXml {
            position: reader.buffer_position() as u64,
            message,
        };

        match event {
            Event::Start(start) => stack.push(open_element(&start)),
            Event::Empty(start) => attach(&mut stack, &mut root, open_element(&start)),
            Event::End(_) => {
                let element = stack
                    .pop()
                    .ok_or_else(|| malformed("unexpected closing tag".to_string()))?;
                attach(&mut stack, &mut root, element);
            }
            Event::Text(text) => {
                let decoded = text.decode().map_err(|e| malformed(e.to_string()))?;
                push_text(&mut stack, &decoded);
            }
            Event::CData(data) => {
                let decoded = String::from_utf8_lossy(&data);
                push_text(&mut stack, &decoded);
            }
            Event::GeneralRef(reference) => {
                if let Some(ch) = reference
                    .resolve_char_ref()
                    .map_err(|e| malformed(e.to_string()))?
                {
                    push_text(&mut stack, ch.encode_utf8(&mut [0; 4]));
                } else {
                    let name = reference.decode().map_err(|e| malformed(e.to_string()))?;
                    match resolve_predefined_entity(&name) {
                        Some(resolved) => push_text(&mut stack, resolved),
                        None => push_text(&mut stack, &format!("&{name};")),
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(IngestError::MalformedXml {
            position: reader.buffer_position() as u64,
            message: format!("unclosed element <{}>", open.name),
        });
    }
    root.ok_or(IngestError::MissingRoot)
}

/// Reads and parses the document at `path`.
pub fn read_document(path: &Path) -> Result<XmlElement> {
    let content = std::fs::read_to_string(path).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_document(&content).map_err(|e| e.in_file(path))
}

fn open_element(start: &BytesStart<'_>) -> XmlElement {
    let attributes = start
        .attributes()
        .flatten()
        .map(|attr| {
            (
                String::from_utf8_lossy(attr.key.as_ref()).to_string(),
                String::from_utf8_lossy(&attr.value).to_string(),
            )
        })
        .collect();

    XmlElement {
        name: String::from_utf8_lossy(start.name().as_ref()).to_string(),
        attributes,
        text: String::new(),
        children: Vec::new(),
    }
}

fn attach(stack: &mut [XmlElement], root: &mut Option<XmlElement>, element: XmlElement) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None => {
            if root.is_none() {
                *root = Some(element);
            }
        }
    }
}

fn push_text(stack: &mut [XmlElement], text: &str) {
    // Text outside the root element is ignored.
    if let Some(current) = stack.last_mut() {
        current.text.push_str(text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STUDY: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<clinical_study rank="1">
  <!-- comment -->
  <id_info>
    <org_study_id>ABC-1</org_study_id>
    <nct_id>NCT00000001</nct_id>
  </id_info>
  <condition>Asthma</condition>
  <condition>COPD</condition>
  <official_title/>
  <brief_summary>
    <textblock>Line one&#xD;
line two &lt;= 10 mg &amp; more</textblock>
  </brief_summary>
  <detailed_description><textblock><![CDATA[raw <text>]]></textblock></detailed_description>
</clinical_study>
"#;

    #[test]
    fn builds_tree_with_attributes() {
        let root = parse_document(STUDY).expect("parse");
        assert_eq!(root.name(), "clinical_study");
        assert_eq!(root.attribute("rank"), Some("1"));
        assert_eq!(root.find_text("id_info/nct_id"), Some("NCT00000001"));
        assert_eq!(root.find_text("id_info/missing"), None);
    }

    #[test]
    fn repeated_children_keep_document_order() {
        let root = parse_document(STUDY).expect("parse");
        let conditions: Vec<&str> = root.children_named("condition").map(XmlElement::text).collect();
        assert_eq!(conditions, vec!["Asthma", "COPD"]);
    }

    #[test]
    fn empty_element_has_no_text() {
        let root = parse_document(STUDY).expect("parse");
        assert!(root.child("official_title").is_some());
        assert_eq!(root.find_text("official_title"), None);
    }

    #[test]
    fn resolves_entities_and_cdata() {
        let root = parse_document(STUDY).expect("parse");
        assert_eq!(
            root.find_text("brief_summary/textblock"),
            Some("Line one\r\nline two <= 10 mg & more")
        );
        assert_eq!(
            root.find_text("detailed_description/textblock"),
            Some("raw <text>")
        );
    }

    #[test]
    fn rejects_unclosed_and_empty_documents() {
        assert!(matches!(
            parse_document("<a><b></b>"),
            Err(IngestError::MalformedXml { .. })
        ));
        assert!(matches!(
            parse_document("<?xml version=\"1.0\"?>"),
            Err(IngestError::MissingRoot)
        ));
        assert!(matches!(
            parse_document("<a></b>"),
            Err(IngestError::MalformedXml { .. })
        ));
    }
}
