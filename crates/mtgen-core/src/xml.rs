//! Minimal XML document tree and its serializer.
//!
//! Generators build an [`XmlDocument`] and call [`XmlDocument::to_xml_string`];
//! `quick-xml` does the escaping and the 4-space indentation.

use crate::error::{GenError, Result};
use quick_xml::escape::partial_escape;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

/// Salesforce Metadata API namespace.
pub const METADATA_NS: &str = "http://soap.sforce.com/2006/04/metadata";
pub const XSI_NS: &str = "http://www.w3.org/2001/XMLSchema-instance";
pub const XSD_NS: &str = "http://www.w3.org/2001/XMLSchema";

const INDENT: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    Empty,
    Text(String),
    Children(Vec<Element>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub content: Content,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            content: Content::Empty,
        }
    }

    /// `<name>value</name>`
    pub fn leaf(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(name).text(value)
    }

    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((key.into(), value.into()));
        self
    }

    pub fn text(mut self, value: impl Into<String>) -> Self {
        self.content = Content::Text(value.into());
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        if let Content::Children(children) = &mut self.content {
            children.push(child);
        } else {
            self.content = Content::Children(vec![child]);
        }
        self
    }

    pub fn children(self, children: impl IntoIterator<Item = Element>) -> Self {
        children.into_iter().fold(self, Element::child)
    }

    /// First direct child with the given name.
    pub fn find(&self, name: &str) -> Option<&Element> {
        self.child_elements().find(|c| c.name == name)
    }

    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        let children: &[Element] = match &self.content {
            Content::Children(c) => c,
            _ => &[],
        };
        children.iter()
    }

    pub fn text_value(&self) -> Option<&str> {
        match &self.content {
            Content::Text(t) => Some(t),
            _ => None,
        }
    }
}

/// Declaration plus root element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlDocument {
    pub standalone: bool,
    pub root: Element,
}

impl XmlDocument {
    pub fn new(root: Element) -> Self {
        Self {
            standalone: false,
            root,
        }
    }

    pub fn standalone(mut self) -> Self {
        self.standalone = true;
        self
    }

    /// Serialize with a UTF-8 declaration and a trailing newline.
    pub fn to_xml_string(&self) -> Result<String> {
        let mut writer = Writer::new_with_indent(Vec::new(), b' ', INDENT);
        let standalone = self.standalone.then_some("yes");
        emit(
            &mut writer,
            Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), standalone)),
        )?;
        write_element(&mut writer, &self.root)?;

        let mut out =
            String::from_utf8(writer.into_inner()).map_err(|e| GenError::Xml(e.to_string()))?;
        out.push('\n');
        Ok(out)
    }
}

fn write_element<W: std::io::Write>(writer: &mut Writer<W>, el: &Element) -> Result<()> {
    let mut start = BytesStart::new(el.name.as_str());
    for (key, value) in &el.attributes {
        start.push_attribute((key.as_str(), value.as_str()));
    }

    match &el.content {
        Content::Empty => emit(writer, Event::Empty(start)),
        Content::Text(text) => {
            emit(writer, Event::Start(start))?;
            // Quotes stay literal in element text.
            emit(writer, Event::Text(BytesText::from_escaped(partial_escape(text))))?;
            emit(writer, Event::End(BytesEnd::new(el.name.as_str())))
        }
        Content::Children(children) => {
            emit(writer, Event::Start(start))?;
            for child in children {
                write_element(writer, child)?;
            }
            emit(writer, Event::End(BytesEnd::new(el.name.as_str())))
        }
    }
}

fn emit<W: std::io::Write>(writer: &mut Writer<W>, event: Event<'_>) -> Result<()> {
    writer
        .write_event(event)
        .map_err(|e| GenError::Xml(e.to_string()))
}
