//! XML text to [`XmlNode`] tree.

use std::fmt::Display;

use mgmtfeed_model::{XmlAttribute, XmlNode};
use quick_xml::events::{BytesStart, Event};
use quick_xml::name::{Namespace, ResolveResult};
use quick_xml::reader::NsReader;

use crate::error::{XmlError, XmlResult};

/// Reads a complete document into a namespace-resolved element tree.
///
/// Exactly one root element is required. Comments, processing instructions
/// and the XML declaration are skipped. Text and CDATA content is kept
/// verbatim, except that whitespace-only text in an element with child
/// elements (indentation) is dropped.
pub fn read_document(xml: &str) -> XmlResult<XmlNode> {
    let mut reader = NsReader::from_str(xml);

    let mut stack: Vec<XmlNode> = Vec::new();
    let mut root: Option<XmlNode> = None;

    loop {
        let (ns, event) = reader.read_resolved_event()?;
        match event {
            Event::Start(start) => {
                let namespace = namespace_uri(ns)?;
                let node = element(&reader, namespace, &start)?;
                if stack.is_empty() && root.is_some() {
                    return Err(XmlError::ContentOutsideRoot(format!("<{}>", node.name)));
                }
                stack.push(node);
            }
            Event::Empty(start) => {
                let namespace = namespace_uri(ns)?;
                let node = element(&reader, namespace, &start)?;
                attach(&mut stack, &mut root, node)?;
            }
            Event::End(_) => {
                let mut node = stack
                    .pop()
                    .ok_or_else(|| XmlError::Malformed("unmatched end tag".to_string()))?;
                if !node.children.is_empty() && node.text.trim().is_empty() {
                    node.text.clear();
                }
                attach(&mut stack, &mut root, node)?;
            }
            Event::Text(text) => {
                let text = text.unescape().map_err(malformed)?;
                append_text(&mut stack, &text)?;
            }
            Event::CData(data) => {
                let text = String::from_utf8_lossy(&data);
                append_text(&mut stack, &text)?;
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(XmlError::UnexpectedEof(open.name.clone()));
    }
    root.ok_or(XmlError::NoRootElement)
}

fn element(
    reader: &NsReader<&[u8]>,
    namespace: String,
    start: &BytesStart<'_>,
) -> XmlResult<XmlNode> {
    let name = String::from_utf8_lossy(start.local_name().as_ref()).into_owned();

    let mut attributes = Vec::new();
    for attr in start.attributes() {
        let attr = attr.map_err(malformed)?;
        if attr.key.as_namespace_binding().is_some() {
            continue;
        }
        let (attr_ns, local) = reader.resolve_attribute(attr.key);
        let namespace = match attr_ns {
            ResolveResult::Unbound => None,
            other => Some(namespace_uri(other)?),
        };
        let value = attr.unescape_value().map_err(malformed)?.into_owned();
        attributes.push(XmlAttribute {
            namespace,
            name: String::from_utf8_lossy(local.as_ref()).into_owned(),
            value,
        });
    }

    Ok(XmlNode {
        namespace,
        name,
        attributes,
        children: Vec::new(),
        text: String::new(),
    })
}

fn namespace_uri(ns: ResolveResult<'_>) -> XmlResult<String> {
    match ns {
        ResolveResult::Bound(Namespace(uri)) => Ok(String::from_utf8_lossy(uri).into_owned()),
        ResolveResult::Unbound => Ok(String::new()),
        ResolveResult::Unknown(prefix) => Err(XmlError::UnboundPrefix(
            String::from_utf8_lossy(&prefix).into_owned(),
        )),
    }
}

fn attach(stack: &mut [XmlNode], root: &mut Option<XmlNode>, node: XmlNode) -> XmlResult<()> {
    match stack.last_mut() {
        Some(parent) => parent.children.push(node),
        None if root.is_none() => *root = Some(node),
        None => return Err(XmlError::ContentOutsideRoot(format!("<{}>", node.name))),
    }
    Ok(())
}

fn append_text(stack: &mut [XmlNode], text: &str) -> XmlResult<()> {
    match stack.last_mut() {
        Some(parent) => parent.text.push_str(text),
        None if text.trim().is_empty() => {}
        None => return Err(XmlError::ContentOutsideRoot(truncate(text))),
    }
    Ok(())
}

fn truncate(text: &str) -> String {
    const MAX: usize = 40;
    match text.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}

fn malformed(err: impl Display) -> XmlError {
    XmlError::Malformed(err.to_string())
}
