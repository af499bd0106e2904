//! [`XmlNode`] tree to XML text.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt::Display;

use mgmtfeed_model::{ATOM_NS, DXP_NS, GA_NS, OPENSEARCH_NS, XmlNode};
use quick_xml::Writer;
use quick_xml::escape::escape;
use quick_xml::events::attributes::Attribute;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::name::QName;

use crate::error::{XmlError, XmlResult};

/// Prefixes used for the feed's well-known namespaces. Atom is the default
/// namespace for elements.
const WELL_KNOWN: &[(&str, &str)] = &[
    (ATOM_NS, "atom"),
    (GA_NS, "ga"),
    (DXP_NS, "dxp"),
    (OPENSEARCH_NS, "openSearch"),
];

/// Serializes an element tree as a standalone UTF-8 document.
///
/// Every namespace used anywhere in the tree is declared once, on the root.
pub fn write_document(root: &XmlNode) -> XmlResult<String> {
    let prefixes = Prefixes::collect(root);

    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
        .map_err(write_error)?;
    write_node(&mut writer, root, &prefixes, true)?;

    String::from_utf8(writer.into_inner()).map_err(write_error)
}

fn write_node(
    writer: &mut Writer<Vec<u8>>,
    node: &XmlNode,
    prefixes: &Prefixes,
    is_root: bool,
) -> XmlResult<()> {
    let name = prefixes.element_name(node);
    let mut start = BytesStart::new(name.as_str());

    if is_root {
        for (key, uri) in prefixes.declarations() {
            start.push_attribute((key.as_str(), uri));
        }
    }

    for attr in &node.attributes {
        let key = match &attr.namespace {
            Some(ns) => format!("{}:{}", prefixes.attribute_prefix(ns), attr.name),
            None => attr.name.clone(),
        };
        start.push_attribute(Attribute {
            key: QName(key.as_bytes()),
            value: Cow::Owned(escape_attribute(&attr.value).into_bytes()),
        });
    }

    if node.children.is_empty() && node.text.is_empty() {
        writer.write_event(Event::Empty(start)).map_err(write_error)?;
        return Ok(());
    }

    writer.write_event(Event::Start(start)).map_err(write_error)?;
    if !node.text.is_empty() {
        writer
            .write_event(Event::Text(BytesText::new(&node.text)))
            .map_err(write_error)?;
    }
    for child in &node.children {
        write_node(writer, child, prefixes, false)?;
    }
    writer
        .write_event(Event::End(BytesEnd::new(name.as_str())))
        .map_err(write_error)?;
    Ok(())
}

/// Namespace URI to prefix assignments for one document.
struct Prefixes {
    by_uri: BTreeMap<String, String>,
    /// Atom elements are written without a prefix. Off when some element has
    /// no namespace, since that element must not inherit a default.
    has_default: bool,
}

impl Prefixes {
    fn collect(root: &XmlNode) -> Self {
        let mut element_uris = Vec::new();
        let mut attribute_uris = Vec::new();
        gather(root, &mut element_uris, &mut attribute_uris);

        let has_default = element_uris.iter().any(|u| u == ATOM_NS)
            && !element_uris.iter().any(|u| u.is_empty());
        // Attributes never take the default namespace, so Atom still needs
        // a prefix when an attribute uses it.
        let atom_prefixed = !has_default || attribute_uris.iter().any(|u| u == ATOM_NS);

        let mut by_uri = BTreeMap::new();
        let mut generated = 0;
        for uri in element_uris.into_iter().chain(attribute_uris) {
            if uri.is_empty() || by_uri.contains_key(&uri) {
                continue;
            }
            if uri == ATOM_NS && !atom_prefixed {
                continue;
            }
            let prefix = match WELL_KNOWN.iter().find(|(ns, _)| *ns == uri) {
                Some((_, prefix)) => (*prefix).to_string(),
                None => {
                    generated += 1;
                    format!("ns{generated}")
                }
            };
            by_uri.insert(uri, prefix);
        }
        Self {
            by_uri,
            has_default,
        }
    }

    fn element_name(&self, node: &XmlNode) -> String {
        if node.namespace.is_empty() || (self.has_default && node.namespace == ATOM_NS) {
            return node.name.clone();
        }
        match self.by_uri.get(&node.namespace) {
            Some(prefix) => format!("{prefix}:{}", node.name),
            None => node.name.clone(),
        }
    }

    fn attribute_prefix(&self, uri: &str) -> &str {
        self.by_uri.get(uri).map_or("", String::as_str)
    }

    fn declarations(&self) -> Vec<(String, &str)> {
        let mut decls = Vec::new();
        if self.has_default {
            decls.push(("xmlns".to_string(), ATOM_NS));
        }
        for (uri, prefix) in &self.by_uri {
            decls.push((format!("xmlns:{prefix}"), uri.as_str()));
        }
        decls
    }
}

fn gather(node: &XmlNode, elements: &mut Vec<String>, attributes: &mut Vec<String>) {
    elements.push(node.namespace.clone());
    for attr in &node.attributes {
        if let Some(ns) = &attr.namespace {
            attributes.push(ns.clone());
        }
    }
    for child in &node.children {
        gather(child, elements, attributes);
    }
}

/// Escapes an attribute value so that a conforming parser reads back the
/// same string. Literal tabs and line breaks would be normalized to spaces.
fn escape_attribute(value: &str) -> String {
    let escaped = escape(value);
    if !escaped.contains(['\t', '\n', '\r']) {
        return escaped.into_owned();
    }
    let mut out = String::with_capacity(escaped.len() + 8);
    for c in escaped.chars() {
        match c {
            '\t' => out.push_str("&#9;"),
            '\n' => out.push_str("&#10;"),
            '\r' => out.push_str("&#13;"),
            c => out.push(c),
        }
    }
    out
}

fn write_error(err: impl Display) -> XmlError {
    XmlError::Write(err.to_string())
}
