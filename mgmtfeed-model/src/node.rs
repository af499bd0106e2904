use crate::QName;

/// A namespace-resolved XML element.
///
/// Produced by the XML reader and consumed by [`crate::decode`]; produced by
/// [`crate::encode`] and consumed by the XML writer. Only element content
/// relevant to the feed schema is kept: attributes, child elements and the
/// concatenated text content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlNode {
    /// Namespace URI; empty when the element is not in any namespace.
    pub namespace: String,
    pub name: String,
    pub attributes: Vec<XmlAttribute>,
    pub children: Vec<XmlNode>,
    pub text: String,
}

/// An attribute on an [`XmlNode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlAttribute {
    /// `None` for unqualified attributes (the common case in this schema).
    pub namespace: Option<String>,
    pub name: String,
    pub value: String,
}

impl XmlNode {
    /// Creates an empty element with the given qualified name.
    pub fn new(qname: QName) -> Self {
        Self {
            namespace: qname.namespace.to_string(),
            name: qname.local.to_string(),
            ..Default::default()
        }
    }

    /// Creates an element whose only content is `text`.
    pub fn with_text(qname: QName, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::new(qname)
        }
    }

    /// Returns true if this element has the given qualified name.
    pub fn is(&self, qname: QName) -> bool {
        self.namespace == qname.namespace && self.name == qname.local
    }

    /// Looks up an unqualified attribute by name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.namespace.is_none() && a.name == name)
            .map(|a| a.value.as_str())
    }

    /// Sets (or replaces) an unqualified attribute.
    pub fn set_attribute(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self
            .attributes
            .iter_mut()
            .find(|a| a.namespace.is_none() && a.name == name)
        {
            Some(existing) => existing.value = value,
            None => self.attributes.push(XmlAttribute {
                namespace: None,
                name: name.to_string(),
                value,
            }),
        }
    }

    /// Iterates over direct children with the given qualified name, in document order.
    pub fn children_named(&self, qname: QName) -> impl Iterator<Item = &XmlNode> {
        self.children.iter().filter(move |c| c.is(qname))
    }

    /// First direct child with the given qualified name.
    pub fn child(&self, qname: QName) -> Option<&XmlNode> {
        self.children_named(qname).next()
    }

    /// Appends a child element.
    pub fn push_child(&mut self, child: XmlNode) {
        self.children.push(child);
    }
}
