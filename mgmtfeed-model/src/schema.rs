use std::fmt;

use chrono::{DateTime, FixedOffset};

use crate::{QName, SchemaError, SchemaResult, ValueError, XmlNode};

/// A record type with a static XML schema descriptor.
///
/// The descriptor is the single source of truth for both directions:
/// [`decode`] reads it to populate a record, [`encode`] reads it to emit one.
pub trait XmlRecord: Default + Sized + 'static {
    fn schema() -> &'static RecordSchema<Self>;
}

/// Describes how one record type maps onto an XML element.
///
/// Instances are `static` tables built at compile time; nothing here is
/// mutated after startup.
pub struct RecordSchema<T: 'static> {
    /// Qualified name of the element this record is read from and written to.
    pub element: QName,
    pub fields: &'static [FieldBinding<T>],
}

/// One field of a record and where it lives in the XML.
pub struct FieldBinding<T: 'static> {
    /// In-memory field name (e.g., `threshold_value`).
    pub field: &'static str,
    pub binding: Binding<T>,
}

/// Where a field's value is read from and written to.
pub enum Binding<T: 'static> {
    /// An unqualified attribute on the record's element.
    Attribute {
        name: &'static str,
        value_type: ValueType,
        get: fn(&T) -> Option<String>,
        set: fn(&mut T, &str) -> Result<(), ValueError>,
    },
    /// A child element whose text content holds the value (e.g., `atom:id`).
    Text {
        element: QName,
        value_type: ValueType,
        get: fn(&T) -> Option<String>,
        set: fn(&mut T, &str) -> Result<(), ValueError>,
    },
    /// A nested record element. `repeated` children are appended in document
    /// order; for a single child a later occurrence replaces an earlier one.
    Child {
        element: QName,
        repeated: bool,
        get: fn(&T) -> Vec<XmlNode>,
        set: fn(&mut T, &XmlNode) -> SchemaResult<()>,
    },
}

/// Semantic type of a scalar field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    Text,
    Integer,
    Float,
    Bool,
    DateTime,
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueType::Text => "text",
            ValueType::Integer => "integer",
            ValueType::Float => "float",
            ValueType::Bool => "boolean",
            ValueType::DateTime => "date-time",
        };
        f.write_str(name)
    }
}

impl<T: 'static> RecordSchema<T> {
    /// Finds the binding for an in-memory field name.
    pub fn binding_for(&self, field: &str) -> Option<&FieldBinding<T>> {
        self.fields.iter().find(|b| b.field == field)
    }
}

impl<T: 'static> FieldBinding<T> {
    /// The attribute name or local element name the field maps to.
    pub fn xml_name(&self) -> &'static str {
        match &self.binding {
            Binding::Attribute { name, .. } => *name,
            Binding::Text { element, .. } | Binding::Child { element, .. } => element.local,
        }
    }

    /// The scalar type of the field, or `None` for nested records.
    pub fn value_type(&self) -> Option<ValueType> {
        match &self.binding {
            Binding::Attribute { value_type, .. } | Binding::Text { value_type, .. } => {
                Some(*value_type)
            }
            Binding::Child { .. } => None,
        }
    }
}

/// Populates a `T` from an element using `T`'s schema.
///
/// Absent attributes and children leave the field at its `Default` value.
/// Text values reach the setter verbatim; only the numeric, boolean and
/// date-time parsers ignore surrounding whitespace.
/// Attributes and elements the schema does not mention are ignored.
pub fn decode<T: XmlRecord>(node: &XmlNode) -> SchemaResult<T> {
    let schema = T::schema();
    if !node.is(schema.element) {
        return Err(SchemaError::UnexpectedElement {
            expected: schema.element.to_string(),
            found: format!("{{{}}}{}", node.namespace, node.name),
        });
    }

    let mut record = T::default();
    for field in schema.fields {
        match &field.binding {
            Binding::Attribute { name, set, .. } => {
                if let Some(value) = node.attribute(name) {
                    set(&mut record, value).map_err(|e| invalid_value(schema, field, e))?;
                }
            }
            Binding::Text { element, set, .. } => {
                for child in node.children_named(*element) {
                    set(&mut record, &child.text)
                        .map_err(|e| invalid_value(schema, field, e))?;
                }
            }
            Binding::Child { element, set, .. } => {
                for child in node.children_named(*element) {
                    set(&mut record, child)?;
                }
            }
        }
    }
    Ok(record)
}

/// Emits an element for `record` using `T`'s schema.
///
/// Children are written in the order the schema declares them.
pub fn encode<T: XmlRecord>(record: &T) -> XmlNode {
    let schema = T::schema();
    let mut node = XmlNode::new(schema.element);
    for field in schema.fields {
        match &field.binding {
            Binding::Attribute { name, get, .. } => {
                if let Some(value) = get(record) {
                    node.set_attribute(name, value);
                }
            }
            Binding::Text { element, get, .. } => {
                if let Some(value) = get(record) {
                    node.push_child(XmlNode::with_text(*element, value));
                }
            }
            Binding::Child { get, .. } => node.children.extend(get(record)),
        }
    }
    node
}

fn invalid_value<T: 'static>(
    schema: &RecordSchema<T>,
    field: &FieldBinding<T>,
    err: ValueError,
) -> SchemaError {
    SchemaError::InvalidValue {
        element: schema.element.local.to_string(),
        field: field.xml_name().to_string(),
        value: err.value,
        expected: err.expected,
    }
}

// ── Scalar conversions ───────────────────────────────────────────

/// Parses an `xs:boolean` (`true`, `false`, `1`, `0`).
pub fn parse_bool(value: &str) -> Result<bool, ValueError> {
    match value.trim() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(ValueError::new(value, ValueType::Bool)),
    }
}

pub fn format_bool(value: bool) -> String {
    String::from(if value { "true" } else { "false" })
}

pub fn parse_integer(value: &str) -> Result<i64, ValueError> {
    value
        .trim()
        .parse()
        .map_err(|_| ValueError::new(value, ValueType::Integer))
}

pub fn parse_float(value: &str) -> Result<f64, ValueError> {
    value
        .trim()
        .parse()
        .map_err(|_| ValueError::new(value, ValueType::Float))
}

/// Parses an RFC 3339 timestamp such as Atom's `updated`.
pub fn parse_datetime(value: &str) -> Result<DateTime<FixedOffset>, ValueError> {
    DateTime::parse_from_rfc3339(value.trim())
        .map_err(|_| ValueError::new(value, ValueType::DateTime))
}

pub fn format_datetime(value: &DateTime<FixedOffset>) -> String {
    value.to_rfc3339()
}
