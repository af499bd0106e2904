//! Feed envelope records: Atom `feed`, `entry` and `dxp:property`.

use std::fmt;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::schema::{
    Binding, FieldBinding, RecordSchema, ValueType, XmlRecord, decode, encode, format_datetime,
    parse_datetime, parse_integer,
};
use crate::{Goal, QName};

/// A name/value pair attached to an entry (e.g., `ga:profileId` = `1174`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    pub name: String,
    pub value: String,
}

impl Property {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// One record within a feed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeedEntry {
    pub id: Option<String>,
    pub title: Option<String>,
    pub updated: Option<DateTime<FixedOffset>>,
    pub goal: Option<Goal>,
    /// All `dxp:property` children, in document order.
    pub properties: Vec<Property>,
}

impl FeedEntry {
    /// The entry's first property, if any.
    pub fn property(&self) -> Option<&Property> {
        self.properties.first()
    }

    /// Looks up a property value by name (e.g., `"ga:profileId"`).
    pub fn property_value(&self, name: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.value.as_str())
    }
}

/// Top-level parse result: an Atom feed of management entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Feed {
    pub id: Option<String>,
    pub title: Option<String>,
    pub updated: Option<DateTime<FixedOffset>>,
    /// `openSearch:totalResults`: matches across all pages.
    pub total_results: Option<i64>,
    /// `openSearch:startIndex`: 1-based index of the first entry.
    pub start_index: Option<i64>,
    /// `openSearch:itemsPerPage`.
    pub items_per_page: Option<i64>,
    pub entries: Vec<FeedEntry>,
}

impl Feed {
    /// Goals carried by the feed's entries, in entry order.
    pub fn goals(&self) -> impl Iterator<Item = &Goal> {
        self.entries.iter().filter_map(|e| e.goal.as_ref())
    }
}

// ── Schemas ──────────────────────────────────────────────────────

static PROPERTY_SCHEMA: RecordSchema<Property> = RecordSchema {
    element: QName::dxp("property"),
    fields: &[
        FieldBinding {
            field: "name",
            binding: Binding::Attribute {
                name: "name",
                value_type: ValueType::Text,
                get: |p| Some(p.name.clone()),
                set: |p, v| {
                    p.name = v.to_string();
                    Ok(())
                },
            },
        },
        FieldBinding {
            field: "value",
            binding: Binding::Attribute {
                name: "value",
                value_type: ValueType::Text,
                get: |p| Some(p.value.clone()),
                set: |p, v| {
                    p.value = v.to_string();
                    Ok(())
                },
            },
        },
    ],
};

static ENTRY_SCHEMA: RecordSchema<FeedEntry> = RecordSchema {
    element: QName::atom("entry"),
    fields: &[
        FieldBinding {
            field: "id",
            binding: Binding::Text {
                element: QName::atom("id"),
                value_type: ValueType::Text,
                get: |e| e.id.clone(),
                set: |e, v| {
                    e.id = Some(v.to_string());
                    Ok(())
                },
            },
        },
        FieldBinding {
            field: "title",
            binding: Binding::Text {
                element: QName::atom("title"),
                value_type: ValueType::Text,
                get: |e| e.title.clone(),
                set: |e, v| {
                    e.title = Some(v.to_string());
                    Ok(())
                },
            },
        },
        FieldBinding {
            field: "updated",
            binding: Binding::Text {
                element: QName::atom("updated"),
                value_type: ValueType::DateTime,
                get: |e| e.updated.as_ref().map(format_datetime),
                set: |e, v| {
                    e.updated = Some(parse_datetime(v)?);
                    Ok(())
                },
            },
        },
        FieldBinding {
            field: "goal",
            binding: Binding::Child {
                element: QName::ga("goal"),
                repeated: false,
                get: |e| e.goal.iter().map(encode).collect(),
                set: |e, node| {
                    e.goal = Some(decode(node)?);
                    Ok(())
                },
            },
        },
        FieldBinding {
            field: "properties",
            binding: Binding::Child {
                element: QName::dxp("property"),
                repeated: true,
                get: |e| e.properties.iter().map(encode).collect(),
                set: |e, node| {
                    e.properties.push(decode(node)?);
                    Ok(())
                },
            },
        },
    ],
};

static FEED_SCHEMA: RecordSchema<Feed> = RecordSchema {
    element: QName::atom("feed"),
    fields: &[
        FieldBinding {
            field: "id",
            binding: Binding::Text {
                element: QName::atom("id"),
                value_type: ValueType::Text,
                get: |f| f.id.clone(),
                set: |f, v| {
                    f.id = Some(v.to_string());
                    Ok(())
                },
            },
        },
        FieldBinding {
            field: "title",
            binding: Binding::Text {
                element: QName::atom("title"),
                value_type: ValueType::Text,
                get: |f| f.title.clone(),
                set: |f, v| {
                    f.title = Some(v.to_string());
                    Ok(())
                },
            },
        },
        FieldBinding {
            field: "updated",
            binding: Binding::Text {
                element: QName::atom("updated"),
                value_type: ValueType::DateTime,
                get: |f| f.updated.as_ref().map(format_datetime),
                set: |f, v| {
                    f.updated = Some(parse_datetime(v)?);
                    Ok(())
                },
            },
        },
        FieldBinding {
            field: "total_results",
            binding: Binding::Text {
                element: QName::open_search("totalResults"),
                value_type: ValueType::Integer,
                get: |f| f.total_results.map(|n| n.to_string()),
                set: |f, v| {
                    f.total_results = Some(parse_integer(v)?);
                    Ok(())
                },
            },
        },
        FieldBinding {
            field: "start_index",
            binding: Binding::Text {
                element: QName::open_search("startIndex"),
                value_type: ValueType::Integer,
                get: |f| f.start_index.map(|n| n.to_string()),
                set: |f, v| {
                    f.start_index = Some(parse_integer(v)?);
                    Ok(())
                },
            },
        },
        FieldBinding {
            field: "items_per_page",
            binding: Binding::Text {
                element: QName::open_search("itemsPerPage"),
                value_type: ValueType::Integer,
                get: |f| f.items_per_page.map(|n| n.to_string()),
                set: |f, v| {
                    f.items_per_page = Some(parse_integer(v)?);
                    Ok(())
                },
            },
        },
        FieldBinding {
            field: "entries",
            binding: Binding::Child {
                element: QName::atom("entry"),
                repeated: true,
                get: |f| f.entries.iter().map(encode).collect(),
                set: |f, node| {
                    f.entries.push(decode(node)?);
                    Ok(())
                },
            },
        },
    ],
};

impl XmlRecord for Property {
    fn schema() -> &'static RecordSchema<Self> {
        &PROPERTY_SCHEMA
    }
}

impl XmlRecord for FeedEntry {
    fn schema() -> &'static RecordSchema<Self> {
        &ENTRY_SCHEMA
    }
}

impl XmlRecord for Feed {
    fn schema() -> &'static RecordSchema<Self> {
        &FEED_SCHEMA
    }
}

// ── Display ──────────────────────────────────────────────────────

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.value)
    }
}

impl fmt::Display for FeedEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.goal, &self.title) {
            (Some(goal), _) => write!(f, "{goal}"),
            (None, Some(title)) => f.write_str(title),
            (None, None) => f.write_str("entry"),
        }
    }
}

impl fmt::Display for Feed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let title = self.title.as_deref().unwrap_or("feed");
        write!(f, "{title} ({} entries)", self.entries.len())
    }
}
