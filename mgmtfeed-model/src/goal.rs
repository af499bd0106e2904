//! Goal configuration records: `ga:goal` and its children.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::schema::{
    Binding, FieldBinding, RecordSchema, ValueType, XmlRecord, decode, encode, format_bool,
    parse_bool, parse_float, parse_integer,
};
use crate::QName;

// ── Enum-like attribute values ───────────────────────────────────

/// Comparison operator of an engagement goal.
///
/// Values outside the known set are kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Comparison {
    GreaterThan,
    LessThan,
    Equal,
    Other(String),
}

impl Comparison {
    pub fn parse(value: &str) -> Self {
        match value {
            ">" => Self::GreaterThan,
            "<" => Self::LessThan,
            "=" => Self::Equal,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::GreaterThan => ">",
            Self::LessThan => "<",
            Self::Equal => "=",
            Self::Other(s) => s,
        }
    }
}

/// Session metric an engagement goal is measured on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EngagementType {
    TimeOnSite,
    PagesVisited,
    Other(String),
}

impl EngagementType {
    pub fn parse(value: &str) -> Self {
        match value {
            "timeOnSite" => Self::TimeOnSite,
            "pagesVisited" => Self::PagesVisited,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::TimeOnSite => "timeOnSite",
            Self::PagesVisited => "pagesVisited",
            Self::Other(s) => s,
        }
    }
}

/// How a destination goal's expression is matched against the URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MatchType {
    Head,
    Regex,
    Exact,
    Other(String),
}

impl MatchType {
    pub fn parse(value: &str) -> Self {
        match value {
            "head" => Self::Head,
            "regex" => Self::Regex,
            "exact" => Self::Exact,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Head => "head",
            Self::Regex => "regex",
            Self::Exact => "exact",
            Self::Other(s) => s,
        }
    }
}

impl From<String> for Comparison {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<Comparison> for String {
    fn from(value: Comparison) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for EngagementType {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<EngagementType> for String {
    fn from(value: EngagementType) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for EngagementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for MatchType {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<MatchType> for String {
    fn from(value: MatchType) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for MatchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Records ──────────────────────────────────────────────────────

/// An engagement goal: a session metric crossing a threshold.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Engagement {
    pub comparison: Option<Comparison>,
    pub threshold_value: i64,
    pub engagement_type: Option<EngagementType>,
}

/// One funnel step of a destination goal.
///
/// Steps keep document order; nothing sorts them by `number`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub name: String,
    pub number: i64,
    pub path: String,
}

/// A destination goal: reaching a URL that matches `expression`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Destination {
    pub case_sensitive: bool,
    pub expression: String,
    pub match_type: Option<MatchType>,
    pub step1_required: bool,
    pub steps: Vec<Step>,
}

/// A tracked conversion target.
///
/// Upstream sets at most one of `destination` and `engagement`. A goal with
/// neither is a valid value (goal kinds this crate does not model yet), so
/// callers must check both options before use. See [`Goal::kind`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub name: String,
    pub number: i64,
    pub value: f64,
    pub active: bool,
    pub destination: Option<Destination>,
    pub engagement: Option<Engagement>,
}

/// Which kind of goal a [`Goal`] record describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GoalKind {
    Destination,
    Engagement,
    /// Neither child is present.
    Unspecified,
    /// Both children are present, which well-formed upstream data never has.
    Ambiguous,
}

impl Goal {
    pub fn kind(&self) -> GoalKind {
        match (&self.destination, &self.engagement) {
            (Some(_), None) => GoalKind::Destination,
            (None, Some(_)) => GoalKind::Engagement,
            (None, None) => GoalKind::Unspecified,
            (Some(_), Some(_)) => GoalKind::Ambiguous,
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

// ── Schemas ──────────────────────────────────────────────────────

static ENGAGEMENT_SCHEMA: RecordSchema<Engagement> = RecordSchema {
    element: QName::ga("engagement"),
    fields: &[
        FieldBinding {
            field: "comparison",
            binding: Binding::Attribute {
                name: "comparison",
                value_type: ValueType::Text,
                get: |e| e.comparison.as_ref().map(|c| c.as_str().to_string()),
                set: |e, v| {
                    e.comparison = Some(Comparison::parse(v));
                    Ok(())
                },
            },
        },
        FieldBinding {
            field: "threshold_value",
            binding: Binding::Attribute {
                name: "thresholdValue",
                value_type: ValueType::Integer,
                get: |e| Some(e.threshold_value.to_string()),
                set: |e, v| {
                    e.threshold_value = parse_integer(v)?;
                    Ok(())
                },
            },
        },
        FieldBinding {
            field: "engagement_type",
            binding: Binding::Attribute {
                name: "type",
                value_type: ValueType::Text,
                get: |e| e.engagement_type.as_ref().map(|t| t.as_str().to_string()),
                set: |e, v| {
                    e.engagement_type = Some(EngagementType::parse(v));
                    Ok(())
                },
            },
        },
    ],
};

static STEP_SCHEMA: RecordSchema<Step> = RecordSchema {
    element: QName::ga("step"),
    fields: &[
        FieldBinding {
            field: "name",
            binding: Binding::Attribute {
                name: "name",
                value_type: ValueType::Text,
                get: |s| non_empty(&s.name),
                set: |s, v| {
                    s.name = v.to_string();
                    Ok(())
                },
            },
        },
        FieldBinding {
            field: "number",
            binding: Binding::Attribute {
                name: "number",
                value_type: ValueType::Integer,
                get: |s| Some(s.number.to_string()),
                set: |s, v| {
                    s.number = parse_integer(v)?;
                    Ok(())
                },
            },
        },
        FieldBinding {
            field: "path",
            binding: Binding::Attribute {
                name: "path",
                value_type: ValueType::Text,
                get: |s| non_empty(&s.path),
                set: |s, v| {
                    s.path = v.to_string();
                    Ok(())
                },
            },
        },
    ],
};

static DESTINATION_SCHEMA: RecordSchema<Destination> = RecordSchema {
    element: QName::ga("destination"),
    fields: &[
        FieldBinding {
            field: "case_sensitive",
            binding: Binding::Attribute {
                name: "caseSensitive",
                value_type: ValueType::Bool,
                get: |d| Some(format_bool(d.case_sensitive)),
                set: |d, v| {
                    d.case_sensitive = parse_bool(v)?;
                    Ok(())
                },
            },
        },
        FieldBinding {
            field: "expression",
            binding: Binding::Attribute {
                name: "expression",
                value_type: ValueType::Text,
                get: |d| non_empty(&d.expression),
                set: |d, v| {
                    d.expression = v.to_string();
                    Ok(())
                },
            },
        },
        FieldBinding {
            field: "match_type",
            binding: Binding::Attribute {
                name: "matchType",
                value_type: ValueType::Text,
                get: |d| d.match_type.as_ref().map(|m| m.as_str().to_string()),
                set: |d, v| {
                    d.match_type = Some(MatchType::parse(v));
                    Ok(())
                },
            },
        },
        FieldBinding {
            field: "step1_required",
            binding: Binding::Attribute {
                name: "step1Required",
                value_type: ValueType::Bool,
                get: |d| Some(format_bool(d.step1_required)),
                set: |d, v| {
                    d.step1_required = parse_bool(v)?;
                    Ok(())
                },
            },
        },
        FieldBinding {
            field: "steps",
            binding: Binding::Child {
                element: QName::ga("step"),
                repeated: true,
                get: |d| d.steps.iter().map(encode).collect(),
                set: |d, node| {
                    d.steps.push(decode(node)?);
                    Ok(())
                },
            },
        },
    ],
};

static GOAL_SCHEMA: RecordSchema<Goal> = RecordSchema {
    element: QName::ga("goal"),
    fields: &[
        FieldBinding {
            field: "name",
            binding: Binding::Attribute {
                name: "name",
                value_type: ValueType::Text,
                get: |g| non_empty(&g.name),
                set: |g, v| {
                    g.name = v.to_string();
                    Ok(())
                },
            },
        },
        FieldBinding {
            field: "number",
            binding: Binding::Attribute {
                name: "number",
                value_type: ValueType::Integer,
                get: |g| Some(g.number.to_string()),
                set: |g, v| {
                    g.number = parse_integer(v)?;
                    Ok(())
                },
            },
        },
        FieldBinding {
            field: "value",
            binding: Binding::Attribute {
                name: "value",
                value_type: ValueType::Float,
                get: |g| Some(g.value.to_string()),
                set: |g, v| {
                    g.value = parse_float(v)?;
                    Ok(())
                },
            },
        },
        FieldBinding {
            field: "active",
            binding: Binding::Attribute {
                name: "active",
                value_type: ValueType::Bool,
                get: |g| Some(format_bool(g.active)),
                set: |g, v| {
                    g.active = parse_bool(v)?;
                    Ok(())
                },
            },
        },
        FieldBinding {
            field: "destination",
            binding: Binding::Child {
                element: QName::ga("destination"),
                repeated: false,
                get: |g| g.destination.iter().map(encode).collect(),
                set: |g, node| {
                    g.destination = Some(decode(node)?);
                    Ok(())
                },
            },
        },
        FieldBinding {
            field: "engagement",
            binding: Binding::Child {
                element: QName::ga("engagement"),
                repeated: false,
                get: |g| g.engagement.iter().map(encode).collect(),
                set: |g, node| {
                    g.engagement = Some(decode(node)?);
                    Ok(())
                },
            },
        },
    ],
};

impl XmlRecord for Engagement {
    fn schema() -> &'static RecordSchema<Self> {
        &ENGAGEMENT_SCHEMA
    }
}

impl XmlRecord for Step {
    fn schema() -> &'static RecordSchema<Self> {
        &STEP_SCHEMA
    }
}

impl XmlRecord for Destination {
    fn schema() -> &'static RecordSchema<Self> {
        &DESTINATION_SCHEMA
    }
}

impl XmlRecord for Goal {
    fn schema() -> &'static RecordSchema<Self> {
        &GOAL_SCHEMA
    }
}

// ── Display ──────────────────────────────────────────────────────

impl fmt::Display for Engagement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let metric = self.engagement_type.as_ref().map_or("?", EngagementType::as_str);
        let comparison = self.comparison.as_ref().map_or("?", Comparison::as_str);
        write!(f, "{metric} {comparison} {}", self.threshold_value)
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "step {} {:?} ({})", self.number, self.name, self.path)
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let match_type = self.match_type.as_ref().map_or("?", MatchType::as_str);
        write!(f, "{match_type} {}", self.expression)?;
        if !self.steps.is_empty() {
            write!(f, " ({} steps)", self.steps.len())?;
        }
        Ok(())
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "goal {} {:?}", self.number, self.name)?;
        match (&self.destination, &self.engagement) {
            (Some(d), None) => write!(f, ": destination {d}")?,
            (None, Some(e)) => write!(f, ": engagement {e}")?,
            (Some(d), Some(e)) => write!(f, ": destination {d}, engagement {e}")?,
            (None, None) => {}
        }
        if !self.active {
            f.write_str(" (inactive)")?;
        }
        Ok(())
    }
}
