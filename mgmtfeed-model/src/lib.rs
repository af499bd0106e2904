//! Record types for the analytics Management Feed.
//!
//! Defines the typed shapes that mirror the service's XML schema and the
//! machinery that maps them to and from XML:
//! - [`Goal`], [`Destination`], [`Step`], [`Engagement`]: goal configuration
//! - [`Feed`], [`FeedEntry`], [`Property`]: the Atom feed envelope
//! - [`RecordSchema`]: an immutable, per-type table of field bindings
//! - [`XmlNode`]: a namespace-resolved element tree, independent of any parser
//! - [`decode`] / [`encode`]: generic conversion driven by a record's schema
//!
//! This crate never touches XML text; `mgmtfeed-xml` turns documents into
//! [`XmlNode`] trees and back.

mod error;
mod feed;
mod goal;
mod namespace;
mod node;
mod schema;

pub use error::{SchemaError, SchemaResult, ValueError};
pub use feed::{Feed, FeedEntry, Property};
pub use goal::{
    Comparison, Destination, Engagement, EngagementType, Goal, GoalKind, MatchType, Step,
};
pub use namespace::{ATOM_NS, DXP_NS, GA_NS, OPENSEARCH_NS, QName};
pub use node::{XmlAttribute, XmlNode};
pub use schema::{
    Binding, FieldBinding, RecordSchema, ValueType, XmlRecord, decode, encode, format_bool,
    format_datetime, parse_bool, parse_datetime, parse_float, parse_integer,
};
