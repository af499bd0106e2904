//! XML reading and writing for the analytics Management Feed.
//!
//! - [`parse_feed`]: a feed document to a [`Feed`]
//! - [`parse`]: any [`XmlRecord`] from a document whose root is that record
//! - [`to_xml_string`]: the reverse direction, driven by the same schema
//!
//! Parsing is all-or-nothing: any reader or schema error fails the whole
//! document and no partial record is returned.

mod error;
mod reader;
mod writer;

use mgmtfeed_model::{Feed, XmlRecord, decode, encode};
use tracing::debug;

pub use error::{XmlError, XmlResult};
pub use reader::read_document;
pub use writer::write_document;

/// Parses a Management Feed document.
///
/// The root element must be an Atom `feed`; entries keep document order.
pub fn parse_feed(xml: &str) -> XmlResult<Feed> {
    let feed: Feed = parse(xml)?;
    debug!(entries = feed.entries.len(), "Parsed management feed");
    Ok(feed)
}

/// Parses a document whose root element is `T`'s element.
pub fn parse<T: XmlRecord>(xml: &str) -> XmlResult<T> {
    let root = read_document(xml)?;
    Ok(decode(&root)?)
}

/// Serializes `record` as a standalone document.
pub fn to_xml_string<T: XmlRecord>(record: &T) -> XmlResult<String> {
    write_document(&encode(record))
}
