//! Streaming parser for file-format signature description XML.
//!
//! A signature file describes binary file formats: each format carries
//! external hints (extensions) and references to internal signatures, which
//! in turn are built from byte sequences and sub-sequences. This crate
//! consumes the XML as a stream of parse events and builds the typed model
//! directly, one element at a time, without ever materializing a generic
//! document tree.
//!
//! The pieces:
//!
//! - [`NameResolver`] maps raw namespace-qualified names onto canonical
//!   schema names, tolerating both namespaced and legacy unnamespaced
//!   documents.
//! - [`schema`] holds the two dispatch tables: element name → node
//!   constructor, and (parent kind, child name) → binding action.
//! - [`ModelBuilder`] owns the parse stack and drives construction from
//!   start/characters/end events.
//! - [`parse_str`] / [`parse_file`] feed it from `quick-xml`.
//!
//! Unrecognised content never fails a parse: elements outside the
//! configured namespace are skipped, unknown element names are captured as
//! generic nodes, and unknown child properties are dropped with a warning.
//! Only structural corruption (an end event with nothing open) aborts.

mod builder;
mod names;
pub mod model;
mod reader;
pub mod schema;

pub use builder::ModelBuilder;
pub use model::{Node, NodeKind};
pub use names::{NameResolver, RawName};
pub use reader::{parse_file, parse_str, ParseOptions};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SigfileError {
    #[error("xml error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("encoding error: {0}")]
    Encoding(#[from] quick_xml::encoding::EncodingError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// An end event arrived with no element open. The event source broke
    /// its well-formedness guarantee; the parse cannot continue.
    #[error("closing element '{element}' with no element open")]
    StructuralViolation { element: String },

    /// The stream ended before the root element was closed.
    #[error("document ended before the root element was closed")]
    Incomplete,

    #[error("unknown schema binding '{0}'")]
    UnknownSchema(String),
}

pub type Result<T> = std::result::Result<T, SigfileError>;
