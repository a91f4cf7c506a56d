//! File-format side of the model.

use super::Node;

/// Ordered set of file formats.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormatCollection {
    /// `Format` nodes in document order.
    pub formats: Vec<Node>,
}

/// One file format. Identity (ID, name, PUID, MIME type) lives in the
/// node's attributes; the text-bearing children are extracted here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Format {
    /// External extension hints, e.g. `pdf`.
    pub extensions: Vec<String>,
    /// IDs of the internal signatures that identify this format.
    pub signature_ids: Vec<String>,
    /// IDs of formats this one takes priority over.
    pub priority_over: Vec<String>,
}
