//! Internal-signature side of the model: the byte-level patterns a format
//! is identified by.

use super::Node;

/// Root of a parsed signature file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignatureFile {
    /// The `InternalSignatureCollection` child, once closed.
    pub signature_collection: Option<Box<Node>>,
    /// The `FormatCollection` child, once closed.
    pub format_collection: Option<Box<Node>>,
}

/// Ordered set of internal signatures.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InternalSignatureCollection {
    /// `InternalSignature` nodes in document order.
    pub signatures: Vec<Node>,
}

/// One internal signature: a conjunction of byte sequences that must all
/// match for the signature to hit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InternalSignature {
    /// `ByteSequence` nodes in document order.
    pub byte_sequences: Vec<Node>,
}

/// A byte sequence anchored somewhere in the file (the anchor reference is
/// carried in attributes).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ByteSequence {
    /// `SubSequence` nodes in document order.
    pub sub_sequences: Vec<Node>,
}

/// One searchable unit of a byte sequence: an anchor pattern plus optional
/// fragments on either side.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubSequence {
    /// `LeftFragment` nodes in document order.
    pub left_fragments: Vec<Node>,
    /// `RightFragment` nodes in document order.
    pub right_fragments: Vec<Node>,
    /// Anchor pattern, carried as the text of a `Sequence` child.
    pub sequence: Option<String>,
}
