//! Typed nodes of the signature-file model.

mod format;
mod signature;

pub use format::{Format, FormatCollection};
pub use signature::{
    ByteSequence, InternalSignature, InternalSignatureCollection, SignatureFile, SubSequence,
};

use std::collections::BTreeMap;

/// One constructed element of the model.
///
/// Every node, whatever its kind, carries the raw attribute values that
/// resolved against the schema namespace and the character data accumulated
/// while the element was open. Attribute values are kept as raw strings;
/// numeric or identifier parsing is the consumer's concern.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    kind: NodeKind,
    attributes: BTreeMap<String, String>,
    text: String,
}

/// The closed set of node kinds the builder can construct.
///
/// Element names with no entry in the schema construct [`NodeKind::Generic`],
/// so unrecognised structure is still captured as attributes and text.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    SignatureFile(SignatureFile),
    InternalSignatureCollection(InternalSignatureCollection),
    InternalSignature(InternalSignature),
    ByteSequence(ByteSequence),
    SubSequence(SubSequence),
    /// Sequence fragment to the left of its sub-sequence anchor.
    LeftFragment,
    /// Sequence fragment to the right of its sub-sequence anchor.
    RightFragment,
    /// Deprecated shift specification; still parsed, never attached.
    Shift,
    FormatCollection(FormatCollection),
    Format(Format),
    FormatHit,
    Generic,
}

impl Node {
    pub(crate) fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            attributes: BTreeMap::new(),
            text: String::new(),
        }
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub(crate) fn kind_mut(&mut self) -> &mut NodeKind {
        &mut self.kind
    }

    /// Kind tag for diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self.kind {
            NodeKind::SignatureFile(_) => "SignatureFile",
            NodeKind::InternalSignatureCollection(_) => "InternalSignatureCollection",
            NodeKind::InternalSignature(_) => "InternalSignature",
            NodeKind::ByteSequence(_) => "ByteSequence",
            NodeKind::SubSequence(_) => "SubSequence",
            NodeKind::LeftFragment => "LeftFragment",
            NodeKind::RightFragment => "RightFragment",
            NodeKind::Shift => "Shift",
            NodeKind::FormatCollection(_) => "FormatCollection",
            NodeKind::Format(_) => "Format",
            NodeKind::FormatHit => "FormatHit",
            NodeKind::Generic => "Generic",
        }
    }

    pub fn is_generic(&self) -> bool {
        matches!(self.kind, NodeKind::Generic)
    }

    /// Raw value of a resolved attribute.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// All resolved attributes in canonical-name order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub(crate) fn set_attribute(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_string(), value.to_string());
    }

    /// Character data accumulated while this element was open, trimmed once
    /// the element has closed.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub(crate) fn append_text(&mut self, chunk: &str) {
        self.text.push_str(chunk);
    }

    /// Invoked exactly once when the element closes.
    pub(crate) fn finalize(&mut self) {
        self.text = self.text.trim().to_string();
    }

    /// Consume the node, keeping only its finalized text. Used for children
    /// whose whole value is carried as character data.
    pub(crate) fn into_text(self) -> String {
        self.text
    }

    pub fn as_signature_file(&self) -> Option<&SignatureFile> {
        match &self.kind {
            NodeKind::SignatureFile(f) => Some(f),
            _ => None,
        }
    }

    pub fn as_internal_signature_collection(&self) -> Option<&InternalSignatureCollection> {
        match &self.kind {
            NodeKind::InternalSignatureCollection(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_internal_signature(&self) -> Option<&InternalSignature> {
        match &self.kind {
            NodeKind::InternalSignature(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_byte_sequence(&self) -> Option<&ByteSequence> {
        match &self.kind {
            NodeKind::ByteSequence(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_sub_sequence(&self) -> Option<&SubSequence> {
        match &self.kind {
            NodeKind::SubSequence(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_format_collection(&self) -> Option<&FormatCollection> {
        match &self.kind {
            NodeKind::FormatCollection(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_format(&self) -> Option<&Format> {
        match &self.kind {
            NodeKind::Format(f) => Some(f),
            _ => None,
        }
    }
}
