//! The signature-file schema: element constructors and property bindings.
//!
//! These two tables are the single source of truth for the schema's shape.
//! Adding a child relationship means adding one arm here, never branching
//! logic elsewhere.

use crate::model::{
    ByteSequence, Format, FormatCollection, InternalSignature, InternalSignatureCollection, Node,
    NodeKind, SignatureFile, SubSequence,
};
use crate::SigfileError;

/// Construct the empty node for a canonical element name.
///
/// Total: names with no entry construct a generic node, so unrecognised
/// elements are forward-compatible by construction.
pub fn node_for_element(name: &str) -> Node {
    let kind = match name {
        "SignatureFile" => NodeKind::SignatureFile(SignatureFile::default()),
        "InternalSignatureCollection" => {
            NodeKind::InternalSignatureCollection(InternalSignatureCollection::default())
        }
        "InternalSignature" => NodeKind::InternalSignature(InternalSignature::default()),
        "ByteSequence" => NodeKind::ByteSequence(ByteSequence::default()),
        "SubSequence" => NodeKind::SubSequence(SubSequence::default()),
        "LeftFragment" => NodeKind::LeftFragment,
        "RightFragment" => NodeKind::RightFragment,
        "Shift" => NodeKind::Shift,
        "FormatCollection" => NodeKind::FormatCollection(FormatCollection::default()),
        "Format" => NodeKind::Format(Format::default()),
        "FormatHit" => NodeKind::FormatHit,
        _ => NodeKind::Generic,
    };
    Node::new(kind)
}

/// What happened when a completed child was offered to its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binding {
    /// Appended to an ordered collection field.
    Appended,
    /// Scalar text extracted and assigned to a field.
    Set,
    /// Recognised but deliberately discarded (deprecated schema fields).
    Ignored,
    /// No binding registered; the caller reports it and drops the child.
    Unknown,
}

/// Attach a completed `child` to `parent`, dispatching on the parent's kind
/// and the child's canonical element name.
pub fn bind(parent: &mut Node, name: &str, child: Node) -> Binding {
    match (parent.kind_mut(), name) {
        (NodeKind::SignatureFile(file), "InternalSignatureCollection") => {
            file.signature_collection = Some(Box::new(child));
            Binding::Set
        }
        (NodeKind::SignatureFile(file), "FormatCollection") => {
            file.format_collection = Some(Box::new(child));
            Binding::Set
        }
        (NodeKind::InternalSignatureCollection(coll), "InternalSignature") => {
            coll.signatures.push(child);
            Binding::Appended
        }
        (NodeKind::InternalSignature(sig), "ByteSequence") => {
            sig.byte_sequences.push(child);
            Binding::Appended
        }
        (NodeKind::ByteSequence(seq), "SubSequence") => {
            seq.sub_sequences.push(child);
            Binding::Appended
        }
        (NodeKind::SubSequence(sub), "LeftFragment") => {
            sub.left_fragments.push(child);
            Binding::Appended
        }
        (NodeKind::SubSequence(sub), "RightFragment") => {
            sub.right_fragments.push(child);
            Binding::Appended
        }
        (NodeKind::SubSequence(sub), "Sequence") => {
            sub.sequence = Some(child.into_text());
            Binding::Set
        }
        // Shift and DefaultShift are deprecated; still parsed, never kept.
        (NodeKind::SubSequence(_), "Shift" | "DefaultShift") => Binding::Ignored,
        (NodeKind::FormatCollection(coll), "Format") => {
            coll.formats.push(child);
            Binding::Appended
        }
        (NodeKind::Format(format), "Extension") => {
            format.extensions.push(child.into_text());
            Binding::Set
        }
        (NodeKind::Format(format), "InternalSignatureID") => {
            format.signature_ids.push(child.into_text());
            Binding::Set
        }
        (NodeKind::Format(format), "HasPriorityOverFormatID") => {
            format.priority_over.push(child.into_text());
            Binding::Set
        }
        _ => Binding::Unknown,
    }
}

/// A named constructor/binding table pair. The default schema is built in;
/// a builder can be pointed at an alternate table by name.
#[derive(Debug, Clone, Copy)]
pub struct Schema {
    pub name: &'static str,
    pub construct: fn(&str) -> Node,
    pub bind: fn(&mut Node, &str, Node) -> Binding,
}

/// The built-in signature-file schema.
pub const DEFAULT_SCHEMA: Schema = Schema {
    name: "default",
    construct: node_for_element,
    bind,
};

impl Schema {
    /// Look up a registered schema by name.
    pub fn by_name(name: &str) -> Result<Schema, SigfileError> {
        match name {
            "default" => Ok(DEFAULT_SCHEMA),
            other => Err(SigfileError::UnknownSchema(other.to_string())),
        }
    }
}
