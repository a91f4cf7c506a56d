//! End-to-end parses of complete signature documents.

use sigfile::{Node, ParseOptions};

const NAMESPACE: &str = "http://example.com/signature";

/// A small but structurally complete signature document: a default-namespace
/// root, one internal signature with fragments and deprecated shift data,
/// and two formats cross-referencing it.
fn signature_doc() -> &'static str {
    r#"<?xml version="1.0" encoding="UTF-8"?>
<SignatureFile xmlns="http://example.com/signature" Version="104" DateCreated="2024-11-05T12:00:00">
  <InternalSignatureCollection>
    <InternalSignature ID="10" Specificity="Specific">
      <ByteSequence Reference="BOFoffset">
        <SubSequence Position="1" SubSeqMinOffset="0" SubSeqMaxOffset="0">
          <Sequence> 255044462D312E </Sequence>
          <LeftFragment MaxOffset="0" MinOffset="0" Position="1">25</LeftFragment>
          <RightFragment MaxOffset="2" MinOffset="0" Position="1">0D0A</RightFragment>
          <Shift Byte="25">5</Shift>
          <DefaultShift>8</DefaultShift>
        </SubSequence>
      </ByteSequence>
    </InternalSignature>
  </InternalSignatureCollection>
  <FormatCollection>
    <Format ID="770" Name="Portable Document Format" PUID="fmt/18" MIMEType="application/pdf">
      <InternalSignatureID>10</InternalSignatureID>
      <Extension>pdf</Extension>
      <HasPriorityOverFormatID>771</HasPriorityOverFormatID>
    </Format>
    <Format ID="771" Name="Plain Text" PUID="x-fmt/111">
      <Extension>txt</Extension>
    </Format>
  </FormatCollection>
</SignatureFile>
"#
}

fn options() -> ParseOptions {
    ParseOptions {
        target_namespace: Some(NAMESPACE.to_string()),
        ..ParseOptions::default()
    }
}

#[test]
fn nesting_mirrors_the_document() {
    let root = sigfile::parse_str(signature_doc(), &options()).unwrap();

    assert_eq!(root.attribute("Version"), Some("104"));
    assert_eq!(root.attribute("DateCreated"), Some("2024-11-05T12:00:00"));

    let model = root.as_signature_file().unwrap();
    let signatures = model
        .signature_collection
        .as_deref()
        .and_then(Node::as_internal_signature_collection)
        .unwrap();
    assert_eq!(signatures.signatures.len(), 1);

    let signature = &signatures.signatures[0];
    assert_eq!(signature.attribute("ID"), Some("10"));
    assert_eq!(signature.attribute("Specificity"), Some("Specific"));

    let byte_sequences = &signature.as_internal_signature().unwrap().byte_sequences;
    assert_eq!(byte_sequences.len(), 1);
    assert_eq!(byte_sequences[0].attribute("Reference"), Some("BOFoffset"));

    let sub_sequences = &byte_sequences[0].as_byte_sequence().unwrap().sub_sequences;
    assert_eq!(sub_sequences.len(), 1);
    let sub = sub_sequences[0].as_sub_sequence().unwrap();

    // Scalar extraction trims the accumulated character data.
    assert_eq!(sub.sequence.as_deref(), Some("255044462D312E"));

    assert_eq!(sub.left_fragments.len(), 1);
    assert_eq!(sub.left_fragments[0].text(), "25");
    assert_eq!(sub.left_fragments[0].attribute("Position"), Some("1"));
    assert_eq!(sub.right_fragments.len(), 1);
    assert_eq!(sub.right_fragments[0].text(), "0D0A");
    assert_eq!(sub.right_fragments[0].attribute("MaxOffset"), Some("2"));
}

#[test]
fn formats_keep_document_order_and_cross_references() {
    let root = sigfile::parse_str(signature_doc(), &options()).unwrap();
    let formats = &root
        .as_signature_file()
        .unwrap()
        .format_collection
        .as_deref()
        .and_then(Node::as_format_collection)
        .unwrap()
        .formats;

    assert_eq!(formats.len(), 2);

    let pdf = formats[0].as_format().unwrap();
    assert_eq!(formats[0].attribute("PUID"), Some("fmt/18"));
    assert_eq!(formats[0].attribute("MIMEType"), Some("application/pdf"));
    assert_eq!(pdf.extensions, ["pdf"]);
    assert_eq!(pdf.signature_ids, ["10"]);
    assert_eq!(pdf.priority_over, ["771"]);

    let text = formats[1].as_format().unwrap();
    assert_eq!(formats[1].attribute("Name"), Some("Plain Text"));
    assert_eq!(text.extensions, ["txt"]);
    assert!(text.signature_ids.is_empty());
}

#[test]
fn deprecated_shift_content_leaves_no_trace() {
    let root = sigfile::parse_str(signature_doc(), &options()).unwrap();
    let debug = format!("{root:?}");
    assert!(!debug.contains("Shift"));
}

#[test]
fn parsing_twice_yields_equal_models() {
    let first = sigfile::parse_str(signature_doc(), &options()).unwrap();
    let second = sigfile::parse_str(signature_doc(), &options()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn legacy_documents_parse_without_a_namespace() {
    let stripped = signature_doc().replace(" xmlns=\"http://example.com/signature\"", "");
    let root = sigfile::parse_str(&stripped, &ParseOptions::default()).unwrap();

    let formats = &root
        .as_signature_file()
        .unwrap()
        .format_collection
        .as_deref()
        .and_then(Node::as_format_collection)
        .unwrap()
        .formats;
    assert_eq!(formats.len(), 2);
}

#[test]
fn namespaced_and_legacy_parses_agree() {
    let namespaced = sigfile::parse_str(signature_doc(), &options()).unwrap();
    let stripped = signature_doc().replace(" xmlns=\"http://example.com/signature\"", "");
    let legacy = sigfile::parse_str(&stripped, &ParseOptions::default()).unwrap();
    assert_eq!(namespaced, legacy);
}
