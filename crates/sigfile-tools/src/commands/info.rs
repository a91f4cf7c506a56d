use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Cell, Color, Table};
use sigfile::{Node, ParseOptions};

pub fn execute(file: &Path, options: &ParseOptions) -> Result<()> {
    let root = sigfile::parse_file(file, options)
        .with_context(|| format!("failed to parse {}", file.display()))?;
    let Some(model) = root.as_signature_file() else {
        anyhow::bail!(
            "root element of {} is {}, expected SignatureFile",
            file.display(),
            root.kind_name()
        );
    };

    println!("{}", "Signature File Summary".bold());

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_content_arrangement(comfy_table::ContentArrangement::Dynamic);

    for (label, attr) in [("Version", "Version"), ("Created", "DateCreated")] {
        if let Some(value) = root.attribute(attr) {
            table.add_row(vec![Cell::new(label).fg(Color::Cyan), Cell::new(value)]);
        }
    }

    let signatures: &[Node] = model
        .signature_collection
        .as_deref()
        .and_then(Node::as_internal_signature_collection)
        .map(|coll| coll.signatures.as_slice())
        .unwrap_or_default();
    let formats: &[Node] = model
        .format_collection
        .as_deref()
        .and_then(Node::as_format_collection)
        .map(|coll| coll.formats.as_slice())
        .unwrap_or_default();

    let byte_sequences: usize = signatures
        .iter()
        .filter_map(Node::as_internal_signature)
        .map(|sig| sig.byte_sequences.len())
        .sum();
    let extensions: usize = formats
        .iter()
        .filter_map(Node::as_format)
        .map(|format| format.extensions.len())
        .sum();

    table.add_row(vec![
        Cell::new("Internal signatures").fg(Color::Cyan),
        Cell::new(signatures.len()),
    ]);
    table.add_row(vec![
        Cell::new("Byte sequences").fg(Color::Cyan),
        Cell::new(byte_sequences),
    ]);
    table.add_row(vec![
        Cell::new("Formats").fg(Color::Cyan),
        Cell::new(formats.len()),
    ]);
    table.add_row(vec![
        Cell::new("Extension hints").fg(Color::Cyan),
        Cell::new(extensions),
    ]);

    println!("{table}");
    Ok(())
}
