use std::path::Path;

use anyhow::{Context, Result};
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::Table;
use sigfile::{Node, ParseOptions};

pub fn execute(file: &Path, options: &ParseOptions) -> Result<()> {
    let root = sigfile::parse_file(file, options)
        .with_context(|| format!("failed to parse {}", file.display()))?;

    // Accept either a whole signature file or a bare format collection.
    let collection = match root.as_signature_file() {
        Some(model) => model
            .format_collection
            .as_deref()
            .and_then(Node::as_format_collection),
        None => root.as_format_collection(),
    };
    let Some(collection) = collection else {
        anyhow::bail!("{} contains no format collection", file.display());
    };

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_content_arrangement(comfy_table::ContentArrangement::Dynamic);
    table.set_header(vec!["ID", "Name", "PUID", "Extensions", "Signatures"]);

    for node in &collection.formats {
        let Some(format) = node.as_format() else {
            continue;
        };
        table.add_row(vec![
            node.attribute("ID").unwrap_or("-").to_string(),
            node.attribute("Name").unwrap_or("-").to_string(),
            node.attribute("PUID").unwrap_or("-").to_string(),
            format.extensions.join(", "),
            format.signature_ids.join(", "),
        ]);
    }

    println!("{table}");
    Ok(())
}
