//! Feeds namespace-resolved `quick-xml` events into a [`ModelBuilder`].
//!
//! This is the boundary with the XML event source: everything below here is
//! `quick-xml`'s concern (well-formedness, encodings, entity syntax), and
//! everything above it is the builder's. Reader failures surface as
//! [`SigfileError::Xml`](crate::SigfileError::Xml).

use std::borrow::Cow;
use std::path::Path;

use quick_xml::escape::resolve_xml_entity;
use quick_xml::events::{BytesStart, Event};
use quick_xml::name::ResolveResult;
use quick_xml::NsReader;

use crate::builder::ModelBuilder;
use crate::model::Node;
use crate::names::{NameResolver, RawName};
use crate::Result;

/// Configuration for one parse session.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Schema namespace that element and attribute names resolve against.
    /// `None` accepts unnamespaced documents only.
    pub target_namespace: Option<String>,
    /// Whether names in no namespace still resolve when a target namespace
    /// is configured. Without a target namespace the global namespace is
    /// always accepted.
    pub allow_global_namespace: bool,
    /// Named schema-binding table to use instead of the built-in one.
    pub schema: Option<String>,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            target_namespace: None,
            allow_global_namespace: true,
            schema: None,
        }
    }
}

impl ParseOptions {
    fn builder(&self) -> Result<ModelBuilder> {
        let resolver = match &self.target_namespace {
            Some(ns) => NameResolver::with_namespace(ns.clone(), self.allow_global_namespace),
            None => NameResolver::new(),
        };
        match &self.schema {
            Some(name) => ModelBuilder::with_schema(resolver, name),
            None => Ok(ModelBuilder::with_resolver(resolver)),
        }
    }
}

/// Parse a signature document from a string.
pub fn parse_str(xml: &str, options: &ParseOptions) -> Result<Node> {
    let mut reader = NsReader::from_str(xml);
    let mut builder = options.builder()?;

    loop {
        let (resolve, event) = reader.read_resolved_event()?;
        // Owned so the reader is free to resolve attribute names below.
        let ns = namespace_uri(&resolve).into_owned();
        match event {
            Event::Start(e) => handle_start(&reader, &mut builder, &ns, &e)?,
            Event::Empty(e) => {
                // An empty element is a start immediately followed by an end.
                handle_start(&reader, &mut builder, &ns, &e)?;
                let name_ref = e.name();
                let qualified = String::from_utf8_lossy(name_ref.as_ref());
                let local_ref = e.local_name();
                let local = String::from_utf8_lossy(local_ref.as_ref());
                builder.end_element(&RawName::new(&ns, &local, &qualified))?;
            }
            Event::End(e) => {
                let name_ref = e.name();
                let qualified = String::from_utf8_lossy(name_ref.as_ref());
                let local_ref = e.local_name();
                let local = String::from_utf8_lossy(local_ref.as_ref());
                builder.end_element(&RawName::new(&ns, &local, &qualified))?;
            }
            Event::Text(text) => builder.characters(&text.xml_content()?),
            Event::CData(data) => builder.characters(&String::from_utf8_lossy(data.as_ref())),
            Event::GeneralRef(entity) => {
                let raw = entity.decode()?;
                builder.characters(&resolve_entity(&raw));
            }
            Event::Eof => break,
            // Declarations, comments, processing instructions, doctypes.
            _ => {}
        }
    }
    builder.finish()
}

/// Parse a signature document from a file.
pub fn parse_file(path: impl AsRef<Path>, options: &ParseOptions) -> Result<Node> {
    let xml = std::fs::read_to_string(path)?;
    parse_str(&xml, options)
}

fn namespace_uri<'r>(resolve: &'r ResolveResult<'_>) -> Cow<'r, str> {
    match resolve {
        ResolveResult::Bound(ns) => String::from_utf8_lossy(ns.as_ref()),
        // An unbound prefix can never match the target namespace; treating
        // it as global lets the content degrade to generic capture instead
        // of failing the parse.
        ResolveResult::Unbound | ResolveResult::Unknown(_) => Cow::Borrowed(""),
    }
}

fn handle_start(
    reader: &NsReader<&[u8]>,
    builder: &mut ModelBuilder,
    namespace: &str,
    e: &BytesStart<'_>,
) -> Result<()> {
    let name_ref = e.name();
    let qualified = String::from_utf8_lossy(name_ref.as_ref());
    let local_ref = e.local_name();
    let local = String::from_utf8_lossy(local_ref.as_ref());
    let name = RawName::new(namespace, &local, &qualified);

    // Decode the attributes into owned storage, then hand the builder a
    // borrowed view. Malformed attribute syntax was already rejected by the
    // reader, so `flatten` drops nothing real.
    let mut decoded: Vec<(String, String, String, String)> = Vec::new();
    for attr in e.attributes().flatten() {
        let key = attr.key;
        if key.as_ref() == b"xmlns" || key.prefix().is_some_and(|p| p.as_ref() == b"xmlns") {
            continue;
        }
        let (resolve, _) = reader.resolve_attribute(key);
        let ns = namespace_uri(&resolve).into_owned();
        let value = attr.unescape_value()?.into_owned();
        decoded.push((
            ns,
            String::from_utf8_lossy(key.local_name().as_ref()).into_owned(),
            String::from_utf8_lossy(key.as_ref()).into_owned(),
            value,
        ));
    }
    let attributes: Vec<(RawName<'_>, &str)> = decoded
        .iter()
        .map(|(ns, local, qualified, value)| {
            (RawName::new(ns, local, qualified), value.as_str())
        })
        .collect();

    builder.start_element(&name, &attributes);
    Ok(())
}

/// Resolve a general entity reference: predefined names first, then
/// numeric character references. Unknown entities are kept verbatim.
fn resolve_entity(raw: &str) -> String {
    if let Some(resolved) = resolve_xml_entity(raw) {
        return resolved.to_string();
    }
    if let Some(rest) = raw.strip_prefix('#') {
        let code = match rest.strip_prefix('x').or_else(|| rest.strip_prefix('X')) {
            Some(hex) => u32::from_str_radix(hex, 16).ok(),
            None => rest.parse::<u32>().ok(),
        };
        if let Some(ch) = code.and_then(char::from_u32) {
            return ch.to_string();
        }
    }
    log::warn!("unresolvable entity reference '&{raw};'");
    format!("&{raw};")
}
