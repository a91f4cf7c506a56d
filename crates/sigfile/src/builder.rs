//! Event-driven construction of the signature model.

use crate::model::Node;
use crate::names::{NameResolver, RawName};
use crate::schema::{Binding, Schema, DEFAULT_SCHEMA};
use crate::{Result, SigfileError};

/// Builds the typed model from a stream of XML parse events.
///
/// The builder owns a stack of open nodes, one per level of XML nesting.
/// Element starts resolve the name, construct the matching node kind and
/// push it; character data accumulates on the top of the stack; element
/// ends pop, finalize and attach the completed node to its parent. When
/// the root closes, the finished model is held for [`finish`].
///
/// A builder is single-use: one instance processes exactly one document
/// stream and is consumed when its result is taken.
///
/// Elements whose names do not resolve against the configured namespace are
/// skipped together with their entire subtree; nothing inside a skipped
/// element attaches to an ancestor.
///
/// [`finish`]: ModelBuilder::finish
#[derive(Debug)]
pub struct ModelBuilder {
    resolver: NameResolver,
    schema: Schema,
    stack: Vec<Node>,
    /// Depth inside a subtree whose root element did not resolve.
    skip_depth: usize,
    model: Option<Node>,
}

impl Default for ModelBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ModelBuilder {
    /// A builder with no namespace configured and the built-in schema.
    pub fn new() -> Self {
        Self::with_resolver(NameResolver::new())
    }

    pub fn with_resolver(resolver: NameResolver) -> Self {
        Self {
            resolver,
            schema: DEFAULT_SCHEMA,
            stack: Vec::new(),
            skip_depth: 0,
            model: None,
        }
    }

    /// A builder using a named schema-binding table instead of the default.
    pub fn with_schema(resolver: NameResolver, schema_name: &str) -> Result<Self> {
        let schema = Schema::by_name(schema_name)?;
        let mut builder = Self::with_resolver(resolver);
        builder.schema = schema;
        Ok(builder)
    }

    /// Handle an element-start event.
    ///
    /// Unresolvable element names start a skipped subtree. Attributes whose
    /// names do not resolve are dropped; the rest are set raw on the new
    /// node, with no type coercion at this layer.
    pub fn start_element(&mut self, name: &RawName<'_>, attributes: &[(RawName<'_>, &str)]) {
        if self.skip_depth > 0 {
            self.skip_depth += 1;
            return;
        }
        let Some(element) = self.resolver.resolve(name) else {
            self.skip_depth = 1;
            return;
        };

        let mut node = (self.schema.construct)(element);
        if node.is_generic() {
            log::trace!("unknown element '{element}', capturing as a generic node");
        }
        for (attr_name, value) in attributes {
            if let Some(attribute) = self.resolver.resolve(attr_name) {
                node.set_attribute(attribute, value);
            }
        }
        self.stack.push(node);
    }

    /// Handle a character-data event. Chunks arriving outside any open
    /// element, or inside a skipped subtree, are dropped.
    pub fn characters(&mut self, text: &str) {
        if self.skip_depth > 0 {
            return;
        }
        if let Some(open) = self.stack.last_mut() {
            open.append_text(text);
        }
    }

    /// Handle an element-end event.
    ///
    /// Fails with [`SigfileError::StructuralViolation`] if a resolvable end
    /// arrives with no element open; the event source has broken its
    /// well-formedness guarantee and the stack discipline cannot be
    /// preserved past that point.
    pub fn end_element(&mut self, name: &RawName<'_>) -> Result<()> {
        if self.skip_depth > 0 {
            self.skip_depth -= 1;
            return Ok(());
        }
        // Pairs with the corresponding start's skip: no pop.
        let Some(element) = self.resolver.resolve(name) else {
            return Ok(());
        };

        let mut node = self
            .stack
            .pop()
            .ok_or_else(|| SigfileError::StructuralViolation {
                element: element.to_string(),
            })?;
        node.finalize();

        match self.stack.last_mut() {
            None => self.model = Some(node),
            Some(parent) => match (self.schema.bind)(parent, element, node) {
                Binding::Unknown => {
                    log::warn!("unknown property '{element}' on {}", parent.kind_name());
                }
                Binding::Ignored => {
                    log::trace!("dropping deprecated property '{element}'");
                }
                Binding::Appended | Binding::Set => {}
            },
        }
        Ok(())
    }

    /// Whether the root element has closed and a model is available.
    pub fn is_done(&self) -> bool {
        self.stack.is_empty() && self.model.is_some()
    }

    /// Take the finished model.
    ///
    /// Fails with [`SigfileError::Incomplete`] if the stream ended before
    /// the root element closed, or never produced one.
    pub fn finish(self) -> Result<Node> {
        if !self.stack.is_empty() {
            return Err(SigfileError::Incomplete);
        }
        self.model.ok_or(SigfileError::Incomplete)
    }
}
