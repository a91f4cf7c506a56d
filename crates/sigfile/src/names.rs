//! Namespace-aware name resolution.

/// A raw name as delivered by the XML event source: the namespace uri the
/// name was resolved against (empty when the name is in no namespace), the
/// local part, and the qualified (possibly prefixed) form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawName<'a> {
    pub namespace: &'a str,
    pub local: &'a str,
    pub qualified: &'a str,
}

impl<'a> RawName<'a> {
    pub fn new(namespace: &'a str, local: &'a str, qualified: &'a str) -> Self {
        Self {
            namespace,
            local,
            qualified,
        }
    }

    /// An unprefixed name in no namespace.
    pub fn global(name: &'a str) -> Self {
        Self::new("", name, name)
    }
}

/// Resolves raw names into canonical schema names.
///
/// If a name is in a namespace, its qualified form is not required to be
/// set, so the local part is used when the namespace matches; the qualified
/// form is used for names in no namespace at all. Everything else is
/// unresolved, and the caller excludes it from the model.
#[derive(Debug, Clone)]
pub struct NameResolver {
    target_namespace: String,
    match_namespace: bool,
    allow_global_namespace: bool,
}

impl Default for NameResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl NameResolver {
    /// A resolver with no namespace configured: every name in no namespace
    /// resolves to its qualified form, namespaced names do not resolve.
    pub fn new() -> Self {
        Self {
            target_namespace: String::new(),
            match_namespace: false,
            allow_global_namespace: true,
        }
    }

    /// A resolver matching `namespace`. When `allow_global` is set, names
    /// in no namespace still resolve to their qualified form, so namespaced
    /// and legacy unnamespaced documents share one parsing path.
    pub fn with_namespace(namespace: impl Into<String>, allow_global: bool) -> Self {
        Self {
            target_namespace: namespace.into(),
            match_namespace: true,
            allow_global_namespace: allow_global,
        }
    }

    /// Resolve `name` to a canonical name, or `None` if it is in neither
    /// the target namespace nor (when allowed) the global namespace.
    /// Applied identically to element and attribute names.
    pub fn resolve<'n>(&self, name: &RawName<'n>) -> Option<&'n str> {
        if self.match_namespace && name.namespace == self.target_namespace {
            Some(name.local)
        } else if self.allow_global_namespace && name.namespace.is_empty() {
            Some(name.qualified)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_resolver_uses_qualified_names() {
        let resolver = NameResolver::new();
        let name = RawName::new("", "Format", "sig:Format");
        assert_eq!(resolver.resolve(&name), Some("sig:Format"));
    }

    #[test]
    fn default_resolver_rejects_namespaced_names() {
        let resolver = NameResolver::new();
        let name = RawName::new("http://example.com/sig", "Format", "sig:Format");
        assert_eq!(resolver.resolve(&name), None);
    }

    #[test]
    fn matching_namespace_yields_local_name() {
        let resolver = NameResolver::with_namespace("http://example.com/sig", true);
        let name = RawName::new("http://example.com/sig", "Format", "sig:Format");
        assert_eq!(resolver.resolve(&name), Some("Format"));
    }

    #[test]
    fn global_fallback_yields_qualified_name() {
        let resolver = NameResolver::with_namespace("http://example.com/sig", true);
        let name = RawName::global("Format");
        assert_eq!(resolver.resolve(&name), Some("Format"));
    }

    #[test]
    fn global_fallback_can_be_disabled() {
        let resolver = NameResolver::with_namespace("http://example.com/sig", false);
        assert_eq!(resolver.resolve(&RawName::global("Format")), None);
    }

    #[test]
    fn foreign_namespace_is_unresolved() {
        let resolver = NameResolver::with_namespace("http://example.com/sig", true);
        let name = RawName::new("http://other.example.com", "Format", "o:Format");
        assert_eq!(resolver.resolve(&name), None);
    }
}
