use crate::StrSpan;

/// The name of an element or attribute, with an optional namespace prefix:
/// `prefix:local`
///
/// Prefixes are kept opaque; no namespace resolution is performed.
#[derive(Debug, Clone)]
pub struct NodeName<'src> {
    prefix: Option<StrSpan<'src>>,
    local: StrSpan<'src>,
}
impl<'src> NodeName<'src> {
    pub(crate) fn new<T: Into<StrSpan<'src>>>(prefix: Option<T>, local: T) -> Self {
        Self {
            prefix: prefix.map(Into::into),
            local: local.into(),
        }
    }

    /// Compare the name with a prefix and local name.
    #[must_use]
    pub fn equals(&self, prefix: Option<&str>, local: &str) -> bool {
        self.prefix.map(|s| s.as_str()) == prefix && self.local.as_str() == local
    }

    /// Returns the prefix of the name.
    #[must_use]
    pub fn prefix(&self) -> Option<&StrSpan<'src>> {
        self.prefix.as_ref()
    }

    /// Returns the local portion of the name.
    #[must_use]
    pub fn local(&self) -> &StrSpan<'src> {
        &self.local
    }
}
impl std::fmt::Display for NodeName<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(prefix) = self.prefix {
            write!(f, "{prefix}:{local}", local = self.local)
        } else {
            write!(f, "{local}", local = self.local)
        }
    }
}
impl PartialEq for NodeName<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.prefix.map(|s| s.as_str()) == other.prefix.map(|s| s.as_str())
            && self.local.as_str() == other.local.as_str()
    }
}
impl PartialEq<&str> for NodeName<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.to_string().as_str() == *other
    }
}
impl PartialEq<str> for NodeName<'_> {
    fn eq(&self, other: &str) -> bool {
        self.to_string().as_str() == other
    }
}
