use super::NodeName;
use crate::{SourceArena, StrSpan};

/// An element in the document tree, with a name, attributes, and either a
/// text payload or child elements:
/// `<name attr="value">...</name>`
///
/// An element carrying neither text nor children is re-emitted self-closing.
/// Whitespace-only text counts as no text, so `<a>   </a>` and `<a />` parse
/// to the same element.
#[derive(Debug, Clone)]
pub struct ElementNode<'src> {
    span: StrSpan<'src>,
    name: NodeName<'src>,
    attributes: Vec<NodeAttribute<'src>>,
    content: Option<StrSpan<'src>>,
    children: Vec<ElementNode<'src>>,
}
impl<'src> ElementNode<'src> {
    pub(crate) fn new<T: Into<StrSpan<'src>>>(prefix: Option<T>, local: T) -> Self {
        Self {
            span: StrSpan::default(),
            name: NodeName::new(prefix, local),
            attributes: vec![],
            content: None,
            children: vec![],
        }
    }

    pub(crate) fn with_span(mut self, span: impl Into<StrSpan<'src>>) -> Self {
        self.span = span.into();
        self
    }

    /// Create a new element from strings not referencing a source document.
    /// The strings will be allocated in the given arena.
    ///
    /// # Panics
    /// Panics if the arena cannot allocate the strings.
    pub fn from_unallocated<'b>(
        arena: &'src SourceArena,
        prefix: Option<&'b str>,
        local: &'b str,
    ) -> Self {
        Self::new(
            prefix.map(|p| StrSpan::from_unallocated(arena, p)),
            StrSpan::from_unallocated(arena, local),
        )
    }

    /// Appends a child element, preserving document order.
    pub fn push_child(&mut self, child: ElementNode<'src>) {
        self.children.push(child);
    }

    /// Appends an attribute, preserving insertion order.
    pub fn push_attribute(&mut self, attribute: NodeAttribute<'src>) {
        self.attributes.push(attribute);
    }

    /// Sets the text payload of the element.
    /// The text is trimmed; whitespace-only text clears the payload instead.
    pub fn set_content(&mut self, arena: &'src SourceArena, text: &str) {
        let text = text.trim();
        if text.is_empty() {
            self.content = None;
        } else {
            self.content = Some(StrSpan::from_unallocated(arena, text));
        }
    }

    pub(crate) fn set_content_span(&mut self, content: StrSpan<'src>) {
        self.content = Some(content);
    }

    /// Get an attribute by name.
    ///
    /// Searches the attributes in reverse order, so the last attribute with the same name is returned.
    #[must_use]
    pub fn get_attribute(&self, prefix: Option<&str>, name: &str) -> Option<&NodeAttribute<'src>> {
        self.attributes
            .iter()
            .rev()
            .find(|a| a.name.equals(prefix, name))
    }

    /// True if the element carries neither a text payload nor children,
    /// and is therefore re-emitted as `<name ... />`.
    #[must_use]
    pub fn is_self_closing(&self) -> bool {
        self.content.is_none() && self.children.is_empty()
    }

    /// Get the span of the element in the original source.
    #[must_use]
    pub fn span(&self) -> &StrSpan<'src> {
        &self.span
    }

    /// Get the name of the element.
    #[must_use]
    pub fn name(&self) -> &NodeName<'src> {
        &self.name
    }

    /// Get the attributes of the element, in insertion order.
    #[must_use]
    pub fn attributes(&self) -> &[NodeAttribute<'src>] {
        &self.attributes
    }

    /// Get the text payload of the element, if any.
    #[must_use]
    pub fn content(&self) -> Option<&StrSpan<'src>> {
        self.content.as_ref()
    }

    /// Get the child elements, in document order.
    #[must_use]
    pub fn children(&self) -> &[ElementNode<'src>] {
        &self.children
    }
}

//
// Structural equality; source positions are ignored
impl PartialEq for ElementNode<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.attributes == other.attributes
            && self.content.map(|s| s.text) == other.content.map(|s| s.text)
            && self.children == other.children
    }
}

/// An attribute set on an element, with a name and value:
/// `name="value"`
///
/// Values are re-emitted verbatim; no entity encoding or decoding is applied.
#[derive(Debug, Clone)]
pub struct NodeAttribute<'src> {
    span: StrSpan<'src>,
    name: NodeName<'src>,
    value: StrSpan<'src>,
}
impl<'src> NodeAttribute<'src> {
    pub(crate) fn new<T: Into<StrSpan<'src>>>(prefix: Option<T>, local: T, value: T) -> Self {
        Self {
            span: StrSpan::default(),
            name: NodeName::new(prefix, local),
            value: value.into(),
        }
    }

    pub(crate) fn with_span(mut self, span: impl Into<StrSpan<'src>>) -> Self {
        self.span = span.into();
        self
    }

    /// Create a new attribute from strings not referencing a source document.
    /// The strings will be allocated in the given arena.
    ///
    /// # Panics
    /// Panics if the arena cannot allocate the strings.
    pub fn from_unallocated<'b>(
        arena: &'src SourceArena,
        prefix: Option<&'b str>,
        local: &'b str,
        value: &'b str,
    ) -> Self {
        Self::new(
            prefix.map(|p| StrSpan::from_unallocated(arena, p)),
            StrSpan::from_unallocated(arena, local),
            StrSpan::from_unallocated(arena, value),
        )
    }

    /// Returns the name of the attribute.
    #[must_use]
    pub fn name(&self) -> &NodeName<'src> {
        &self.name
    }

    /// Returns the value of the attribute.
    #[must_use]
    pub fn value(&self) -> &StrSpan<'src> {
        &self.value
    }

    /// Returns the span of the attribute in the original source
    #[must_use]
    pub fn span(&self) -> &StrSpan<'src> {
        &self.span
    }
}

//
// Structural equality; source positions are ignored
impl PartialEq for NodeAttribute<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.value.as_str() == other.value.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_self_closing_classification() {
        let arena = SourceArena::new();
        let mut node = ElementNode::from_unallocated(&arena, None, "a");
        assert!(node.is_self_closing());

        node.set_content(&arena, "text");
        assert!(!node.is_self_closing());
    }

    #[test]
    fn test_whitespace_content_counts_as_empty() {
        let arena = SourceArena::new();
        let mut node = ElementNode::from_unallocated(&arena, None, "a");
        node.set_content(&arena, "  \t\n  ");
        assert!(node.content().is_none());
        assert!(node.is_self_closing());
    }

    #[test]
    fn test_children_clear_self_closing() {
        let arena = SourceArena::new();
        let mut node = ElementNode::from_unallocated(&arena, None, "a");
        node.push_child(ElementNode::from_unallocated(&arena, None, "b"));
        assert!(!node.is_self_closing());
        assert_eq!(node.children().len(), 1);
    }

    #[test]
    fn test_get_attribute_returns_last() {
        let arena = SourceArena::new();
        let mut node = ElementNode::from_unallocated(&arena, None, "a");
        node.push_attribute(NodeAttribute::from_unallocated(&arena, None, "id", "1"));
        node.push_attribute(NodeAttribute::from_unallocated(&arena, None, "id", "2"));

        let attr = node.get_attribute(None, "id").unwrap();
        assert_eq!(attr.value(), &"2");
    }

    #[test]
    fn test_structural_eq() {
        let arena = SourceArena::new();
        let mut a = ElementNode::from_unallocated(&arena, None, "a");
        a.push_attribute(NodeAttribute::from_unallocated(&arena, None, "id", "1"));

        let mut b = ElementNode::from_unallocated(&arena, None, "a");
        b.push_attribute(NodeAttribute::from_unallocated(&arena, None, "id", "1"));
        assert_eq!(a, b);

        b.push_attribute(NodeAttribute::from_unallocated(&arena, None, "id", "2"));
        assert_ne!(a, b);
    }
}
