//! The types of nodes that make up a parsed XML document.

mod name;
pub use name::*;

mod element;
pub use element::*;

mod declaration;
pub use declaration::*;

/// A parsed document. Can be either of:
/// - `Declaration` - the `<?xml ...?>` prolog wrapping the root element
/// - `Element` - a bare root element, for documents without a prolog
///
/// A document has at most one declaration, and always exactly one root element.
#[derive(Debug, Clone)]
pub enum XmlNode<'src> {
    /// The `<?xml ...?>` prolog and the root element it wraps.
    Declaration(DeclarationNode<'src>),

    /// A bare root element.
    Element(ElementNode<'src>),
}
impl<'src> XmlNode<'src> {
    /// Returns the root element of the document.
    #[must_use]
    pub fn root(&self) -> &ElementNode<'src> {
        match self {
            Self::Declaration(declaration) => &declaration.root,
            Self::Element(element) => element,
        }
    }
}

//
// Structural equality; source positions are ignored
impl PartialEq for XmlNode<'_> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Declaration(a), Self::Declaration(b)) => a == b,
            (Self::Element(a), Self::Element(b)) => a == b,
            _ => false,
        }
    }
}
