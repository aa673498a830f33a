use super::{ElementNode, NodeAttribute};

/// The `<?xml ...?>` prolog and the root element it wraps.
///
/// Attributes keep their source order (`version`, then `encoding` and
/// `standalone` when present) and are re-emitted as space-separated
/// `name="value"` pairs.
#[derive(Debug, Clone)]
pub struct DeclarationNode<'src> {
    /// The attributes of the declaration, in source order.
    pub attributes: Vec<NodeAttribute<'src>>,

    /// The root element of the document.
    pub root: ElementNode<'src>,
}
impl<'src> DeclarationNode<'src> {
    pub(crate) fn new(attributes: Vec<NodeAttribute<'src>>, root: ElementNode<'src>) -> Self {
        Self { attributes, root }
    }
}

//
// Structural equality; source positions are ignored
impl PartialEq for DeclarationNode<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.attributes == other.attributes && self.root == other.root
    }
}

#[cfg(test)]
mod tests {
    use crate::{SourceArena, XmlNode};

    #[test]
    fn test_declaration_attribute_order() {
        let arena = SourceArena::new();
        let src = "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?><root />";
        let XmlNode::Declaration(declaration) = XmlNode::parse(&arena, src).unwrap() else {
            panic!("expected a declaration node");
        };

        let names: Vec<String> = declaration
            .attributes
            .iter()
            .map(|a| a.name().to_string())
            .collect();
        assert_eq!(names, ["version", "encoding", "standalone"]);
        assert_eq!(declaration.root.name(), "root");
    }

    #[test]
    fn test_standalone_value_round_trips() {
        let arena = SourceArena::new();
        let src = "<?xml version=\"1.0\" standalone=\"no\"?><root />";
        let XmlNode::Declaration(declaration) = XmlNode::parse(&arena, src).unwrap() else {
            panic!("expected a declaration node");
        };

        let standalone = declaration.attributes.last().unwrap();
        assert_eq!(standalone.value(), &"no");
    }
}
