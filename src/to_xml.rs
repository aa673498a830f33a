//! XML pretty-printing module
//!
//! Use [`XmlNode::to_xml`] unless you need to write the XML to a file or other writer.
use crate::{ElementNode, XmlNode};
use std::io::Write;

const TAB: &str = "\t";

/// The line-break convention used for emitted breaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineBreak {
    /// A bare `\n`
    #[default]
    Lf,

    /// A `\r\n` pair
    CrLf,
}
impl LineBreak {
    /// Returns the break as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
        }
    }

    /// Infers the dominant line-break convention of the given text.
    ///
    /// Counts `\r\n` pairs against bare `\n` occurrences; CRLF wins only when
    /// it strictly outnumbers LF. Text without breaks defaults to LF.
    #[must_use]
    pub fn sniff(text: &str) -> Self {
        let crlf = text.matches("\r\n").count();
        let bare_lf = text.matches('\n').count() - crlf;

        if crlf > bare_lf { Self::CrLf } else { Self::Lf }
    }
}
impl std::fmt::Display for LineBreak {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The indentation and line-break policy for one render pass.
///
/// Computed once per format call and threaded through the renderer, so a
/// render is a pure function of the tree and the style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderStyle {
    /// The line break emitted between lines.
    pub line_break: LineBreak,

    /// The string repeated once per nesting depth to produce leading whitespace.
    pub indent: String,
}
impl RenderStyle {
    /// Creates a new style from a line break and an indent unit.
    #[must_use]
    pub fn new(line_break: LineBreak, indent: impl Into<String>) -> Self {
        Self {
            line_break,
            indent: indent.into(),
        }
    }
}
impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            line_break: LineBreak::Lf,
            indent: TAB.to_string(),
        }
    }
}

impl XmlNode<'_> {
    /// Create a formatted XML string from this document.
    ///
    /// # Errors
    /// Can fail if the rendered document is not valid UTF-8, which cannot
    /// happen for trees produced by the parser.
    ///
    /// # Example
    /// ```rust
    /// use xmlpretty::{RenderStyle, SourceArena, XmlNode};
    /// const SRC: &str = "<test><test2>test</test2></test>";
    ///
    /// let arena = SourceArena::new();
    /// let node = XmlNode::parse(&arena, SRC).unwrap();
    ///
    /// let formatted = node.to_xml(&RenderStyle::default()).unwrap();
    /// assert_eq!(formatted, "<test>\n\t<test2>test</test2>\n</test>");
    /// ```
    pub fn to_xml(&self, style: &RenderStyle) -> std::io::Result<String> {
        let mut buffer = vec![];
        write_xml(&mut buffer, self, style)?;

        let buffer = String::from_utf8(buffer).map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("Failed to convert to UTF-8: {e}"),
            )
        })?;
        Ok(buffer)
    }
}

/// Flatten a document as a formatted XML string using the given writer.
///
/// The emission rules, applied depth-first:
/// - Elements without text or children are self-closing: `<name ... />`
/// - Elements with children put each child on its own line, one indent deeper;
///   children win over text if a tree carries both
/// - Elements with only text keep it inline: `<name>text</name>`
/// - Attributes stay on the opening tag line regardless of length
///
/// # Errors
/// This function will return an error if the writer fails to write the XML string.
pub fn write_xml(
    writer: &mut dyn Write,
    node: &XmlNode<'_>,
    style: &RenderStyle,
) -> std::io::Result<()> {
    match node {
        XmlNode::Declaration(declaration) => {
            writer.write_all(b"<?xml")?;
            for attr in &declaration.attributes {
                write!(writer, " {}=\"{}\"", attr.name(), attr.value())?;
            }
            write!(writer, "?>{}", style.line_break)?;

            write_element(writer, &declaration.root, style, 0)
        }

        XmlNode::Element(element) => write_element(writer, element, style, 0),
    }
}

fn write_element(
    writer: &mut dyn Write,
    element: &ElementNode<'_>,
    style: &RenderStyle,
    depth: usize,
) -> std::io::Result<()> {
    write!(writer, "<{}", element.name())?;
    for attr in element.attributes() {
        write!(writer, " {}=\"{}\"", attr.name(), attr.value())?;
    }

    if !element.children().is_empty() {
        writer.write_all(b">")?;

        for child in element.children() {
            write_break(writer, style, depth + 1)?;
            write_element(writer, child, style, depth + 1)?;
        }

        write_break(writer, style, depth)?;
        write!(writer, "</{}>", element.name())
    } else if let Some(content) = element.content() {
        write!(writer, ">{content}</{}>", element.name())
    } else {
        writer.write_all(b" />")
    }
}

fn write_break(writer: &mut dyn Write, style: &RenderStyle, depth: usize) -> std::io::Result<()> {
    write!(writer, "{}", style.line_break)?;
    for _ in 0..depth {
        writer.write_all(style.indent.as_bytes())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{NodeAttribute, SourceArena};

    fn render(src: &str, style: &RenderStyle) -> String {
        let arena = SourceArena::new();
        let node = XmlNode::parse(&arena, src).unwrap();
        node.to_xml(style).unwrap()
    }

    #[test]
    fn test_self_closing_has_no_closing_tag() {
        let out = render("<root></root>", &RenderStyle::default());
        assert_eq!(out, "<root />");
    }

    #[test]
    fn test_content_stays_inline() {
        let out = render("<a><b>x</b></a>", &RenderStyle::default());
        assert_eq!(out, "<a>\n\t<b>x</b>\n</a>");
    }

    #[test]
    fn test_attributes_keep_insertion_order() {
        let out = render("<root id=\"123\" xm:class=\"test\" />", &RenderStyle::default());
        assert_eq!(out, "<root id=\"123\" xm:class=\"test\" />");
    }

    #[test]
    fn test_nested_children_indent_once_per_depth() {
        let out = render("<a><b><c /></b></a>", &RenderStyle::default());
        assert_eq!(out, "<a>\n\t<b>\n\t\t<c />\n\t</b>\n</a>");
    }

    #[test]
    fn test_siblings_joined_by_single_break() {
        let style = RenderStyle::new(LineBreak::Lf, "  ");
        let out = render("<a><b /><c /></a>", &style);
        assert_eq!(out, "<a>\n  <b />\n  <c />\n</a>");
    }

    #[test]
    fn test_declaration_on_its_own_line() {
        let out = render("<?xml version=\"1.0\"?><root/>", &RenderStyle::default());
        assert_eq!(out, "<?xml version=\"1.0\"?>\n<root />");
    }

    #[test]
    fn test_declaration_keeps_all_attributes() {
        let out = render(
            "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?><root/>",
            &RenderStyle::default(),
        );
        assert_eq!(
            out,
            "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n<root />"
        );
    }

    #[test]
    fn test_crlf_style_applies_to_every_break() {
        let style = RenderStyle::new(LineBreak::CrLf, "\t");
        let out = render("<?xml version=\"1.0\"?><a><b /><c>x</c></a>", &style);
        assert_eq!(
            out,
            "<?xml version=\"1.0\"?>\r\n<a>\r\n\t<b />\r\n\t<c>x</c>\r\n</a>"
        );
    }

    #[test]
    fn test_attribute_values_not_re_escaped() {
        let out = render("<a note=\"a &amp; b\">x &lt; y</a>", &RenderStyle::default());
        assert_eq!(out, "<a note=\"a &amp; b\">x &lt; y</a>");
    }

    #[test]
    fn test_indent_monotonicity() {
        let style = RenderStyle::new(LineBreak::Lf, "  ");
        let out = render("<a><b><c><d /></c></b></a>", &style);

        let mut last_depth = 0;
        for line in out.lines().skip(1) {
            let depth = (line.len() - line.trim_start().len()) / 2;
            if line.trim_start().starts_with("</") {
                assert_eq!(depth, last_depth - 1);
            } else {
                assert_eq!(depth, last_depth + 1);
            }
            last_depth = depth;
        }
    }

    #[test]
    fn test_sniff_prefers_majority_crlf() {
        assert_eq!(LineBreak::sniff("a\r\nb\r\nc\r\nd\ne"), LineBreak::CrLf);
        assert_eq!(LineBreak::sniff("a\nb\nc\nd\r\ne"), LineBreak::Lf);
    }

    #[test]
    fn test_sniff_ties_and_empty_default_to_lf() {
        assert_eq!(LineBreak::sniff("a\r\nb\nc"), LineBreak::Lf);
        assert_eq!(LineBreak::sniff(""), LineBreak::Lf);
    }

    #[test]
    fn test_write_xml_programmatic_tree() {
        let arena = SourceArena::new();
        let mut root = ElementNode::from_unallocated(&arena, None, "root");
        root.push_attribute(NodeAttribute::from_unallocated(&arena, None, "id", "123"));
        root.push_attribute(NodeAttribute::from_unallocated(
            &arena,
            Some("xm"),
            "class",
            "test",
        ));

        let mut output = Vec::new();
        write_xml(
            &mut output,
            &XmlNode::Element(root),
            &RenderStyle::default(),
        )
        .unwrap();

        let result = String::from_utf8(output).unwrap();
        assert_eq!(result, "<root id=\"123\" xm:class=\"test\" />");
    }
}
