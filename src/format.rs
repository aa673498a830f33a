//! Editor-facing formatting entry points.
//!
//! [`format_document`] is the whole pipeline: normalize options, sniff the
//! source's line-break convention, parse, render, and wrap the result as a
//! single full-document replacement edit. On failure the source is left
//! untouched and no edit is produced.
use crate::{
    LineBreak, RenderStyle, SourceArena, XmlNode,
    error::{ErrorContext, XmlError, XmlErrorKind, XmlResult},
    strspan::StrSpan,
};

const DEFAULT_TAB_SIZE: usize = 4;

/// Indentation preferences supplied by the editor.
///
/// Defaults to tab indentation with a width of 4. A zero `tab_size` is
/// silently coerced to the default; invalid options are never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    /// Indent with spaces instead of a tab character.
    pub insert_spaces: bool,

    /// Number of spaces per indentation level, when `insert_spaces` is set.
    pub tab_size: usize,
}
impl FormatOptions {
    /// Resolves the options into the indent unit repeated per nesting depth.
    #[must_use]
    pub fn indent_unit(&self) -> String {
        let width = if self.tab_size == 0 {
            DEFAULT_TAB_SIZE
        } else {
            self.tab_size
        };

        if self.insert_spaces {
            " ".repeat(width)
        } else {
            "\t".to_string()
        }
    }
}
impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            insert_spaces: false,
            tab_size: DEFAULT_TAB_SIZE,
        }
    }
}

/// A zero-based line/character position in a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    /// Zero-based line index.
    pub line: u32,

    /// Zero-based character offset within the line.
    pub character: u32,
}
impl Position {
    /// Creates a new position.
    #[must_use]
    pub fn new(line: u32, character: u32) -> Self {
        Self { line, character }
    }
}

/// A half-open span between two positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Range {
    /// The start position of the span.
    pub start: Position,

    /// The end position of the span.
    pub end: Position,
}
impl Range {
    /// Creates a new range.
    #[must_use]
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }
}

/// A single text-replacement instruction: replace `range` with `new_text`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEdit {
    /// The span of the original document to replace.
    pub range: Range,

    /// The replacement text.
    pub new_text: String,
}

/// Formats a whole XML document, returning a replacement edit covering it
/// entirely.
///
/// The line-break convention is sniffed from `source`; indentation comes from
/// `options`, falling back to the defaults when `None`.
///
/// # Errors
/// Returns a located error if the document is not well-formed; no edit is
/// produced on failure.
///
/// # Example
/// ```rust
/// use xmlpretty::format_document;
///
/// let edit = format_document("<a><b>x</b></a>", None).unwrap();
/// assert_eq!(edit.new_text, "<a>\n\t<b>x</b>\n</a>");
/// ```
pub fn format_document(source: &str, options: Option<FormatOptions>) -> XmlResult<TextEdit> {
    let options = options.unwrap_or_default();
    let style = RenderStyle::new(LineBreak::sniff(source), options.indent_unit());

    let arena = SourceArena::new();
    let node = XmlNode::parse(&arena, source)?;

    let new_text = node.to_xml(&style).map_err(|e| {
        XmlError::new(
            XmlErrorKind::Custom(format!("Failed to render document: {e}")),
            ErrorContext::new(source, StrSpan::default()),
        )
    })?;

    Ok(TextEdit {
        range: full_document_range(source),
        new_text,
    })
}

/// Formats the document containing the requested range.
///
/// The replacement is always regenerated for the entire document; the caller
/// is responsible for clipping the application of the edit to the requested
/// span. The returned edit covers the full document.
///
/// # Errors
/// Returns a located error if the document is not well-formed; no edit is
/// produced on failure.
pub fn format_range(
    source: &str,
    range: Range,
    options: Option<FormatOptions>,
) -> XmlResult<TextEdit> {
    let _ = range;
    format_document(source, options)
}

/// The range spanning the whole source, from the origin to the end of the
/// last line.
fn full_document_range(source: &str) -> Range {
    let mut line = 0u32;
    let mut last = source;

    let mut parts = source.split('\n');
    if let Some(first) = parts.next() {
        last = first;
        for part in parts {
            line += 1;
            last = part;
        }
    }

    let last = last.strip_suffix('\r').unwrap_or(last);
    let character = u32::try_from(last.chars().count()).unwrap_or(u32::MAX);

    Range::new(Position::default(), Position::new(line, character))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options_are_tabs_width_4() {
        let options = FormatOptions::default();
        assert!(!options.insert_spaces);
        assert_eq!(options.tab_size, 4);
        assert_eq!(options.indent_unit(), "\t");
    }

    #[test]
    fn test_zero_tab_size_coerced_to_default() {
        let options = FormatOptions {
            insert_spaces: true,
            tab_size: 0,
        };
        assert_eq!(options.indent_unit(), "    ");
    }

    #[test]
    fn test_space_indent_width() {
        let options = FormatOptions {
            insert_spaces: true,
            tab_size: 2,
        };
        assert_eq!(options.indent_unit(), "  ");
    }

    #[test]
    fn test_edit_covers_full_document() {
        let edit = format_document("<a>\n<b>x</b>\n</a>", None).unwrap();
        assert_eq!(edit.range.start, Position::new(0, 0));
        assert_eq!(edit.range.end, Position::new(2, 4));
    }

    #[test]
    fn test_edit_range_on_crlf_source() {
        let edit = format_document("<a>\r\n<b />\r\n</a>", None).unwrap();
        assert_eq!(edit.range.end, Position::new(2, 4));
    }

    #[test]
    fn test_format_range_regenerates_whole_document() {
        let source = "<a><b>x</b><c /></a>";
        let range = Range::new(Position::new(0, 3), Position::new(0, 11));

        let ranged = format_range(source, range, None).unwrap();
        let whole = format_document(source, None).unwrap();
        assert_eq!(ranged, whole);
    }

    #[test]
    fn test_sniffed_crlf_applied_to_output() {
        let source = "<a>\r\n<b />\r\n<c />\r\n<d>x</d>\n</a>";
        let edit = format_document(source, None).unwrap();
        assert_eq!(
            edit.new_text,
            "<a>\r\n\t<b />\r\n\t<c />\r\n\t<d>x</d>\r\n</a>"
        );
    }

    #[test]
    fn test_failure_produces_no_edit() {
        let result = format_document("<a><b></a>", None);
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_input_fails() {
        assert!(format_document("", None).is_err());
        assert!(format_document("   \n ", None).is_err());
    }
}
