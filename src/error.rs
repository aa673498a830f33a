//! Error handling for XML parsing and formatting
use super::{StrSpan, StringSpan};
use std::path::PathBuf;

/// A result type for XML formatting, which can be either a successful value or an error.
pub type XmlResult<T> = std::result::Result<T, XmlError>;

/// An error that occurred while parsing or formatting a document.
#[derive(Debug)]
pub struct XmlError {
    /// The context of the error
    pub context: Box<ErrorContext>,

    /// The kind of error that occurred
    pub kind: XmlErrorKind,
}
impl XmlError {
    /// Creates a new `XmlError`
    #[must_use]
    pub fn new(kind: XmlErrorKind, context: ErrorContext) -> Self {
        Self {
            context: Box::new(context),
            kind,
        }
    }

    /// Adds a path to the error context.
    #[must_use]
    pub fn with_path(mut self, path: PathBuf) -> Self {
        self.context.path = Some(path);
        self
    }

    /// Returns the row and column of the offending input, 1-based.
    ///
    /// Tokenizer errors carry their own position; everything else is located
    /// through the source span in the error context.
    #[must_use]
    pub fn position(&self) -> (usize, usize) {
        match &self.kind {
            XmlErrorKind::Xml(e) => {
                let pos = e.pos();
                (pos.row as usize, pos.col as usize)
            }
            _ => self.context.position(),
        }
    }
}
impl std::fmt::Display for XmlError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.context)?;

        for line in self.kind.to_string().lines() {
            writeln!(f, "= {line}")?;
        }
        Ok(())
    }
}
impl std::error::Error for XmlError {}

/// The kind of error that occurred while parsing or formatting a document.
#[derive(Debug, thiserror::Error)]
pub enum XmlErrorKind {
    /// Another error occurred while parsing the document
    #[error("{0}")]
    Custom(String),

    /// The XML declaration was not first
    #[error("The <?xml> declaration must appear at the start of the document")]
    DeclarationNotFirst,

    /// A tag in the document was not closed properly
    #[error("Unclosed tag: {0}")]
    UnclosedTag(String),

    /// File ended unexpectedly
    #[error("End of file reached unexpectedly")]
    UnexpectedEof,

    /// An element mixes a text run with child elements
    #[error("Element <{0}> mixes text and child elements; mixed content is not supported")]
    MixedContent(String),

    /// The document uses a construct the formatter does not carry through
    #[error("Unsupported construct: {0}")]
    Unsupported(&'static str),

    /// Element nesting exceeded the supported depth
    #[error("Document nesting exceeds the supported depth of {0}")]
    TooDeep(usize),

    /// XML tokenization failed
    #[error("XML parser error: {0}")]
    Xml(#[from] xmlparser::Error),

    /// The source string could not be allocated
    #[error("Allocation failed: {0}")]
    Allocation(bumpalo::AllocErr),
}

/// Context describing the error location in the source text.
#[derive(Debug, Clone)]
pub struct ErrorContext {
    /// The path to the file that was parsed, if available.
    pub path: Option<PathBuf>,

    /// Full source text of the document, for row/col calculation.
    pub source: String,

    /// Position of the error in the source text.
    pub span: StringSpan,
}
impl ErrorContext {
    /// Creates a new `ErrorContext` with the given source and span.
    #[must_use]
    pub fn new(source: &str, span: StrSpan) -> Self {
        Self {
            path: None,
            source: source.to_string(),
            span: span.into(),
        }
    }

    /// Returns the row and column of the error in the source text.
    #[must_use]
    pub fn position(&self) -> (usize, usize) {
        self.span.position(&self.source)
    }
}
impl std::fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let path = self.path.as_ref().map(|p| p.display());

        let span = self.span.as_ref();
        let line = span.split('\n').next().unwrap_or(span);

        let (row, col) = self.span.position(&self.source);

        if !line.is_empty() {
            writeln!(f, "| {line}")?;
        }

        if self.span.start() > 0 {
            write!(f, "= At ")?;

            if let Some(path) = path {
                write!(f, "{path}:")?;
            }

            writeln!(f, "{row}:{col}")?;
        } else if let Some(path) = path {
            writeln!(f, "= In {path}")?;
        }
        Ok(())
    }
}

/// Exit the parse loop with an `XmlError` located in the source.
///
/// `bail!(src, kind)` places the error at the end of the source;
/// `bail!(src, span, kind)` locates it at the given span;
/// `bail!(src, span, msg = ...)` builds a `Custom` kind from a format string.
macro_rules! bail {
    ($src:expr, $kind:expr) => {
        return Err($crate::error::XmlError::new(
            $kind,
            $crate::error::ErrorContext::new($src, $crate::StrSpan::end($src)),
        ))
    };

    ($src:expr, $span:expr, msg = $($arg:tt)+) => {
        return Err($crate::error::XmlError::new(
            $crate::error::XmlErrorKind::Custom(format!($($arg)+)),
            $crate::error::ErrorContext::new($src, $span.into()),
        ))
    };

    ($src:expr, $span:expr, $kind:expr) => {
        return Err($crate::error::XmlError::new(
            $kind,
            $crate::error::ErrorContext::new($src, $span.into()),
        ))
    };
}
pub(crate) use bail;
