//! ## xmlpretty
//! Zero-copy XML pretty-printer producing editor-ready text edits.
//!
//! Raw XML text goes in; a canonically re-indented, re-linebroken rendering
//! comes out, preserving element structure, attributes, and text content.
//! The output line-break convention is sniffed from the source itself, so
//! formatted text stays stylistically consistent with the document it came
//! from.
//!
//! The pipeline is parse-then-render: [`XmlNode::parse`] turns the source
//! into a typed tree borrowing from a [`SourceArena`], and
//! [`XmlNode::to_xml`] walks that tree with a [`RenderStyle`]. The
//! [`format_document`] entry point runs the whole pipeline and wraps the
//! result as a single [`TextEdit`] replacing the entire document.
//!
//! ```rust
//! use xmlpretty::{FormatOptions, format_document};
//!
//! let options = FormatOptions {
//!     insert_spaces: true,
//!     tab_size: 2,
//! };
//!
//! let edit = format_document("<a><b/><c/></a>", Some(options)).unwrap();
//! assert_eq!(edit.new_text, "<a>\n  <b />\n  <c />\n</a>");
//! ```
//!
//! Errors are designed to be human-readable, and carry the offending line
//! and its position in the source;
//! ```text
//! | </a>
//! = At 1:7
//! = Unclosed tag: b
//! ```
//!
//! Formatting is synchronous and pure; nothing is shared between calls, so
//! concurrent format requests are independent by construction.
#![warn(missing_docs)]

mod arena;
pub use arena::SourceArena;

mod strspan;
pub use strspan::{StrSpan, StringSpan};

pub mod error;
pub use error::{XmlError, XmlErrorKind, XmlResult};

mod node;
pub use node::*;

mod parser;
pub use parser::MAX_DEPTH;

mod to_xml;
pub use to_xml::{LineBreak, RenderStyle, write_xml};

mod format;
pub use format::{FormatOptions, Position, Range, TextEdit, format_document, format_range};
