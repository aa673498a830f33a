//! XML Formatter Example
//!
//! This example demonstrates how to format an XML document into a replacement
//! edit using the `xmlpretty` crate.
//!
//! It also shows that the output follows the line-break convention of the
//! source text rather than the platform's.
use xmlpretty::{FormatOptions, format_document};

const SRC: &str = "<?xml version=\"1.0\"?><library>\r\n<shelf id=\"a\"><book>The Rust Programming Language</book>\r\n<book>The C Programming Language</book></shelf><shelf id=\"b\"/></library>";

fn main() {
    //
    // Indentation comes from the editor's configuration.
    // Passing `None` falls back to tab indentation with a width of 4.
    let options = FormatOptions {
        insert_spaces: true,
        tab_size: 2,
    };

    //
    // The edit covers the entire original document; an editor would apply it
    // atomically, replacing the old text with `new_text`.
    //
    // The source above is CRLF-dominant, so every emitted break is CRLF too.
    //
    // If an error occurs, the error message is designed to be human-readable;
    //      | </a>
    //      = At 1:7
    //      = Unclosed tag: b
    match format_document(SRC, Some(options)) {
        Ok(edit) => println!("{}", edit.new_text),
        Err(e) => eprintln!("{e}"),
    }
}
