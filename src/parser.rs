//! Tokenizer-driven parsing of raw XML text into a document tree.
use crate::{
    ElementNode, NodeAttribute, NodeName, SourceArena, StrSpan, XmlNode,
    error::{ErrorContext, XmlError, XmlErrorKind, XmlResult, bail},
    node::DeclarationNode,
};
use xmlparser::{ElementEnd, Token};

/// Maximum element nesting the parser will accept.
///
/// Rendering recurses once per nesting level, so the cap keeps pathological
/// documents from exhausting the call stack. Deeper input fails with
/// [`XmlErrorKind::TooDeep`].
pub const MAX_DEPTH: usize = 128;

impl<'src> XmlNode<'src> {
    /// Parses a raw XML string into a document tree. The string will be allocated in the given arena.
    ///
    /// Comments and processing instructions are dropped; CDATA sections and
    /// DOCTYPE definitions are rejected. Elements mixing text with child
    /// elements are rejected rather than silently losing the text.
    ///
    /// # Errors
    /// Returns a located error if the XML is not well-formed
    ///
    /// # Example
    /// ```rust
    /// use xmlpretty::{SourceArena, XmlNode};
    ///
    /// let arena = SourceArena::new();
    /// let node = XmlNode::parse(&arena, "<test><test2>test</test2></test>").unwrap();
    /// assert_eq!(node.root().name(), "test");
    /// ```
    #[expect(clippy::too_many_lines, reason = "State machine; what did you expect")]
    pub fn parse(arena: &'src SourceArena, source: &str) -> XmlResult<Self> {
        let src: &'src str = match arena.try_alloc(source) {
            Ok(src) => src,
            Err(e) => {
                return Err(XmlError::new(
                    XmlErrorKind::Allocation(e),
                    ErrorContext::new("", StrSpan::default()),
                ));
            }
        };

        let mut tokenizer = xmlparser::Tokenizer::from(src);

        let mut state = ParserState::Prolog;
        let mut stack: Vec<ElementNode<'src>> = vec![];
        let mut declaration: Option<Vec<NodeAttribute<'src>>> = None;

        loop {
            // Get the next token
            let Some(next) = tokenizer.next() else {
                if state != ParserState::Epilog {
                    match stack.pop() {
                        Some(last) => bail!(
                            src,
                            *last.span(),
                            XmlErrorKind::UnclosedTag(last.name().to_string())
                        ),
                        None => bail!(src, XmlErrorKind::UnexpectedEof),
                    }
                }

                let Some(root) = stack.pop() else {
                    bail!(src, XmlErrorKind::UnexpectedEof);
                };

                return Ok(match declaration {
                    Some(attributes) => {
                        XmlNode::Declaration(DeclarationNode::new(attributes, root))
                    }
                    None => XmlNode::Element(root),
                });
            };
            let next = match next {
                Ok(token) => token,
                Err(e) => bail!(src, XmlErrorKind::Xml(e)),
            };

            //
            // At this point, next is significant.
            match state {
                ParserState::Prolog => match next {
                    Token::ElementStart {
                        prefix,
                        local,
                        span,
                    } => {
                        stack.push(element_from_spans(prefix, local, span));
                        state = ParserState::TagAttributes;
                    }

                    // Not preserved
                    Token::Comment { .. } | Token::ProcessingInstruction { .. } => {}

                    Token::Declaration {
                        version,
                        encoding,
                        standalone,
                        span,
                    } => {
                        if declaration.is_some() {
                            bail!(src, span, XmlErrorKind::DeclarationNotFirst);
                        }

                        let mut attributes = vec![NodeAttribute::new(
                            None,
                            StrSpan::from("version"),
                            version.into(),
                        )];
                        if let Some(encoding) = encoding {
                            attributes.push(NodeAttribute::new(
                                None,
                                StrSpan::from("encoding"),
                                encoding.into(),
                            ));
                        }
                        if let Some(standalone) = standalone {
                            // Re-emitted as yes/no so the output parses again
                            let value = if standalone { "yes" } else { "no" };
                            attributes.push(NodeAttribute::new(
                                None,
                                StrSpan::from("standalone"),
                                StrSpan::from(value),
                            ));
                        }

                        declaration = Some(attributes);
                    }

                    Token::Cdata { span, .. } => {
                        bail!(src, span, XmlErrorKind::Unsupported("CDATA section"))
                    }

                    Token::DtdStart { span, .. } | Token::EmptyDtd { span, .. } => {
                        bail!(src, span, XmlErrorKind::Unsupported("<!DOCTYPE>"))
                    }

                    Token::Text { text } => {
                        if !text.as_str().trim().is_empty() {
                            bail!(
                                src,
                                text,
                                msg = "Unexpected character data before the root element"
                            );
                        }
                    }

                    token => {
                        let span = token_span(&token);
                        bail!(
                            src,
                            span,
                            msg = "Unexpected {} in prolog section",
                            token_name(&token)
                        );
                    }
                },

                ParserState::TagAttributes => match next {
                    Token::Attribute {
                        prefix,
                        local,
                        value,
                        span,
                    } => {
                        let attr = NodeAttribute::new(opt_prefix(prefix), local.into(), value.into())
                            .with_span(span);
                        let Some(element) = stack.last_mut() else {
                            bail!(src, span, msg = "Bug; Cannot apply attribute; stack is empty!");
                        };

                        element.push_attribute(attr);
                    }

                    Token::ElementEnd {
                        end: ElementEnd::Open,
                        ..
                    } => {
                        state = ParserState::TagChildren;
                    }

                    Token::ElementEnd {
                        end: ElementEnd::Empty,
                        span,
                    } => {
                        let Some(element) = stack.pop() else {
                            bail!(src, span, msg = "Bug; Cannot close tag; stack is empty!");
                        };

                        match stack.last_mut() {
                            Some(parent) => {
                                parent.push_child(element);
                                state = ParserState::TagChildren;
                            }
                            None => {
                                stack.push(element);
                                state = ParserState::Epilog;
                            }
                        }
                    }

                    Token::Comment { .. } | Token::Text { .. } => {
                        // ignore
                    }

                    token => {
                        let span = token_span(&token);
                        bail!(
                            src,
                            span,
                            msg = "Unexpected {} in tag attributes",
                            token_name(&token)
                        );
                    }
                },

                ParserState::TagChildren => match next {
                    Token::ElementStart {
                        prefix,
                        local,
                        span,
                    } => {
                        if let Some(parent) = stack.last() {
                            if parent.content().is_some() {
                                bail!(
                                    src,
                                    span,
                                    XmlErrorKind::MixedContent(parent.name().to_string())
                                );
                            }
                        }
                        if stack.len() >= MAX_DEPTH {
                            bail!(src, span, XmlErrorKind::TooDeep(MAX_DEPTH));
                        }

                        stack.push(element_from_spans(prefix, local, span));
                        state = ParserState::TagAttributes;
                    }

                    Token::Text { text } => {
                        let Some(element) = stack.last_mut() else {
                            bail!(src, text, msg = "Bug; Cannot apply text; stack is empty!");
                        };

                        //
                        // Translate the reference to a source reference
                        let start = text.start();
                        let trimmed = src[start..text.end()].trim();
                        if trimmed.is_empty() {
                            continue;
                        }

                        if !element.children().is_empty() || element.content().is_some() {
                            bail!(
                                src,
                                text,
                                XmlErrorKind::MixedContent(element.name().to_string())
                            );
                        }

                        element.set_content_span(StrSpan {
                            text: trimmed,
                            start,
                        });
                    }

                    Token::ElementEnd {
                        end: ElementEnd::Close(prefix, local),
                        span,
                    } => {
                        let Some(element) = stack.pop() else {
                            bail!(src, span, msg = "Bug; Cannot close tag; stack is empty!");
                        };

                        let name = NodeName::new(opt_prefix(prefix), local.into());
                        if element.name() != &name {
                            bail!(
                                src,
                                span,
                                XmlErrorKind::UnclosedTag(element.name().to_string())
                            );
                        }

                        match stack.last_mut() {
                            Some(parent) => {
                                if parent.content().is_some() {
                                    bail!(
                                        src,
                                        span,
                                        XmlErrorKind::MixedContent(parent.name().to_string())
                                    );
                                }

                                parent.push_child(element);
                                state = ParserState::TagChildren;
                            }
                            None => {
                                stack.push(element);
                                state = ParserState::Epilog;
                            }
                        }
                    }

                    // Not preserved
                    Token::Comment { .. } | Token::ProcessingInstruction { .. } => {}

                    Token::Cdata { span, .. } => {
                        bail!(src, span, XmlErrorKind::Unsupported("CDATA section"))
                    }

                    token => {
                        let span = token_span(&token);
                        bail!(
                            src,
                            span,
                            msg = "Unexpected {} inside tag",
                            token_name(&token)
                        );
                    }
                },

                ParserState::Epilog => match next {
                    // Not preserved
                    Token::Comment { .. } | Token::ProcessingInstruction { .. } => {}

                    Token::Text { text } => {
                        if !text.as_str().trim().is_empty() {
                            bail!(
                                src,
                                text,
                                msg = "Unexpected character data after the root element"
                            );
                        }
                    }

                    token => {
                        let span = token_span(&token);
                        bail!(
                            src,
                            span,
                            msg = "Unexpected {} after the root element",
                            token_name(&token)
                        );
                    }
                },
            }
        }
    }
}

#[derive(PartialEq, Debug)]
enum ParserState {
    Prolog,
    TagAttributes,
    TagChildren,
    Epilog,
}

fn element_from_spans<'src>(
    prefix: xmlparser::StrSpan<'src>,
    local: xmlparser::StrSpan<'src>,
    span: xmlparser::StrSpan<'src>,
) -> ElementNode<'src> {
    ElementNode::new(opt_prefix(prefix), local.into()).with_span(span)
}

fn opt_prefix(prefix: xmlparser::StrSpan<'_>) -> Option<StrSpan<'_>> {
    if prefix.as_str().is_empty() {
        None
    } else {
        Some(prefix.into())
    }
}

fn token_name(token: &Token<'_>) -> &'static str {
    match token {
        Token::Declaration { .. } => "XML declaration",
        Token::ProcessingInstruction { .. } => "processing instruction",
        Token::Comment { .. } => "comment",
        Token::DtdStart { .. } | Token::EmptyDtd { .. } => "DTD",
        Token::EntityDeclaration { .. } => "entity declaration",
        Token::DtdEnd { .. } => "DTD end",
        Token::ElementStart { .. } => "element start",
        Token::Attribute { .. } => "attribute",
        Token::ElementEnd { .. } => "element end",
        Token::Text { .. } => "text",
        Token::Cdata { .. } => "CDATA section",
    }
}

fn token_span<'src>(token: &Token<'src>) -> StrSpan<'src> {
    let span = match token {
        Token::Declaration { span, .. }
        | Token::ProcessingInstruction { span, .. }
        | Token::Comment { span, .. }
        | Token::DtdStart { span, .. }
        | Token::EmptyDtd { span, .. }
        | Token::EntityDeclaration { span, .. }
        | Token::DtdEnd { span }
        | Token::ElementStart { span, .. }
        | Token::Attribute { span, .. }
        | Token::ElementEnd { span, .. }
        | Token::Cdata { span, .. } => *span,
        Token::Text { text } => *text,
    };
    span.into()
}
