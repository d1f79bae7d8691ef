//! ariadoc HTML Parser
//!
//! HTML5 parsing built on html5ever. Markup snippets from demo pages go in,
//! an [`ariadoc_dom::Document`] comes out; fragments get the usual
//! `html/head/body` wrapper so document-wide id lookups work on them.

mod parser;

pub use ariadoc_dom::Document;
pub use parser::HtmlParser;

/// Parse an HTML string into a Document
pub fn parse(html: &str) -> Document {
    HtmlParser::new().parse(html)
}

/// HTML input error
#[derive(Debug, thiserror::Error)]
pub enum HtmlError {
    #[error("Failed to read HTML input: {0}")]
    Io(#[from] std::io::Error),
}
