//! HTML builder
//!
//! Fluent API for building markup fragments. Text and attribute values are
//! always escaped; only [`HtmlBuilder::raw`] writes verbatim.

use html_escaper::HtmlEscaper;
use std::fmt::{self, Write};

/// Displays its contents HTML-escaped
struct Escaped<'a>(&'a str);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(HtmlEscaper(f), "{}", self.0)
    }
}

/// Attribute list. An empty value renders as a bare boolean attribute.
pub type Attrs<'a> = &'a [(&'a str, &'a str)];

#[derive(Debug, Default)]
pub struct HtmlBuilder {
    buf: String,
}

impl HtmlBuilder {
    pub fn new() -> Self {
        Self {
            buf: String::with_capacity(1024),
        }
    }

    // === Tags ===

    /// `<tag attrs...>`
    pub fn open(&mut self, tag: &str, attrs: Attrs<'_>) -> &mut Self {
        self.buf.push('<');
        self.buf.push_str(tag);
        for (name, value) in attrs {
            if value.is_empty() {
                let _ = write!(self.buf, " {name}");
            } else {
                let _ = write!(self.buf, " {name}=\"{}\"", Escaped(value));
            }
        }
        self.buf.push('>');
        self
    }

    pub fn close(&mut self, tag: &str) -> &mut Self {
        let _ = write!(self.buf, "</{tag}>");
        self
    }

    /// Element holding only escaped text
    pub fn element(&mut self, tag: &str, attrs: Attrs<'_>, text: &str) -> &mut Self {
        self.open(tag, attrs).text(text).close(tag)
    }

    /// Element without a closing tag (`img`, `meta`, ...)
    pub fn void(&mut self, tag: &str, attrs: Attrs<'_>) -> &mut Self {
        self.open(tag, attrs)
    }

    // === Content ===

    pub fn text(&mut self, s: &str) -> &mut Self {
        let _ = write!(self.buf, "{}", Escaped(s));
        self
    }

    /// Append pre-rendered markup
    pub fn raw(&mut self, markup: &str) -> &mut Self {
        self.buf.push_str(markup);
        self
    }

    pub fn newline(&mut self) -> &mut Self {
        self.buf.push('\n');
        self
    }

    // === Output ===

    pub fn build(&mut self) -> String {
        std::mem::take(&mut self.buf)
    }
}

/// `hidden` when `hide`, else nothing
pub fn hidden_if(hide: bool) -> Option<(&'static str, &'static str)> {
    hide.then_some(("hidden", ""))
}
