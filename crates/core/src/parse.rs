//! HTML parsing and DOM navigation.
//!
//! This module provides the [`Document`] and [`Element`] types for parsing
//! HTML and querying the tree with CSS selectors. Parsing follows the HTML5
//! algorithm, so unclosed tags and other malformed markup are repaired rather
//! than rejected.
//!
//! # Example
//!
//! ```rust
//! use seolens_core::parse::Document;
//!
//! let html = r#"
//!     <html>
//!         <body>
//!             <h1>Title</h1>
//!             <p class="content">Paragraph</p>
//!         </body>
//!     </html>
//! "#;
//!
//! let doc = Document::parse(html);
//! let paragraphs = doc.select("p.content").unwrap();
//! assert_eq!(paragraphs.len(), 1);
//! ```

use scraper::{ElementRef, Html, Node, Selector};

use crate::{Result, SeoLensError};

/// Elements whose text content is never shown to a reader.
const HIDDEN_TEXT_ELEMENTS: [&str; 3] = ["script", "style", "template"];

/// Parsed with scripting enabled, so its children arrive as one raw text node.
const NOSCRIPT: &str = "noscript";

/// Represents a parsed HTML document.
///
/// # Example
///
/// ```rust
/// use seolens_core::parse::Document;
///
/// let html = "<html><head><title>Test</title></head><body><p>Hello</p></body></html>";
/// let doc = Document::parse(html);
/// assert_eq!(doc.title(), Some("Test".to_string()));
/// ```
pub struct Document {
    html: Html,
    /// Contents of each `<noscript>`, in document order, reparsed as markup.
    noscript: Vec<Html>,
}

impl Document {
    /// Parses HTML from a string.
    ///
    /// Never fails: the HTML5 tree builder recovers from any byte-valid
    /// input, so an empty or broken page produces a (possibly empty) tree.
    pub fn parse(html: &str) -> Self {
        let html = Html::parse_document(html);
        let noscript = html
            .root_element()
            .descendants()
            .filter_map(ElementRef::wrap)
            .filter(|el| el.value().name() == NOSCRIPT)
            .map(|el| Html::parse_fragment(&el.text().collect::<String>()))
            .collect();

        Self { html, noscript }
    }

    /// Selects elements using a CSS selector.
    ///
    /// # Errors
    ///
    /// Returns [`SeoLensError::HtmlParseError`] if the selector is invalid.
    ///
    /// # Example
    ///
    /// ```rust
    /// use seolens_core::parse::Document;
    ///
    /// let html = r#"<p class="content">First</p><p class="content">Second</p>"#;
    /// let doc = Document::parse(html);
    /// let elements = doc.select("p.content").unwrap();
    /// assert_eq!(elements.len(), 2);
    /// ```
    pub fn select(&'_ self, selector: &str) -> Result<Vec<Element<'_>>> {
        let sel = parse_selector(selector)?;
        Ok(self.html.select(&sel).map(|el| Element { element: el }).collect())
    }

    /// Selects matching elements of the document, followed by those found
    /// inside `<noscript>` blocks.
    pub fn select_including_noscript(&'_ self, selector: &str) -> Result<Vec<Element<'_>>> {
        let sel = parse_selector(selector)?;
        let fragments = self.noscript.iter().map(|fragment| fragment.root_element());

        Ok(std::iter::once(self.html.root_element())
            .chain(fragments)
            .flat_map(|root| root.select(&sel))
            .map(|el| Element { element: el })
            .collect())
    }

    /// Selects the first element in document order matching a CSS selector.
    pub fn select_first(&'_ self, selector: &str) -> Result<Option<Element<'_>>> {
        let sel = parse_selector(selector)?;
        Ok(self.html.select(&sel).next().map(|el| Element { element: el }))
    }

    /// Gets the untrimmed text of the first `<title>` element.
    pub fn title(&self) -> Option<String> {
        self.select_first("title").ok().flatten().map(|el| el.text())
    }

    /// Gets the visible text of the document.
    ///
    /// Text nodes inside `script`, `style` and `template` are skipped, and
    /// `<noscript>` contributes the text of its reparsed markup. Every
    /// remaining text node is trimmed, empty ones are dropped, and the rest
    /// are joined with single spaces.
    pub fn visible_text(&self) -> String {
        let mut parts = Vec::new();
        collect_visible_text(self.html.root_element(), &mut self.noscript.iter(), &mut parts);
        parts.join(" ")
    }
}

fn is_hidden(el: ElementRef<'_>) -> bool {
    el.ancestors()
        .filter_map(ElementRef::wrap)
        .any(|ancestor| HIDDEN_TEXT_ELEMENTS.contains(&ancestor.value().name()))
}

/// Walks `root` in document order. `noscript` must yield one fragment per
/// `<noscript>` element under `root`, in the same order.
fn collect_visible_text<'a>(
    root: ElementRef<'a>, noscript: &mut impl Iterator<Item = &'a Html>, parts: &mut Vec<&'a str>,
) {
    for node in root.descendants() {
        match node.value() {
            Node::Element(el) if el.name() == NOSCRIPT => {
                let fragment = noscript.next();
                let visible = ElementRef::wrap(node).is_some_and(|el| !is_hidden(el));
                if let Some(fragment) = fragment.filter(|_| visible) {
                    collect_visible_text(fragment.root_element(), &mut std::iter::empty(), parts);
                }
            }
            Node::Text(text) => {
                let Some(parent) = node.parent().and_then(ElementRef::wrap) else {
                    continue;
                };
                let parent_name = parent.value().name();
                if parent_name == NOSCRIPT || HIDDEN_TEXT_ELEMENTS.contains(&parent_name) || is_hidden(parent) {
                    continue;
                }

                let trimmed = text.trim();
                if !trimmed.is_empty() {
                    parts.push(trimmed);
                }
            }
            _ => {}
        }
    }
}

/// A wrapper around scraper's ElementRef.
///
/// # Example
///
/// ```rust
/// use seolens_core::parse::Document;
///
/// let html = r#"<a href="https://example.com">Link text</a>"#;
/// let doc = Document::parse(html);
/// let link = &doc.select("a").unwrap()[0];
///
/// assert_eq!(link.text(), "Link text");
/// assert_eq!(link.attr("href"), Some("https://example.com"));
/// ```
#[derive(Clone, Debug)]
pub struct Element<'a> {
    element: scraper::ElementRef<'a>,
}

impl<'a> Element<'a> {
    /// Gets the concatenation of all text nodes within this element.
    pub fn text(&self) -> String {
        self.element.text().collect()
    }

    /// Gets the value of an attribute, or `None` if it is not present.
    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.element.value().attr(name)
    }
}

fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| SeoLensError::HtmlParseError(format!("Invalid selector: {}", e)))
}
