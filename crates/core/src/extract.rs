//! SEO signal extraction from a parsed [`Document`].
//!
//! Every field is looked up independently: a missing element only affects
//! its own field, which falls back to a fixed sentinel string.

use crate::Document;
use crate::keywords::{Keyword, KeywordConfig, join_keywords, rank_keywords};
use crate::report::PageReport;

pub const NO_TITLE: &str = "No title found";
pub const NO_META_DESCRIPTION: &str = "No meta description found";
pub const NO_META_KEYWORDS: &str = "No meta keywords found";
pub const NO_CANONICAL: &str = "No canonical link found";
pub const NO_VIEWPORT: &str = "No viewport meta found";
pub const NO_H1: &str = "No H1 tag found";
pub const NO_KEYWORDS: &str = "No keywords extracted";

impl Document {
    /// Trimmed text of the first `<title>` element.
    pub fn extract_title(&self) -> Option<String> {
        self.title().map(|t| t.trim().to_string())
    }

    /// Trimmed text of the first `<h1>` element.
    pub fn extract_h1(&self) -> Option<String> {
        self.select_first("h1").ok().flatten().map(|el| el.text().trim().to_string())
    }

    /// Trimmed `content` of the first `<meta>` whose `name` contains
    /// `pattern`, compared case-insensitively.
    ///
    /// Only the first matching element is considered; if it lacks a
    /// `content` attribute the result is `None` even when a later element
    /// would have one.
    pub fn extract_meta_content(&self, pattern: &str) -> Option<String> {
        let needle = pattern.to_lowercase();
        let elements = self.select("meta[name]").ok()?;
        let meta = elements
            .iter()
            .find(|el| el.attr("name").is_some_and(|name| name.to_lowercase().contains(&needle)))?;

        meta.attr("content").map(|content| content.trim().to_string())
    }

    /// `href` of the first `<link>` whose `rel` contains `canonical`,
    /// compared case-insensitively. The value is returned as written.
    pub fn extract_canonical(&self) -> Option<String> {
        let elements = self.select("link[rel]").ok()?;
        let link = elements
            .iter()
            .find(|el| el.attr("rel").is_some_and(|rel| rel.to_lowercase().contains("canonical")))?;

        link.attr("href").map(str::to_string)
    }

    /// Number of `<img>` elements, including those inside `<noscript>`, whose
    /// `alt` is missing or blank.
    pub fn count_images_without_alt(&self) -> usize {
        self.select_including_noscript("img")
            .map(|images| {
                images
                    .iter()
                    .filter(|img| img.attr("alt").is_none_or(|alt| alt.trim().is_empty()))
                    .count()
            })
            .unwrap_or(0)
    }

    /// Most frequent terms of the visible text.
    pub fn extract_keywords(&self, config: &KeywordConfig) -> Vec<Keyword> {
        rank_keywords(&self.visible_text(), config)
    }

    /// Extract every field at once, substituting sentinels for absent markup.
    pub fn extract_report(&self, config: &KeywordConfig) -> PageReport {
        PageReport {
            title: self.extract_title().unwrap_or_else(|| NO_TITLE.to_string()),
            meta_description: self
                .extract_meta_content("description")
                .unwrap_or_else(|| NO_META_DESCRIPTION.to_string()),
            meta_keywords: self
                .extract_meta_content("keywords")
                .unwrap_or_else(|| NO_META_KEYWORDS.to_string()),
            canonical: self.extract_canonical().unwrap_or_else(|| NO_CANONICAL.to_string()),
            viewport: self
                .extract_meta_content("viewport")
                .unwrap_or_else(|| NO_VIEWPORT.to_string()),
            h1: self.extract_h1().unwrap_or_else(|| NO_H1.to_string()),
            images_without_alt: self.count_images_without_alt(),
            keywords: join_keywords(&self.extract_keywords(config)).unwrap_or_else(|| NO_KEYWORDS.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_PAGE: &str = r#"
        <!DOCTYPE html>
        <html lang="en">
        <head>
            <title>  Widgets for Everyone  </title>
            <meta name="Description" content="  The best widgets online. ">
            <meta name="keywords" content="widgets, gadgets">
            <meta name="viewport" content="width=device-width, initial-scale=1">
            <link rel="stylesheet" href="/style.css">
            <link rel="Canonical" href="https://example.com/widgets ">
        </head>
        <body>
            <h1>
                Widget Catalogue
            </h1>
            <img src="a.png" alt="A widget">
            <img src="b.png">
            <p>Widgets widgets widgets and gadgets.</p>
        </body>
        </html>
    "#;

    #[test]
    fn test_extract_full_report() {
        let doc = Document::parse(FULL_PAGE);
        let report = doc.extract_report(&KeywordConfig::default());

        assert_eq!(report.title, "Widgets for Everyone");
        assert_eq!(report.meta_description, "The best widgets online.");
        assert_eq!(report.meta_keywords, "widgets, gadgets");
        assert_eq!(report.viewport, "width=device-width, initial-scale=1");
        assert_eq!(report.canonical, "https://example.com/widgets ");
        assert_eq!(report.h1, "Widget Catalogue");
        assert_eq!(report.images_without_alt, 1);
        assert_eq!(report.keywords, "widgets, everyone, widget, catalogue, gadgets");
    }

    #[test]
    fn test_empty_page_uses_sentinels() {
        let doc = Document::parse("<html><body><p>a b c</p></body></html>");
        let report = doc.extract_report(&KeywordConfig::default());

        assert_eq!(report.title, NO_TITLE);
        assert_eq!(report.meta_description, NO_META_DESCRIPTION);
        assert_eq!(report.meta_keywords, NO_META_KEYWORDS);
        assert_eq!(report.canonical, NO_CANONICAL);
        assert_eq!(report.viewport, NO_VIEWPORT);
        assert_eq!(report.h1, NO_H1);
        assert_eq!(report.images_without_alt, 0);
        assert_eq!(report.keywords, NO_KEYWORDS);
    }

    #[test]
    fn test_title_simple() {
        let doc = Document::parse("<title>Foo</title>");
        assert_eq!(doc.extract_title(), Some("Foo".to_string()));
    }

    #[test]
    fn test_meta_name_substring_match() {
        let doc = Document::parse(r#"<meta name="og:DESCRIPTION" content="Open graph">"#);
        assert_eq!(doc.extract_meta_content("description"), Some("Open graph".to_string()));
    }

    #[test]
    fn test_meta_without_content() {
        let html = r#"
            <meta name="description">
            <meta name="description" content="Second">
        "#;
        let doc = Document::parse(html);
        assert_eq!(doc.extract_meta_content("description"), None);
    }

    #[test]
    fn test_canonical_without_href() {
        let doc = Document::parse(r#"<link rel="canonical">"#);
        assert_eq!(doc.extract_canonical(), None);
    }

    #[test]
    fn test_canonical_in_multi_valued_rel() {
        let doc = Document::parse(r#"<link rel="alternate canonical" href="/c">"#);
        assert_eq!(doc.extract_canonical(), Some("/c".to_string()));
    }

    #[test]
    fn test_images_without_alt() {
        let html = r#"<img src="1.png"><img src="2.png"><img src="3.png" alt="">"#;
        let doc = Document::parse(html);
        assert_eq!(doc.count_images_without_alt(), 3);
    }

    #[test]
    fn test_whitespace_alt_counts_as_missing() {
        let html = r#"<img src="1.png" alt="   "><img src="2.png" alt="Logo">"#;
        let doc = Document::parse(html);
        assert_eq!(doc.count_images_without_alt(), 1);
    }

    #[test]
    fn test_script_text_is_not_a_keyword() {
        let html = r#"
            <body>
                <script>function trackVisitor() { analytics.push(visitor); }</script>
                <style>.headline { font-weight: bold; }</style>
                <p>Gardening tips</p>
            </body>
        "#;
        let doc = Document::parse(html);
        let report = doc.extract_report(&KeywordConfig::default());
        assert_eq!(report.keywords, "gardening, tips");
    }

    #[test]
    fn test_noscript_markup_is_not_a_keyword() {
        let html = r#"
            <body>
                <noscript><img height="1" width="1" style="display:none"
                    src="https://www.facebook.com/tr?id=1&ev=PageView&noscript=1"/></noscript>
                <p>Gardening tips</p>
            </body>
        "#;
        let doc = Document::parse(html);
        let report = doc.extract_report(&KeywordConfig::default());

        assert_eq!(report.keywords, "gardening, tips");
        assert_eq!(report.images_without_alt, 1);
    }

    #[test]
    fn test_noscript_text_counts_as_keywords() {
        let html = r#"<noscript><p>Please enable scripts</p></noscript><p>Please</p>"#;
        let doc = Document::parse(html);
        let report = doc.extract_report(&KeywordConfig::default());
        assert_eq!(report.keywords, "please, enable, scripts");
    }

    #[test]
    fn test_extraction_is_repeatable() {
        let doc = Document::parse(FULL_PAGE);
        let config = KeywordConfig::default();
        assert_eq!(doc.extract_report(&config), doc.extract_report(&config));
    }
}
