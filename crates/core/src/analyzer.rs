//! Main page analysis API.
//!
//! This module provides the primary entry point, the [`Analyzer`] struct,
//! along with the convenience functions [`analyze`] and [`crawl_website`].
//!
//! # Example
//!
//! ```rust
//! use seolens_core::analyzer::analyze;
//!
//! let report = analyze("<html><head><title>Foo</title></head></html>");
//! assert_eq!(report.title, "Foo");
//! assert_eq!(report.h1, "No H1 tag found");
//! ```

use crate::keywords::KeywordConfig;
use crate::parse::Document;
use crate::report::PageReport;

#[cfg(feature = "fetch")]
use crate::{
    Result,
    fetch::{FetchConfig, fetch_url},
    report::CrawlOutcome,
};

/// Configuration for the [`Analyzer`].
///
/// # Example
///
/// ```rust
/// use seolens_core::AnalyzerConfig;
///
/// let config = AnalyzerConfig::builder()
///     .timeout(5)
///     .max_keywords(20)
///     .build();
/// assert_eq!(config.keywords.max_keywords, 20);
/// ```
#[derive(Debug, Clone, Default)]
pub struct AnalyzerConfig {
    /// HTTP settings for the page request.
    #[cfg(feature = "fetch")]
    pub fetch: FetchConfig,

    /// Keyword ranking thresholds.
    pub keywords: KeywordConfig,
}

impl AnalyzerConfig {
    /// Creates a new builder for AnalyzerConfig.
    pub fn builder() -> AnalyzerConfigBuilder {
        AnalyzerConfigBuilder::new()
    }
}

/// Builder for AnalyzerConfig.
pub struct AnalyzerConfigBuilder {
    config: AnalyzerConfig,
}

impl AnalyzerConfigBuilder {
    /// Creates a new builder with default values.
    pub fn new() -> Self {
        Self { config: AnalyzerConfig::default() }
    }

    /// Sets the request timeout in seconds.
    #[cfg(feature = "fetch")]
    pub fn timeout(mut self, secs: u64) -> Self {
        self.config.fetch.timeout = secs;
        self
    }

    /// Sets the User-Agent header.
    #[cfg(feature = "fetch")]
    pub fn user_agent(mut self, value: impl Into<String>) -> Self {
        self.config.fetch.user_agent = value.into();
        self
    }

    /// Sets the minimum keyword length in characters.
    pub fn min_keyword_length(mut self, value: usize) -> Self {
        self.config.keywords.min_length = value;
        self
    }

    /// Sets how many keywords are reported.
    pub fn max_keywords(mut self, value: usize) -> Self {
        self.config.keywords.max_keywords = value;
        self
    }

    /// Builds the config.
    pub fn build(self) -> AnalyzerConfig {
        self.config
    }
}

impl Default for AnalyzerConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Fetches pages and turns them into [`PageReport`]s.
///
/// An Analyzer holds only immutable configuration, so one instance can be
/// shared across concurrent requests.
///
/// # Example
///
/// ```rust
/// use seolens_core::Analyzer;
///
/// let analyzer = Analyzer::new();
/// let report = analyzer.analyze_html("<h1> Welcome </h1>");
/// assert_eq!(report.h1, "Welcome");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    config: AnalyzerConfig,
}

impl Analyzer {
    /// Creates a new Analyzer with default settings.
    pub fn new() -> Self {
        Self { config: AnalyzerConfig::default() }
    }

    /// Creates a new Analyzer with a custom configuration.
    pub fn with_config(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Parses HTML and extracts a report. Never fails.
    pub fn analyze_html(&self, html: &str) -> PageReport {
        let doc = Document::parse(html);
        doc.extract_report(&self.config.keywords)
    }

    /// Fetches `url` and extracts a report.
    ///
    /// # Errors
    ///
    /// Returns the fetch error (invalid URL, network failure, timeout or
    /// non-2xx status). No partial report is produced.
    #[cfg(feature = "fetch")]
    pub async fn fetch_and_analyze(&self, url: &str) -> Result<PageReport> {
        let html = fetch_url(url, &self.config.fetch).await?;
        Ok(self.analyze_html(&html))
    }

    /// Fetches and analyzes `url`, collapsing any failure into
    /// [`CrawlOutcome::Error`] with the error's message.
    #[cfg(feature = "fetch")]
    pub async fn crawl(&self, url: &str) -> CrawlOutcome {
        match self.fetch_and_analyze(url).await {
            Ok(report) => CrawlOutcome::Success(report),
            Err(e) => {
                tracing::warn!(url, error = %e, "crawl failed");
                CrawlOutcome::error(e)
            }
        }
    }
}

/// Analyzes an HTML string with default settings.
pub fn analyze(html: &str) -> PageReport {
    Analyzer::new().analyze_html(html)
}

/// Fetches and analyzes a URL with default settings.
#[cfg(feature = "fetch")]
pub async fn crawl_website(url: &str) -> CrawlOutcome {
    Analyzer::new().crawl(url).await
}
