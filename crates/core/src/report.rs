//! Report types returned by the analyzer, and their output formats.
//!
//! [`PageReport`] holds the extracted signals of one page. [`CrawlOutcome`]
//! wraps it with the `status` tag used on the wire: a success carries every
//! report field, an error carries only a message.

use serde::Serialize;

use crate::Result;

/// Output format options for rendering a [`CrawlOutcome`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Aligned `label: value` lines for terminals.
    Text,
    /// Flat JSON object, identical to the HTTP API response.
    Json,
}

/// SEO signals extracted from a single page.
///
/// Every string field holds either the extracted value or a fixed sentinel
/// such as `"No title found"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageReport {
    pub title: String,
    pub meta_description: String,
    pub meta_keywords: String,
    pub canonical: String,
    pub viewport: String,
    pub h1: String,
    /// Images whose `alt` attribute is missing or blank.
    pub images_without_alt: usize,
    /// Up to ten most frequent terms, comma-and-space separated.
    pub keywords: String,
}

/// Result of crawling one URL, tagged by `status`.
///
/// ```rust
/// use seolens_core::CrawlOutcome;
///
/// let outcome = CrawlOutcome::error("No URL provided");
/// assert_eq!(
///     outcome.to_json().unwrap(),
///     serde_json::json!({"status": "error", "message": "No URL provided"})
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum CrawlOutcome {
    Success(PageReport),
    Error { message: String },
}

impl CrawlOutcome {
    /// Builds an error outcome from anything displayable.
    pub fn error(message: impl ToString) -> Self {
        Self::Error { message: message.to_string() }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// The report, if the crawl succeeded.
    pub fn report(&self) -> Option<&PageReport> {
        match self {
            Self::Success(report) => Some(report),
            Self::Error { .. } => None,
        }
    }

    /// Renders the outcome in the requested format.
    pub fn to_format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(self.to_text()),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
        }
    }

    /// Gets the outcome as a JSON value.
    pub fn to_json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Gets the outcome as aligned plain text lines.
    pub fn to_text(&self) -> String {
        match self {
            Self::Success(report) => report.to_text(),
            Self::Error { message } => format!("{:<20} error\n{:<20} {}\n", "Status:", "Message:", message),
        }
    }
}

impl From<PageReport> for CrawlOutcome {
    fn from(report: PageReport) -> Self {
        Self::Success(report)
    }
}

impl PageReport {
    /// Gets the report as aligned plain text lines.
    pub fn to_text(&self) -> String {
        let rows = [
            ("Title:", self.title.clone()),
            ("Meta description:", self.meta_description.clone()),
            ("Meta keywords:", self.meta_keywords.clone()),
            ("Canonical:", self.canonical.clone()),
            ("Viewport:", self.viewport.clone()),
            ("H1:", self.h1.clone()),
            ("Images without alt:", self.images_without_alt.to_string()),
            ("Keywords:", self.keywords.clone()),
        ];

        let mut output = String::new();
        for (label, value) in rows {
            output.push_str(&format!("{:<20} {}\n", label, value));
        }
        output
    }
}
