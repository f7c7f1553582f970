//! Fetch a web page and extract its on-page SEO signals.
//!
//! ```rust
//! use seolens_core::{Document, KeywordConfig};
//!
//! let doc = Document::parse("<title>Foo</title><img src=a.png>");
//! let report = doc.extract_report(&KeywordConfig::default());
//! assert_eq!(report.title, "Foo");
//! assert_eq!(report.images_without_alt, 1);
//! ```

pub mod analyzer;
pub mod error;
pub mod extract;
#[cfg(feature = "fetch")]
pub mod fetch;
pub mod keywords;
pub mod parse;
pub mod report;

pub use analyzer::{Analyzer, AnalyzerConfig, AnalyzerConfigBuilder, analyze};
#[cfg(feature = "fetch")]
pub use analyzer::crawl_website;
pub use error::{Result, SeoLensError};
#[cfg(feature = "fetch")]
pub use fetch::{FetchConfig, fetch_file, fetch_robots, fetch_stdin, fetch_url};
pub use keywords::{Keyword, KeywordConfig, rank_keywords};
pub use parse::{Document, Element};
pub use report::{CrawlOutcome, OutputFormat, PageReport};
